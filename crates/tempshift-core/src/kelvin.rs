//! Color temperature lookup table
//!
//! Maps a fixed set of color temperatures in Kelvin to the RGB multipliers of
//! a blackbody light source at that temperature, with white at 6500K close to
//! (255, 255, 255). The table is only ever iterated by the converter; `lookup`
//! exists for callers that already hold a known table temperature.

/// RGB multiplier triple for one color temperature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Multiplier {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Multiplier {
    /// Multiplier that leaves every channel unchanged
    pub const IDENTITY: Multiplier = Multiplier::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Per-channel scale factors in 0.0-1.0
    pub fn gains(&self) -> [f32; 3] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        ]
    }
}

impl From<(u8, u8, u8)> for Multiplier {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

/// One row of the Kelvin table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KelvinEntry {
    /// Color temperature in Kelvin
    pub temperature: u32,
    pub multiplier: Multiplier,
}

const fn entry(temperature: u32, r: u8, g: u8, b: u8) -> KelvinEntry {
    KelvinEntry {
        temperature,
        multiplier: Multiplier::new(r, g, b),
    }
}

/// Number of entries in the table
pub const TABLE_LEN: usize = 19;

static KELVIN_TABLE: [KelvinEntry; TABLE_LEN] = [
    entry(1000, 255, 56, 0),
    entry(1500, 255, 109, 0),
    entry(2000, 255, 137, 18),
    entry(2500, 255, 161, 72),
    entry(3000, 255, 180, 107),
    entry(3500, 255, 196, 137),
    entry(4000, 255, 209, 163),
    entry(4500, 255, 219, 186),
    entry(5000, 255, 228, 206),
    entry(5500, 255, 236, 224),
    entry(6000, 255, 243, 239),
    entry(6500, 255, 249, 253),
    entry(7000, 245, 243, 255),
    entry(7500, 235, 238, 255),
    entry(8000, 227, 233, 255),
    entry(8500, 220, 229, 255),
    entry(9000, 214, 225, 255),
    entry(9500, 208, 222, 255),
    entry(10000, 204, 219, 255),
];

/// All table entries, ordered from 1000K to 10000K
pub fn entries() -> &'static [KelvinEntry] {
    &KELVIN_TABLE
}

/// Table temperatures in order
pub fn temperatures() -> impl Iterator<Item = u32> {
    KELVIN_TABLE.iter().map(|e| e.temperature)
}

/// Find the multiplier for a temperature, if the table has one
pub fn try_lookup(temperature: u32) -> Option<Multiplier> {
    KELVIN_TABLE
        .iter()
        .find(|e| e.temperature == temperature)
        .map(|e| e.multiplier)
}

/// Multiplier for a table temperature
///
/// # Panics
/// If `temperature` is not one of the table temperatures. Use [`try_lookup`]
/// for values that come from user input.
pub fn lookup(temperature: u32) -> Multiplier {
    match try_lookup(temperature) {
        Some(multiplier) => multiplier,
        None => panic!("{}K is not in the Kelvin table", temperature),
    }
}
