//! Temperature list parsing for `--only`.

use tempshift_core::kelvin::{self, KelvinEntry};
use tempshift_core::ConvertError;

/// Parse a comma-separated list of table temperatures, e.g. "2000,6500K".
///
/// A trailing `K`/`k` is accepted. Duplicates are dropped and the result is
/// returned in table order.
pub fn parse_temperatures(list: &str) -> Result<Vec<KelvinEntry>, String> {
    let mut requested = Vec::new();

    for part in list.split(',') {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }
        let digits = part.trim_end_matches(['K', 'k']);
        let temperature = digits
            .parse::<u32>()
            .map_err(|_| format!("Invalid temperature: {}", part))?;
        if kelvin::try_lookup(temperature).is_none() {
            return Err(ConvertError::UnknownTemperature(temperature).to_string());
        }
        requested.push(temperature);
    }

    if requested.is_empty() {
        return Err(format!("No temperatures given in: {:?}", list));
    }

    Ok(kelvin::entries()
        .iter()
        .filter(|e| requested.contains(&e.temperature))
        .copied()
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temps(entries: &[KelvinEntry]) -> Vec<u32> {
        entries.iter().map(|e| e.temperature).collect()
    }

    #[test]
    fn test_parse_temperatures() {
        let entries = parse_temperatures("6500,1000").unwrap();
        assert_eq!(temps(&entries), vec![1000, 6500]);
        assert_eq!(entries[0].multiplier, kelvin::lookup(1000));
    }

    #[test]
    fn test_parse_temperatures_suffix_and_spaces() {
        let entries = parse_temperatures(" 2000K, 9500k ,").unwrap();
        assert_eq!(temps(&entries), vec![2000, 9500]);
    }

    #[test]
    fn test_parse_temperatures_dedupes() {
        let entries = parse_temperatures("3000,3000,3000").unwrap();
        assert_eq!(temps(&entries), vec![3000]);
    }

    #[test]
    fn test_parse_temperatures_unknown() {
        let err = parse_temperatures("1000,6600").unwrap_err();
        assert!(err.contains("6600"), "{}", err);
    }

    #[test]
    fn test_parse_temperatures_invalid() {
        assert!(parse_temperatures("warm").is_err());
        assert!(parse_temperatures("").is_err());
        assert!(parse_temperatures(" , ").is_err());
    }
}
