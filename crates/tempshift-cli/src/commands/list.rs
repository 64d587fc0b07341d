use tempshift_core::kelvin;

/// Print the Kelvin table.
///
/// With `silent`, only the temperatures are printed, one per line.
pub fn cmd_list(silent: bool) -> Result<(), String> {
    if silent {
        for temperature in kelvin::temperatures() {
            println!("{}", temperature);
        }
        return Ok(());
    }

    println!("Temperature   R    G    B");
    for entry in kelvin::entries() {
        let m = entry.multiplier;
        println!(
            "{:>9}K  {:>3}  {:>3}  {:>3}",
            entry.temperature, m.r, m.g, m.b
        );
    }
    Ok(())
}
