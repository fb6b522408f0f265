//! Print the 13x13 opening chart for every position.
//!
//! Run with: `cargo run --example range_chart [path/to/ranges.json]`
//!
//! Without an argument the built-in 6-max RFI table is used. A custom table
//! is a JSON object of whole percentages, e.g. `{"UTG": 12, "BTN": 48}`;
//! positions it leaves out are reported instead of printed as empty.

use preflop_trainer::{HandCatalog, Position, RangeTable};

fn main() -> preflop_trainer::Result<()> {
    env_logger::init();

    let table = match std::env::args().nth(1) {
        Some(path) => RangeTable::from_json(&std::fs::read_to_string(path)?)?,
        None => RangeTable::rfi().clone(),
    };
    let catalog = HandCatalog::standard();

    for position in Position::ALL {
        match table.range_grid(catalog, position) {
            Ok(grid) => {
                println!("{grid}");
                println!("  {} of 169 classes\n", grid.in_range_count());
            }
            Err(e) => println!("{position}: {e}\n"),
        }
    }
    Ok(())
}
