//! Built-in reference tables.
//!
//! The data ships inside the crate and is parsed once on first use, so the
//! binaries work without external files while resolvers still receive the
//! table as an explicit handle.

use std::sync::OnceLock;

use crate::gas::GasTable;
use crate::loader::{parse_gas_table, parse_steam_table};
use crate::steam::SteamTable;

static AIR: OnceLock<GasTable> = OnceLock::new();
static WATER: OnceLock<SteamTable> = OnceLock::new();

/// Ideal-gas property table for air, 200 K to 2200 K.
pub fn air() -> &'static GasTable {
    AIR.get_or_init(|| {
        parse_gas_table(include_str!("../data/air_properties.txt"))
            .expect("embedded air table is valid")
    })
}

/// Saturation table for water, 1 kPa to 20 MPa.
pub fn water() -> &'static SteamTable {
    WATER.get_or_init(|| {
        parse_steam_table(include_str!("../data/steam_saturation.txt"))
            .expect("embedded steam table is valid")
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anchor::{GasAnchor, GasColumn};

    #[test]
    fn air_table_spans_expected_range() {
        let table = air();
        assert!(table.len() > 50);
        assert_eq!(table.span(GasColumn::Temperature), (200.0, 2200.0));
    }

    #[test]
    fn air_table_known_row() {
        // 300 K is a tabulated row; values must come back exactly.
        let r = air().resolve(GasAnchor::Temperature(300.0)).unwrap();
        assert_eq!(r.h, 300.19);
        assert_eq!(r.pr, 1.386);
        assert_eq!(r.u, 214.07);
        assert_eq!(r.vr, 621.2);
    }

    #[test]
    fn water_table_loads() {
        let table = water();
        assert!(table.len() >= 20);
        assert_eq!(table.pressure_span(), (1.0, 20_000.0));
    }
}
