//! tc-tables: tabulated property data and interpolation for thermocycle.
//!
//! Provides:
//! - The ideal-gas property table (`GasTable`) with a symmetric resolver:
//!   any one of the five columns can anchor a query
//! - A saturation-aware water/steam table (`SteamTable`) for two-phase work
//! - Anchor types that make "exactly one known property" a type-level rule
//! - Loaders for the plain-text table format, plus built-in air/water data
//!
//! # Architecture
//!
//! Tables are immutable after construction and shared by reference; the
//! resolver never loads data itself. Queries outside the tabulated span are
//! errors; nothing here extrapolates.
//!
//! # Example
//!
//! ```
//! use tc_tables::{air, GasAnchor};
//!
//! let state = air().resolve(GasAnchor::Temperature(300.0)).unwrap();
//! assert!((state.h - 300.19).abs() < 1e-9);
//! ```

pub mod anchor;
pub mod builtin;
pub mod error;
pub mod gas;
pub mod loader;
pub mod steam;

/// Specific enthalpy [kJ/kg].
///
/// Not part of uom's standard set, so we use f64 with clear documentation.
pub type SpecEnthalpy = f64;

/// Specific internal energy [kJ/kg].
pub type SpecEnergy = f64;

/// Specific entropy [kJ/(kg·K)].
pub type SpecEntropy = f64;

/// Specific volume [m³/kg].
pub type SpecVolume = f64;

// Re-exports for ergonomics
pub use anchor::{GasAnchor, GasColumn, VaporAnchor};
pub use builtin::{air, water};
pub use error::{TableError, TableResult};
pub use gas::{GasRecord, GasTable};
pub use loader::{load_gas_table, load_steam_table, parse_gas_table, parse_steam_table};
pub use steam::{SaturationRecord, SteamTable, VaporProperties, CP_VAPOR};
