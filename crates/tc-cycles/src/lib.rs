//! tc-cycles: closed power-cycle solvers for thermocycle.
//!
//! Provides:
//! - `GasState` / `VaporState`: resolved cycle state points
//! - `OttoCycle`: the air-standard compression/expansion cycle
//! - `RankineCycle`: the two-phase vapor power cycle
//! - Summary text and p-v / T-s diagram data for downstream consumers
//!
//! # Architecture
//!
//! Solvers borrow an immutable property table and derive four connected
//! states in a fixed sequence, chaining interpolation queries with the
//! cycle's conservation relations. Solving is synchronous, deterministic,
//! and aborts on the first failed resolution.
//!
//! # Example
//!
//! ```
//! use tc_core::units::{k, m3, pa};
//! use tc_cycles::OttoCycle;
//! use tc_tables::air;
//!
//! let cycle = OttoCycle::new(
//!     air(),
//!     m3(0.02 * 0.0283168),
//!     k(300.0),
//!     pa(101_325.0),
//!     8.0,
//!     k(2000.0),
//!     "Otto Cycle",
//! )
//! .unwrap();
//! let solution = cycle.solve().unwrap();
//! assert!(solution.efficiency() > 0.0 && solution.efficiency() < 100.0);
//! ```

pub mod diagram;
pub mod error;
pub mod otto;
pub mod rankine;
pub mod state;

// Re-exports for ergonomics
pub use error::{CycleError, CycleResult};
pub use otto::{OttoCycle, OttoMetrics, OttoSolution};
pub use rankine::{RankineCycle, RankineMetrics, RankineSolution};
pub use state::{GasState, VaporState};
