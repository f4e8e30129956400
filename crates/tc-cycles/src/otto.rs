//! Air-standard Otto cycle solver.
//!
//! Four states, solved in a fixed sequence from the boundary conditions:
//!
//! 1. Bottom dead center, fixed by the initial temperature; measured
//!    pressure and volume assigned directly.
//! 2. Top dead center, isentropic compression: vr2 = vr1 / r.
//! 3. Constant-volume heat addition to the peak temperature.
//! 4. Isentropic expansion back to the initial volume: vr4 = vr3 · r.
//!
//! Pressures across the isentropic legs follow the relative-pressure ratio;
//! the solve is strictly linear, terminal after four states, and aborts on
//! the first failed property resolution.

use core::fmt;

use crate::error::{CycleError, CycleResult};
use crate::state::GasState;
use tc_core::units::{Pressure, Temperature, Volume};
use tc_tables::{GasAnchor, GasTable};

fn positive(value: f64, what: &'static str) -> CycleResult<f64> {
    match tc_core::ensure_finite(value, what) {
        Ok(v) if v > 0.0 => Ok(v),
        _ => Err(CycleError::InvalidInput { what }),
    }
}

/// Scalar performance metrics of a solved Otto cycle.
///
/// Specific works and heats are in kJ/kg; efficiency is a percentage.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct OttoMetrics {
    /// Compression stroke work, u2 - u1 [kJ/kg].
    pub compression_work: f64,
    /// Power stroke work, u3 - u4 [kJ/kg].
    pub power_work: f64,
    /// Heat added at constant volume, u3 - u2 [kJ/kg].
    pub heat_added: f64,
    /// Heat rejected, u4 - u1 [kJ/kg].
    pub heat_rejected: f64,
    /// Net cycle work, power - compression [kJ/kg].
    pub net_work: f64,
    /// Net heat, added - rejected [kJ/kg].
    pub net_heat: f64,
    /// Thermal efficiency [%].
    pub efficiency: f64,
}

/// Air-standard Otto cycle defined by its boundary conditions.
///
/// The property table is injected by reference; the solver never loads data
/// and a single immutable table may back many concurrent cycles.
#[derive(Debug, Clone)]
pub struct OttoCycle<'t> {
    table: &'t GasTable,
    v1: Volume,
    t1: Temperature,
    p1: Pressure,
    compression_ratio: f64,
    t3: Temperature,
    name: String,
}

impl<'t> OttoCycle<'t> {
    /// Define a cycle.
    ///
    /// - `v1`: cylinder volume at bottom dead center
    /// - `t1`, `p1`: measured intake temperature and pressure
    /// - `compression_ratio`: v1 / v2, must exceed 1
    /// - `t3`: peak temperature after heat addition, must exceed `t1`
    pub fn new(
        table: &'t GasTable,
        v1: Volume,
        t1: Temperature,
        p1: Pressure,
        compression_ratio: f64,
        t3: Temperature,
        name: impl Into<String>,
    ) -> CycleResult<Self> {
        positive(v1.value, "initial volume must be positive and finite")?;
        positive(t1.value, "initial temperature must be positive and finite")?;
        positive(p1.value, "initial pressure must be positive and finite")?;
        positive(
            compression_ratio,
            "compression ratio must be positive and finite",
        )?;
        if compression_ratio <= 1.0 {
            return Err(CycleError::InvalidInput {
                what: "compression ratio must exceed 1",
            });
        }
        if t3.value <= t1.value {
            return Err(CycleError::InvalidInput {
                what: "peak temperature must exceed initial temperature",
            });
        }
        Ok(Self {
            table,
            v1,
            t1,
            p1,
            compression_ratio,
            t3,
            name: name.into(),
        })
    }

    /// Cycle name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Solve the four states and compute the cycle metrics.
    ///
    /// Fails if any state resolution leaves the table, or if the peak
    /// temperature does not exceed the compression exit temperature.
    pub fn solve(&self) -> CycleResult<OttoSolution> {
        let r = self.compression_ratio;

        // State 1: bottom dead center. Pressure and volume are measured
        // boundary values, not interpolated.
        let mut state1 =
            GasState::resolve(self.table, GasAnchor::Temperature(self.t1.value), "State 1")?;
        state1.pressure = Some(self.p1);
        state1.volume = Some(self.v1);

        // State 2: top dead center, isentropic compression from state 1.
        let vr2 = state1.relative_volume() / r;
        let mut state2 = GasState::resolve(self.table, GasAnchor::RelativeVolume(vr2), "State 2")?;
        let p2 = self.p1 * (state2.relative_pressure() / state1.relative_pressure());
        state2.pressure = Some(p2);
        state2.volume = Some(self.v1 / r);

        // A peak at or below the compression exit temperature would make
        // the heat-addition leg remove heat. Only knowable now: T2 comes
        // out of the state-2 resolution.
        if self.t3.value <= state2.temperature().value {
            return Err(CycleError::InvalidInput {
                what: "peak temperature must exceed the compression exit temperature",
            });
        }

        // State 3: constant-volume heat addition to the peak temperature.
        // The volume is a boundary condition of the process; the pressure
        // follows the ideal-gas isochore.
        let mut state3 =
            GasState::resolve(self.table, GasAnchor::Temperature(self.t3.value), "State 3")?;
        state3.volume = state2.volume;
        let p3 = p2 * (self.t3.value / state2.temperature().value);
        state3.pressure = Some(p3);

        // State 4: isentropic expansion back to the initial volume.
        let vr4 = state3.relative_volume() * r;
        let mut state4 = GasState::resolve(self.table, GasAnchor::RelativeVolume(vr4), "State 4")?;
        state4.pressure = Some(p3 * (state4.relative_pressure() / state3.relative_pressure()));
        state4.volume = state1.volume;

        let compression_work = state2.internal_energy() - state1.internal_energy();
        let power_work = state3.internal_energy() - state4.internal_energy();
        let heat_added = state3.internal_energy() - state2.internal_energy();
        let heat_rejected = state4.internal_energy() - state1.internal_energy();
        let net_work = power_work - compression_work;
        let net_heat = heat_added - heat_rejected;
        let efficiency = net_work / heat_added * 100.0;

        Ok(OttoSolution {
            name: self.name.clone(),
            state1,
            state2,
            state3,
            state4,
            metrics: OttoMetrics {
                compression_work,
                power_work,
                heat_added,
                heat_rejected,
                net_work,
                net_heat,
                efficiency,
            },
        })
    }

    /// Solve and return only the thermal efficiency [%].
    pub fn efficiency(&self) -> CycleResult<f64> {
        Ok(self.solve()?.metrics.efficiency)
    }
}

/// A fully solved Otto cycle: four states plus metrics, read-only.
#[derive(Debug, Clone)]
pub struct OttoSolution {
    name: String,
    state1: GasState,
    state2: GasState,
    state3: GasState,
    state4: GasState,
    metrics: OttoMetrics,
}

impl OttoSolution {
    /// Cycle name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// State 1: bottom dead center, intake conditions.
    pub fn state1(&self) -> &GasState {
        &self.state1
    }

    /// State 2: top dead center after isentropic compression.
    pub fn state2(&self) -> &GasState {
        &self.state2
    }

    /// State 3: peak of constant-volume heat addition.
    pub fn state3(&self) -> &GasState {
        &self.state3
    }

    /// State 4: end of isentropic expansion.
    pub fn state4(&self) -> &GasState {
        &self.state4
    }

    /// All four states in cycle order.
    pub fn states(&self) -> [&GasState; 4] {
        [&self.state1, &self.state2, &self.state3, &self.state4]
    }

    /// Cycle performance metrics.
    pub fn metrics(&self) -> &OttoMetrics {
        &self.metrics
    }

    /// Thermal efficiency [%].
    pub fn efficiency(&self) -> f64 {
        self.metrics.efficiency
    }

    /// Multi-line cycle report.
    pub fn summary(&self) -> String {
        let m = &self.metrics;
        let mut text = format!("Cycle Summary for: {}\n", self.name);
        text += &format!("\tEfficiency: {:.3}%\n", m.efficiency);
        text += &format!("\tCompression Stroke Work: {:.3} kJ/kg\n", m.compression_work);
        text += &format!("\tPower Stroke Work: {:.3} kJ/kg\n", m.power_work);
        text += &format!("\tCycle Work: {:.3} kJ/kg\n", m.net_work);
        text += &format!("\tHeat Added: {:.3} kJ/kg\n", m.heat_added);
        text += &format!("\tHeat Rejected: {:.3} kJ/kg\n", m.heat_rejected);
        text += &format!("\tNet Heat Added: {:.3} kJ/kg\n", m.net_heat);
        for state in self.states() {
            text += &format!("\t{}\n", state.summary());
        }
        text
    }
}

impl fmt::Display for OttoSolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.summary())
    }
}
