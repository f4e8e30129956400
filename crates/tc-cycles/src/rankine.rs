//! Rankine vapor power cycle solver.
//!
//! Four states on two isobars, solved in a fixed sequence:
//!
//! 1. Turbine inlet on the high isobar: saturated vapor, or superheated if
//!    a turbine-inlet temperature is given.
//! 2. Turbine exit on the low isobar: first the ideal (isentropic) exit,
//!    then the actual exit from the turbine efficiency.
//! 3. Pump inlet: saturated liquid on the low isobar.
//! 4. Pump exit: not resolved from the table, the incompressible-liquid
//!    closed form h4 = h3 + v3·(p_high - p_low) instead. Kept as an
//!    approximation on purpose; a table query would not be better, the
//!    pump exit is sub-cooled and outside the saturation model.

use core::fmt;

use crate::error::{CycleError, CycleResult};
use crate::state::VaporState;
use tc_core::units::{Pressure, Temperature};
use tc_tables::{SteamTable, VaporAnchor};

/// Scalar performance metrics of a solved Rankine cycle.
///
/// Specific works and heats are in kJ/kg; efficiency is a percentage.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RankineMetrics {
    /// Actual turbine work, h1 - h2 [kJ/kg].
    pub turbine_work: f64,
    /// Pump work, h4 - h3 [kJ/kg].
    pub pump_work: f64,
    /// Heat added in the boiler, h1 - h4 [kJ/kg].
    pub heat_added: f64,
    /// Thermal efficiency [%].
    pub efficiency: f64,
}

/// Rankine cycle defined by its two isobars and the turbine efficiency.
#[derive(Debug, Clone)]
pub struct RankineCycle<'t> {
    table: &'t SteamTable,
    p_low: Pressure,
    p_high: Pressure,
    t_high: Option<Temperature>,
    turbine_efficiency: f64,
    name: String,
}

impl<'t> RankineCycle<'t> {
    /// Define a cycle.
    ///
    /// - `p_low`, `p_high`: condenser and boiler isobars, `p_low < p_high`
    /// - `t_high`: optional turbine-inlet temperature; when absent the
    ///   inlet is saturated vapor (quality 1)
    /// - `turbine_efficiency`: actual/isentropic work ratio in (0, 1]
    pub fn new(
        table: &'t SteamTable,
        p_low: Pressure,
        p_high: Pressure,
        t_high: Option<Temperature>,
        turbine_efficiency: f64,
        name: impl Into<String>,
    ) -> CycleResult<Self> {
        if !p_low.value.is_finite() || p_low.value <= 0.0 {
            return Err(CycleError::InvalidInput {
                what: "low pressure must be positive and finite",
            });
        }
        if !p_high.value.is_finite() || p_high.value <= p_low.value {
            return Err(CycleError::InvalidInput {
                what: "high pressure must exceed low pressure",
            });
        }
        if !turbine_efficiency.is_finite()
            || turbine_efficiency <= 0.0
            || turbine_efficiency > 1.0
        {
            return Err(CycleError::InvalidInput {
                what: "turbine efficiency must be in (0, 1]",
            });
        }
        Ok(Self {
            table,
            p_low,
            p_high,
            t_high,
            turbine_efficiency,
            name: name.into(),
        })
    }

    /// Cycle name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Solve the cycle states and compute the metrics.
    pub fn solve(&self) -> CycleResult<RankineSolution> {
        // State 1: turbine inlet on the high isobar.
        let state1 = match self.t_high {
            None => VaporState::resolve(
                self.table,
                self.p_high,
                VaporAnchor::Quality(1.0),
                "Turbine Inlet",
            )?,
            Some(t) => VaporState::resolve(
                self.table,
                self.p_high,
                VaporAnchor::Temperature(t.value),
                "Turbine Inlet",
            )?,
        };

        // State 2s: ideal turbine exit, isentropic to the low isobar.
        let state2s = VaporState::resolve(
            self.table,
            self.p_low,
            VaporAnchor::Entropy(state1.entropy()),
            "Turbine Exit, Ideal",
        )?;

        // State 2: actual turbine exit from the turbine efficiency.
        let h2 = state1.enthalpy()
            - self.turbine_efficiency * (state1.enthalpy() - state2s.enthalpy());
        let state2 = VaporState::resolve(
            self.table,
            self.p_low,
            VaporAnchor::Enthalpy(h2),
            "Turbine Exit, Actual",
        )?;

        // State 3: pump inlet, saturated liquid on the low isobar.
        let state3 = VaporState::resolve(
            self.table,
            self.p_low,
            VaporAnchor::Quality(0.0),
            "Pump Inlet",
        )?;

        // State 4: pump exit. Closed-form incompressible-liquid relation,
        // never a table lookup; entropy, temperature, and specific volume
        // carry over from the pump inlet.
        let dp_kpa = (self.p_high.value - self.p_low.value) / 1000.0;
        let h4 = state3.enthalpy() + state3.specific_volume() * dp_kpa;
        let state4 = VaporState::from_parts(
            "Pump Exit",
            self.p_high,
            state3.temperature().value,
            h4,
            state3.entropy(),
            state3.specific_volume(),
        );

        let turbine_work = state1.enthalpy() - state2.enthalpy();
        let pump_work = state4.enthalpy() - state3.enthalpy();
        let heat_added = state1.enthalpy() - state4.enthalpy();
        let efficiency = 100.0 * (turbine_work - pump_work) / heat_added;

        Ok(RankineSolution {
            name: self.name.clone(),
            state1,
            state2s,
            state2,
            state3,
            state4,
            metrics: RankineMetrics {
                turbine_work,
                pump_work,
                heat_added,
                efficiency,
            },
        })
    }

    /// Solve and return only the thermal efficiency [%].
    pub fn efficiency(&self) -> CycleResult<f64> {
        Ok(self.solve()?.metrics.efficiency)
    }
}

/// A fully solved Rankine cycle, read-only.
#[derive(Debug, Clone)]
pub struct RankineSolution {
    name: String,
    state1: VaporState,
    state2s: VaporState,
    state2: VaporState,
    state3: VaporState,
    state4: VaporState,
    metrics: RankineMetrics,
}

impl RankineSolution {
    /// Cycle name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// State 1: turbine inlet.
    pub fn turbine_inlet(&self) -> &VaporState {
        &self.state1
    }

    /// State 2s: ideal (isentropic) turbine exit.
    pub fn turbine_exit_ideal(&self) -> &VaporState {
        &self.state2s
    }

    /// State 2: actual turbine exit.
    pub fn turbine_exit(&self) -> &VaporState {
        &self.state2
    }

    /// State 3: pump inlet, saturated liquid.
    pub fn pump_inlet(&self) -> &VaporState {
        &self.state3
    }

    /// State 4: pump exit, from the incompressible closed form.
    pub fn pump_exit(&self) -> &VaporState {
        &self.state4
    }

    /// The four cycle states in order (the ideal exit is not part of the
    /// cycle path).
    pub fn states(&self) -> [&VaporState; 4] {
        [&self.state1, &self.state2, &self.state3, &self.state4]
    }

    /// Cycle performance metrics.
    pub fn metrics(&self) -> &RankineMetrics {
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
        text += &format!("\tTurbine Work: {:.3} kJ/kg\n", m.turbine_work);
        text += &format!("\tPump Work: {:.3} kJ/kg\n", m.pump_work);
        text += &format!("\tHeat Added: {:.3} kJ/kg\n", m.heat_added);
        for state in self.states() {
            text += &format!("\t{}\n", state.summary());
        }
        text
    }
}

impl fmt::Display for RankineSolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.summary())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tc_core::units::{k, kpa};
    use tc_tables::water;

    #[test]
    fn rejects_inverted_isobars() {
        let err = RankineCycle::new(water(), kpa(8000.0), kpa(8.0), None, 1.0, "bad").unwrap_err();
        assert!(matches!(err, CycleError::InvalidInput { .. }));
    }

    #[test]
    fn rejects_turbine_efficiency_outside_unit_interval() {
        for eta in [0.0, -0.5, 1.1, f64::NAN] {
            let err = RankineCycle::new(water(), kpa(8.0), kpa(8000.0), None, eta, "bad")
                .unwrap_err();
            assert!(matches!(err, CycleError::InvalidInput { .. }), "eta={eta}");
        }
    }

    #[test]
    fn saturated_inlet_when_no_superheat_given() {
        let cycle = RankineCycle::new(water(), kpa(8.0), kpa(2000.0), None, 1.0, "sat").unwrap();
        let solution = cycle.solve().unwrap();
        let inlet = solution.turbine_inlet();
        assert_eq!(inlet.quality(), Some(1.0));
        // 2000 kPa is a tabulated row.
        assert_eq!(inlet.enthalpy(), 2798.3);
    }

    #[test]
    fn superheated_inlet_raises_turbine_inlet_enthalpy() {
        let sat = RankineCycle::new(water(), kpa(8.0), kpa(8000.0), None, 1.0, "sat")
            .unwrap()
            .solve()
            .unwrap();
        let hot = RankineCycle::new(
            water(),
            kpa(8.0),
            kpa(8000.0),
            Some(k(773.15)),
            1.0,
            "superheated",
        )
        .unwrap()
        .solve()
        .unwrap();
        assert!(hot.turbine_inlet().enthalpy() > sat.turbine_inlet().enthalpy());
        assert!(hot.turbine_inlet().quality().is_none());
    }

    #[test]
    fn pump_exit_is_the_closed_form_not_a_lookup() {
        let solution = RankineCycle::new(water(), kpa(8.0), kpa(8000.0), None, 1.0, "pump")
            .unwrap()
            .solve()
            .unwrap();
        let s3 = solution.pump_inlet();
        let s4 = solution.pump_exit();
        let expected = s3.enthalpy() + s3.specific_volume() * (8000.0 - 8.0);
        assert_eq!(s4.enthalpy(), expected);
        assert_eq!(s4.entropy(), s3.entropy());
        assert_eq!(s4.specific_volume(), s3.specific_volume());
        assert!(s4.quality().is_none());
    }
}
