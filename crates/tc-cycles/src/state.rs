//! Thermodynamic state points.
//!
//! A state is resolved eagerly at construction from exactly one anchor
//! property; the resolved intrinsic properties are read-only afterward.
//! Pressure and volume are not table columns for the gas model, they are
//! boundary conditions of the process, so the owning solver assigns them
//! after resolution.

use crate::error::CycleResult;
use tc_core::units::{k, Pressure, Temperature, Volume};
use tc_tables::{
    GasAnchor, GasRecord, GasTable, SpecEnergy, SpecEnthalpy, SpecEntropy, SpecVolume, SteamTable,
    VaporAnchor,
};

/// One resolved point of a gas cycle.
#[derive(Debug, Clone)]
pub struct GasState {
    label: String,
    props: GasRecord,
    /// Pressure, assigned by the owning solver.
    pub pressure: Option<Pressure>,
    /// Volume, assigned by the owning solver.
    pub volume: Option<Volume>,
}

impl GasState {
    /// Resolve a state from one anchor property. Queries the table exactly
    /// once; there is nothing to retry.
    pub fn resolve(
        table: &GasTable,
        anchor: GasAnchor,
        label: impl Into<String>,
    ) -> CycleResult<Self> {
        let props = table.resolve(anchor)?;
        Ok(Self {
            label: label.into(),
            props,
            pressure: None,
            volume: None,
        })
    }

    /// Human-readable state label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Temperature.
    pub fn temperature(&self) -> Temperature {
        k(self.props.t)
    }

    /// Specific enthalpy [kJ/kg].
    pub fn enthalpy(&self) -> SpecEnthalpy {
        self.props.h
    }

    /// Relative pressure (dimensionless).
    pub fn relative_pressure(&self) -> f64 {
        self.props.pr
    }

    /// Specific internal energy [kJ/kg].
    pub fn internal_energy(&self) -> SpecEnergy {
        self.props.u
    }

    /// Relative volume (dimensionless).
    pub fn relative_volume(&self) -> f64 {
        self.props.vr
    }

    /// One-line property summary (for reports and debugging).
    pub fn summary(&self) -> String {
        let p = self
            .pressure
            .map_or_else(|| "-".into(), |p| format!("{:.0} Pa", p.value));
        let v = self
            .volume
            .map_or_else(|| "-".into(), |v| format!("{:.6} m³", v.value));
        format!(
            "{}: T={:.2} K, p={}, v={}, h={:.2} kJ/kg, u={:.2} kJ/kg, pr={:.4}, vr={:.4}",
            self.label, self.props.t, p, v, self.props.h, self.props.u, self.props.pr, self.props.vr
        )
    }
}

/// One resolved point of a vapor cycle.
#[derive(Debug, Clone)]
pub struct VaporState {
    label: String,
    pub(crate) t: f64,
    pub(crate) h: SpecEnthalpy,
    pub(crate) s: SpecEntropy,
    pub(crate) v: SpecVolume,
    pub(crate) x: Option<f64>,
    /// Pressure on this state's isobar.
    pub pressure: Pressure,
}

impl VaporState {
    /// Resolve a state from a pressure and one more known property.
    pub fn resolve(
        table: &SteamTable,
        pressure: Pressure,
        anchor: VaporAnchor,
        label: impl Into<String>,
    ) -> CycleResult<Self> {
        let p_kpa = pressure.value / 1000.0;
        let props = table.resolve(p_kpa, anchor)?;
        Ok(Self {
            label: label.into(),
            t: props.t,
            h: props.h,
            s: props.s,
            v: props.v,
            x: props.x,
            pressure,
        })
    }

    /// Build a state whose properties come from a closed-form relation
    /// rather than a table query (the pump-exit approximation).
    pub(crate) fn from_parts(
        label: impl Into<String>,
        pressure: Pressure,
        t: f64,
        h: SpecEnthalpy,
        s: SpecEntropy,
        v: SpecVolume,
    ) -> Self {
        Self {
            label: label.into(),
            t,
            h,
            s,
            v,
            x: None,
            pressure,
        }
    }

    /// Human-readable state label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Temperature.
    pub fn temperature(&self) -> Temperature {
        k(self.t)
    }

    /// Specific enthalpy [kJ/kg].
    pub fn enthalpy(&self) -> SpecEnthalpy {
        self.h
    }

    /// Specific entropy [kJ/(kg·K)].
    pub fn entropy(&self) -> SpecEntropy {
        self.s
    }

    /// Specific volume [m³/kg].
    pub fn specific_volume(&self) -> SpecVolume {
        self.v
    }

    /// Vapor quality in [0, 1]; `None` outside the two-phase dome.
    pub fn quality(&self) -> Option<f64> {
        self.x
    }

    /// One-line property summary (for reports and debugging).
    pub fn summary(&self) -> String {
        let x = self
            .x
            .map_or_else(|| "-".into(), |x| format!("{x:.4}"));
        format!(
            "{}: T={:.2} K, p={:.1} kPa, h={:.2} kJ/kg, s={:.4} kJ/kg·K, v={:.6} m³/kg, x={}",
            self.label,
            self.t,
            self.pressure.value / 1000.0,
            self.h,
            self.s,
            self.v,
            x
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tc_core::units::{kpa, pa};
    use tc_tables::{air, water};

    #[test]
    fn gas_state_resolves_once_and_exposes_properties() {
        let s = GasState::resolve(air(), GasAnchor::Temperature(300.0), "State 1").unwrap();
        assert_eq!(s.label(), "State 1");
        assert_eq!(s.temperature().value, 300.0);
        assert_eq!(s.enthalpy(), 300.19);
        assert_eq!(s.internal_energy(), 214.07);
        assert!(s.pressure.is_none());
        assert!(s.volume.is_none());
    }

    #[test]
    fn gas_state_assigned_fields_show_in_summary() {
        let mut s = GasState::resolve(air(), GasAnchor::Temperature(300.0), "State 1").unwrap();
        s.pressure = Some(pa(101_325.0));
        s.volume = Some(tc_core::units::m3(0.0005));
        let text = s.summary();
        assert!(text.contains("State 1"));
        assert!(text.contains("101325 Pa"));
    }

    #[test]
    fn gas_state_resolution_failure_propagates() {
        let err = GasState::resolve(air(), GasAnchor::Temperature(2500.0), "too hot").unwrap_err();
        assert!(err.to_string().contains("outside the table range"));
    }

    #[test]
    fn vapor_state_resolves_from_pressure_and_quality() {
        let s = VaporState::resolve(
            water(),
            kpa(1000.0),
            VaporAnchor::Quality(1.0),
            "Turbine Inlet",
        )
        .unwrap();
        assert_eq!(s.enthalpy(), 2777.1);
        assert_eq!(s.quality(), Some(1.0));
        assert_eq!(s.pressure.value, 1_000_000.0);
    }
}
