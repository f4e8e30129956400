//! Anchor property definitions.
//!
//! A state is resolved from exactly one known intrinsic property. The tagged
//! unions here make that "exactly one" rule a compile-time fact; the fallible
//! `from_options` constructor exists for surfaces (CLI flags, config files)
//! that naturally arrive as several optional values.

use crate::error::{TableError, TableResult};

/// One of the five gas-table columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GasColumn {
    Temperature,
    Enthalpy,
    RelativePressure,
    InternalEnergy,
    RelativeVolume,
}

impl GasColumn {
    /// Human-readable column name, used in error messages.
    pub fn name(self) -> &'static str {
        match self {
            GasColumn::Temperature => "temperature",
            GasColumn::Enthalpy => "enthalpy",
            GasColumn::RelativePressure => "relative pressure",
            GasColumn::InternalEnergy => "internal energy",
            GasColumn::RelativeVolume => "relative volume",
        }
    }
}

/// The single known property used to resolve a gas state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GasAnchor {
    /// Temperature [K].
    Temperature(f64),
    /// Specific enthalpy [kJ/kg].
    Enthalpy(f64),
    /// Relative pressure (dimensionless).
    RelativePressure(f64),
    /// Specific internal energy [kJ/kg].
    InternalEnergy(f64),
    /// Relative volume (dimensionless).
    RelativeVolume(f64),
}

impl GasAnchor {
    /// The column this anchor belongs to.
    pub fn column(&self) -> GasColumn {
        match self {
            GasAnchor::Temperature(_) => GasColumn::Temperature,
            GasAnchor::Enthalpy(_) => GasColumn::Enthalpy,
            GasAnchor::RelativePressure(_) => GasColumn::RelativePressure,
            GasAnchor::InternalEnergy(_) => GasColumn::InternalEnergy,
            GasAnchor::RelativeVolume(_) => GasColumn::RelativeVolume,
        }
    }

    /// The known value.
    pub fn value(&self) -> f64 {
        match *self {
            GasAnchor::Temperature(v)
            | GasAnchor::Enthalpy(v)
            | GasAnchor::RelativePressure(v)
            | GasAnchor::InternalEnergy(v)
            | GasAnchor::RelativeVolume(v) => v,
        }
    }

    /// Build an anchor from optional known-property values.
    ///
    /// Exactly one of the arguments must be `Some`; zero or more than one is
    /// a configuration error. There is no implicit precedence among them.
    pub fn from_options(
        temperature: Option<f64>,
        enthalpy: Option<f64>,
        relative_pressure: Option<f64>,
        internal_energy: Option<f64>,
        relative_volume: Option<f64>,
    ) -> TableResult<Self> {
        let mut anchors = Vec::new();
        if let Some(t) = temperature {
            anchors.push(GasAnchor::Temperature(t));
        }
        if let Some(h) = enthalpy {
            anchors.push(GasAnchor::Enthalpy(h));
        }
        if let Some(pr) = relative_pressure {
            anchors.push(GasAnchor::RelativePressure(pr));
        }
        if let Some(u) = internal_energy {
            anchors.push(GasAnchor::InternalEnergy(u));
        }
        if let Some(vr) = relative_volume {
            anchors.push(GasAnchor::RelativeVolume(vr));
        }
        match anchors.len() {
            1 => Ok(anchors[0]),
            n => Err(TableError::AmbiguousAnchor { supplied: n }),
        }
    }
}

/// The known property paired with a pressure to resolve a vapor state.
///
/// Vapor states always carry a pressure; the anchor selects the second
/// known quantity, including the two-phase quality form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VaporAnchor {
    /// Vapor mass fraction in [0, 1]. 0 = saturated liquid, 1 = saturated vapor.
    Quality(f64),
    /// Temperature [K], at or above saturation.
    Temperature(f64),
    /// Specific enthalpy [kJ/kg].
    Enthalpy(f64),
    /// Specific entropy [kJ/(kg·K)].
    Entropy(f64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchor_column_and_value() {
        let a = GasAnchor::RelativeVolume(77.65);
        assert_eq!(a.column(), GasColumn::RelativeVolume);
        assert_eq!(a.value(), 77.65);
        assert_eq!(a.column().name(), "relative volume");
    }

    #[test]
    fn from_options_accepts_exactly_one() {
        let a = GasAnchor::from_options(Some(300.0), None, None, None, None).unwrap();
        assert_eq!(a, GasAnchor::Temperature(300.0));

        let a = GasAnchor::from_options(None, None, None, None, Some(621.2)).unwrap();
        assert_eq!(a, GasAnchor::RelativeVolume(621.2));
    }

    #[test]
    fn from_options_rejects_none() {
        let err = GasAnchor::from_options(None, None, None, None, None).unwrap_err();
        assert!(matches!(err, TableError::AmbiguousAnchor { supplied: 0 }));
    }

    #[test]
    fn from_options_rejects_two() {
        let err =
            GasAnchor::from_options(Some(300.0), Some(300.19), None, None, None).unwrap_err();
        assert!(matches!(err, TableError::AmbiguousAnchor { supplied: 2 }));
    }
}
