//! Saturation-aware water/steam property table.
//!
//! The vapor cycle needs a property source that understands the two-phase
//! dome: states are fixed by a pressure plus one more known quantity
//! (quality, temperature, enthalpy, or entropy). Inside the dome the table
//! mixes saturated-liquid and saturated-vapor rows by quality. Above the
//! dome it uses a frozen-cp vapor extension anchored at the saturated-vapor
//! point, which keeps every anchor pair analytically invertible.
//! Subcooled-liquid anchors are outside the model and rejected.

use crate::anchor::VaporAnchor;
use crate::error::{TableError, TableResult};
use tc_core::lerp;

/// Frozen specific heat of superheated vapor [kJ/(kg·K)].
pub const CP_VAPOR: f64 = 1.872;

/// One saturation row: liquid (`*_f`) and vapor (`*_g`) properties at one
/// pressure on the saturation line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SaturationRecord {
    /// Saturation pressure [kPa].
    pub p: f64,
    /// Saturation temperature [K].
    pub t_sat: f64,
    /// Saturated-liquid specific volume [m³/kg].
    pub v_f: f64,
    /// Saturated-vapor specific volume [m³/kg].
    pub v_g: f64,
    /// Saturated-liquid specific enthalpy [kJ/kg].
    pub h_f: f64,
    /// Saturated-vapor specific enthalpy [kJ/kg].
    pub h_g: f64,
    /// Saturated-liquid specific entropy [kJ/(kg·K)].
    pub s_f: f64,
    /// Saturated-vapor specific entropy [kJ/(kg·K)].
    pub s_g: f64,
}

impl SaturationRecord {
    fn values(&self) -> [f64; 8] {
        [
            self.p, self.t_sat, self.v_f, self.v_g, self.h_f, self.h_g, self.s_f, self.s_g,
        ]
    }
}

/// A fully resolved vapor state at one pressure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VaporProperties {
    /// Temperature [K].
    pub t: f64,
    /// Specific enthalpy [kJ/kg].
    pub h: f64,
    /// Specific entropy [kJ/(kg·K)].
    pub s: f64,
    /// Specific volume [m³/kg].
    pub v: f64,
    /// Vapor quality in [0, 1]; `None` outside the two-phase dome.
    pub x: Option<f64>,
}

/// Immutable saturation table, ascending by pressure.
#[derive(Debug, Clone)]
pub struct SteamTable {
    rows: Vec<SaturationRecord>,
}

impl SteamTable {
    /// Build a table from saturation rows, validating that pressure and
    /// saturation temperature strictly ascend, every value is finite, and
    /// each row keeps liquid below vapor (v_f < v_g, h_f < h_g, s_f < s_g).
    pub fn new(rows: Vec<SaturationRecord>) -> TableResult<Self> {
        if rows.len() < 2 {
            return Err(TableError::TooFewRows { rows: rows.len() });
        }
        for (i, row) in rows.iter().enumerate() {
            for value in row.values() {
                if !value.is_finite() {
                    return Err(TableError::NonFinite {
                        what: "saturation row",
                        value,
                    });
                }
            }
            if row.v_f >= row.v_g || row.h_f >= row.h_g || row.s_f >= row.s_g {
                return Err(TableError::NotMonotonic {
                    column: "saturation row (liquid/vapor order)",
                    row: i,
                });
            }
        }
        for i in 1..rows.len() {
            if rows[i].p <= rows[i - 1].p {
                return Err(TableError::NotMonotonic {
                    column: "pressure",
                    row: i,
                });
            }
            if rows[i].t_sat <= rows[i - 1].t_sat {
                return Err(TableError::NotMonotonic {
                    column: "saturation temperature",
                    row: i,
                });
            }
        }
        Ok(Self { rows })
    }

    /// Number of saturation rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True if the table has no rows. (Cannot happen for a constructed table.)
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// All saturation rows, ascending by pressure.
    pub fn rows(&self) -> &[SaturationRecord] {
        &self.rows
    }

    /// (min, max) covered pressure span [kPa].
    pub fn pressure_span(&self) -> (f64, f64) {
        (self.rows[0].p, self.rows[self.rows.len() - 1].p)
    }

    /// Saturation properties at a pressure, interpolated between rows.
    pub fn saturation(&self, p_kpa: f64) -> TableResult<SaturationRecord> {
        if !p_kpa.is_finite() {
            return Err(TableError::NonFinite {
                what: "pressure",
                value: p_kpa,
            });
        }
        let n = self.rows.len();
        let (min, max) = self.pressure_span();
        if p_kpa < min || p_kpa > max {
            return Err(TableError::OutOfRange {
                column: "pressure",
                value: p_kpa,
                min,
                max,
            });
        }

        let mut lo = 0;
        let mut hi = n - 1;
        while hi - lo > 1 {
            let mid = lo + (hi - lo) / 2;
            if self.rows[mid].p < p_kpa {
                lo = mid;
            } else {
                hi = mid;
            }
        }
        if self.rows[lo].p == p_kpa {
            return Ok(self.rows[lo]);
        }
        if self.rows[hi].p == p_kpa {
            return Ok(self.rows[hi]);
        }

        let (a, b) = (self.rows[lo], self.rows[hi]);
        let frac = (p_kpa - a.p) / (b.p - a.p);
        Ok(SaturationRecord {
            p: p_kpa,
            t_sat: lerp(a.t_sat, b.t_sat, frac),
            v_f: lerp(a.v_f, b.v_f, frac),
            v_g: lerp(a.v_g, b.v_g, frac),
            h_f: lerp(a.h_f, b.h_f, frac),
            h_g: lerp(a.h_g, b.h_g, frac),
            s_f: lerp(a.s_f, b.s_f, frac),
            s_g: lerp(a.s_g, b.s_g, frac),
        })
    }

    /// Resolve a vapor state from a pressure [kPa] and one more known
    /// property.
    pub fn resolve(&self, p_kpa: f64, anchor: VaporAnchor) -> TableResult<VaporProperties> {
        let sat = self.saturation(p_kpa)?;
        match anchor {
            VaporAnchor::Quality(x) => {
                if !x.is_finite() {
                    return Err(TableError::NonFinite {
                        what: "quality",
                        value: x,
                    });
                }
                if !(0.0..=1.0).contains(&x) {
                    return Err(TableError::InvalidArg {
                        what: "quality must be in [0, 1]",
                    });
                }
                Ok(mix(&sat, x))
            }
            VaporAnchor::Temperature(t) => {
                if !t.is_finite() {
                    return Err(TableError::NonFinite {
                        what: "temperature",
                        value: t,
                    });
                }
                if t < sat.t_sat {
                    return Err(TableError::NotSupported {
                        what: "temperature anchor below saturation (subcooled liquid)",
                    });
                }
                if t == sat.t_sat {
                    return Ok(mix(&sat, 1.0));
                }
                Ok(superheat_from_t(&sat, t))
            }
            VaporAnchor::Enthalpy(h) => {
                if !h.is_finite() {
                    return Err(TableError::NonFinite {
                        what: "enthalpy",
                        value: h,
                    });
                }
                if h < sat.h_f {
                    return Err(TableError::NotSupported {
                        what: "enthalpy anchor below saturated liquid (subcooled)",
                    });
                }
                if h <= sat.h_g {
                    let x = (h - sat.h_f) / (sat.h_g - sat.h_f);
                    return Ok(mix(&sat, x));
                }
                let t = sat.t_sat + (h - sat.h_g) / CP_VAPOR;
                Ok(superheat_from_t(&sat, t))
            }
            VaporAnchor::Entropy(s) => {
                if !s.is_finite() {
                    return Err(TableError::NonFinite {
                        what: "entropy",
                        value: s,
                    });
                }
                if s < sat.s_f {
                    return Err(TableError::NotSupported {
                        what: "entropy anchor below saturated liquid (subcooled)",
                    });
                }
                if s <= sat.s_g {
                    let x = (s - sat.s_f) / (sat.s_g - sat.s_f);
                    return Ok(mix(&sat, x));
                }
                let t = sat.t_sat * ((s - sat.s_g) / CP_VAPOR).exp();
                Ok(superheat_from_t(&sat, t))
            }
        }
    }
}

/// Two-phase mixture at quality `x` on a saturation row. The endpoints
/// return the saturated-liquid and saturated-vapor values verbatim, same
/// exact-hit rule as the pressure lookup.
fn mix(sat: &SaturationRecord, x: f64) -> VaporProperties {
    if x == 0.0 {
        return VaporProperties {
            t: sat.t_sat,
            h: sat.h_f,
            s: sat.s_f,
            v: sat.v_f,
            x: Some(0.0),
        };
    }
    if x == 1.0 {
        return VaporProperties {
            t: sat.t_sat,
            h: sat.h_g,
            s: sat.s_g,
            v: sat.v_g,
            x: Some(1.0),
        };
    }
    VaporProperties {
        t: sat.t_sat,
        h: lerp(sat.h_f, sat.h_g, x),
        s: lerp(sat.s_f, sat.s_g, x),
        v: lerp(sat.v_f, sat.v_g, x),
        x: Some(x),
    }
}

/// Frozen-cp vapor extension above the saturated-vapor point.
fn superheat_from_t(sat: &SaturationRecord, t: f64) -> VaporProperties {
    VaporProperties {
        t,
        h: sat.h_g + CP_VAPOR * (t - sat.t_sat),
        s: sat.s_g + CP_VAPOR * (t / sat.t_sat).ln(),
        v: sat.v_g * t / sat.t_sat,
        x: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtin::water;
    use tc_core::{nearly_equal, Tolerances};

    fn tol() -> Tolerances {
        Tolerances {
            abs: 1e-9,
            rel: 1e-9,
        }
    }

    #[test]
    fn quality_endpoints_match_row_exactly() {
        let table = water();
        // 1000 kPa is a tabulated row.
        let liquid = table.resolve(1000.0, VaporAnchor::Quality(0.0)).unwrap();
        assert_eq!(liquid.h, 762.51);
        assert_eq!(liquid.x, Some(0.0));
        let vapor = table.resolve(1000.0, VaporAnchor::Quality(1.0)).unwrap();
        assert_eq!(vapor.h, 2777.1);
        assert_eq!(vapor.s, 6.5850);
    }

    #[test]
    fn quality_mixes_linearly() {
        let table = water();
        let half = table.resolve(1000.0, VaporAnchor::Quality(0.5)).unwrap();
        assert!(nearly_equal(half.h, (762.51 + 2777.1) / 2.0, tol()));
        assert!(nearly_equal(half.s, (2.1381 + 6.5850) / 2.0, tol()));
    }

    #[test]
    fn quality_outside_unit_interval_rejected() {
        let table = water();
        assert!(matches!(
            table.resolve(1000.0, VaporAnchor::Quality(1.2)),
            Err(TableError::InvalidArg { .. })
        ));
        assert!(matches!(
            table.resolve(1000.0, VaporAnchor::Quality(-0.1)),
            Err(TableError::InvalidArg { .. })
        ));
    }

    #[test]
    fn enthalpy_anchor_recovers_quality() {
        let table = water();
        let mid_h = 762.51 + 0.25 * (2777.1 - 762.51);
        let state = table.resolve(1000.0, VaporAnchor::Enthalpy(mid_h)).unwrap();
        let x = state.x.unwrap();
        assert!(nearly_equal(x, 0.25, tol()));
        assert!(nearly_equal(state.h, mid_h, tol()));
    }

    #[test]
    fn superheat_round_trips_between_anchors() {
        let table = water();
        let by_t = table
            .resolve(1000.0, VaporAnchor::Temperature(650.0))
            .unwrap();
        assert!(by_t.x.is_none());
        assert!(by_t.h > 2777.1);
        assert!(by_t.s > 6.5850);

        let by_h = table
            .resolve(1000.0, VaporAnchor::Enthalpy(by_t.h))
            .unwrap();
        assert!(nearly_equal(by_h.t, 650.0, tol()));

        let by_s = table.resolve(1000.0, VaporAnchor::Entropy(by_t.s)).unwrap();
        assert!(nearly_equal(by_s.t, 650.0, tol()));
        assert!(nearly_equal(by_s.h, by_t.h, tol()));
    }

    #[test]
    fn subcooled_anchors_are_not_supported() {
        let table = water();
        assert!(matches!(
            table.resolve(1000.0, VaporAnchor::Temperature(300.0)),
            Err(TableError::NotSupported { .. })
        ));
        assert!(matches!(
            table.resolve(1000.0, VaporAnchor::Enthalpy(100.0)),
            Err(TableError::NotSupported { .. })
        ));
        assert!(matches!(
            table.resolve(1000.0, VaporAnchor::Entropy(0.05)),
            Err(TableError::NotSupported { .. })
        ));
    }

    #[test]
    fn pressure_interpolates_between_rows() {
        let table = water();
        // 8 kPa sits between the 5 and 10 kPa rows.
        let sat = table.saturation(8.0).unwrap();
        assert!(sat.t_sat > 306.02 && sat.t_sat < 318.96);
        assert!(sat.h_f > 137.75 && sat.h_f < 191.81);
        assert!(sat.s_g < 8.3938 && sat.s_g > 8.1488);
    }

    #[test]
    fn pressure_out_of_range_rejected() {
        let table = water();
        assert!(matches!(
            table.saturation(0.5),
            Err(TableError::OutOfRange { .. })
        ));
        assert!(matches!(
            table.saturation(25_000.0),
            Err(TableError::OutOfRange { .. })
        ));
    }

    #[test]
    fn rejects_unordered_rows() {
        let a = SaturationRecord {
            p: 100.0,
            t_sat: 372.76,
            v_f: 0.001043,
            v_g: 1.694,
            h_f: 417.51,
            h_g: 2675.0,
            s_f: 1.3028,
            s_g: 7.3589,
        };
        let b = SaturationRecord { p: 50.0, ..a };
        let err = SteamTable::new(vec![a, b]).unwrap_err();
        assert!(matches!(
            err,
            TableError::NotMonotonic {
                column: "pressure",
                ..
            }
        ));
    }
}
