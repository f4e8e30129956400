//! Ideal-gas property table and its interpolating resolver.

use crate::anchor::{GasAnchor, GasColumn};
use crate::error::{TableError, TableResult};
use tc_core::lerp;

/// One row of the reference table. The five values are mutually consistent:
/// they all describe the same physical state of the working fluid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GasRecord {
    /// Temperature [K].
    pub t: f64,
    /// Specific enthalpy [kJ/kg].
    pub h: f64,
    /// Relative pressure (dimensionless).
    pub pr: f64,
    /// Specific internal energy [kJ/kg].
    pub u: f64,
    /// Relative volume (dimensionless).
    pub vr: f64,
}

impl GasRecord {
    /// Value of one column in this row.
    pub fn get(&self, column: GasColumn) -> f64 {
        match column {
            GasColumn::Temperature => self.t,
            GasColumn::Enthalpy => self.h,
            GasColumn::RelativePressure => self.pr,
            GasColumn::InternalEnergy => self.u,
            GasColumn::RelativeVolume => self.vr,
        }
    }

    fn values(&self) -> [(GasColumn, f64); 5] {
        [
            (GasColumn::Temperature, self.t),
            (GasColumn::Enthalpy, self.h),
            (GasColumn::RelativePressure, self.pr),
            (GasColumn::InternalEnergy, self.u),
            (GasColumn::RelativeVolume, self.vr),
        ]
    }
}

const COLUMNS: [GasColumn; 5] = [
    GasColumn::Temperature,
    GasColumn::Enthalpy,
    GasColumn::RelativePressure,
    GasColumn::InternalEnergy,
    GasColumn::RelativeVolume,
];

/// Immutable, pre-validated ideal-gas property table.
///
/// Rows ascend by temperature and every column is strictly monotonic, so any
/// single column can serve as the independent axis of an interpolation query.
/// The table is never mutated after construction; independent solves may
/// share one table by reference.
#[derive(Debug, Clone)]
pub struct GasTable {
    rows: Vec<GasRecord>,
}

impl GasTable {
    /// Build a table from rows, validating the interpolation invariants:
    /// at least two rows, all values finite, temperature strictly ascending,
    /// and every column strictly monotonic in a single direction.
    pub fn new(rows: Vec<GasRecord>) -> TableResult<Self> {
        if rows.len() < 2 {
            return Err(TableError::TooFewRows { rows: rows.len() });
        }
        for row in &rows {
            for (column, value) in row.values() {
                if !value.is_finite() {
                    return Err(TableError::NonFinite {
                        what: column.name(),
                        value,
                    });
                }
            }
        }
        for column in COLUMNS {
            let increasing = rows[1].get(column) > rows[0].get(column);
            // Temperature is the sort key and must ascend.
            if column == GasColumn::Temperature && !increasing {
                return Err(TableError::NotMonotonic {
                    column: column.name(),
                    row: 1,
                });
            }
            for i in 1..rows.len() {
                let prev = rows[i - 1].get(column);
                let next = rows[i].get(column);
                let ok = if increasing { next > prev } else { next < prev };
                if !ok {
                    return Err(TableError::NotMonotonic {
                        column: column.name(),
                        row: i,
                    });
                }
            }
        }
        Ok(Self { rows })
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True if the table has no rows. (Cannot happen for a constructed table.)
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// All rows, ascending by temperature.
    pub fn rows(&self) -> &[GasRecord] {
        &self.rows
    }

    /// (min, max) covered span of one column.
    pub fn span(&self, column: GasColumn) -> (f64, f64) {
        let first = self.rows[0].get(column);
        let last = self.rows[self.rows.len() - 1].get(column);
        if first <= last {
            (first, last)
        } else {
            (last, first)
        }
    }

    /// Resolve the other four properties from one known anchor property.
    ///
    /// The anchor's column becomes the independent axis: the query value is
    /// located among that column's sorted samples and every other column is
    /// interpolated piecewise-linearly against it. Works identically for
    /// ascending columns and for the descending relative-volume column.
    ///
    /// Values at the table boundary return the boundary row exactly. Values
    /// outside the covered span are an error; the table never extrapolates.
    pub fn resolve(&self, anchor: GasAnchor) -> TableResult<GasRecord> {
        let column = anchor.column();
        let value = anchor.value();
        if !value.is_finite() {
            return Err(TableError::NonFinite {
                what: column.name(),
                value,
            });
        }

        let n = self.rows.len();
        let ascending = self.rows[0].get(column) < self.rows[n - 1].get(column);
        // View the rows so the anchor column ascends with `i`.
        let at = |i: usize| {
            if ascending {
                &self.rows[i]
            } else {
                &self.rows[n - 1 - i]
            }
        };
        let x = |i: usize| at(i).get(column);

        if value < x(0) || value > x(n - 1) {
            return Err(TableError::OutOfRange {
                column: column.name(),
                value,
                min: x(0),
                max: x(n - 1),
            });
        }

        // Smallest hi with x(hi) >= value.
        let mut lo = 0;
        let mut hi = n - 1;
        while hi - lo > 1 {
            let mid = lo + (hi - lo) / 2;
            if x(mid) < value {
                lo = mid;
            } else {
                hi = mid;
            }
        }

        // Exact sample hits (including both boundaries) return the row as-is.
        if x(lo) == value {
            return Ok(*at(lo));
        }
        if x(hi) == value {
            return Ok(*at(hi));
        }

        let frac = (value - x(lo)) / (x(hi) - x(lo));
        let (a, b) = (at(lo), at(hi));
        Ok(GasRecord {
            t: lerp(a.t, b.t, frac),
            h: lerp(a.h, b.h, frac),
            pr: lerp(a.pr, b.pr, frac),
            u: lerp(a.u, b.u, frac),
            vr: lerp(a.vr, b.vr, frac),
        })
    }
}
