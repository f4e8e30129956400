//! Diagram data for presentation-layer consumers.
//!
//! Plotters are pure downstream consumers: they read these point lists and
//! never feed anything back into the solver. The polylines visit the four
//! cycle states in order and repeat the first point to close the loop.

use crate::otto::OttoSolution;
use crate::rankine::RankineSolution;

impl OttoSolution {
    /// p-v polyline, `(volume [m³], pressure [Pa])` per point.
    ///
    /// States where the solver did not assign pressure or volume are
    /// skipped; a solved cycle assigns both for all four states.
    pub fn pv_points(&self) -> Vec<(f64, f64)> {
        let mut points: Vec<(f64, f64)> = self
            .states()
            .iter()
            .filter_map(|s| Some((s.volume?.value, s.pressure?.value)))
            .collect();
        if let Some(&first) = points.first() {
            points.push(first);
        }
        points
    }
}

impl RankineSolution {
    /// T-s polyline, `(entropy [kJ/(kg·K)], temperature [K])` per point.
    pub fn ts_points(&self) -> Vec<(f64, f64)> {
        let mut points: Vec<(f64, f64)> = self
            .states()
            .iter()
            .map(|s| (s.entropy(), s.temperature().value))
            .collect();
        if let Some(&first) = points.first() {
            points.push(first);
        }
        points
    }
}

#[cfg(test)]
mod tests {
    use crate::{OttoCycle, RankineCycle};
    use tc_core::units::{k, kpa, m3, pa};
    use tc_tables::{air, water};

    #[test]
    fn otto_pv_loop_is_closed_with_five_points() {
        let solution = OttoCycle::new(
            air(),
            m3(0.0005),
            k(300.0),
            pa(101_325.0),
            8.0,
            k(2000.0),
            "pv",
        )
        .unwrap()
        .solve()
        .unwrap();
        let points = solution.pv_points();
        assert_eq!(points.len(), 5);
        assert_eq!(points[0], points[4]);
        // Compression halves the volume axis between states 1 and 2.
        assert!(points[1].0 < points[0].0);
        assert!(points[1].1 > points[0].1);
    }

    #[test]
    fn rankine_ts_loop_is_closed() {
        let solution = RankineCycle::new(water(), kpa(8.0), kpa(8000.0), None, 1.0, "ts")
            .unwrap()
            .solve()
            .unwrap();
        let points = solution.ts_points();
        assert_eq!(points.len(), 5);
        assert_eq!(points[0], points[4]);
    }
}
