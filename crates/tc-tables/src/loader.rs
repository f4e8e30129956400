//! Plain-text table loading.
//!
//! Format: one header line (skipped), then rows of numeric columns separated
//! by whitespace or commas: five columns for the gas table (temperature,
//! enthalpy, relative pressure, internal energy, relative volume, ascending
//! by temperature), eight for the saturation table. Blank lines are ignored.
//! All structural invariants are enforced by the table constructors, so a
//! loaded table is as trustworthy as a built-in one.

use std::fs;
use std::path::Path;

use crate::error::{TableError, TableResult};
use crate::gas::{GasRecord, GasTable};
use crate::steam::{SaturationRecord, SteamTable};

fn parse_row<const N: usize>(line_no: usize, line: &str) -> TableResult<[f64; N]> {
    let fields: Vec<&str> = line
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .collect();
    if fields.len() != N {
        return Err(TableError::Load {
            line: line_no,
            reason: format!("expected {N} columns, got {}", fields.len()),
        });
    }
    let mut values = [0.0; N];
    for (value, field) in values.iter_mut().zip(&fields) {
        *value = field.parse().map_err(|_| TableError::Load {
            line: line_no,
            reason: format!("not a number: {field:?}"),
        })?;
    }
    Ok(values)
}

fn data_lines(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.lines()
        .enumerate()
        .skip(1) // header
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty())
}

/// Parse a five-column gas property table from text.
pub fn parse_gas_table(text: &str) -> TableResult<GasTable> {
    let mut rows = Vec::new();
    for (line_no, line) in data_lines(text) {
        let [t, h, pr, u, vr] = parse_row(line_no, line)?;
        rows.push(GasRecord { t, h, pr, u, vr });
    }
    GasTable::new(rows)
}

/// Load a five-column gas property table from a file.
pub fn load_gas_table(path: &Path) -> TableResult<GasTable> {
    parse_gas_table(&fs::read_to_string(path)?)
}

/// Parse an eight-column saturation table from text.
pub fn parse_steam_table(text: &str) -> TableResult<SteamTable> {
    let mut rows = Vec::new();
    for (line_no, line) in data_lines(text) {
        let [p, t_sat, v_f, v_g, h_f, h_g, s_f, s_g] = parse_row(line_no, line)?;
        rows.push(SaturationRecord {
            p,
            t_sat,
            v_f,
            v_g,
            h_f,
            h_g,
            s_f,
            s_g,
        });
    }
    SteamTable::new(rows)
}

/// Load an eight-column saturation table from a file.
pub fn load_steam_table(path: &Path) -> TableResult<SteamTable> {
    parse_steam_table(&fs::read_to_string(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    const GOOD: &str = "\
T h pr u vr
100 10 1 5 100
200, 20, 2, 10, 50
300 30 4 15 25
";

    #[test]
    fn parses_whitespace_and_comma_rows() {
        let table = parse_gas_table(GOOD).unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.rows()[1].h, 20.0);
    }

    #[test]
    fn header_line_is_skipped_not_parsed() {
        // The header is non-numeric; reaching row data proves it was skipped.
        assert!(parse_gas_table(GOOD).is_ok());
    }

    #[test]
    fn blank_lines_are_ignored() {
        let text = "T h pr u vr\n100 10 1 5 100\n\n200 20 2 10 50\n";
        assert_eq!(parse_gas_table(text).unwrap().len(), 2);
    }

    #[test]
    fn wrong_column_count_reports_line() {
        let text = "T h pr u vr\n100 10 1 5 100\n200 20 2\n";
        let err = parse_gas_table(text).unwrap_err();
        match err {
            TableError::Load { line, reason } => {
                assert_eq!(line, 3);
                assert!(reason.contains("expected 5 columns"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn non_numeric_field_reports_line() {
        let text = "T h pr u vr\n100 ten 1 5 100\n200 20 2 10 50\n";
        let err = parse_gas_table(text).unwrap_err();
        assert!(matches!(err, TableError::Load { line: 2, .. }));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load_gas_table(Path::new("/nonexistent/air.txt")).unwrap_err();
        assert!(matches!(err, TableError::Io(_)));
    }

    #[test]
    fn structural_validation_applies_to_loaded_tables() {
        // Parses fine but enthalpy is not monotonic.
        let text = "T h pr u vr\n100 10 1 5 100\n200 9 2 10 50\n300 30 4 15 25\n";
        let err = parse_gas_table(text).unwrap_err();
        assert!(matches!(err, TableError::NotMonotonic { .. }));
    }

    #[test]
    fn parses_saturation_rows() {
        let text = "\
p Tsat vf vg hf hg sf sg
100 372.76 0.001043 1.694 417.51 2675.0 1.3028 7.3589
200 393.36 0.001061 0.8858 504.71 2706.3 1.5302 7.1269
";
        let table = parse_steam_table(text).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.rows()[0].h_g, 2675.0);
    }
}
