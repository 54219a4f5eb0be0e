//! CSV loading and numeric column detection.

use crate::error::TabularError;
use tracing::info;

/// A parsed CSV: one header row plus string cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Parse CSV bytes with a mandatory header row.
    pub fn from_csv(bytes: &[u8]) -> Result<Self, TabularError> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(bytes);

        let headers = unique_headers(rdr.headers()?.iter());

        let mut rows = Vec::new();
        for record in rdr.records() {
            let record = record?;
            rows.push(record.iter().map(|c| c.to_string()).collect());
        }

        info!(columns = headers.len(), rows = rows.len(), "Loaded CSV table");
        Ok(Self { headers, rows })
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    fn column(&self, index: usize) -> impl Iterator<Item = &str> {
        self.rows.iter().map(move |row| row.get(index).map(String::as_str).unwrap_or(""))
    }

    /// Columns, in header order, whose non-empty cells all parse as numbers.
    /// A column with no values at all is not numeric.
    pub fn numeric_columns(&self) -> Vec<String> {
        self.headers
            .iter()
            .enumerate()
            .filter(|(index, _)| {
                let mut seen = false;
                for cell in self.column(*index).filter(|c| !c.is_empty()) {
                    if cell.parse::<f64>().is_err() {
                        return false;
                    }
                    seen = true;
                }
                seen
            })
            .map(|(_, name)| name.clone())
            .collect()
    }

    /// Values of a column by row, `None` where a cell is empty or not a number.
    pub fn numeric_values(&self, name: &str) -> Result<Vec<Option<f64>>, TabularError> {
        let index = self
            .column_index(name)
            .ok_or_else(|| TabularError::UnknownColumn(name.to_string()))?;
        Ok(self.column(index).map(|cell| cell.parse::<f64>().ok()).collect())
    }

    /// Aligned text rendering of the header and the first `max_rows` rows.
    pub fn preview(&self, max_rows: usize) -> String {
        let shown = &self.rows[..self.rows.len().min(max_rows)];
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.chars().count()).collect();
        for row in shown {
            for (i, cell) in row.iter().enumerate() {
                if let Some(w) = widths.get_mut(i) {
                    *w = (*w).max(cell.chars().count());
                }
            }
        }

        let format_row = |cells: &[String]| -> String {
            cells
                .iter()
                .zip(&widths)
                .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
                .collect::<Vec<_>>()
                .join(" | ")
                .trim_end()
                .to_string()
        };

        let mut out = format_row(&self.headers);
        out.push('\n');
        out.push_str(
            &widths
                .iter()
                .map(|w| "-".repeat(*w))
                .collect::<Vec<_>>()
                .join("-+-"),
        );
        for row in shown {
            out.push('\n');
            out.push_str(&format_row(row));
        }
        out.push_str(&format!("\n({} rows x {} columns)", self.rows.len(), self.headers.len()));
        out
    }
}

/// Repeated header names get `.1`, `.2`, ... appended so that every column
/// can be addressed by name.
fn unique_headers<'a>(raw: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut headers: Vec<String> = Vec::new();
    for name in raw {
        let mut candidate = name.to_string();
        let mut n = 0;
        while headers.contains(&candidate) {
            n += 1;
            candidate = format!("{}.{}", name, n);
        }
        headers.push(candidate);
    }
    headers
}

/// Parse an uploaded CSV.
pub fn load(csv_bytes: &[u8]) -> Result<Table, TabularError> {
    Table::from_csv(csv_bytes)
}

pub fn numeric_columns(table: &Table) -> Vec<String> {
    table.numeric_columns()
}

#[cfg(test)]
mod tests {
    use super::*;

    const GRADES: &str = "student,math,science,grade\nAna,90,85.5,A\nBen,72,,B\nCal,-3,1e2,C\n";

    #[test]
    fn detects_numeric_columns_in_header_order() {
        let table = load(GRADES.as_bytes()).unwrap();
        assert_eq!(table.headers(), &["student", "math", "science", "grade"]);
        assert_eq!(table.row_count(), 3);
        assert_eq!(numeric_columns(&table), vec!["math", "science"]);
    }

    #[test]
    fn table_without_numbers_has_no_numeric_columns() {
        let table = load(b"name,city\nAna,Paris\nBen,Rome\n").unwrap();
        assert!(numeric_columns(&table).is_empty());
    }

    #[test]
    fn all_empty_column_is_not_numeric() {
        let table = load(b"a,b\n1,\n2,\n").unwrap();
        assert_eq!(numeric_columns(&table), vec!["a"]);
    }

    #[test]
    fn empty_cells_become_gaps() {
        let table = load(GRADES.as_bytes()).unwrap();
        assert_eq!(table.numeric_values("science").unwrap(), vec![Some(85.5), None, Some(100.0)]);
        assert!(matches!(table.numeric_values("missing"), Err(TabularError::UnknownColumn(_))));
    }

    #[test]
    fn repeated_headers_are_suffixed_and_resolve_to_their_own_cells() {
        let table = load(b"score,score,score\nx,1,4\ny,2,5\n").unwrap();
        assert_eq!(table.headers(), &["score", "score.1", "score.2"]);
        assert_eq!(numeric_columns(&table), vec!["score.1", "score.2"]);
        assert_eq!(table.numeric_values("score.1").unwrap(), vec![Some(1.0), Some(2.0)]);
        assert_eq!(table.numeric_values("score").unwrap(), vec![None, None]);
    }

    #[test]
    fn suffix_skips_names_already_taken() {
        let table = load(b"a,a.1,a\n1,2,3\n").unwrap();
        assert_eq!(table.headers(), &["a", "a.1", "a.2"]);
    }

    #[test]
    fn ragged_rows_are_rejected() {
        assert!(matches!(load(b"a,b\n1,2,3\n"), Err(TabularError::Csv(_))));
    }

    #[test]
    fn preview_limits_rows_and_reports_shape() {
        let table = load(GRADES.as_bytes()).unwrap();
        let preview = table.preview(1);
        let lines: Vec<&str> = preview.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("student | math"));
        assert!(lines[2].starts_with("Ana"));
        assert_eq!(lines[3], "(3 rows x 4 columns)");
    }
}
