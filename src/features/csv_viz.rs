use std::path::Path;

use crate::chart::{self, ChartOutcome};
use crate::error::NavigatorError;
use crate::tabular;
use crate::ui::{artifact_path, Ui};

pub const NO_NUMERIC_COLUMNS: &str = "No numerical columns found for visualization.";
pub const NO_SELECTION: &str = "Please select at least one numerical column.";

pub fn show(ui: &mut dyn Ui, output_dir: &Path) -> Result<(), NavigatorError> {
    ui.header("Upload CSV for Data Visualization");
    let Some(file) = ui.file_uploader("Upload CSV file", &["csv"])? else {
        return Ok(());
    };

    ui.subheader("Data Visualization");
    let table = tabular::load(&file.bytes)?;
    ui.table(&table);

    let numeric = tabular::numeric_columns(&table);
    if numeric.is_empty() {
        ui.error(NO_NUMERIC_COLUMNS);
        return Ok(());
    }
    let selected = ui.multiselect("Select columns to visualize", &numeric, &numeric)?;

    let stem = Path::new(&file.name)
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "chart".to_string());
    match chart::render(&table, &selected, &artifact_path(output_dir, &stem, "svg"))? {
        ChartOutcome::Drawn { path, columns } => {
            ui.image(&format!("Line chart of {}", columns.join(", ")), &path);
        }
        ChartOutcome::NoSelection => {
            return Err(NavigatorError::EmptySelection(NO_SELECTION.to_string()));
        }
        ChartOutcome::NoNumericColumns => ui.error(NO_NUMERIC_COLUMNS),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::{Element, ScriptedUi};

    #[test]
    fn text_only_csv_reports_no_numeric_columns() {
        let dir = tempfile::tempdir().unwrap();
        let mut ui = ScriptedUi::new().file("names.csv", b"name,city\nAna,Lima\n");

        show(&mut ui, dir.path()).unwrap();
        assert_eq!(ui.errors(), vec![NO_NUMERIC_COLUMNS]);
        assert!(ui.images().is_empty());
        assert_eq!(ui.remaining_inputs(), 0);
    }

    #[test]
    fn empty_selection_is_refused_and_draws_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let mut ui = ScriptedUi::new().file("scores.csv", b"name,score\nAna,3\nBen,4\n").choices(&[]);

        let err = show(&mut ui, dir.path()).unwrap_err();
        assert!(matches!(err, NavigatorError::EmptySelection(ref m) if m == NO_SELECTION));
        assert!(ui.images().is_empty());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn default_selection_charts_every_numeric_column() {
        let dir = tempfile::tempdir().unwrap();
        let mut ui = ScriptedUi::new()
            .file("scores.csv", b"name,math,art\nAna,3,5\nBen,4,6\n")
            .default_value();

        show(&mut ui, dir.path()).unwrap();
        assert!(ui.elements().contains(&Element::Table { columns: 3, rows: 2 }));
        let images = ui.images();
        assert_eq!(images.len(), 1);
        assert!(images[0].starts_with(dir.path()));
        assert!(images[0].exists());
    }
}
