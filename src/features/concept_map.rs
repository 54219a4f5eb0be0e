use std::path::Path;
use tracing::info;

use crate::chart;
use crate::concept_map::ConceptGraph;
use crate::error::NavigatorError;
use crate::ui::{artifact_path, Ui};

pub const MISSING_INPUT: &str = "Please enter both topic and subtopics.";
pub const NO_SUBTOPICS: &str = "Please enter at least one subtopic other than the topic itself.";

pub fn show(ui: &mut dyn Ui, output_dir: &Path) -> Result<(), NavigatorError> {
    ui.title("Concept Map Generator");
    let topic = ui.text_input("Enter a Topic")?;
    let subtopics = ui.text_area("Enter Subtopics (comma-separated)")?;
    if !ui.button("Generate Concept Map")? {
        return Ok(());
    }
    if topic.trim().is_empty() || subtopics.trim().is_empty() {
        ui.error(MISSING_INPUT);
        return Ok(());
    }

    let graph = ConceptGraph::build(&topic, &subtopics);
    info!(center = graph.center(), edges = graph.edge_count(), "Built concept graph");
    if graph.leaves().is_empty() {
        ui.warning(NO_SUBTOPICS);
        return Ok(());
    }
    let path = chart::render_concept_map(&graph, &artifact_path(output_dir, graph.center(), "svg"))?;
    ui.image(&format!("Concept map for {}", graph.center()), &path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::ScriptedUi;

    #[test]
    fn blank_topic_is_refused() {
        let dir = tempfile::tempdir().unwrap();
        let mut ui = ScriptedUi::new().text(" ").text("a, b").press();

        show(&mut ui, dir.path()).unwrap();
        assert_eq!(ui.errors(), vec![MISSING_INPUT]);
        assert!(ui.images().is_empty());
    }

    #[test]
    fn subtopics_that_all_drop_out_warn_instead_of_drawing() {
        let dir = tempfile::tempdir().unwrap();
        let mut ui = ScriptedUi::new().text("Math").text("Math, , Math ,").press();

        show(&mut ui, dir.path()).unwrap();
        assert_eq!(ui.warnings(), vec![NO_SUBTOPICS]);
        assert!(ui.images().is_empty());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn map_is_written_under_output_dir() {
        let dir = tempfile::tempdir().unwrap();
        let mut ui = ScriptedUi::new().text("Chemistry").text("Atoms, Bonds, Reactions").press();

        show(&mut ui, dir.path()).unwrap();
        let images = ui.images();
        assert_eq!(images.len(), 1);
        assert!(images[0].starts_with(dir.path()));
        assert!(images[0].exists());
    }
}
