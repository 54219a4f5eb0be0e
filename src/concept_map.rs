//! Star-shaped concept graphs: one topic in the middle, every subtopic
//! linked only to it.

/// Split a comma-separated subtopic list: items are trimmed, and empty
/// items, repeats and items equal to `center` are dropped.
pub fn split_subtopics(center: &str, subtopics_csv: &str) -> Vec<String> {
    let center = center.trim();
    let mut leaves: Vec<String> = Vec::new();
    for item in subtopics_csv.split(',').map(str::trim) {
        if item.is_empty() || item == center || leaves.iter().any(|l| l == item) {
            continue;
        }
        leaves.push(item.to_string());
    }
    leaves
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConceptGraph {
    center: String,
    leaves: Vec<String>,
}

impl ConceptGraph {
    pub fn build(center: &str, subtopics_csv: &str) -> Self {
        Self {
            center: center.trim().to_string(),
            leaves: split_subtopics(center, subtopics_csv),
        }
    }

    pub fn center(&self) -> &str {
        &self.center
    }

    pub fn leaves(&self) -> &[String] {
        &self.leaves
    }

    pub fn node_count(&self) -> usize {
        1 + self.leaves.len()
    }

    pub fn edge_count(&self) -> usize {
        self.leaves.len()
    }

    /// `(center, leaf)` for every edge.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str)> {
        self.leaves.iter().map(move |leaf| (self.center.as_str(), leaf.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_edge_per_subtopic_from_center() {
        let graph = ConceptGraph::build("Biology", " Cells, Genetics ,Evolution");
        assert_eq!(graph.center(), "Biology");
        assert_eq!(graph.leaves(), &["Cells", "Genetics", "Evolution"]);
        assert_eq!(graph.node_count(), 4);
        assert_eq!(graph.edge_count(), 3);
        assert!(graph.edges().all(|(from, _)| from == "Biology"));
    }

    #[test]
    fn edge_count_matches_non_trivial_split() {
        for input in ["a,b,c", "a,,b", " , ,", "a,a,b", "x", "", "Topic,a"] {
            let graph = ConceptGraph::build("Topic", input);
            assert_eq!(graph.edge_count(), split_subtopics("Topic", input).len(), "{:?}", input);
            assert!(graph.edges().all(|(from, to)| from == "Topic" && to != "Topic"));
        }
    }

    #[test]
    fn empty_repeated_and_self_items_are_dropped() {
        assert_eq!(split_subtopics("Math", "Algebra,, Algebra ,Math,Geometry,"), vec!["Algebra", "Geometry"]);
        assert!(split_subtopics("Math", " , ").is_empty());
    }
}
