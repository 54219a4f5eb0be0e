//! One module per sidebar entry. Each `show` renders a full page visit
//! against a `Ui`.
//!
//! Pages render their own validation messages. Remote, document and render
//! failures are returned and shown inline by the menu.

pub mod concept_map;
pub mod csv_viz;
pub mod evaluator;
pub mod home;
pub mod mcq;
pub mod pdf_qa;
pub mod quiz;
pub mod research;
pub mod study_plan;
pub mod summary;
