//! State that outlives a single page visit.
//!
//! Only the selected feature and quiz progress are kept; every other widget
//! value is local to the visit that read it.

use crate::menu::Feature;
use crate::quiz::QuizState;

#[derive(Debug, Clone, Default)]
pub struct Session {
    feature: Feature,
    quiz: QuizState,
    visits: usize,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn feature(&self) -> Feature {
        self.feature
    }

    pub fn select(&mut self, feature: Feature) {
        self.feature = feature;
        self.visits += 1;
    }

    /// Number of page visits so far.
    pub fn visits(&self) -> usize {
        self.visits
    }

    pub fn quiz(&self) -> &QuizState {
        &self.quiz
    }

    pub fn quiz_mut(&mut self) -> &mut QuizState {
        &mut self.quiz
    }
}
