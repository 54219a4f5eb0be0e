//! The built-in interactive quiz.
//!
//! Each question moves from `Unanswered` to `Correct` or `Incorrect` exactly
//! once. Later submissions for an answered question are ignored, so the score
//! can only grow by one per question.

use crate::error::NavigatorError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizQuestion {
    pub prompt: &'static str,
    pub options: &'static [&'static str],
    pub correct: &'static str,
}

pub const QUESTIONS: &[QuizQuestion] = &[
    QuizQuestion {
        prompt: "What is the capital of France?",
        options: &["Paris", "Berlin", "Madrid", "Rome"],
        correct: "Paris",
    },
    QuizQuestion {
        prompt: "Who wrote 'Hamlet'?",
        options: &["Shakespeare", "Hemingway", "Tolkien", "Austen"],
        correct: "Shakespeare",
    },
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerState {
    Unanswered,
    Correct,
    Incorrect { chosen: String },
}

impl AnswerState {
    pub fn is_answered(&self) -> bool {
        !matches!(self, AnswerState::Unanswered)
    }
}

/// Progress through a fixed question set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizState {
    questions: &'static [QuizQuestion],
    answers: Vec<AnswerState>,
    score: u32,
}

impl Default for QuizState {
    fn default() -> Self {
        Self::new(QUESTIONS)
    }
}

impl QuizState {
    pub fn new(questions: &'static [QuizQuestion]) -> Self {
        Self {
            questions,
            answers: vec![AnswerState::Unanswered; questions.len()],
            score: 0,
        }
    }

    pub fn questions(&self) -> &'static [QuizQuestion] {
        self.questions
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn state(&self, index: usize) -> Option<&AnswerState> {
        self.answers.get(index)
    }

    pub fn is_complete(&self) -> bool {
        self.answers.iter().all(AnswerState::is_answered)
    }

    /// Record `answer` for question `index` and return the resulting state.
    pub fn submit(&mut self, index: usize, answer: &str) -> Result<AnswerState, NavigatorError> {
        let questions = self.questions;
        let question = questions
            .get(index)
            .ok_or_else(|| NavigatorError::Validation(format!("No question number {}", index + 1)))?;
        let slot = &mut self.answers[index];
        if slot.is_answered() {
            return Ok(slot.clone());
        }

        *slot = if answer == question.correct {
            self.score += 1;
            AnswerState::Correct
        } else {
            AnswerState::Incorrect { chosen: answer.to_string() }
        };
        Ok(slot.clone())
    }

    pub fn reset(&mut self) {
        *self = Self::new(self.questions);
    }
}
