//! Study plan allocation: the daily budget is split evenly across subjects.

use chrono::NaiveDate;

use crate::error::NavigatorError;

pub const SUBJECTS: [&str; 5] = ["Math", "Science", "History", "Language", "Arts"];

pub const MIN_DAILY_HOURS: u32 = 1;
pub const MAX_DAILY_HOURS: u32 = 12;
pub const DEFAULT_DAILY_HOURS: u32 = 3;

#[derive(Debug, Clone, PartialEq)]
pub struct Allocation {
    pub subject: String,
    pub hours: f64,
}

/// Even split of `daily_hours` over `subjects`. Empty input gives no allocation.
pub fn allocate(daily_hours: f64, subjects: &[String]) -> Vec<Allocation> {
    if subjects.is_empty() {
        return Vec::new();
    }
    let share = daily_hours / subjects.len() as f64;
    subjects
        .iter()
        .map(|subject| Allocation { subject: subject.clone(), hours: share })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct StudyPlanRequest {
    pub name: String,
    pub daily_hours: u32,
    pub subjects: Vec<String>,
    pub exam_date: NaiveDate,
}

impl StudyPlanRequest {
    /// Name and at least one subject are required.
    pub fn validate(&self) -> Result<(), NavigatorError> {
        if self.name.trim().is_empty() || self.subjects.is_empty() {
            return Err(NavigatorError::Validation("Please enter all the details!".to_string()));
        }
        Ok(())
    }

    pub fn generate(&self) -> Result<StudyPlan, NavigatorError> {
        self.validate()?;

        let mut subjects: Vec<String> = Vec::with_capacity(self.subjects.len());
        for subject in &self.subjects {
            if !subjects.contains(subject) {
                subjects.push(subject.clone());
            }
        }

        Ok(StudyPlan {
            name: self.name.clone(),
            daily_hours: self.daily_hours,
            exam_date: self.exam_date,
            allocations: allocate(f64::from(self.daily_hours), &subjects),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StudyPlan {
    pub name: String,
    pub daily_hours: u32,
    pub exam_date: NaiveDate,
    pub allocations: Vec<Allocation>,
}

impl StudyPlan {
    /// The lines shown on the page, in order.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![
            format!("Study plan for {} generated!", self.name),
            format!("Study {} hours every day:", self.daily_hours),
        ];
        lines.extend(
            self.allocations
                .iter()
                .map(|a| format!("- {}: {:.2} hours per day", a.subject, a.hours)),
        );
        lines
    }
}
