use crate::error::NavigatorError;
use crate::study_plan::{StudyPlanRequest, DEFAULT_DAILY_HOURS, MAX_DAILY_HOURS, MIN_DAILY_HOURS, SUBJECTS};
use crate::ui::Ui;

pub fn show(ui: &mut dyn Ui) -> Result<(), NavigatorError> {
    ui.title("Personalized Study Plan Generator");
    let name = ui.text_input("Name")?;
    let daily_hours = ui.slider(
        "How many hours can you study per day?",
        MIN_DAILY_HOURS,
        MAX_DAILY_HOURS,
        DEFAULT_DAILY_HOURS,
    )?;
    let options: Vec<String> = SUBJECTS.iter().map(|s| s.to_string()).collect();
    let subjects = ui.multiselect("Select the subjects you want to study", &options, &[])?;
    let exam_date = ui.date_input("Select the date of your next exam")?;
    if !ui.button("Generate Study Plan")? {
        return Ok(());
    }

    let request = StudyPlanRequest { name: name.trim().to_string(), daily_hours, subjects, exam_date };
    match request.generate() {
        Ok(plan) => {
            for line in plan.lines() {
                ui.write(&line);
            }
        }
        Err(NavigatorError::Validation(message)) => ui.error(&message),
        Err(e) => return Err(e),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::ScriptedUi;
    use chrono::NaiveDate;

    fn exam() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 6, 1).unwrap()
    }

    #[test]
    fn even_split_over_selected_subjects() {
        let mut ui = ScriptedUi::new()
            .text("Ana")
            .number(9)
            .choices(&["Math", "Science", "History"])
            .date(exam())
            .press();

        show(&mut ui).unwrap();
        assert_eq!(
            ui.writes(),
            vec![
                "Study plan for Ana generated!",
                "Study 9 hours every day:",
                "- Math: 3.00 hours per day",
                "- Science: 3.00 hours per day",
                "- History: 3.00 hours per day",
            ]
        );
    }

    #[test]
    fn missing_subjects_is_refused() {
        let mut ui = ScriptedUi::new().text("Ana").default_value().default_value().date(exam()).press();

        show(&mut ui).unwrap();
        assert_eq!(ui.errors(), vec!["Please enter all the details!"]);
        assert!(ui.writes().is_empty());
    }
}
