use crate::error::NavigatorError;
use crate::quiz::{AnswerState, QuizState};
use crate::ui::Ui;

fn show_result(ui: &mut dyn Ui, state: &AnswerState, correct: &str) {
    match state {
        AnswerState::Correct => ui.success("Correct!"),
        AnswerState::Incorrect { .. } => ui.error(&format!("Wrong! Correct answer is {}", correct)),
        AnswerState::Unanswered => {}
    }
}

/// Questions already answered show their stored result instead of widgets.
pub fn show(ui: &mut dyn Ui, quiz: &mut QuizState) -> Result<(), NavigatorError> {
    ui.title("Interactive Quiz");

    for (index, question) in quiz.questions().iter().enumerate() {
        let n = index + 1;
        ui.subheader(&format!("Question {}: {}", n, question.prompt));

        if let Some(state) = quiz.state(index).filter(|s| s.is_answered()) {
            show_result(ui, state, question.correct);
            continue;
        }

        let choice = ui.radio(&format!("Options for question {}", n), question.options)?;
        if ui.button(&format!("Submit Answer for Question {}", n))? {
            let answer = question.options.get(choice).copied().unwrap_or_default();
            let state = quiz.submit(index, answer)?;
            show_result(ui, &state, question.correct);
        }
    }

    ui.write(&format!("Your total score: {}/{}", quiz.score(), quiz.total()));

    if quiz.is_complete() && ui.button("Restart Quiz")? {
        quiz.reset();
        ui.write("Quiz restarted.");
    }
    Ok(())
}
