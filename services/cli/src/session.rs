use crate::render::{render_question, render_step_header};
use counselor_assessment::assessment::domain::{
    NavigationOutcome, Question, QuestionFormat, ResponseValue,
};
use counselor_assessment::assessment::AssessmentFlow;
use counselor_assessment::error::AppError;
use std::io::{BufRead, Write};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SessionEnd {
    /// Every section step was passed and the results step is showing.
    Finished,
    Quit,
}

/// Line-oriented questionnaire driving an [`AssessmentFlow`] from any reader.
pub(crate) struct Session<R, W> {
    input: R,
    output: W,
    echo: bool,
}

enum Command {
    Answer(ResponseValue),
    Keep,
    Back,
    Quit,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub(crate) fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            echo: false,
        }
    }

    /// Repeats every line read after its prompt, for scripted runs.
    pub(crate) fn echoing(mut self) -> Self {
        self.echo = true;
        self
    }

    pub(crate) fn run(mut self, flow: &mut AssessmentFlow) -> Result<SessionEnd, AppError> {
        let mut announced = None;

        loop {
            let Some(controller) = flow.active_section() else {
                return Ok(SessionEnd::Finished);
            };
            let Some(question) = controller.current_question().cloned() else {
                flow.advance_step();
                continue;
            };
            let position = (controller.current_index(), controller.len());
            let current = controller.response(question.id).cloned();

            if announced != Some(flow.current_step_index()) {
                render_step_header(flow, &mut self.output)?;
                announced = Some(flow.current_step_index());
            }
            render_question(&question, position, current.as_ref(), &mut self.output)?;

            let Some(line) = self.prompt()? else {
                return Ok(SessionEnd::Quit);
            };

            match parse_command(&question, &line, current.is_some()) {
                Ok(Command::Quit) => return Ok(SessionEnd::Quit),
                Ok(Command::Back) => self.go_back(flow, &mut announced)?,
                Ok(Command::Keep) => self.go_forward(flow)?,
                Ok(Command::Answer(value)) => match flow.record_current(value) {
                    Ok(_) => {
                        self.show_feedback(flow)?;
                        self.go_forward(flow)?;
                    }
                    Err(err) => writeln!(self.output, "Invalid answer: {err}")?,
                },
                Err(message) => writeln!(self.output, "{message}")?,
            }
        }
    }

    fn prompt(&mut self) -> Result<Option<String>, AppError> {
        write!(self.output, "> ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        let line = line.trim().to_string();
        if self.echo {
            writeln!(self.output, "{line}")?;
        }
        Ok(Some(line))
    }

    fn go_forward(&mut self, flow: &mut AssessmentFlow) -> Result<(), AppError> {
        match flow.next_question() {
            NavigationOutcome::Moved { .. } => {}
            NavigationOutcome::AtBoundary => {
                writeln!(self.output, "\nSection complete.")?;
                flow.advance_step();
            }
            NavigationOutcome::AwaitingResponse => {
                writeln!(self.output, "Please answer the question before moving on.")?;
            }
        }
        Ok(())
    }

    fn go_back(
        &mut self,
        flow: &mut AssessmentFlow,
        announced: &mut Option<usize>,
    ) -> Result<(), AppError> {
        if flow.previous_question().is_moved() {
            return Ok(());
        }
        if flow.retreat_step().is_moved() {
            // Resume on the last question; stops early at the first unanswered one.
            while flow.next_question().is_moved() {}
            *announced = None;
            debug!(step = %flow.current_step(), "returned to previous step");
            return Ok(());
        }
        writeln!(self.output, "Already at the first question.")?;
        Ok(())
    }

    fn show_feedback(&mut self, flow: &AssessmentFlow) -> Result<(), AppError> {
        let Some(feedback) = flow.active_section().and_then(|section| section.feedback()) else {
            return Ok(());
        };

        if feedback.correct {
            writeln!(self.output, "Correct!")?;
        } else {
            writeln!(
                self.output,
                "Incorrect. The correct answer is: {}",
                feedback.correct_option
            )?;
        }
        writeln!(self.output, "Explanation: {}", feedback.explanation)?;
        Ok(())
    }
}

fn parse_command(question: &Question, line: &str, answered: bool) -> Result<Command, String> {
    match line.to_ascii_lowercase().as_str() {
        "quit" | "q" | "exit" => return Ok(Command::Quit),
        "back" | "b" => return Ok(Command::Back),
        "" if answered => return Ok(Command::Keep),
        "" => return Err("Please enter an answer, `back` or `quit`.".to_string()),
        _ => {}
    }

    let number: u16 = line
        .parse()
        .map_err(|_| format!("'{line}' is not a number; enter {}.", hint(&question.format)))?;

    match &question.format {
        QuestionFormat::Likert | QuestionFormat::Scale => {
            Ok(Command::Answer(ResponseValue::Rating(number)))
        }
        QuestionFormat::Choice { .. } | QuestionFormat::Graded { .. } => usize::from(number)
            .checked_sub(1)
            .and_then(|index| question.choice(index))
            .map(Command::Answer)
            .ok_or_else(|| {
                format!(
                    "There is no option {number}; enter {}.",
                    hint(&question.format)
                )
            }),
    }
}

fn hint(format: &QuestionFormat) -> String {
    match format {
        QuestionFormat::Likert => "a rating from 1 to 5".to_string(),
        QuestionFormat::Scale => "a value from 0 to 100".to_string(),
        QuestionFormat::Choice { options, .. } | QuestionFormat::Graded { options, .. } => {
            format!("an option number from 1 to {}", options.len())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use counselor_assessment::assessment::domain::{AssessmentStep, SectionId};
    use std::io::Cursor;

    fn run_script(flow: &mut AssessmentFlow, script: &str) -> (SessionEnd, String) {
        let mut output = Vec::new();
        let end = Session::new(Cursor::new(script.to_string()), &mut output)
            .run(flow)
            .expect("session runs");
        (end, String::from_utf8(output).expect("utf8 output"))
    }

    const PSYCHOMETRIC: &str = "5\n4\n4\n3\n1\n1\n";
    const TECHNICAL: &str = "1\n1\n2\n2\n1\n2\n";
    const WISCAR: &str = "5\n4\n85\n5\n4\n70\n1\n4\n4\n5\n2\n4\n";

    #[test]
    fn full_script_reaches_results() {
        let mut flow = AssessmentFlow::standard();
        let script = format!("{PSYCHOMETRIC}{TECHNICAL}{WISCAR}");

        let (end, output) = run_script(&mut flow, &script);

        assert_eq!(end, SessionEnd::Finished);
        assert_eq!(flow.current_step(), AssessmentStep::Results);
        assert_eq!(flow.completed_steps().len(), 3);
        assert!((flow.answered_percent() - 100.0).abs() < 1e-9);
        assert!(output.contains("Technical & Aptitude Evaluation"));
        assert!(output.contains("Correct!"));
    }

    #[test]
    fn invalid_input_is_reported_and_reprompted() {
        let mut flow = AssessmentFlow::standard();

        let (end, output) = run_script(&mut flow, "maybe\n9\n4\nquit\n");

        assert_eq!(end, SessionEnd::Quit);
        assert!(output.contains("'maybe' is not a number"));
        assert!(output.contains("Invalid answer"));
        let psychometric = flow
            .data()
            .get(SectionId::Psychometric)
            .expect("one answer recorded");
        assert_eq!(psychometric.responses.len(), 1);
        assert_eq!(
            flow.active_section().map(|section| section.current_index()),
            Some(1)
        );
    }

    #[test]
    fn back_on_a_first_question_returns_to_the_previous_step() {
        let mut flow = AssessmentFlow::standard();
        let script = format!("{PSYCHOMETRIC}back\nquit\n");

        let (_, output) = run_script(&mut flow, &script);

        assert_eq!(flow.current_step(), AssessmentStep::Psychometric);
        assert!(flow.is_completed(0));
        let active = flow.active_section().expect("psychometric remounted");
        assert_eq!(active.answered_count(), 6);
        assert_eq!(active.current_index(), active.len() - 1);
        assert!(!output.contains("Already at the first question."));
    }

    #[test]
    fn back_then_back_again_walks_the_previous_step_in_reverse() {
        let mut flow = AssessmentFlow::standard();
        let script = format!("{PSYCHOMETRIC}back\nback\nquit\n");

        run_script(&mut flow, &script);

        assert_eq!(flow.current_step(), AssessmentStep::Psychometric);
        assert_eq!(
            flow.active_section().map(|section| section.current_index()),
            Some(4)
        );
    }

    #[test]
    fn back_into_a_skipped_step_stops_at_its_first_gap() {
        let mut flow = AssessmentFlow::standard();
        flow.advance_step();

        run_script(&mut flow, "back\nquit\n");

        assert_eq!(flow.current_step(), AssessmentStep::Psychometric);
        assert_eq!(
            flow.active_section().map(|section| section.current_index()),
            Some(0)
        );
    }

    #[test]
    fn back_on_the_first_question_stays_put() {
        let mut flow = AssessmentFlow::standard();

        let (_, output) = run_script(&mut flow, "back\nquit\n");

        assert!(output.contains("Already at the first question."));
        assert_eq!(flow.current_step_index(), 0);
    }

    #[test]
    fn wrong_technical_answer_shows_the_correct_option() {
        let mut flow = AssessmentFlow::standard();
        let script = format!("{PSYCHOMETRIC}3\nquit\n");

        let (_, output) = run_script(&mut flow, &script);

        assert!(output.contains("Incorrect. The correct answer is: 33.3 hours"));
        assert!(output.contains("Explanation:"));
    }

    #[test]
    fn empty_line_keeps_an_existing_answer() {
        let mut flow = AssessmentFlow::standard();

        let (_, output) = run_script(&mut flow, "4\nback\n\nquit\n");

        assert!(!output.contains("Please enter an answer"));
        assert_eq!(
            flow.active_section().map(|section| section.current_index()),
            Some(1)
        );
    }

    #[test]
    fn end_of_input_counts_as_quitting() {
        let mut flow = AssessmentFlow::standard();

        let (end, _) = run_script(&mut flow, "5\n");

        assert_eq!(end, SessionEnd::Quit);
    }

    #[test]
    fn option_numbers_map_to_listed_options() {
        let bank = counselor_assessment::assessment::QuestionBank::technical();
        let question = bank.question("knowledge_2").expect("true/false question");

        assert!(matches!(
            parse_command(question, "2", false),
            Ok(Command::Answer(ResponseValue::Choice(ref option))) if option == "False"
        ));
        assert!(parse_command(question, "3", false).is_err());
        assert!(parse_command(question, "0", false).is_err());
    }
}
