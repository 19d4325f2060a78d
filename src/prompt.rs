use inquire::validator::Validation;
use inquire::{CustomUserError, InquireError, Select, Text};

use crate::error::{Error, Result};
use crate::questions::{Answer, Answers, Limits, Question, QuestionKind};
use crate::session::Host;
use crate::ui;

/// Interactive host rendering questions in the terminal with `inquire`.
#[derive(Debug, Default)]
pub struct TerminalHost;

impl Host for TerminalHost {
    fn ask(&mut self, question: &Question, limits: &Limits, answers: &Answers) -> Result<Option<Answer>> {
        let message = question.message(limits, answers);
        match &question.kind {
            QuestionKind::List(choices) => {
                let default = match &question.default {
                    Some(Answer::Text(value)) => value.as_str(),
                    _ => "",
                };
                let cursor = choices.iter().position(|c| c.value == default).unwrap_or(0);
                let choice = Select::new(&message, choices.clone())
                    .with_starting_cursor(cursor)
                    .with_page_size(12)
                    .prompt()
                    .map_err(abort_or_host)?;
                Ok(Some(Answer::Text(choice.value)))
            }
            QuestionKind::Confirm => {
                let default = question.default.as_ref().is_some_and(Answer::is_truthy);
                match ui::confirm(&message, default).map_err(abort_or_host)? {
                    Some(flag) => Ok(Some(Answer::Flag(flag))),
                    None => Err(Error::Aborted),
                }
            }
            QuestionKind::Input => ask_text(question, &message, limits, answers),
        }
    }
}

fn ask_text(question: &Question, message: &str, limits: &Limits, answers: &Answers) -> Result<Option<Answer>> {
    let default = match &question.default {
        Some(Answer::Text(value)) => Some(value.as_str()),
        _ => None,
    };
    let formatter = question
        .transformer
        .map(|transform| move |input: &str| transform(limits, input, answers));

    let mut prompt = Text::new(message);
    if let Some(default) = default {
        prompt = prompt.with_default(default);
    }
    if let Some(validate) = question.validate {
        let limits = *limits;
        let answers = answers.clone();
        prompt = prompt.with_validator(move |input: &str| -> Result<Validation, CustomUserError> {
            Ok(match validate(&limits, input, &answers) {
                Ok(()) => Validation::Valid,
                Err(err) => Validation::Invalid(err.message.into()),
            })
        });
    }
    if let Some(formatter) = &formatter {
        prompt = prompt.with_formatter(formatter);
    }

    let value = prompt.prompt().map_err(abort_or_host)?;
    Ok(Some(Answer::Text(value)))
}

fn abort_or_host(err: InquireError) -> Error {
    match err {
        InquireError::OperationCanceled | InquireError::OperationInterrupted => Error::Aborted,
        other => Error::Host(other.into()),
    }
}
