use log::debug;

use crate::error::{Error, Result, ValidationError};
use crate::questions::{Answer, Answers, Limits, Question, QuestionKind, Schedule};

/// Whatever renders questions and collects the raw answers.
pub trait Host {
    /// Ask a single question. `Ok(None)` means nothing was entered and the
    /// question default applies.
    fn ask(&mut self, question: &Question, limits: &Limits, answers: &Answers) -> Result<Option<Answer>>;
}

/// Walk the schedule against `host`, honouring each question's `when`
/// predicate, default, validator and filter, and return the answers of the
/// questions that were actually asked.
pub fn collect<H: Host>(schedule: &Schedule, host: &mut H) -> Result<Answers> {
    let mut answers = Answers::new();

    for question in schedule.iter() {
        if !question.should_ask(&answers) {
            debug!("skipping '{}'", question.name);
            continue;
        }

        let raw = host
            .ask(question, &schedule.limits, &answers)?
            .or_else(|| question.default.clone());

        let answer = match (&question.kind, raw) {
            (QuestionKind::Confirm, raw) => Answer::Flag(match raw {
                None => false,
                Some(Answer::Flag(flag)) => flag,
                Some(Answer::Text(text)) => parse_flag(&text).ok_or_else(|| Error::Validation {
                    question: question.name,
                    source: ValidationError::new(format!("'{text}' is not a yes/no answer")),
                })?,
            }),
            (QuestionKind::List(choices), Some(Answer::Text(value))) => {
                if !choices.iter().any(|c| c.value == value) {
                    return Err(Error::Validation {
                        question: question.name,
                        source: ValidationError::new(format!("'{value}' is not one of the listed choices")),
                    });
                }
                Answer::Text(value)
            }
            (QuestionKind::List(_), _) => return Err(Error::MissingAnswer(question.name)),
            (QuestionKind::Input, raw) => {
                let value = match raw {
                    Some(Answer::Text(text)) => text,
                    Some(Answer::Flag(flag)) => flag.to_string(),
                    None => String::new(),
                };
                question
                    .validate(&schedule.limits, &value, &answers)
                    .map_err(|source| Error::Validation {
                        question: question.name,
                        source,
                    })?;
                Answer::Text(question.filter(&value))
            }
        };

        answers.insert(question.name, answer);
    }

    Ok(answers)
}

/// Text spellings accepted for a confirm question.
fn parse_flag(text: &str) -> Option<bool> {
    match text.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "y" => Some(true),
        "false" | "no" | "n" => Some(false),
        _ => None,
    }
}

/// Non-interactive host answering from a pre-filled answer set.
#[derive(Debug, Clone, Default)]
pub struct ScriptedHost {
    script: Answers,
}

impl ScriptedHost {
    pub fn new(script: Answers) -> Self {
        Self { script }
    }
}

impl Host for ScriptedHost {
    fn ask(&mut self, question: &Question, _: &Limits, _: &Answers) -> Result<Option<Answer>> {
        Ok(self.script.get(question.name).cloned())
    }
}
