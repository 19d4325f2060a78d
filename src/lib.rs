pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod message;
pub mod prompt;
pub mod questions;
pub mod session;
pub mod ui;
pub mod wrap;

use serde::Serialize;

use crate::config::AppConfig;
use crate::questions::{Answer, Answers, Schedule};

/// Serializable view of a question, as handed to an external host.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionSpec {
    pub name: &'static str,
    pub kind: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<Answer>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub choices: Vec<catalog::Choice>,
    pub conditional: bool,
}

pub fn describe(schedule: &Schedule) -> Vec<QuestionSpec> {
    let empty = Answers::new();
    schedule
        .iter()
        .map(|q| QuestionSpec {
            name: q.name,
            kind: q.kind.label(),
            message: q.message(&schedule.limits, &empty),
            default: q.default.clone(),
            choices: match &q.kind {
                questions::QuestionKind::List(choices) => choices.clone(),
                _ => Vec::new(),
            },
            conditional: q.when.is_some(),
        })
        .collect()
}

/// Build the schedule, let `host` answer it and assemble the message.
pub fn compose<H: session::Host>(cfg: &AppConfig, host: &mut H) -> error::Result<String> {
    let schedule = Schedule::build(cfg);
    let answers = session::collect(&schedule, host)?;
    message::assemble(&answers, &cfg.types, cfg.max_line_width)
}
