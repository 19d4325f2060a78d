//! Question schedule for composing a commit message.
//!
//! The schedule is an ordered list of [`Question`]s. Every dynamic part of a
//! question (prompt text, validation, display transform, whether it is asked
//! at all) is a plain function of the answers collected so far plus the
//! [`Limits`] the schedule was built with.

use std::collections::BTreeMap;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::catalog::Choice;
use crate::config::AppConfig;
use crate::error::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Answer {
    Flag(bool),
    Text(String),
}

impl Answer {
    pub fn is_truthy(&self) -> bool {
        match self {
            Answer::Flag(flag) => *flag,
            Answer::Text(text) => !text.is_empty(),
        }
    }
}

impl From<&str> for Answer {
    fn from(value: &str) -> Self {
        Answer::Text(value.into())
    }
}

impl From<String> for Answer {
    fn from(value: String) -> Self {
        Answer::Text(value)
    }
}

impl From<bool> for Answer {
    fn from(value: bool) -> Self {
        Answer::Flag(value)
    }
}

/// Answers keyed by question name. Only questions that were asked have an
/// entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Answers(BTreeMap<String, Answer>);

impl Answers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, answer: impl Into<Answer>) {
        self.0.insert(name.into(), answer.into());
    }

    pub fn with(mut self, name: &str, answer: impl Into<Answer>) -> Self {
        self.insert(name, answer);
        self
    }

    pub fn get(&self, name: &str) -> Option<&Answer> {
        self.0.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Text answer, or `""` when absent or boolean.
    pub fn text(&self, name: &str) -> &str {
        match self.0.get(name) {
            Some(Answer::Text(text)) => text,
            _ => "",
        }
    }

    /// Boolean answer, `false` when absent. Text answers count by truthiness.
    pub fn flag(&self, name: &str) -> bool {
        self.0.get(name).is_some_and(Answer::is_truthy)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Width limits a schedule is built against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    pub max_line_width: usize,
    pub max_header_width: usize,
}

impl Limits {
    /// Room left for the subject once the header is laid out as
    /// `type(scope): subject <emoji>`.
    pub fn max_subject_length(&self, answers: &Answers) -> usize {
        let type_len = answers.text("type").chars().count();
        let scope = answers.text("scope");
        let scope_len = if scope.is_empty() {
            0
        } else {
            scope.chars().count() + 2
        };
        self.max_header_width
            .saturating_sub(type_len)
            .saturating_sub(scope_len)
            .saturating_sub(2)
    }
}

impl From<&AppConfig> for Limits {
    fn from(cfg: &AppConfig) -> Self {
        Self {
            max_line_width: cfg.max_line_width,
            max_header_width: cfg.max_header_width,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionKind {
    List(Vec<Choice>),
    Input,
    Confirm,
}

impl QuestionKind {
    pub fn label(&self) -> &'static str {
        match self {
            QuestionKind::List(_) => "list",
            QuestionKind::Input => "input",
            QuestionKind::Confirm => "confirm",
        }
    }
}

pub type MessageFn = fn(&Limits, &Answers) -> String;
pub type Validator = fn(&Limits, &str, &Answers) -> Result<(), ValidationError>;
pub type Filter = fn(&str) -> String;
pub type Transformer = fn(&Limits, &str, &Answers) -> String;
pub type Predicate = fn(&Answers) -> bool;

#[derive(Clone, Copy)]
pub enum Message {
    Static(&'static str),
    Computed(MessageFn),
}

#[derive(Clone)]
pub struct Question {
    pub name: &'static str,
    pub kind: QuestionKind,
    pub message: Message,
    pub default: Option<Answer>,
    pub validate: Option<Validator>,
    pub filter: Option<Filter>,
    pub transformer: Option<Transformer>,
    pub when: Option<Predicate>,
}

impl Question {
    fn new(name: &'static str, kind: QuestionKind, message: &'static str) -> Self {
        Self {
            name,
            kind,
            message: Message::Static(message),
            default: None,
            validate: None,
            filter: None,
            transformer: None,
            when: None,
        }
    }

    fn input(name: &'static str, message: &'static str) -> Self {
        Self::new(name, QuestionKind::Input, message)
    }

    fn confirm(name: &'static str, message: &'static str, default: bool) -> Self {
        Self::new(name, QuestionKind::Confirm, message).with_default(Some(Answer::Flag(default)))
    }

    fn with_default(mut self, default: Option<Answer>) -> Self {
        self.default = default;
        self
    }

    fn asked_when(mut self, when: Predicate) -> Self {
        self.when = Some(when);
        self
    }

    pub fn message(&self, limits: &Limits, answers: &Answers) -> String {
        match self.message {
            Message::Static(text) => text.to_string(),
            Message::Computed(render) => render(limits, answers),
        }
    }

    pub fn should_ask(&self, answers: &Answers) -> bool {
        self.when.map_or(true, |when| when(answers))
    }

    pub fn validate(&self, limits: &Limits, value: &str, answers: &Answers) -> Result<(), ValidationError> {
        match self.validate {
            Some(validate) => validate(limits, value, answers),
            None => Ok(()),
        }
    }

    /// Apply the filter to a raw text answer. Empty answers pass through.
    pub fn filter(&self, value: &str) -> String {
        match self.filter {
            Some(filter) if !value.is_empty() => filter(value),
            _ => value.to_string(),
        }
    }

    /// Display form of a raw answer. Never stored.
    pub fn transform(&self, limits: &Limits, value: &str, answers: &Answers) -> String {
        match self.transformer {
            Some(transform) => transform(limits, value, answers),
            None => value.to_string(),
        }
    }
}

impl std::fmt::Debug for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Question")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("default", &self.default)
            .field("conditional", &self.when.is_some())
            .finish_non_exhaustive()
    }
}

/// The ordered question list plus the limits its functions are evaluated
/// against.
#[derive(Debug, Clone)]
pub struct Schedule {
    pub limits: Limits,
    pub questions: Vec<Question>,
}

impl Schedule {
    pub fn build(cfg: &AppConfig) -> Self {
        let issues_default = cfg.default_issues.clone();
        let questions = vec![
            Question::new("type", QuestionKind::List(cfg.types.choices()), "Type of change: ")
                .with_default(text_default(&cfg.default_type)),
            Question {
                validate: Some(validate_scope),
                filter: Some(filter_scope),
                ..Question::input("scope", "Scope of this change (enter to skip): ")
                    .with_default(text_default(&cfg.default_scope))
            },
            Question::confirm("isEmoji", "Emoji by default ? ", true),
            Question::input("emoji", "Your own Emoji: ").asked_when(|a| !a.flag("isEmoji")),
            Question {
                message: Message::Computed(subject_message),
                validate: Some(validate_subject),
                filter: Some(filter_subject),
                transformer: Some(transform_subject),
                ..Question::input("subject", "").with_default(text_default(&cfg.default_subject))
            },
            Question::input("body", "Details (enter to skip): ")
                .with_default(text_default(&cfg.default_body)),
            Question::confirm("isBreaking", "Are there any breaking changes ? ", false),
            Question {
                validate: Some(validate_breaking_body),
                ..Question::input(
                    "breakingBody",
                    "A breaking change requires a body. Please enter details: ",
                )
                .with_default(Some("-".into()))
                .asked_when(|a| a.flag("isBreaking") && a.text("body").is_empty())
            },
            Question::input("breaking", "Describe the breaking changes: ")
                .asked_when(|a| a.flag("isBreaking")),
            Question::confirm(
                "isIssueAffected",
                "Change affect any open issues ? ",
                issues_default.is_some(),
            ),
            Question::input(
                "issuesBody",
                "If issues are closed, the commit requires details. Please enter details: ",
            )
            .with_default(Some("-".into()))
            .asked_when(|a| {
                a.flag("isIssueAffected")
                    && a.text("body").is_empty()
                    && a.text("breakingBody").is_empty()
            }),
            Question::input(
                "issues",
                "Add issue references (e.g. \"fix #123\", \"re #123\".): ",
            )
            .with_default(text_default(&issues_default))
            .asked_when(|a| a.flag("isIssueAffected")),
        ];

        debug!(
            "built question schedule: {} questions, header width {}, line width {}",
            questions.len(),
            cfg.max_header_width,
            cfg.max_line_width
        );

        Self {
            limits: Limits::from(cfg),
            questions,
        }
    }

    pub fn get(&self, name: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter()
    }
}

fn text_default(value: &Option<String>) -> Option<Answer> {
    value.as_deref().map(Answer::from)
}

pub fn filter_scope(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Trim, drop trailing periods and lowercase the first character.
pub fn filter_subject(value: &str) -> String {
    let trimmed = value.trim().trim_end_matches('.').trim_end();
    let mut chars = trimmed.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn subject_message(limits: &Limits, answers: &Answers) -> String {
    format!(
        "Description of the change (max {} chars): ",
        limits.max_subject_length(answers)
    )
}

fn is_multiline(value: &str) -> bool {
    value.contains(['\n', '\r'])
}

fn validate_scope(_: &Limits, value: &str, _: &Answers) -> Result<(), ValidationError> {
    if is_multiline(value.trim()) {
        return Err(ValidationError::new("Scope must fit on a single line"));
    }
    Ok(())
}

fn validate_subject(limits: &Limits, value: &str, answers: &Answers) -> Result<(), ValidationError> {
    let subject = filter_subject(value);
    let len = subject.chars().count();
    let max = limits.max_subject_length(answers);
    if len == 0 {
        return Err(ValidationError::new("subject is required"));
    }
    if is_multiline(&subject) {
        return Err(ValidationError::new("Subject must fit on a single line"));
    }
    if len > max {
        return Err(ValidationError::new(format!(
            "Length must be less than or equal to {max}. Current length is {len}."
        )));
    }
    Ok(())
}

fn transform_subject(limits: &Limits, value: &str, answers: &Answers) -> String {
    let len = filter_subject(value).chars().count();
    let label = format!("({len}) {value}");
    if len <= limits.max_subject_length(answers) {
        crate::ui::paint_ok(&label)
    } else {
        crate::ui::paint_error(&label)
    }
}

fn validate_breaking_body(_: &Limits, value: &str, _: &Answers) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("Detail is required for breaking change"));
    }
    Ok(())
}
