use std::sync::LazyLock;

use regex_lite::Regex;

use crate::catalog::TypeCatalog;
use crate::error::{Error, Result};
use crate::questions::Answers;
use crate::wrap::wrap;

pub const BREAKING_PREFIX: &str = "BREAKING CHANGE: ";

static BREAKING_PREFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?i:breaking change:)\s*").expect("static pattern is valid"));

/// Compose the final commit message from a complete answer set.
///
/// Sections are header, body, breaking change and issues, in that order,
/// separated by a single blank line. Absent or empty sections are dropped.
/// Answers are trusted to have passed validation already.
pub fn assemble(answers: &Answers, types: &TypeCatalog, max_line_width: usize) -> Result<String> {
    let mut sections = vec![header(answers, types)?];

    let body = answers.text("body");
    if !body.trim().is_empty() {
        sections.push(wrap(body, max_line_width));
    }

    if let Some(breaking) = breaking_notice(answers.text("breaking")) {
        sections.push(wrap(&breaking, max_line_width));
    }

    let issues = answers.text("issues");
    if !issues.trim().is_empty() {
        sections.push(wrap(issues, max_line_width));
    }

    Ok(sections.join("\n\n"))
}

/// `type(scope): subject <emoji>`
pub fn header(answers: &Answers, types: &TypeCatalog) -> Result<String> {
    let kind = answers.text("type");
    let scope = match answers.text("scope") {
        "" => String::new(),
        scope => format!("({scope})"),
    };
    let emoji = if answers.flag("isEmoji") {
        let entry = types
            .get(kind)
            .ok_or_else(|| Error::UnknownType(kind.to_string()))?;
        format!(" {}", entry.emoji)
    } else {
        match answers.text("emoji").trim() {
            "" => String::new(),
            custom => format!(" {custom}"),
        }
    };
    Ok(format!("{kind}{scope}: {}{emoji}", answers.text("subject")))
}

/// Normalize a breaking change description so it carries the canonical
/// prefix exactly once. `None` when nothing is left to report.
pub fn breaking_notice(text: &str) -> Option<String> {
    let detail = BREAKING_PREFIX_RE.replace(text.trim(), "");
    let detail = detail.trim();
    if detail.is_empty() {
        None
    } else {
        Some(format!("{BREAKING_PREFIX}{detail}"))
    }
}
