mod common;

use czmoji::config::AppConfig;
use czmoji::questions::{Answer, Answers, Question, QuestionKind, Schedule};
use czmoji::ui::{paint_error, paint_ok};

use crate::common::{answers, BODY, ISSUES, LONG_BODY, SCOPE, SUBJECT, TYPE};

fn question<'a>(schedule: &'a Schedule, name: &str) -> &'a Question {
    schedule
        .get(name)
        .unwrap_or_else(|| panic!("question '{name}' should exist"))
}

fn default_of(cfg: &AppConfig, name: &str) -> Option<Answer> {
    let schedule = Schedule::build(cfg);
    question(&schedule, name).default.clone()
}

#[test]
fn questions_are_in_fixed_order() {
    let schedule = Schedule::build(&AppConfig::default());
    let names: Vec<&str> = schedule.iter().map(|q| q.name).collect();
    assert_eq!(
        names,
        vec![
            "type",
            "scope",
            "isEmoji",
            "emoji",
            "subject",
            "body",
            "isBreaking",
            "breakingBody",
            "breaking",
            "isIssueAffected",
            "issuesBody",
            "issues",
        ]
    );
}

#[test]
fn type_choices_skip_reserved_types() {
    let schedule = Schedule::build(&AppConfig::default());
    let QuestionKind::List(choices) = &question(&schedule, "type").kind else {
        panic!("type should be a list question");
    };
    let values: Vec<&str> = choices.iter().map(|c| c.value.as_str()).collect();
    assert!(values.contains(&"feat"));
    assert!(!values.contains(&"chore"));
    assert!(!values.contains(&"revert"));
}

#[test]
fn defaults_are_unset_without_configuration() {
    let cfg = AppConfig::default();
    for name in ["type", "scope", "subject", "body", "issues"] {
        assert_eq!(default_of(&cfg, name), None, "{name}");
    }
    assert_eq!(default_of(&cfg, "isEmoji"), Some(Answer::Flag(true)));
    assert_eq!(default_of(&cfg, "isBreaking"), Some(Answer::Flag(false)));
    assert_eq!(default_of(&cfg, "isIssueAffected"), Some(Answer::Flag(false)));
    assert_eq!(default_of(&cfg, "breakingBody"), Some(Answer::from("-")));
    assert_eq!(default_of(&cfg, "issuesBody"), Some(Answer::from("-")));
}

#[test]
fn defaults_come_from_configuration() {
    let cfg = AppConfig {
        default_type: Some("feat".into()),
        default_scope: Some(SCOPE.into()),
        default_subject: Some(SUBJECT.into()),
        default_body: Some(BODY.into()),
        default_issues: Some(ISSUES.into()),
        ..AppConfig::default()
    };
    assert_eq!(default_of(&cfg, "type"), Some(Answer::from("feat")));
    assert_eq!(default_of(&cfg, "scope"), Some(Answer::from(SCOPE)));
    assert_eq!(default_of(&cfg, "subject"), Some(Answer::from(SUBJECT)));
    assert_eq!(default_of(&cfg, "body"), Some(Answer::from(BODY)));
    assert_eq!(default_of(&cfg, "issues"), Some(Answer::from(ISSUES)));
    assert_eq!(default_of(&cfg, "isIssueAffected"), Some(Answer::Flag(true)));
}

#[test]
fn subject_prompt_reports_room_left() {
    let schedule = Schedule::build(&AppConfig::default());
    let subject = question(&schedule, "subject");

    let without_scope = subject.message(&schedule.limits, &answers(&[("type", TYPE)]));
    assert!(without_scope.contains(&format!("(max {} chars)", 100 - TYPE.len() - 2)));

    let with_scope = subject.message(&schedule.limits, &answers(&[("type", TYPE), ("scope", SCOPE)]));
    assert!(with_scope.contains(&format!(
        "(max {} chars)",
        100 - TYPE.len() - SCOPE.len() - 4
    )));
}

#[test]
fn subject_transformer_colours_by_length() {
    let schedule = Schedule::build(&AppConfig::default());
    let subject = question(&schedule, "subject");

    let short = answers(&[("type", TYPE), ("subject", SUBJECT)]);
    assert_eq!(
        subject.transform(&schedule.limits, SUBJECT, &short),
        paint_ok(&format!("({}) {SUBJECT}", SUBJECT.len()))
    );

    let long = answers(&[("type", TYPE), ("subject", LONG_BODY)]);
    assert_eq!(
        subject.transform(&schedule.limits, LONG_BODY, &long),
        paint_error(&format!("({}) {LONG_BODY}", LONG_BODY.len()))
    );
}

#[test]
fn transformer_does_not_touch_the_stored_value() {
    let schedule = Schedule::build(&AppConfig::default());
    let subject = question(&schedule, "subject");
    let raw = "  Add Thing.  ";
    let _ = subject.transform(&schedule.limits, raw, &Answers::new());
    assert_eq!(subject.filter(raw), "add Thing");
}

#[test]
fn filters_normalise_scope_and_subject() {
    let schedule = Schedule::build(&AppConfig::default());
    assert_eq!(question(&schedule, "scope").filter("HelloMatt"), "hellomatt");
    assert_eq!(question(&schedule, "scope").filter("  Core  "), "core");
    assert_eq!(question(&schedule, "subject").filter("  A subject...  "), "a subject");
    assert_eq!(question(&schedule, "subject").filter(""), "");
    assert_eq!(question(&schedule, "body").filter(" As Is "), " As Is ");
}

#[test]
fn subject_validation_enforces_required_and_length() {
    let schedule = Schedule::build(&AppConfig::default());
    let subject = question(&schedule, "subject");
    let ctx = answers(&[("type", TYPE), ("scope", SCOPE)]);
    let max = 100 - TYPE.len() - SCOPE.len() - 4;

    let err = subject
        .validate(&schedule.limits, "", &ctx)
        .expect_err("empty subject");
    assert_eq!(err.message, "subject is required");
    assert!(subject.validate(&schedule.limits, "  ...  ", &ctx).is_err());

    let err = subject
        .validate(&schedule.limits, LONG_BODY, &ctx)
        .expect_err("subject too long");
    assert!(err.message.contains(&format!("less than or equal to {max}")));
    assert!(err.message.contains(&format!("Current length is {}", LONG_BODY.len())));

    let exact = "x".repeat(max);
    assert!(subject.validate(&schedule.limits, &exact, &ctx).is_ok());
    let over = "x".repeat(max + 1);
    assert!(subject.validate(&schedule.limits, &over, &ctx).is_err());
}

#[test]
fn breaking_body_requires_detail() {
    let schedule = Schedule::build(&AppConfig::default());
    let breaking_body = question(&schedule, "breakingBody");
    let err = breaking_body
        .validate(&schedule.limits, "   ", &Answers::new())
        .expect_err("blank detail");
    assert_eq!(err.message, "Detail is required for breaking change");
    assert!(breaking_body.validate(&schedule.limits, "-", &Answers::new()).is_ok());
}

#[test]
fn conditional_questions_follow_earlier_answers() {
    let schedule = Schedule::build(&AppConfig::default());
    let asked = |name: &str, answers: &Answers| question(&schedule, name).should_ask(answers);

    assert!(!asked("breaking", &Answers::new()));
    assert!(asked("breaking", &Answers::new().with("isBreaking", true)));
    assert!(!asked("issues", &Answers::new()));
    assert!(asked("issues", &Answers::new().with("isIssueAffected", true)));

    assert!(asked("emoji", &Answers::new().with("isEmoji", false)));
    assert!(!asked("emoji", &Answers::new().with("isEmoji", true)));

    let breaking = Answers::new().with("isBreaking", true);
    assert!(asked("breakingBody", &breaking));
    assert!(!asked("breakingBody", &breaking.clone().with("body", BODY)));

    let issues = Answers::new().with("isIssueAffected", true);
    assert!(asked("issuesBody", &issues));
    assert!(!asked("issuesBody", &issues.clone().with("breakingBody", "-")));
    assert!(!asked("issuesBody", &issues.with("body", BODY)));

    assert!(asked("subject", &Answers::new()));
}
