use create_module::answers::{questions, Answers};
use create_module::error::Error;
use create_module::prompt::{Prompter, Question};
use indexmap::IndexMap;

/// Prompter returning a fixed answer set, used in place of the terminal.
struct CannedPrompter {
    answers: IndexMap<String, String>,
}

impl CannedPrompter {
    fn new(pairs: &[(&str, &str)]) -> Self {
        Self {
            answers: pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect(),
        }
    }
}

impl Prompter for CannedPrompter {
    fn ask(
        &self,
        _questions: &[Question],
    ) -> create_module::error::Result<IndexMap<String, String>> {
        Ok(self.answers.clone())
    }
}

fn valid_pairs() -> Vec<(&'static str, &'static str)> {
    vec![
        ("moduleTemplate", "nodejs-lib"),
        ("npmScope", "@acme"),
        ("npmModuleName", "widgets"),
        ("githubOrg", "acme-org"),
        ("moduleAuthor", "A. Dev"),
        ("moduleLicense", "MIT"),
        ("npmAccess", "public"),
    ]
}

#[test]
fn test_collect_from_prompter() {
    let prompter = CannedPrompter::new(&valid_pairs());
    let answers = Answers::collect(&prompter).unwrap();

    assert_eq!(answers.module_template, "nodejs-lib");
    assert_eq!(answers.npm_scope, "@acme");
    assert_eq!(answers.npm_module_name, "widgets");
    assert_eq!(answers.npm_access, "public");
}

#[test]
fn test_collect_missing_answer_fails() {
    let mut pairs = valid_pairs();
    pairs.retain(|(k, _)| *k != "npmModuleName");
    let prompter = CannedPrompter::new(&pairs);

    match Answers::collect(&prompter) {
        Err(Error::PromptError(msg)) => assert!(msg.contains("npmModuleName")),
        other => panic!("Expected PromptError, got {:?}", other),
    }
}

#[test]
fn test_invalid_scope_rejected() {
    let mut answers = Answers::debug();
    answers.npm_scope = "acme".to_string();

    match answers.validate() {
        Err(Error::ValidationError(msg)) => assert!(msg.contains("scope")),
        other => panic!("Expected ValidationError, got {:?}", other),
    }
}

#[test]
fn test_invalid_module_name_rejected() {
    let mut answers = Answers::debug();
    answers.npm_module_name = "Bad Name!".to_string();

    assert!(matches!(answers.validate(), Err(Error::ValidationError(_))));
}

#[test]
fn test_unknown_template_rejected() {
    let mut answers = Answers::debug();
    answers.module_template = "rust-lib".to_string();

    assert!(matches!(answers.validate(), Err(Error::TemplateNotFound { .. })));
}

#[test]
fn test_empty_scope_is_valid() {
    let mut answers = Answers::debug();
    answers.npm_scope = String::new();

    assert!(answers.validate().is_ok());
}

#[test]
fn test_debug_answers_are_valid() {
    assert!(Answers::debug().validate().is_ok());
}

#[test]
fn test_question_order() {
    let keys: Vec<String> = questions().into_iter().map(|q| q.key).collect();

    assert_eq!(
        keys,
        vec![
            "moduleTemplate",
            "npmScope",
            "npmModuleName",
            "githubOrg",
            "moduleAuthor",
            "moduleLicense",
            "npmAccess",
        ]
    );
}
