//! Drives the question table through a prompt provider
//!
//! Each question is answered from the prefilled answers when present,
//! skipped when its condition does not hold, and otherwise handed to the
//! provider as the matching prompt type.

use super::interface::{
    ConfirmationConfig, MultipleChoiceConfig, PromptProvider, TextPromptConfig,
};
use crate::{
    config::{Answers, Choice, Question, QuestionKind},
    error::Result,
};
use serde_json::Value;

/// Collects answers for an ordered list of questions.
pub trait PromptEngine {
    fn ask(&self, questions: &[Question], prefilled: &Answers) -> Result<Answers>;
}

/// Creates and executes prompts based on question kinds
pub struct PromptHandler<P: PromptProvider> {
    provider: P,
}

impl<P: PromptProvider> PromptHandler<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Prompts for a single question.
    pub fn create_prompt(&self, question: &Question) -> Result<Value> {
        match &question.kind {
            QuestionKind::Checkbox { choices } => self.prompt_checkbox(question, choices),
            QuestionKind::Confirm { default } => {
                let config =
                    ConfirmationConfig { prompt: question.message.clone(), default: *default };
                Ok(Value::Bool(self.provider.prompt_confirmation(&config)?))
            }
            QuestionKind::Input { default } => {
                let config = TextPromptConfig {
                    prompt: question.message.clone(),
                    default: (!default.is_empty()).then(|| default.to_string()),
                };
                Ok(Value::String(self.provider.prompt_text(&config)?))
            }
        }
    }

    /// Answers with the values of the selected choices.
    fn prompt_checkbox(&self, question: &Question, choices: &[Choice]) -> Result<Value> {
        let config = MultipleChoiceConfig {
            prompt: question.message.clone(),
            choices: choices.iter().map(|choice| choice.label.to_string()).collect(),
            defaults: choices.iter().map(|choice| choice.checked).collect(),
        };
        let indices = self.provider.prompt_multiple_choice(&config)?;

        let selected = indices
            .into_iter()
            .filter_map(|i| choices.get(i))
            .map(|choice| Value::String(choice.value.to_string()))
            .collect();
        Ok(Value::Array(selected))
    }
}

impl<P: PromptProvider> PromptEngine for PromptHandler<P> {
    fn ask(&self, questions: &[Question], prefilled: &Answers) -> Result<Answers> {
        let mut answers = prefilled.clone();

        for question in questions {
            if answers.contains_key(question.key) {
                log::debug!("Using provided answer for '{}'", question.key);
                continue;
            }
            // Conditions read everything answered so far, prefilled included
            if !question.should_ask(&answers) {
                log::debug!("Skipping '{}'", question.key);
                continue;
            }
            let answer = self.create_prompt(question)?;
            answers.insert(question.key.to_string(), answer);
        }

        Ok(answers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::questions;
    use crate::prompt::AutomaticPrompter;
    use serde_json::json;

    const FEATURES_PROMPT: &str = "What more would you like?";

    #[test]
    fn defaults_answer_every_applicable_question() {
        let handler = PromptHandler::new(AutomaticPrompter::new());
        let answers = handler.ask(&questions(), &Answers::new()).unwrap();

        assert_eq!(answers["features"], json!(["includeSass", "includeModernizr"]));
        assert_eq!(answers["libsass"], json!(false));
        assert_eq!(answers["includeJQuery"], json!(true));
        assert_eq!(answers["title"], json!("nbed_metaTitle"));
        assert_eq!(answers["social"], json!(["includeSocialLikes"]));
    }

    #[test]
    fn conditional_questions_follow_earlier_answers() {
        // Bootstrap only: no Sass, so no libsass question; Bootstrap, so no jQuery question
        let handler = PromptHandler::new(
            AutomaticPrompter::new().with_multiple_choice_response(FEATURES_PROMPT, vec![0]),
        );
        let answers = handler.ask(&questions(), &Answers::new()).unwrap();

        assert_eq!(answers["features"], json!(["includeBootstrap"]));
        assert!(!answers.contains_key("libsass"));
        assert!(!answers.contains_key("includeJQuery"));
    }

    #[test]
    fn prefilled_answers_are_kept_and_drive_conditions() {
        let prefilled = json!({ "features": [], "title": "Launch" });
        let handler = PromptHandler::new(AutomaticPrompter::new());
        let answers =
            handler.ask(&questions(), prefilled.as_object().unwrap()).unwrap();

        assert_eq!(answers["features"], json!([]));
        assert_eq!(answers["title"], json!("Launch"));
        assert!(!answers.contains_key("libsass"));
        assert_eq!(answers["includeJQuery"], json!(true));
    }

    #[test]
    fn confirm_answers_are_booleans() {
        let prompter = AutomaticPrompter::new().with_confirmation_response(
            "Would you like to include jQuery?",
            false,
        );
        let handler = PromptHandler::new(prompter);
        let answers = handler.ask(&questions(), &Answers::new()).unwrap();
        assert_eq!(answers["includeJQuery"], json!(false));
    }
}
