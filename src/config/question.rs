//! Question table asked by the prompt engine

use crate::config::types::{Feature, FeatureGroup, FeatureSource, TextField};
use serde_json::{Map, Value};

/// Collected answers, keyed by question key.
pub type Answers = Map<String, Value>;

/// One entry of a checkbox list.
#[derive(Debug, Clone, PartialEq)]
pub struct Choice {
    pub label: &'static str,
    pub value: &'static str,
    pub checked: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum QuestionKind {
    Checkbox { choices: Vec<Choice> },
    Confirm { default: bool },
    Input { default: &'static str },
}

/// Predicate on earlier answers deciding whether a question is asked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    Selected(Feature),
    NotSelected(Feature),
}

impl Condition {
    pub fn holds(&self, answers: &Answers) -> bool {
        match self {
            Condition::Selected(feature) => is_checked(*feature, answers),
            Condition::NotSelected(feature) => !is_checked(*feature, answers),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Question {
    pub key: &'static str,
    pub message: String,
    pub kind: QuestionKind,
    pub ask_if: Option<Condition>,
}

impl Question {
    /// Whether the question is asked given the answers collected so far.
    pub fn should_ask(&self, answers: &Answers) -> bool {
        self.ask_if.is_none_or(|condition| condition.holds(answers))
    }
}

/// Checkbox membership of `feature`.
///
/// An absent (or malformed) answer list resolves to the declared default.
/// Follow-up features are never checkbox members and report `false`.
pub fn is_checked(feature: Feature, answers: &Answers) -> bool {
    let FeatureSource::Checkbox { group, checked } = feature.source() else {
        return false;
    };
    match answers.get(group.answer_key()) {
        Some(Value::Array(selected)) => {
            selected.iter().any(|value| value.as_str() == Some(feature.variable()))
        }
        Some(other) => {
            log::warn!(
                "Answer '{}' should be a list, got {other}; using defaults",
                group.answer_key()
            );
            checked
        }
        None => checked,
    }
}

fn checkbox(group: FeatureGroup, message: &str) -> Question {
    let choices = Feature::in_group(group)
        .map(|feature| {
            let checked = matches!(
                feature.source(),
                FeatureSource::Checkbox { checked: true, .. }
            );
            Choice { label: feature.label(), value: feature.variable(), checked }
        })
        .collect();
    Question {
        key: group.answer_key(),
        message: message.to_string(),
        kind: QuestionKind::Checkbox { choices },
        ask_if: None,
    }
}

/// Confirmation asked after the checkbox list; `None` for checkbox features.
fn follow_up(feature: Feature, message: &str, ask_if: Condition) -> Option<Question> {
    let FeatureSource::FollowUp { key, default, .. } = feature.source() else {
        return None;
    };
    Some(Question {
        key,
        message: message.to_string(),
        kind: QuestionKind::Confirm { default },
        ask_if: Some(ask_if),
    })
}

/// The ordered question table.
pub fn questions() -> Vec<Question> {
    let mut questions = vec![checkbox(FeatureGroup::Features, "What more would you like?")];
    let follow_ups = [
        follow_up(
            Feature::LibSass,
            "Would you like to use libsass? Read up more at \nhttps://github.com/andrew/node-sass#node-sass",
            Condition::Selected(Feature::Sass),
        ),
        follow_up(
            Feature::JQuery,
            "Would you like to include jQuery?",
            Condition::NotSelected(Feature::Bootstrap),
        ),
    ];
    questions.extend(follow_ups.into_iter().flatten());

    questions.extend(TextField::ALL.into_iter().map(|field| Question {
        key: field.key(),
        message: field.message().to_string(),
        kind: QuestionKind::Input { default: field.default_value() },
        ask_if: None,
    }));

    questions.push(checkbox(
        FeatureGroup::Social,
        "What type of social buttons would you like?",
    ));
    questions
}

/// Condition guarding the follow-up question for `feature`, if any.
pub fn follow_up_condition(feature: Feature) -> Option<Condition> {
    let FeatureSource::FollowUp { key, .. } = feature.source() else {
        return None;
    };
    questions().into_iter().find(|question| question.key == key).and_then(|q| q.ask_if)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn answers(value: Value) -> Answers {
        value.as_object().cloned().unwrap_or_default()
    }

    #[test]
    fn absent_checkbox_list_uses_declared_defaults() {
        let empty = Answers::new();
        assert!(is_checked(Feature::Sass, &empty));
        assert!(is_checked(Feature::Modernizr, &empty));
        assert!(!is_checked(Feature::Bootstrap, &empty));
        assert!(is_checked(Feature::SocialLikes, &empty));
        assert!(!is_checked(Feature::Addthis, &empty));
    }

    #[test]
    fn present_checkbox_list_is_a_membership_test() {
        let answers = answers(json!({ "features": ["includeBootstrap"], "social": [] }));
        assert!(is_checked(Feature::Bootstrap, &answers));
        assert!(!is_checked(Feature::Sass, &answers));
        assert!(!is_checked(Feature::SocialLikes, &answers));
    }

    #[test]
    fn malformed_checkbox_list_falls_back_to_defaults() {
        let answers = answers(json!({ "features": "includeBootstrap" }));
        assert!(!is_checked(Feature::Bootstrap, &answers));
        assert!(is_checked(Feature::Sass, &answers));
    }

    #[test]
    fn follow_up_features_are_not_checkbox_members() {
        let answers = answers(json!({ "features": ["includeLibSass"] }));
        assert!(!is_checked(Feature::LibSass, &answers));
    }

    #[test]
    fn libsass_question_only_when_sass_selected() {
        let libsass = questions().into_iter().find(|q| q.key == "libsass").unwrap();
        assert!(libsass.should_ask(&answers(json!({ "features": ["includeSass"] }))));
        assert!(!libsass.should_ask(&answers(json!({ "features": [] }))));
    }

    #[test]
    fn jquery_question_only_without_bootstrap() {
        let jquery = questions().into_iter().find(|q| q.key == "includeJQuery").unwrap();
        assert!(jquery.should_ask(&answers(json!({ "features": ["includeSass"] }))));
        assert!(!jquery.should_ask(&answers(json!({ "features": ["includeBootstrap"] }))));
    }

    #[test]
    fn question_table_order() {
        let keys: Vec<_> = questions().iter().map(|q| q.key).collect();
        assert_eq!(keys.first(), Some(&"features"));
        assert_eq!(keys[1..3], ["libsass", "includeJQuery"]);
        assert_eq!(keys.last(), Some(&"social"));
        assert_eq!(keys.len(), 3 + TextField::ALL.len() + 1);
    }

    #[test]
    fn checkbox_choices_carry_feature_defaults() {
        let features = questions().remove(0);
        let QuestionKind::Checkbox { choices } = features.kind else {
            panic!("expected checkbox");
        };
        let checked: Vec<_> =
            choices.iter().map(|choice| (choice.value, choice.checked)).collect();
        assert_eq!(
            checked,
            vec![
                ("includeBootstrap", false),
                ("includeSass", true),
                ("includeModernizr", true)
            ]
        );
    }

    #[test]
    fn follow_up_conditions() {
        assert_eq!(
            follow_up_condition(Feature::LibSass),
            Some(Condition::Selected(Feature::Sass))
        );
        assert_eq!(
            follow_up_condition(Feature::JQuery),
            Some(Condition::NotSelected(Feature::Bootstrap))
        );
        assert_eq!(follow_up_condition(Feature::Sass), None);
    }

    #[test]
    fn checkbox_features_have_no_follow_up() {
        assert!(follow_up(Feature::Sass, "?", Condition::Selected(Feature::Sass)).is_none());
        let libsass =
            follow_up(Feature::LibSass, "?", Condition::Selected(Feature::Sass)).unwrap();
        assert_eq!(libsass.key, "libsass");
        assert_eq!(libsass.kind, QuestionKind::Confirm { default: false });
    }
}
