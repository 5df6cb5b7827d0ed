//! Answer resolution: CLI options + answers -> configuration record

use crate::config::options::GeneratorOptions;
use crate::config::question::{follow_up_condition, is_checked, Answers};
use crate::config::record::ConfigurationRecord;
use crate::config::types::{Feature, FeatureSource, TestFramework, TextField};
use crate::error::Result;
use serde_json::Value;
use std::collections::BTreeSet;

/// Resolves options and answers into the canonical configuration record.
///
/// Missing answers take their declared defaults, including answers to
/// follow-up questions whose predicate did not hold. The only failure is an
/// unsupported test framework.
pub fn resolve(options: &GeneratorOptions, answers: &Answers) -> Result<ConfigurationRecord> {
    let test_framework: TestFramework = options.test_framework.parse()?;

    let features: BTreeSet<Feature> = Feature::ALL
        .into_iter()
        .filter(|feature| resolve_feature(*feature, answers))
        .collect();

    let text = TextField::ALL
        .into_iter()
        .map(|field| (field, resolve_text(field, answers)))
        .collect();

    let record = ConfigurationRecord {
        app_name: options.app_name.clone(),
        features,
        text,
        test_framework,
        use_alternate_script_dialect: options.coffee,
        skip_install: options.skip_install,
        skip_welcome_message: options.skip_welcome_message,
        skip_install_message: options.skip_install_message,
    };
    record.validate()?;

    log::debug!(
        "Resolved features: [{}], test framework: {}",
        record.features().map(|f| f.label()).collect::<Vec<_>>().join(", "),
        record.test_framework()
    );
    Ok(record)
}

fn resolve_feature(feature: Feature, answers: &Answers) -> bool {
    match feature.source() {
        FeatureSource::Checkbox { .. } => is_checked(feature, answers),
        FeatureSource::FollowUp { key, default, skipped } => {
            let asked = follow_up_condition(feature)
                .is_none_or(|condition| condition.holds(answers));
            if !asked {
                if answers.contains_key(key) {
                    log::debug!("Ignoring answer '{key}': question does not apply");
                }
                return skipped;
            }
            match answers.get(key) {
                Some(Value::Bool(value)) => *value,
                Some(other) => {
                    log::warn!("Answer '{key}' should be a boolean, got {other}; using {default}");
                    default
                }
                None => default,
            }
        }
    }
}

fn resolve_text(field: TextField, answers: &Answers) -> String {
    let value = match answers.get(field.key()) {
        Some(Value::String(value)) => Some(value.clone()),
        Some(Value::Number(number)) => Some(number.to_string()),
        Some(Value::Null) | None => None,
        Some(other) => {
            log::warn!("Answer '{}' should be text, got {other}; using default", field.key());
            None
        }
    };
    match value {
        Some(value) if !value.trim().is_empty() => value,
        _ => field.default_value().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::types::{SassEngine, ScriptDialect};
    use crate::error::Error;
    use serde_json::json;

    fn answers(value: Value) -> Answers {
        value.as_object().cloned().unwrap_or_default()
    }

    fn resolve_answers(value: Value) -> ConfigurationRecord {
        resolve(&GeneratorOptions::default(), &answers(value)).unwrap()
    }

    #[test]
    fn no_answers_resolve_to_defaults() {
        let config = resolve_answers(json!({}));
        let features: Vec<_> = config.features().collect();
        assert_eq!(
            features,
            vec![Feature::Sass, Feature::Modernizr, Feature::JQuery, Feature::SocialLikes]
        );
        assert_eq!(config.sass_engine(), SassEngine::RubySass);
        assert_eq!(config.test_framework(), TestFramework::Mocha);
        assert_eq!(config.script_dialect(), ScriptDialect::JavaScript);
        for field in TextField::ALL {
            assert_eq!(config.text(field), field.default_value());
        }
    }

    #[test]
    fn skipped_libsass_question_defaults_to_false() {
        let config = resolve_answers(json!({ "features": [], "libsass": true }));
        assert!(!config.has(Feature::Sass));
        assert!(!config.has(Feature::LibSass));
        assert_eq!(config.sass_engine(), SassEngine::RubySass);
    }

    #[test]
    fn asked_libsass_question_uses_answer() {
        let config = resolve_answers(json!({ "features": ["includeSass"], "libsass": true }));
        assert!(config.has(Feature::LibSass));
        assert_eq!(config.sass_engine(), SassEngine::LibSass);
    }

    #[test]
    fn skipped_jquery_question_defaults_to_false() {
        let config = resolve_answers(json!({
            "features": ["includeBootstrap"],
            "includeJQuery": true
        }));
        assert!(config.has(Feature::Bootstrap));
        assert!(!config.has(Feature::JQuery));
    }

    #[test]
    fn asked_jquery_question_without_answer_uses_question_default() {
        let config = resolve_answers(json!({ "features": [] }));
        assert!(config.has(Feature::JQuery));
        let config = resolve_answers(json!({ "features": [], "includeJQuery": false }));
        assert!(!config.has(Feature::JQuery));
    }

    #[test]
    fn wrongly_typed_follow_up_uses_question_default() {
        let config = resolve_answers(json!({ "features": ["includeSass"], "libsass": "yes" }));
        assert!(!config.has(Feature::LibSass));
    }

    #[test]
    fn text_answers_override_defaults() {
        let config = resolve_answers(json!({
            "clientName": "acme",
            "title": "",
            "twitter": 42,
            "tweet": ["not", "text"]
        }));
        assert_eq!(config.text(TextField::ClientName), "acme");
        assert_eq!(config.text(TextField::Title), "nbed_metaTitle");
        assert_eq!(config.text(TextField::TwitterHandle), "42");
        assert_eq!(config.text(TextField::TweetText), "nbed_tweet");
    }

    #[test]
    fn social_checkbox_resolves_by_membership() {
        let config = resolve_answers(json!({ "social": ["includeAddthis"] }));
        assert!(config.has(Feature::Addthis));
        assert!(!config.has(Feature::SocialLikes));
    }

    #[test]
    fn unsupported_test_framework_fails_resolution() {
        let options =
            GeneratorOptions { test_framework: "jest".to_string(), ..Default::default() };
        let err = resolve(&options, &Answers::new()).unwrap_err();
        assert!(matches!(err, Error::UnsupportedTestFramework { ref name, .. } if name == "jest"));
    }

    #[test]
    fn options_flow_into_record() {
        let options = GeneratorOptions {
            app_name: "my-site".to_string(),
            test_framework: "jasmine".to_string(),
            coffee: true,
            skip_install: true,
            ..Default::default()
        };
        let config = resolve(&options, &Answers::new()).unwrap();
        assert_eq!(config.app_name(), "my-site");
        assert_eq!(config.test_framework(), TestFramework::Jasmine);
        assert_eq!(config.script_dialect(), ScriptDialect::CoffeeScript);
        assert!(config.skip_install());
        assert!(!config.skip_welcome_message());
    }
}
