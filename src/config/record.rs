//! The canonical, fully-resolved configuration record

use crate::config::types::{
    Feature, SassEngine, ScriptDialect, TestFramework, TextField,
};
use crate::error::{Error, Result};
use indexmap::IndexMap;
use serde_json::{json, Map, Value};
use std::collections::BTreeSet;

/// Resolved answers and options for one generator run.
///
/// Built once by the resolver and only read afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigurationRecord {
    pub(crate) app_name: String,
    pub(crate) features: BTreeSet<Feature>,
    pub(crate) text: IndexMap<TextField, String>,
    pub(crate) test_framework: TestFramework,
    pub(crate) use_alternate_script_dialect: bool,
    pub(crate) skip_install: bool,
    pub(crate) skip_welcome_message: bool,
    pub(crate) skip_install_message: bool,
}

impl ConfigurationRecord {
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    pub fn has(&self, feature: Feature) -> bool {
        self.features.contains(&feature)
    }

    /// Selected features in canonical order.
    pub fn features(&self) -> impl Iterator<Item = Feature> + '_ {
        self.features.iter().copied()
    }

    pub fn text(&self, field: TextField) -> &str {
        self.text.get(&field).map(String::as_str).unwrap_or_else(|| field.default_value())
    }

    pub fn test_framework(&self) -> TestFramework {
        self.test_framework
    }

    pub fn script_dialect(&self) -> ScriptDialect {
        ScriptDialect::from_alternate(self.use_alternate_script_dialect)
    }

    pub fn sass_engine(&self) -> SassEngine {
        if self.has(Feature::LibSass) {
            SassEngine::LibSass
        } else {
            SassEngine::RubySass
        }
    }

    pub fn skip_install(&self) -> bool {
        self.skip_install
    }

    pub fn skip_welcome_message(&self) -> bool {
        self.skip_welcome_message
    }

    pub fn skip_install_message(&self) -> bool {
        self.skip_install_message
    }

    /// Ensures every text field holds a non-empty value.
    pub fn validate(&self) -> Result<()> {
        for field in TextField::ALL {
            if self.text.get(&field).is_none_or(|value| value.trim().is_empty()) {
                return Err(Error::MissingRequiredAnswer { field: field.key().to_string() });
            }
        }
        Ok(())
    }

    /// Every feature flag as `includeX: bool`, in canonical order.
    pub fn feature_variables(&self) -> Map<String, Value> {
        let mut flags = Map::new();
        for feature in Feature::ALL {
            flags.insert(feature.variable().to_string(), Value::Bool(self.has(feature)));
        }
        flags.insert(
            "includeRubySass".to_string(),
            Value::Bool(self.sass_engine() == SassEngine::RubySass),
        );
        flags
    }

    /// Every free-text field keyed by its answer key.
    pub fn text_variables(&self) -> Map<String, Value> {
        TextField::ALL
            .into_iter()
            .map(|field| (field.key().to_string(), Value::String(self.text(field).to_string())))
            .collect()
    }

    /// The full record as template variables.
    pub fn variables(&self) -> Map<String, Value> {
        let mut context = Map::new();
        context.insert("appName".to_string(), json!(self.app_name));
        context.extend(self.feature_variables());
        context.extend(self.text_variables());
        context.insert("testFramework".to_string(), json!(self.test_framework.as_str()));
        context.insert(
            "coffee".to_string(),
            json!(self.script_dialect() == ScriptDialect::CoffeeScript),
        );
        context
    }

    pub fn to_context(&self) -> Value {
        Value::Object(self.variables())
    }
}

#[cfg(test)]
impl ConfigurationRecord {
    /// Record named `demo` with default text, mocha and JavaScript.
    pub(crate) fn with_features(features: &[Feature]) -> Self {
        ConfigurationRecord {
            app_name: "demo".to_string(),
            features: features.iter().copied().collect(),
            text: TextField::ALL
                .into_iter()
                .map(|field| (field, field.default_value().to_string()))
                .collect(),
            test_framework: TestFramework::Mocha,
            use_alternate_script_dialect: false,
            skip_install: false,
            skip_welcome_message: false,
            skip_install_message: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(features: &[Feature]) -> ConfigurationRecord {
        ConfigurationRecord::with_features(features)
    }

    #[test]
    fn sass_engines_are_complementary() {
        let ruby = record(&[Feature::Sass]).feature_variables();
        assert_eq!(ruby["includeLibSass"], json!(false));
        assert_eq!(ruby["includeRubySass"], json!(true));

        let lib = record(&[Feature::Sass, Feature::LibSass]).feature_variables();
        assert_eq!(lib["includeLibSass"], json!(true));
        assert_eq!(lib["includeRubySass"], json!(false));
    }

    #[test]
    fn validate_rejects_blank_text() {
        let mut config = record(&[]);
        assert!(config.validate().is_ok());
        config.text.insert(TextField::Title, "  ".to_string());
        match config.validate().unwrap_err() {
            Error::MissingRequiredAnswer { field } => assert_eq!(field, "title"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn context_carries_every_field() {
        let context = record(&[Feature::Bootstrap]).to_context();
        assert_eq!(context["appName"], json!("demo"));
        assert_eq!(context["includeBootstrap"], json!(true));
        assert_eq!(context["includeSass"], json!(false));
        assert_eq!(context["clientName"], json!("0distilled"));
        assert_eq!(context["url"], json!("http://nbed_url/"));
        assert_eq!(context["testFramework"], json!("mocha"));
        assert_eq!(context["coffee"], json!(false));
    }

    #[test]
    fn features_iterate_in_canonical_order() {
        let config = record(&[Feature::Addthis, Feature::Sass, Feature::Bootstrap]);
        let features: Vec<_> = config.features().collect();
        assert_eq!(features, vec![Feature::Bootstrap, Feature::Sass, Feature::Addthis]);
    }
}
