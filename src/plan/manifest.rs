//! Front-end dependency manifest (`bower.json`) rules

use crate::config::{ConfigurationRecord, Feature};
use crate::constants::{versions, SOCIAL_LIKES_MAIN};
use indexmap::IndexMap;
use serde::Serialize;
use serde_json::{json, Value};

/// Package supplying jQuery to the page, with the location of its plugin
/// scripts when it ships any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScriptProvider {
    pub package: &'static str,
    pub version: &'static str,
    pub script_base: Option<&'static str>,
}

/// A row of the provider table. `None` matches either value.
struct ProviderRule {
    bootstrap: bool,
    sass: Option<bool>,
    jquery: Option<bool>,
    provider: ScriptProvider,
}

impl ProviderRule {
    fn matches(&self, bootstrap: bool, sass: bool, jquery: bool) -> bool {
        self.bootstrap == bootstrap
            && self.sass.is_none_or(|s| s == sass)
            && self.jquery.is_none_or(|j| j == jquery)
    }
}

/// Evaluated top to bottom; the first matching row wins.
static PROVIDER_RULES: [ProviderRule; 3] = [
    ProviderRule {
        bootstrap: true,
        sass: Some(true),
        jquery: None,
        provider: ScriptProvider {
            package: "bootstrap-sass-official",
            version: versions::BOOTSTRAP,
            script_base: Some(
                "bower_components/bootstrap-sass-official/assets/javascripts/bootstrap/",
            ),
        },
    },
    ProviderRule {
        bootstrap: true,
        sass: Some(false),
        jquery: None,
        provider: ScriptProvider {
            package: "bootstrap",
            version: versions::BOOTSTRAP,
            script_base: Some("bower_components/bootstrap/js/"),
        },
    },
    ProviderRule {
        bootstrap: false,
        sass: None,
        jquery: Some(true),
        provider: ScriptProvider {
            package: "jquery",
            version: versions::JQUERY,
            script_base: None,
        },
    },
];

/// The single jQuery-providing package for this configuration, if any.
pub fn script_provider(config: &ConfigurationRecord) -> Option<&'static ScriptProvider> {
    let (bootstrap, sass, jquery) =
        (config.has(Feature::Bootstrap), config.has(Feature::Sass), config.has(Feature::JQuery));
    PROVIDER_RULES
        .iter()
        .find(|rule| rule.matches(bootstrap, sass, jquery))
        .map(|rule| &rule.provider)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageOverride {
    pub main: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BowerManifest {
    pub name: String,
    pub private: bool,
    pub dependencies: IndexMap<String, String>,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub overrides: IndexMap<String, PackageOverride>,
}

impl BowerManifest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            private: true,
            dependencies: IndexMap::new(),
            overrides: IndexMap::new(),
        }
    }

    pub fn add_dependency(&mut self, package: &str, version: &str) {
        self.dependencies.insert(package.to_string(), version.to_string());
    }

    pub fn has_dependency(&self, package: &str) -> bool {
        self.dependencies.contains_key(package)
    }

    /// JSON form, keys in declaration order.
    pub fn to_value(&self) -> Value {
        json!(self)
    }
}

/// Builds the front-end manifest for the generated project.
pub fn build_manifest(config: &ConfigurationRecord) -> BowerManifest {
    let mut manifest = BowerManifest::new(config.app_name());

    if let Some(provider) = script_provider(config) {
        manifest.add_dependency(provider.package, provider.version);
    }

    if config.has(Feature::Modernizr) {
        manifest.add_dependency("modernizr", versions::MODERNIZR);
    }

    manifest.add_dependency("respond", versions::RESPOND);

    if config.has(Feature::SocialLikes) {
        manifest.add_dependency("social-likes", versions::SOCIAL_LIKES);
        manifest.overrides.insert(
            "social-likes".to_string(),
            PackageOverride { main: SOCIAL_LIKES_MAIN.to_string() },
        );
    }

    manifest
}
