//! Type definitions for the generator configuration

use crate::error::{Error, Result};
use serde::Serialize;
use std::fmt::Display;
use std::str::FromStr;

/// Checkbox question a feature is offered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureGroup {
    /// "What more would you like?"
    Features,
    /// "What type of social buttons would you like?"
    Social,
}

impl FeatureGroup {
    /// Answer key holding the list of selected values for this group.
    pub fn answer_key(&self) -> &'static str {
        match self {
            FeatureGroup::Features => "features",
            FeatureGroup::Social => "social",
        }
    }
}

/// How a feature is asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureSource {
    /// Member of a checkbox list; absent list means `checked`.
    Checkbox { group: FeatureGroup, checked: bool },
    /// Follow-up confirmation. `default` applies when the question is asked,
    /// `skipped` when its predicate does not hold.
    FollowUp { key: &'static str, default: bool, skipped: bool },
}

/// An optional capability of the generated project.
///
/// Declaration order is the canonical order: sets of features iterate in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Feature {
    Bootstrap,
    Sass,
    Modernizr,
    LibSass,
    JQuery,
    SocialLikes,
    Addthis,
}

impl Feature {
    pub const ALL: [Feature; 7] = [
        Feature::Bootstrap,
        Feature::Sass,
        Feature::Modernizr,
        Feature::LibSass,
        Feature::JQuery,
        Feature::SocialLikes,
        Feature::Addthis,
    ];

    /// Display name used in checkbox lists.
    pub fn label(&self) -> &'static str {
        match self {
            Feature::Bootstrap => "Bootstrap",
            Feature::Sass => "Sass",
            Feature::Modernizr => "Modernizr",
            Feature::LibSass => "libsass",
            Feature::JQuery => "jQuery",
            Feature::SocialLikes => "SocialLikes",
            Feature::Addthis => "Addthis",
        }
    }

    /// Template variable carrying this flag, also the checkbox answer value.
    pub fn variable(&self) -> &'static str {
        match self {
            Feature::Bootstrap => "includeBootstrap",
            Feature::Sass => "includeSass",
            Feature::Modernizr => "includeModernizr",
            Feature::LibSass => "includeLibSass",
            Feature::JQuery => "includeJQuery",
            Feature::SocialLikes => "includeSocialLikes",
            Feature::Addthis => "includeAddthis",
        }
    }

    pub fn source(&self) -> FeatureSource {
        use FeatureGroup::*;
        match self {
            Feature::Bootstrap => FeatureSource::Checkbox { group: Features, checked: false },
            Feature::Sass => FeatureSource::Checkbox { group: Features, checked: true },
            Feature::Modernizr => FeatureSource::Checkbox { group: Features, checked: true },
            Feature::LibSass => {
                FeatureSource::FollowUp { key: "libsass", default: false, skipped: false }
            }
            Feature::JQuery => {
                FeatureSource::FollowUp { key: "includeJQuery", default: true, skipped: false }
            }
            Feature::SocialLikes => FeatureSource::Checkbox { group: Social, checked: true },
            Feature::Addthis => FeatureSource::Checkbox { group: Social, checked: false },
        }
    }

    /// Features offered in the given checkbox group, in display order.
    pub fn in_group(group: FeatureGroup) -> impl Iterator<Item = Feature> {
        Feature::ALL.into_iter().filter(move |feature| {
            matches!(feature.source(), FeatureSource::Checkbox { group: g, .. } if g == group)
        })
    }
}

impl Display for Feature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Free-text answers; each one has a non-empty default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TextField {
    ClientName,
    FtpHost,
    FtpUsername,
    FtpPassword,
    Title,
    SocialTitle,
    Description,
    SocialDescription,
    TwitterHandle,
    TweetText,
    PageUrl,
}

impl TextField {
    pub const ALL: [TextField; 11] = [
        TextField::ClientName,
        TextField::FtpHost,
        TextField::FtpUsername,
        TextField::FtpPassword,
        TextField::Title,
        TextField::SocialTitle,
        TextField::Description,
        TextField::SocialDescription,
        TextField::TwitterHandle,
        TextField::TweetText,
        TextField::PageUrl,
    ];

    /// Answer key, also the template variable name.
    pub fn key(&self) -> &'static str {
        match self {
            TextField::ClientName => "clientName",
            TextField::FtpHost => "ftpHost",
            TextField::FtpUsername => "ftpUsername",
            TextField::FtpPassword => "ftpPassword",
            TextField::Title => "title",
            TextField::SocialTitle => "socialTitle",
            TextField::Description => "desc",
            TextField::SocialDescription => "socialDesc",
            TextField::TwitterHandle => "twitter",
            TextField::TweetText => "tweet",
            TextField::PageUrl => "url",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            TextField::ClientName => "What is the client directory name?",
            TextField::FtpHost => "What is the ftp host name?",
            TextField::FtpUsername => "What is the ftp username?",
            TextField::FtpPassword => "What is the ftp password?",
            TextField::Title => "What is the page meta title?",
            TextField::SocialTitle => "What is the page social/opengraph title?",
            TextField::Description => "What is the page meta description?",
            TextField::SocialDescription => "What is the page social/opengraph description?",
            TextField::TwitterHandle => "What is the client's twitter handle?",
            TextField::TweetText => "What is the tweet text?",
            TextField::PageUrl => "What is the page URL? (include trailing slash)",
        }
    }

    pub fn default_value(&self) -> &'static str {
        match self {
            TextField::ClientName => "0distilled",
            TextField::FtpHost => "nbed_ftpHost",
            TextField::FtpUsername => "nbed_ftpUsername",
            TextField::FtpPassword => "nbed_ftpPassword",
            TextField::Title => "nbed_metaTitle",
            TextField::SocialTitle => "nbed_socialTitle",
            TextField::Description => "nbed_desc",
            TextField::SocialDescription => "nbed_socialDesc",
            TextField::TwitterHandle => "nbed_twitter",
            TextField::TweetText => "nbed_tweet",
            TextField::PageUrl => "http://nbed_url/",
        }
    }

    /// Fields holding ftp credentials, rendered into `.ftpauth`.
    pub fn is_credential(&self) -> bool {
        matches!(self, TextField::FtpHost | TextField::FtpUsername | TextField::FtpPassword)
    }
}

/// Test framework the composed sub-generator scaffolds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TestFramework {
    #[default]
    Mocha,
    Jasmine,
}

impl TestFramework {
    pub const ALL: [TestFramework; 2] = [TestFramework::Mocha, TestFramework::Jasmine];

    pub fn as_str(&self) -> &'static str {
        match self {
            TestFramework::Mocha => "mocha",
            TestFramework::Jasmine => "jasmine",
        }
    }
}

impl FromStr for TestFramework {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim().to_lowercase();
        TestFramework::ALL
            .into_iter()
            .find(|framework| framework.as_str() == name)
            .ok_or_else(|| Error::UnsupportedTestFramework {
                name: s.to_string(),
                supported: TestFramework::ALL.map(|f| f.as_str()).join(", "),
            })
    }
}

impl Display for TestFramework {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Language the script entry point is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScriptDialect {
    #[default]
    JavaScript,
    CoffeeScript,
}

impl ScriptDialect {
    pub fn from_alternate(use_alternate: bool) -> Self {
        if use_alternate {
            ScriptDialect::CoffeeScript
        } else {
            ScriptDialect::JavaScript
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ScriptDialect::JavaScript => "js",
            ScriptDialect::CoffeeScript => "coffee",
        }
    }
}

/// Sass compiler; the two options are complementary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SassEngine {
    #[default]
    RubySass,
    LibSass,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_supported_test_frameworks() {
        assert_eq!("mocha".parse::<TestFramework>().unwrap(), TestFramework::Mocha);
        assert_eq!("Jasmine".parse::<TestFramework>().unwrap(), TestFramework::Jasmine);
    }

    #[test]
    fn rejects_unknown_test_framework() {
        let err = "jest".parse::<TestFramework>().unwrap_err();
        match err {
            Error::UnsupportedTestFramework { name, supported } => {
                assert_eq!(name, "jest");
                assert_eq!(supported, "mocha, jasmine");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn feature_groups_keep_display_order() {
        let features: Vec<_> = Feature::in_group(FeatureGroup::Features).collect();
        assert_eq!(features, vec![Feature::Bootstrap, Feature::Sass, Feature::Modernizr]);
        let social: Vec<_> = Feature::in_group(FeatureGroup::Social).collect();
        assert_eq!(social, vec![Feature::SocialLikes, Feature::Addthis]);
    }

    #[test]
    fn every_text_field_has_a_default() {
        for field in TextField::ALL {
            assert!(!field.default_value().is_empty(), "{field:?}");
        }
    }

    #[test]
    fn dialect_extension() {
        assert_eq!(ScriptDialect::from_alternate(true).extension(), "coffee");
        assert_eq!(ScriptDialect::from_alternate(false).extension(), "js");
    }
}
