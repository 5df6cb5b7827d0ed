//! Generator options supplied on the command line

use crate::config::types::TestFramework;

/// Value type of a declared option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionDefault {
    Str(&'static str),
    Bool(bool),
}

/// A declared generator option: name, description and default.
#[derive(Debug, Clone, Copy)]
pub struct OptionSpec {
    pub name: &'static str,
    pub desc: &'static str,
    pub default: OptionDefault,
}

/// App name used when the destination directory has no usable name
pub const DEFAULT_APP_NAME: &str = "webapp";

pub const TEST_FRAMEWORK: &str = "test-framework";
pub const COFFEE: &str = "coffee";
pub const SKIP_WELCOME_MESSAGE: &str = "skip-welcome-message";
pub const SKIP_INSTALL_MESSAGE: &str = "skip-install-message";
pub const SKIP_INSTALL: &str = "skip-install";

pub const OPTIONS: &[OptionSpec] = &[
    OptionSpec {
        name: TEST_FRAMEWORK,
        desc: "Test framework to be invoked",
        default: OptionDefault::Str("mocha"),
    },
    OptionSpec { name: COFFEE, desc: "Use CoffeeScript", default: OptionDefault::Bool(false) },
    OptionSpec {
        name: SKIP_WELCOME_MESSAGE,
        desc: "Do not print the welcome banner",
        default: OptionDefault::Bool(false),
    },
    OptionSpec {
        name: SKIP_INSTALL_MESSAGE,
        desc: "Do not print the dependency installation hint",
        default: OptionDefault::Bool(false),
    },
    OptionSpec {
        name: SKIP_INSTALL,
        desc: "Do not install npm and bower dependencies",
        default: OptionDefault::Bool(false),
    },
];

/// Looks up the declared default of an option.
pub fn option_default(name: &str) -> Option<OptionDefault> {
    OPTIONS.iter().find(|spec| spec.name == name).map(|spec| spec.default)
}

/// Help text of an option, as shown by `--help`.
pub fn option_desc(name: &str) -> &'static str {
    OPTIONS.iter().find(|spec| spec.name == name).map_or("", |spec| spec.desc)
}

fn bool_default(name: &str) -> bool {
    matches!(option_default(name), Some(OptionDefault::Bool(true)))
}

/// Raw option values before resolution.
///
/// The test framework stays a string here; it is validated by the resolver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorOptions {
    /// Slug of the destination directory name.
    pub app_name: String,
    pub test_framework: String,
    pub coffee: bool,
    pub skip_welcome_message: bool,
    pub skip_install_message: bool,
    pub skip_install: bool,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        let test_framework = match option_default(TEST_FRAMEWORK) {
            Some(OptionDefault::Str(value)) => value.to_string(),
            _ => TestFramework::default().as_str().to_string(),
        };
        Self {
            app_name: DEFAULT_APP_NAME.to_string(),
            test_framework,
            coffee: bool_default(COFFEE),
            skip_welcome_message: bool_default(SKIP_WELCOME_MESSAGE),
            skip_install_message: bool_default(SKIP_INSTALL_MESSAGE),
            skip_install: bool_default(SKIP_INSTALL),
        }
    }
}
