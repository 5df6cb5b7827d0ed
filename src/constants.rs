//! Constants used throughout webbaker

/// STDIN indicator for CLI arguments
pub const STDIN_INDICATOR: &str = "-";

/// Directory (relative to the output root) holding the application sources
pub const APP_DIR: &str = "app";

/// Directory (relative to the output root) holding stylesheets
pub const STYLES_DIR: &str = "app/styles";

/// Empty directories created in every generated project
pub const PROJECT_DIRECTORIES: &[&str] =
    &["app/scripts", "app/styles", "app/styles/fonts", "app/images", "app/social"];

/// Front-end package versions written into `bower.json`
pub mod versions {
    pub const BOOTSTRAP: &str = "~3.2.0";
    pub const JQUERY: &str = "~1.11.1";
    pub const MODERNIZR: &str = "~2.8.2";
    pub const RESPOND: &str = "~1.4.2";
    pub const SOCIAL_LIKES: &str = "~3.0.4";
    pub const CHAI: &str = "~1.8.0";
    pub const MOCHA: &str = "~1.14.0";
    pub const JASMINE: &str = "~2.0.0";
}

/// Main file override for social-likes, whose package lacks a usable `main`
pub const SOCIAL_LIKES_MAIN: &str = "./src/social-likes.js";

/// Bootstrap plugin scripts in the order they are included in the markup
pub const BOOTSTRAP_PLUGINS: &[&str] = &[
    "affix",
    "alert",
    "dropdown",
    "tooltip",
    "modal",
    "transition",
    "button",
    "popover",
    "carousel",
    "scrollspy",
    "collapse",
    "tab",
];

/// Exit codes
pub mod exit_codes {
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}
