//! Stylesheet selection

use crate::config::{ConfigurationRecord, Feature};
use crate::constants::STYLES_DIR;
use crate::plan::entry::PlanEntry;
use std::path::Path;

/// Logical stylesheets of the generated project, in emission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stylesheet {
    Main,
    Base,
    Social,
    Fontface,
}

impl Stylesheet {
    pub const ALL: [Stylesheet; 4] =
        [Stylesheet::Main, Stylesheet::Base, Stylesheet::Social, Stylesheet::Fontface];

    pub fn name(&self) -> &'static str {
        match self {
            Stylesheet::Main => "main",
            Stylesheet::Base => "base",
            Stylesheet::Social => "social",
            Stylesheet::Fontface => "fontface",
        }
    }

    /// Only the entry point is compiled on its own; the rest are partials.
    pub fn is_entry_point(&self) -> bool {
        matches!(self, Stylesheet::Main)
    }

    pub fn is_included(&self, config: &ConfigurationRecord) -> bool {
        match self {
            Stylesheet::Fontface => config.has(Feature::SocialLikes),
            _ => true,
        }
    }
}

pub fn extension(config: &ConfigurationRecord) -> &'static str {
    if config.has(Feature::Sass) {
        "scss"
    } else {
        "css"
    }
}

/// Plan entries for every included stylesheet.
pub fn stylesheet_entries(config: &ConfigurationRecord) -> Vec<PlanEntry> {
    let extension = extension(config);
    let variables = config.variables();

    Stylesheet::ALL
        .into_iter()
        .filter(|sheet| sheet.is_included(config))
        .map(|sheet| {
            let file = format!("{}.{extension}", sheet.name());
            let prefix = if sheet.is_entry_point() { "" } else { "_" };
            let output = Path::new(STYLES_DIR).join(format!("{prefix}{file}"));
            PlanEntry::render(format!("styles/{file}"), output, variables.clone())
        })
        .collect()
}
