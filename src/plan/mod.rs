//! Template plan building
//!
//! Turns a resolved [`ConfigurationRecord`] into the ordered list of files to
//! emit. Everything here is a pure function of the record:
//! - `entry`: the plan entry type
//! - `manifest`: front-end dependency rules
//! - `stylesheet`: stylesheet selection
//! - `test_framework`: the composed `test/` sub-generator

pub mod entry;
pub mod manifest;
pub mod stylesheet;
pub mod test_framework;

pub use entry::{EmitMode, PlanEntry};
pub use manifest::{build_manifest, script_provider, BowerManifest, ScriptProvider};
pub use test_framework::build_test_plan;

use crate::config::{ConfigurationRecord, Feature, ScriptDialect, TextField};
use crate::constants::{APP_DIR, BOOTSTRAP_PLUGINS, PROJECT_DIRECTORIES};
use serde_json::{json, Map, Value};
use std::path::{Path, PathBuf};

/// Files under `app/` copied as they are.
const STATIC_APP_FILES: &[&str] = &["robots.txt", "404.html"];

const MARKUP_TEMPLATE: &str = "index.html";

/// Everything one generator run writes.
#[derive(Debug, Clone, PartialEq)]
pub struct ScaffoldPlan {
    /// Empty directories to create, relative to the project root.
    pub directories: Vec<PathBuf>,
    pub entries: Vec<PlanEntry>,
    /// Front-end manifest the `bower.json` entry is rendered from.
    pub manifest: BowerManifest,
}

impl ScaffoldPlan {
    pub fn entry(&self, output_path: impl AsRef<Path>) -> Option<&PlanEntry> {
        self.entries.iter().find(|entry| entry.output_path() == output_path.as_ref())
    }

    /// Output paths of the markup and the entry stylesheet, the files whose
    /// include lists follow the installed dependencies.
    pub fn wiring_targets(&self) -> Vec<PathBuf> {
        self.entries
            .iter()
            .filter(|entry| {
                entry.template_id() == MARKUP_TEMPLATE
                    || entry.template_id().starts_with("styles/main.")
            })
            .map(|entry| entry.output_path().to_path_buf())
            .collect()
    }
}

/// Builds the emission plan for the main project tree.
pub fn build_plan(config: &ConfigurationRecord) -> ScaffoldPlan {
    let manifest = build_manifest(config);

    let mut entries = vec![
        build_tool_entry(config),
        package_entry(config),
        PlanEntry::render("gitignore", ".gitignore", app_name_variables(config)),
        PlanEntry::copy("gitattributes", ".gitattributes"),
        credentials_entry(config),
        PlanEntry::copy("bowerrc", ".bowerrc"),
        manifest_entry(&manifest),
        PlanEntry::copy("jshintrc", ".jshintrc"),
        PlanEntry::copy("editorconfig", ".editorconfig"),
    ];
    entries.extend(stylesheet::stylesheet_entries(config));
    entries.push(markup_entry(config));
    entries.extend(STATIC_APP_FILES.iter().map(|file| {
        PlanEntry::copy(format!("app/{file}"), Path::new(APP_DIR).join(file))
    }));
    entries.push(script_entry(config));

    log::debug!("Built plan with {} entries", entries.len());

    ScaffoldPlan {
        directories: PROJECT_DIRECTORIES.iter().map(PathBuf::from).collect(),
        entries,
        manifest,
    }
}

fn app_name_variables(config: &ConfigurationRecord) -> Map<String, Value> {
    let mut variables = Map::new();
    variables.insert("appName".to_string(), json!(config.app_name()));
    variables
}

/// `Gruntfile.js`: needs the whole record, test framework included.
fn build_tool_entry(config: &ConfigurationRecord) -> PlanEntry {
    PlanEntry::render("Gruntfile.js", "Gruntfile.js", config.variables())
}

fn package_entry(config: &ConfigurationRecord) -> PlanEntry {
    let mut variables = app_name_variables(config);
    let flags = config.feature_variables();
    for key in ["includeSass", "includeLibSass", "includeRubySass"] {
        if let Some(value) = flags.get(key) {
            variables.insert(key.to_string(), value.clone());
        }
    }
    variables.insert("testFramework".to_string(), json!(config.test_framework().as_str()));
    variables.insert(
        "coffee".to_string(),
        json!(config.script_dialect() == ScriptDialect::CoffeeScript),
    );
    PlanEntry::render("_package.json", "package.json", variables)
}

fn credentials_entry(config: &ConfigurationRecord) -> PlanEntry {
    let variables = TextField::ALL
        .into_iter()
        .filter(TextField::is_credential)
        .map(|field| (field.key().to_string(), json!(config.text(field))))
        .collect();
    PlanEntry::render("ftpauth", ".ftpauth", variables)
}

fn manifest_entry(manifest: &BowerManifest) -> PlanEntry {
    let value = manifest.to_value();
    let mut variables = Map::new();
    variables.insert("manifestJson".to_string(), json!(format!("{value:#}")));
    variables.insert("manifest".to_string(), value);
    PlanEntry::render("bower.json", "bower.json", variables)
}

/// `app/index.html`: text fields, feature flags and, with Bootstrap, where
/// its plugin scripts live.
fn markup_entry(config: &ConfigurationRecord) -> PlanEntry {
    let mut variables = app_name_variables(config);
    variables.extend(config.text_variables());
    variables.extend(config.feature_variables());

    if config.has(Feature::Bootstrap) {
        if let Some(base) = script_provider(config).and_then(|provider| provider.script_base) {
            variables.insert("vendorScriptBase".to_string(), json!(base));
            variables.insert("bootstrapPlugins".to_string(), json!(BOOTSTRAP_PLUGINS));
        }
    }

    PlanEntry::render(MARKUP_TEMPLATE, Path::new(APP_DIR).join("index.html"), variables)
}

fn script_entry(config: &ConfigurationRecord) -> PlanEntry {
    let file = format!("main.{}", config.script_dialect().extension());
    PlanEntry::copy(file.clone(), Path::new(APP_DIR).join("scripts").join(file))
}
