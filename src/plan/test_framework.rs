//! Test-framework sub-generator
//!
//! Scaffolds the `test/` tree for the chosen framework. It runs once, after
//! the main plan has been emitted.

use crate::config::{ConfigurationRecord, TestFramework};
use crate::constants::versions;
use crate::plan::entry::PlanEntry;
use crate::plan::manifest::BowerManifest;
use serde_json::{json, Map};

/// Front-end packages the test runner page loads.
pub fn test_manifest(config: &ConfigurationRecord) -> BowerManifest {
    let mut manifest = BowerManifest::new(format!("{}-test", config.app_name()));
    match config.test_framework() {
        TestFramework::Mocha => {
            manifest.add_dependency("chai", versions::CHAI);
            manifest.add_dependency("mocha", versions::MOCHA);
        }
        TestFramework::Jasmine => {
            manifest.add_dependency("jasmine", versions::JASMINE);
        }
    }
    manifest
}

/// Plan entries for the `test/` tree.
pub fn build_test_plan(config: &ConfigurationRecord) -> Vec<PlanEntry> {
    let framework = config.test_framework().as_str();
    let extension = config.script_dialect().extension();
    let manifest = test_manifest(config);

    let mut page = Map::new();
    page.insert("appName".to_string(), json!(config.app_name()));
    page.insert("testFramework".to_string(), json!(framework));
    page.insert("specFile".to_string(), json!(format!("spec/test.{extension}")));

    let mut bower = Map::new();
    bower.insert("manifest".to_string(), manifest.to_value());
    bower.insert("manifestJson".to_string(), json!(format!("{:#}", manifest.to_value())));

    vec![
        PlanEntry::render("test/bower.json", "test/bower.json", bower),
        PlanEntry::render(format!("test/{framework}/index.html"), "test/index.html", page),
        PlanEntry::copy(
            format!("test/{framework}/test.{extension}"),
            format!("test/spec/test.{extension}"),
        ),
    ]
}
