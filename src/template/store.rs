use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

macro_rules! embed {
    ($($id:literal),* $(,)?) => {
        &[$(($id, include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/templates/", $id)))),*]
    };
}

/// Built-in templates keyed by template id.
const EMBEDDED: &[(&str, &str)] = embed![
    "Gruntfile.js",
    "_package.json",
    "gitignore",
    "gitattributes",
    "ftpauth",
    "bowerrc",
    "bower.json",
    "jshintrc",
    "editorconfig",
    "styles/main.scss",
    "styles/base.scss",
    "styles/social.scss",
    "styles/fontface.scss",
    "styles/main.css",
    "styles/base.css",
    "styles/social.css",
    "styles/fontface.css",
    "index.html",
    "app/robots.txt",
    "app/404.html",
    "main.js",
    "main.coffee",
    "test/bower.json",
    "test/mocha/index.html",
    "test/mocha/test.js",
    "test/mocha/test.coffee",
    "test/jasmine/index.html",
    "test/jasmine/test.js",
    "test/jasmine/test.coffee",
];

/// Source of template content.
pub trait TemplateStore {
    /// Loads the raw content of the template with the given id.
    fn load(&self, template_id: &str) -> Result<String>;
}

/// Templates compiled into the binary.
#[derive(Debug, Default, Clone, Copy)]
pub struct EmbeddedTemplates;

impl EmbeddedTemplates {
    pub fn ids() -> impl Iterator<Item = &'static str> {
        EMBEDDED.iter().map(|(id, _)| *id)
    }
}

impl TemplateStore for EmbeddedTemplates {
    fn load(&self, template_id: &str) -> Result<String> {
        EMBEDDED
            .iter()
            .find(|(id, _)| *id == template_id)
            .map(|(_, content)| content.to_string())
            .ok_or_else(|| Error::TemplateNotFound { template_id: template_id.to_string() })
    }
}

/// Templates read from a directory, one file per template id.
///
/// Ids missing from the directory are served from the embedded set, so an
/// override directory only needs the files it changes.
#[derive(Debug, Clone)]
pub struct DirectoryTemplates {
    root: PathBuf,
    fallback: EmbeddedTemplates,
}

impl DirectoryTemplates {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self { root: root.as_ref().to_path_buf(), fallback: EmbeddedTemplates }
    }
}

impl TemplateStore for DirectoryTemplates {
    fn load(&self, template_id: &str) -> Result<String> {
        let path = self.root.join(template_id);
        if path.is_file() {
            log::debug!("Loading template '{template_id}' from {}", path.display());
            return Ok(std::fs::read_to_string(path)?);
        }
        self.fallback.load(template_id)
    }
}

/// Picks the directory store when an override directory is given.
pub fn get_template_store(template_dir: Option<&Path>) -> Box<dyn TemplateStore> {
    match template_dir {
        Some(dir) => {
            log::debug!("Using template overrides from {}", dir.display());
            Box::new(DirectoryTemplates::new(dir))
        }
        None => Box::new(EmbeddedTemplates),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn embedded_store_serves_known_ids() {
        let content = EmbeddedTemplates.load("bowerrc").unwrap();
        assert!(content.contains("bower_components"));
    }

    #[test]
    fn embedded_store_rejects_unknown_ids() {
        match EmbeddedTemplates.load("nope.txt").unwrap_err() {
            Error::TemplateNotFound { template_id } => assert_eq!(template_id, "nope.txt"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn embedded_ids_are_unique() {
        let mut ids: Vec<_> = EmbeddedTemplates::ids().collect();
        let total = ids.len();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), total);
    }

    #[test]
    fn directory_store_prefers_override() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join("styles")).unwrap();
        std::fs::write(dir.path().join("styles/main.css"), "/* custom */").unwrap();

        let store = DirectoryTemplates::new(dir.path());
        assert_eq!(store.load("styles/main.css").unwrap(), "/* custom */");
    }

    #[test]
    fn directory_store_falls_back_to_embedded() {
        let dir = TempDir::new().unwrap();
        let store = DirectoryTemplates::new(dir.path());
        assert_eq!(store.load("jshintrc").unwrap(), EmbeddedTemplates.load("jshintrc").unwrap());
        assert!(store.load("missing").is_err());
    }
}
