use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::plan::{EmitMode, PlanEntry};
use crate::renderer::TemplateRenderer;

use super::operation::FileOperation;
use super::store::TemplateStore;

/// Turns plan entries into file operations rooted at the output directory.
pub struct PlanProcessor<'a> {
    /// Dependencies
    engine: &'a dyn TemplateRenderer,
    store: &'a dyn TemplateStore,

    /// Other
    output_root: PathBuf,
}

impl<'a> PlanProcessor<'a> {
    pub fn new<P: AsRef<Path>>(
        engine: &'a dyn TemplateRenderer,
        store: &'a dyn TemplateStore,
        output_root: P,
    ) -> Self {
        Self { engine, store, output_root: output_root.as_ref().to_path_buf() }
    }

    /// Loads the entry's template and renders it when the entry asks for it.
    ///
    /// Nothing is written; the returned operation records whether the
    /// target already exists so the caller can decide about overwriting.
    pub fn process(&self, entry: &PlanEntry) -> Result<FileOperation> {
        let target = self.output_root.join(entry.output_path());
        let target_exists = target.exists();
        let source = self.store.load(entry.template_id())?;

        match entry.mode() {
            EmitMode::Copy => Ok(FileOperation::Copy {
                template_id: entry.template_id().to_string(),
                target,
                content: source,
                target_exists,
            }),
            EmitMode::Render => {
                let context = serde_json::Value::Object(entry.variables().clone());
                let content =
                    self.engine.render(&source, &context, Some(entry.template_id()))?;
                Ok(FileOperation::Write { target, content, target_exists })
            }
        }
    }

    pub fn process_directory<P: AsRef<Path>>(&self, directory: P) -> FileOperation {
        let target = self.output_root.join(directory);
        let target_exists = target.is_dir();
        FileOperation::CreateDirectory { target, target_exists }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::MiniJinjaRenderer;
    use crate::template::store::EmbeddedTemplates;
    use serde_json::{json, Map};
    use tempfile::TempDir;

    #[test]
    fn copy_entries_keep_template_content() {
        let output = TempDir::new().unwrap();
        let engine = MiniJinjaRenderer::new();
        let processor = PlanProcessor::new(&engine, &EmbeddedTemplates, output.path());

        let op = processor.process(&PlanEntry::copy("main.js", "app/scripts/main.js")).unwrap();
        match op {
            FileOperation::Copy { template_id, target, content, target_exists } => {
                assert_eq!(template_id, "main.js");
                assert_eq!(target, output.path().join("app/scripts/main.js"));
                assert_eq!(content, EmbeddedTemplates.load("main.js").unwrap());
                assert!(!target_exists);
            }
            other => panic!("unexpected operation: {other:?}"),
        }
    }

    #[test]
    fn render_entries_use_entry_variables() {
        let output = TempDir::new().unwrap();
        std::fs::write(output.path().join(".gitignore"), "old").unwrap();
        let engine = MiniJinjaRenderer::new();
        let processor = PlanProcessor::new(&engine, &EmbeddedTemplates, output.path());

        let mut variables = Map::new();
        variables.insert("appName".to_string(), json!("my-site"));
        let op = processor
            .process(&PlanEntry::render("gitignore", ".gitignore", variables))
            .unwrap();
        match op {
            FileOperation::Write { content, target_exists, .. } => {
                assert!(content.starts_with("# my-site\n"));
                assert!(target_exists);
            }
            other => panic!("unexpected operation: {other:?}"),
        }
    }

    #[test]
    fn unknown_template_fails() {
        let output = TempDir::new().unwrap();
        let engine = MiniJinjaRenderer::new();
        let processor = PlanProcessor::new(&engine, &EmbeddedTemplates, output.path());
        assert!(processor.process(&PlanEntry::copy("missing", "missing")).is_err());
    }

    #[test]
    fn directories_report_existence() {
        let output = TempDir::new().unwrap();
        std::fs::create_dir_all(output.path().join("app/images")).unwrap();
        let engine = MiniJinjaRenderer::new();
        let processor = PlanProcessor::new(&engine, &EmbeddedTemplates, output.path());

        assert!(processor.process_directory("app/images").target_exists());
        assert!(!processor.process_directory("app/social").target_exists());
    }
}
