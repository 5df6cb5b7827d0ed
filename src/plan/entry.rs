use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

/// How a plan entry's template becomes the output file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmitMode {
    /// Template content is written verbatim.
    Copy,
    /// Template is rendered with the entry's variables.
    Render,
}

/// One directive: produce one output file from one template.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanEntry {
    template_id: String,
    output_path: PathBuf,
    variables: Map<String, Value>,
    mode: EmitMode,
}

impl PlanEntry {
    pub fn copy(template_id: impl Into<String>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            template_id: template_id.into(),
            output_path: output_path.into(),
            variables: Map::new(),
            mode: EmitMode::Copy,
        }
    }

    pub fn render(
        template_id: impl Into<String>,
        output_path: impl Into<PathBuf>,
        variables: Map<String, Value>,
    ) -> Self {
        Self {
            template_id: template_id.into(),
            output_path: output_path.into(),
            variables,
            mode: EmitMode::Render,
        }
    }

    pub fn template_id(&self) -> &str {
        &self.template_id
    }

    /// Output path relative to the project root.
    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    pub fn variables(&self) -> &Map<String, Value> {
        &self.variables
    }

    pub fn variable(&self, name: &str) -> Option<&Value> {
        self.variables.get(name)
    }

    pub fn mode(&self) -> EmitMode {
        self.mode
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn copy_entries_carry_no_variables() {
        let entry = PlanEntry::copy("editorconfig", ".editorconfig");
        assert_eq!(entry.mode(), EmitMode::Copy);
        assert!(entry.variables().is_empty());
        assert_eq!(entry.output_path(), Path::new(".editorconfig"));
    }

    #[test]
    fn render_entries_expose_variables() {
        let mut variables = Map::new();
        variables.insert("appName".to_string(), json!("demo"));
        let entry = PlanEntry::render("gitignore", ".gitignore", variables);
        assert_eq!(entry.mode(), EmitMode::Render);
        assert_eq!(entry.variable("appName"), Some(&json!("demo")));
        assert_eq!(entry.variable("missing"), None);
    }
}
