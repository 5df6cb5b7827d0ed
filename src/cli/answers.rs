use crate::{
    config::{questions, Answers},
    constants::STDIN_INDICATOR,
    error::{Error, Result},
    prompt::PromptEngine,
};
use serde_json::Value;
use std::path::Path;

/// Collects answers from an answers file, command line arguments and prompts
pub struct AnswerCollector<'a> {
    engine: &'a dyn PromptEngine,
}

impl<'a> AnswerCollector<'a> {
    pub fn new(engine: &'a dyn PromptEngine) -> Self {
        Self { engine }
    }

    /// Read content from a reader into a string.
    fn read_from(&self, mut reader: impl std::io::Read) -> Result<String> {
        let mut buf = String::new();
        reader.read_to_string(&mut buf)?;
        Ok(buf)
    }

    /// Collects answers from all available sources.
    ///
    /// Command line answers override file answers; questions neither source
    /// answered go to the prompt engine.
    pub fn collect_answers(
        &self,
        answers_file: Option<&Path>,
        cli_answers: Option<String>,
    ) -> Result<Answers> {
        let mut answers = Answers::new();

        if let Some(path) = answers_file {
            let file_answers = self.read_answers_file(path)?;
            log::debug!("Loaded {} answers from {}", file_answers.len(), path.display());
            answers.extend(file_answers);
        }

        if let Some(answers_arg) = cli_answers {
            let answers_str = if answers_arg == STDIN_INDICATOR {
                self.read_from(std::io::stdin())?
            } else {
                answers_arg
            };
            answers.extend(self.parse_string_to_json(answers_str)?);
        }

        self.engine.ask(&questions(), &answers)
    }

    /// Reads a JSON or YAML answers file, picked by extension.
    fn read_answers_file(&self, path: &Path) -> Result<Answers> {
        let content = std::fs::read_to_string(path)?;
        let is_yaml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| matches!(ext, "yaml" | "yml"));

        let value: Value = if is_yaml {
            serde_yaml::from_str(&content)?
        } else {
            serde_json::from_str(&content)?
        };

        match value {
            Value::Object(map) => Ok(map),
            Value::Null => Ok(Answers::new()),
            other => {
                log::warn!(
                    "Answers file {} should hold a mapping, got {other}; ignoring it",
                    path.display()
                );
                Ok(Answers::new())
            }
        }
    }

    /// Parse a string into a JSON object.
    fn parse_string_to_json(&self, buf: String) -> Result<Answers> {
        // First attempt: parse as-is
        match serde_json::from_str::<Value>(&buf) {
            Ok(value) => match value {
                Value::Object(map) => Ok(map),
                _ => Ok(Answers::new()),
            },
            Err(initial_err) => {
                // Shell-escaped quotes (\") left over from over-escaping the invocation
                if buf.contains("\\\"") {
                    let cleaned = buf.replace("\\\"", "\"");
                    match serde_json::from_str::<Value>(&cleaned) {
                        Ok(Value::Object(map)) => Ok(map),
                        Ok(_) => Ok(Answers::new()),
                        Err(_) => Err(Error::JSONParseError(initial_err)),
                    }
                } else {
                    Err(Error::JSONParseError(initial_err))
                }
            }
        }
    }
}
