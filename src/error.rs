use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse JSON. Original error: {0}")]
    JSONParseError(#[from] serde_json::Error),

    #[error("Failed to parse YAML. Original error: {0}")]
    YAMLParseError(#[from] serde_yaml::Error),

    #[error("Failed to render. Original error: {0}")]
    MinijinjaError(#[from] minijinja::Error),

    #[error("Prompt failed: {0}")]
    PromptError(#[from] dialoguer::Error),

    /// Raised at resolution time, before any plan is built.
    #[error("Unsupported test framework '{name}'. Supported: {supported}.")]
    UnsupportedTestFramework { name: String, supported: String },

    /// Every field carries a default, so this signals a broken default table.
    #[error("Missing required answer for '{field}'.")]
    MissingRequiredAnswer { field: String },

    #[error("Template '{template_id}' not found.")]
    TemplateNotFound { template_id: String },

    #[error("Cannot proceed: output directory '{output_dir}' is not empty. Use --force to write into it.")]
    OutputDirectoryExists { output_dir: String },

    #[error("Dependency installation failed: `{command}` exited with {status}.")]
    InstallFailed { command: String, status: std::process::ExitStatus },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Convenience type alias for Results with the crate error type.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(crate::constants::exit_codes::FAILURE);
}
