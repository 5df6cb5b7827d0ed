use std::path::PathBuf;

/// What emitting one plan entry does to the filesystem.
#[derive(Debug)]
pub enum FileOperation {
    /// Template content copied verbatim.
    Copy { template_id: String, target: PathBuf, content: String, target_exists: bool },
    /// Rendered template output.
    Write { target: PathBuf, content: String, target_exists: bool },
    CreateDirectory { target: PathBuf, target_exists: bool },
}

impl FileOperation {
    pub fn target(&self) -> &PathBuf {
        match self {
            FileOperation::Copy { target, .. }
            | FileOperation::Write { target, .. }
            | FileOperation::CreateDirectory { target, .. } => target,
        }
    }

    pub fn target_exists(&self) -> bool {
        match self {
            FileOperation::Copy { target_exists, .. }
            | FileOperation::Write { target_exists, .. }
            | FileOperation::CreateDirectory { target_exists, .. } => *target_exists,
        }
    }

    /// Gets a message describing the operation and its status.
    ///
    /// # Arguments
    /// * `user_confirmed_overwrite` - Whether the user has confirmed overwriting existing files
    /// * `dry_run` - Whether this is a dry run (no actual file operations)
    pub fn get_message(&self, user_confirmed_overwrite: bool, dry_run: bool) -> String {
        let prefix = if dry_run { "[DRY RUN] " } else { "" };

        match self {
            FileOperation::Copy { template_id, target, target_exists, .. } => {
                match (*target_exists, user_confirmed_overwrite) {
                    (true, true) => format!(
                        "{prefix}Copying '{template_id}' to '{}' (overwriting existing file)",
                        target.display()
                    ),
                    (true, false) => format!(
                        "{prefix}Skipping copy of '{template_id}' to '{}' (target already exists)",
                        target.display()
                    ),
                    (false, _) => {
                        format!("{prefix}Copying '{template_id}' to '{}'", target.display())
                    }
                }
            }
            FileOperation::Write { target, target_exists, .. } => {
                match (*target_exists, user_confirmed_overwrite) {
                    (true, true) => format!(
                        "{prefix}Writing to '{}' (overwriting existing file)",
                        target.display()
                    ),
                    (true, false) => format!(
                        "{prefix}Skipping write to '{}' (target already exists)",
                        target.display()
                    ),
                    (false, _) => format!("{prefix}Writing to '{}'", target.display()),
                }
            }
            FileOperation::CreateDirectory { target, target_exists } => {
                if *target_exists {
                    format!(
                        "{prefix}Skipping directory creation '{}' (already exists)",
                        target.display()
                    )
                } else {
                    format!("{prefix}Creating directory '{}'", target.display())
                }
            }
        }
    }
}
