use crate::{
    cli::SkipConfirm,
    error::{Error, Result},
    plan::PlanEntry,
    prompt::{confirm_with, ConfirmationPrompter},
    template::{FileOperation, PlanProcessor},
};
use std::path::Path;

/// Writes plan entries into the output tree.
pub trait Emitter {
    fn emit(&self, entry: &PlanEntry) -> Result<()>;

    /// Creates an empty directory relative to the output root.
    fn create_directory(&self, directory: &Path) -> Result<()>;
}

/// Emits plan entries through the plan processor onto the filesystem
pub struct FileProcessor<'a> {
    processor: PlanProcessor<'a>,
    confirmer: &'a dyn ConfirmationPrompter,
    skip_confirms: &'a [SkipConfirm],
    dry_run: bool,
}

impl<'a> FileProcessor<'a> {
    pub fn new(
        processor: PlanProcessor<'a>,
        confirmer: &'a dyn ConfirmationPrompter,
        skip_confirms: &'a [SkipConfirm],
        dry_run: bool,
    ) -> Self {
        Self { processor, confirmer, skip_confirms, dry_run }
    }

    /// Handles a single file operation, returning whether it was carried out
    fn handle_file_operation(&self, file_operation: &FileOperation) -> Result<bool> {
        log::debug!("Handling file operation: {}", file_operation.target().display());
        match file_operation {
            FileOperation::Write { target, target_exists, content }
            | FileOperation::Copy { target, target_exists, content, .. } => {
                let skip_prompt = self.should_skip_overwrite_prompt(*target_exists);
                let user_confirmed = confirm_with(
                    self.confirmer,
                    skip_prompt,
                    format!("Overwrite {}?", target.display()),
                )?;

                if user_confirmed {
                    self.write_file(content, target)?;
                }
                Ok(user_confirmed)
            }
            FileOperation::CreateDirectory { target, target_exists } => {
                if !target_exists {
                    self.create_dir_all(target)?;
                }
                Ok(true)
            }
        }
    }

    /// Write content to a file, creating parent directories if needed.
    fn write_file<P: AsRef<Path>>(&self, content: &str, dest_path: P) -> Result<()> {
        let dest_path = dest_path.as_ref();

        if self.dry_run {
            return Ok(());
        }

        if let Some(parent) = dest_path.parent() {
            self.create_dir_all(parent)?;
        }

        std::fs::write(dest_path, content).map_err(Error::from)
    }

    /// Create directory and all parent directories if they don't exist.
    fn create_dir_all<P: AsRef<Path>>(&self, dest_path: P) -> Result<()> {
        if self.dry_run {
            return Ok(());
        }

        std::fs::create_dir_all(dest_path.as_ref()).map_err(Error::from)
    }

    /// Determines if overwrite prompts should be skipped
    fn should_skip_overwrite_prompt(&self, target_exists: bool) -> bool {
        self.skip_confirms.contains(&SkipConfirm::All)
            || self.skip_confirms.contains(&SkipConfirm::Overwrite)
            || !target_exists
    }

    fn apply(&self, file_operation: FileOperation) -> Result<()> {
        let user_confirmed_overwrite = self.handle_file_operation(&file_operation)?;
        log::info!("{}", file_operation.get_message(user_confirmed_overwrite, self.dry_run));
        Ok(())
    }
}

impl Emitter for FileProcessor<'_> {
    fn emit(&self, entry: &PlanEntry) -> Result<()> {
        let file_operation = self.processor.process(entry)?;
        self.apply(file_operation)
    }

    fn create_directory(&self, directory: &Path) -> Result<()> {
        self.apply(self.processor.process_directory(directory))
    }
}
