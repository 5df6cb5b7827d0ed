use crate::config::options::DEFAULT_APP_NAME;
use crate::error::{Error, Result};
use crate::renderer::filters::to_kebab_case;
use std::path::{Path, PathBuf};

/// Checks that the output directory can be written into.
///
/// A missing or empty directory is always accepted; a non-empty one only
/// with `force`.
pub fn get_output_dir<P: AsRef<Path>>(output_dir: P, force: bool) -> Result<PathBuf> {
    let output_dir = output_dir.as_ref();
    if !force && !is_empty_or_missing(output_dir)? {
        return Err(Error::OutputDirectoryExists {
            output_dir: output_dir.display().to_string(),
        });
    }
    Ok(output_dir.to_path_buf())
}

fn is_empty_or_missing(dir: &Path) -> Result<bool> {
    if !dir.exists() {
        return Ok(true);
    }
    Ok(std::fs::read_dir(dir)?.next().is_none())
}

/// Application name derived from the output directory: its final component
/// as a slug.
pub fn app_name_for<P: AsRef<Path>>(output_dir: P) -> String {
    let output_dir = output_dir.as_ref();
    let resolved = output_dir.canonicalize().unwrap_or_else(|_| output_dir.to_path_buf());
    resolved
        .file_name()
        .and_then(|name| name.to_str())
        .map(to_kebab_case)
        .filter(|slug| !slug.is_empty())
        .unwrap_or_else(|| DEFAULT_APP_NAME.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_and_empty_directories_are_accepted() {
        let root = TempDir::new().unwrap();
        assert!(get_output_dir(root.path(), false).is_ok());
        assert!(get_output_dir(root.path().join("new-site"), false).is_ok());
    }

    #[test]
    fn non_empty_directory_requires_force() {
        let root = TempDir::new().unwrap();
        std::fs::write(root.path().join("index.html"), "").unwrap();
        assert!(matches!(
            get_output_dir(root.path(), false),
            Err(Error::OutputDirectoryExists { .. })
        ));
        assert!(get_output_dir(root.path(), true).is_ok());
    }

    #[test]
    fn app_name_is_a_slug_of_the_directory_name() {
        assert_eq!(app_name_for("/tmp/does-not-exist/My Landing Page"), "my-landing-page");
        assert_eq!(app_name_for("/"), DEFAULT_APP_NAME);

        let root = TempDir::new().unwrap();
        let site = root.path().join("summer_campaign");
        std::fs::create_dir(&site).unwrap();
        assert_eq!(app_name_for(&site), "summer-campaign");
    }
}
