use clap::Parser;
use std::collections::BTreeSet;
use std::path::Path;
use walkdir::WalkDir;
use webbaker::cli::Args;

/// Args for a run that never prompts, installs or prints banners.
pub fn quiet_args(output_dir: &Path, extra: &[&str]) -> Args {
    let mut argv = vec![
        "webbaker".to_string(),
        output_dir.display().to_string(),
        "--non-interactive".to_string(),
        "--skip-install".to_string(),
        "--skip-welcome-message".to_string(),
        "--skip-install-message".to_string(),
        "--skip-confirms".to_string(),
        "all".to_string(),
        "-vv".to_string(),
    ];
    argv.extend(extra.iter().map(|arg| arg.to_string()));
    Args::parse_from(argv)
}

/// Relative paths of every file under `root`, sorted.
pub fn list_files(root: &Path) -> BTreeSet<String> {
    WalkDir::new(root)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.path().is_file())
        .map(|entry| {
            entry.path().strip_prefix(root).unwrap().to_string_lossy().replace('\\', "/")
        })
        .collect()
}

pub fn read(root: &Path, file: &str) -> String {
    std::fs::read_to_string(root.join(file))
        .unwrap_or_else(|e| panic!("failed to read {file}: {e}"))
}

pub fn read_json(root: &Path, file: &str) -> serde_json::Value {
    serde_json::from_str(&read(root, file))
        .unwrap_or_else(|e| panic!("{file} is not valid JSON: {e}"))
}
