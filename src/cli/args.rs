use crate::config::options::{
    option_desc, COFFEE, SKIP_INSTALL, SKIP_INSTALL_MESSAGE, SKIP_WELCOME_MESSAGE,
    TEST_FRAMEWORK,
};
use crate::config::GeneratorOptions;
use crate::constants::{exit_codes, verbosity};
use clap::{error::ErrorKind, CommandFactory, Parser, ValueEnum};
use log::LevelFilter;
use std::fmt::Display;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#;

/// Skip confirmation prompts for specific stages.
#[derive(Debug, Clone, ValueEnum, Copy, PartialEq)]
#[value(rename_all = "lowercase")]
pub enum SkipConfirm {
    /// Skip every confirmation prompt.
    All,
    /// Skip file overwrite confirmations.
    Overwrite,
}

impl Display for SkipConfirm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            SkipConfirm::All => "all",
            SkipConfirm::Overwrite => "overwrite",
        };
        write!(f, "{s}")
    }
}

/// Scaffolds a static web project: build tool config, front-end manifest,
/// stylesheets, markup and a test harness.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Destination directory for generated files.
    #[arg(value_name = "OUTPUT_DIR", default_value = ".")]
    pub output_dir: PathBuf,

    #[arg(long = TEST_FRAMEWORK, value_name = "NAME", help = option_desc(TEST_FRAMEWORK))]
    pub test_framework: Option<String>,

    #[arg(long = COFFEE, help = option_desc(COFFEE))]
    pub coffee: bool,

    #[arg(long = SKIP_WELCOME_MESSAGE, help = option_desc(SKIP_WELCOME_MESSAGE))]
    pub skip_welcome_message: bool,

    #[arg(long = SKIP_INSTALL_MESSAGE, help = option_desc(SKIP_INSTALL_MESSAGE))]
    pub skip_install_message: bool,

    #[arg(long = SKIP_INSTALL, help = option_desc(SKIP_INSTALL))]
    pub skip_install: bool,

    /// Write into a non-empty output directory.
    #[arg(short, long)]
    pub force: bool,

    /// Increase logging verbosity (`-v`, `-vv`, `-vvv`).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Predefined answers as JSON string or `-` to read from stdin.
    #[arg(short, long)]
    pub answers: Option<String>,

    /// Predefined answers from a JSON or YAML file.
    #[arg(long = "answers-file", value_name = "PATH")]
    pub answers_file: Option<PathBuf>,

    /// Answer every remaining question with its default.
    #[arg(long = "non-interactive")]
    pub non_interactive: bool,

    /// Directory with template overrides; missing templates use the built-in set.
    #[arg(long = "template-dir", value_name = "DIR")]
    pub template_dir: Option<PathBuf>,

    /// Confirmation prompts to skip (comma-separated).
    #[arg(long = "skip-confirms", value_delimiter = ',')]
    #[arg(value_enum)]
    pub skip_confirms: Vec<SkipConfirm>,

    /// Preview actions without touching the filesystem.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

impl Args {
    /// Generator options from the flags; unset values keep their declared defaults.
    pub fn generator_options(&self, app_name: String) -> GeneratorOptions {
        let defaults = GeneratorOptions::default();
        GeneratorOptions {
            app_name,
            test_framework: self
                .test_framework
                .clone()
                .unwrap_or(defaults.test_framework),
            coffee: self.coffee || defaults.coffee,
            skip_welcome_message: self.skip_welcome_message || defaults.skip_welcome_message,
            skip_install_message: self.skip_install_message || defaults.skip_install_message,
            skip_install: self.skip_install || defaults.skip_install,
        }
    }
}

/// Parse command line arguments, printing help on missing required inputs.
pub fn get_args() -> Args {
    Args::try_parse().unwrap_or_else(|e| {
        if e.kind() == ErrorKind::MissingRequiredArgument {
            let mut command = Args::command().help_template(HELP_TEMPLATE);
            if let Err(print_err) = command.print_help() {
                eprintln!("Failed to display help information: {print_err}");
            } else {
                println!();
            }
            std::process::exit(exit_codes::FAILURE);
        } else {
            e.exit();
        }
    })
}

/// Map `-v` counts to the appropriate log level.
pub fn get_log_level_from_verbose(verbose_count: u8) -> LevelFilter {
    match verbose_count {
        verbosity::OFF => LevelFilter::Error,
        verbosity::INFO => LevelFilter::Info,
        verbosity::DEBUG => LevelFilter::Debug,
        verbosity::TRACE.. => LevelFilter::Trace,
    }
}
