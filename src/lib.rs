/// Handles argument parsing and the generation workflow.
pub mod cli;

/// Answer resolution into the configuration record.
pub mod config;

/// Shared constants: directories, package versions, exit codes.
pub mod constants;

/// Defines custom error types.
pub mod error;

/// Dependency installation after generation.
pub mod install;

/// A set of helpers for working with the file system.
pub mod ioutils;

/// Builds the list of files to emit from a configuration record.
pub mod plan;

/// User input and interaction handling.
pub mod prompt;

/// Template rendering functionality.
pub mod renderer;

/// Template loading and plan entry processing.
pub mod template;

/// Wiring of installed dependencies into generated files.
pub mod wire;
