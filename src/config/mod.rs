//! Answer resolution for the generator
//!
//! - `types`: feature flags, text fields and enumerated options
//! - `options`: declared command-line options and their defaults
//! - `question`: the ordered question table with its ask predicates
//! - `record`: the immutable configuration record
//! - `resolver`: turns options and answers into a record

pub mod options;
pub mod question;
pub mod record;
pub mod resolver;
pub mod types;

pub use options::GeneratorOptions;
pub use question::{questions, Answers, Choice, Condition, Question, QuestionKind};
pub use record::ConfigurationRecord;
pub use resolver::resolve;
pub use types::{Feature, FeatureGroup, SassEngine, ScriptDialect, TestFramework, TextField};
