//! Template loading and processing
//!
//! - `store`: where template content comes from
//! - `operation`: file operations produced from plan entries
//! - `processor`: turns plan entries into file operations

pub mod operation;
pub mod processor;
pub mod store;

pub use operation::FileOperation;
pub use processor::PlanProcessor;
pub use store::{get_template_store, DirectoryTemplates, EmbeddedTemplates, TemplateStore};
