//! Template rendering
//!
//! - `interface`: the renderer trait the plan processor depends on
//! - `minijinja`: the MiniJinja implementation
//! - `filters`: custom filters registered with MiniJinja

pub mod filters;
pub mod interface;
pub mod minijinja;

pub use interface::TemplateRenderer;
pub use minijinja::MiniJinjaRenderer;
