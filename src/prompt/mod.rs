//! Interactive dialog utilities for user input
//!
//! The module is structured in layers:
//! - `interface`: Pure abstract interfaces independent of any UI library
//! - `dialoguer`: Concrete implementation using the dialoguer library
//! - `automatic_impl`: Implementation that answers from defaults
//! - `handler`: Walks the question table through a provider

use crate::error::Result;

pub mod automatic_impl;
pub mod dialoguer;
pub mod handler;
pub mod interface;

pub use automatic_impl::AutomaticPrompter;
pub use dialoguer::DialoguerPrompter;
pub use handler::{PromptEngine, PromptHandler};
pub use interface::*;

/// Picks the prompt engine for a run.
pub fn get_prompt_engine(non_interactive: bool) -> Box<dyn PromptEngine> {
    if non_interactive {
        Box::new(PromptHandler::new(AutomaticPrompter::new()))
    } else {
        Box::new(PromptHandler::new(DialoguerPrompter::new()))
    }
}

/// Asks a yes/no question, answering `true` without asking when `skip` is set.
pub fn confirm_with(
    provider: &dyn ConfirmationPrompter,
    skip: bool,
    prompt: String,
) -> Result<bool> {
    if skip {
        return Ok(true);
    }
    provider.prompt_confirmation(&ConfirmationConfig { prompt, default: false })
}
