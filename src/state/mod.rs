//! Application state module

mod app_state;
pub mod catalog;
pub mod format;
pub mod forms;
pub mod pricing;
mod submission;

pub use app_state::*;
pub use forms::*;
