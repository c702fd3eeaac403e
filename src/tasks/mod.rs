//! Task List Module
//!
//! The in-memory task store and the list rendering for the main screen.

mod renderer;
mod state;

pub use renderer::task_rows;
pub use state::{Action, Task, TaskStore};
