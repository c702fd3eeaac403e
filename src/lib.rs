//! today-tui - A terminal task list for the current day
//!
//! Tasks live in memory only and reset when the process restarts; the header
//! counts down to the next local midnight to make that explicit.
//!
//! # Architecture
//!
//! - **Tasks**: ordered in-memory store driven by an explicit action reducer
//! - **Countdown**: pure time-until-midnight computation, sampled once a second
//! - **Effects**: one-shot fade-in for the completion check mark
//! - **Theme**: single dark palette

pub mod app;
pub mod countdown;
pub mod effects;
pub mod tasks;
pub mod theme;

pub use app::App;
