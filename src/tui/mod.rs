//! TUI module: terminal presenter built on Ratatui.
//!
//! The presenter owns the tick schedule: the core pipeline runs only when
//! the presenter calls into it, one synchronous tick at a time per session.
//! Stopping the presenter simply stops future ticks.

mod app;
mod styles;
mod ui;

pub use app::App;
pub use styles::WardTheme;
