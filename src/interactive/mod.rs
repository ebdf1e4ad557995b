//! Interactive tree viewer
//!
//! Full-screen ratatui view of a built tree.

mod app;
mod rendering;

pub use app::{App, InputMode, Message, MessageStyle, run_viewer};
