//! Question List Viewer (qlv)
//!
//! TUI application for browsing a test's question list: live search,
//! row selection, incremental pagination, answer expansion and optional
//! columns.
//!
//! Follows a Pure Core / Impure Shell split: `model` and `state` hold all
//! behavior and are tested without a terminal; `view` owns the terminal.

pub mod config;
pub mod logging;
pub mod model;
pub mod source;
pub mod state;
pub mod view;
