//! tryit - headless live code playground engine
//!
//! Modules:
//! - kernel: syntax coloring, overlay/gutter model, autocomplete, editor state/actions/effects
//! - app: runtime that executes kernel effects against storage, preview and clipboard ports

pub mod app;
pub mod kernel;
