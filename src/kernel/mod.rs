//! Headless playground core (state/action/effect).

pub mod action;
pub mod completion;
pub mod debounce;
pub mod editor;
pub mod effect;
pub mod escape;
pub mod format;
pub mod language;
pub mod overlay;
pub mod prefs;
pub mod preview;
pub mod services;
pub mod state;
pub mod store;
pub mod sync;
pub mod syntax;

pub use action::Action;
pub use editor::{EditorAction, EditorState, Key};
pub use effect::Effect;
pub use language::Language;
pub use state::AppState;
pub use store::{DispatchResult, Store};
