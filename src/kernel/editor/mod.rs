//! Editor domain: headless state + actions.

mod action;
mod reducer;
mod state;

pub use action::{EditorAction, Key};
pub use state::{Buffer, CopyLabel, EditorState, SurfaceState};
