//! Application layer: drives the headless kernel and owns the external collaborators.

mod playground;

pub use playground::{Playground, PlaygroundWarning, Services, Surfaces, MAX_WARNINGS};
