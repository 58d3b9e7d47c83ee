//! Minimal scene graph for hosting generated meshes.
//!
//! - [`Scene`] - mesh and node container with cursor and selection state
//! - [`SceneNode`] - a placed object referencing a mesh by index

mod types;

pub use types::{Scene, SceneNode};
