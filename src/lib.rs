//! # Ziggurat Mesh
//!
//! Stepped-pyramid (ziggurat) mesh generation for 3D editor hosts.
//!
//! The crate is split into three layers:
//!
//! - [`mesh`] — CPU-side quad-mesh data ([`mesh::QuadMesh`]) and the
//!   stepped-pyramid generator
//!   ([`mesh::generators::generate_step_pyramid`])
//! - [`ops`] — the editor-facing operator: parameters with defaults and
//!   suggested ranges, validation, and scene insertion
//! - [`scene`] — a minimal scene graph standing in for the host document
//!   (meshes, placed nodes, 3D cursor, selection state)
//!
//! The generator is a pure function; everything stateful lives in the
//! host's [`scene::Scene`].

pub mod math;
pub mod mesh;
pub mod ops;
pub mod scene;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Log a startup line; hosts call this once after installing a logger.
pub fn init() {
    log::info!("ziggurat-mesh v{} initialized", VERSION);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
