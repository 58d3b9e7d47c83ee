//! CPU-side quad mesh data.
//!
//! This module provides [`QuadMesh`], a mesh whose faces are
//! quadrilaterals. Positions and faces are stored structured
//! (`[f32; 3]` / `[u32; 4]`); hosts that bulk-load flat numeric buffers
//! use the zero-copy flat views instead of re-packing.

use std::collections::HashMap;

/// A CPU-side mesh made of quadrilateral faces.
///
/// Positions are 3D points in insertion order; each quad holds four
/// 0-based indices into the position list. This is the GPU-agnostic
/// representation filled by the generators and handed to a host's
/// mesh-construction API.
#[derive(Clone, Default)]
pub struct QuadMesh {
    positions: Vec<[f32; 3]>,
    quads: Vec<[u32; 4]>,
    label: Option<String>,
}

impl QuadMesh {
    /// Create a new empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the vertex positions.
    #[must_use]
    pub fn with_positions(mut self, positions: Vec<[f32; 3]>) -> Self {
        self.positions = positions;
        self
    }

    /// Set the quad faces.
    #[must_use]
    pub fn with_quads(mut self, quads: Vec<[u32; 4]>) -> Self {
        self.quads = quads;
        self
    }

    /// Set a debug label.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Get the vertex positions.
    pub fn positions(&self) -> &[[f32; 3]] {
        &self.positions
    }

    /// Get the quad faces.
    pub fn quads(&self) -> &[[u32; 4]] {
        &self.quads
    }

    /// Get the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Get the number of quad faces.
    pub fn quad_count(&self) -> usize {
        self.quads.len()
    }

    /// Get the debug label.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Positions as a flat `[x0, y0, z0, x1, ...]` slice (zero-copy).
    pub fn flat_positions(&self) -> &[f32] {
        bytemuck::cast_slice(&self.positions)
    }

    /// Quad indices as a flat slice, four per face (zero-copy).
    pub fn flat_indices(&self) -> &[u32] {
        bytemuck::cast_slice(&self.quads)
    }

    /// Raw position bytes for bulk GPU upload.
    pub fn position_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.positions)
    }

    /// Raw index bytes for bulk GPU upload.
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.quads)
    }

    /// Check that every face index references an existing vertex.
    pub fn indices_in_bounds(&self) -> bool {
        let n = self.positions.len() as u32;
        self.quads.iter().flatten().all(|&i| i < n)
    }

    /// Check that the mesh is a closed solid: every undirected edge is
    /// shared by exactly two quads. Empty meshes are not closed.
    pub fn is_closed(&self) -> bool {
        let mut edges: HashMap<(u32, u32), u32> = HashMap::new();
        for quad in &self.quads {
            for k in 0..4 {
                let a = quad[k];
                let b = quad[(k + 1) % 4];
                let key = if a < b { (a, b) } else { (b, a) };
                *edges.entry(key).or_insert(0) += 1;
            }
        }
        !edges.is_empty() && edges.values().all(|&count| count == 2)
    }

    /// Split each quad into two triangles, preserving winding.
    ///
    /// Quad `[a, b, c, d]` becomes `[a, b, c]` and `[a, c, d]`, for
    /// hosts that only accept triangle lists.
    pub fn triangulated_indices(&self) -> Vec<[u32; 3]> {
        let mut triangles = Vec::with_capacity(self.quads.len() * 2);
        for &[a, b, c, d] in &self.quads {
            triangles.push([a, b, c]);
            triangles.push([a, c, d]);
        }
        triangles
    }
}

impl std::fmt::Debug for QuadMesh {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QuadMesh")
            .field("label", &self.label)
            .field("vertex_count", &self.positions.len())
            .field("quad_count", &self.quads.len())
            .finish()
    }
}
