//! Scene graph data types.
//!
//! All spatial values use plain arrays (`[f32; 3]`) so that embedding
//! hosts can map them onto their own math types; see
//! [`crate::math::vec3_from_array`].

use crate::mesh::QuadMesh;

/// A placed object in the scene.
///
/// Nodes reference meshes by index into the owning [`Scene`]'s mesh
/// list, so meshes can be shared between nodes.
#[derive(Debug, Clone)]
pub struct SceneNode {
    /// Node name, if any.
    pub name: Option<String>,
    /// World translation [x, y, z].
    pub translation: [f32; 3],
    /// Index into [`Scene::meshes`], if the node carries a mesh.
    pub mesh: Option<usize>,
    /// Whether the node is part of the current selection.
    pub selected: bool,
}

impl SceneNode {
    /// Creates an unselected node at the origin with no mesh.
    pub fn new() -> Self {
        Self {
            name: None,
            translation: [0.0, 0.0, 0.0],
            mesh: None,
            selected: false,
        }
    }

    /// Set the node name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the world translation.
    #[must_use]
    pub fn with_translation(mut self, translation: [f32; 3]) -> Self {
        self.translation = translation;
        self
    }

    /// Set the mesh index.
    #[must_use]
    pub fn with_mesh(mut self, mesh: usize) -> Self {
        self.mesh = Some(mesh);
        self
    }
}

impl Default for SceneNode {
    fn default() -> Self {
        Self::new()
    }
}

/// A scene: meshes, the nodes placing them, a 3D cursor, and selection
/// state.
///
/// New objects spawn at the cursor, the way a 3D editor drops freshly
/// created geometry where the user last placed it.
#[derive(Debug, Default)]
pub struct Scene {
    /// Scene name, if any.
    pub name: Option<String>,
    /// 3D cursor position; spawn target for new objects.
    pub cursor: [f32; 3],
    nodes: Vec<SceneNode>,
    meshes: Vec<QuadMesh>,
    active: Option<usize>,
}

impl Scene {
    /// Creates a new empty scene with the cursor at the origin.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the scene name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Add a mesh to the scene's mesh list and return its index.
    pub fn add_mesh(&mut self, mesh: QuadMesh) -> usize {
        self.meshes.push(mesh);
        self.meshes.len() - 1
    }

    /// Spawn a node at the cursor referencing `mesh_index`.
    ///
    /// The new node replaces the current selection and becomes the
    /// active node. Returns the node's index.
    pub fn spawn_object(&mut self, name: impl Into<String>, mesh_index: usize) -> usize {
        self.clear_selection();
        let index = self.nodes.len();
        let mut node = SceneNode::new()
            .with_name(name)
            .with_translation(self.cursor)
            .with_mesh(mesh_index);
        node.selected = true;
        self.nodes.push(node);
        self.active = Some(index);
        index
    }

    /// Deselect every node and clear the active node.
    pub fn clear_selection(&mut self) {
        for node in &mut self.nodes {
            node.selected = false;
        }
        self.active = None;
    }

    /// The nodes in the scene.
    pub fn nodes(&self) -> &[SceneNode] {
        &self.nodes
    }

    /// The meshes in the scene.
    pub fn meshes(&self) -> &[QuadMesh] {
        &self.meshes
    }

    /// The active node, if any.
    pub fn active_node(&self) -> Option<&SceneNode> {
        self.active.and_then(|i| self.nodes.get(i))
    }
}
