//! Mesh generators for stepped solids.
//!
//! Generators produce [`QuadMesh`] values that a host links into its
//! scene; see [`add_step_pyramid`](crate::ops::add_step_pyramid) for
//! the full operator path.

use super::data::QuadMesh;
use crate::math::Vec3;

/// Generate a stepped-pyramid (ziggurat) solid.
///
/// The pyramid is built downward from the origin: the base step's
/// bottom ring lies at `z = 0` and each further step drops
/// `step_height` while insetting by `step_width` on every side. Each
/// step contributes 8 vertices and 4 outer wall quads; consecutive
/// steps are stitched with 4 shelf quads, and single quads cap the top
/// and bottom, so the result is a closed solid.
///
/// Inputs are taken as-is. If `2.0 * step_width * steps as f32`
/// reaches `initial_size`, later steps have zero or negative extent
/// and the mesh self-intersects; restricting ranges is the caller's
/// job (see [`StepPyramidParams`](crate::ops::StepPyramidParams)).
///
/// # Arguments
///
/// * `initial_size` - Edge length of the bottom step
/// * `step_height` - Vertical drop per step
/// * `step_width` - Horizontal inset per step, applied on each side
/// * `steps` - Number of stacked steps, at least 1
pub fn generate_step_pyramid(
    initial_size: f32,
    step_height: f32,
    step_width: f32,
    steps: u32,
) -> QuadMesh {
    debug_assert!(steps >= 1, "a step pyramid needs at least one step");

    let mut positions = Vec::with_capacity(steps as usize * 8);
    let mut quads = Vec::with_capacity(steps as usize * 8);

    let mut size = initial_size;
    let mut origin = Vec3::zeros();
    // Index of the current step's first vertex.
    let mut base = 0u32;

    for _ in 0..steps {
        // 8 corners per step: bottom ring then top ring, each ring in
        // front-left, front-right, back-left, back-right order.
        for dz in [0.0, -step_height] {
            for (dx, dy) in [(0.0, 0.0), (size, 0.0), (0.0, size), (size, size)] {
                let corner = origin + Vec3::new(dx, dy, dz);
                positions.push([corner.x, corner.y, corner.z]);
            }
        }

        // Outer side walls.
        quads.push([base, base + 1, base + 5, base + 4]); // front
        quads.push([base + 2, base + 3, base + 7, base + 6]); // back
        quads.push([base, base + 4, base + 6, base + 2]); // left
        quads.push([base + 1, base + 5, base + 7, base + 3]); // right

        // Shelves connecting this step's bottom ring to the top ring
        // of the step below. Not applicable to the first step.
        if base > 0 {
            quads.push([base, base + 1, base - 3, base - 4]); // front
            quads.push([base + 2, base + 3, base - 1, base - 2]); // back
            quads.push([base, base + 2, base - 2, base - 4]); // left
            quads.push([base + 1, base + 3, base - 1, base - 3]); // right
        }

        size -= 2.0 * step_width;
        origin.x += step_width;
        origin.y += step_width;
        origin.z -= step_height;
        base += 8;
    }

    // Cap the top of the last step and the bottom of the first.
    let top = base - 8;
    quads.push([top + 4, top + 5, top + 7, top + 6]);
    quads.push([0, 1, 3, 2]);

    QuadMesh::new()
        .with_positions(positions)
        .with_quads(quads)
        .with_label("step_pyramid")
}
