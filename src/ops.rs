//! Editor-facing operator for adding a stepped pyramid to a scene.
//!
//! A host exposes [`StepPyramidParams`] as user-adjustable fields,
//! clamps them to the suggested ranges, and runs [`add_step_pyramid`]
//! against its scene. The generator itself never validates its inputs;
//! everything rejectable is rejected here.

use thiserror::Error;

use crate::mesh::generators::generate_step_pyramid;
use crate::scene::Scene;

/// Suggested upper bound for the size-like parameters, in scene units.
pub const MAX_PARAM_SIZE: f32 = 5.0;

/// Suggested upper bound for the step count.
pub const MAX_STEPS: u32 = 10;

/// Parameters for the add-step-pyramid operator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepPyramidParams {
    /// Base edge length of the bottom step.
    pub initial_size: f32,
    /// Vertical drop per step.
    pub step_height: f32,
    /// Horizontal inset per step, applied on each side.
    pub step_width: f32,
    /// Number of stacked steps.
    pub steps: u32,
}

impl Default for StepPyramidParams {
    fn default() -> Self {
        Self {
            initial_size: 2.0,
            step_height: 0.2,
            step_width: 0.2,
            steps: 5,
        }
    }
}

/// Parameter validation failure.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParamError {
    /// `initial_size` was zero or negative.
    #[error("initial size must be positive, got {0}")]
    NonPositiveInitialSize(f32),
    /// `step_height` was zero or negative.
    #[error("step height must be positive, got {0}")]
    NonPositiveStepHeight(f32),
    /// `step_width` was zero or negative.
    #[error("step width must be positive, got {0}")]
    NonPositiveStepWidth(f32),
    /// `steps` was zero.
    #[error("at least one step is required")]
    TooFewSteps,
}

impl StepPyramidParams {
    /// Copy of these parameters clamped into the suggested UI ranges:
    /// sizes into `[0, MAX_PARAM_SIZE]`, steps into `[1, MAX_STEPS]`.
    ///
    /// Clamping mirrors what a host's property sliders do; a value
    /// clamped to exactly zero still fails [`validate`](Self::validate).
    #[must_use]
    pub fn clamped(&self) -> Self {
        Self {
            initial_size: self.initial_size.clamp(0.0, MAX_PARAM_SIZE),
            step_height: self.step_height.clamp(0.0, MAX_PARAM_SIZE),
            step_width: self.step_width.clamp(0.0, MAX_PARAM_SIZE),
            steps: self.steps.clamp(1, MAX_STEPS),
        }
    }

    /// Reject non-positive sizes and a zero step count.
    ///
    /// A step width large enough to exhaust the base size partway
    /// through is allowed (the generator emits the self-intersecting
    /// mesh unchanged) but logged as a warning.
    pub fn validate(&self) -> Result<(), ParamError> {
        if self.initial_size.is_nan() || self.initial_size <= 0.0 {
            return Err(ParamError::NonPositiveInitialSize(self.initial_size));
        }
        if self.step_height.is_nan() || self.step_height <= 0.0 {
            return Err(ParamError::NonPositiveStepHeight(self.step_height));
        }
        if self.step_width.is_nan() || self.step_width <= 0.0 {
            return Err(ParamError::NonPositiveStepWidth(self.step_width));
        }
        if self.steps < 1 {
            return Err(ParamError::TooFewSteps);
        }
        if 2.0 * self.step_width * self.steps as f32 >= self.initial_size {
            log::warn!(
                "step width {} exhausts base size {} within {} steps; geometry will self-intersect",
                self.step_width,
                self.initial_size,
                self.steps
            );
        }
        Ok(())
    }
}

/// Add a stepped pyramid to the scene at the scene's cursor.
///
/// Validates the parameters, generates the mesh, links it as a new
/// object named `"Pyramid"`, and makes that object the sole selected
/// and active node. Returns the new node's index. On a validation
/// error the scene is left untouched.
pub fn add_step_pyramid(
    scene: &mut Scene,
    params: &StepPyramidParams,
) -> Result<usize, ParamError> {
    params.validate()?;

    let mesh = generate_step_pyramid(
        params.initial_size,
        params.step_height,
        params.step_width,
        params.steps,
    )
    .with_label("pyramid");
    log::debug!(
        "step pyramid: {} vertices, {} quads",
        mesh.vertex_count(),
        mesh.quad_count()
    );

    let mesh_index = scene.add_mesh(mesh);
    Ok(scene.spawn_object("Pyramid", mesh_index))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_params() {
        let params = StepPyramidParams::default();
        assert_eq!(params.initial_size, 2.0);
        assert_eq!(params.step_height, 0.2);
        assert_eq!(params.step_width, 0.2);
        assert_eq!(params.steps, 5);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn validate_rejects_non_positive_sizes() {
        let params = StepPyramidParams {
            initial_size: 0.0,
            ..Default::default()
        };
        assert_eq!(
            params.validate(),
            Err(ParamError::NonPositiveInitialSize(0.0))
        );

        let params = StepPyramidParams {
            step_height: -1.0,
            ..Default::default()
        };
        assert_eq!(
            params.validate(),
            Err(ParamError::NonPositiveStepHeight(-1.0))
        );

        let params = StepPyramidParams {
            step_width: f32::NAN,
            ..Default::default()
        };
        assert!(matches!(
            params.validate(),
            Err(ParamError::NonPositiveStepWidth(_))
        ));
    }

    #[test]
    fn validate_rejects_zero_steps() {
        let params = StepPyramidParams {
            steps: 0,
            ..Default::default()
        };
        assert_eq!(params.validate(), Err(ParamError::TooFewSteps));
    }

    #[test]
    fn clamped_pulls_into_suggested_ranges() {
        let params = StepPyramidParams {
            initial_size: 9.0,
            step_height: -2.0,
            step_width: 0.2,
            steps: 42,
        }
        .clamped();
        assert_eq!(params.initial_size, MAX_PARAM_SIZE);
        assert_eq!(params.step_height, 0.0);
        assert_eq!(params.step_width, 0.2);
        assert_eq!(params.steps, MAX_STEPS);

        let params = StepPyramidParams {
            steps: 0,
            ..Default::default()
        }
        .clamped();
        assert_eq!(params.steps, 1);
    }

    #[test]
    fn error_messages_name_the_offending_value() {
        let err = ParamError::NonPositiveInitialSize(-0.5);
        assert_eq!(err.to_string(), "initial size must be positive, got -0.5");
    }

    #[test]
    fn operator_links_pyramid_into_scene() {
        let mut scene = Scene::new().with_name("test scene");
        scene.cursor = [1.0, 2.0, 3.0];

        let node_index = add_step_pyramid(&mut scene, &StepPyramidParams::default()).unwrap();

        let node = &scene.nodes()[node_index];
        assert_eq!(node.name.as_deref(), Some("Pyramid"));
        assert_eq!(node.translation, [1.0, 2.0, 3.0]);
        assert!(node.selected);
        assert_eq!(node.mesh, Some(0));

        let mesh = &scene.meshes()[0];
        assert_eq!(mesh.label(), Some("pyramid"));
        assert_eq!(mesh.vertex_count(), 5 * 8);

        let active = scene.active_node().unwrap();
        assert_eq!(active.name.as_deref(), Some("Pyramid"));
    }

    #[test]
    fn operator_replaces_previous_selection() {
        let mut scene = Scene::new();
        let first = add_step_pyramid(&mut scene, &StepPyramidParams::default()).unwrap();
        let second = add_step_pyramid(&mut scene, &StepPyramidParams::default()).unwrap();

        assert_ne!(first, second);
        assert!(!scene.nodes()[first].selected);
        assert!(scene.nodes()[second].selected);
    }

    #[test]
    fn invalid_params_leave_scene_untouched() {
        let mut scene = Scene::new();
        let params = StepPyramidParams {
            steps: 0,
            ..Default::default()
        };
        assert!(add_step_pyramid(&mut scene, &params).is_err());
        assert!(scene.nodes().is_empty());
        assert!(scene.meshes().is_empty());
    }
}
