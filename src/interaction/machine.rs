//! Pointer interaction state machine
//!
//! Turns discrete pointer events into hover feedback, camera orbits, and at
//! most one add/remove mutation per completed gesture. The machine holds no
//! DOM or callback state and never touches the scene itself; each step
//! returns the effects for the caller to apply, which keeps the whole
//! interaction path testable headless.

use crate::core::camera::OrbitCamera;
use crate::core::types::Vec2;
use crate::math::{CellCoord, GridConfig};
use crate::scene::{pick, Hit, HitTarget, SceneModel};

/// Pixels of travel on either screen axis that turn a press into a rotation
const ROTATE_THRESHOLD: f32 = 1.0;

/// Discrete pointer input in viewport pixel coordinates
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    Down { x: f32, y: f32 },
    Move { x: f32, y: f32 },
    Up { x: f32, y: f32 },
}

/// Visual cue for the current hover position
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Feedback {
    #[default]
    None,
    /// Translucent rollover cube at the candidate placement cell
    Preview(CellCoord),
    /// Existing cube highlighted for removal
    RemoveHighlight(CellCoord),
}

/// Scene mutation produced by a completed gesture
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mutation {
    Add(CellCoord),
    Remove(CellCoord),
}

impl Mutation {
    /// Apply to the scene; returns whether the scene changed
    pub fn apply(self, scene: &mut SceneModel) -> bool {
        match self {
            Mutation::Add(cell) => scene.add(cell),
            Mutation::Remove(cell) => scene.remove(cell),
        }
    }
}

/// Effects of one input event
#[derive(Clone, Copy, Debug, Default)]
pub struct StepOutput {
    /// The cue to show after this step; stale cues are always replaced
    pub feedback: Feedback,
    /// At most one mutation, on pointer-up of a non-rotating gesture
    pub mutation: Option<Mutation>,
    /// Whether the view needs re-rendering
    pub redraw: bool,
}

/// Gesture phase
#[derive(Clone, Copy, Debug, PartialEq)]
enum Phase {
    Idle,
    /// Button held, rotation not yet confirmed
    PointerDown { pressed_at: Vec2 },
    /// Confirmed camera drag; the pending mutation is cancelled
    Rotating { last: Vec2 },
    /// Button up, pointer moving over the canvas
    HoverPreview,
}

/// The interaction state machine
pub struct InteractionMachine {
    phase: Phase,
    feedback: Feedback,
}

impl InteractionMachine {
    /// Create a machine in the idle state
    pub fn new() -> Self {
        Self {
            phase: Phase::Idle,
            feedback: Feedback::None,
        }
    }

    /// Current hover cue
    pub fn feedback(&self) -> Feedback {
        self.feedback
    }

    /// Feed one pointer event through the machine
    pub fn handle(
        &mut self,
        event: PointerEvent,
        scene: &SceneModel,
        camera: &mut OrbitCamera,
    ) -> StepOutput {
        match event {
            PointerEvent::Down { x, y } => {
                self.phase = Phase::PointerDown {
                    pressed_at: Vec2::new(x, y),
                };
                StepOutput {
                    feedback: self.feedback,
                    ..StepOutput::default()
                }
            }
            PointerEvent::Move { x, y } => self.on_move(Vec2::new(x, y), scene, camera),
            PointerEvent::Up { x, y } => self.on_up(Vec2::new(x, y), scene, camera),
        }
    }

    fn on_move(&mut self, pos: Vec2, scene: &SceneModel, camera: &mut OrbitCamera) -> StepOutput {
        match self.phase {
            Phase::PointerDown { pressed_at } => {
                let delta = pos - pressed_at;
                if delta.x.abs() > ROTATE_THRESHOLD || delta.y.abs() > ROTATE_THRESHOLD {
                    // Confirmed camera drag; no mutation for this gesture
                    self.phase = Phase::Rotating { last: pos };
                    self.feedback = Feedback::None;
                    camera.orbit(delta.x, delta.y);
                    StepOutput {
                        feedback: Feedback::None,
                        mutation: None,
                        redraw: true,
                    }
                } else {
                    StepOutput {
                        feedback: self.feedback,
                        ..StepOutput::default()
                    }
                }
            }
            Phase::Rotating { last } => {
                let delta = pos - last;
                self.phase = Phase::Rotating { last: pos };
                camera.orbit(delta.x, delta.y);
                StepOutput {
                    feedback: Feedback::None,
                    mutation: None,
                    redraw: true,
                }
            }
            Phase::Idle | Phase::HoverPreview => {
                self.phase = Phase::HoverPreview;
                let ray = camera.screen_ray(pos.x, pos.y);
                let next = match pick(&ray, scene) {
                    Some(hit) => hover_cue(&hit, scene.grid()),
                    None => Feedback::None,
                };
                let redraw = next != self.feedback;
                self.feedback = next;
                StepOutput {
                    feedback: next,
                    mutation: None,
                    redraw,
                }
            }
        }
    }

    fn on_up(&mut self, pos: Vec2, scene: &SceneModel, camera: &OrbitCamera) -> StepOutput {
        let phase = self.phase;
        self.phase = Phase::Idle;
        let had_cue = self.feedback != Feedback::None;
        self.feedback = Feedback::None;

        // Only a press that never turned into a rotation commits a mutation
        let Phase::PointerDown { .. } = phase else {
            return StepOutput {
                feedback: Feedback::None,
                mutation: None,
                redraw: had_cue,
            };
        };

        let ray = camera.screen_ray(pos.x, pos.y);
        let mutation = pick(&ray, scene).and_then(|hit| decide_mutation(&hit, scene.grid()));
        StepOutput {
            feedback: Feedback::None,
            mutation,
            redraw: mutation.is_some() || had_cue,
        }
    }
}

impl Default for InteractionMachine {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolve a pointer-up hit into a mutation:
/// a cube struck on a lateral or bottom face is removed; a top-facing hit
/// places into the candidate cell when it stays inside the grid; stacking
/// above the top layer leaves the grid, so the struck top-layer cube is
/// removed instead. Out-of-bounds floor candidates do nothing.
fn decide_mutation(hit: &Hit, grid: &GridConfig) -> Option<Mutation> {
    match (hit.target, hit.is_top_facing()) {
        (HitTarget::Cube(cell), false) => Some(Mutation::Remove(cell)),
        (_, true) => {
            let candidate = hit.placement_cell(grid)?;
            if grid.center_in_bounds(grid.cell_center(candidate)) {
                Some(Mutation::Add(candidate))
            } else if let HitTarget::Cube(cell) = hit.target {
                grid.is_top_layer(cell).then_some(Mutation::Remove(cell))
            } else {
                None
            }
        }
        _ => None,
    }
}

/// The hover cue mirrors the mutation a click at this position would make
fn hover_cue(hit: &Hit, grid: &GridConfig) -> Feedback {
    match decide_mutation(hit, grid) {
        Some(Mutation::Add(cell)) => Feedback::Preview(cell),
        Some(Mutation::Remove(cell)) => Feedback::RemoveHighlight(cell),
        None => Feedback::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Vec3;

    fn setup(divisions: u32) -> (SceneModel, OrbitCamera) {
        let grid = GridConfig::new(divisions, 100.0);
        let scene = SceneModel::new(grid);
        let camera = OrbitCamera::new(Vec3::ZERO, 900.0, 640.0, 480.0);
        (scene, camera)
    }

    /// Screen position of a world point under the current camera
    fn screen(camera: &OrbitCamera, world: Vec3) -> (f32, f32) {
        let p = camera.world_to_screen(world).unwrap();
        (p.x, p.y)
    }

    /// Press and release at the same screen position, applying the mutation
    fn click(
        machine: &mut InteractionMachine,
        scene: &mut SceneModel,
        camera: &mut OrbitCamera,
        x: f32,
        y: f32,
    ) -> Option<Mutation> {
        machine.handle(PointerEvent::Down { x, y }, scene, camera);
        let out = machine.handle(PointerEvent::Up { x, y }, scene, camera);
        if let Some(mutation) = out.mutation {
            assert!(mutation.apply(scene));
        }
        out.mutation
    }

    #[test]
    fn test_floor_click_adds_then_second_click_removes() {
        let (mut scene, mut camera) = setup(4);
        let mut machine = InteractionMachine::new();
        let cell = CellCoord::new(1, 0, 2);
        let (x, y) = screen(&camera, scene.grid().cell_center(cell).with_y(0.0));

        let first = click(&mut machine, &mut scene, &mut camera, x, y);
        assert_eq!(first, Some(Mutation::Add(cell)));
        assert_eq!(scene.cells(), vec![cell]);

        // The same gesture now strikes the new cube directly
        let second = click(&mut machine, &mut scene, &mut camera, x, y);
        assert_eq!(second, Some(Mutation::Remove(cell)));
        assert!(scene.is_empty());
    }

    #[test]
    fn test_hover_preview_then_highlight() {
        let (mut scene, mut camera) = setup(4);
        let mut machine = InteractionMachine::new();
        let cell = CellCoord::new(1, 0, 2);
        let (x, y) = screen(&camera, scene.grid().cell_center(cell).with_y(0.0));

        let out = machine.handle(PointerEvent::Move { x, y }, &scene, &mut camera);
        assert_eq!(out.feedback, Feedback::Preview(cell));
        assert!(out.redraw);

        // Unchanged hover needs no redraw
        let out = machine.handle(PointerEvent::Move { x, y }, &scene, &mut camera);
        assert!(!out.redraw);

        scene.add(cell);
        let out = machine.handle(PointerEvent::Move { x, y }, &scene, &mut camera);
        assert_eq!(out.feedback, Feedback::RemoveHighlight(cell));
    }

    #[test]
    fn test_rotation_suppresses_mutation() {
        let (mut scene, mut camera) = setup(4);
        let mut machine = InteractionMachine::new();
        let yaw_before = camera.yaw();
        let (x, y) = (320.0, 240.0);

        machine.handle(PointerEvent::Down { x, y }, &scene, &mut camera);
        let out = machine.handle(PointerEvent::Move { x: x + 10.0, y }, &scene, &mut camera);
        assert!(out.redraw);
        assert_ne!(camera.yaw(), yaw_before);

        let out = machine.handle(PointerEvent::Up { x: x + 10.0, y }, &mut scene, &mut camera);
        assert_eq!(out.mutation, None);
        assert!(scene.is_empty());
    }

    #[test]
    fn test_sub_threshold_move_still_mutates() {
        let (scene, mut camera) = setup(4);
        let mut machine = InteractionMachine::new();
        let cell = CellCoord::new(2, 0, 1);
        let (x, y) = screen(&camera, scene.grid().cell_center(cell).with_y(0.0));

        machine.handle(PointerEvent::Down { x, y }, &scene, &mut camera);
        machine.handle(PointerEvent::Move { x: x + 0.5, y }, &scene, &mut camera);
        let out = machine.handle(PointerEvent::Up { x, y }, &scene, &mut camera);
        assert_eq!(out.mutation, Some(Mutation::Add(cell)));
    }

    #[test]
    fn test_top_layer_cube_removed_instead_of_stacking() {
        // Single-layer grid: every cube is top-layer, stacking is impossible
        let (mut scene, mut camera) = setup(1);
        let mut machine = InteractionMachine::new();
        let cell = CellCoord::new(0, 0, 0);
        scene.add(cell);

        // Look almost straight down so the ray strikes the cube's top face
        camera.set_orientation(camera.yaw(), 1.5);
        let top_center = scene.grid().cell_center(cell).with_y(100.0);
        let (x, y) = screen(&camera, top_center);

        let out = click(&mut machine, &mut scene, &mut camera, x, y);
        assert_eq!(out, Some(Mutation::Remove(cell)));
        assert!(scene.is_empty());
    }

    #[test]
    fn test_stacking_inside_bounds() {
        let (mut scene, mut camera) = setup(4);
        let mut machine = InteractionMachine::new();
        let base = CellCoord::new(1, 0, 1);
        scene.add(base);

        camera.set_orientation(camera.yaw(), 1.5);
        let top_center = scene.grid().cell_center(base).with_y(100.0);
        let (x, y) = screen(&camera, top_center);

        let out = click(&mut machine, &mut scene, &mut camera, x, y);
        assert_eq!(out, Some(Mutation::Add(base.above())));
        assert!(scene.contains(base.above()));
    }

    #[test]
    fn test_miss_does_nothing() {
        let (mut scene, mut camera) = setup(4);
        let mut machine = InteractionMachine::new();

        // Top-left corner points at empty sky
        let out = machine.handle(PointerEvent::Move { x: 0.0, y: 0.0 }, &scene, &mut camera);
        assert_eq!(out.feedback, Feedback::None);

        let mutation = click(&mut machine, &mut scene, &mut camera, 0.0, 0.0);
        assert_eq!(mutation, None);
    }
}
