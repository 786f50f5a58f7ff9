//! The cube-blocks widget
//!
//! Owns the scene model, orbit camera, interaction machine and mutation log
//! for one delivery session, and bridges committed mutations to the host as
//! change notifications carrying the freshly projected response.

use crate::core::camera::OrbitCamera;
use crate::core::types::{Result, Vec3};
use crate::core::Error;
use crate::interaction::{ActionLog, InteractionMachine, PointerEvent, StepOutput};
use crate::scene::SceneModel;
use super::config::{ConfigOverrides, WidgetConfig};
use super::registry::{InteractionWidget, Mount, Registry};
use super::response::{self, ResponsePayload};
use super::state::PersistedState;

/// Invoked with the fresh response after every committed mutation
pub type ChangeListener = Box<dyn FnMut(Option<&ResponsePayload>)>;

/// Live per-session state, built by `get_instance`
struct Instance {
    scene: SceneModel,
    camera: OrbitCamera,
    machine: InteractionMachine,
    log: ActionLog,
    /// False until the first mutation or injected response; while false the
    /// widget reports no response at all
    touched: bool,
}

/// The 3D cube-placement widget
pub struct CubeBlocksWidget {
    config: WidgetConfig,
    instance: Option<Instance>,
    change_listener: Option<ChangeListener>,
    completed: bool,
}

impl CubeBlocksWidget {
    /// Create an unmounted widget with default configuration
    pub fn new() -> Self {
        Self {
            config: WidgetConfig::default(),
            instance: None,
            change_listener: None,
            completed: false,
        }
    }

    /// Register this widget type with the process-wide registry
    pub fn register() {
        Registry::global().register("blocks", || Box::new(CubeBlocksWidget::new()));
    }

    /// Subscribe the host to change notifications
    pub fn set_change_listener(&mut self, listener: ChangeListener) {
        self.change_listener = Some(listener);
    }

    /// Effective configuration
    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    /// The camera, for host-side rendering; None before `get_instance`
    pub fn camera(&self) -> Option<&OrbitCamera> {
        self.instance.as_ref().map(|i| &i.camera)
    }

    /// The scene model, for host-side rendering; None before `get_instance`
    pub fn scene(&self) -> Option<&SceneModel> {
        self.instance.as_ref().map(|i| &i.scene)
    }

    fn response(&self) -> Option<ResponsePayload> {
        let instance = self.instance.as_ref()?;
        if !instance.touched {
            return None;
        }
        match response::encode(&instance.scene.cells(), instance.scene.grid().divisions) {
            Ok(payload) => Some(payload),
            Err(err) => {
                log::error!("failed to encode response: {err}");
                None
            }
        }
    }

    fn notify_change(&mut self) {
        let payload = self.response();
        if let Some(listener) = self.change_listener.as_mut() {
            listener(payload.as_ref());
        }
    }
}

impl Default for CubeBlocksWidget {
    fn default() -> Self {
        Self::new()
    }
}

impl InteractionWidget for CubeBlocksWidget {
    fn type_identifier(&self) -> &'static str {
        "blocks"
    }

    fn get_instance(
        &mut self,
        mount: Option<Mount>,
        overrides: &ConfigOverrides,
        state: Option<&str>,
    ) -> Result<()> {
        let mount = mount.ok_or_else(|| Error::Mount("missing mount element".into()))?;
        if mount.width <= 0.0 || mount.height <= 0.0 {
            return Err(Error::Mount(format!(
                "mount has no area: {}x{}",
                mount.width, mount.height
            )));
        }

        self.config = self.config.merged(overrides)?;
        let grid = self.config.grid();
        let grid_size = grid.grid_size();

        let width = self.config.width.unwrap_or(mount.width);
        let height = self.config.height.unwrap_or(mount.height);
        let camera = OrbitCamera::new(
            Vec3::new(0.0, grid_size * 0.5, 0.0),
            grid_size * 2.25,
            width,
            height,
        );

        let mut scene = SceneModel::new(grid);
        let mut log = ActionLog::new();
        let mut touched = false;
        if let Some(state) = state {
            match PersistedState::decode(state) {
                Ok(persisted) => {
                    persisted.restore_into(&mut scene);
                    touched = !scene.is_empty() || !persisted.log.is_empty();
                    log = persisted.log;
                }
                Err(err) => {
                    log::warn!("malformed persisted state, starting empty: {err}");
                }
            }
        }

        self.completed = false;
        self.instance = Some(Instance {
            scene,
            camera,
            machine: InteractionMachine::new(),
            log,
            touched,
        });

        if let Some(bound) = overrides.bound_to.clone()
            && bound.has_value()
        {
            self.set_response(&bound);
        }
        Ok(())
    }

    fn pointer_event(&mut self, event: PointerEvent) -> StepOutput {
        if self.completed {
            return StepOutput::default();
        }
        let Some(instance) = self.instance.as_mut() else {
            return StepOutput::default();
        };

        let out = instance
            .machine
            .handle(event, &instance.scene, &mut instance.camera);

        let mut changed = false;
        if let Some(mutation) = out.mutation
            && mutation.apply(&mut instance.scene)
        {
            instance.log.record(mutation);
            instance.touched = true;
            changed = true;
        }

        if changed {
            self.notify_change();
        }
        out
    }

    fn resize(&mut self, width: f32, height: f32) {
        if let Some(instance) = self.instance.as_mut() {
            instance.camera.set_viewport(width, height);
        }
    }

    fn get_response(&self) -> Option<ResponsePayload> {
        self.response()
    }

    fn set_response(&mut self, payload: &ResponsePayload) {
        let Some(instance) = self.instance.as_mut() else {
            return;
        };
        let divisions = instance.scene.grid().divisions;
        match response::decode(payload, divisions) {
            Ok(cells) => {
                instance.scene.replace(cells);
                instance.log.clear();
                instance.touched = true;
            }
            Err(err) => {
                log::warn!("ignoring malformed response payload: {err}");
                instance.scene.clear();
                instance.log.clear();
                instance.touched = false;
            }
        }
    }

    fn reset_response(&mut self) {
        if let Some(instance) = self.instance.as_mut() {
            instance.scene.clear();
            instance.log.clear();
            instance.touched = false;
        }
    }

    fn get_state(&self) -> Result<String> {
        match self.instance.as_ref() {
            Some(instance) => PersistedState::capture(&instance.scene, &instance.log).encode(),
            None => PersistedState::default().encode(),
        }
    }

    fn oncompleted(&mut self) {
        self.completed = true;
        self.change_listener = None;
    }
}
