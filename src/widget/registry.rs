//! Process-wide interaction registry
//!
//! The delivery player holds one registry per process; widgets register a
//! factory under their type identifier at startup, and the player later
//! instantiates and drives them through the [`InteractionWidget`] contract.

use std::collections::HashMap;
use std::sync::{Mutex, OnceLock};

use crate::core::types::Result;
use crate::interaction::{PointerEvent, StepOutput};
use super::config::ConfigOverrides;
use super::response::ResponsePayload;

/// The DOM element stand-in the player mounts a widget into
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Mount {
    /// Container width in pixels
    pub width: f32,
    /// Container height in pixels
    pub height: f32,
}

/// Host delivery contract every widget implements
pub trait InteractionWidget {
    /// Registry key for this widget type
    fn type_identifier(&self) -> &'static str;

    /// Initialize into a mount with merged configuration and an optional
    /// previously persisted state string. A missing mount is fatal.
    fn get_instance(
        &mut self,
        mount: Option<Mount>,
        overrides: &ConfigOverrides,
        state: Option<&str>,
    ) -> Result<()>;

    /// Feed one pointer event; returns the effects for the host to render
    fn pointer_event(&mut self, event: PointerEvent) -> StepOutput;

    /// Container resize
    fn resize(&mut self, width: f32, height: f32);

    /// Current response, None while the scene is untouched
    fn get_response(&self) -> Option<ResponsePayload>;

    /// Inject a response (e.g. the correct answer); malformed payloads
    /// reset the scene to empty
    fn set_response(&mut self, payload: &ResponsePayload);

    /// Clear the scene back to its initial state
    fn reset_response(&mut self);

    /// Persisted session state string
    fn get_state(&self) -> Result<String>;

    /// Teardown: detach listeners; further interaction has no effect
    fn oncompleted(&mut self);
}

type Factory = Box<dyn Fn() -> Box<dyn InteractionWidget> + Send + Sync>;

/// Registry of widget factories keyed by type identifier
#[derive(Default)]
pub struct Registry {
    factories: Mutex<HashMap<String, Factory>>,
}

impl Registry {
    /// The per-process registry
    pub fn global() -> &'static Registry {
        static REGISTRY: OnceLock<Registry> = OnceLock::new();
        REGISTRY.get_or_init(Registry::default)
    }

    /// Register a widget factory; replaces any previous registration
    pub fn register<F>(&self, type_identifier: &str, factory: F)
    where
        F: Fn() -> Box<dyn InteractionWidget> + Send + Sync + 'static,
    {
        let mut factories = self.factories.lock().unwrap();
        if factories
            .insert(type_identifier.to_string(), Box::new(factory))
            .is_some()
        {
            log::warn!("replacing widget registration for '{type_identifier}'");
        }
    }

    /// Instantiate a registered widget
    pub fn create(&self, type_identifier: &str) -> Option<Box<dyn InteractionWidget>> {
        let factories = self.factories.lock().unwrap();
        factories.get(type_identifier).map(|factory| factory())
    }

    /// Registered type identifiers
    pub fn registered(&self) -> Vec<String> {
        let factories = self.factories.lock().unwrap();
        factories.keys().cloned().collect()
    }
}
