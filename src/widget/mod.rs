//! Host-facing widget: configuration, registration, and the response bridge

pub mod config;
pub mod response;
pub mod state;
pub mod registry;
pub mod blocks;

pub use config::{ConfigOverrides, WidgetConfig};
pub use response::ResponsePayload;
pub use state::PersistedState;
pub use registry::{InteractionWidget, Mount, Registry};
pub use blocks::CubeBlocksWidget;
