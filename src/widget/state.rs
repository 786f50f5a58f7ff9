//! Persisted widget state
//!
//! The host-opaque JSON string used to resume an in-progress session: a
//! snapshot of the voxel set plus the full mutation log for audit/replay.

use serde::{Deserialize, Serialize};

use crate::core::types::Result;
use crate::interaction::ActionLog;
use crate::math::CellCoord;
use crate::scene::SceneModel;

/// Snapshot of the scene's voxel set
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub cubes: Vec<CellCoord>,
}

/// Full persisted session: snapshot plus mutation history
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedState {
    /// Scene snapshot; absent in log-only payloads
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<Snapshot>,
    #[serde(default)]
    pub log: ActionLog,
}

impl PersistedState {
    /// Capture the current session
    pub fn capture(scene: &SceneModel, log: &ActionLog) -> Self {
        Self {
            state: Some(Snapshot {
                cubes: scene.cells(),
            }),
            log: log.clone(),
        }
    }

    /// Serialize for the host
    pub fn encode(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parse a host-provided state string
    pub fn decode(state: &str) -> Result<Self> {
        Ok(serde_json::from_str(state)?)
    }

    /// Seed a scene from this state: the snapshot is authoritative when
    /// present, otherwise the log is replayed from an empty scene.
    pub fn restore_into(&self, scene: &mut SceneModel) {
        match &self.state {
            Some(snapshot) => scene.replace(snapshot.cubes.iter().copied()),
            None => {
                scene.clear();
                self.log.replay(scene);
            }
        }
    }
}
