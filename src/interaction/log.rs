//! Append-only log of scene mutations for session persistence
//!
//! Every committed add/remove is recorded so a delivery session can be
//! resumed and audited. The log serializes into the host-opaque state string
//! next to the scene snapshot and can be replayed onto an empty scene.

use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use crate::math::CellCoord;
use crate::scene::SceneModel;
use super::machine::Mutation;

/// Kind of a recorded action
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionKind {
    #[serde(rename = "ADDED_CUBE")]
    AddedCube,
    #[serde(rename = "REMOVED_CUBE")]
    RemovedCube,
}

/// One recorded mutation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    #[serde(rename = "type")]
    pub kind: ActionKind,
    pub payload: CellCoord,
    /// Milliseconds since the Unix epoch, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<u64>,
}

/// Append-only mutation history
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActionLog {
    actions: Vec<Action>,
}

impl ActionLog {
    /// Create an empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Adopt a restored action list
    pub fn from_actions(actions: Vec<Action>) -> Self {
        Self { actions }
    }

    /// Record a committed mutation with the current wall-clock timestamp
    pub fn record(&mut self, mutation: Mutation) {
        let (kind, payload) = match mutation {
            Mutation::Add(cell) => (ActionKind::AddedCube, cell),
            Mutation::Remove(cell) => (ActionKind::RemovedCube, cell),
        };
        self.actions.push(Action {
            kind,
            payload,
            timestamp: now_millis(),
        });
    }

    /// The recorded actions in order
    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    /// Number of recorded actions
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Whether nothing has been recorded
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Forget the history (wholesale scene replacement)
    pub fn clear(&mut self) {
        self.actions.clear();
    }

    /// Replay the history onto a scene, in recording order
    pub fn replay(&self, scene: &mut SceneModel) {
        for action in &self.actions {
            match action.kind {
                ActionKind::AddedCube => scene.add(action.payload),
                ActionKind::RemovedCube => scene.remove(action.payload),
            };
        }
    }
}

fn now_millis() -> Option<u64> {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .ok()
        .map(|d| d.as_millis() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::GridConfig;

    #[test]
    fn test_record_and_replay() {
        let mut log = ActionLog::new();
        log.record(Mutation::Add(CellCoord::new(0, 0, 0)));
        log.record(Mutation::Add(CellCoord::new(1, 0, 0)));
        log.record(Mutation::Remove(CellCoord::new(0, 0, 0)));
        assert_eq!(log.len(), 3);

        let mut scene = SceneModel::new(GridConfig::new(4, 100.0));
        log.replay(&mut scene);
        assert_eq!(scene.cells(), vec![CellCoord::new(1, 0, 0)]);
    }

    #[test]
    fn test_serialized_action_shape() {
        let action = Action {
            kind: ActionKind::AddedCube,
            payload: CellCoord::new(1, 2, 3),
            timestamp: Some(1000),
        };
        let json = serde_json::to_string(&action).unwrap();
        assert_eq!(
            json,
            r#"{"type":"ADDED_CUBE","payload":{"x":1,"y":2,"z":3},"timestamp":1000}"#
        );
    }

    #[test]
    fn test_deserialize_without_timestamp() {
        let json = r#"[{"type":"REMOVED_CUBE","payload":{"x":0,"y":0,"z":0}}]"#;
        let log: ActionLog = serde_json::from_str(json).unwrap();
        assert_eq!(log.len(), 1);
        assert_eq!(log.actions()[0].kind, ActionKind::RemovedCube);
        assert_eq!(log.actions()[0].timestamp, None);
    }
}
