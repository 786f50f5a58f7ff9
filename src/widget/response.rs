//! Host response payload encoding
//!
//! The host only ever sees the three projection planes, packed as a JSON
//! string inside a `{ base: { string } }` variable. Decoding runs the planes
//! back through the lossy reconstruction.

use serde::{Deserialize, Serialize};

use crate::core::types::Result;
use crate::core::Error;
use crate::math::CellCoord;
use crate::projection::{project, reconstruct, Axis, PlaneProjection};

/// Response variable as exchanged with the host
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponsePayload {
    pub base: BaseValue,
}

/// The `base.string` leaf of the response variable
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseValue {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub string: Option<String>,
}

/// The three planes as serialized into the base string
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
struct Planes {
    #[serde(rename = "xPlane")]
    x_plane: PlaneProjection,
    #[serde(rename = "yPlane")]
    y_plane: PlaneProjection,
    #[serde(rename = "zPlane")]
    z_plane: PlaneProjection,
}

impl ResponsePayload {
    /// Whether the payload carries an actual value
    pub fn has_value(&self) -> bool {
        self.base.string.as_ref().is_some_and(|s| !s.is_empty())
    }
}

/// Encode a voxel set into the host response payload
pub fn encode(cells: &[CellCoord], divisions: u32) -> Result<ResponsePayload> {
    let planes = Planes {
        x_plane: project(cells, Axis::X, divisions),
        y_plane: project(cells, Axis::Y, divisions),
        z_plane: project(cells, Axis::Z, divisions),
    };
    Ok(ResponsePayload {
        base: BaseValue {
            string: Some(serde_json::to_string(&planes)?),
        },
    })
}

/// Decode a host response payload into a reconstructed voxel set
pub fn decode(payload: &ResponsePayload, divisions: u32) -> Result<Vec<CellCoord>> {
    let string = payload
        .base
        .string
        .as_deref()
        .ok_or_else(|| Error::Payload("response base has no string value".into()))?;
    let planes: Planes = serde_json::from_str(string)?;
    Ok(reconstruct(
        &planes.x_plane,
        &planes.y_plane,
        &planes.z_plane,
        divisions,
    ))
}
