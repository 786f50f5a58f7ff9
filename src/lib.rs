//! Cube-blocks - a 3D cube-placement interaction widget

pub mod core;
pub mod math;
pub mod projection;
pub mod scene;
pub mod interaction;
pub mod widget;
