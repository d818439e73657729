#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Pinhole camera model with sensor and image geometry.
pub mod camera;

/// Ground coverage geometry derived from the camera model.
pub mod ops;

pub use crate::camera::{CameraError, CameraResult, PinholeCamera};
pub use crate::ops::{
    focal_length_mm, footprint_on_surface, ground_sampling_distance, project_point,
};
