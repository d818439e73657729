//! Pinhole camera model used for survey photography.
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error types for camera operations.
#[derive(Debug, Error)]
pub enum CameraError {
    /// Focal lengths must be strictly positive
    #[error("Invalid focal length ({0}, {1}), must be strictly positive")]
    InvalidFocalLength(f64, f64),

    /// Principal point must be strictly positive
    #[error("Invalid principal point ({0}, {1}), must be strictly positive")]
    InvalidPrincipalPoint(f64, f64),

    /// Sensor dimensions must be strictly positive
    #[error("Invalid sensor size ({0} mm, {1} mm), must be strictly positive")]
    InvalidSensorSize(f64, f64),

    /// Image resolution must be non-zero on both axes
    #[error("Invalid image size ({0} px, {1} px), must be non-zero")]
    InvalidImageSize(usize, usize),

    /// The point lies on the camera plane and has no projection
    #[error("Cannot project a point with zero distance from the camera plane")]
    DegenerateProjection,
}

/// Result type for camera operations.
pub type CameraResult<T> = Result<T, CameraError>;

/// Intrinsic and sensor parameters of a pinhole survey camera.
///
/// Focal lengths and the principal point are expressed in pixels, the
/// physical sensor dimensions in millimeters and the image resolution in
/// pixels. All fields are validated at construction so the derived ground
/// geometry is always well defined.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PinholeCamera {
    /// Focal length in x direction (pixels)
    pub fx: f64,
    /// Focal length in y direction (pixels)
    pub fy: f64,
    /// Principal point x coordinate (pixels)
    pub cx: f64,
    /// Principal point y coordinate (pixels)
    pub cy: f64,
    /// Physical sensor width (millimeters)
    pub sensor_size_x_mm: f64,
    /// Physical sensor height (millimeters)
    pub sensor_size_y_mm: f64,
    /// Image width (pixels)
    pub image_size_x_px: usize,
    /// Image height (pixels)
    pub image_size_y_px: usize,
}

impl PinholeCamera {
    /// Create a camera from intrinsics, sensor dimensions and resolution.
    ///
    /// All scalar fields must be strictly positive and the resolution
    /// non-zero on both axes.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        fx: f64,
        fy: f64,
        cx: f64,
        cy: f64,
        sensor_size_x_mm: f64,
        sensor_size_y_mm: f64,
        image_size_x_px: usize,
        image_size_y_px: usize,
    ) -> CameraResult<Self> {
        if fx <= 0.0 || fy <= 0.0 {
            return Err(CameraError::InvalidFocalLength(fx, fy));
        }
        if cx <= 0.0 || cy <= 0.0 {
            return Err(CameraError::InvalidPrincipalPoint(cx, cy));
        }
        if sensor_size_x_mm <= 0.0 || sensor_size_y_mm <= 0.0 {
            return Err(CameraError::InvalidSensorSize(
                sensor_size_x_mm,
                sensor_size_y_mm,
            ));
        }
        if image_size_x_px == 0 || image_size_y_px == 0 {
            return Err(CameraError::InvalidImageSize(image_size_x_px, image_size_y_px));
        }

        Ok(Self {
            fx,
            fy,
            cx,
            cy,
            sensor_size_x_mm,
            sensor_size_y_mm,
            image_size_x_px,
            image_size_y_px,
        })
    }
}
