use aerosurvey_camera::CameraError;

/// An error type for the planning module.
#[derive(thiserror::Error, Debug)]
pub enum PlanError {
    /// Error when the camera model is invalid.
    #[error("Invalid camera model")]
    Camera(#[from] CameraError),

    /// Error when the forward overlap ratio is out of range.
    #[error("Invalid overlap ratio {0}, must be within [0, 1)")]
    InvalidOverlap(f64),

    /// Error when the side overlap ratio is out of range.
    #[error("Invalid sidelap ratio {0}, must be within [0, 1)")]
    InvalidSidelap(f64),

    /// Error when the flight height is not strictly positive.
    #[error("Invalid flight height {0} m, must be strictly positive")]
    InvalidHeight(f64),

    /// Error when a scan dimension is not strictly positive.
    #[error("Invalid scan area {0} m x {1} m, dimensions must be strictly positive")]
    InvalidScanDimension(f64, f64),

    /// Error when the exposure time is negative.
    #[error("Invalid exposure time {0} ms, must be non-negative")]
    InvalidExposure(f64),

    /// Error when the exposure time is zero and the blur bound vanishes.
    #[error("Exposure time is zero, the capture speed limit is unbounded")]
    ZeroExposure,

    /// Error when the commanded acceleration is not strictly positive.
    #[error("Invalid acceleration {0} m/s^2, must be strictly positive")]
    InvalidAcceleration(f64),

    /// Error when the cruise speed is below the segment start speed.
    #[error("Cruise speed {0} m/s is below the segment start speed {1} m/s")]
    InfeasibleCruiseSpeed(f64, f64),
}
