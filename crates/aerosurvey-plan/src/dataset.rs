use serde::{Deserialize, Serialize};

use crate::error::PlanError;

/// Mission parameters for a photogrammetric scan of a rectangular area.
///
/// The area is axis aligned with one corner at the origin, so the scan
/// dimensions fully describe it. Overlap ratios are fractions of the image
/// footprint shared between neighboring captures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetSpec {
    /// Overlap ratio in [0, 1), thins the y spacing between image rows
    pub overlap: f64,
    /// Sidelap ratio in [0, 1), thins the x spacing within an image row
    pub sidelap: f64,
    /// Flight height above the scanned surface (meters)
    pub height: f64,
    /// Scanned area extent along x (meters)
    pub scan_dimension_x: f64,
    /// Scanned area extent along y (meters)
    pub scan_dimension_y: f64,
    /// Sensor exposure time (milliseconds)
    pub exposure_time_ms: f64,
}

impl DatasetSpec {
    /// Create a mission specification, validating every parameter.
    pub fn new(
        overlap: f64,
        sidelap: f64,
        height: f64,
        scan_dimension_x: f64,
        scan_dimension_y: f64,
        exposure_time_ms: f64,
    ) -> Result<Self, PlanError> {
        if overlap < 0.0 || overlap >= 1.0 {
            return Err(PlanError::InvalidOverlap(overlap));
        }
        if sidelap < 0.0 || sidelap >= 1.0 {
            return Err(PlanError::InvalidSidelap(sidelap));
        }
        if height <= 0.0 {
            return Err(PlanError::InvalidHeight(height));
        }
        if scan_dimension_x <= 0.0 || scan_dimension_y <= 0.0 {
            return Err(PlanError::InvalidScanDimension(
                scan_dimension_x,
                scan_dimension_y,
            ));
        }
        if exposure_time_ms < 0.0 {
            return Err(PlanError::InvalidExposure(exposure_time_ms));
        }

        Ok(Self {
            overlap,
            sidelap,
            height,
            scan_dimension_x,
            scan_dimension_y,
            exposure_time_ms,
        })
    }

    /// Corners of the scanned rectangle as `([x_min, y_min], [x_max, y_max])`.
    pub fn scan_bounds(&self) -> ([f64; 2], [f64; 2]) {
        ([0.0, 0.0], [self.scan_dimension_x, self.scan_dimension_y])
    }
}
