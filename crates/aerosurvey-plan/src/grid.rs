use aerosurvey_camera::{footprint_on_surface, PinholeCamera};

use crate::dataset::DatasetSpec;
use crate::error::PlanError;
use crate::profile::capture_speed_limit;
use crate::waypoint::{FlightPlan, Waypoint};

/// Motion blur budget used for the capture speed of generated waypoints, in pixels.
pub const DEFAULT_ALLOWED_BLUR_PX: f64 = 1.0;

/// Distance between neighboring image centers on each axis, in meters.
///
/// The sidelap ratio thins the x spacing within a row, the overlap ratio
/// thins the y spacing between rows.
pub fn inter_image_distance(camera: &PinholeCamera, spec: &DatasetSpec) -> (f64, f64) {
    let (footprint_x, footprint_y) = footprint_on_surface(camera, spec.height);
    let distance_x = footprint_x * (1.0 - spec.sidelap);
    let distance_y = footprint_y * (1.0 - spec.overlap);
    (distance_x, distance_y)
}

/// Capture center coordinates along one axis of the scan area.
///
/// A single capture sits at the middle of the dimension. Otherwise the
/// stride shrinks just enough for the whole run of centers to fit centered
/// inside the dimension.
fn axis_coordinates(dimension: f64, distance: f64) -> Vec<f64> {
    let num_points = (dimension / distance).ceil() as usize;
    if num_points <= 1 {
        return vec![dimension / 2.0];
    }
    let gaps = (num_points - 1) as f64;
    let spacing = distance.min(dimension / gaps);
    let offset = 0.5 * (dimension - spacing * gaps);
    (0..num_points).map(|i| offset + i as f64 * spacing).collect()
}

/// Generate the serpentine capture grid covering the scan area.
///
/// Rows advance along y. Within a row the x coordinates are visited in
/// ascending order on even rows and descending order on odd rows, so the
/// vehicle never flies back across a finished row. Every waypoint carries
/// the capture speed limit and an armed photo trigger.
pub fn generate_grid(camera: &PinholeCamera, spec: &DatasetSpec) -> Result<FlightPlan, PlanError> {
    let speed = capture_speed_limit(camera, spec, DEFAULT_ALLOWED_BLUR_PX)?;
    let (distance_x, distance_y) = inter_image_distance(camera, spec);

    let xs = axis_coordinates(spec.scan_dimension_x, distance_x);
    let ys = axis_coordinates(spec.scan_dimension_y, distance_y);

    log::debug!(
        "coverage grid: {}x{} points, spacing ({:.2} m, {:.2} m), capture speed {:.2} m/s",
        xs.len(),
        ys.len(),
        distance_x,
        distance_y,
        speed
    );

    let mut waypoints = Vec::with_capacity(xs.len() * ys.len());
    for (row, &y) in ys.iter().enumerate() {
        for i in 0..xs.len() {
            // even rows sweep x forward, odd rows sweep back
            let col = if row % 2 == 0 { i } else { xs.len() - 1 - i };
            waypoints.push(Waypoint::new(xs[col], y, spec.height, speed, true));
        }
    }

    Ok(FlightPlan::new(waypoints))
}
