use crate::camera::{CameraError, CameraResult, PinholeCamera};

/// Physical focal length of each axis in millimeters.
///
/// Recovered from the pixel focal length and the pixel pitch implied by the
/// sensor dimensions and image resolution.
pub fn focal_length_mm(camera: &PinholeCamera) -> (f64, f64) {
    let f_mm_x = camera.fx * camera.sensor_size_x_mm / camera.image_size_x_px as f64;
    let f_mm_y = camera.fy * camera.sensor_size_y_mm / camera.image_size_y_px as f64;
    (f_mm_x, f_mm_y)
}

/// Project a 3D point in the camera frame onto the image plane, in pixels.
///
/// Fails when the point has zero distance from the camera plane, where the
/// pinhole model is undefined.
pub fn project_point(camera: &PinholeCamera, point: &[f64; 3]) -> CameraResult<(f64, f64)> {
    let [x, y, z] = *point;
    if z == 0.0 {
        return Err(CameraError::DegenerateProjection);
    }
    let u = camera.fx * x / z + camera.cx;
    let v = camera.fy * y / z + camera.cy;
    Ok((u, v))
}

/// Ground rectangle imaged from the given distance, in meters.
pub fn footprint_on_surface(camera: &PinholeCamera, distance: f64) -> (f64, f64) {
    let (f_mm_x, f_mm_y) = focal_length_mm(camera);
    let footprint_x = distance * camera.sensor_size_x_mm / f_mm_x;
    let footprint_y = distance * camera.sensor_size_y_mm / f_mm_y;
    (footprint_x, footprint_y)
}

/// Ground distance covered by one pixel at the given distance, in meters.
///
/// Taken as the minimum over both image axes, so it reports the finest
/// sampling the camera achieves.
pub fn ground_sampling_distance(camera: &PinholeCamera, distance: f64) -> f64 {
    let (footprint_x, footprint_y) = footprint_on_surface(camera, distance);
    let gsd_x = footprint_x / camera.image_size_x_px as f64;
    let gsd_y = footprint_y / camera.image_size_y_px as f64;
    gsd_x.min(gsd_y)
}
