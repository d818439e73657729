use aerosurvey_camera::PinholeCamera;

use crate::dataset::DatasetSpec;
use crate::error::PlanError;
use crate::grid::generate_grid;
use crate::profile::velocity_profile;
use crate::waypoint::FlightPlan;

/// Compute the survey flight plan for a camera and mission specification.
///
/// The plan holds every capture position in serpentine order at the mission
/// height. Altitude and exposure are constant over the mission, so all
/// waypoints share one capture speed limit.
pub fn build_flight_plan(
    camera: &PinholeCamera,
    spec: &DatasetSpec,
) -> Result<FlightPlan, PlanError> {
    let plan = generate_grid(camera, spec)?;
    log::debug!(
        "flight plan: {} waypoints over {:.1} m x {:.1} m, path length {:.1} m",
        plan.len(),
        spec.scan_dimension_x,
        spec.scan_dimension_y,
        plan.total_distance()
    );
    Ok(plan)
}

/// Cumulative arrival time at every waypoint of the plan, in seconds.
///
/// Each segment is flown with an acceleration-bounded profile that starts
/// and ends at the capture speed of the segment start waypoint and cruises
/// at most at `v_max`. The first arrival time is always zero and the result
/// has one entry per waypoint.
pub fn waypoint_times(
    plan: &FlightPlan,
    acceleration: f64,
    v_max: f64,
) -> Result<Vec<f64>, PlanError> {
    let waypoints = plan.waypoints();
    if waypoints.is_empty() {
        return Ok(Vec::new());
    }

    let mut times = Vec::with_capacity(waypoints.len());
    times.push(0.0);
    let mut elapsed = 0.0;
    for pair in waypoints.windows(2) {
        let distance = pair[0].ground_distance(&pair[1]);
        let profile = velocity_profile(distance, acceleration, pair[0].speed_mps, v_max)?;
        elapsed += profile.total_time;
        times.push(elapsed);
    }

    Ok(times)
}
