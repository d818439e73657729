use serde::{Deserialize, Serialize};

use aerosurvey_camera::{ground_sampling_distance, PinholeCamera};

use crate::dataset::DatasetSpec;
use crate::error::PlanError;

/// Fastest ground speed keeping motion blur within the pixel budget.
///
/// During one exposure the vehicle must not move further over the ground
/// than `allowed_blur_px` pixels at the mission ground sampling distance.
pub fn capture_speed_limit(
    camera: &PinholeCamera,
    spec: &DatasetSpec,
    allowed_blur_px: f64,
) -> Result<f64, PlanError> {
    if spec.exposure_time_ms == 0.0 {
        return Err(PlanError::ZeroExposure);
    }
    let gsd = ground_sampling_distance(camera, spec.height);
    Ok(allowed_blur_px * gsd / (spec.exposure_time_ms / 1000.0))
}

/// Shape of an acceleration-bounded speed profile over one segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProfileShape {
    /// The cruise speed is reached and held
    Trapezoid,
    /// The segment is too short to reach the cruise speed
    Triangle,
}

/// Speed against time over a single straight segment.
///
/// `times` and `velocities` are parallel vertex arrays; between vertices the
/// speed is linear in time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VelocityProfile {
    /// Shape selected for the segment
    pub shape: ProfileShape,
    /// Vertex times from the segment start (seconds), first is 0
    pub times: Vec<f64>,
    /// Speed at each vertex (m/s)
    pub velocities: Vec<f64>,
    /// Segment traversal time (seconds)
    pub total_time: f64,
}

impl VelocityProfile {
    /// Speed at the given time from the segment start, in m/s.
    ///
    /// Times outside the profile clamp to the nearest end.
    pub fn velocity_at(&self, t: f64) -> f64 {
        let n = self.times.len();
        if n == 0 {
            return 0.0;
        }
        if t <= self.times[0] {
            return self.velocities[0];
        }
        if t >= self.times[n - 1] {
            return self.velocities[n - 1];
        }
        for i in 0..n - 1 {
            if t <= self.times[i + 1] {
                let dt = self.times[i + 1] - self.times[i];
                if dt <= 1e-10 {
                    return self.velocities[i + 1];
                }
                let alpha = (t - self.times[i]) / dt;
                return self.velocities[i] + alpha * (self.velocities[i + 1] - self.velocities[i]);
            }
        }
        self.velocities[n - 1]
    }
}

/// Compute the speed profile for a straight segment of the given length.
///
/// The vehicle accelerates from `v_start` toward `v_max` at the given rate
/// and is back at `v_start` by the segment end. A trapezoid is selected when
/// the cruise speed is reachable within the segment, a triangle otherwise.
pub fn velocity_profile(
    distance: f64,
    acceleration: f64,
    v_start: f64,
    v_max: f64,
) -> Result<VelocityProfile, PlanError> {
    if acceleration <= 0.0 {
        return Err(PlanError::InvalidAcceleration(acceleration));
    }
    if v_max < v_start {
        return Err(PlanError::InfeasibleCruiseSpeed(v_max, v_start));
    }

    // distance needed to reach the cruise speed and fall back from it
    let s_acc = (v_max * v_max - v_start * v_start) / (2.0 * acceleration);

    if 2.0 * s_acc <= distance {
        let t_acc = (v_max - v_start) / acceleration;
        let t_cruise = (distance - 2.0 * s_acc) / v_max;
        let total_time = 2.0 * t_acc + t_cruise;
        Ok(VelocityProfile {
            shape: ProfileShape::Trapezoid,
            times: vec![0.0, t_acc, t_acc + t_cruise, total_time],
            velocities: vec![v_start, v_max, v_max, v_start],
            total_time,
        })
    } else {
        let v_peak = (v_start * v_start + acceleration * distance).sqrt();
        let t_acc = (v_peak - v_start) / acceleration;
        let total_time = 2.0 * t_acc;
        Ok(VelocityProfile {
            shape: ProfileShape::Triangle,
            times: vec![0.0, t_acc, total_time],
            velocities: vec![v_start, v_peak, v_start],
            total_time,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn survey_camera() -> PinholeCamera {
        PinholeCamera::new(1000.0, 1000.0, 500.0, 500.0, 17.3, 13.0, 1920, 1080)
            .expect("valid camera")
    }

    fn survey_spec() -> DatasetSpec {
        DatasetSpec::new(0.5, 0.5, 20.0, 60.0, 40.0, 1.0).expect("valid spec")
    }

    #[test]
    fn test_capture_speed_limit() {
        // gsd is 0.02 m/px at 20 m, one pixel over 1 ms gives 20 m/s
        let speed = capture_speed_limit(&survey_camera(), &survey_spec(), 1.0)
            .expect("valid speed limit");
        assert_relative_eq!(speed, 20.0, epsilon = 1e-9);
    }

    #[test]
    fn test_capture_speed_limit_scales_with_blur_budget() {
        let speed = capture_speed_limit(&survey_camera(), &survey_spec(), 2.0)
            .expect("valid speed limit");
        assert_relative_eq!(speed, 40.0, epsilon = 1e-9);
    }

    #[test]
    fn test_capture_speed_limit_rejects_zero_exposure() {
        let spec = DatasetSpec::new(0.5, 0.5, 20.0, 60.0, 40.0, 0.0).expect("valid spec");
        let result = capture_speed_limit(&survey_camera(), &spec, 1.0);
        assert!(matches!(result, Err(PlanError::ZeroExposure)));
    }

    #[test]
    fn test_velocity_profile_trapezoid() {
        let profile = velocity_profile(20.0, 2.0, 1.0, 5.0).expect("valid profile");
        assert_eq!(profile.shape, ProfileShape::Trapezoid);
        assert_eq!(profile.times.len(), 4);
        assert_eq!(profile.velocities, vec![1.0, 5.0, 5.0, 1.0]);
        assert_relative_eq!(profile.times[1], 2.0, epsilon = 1e-12);
        assert_relative_eq!(profile.times[2], 3.6, epsilon = 1e-12);
        assert_relative_eq!(profile.total_time, 5.6, epsilon = 1e-12);
    }

    #[test]
    fn test_velocity_profile_triangle() {
        let profile = velocity_profile(10.0, 2.0, 1.0, 5.0).expect("valid profile");
        assert_eq!(profile.shape, ProfileShape::Triangle);
        assert_eq!(profile.times.len(), 3);
        let v_peak = 21.0_f64.sqrt();
        assert_relative_eq!(profile.velocities[1], v_peak, epsilon = 1e-12);
        assert_relative_eq!(profile.total_time, v_peak - 1.0, epsilon = 1e-12);
        assert_relative_eq!(profile.velocities[2], 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_velocity_profile_boundary_is_trapezoid() {
        // exactly enough distance to reach the cruise speed and fall back
        let profile = velocity_profile(12.0, 2.0, 1.0, 5.0).expect("valid profile");
        assert_eq!(profile.shape, ProfileShape::Trapezoid);
        assert_relative_eq!(profile.times[1], profile.times[2], epsilon = 1e-12);
        assert_relative_eq!(profile.total_time, 4.0, epsilon = 1e-12);
    }

    #[test]
    fn test_velocity_profile_continuous_at_boundary() {
        let below = velocity_profile(12.0 - 1e-9, 2.0, 1.0, 5.0).expect("valid profile");
        let above = velocity_profile(12.0 + 1e-9, 2.0, 1.0, 5.0).expect("valid profile");
        assert_eq!(below.shape, ProfileShape::Triangle);
        assert_eq!(above.shape, ProfileShape::Trapezoid);
        assert_relative_eq!(below.total_time, 4.0, epsilon = 1e-6);
        assert_relative_eq!(above.total_time, 4.0, epsilon = 1e-6);
    }

    #[test]
    fn test_velocity_profile_zero_distance() {
        let profile = velocity_profile(0.0, 2.0, 3.0, 5.0).expect("valid profile");
        assert_eq!(profile.shape, ProfileShape::Triangle);
        assert_relative_eq!(profile.total_time, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_velocity_profile_rejects_zero_acceleration() {
        let result = velocity_profile(10.0, 0.0, 1.0, 5.0);
        assert!(matches!(result, Err(PlanError::InvalidAcceleration(_))));
    }

    #[test]
    fn test_velocity_profile_rejects_cruise_below_start() {
        let result = velocity_profile(10.0, 2.0, 5.0, 1.0);
        assert!(matches!(
            result,
            Err(PlanError::InfeasibleCruiseSpeed(..))
        ));
    }

    #[test]
    fn test_velocity_at_trapezoid() {
        let profile = velocity_profile(20.0, 2.0, 1.0, 5.0).expect("valid profile");
        assert_relative_eq!(profile.velocity_at(-1.0), 1.0, epsilon = 1e-12);
        assert_relative_eq!(profile.velocity_at(0.0), 1.0, epsilon = 1e-12);
        assert_relative_eq!(profile.velocity_at(1.0), 3.0, epsilon = 1e-12);
        assert_relative_eq!(profile.velocity_at(2.0), 5.0, epsilon = 1e-12);
        assert_relative_eq!(profile.velocity_at(3.0), 5.0, epsilon = 1e-12);
        assert_relative_eq!(profile.velocity_at(4.6), 3.0, epsilon = 1e-12);
        assert_relative_eq!(profile.velocity_at(5.6), 1.0, epsilon = 1e-12);
        assert_relative_eq!(profile.velocity_at(10.0), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_velocity_at_triangle_peak() {
        let profile = velocity_profile(10.0, 2.0, 1.0, 5.0).expect("valid profile");
        let t_peak = profile.times[1];
        assert_relative_eq!(profile.velocity_at(t_peak), 21.0_f64.sqrt(), epsilon = 1e-12);
    }
}
