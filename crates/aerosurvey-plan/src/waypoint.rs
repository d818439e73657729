use serde::{Deserialize, Serialize};

/// A single capture position in the survey path.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    /// Position along x (meters)
    pub x: f64,
    /// Position along y (meters)
    pub y: f64,
    /// Position above the scanned surface (meters)
    pub z: f64,
    /// Speed the vehicle may hold through this point (m/s)
    pub speed_mps: f64,
    /// Whether the camera fires at this point
    pub photo_trigger: bool,
}

impl Waypoint {
    /// Create a waypoint at the given position.
    pub fn new(x: f64, y: f64, z: f64, speed_mps: f64, photo_trigger: bool) -> Self {
        Self {
            x,
            y,
            z,
            speed_mps,
            photo_trigger,
        }
    }

    /// Horizontal distance to another waypoint, in meters.
    pub fn ground_distance(&self, other: &Waypoint) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

/// An ordered sequence of waypoints forming the survey path.
///
/// The order encodes the serpentine traversal of the coverage grid, so the
/// waypoints are only exposed by reference and never reordered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlightPlan {
    // The waypoints in traversal order.
    waypoints: Vec<Waypoint>,
}

impl FlightPlan {
    /// Create a flight plan from an ordered waypoint sequence.
    pub fn new(waypoints: Vec<Waypoint>) -> Self {
        Self { waypoints }
    }

    /// Get the number of waypoints in the plan.
    #[inline]
    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    /// Check if the plan is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    /// Get as reference the waypoints in traversal order.
    pub fn waypoints(&self) -> &[Waypoint] {
        &self.waypoints
    }

    /// Total horizontal path length over consecutive waypoints, in meters.
    pub fn total_distance(&self) -> f64 {
        self.waypoints
            .windows(2)
            .map(|pair| pair[0].ground_distance(&pair[1]))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_waypoint_ground_distance() {
        let a = Waypoint::new(0.0, 0.0, 20.0, 5.0, true);
        let b = Waypoint::new(3.0, 4.0, 20.0, 5.0, true);
        assert_relative_eq!(a.ground_distance(&b), 5.0, epsilon = 1e-12);
        assert_relative_eq!(b.ground_distance(&a), 5.0, epsilon = 1e-12);
    }

    #[test]
    fn test_flight_plan_accessors() {
        let plan = FlightPlan::new(vec![
            Waypoint::new(0.0, 0.0, 20.0, 5.0, true),
            Waypoint::new(10.0, 0.0, 20.0, 5.0, true),
        ]);
        assert_eq!(plan.len(), 2);
        assert!(!plan.is_empty());
        assert_eq!(plan.waypoints().len(), 2);
    }

    #[test]
    fn test_flight_plan_total_distance() {
        let plan = FlightPlan::new(vec![
            Waypoint::new(0.0, 0.0, 20.0, 5.0, true),
            Waypoint::new(10.0, 0.0, 20.0, 5.0, true),
            Waypoint::new(10.0, 5.0, 20.0, 5.0, true),
        ]);
        assert_relative_eq!(plan.total_distance(), 15.0, epsilon = 1e-12);
    }

    #[test]
    fn test_empty_flight_plan() {
        let plan = FlightPlan::new(Vec::new());
        assert!(plan.is_empty());
        assert_eq!(plan.total_distance(), 0.0);
    }
}
