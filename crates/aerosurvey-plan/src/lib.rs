#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Mission parameters for a rectangular photogrammetric scan.
pub mod dataset;

/// Error types for the planning module.
pub mod error;

/// Coverage grid synthesis over the scan area.
pub mod grid;

/// Flight plan assembly and waypoint timing.
pub mod plan;

/// Capture speed limits and segment velocity profiles.
pub mod profile;

/// Waypoints and the ordered flight plan.
pub mod waypoint;

pub use crate::dataset::DatasetSpec;
pub use crate::error::PlanError;
pub use crate::grid::{generate_grid, inter_image_distance, DEFAULT_ALLOWED_BLUR_PX};
pub use crate::plan::{build_flight_plan, waypoint_times};
pub use crate::profile::{capture_speed_limit, velocity_profile, ProfileShape, VelocityProfile};
pub use crate::waypoint::{FlightPlan, Waypoint};
