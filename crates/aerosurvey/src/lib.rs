#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

#[doc(inline)]
pub use aerosurvey_camera as camera;

#[doc(inline)]
pub use aerosurvey_plan as plan;
