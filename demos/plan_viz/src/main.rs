use argh::FromArgs;

use aerosurvey::camera::PinholeCamera;
use aerosurvey::plan::{build_flight_plan, waypoint_times, DatasetSpec};

#[derive(FromArgs)]
/// Visualize a survey flight plan with rerun
struct Args {
    /// overlap ratio between image rows
    #[argh(option, default = "0.7")]
    overlap: f64,

    /// sidelap ratio within an image row
    #[argh(option, default = "0.6")]
    sidelap: f64,

    /// flight height in meters
    #[argh(option, default = "20.0")]
    height: f64,

    /// scan area extent along x in meters
    #[argh(option, default = "60.0")]
    scan_x: f64,

    /// scan area extent along y in meters
    #[argh(option, default = "40.0")]
    scan_y: f64,

    /// exposure time in milliseconds
    #[argh(option, default = "1.0")]
    exposure_ms: f64,

    /// acceleration bound in m/s^2
    #[argh(option, default = "2.0")]
    acceleration: f64,

    /// cruise speed bound in m/s, defaults to the capture speed
    #[argh(option)]
    cruise_mps: Option<f64>,

    /// print the plan as JSON instead of logging to rerun
    #[argh(switch)]
    json: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args: Args = argh::from_env();

    // a 1-inch sensor survey camera at 1080p
    let camera = PinholeCamera::new(1000.0, 1000.0, 960.0, 540.0, 17.3, 13.0, 1920, 1080)?;
    let spec = DatasetSpec::new(
        args.overlap,
        args.sidelap,
        args.height,
        args.scan_x,
        args.scan_y,
        args.exposure_ms,
    )?;

    let plan = build_flight_plan(&camera, &spec)?;
    let v_max = match args.cruise_mps {
        Some(speed) => speed,
        None => plan.waypoints().first().map_or(0.0, |w| w.speed_mps),
    };
    let times = waypoint_times(&plan, args.acceleration, v_max)?;

    log::info!(
        "planned {} captures over {:.0} m x {:.0} m, {:.1} s flight",
        plan.len(),
        args.scan_x,
        args.scan_y,
        times.last().copied().unwrap_or(0.0)
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
        return Ok(());
    }

    // create and log a Rerun recording stream
    let rec = rerun::RecordingStreamBuilder::new("Survey Plan").spawn()?;

    let (min_corner, max_corner) = spec.scan_bounds();
    rec.log(
        "plan/scan_area",
        &rerun::Boxes2D::from_mins_and_sizes(
            [[min_corner[0] as f32, min_corner[1] as f32]],
            [[
                (max_corner[0] - min_corner[0]) as f32,
                (max_corner[1] - min_corner[1]) as f32,
            ]],
        ),
    )?;

    let positions: Vec<[f32; 2]> = plan
        .waypoints()
        .iter()
        .map(|w| [w.x as f32, w.y as f32])
        .collect();

    rec.log("plan/path", &rerun::LineStrips2D::new([positions.clone()]))?;
    rec.log(
        "plan/waypoints",
        &rerun::Points2D::new(positions).with_colors([[90, 145, 199]]),
    )?;

    for (i, t) in times.iter().enumerate() {
        rec.set_time_sequence("waypoint", i as i64);
        rec.log("plan/arrival_time_s", &rerun::Scalar::new(*t))?;
    }

    Ok(())
}
