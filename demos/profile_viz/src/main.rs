use argh::FromArgs;

use aerosurvey::plan::velocity_profile;

#[derive(FromArgs)]
/// Visualize a segment velocity profile with rerun
struct Args {
    /// segment length in meters
    #[argh(option, default = "100.0")]
    distance: f64,

    /// acceleration bound in m/s^2
    #[argh(option, default = "2.0")]
    acceleration: f64,

    /// speed at both segment ends in m/s
    #[argh(option, default = "5.0")]
    start_mps: f64,

    /// cruise speed bound in m/s
    #[argh(option, default = "12.0")]
    cruise_mps: f64,

    /// number of profile samples
    #[argh(option, default = "200")]
    samples: usize,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args: Args = argh::from_env();

    let profile = velocity_profile(
        args.distance,
        args.acceleration,
        args.start_mps,
        args.cruise_mps,
    )?;

    log::info!(
        "{:?} profile over {:.1} m, {:.2} s total",
        profile.shape,
        args.distance,
        profile.total_time
    );

    // create and log a Rerun recording stream
    let rec = rerun::RecordingStreamBuilder::new("Velocity Profile").spawn()?;

    for i in 0..=args.samples {
        let t = profile.total_time * i as f64 / args.samples as f64;
        rec.set_time_sequence("sample", i as i64);
        rec.log("profile/speed_mps", &rerun::Scalar::new(profile.velocity_at(t)))?;
    }

    Ok(())
}
