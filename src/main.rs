//! Headless driver: loads viewer options, simulates a few seconds of frames
//! against an in-memory animator and logs the camera and timeline state.
//!
//! Usage: `viewkit [options.toml] [--schema]`

use std::path::Path;

use viewkit::animation::ClipTable;
use viewkit::engine::{Viewer, ViewerCommand};
use viewkit::options::{Options, PresetOptions};

const FRAME: f32 = 1.0 / 60.0;

fn load_options(arg: Option<&str>) -> Options {
    let Some(path) = arg else {
        let mut options = Options::default();
        options.presets = PresetOptions::standard_set(10.0);
        options.camera.initial_preset = Some("ThreeQuarter".to_owned());
        options.orbit.enabled = true;
        return options;
    };

    match Options::load(Path::new(path)) {
        Ok(options) => options,
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    }
}

fn log_frame(viewer: &Viewer<'_>, frame: usize) {
    let state = viewer.viewpoint().state();
    let playback = viewer.playback();
    log::info!(
        "frame {frame:4}: eye {:?} moving {} | anim {} {} {:.2}/{:.2}s ({:.0}%)",
        state.position.to_array(),
        viewer.viewpoint().is_moving(),
        playback.current_index(),
        playback.state().label(),
        playback.elapsed_time(),
        playback.duration(),
        playback.progress() * 100.0,
    );
}

fn main() {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "--schema") {
        match serde_json::to_string_pretty(&Options::json_schema()) {
            Ok(schema) => log::info!("{schema}"),
            Err(e) => log::error!("Failed to serialize schema: {e}"),
        }
        return;
    }

    let options = load_options(args.iter().map(String::as_str).find(|a| !a.starts_with("--")));
    let mut clips = ClipTable::new([("Idle", 1.0), ("Run", 2.0)]);
    let mut viewer = Viewer::new(options);
    viewer.attach_animator(&mut clips);

    log::info!("Presets: {:?}", viewer.viewpoint().preset_names());
    log::info!("Animations: {:?}", viewer.playback().animation_names());

    viewer.queue(ViewerCommand::MoveToPreset {
        name: "Front".to_owned(),
        smooth: true,
    });
    viewer.queue(ViewerCommand::PlayNamed {
        name: "Run".to_owned(),
        looping: true,
    });

    for frame in 0..180 {
        match frame {
            60 => viewer.queue(ViewerCommand::Orbit {
                delta_azimuth: 0.4,
                delta_elevation: -0.2,
            }),
            90 => viewer.queue(ViewerCommand::Zoom(-3.0)),
            120 => viewer.queue(ViewerCommand::Pause),
            150 => viewer.queue(ViewerCommand::Resume),
            _ => {}
        }
        viewer.frame(FRAME);
        if frame % 30 == 0 {
            log_frame(&viewer, frame);
        }
    }

    let camera = viewer.camera();
    log::info!(
        "Final camera: eye {:?} target {:?} fovy {:.2}°",
        camera.eye.to_array(),
        camera.target.to_array(),
        camera.fovy
    );
    viewer.detach_animator();
}
