//! Demo binary walking the sensor through a full host-framework session
//! against mock platform collaborators.

use ir_cam_sensor::mock::{MockClock, MockProperties};
use ir_cam_sensor::{BufferType, Command, FrameInterval, IrCamera, Reply};

fn main() {
    env_logger::init();

    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut clock = MockClock::new();
    let mut camera = IrCamera::attach(Some(&mut clock), &MockProperties::new(), || ())?;

    if let Reply::ChipIdent(ident) = camera.dispatch(Command::GetChipIdent)? {
        println!("Chip: {} ({:?} match)", ident.name, ident.match_kind);
    }

    camera.dispatch(Command::DevInit)?;
    camera.dispatch(Command::Init)?;
    camera.dispatch(Command::SetPower { on: true })?;

    if let Reply::Format(format) = camera.dispatch(Command::GetFormat)? {
        println!(
            "Format: {}x{} {:?}",
            format.width, format.height, format.fourcc
        );
    }

    camera.dispatch(Command::SetStreamParams {
        buffer_type: BufferType::VideoCapture,
        time_per_frame: FrameInterval::new(1, 0),
        capture_mode: 0,
    })?;

    if let Reply::StreamParams(params) = camera.dispatch(Command::GetStreamParams {
        buffer_type: BufferType::VideoCapture,
    })? {
        println!(
            "Interval: {}/{} (capture mode {})",
            params.time_per_frame.numerator, params.time_per_frame.denominator, params.capture_mode
        );
    }

    camera.dispatch(Command::DevExit)?;
    camera.detach();

    Ok(())
}
