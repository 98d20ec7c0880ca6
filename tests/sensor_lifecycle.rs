//! End-to-end tests driving the sensor the way the host framework does:
//! attach, two-phase bring-up, power, negotiation, read-back, exit.

use ir_cam_sensor::mock::{MockClock, MockProperties};
use ir_cam_sensor::platform::{PROP_CSI_ID, PROP_MCLK, PROP_MCLK_SOURCE};
use ir_cam_sensor::{
    BufferType, Command, ControlId, FourCC, FrameInterval, IrCamera, PlatformError, Reply,
    SensorError,
};

fn attach_camera() -> IrCamera {
    let props = MockProperties::empty()
        .with_u32(PROP_MCLK, 24_000_000)
        .with_u32(PROP_MCLK_SOURCE, 0)
        .with_u32(PROP_CSI_ID, 0);
    IrCamera::attach(None, &props, || ()).expect("attach should succeed")
}

#[test]
fn full_session() {
    let mut camera = attach_camera();

    assert_eq!(camera.dispatch(Command::DevInit), Ok(Reply::Done));
    assert_eq!(camera.dispatch(Command::Init), Ok(Reply::Done));
    assert_eq!(
        camera.dispatch(Command::SetPower { on: true }),
        Ok(Reply::Done)
    );

    // A zero-denominator request negotiates down to the 1/30 default.
    assert_eq!(
        camera.dispatch(Command::SetStreamParams {
            buffer_type: BufferType::VideoCapture,
            time_per_frame: FrameInterval::new(1, 0),
            capture_mode: 0,
        }),
        Ok(Reply::Done)
    );

    let reply = camera
        .dispatch(Command::GetStreamParams {
            buffer_type: BufferType::VideoCapture,
        })
        .expect("capture params should be readable");
    let Reply::StreamParams(params) = reply else {
        panic!("unexpected reply {reply:?}");
    };
    assert_eq!(params.time_per_frame, FrameInterval::new(1, 30));

    assert_eq!(camera.dispatch(Command::DevExit), Ok(Reply::Done));

    // Anything after exit misses the record.
    assert_eq!(
        camera.dispatch(Command::GetFormat),
        Err(SensorError::NullDevice)
    );
    assert_eq!(
        camera.dispatch(Command::GetControl {
            id: ControlId::Brightness,
        }),
        Err(SensorError::NullDevice)
    );

    camera.detach();
}

#[test]
fn capability_surface_matches_the_single_mode() {
    let mut camera = attach_camera();
    camera.dispatch(Command::DevInit).expect("dev_init");

    assert_eq!(
        camera.dispatch(Command::EnumFormats { index: 0 }),
        Ok(Reply::PixelFormat(FourCC::GREY))
    );
    assert_eq!(
        camera.dispatch(Command::EnumFormats { index: 1 }),
        Err(SensorError::InvalidArgument)
    );

    for index in 0..=1 {
        let reply = camera
            .dispatch(Command::EnumFrameSizes { index })
            .expect("both size slots should enumerate");
        let Reply::FrameSize(size) = reply else {
            panic!("unexpected reply {reply:?}");
        };
        assert_eq!((size.width, size.height), (640, 480));
    }
    assert_eq!(
        camera.dispatch(Command::EnumFrameSizes { index: 2 }),
        Err(SensorError::InvalidArgument)
    );

    // The interval enumeration never succeeds, even for a well-formed
    // query; the fixed 1/30 rate is visible through the stream parameters.
    assert_eq!(
        camera.dispatch(Command::EnumFrameIntervals {
            index: 0,
            pixel_format: FourCC::GREY,
            width: 640,
            height: 480,
        }),
        Err(SensorError::InvalidArgument)
    );
}

#[test]
fn control_surface_distinguishes_denied_from_invalid() {
    let mut camera = attach_camera();
    camera.dispatch(Command::DevInit).expect("dev_init");

    assert_eq!(
        camera.dispatch(Command::GetControl {
            id: ControlId::Brightness,
        }),
        Ok(Reply::ControlValue(0))
    );
    assert_eq!(
        camera.dispatch(Command::SetControl {
            id: ControlId::AutoFocusStart,
            value: 1,
        }),
        Ok(Reply::Done)
    );
    assert_eq!(
        camera.dispatch(Command::GetControl {
            id: ControlId::AutoFocusStart,
        }),
        Err(SensorError::InvalidArgument)
    );
    assert_eq!(
        camera.dispatch(Command::SetControl {
            id: ControlId::Sharpness,
            value: 1,
        }),
        Err(SensorError::PermissionDenied)
    );
}

#[test]
fn attach_propagates_collaborator_errors() {
    let props = MockProperties::empty().with_u32(PROP_MCLK, 24_000_000);
    let err =
        IrCamera::attach(None, &props, || ()).expect_err("attach should fail without mclk_source");
    assert_eq!(err, PlatformError::Property(PROP_MCLK_SOURCE));

    let mut clock = MockClock::new().with_enable_failure();
    let err = IrCamera::attach(Some(&mut clock), &MockProperties::new(), || ())
        .expect_err("attach should fail when the clock does");
    assert_eq!(err, PlatformError::Clock);
}

#[test]
fn attach_leaves_a_supplied_clock_disabled() {
    let mut clock = MockClock::new();
    let camera = IrCamera::attach(Some(&mut clock), &MockProperties::new(), || ())
        .expect("attach should succeed");
    assert!(!clock.is_enabled());
    assert_eq!(clock.enable_count(), 1);
    assert_eq!(clock.disable_count(), 1);
    camera.detach();
}
