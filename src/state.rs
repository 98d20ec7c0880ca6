//! The per-sensor device state record.
//!
//! One record exists per attached sensor. It is the single source of truth
//! every command handler reads and mutates; nothing else holds sensor state.

use crate::types::{FourCC, Format, FrameInterval, StreamCapFlags, StreamParams};

/// Native sensor output width in pixels.
pub const SENSOR_WIDTH: u32 = 640;
/// Native sensor output height in pixels.
pub const SENSOR_HEIGHT: u32 = 480;

/// Discrete frame-rate selector. The sensor runs at a single fixed rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameRate {
    /// 30 frames per second.
    Fps30,
}

/// Lifecycle states of an attached sensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    /// Attached, not yet initialized by the host framework.
    Uninitialized,
    /// Initialized via `DevInit`.
    Initialized,
    /// Powered on via `SetPower`.
    PoweredOn,
    /// Powered off via `SetPower`.
    PoweredOff,
    /// Exited via `DevExit`; no further dispatch reaches a handler.
    Removed,
}

/// Device-tree integers read once at attach.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlatformData {
    /// Master clock frequency in Hz.
    pub mclk: u32,
    /// Master clock source selector.
    pub mclk_source: u32,
    /// Capture interface (CSI) index this sensor feeds.
    pub csi_id: u32,
}

/// Stored values for the readable controls, all zero at construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ControlValues {
    /// Brightness.
    pub brightness: i32,
    /// Hue.
    pub hue: i32,
    /// Contrast.
    pub contrast: i32,
    /// Saturation.
    pub saturation: i32,
    /// Red balance.
    pub red_balance: i32,
    /// Blue balance.
    pub blue_balance: i32,
    /// Auto-exposure mode.
    pub ae_mode: i32,
}

/// The device state record.
///
/// Pixel format and frame dimensions never change after construction: the
/// sensor supports exactly one mode.
#[derive(Debug)]
pub struct SensorState {
    pixel_format: FourCC,
    width: u32,
    height: u32,
    streamcap: StreamParams,
    frame_rate: FrameRate,
    controls: ControlValues,
    powered_on: bool,
    lifecycle: Lifecycle,
    platform: PlatformData,
}

impl SensorState {
    /// Build the record with the sensor's fixed capabilities and the
    /// platform integers read at attach.
    #[must_use]
    pub fn new(platform: PlatformData) -> Self {
        Self {
            pixel_format: FourCC::GREY,
            width: SENSOR_WIDTH,
            height: SENSOR_HEIGHT,
            streamcap: StreamParams {
                capability: StreamCapFlags::HIGH_QUALITY | StreamCapFlags::TIME_PER_FRAME,
                time_per_frame: FrameInterval::DEFAULT,
                capture_mode: 0,
            },
            frame_rate: FrameRate::Fps30,
            controls: ControlValues::default(),
            powered_on: false,
            lifecycle: Lifecycle::Uninitialized,
            platform,
        }
    }

    /// The fixed pixel format.
    #[must_use]
    pub const fn pixel_format(&self) -> FourCC {
        self.pixel_format
    }

    /// The fixed output format.
    #[must_use]
    pub const fn format(&self) -> Format {
        Format::new(self.pixel_format, self.width, self.height)
    }

    /// Current streaming parameters.
    #[must_use]
    pub const fn streamcap(&self) -> StreamParams {
        self.streamcap
    }

    pub(crate) fn streamcap_mut(&mut self) -> &mut StreamParams {
        &mut self.streamcap
    }

    /// Current frame-rate selector.
    #[must_use]
    pub const fn frame_rate(&self) -> FrameRate {
        self.frame_rate
    }

    pub(crate) fn set_frame_rate(&mut self, rate: FrameRate) {
        self.frame_rate = rate;
    }

    /// Stored control values.
    #[must_use]
    pub const fn controls(&self) -> &ControlValues {
        &self.controls
    }

    pub(crate) fn controls_mut(&mut self) -> &mut ControlValues {
        &mut self.controls
    }

    /// Whether the sensor is flagged on.
    #[must_use]
    pub const fn powered_on(&self) -> bool {
        self.powered_on
    }

    pub(crate) fn set_powered_on(&mut self, on: bool) {
        self.powered_on = on;
    }

    /// Current lifecycle state.
    #[must_use]
    pub const fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub(crate) fn set_lifecycle(&mut self, lifecycle: Lifecycle) {
        self.lifecycle = lifecycle;
    }

    /// Platform integers read at attach.
    #[must_use]
    pub const fn platform(&self) -> PlatformData {
        self.platform
    }
}
