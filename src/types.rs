//! Core types shared by the capability catalog, the negotiator and the
//! command dispatcher.

use thiserror::Error;

/// Default frame rate applied whenever a caller requests a zero interval.
pub const DEFAULT_FPS: u32 = 30;

/// Pixel format representation (e.g., GREY, YUYV).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FourCC(pub [u8; 4]);

impl FourCC {
    /// Create a new `FourCC` from a 4-byte array.
    #[must_use]
    pub const fn new(code: &[u8; 4]) -> Self {
        Self(*code)
    }

    /// GREY pixel format (8-bit greyscale), the sensor's only output format.
    pub const GREY: Self = Self::new(b"GREY");

    /// All-zero code, used by enumeration queries to mean "not assigned".
    pub const UNSET: Self = Self([0; 4]);

    /// Whether this is the unassigned sentinel.
    #[must_use]
    pub const fn is_unset(&self) -> bool {
        self.0[0] == 0 && self.0[1] == 0 && self.0[2] == 0 && self.0[3] == 0
    }
}

impl From<v4l::FourCC> for FourCC {
    fn from(fourcc: v4l::FourCC) -> Self {
        Self(fourcc.repr)
    }
}

impl From<FourCC> for v4l::FourCC {
    fn from(fourcc: FourCC) -> Self {
        Self::new(&fourcc.0)
    }
}

/// A rational number of seconds per frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameInterval {
    /// Interval numerator.
    pub numerator: u32,
    /// Interval denominator.
    pub denominator: u32,
}

impl FrameInterval {
    /// Create a new frame interval.
    #[must_use]
    pub const fn new(numerator: u32, denominator: u32) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    /// The default interval, 1/30 of a second per frame.
    pub const DEFAULT: Self = Self::new(1, DEFAULT_FPS);

    /// Whether either term is zero; such a request is replaced by
    /// [`FrameInterval::DEFAULT`] during negotiation.
    #[must_use]
    pub const fn is_unset(&self) -> bool {
        self.numerator == 0 || self.denominator == 0
    }

    /// Frames per second this interval works out to, `None` for a zero
    /// numerator.
    #[must_use]
    pub fn fps(&self) -> Option<u32> {
        self.denominator.checked_div(self.numerator)
    }
}

impl From<v4l::Fraction> for FrameInterval {
    fn from(frac: v4l::Fraction) -> Self {
        Self::new(frac.numerator, frac.denominator)
    }
}

impl From<FrameInterval> for v4l::Fraction {
    fn from(interval: FrameInterval) -> Self {
        Self::new(interval.numerator, interval.denominator)
    }
}

bitflags::bitflags! {
    /// Streaming capability bits advertised through the stream parameters.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct StreamCapFlags: u32 {
        /// High-quality still-capture mode is available.
        const HIGH_QUALITY = 0x0001;
        /// The sensor honours a requested time-per-frame.
        const TIME_PER_FRAME = 0x1000;
    }
}

/// Buffer types a stream-parameter call may target. Only
/// [`BufferType::VideoCapture`] is meaningful for this sensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferType {
    /// Video capture, the sensor's own stream.
    VideoCapture,
    /// Video output.
    VideoOutput,
    /// Video overlay.
    VideoOverlay,
    /// Raw VBI capture.
    VbiCapture,
    /// Raw VBI output.
    VbiOutput,
    /// Sliced VBI capture.
    SlicedVbiCapture,
    /// Sliced VBI output.
    SlicedVbiOutput,
}

/// Streaming parameters held in the device state record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamParams {
    /// Capability bits.
    pub capability: StreamCapFlags,
    /// Current seconds-per-frame target.
    pub time_per_frame: FrameInterval,
    /// Opaque driver-defined capture mode.
    pub capture_mode: u32,
}

/// Video format specification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Format {
    /// Pixel format.
    pub fourcc: FourCC,
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
}

impl Format {
    /// Create a new format specification.
    #[must_use]
    pub const fn new(fourcc: FourCC, width: u32, height: u32) -> Self {
        Self {
            fourcc,
            width,
            height,
        }
    }
}

/// How a chip identity was matched to its driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChipMatch {
    /// Matched by the bus driver's name.
    BusDriver,
    /// Matched by the device's bus address.
    BusAddress,
}

/// Chip identification reported to the host framework.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChipIdent {
    /// Fixed identity string.
    pub name: &'static str,
    /// How the identity was matched.
    pub match_kind: ChipMatch,
}

/// Data bus mode for the BT.656-style capture interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bt656Mode {
    /// BT.656 embedded syncs, 8-bit bus.
    Bt8Bit,
    /// BT.656 embedded syncs, 10-bit bus.
    Bt10Bit,
    /// Separate sync lines, 8-bit bus.
    NoBt8Bit,
    /// Separate sync lines, 10-bit bus.
    NoBt10Bit,
}

/// Fixed capture-interface description reported by the legacy
/// interface-parameters query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InterfaceParams {
    /// Bus mode; this sensor drives an 8-bit bus with separate syncs.
    pub mode: Bt656Mode,
    /// Vertical sync is supplied externally.
    pub external_vsync: bool,
    /// Vertical sync polarity is inverted.
    pub vsync_inverted: bool,
    /// Horizontal sync polarity is inverted.
    pub hsync_inverted: bool,
}

/// Status taxonomy returned across the dispatch boundary.
///
/// Handlers never retry and never recover: a failing call returns
/// immediately with no state mutated on the failing path.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SensorError {
    /// Unsupported index, id or buffer type, or malformed negotiation input.
    #[error("invalid argument")]
    InvalidArgument,

    /// The control id is recognized but not settable on this sensor.
    #[error("operation not permitted")]
    PermissionDenied,

    /// The dispatch did not reach a live device state record. Historically
    /// raised by the legacy interface-parameters entry point when handed a
    /// null handle; here it covers any dispatch after device exit.
    #[error("no device")]
    NullDevice,
}

/// Result type for sensor operations.
pub type Result<T> = std::result::Result<T, SensorError>;
