//! ir-cam-sensor: control plane for a fixed-format IR camera sensor
//!
//! This library exposes a single stand-in imaging sensor to a video-capture
//! framework as a negotiable capability surface (pixel format, frame size,
//! frame interval, device controls) and a lifecycle state machine. Bus
//! transport, pin muxing and clock management are reached through the
//! traits in [`platform`]; mock collaborators in [`mock`] let everything run
//! without hardware.

pub mod catalog;
pub mod command;
pub mod controls;
pub mod device;
pub mod mock;
pub mod params;
pub mod platform;
pub mod state;
pub mod types;

pub use command::{Command, Reply};
pub use controls::{ControlAccess, ControlId};
pub use device::IrCamera;
pub use platform::{PlatformError, PropertySource, SensorClock};
pub use state::{Lifecycle, PlatformData, SensorState};
pub use types::{
    BufferType, ChipIdent, Format, FourCC, FrameInterval, Result, SensorError, StreamCapFlags,
    StreamParams,
};
