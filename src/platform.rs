//! Collaborator traits supplied by the platform at attach time.
//!
//! Bus transport, pin muxing and clock management live outside the driver
//! core; attach only needs a clock that can be enabled, three device-tree
//! integers and a one-shot reset hook.

use thiserror::Error;

/// Device-tree property holding the master clock frequency.
pub const PROP_MCLK: &str = "mclk";
/// Device-tree property selecting the master clock source.
pub const PROP_MCLK_SOURCE: &str = "mclk_source";
/// Device-tree property naming the capture interface the sensor feeds.
pub const PROP_CSI_ID: &str = "csi_id";

/// Errors produced by attach-time collaborators.
///
/// These are fatal to attach and surfaced unchanged; they are not part of
/// the dispatch status taxonomy.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PlatformError {
    /// A required device-tree integer is missing or malformed.
    #[error("{0} missing or invalid")]
    Property(&'static str),

    /// The sensor clock could not be prepared and enabled.
    #[error("clock-frequency missing or invalid")]
    Clock,
}

/// Sensor master clock handle.
pub trait SensorClock {
    /// Prepare and enable the clock.
    fn prepare_enable(&mut self) -> Result<(), PlatformError>;

    /// Disable and unprepare the clock.
    fn disable_unprepare(&mut self);
}

/// Source of device-tree integer properties for the sensor node.
pub trait PropertySource {
    /// Read a `u32` property by name.
    fn read_u32(&self, name: &'static str) -> Result<u32, PlatformError>;
}
