//! Control registry: id-to-slot mapping with per-id access legality.
//!
//! The stand-in sensor stores seven readable controls and tolerates writes
//! to a wider set without acting on them; everything else is rejected.

use log::debug;

use crate::state::{ControlValues, SensorState};
use crate::types::{Result, SensorError};

/// Device control identifiers recognized by this driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlId {
    /// Picture brightness.
    Brightness,
    /// Picture contrast.
    Contrast,
    /// Picture color saturation.
    Saturation,
    /// Picture hue.
    Hue,
    /// Automatic white balance.
    AutoWhiteBalance,
    /// One-shot white balance.
    DoWhiteBalance,
    /// Red chroma balance.
    RedBalance,
    /// Blue chroma balance.
    BlueBalance,
    /// Gamma adjustment.
    Gamma,
    /// Exposure / auto-exposure mode.
    Exposure,
    /// Automatic gain control.
    AutoGain,
    /// Manual gain.
    Gain,
    /// Horizontal mirror.
    HFlip,
    /// Vertical mirror.
    VFlip,
    /// Start a one-shot auto-focus sweep.
    AutoFocusStart,
    /// Abort an auto-focus sweep.
    AutoFocusStop,
    /// Capture rotation.
    Rotate,
    /// Viewfinder rotation.
    ViewfinderRotate,
    /// Mains power-line frequency filter.
    PowerLineFrequency,
    /// Edge sharpness.
    Sharpness,
    /// Backlight compensation.
    BacklightCompensation,
}

/// Access legality of a control id on this sensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlAccess {
    /// Readable; writes land in the stored slot.
    ReadWrite,
    /// Readable; writes are accepted and dropped by the stand-in sensor.
    ReadOnly,
    /// No stored slot; writes are accepted and dropped, reads fail.
    WriteNoOp,
    /// Recognized id with no access on this sensor.
    Unsupported,
}

/// Registry of `(control id, access)` pairs, fixed at construction.
const CONTROL_TABLE: &[(ControlId, ControlAccess)] = &[
    (ControlId::Brightness, ControlAccess::ReadOnly),
    (ControlId::Contrast, ControlAccess::ReadOnly),
    (ControlId::Saturation, ControlAccess::ReadOnly),
    (ControlId::Hue, ControlAccess::ReadOnly),
    (ControlId::RedBalance, ControlAccess::ReadOnly),
    (ControlId::BlueBalance, ControlAccess::ReadOnly),
    (ControlId::Exposure, ControlAccess::ReadOnly),
    (ControlId::AutoWhiteBalance, ControlAccess::WriteNoOp),
    (ControlId::DoWhiteBalance, ControlAccess::WriteNoOp),
    (ControlId::Gamma, ControlAccess::WriteNoOp),
    (ControlId::AutoGain, ControlAccess::WriteNoOp),
    (ControlId::Gain, ControlAccess::WriteNoOp),
    (ControlId::HFlip, ControlAccess::WriteNoOp),
    (ControlId::VFlip, ControlAccess::WriteNoOp),
    (ControlId::AutoFocusStart, ControlAccess::WriteNoOp),
    (ControlId::AutoFocusStop, ControlAccess::WriteNoOp),
    (ControlId::Rotate, ControlAccess::WriteNoOp),
    (ControlId::ViewfinderRotate, ControlAccess::WriteNoOp),
    (ControlId::PowerLineFrequency, ControlAccess::Unsupported),
    (ControlId::Sharpness, ControlAccess::Unsupported),
    (ControlId::BacklightCompensation, ControlAccess::Unsupported),
];

/// Look up the access legality of a control id.
#[must_use]
pub fn access(id: ControlId) -> ControlAccess {
    CONTROL_TABLE
        .iter()
        .find(|(entry, _)| *entry == id)
        .map_or(ControlAccess::Unsupported, |(_, access)| *access)
}

impl ControlValues {
    fn value(&self, id: ControlId) -> Option<i32> {
        match id {
            ControlId::Brightness => Some(self.brightness),
            ControlId::Hue => Some(self.hue),
            ControlId::Contrast => Some(self.contrast),
            ControlId::Saturation => Some(self.saturation),
            ControlId::RedBalance => Some(self.red_balance),
            ControlId::BlueBalance => Some(self.blue_balance),
            ControlId::Exposure => Some(self.ae_mode),
            _ => None,
        }
    }

    fn store(&mut self, id: ControlId, value: i32) {
        match id {
            ControlId::Brightness => self.brightness = value,
            ControlId::Hue => self.hue = value,
            ControlId::Contrast => self.contrast = value,
            ControlId::Saturation => self.saturation = value,
            ControlId::RedBalance => self.red_balance = value,
            ControlId::BlueBalance => self.blue_balance = value,
            ControlId::Exposure => self.ae_mode = value,
            _ => {}
        }
    }
}

impl SensorState {
    /// Read the stored value of a control.
    ///
    /// Fails with [`SensorError::InvalidArgument`] for any id without a
    /// stored slot.
    pub fn get_control(&self, id: ControlId) -> Result<i32> {
        match access(id) {
            ControlAccess::ReadWrite | ControlAccess::ReadOnly => self
                .controls()
                .value(id)
                .ok_or(SensorError::InvalidArgument),
            ControlAccess::WriteNoOp | ControlAccess::Unsupported => {
                Err(SensorError::InvalidArgument)
            }
        }
    }

    /// Write a control value.
    ///
    /// The accepted set succeeds without mutation on this sensor; ids
    /// outside it fail with [`SensorError::PermissionDenied`].
    pub fn set_control(&mut self, id: ControlId, value: i32) -> Result<()> {
        debug!("set_control: {id:?}");

        match access(id) {
            ControlAccess::ReadWrite => {
                self.controls_mut().store(id, value);
                Ok(())
            }
            ControlAccess::ReadOnly | ControlAccess::WriteNoOp => Ok(()),
            ControlAccess::Unsupported => Err(SensorError::PermissionDenied),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::PlatformData;

    fn state() -> SensorState {
        SensorState::new(PlatformData {
            mclk: 24_000_000,
            mclk_source: 0,
            csi_id: 0,
        })
    }

    #[test]
    fn readable_controls_return_stored_values() {
        let state = state();
        for id in [
            ControlId::Brightness,
            ControlId::Hue,
            ControlId::Contrast,
            ControlId::Saturation,
            ControlId::RedBalance,
            ControlId::BlueBalance,
            ControlId::Exposure,
        ] {
            assert_eq!(state.get_control(id), Ok(0), "{id:?} should read back 0");
        }
    }

    #[test]
    fn write_only_ids_are_not_readable() {
        let state = state();
        assert_eq!(
            state.get_control(ControlId::AutoFocusStart),
            Err(SensorError::InvalidArgument)
        );
        assert_eq!(
            state.get_control(ControlId::Gain),
            Err(SensorError::InvalidArgument)
        );
        assert_eq!(
            state.get_control(ControlId::Sharpness),
            Err(SensorError::InvalidArgument)
        );
    }

    #[test]
    fn accepted_writes_leave_values_unchanged() {
        let mut state = state();
        state
            .set_control(ControlId::AutoFocusStart, 1)
            .expect("auto-focus start should be accepted");
        state
            .set_control(ControlId::Brightness, 42)
            .expect("brightness write should be accepted");
        assert_eq!(*state.controls(), ControlValues::default());
        assert_eq!(state.get_control(ControlId::Brightness), Ok(0));
    }

    #[test]
    fn unsupported_writes_are_denied() {
        let mut state = state();
        assert_eq!(
            state.set_control(ControlId::Sharpness, 5),
            Err(SensorError::PermissionDenied)
        );
        assert_eq!(
            state.set_control(ControlId::PowerLineFrequency, 50),
            Err(SensorError::PermissionDenied)
        );
    }

    #[test]
    fn denial_is_distinct_from_invalid_argument() {
        let mut state = state();
        assert_eq!(
            state.set_control(ControlId::BacklightCompensation, 1),
            Err(SensorError::PermissionDenied)
        );
        assert_eq!(
            state.get_control(ControlId::BacklightCompensation),
            Err(SensorError::InvalidArgument)
        );
    }

    #[test]
    fn access_table_covers_every_id() {
        assert_eq!(access(ControlId::Brightness), ControlAccess::ReadOnly);
        assert_eq!(access(ControlId::VFlip), ControlAccess::WriteNoOp);
        assert_eq!(access(ControlId::Sharpness), ControlAccess::Unsupported);
    }
}
