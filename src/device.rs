//! The attached sensor device: bus attach/detach glue and the lifecycle
//! state machine.

use log::{debug, error, info};

use crate::platform::{
    PlatformError, PropertySource, SensorClock, PROP_CSI_ID, PROP_MCLK, PROP_MCLK_SOURCE,
};
use crate::state::{FrameRate, Lifecycle, PlatformData, SensorState};
use crate::types::{Result, SensorError};

/// An attached IR camera sensor.
///
/// Exactly one instance exists per physical sensor. The host framework is
/// expected to serialize calls; `dispatch` takes `&mut self`, so exclusive
/// access is enforced by the borrow checker and no internal lock is held.
/// A host sharing the handle across threads wraps the device in its own
/// `Mutex`.
#[derive(Debug)]
pub struct IrCamera {
    state: SensorState,
}

impl IrCamera {
    /// Attach the sensor.
    ///
    /// Reads the three device-tree integers, brackets the state setup with
    /// clock enable/disable when a clock is supplied (`None` means the clock
    /// is already running), and invokes the reset hook once. Collaborator
    /// errors abort the attach and are surfaced unchanged.
    pub fn attach(
        mut clock: Option<&mut dyn SensorClock>,
        props: &dyn PropertySource,
        reset: impl FnOnce(),
    ) -> std::result::Result<Self, PlatformError> {
        let mclk = props
            .read_u32(PROP_MCLK)
            .inspect_err(|err| error!("{err}"))?;
        let mclk_source = props
            .read_u32(PROP_MCLK_SOURCE)
            .inspect_err(|err| error!("{err}"))?;
        let csi_id = props
            .read_u32(PROP_CSI_ID)
            .inspect_err(|err| error!("{err}"))?;

        if let Some(clk) = clock.as_deref_mut() {
            clk.prepare_enable().inspect_err(|err| error!("{err}"))?;
        }

        reset();

        let state = SensorState::new(PlatformData {
            mclk,
            mclk_source,
            csi_id,
        });

        if let Some(clk) = clock.as_deref_mut() {
            clk.disable_unprepare();
        }

        info!("ir camera sensor attached");

        Ok(Self { state })
    }

    /// The device state record. Read-only; mutation goes through dispatch.
    #[must_use]
    pub const fn state(&self) -> &SensorState {
        &self.state
    }

    pub(crate) fn state_mut(&mut self) -> &mut SensorState {
        &mut self.state
    }

    /// Detach the sensor from the host framework.
    ///
    /// Consumes the device: the backing state record is freed and no further
    /// dispatch is expressible.
    pub fn detach(self) {
        debug!("ir camera sensor detached");
    }
}

impl SensorState {
    /// First-phase bring-up: flag the sensor on, log the target frame rate
    /// derived from the current interval and apply the default frame-rate
    /// selector. Always succeeds on a live record.
    pub(crate) fn dev_init(&mut self) -> Result<()> {
        self.set_powered_on(true);

        // Diagnostic only; the stored interval is not touched here.
        let tgt_fps = self.streamcap().time_per_frame.fps().unwrap_or(0);
        debug!("dev_init: target {tgt_fps} fps");

        self.set_frame_rate(FrameRate::Fps30);
        self.set_lifecycle(Lifecycle::Initialized);

        debug!("initialized ir camera");
        Ok(())
    }

    /// Second-phase bring-up confirmation. No-op, always succeeds.
    pub(crate) fn init(&mut self) -> Result<()> {
        Ok(())
    }

    /// Toggle the power state. Always succeeds; there is no physical power
    /// rail behind the stand-in sensor.
    pub(crate) fn set_power(&mut self, on: bool) -> Result<()> {
        self.set_powered_on(on);
        self.set_lifecycle(if on {
            Lifecycle::PoweredOn
        } else {
            Lifecycle::PoweredOff
        });
        Ok(())
    }

    /// Tear-down before bus detach. Always succeeds; afterwards every
    /// dispatch on this record fails with [`SensorError::NullDevice`].
    pub(crate) fn dev_exit(&mut self) -> Result<()> {
        self.set_lifecycle(Lifecycle::Removed);
        Ok(())
    }

    /// Reject dispatch against a record that is no longer live.
    pub(crate) fn check_live(&self) -> Result<()> {
        if self.lifecycle() == Lifecycle::Removed {
            return Err(SensorError::NullDevice);
        }
        Ok(())
    }
}
