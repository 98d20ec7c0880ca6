//! Stream-parameter negotiation against the device state record.

use log::debug;

use crate::state::SensorState;
use crate::types::{BufferType, Format, FrameInterval, Result, SensorError, StreamParams};

impl SensorState {
    /// Current output format. Always the fixed tuple from the record.
    #[must_use]
    pub fn get_format(&self) -> Format {
        let format = self.format();
        debug!("get_format: {}x{}", format.width, format.height);
        format
    }

    /// Read the streaming parameters for a buffer type.
    ///
    /// Only [`BufferType::VideoCapture`] is served; every other type fails
    /// with [`SensorError::InvalidArgument`].
    pub fn get_stream_params(&self, buffer_type: BufferType) -> Result<StreamParams> {
        match buffer_type {
            BufferType::VideoCapture => {
                debug!("get_stream_params: video capture");
                Ok(self.streamcap())
            }
            BufferType::VideoOutput
            | BufferType::VideoOverlay
            | BufferType::VbiCapture
            | BufferType::VbiOutput
            | BufferType::SlicedVbiCapture
            | BufferType::SlicedVbiOutput => Err(SensorError::InvalidArgument),
        }
    }

    /// Negotiate streaming parameters.
    ///
    /// For [`BufferType::VideoCapture`] a request with a zero numerator or
    /// denominator is replaced by the 1/30 default; anything else is stored
    /// verbatim together with the capture mode. Requests against other
    /// buffer types are accepted silently and mutate nothing.
    pub fn set_stream_params(
        &mut self,
        buffer_type: BufferType,
        time_per_frame: FrameInterval,
        capture_mode: u32,
    ) -> Result<()> {
        match buffer_type {
            BufferType::VideoCapture => {
                let time_per_frame = if time_per_frame.is_unset() {
                    FrameInterval::DEFAULT
                } else {
                    time_per_frame
                };

                let tgt_fps = time_per_frame.fps().unwrap_or(0);
                debug!("set_stream_params: target {tgt_fps} fps");

                let streamcap = self.streamcap_mut();
                streamcap.time_per_frame = time_per_frame;
                streamcap.capture_mode = capture_mode;
            }
            BufferType::VideoOutput
            | BufferType::VideoOverlay
            | BufferType::VbiCapture
            | BufferType::VbiOutput
            | BufferType::SlicedVbiCapture
            | BufferType::SlicedVbiOutput => {
                // Not applicable to this sensor; accepted without effect.
                debug!("set_stream_params: ignoring {buffer_type:?}");
            }
        }

        Ok(())
    }
}
