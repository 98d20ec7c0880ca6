//! Command dispatch: one enum variant per entry of the host framework's
//! dispatch table, matched exhaustively.

use crate::catalog;
use crate::controls::ControlId;
use crate::device::IrCamera;
use crate::types::{
    Bt656Mode, BufferType, ChipIdent, Format, FourCC, FrameInterval, InterfaceParams, Result,
    StreamParams,
};

/// A command issued by the host framework against one device handle.
///
/// The set is closed: these are all the operations the dispatch table ever
/// contained, so an unknown command is unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// First-phase device bring-up.
    DevInit,
    /// Capture-bus interface description (legacy entry point).
    GetInterfaceParams,
    /// Second-phase bring-up confirmation.
    Init,
    /// Tear-down before bus detach.
    DevExit,
    /// Power the sensor on or off.
    SetPower {
        /// Requested power state.
        on: bool,
    },
    /// Enumerate supported pixel formats.
    EnumFormats {
        /// Enumeration index.
        index: u32,
    },
    /// Current output format.
    GetFormat,
    /// Read streaming parameters.
    GetStreamParams {
        /// Targeted buffer type.
        buffer_type: BufferType,
    },
    /// Negotiate streaming parameters.
    SetStreamParams {
        /// Targeted buffer type.
        buffer_type: BufferType,
        /// Requested seconds-per-frame.
        time_per_frame: FrameInterval,
        /// Requested capture mode.
        capture_mode: u32,
    },
    /// Read a control value.
    GetControl {
        /// Control identifier.
        id: ControlId,
    },
    /// Write a control value.
    SetControl {
        /// Control identifier.
        id: ControlId,
        /// Requested value.
        value: i32,
    },
    /// Enumerate supported frame sizes.
    EnumFrameSizes {
        /// Enumeration index.
        index: u32,
    },
    /// Enumerate supported frame intervals.
    EnumFrameIntervals {
        /// Enumeration index.
        index: u32,
        /// Queried pixel format.
        pixel_format: FourCC,
        /// Queried frame width.
        width: u32,
        /// Queried frame height.
        height: u32,
    },
    /// Chip identification query.
    GetChipIdent,
}

/// Successful dispatch results, one variant per reply-carrying command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reply {
    /// The command completed without reply data.
    Done,
    /// Capture-bus interface description.
    InterfaceParams(InterfaceParams),
    /// An enumerated pixel format.
    PixelFormat(FourCC),
    /// The current output format.
    Format(Format),
    /// Current streaming parameters.
    StreamParams(StreamParams),
    /// A control value.
    ControlValue(i32),
    /// An enumerated frame size.
    FrameSize(Format),
    /// An enumerated frame interval.
    FrameInterval(FrameInterval),
    /// The chip identity.
    ChipIdent(ChipIdent),
}

impl IrCamera {
    /// Route one command to its handler.
    ///
    /// Side effects are confined to the routed handler; a failing handler
    /// returns immediately with no state mutated. Dispatch against a record
    /// that has exited fails with [`crate::SensorError::NullDevice`] before
    /// any handler runs.
    pub fn dispatch(&mut self, command: Command) -> Result<Reply> {
        self.state().check_live()?;

        match command {
            Command::DevInit => {
                self.state_mut().dev_init()?;
                Ok(Reply::Done)
            }
            Command::GetInterfaceParams => Ok(Reply::InterfaceParams(InterfaceParams {
                mode: Bt656Mode::NoBt8Bit,
                external_vsync: true,
                vsync_inverted: false,
                hsync_inverted: false,
            })),
            Command::Init => {
                self.state_mut().init()?;
                Ok(Reply::Done)
            }
            Command::DevExit => {
                self.state_mut().dev_exit()?;
                Ok(Reply::Done)
            }
            Command::SetPower { on } => {
                self.state_mut().set_power(on)?;
                Ok(Reply::Done)
            }
            Command::EnumFormats { index } => {
                catalog::enum_formats(self.state(), index).map(Reply::PixelFormat)
            }
            Command::GetFormat => Ok(Reply::Format(self.state().get_format())),
            Command::GetStreamParams { buffer_type } => self
                .state()
                .get_stream_params(buffer_type)
                .map(Reply::StreamParams),
            Command::SetStreamParams {
                buffer_type,
                time_per_frame,
                capture_mode,
            } => {
                self.state_mut()
                    .set_stream_params(buffer_type, time_per_frame, capture_mode)?;
                Ok(Reply::Done)
            }
            Command::GetControl { id } => self.state().get_control(id).map(Reply::ControlValue),
            Command::SetControl { id, value } => {
                self.state_mut().set_control(id, value)?;
                Ok(Reply::Done)
            }
            Command::EnumFrameSizes { index } => {
                catalog::enum_frame_sizes(self.state(), index).map(Reply::FrameSize)
            }
            Command::EnumFrameIntervals {
                index,
                pixel_format,
                width,
                height,
            } => catalog::enum_frame_intervals(index, pixel_format, width, height)
                .map(Reply::FrameInterval),
            Command::GetChipIdent => Ok(Reply::ChipIdent(catalog::chip_ident())),
        }
    }
}
