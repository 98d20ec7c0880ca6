//! Static capability catalog: supported formats, frame sizes, frame
//! intervals and the chip identity.
//!
//! The sensor has exactly one output mode, so every enumeration is over a
//! single entry; the frame-size enumeration intentionally exposes that entry
//! twice (see [`enum_frame_sizes`]).

use log::warn;

use crate::state::SensorState;
use crate::types::{
    ChipIdent, ChipMatch, Format, FourCC, FrameInterval, Result, SensorError, DEFAULT_FPS,
};

/// Chip identity string reported to the host framework.
pub const CHIP_NAME: &str = "hanhwa_ircamera";

/// Enumerate supported pixel formats.
///
/// Only one pixel format is supported, so any `index > 0` fails with
/// [`SensorError::InvalidArgument`].
pub fn enum_formats(state: &SensorState, index: u32) -> Result<FourCC> {
    if index > 0 {
        return Err(SensorError::InvalidArgument);
    }

    Ok(state.pixel_format())
}

/// Enumerate supported frame sizes.
///
/// Indices 0 and 1 both resolve to the single 640x480 physical size; the
/// aliasing is part of the enumeration contract. Any `index > 1` fails with
/// [`SensorError::InvalidArgument`].
pub fn enum_frame_sizes(state: &SensorState, index: u32) -> Result<Format> {
    if index > 1 {
        return Err(SensorError::InvalidArgument);
    }

    Ok(state.format())
}

/// Enumerate supported frame intervals for a pixel format and size.
///
/// Fails with [`SensorError::InvalidArgument`] for any `index != 0` and for
/// an unassigned pixel format, width or height.
///
/// Known quirk, kept for compatibility: the call builds the discrete 1/30
/// interval and still reports `InvalidArgument` on the remaining path, so it
/// never succeeds. Callers discover the fixed interval through the stream
/// parameters instead.
pub fn enum_frame_intervals(
    index: u32,
    pixel_format: FourCC,
    width: u32,
    height: u32,
) -> Result<FrameInterval> {
    if index != 0 {
        return Err(SensorError::InvalidArgument);
    }

    if pixel_format.is_unset() || width == 0 || height == 0 {
        warn!("please assign pixel format, width and height");
        return Err(SensorError::InvalidArgument);
    }

    let _discrete = FrameInterval::new(1, DEFAULT_FPS);

    Err(SensorError::InvalidArgument)
}

/// Report the chip identity. Never fails.
#[must_use]
pub fn chip_ident() -> ChipIdent {
    ChipIdent {
        name: CHIP_NAME,
        match_kind: ChipMatch::BusDriver,
    }
}
