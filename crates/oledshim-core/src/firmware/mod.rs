//! Screen observation seam.
//!
//! The host firmware has no query API for "which screen is visible";
//! an external adapter supplies these reads (and the one write the
//! redraw replay needs) however it can reach them.

pub mod mock;

/// Logical screen currently visible on the device.
///
/// `Unknown` covers the status screen and anything unrecognized.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ScreenState {
    Unknown,
    MainMenu,
    Information,
}

/// Opaque identifier of an information sub-page.
///
/// Only compared for equality against the first identifier observed
/// after entering the Information screen.
pub type InfoScreenId = u32;

/// State of the device LED indicator.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum IndicatorState {
    On,
    Off,
}

/// Observation seam onto the live firmware state.
pub trait FirmwareProbe {
    fn current_screen(&self) -> ScreenState;

    fn info_screen(&self) -> InfoScreenId;

    fn indicator(&self) -> IndicatorState;

    /// Snap the firmware's info sub-page pointer back to the home
    /// position. Used only by the redraw replay before re-navigation.
    fn reset_info_screen(&mut self);
}
