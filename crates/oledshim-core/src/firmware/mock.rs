use core::cell::Cell;

use super::{FirmwareProbe, IndicatorState, InfoScreenId, ScreenState};

/// No-hardware firmware state used during bring-up and in tests.
///
/// Interior mutability lets the caller keep a handle for scripting
/// screen changes while the interceptor owns a `&MockFirmware`.
#[derive(Debug)]
pub struct MockFirmware {
    pub screen: Cell<ScreenState>,
    pub info_screen: Cell<InfoScreenId>,
    pub indicator: Cell<IndicatorState>,
}

impl MockFirmware {
    pub const fn new() -> Self {
        Self {
            screen: Cell::new(ScreenState::Unknown),
            info_screen: Cell::new(0),
            indicator: Cell::new(IndicatorState::On),
        }
    }
}

impl Default for MockFirmware {
    fn default() -> Self {
        Self::new()
    }
}

impl FirmwareProbe for &MockFirmware {
    fn current_screen(&self) -> ScreenState {
        self.screen.get()
    }

    fn info_screen(&self) -> InfoScreenId {
        self.info_screen.get()
    }

    fn indicator(&self) -> IndicatorState {
        self.indicator.get()
    }

    fn reset_info_screen(&mut self) {
        self.info_screen.set(0);
    }
}
