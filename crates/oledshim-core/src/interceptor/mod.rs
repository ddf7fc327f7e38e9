//! Event interception state machine.
//!
//! Sits between the host firmware's event sources and its real
//! handlers, deciding per event whether to suppress, transform, or
//! forward, and replaying synthetic navigation to force redraws after
//! a feature value changes.

use log::debug;

use crate::action::ActionRunner;
use crate::event::{
    BUTTON_MENU, BUTTON_POWER, DIAL_STATE_CONNECTING, EVT_DIALUP_REPORT_CONNECT_STATE,
    EVT_OLED_WIFI_WAKEUP, Event, EventSink, HANDLED, SUBSYSTEM_GPIO,
};
use crate::firmware::{FirmwareProbe, IndicatorState, ScreenState};
use crate::menu::{self, MENU_BLOCK_BYTES};
use crate::registry::FeatureRegistry;
use crate::text_policy;
use crate::tracker::ScreenTracker;

/// Format key carrying the string the menu block replaces.
const HOMEPAGE_FORMAT: &str = "Homepage: %s";

/// Rewrite buffer for host-rendered strings, sized like the host's
/// own format buffers.
pub type TextBuf = heapless::String<MENU_BLOCK_BYTES>;

/// The interceptor owns every piece of mutable shim state: the screen
/// tracker, the feature registry with its one-shot probe, and the
/// re-entrancy guard around synthetic replays.
pub struct MenuInterceptor<FW, ES, AR>
where
    FW: FirmwareProbe,
    ES: EventSink,
    AR: ActionRunner,
{
    firmware: FW,
    sink: ES,
    registry: FeatureRegistry<AR>,
    tracker: ScreenTracker,
    buttons_locked: bool,
}

impl<FW, ES, AR> MenuInterceptor<FW, ES, AR>
where
    FW: FirmwareProbe,
    ES: EventSink,
    AR: ActionRunner,
{
    pub const fn new(firmware: FW, sink: ES, runner: AR) -> Self {
        Self {
            firmware,
            sink,
            registry: FeatureRegistry::new(runner),
            tracker: ScreenTracker::new(),
            buttons_locked: false,
        }
    }

    /// Logging hook: the firmware rendered a frame. Only used to infer
    /// screen state; the payload is not interpreted.
    pub fn on_frame_logged(&mut self) {
        let screen = self.firmware.current_screen();
        let info = self.firmware.info_screen();
        self.tracker.observe_frame(screen, info);
    }

    pub fn tracker(&self) -> &ScreenTracker {
        &self.tracker
    }
}

include!("events.rs");
include!("redraw.rs");
include!("text.rs");

#[cfg(test)]
mod tests;
