//! Host event model and the delivery seam to the real notify handler.

/// Subsystem id of the GPIO event source (buttons).
pub const SUBSYSTEM_GPIO: i32 = 21002;
/// Wi-Fi wakeup notification, suppressed unconditionally.
pub const EVT_OLED_WIFI_WAKEUP: i32 = 14026;
/// Dial-state change notification.
pub const EVT_DIALUP_REPORT_CONNECT_STATE: i32 = 4037;
/// "Connecting" substate of a dial-state change.
pub const DIAL_STATE_CONNECTING: i32 = 900;
/// Power button action code (select/confirm).
pub const BUTTON_POWER: i32 = 8;
/// Menu button action code (advance/next).
pub const BUTTON_MENU: i32 = 9;

/// Return value of a handler invocation that consumed the event.
pub const HANDLED: i32 = 0;

/// One notification delivered by the host firmware.
///
/// The code space is open: triples outside the constants above must be
/// accepted and forwarded untouched.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Event {
    pub subsystem: i32,
    pub action: i32,
    pub subaction: i32,
}

impl Event {
    pub const fn new(subsystem: i32, action: i32, subaction: i32) -> Self {
        Self {
            subsystem,
            action,
            subaction,
        }
    }

    /// Synthetic GPIO button event, as emitted by the redraw replay.
    pub const fn gpio(action: i32) -> Self {
        Self::new(SUBSYSTEM_GPIO, action, 0)
    }
}

/// Delivery seam to the firmware's real notify handler.
pub trait EventSink {
    /// Hand the event to the real handler, returning its status code.
    fn deliver(&mut self, event: Event) -> i32;
}
