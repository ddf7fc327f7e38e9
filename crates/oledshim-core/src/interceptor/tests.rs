use std::cell::RefCell;

use super::*;
use crate::action::{ActionMode, ActionStatus};
use crate::firmware::mock::MockFirmware;

const HOME_PAGE: u32 = 7;
const AWAY_PAGE: u32 = 8;

struct RecordingSink {
    delivered: RefCell<Vec<Event>>,
}

impl RecordingSink {
    fn new() -> Self {
        Self {
            delivered: RefCell::new(Vec::new()),
        }
    }

    fn count(&self) -> usize {
        self.delivered.borrow().len()
    }

    fn events(&self) -> Vec<Event> {
        self.delivered.borrow().clone()
    }
}

impl EventSink for &RecordingSink {
    fn deliver(&mut self, event: Event) -> i32 {
        self.delivered.borrow_mut().push(event);
        HANDLED
    }
}

struct FakeRunner {
    get_value: u8,
    custom_present: bool,
    set_next: RefCell<Vec<String>>,
}

impl FakeRunner {
    fn new(get_value: u8) -> Self {
        Self {
            get_value,
            custom_present: true,
            set_next: RefCell::new(Vec::new()),
        }
    }
}

impl ActionRunner for &FakeRunner {
    fn run(&mut self, script: &str, mode: ActionMode) -> ActionStatus {
        if mode == ActionMode::SetNext {
            self.set_next.borrow_mut().push(script.into());
        }
        ActionStatus::Value(self.get_value)
    }

    fn resource_exists(&mut self, _path: &str) -> bool {
        self.custom_present
    }
}

type TestShim<'a> = MenuInterceptor<&'a MockFirmware, &'a RecordingSink, &'a FakeRunner>;

fn shim<'a>(
    firmware: &'a MockFirmware,
    sink: &'a RecordingSink,
    runner: &'a FakeRunner,
) -> TestShim<'a> {
    MenuInterceptor::new(firmware, sink, runner)
}

/// Land on the information screen, capture the home reference, then
/// move to a different sub-page.
fn enter_info_away(shim: &mut TestShim<'_>, firmware: &MockFirmware) {
    firmware.screen.set(ScreenState::Information);
    firmware.info_screen.set(HOME_PAGE);
    shim.on_frame_logged();
    firmware.info_screen.set(AWAY_PAGE);
}

#[test]
fn wifi_wakeup_is_always_suppressed() {
    let firmware = MockFirmware::new();
    let sink = RecordingSink::new();
    let runner = FakeRunner::new(0);
    let mut shim = shim(&firmware, &sink, &runner);

    let wakeup = Event::new(EVT_OLED_WIFI_WAKEUP, 1, 2);
    assert_eq!(shim.on_event(wakeup), HANDLED);
    assert_eq!(shim.on_event(wakeup), HANDLED);
    assert_eq!(sink.count(), 0);
}

#[test]
fn dial_connecting_is_suppressed_only_on_information() {
    let firmware = MockFirmware::new();
    let sink = RecordingSink::new();
    let runner = FakeRunner::new(0);
    let mut shim = shim(&firmware, &sink, &runner);

    let connecting = Event::new(EVT_DIALUP_REPORT_CONNECT_STATE, DIAL_STATE_CONNECTING, 0);

    firmware.screen.set(ScreenState::Information);
    assert_eq!(shim.on_event(connecting), HANDLED);
    assert_eq!(sink.count(), 0);

    firmware.screen.set(ScreenState::MainMenu);
    shim.on_event(connecting);
    assert_eq!(sink.count(), 1);
}

#[test]
fn unknown_events_pass_through_unchanged() {
    let firmware = MockFirmware::new();
    let sink = RecordingSink::new();
    let runner = FakeRunner::new(0);
    let mut shim = shim(&firmware, &sink, &runner);

    let odd = Event::new(31337, 5, 6);
    shim.on_event(odd);
    assert_eq!(sink.events(), vec![odd]);
}

#[test]
fn menu_button_away_from_home_advances_cursor_and_forwards() {
    let firmware = MockFirmware::new();
    let sink = RecordingSink::new();
    let runner = FakeRunner::new(0);
    let mut shim = shim(&firmware, &sink, &runner);
    enter_info_away(&mut shim, &firmware);

    shim.on_event(Event::gpio(BUTTON_MENU));
    shim.on_event(Event::gpio(BUTTON_MENU));

    assert_eq!(shim.tracker().cursor(), 2);
    assert_eq!(sink.count(), 2);
}

#[test]
fn power_button_advances_feature_and_replays_navigation() {
    let firmware = MockFirmware::new();
    let sink = RecordingSink::new();
    let runner = FakeRunner::new(0);
    let mut shim = shim(&firmware, &sink, &runner);
    enter_info_away(&mut shim, &firmware);

    // move the cursor to the second feature
    shim.on_event(Event::gpio(BUTTON_MENU));

    let press = Event::new(SUBSYSTEM_GPIO, BUTTON_POWER, 0x42);
    assert_eq!(shim.on_event(press), HANDLED);

    {
        let set_next = runner.set_next.borrow();
        assert_eq!(set_next.len(), 1);
        assert_eq!(set_next[0], "/app/bin/oled_hijack/ttlfix.sh");
    }

    // firmware info pointer snapped back to home by the replay
    assert_eq!(firmware.info_screen.get(), 0);

    let events = sink.events();
    assert_eq!(
        events,
        vec![
            // the cursor-advancing menu press, forwarded
            Event::gpio(BUTTON_MENU),
            // replay: leave information, re-enter, advance depth + 1
            Event::gpio(BUTTON_MENU),
            Event::gpio(BUTTON_POWER),
            Event::gpio(BUTTON_MENU),
            Event::gpio(BUTTON_POWER),
            Event::gpio(BUTTON_MENU),
            Event::gpio(BUTTON_MENU),
            // the press itself, transformed with its subaction kept
            Event::new(SUBSYSTEM_GPIO, BUTTON_MENU, 0x42),
        ]
    );
}

#[test]
fn locked_buttons_suppress_without_advancing() {
    let firmware = MockFirmware::new();
    let sink = RecordingSink::new();
    let runner = FakeRunner::new(0);
    let mut shim = shim(&firmware, &sink, &runner);
    enter_info_away(&mut shim, &firmware);

    shim.buttons_locked = true;
    assert_eq!(shim.on_event(Event::gpio(BUTTON_POWER)), HANDLED);
    assert_eq!(shim.on_event(Event::gpio(BUTTON_MENU)), HANDLED);

    assert!(runner.set_next.borrow().is_empty());
    assert_eq!(shim.tracker().cursor(), 0);
    assert_eq!(sink.count(), 0);
}

#[test]
fn indicator_off_forwards_buttons_unchanged() {
    let firmware = MockFirmware::new();
    let sink = RecordingSink::new();
    let runner = FakeRunner::new(0);
    let mut shim = shim(&firmware, &sink, &runner);
    enter_info_away(&mut shim, &firmware);

    firmware.indicator.set(IndicatorState::Off);
    let press = Event::gpio(BUTTON_POWER);
    shim.on_event(press);

    assert!(runner.set_next.borrow().is_empty());
    assert_eq!(sink.events(), vec![press]);
}

#[test]
fn home_subscreen_resets_cursor_on_events() {
    let firmware = MockFirmware::new();
    let sink = RecordingSink::new();
    let runner = FakeRunner::new(0);
    let mut shim = shim(&firmware, &sink, &runner);
    enter_info_away(&mut shim, &firmware);

    shim.on_event(Event::gpio(BUTTON_MENU));
    shim.on_event(Event::gpio(BUTTON_MENU));
    assert_eq!(shim.tracker().cursor(), 2);

    firmware.info_screen.set(HOME_PAGE);
    shim.on_event(Event::gpio(BUTTON_MENU));
    assert_eq!(shim.tracker().cursor(), 0);
    assert_eq!(sink.count(), 3);
}

#[test]
fn homepage_format_is_replaced_with_menu_block() {
    let firmware = MockFirmware::new();
    let sink = RecordingSink::new();
    let runner = FakeRunner::new(1);
    let mut shim = shim(&firmware, &sink, &runner);

    let mut buf = TextBuf::new();
    let _ = buf.push_str("Homepage: http://192.168.8.1");
    assert!(shim.on_format("Homepage: %s", &mut buf));

    assert!(buf.as_str().starts_with(
        "# Network Mode:\n    Auto\n  > GSM Only\n    UMTS Only\n# TTL Mangling:\n"
    ));
    assert!(buf.as_str().contains("# Custom Script:\n"));
}

#[test]
fn credential_formats_are_redacted() {
    let firmware = MockFirmware::new();
    let sink = RecordingSink::new();
    let runner = FakeRunner::new(0);
    let mut shim = shim(&firmware, &sink, &runner);

    let mut ssid = TextBuf::new();
    let _ = ssid.push_str("SSID: a-very-long-network-name-here\n");
    assert!(shim.on_format("SSID: %s\n", &mut ssid));
    assert_eq!(ssid.chars().count(), 19);

    let mut secondary = TextBuf::new();
    let _ = secondary.push_str("SSID1: guest-network");
    assert!(shim.on_format("%s", &mut secondary));
    assert!(secondary.is_empty());

    let mut other = TextBuf::new();
    let _ = other.push_str("Battery: 80%");
    assert!(!shim.on_format("Battery: %d%%", &mut other));
    assert_eq!(other.as_str(), "Battery: 80%");
}
