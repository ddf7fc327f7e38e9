//! REPL glue: a printing event sink and the command dispatcher.

use oledshim_core::event::{BUTTON_MENU, BUTTON_POWER, Event, EventSink, HANDLED};
use oledshim_core::firmware::mock::MockFirmware;
use oledshim_core::firmware::{IndicatorState, ScreenState};
use oledshim_core::interceptor::{MenuInterceptor, TextBuf};
use oledshim_host::action::ShellActionRunner;

pub type SimShim<'a> = MenuInterceptor<&'a MockFirmware, PrintSink, ShellActionRunner>;

/// Stand-in for the firmware's real notify handler: prints whatever
/// the interceptor decided to forward.
pub struct PrintSink;

impl EventSink for PrintSink {
    fn deliver(&mut self, event: Event) -> i32 {
        println!(
            "-> real handler: subsystem={} action={} subaction={}",
            event.subsystem, event.action, event.subaction
        );
        HANDLED
    }
}

/// Apply one REPL line. Returns false when the session should end.
pub fn run_command(shim: &mut SimShim<'_>, firmware: &MockFirmware, line: &str) -> bool {
    let mut parts = line.split_whitespace();
    match parts.next() {
        None => {}
        Some("quit" | "exit") => return false,
        Some("main") => firmware.screen.set(ScreenState::MainMenu),
        Some("info") => firmware.screen.set(ScreenState::Information),
        Some("page") => match parts.next().and_then(|id| id.parse().ok()) {
            Some(id) => firmware.info_screen.set(id),
            None => println!("usage: page <id>"),
        },
        Some("led") => match parts.next() {
            Some("on") => firmware.indicator.set(IndicatorState::On),
            Some("off") => firmware.indicator.set(IndicatorState::Off),
            _ => println!("usage: led on|off"),
        },
        Some("frame") => shim.on_frame_logged(),
        Some("power") => {
            let ret = shim.on_event(Event::gpio(BUTTON_POWER));
            println!("handler returned {ret}");
        }
        Some("menu") => {
            let ret = shim.on_event(Event::gpio(BUTTON_MENU));
            println!("handler returned {ret}");
        }
        Some("event") => {
            let codes: Vec<i32> = parts.filter_map(|code| code.parse().ok()).collect();
            match codes[..] {
                [subsystem, action, subaction] => {
                    let ret = shim.on_event(Event::new(subsystem, action, subaction));
                    println!("handler returned {ret}");
                }
                _ => println!("usage: event <subsystem> <action> <subaction>"),
            }
        }
        Some("render") => {
            let mut buf = TextBuf::new();
            let _ = buf.push_str("Homepage: http://192.168.8.1");
            shim.on_format("Homepage: %s", &mut buf);
            print!("{buf}");
        }
        Some("state") => {
            println!(
                "screen={:?} page={} home={:?} cursor={}",
                firmware.screen.get(),
                firmware.info_screen.get(),
                shim.tracker().home(),
                shim.tracker().cursor()
            );
        }
        _ => {
            println!("commands:");
            println!("  main | info        set the visible screen");
            println!("  page <id>          set the information sub-page id");
            println!("  led on|off         set the LED indicator");
            println!("  frame              firmware rendered a frame (log hook)");
            println!("  power | menu       press a button (GPIO event)");
            println!("  event <s> <a> <sa> deliver an arbitrary event triple");
            println!("  render             run the Homepage format hook");
            println!("  state              dump shim state");
            println!("  quit");
        }
    }
    true
}
