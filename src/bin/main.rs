//! Bring-up simulator for the OLED menu shim.
//!
//! The real deployment injects the interceptor into a live firmware
//! process; here it is wired to a mock firmware and driven from a
//! stdin REPL instead, with feature actions backed by real shell
//! scripts. Useful for exercising the state machine and eyeballing the
//! rendered menu block off-device.

use std::io::{self, BufRead};

use log::info;
use oledshim_core::firmware::mock::MockFirmware;
use oledshim_core::interceptor::MenuInterceptor;
use oledshim_host::action::ShellActionRunner;

#[path = "main/sim.rs"]
mod sim;

use sim::PrintSink;

fn main() {
    env_logger::init();

    let firmware = MockFirmware::new();
    let mut shim = MenuInterceptor::new(&firmware, PrintSink, ShellActionRunner::new());
    info!("shim wired to mock firmware and shell action runner");

    println!("oledshim simulator; type `help` for commands");
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let Ok(line) = line else {
            break;
        };
        if !sim::run_command(&mut shim, &firmware, line.trim()) {
            break;
        }
    }
}
