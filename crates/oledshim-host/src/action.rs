//! Shell-backed feature actions.

use std::path::Path;
use std::process::Command;

use log::{debug, warn};
use oledshim_core::action::{ActionMode, ActionRunner, ActionStatus};

const SIGINT: i32 = 2;
const SIGQUIT: i32 = 3;

/// Runs a feature's backing script as `/bin/sh -c "<script> <mode>"`,
/// blocking until it exits.
///
/// Termination by SIGINT or SIGQUIT reports as
/// [`ActionStatus::Interrupted`]; any exit code is passed through as
/// the value. A script that cannot be spawned degrades to value 0.
#[derive(Clone, Copy, Debug, Default)]
pub struct ShellActionRunner;

impl ShellActionRunner {
    pub const fn new() -> Self {
        Self
    }
}

impl ActionRunner for ShellActionRunner {
    fn run(&mut self, script: &str, mode: ActionMode) -> ActionStatus {
        let command = format!("{script} {}", mode.as_arg());
        debug!("calling script: {command}");

        let status = match Command::new("/bin/sh").arg("-c").arg(&command).status() {
            Ok(status) => status,
            Err(err) => {
                warn!("failed to run `{command}`: {err}");
                return ActionStatus::Value(0);
            }
        };

        {
            use std::os::unix::process::ExitStatusExt;
            if matches!(status.signal(), Some(SIGINT | SIGQUIT)) {
                debug!("script interrupted: {command}");
                return ActionStatus::Interrupted;
            }
        }

        let code = status.code().unwrap_or(0).clamp(0, 255) as u8;
        debug!("script exited with {code}");
        ActionStatus::Value(code)
    }

    fn resource_exists(&mut self, path: &str) -> bool {
        Path::new(path).exists()
    }
}
