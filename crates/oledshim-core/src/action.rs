//! External feature action seam.

/// Invocation mode passed to a feature's backing script.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ActionMode {
    /// Read the current value index.
    Get,
    /// Rotate the feature to its next configured value.
    SetNext,
}

impl ActionMode {
    /// Argument string the backing scripts expect.
    pub const fn as_arg(self) -> &'static str {
        match self {
            Self::Get => "get",
            Self::SetNext => "set_next",
        }
    }
}

/// Outcome of one action invocation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ActionStatus {
    /// Exit-style status in `[0, 255]`; for `Get` this is the value index.
    Value(u8),
    /// The backing subprocess was interrupted by a termination signal.
    /// Never a valid value index.
    Interrupted,
}

/// Abstract runner for script-backed feature actions.
pub trait ActionRunner {
    /// Invoke the action behind `script`. Blocks until it finishes.
    fn run(&mut self, script: &str, mode: ActionMode) -> ActionStatus;

    /// Whether an optional resource is present. Consulted once per
    /// process for the optional feature probe.
    fn resource_exists(&mut self, path: &str) -> bool;
}
