//! Inference of "where the user is" inside the Information screen.

use log::debug;

use crate::firmware::{InfoScreenId, ScreenState};

/// Tracks the home sub-screen reference and the navigation cursor.
///
/// The cursor counts forward presses taken away from the home
/// sub-screen and is meaningful only while the Information screen is
/// visible on a non-home sub-page.
#[derive(Debug, Default)]
pub struct ScreenTracker {
    home: Option<InfoScreenId>,
    cursor: usize,
}

impl ScreenTracker {
    pub const fn new() -> Self {
        Self {
            home: None,
            cursor: 0,
        }
    }

    /// Log-hook path: the firmware rendered a frame.
    ///
    /// The first frame observed after entering Information captures
    /// the home reference; leaving Information clears it and the
    /// cursor; re-observing the home sub-page resets the cursor.
    pub fn observe_frame(&mut self, screen: ScreenState, info: InfoScreenId) {
        if screen == ScreenState::Information {
            match self.home {
                None => {
                    debug!("captured home sub-screen id {info}");
                    self.home = Some(info);
                }
                Some(home) if home == info => self.cursor = 0,
                Some(_) => {}
            }
        } else {
            self.home = None;
            self.cursor = 0;
        }
    }

    pub fn home(&self) -> Option<InfoScreenId> {
        self.home
    }

    /// Whether a home reference exists and `info` differs from it.
    pub fn away_from_home(&self, info: InfoScreenId) -> bool {
        matches!(self.home, Some(home) if home != info)
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn advance_cursor(&mut self) {
        self.cursor = self.cursor.saturating_add(1);
    }

    pub fn reset_cursor(&mut self) {
        self.cursor = 0;
    }
}
