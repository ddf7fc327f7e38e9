//! Three-line menu windows and the assembled multi-feature block.
//!
//! The textual layout is a fixed contract with the host renderer's
//! fixed-width display: `  > ` marks the highlighted label, plain rows
//! keep a 4-space indent, absent neighbors render as indented blanks.

use heapless::String;

use crate::action::ActionRunner;
use crate::registry::FeatureRegistry;

pub const MENU_WINDOW_BYTES: usize = 128;
pub const MENU_BLOCK_BYTES: usize = 1024;

pub type MenuWindow = String<MENU_WINDOW_BYTES>;
pub type MenuBlock = String<MENU_BLOCK_BYTES>;

const MARKED: &str = "  > ";
const PLAIN: &str = "    ";

fn label_or_blank<'a>(labels: &[&'a str], index: usize) -> &'a str {
    labels.get(index).copied().unwrap_or("")
}

/// Render the 3-line window for one feature.
///
/// The highlighted row sits on top at index 0, pinned to the bottom on
/// the last index of a list of three or more, and in the middle
/// otherwise. Any out-of-range index renders the ERROR placeholder
/// instead of indexing past the labels.
pub fn render_window(labels: &[&str], current: usize) -> MenuWindow {
    let mut out = MenuWindow::new();

    if current >= labels.len() {
        let _ = out.push_str("    ERROR\n\n\n");
        return out;
    }

    let rows: [(bool, &str); 3] = if current == 0 {
        [
            (true, labels[0]),
            (false, label_or_blank(labels, 1)),
            (false, label_or_blank(labels, 2)),
        ]
    } else if current == labels.len() - 1 && labels.len() >= 3 {
        [
            (false, labels[current - 2]),
            (false, labels[current - 1]),
            (true, labels[current]),
        ]
    } else {
        [
            (false, labels[current - 1]),
            (true, labels[current]),
            (false, label_or_blank(labels, current + 1)),
        ]
    };

    for (highlighted, label) in rows {
        let _ = out.push_str(if highlighted { MARKED } else { PLAIN });
        let _ = out.push_str(label);
        let _ = out.push('\n');
    }
    out
}

/// Assemble the full menu block, querying every feature's current
/// value fresh from its backing script.
pub fn render_block<AR: ActionRunner>(registry: &mut FeatureRegistry<AR>) -> MenuBlock {
    let mut out = MenuBlock::new();
    for index in 0..registry.len() {
        let Some(spec) = registry.feature(index) else {
            break;
        };
        let value = registry.query(index);
        let window = render_window(spec.labels, value);
        let _ = out.push_str("# ");
        let _ = out.push_str(spec.name);
        let _ = out.push_str(":\n");
        let _ = out.push_str(window.as_str());
    }
    out
}
