//! Redaction policies for host-rendered credential strings.
//!
//! The host formats Wi-Fi credentials onto the information screen; the
//! primary SSID/password pair is bounded to fit the display and the
//! secondary pair is blanked entirely.

use heapless::String;

/// Visible character budget for a truncated credential line.
pub const CREDENTIAL_VISIBLE_CHARS: usize = 19;

/// Format keys and rendered prefixes whose output must be truncated.
pub fn wants_truncation(format: &str, rendered: &str) -> bool {
    format == "SSID: %s\n"
        || format == "PWD: %s\n"
        || rendered.starts_with("SSID0: ")
        || rendered.starts_with("PWD0: ")
}

/// Rendered prefixes that must be blanked entirely.
pub fn wants_blanking(rendered: &str) -> bool {
    rendered.starts_with("SSID1: ") || rendered.starts_with("PWD1: ")
}

/// Truncate in place to at most [`CREDENTIAL_VISIBLE_CHARS`] visible
/// characters, never splitting a UTF-8 sequence. Returns whether the
/// buffer was shortened.
pub fn truncate_visible<const N: usize>(buf: &mut String<N>) -> bool {
    let mut end = 0usize;
    for (count, (index, ch)) in buf.char_indices().enumerate() {
        if count == CREDENTIAL_VISIBLE_CHARS {
            buf.truncate(end);
            return true;
        }
        end = index + ch.len_utf8();
    }
    false
}
