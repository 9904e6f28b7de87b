//! Input guards applied before the store commits any window state.

use crate::config::WindowManagerConfig;
use crate::model::{Position, Size};

/// Substrings that disqualify a window id.
///
/// Ids end up as keys and DOM identifiers in the shell, so anything that reads like a path
/// segment or an object-prototype key is refused.
pub const FORBIDDEN_ID_FRAGMENTS: [&str; 6] =
    ["__proto__", "constructor", "prototype", "..", "/", "\\"];

const SCRIPT_OPEN: &str = "<script";
const SCRIPT_CLOSE: &str = "</script>";

/// Returns `true` when `id` contains none of [`FORBIDDEN_ID_FRAGMENTS`].
///
/// Blank ids are accepted; only uniqueness applies to them.
pub fn is_valid_window_id(id: &str) -> bool {
    !FORBIDDEN_ID_FRAGMENTS
        .iter()
        .any(|fragment| id.contains(fragment))
}

/// Strips script blocks and markup from a window title and trims surrounding whitespace.
///
/// Script blocks are removed together with their body. An unterminated `<script` swallows the
/// rest of the input.
pub fn sanitize_title(raw: &str) -> String {
    strip_tags(&strip_script_blocks(raw)).trim().to_string()
}

pub fn clamp_position(position: Position, config: &WindowManagerConfig) -> Position {
    Position {
        x: config.position.clamp(position.x),
        y: config.position.clamp(position.y),
    }
}

pub fn clamp_size(size: Size, config: &WindowManagerConfig) -> Size {
    Size {
        width: config.width.clamp(size.width),
        height: config.height.clamp(size.height),
    }
}

fn strip_script_blocks(raw: &str) -> String {
    // ASCII lowercasing keeps byte offsets aligned with `raw`.
    let lower = raw.to_ascii_lowercase();
    let mut out = String::with_capacity(raw.len());
    let mut cursor = 0;

    while let Some(offset) = lower[cursor..].find(SCRIPT_OPEN) {
        let start = cursor + offset;
        let after_name = start + SCRIPT_OPEN.len();
        let at_word_boundary = lower[after_name..]
            .chars()
            .next()
            .map_or(true, |c| !(c.is_ascii_alphanumeric() || c == '_'));

        if !at_word_boundary {
            out.push_str(&raw[cursor..after_name]);
            cursor = after_name;
            continue;
        }

        out.push_str(&raw[cursor..start]);
        cursor = match lower[after_name..].find(SCRIPT_CLOSE) {
            Some(end) => after_name + end + SCRIPT_CLOSE.len(),
            None => raw.len(),
        };
    }

    out.push_str(&raw[cursor..]);
    out
}

fn strip_tags(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;

    while let Some(open) = rest.find('<') {
        let Some(close) = rest[open..].find('>') else {
            break;
        };
        out.push_str(&rest[..open]);
        rest = &rest[open + close + 1..];
    }

    out.push_str(rest);
    out
}
