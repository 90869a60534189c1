//! Padding to a target display width.
//!
//! Padding by display width cannot reuse the raw character count directly: a
//! string of five kana is ten columns wide, and padding it to ten raw
//! characters would overshoot by five columns. The pad count is therefore the
//! column deficit, not the raw one.

use crate::length::wide_length;

/// Which edge of the string receives the padding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Start,
    End,
}

fn wide_pad(s: &str, target_width: usize, pad_char: char, side: Side) -> String {
    let current = wide_length(s);
    // Never truncates; a target at or below the current width is a no-op
    if target_width <= current {
        return s.to_string();
    }
    let deficit = target_width - current;

    let mut out = String::with_capacity(s.len() + deficit);
    match side {
        Side::Start => {
            out.extend(std::iter::repeat(pad_char).take(deficit));
            out.push_str(s);
        }
        Side::End => {
            out.push_str(s);
            out.extend(std::iter::repeat(pad_char).take(deficit));
        }
    }
    out
}

/// Pad the start of a string with `pad_char` until its display width reaches
/// `target_width`, with wide characters in `s` counting as two columns.
///
/// Returns the string unchanged when it is already at or past the target;
/// nothing is ever cut off. `pad_char` is assumed narrow.
pub fn wide_pad_start(s: &str, target_width: usize, pad_char: char) -> String {
    wide_pad(s, target_width, pad_char, Side::Start)
}

/// Pad the end of a string with `pad_char` until its display width reaches
/// `target_width`, with wide characters in `s` counting as two columns.
///
/// Returns the string unchanged when it is already at or past the target;
/// nothing is ever cut off. `pad_char` is assumed narrow.
pub fn wide_pad_end(s: &str, target_width: usize, pad_char: char) -> String {
    wide_pad(s, target_width, pad_char, Side::End)
}
