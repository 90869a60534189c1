//! Display-column slicing, the core of the crate.
//!
//! Indices here address terminal columns, not characters, so an index can
//! land in the middle of a two-column character. A wide character cannot be
//! split in half: this algorithm leaves the halved character out and
//! substitutes a single padding column in its place, so that the resulting
//! string never exceeds the requested width. The result can instead come up
//! short by at most one column per boundary.

use crate::charset::is_wide;
use crate::length::wide_length;

/// Clamp a possibly-negative index into `[0, total]`, counting negative
/// values from the end as `str.slice()`-style APIs do.
fn normalize(idx: isize, total: usize) -> usize {
    if idx < 0 {
        idx.saturating_add(total as isize).max(0) as usize
    } else {
        (idx as usize).min(total)
    }
}

/// Slice a string by display-column range, with wide characters counting
/// as two columns.
///
/// `start_idx` and `end_idx` follow the usual slice conventions: negative
/// values count back from the total display length, out-of-range values
/// clamp, and an empty or inverted range yields `""`. `end_idx = None`
/// slices to the end of the string.
///
/// When a boundary falls on the second column of a wide character, that
/// character is left out entirely and one `pad_char` takes its place at the
/// affected edge, keeping tabular output aligned:
///
/// ```
/// use zenkaku_str::wide_slice;
///
/// assert_eq!(wide_slice("あaaえaa", 2, Some(6), ' '), "aaえ");
/// // Column 5 is the middle of え, which cannot be split
/// assert_eq!(wide_slice("あaaえaa", 2, Some(5), '!'), "aa!");
/// ```
pub fn wide_slice(s: &str, start_idx: isize, end_idx: Option<isize>, pad_char: char) -> String {
    let chars: Vec<char> = s.chars().collect();
    let total = wide_length(s);

    let start = normalize(start_idx, total);
    let end = normalize(end_idx.unwrap_or(total as isize), total);

    // Empty or inverted range, same as str.slice()
    if start >= end {
        return String::new();
    }

    // Fast path: no wide characters means display columns and raw positions
    // coincide, so a plain character-range slice is correct.
    if !chars.iter().copied().any(is_wide) {
        return chars[start..end].iter().collect();
    }

    let mut wide_count = 0;

    // Raw character range the display range maps onto, plus whether each
    // boundary cut a wide character in half.
    let mut real_start = if start == 0 { Some(0) } else { None };
    let mut real_end = None;
    let mut pad_start = false;
    let mut pad_end = false;

    for (raw, &c) in chars.iter().enumerate() {
        if !is_wide(c) {
            continue;
        }
        // Display column of this wide character's first half
        let wide_idx = raw + wide_count;

        if real_start.is_none() {
            if wide_idx >= start {
                real_start = Some(start - wide_count);
            } else if wide_idx + 1 == start {
                // Start addresses the second half: skip the character
                real_start = Some(start - wide_count);
                pad_start = true;
            }
        }
        if real_end.is_none() {
            if wide_idx >= end {
                real_end = Some(end - wide_count);
            } else if wide_idx + 1 == end {
                // End addresses the second half: stop before the character
                real_end = Some(end - wide_count - 1);
                pad_end = true;
            }
        }
        if real_start.is_some() && real_end.is_some() {
            break;
        }
        wide_count += 1;
    }

    // Boundaries past the last wide character resolve against the final count
    let real_start = real_start.unwrap_or_else(|| start - wide_count);
    let real_end = real_end.unwrap_or_else(|| end - wide_count);

    let mut out = String::with_capacity(end - start);
    if pad_start {
        out.push(pad_char);
    }
    out.extend(chars[real_start..real_end].iter());
    if pad_end {
        out.push(pad_char);
    }
    out
}
