//! Substring search reporting positions in display columns.
//!
//! Matching itself is plain character equality; the widths of the matched
//! characters are irrelevant. Widths only determine the reported position:
//! every wide character before the match shifts it one extra column right.

use crate::charset::is_wide;
use crate::length::wide_length;

/// Shared scan behind [`wide_index_of`] and [`wide_last_index_of`].
///
/// Walks raw positions left to right, carrying the running wide-character
/// count so the display index at each step is `raw + wide_count`. The
/// first-match mode returns as soon as a match at or past the bound is seen.
/// The last-match mode never returns early: it records the most recent match
/// at or before the bound and keeps walking until the bound is passed or the
/// input runs out, which reproduces an end-to-start search in a single
/// forward pass.
fn locate(s: &str, pattern: &str, bound: Option<usize>, find_first: bool) -> Option<usize> {
    let chars: Vec<char> = s.chars().collect();
    let pat: Vec<char> = pattern.chars().collect();

    if pat.len() > chars.len() {
        return None;
    }

    // The empty pattern matches everywhere, so mirror the native substring
    // search convention: the bound clamps to the total display length.
    let bound = if pat.is_empty() {
        bound.map(|b| b.min(wide_length(s)))
    } else {
        bound
    };

    // No point scanning past input length minus pattern length.
    let last_pos = chars.len() - pat.len();

    let mut candidate = None;
    let mut pos = 0;
    let mut display = 0;

    loop {
        if chars[pos..pos + pat.len()] == pat[..] {
            if find_first {
                if bound.map_or(true, |b| display >= b) {
                    return Some(display);
                }
            } else if bound.map_or(true, |b| display <= b) {
                candidate = Some(display);
            }
        }

        if pos >= last_pos {
            break;
        }
        // A last-match search would normally start at the bound and walk
        // backwards; going past it in a forward pass is pointless.
        if !find_first {
            if let Some(b) = bound {
                if display >= b {
                    break;
                }
            }
        }

        display += if is_wide(chars[pos]) { 2 } else { 1 };
        pos += 1;
    }

    candidate
}

/// Return the display index of the first occurrence of `pattern` in `s` at
/// or after display column `start_idx`, or `None` if there is none.
///
/// Display-column counterpart of [`str::find`]: the same matches are found,
/// but positions are reported in terminal columns with wide characters
/// counting as two.
pub fn wide_index_of(s: &str, pattern: &str, start_idx: usize) -> Option<usize> {
    locate(s, pattern, Some(start_idx), true)
}

/// Return the display index of the last occurrence of `pattern` in `s` at or
/// before display column `end_idx`, or `None` if there is none.
///
/// `end_idx = None` means unbounded, searching the whole string.
pub fn wide_last_index_of(s: &str, pattern: &str, end_idx: Option<usize>) -> Option<usize> {
    locate(s, pattern, end_idx, false)
}
