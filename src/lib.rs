//! zenkaku-str - Wide-character-aware string operations for fixed-width output
//!
//! In CJK (Chinese, Japanese and Korean) text, "wide" or "fullwidth"
//! characters are Unicode glyphs that get printed as two blocks wide instead
//! of one when using a fixed-width font. Examples include the Japanese kana
//! (あいうえお), full-width romaji (ＡＢＣＤＥ) and kanji/hanzi ideographs
//! (一所懸命). These characters occupy two terminal columns but count as one
//! in a character count, so a plain `.chars().count()` makes strings
//! containing them appear shorter than they render, breaking tabulated
//! layouts.
//!
//! This crate provides the usual length, search, slice and pad operations
//! with indices counted in display columns instead of characters.
//!
//! # Measuring
//! ```
//! use zenkaku_str::wide_length;
//!
//! assert_eq!(wide_length("あばよ"), 6);
//! assert_eq!(wide_length("abc"), 3);
//! ```
//!
//! # Searching
//! ```
//! use zenkaku_str::{wide_index_of, wide_last_index_of};
//!
//! assert_eq!(wide_index_of("abcあばよxyz", "ば", 0), Some(5));
//! assert_eq!(wide_last_index_of("あばよあばよ", "あ", None), Some(6));
//! ```
//!
//! # Slicing
//! ```
//! use zenkaku_str::wide_slice;
//!
//! // Column 1 is the middle of あ; it cannot be split, so a padding
//! // character stands in for the missing half.
//! assert_eq!(wide_slice("あaaえaa", 1, Some(2), '!'), "!");
//! assert_eq!(wide_slice("あaaえaa", 2, Some(5), '!'), "aa!");
//! ```
//!
//! # Padding
//! ```
//! use zenkaku_str::{wide_pad_end, wide_pad_start};
//!
//! assert_eq!(wide_pad_start("abc", 5, '-'), "--abc");
//! assert_eq!(wide_pad_start("あ", 3, '-'), "-あ");
//! assert_eq!(wide_pad_end("あ", 3, '-'), "あ-");
//! ```

mod char_at;
mod charset;
mod index_of;
mod length;
mod pad;
mod slice;

pub use char_at::wide_char_at;
pub use charset::{is_wide, width_of, WidthClass, FULLWIDTH_RANGES, WIDE_RANGES};
pub use index_of::{wide_index_of, wide_last_index_of};
pub use length::{wide_length, wide_length_opt};
pub use pad::{wide_pad_end, wide_pad_start};
pub use slice::wide_slice;
