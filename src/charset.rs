//! Fixed table of Unicode ranges that terminals display two columns wide.
//!
//! The ranges are defined by their East Asian Width classification, either
//! W (wide) or F (fullwidth). Source: <https://www.unicode.org/reports/tr11/>

/// Display width class of a single character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidthClass {
    /// Occupies one terminal column
    Narrow,
    /// Occupies two terminal columns
    Wide,
}

impl WidthClass {
    /// Number of terminal columns this class occupies
    pub fn columns(self) -> usize {
        match self {
            WidthClass::Narrow => 1,
            WidthClass::Wide => 2,
        }
    }
}

/// Inclusive code-point ranges with East Asian Width class W
pub const WIDE_RANGES: [(char, char); 17] = [
    // ᄀ..ᇹ; HANGUL CHOSEONG KIYEOK..HANGUL JONGSEONG YEORINHIEUH
    ('\u{1100}', '\u{11F9}'),
    // 　..〿; IDEOGRAPHIC SPACE..IDEOGRAPHIC HALF FILL SPACE
    ('\u{3000}', '\u{303F}'),
    // ぁ..ゖ; HIRAGANA LETTER SMALL A..HIRAGANA LETTER SMALL KE
    // Extended past HIRAGANA LETTER VU (U+3094) to cover small ka/ke
    ('\u{3041}', '\u{3096}'),
    // ゙..ゞ; COMBINING KATAKANA-HIRAGANA VOICED SOUND MARK..HIRAGANA VOICED ITERATION MARK
    ('\u{3099}', '\u{309E}'),
    // ァ..ヾ; KATAKANA LETTER SMALL A..KATAKANA VOICED ITERATION MARK
    ('\u{30A1}', '\u{30FE}'),
    // ㄱ..ㆎ; HANGUL LETTER KIYEOK..HANGUL LETTER ARAEAE
    ('\u{3131}', '\u{318E}'),
    // ㆐..㆟; IDEOGRAPHIC ANNOTATION LINKING MARK..IDEOGRAPHIC ANNOTATION MAN MARK
    ('\u{3190}', '\u{319F}'),
    // ㈀..㈜; PARENTHESIZED HANGUL KIYEOK..PARENTHESIZED HANGUL CIEUC U
    ('\u{3200}', '\u{321C}'),
    // ㈠..㉃; PARENTHESIZED IDEOGRAPH ONE..PARENTHESIZED IDEOGRAPH REACH
    ('\u{3220}', '\u{3243}'),
    // ㉠..㊰; CIRCLED HANGUL KIYEOK..CIRCLED IDEOGRAPH NIGHT
    ('\u{3260}', '\u{32B0}'),
    // ㋀..㍶; IDEOGRAPHIC TELEGRAPH SYMBOL FOR JANUARY..SQUARE PC
    ('\u{32C0}', '\u{3376}'),
    // ㍻..㏝; SQUARE ERA NAME HEISEI..SQUARE WB
    ('\u{337B}', '\u{33DD}'),
    // ㏠..㏾; IDEOGRAPHIC TELEGRAPH SYMBOL FOR DAY ONE..DAY THIRTY-ONE
    ('\u{33E0}', '\u{33FE}'),
    // 一..龥; CJK Unified Ideographs
    ('\u{4E00}', '\u{9FA5}'),
    // 가..힣; Hangul Syllables
    ('\u{AC00}', '\u{D7A3}'),
    // Private Use block commonly mapped to wide glyphs
    ('\u{E000}', '\u{E757}'),
    // 豈..鶴; CJK COMPATIBILITY IDEOGRAPH-F900..CJK COMPATIBILITY IDEOGRAPH-FA2D
    ('\u{F900}', '\u{FA2D}'),
];

/// Inclusive code-point ranges with East Asian Width class F
pub const FULLWIDTH_RANGES: [(char, char); 5] = [
    // ︰..﹄; PRESENTATION FORM FOR VERTICAL TWO DOT LEADER..VERTICAL RIGHT WHITE CORNER BRACKET
    ('\u{FE30}', '\u{FE44}'),
    // ﹉..﹒; DASHED OVERLINE..SMALL FULL STOP
    ('\u{FE49}', '\u{FE52}'),
    // ﹔..﹫; SMALL SEMICOLON..SMALL COMMERCIAL AT
    ('\u{FE54}', '\u{FE6B}'),
    // ！..～; FULLWIDTH EXCLAMATION MARK..FULLWIDTH TILDE
    ('\u{FF01}', '\u{FF5E}'),
    // ￠..￦; FULLWIDTH CENT SIGN..FULLWIDTH WON SIGN
    ('\u{FFE0}', '\u{FFE6}'),
];

/// Binary search for `c` in a sorted, non-overlapping range table
fn in_ranges(ranges: &[(char, char)], c: char) -> bool {
    ranges
        .binary_search_by(|&(lo, hi)| {
            if hi < c {
                std::cmp::Ordering::Less
            } else if lo > c {
                std::cmp::Ordering::Greater
            } else {
                std::cmp::Ordering::Equal
            }
        })
        .is_ok()
}

/// Check whether a character is rendered two columns wide.
///
/// Membership test against the fixed W/F tables; O(log R) over the
/// R = 22 ranges.
pub fn is_wide(c: char) -> bool {
    in_ranges(&WIDE_RANGES, c) || in_ranges(&FULLWIDTH_RANGES, c)
}

/// Return the display width class of a character.
pub fn width_of(c: char) -> WidthClass {
    if is_wide(c) {
        WidthClass::Wide
    } else {
        WidthClass::Narrow
    }
}
