//! Display length measurement with wide characters counting as two columns.

use crate::charset::is_wide;

/// Return the display length of a string, with wide/fullwidth characters
/// counting for two columns.
///
/// For example, `"aiueoあいうえお"` measures 15: 5 for the ASCII `aiueo` and
/// 10 for the kana, which occupy two columns each. Computed in a single pass
/// over the string with no allocation.
pub fn wide_length(s: &str) -> usize {
    let mut columns = 0;
    for c in s.chars() {
        columns += if is_wide(c) { 2 } else { 1 };
    }
    columns
}

/// Forgiving variant of [`wide_length`] for possibly-absent input.
///
/// Returns `None` when there is no string to measure, rather than forcing the
/// caller to unwrap first. Useful when reading cells out of sparse table data.
pub fn wide_length_opt(s: Option<&str>) -> Option<usize> {
    s.map(wide_length)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_characters() {
        assert_eq!(wide_length(""), 0);
        assert_eq!(wide_length("asdf"), 4);
        assert_eq!(
            wide_length("Lorem ipsum dolor sit amet, consectetur adipiscing elit."),
            56
        );
    }

    #[test]
    fn test_japanese_kana() {
        assert_eq!(wide_length("this string ではカタカナがもちいる"), 34);
        assert_eq!(wide_length("this string あいうえおヵヶゕゖあい"), 34);
        assert_eq!(wide_length("this string ぁぃぅぇぉァィゥェォゞ"), 34);
        assert_eq!(wide_length("ァ..ヾ"), 6);
        assert_eq!(
            wide_length("this string ではカタカナがもちいる"),
            wide_length("this string 0011001100110011001100")
        );
        assert_eq!(wide_length("カタカナ"), 8);
    }

    #[test]
    fn test_japanese_kanji() {
        assert_eq!(wide_length("this string ではカタカナが用いる"), 32);
        assert_eq!(
            wide_length("this string ではカタカナが用いる"),
            wide_length("this string 00110011001100110011")
        );
        assert_eq!(wide_length("鳥"), 2);
    }

    #[test]
    fn test_halfwidth_katakana_counts_single() {
        assert_eq!(wide_length("オハヨウゴザイマス"), 18);
        // Note the extra column for the separate dakuten code points
        assert_eq!(wide_length("ｵﾊﾖｳｺﾞｻﾞｲﾏｽ"), wide_length("00110011001"));
        assert_ne!(wide_length("ｵﾊﾖｳｺﾞｻﾞｲﾏｽ"), wide_length("オハヨウゴザイマス"));
    }

    #[test]
    fn test_cjk_unified_ideographs() {
        assert_eq!(wide_length("一龥"), 4);
    }

    #[test]
    fn test_ideographic_symbols_and_punctuation() {
        assert_eq!(wide_length("\u{3000}"), 2); // ideographic space
        assert_eq!(wide_length("、。【】"), 8);
    }

    #[test]
    fn test_hangul_jamo() {
        assert_eq!(wide_length("ᄀᄁᄂᄃᄄᄅᄆᄇ"), 16);
        assert_eq!(wide_length("ㄱ..ㆎ"), 6);
    }

    #[test]
    fn test_hangul_syllables() {
        assert_eq!(wide_length("가각갂갃간갅갆갇갈갉갊갋갌갍갎갏"), 32);
        assert_eq!(wide_length("뀀뀁뀂뀃뀄뀅뀆뀇뀈뀉뀊뀋뀌뀍뀎뀏"), 32);
        assert_eq!(wide_length("쀀쀁쀂쀃쀄쀅쀆쀇쀈쀉쀊쀋쀌쀍쀎쀏"), 32);
        assert_eq!(wide_length("퀀퀁퀂퀃퀄퀅퀆퀇퀈퀉퀊퀋퀌퀍퀎퀏"), 32);
    }

    #[test]
    fn test_kanbun() {
        assert_eq!(wide_length("㆐..㆟"), 6);
        assert_eq!(wide_length("㆐㆑㆒㆓㆔㆕㆖㆗㆘㆙㆚㆛㆜㆝㆞㆟"), 32);
    }

    #[test]
    fn test_parenthesized_and_circled() {
        assert_eq!(wide_length("㈀..㈜㈠..㉃㉠..㊰"), 18);
    }

    #[test]
    fn test_compatibility_and_enclosed() {
        assert_eq!(wide_length("㍻㋀㏠豈鶴"), 10);
    }

    #[test]
    fn test_fullwidth_symbols_and_punctuation() {
        assert_eq!(wide_length("︰..﹄﹉..﹒﹔..﹫！..～￠..￦"), 30);
    }

    #[test]
    fn test_length_never_below_char_count() {
        for s in ["", "abc", "あばよ", "abcあばよxyz", "ｵﾊﾖｳ"] {
            assert!(wide_length(s) >= s.chars().count());
        }
        assert_eq!(wide_length("abc"), "abc".chars().count());
        assert_ne!(wide_length("あ"), "あ".chars().count());
    }

    #[test]
    fn test_absent_input() {
        assert_eq!(wide_length_opt(None), None);
        assert_eq!(wide_length_opt(Some("あばよ")), Some(6));
        assert_eq!(wide_length_opt(Some("")), Some(0));
    }
}
