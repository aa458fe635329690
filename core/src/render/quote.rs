use core::fmt;

use unicode_properties::{GeneralCategoryGroup, UnicodeGeneralCategory};

/// Write `s` as a double-quoted string literal.
///
/// Uses the escapes of the rendered syntax: the named single-letter escapes,
/// `\xNN` for other ASCII control bytes, and `\uNNNN` or `\UNNNNNNNN` for any
/// other character that is not printable. Printable means a letter, mark,
/// number, punctuation or symbol, plus the ASCII space; other separators,
/// format characters, private-use and unassigned code points are escaped so
/// the literal stays on one line.
pub(crate) fn quote(f: &mut impl fmt::Write, s: &str) -> fmt::Result {
    f.write_char('"')?;
    for ch in s.chars() {
        match ch {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\u{07}' => f.write_str("\\a")?,
            '\u{08}' => f.write_str("\\b")?,
            '\u{0c}' => f.write_str("\\f")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            '\u{0b}' => f.write_str("\\v")?,
            c if c.is_ascii_control() => write!(f, "\\x{:02x}", c as u32)?,
            c if is_printable(c) => f.write_char(c)?,
            c if (c as u32) < 0x10000 => write!(f, "\\u{:04x}", c as u32)?,
            c => write!(f, "\\U{:08x}", c as u32)?,
        }
    }
    f.write_char('"')
}

fn is_printable(c: char) -> bool {
    c == ' '
        || matches!(
            c.general_category_group(),
            GeneralCategoryGroup::Letter
                | GeneralCategoryGroup::Mark
                | GeneralCategoryGroup::Number
                | GeneralCategoryGroup::Punctuation
                | GeneralCategoryGroup::Symbol
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::String;
    use pretty_assertions::assert_eq;

    fn quoted(s: &str) -> String {
        let mut out = String::new();
        quote(&mut out, s).unwrap();
        out
    }

    #[test]
    fn test_plain() {
        assert_eq!(quoted("db:\"id\""), r#""db:\"id\"""#);
        assert_eq!(quoted("héllo"), "\"héllo\"");
        assert_eq!(quoted("a b"), r#""a b""#);
        assert_eq!(quoted("日本語 😀"), "\"日本語 😀\"");
    }

    #[test]
    fn test_escapes() {
        assert_eq!(quoted("a\tb\n"), r#""a\tb\n""#);
        assert_eq!(quoted("\\"), r#""\\""#);
        assert_eq!(quoted("\u{1b}"), r#""\x1b""#);
        assert_eq!(quoted("\u{7f}"), r#""\x7f""#);
        assert_eq!(quoted("\u{85}"), r#""\u0085""#);
    }

    #[test]
    fn test_escapes_invisible_characters() {
        // no-break space, line separator, zero-width space
        assert_eq!(
            quoted("a\u{00a0}b\u{2028}c\u{200b}"),
            r#""a\u00a0b\u2028c\u200b""#
        );
        assert_eq!(quoted("\u{2029}\u{feff}"), r#""\u2029\ufeff""#);
        // private use, in and above the basic plane
        assert_eq!(quoted("\u{e000}"), r#""\ue000""#);
        assert_eq!(quoted("\u{f0000}"), r#""\U000f0000""#);
        // unassigned
        assert_eq!(quoted("\u{10ffff}"), r#""\U0010ffff""#);
    }

    #[test]
    fn test_output_is_single_line() {
        let out = quoted("x\u{2028}y\u{0085}z\n");
        assert!(!out.contains('\u{2028}'));
        assert!(!out.contains('\u{0085}'));
        assert!(!out.contains('\n'));
    }
}
