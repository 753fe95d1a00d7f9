//! Thousands-separator grouping for money input fields.
//!
//! Reformatting an input field while the user types moves the caret, so the
//! grouping pass also reports where the caret lands in the reformatted text.
//! Only ASCII digit content is meaningful here; everything else is stripped.

/// Insert `,` separators every three digits, dropping any non-digit input.
///
/// ```rust
/// use fapiao::core::group_digits;
///
/// assert_eq!(group_digits("1234567"), "1,234,567");
/// assert_eq!(group_digits("1,234a"), "1,234");
/// assert_eq!(group_digits(""), "");
/// ```
pub fn group_digits(raw: &str) -> String {
    group_digits_with_caret(raw, 0).0
}

/// Insert separators and translate a caret position into the new text.
///
/// `caret` is a character index into `raw`; the returned index points at the
/// equivalent spot in the grouped output. Stripped characters before the
/// caret pull it left; inserted separators before it push it right, except
/// that the caret is never pushed to sit immediately after a separator it
/// was already touching.
pub fn group_digits_with_caret(raw: &str, caret: usize) -> (String, usize) {
    let mut offset: isize = 0;
    let mut digits = Vec::new();

    for (i, c) in raw.chars().enumerate() {
        if c.is_ascii_digit() {
            digits.push(c);
        } else if i < caret {
            offset -= 1;
        }
    }

    let mut out = String::new();
    for (i, &c) in digits.iter().enumerate() {
        out.push(c);
        // Separator after every third digit counted from the right,
        // but never trailing.
        if i != digits.len() - 1 && (digits.len() - 1 - i) % 3 == 0 {
            if i < caret && out.chars().count() as isize != caret as isize + offset {
                offset += 1;
            }
            out.push(',');
        }
    }

    let new_caret = (caret as isize + offset).clamp(0, out.chars().count() as isize) as usize;
    (out, new_caret)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_from_the_right() {
        assert_eq!(group_digits("1"), "1");
        assert_eq!(group_digits("12"), "12");
        assert_eq!(group_digits("123"), "123");
        assert_eq!(group_digits("1234"), "1,234");
        assert_eq!(group_digits("123456"), "123,456");
        assert_eq!(group_digits("1234567"), "1,234,567");
    }

    #[test]
    fn strips_existing_separators_and_junk() {
        assert_eq!(group_digits("1,234,567"), "1,234,567");
        assert_eq!(group_digits("12ab34"), "1,234");
        assert_eq!(group_digits("NT$"), "");
    }

    #[test]
    fn caret_at_end_follows_inserted_separator() {
        // typing the 4th digit: "1234|" → "1,234|"
        let (out, caret) = group_digits_with_caret("1234", 4);
        assert_eq!(out, "1,234");
        assert_eq!(caret, 5);
    }

    #[test]
    fn caret_unchanged_when_nothing_inserted_before_it() {
        // "1|23" → "123", separatorless
        let (out, caret) = group_digits_with_caret("123", 1);
        assert_eq!(out, "123");
        assert_eq!(caret, 1);
    }

    #[test]
    fn caret_pulled_left_by_stripped_characters() {
        // "1,2|34" — the comma before the caret disappears on re-strip
        let (out, caret) = group_digits_with_caret("1,234,5", 3);
        assert_eq!(out, "12,345");
        assert_eq!(caret, 2);
    }

    #[test]
    fn empty_input() {
        let (out, caret) = group_digits_with_caret("", 0);
        assert_eq!(out, "");
        assert_eq!(caret, 0);
    }
}
