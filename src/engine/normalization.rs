//! Input normalization.
//!
//! Keywords are matched as space-padded substrings, so the query is reduced to
//! a canonical alphabet first: ASCII uppercase letters, digits and spaces.
//! Anything else (punctuation, tabs, apostrophes, non-ASCII) is dropped rather
//! than replaced, which is why rule files spell `DON'T` as `DONT`.

/// Normalize a raw input line into a query.
///
/// ```
/// assert_eq!(doctor::normalize("Hi, Doctor!!"), " HI DOCTOR ");
/// assert_eq!(doctor::normalize(""), "  ");
/// ```
pub fn normalize(input: &str) -> String {
    let upper = input.to_ascii_uppercase();
    let cleaned = regex!(r"[^A-Z0-9 ]+").replace_all(&upper, "");
    format!(" {cleaned} ")
}

/// A remainder that carries no words: empty or a lone space.
pub(crate) fn is_blank(remainder: &str) -> bool {
    remainder.is_empty() || remainder == " "
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_examples() {
        let cases: Vec<(&str, &str)> = vec![
            ("Hi, Doctor!!", " HI DOCTOR "),
            ("my mother hates me", " MY MOTHER HATES ME "),
            ("I'm sad.", " IM SAD "),
            ("  two  spaces ", "   TWO  SPACES  "),
            ("tab\tseparated", " TABSEPARATED "),
            ("route 66", " ROUTE 66 "),
            ("café au lait", " CAF AU LAIT "),
            ("???", "  "),
        ];

        for (input, expected) in cases {
            assert_eq!(normalize(input), expected, "input {:?}", input);
        }
    }

    #[test]
    fn blank_remainders() {
        assert!(is_blank(""));
        assert!(is_blank(" "));
        assert!(!is_blank("  "));
        assert!(!is_blank(" HATES ME "));
    }
}
