//! Pronoun conjugation of the remainder.
//!
//! Before the remainder is spliced into a reply, first- and second-person
//! words are swapped so "MY MOTHER HATES ME" comes back as "...HATES YOU".
//! The table is applied pair by pair, in order. Each replacement carries a
//! trailing poison marker (`+`) so that a later pair cannot swap back what an
//! earlier pair just wrote (`" I "`→`" YOU+ "` must not then hit `" YOU "`→`" I+ "`).
//! The markers are removed once every pair has run.

use crate::error::{Error, Result};

/// Marker appended to every replacement while the table is being applied.
pub const POISON: char = '+';

const STANDARD: &[(&str, &str)] = &[
    (" ARE ", " AM "),
    (" AM ", " ARE "),
    (" WERE ", " WAS "),
    (" WAS ", " WERE "),
    (" YOU ", " I "),
    (" I ", " YOU "),
    (" YOUR ", " MY "),
    (" MY ", " YOUR "),
    (" IVE ", " YOUVE "),
    (" YOUVE ", " IVE "),
    (" IM ", " YOURE "),
    (" ME ", " YOU "),
    (" US ", " YOU "),
    (" WE ", " YOU "),
    (" YOURSELF ", " MYSELF "),
    (" MYSELF ", " YOURSELF "),
];

/// Ordered `(subject, replacement)` pairs.
///
/// Replacements are stored poisoned: `" AM "` is kept as `" AM+ "`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConjugationTable {
    pairs: Vec<(String, String)>,
}

impl ConjugationTable {
    /// The classic sixteen-pair English table.
    pub fn standard() -> Self {
        Self { pairs: STANDARD.iter().map(|&(subject, replacement)| (subject.to_string(), poison(replacement))).collect() }
    }

    /// Build a table from plain pairs. Replacements are poisoned here; callers
    /// pass them without `+`.
    ///
    /// Subjects are matched literally against the space-padded remainder, so
    /// they are normally written with their own padding (`" MY "`). A subject
    /// with no visible character is rejected.
    pub fn from_pairs<I, S, R>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, R)>,
        S: Into<String>,
        R: AsRef<str>,
    {
        let mut out = Vec::new();
        for (index, (subject, replacement)) in pairs.into_iter().enumerate() {
            let subject = subject.into();
            if subject.trim().is_empty() {
                return Err(Error::InvalidConjugation { index, subject });
            }
            out.push((subject, poison(replacement.as_ref())));
        }
        Ok(Self { pairs: out })
    }

    /// A table that leaves the remainder untouched.
    pub fn empty() -> Self {
        Self { pairs: Vec::new() }
    }

    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(s, r)| (s.as_str(), r.as_str()))
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl Default for ConjugationTable {
    fn default() -> Self {
        Self::standard()
    }
}

/// Insert the poison marker before any trailing padding: `" AM "` → `" AM+ "`.
fn poison(replacement: &str) -> String {
    let body = replacement.trim_end_matches(' ');
    let padding = &replacement[body.len()..];
    format!("{body}{POISON}{padding}")
}

/// Conjugate a remainder.
///
/// Runs every pair of `table` in order, strips the poison markers and turns a
/// sentence-final `" I "` into `" ME "`.
///
/// ```
/// use doctor::{ConjugationTable, conjugate};
///
/// let table = ConjugationTable::standard();
/// assert_eq!(conjugate(" HATES ME ", &table), " HATES YOU ");
/// assert_eq!(conjugate(" ARE YOU OK ", &table), " AM I OK ");
/// assert_eq!(conjugate(" LIKE YOU ", &table), " LIKE ME ");
/// ```
pub fn conjugate(remainder: &str, table: &ConjugationTable) -> String {
    let swapped = table.pairs().fold(remainder.to_string(), |text, (subject, replacement)| {
        replace_rescanning(&text, subject, replacement)
    });
    let cleaned: String = swapped.chars().filter(|&c| c != POISON).collect();
    final_i_to_me(&cleaned)
}

/// Replace every occurrence of `subject`, re-scanning after each replacement.
///
/// Subjects share their padding with their neighbours (`" ARE ARE "` holds
/// two `" ARE "` that overlap on the middle space), so a plain
/// non-overlapping `str::replace` would miss the second one. Scanning resumes
/// at the replacement's trailing padding, which lets that padding serve as the
/// next match's leading space while never matching inside the inserted text.
fn replace_rescanning(text: &str, subject: &str, replacement: &str) -> String {
    let mut out = text.to_string();
    let step = replacement.trim_end_matches(' ').len();
    let mut from = 0;

    while let Some(found) = out[from..].find(subject) {
        let at = from + found;
        out.replace_range(at..at + subject.len(), replacement);
        from = at + step;
    }

    out
}

fn final_i_to_me(text: &str) -> String {
    match text.strip_suffix(" I ") {
        Some(head) => format!("{head} ME "),
        None => text.to_string(),
    }
}
