//! Rule sets: keyword rules, their reply ranges and the shared reply pool.
//!
//! A [`RuleSet`] is the static half of the responder. It is built once by the
//! loader (see `ruleset/loader.rs`) and never changes afterwards; everything
//! that mutates during a conversation (rotation offsets, the previous query)
//! lives in [`Responder`](crate::Responder).
//!
//! ```text
//! rule file ──▶ loader ──▶ RuleSet
//!                           ├─ rules:   [" CAN YOU " 0..=2] [" CAN I " 3..=4] ...
//!                           ├─ replies: ["DON'T YOU BELIEVE THAT I CAN*", ...]
//!                           └─ fallback: index of " NOKEYFOUND "
//! ```
//!
//! ## Invariants
//!
//! - `rules` is in file order, which is also search priority.
//! - Every `ReplyRange` is non-empty and lies inside `replies`.
//! - Keywords are unique.
//! - `fallback` is a valid index into `rules`.

#[path = "ruleset/loader.rs"]
mod loader;
#[cfg(test)]
#[path = "ruleset/tests.rs"]
mod tests;

pub use loader::LoadOptions;

use crate::error::Result;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Keyword used as the universal fallback when no other keyword matches.
pub const FALLBACK_KEYWORD: &str = "NOKEYFOUND";

/// Trailing marker in a reply template asking for the remainder to be spliced in.
pub const WILDCARD: char = '*';

/// Inclusive range of reply indices owned by a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReplyRange {
    pub first: usize,
    pub last: usize,
}

impl ReplyRange {
    /// Number of replies in the range (always at least one).
    pub fn len(&self) -> usize {
        self.last - self.first + 1
    }

    pub fn contains(&self, index: usize) -> bool {
        (self.first..=self.last).contains(&index)
    }
}

/// A keyword rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    keyword: String,
    range: ReplyRange,
    line: usize,
}

impl Rule {
    pub(crate) fn new(keyword: String, range: ReplyRange, line: usize) -> Self {
        Self { keyword, range, line }
    }

    /// The space-padded keyword as it is searched for, e.g. `" MOTHER "`.
    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    /// The keyword without its padding, as written in the rule file.
    pub fn phrase(&self) -> &str {
        &self.keyword[1..self.keyword.len() - 1]
    }

    pub fn range(&self) -> ReplyRange {
        self.range
    }

    /// 1-based line of the rule file the keyword was read from.
    pub fn line(&self) -> usize {
        self.line
    }
}

/// An immutable, validated set of keyword rules and reply templates.
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<Rule>,
    replies: Vec<String>,
    fallback: usize,
}

impl RuleSet {
    pub(crate) fn from_parts(rules: Vec<Rule>, replies: Vec<String>, fallback: usize) -> Self {
        debug_assert!(fallback < rules.len());
        debug_assert!(rules.iter().all(|r| r.range.first <= r.range.last && r.range.last < replies.len()));
        Self { rules, replies, fallback }
    }

    /// Parse a rule file held in memory, using the default fallback keyword.
    pub fn parse(source: &str) -> Result<Self> {
        Self::parse_with(source, &LoadOptions::default())
    }

    /// Parse a rule file held in memory.
    pub fn parse_with(source: &str, options: &LoadOptions) -> Result<Self> {
        Self::from_lines_with(source.lines(), options)
    }

    /// Build a rule set from an iterator of lines.
    pub fn from_lines<I, S>(lines: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::from_lines_with(lines, &LoadOptions::default())
    }

    pub fn from_lines_with<I, S>(lines: I, options: &LoadOptions) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut builder = loader::Builder::new(options);
        for line in lines {
            builder.push_line(line.as_ref())?;
        }
        builder.finish()
    }

    /// Read a rule file from any buffered reader.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let options = LoadOptions::default();
        let mut builder = loader::Builder::new(&options);
        for line in reader.lines() {
            builder.push_line(&line?)?;
        }
        builder.finish()
    }

    /// Read a rule file from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "opening rule file");
        Self::from_reader(BufReader::new(File::open(path)?))
    }

    /// Rules in search order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// The flat reply pool.
    pub fn replies(&self) -> &[String] {
        &self.replies
    }

    /// Reply templates owned by `rule`.
    pub fn replies_for(&self, rule: &Rule) -> &[String] {
        &self.replies[rule.range.first..=rule.range.last]
    }

    /// The fallback rule.
    pub fn fallback(&self) -> &Rule {
        &self.rules[self.fallback]
    }

    pub fn fallback_index(&self) -> usize {
        self.fallback
    }

    /// Look up a rule by its phrase, with or without the surrounding spaces.
    pub fn rule(&self, phrase: &str) -> Option<&Rule> {
        let phrase = phrase.trim();
        self.rules.iter().find(|r| r.phrase() == phrase)
    }

    /// Index of the rule for `phrase` in search order.
    pub fn position(&self, phrase: &str) -> Option<usize> {
        let phrase = phrase.trim();
        self.rules.iter().position(|r| r.phrase() == phrase)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Always false for a loaded rule set; the fallback rule is mandatory.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
