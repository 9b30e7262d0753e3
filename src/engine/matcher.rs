//! Keyword search.
//!
//! Rules are tried in file order and the first keyword that occurs anywhere in
//! the query wins, regardless of where in the query it occurs. Rule order in the
//! file is therefore the only tie-break: put `CAN YOU` before `YOU`.

use crate::RuleSet;

/// A keyword occurrence in a normalized query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordMatch {
    /// Index of the matched rule in [`RuleSet::rules`].
    pub rule: usize,
    /// Byte offset of the keyword (including its leading space) in the query.
    pub offset: usize,
}

/// Find the first rule, in search order, whose keyword occurs in `query`.
pub fn find_keyword(rules: &RuleSet, query: &str) -> Option<KeywordMatch> {
    rules
        .rules()
        .iter()
        .enumerate()
        .find_map(|(rule, r)| query.find(r.keyword()).map(|offset| KeywordMatch { rule, offset }))
}

/// The rule chosen for a query and the text following its keyword.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection<'q> {
    pub rule: usize,
    /// The keyword occurrence, when a keyword matched at all.
    pub found: Option<KeywordMatch>,
    /// Query text from the keyword's trailing space to the end; empty for the
    /// fallback rule.
    pub remainder: &'q str,
}

impl Selection<'_> {
    pub fn is_fallback(&self, rules: &RuleSet) -> bool {
        self.rule == rules.fallback_index()
    }
}

/// Select the rule for `query`, defaulting to the fallback rule.
///
/// The remainder keeps the keyword's trailing space so it starts on a word
/// boundary, e.g. `" MY MOTHER HATES ME "` with `" MOTHER "` gives
/// `" HATES ME "`.
pub fn select<'q>(rules: &RuleSet, query: &'q str) -> Selection<'q> {
    match find_keyword(rules, query) {
        Some(found) if found.rule != rules.fallback_index() => {
            let keyword = rules.rules()[found.rule].keyword();
            let start = found.offset + keyword.len() - 1;
            Selection { rule: found.rule, found: Some(found), remainder: &query[start..] }
        }
        found => Selection { rule: rules.fallback_index(), found, remainder: "" },
    }
}
