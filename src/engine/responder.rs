//! The stateful responder.

use super::conjugation::conjugate;
use super::details::{ReplyDetails, ReplyFlags};
use super::matcher::select;
use super::normalization::{is_blank, normalize};
use crate::api::{Options, ResponseVerbose};
use crate::{RuleSet, WILDCARD};
use std::time::Instant;

/// Answers lines of input against a [`RuleSet`].
///
/// A `Responder` owns the conversation state: one rotation offset per rule and
/// the previous normalized query. Offsets start at zero and only move forward
/// (wrapping) as rules are used, so consecutive questions hitting the same rule
/// get different replies. Rules that share a reply range (keywords of one block)
/// always advance together.
///
/// `respond` takes `&mut self`; wrap the responder in a `Mutex` to share it.
///
/// # Example
/// ```
/// use doctor::{Responder, RuleSet};
///
/// let rules = RuleSet::parse("
/// MOTHER
/// !
/// TELL ME MORE ABOUT YOUR FAMILY*
/// .
/// NOKEYFOUND
/// !
/// GO ON.
/// .
/// ").unwrap();
///
/// let mut doctor = Responder::new(rules);
/// assert_eq!(doctor.respond("my mother hates me"), "TELL ME MORE ABOUT YOUR FAMILY HATES YOU?");
/// assert_eq!(doctor.respond("the weather"), "GO ON.");
/// ```
#[derive(Debug, Clone)]
pub struct Responder {
    rules: RuleSet,
    options: Options,
    offsets: Vec<usize>,
    previous: Option<String>,
    repeats: usize,
}

impl Responder {
    pub fn new(rules: RuleSet) -> Self {
        Self::with_options(rules, Options::default())
    }

    pub fn with_options(rules: RuleSet, options: Options) -> Self {
        let offsets = vec![0; rules.len()];
        Self { rules, options, offsets, previous: None, repeats: 0 }
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Current rotation offset of the rule at `index`.
    pub fn rotation(&self, index: usize) -> Option<usize> {
        self.offsets.get(index).copied()
    }

    /// Current rotation offset of the rule for `phrase`.
    pub fn rotation_of(&self, phrase: &str) -> Option<usize> {
        self.rules.position(phrase).and_then(|index| self.rotation(index))
    }

    /// The last normalized query that was not a repeat.
    pub fn previous(&self) -> Option<&str> {
        self.previous.as_deref()
    }

    /// Forget the conversation: rotation offsets, previous query and repeat count.
    pub fn reset(&mut self) {
        self.offsets.iter_mut().for_each(|o| *o = 0);
        self.previous = None;
        self.repeats = 0;
    }

    /// Answer one line of input.
    pub fn respond(&mut self, text: &str) -> String {
        self.answer(text).reply
    }

    /// Answer one line of input and report how the reply was built.
    pub fn respond_verbose(&mut self, text: &str) -> ResponseVerbose {
        let start = Instant::now();
        let details = self.answer(text);
        ResponseVerbose { text: text.to_string(), reply: details.reply.clone(), elapsed: start.elapsed(), details }
    }

    fn answer(&mut self, text: &str) -> ReplyDetails {
        let query = normalize(text);
        let mut details = ReplyDetails::new(query.clone());

        if self.previous.as_deref() == Some(query.as_str()) {
            self.repeats += 1;
            details.flags |= ReplyFlags::REPEAT;
            details.reply = match &self.options.repeat_limit_reply {
                Some(limit) if self.repeats >= 2 => limit.clone(),
                _ => self.options.repeat_reply.clone(),
            };
            tracing::debug!(query = %query, repeats = self.repeats, "repeated input");
            return details;
        }
        self.repeats = 0;
        self.previous = Some(query.clone());

        let selection = select(&self.rules, &query);
        let rule = &self.rules.rules()[selection.rule];
        details.rule = Some(selection.rule);
        details.keyword = Some(rule.phrase().to_string());
        details.match_offset = selection.found.map(|m| m.offset);
        details.remainder = selection.remainder.to_string();

        if selection.is_fallback(&self.rules) {
            details.flags |= ReplyFlags::FALLBACK;
            if let Some(fixed) = &self.options.no_match_reply {
                details.flags |= ReplyFlags::OVERRIDE;
                details.reply = fixed.clone();
                tracing::debug!(query = %query, "no keyword matched, fixed reply");
                return details;
            }
        }

        let before = self.offsets[selection.rule];
        let template = &self.rules.replies()[rule.range().first + before];
        let mut reply = template.clone();

        if template.ends_with(WILDCARD) {
            details.flags |= ReplyFlags::WILDCARD;
            if !is_blank(selection.remainder) {
                let conjugated = conjugate(selection.remainder, &self.options.conjugations);
                reply.pop();
                reply.push_str(&conjugated);
                details.flags |= ReplyFlags::SPLICED;
                details.conjugated = Some(conjugated);
            } else if self.options.drop_unfilled_wildcard {
                reply.pop();
            }
            if reply.ends_with(' ') {
                reply.pop();
            }
            reply.push('?');
        }

        details.template = Some(template.clone());
        details.rotation_before = before;
        let (after, synced) = self.advance(selection.rule);
        details.rotation_after = after;
        details.synced = synced;

        tracing::debug!(
            query = %details.query,
            keyword = details.keyword.as_deref().unwrap_or_default(),
            remainder = %details.remainder,
            reply = %reply,
            rotation = after,
            "answered"
        );

        details.reply = reply;
        details
    }

    /// Move the rule at `index` to its next reply, wrapping at the end of its
    /// range, and copy the new offset to every rule sharing the range start.
    /// Returns the new offset and how many other rules were synced.
    fn advance(&mut self, index: usize) -> (usize, usize) {
        let range = self.rules.rules()[index].range();
        let mut next = self.offsets[index] + 1;
        if range.first + next > range.last {
            next = 0;
        }
        self.offsets[index] = next;

        let mut synced = 0;
        for (i, rule) in self.rules.rules().iter().enumerate() {
            if i != index && rule.range().first == range.first {
                self.offsets[i] = next;
                synced += 1;
            }
        }
        (next, synced)
    }
}

impl Default for Responder {
    /// A responder over the bundled rule set with default options.
    fn default() -> Self {
        Self::new(crate::bundled_rules().clone())
    }
}
