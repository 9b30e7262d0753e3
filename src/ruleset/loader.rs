//! Line-oriented rule file loader.
//!
//! The file is a sequence of blocks. Each block lists keywords, then a `!`
//! line, then reply templates, and ends with a `.` line:
//!
//! ```text
//! // comment
//! I AM
//! IM
//! !
//! DID YOU COME TO ME BECAUSE YOU ARE*
//! HOW LONG HAVE YOU BEEN*
//! .
//! ```
//!
//! Every keyword of a block gets the same reply range, which is how synonyms
//! end up rotating in lockstep. Lines are trimmed; blank lines and `//`
//! comments are skipped. Only the first character of a line decides whether it
//! is a `!` or `.` marker.

use super::{FALLBACK_KEYWORD, ReplyRange, Rule, RuleSet};
use crate::error::{Error, Result};
use std::collections::HashSet;

/// Options controlling how a rule file is interpreted.
#[derive(Debug, Clone)]
pub struct LoadOptions {
    /// Keyword (as written in the file) of the rule used when nothing matches.
    pub fallback_keyword: String,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self { fallback_keyword: FALLBACK_KEYWORD.to_string() }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Keywords,
    Replies,
}

/// Incremental loader state. Feed it lines with [`Builder::push_line`], then
/// call [`Builder::finish`].
pub(super) struct Builder<'o> {
    options: &'o LoadOptions,
    mode: Mode,
    line_no: usize,
    rules: Vec<Rule>,
    replies: Vec<String>,
    seen: HashSet<String>,
    /// Keywords of the open block with the line they were read from.
    pending: Vec<(String, usize)>,
    /// First reply slot of the open block.
    block_first: usize,
    /// Line of the first keyword/reply of the open block, if it has any.
    open_since: Option<usize>,
    closed_blocks: usize,
}

impl<'o> Builder<'o> {
    pub(super) fn new(options: &'o LoadOptions) -> Self {
        Self {
            options,
            mode: Mode::Keywords,
            line_no: 0,
            rules: Vec::new(),
            replies: Vec::new(),
            seen: HashSet::new(),
            pending: Vec::new(),
            block_first: 0,
            open_since: None,
            closed_blocks: 0,
        }
    }

    pub(super) fn push_line(&mut self, raw: &str) -> Result<()> {
        self.line_no += 1;
        let line = raw.trim();

        if line.is_empty() || line.starts_with("//") {
            return Ok(());
        }

        if line.starts_with('!') {
            self.mode = Mode::Replies;
            return Ok(());
        }

        if line.starts_with('.') {
            return self.close_block();
        }

        self.open_since.get_or_insert(self.line_no);
        match self.mode {
            Mode::Keywords => self.pending.push((format!(" {line} "), self.line_no)),
            Mode::Replies => self.replies.push(line.to_string()),
        }
        Ok(())
    }

    fn close_block(&mut self) -> Result<()> {
        let first = self.block_first;
        let end = self.replies.len();

        if end == first {
            if let Some((keyword, _)) = self.pending.first() {
                return Err(Error::EmptyReplies { line: self.line_no, keyword: keyword.trim().to_string() });
            }
        } else if self.pending.is_empty() {
            tracing::warn!(line = self.line_no, replies = end - first, "block has replies but no keywords");
        }

        let range = ReplyRange { first, last: end.saturating_sub(1) };
        for (keyword, line) in self.pending.drain(..) {
            if !self.seen.insert(keyword.clone()) {
                tracing::warn!(line, keyword = keyword.trim(), "duplicate keyword ignored");
                continue;
            }
            self.rules.push(Rule::new(keyword, range, line));
        }

        self.block_first = end;
        self.mode = Mode::Keywords;
        self.open_since = None;
        self.closed_blocks += 1;
        Ok(())
    }

    pub(super) fn finish(self) -> Result<RuleSet> {
        if self.closed_blocks == 0 {
            return Err(Error::NoBlocks);
        }
        if let Some(line) = self.open_since {
            return Err(Error::UnterminatedBlock { line });
        }

        let sentinel = format!(" {} ", self.options.fallback_keyword);
        let fallback = self
            .rules
            .iter()
            .position(|r| r.keyword() == sentinel)
            .ok_or_else(|| Error::MissingFallback { keyword: self.options.fallback_keyword.clone() })?;

        tracing::info!(
            rules = self.rules.len(),
            replies = self.replies.len(),
            blocks = self.closed_blocks,
            "loaded rule set"
        );

        Ok(RuleSet::from_parts(self.rules, self.replies, fallback))
    }
}
