//! Per-call trace.
//!
//! [`Responder::respond`](crate::Responder::respond) only returns the reply.
//! [`Responder::respond_verbose`](crate::Responder::respond_verbose) also
//! returns a [`ReplyDetails`] describing how that reply was built, for the CLI
//! `--verbose` report and for tests that need to look inside a step.

bitflags::bitflags! {
    /// What happened while building a reply.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ReplyFlags: u8 {
        /// The query repeated the previous one; nothing else ran.
        const REPEAT   = 1 << 0;
        /// No keyword matched (or the sentinel itself did); the fallback rule was used.
        const FALLBACK = 1 << 1;
        /// The template ended in the wildcard marker.
        const WILDCARD = 1 << 2;
        /// A remainder was conjugated and spliced into the template.
        const SPLICED  = 1 << 3;
        /// A fixed reply from `Options` replaced the rule's reply.
        const OVERRIDE = 1 << 4;
    }
}

/// How one reply was produced.
#[derive(Debug, Clone)]
pub struct ReplyDetails {
    /// Normalized query.
    pub query: String,
    pub reply: String,
    pub flags: ReplyFlags,
    /// Index of the selected rule; `None` for repeats.
    pub rule: Option<usize>,
    /// Phrase of the selected rule.
    pub keyword: Option<String>,
    /// Byte offset of the keyword occurrence in `query`, if one matched.
    pub match_offset: Option<usize>,
    /// Template the reply was built from.
    pub template: Option<String>,
    /// Remainder before conjugation.
    pub remainder: String,
    /// Remainder after conjugation, when it was spliced.
    pub conjugated: Option<String>,
    /// Rotation offset of the rule before and after this call.
    pub rotation_before: usize,
    pub rotation_after: usize,
    /// Number of other rules whose offset was synced to `rotation_after`.
    pub synced: usize,
}

impl ReplyDetails {
    pub(crate) fn new(query: String) -> Self {
        Self {
            query,
            reply: String::new(),
            flags: ReplyFlags::empty(),
            rule: None,
            keyword: None,
            match_offset: None,
            template: None,
            remainder: String::new(),
            conjugated: None,
            rotation_before: 0,
            rotation_after: 0,
            synced: 0,
        }
    }
}
