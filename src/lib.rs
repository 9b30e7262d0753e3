//! A rule-based conversational responder in the style of the classic ELIZA
//! "doctor".
//!
//! A plain-text rule file lists keyword blocks and their reply templates. For
//! each line of input the [`Responder`] normalizes the text, finds the first
//! keyword that occurs in it, picks the rule's next reply in round-robin order
//! and, when the template ends in `*`, splices in the rest of the input with
//! its pronouns swapped.
//!
//! ```
//! use doctor::Responder;
//!
//! let mut doctor = Responder::default();
//! let reply = doctor.respond("I am feeling sad");
//! assert_eq!(reply, "DID YOU COME TO ME BECAUSE YOU ARE FEELING SAD?");
//! ```
//!
//! Custom rule files are loaded with [`load_rule_set`] or [`RuleSet::load`];
//! see `data/eliza.dat` for the format.

#[macro_use]
mod macros;
mod api;
mod engine;
mod error;
mod ruleset;

pub use api::{BUNDLED_RULES, DEFAULT_REPEAT_REPLY, Options, ResponseVerbose, bundled_rules, load_rule_set};
pub use engine::{
    ConjugationTable, KeywordMatch, POISON, ReplyDetails, ReplyFlags, Responder, Selection, conjugate, find_keyword,
    normalize, select,
};
pub use error::{Error, Result};
pub use ruleset::{FALLBACK_KEYWORD, LoadOptions, ReplyRange, Rule, RuleSet, WILDCARD};
