//! Responder engine.
//!
//! Answering one line of input is a short, fixed pipeline:
//!
//! ```text
//! input ── normalize ─────────────── " MY MOTHER HATES ME "     (normalization.rs)
//!               │
//!               ├─ same as previous? ─▶ repeat reply             (responder.rs)
//!               │
//!          select rule ───────────── " MOTHER " @ 3              (matcher.rs)
//!               │                     remainder " HATES ME "
//!               v
//!        pick template ───────────── "TELL ME MORE ABOUT YOUR FAMILY*"
//!               │
//!       conjugate + splice ───────── " HATES YOU "               (conjugation.rs)
//!               │
//!        question mark ───────────── "TELL ME MORE ABOUT YOUR FAMILY HATES YOU?"
//!               │
//!        advance rotation (and every rule sharing the reply range)
//! ```
//!
//! ## Responsibilities by module
//!
//! - `normalization.rs`: uppercase, strip everything but `A-Z`, `0-9` and spaces, pad.
//! - `matcher.rs`: first-match keyword search in file order and remainder
//!   extraction, with the fallback rule as the default.
//! - `conjugation.rs`: the ordered pronoun swap table and the pure conjugation
//!   pass applied to the remainder.
//! - `responder.rs`: the stateful [`Responder`] (rotation offsets, repeat
//!   detection) that strings the steps together.
//! - `details.rs`: the optional per-call trace returned by
//!   [`Responder::respond_verbose`].
//!
//! ## Debugging
//!
//! Every call emits a `tracing` event at `debug` level with the selected rule,
//! the remainder and the reply. Run the CLI with `RUST_LOG=doctor=debug` to see
//! them.

#[path = "engine/conjugation.rs"]
mod conjugation;
#[path = "engine/details.rs"]
mod details;
#[path = "engine/matcher.rs"]
mod matcher;
#[path = "engine/normalization.rs"]
mod normalization;
#[path = "engine/responder.rs"]
mod responder;

pub use conjugation::{ConjugationTable, POISON, conjugate};
pub use details::{ReplyDetails, ReplyFlags};
pub use matcher::{KeywordMatch, Selection, find_keyword, select};
pub use normalization::normalize;
pub use responder::Responder;
