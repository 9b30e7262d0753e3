use crate::engine::{ConjugationTable, ReplyDetails};
use crate::error::Result;
use crate::RuleSet;
use once_cell::sync::Lazy;
use std::time::Duration;

/// Rule file compiled into the crate.
pub const BUNDLED_RULES: &str = include_str!("../data/eliza.dat");

/// Reply given when the same normalized input arrives twice in a row.
pub const DEFAULT_REPEAT_REPLY: &str = "PLEASE DON'T REPEAT YOURSELF!";

static DEFAULT_RULES: Lazy<RuleSet> =
    Lazy::new(|| RuleSet::parse(BUNDLED_RULES).expect("bundled rule file is well formed"));

/// The rule set built from the bundled `data/eliza.dat`, parsed on first use.
pub fn bundled_rules() -> &'static RuleSet {
    &DEFAULT_RULES
}

/// Load a rule set from the text of a rule file.
///
/// # Example
/// ```
/// let rules = doctor::load_rule_set("HELLO\n!\nHI.\n.\nNOKEYFOUND\n!\nGO ON.\n.\n").unwrap();
/// assert_eq!(rules.len(), 2);
/// ```
pub fn load_rule_set(source: &str) -> Result<RuleSet> {
    RuleSet::parse(source)
}

/// Options that affect how replies are built.
///
/// The defaults give the classic behavior; every extra is opt-in.
#[derive(Debug, Clone)]
pub struct Options {
    /// Reply to an immediate verbatim repeat.
    pub repeat_reply: String,
    /// Reply to the second and later consecutive repeats, if set.
    pub repeat_limit_reply: Option<String>,
    /// Fixed reply used instead of the fallback rule when no keyword matches.
    /// The fallback rule's rotation does not advance when it is used.
    pub no_match_reply: Option<String>,
    /// Drop the wildcard marker from a template when there is no remainder to
    /// splice, instead of leaving it in the reply.
    pub drop_unfilled_wildcard: bool,
    /// Pronoun swaps applied to the remainder.
    pub conjugations: ConjugationTable,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            repeat_reply: DEFAULT_REPEAT_REPLY.to_string(),
            repeat_limit_reply: None,
            no_match_reply: None,
            drop_unfilled_wildcard: false,
            conjugations: ConjugationTable::standard(),
        }
    }
}

/// Result of [`Responder::respond_verbose`](crate::Responder::respond_verbose).
#[derive(Debug, Clone)]
pub struct ResponseVerbose {
    /// The raw input line.
    pub text: String,
    pub reply: String,
    /// Time spent building the reply.
    pub elapsed: Duration,
    pub details: ReplyDetails,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Responder;

    #[test]
    fn bundled_rules_load() {
        let rules = bundled_rules();
        assert_eq!(rules.len(), 45);
        assert_eq!(rules.fallback().phrase(), "NOKEYFOUND");
        assert_eq!(rules.replies_for(rules.fallback()).len(), 7);
    }

    #[test]
    fn bundled_conversation() {
        let mut doctor = Responder::default();
        assert_eq!(doctor.respond("Can you help me?"), "DON'T YOU BELIEVE THAT I CAN HELP YOU?");
        assert_eq!(doctor.respond("I am unhappy"), "DID YOU COME TO ME BECAUSE YOU ARE UNHAPPY?");
        assert_eq!(doctor.respond("I'm unhappy"), "HOW LONG HAVE YOU BEEN UNHAPPY?");
        assert_eq!(doctor.respond("I'm unhappy"), DEFAULT_REPEAT_REPLY);
        assert_eq!(doctor.respond("My mother hates me."), "TELL ME MORE ABOUT YOUR FAMILY.");
        assert_eq!(doctor.respond("my father drinks"), "WHO ELSE IN YOUR FAMILY DRINKS?");
        assert_eq!(doctor.respond("the weather is nice"), "SAY, DO YOU HAVE ANY PSYCHOLOGICAL PROBLEMS?");
        assert_eq!(doctor.respond("the weather is bad"), "WHAT DOES THAT SUGGEST TO YOU?");
    }

    #[test]
    fn respond_verbose_reports_elapsed_and_reply() {
        let mut doctor = Responder::default();
        let res = doctor.respond_verbose("hello");
        assert_eq!(res.text, "hello");
        assert_eq!(res.reply, res.details.reply);
        assert_eq!(res.reply, "HOW DO YOU DO. PLEASE STATE YOUR PROBLEM.");
        assert!(res.elapsed >= Duration::ZERO);
    }

    #[test]
    fn load_rule_set_propagates_errors() {
        assert!(load_rule_set("HELLO\n!\nHI\n.\n").is_err());
    }
}
