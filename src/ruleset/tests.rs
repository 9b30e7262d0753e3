use super::{LoadOptions, ReplyRange, RuleSet};
use crate::Error;

const SMALL: &str = "
// family first, then the catch-all
MOTHER
FATHER
!
TELL ME MORE ABOUT YOUR FAMILY*
WHO ELSE IN YOUR FAMILY*
.
I AM
!
HOW LONG HAVE YOU BEEN*
.
NOKEYFOUND
!
GO ON.
I SEE.
.
";

#[test]
fn keywords_are_padded_and_kept_in_file_order() {
    let rules = RuleSet::parse(SMALL).unwrap();
    let keywords: Vec<&str> = rules.rules().iter().map(|r| r.keyword()).collect();
    assert_eq!(keywords, vec![" MOTHER ", " FATHER ", " I AM ", " NOKEYFOUND "]);
    assert_eq!(rules.rule("I AM").unwrap().phrase(), "I AM");
    assert_eq!(rules.position(" FATHER "), Some(1));
}

#[test]
fn keywords_of_a_block_share_one_range() {
    let rules = RuleSet::parse(SMALL).unwrap();
    let mother = rules.rule("MOTHER").unwrap();
    let father = rules.rule("FATHER").unwrap();
    assert_eq!(mother.range(), ReplyRange { first: 0, last: 1 });
    assert_eq!(mother.range(), father.range());
    assert_eq!(rules.rule("I AM").unwrap().range(), ReplyRange { first: 2, last: 2 });
    assert_eq!(rules.fallback().range(), ReplyRange { first: 3, last: 4 });
    assert_eq!(rules.replies_for(rules.fallback()), ["GO ON.", "I SEE."]);
}

#[test]
fn every_range_is_non_empty_and_in_bounds() {
    for rules in [RuleSet::parse(SMALL).unwrap(), crate::bundled_rules().clone()] {
        for rule in rules.rules() {
            let range = rule.range();
            assert!(range.first <= range.last, "{:?}", rule);
            assert!(range.last < rules.replies().len(), "{:?}", rule);
            assert!(range.len() >= 1);
        }
    }
}

#[test]
fn lines_are_trimmed_and_case_is_preserved() {
    let source = "  Hello  \n\t!\n   hi there*  \n .\nNOKEYFOUND\n!\nOK\n.\n";
    let rules = RuleSet::parse(source).unwrap();
    assert_eq!(rules.rules()[0].keyword(), " Hello ");
    assert_eq!(rules.replies()[0], "hi there*");
}

#[test]
fn markers_only_look_at_the_first_character() {
    let source = "A\n!ignored text\nREPLY\n.. trailing\nNOKEYFOUND\n! \nOK\n.\n";
    let rules = RuleSet::parse(source).unwrap();
    assert_eq!(rules.len(), 2);
    assert_eq!(rules.replies(), ["REPLY", "OK"]);
}

#[test]
fn line_numbers_are_recorded() {
    let rules = RuleSet::parse(SMALL).unwrap();
    assert_eq!(rules.rule("MOTHER").unwrap().line(), 3);
    assert_eq!(rules.fallback().line(), 13);
}

#[test]
fn duplicate_keywords_keep_the_first_occurrence() {
    let source = "DREAM\n!\nFIRST\n.\nDREAM\n!\nSECOND\n.\nNOKEYFOUND\n!\nOK\n.\n";
    let rules = RuleSet::parse(source).unwrap();
    assert_eq!(rules.len(), 2);
    assert_eq!(rules.replies_for(rules.rule("DREAM").unwrap()), ["FIRST"]);
    // The shadowed block's reply still occupies its pool slot.
    assert_eq!(rules.replies().len(), 3);
}

#[test]
fn replies_without_keywords_stay_in_the_pool() {
    let source = "!\nORPHAN\n.\nNOKEYFOUND\n!\nOK\n.\n";
    let rules = RuleSet::parse(source).unwrap();
    assert_eq!(rules.len(), 1);
    assert_eq!(rules.fallback().range(), ReplyRange { first: 1, last: 1 });
}

#[test]
fn load_errors() {
    let cases: Vec<(&str, fn(&Error) -> bool)> = vec![
        ("", |e| matches!(e, Error::NoBlocks)),
        ("// only a comment\n\n", |e| matches!(e, Error::NoBlocks)),
        ("NOKEYFOUND\n!\nOK\n", |e| matches!(e, Error::NoBlocks)),
        ("NOKEYFOUND\n!\nOK\n.\nDANGLING\n", |e| matches!(e, Error::UnterminatedBlock { line: 5 })),
        ("NOKEYFOUND\n!\nOK\n.\nX\n!\nREPLY\n", |e| matches!(e, Error::UnterminatedBlock { line: 5 })),
        ("NOKEYFOUND\n!\n.\n", |e| matches!(e, Error::EmptyReplies { line: 3, .. })),
        ("HELLO\n!\nHI\n.\n", |e| matches!(e, Error::MissingFallback { .. })),
        ("nokeyfound\n!\nHI\n.\n", |e| matches!(e, Error::MissingFallback { .. })),
    ];

    for (source, expected) in cases {
        let err = RuleSet::parse(source).unwrap_err();
        assert!(expected(&err), "source {:?} gave {:?}", source, err);
    }
}

#[test]
fn custom_fallback_keyword() {
    let source = "HELLO\n!\nHI\n.\nELSE\n!\nWHAT?\n.\n";
    let options = LoadOptions { fallback_keyword: "ELSE".to_string() };
    let rules = RuleSet::parse_with(source, &options).unwrap();
    assert_eq!(rules.fallback().phrase(), "ELSE");
    assert_eq!(rules.fallback_index(), 1);
}

#[test]
fn from_reader_and_from_lines_agree_with_parse() {
    let from_reader = RuleSet::from_reader(std::io::Cursor::new(SMALL)).unwrap();
    let from_lines = RuleSet::from_lines(SMALL.lines().map(String::from)).unwrap();
    let parsed = RuleSet::parse(SMALL).unwrap();
    assert_eq!(from_reader.rules(), parsed.rules());
    assert_eq!(from_lines.replies(), parsed.replies());
}

#[test]
fn load_reports_missing_files() {
    let err = RuleSet::load("/definitely/not/here/eliza.dat").unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}
