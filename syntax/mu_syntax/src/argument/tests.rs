use super::*;
use crate::Completions;
use pretty_assertions::assert_eq;

fn token(text: &str) -> Token {
    Token::synthetic(text)
}

#[test]
fn test_string_accept_and_undo() {
    let mut arg = StringArgument::multiple("file");
    arg.accept(&token("a.txt")).unwrap();
    arg.accept(&token("b.txt")).unwrap();
    assert_eq!(arg.values(), ["a.txt", "b.txt"]);

    arg.undo_last_value();
    assert_eq!(arg.values(), ["a.txt"]);
    assert_eq!(arg.value_count(), 1);
}

#[test]
fn test_single_valued_rejects_second_value() {
    let mut arg = StringArgument::new("msg");
    arg.accept(&token("hello")).unwrap();
    assert_eq!(
        arg.accept(&token("again")),
        Err(SyntaxRejection::AlreadySet {
            label: "msg".to_string()
        })
    );
    assert_eq!(arg.values(), ["hello"]);
}

#[test]
fn test_enum_accepts_only_choices() {
    let mut arg = EnumArgument::new("action", ["start", "stop"]);
    assert_eq!(
        arg.accept(&token("restart")),
        Err(SyntaxRejection::NotAChoice {
            label: "action".to_string(),
            value: "restart".to_string()
        })
    );
    arg.accept(&token("stop")).unwrap();
    assert_eq!(arg.rendered_values(), ["stop"]);
}

#[test]
fn test_enum_completion() {
    let arg = EnumArgument::new("action", ["start", "status", "stop", "restart"]);
    let mut sink = Completions::new();
    arg.complete(&mut sink, "st");
    assert_eq!(sink.candidates().collect::<Vec<_>>(), ["start", "status", "stop"]);
}

#[test]
fn test_integer_parsing_and_range() {
    let mut arg = IntegerArgument::in_range("count", 1, 10);
    assert_eq!(
        arg.accept(&token("ten")),
        Err(SyntaxRejection::NotANumber {
            value: "ten".to_string()
        })
    );
    assert_eq!(
        arg.accept(&token("11")),
        Err(SyntaxRejection::OutOfRange {
            value: 11,
            min: 1,
            max: 10
        })
    );
    arg.accept(&token("7")).unwrap();
    assert_eq!(arg.values(), [7]);
}

#[test]
fn test_integer_completion_narrow_range_only() {
    let narrow = IntegerArgument::in_range("level", 0, 12);
    let mut sink = Completions::new();
    narrow.complete(&mut sink, "1");
    assert_eq!(sink.candidates().collect::<Vec<_>>(), ["1", "10", "11", "12"]);

    let wide = IntegerArgument::new("count");
    let mut sink = Completions::new();
    wide.complete(&mut sink, "1");
    assert!(sink.is_empty());
}

#[test]
fn test_bundle_lookup_and_values() {
    let mut bundle = ArgumentBundle::new()
        .with(StringArgument::new("msg"))
        .unwrap()
        .with(IntegerArgument::new("count"))
        .unwrap();
    let msg = bundle.lookup("msg").unwrap();
    let count = bundle.lookup("count").unwrap();
    assert_eq!(bundle.len(), 2);
    assert_eq!(bundle.lookup("missing"), None);

    bundle.accept(msg, &token("hi")).unwrap();
    bundle.accept(count, &token("3")).unwrap();
    assert_eq!(bundle.value("msg"), Some("hi".to_string()));
    assert_eq!(bundle.values("count"), ["3"]);
    assert_eq!(
        bundle.bound().collect::<Vec<_>>(),
        [("msg", vec!["hi".to_string()]), ("count", vec!["3".to_string()])]
    );

    bundle.undo_last_value(count);
    assert_eq!(bundle.value("count"), None);

    bundle.clear();
    assert_eq!(bundle.value("msg"), None);
    assert_eq!(bundle.bound().count(), 0);
}

#[test]
fn test_bundle_rejects_duplicate_label() {
    let mut bundle = ArgumentBundle::new();
    bundle.add(StringArgument::new("x")).unwrap();
    assert_eq!(
        bundle.add(IntegerArgument::new("x")).unwrap_err(),
        GrammarError::DuplicateArgument {
            label: "x".to_string()
        }
    );
}

#[test]
fn test_bundle_debug_lists_values() {
    let mut bundle = ArgumentBundle::new();
    let msg = bundle.add(StringArgument::new("msg")).unwrap();
    bundle.accept(msg, &token("hi")).unwrap();
    assert_eq!(format!("{bundle:?}"), r#"{"msg": ["hi"]}"#);
}

#[test]
fn test_rejection_messages() {
    assert_eq!(
        SyntaxRejection::OutOfRange {
            value: 11,
            min: 1,
            max: 10
        }
        .to_string(),
        "11 is outside the range 1..=10"
    );
}

#[test]
fn test_bundle_rejects_out_of_range_index() {
    let mut bundle = ArgumentBundle::new();
    bundle.add(StringArgument::new("msg")).unwrap();
    assert_eq!(
        bundle.accept(ArgIndex(7), &token("hi")),
        Err(SyntaxRejection::NoSuchSlot { index: 7 })
    );
    assert_eq!(bundle.bound().count(), 0);
    assert_eq!(
        SyntaxRejection::NoSuchSlot { index: 7 }.to_string(),
        "no argument slot 7"
    );
}
