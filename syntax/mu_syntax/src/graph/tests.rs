use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_builders_assign_sequential_ids() {
    let mut g = SyntaxGraph::new();
    let echo = g.symbol("echo");
    let msg = g.argument("msg");
    let root = g.sequence([echo, msg]);

    assert_eq!(echo.index(), 0);
    assert_eq!(msg.index(), 1);
    assert_eq!(root.index(), 2);
    assert_eq!(g.len(), 3);
    assert_eq!(
        g.get(root),
        Some(&SyntaxNode::Sequence(vec![echo, msg].into_boxed_slice()))
    );
}

#[test]
fn test_get_foreign_id() {
    let g = SyntaxGraph::new();
    assert!(g.is_empty());
    assert_eq!(g.get(SyntaxId::new(0)), None);
}

#[test]
fn test_display_compact_forms() {
    let mut g = SyntaxGraph::new();
    let ls = g.symbol("ls");
    let long = g.preset("long", "true");
    let dash_l = g.symbol("-l");
    let flag = g.sequence([dash_l, long]);
    let opt = g.optional(flag);
    let path = g.argument("path");
    let root = g.sequence([ls, opt, path]);

    assert_eq!(g.display(root).to_string(), "(ls ((-l <long=true>) | ()) <path>)");
}

#[test]
fn test_display_labelled_child_by_name() {
    let mut g = SyntaxGraph::new();
    let file = g.argument("file");
    g.set_label(file, "file").unwrap();
    let root = g.sequence([file, file]);

    assert_eq!(g.display(file).to_string(), "<file>");
    assert_eq!(g.display(root).to_string(), "(<<file>> <<file>>)");
}

#[test]
fn test_resolve_closes_loop() {
    let mut g = SyntaxGraph::new();
    let more = g.back_reference("files");
    let file = g.argument("file");
    let tail = g.sequence([file, more]);
    let files = g.optional(tail);
    g.set_label(files, "files").unwrap();

    g.resolve().unwrap();

    assert_eq!(
        g.get(tail),
        Some(&SyntaxNode::Sequence(vec![file, files].into_boxed_slice()))
    );
    assert_eq!(g.display(files).to_string(), "((<file> <<files>>) | ())");
}

#[test]
fn test_resolve_unknown_label() {
    let mut g = SyntaxGraph::new();
    let missing = g.back_reference("nowhere");
    let _root = g.sequence([missing]);

    assert_eq!(
        g.resolve(),
        Err(GrammarError::UnknownLabel {
            label: "nowhere".to_string()
        })
    );
}

#[test]
fn test_duplicate_label() {
    let mut g = SyntaxGraph::new();
    let a = g.symbol("a");
    let b = g.symbol("b");
    g.set_label(a, "x").unwrap();

    assert_eq!(
        g.set_label(b, "x"),
        Err(GrammarError::DuplicateLabel {
            label: "x".to_string()
        })
    );
    assert_eq!(g.find_label("x"), Some(a));
    assert_eq!(g.label(b), None);
}

#[test]
fn test_cannot_label_back_reference() {
    let mut g = SyntaxGraph::new();
    let back = g.back_reference("x");
    assert_eq!(
        g.set_label(back, "x"),
        Err(GrammarError::LabelledBackReference { id: back })
    );
}

#[test]
fn test_check_rejects_empty_alternation() {
    let mut g = SyntaxGraph::new();
    let alt = g.alternation([]);
    assert_eq!(g.check(), Err(GrammarError::EmptyAlternation { id: alt }));
}

#[test]
fn test_check_rejects_dangling_child() {
    let mut g = SyntaxGraph::new();
    let stray = SyntaxId::new(42);
    let seq = g.sequence([stray]);
    assert_eq!(
        g.check(),
        Err(GrammarError::DanglingReference {
            parent: seq,
            child: stray
        })
    );
}

#[test]
fn test_check_rejects_unresolved_back_reference() {
    let mut g = SyntaxGraph::new();
    let back = g.back_reference("later");
    let seq = g.sequence([back]);
    assert_eq!(
        g.check(),
        Err(GrammarError::UnresolvedBackReference {
            parent: seq,
            label: "later".to_string()
        })
    );
}

#[test]
fn test_check_reports_unresolved_even_when_label_exists() {
    let mut g = SyntaxGraph::new();
    let target = g.symbol("x");
    g.set_label(target, "x").unwrap();
    let back = g.back_reference("x");
    let seq = g.sequence([back]);
    assert_eq!(
        g.check(),
        Err(GrammarError::UnresolvedBackReference {
            parent: seq,
            label: "x".to_string()
        })
    );
    g.resolve().unwrap();
}

#[test]
fn test_set_label_unknown_node() {
    let mut g = SyntaxGraph::new();
    g.symbol("x");
    assert_eq!(
        g.set_label(SyntaxId::new(9), "nine"),
        Err(GrammarError::UnknownNode {
            id: SyntaxId::new(9)
        })
    );
    assert_eq!(g.find_label("nine"), None);
}

#[test]
fn test_error_messages() {
    assert_eq!(
        GrammarError::EmptyAlternation {
            id: SyntaxId::new(4)
        }
        .to_string(),
        "alternation #4 has no alternatives"
    );
    assert_eq!(
        GrammarError::UnknownLabel {
            label: "files".to_string()
        }
        .to_string(),
        "back-reference to unknown label 'files'"
    );
    assert_eq!(
        GrammarError::UnresolvedBackReference {
            parent: SyntaxId::new(2),
            label: "files".to_string()
        }
        .to_string(),
        "node #2 refers to unresolved back-reference 'files'"
    );
}

#[test]
fn test_node_kinds_and_children() {
    let mut g = SyntaxGraph::new();
    let a = g.symbol("a");
    let b = g.argument("b");
    let seq = g.sequence([a, b]);
    let opt = g.optional(seq);

    assert_eq!(g.get(a).unwrap().kind_name(), "symbol");
    assert_eq!(g.get(b).unwrap().kind_name(), "argument");
    assert_eq!(g.get(seq).unwrap().kind_name(), "sequence");
    assert_eq!(g.get(opt).unwrap().kind_name(), "alternation");
    assert_eq!(g.get(seq).unwrap().children().collect::<Vec<_>>(), [a, b]);
    assert_eq!(g.get(opt).unwrap().children().collect::<Vec<_>>(), [seq]);
    assert_eq!(g.get(a).unwrap().children().count(), 0);
}
