#[cfg(test)]
use super::*;
#[cfg(test)]
use crate::value::Value;

fn parse(input: &str) -> (Section, ParseReport) {
    let mut root = Section::new("");
    let report = parse_lines(input.lines(), &mut root);
    (root, report)
}

#[test]
fn test_parse_basic_document() {
    let input = "\
name = editor
version = 3

[General]
width = 800
ratio = 1.5
fullscreen = true
";
    let (root, report) = parse(input);

    assert!(report.is_clean());
    assert_eq!(root.get("name").unwrap().value(), &Value::Str("editor".into()));
    assert_eq!(root.get("version").unwrap().value(), &Value::Int(3));
    assert_eq!(root.get("General.width").unwrap().value(), &Value::Int(800));
    assert_eq!(root.get("General.ratio").unwrap().value(), &Value::Float(1.5));
    assert_eq!(root.get("General.fullscreen").unwrap().value(), &Value::Bool(true));
}

#[test]
fn test_section_end_returns_to_root() {
    let input = "[General]\nA = 1\n[SECTIONEND]\nB = 2";
    let (root, report) = parse(input);

    assert!(report.is_clean());
    assert_eq!(root.get("General.A").unwrap().value(), &Value::Int(1));
    assert_eq!(root.get("B").unwrap().value(), &Value::Int(2));
    assert!(!root.has_property("General.B"));
    // The sentinel never becomes a section of its own.
    assert!(!root.has_subsection(SECTION_END));
}

#[test]
fn test_dotted_header_creates_nested_sections() {
    let input = "[General.Editor]\ntheme = dark\n[General]\nlang = en";
    let (root, _) = parse(input);

    assert!(root.has_subsection("General"));
    assert!(root.has_subsection("General.Editor"));
    assert_eq!(root.subsection_count(), 1);
    assert_eq!(root.get("General.Editor.theme").unwrap().value(), &Value::Str("dark".into()));
    // The second header reuses the section the first one created.
    assert_eq!(root.get("General.lang").unwrap().value(), &Value::Str("en".into()));
}

#[test]
fn test_repeated_header_reuses_section() {
    let input = "[Net]\nport = 80\n[SECTIONEND]\n[Net]\nhost = localhost";
    let (root, _) = parse(input);

    assert_eq!(root.subsection_count(), 1);
    let net = root.get_subsection("Net").unwrap();
    assert_eq!(net.property_count(), 2);
}

#[test]
fn test_whole_line_comments_are_skipped() {
    let input = "// header comment\nkey = 1\n  // not a comment marker for the raw line, but trims to nothing";
    let (root, report) = parse(input);

    assert!(report.is_clean());
    assert_eq!(root.property_count(), 1);
}

#[test]
fn test_trailing_comment_is_stripped() {
    let (root, report) = parse("key = 5 // comment");

    assert!(report.is_clean());
    assert_eq!(root.get("key").unwrap().value(), &Value::Int(5));
}

#[test]
fn test_malformed_line_is_reported_and_parsing_continues() {
    let input = "[General]\nA = 1\nnot a kv pair\nB = 2";
    let (root, report) = parse(input);

    assert_eq!(root.get("General.A").unwrap().value(), &Value::Int(1));
    assert_eq!(root.get("General.B").unwrap().value(), &Value::Int(2));

    assert_eq!(report.diagnostics.len(), 1);
    assert_eq!(report.diagnostics[0].kind, DiagnosticKind::MissingDelimiter);
    assert_eq!(report.diagnostics[0].line, 3);
    assert_eq!(report.diagnostics[0].text, "not a kv pair");
}

#[test]
fn test_split_on_last_equals() {
    let (root, _) = parse("a=b = c");

    // Everything left of the last '=' is the key.
    let prop = root.get("a=b").unwrap();
    assert_eq!(prop.value(), &Value::Str("c".into()));
}

#[test]
fn test_quote_stripping() {
    let input = "a = \"hello\"\nb = hello\nc = 'hello'\nd = \"half";
    let (root, _) = parse(input);

    assert_eq!(root.get("a").unwrap().value(), &Value::Str("hello".into()));
    assert_eq!(root.get("b").unwrap().value(), &Value::Str("hello".into()));
    assert_eq!(root.get("c").unwrap().value(), &Value::Str("hello".into()));
    // One layer strips independently at each end.
    assert_eq!(root.get("d").unwrap().value(), &Value::Str("half".into()));
}

#[test]
fn test_quoted_number_stays_a_string() {
    let (root, _) = parse("port = \"8080\"");
    assert_eq!(root.get("port").unwrap().value(), &Value::Str("8080".into()));
}

#[test]
fn test_empty_value_is_unknown() {
    let (root, _) = parse("key =");
    assert_eq!(root.get("key").unwrap().value(), &Value::Unknown);
}

#[test]
fn test_duplicate_property_keeps_first() {
    let input = "key = 1\nkey = 2";
    let (root, _) = parse(input);

    assert_eq!(root.property_count(), 1);
    assert_eq!(root.get("key").unwrap().value(), &Value::Int(1));
}

#[test]
fn test_oversized_integer_falls_back_to_string() {
    let input = "big = 99999999999999999999999";
    let (root, report) = parse(input);

    assert_eq!(
        root.get("big").unwrap().value(),
        &Value::Str("99999999999999999999999".into())
    );
    assert_eq!(report.diagnostics.len(), 1);
    assert_eq!(report.diagnostics[0].kind, DiagnosticKind::NumericOverflow);
}

#[test]
fn test_dotted_key_nests_under_current_section() {
    let input = "[App]\nwindow.width = 640";
    let (root, _) = parse(input);

    assert!(root.has_subsection("App.window"));
    assert_eq!(root.get("App.window.width").unwrap().value(), &Value::Int(640));
}

#[test]
fn test_unresolvable_header_drops_to_root() {
    let input = "[Ok]\na = 1\n[]\nb = 2";
    let (root, _) = parse(input);

    assert_eq!(root.get("Ok.a").unwrap().value(), &Value::Int(1));
    // "[]" cannot name a section; assignments return to the root.
    assert_eq!(root.get("b").unwrap().value(), &Value::Int(2));
}

#[test]
fn test_bool_casing() {
    let input = "a = true\nb = True\nc = false\nd = False";
    let (root, _) = parse(input);

    assert_eq!(root.get("a").unwrap().value(), &Value::Bool(true));
    assert_eq!(root.get("b").unwrap().value(), &Value::Bool(true));
    assert_eq!(root.get("c").unwrap().value(), &Value::Bool(false));
    assert_eq!(root.get("d").unwrap().value(), &Value::Bool(false));
}

#[test]
fn test_blank_and_whitespace_lines_are_ignored() {
    let input = "\n   \n\t\nkey = 1\n\n";
    let (root, report) = parse(input);

    assert!(report.is_clean());
    assert_eq!(root.property_count(), 1);
}
