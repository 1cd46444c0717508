use docent::application::services::{ANSWER_FALLBACK, normalize_answer, normalize_summary};

#[test]
fn given_title_and_numbered_points_when_normalizing_then_extracts_both() {
    let result = normalize_summary("TITLE: Foo\n1. A\n2. B");

    assert_eq!(result.title.as_deref(), Some("Foo"));
    assert_eq!(result.summary_points, vec!["A", "B"]);
}

#[test]
fn given_markdown_decorated_title_when_normalizing_then_strips_asterisks() {
    let result = normalize_summary("**Title:** Annual Report **\n\n  3. Revenue up\n10. Costs down");

    assert_eq!(result.title.as_deref(), Some("Annual Report"));
    assert_eq!(result.summary_points, vec!["Revenue up", "Costs down"]);
}

#[test]
fn given_no_numbered_points_when_normalizing_then_falls_back_to_raw_text() {
    let raw = "This document discusses several topics.\n- bullet one";

    let result = normalize_summary(raw);

    assert_eq!(result.title, None);
    assert_eq!(result.summary_points, vec![raw.to_string()]);
}

#[test]
fn given_empty_completion_when_normalizing_then_single_empty_point() {
    let result = normalize_summary("");

    assert_eq!(result.title, None);
    assert_eq!(result.summary_points, vec![String::new()]);
}

#[test]
fn given_blank_title_when_normalizing_then_title_is_absent() {
    let result = normalize_summary("TITLE:   \n1. Only point");

    assert_eq!(result.title, None);
    assert_eq!(result.summary_points, vec!["Only point"]);
}

#[test]
fn given_several_title_lines_when_normalizing_then_last_one_wins() {
    let result = normalize_summary("Title: Draft\nTITLE: Final\n1. Point");
    assert_eq!(result.title.as_deref(), Some("Final"));
}

#[test]
fn given_number_without_period_when_normalizing_then_line_is_ignored() {
    let result = normalize_summary("1) not a point\n2. a point\n2024 was a year");
    assert_eq!(result.summary_points, vec!["a point"]);
}

#[test]
fn given_blank_answer_when_normalizing_then_returns_fallback() {
    assert_eq!(normalize_answer(""), ANSWER_FALLBACK);
    assert_eq!(normalize_answer(" \n\t"), ANSWER_FALLBACK);
}

#[test]
fn given_answer_with_surrounding_whitespace_when_normalizing_then_returns_verbatim() {
    assert_eq!(normalize_answer("  The fee is $5.\n"), "  The fee is $5.\n");
}
