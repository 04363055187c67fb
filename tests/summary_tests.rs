use dtlogger::core::registry::all_lines;
use dtlogger::core::store::set_head_field;
use dtlogger::core::summary::{
    ALL_HEADS, ALL_ISSUES, ALL_LINES, Filter, SummaryScope, SummaryView, build_summary_rows,
    filter_options, filter_rows, parse_summary_json, summary_to_json,
};
use dtlogger::errors::AppError;
use dtlogger::export::import_summary_json;
use dtlogger::models::day::DaySpec;
use dtlogger::models::head::{HeadField, HeadStatus, Issue, Repaired};
use dtlogger::models::line::Section;
use dtlogger::models::record::RecordStore;

const D1: &str = "2024-01-01";
const D2: &str = "2024-01-02";

fn head_down(
    store: &RecordStore,
    line: &str,
    date: &str,
    head: usize,
    issue: Issue,
    repaired: Repaired,
) -> RecordStore {
    let idx = head - 1;
    let s = set_head_field(store, line, date, idx, HeadField::Offline(HeadStatus::Offline)).unwrap();
    let s = set_head_field(&s, line, date, idx, HeadField::Issue(issue)).unwrap();
    set_head_field(&s, line, date, idx, HeadField::Repaired(repaired)).unwrap()
}

fn days() -> Vec<DaySpec> {
    vec![DaySpec::new(1, D1), DaySpec::new(2, D2)]
}

fn sample_store() -> RecordStore {
    let s = head_down(&RecordStore::new(), "Line 2", D1, 7, Issue::Operator, Repaired::Fixed);
    let s = head_down(&s, "Line 2", D1, 3, Issue::Chute, Repaired::NotFixed);
    let s = head_down(&s, "Line 12", D1, 1, Issue::LoadCell, Repaired::NotFixed);
    head_down(&s, "Line 12", D2, 5, Issue::Chute, Repaired::Fixed)
}

#[test]
fn no_row_for_lines_without_offline_heads() {
    let rows = build_summary_rows(&RecordStore::new(), all_lines(), &days(), &SummaryScope::AllDays);
    assert!(rows.is_empty());
}

#[test]
fn rows_list_offline_heads_in_order_with_issues() {
    let rows = build_summary_rows(&sample_store(), all_lines(), &days(), &SummaryScope::AllDays);
    assert_eq!(rows.len(), 3);

    let r = &rows[0];
    assert_eq!(r.line, "Line 2");
    assert_eq!(r.section, Section::PcLine);
    assert_eq!(r.date, D1);
    assert_eq!(r.offline_heads, vec![3, 7]);
    assert_eq!(r.offline_heads_text(), "3, 7");
    assert_eq!(
        r.issues,
        "Head 3: Chute (Not Fixed); Head 7: Operator (Fixed)"
    );

    assert_eq!((rows[1].line.as_str(), rows[1].date.as_str()), ("Line 12", D1));
    assert_eq!((rows[2].line.as_str(), rows[2].date.as_str()), ("Line 12", D2));
}

#[test]
fn single_day_scope_keeps_that_date_only() {
    let scope = SummaryScope::SingleDay(D2.to_string());
    let rows = build_summary_rows(&sample_store(), all_lines(), &days(), &scope);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].line, "Line 12");
    assert_eq!(rows[0].offline_heads, vec![5]);
}

#[test]
fn issue_filter_matches_substring() {
    let rows = build_summary_rows(&sample_store(), all_lines(), &days(), &SummaryScope::AllDays);

    let line = Filter::parse(Some(ALL_LINES), ALL_LINES);
    let issue = Filter::parse(Some("Chute"), ALL_ISSUES);
    let head = Filter::parse(Some(ALL_HEADS), ALL_HEADS);

    let out = filter_rows(&rows, &line, &issue, &head);
    assert_eq!(out.len(), 2);
    assert!(out.iter().all(|r| r.issues.contains("Chute")));
}

#[test]
fn line_and_head_filters() {
    let rows = build_summary_rows(&sample_store(), all_lines(), &days(), &SummaryScope::AllDays);

    let only_12 = filter_rows(
        &rows,
        &Filter::Only("Line 12".into()),
        &Filter::All,
        &Filter::All,
    );
    assert_eq!(only_12.len(), 2);

    let head_7 = filter_rows(&rows, &Filter::All, &Filter::All, &Filter::Only("7".into()));
    assert_eq!(head_7.len(), 1);
    assert_eq!(head_7[0].line, "Line 2");

    let none = filter_rows(&rows, &Filter::All, &Filter::All, &Filter::Only("14".into()));
    assert!(none.is_empty());
}

#[test]
fn filter_parse_understands_sentinels() {
    assert_eq!(Filter::parse(None, ALL_LINES), Filter::All);
    assert_eq!(Filter::parse(Some("all lines"), ALL_LINES), Filter::All);
    assert_eq!(Filter::parse(Some(" "), ALL_HEADS), Filter::All);
    assert_eq!(
        Filter::parse(Some("Line 3"), ALL_LINES),
        Filter::Only("Line 3".into())
    );
}

#[test]
fn filter_options_are_distinct() {
    let rows = build_summary_rows(&sample_store(), all_lines(), &days(), &SummaryScope::AllDays);
    let (issues, heads) = filter_options(&rows);

    assert_eq!(heads, vec![1, 3, 5, 7]);
    assert!(issues.contains(&"Head 3: Chute (Not Fixed)".to_string()));
    assert_eq!(issues.len(), 4);
}

#[test]
fn export_file_names_follow_scope() {
    assert_eq!(
        SummaryScope::SingleDay(D1.into()).export_file_name(),
        "summary_2024-01-01.json"
    );
    assert_eq!(SummaryScope::AllDays.export_file_name(), "summary_all.json");
}

#[test]
fn json_uses_camel_case_keys() {
    let rows = build_summary_rows(&sample_store(), all_lines(), &days(), &SummaryScope::AllDays);
    let json = summary_to_json(&rows).unwrap();

    assert!(json.contains("\"offlineHeads\""));
    assert!(json.contains("\"section\": \"PC Line\""));
    assert_eq!(parse_summary_json(&json).unwrap(), rows);
}

#[test]
fn legacy_text_heads_are_accepted() {
    let text = r#"[{"line":"Line 4","section":"PC Line","date":"2024-01-01",
        "offlineHeads":"1, 3","issues":"Head 1: Chute (Fixed); Head 3: Operator (Not Fixed)"}]"#;
    let rows = parse_summary_json(text).unwrap();
    assert_eq!(rows[0].offline_heads, vec![1, 3]);
}

#[test]
fn malformed_import_leaves_view_unchanged() {
    let base = build_summary_rows(&sample_store(), all_lines(), &days(), &SummaryScope::AllDays);
    let imported_json = summary_to_json(&base[..1]).unwrap();

    let mut view = SummaryView::new();
    assert_eq!(view.import_json(&imported_json).unwrap(), 1);
    let before = view.display_rows(&base, &Filter::All, &Filter::All, &Filter::All);

    let err = view.import_json("{ not json").unwrap_err();
    assert!(matches!(err, AppError::ImportParse(_)));

    let after = view.display_rows(&base, &Filter::All, &Filter::All, &Filter::All);
    assert_eq!(before, after);
    assert!(view.has_import());
}

#[test]
fn non_utf8_import_is_a_parse_error() {
    let path = std::env::temp_dir().join("dtlogger_summary_binary.json");
    std::fs::write(&path, [0xff, 0xfe, 0x00, 0x7b]).unwrap();

    let mut view = SummaryView::new();
    let err = import_summary_json(&mut view, &path).unwrap_err();
    assert!(matches!(err, AppError::ImportParse(_)));
    assert!(!view.has_import());

    std::fs::remove_file(&path).ok();
}

#[test]
fn missing_import_file_stays_an_io_error() {
    let path = std::env::temp_dir().join("dtlogger_summary_missing.json");
    std::fs::remove_file(&path).ok();

    let err = import_summary_json(&mut SummaryView::new(), &path).unwrap_err();
    assert!(matches!(err, AppError::Io(_)));
}

#[test]
fn imported_rows_bypass_filters_until_cleared() {
    let base = build_summary_rows(&sample_store(), all_lines(), &days(), &SummaryScope::AllDays);
    let mut view = SummaryView::new();
    view.import_json(&summary_to_json(&base).unwrap()).unwrap();

    let chute = Filter::Only("Chute".into());
    let shown = view.display_rows(&base, &Filter::All, &chute, &Filter::All);
    assert_eq!(shown.len(), 3);

    view.clear_import();
    let shown = view.display_rows(&base, &Filter::All, &chute, &Filter::All);
    assert_eq!(shown.len(), 2);
}
