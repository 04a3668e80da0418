use utf8conv::config::{
    Settings, DEST_PATH, FILE_FILTER, MATCH_ALL_FILTER, SOURCE_CHARSET, SOURCE_PATH,
};

fn settings(source: &str, dest: &str, filter: Option<&str>, charset: &str) -> Settings {
    Settings {
        source_path: source.to_string(),
        dest_path: dest.to_string(),
        file_filter: filter.map(str::to_string),
        source_charset: charset.to_string(),
        continue_on_error: false,
    }
}

#[test]
fn test_valid_settings_validate() {
    let request = settings("in", "out", Some(r".*\.dat"), "ISO-8859-1")
        .validate()
        .unwrap();
    assert_eq!(request.source_path, "in");
    assert!(!request.continue_on_error);
}

#[test]
fn test_empty_source_path_attributed_to_source_field() {
    let report = settings("", "out", None, "ISO-8859-1").validate().unwrap_err();
    assert_eq!(report.len(), 1);
    assert_eq!(report.failures()[0].field, SOURCE_PATH);
}

#[test]
fn test_empty_dest_path_attributed_to_dest_field() {
    let report = settings("in", "", None, "ISO-8859-1").validate().unwrap_err();
    assert_eq!(report.len(), 1);
    assert_eq!(report.failures()[0].field, DEST_PATH);
}

#[test]
fn test_bare_star_filter_attributed_to_filter_field() {
    let report = settings("in", "out", Some(r"*\.dat"), "ISO-8859-1")
        .validate()
        .unwrap_err();
    assert_eq!(report.len(), 1);
    assert_eq!(report.failures()[0].field, FILE_FILTER);
}

#[test]
fn test_unknown_charset_attributed_to_charset_field() {
    let report = settings("in", "out", None, "ISO-885-1").validate().unwrap_err();
    assert_eq!(report.len(), 1);
    assert_eq!(report.failures()[0].field, SOURCE_CHARSET);
    assert!(report.failures()[0].message.contains("ISO-885-1"));
}

#[test]
fn test_failures_keep_settings_order() {
    let report = settings("", "", Some("*"), "nope").validate().unwrap_err();
    let fields: Vec<&str> = report.failures().iter().map(|f| f.field).collect();
    assert_eq!(fields, vec![SOURCE_PATH, DEST_PATH, FILE_FILTER, SOURCE_CHARSET]);
}

#[test]
fn test_default_filter_matches_everything() {
    let request = settings("in", "out", None, "utf-8").validate().unwrap();
    assert_eq!(request.filter_pattern(), MATCH_ALL_FILTER);
}

#[test]
fn test_charset_label_is_case_insensitive() {
    assert!(settings("in", "out", None, "shift_jis").validate().is_ok());
    assert!(settings("in", "out", None, "Shift_JIS").validate().is_ok());
}
