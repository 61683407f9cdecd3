use hashdupe::config::RunSettings;
use hashdupe::duplicates::TieBreak;
use hashdupe::output::ReportFormat;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn settings(dir: &Path, format: ReportFormat, tie_break: TieBreak) -> RunSettings {
    RunSettings {
        input: dir.join("hashes.csv"),
        output: dir.join("duplicates.txt"),
        format,
        tie_break,
    }
}

const PHOTOS: &str = "photo1.jpg,H1\nphoto.jpg,H1\nc.txt,H2\n";

#[test]
fn test_compact_report_lists_removals_only() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("hashes.csv"), PHOTOS).unwrap();

    let s = settings(dir.path(), ReportFormat::Compact, TieBreak::InputOrder);
    let summary = hashdupe::run(&s).unwrap();

    let report = fs::read_to_string(&s.output).unwrap();
    assert_eq!(report, "photo1.jpg\n");
    assert_eq!(summary.stats.duplicate_groups, 1);
    assert_eq!(summary.stats.duplicate_files, 1);
}

#[test]
fn test_verbose_report_names_kept_file() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("hashes.csv"), PHOTOS).unwrap();

    let s = settings(dir.path(), ReportFormat::Verbose, TieBreak::InputOrder);
    hashdupe::run(&s).unwrap();

    let report = fs::read_to_string(&s.output).unwrap();
    let lines: Vec<&str> = report.lines().collect();
    assert_eq!(
        lines,
        vec!["Keep: photo.jpg", "Removal candidates:", "  photo1.jpg", "---"]
    );
    assert!(!report.contains("c.txt"));
}

#[test]
fn test_csv_report() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("hashes.csv"), PHOTOS).unwrap();

    let s = settings(dir.path(), ReportFormat::Csv, TieBreak::InputOrder);
    hashdupe::run(&s).unwrap();

    let report = fs::read_to_string(&s.output).unwrap();
    assert_eq!(report, "group_id,keep,removal\n1,photo.jpg,photo1.jpg\n");
}

#[test]
fn test_malformed_row_does_not_crash() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("hashes.csv"),
        "a.txt,H1\nbroken-row\naa.txt,H1\n",
    )
    .unwrap();

    let s = settings(dir.path(), ReportFormat::Verbose, TieBreak::InputOrder);
    let summary = hashdupe::run(&s).unwrap();

    assert_eq!(summary.skipped_rows, 1);
    let report = fs::read_to_string(&s.output).unwrap();
    assert!(!report.contains("broken-row"));
    assert!(report.contains("Keep: a.txt"));
}

#[test]
fn test_groups_follow_input_order() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("hashes.csv"),
        "zz.txt,B\nz.txt,B\nyy.txt,A\ny.txt,A\n",
    )
    .unwrap();

    let s = settings(dir.path(), ReportFormat::Compact, TieBreak::InputOrder);
    hashdupe::run(&s).unwrap();

    let report = fs::read_to_string(&s.output).unwrap();
    assert_eq!(report, "zz.txt\nyy.txt\n");
}

#[test]
fn test_tie_break_changes_keep() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("hashes.csv"), "b.txt,H\na.txt,H\n").unwrap();

    let s = settings(dir.path(), ReportFormat::Compact, TieBreak::InputOrder);
    hashdupe::run(&s).unwrap();
    assert_eq!(fs::read_to_string(&s.output).unwrap(), "a.txt\n");

    let s = settings(dir.path(), ReportFormat::Compact, TieBreak::Lexicographic);
    hashdupe::run(&s).unwrap();
    assert_eq!(fs::read_to_string(&s.output).unwrap(), "b.txt\n");
}

#[test]
fn test_no_duplicates_writes_empty_report() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("hashes.csv"), "a,H1\nb,H2\n").unwrap();

    let s = settings(dir.path(), ReportFormat::Compact, TieBreak::InputOrder);
    hashdupe::run(&s).unwrap();

    assert!(s.output.exists());
    assert!(fs::read_to_string(&s.output).unwrap().is_empty());
}

#[test]
fn test_repeated_rows_are_not_deduplicated() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("hashes.csv"), "x.txt,H\nx.txt,H\n").unwrap();

    let s = settings(dir.path(), ReportFormat::Compact, TieBreak::InputOrder);
    hashdupe::run(&s).unwrap();

    assert_eq!(fs::read_to_string(&s.output).unwrap(), "x.txt\n");
}
