use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use similar::{ChangeTag, TextDiff};

fn project_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .to_path_buf()
}

fn fixture_dir() -> PathBuf {
    project_root().join("fixtures")
}

fn golden_dir() -> PathBuf {
    project_root().join("golden")
}

fn update_golden() -> bool {
    std::env::var("UPDATE_GOLDEN").is_ok()
}

fn run_cli(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_pvpc-periods"))
        .args(args)
        .output()
        .expect("Failed to execute pvpc-periods")
}

fn diff_strings(expected: &str, actual: &str) -> String {
    let diff = TextDiff::from_lines(expected, actual);
    let mut out = String::new();
    for change in diff.iter_all_changes() {
        let sign = match change.tag() {
            ChangeTag::Delete => "-",
            ChangeTag::Insert => "+",
            ChangeTag::Equal => " ",
        };
        out.push_str(&format!("{sign}{change}"));
    }
    out
}

#[test]
fn golden_period_json_output() {
    let fixtures = fixture_dir();
    let golden = golden_dir();

    let mut entries: Vec<_> = fs::read_dir(&fixtures)
        .expect("Failed to read fixtures directory")
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "txt"))
        .collect();
    entries.sort_by_key(|e| e.file_name());

    assert!(
        !entries.is_empty(),
        "No fixture files found in {fixtures:?}"
    );

    for entry in entries {
        let fixture_path = entry.path();
        let stem = fixture_path.file_stem().unwrap().to_str().unwrap();
        let golden_path = golden.join(format!("{stem}.json"));

        let mut args = vec![
            "period",
            "--output-format",
            "json",
            "--input",
            fixture_path.to_str().unwrap(),
        ];
        if stem.contains("ceuta_melilla") {
            args.push("--ceuta-melilla");
        }
        let output = run_cli(&args);

        assert!(
            output.status.success(),
            "pvpc-periods failed for {}: {}",
            stem,
            String::from_utf8_lossy(&output.stderr)
        );

        let actual = String::from_utf8(output.stdout).expect("Output is not valid UTF-8");

        if update_golden() {
            fs::create_dir_all(&golden).ok();
            fs::write(&golden_path, &actual)
                .unwrap_or_else(|e| panic!("Failed to write golden file {golden_path:?}: {e}"));
            eprintln!("Updated golden file: {golden_path:?}");
            continue;
        }

        let expected = fs::read_to_string(&golden_path).unwrap_or_else(|e| {
            panic!(
                "Golden file {golden_path:?} not found: {e}\n\
                 Hint: Run with UPDATE_GOLDEN=1 to generate golden files"
            )
        });

        if actual != expected {
            let diff = diff_strings(&expected, &actual);
            panic!(
                "Golden test mismatch for {stem}:\n\n\
                 {diff}\n\n\
                 Run with UPDATE_GOLDEN=1 to refresh snapshots"
            );
        }
    }
}

#[test]
fn next_reports_transition() {
    let output = run_cli(&["next", "--at", "2024-03-15T07:00:00"]);
    assert!(output.status.success());

    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("Output is not valid JSON");
    assert_eq!(json["current"], "P3");
    assert_eq!(json["next"], "P2");
    assert_eq!(json["hours"], 1);
    assert_eq!(json["starts_at"], "2024-03-15T08:00:00");
    assert_eq!(json["zone"], "peninsula");
}

#[test]
fn next_without_timestamp_uses_now() {
    let output = run_cli(&["next", "--tz", "Atlantic/Canary", "--ceuta-melilla"]);
    assert!(output.status.success());

    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("Output is not valid JSON");
    assert_eq!(json["zone"], "ceuta_melilla");
    assert!(json["hours"].as_i64().unwrap() > 0);
    assert_ne!(json["current"], json["next"]);
}

#[test]
fn schedule_text_output() {
    let output = run_cli(&[
        "schedule",
        "--date",
        "2024-03-15",
        "--output-format",
        "text",
    ]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<_> = stdout.lines().collect();
    assert_eq!(lines.len(), 24);
    assert_eq!(lines[0], "00:00-01:00 P3");
    assert_eq!(lines[8], "08:00-09:00 P2");
    assert_eq!(lines[18], "18:00-19:00 P1");
    assert_eq!(lines[23], "23:00-24:00 P2");
}

#[test]
fn holidays_json_output() {
    let output = run_cli(&["holidays", "--year", "2025"]);
    assert!(output.status.success());

    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("Output is not valid JSON");
    assert_eq!(json["country"], "ES");
    assert_eq!(json["year"], 2025);
    assert_eq!(json["dates"].as_array().unwrap().len(), 10);
    assert_eq!(json["dates"][2], "2025-04-18");
}

#[test]
fn unsupported_year_exits_with_input_error() {
    let output = run_cli(&["next", "--at", "1950-06-01T12:00:00"]);
    assert_eq!(output.status.code(), Some(2));

    let json: serde_json::Value =
        serde_json::from_slice(&output.stderr).expect("Error is not valid JSON");
    assert_eq!(json["exit_code"], 2);
    assert_eq!(json["status"], "holiday_lookup");
}

#[test]
fn invalid_output_format_is_rejected() {
    let output = run_cli(&["holidays", "--year", "2024", "--output-format", "yaml"]);
    assert_eq!(output.status.code(), Some(2));

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Invalid output_format 'yaml'"));
}
