use std::process::Command;

fn bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_citability"))
}

#[test]
fn missing_url_prints_usage_and_fails() {
    let output = bin().output().unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Usage"), "stderr: {}", stderr);
}

#[test]
fn local_html_file_prints_json_report() {
    let output = bin()
        .args(["https://example.com/geo", "--html-file", "tests/fixtures/article.html"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["url"], "https://example.com/geo");
    assert_eq!(report["total_blocks_analyzed"], 4);
    assert_eq!(report["top_5_citable"][0]["grade"], "B");
}

#[test]
fn summary_mode_prints_table() {
    let output = bin()
        .args(["https://example.com/geo", "--html-file", "tests/fixtures/thin.html", "--summary"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Blocks analyzed: 0"));
    assert!(stdout.contains("No content blocks found."));
}

#[test]
fn unsupported_scheme_reports_error_object() {
    let output = bin().arg("ftp://example.com").output().unwrap();
    assert!(!output.status.success());
    let body: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(body["error"].as_str().unwrap().starts_with("Failed to fetch page"));
}
