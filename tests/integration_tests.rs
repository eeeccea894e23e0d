use anyhow::Result;
use contact_log::{CliConfig, ContactLogError, ContactLogPipeline, LocalStorage, LogPageEngine};
use std::path::Path;
use tempfile::TempDir;

fn config_for(dir: &Path, csv: &str, config: &str, output: &str) -> CliConfig {
    CliConfig {
        csv_path: dir.join(csv),
        config_path: dir.join(config),
        output_path: dir.join(output),
        verbose: false,
        monitor: false,
    }
}

async fn generate(config: CliConfig) -> contact_log::Result<std::path::PathBuf> {
    let pipeline = ContactLogPipeline::new(LocalStorage::default(), config);
    LogPageEngine::new(pipeline).run().await
}

fn tbody(html: &str) -> &str {
    let start = html.find("<tbody>").expect("tbody start");
    let end = html.find("</tbody>").expect("tbody end");
    &html[start..end]
}

#[tokio::test]
async fn test_end_to_end_minimal_station() -> Result<()> {
    let temp_dir = TempDir::new()?;
    std::fs::write(
        temp_dir.path().join("config.json"),
        r#"{"callsign":"bg1abc","license":"A"}"#,
    )?;
    std::fs::write(
        temp_dir.path().join("data.csv"),
        "日期DATE,呼号CALL\n2024-01-01,BH1XYZ\n",
    )?;

    let output = generate(config_for(temp_dir.path(), "data.csv", "config.json", "index.html")).await?;
    assert_eq!(output, temp_dir.path().join("index.html"));

    let html = std::fs::read_to_string(&output)?;
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains(r#"<th onclick="sortTable(0)">日期 DATE</th>"#));
    assert!(html.contains(r#"<th onclick="sortTable(1)">呼号 CALL</th>"#));
    assert_eq!(tbody(&html).matches("<tr>").count(), 1);
    assert!(html.contains("<tr><td>2024-01-01</td><td>BH1XYZ</td></tr>"));
    assert!(html.contains("<li><strong>CALL:</strong> BG1ABC</li>"));
    assert!(html.contains("<li><strong>CLASS:</strong> A</li>"));
    for label in ["OPR:", "QTH:", "GRID:", "EMAIL:"] {
        assert!(!html.contains(label), "unexpected {label} line");
    }
    Ok(())
}

#[tokio::test]
async fn test_full_profile_and_bom_csv() -> Result<()> {
    let temp_dir = TempDir::new()?;
    std::fs::write(
        temp_dir.path().join("config.json"),
        r#"{
            "Callsign": "bg1abc",
            "License": "B",
            "Operator": "Li Lei",
            "Location": "Beijing",
            "Grid": "OM89",
            "Email": "bg1abc@example.com"
        }"#,
    )?;
    let mut csv = b"\xef\xbb\xbf".to_vec();
    csv.extend_from_slice("日期DATE,呼号CALL,Sent RST,备注\n2024-01-01,BH1XYZ,59\n2024-01-02,BA1AA,599,<b>hi</b>,extra\n".as_bytes());
    std::fs::write(temp_dir.path().join("data.csv"), csv)?;

    let output = generate(config_for(temp_dir.path(), "data.csv", "config.json", "log.html")).await?;
    let html = std::fs::read_to_string(output)?;

    assert!(html.contains("<li><strong>OPR:</strong> Li Lei</li>"));
    assert!(html.contains("<li><strong>QTH:</strong> Beijing</li>"));
    assert!(html.contains("<li><strong>GRID:</strong> OM89</li>"));
    assert!(html.contains("<li><strong>EMAIL:</strong> bg1abc@example.com</li>"));

    assert!(html.contains(r#"<th onclick="sortTable(0)">日期 DATE</th>"#));
    assert!(html.contains(r#"<th onclick="sortTable(2)">Sent RST</th>"#));
    assert!(html.contains(r#"<th onclick="sortTable(3)">备注</th>"#));

    let body = tbody(&html);
    assert_eq!(body.matches("<tr>").count(), 2);
    assert!(body.contains("<tr><td>2024-01-01</td><td>BH1XYZ</td><td>59</td><td></td></tr>"));
    assert!(body.contains(
        "<tr><td>2024-01-02</td><td>BA1AA</td><td>599</td><td>&lt;b&gt;hi&lt;/b&gt;</td></tr>"
    ));
    assert!(!body.contains("extra"));
    Ok(())
}

#[tokio::test]
async fn test_empty_and_header_only_csv() -> Result<()> {
    let temp_dir = TempDir::new()?;
    std::fs::write(temp_dir.path().join("config.json"), r#"{"callsign":"bg1abc"}"#)?;
    std::fs::write(temp_dir.path().join("empty.csv"), "")?;
    std::fs::write(temp_dir.path().join("header.csv"), "DATE,CALL\n")?;

    let output = generate(config_for(temp_dir.path(), "empty.csv", "config.json", "empty.html")).await?;
    let html = std::fs::read_to_string(output)?;
    assert_eq!(tbody(&html).matches("<tr>").count(), 0);
    assert!(!html.contains("sortTable(0)\">"));

    let output = generate(config_for(temp_dir.path(), "header.csv", "config.json", "header.html")).await?;
    let html = std::fs::read_to_string(output)?;
    assert_eq!(tbody(&html).matches("<tr>").count(), 0);
    assert!(html.contains(r#"<th onclick="sortTable(1)">CALL</th>"#));
    Ok(())
}

#[tokio::test]
async fn test_toml_station_profile() -> Result<()> {
    let temp_dir = TempDir::new()?;
    std::fs::write(
        temp_dir.path().join("station.toml"),
        "callsign = \"bg1abc\"\nlicense = \"C\"\nemail = \"\"\n",
    )?;
    std::fs::write(temp_dir.path().join("data.csv"), "CALL\nBH1XYZ\n")?;

    let output = generate(config_for(temp_dir.path(), "data.csv", "station.toml", "index.html")).await?;
    let html = std::fs::read_to_string(output)?;
    assert!(html.contains("<li><strong>CLASS:</strong> C</li>"));
    assert!(!html.contains("EMAIL:"));
    Ok(())
}

#[tokio::test]
async fn test_missing_inputs_fail_without_output() -> Result<()> {
    let temp_dir = TempDir::new()?;
    std::fs::write(temp_dir.path().join("data.csv"), "CALL\nBH1XYZ\n")?;

    let err = generate(config_for(temp_dir.path(), "data.csv", "missing.json", "index.html"))
        .await
        .unwrap_err();
    assert!(matches!(err, ContactLogError::ConfigReadError { .. }));
    assert!(err.to_string().contains("missing.json"));
    assert!(!temp_dir.path().join("index.html").exists());

    std::fs::write(temp_dir.path().join("config.json"), r#"{"callsign":"bg1abc"}"#)?;
    let err = generate(config_for(temp_dir.path(), "missing.csv", "config.json", "index.html"))
        .await
        .unwrap_err();
    assert!(matches!(err, ContactLogError::CsvNotFoundError { .. }));
    assert!(err.to_string().starts_with("CSV file not found:"));
    assert!(!temp_dir.path().join("index.html").exists());
    Ok(())
}

#[tokio::test]
async fn test_unwritable_output_path() -> Result<()> {
    let temp_dir = TempDir::new()?;
    std::fs::write(temp_dir.path().join("config.json"), r#"{"callsign":"bg1abc"}"#)?;
    std::fs::write(temp_dir.path().join("data.csv"), "CALL\nBH1XYZ\n")?;

    let err = generate(config_for(
        temp_dir.path(),
        "data.csv",
        "config.json",
        "no-such-dir/index.html",
    ))
    .await
    .unwrap_err();
    assert!(matches!(err, ContactLogError::OutputWriteError { .. }));
    assert!(err.to_string().contains("index.html"));
    assert_ne!(err.exit_code(), 0);
    Ok(())
}
