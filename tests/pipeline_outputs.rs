use std::fs;
use std::path::Path;

use assert_cmd::Command;
use serde_json::Value;
use tempfile::TempDir;

fn write_predictions(dir: &Path) -> std::path::PathBuf {
    let path = dir.join("predictions.json");
    fs::write(
        &path,
        r#"{"success": true, "predictions": [
            {"id": 1, "probability_exoplanet": 0.95, "probability_false_positive": 0.05, "confidence": 0.95},
            {"id": 2, "probability_exoplanet": 0.6, "probability_false_positive": 0.4, "confidence": 0.6},
            {"id": 3, "probability_exoplanet": 0.2, "probability_false_positive": 0.8, "confidence": 0.8}
        ]}"#,
    )
    .unwrap();
    path
}

fn run_classify(input: &Path, out: &Path, extra: &[&str]) -> String {
    let mut cmd = Command::cargo_bin("exo-disposition").unwrap();
    cmd.arg("classify")
        .arg("--input")
        .arg(input)
        .arg("--out")
        .arg(out)
        .args(extra);
    let output = cmd.assert().success().get_output().stdout.clone();
    String::from_utf8(output).unwrap()
}

#[test]
fn classify_writes_json_and_tsv() {
    let tmp = TempDir::new().unwrap();
    let out = tmp.path().join("out");
    let input = write_predictions(tmp.path());
    let stdout = run_classify(&input, &out, &["--json", "--tsv"]);

    assert!(stdout.contains("Total Analizado: 3"));
    assert!(stdout.contains("Confirmados: 1 (33.3%)"));

    let v: Value = serde_json::from_slice(&fs::read(out.join("classification.json")).unwrap()).unwrap();
    assert_eq!(v["tool"], "exo-disposition");
    assert_eq!(v["summary"]["total"], 3);
    assert_eq!(v["predictions"][1]["disposition"], "CANDIDATE");

    let tsv = fs::read_to_string(out.join("classification.tsv")).unwrap();
    assert_eq!(tsv.lines().count(), 4);
}

#[test]
fn classify_without_outputs_creates_nothing() {
    let tmp = TempDir::new().unwrap();
    let out = tmp.path().join("out");
    let input = write_predictions(tmp.path());
    let stdout = run_classify(&input, &out, &["--rows"]);
    assert!(!out.exists());
    assert!(stdout.contains("Baja probabilidad (20.0%)"));
}

#[test]
fn classify_reports_duplicate_ids() {
    let tmp = TempDir::new().unwrap();
    let input = tmp.path().join("dups.csv");
    fs::write(
        &input,
        "id,probability_exoplanet,probability_false_positive,confidence\n5,0.9,0.1,0.9\n5,0.1,0.9,0.9\n",
    )
    .unwrap();
    let stdout = run_classify(&input, tmp.path(), &[]);
    assert!(stdout.contains("warnings:"));
    assert!(stdout.contains("prediction id 5 appears 2 times"));
    assert!(stdout.contains("Total Analizado: 2"));
}

#[test]
fn classify_failed_service_response_exits_nonzero() {
    let tmp = TempDir::new().unwrap();
    let input = tmp.path().join("failed.json");
    fs::write(&input, r#"{"success": false, "message": "Error en la predicción"}"#).unwrap();
    let mut cmd = Command::cargo_bin("exo-disposition").unwrap();
    cmd.arg("classify").arg("--input").arg(&input);
    cmd.assert().failure();
}

#[test]
fn planets_prints_cards() {
    let tmp = TempDir::new().unwrap();
    let input = tmp.path().join("toi.csv");
    fs::write(
        &input,
        "toi,tid,tfopwg_disp,pl_orbper,pl_rade,pl_eqt,st_teff,ra\n1000.01,50365310,FP,2.17,5.8,3127,10249,112.3\n",
    )
    .unwrap();
    let mut cmd = Command::cargo_bin("exo-disposition").unwrap();
    cmd.arg("planets")
        .arg("--dataset")
        .arg("tess")
        .arg("--input")
        .arg(&input);
    let output = cmd.assert().success().get_output().stdout.clone();
    let text = String::from_utf8(output).unwrap();
    assert!(text.contains("1 exoplanetas encontrados"));
    assert!(text.contains("== TOI-1000.01 =="));
    assert!(text.contains("Temperatura estelar: 10249 K"));
}
