use exo_disposition::ctx::Ctx;
use exo_disposition::disposition::{PredictionRecord, RecordId, summarize, verdict};
use exo_disposition::io::json_writer::build_report;

#[test]
fn json_report_populated() {
    let mut ctx = Ctx::new(
        std::path::PathBuf::from("preds.csv"),
        std::path::PathBuf::from("out"),
        true,
        true,
        "0.0.0-test",
    );
    ctx.records = vec![
        PredictionRecord {
            id: RecordId::Int(7),
            probability_exoplanet: 0.91,
            probability_false_positive: 0.09,
            confidence: 0.91,
        },
        PredictionRecord {
            id: RecordId::Text("TOI-100".into()),
            probability_exoplanet: 0.3,
            probability_false_positive: 0.7,
            confidence: 0.7,
        },
    ];
    ctx.verdicts = ctx.records.iter().map(verdict).collect();
    ctx.summary = Some(summarize(&ctx.records));
    ctx.warnings.push("w".to_string());

    let report = build_report(&ctx).unwrap();
    let json = serde_json::to_value(report).unwrap();

    assert_eq!(json["tool"], "exo-disposition");
    assert_eq!(json["version"], "0.0.0-test");
    assert_eq!(json["schema_version"], "v1");
    assert_eq!(json["input_meta"]["format"], "csv");
    assert_eq!(json["input_meta"]["records"], 2);
    assert_eq!(json["thresholds"]["confirmed_percent"], 80.0);
    assert_eq!(json["thresholds"]["candidate_percent"], 50.0);
    assert_eq!(json["summary"]["total"], 2);
    assert_eq!(json["summary"]["CONFIRMED"]["count"], 1);
    assert_eq!(json["summary"]["CANDIDATE"]["count"], 0);
    assert_eq!(json["summary"]["FALSE_POSITIVE"]["percent"], 50.0);
    assert_eq!(json["predictions"][0]["id"], "7");
    assert_eq!(json["predictions"][0]["disposition"], "CONFIRMED");
    assert_eq!(json["predictions"][1]["id"], "TOI-100");
    assert_eq!(json["predictions"][1]["css_class"], "false-positive-badge");
    assert_eq!(json["warnings"][0], "w");
}

#[test]
fn json_report_requires_summary() {
    let ctx = Ctx::new(
        std::path::PathBuf::from("preds.csv"),
        std::path::PathBuf::from("out"),
        true,
        false,
        "0.0.0-test",
    );
    assert!(build_report(&ctx).is_err());
}
