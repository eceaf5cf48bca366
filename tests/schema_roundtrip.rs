use exo_disposition::schema::v1::ClassificationReportV1;

#[test]
fn schema_roundtrip_v1() {
    let report = ClassificationReportV1::empty("0.0.0-test", "preds.json");
    let json = serde_json::to_string(&report).unwrap();
    let decoded: ClassificationReportV1 = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded.tool, "exo-disposition");
    assert_eq!(decoded.schema_version, "v1");
    assert_eq!(decoded.input_meta.path, "preds.json");
    assert_eq!(decoded.summary.total, 0);
    assert!(decoded.predictions.is_empty());
}
