use exo_disposition::ctx::{Ctx, InputFormat};
use exo_disposition::disposition::{PredictionRecord, RecordId, summarize, verdict};
use exo_disposition::io::summary::{format_summary, format_verdicts};

fn ctx_with(probs: &[f64]) -> Ctx {
    let mut ctx = Ctx::new(
        std::path::PathBuf::from("preds.json"),
        std::path::PathBuf::from("out"),
        false,
        false,
        "0.0.0-test",
    );
    ctx.records = probs
        .iter()
        .enumerate()
        .map(|(i, &p)| PredictionRecord {
            id: RecordId::Int(i as i64 + 1),
            probability_exoplanet: p,
            probability_false_positive: 1.0 - p,
            confidence: 0.8,
        })
        .collect();
    ctx.verdicts = ctx.records.iter().map(verdict).collect();
    ctx.summary = Some(summarize(&ctx.records));
    ctx
}

#[test]
fn summary_format() {
    let ctx = ctx_with(&[0.95, 0.6, 0.2]);
    assert_eq!(ctx.input_format, Some(InputFormat::Json));

    let s = format_summary(&ctx).unwrap();
    assert!(s.contains("exo-disposition v"));
    assert!(s.contains("Input: 3 records, format=json"));
    assert!(s.contains("Total Analizado: 3"));
    assert!(s.contains("Confirmados: 1 (33.3%)"));
    assert!(s.contains("Candidatos: 1 (33.3%)"));
    assert!(s.contains("Falsos Positivos: 1 (33.3%)"));
}

#[test]
fn summary_empty_batch() {
    let ctx = ctx_with(&[]);
    let s = format_summary(&ctx).unwrap();
    assert!(s.contains("Total Analizado: 0"));
    assert!(s.contains("Confirmados: 0 (0.0%)"));
    assert!(!s.contains("NaN"));
}

#[test]
fn summary_requires_summarize_stage() {
    let mut ctx = ctx_with(&[0.9]);
    ctx.summary = None;
    assert!(format_summary(&ctx).is_err());
}

#[test]
fn verdict_rows() {
    let ctx = ctx_with(&[0.95, 0.2]);
    let rows = format_verdicts(&ctx.verdicts);
    let lines: Vec<&str> = rows.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("id\tdisposition"));
    assert_eq!(
        lines[1],
        "1\tCONFIRMED\t80.0%\t95.0%\t5.0%\tAlta confianza (95.0%) - Muy probable exoplaneta real"
    );
    assert!(lines[2].starts_with("2\tFALSE POSITIVE\t"));
}
