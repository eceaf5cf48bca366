use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::Deserialize;

use crate::ctx::InputFormat;
use crate::disposition::{PredictionRecord, RecordId};
use crate::io::open_maybe_gz;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Payload {
    Records(Vec<PredictionRecord>),
    Response(ClassifyResponse),
}

/// Body returned by the classification service.
#[derive(Debug, Deserialize)]
struct ClassifyResponse {
    success: Option<bool>,
    predictions: Option<Vec<PredictionRecord>>,
    message: Option<String>,
    detail: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CsvRow {
    id: String,
    #[serde(alias = "probabilityExoplanet")]
    probability_exoplanet: f64,
    #[serde(alias = "probabilityFalsePositive")]
    probability_false_positive: f64,
    confidence: f64,
}

impl From<CsvRow> for PredictionRecord {
    fn from(row: CsvRow) -> Self {
        let id = match row.id.parse::<i64>() {
            Ok(v) => RecordId::Int(v),
            Err(_) => RecordId::Text(row.id),
        };
        PredictionRecord {
            id,
            probability_exoplanet: row.probability_exoplanet,
            probability_false_positive: row.probability_false_positive,
            confidence: row.confidence,
        }
    }
}

pub fn read_predictions(path: &Path) -> Result<(InputFormat, Vec<PredictionRecord>)> {
    let format = InputFormat::detect(path)?;
    let reader =
        open_maybe_gz(path).with_context(|| format!("failed to open {}", path.display()))?;
    let records = match format {
        InputFormat::Json => parse_json(reader),
        InputFormat::Csv => parse_csv(reader),
    }
    .with_context(|| format!("failed to read predictions from {}", path.display()))?;
    Ok((format, records))
}

pub fn parse_json<R: Read>(reader: R) -> Result<Vec<PredictionRecord>> {
    let payload: Payload = serde_json::from_reader(reader)
        .context("expected a prediction array or a classification response object")?;
    match payload {
        Payload::Records(records) => Ok(records),
        Payload::Response(resp) => {
            if resp.success == Some(false) {
                let reason = resp
                    .message
                    .or(resp.detail)
                    .unwrap_or_else(|| "prediction failed".to_string());
                bail!("classification service reported an error: {}", reason);
            }
            match resp.predictions {
                Some(records) => Ok(records),
                None => bail!("classification response has no predictions"),
            }
        }
    }
}

pub fn parse_csv<R: Read>(reader: R) -> Result<Vec<PredictionRecord>> {
    let mut rdr = csv::ReaderBuilder::new()
        .comment(Some(b'#'))
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut records = Vec::new();
    for (idx, row) in rdr.deserialize::<CsvRow>().enumerate() {
        let row = row.with_context(|| format!("malformed prediction record {}", idx + 1))?;
        records.push(row.into());
    }
    Ok(records)
}
