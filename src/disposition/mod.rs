//! Probability to disposition mapping.
//!
//! A candidate is judged on `probability_exoplanet` only. The false positive
//! probability travels with the record for display.

use std::fmt;

use serde::{Deserialize, Serialize};

pub mod summary;

pub use summary::{BatchSummary, DispositionCount, summarize};

/// Minimum exoplanet probability, in percent, for `CONFIRMED`.
pub const CONFIRMED_THRESHOLD: f64 = 80.0;
/// Minimum exoplanet probability, in percent, for `CANDIDATE`.
pub const CANDIDATE_THRESHOLD: f64 = 50.0;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Int(i64),
    Text(String),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Int(v) => write!(f, "{}", v),
            RecordId::Text(v) => f.write_str(v),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionRecord {
    pub id: RecordId,
    #[serde(alias = "probabilityExoplanet")]
    pub probability_exoplanet: f64,
    #[serde(alias = "probabilityFalsePositive")]
    pub probability_false_positive: f64,
    pub confidence: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Disposition {
    Confirmed,
    Candidate,
    FalsePositive,
}

impl Disposition {
    pub const ALL: [Disposition; 3] = [
        Disposition::Confirmed,
        Disposition::Candidate,
        Disposition::FalsePositive,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Disposition::Confirmed => "CONFIRMED",
            Disposition::Candidate => "CANDIDATE",
            Disposition::FalsePositive => "FALSE_POSITIVE",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Disposition::Confirmed => "CONFIRMED",
            Disposition::Candidate => "CANDIDATE",
            Disposition::FalsePositive => "FALSE POSITIVE",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Disposition::Confirmed => "confirmed-badge",
            Disposition::Candidate => "candidate-badge",
            Disposition::FalsePositive => "false-positive-badge",
        }
    }
}

impl fmt::Display for Disposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Out-of-range input is not rejected. NaN fails both comparisons and ends up
/// as `FalsePositive`.
pub fn classify(probability_exoplanet: f64) -> Disposition {
    let percent = probability_exoplanet * 100.0;
    if percent >= CONFIRMED_THRESHOLD {
        Disposition::Confirmed
    } else if percent >= CANDIDATE_THRESHOLD {
        Disposition::Candidate
    } else {
        Disposition::FalsePositive
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Description {
    pub label: &'static str,
    pub css_class: &'static str,
    pub text: String,
}

pub fn describe(disposition: Disposition, probability_exoplanet: f64) -> Description {
    let percent = format_percent(probability_exoplanet);
    let text = match disposition {
        Disposition::Confirmed => {
            format!("Alta confianza ({}%) - Muy probable exoplaneta real", percent)
        }
        Disposition::Candidate => {
            format!("Señal prometedora ({}%) - Necesita más estudio", percent)
        }
        Disposition::FalsePositive => format!(
            "Baja probabilidad ({}%) - Posible artefacto o estrella binaria",
            percent
        ),
    };
    Description {
        label: disposition.label(),
        css_class: disposition.css_class(),
        text,
    }
}

/// One rendered result row.
#[derive(Debug, Clone, PartialEq)]
pub struct Verdict {
    pub record: PredictionRecord,
    pub disposition: Disposition,
    pub description: Description,
}

impl Verdict {
    pub fn confidence_percent(&self) -> String {
        format_percent(self.record.confidence)
    }

    pub fn exoplanet_percent(&self) -> String {
        format_percent(self.record.probability_exoplanet)
    }

    pub fn false_positive_percent(&self) -> String {
        format_percent(self.record.probability_false_positive)
    }
}

pub fn verdict(record: &PredictionRecord) -> Verdict {
    let disposition = classify(record.probability_exoplanet);
    Verdict {
        record: record.clone(),
        disposition,
        description: describe(disposition, record.probability_exoplanet),
    }
}

/// Fraction in [0, 1] rendered as a percentage with one decimal.
pub fn format_percent(fraction: f64) -> String {
    format_one_decimal(fraction * 100.0)
}

/// Ties round away from zero (`0.25` -> `0.3`); plain `{:.1}` rounds them to even.
pub fn format_one_decimal(value: f64) -> String {
    format!("{:.1}", (value * 10.0).round() / 10.0)
}
