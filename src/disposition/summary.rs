use serde::Serialize;

use crate::disposition::{Disposition, PredictionRecord, classify, format_one_decimal};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DispositionCount {
    pub count: usize,
    pub percent: f64,
}

impl DispositionCount {
    pub fn percent_display(&self) -> String {
        format_one_decimal(self.percent)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchSummary {
    pub total: usize,
    pub confirmed: DispositionCount,
    pub candidate: DispositionCount,
    pub false_positive: DispositionCount,
}

impl BatchSummary {
    pub fn get(&self, disposition: Disposition) -> &DispositionCount {
        match disposition {
            Disposition::Confirmed => &self.confirmed,
            Disposition::Candidate => &self.candidate,
            Disposition::FalsePositive => &self.false_positive,
        }
    }
}

/// Counts are order independent. An empty batch reports 0% everywhere.
pub fn summarize(records: &[PredictionRecord]) -> BatchSummary {
    let mut confirmed = 0usize;
    let mut candidate = 0usize;
    let mut false_positive = 0usize;
    for record in records {
        match classify(record.probability_exoplanet) {
            Disposition::Confirmed => confirmed += 1,
            Disposition::Candidate => candidate += 1,
            Disposition::FalsePositive => false_positive += 1,
        }
    }
    let total = records.len();
    BatchSummary {
        total,
        confirmed: count(confirmed, total),
        candidate: count(candidate, total),
        false_positive: count(false_positive, total),
    }
}

fn count(count: usize, total: usize) -> DispositionCount {
    let percent = if total == 0 {
        0.0
    } else {
        count as f64 / total as f64 * 100.0
    };
    DispositionCount { count, percent }
}
