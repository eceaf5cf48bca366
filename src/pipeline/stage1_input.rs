use std::collections::{HashMap, HashSet};

use anyhow::Result;
use tracing::{info, warn};

use crate::ctx::Ctx;
use crate::disposition::{PredictionRecord, RecordId};
use crate::io::predictions::read_predictions;
use crate::pipeline::Stage;

pub struct Stage1Input;

impl Stage1Input {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage1Input {
    fn name(&self) -> &'static str {
        "stage1_input"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let (format, records) = read_predictions(&ctx.input)?;

        let warnings = duplicate_id_warnings(&records);
        for w in &warnings {
            warn!(warning = %w, "duplicate_prediction_id");
        }

        info!(
            input = %ctx.input.display(),
            records = records.len(),
            "predictions_loaded"
        );
        ctx.input_format = Some(format);
        ctx.records = records;
        ctx.warnings.extend(warnings);
        Ok(())
    }
}

/// Records are kept as-is; repeated ids are only reported.
fn duplicate_id_warnings(records: &[PredictionRecord]) -> Vec<String> {
    let mut seen: HashMap<&RecordId, usize> = HashMap::new();
    for r in records {
        *seen.entry(&r.id).or_insert(0) += 1;
    }
    let mut warnings = Vec::new();
    let mut reported = HashSet::new();
    for r in records {
        let n = seen[&r.id];
        if n > 1 && reported.insert(&r.id) {
            warnings.push(format!("prediction id {} appears {} times", r.id, n));
        }
    }
    warnings
}
