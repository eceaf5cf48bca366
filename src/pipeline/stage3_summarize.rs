use anyhow::Result;
use tracing::info;

use crate::ctx::Ctx;
use crate::disposition::summarize;
use crate::pipeline::Stage;

pub struct Stage3Summarize;

impl Stage3Summarize {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage3Summarize {
    fn name(&self) -> &'static str {
        "stage3_summarize"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let summary = summarize(&ctx.records);
        if summary.total == 0 {
            ctx.warnings.push("no predictions in input".to_string());
        }
        info!(
            total = summary.total,
            confirmed = summary.confirmed.count,
            candidate = summary.candidate.count,
            false_positive = summary.false_positive.count,
            "summary_ready"
        );
        ctx.summary = Some(summary);
        Ok(())
    }
}
