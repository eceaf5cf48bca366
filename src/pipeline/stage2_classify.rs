use anyhow::Result;
use tracing::info;

use crate::ctx::Ctx;
use crate::disposition::verdict;
use crate::pipeline::Stage;

pub struct Stage2Classify;

impl Stage2Classify {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage2Classify {
    fn name(&self) -> &'static str {
        "stage2_classify"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        ctx.verdicts = ctx.records.iter().map(verdict).collect();
        info!(verdicts = ctx.verdicts.len(), "verdicts_ready");
        Ok(())
    }
}
