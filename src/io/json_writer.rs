use anyhow::{Context, Result};

use crate::ctx::Ctx;
use crate::disposition::{DispositionCount, Verdict};
use crate::schema::v1::{
    CategorySummary, ClassificationReportV1, InputMeta, Summary, Thresholds, VerdictRow,
};

pub fn build_report(ctx: &Ctx) -> Result<ClassificationReportV1> {
    let summary = ctx.summary.as_ref().context("batch summary missing")?;

    let input_meta = InputMeta {
        path: ctx.input.display().to_string(),
        format: ctx.input_format.map(|f| f.as_schema()),
        records: Some(ctx.records.len() as u64),
    };

    let summary = Summary {
        total: summary.total as u64,
        confirmed: category(&summary.confirmed),
        candidate: category(&summary.candidate),
        false_positive: category(&summary.false_positive),
    };

    let predictions = ctx.verdicts.iter().map(verdict_row).collect::<Vec<_>>();

    Ok(ClassificationReportV1 {
        tool: "exo-disposition".to_string(),
        version: ctx.tool_version.clone(),
        schema_version: "v1".to_string(),
        input_meta,
        thresholds: Thresholds {
            confirmed_percent: crate::disposition::CONFIRMED_THRESHOLD,
            candidate_percent: crate::disposition::CANDIDATE_THRESHOLD,
        },
        summary,
        predictions,
        warnings: ctx.warnings.clone(),
    })
}

fn category(c: &DispositionCount) -> CategorySummary {
    CategorySummary {
        count: c.count as u64,
        percent: c.percent,
    }
}

fn verdict_row(v: &Verdict) -> VerdictRow {
    VerdictRow {
        id: v.record.id.to_string(),
        disposition: v.disposition.as_str().to_string(),
        label: v.description.label.to_string(),
        css_class: v.description.css_class.to_string(),
        description: v.description.text.clone(),
        probability_exoplanet: v.record.probability_exoplanet,
        probability_false_positive: v.record.probability_false_positive,
        confidence: v.record.confidence,
    }
}
