use anyhow::Result;

use crate::ctx::Ctx;
use crate::disposition::{BatchSummary, Disposition, Verdict};

pub fn format_summary(ctx: &Ctx) -> Result<String> {
    let version = env!("CARGO_PKG_VERSION");
    let summary = ctx
        .summary
        .as_ref()
        .ok_or_else(|| anyhow::anyhow!("batch summary missing"))?;
    let format = match ctx.input_format {
        Some(crate::ctx::InputFormat::Json) => "json",
        Some(crate::ctx::InputFormat::Csv) => "csv",
        None => "unknown",
    };

    let mut out = String::new();
    out.push_str(&format!("exo-disposition v{}\n", version));
    out.push_str(&format!(
        "Input: {} records, format={}\n",
        ctx.records.len(),
        format
    ));
    out.push_str(&format_batch_summary(summary));
    Ok(out)
}

pub fn format_batch_summary(summary: &BatchSummary) -> String {
    let mut out = String::new();
    out.push_str(&format!("Total Analizado: {}\n", summary.total));
    for d in Disposition::ALL {
        let c = summary.get(d);
        out.push_str(&format!(
            "{}: {} ({}%)\n",
            category_title(d),
            c.count,
            c.percent_display()
        ));
    }
    out
}

pub fn format_verdicts(verdicts: &[Verdict]) -> String {
    let mut out = String::new();
    out.push_str("id\tdisposition\tconfidence\tp_exoplanet\tp_false_positive\tdescription\n");
    for v in verdicts {
        out.push_str(&format!(
            "{}\t{}\t{}%\t{}%\t{}%\t{}\n",
            v.record.id,
            v.description.label,
            v.confidence_percent(),
            v.exoplanet_percent(),
            v.false_positive_percent(),
            v.description.text
        ));
    }
    out
}

fn category_title(d: Disposition) -> &'static str {
    match d {
        Disposition::Confirmed => "Confirmados",
        Disposition::Candidate => "Candidatos",
        Disposition::FalsePositive => "Falsos Positivos",
    }
}
