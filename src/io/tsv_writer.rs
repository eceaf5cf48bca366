use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result, bail};

use crate::ctx::Ctx;

pub fn write_tsv(path: &Path, ctx: &Ctx) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    let mut w = BufWriter::new(file);

    ensure_len(ctx.verdicts.len(), ctx.records.len(), "verdicts")?;

    writeln!(
        w,
        "id\tdisposition\tprobability_exoplanet\tprobability_false_positive\tconfidence\tdescription"
    )?;
    for v in &ctx.verdicts {
        writeln!(
            w,
            "{}\t{}\t{:.6}\t{:.6}\t{:.6}\t{}",
            sanitize(&v.record.id.to_string()),
            v.disposition,
            v.record.probability_exoplanet,
            v.record.probability_false_positive,
            v.record.confidence,
            v.description.text
        )?;
    }
    w.flush()?;

    Ok(())
}

fn ensure_len(got: usize, expected: usize, name: &str) -> Result<()> {
    if got != expected {
        bail!("{} length mismatch: {} != {}", name, got, expected);
    }
    Ok(())
}

fn sanitize(field: &str) -> String {
    field.replace(['\t', '\n', '\r'], " ")
}
