use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result, bail};
use tracing::{debug, info};

use crate::catalog::{CellValue, Dataset, PlanetRow, detect_mission, is_numeric_column};
use crate::io::open_maybe_gz;

pub const DEFAULT_LIMIT: usize = 50;

pub fn load_planets(path: &Path, dataset: Dataset, limit: usize) -> Result<Vec<PlanetRow>> {
    let reader = open_maybe_gz(path)
        .with_context(|| format!("failed to open dataset {}", path.display()))?;
    let rows = parse_planets(reader, dataset, limit)
        .with_context(|| format!("failed to parse dataset {}", path.display()))?;
    info!(
        dataset = dataset.name(),
        rows = rows.len(),
        limit,
        "planets_loaded"
    );
    Ok(rows)
}

/// Archive exports carry `#` comment lines before the header.
pub fn parse_planets<R: Read>(reader: R, dataset: Dataset, limit: usize) -> Result<Vec<PlanetRow>> {
    let mut rdr = csv::ReaderBuilder::new()
        .comment(Some(b'#'))
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let columns: Vec<&str> = headers.iter().collect();
    if let Some(mission) = detect_mission(&columns[..]) {
        debug!(%mission, dataset = dataset.name(), "mission_detected");
    }
    let useful = dataset.useful_columns();
    let selected: Vec<(usize, &str)> = headers
        .iter()
        .enumerate()
        .filter(|(_, h)| useful.contains(h))
        .collect();
    if selected.is_empty() {
        bail!(
            "no {} columns found (expected any of: {})",
            dataset,
            useful.join(", ")
        );
    }

    let mut rows = Vec::new();
    for record in rdr.records() {
        if rows.len() >= limit {
            break;
        }
        let record = record?;
        let mut row = PlanetRow::new();
        for &(idx, column) in &selected {
            let raw = record.get(idx).unwrap_or("");
            row.insert(column, cell_value(column, raw));
        }
        rows.push(row);
    }
    Ok(rows)
}

fn cell_value(column: &str, raw: &str) -> CellValue {
    if raw.is_empty() {
        return CellValue::Null;
    }
    if is_numeric_column(column) {
        if let Ok(v) = raw.parse::<f64>() {
            return CellValue::Number(v);
        }
    }
    CellValue::Text(raw.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_columns_fall_back_to_text() {
        assert_eq!(cell_value("koi_period", "9.48"), CellValue::Number(9.48));
        assert_eq!(
            cell_value("koi_period", "n/a"),
            CellValue::Text("n/a".to_string())
        );
        assert_eq!(cell_value("kepid", "10797460"), CellValue::Text("10797460".into()));
        assert_eq!(cell_value("koi_teq", ""), CellValue::Null);
    }
}
