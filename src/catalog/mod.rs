use std::fmt;
use std::str::FromStr;

use anyhow::{Result, bail};
use serde::Serialize;

pub mod loader;

pub use loader::{DEFAULT_LIMIT, load_planets, parse_planets};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Dataset {
    Kepler,
    K2Planets,
    Tess,
}

impl Dataset {
    pub fn all() -> [Dataset; 3] {
        [Dataset::Kepler, Dataset::K2Planets, Dataset::Tess]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Dataset::Kepler => "kepler",
            Dataset::K2Planets => "k2planets",
            Dataset::Tess => "tess",
        }
    }

    pub fn useful_columns(&self) -> &'static [&'static str] {
        match self {
            Dataset::Kepler => &[
                "kepid",
                "kepoi_name",
                "kepler_name",
                "koi_disposition",
                "koi_period",
                "koi_prad",
                "koi_teq",
                "koi_steff",
            ],
            Dataset::K2Planets => &[
                "k2_name",
                "k2_disposition",
                "k2_period",
                "k2_prad",
                "k2_teq",
                "k2_steff",
            ],
            Dataset::Tess => &[
                "toi",
                "tid",
                "tfopwg_disp",
                "pl_orbper",
                "pl_rade",
                "pl_eqt",
                "st_teff",
            ],
        }
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Dataset {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "kepler" => Ok(Dataset::Kepler),
            "k2planets" => Ok(Dataset::K2Planets),
            "tess" => Ok(Dataset::Tess),
            other => bail!(
                "invalid dataset '{}', use: kepler, k2planets or tess",
                other
            ),
        }
    }
}

pub const NUMERIC_COLUMNS: [&str; 12] = [
    "koi_period",
    "koi_prad",
    "koi_teq",
    "koi_steff",
    "k2_period",
    "k2_prad",
    "k2_teq",
    "k2_steff",
    "pl_orbper",
    "pl_rade",
    "pl_eqt",
    "st_teff",
];

pub fn is_numeric_column(name: &str) -> bool {
    NUMERIC_COLUMNS.contains(&name)
}

/// Survey a table came from, keyed by its disposition column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Mission {
    Kepler,
    K2,
    Tess,
}

impl Mission {
    pub fn disposition_column(&self) -> &'static str {
        match self {
            Mission::Kepler => "koi_disposition",
            Mission::K2 => "disposition",
            Mission::Tess => "tfopwg_disp",
        }
    }
}

impl fmt::Display for Mission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mission::Kepler => f.write_str("Kepler"),
            Mission::K2 => f.write_str("K2"),
            Mission::Tess => f.write_str("TESS"),
        }
    }
}

pub fn detect_mission<S: AsRef<str>>(columns: &[S]) -> Option<Mission> {
    let has = |name: &str| columns.iter().any(|c| c.as_ref() == name);
    [Mission::Kepler, Mission::K2, Mission::Tess]
        .into_iter()
        .find(|m| has(m.disposition_column()))
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CellValue {
    Null,
    Number(f64),
    Text(String),
}

impl CellValue {
    /// Empty text, zero, NaN and null count as missing when walking an alias
    /// chain.
    pub fn is_present(&self) -> bool {
        match self {
            CellValue::Null => false,
            CellValue::Number(v) => *v != 0.0 && !v.is_nan(),
            CellValue::Text(s) => !s.is_empty(),
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Null => f.write_str("null"),
            CellValue::Number(v) => write!(f, "{}", v),
            CellValue::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PlanetRow {
    columns: Vec<(String, CellValue)>,
}

impl PlanetRow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, column: impl Into<String>, value: CellValue) {
        let column = column.into();
        if let Some(slot) = self.columns.iter_mut().find(|(c, _)| *c == column) {
            slot.1 = value;
        } else {
            self.columns.push((column, value));
        }
    }

    pub fn get(&self, column: &str) -> Option<&CellValue> {
        self.columns
            .iter()
            .find(|(c, _)| c == column)
            .map(|(_, v)| v)
    }

    /// First present value along an alias chain.
    pub fn first_of(&self, aliases: &[&str]) -> Option<&CellValue> {
        aliases
            .iter()
            .filter_map(|a| self.get(a))
            .find(|v| v.is_present())
    }
}

pub fn planet_name(row: &PlanetRow, dataset: Dataset) -> String {
    match dataset {
        Dataset::Kepler => match row.first_of(&["kepler_name", "kepoi_name"]) {
            Some(v) => v.to_string(),
            None => format!(
                "KEPLER-{}",
                row.get("kepid").cloned().unwrap_or(CellValue::Null)
            ),
        },
        Dataset::K2Planets => row
            .first_of(&["pl_name", "k2_name"])
            .map(|v| v.to_string())
            .unwrap_or_else(|| "K2 Exoplanet".to_string()),
        Dataset::Tess => row
            .first_of(&["toi"])
            .map(|v| format!("TOI-{}", v))
            .unwrap_or_else(|| "TESS Exoplanet".to_string()),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Detail {
    pub label: &'static str,
    pub value: String,
    pub unit: Option<&'static str>,
}

struct DetailSpec {
    label: &'static str,
    aliases: &'static [&'static str],
    unit: Option<&'static str>,
}

const DETAIL_SPECS: [DetailSpec; 6] = [
    DetailSpec {
        label: "Estado",
        aliases: &[
            "koi_disposition",
            "disposition",
            "k2_disposition",
            "tfopwg_disp",
        ],
        unit: None,
    },
    DetailSpec {
        label: "Periodo orbital",
        aliases: &["koi_period", "k2_period", "pl_orbper"],
        unit: Some("días"),
    },
    DetailSpec {
        label: "Radio planetario",
        aliases: &["koi_prad", "k2_prad", "pl_rade"],
        unit: Some("radios terrestres"),
    },
    DetailSpec {
        label: "Temperatura equilibrio",
        aliases: &["koi_teq", "k2_teq", "pl_eqt"],
        unit: Some("K"),
    },
    DetailSpec {
        label: "Temperatura estelar",
        aliases: &["koi_steff", "k2_steff", "st_teff"],
        unit: Some("K"),
    },
    DetailSpec {
        label: "ID",
        aliases: &["kepid", "tid", "hostname"],
        unit: None,
    },
];

pub fn planet_details(row: &PlanetRow) -> Vec<Detail> {
    DETAIL_SPECS
        .iter()
        .filter_map(|spec| {
            row.first_of(spec.aliases).map(|v| Detail {
                label: spec.label,
                value: v.to_string(),
                unit: spec.unit,
            })
        })
        .collect()
}
