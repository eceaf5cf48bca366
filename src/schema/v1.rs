use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputFormat {
    Json,
    Csv,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputMeta {
    pub path: String,
    pub format: Option<InputFormat>,
    pub records: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Thresholds {
    pub confirmed_percent: f64,
    pub candidate_percent: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategorySummary {
    pub count: u64,
    pub percent: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Summary {
    pub total: u64,
    #[serde(rename = "CONFIRMED")]
    pub confirmed: CategorySummary,
    #[serde(rename = "CANDIDATE")]
    pub candidate: CategorySummary,
    #[serde(rename = "FALSE_POSITIVE")]
    pub false_positive: CategorySummary,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerdictRow {
    pub id: String,
    pub disposition: String,
    pub label: String,
    pub css_class: String,
    pub description: String,
    pub probability_exoplanet: f64,
    pub probability_false_positive: f64,
    pub confidence: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassificationReportV1 {
    pub tool: String,
    pub version: String,
    pub schema_version: String,
    pub input_meta: InputMeta,
    pub thresholds: Thresholds,
    pub summary: Summary,
    pub predictions: Vec<VerdictRow>,
    pub warnings: Vec<String>,
}

impl ClassificationReportV1 {
    pub fn empty(tool_version: &str, input: &str) -> Self {
        let zero = || CategorySummary {
            count: 0,
            percent: 0.0,
        };
        Self {
            tool: "exo-disposition".to_string(),
            version: tool_version.to_string(),
            schema_version: "v1".to_string(),
            input_meta: InputMeta {
                path: input.to_string(),
                format: None,
                records: None,
            },
            thresholds: Thresholds {
                confirmed_percent: crate::disposition::CONFIRMED_THRESHOLD,
                candidate_percent: crate::disposition::CANDIDATE_THRESHOLD,
            },
            summary: Summary {
                total: 0,
                confirmed: zero(),
                candidate: zero(),
                false_positive: zero(),
            },
            predictions: Vec::new(),
            warnings: Vec::new(),
        }
    }
}
