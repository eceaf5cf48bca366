use std::path::{Path, PathBuf};

use anyhow::{Result, bail};

use crate::disposition::{BatchSummary, PredictionRecord, Verdict};
use crate::schema::v1::ClassificationReportV1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Json,
    Csv,
}

impl InputFormat {
    /// Looks through a trailing `.gz` before matching the extension.
    pub fn detect(path: &Path) -> Result<Self> {
        let name = path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("")
            .to_ascii_lowercase();
        let name = name.strip_suffix(".gz").unwrap_or(&name);
        if name.ends_with(".json") {
            Ok(Self::Json)
        } else if name.ends_with(".csv") {
            Ok(Self::Csv)
        } else {
            bail!(
                "{}: please select a valid CSV or JSON file",
                path.display()
            )
        }
    }

    pub fn as_schema(&self) -> crate::schema::v1::InputFormat {
        match self {
            Self::Json => crate::schema::v1::InputFormat::Json,
            Self::Csv => crate::schema::v1::InputFormat::Csv,
        }
    }
}

#[derive(Debug, Clone)]
pub struct OutputPaths {
    pub out_dir: PathBuf,
    pub json_path: PathBuf,
    pub tsv_path: PathBuf,
}

#[derive(Debug)]
pub struct Ctx {
    pub input: PathBuf,
    pub tool_version: String,
    pub input_format: Option<InputFormat>,
    pub write_json: bool,
    pub write_tsv: bool,
    pub records: Vec<PredictionRecord>,
    pub verdicts: Vec<Verdict>,
    pub summary: Option<BatchSummary>,
    pub warnings: Vec<String>,
    pub output: OutputPaths,
    pub report: ClassificationReportV1,
}

impl Ctx {
    pub fn new(
        input: PathBuf,
        out_dir: PathBuf,
        write_json: bool,
        write_tsv: bool,
        tool_version: &str,
    ) -> Self {
        let json_path = out_dir.join("classification.json");
        let tsv_path = out_dir.join("classification.tsv");
        let report = ClassificationReportV1::empty(tool_version, &input.display().to_string());
        Self {
            input_format: InputFormat::detect(&input).ok(),
            input,
            tool_version: tool_version.to_string(),
            write_json,
            write_tsv,
            records: Vec::new(),
            verdicts: Vec::new(),
            summary: None,
            warnings: Vec::new(),
            output: OutputPaths {
                out_dir,
                json_path,
                tsv_path,
            },
            report,
        }
    }

    pub fn writes_files(&self) -> bool {
        self.write_json || self.write_tsv
    }
}
