use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ExportError;
use crate::styles::ReportStyles;

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding migration in [`check_version`].
const CURRENT_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Schema version. Missing means the file was written by hand and is
    /// read as the current version.
    #[serde(default = "current_version")]
    pub config_version: u32,
    /// Directory the DOCX and PDF files are written to.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// Tera template for the report header. When unset the header from the
    /// report parameters is used verbatim.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header_template: Option<String>,
    #[serde(default)]
    pub styles: ReportStyles,
    #[serde(default)]
    pub pdf: PdfConfig,
}

/// External tools used for DOCX to PDF conversion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PdfConfig {
    /// LibreOffice binary, used on Linux.
    pub soffice_program: String,
    /// Pass `--headless` to LibreOffice.
    pub headless: bool,
    /// `docx2pdf` binary, used on Windows.
    pub docx2pdf_program: String,
}

fn current_version() -> u32 {
    CURRENT_VERSION
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

impl Default for PdfConfig {
    fn default() -> Self {
        Self {
            soffice_program: "soffice".to_string(),
            headless: false,
            docx2pdf_program: "docx2pdf".to_string(),
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            output_dir: default_output_dir(),
            header_template: None,
            styles: ReportStyles::default(),
            pdf: PdfConfig::default(),
        }
    }
}

pub fn load_config(path: &Path) -> Result<ReportConfig, ExportError> {
    let contents = std::fs::read_to_string(path).map_err(|e| {
        ExportError::Config(format!("failed to read config at {}: {e}", path.display()))
    })?;

    let config: ReportConfig = serde_json::from_str(&contents)?;
    check_version(config.config_version)?;
    Ok(config)
}

/// Refuse files written by a newer build. Version 1 is the only shape so far;
/// when it changes, migrations from older versions go here.
fn check_version(version: u32) -> Result<(), ExportError> {
    if version > CURRENT_VERSION {
        return Err(ExportError::Config(format!(
            "config_version {version} is newer than this build supports ({CURRENT_VERSION})"
        )));
    }
    Ok(())
}

pub fn save_config(path: &Path, config: &ReportConfig) -> Result<(), ExportError> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)?;
    }

    // Always write the current version, regardless of what was loaded.
    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;
    let json = serde_json::to_string_pretty(&stamped)?;

    // Write to a temp file then rename for atomicity
    let tmp_path = path.with_extension("json.tmp");
    std::fs::write(&tmp_path, json.as_bytes())?;
    std::fs::rename(&tmp_path, path)?;

    tracing::info!(path = %path.display(), "config saved");
    Ok(())
}
