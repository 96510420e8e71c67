use std::path::{Path, PathBuf};
use std::process::Command;

use crate::config::PdfConfig;
use crate::error::ExportError;

/// External DOCX to PDF converter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PdfConverter {
    /// `soffice --convert-to pdf --outdir <out> <doc>`
    LibreOffice { program: String, headless: bool },
    /// `docx2pdf <doc> <out>`, which drives Microsoft Word.
    Docx2Pdf { program: String },
}

impl PdfConverter {
    /// Converter for an operating system name as in [`std::env::consts::OS`].
    pub fn for_os(os: &str, config: &PdfConfig) -> Result<Self, ExportError> {
        match os {
            "linux" => Ok(PdfConverter::LibreOffice {
                program: config.soffice_program.clone(),
                headless: config.headless,
            }),
            "windows" => Ok(PdfConverter::Docx2Pdf {
                program: config.docx2pdf_program.clone(),
            }),
            other => Err(ExportError::UnsupportedPlatform(other.to_string())),
        }
    }

    pub fn for_current_platform(config: &PdfConfig) -> Result<Self, ExportError> {
        Self::for_os(std::env::consts::OS, config)
    }

    pub fn program(&self) -> &str {
        match self {
            PdfConverter::LibreOffice { program, .. } | PdfConverter::Docx2Pdf { program } => {
                program
            }
        }
    }

    pub fn command(&self, docx_path: &Path, out_dir: &Path) -> Command {
        match self {
            PdfConverter::LibreOffice { program, headless } => {
                let mut cmd = Command::new(program);
                if *headless {
                    cmd.arg("--headless");
                }
                cmd.arg("--convert-to")
                    .arg("pdf")
                    .arg("--outdir")
                    .arg(out_dir)
                    .arg(docx_path);
                cmd
            }
            PdfConverter::Docx2Pdf { program } => {
                let mut cmd = Command::new(program);
                cmd.arg(docx_path).arg(out_dir);
                cmd
            }
        }
    }

    /// Run the converter and return the path the PDF lands at.
    pub fn convert(&self, docx_path: &Path, out_dir: &Path) -> Result<PathBuf, ExportError> {
        tracing::info!(
            converter = self.program(),
            docx = %docx_path.display(),
            out_dir = %out_dir.display(),
            "converting report to PDF"
        );

        let status = self.command(docx_path, out_dir).status().map_err(|e| {
            ExportError::Pdf(format!("failed to launch {}: {e}", self.program()))
        })?;
        if !status.success() {
            return Err(ExportError::Pdf(format!(
                "{} exited with {status}",
                self.program()
            )));
        }

        let pdf_path = expected_pdf_path(docx_path, out_dir);
        tracing::info!(pdf = %pdf_path.display(), "PDF conversion finished");
        Ok(pdf_path)
    }
}

/// `<out_dir>/<docx stem>.pdf`, the name both converters write.
pub fn expected_pdf_path(docx_path: &Path, out_dir: &Path) -> PathBuf {
    let mut name = docx_path
        .file_stem()
        .unwrap_or(docx_path.as_os_str())
        .to_os_string();
    name.push(".pdf");
    out_dir.join(name)
}

/// Convert `docx_path` to PDF inside `out_dir` with the current platform's converter.
pub fn generate_pdf(
    docx_path: &Path,
    out_dir: &Path,
    config: &PdfConfig,
) -> Result<PathBuf, ExportError> {
    PdfConverter::for_current_platform(config)?.convert(docx_path, out_dir)
}
