use repricing_core::params::ReportParams;
use tera::{Context, Tera};

use crate::config::ReportConfig;
use crate::error::ExportError;

/// Render a Tera header template with the report parameters.
///
/// The parameters' fields become the template context, so a template can use
/// `{{ header }}`, `{{ start_date }}`, `{{ repricing.target_product }}` and so on.
pub fn render_header(template: &str, params: &ReportParams) -> Result<String, ExportError> {
    let mut tera = Tera::default();
    tera.add_raw_template("header", template)
        .map_err(|e| ExportError::TemplateParse(e.to_string()))?;

    let value = serde_json::to_value(params)?;
    let context =
        Context::from_value(value).map_err(|e| ExportError::TemplateRender(e.to_string()))?;

    let rendered = tera.render("header", &context)?;
    Ok(rendered)
}

/// Header text for a report: the configured template if any, else the plain header.
pub fn resolve_header(config: &ReportConfig, params: &ReportParams) -> Result<String, ExportError> {
    match &config.header_template {
        Some(template) => render_header(template, params),
        None => Ok(params.header.clone()),
    }
}
