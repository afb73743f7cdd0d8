use crate::core::tree::ServiceTree;
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Write;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
    Csv,
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ReportFormat::Text => "text",
            ReportFormat::Json => "json",
            ReportFormat::Csv => "csv",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportSettings {
    pub format: ReportFormat,
    pub limit: Option<usize>,
}

/// One line of the report, in machine-readable form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRow {
    pub name: Option<String>,
    pub total_children: usize,
    pub direct_children: usize,
    pub implementation_type: Option<String>,
}

pub fn report_rows(tree: &ServiceTree, limit: Option<usize>) -> Vec<ReportRow> {
    tree.ordered_by_total_child_count()
        .into_iter()
        .take(limit.unwrap_or(usize::MAX))
        .map(|service| ReportRow {
            name: service.name().map(str::to_string),
            total_children: service.total_child_count(),
            direct_children: service.service().children().len(),
            implementation_type: service.service().implementation_type().map(str::to_string),
        })
        .collect()
}

pub fn render<W: Write>(tree: &ServiceTree, settings: &ReportSettings, out: &mut W) -> Result<()> {
    match settings.format {
        ReportFormat::Text => tree.print_top_by_total_child_count(out, settings.limit)?,
        ReportFormat::Json => {
            let rows = report_rows(tree, settings.limit);
            serde_json::to_writer_pretty(&mut *out, &rows)?;
            writeln!(out)?;
        }
        ReportFormat::Csv => {
            let rows = report_rows(tree, settings.limit);
            let mut writer = csv::WriterBuilder::new()
                .has_headers(false)
                .from_writer(&mut *out);
            writer.write_record([
                "name",
                "total_children",
                "direct_children",
                "implementation_type",
            ])?;
            for row in &rows {
                writer.serialize(row)?;
            }
            writer.flush()?;
        }
    }
    Ok(())
}
