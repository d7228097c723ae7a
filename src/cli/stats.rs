//! `stats` command: progress table and featured line counts.

use super::OutputFormat;
use crate::catalog::Catalog;
use crate::tui::animation::group_thousands;
use crate::tui::widgets::truncate_str;
use anyhow::{Result, bail};
use serde_json::json;
use std::io::Write;

const NAME_WIDTH: usize = 22;

/// Print monthly progress, optionally for a single project.
pub fn run_stats(
    catalog: &Catalog,
    format: OutputFormat,
    project: Option<&str>,
    out: &mut impl Write,
) -> Result<()> {
    let mut table = catalog.progress_table();
    if let Some(id) = project {
        if catalog.project(id).is_none() {
            bail!("unknown project '{id}'");
        }
        table = table.only(id);
    }
    let featured = catalog
        .featured()
        .filter(|(p, _)| project.is_none_or(|id| p.id == id));

    match format {
        OutputFormat::Json => {
            let value = json!({
                "months": table.months(),
                "series": table
                    .series()
                    .map(|(id, values)| json!({ "project_id": id, "values": values }))
                    .collect::<Vec<_>>(),
                "featured": featured.map(|(_, stats)| json!({
                    "project_id": stats.project_id,
                    "translated_lines": stats.translated_lines,
                    "total_lines": stats.total_lines,
                    "remaining_lines": stats.remaining_lines(),
                    "percent": stats.percent(),
                })),
            });
            writeln!(out, "{}", serde_json::to_string_pretty(&value)?)?;
        }
        OutputFormat::Table => {
            if table.is_empty() {
                writeln!(out, "No progress data.")?;
            } else {
                write!(out, "{:<NAME_WIDTH$}", "PROJECT")?;
                for month in table.months() {
                    write!(out, " {:>7}", month.to_string())?;
                }
                writeln!(out)?;
                for (id, values) in table.series() {
                    let name = catalog
                        .project(id)
                        .and_then(|p| p.title_lines().next())
                        .unwrap_or(id);
                    write!(out, "{:<NAME_WIDTH$}", truncate_str(name, NAME_WIDTH - 1))?;
                    for value in values {
                        match value {
                            Some(p) => write!(out, " {:>7}", format!("{p}%"))?,
                            None => write!(out, " {:>7}", "—")?,
                        }
                    }
                    writeln!(out)?;
                }
            }

            if let Some((project, stats)) = featured {
                writeln!(out)?;
                writeln!(out, "{}", project.name.replace('\n', " "))?;
                writeln!(
                    out,
                    "  translated: {} / {} lines ({}%)",
                    group_thousands(stats.translated_lines),
                    group_thousands(stats.total_lines),
                    stats.percent()
                )?;
                writeln!(
                    out,
                    "  remaining:  {} lines",
                    group_thousands(stats.remaining_lines())
                )?;
            }
        }
    }
    Ok(())
}
