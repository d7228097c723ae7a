//! `projects` command: list the catalog.

use super::OutputFormat;
use crate::catalog::Catalog;
use crate::model::{AccentColor, Project};
use crate::tui::widgets::truncate_str;
use anyhow::Result;
use crossterm::style::{Color, Stylize};
use serde_json::json;
use std::io::Write;

const NAME_WIDTH: usize = 28;
const STATUS_WIDTH: usize = 24;

fn single_line_name(project: &Project) -> String {
    project.title_lines().collect::<Vec<_>>().join(" ")
}

fn swatch(color: AccentColor, use_color: bool) -> String {
    if use_color {
        "██"
            .with(Color::Rgb {
                r: color.r,
                g: color.g,
                b: color.b,
            })
            .to_string()
    } else {
        "  ".to_string()
    }
}

/// Print every project in catalog order.
pub fn run_projects(
    catalog: &Catalog,
    format: OutputFormat,
    use_color: bool,
    out: &mut impl Write,
) -> Result<()> {
    let table = catalog.progress_table();
    match format {
        OutputFormat::Json => {
            let projects: Vec<_> = catalog
                .projects
                .iter()
                .map(|p| {
                    json!({
                        "id": p.id,
                        "name": single_line_name(p),
                        "status": p.status,
                        "status_label": p.status_line(),
                        "official": p.official,
                        "color": p.color,
                        "download": p.download().map(|d| json!({
                            "label": d.label,
                            "url": d.url,
                            "enabled": d.enabled,
                        })),
                        "latest_percent": table.latest(&p.id),
                    })
                })
                .collect();
            writeln!(out, "{}", serde_json::to_string_pretty(&projects)?)?;
        }
        OutputFormat::Table => {
            writeln!(
                out,
                "{:>2}    {:<NAME_WIDTH$}  {:<STATUS_WIDTH$}  {:>8}  DOWNLOAD",
                "#", "PROJECT", "STATUS", "PROGRESS"
            )?;
            for (i, project) in catalog.projects.iter().enumerate() {
                let progress = table
                    .latest(&project.id)
                    .map_or_else(|| "—".to_string(), |p| format!("{p}%"));
                let download = match project.download() {
                    Some(link) if link.enabled => link.url.to_string(),
                    Some(_) => "(unavailable)".to_string(),
                    None => String::new(),
                };
                writeln!(
                    out,
                    "{:>2} {} {:<NAME_WIDTH$}  {:<STATUS_WIDTH$}  {:>8}  {}",
                    i + 1,
                    swatch(project.color, use_color),
                    truncate_str(&single_line_name(project), NAME_WIDTH),
                    truncate_str(project.status_line(), STATUS_WIDTH),
                    progress,
                    download
                )?;
            }
            writeln!(out)?;
            writeln!(out, "{} projects", catalog.projects.len())?;
        }
    }
    Ok(())
}
