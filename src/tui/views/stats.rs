//! Statistics page: progress over time and the featured project.

use crate::model::{FeaturedStats, Month, Project, ProgressTable};
use crate::tui::animation::{count_up, group_thousands};
use crate::tui::app::{App, StatsView};
use crate::tui::constants::{FEATURED_HEIGHT, STATS_SUBTITLE, STATS_TITLE};
use crate::tui::theme::{Styles, colors, render_footer_hints};
use crate::tui::widgets::{render_empty_state, truncate_str};
use ratatui::{
    prelude::*,
    symbols::Marker,
    widgets::{
        Axis, Block, BorderType, Cell, Chart, Dataset, Gauge, GraphType, LegendPosition, Padding,
        Paragraph, Row, Table,
    },
};
use std::time::{Duration, Instant};

/// Width of the project-name column in the table view.
const NAME_COLUMN: u16 = 22;
const MONTH_COLUMN: u16 = 9;

/// Runs of consecutive months with data, as chart points `(month index, percent)`.
///
/// Missing months split a series so the chart shows a gap instead of
/// bridging it.
pub(crate) fn segments(values: &[Option<u16>]) -> Vec<Vec<(f64, f64)>> {
    let mut runs = Vec::new();
    let mut current = Vec::new();
    for (i, value) in values.iter().enumerate() {
        match value {
            Some(p) => current.push((i as f64, f64::from(*p))),
            None if !current.is_empty() => runs.push(std::mem::take(&mut current)),
            None => {}
        }
    }
    if !current.is_empty() {
        runs.push(current);
    }
    runs
}

/// The most recent months that fit next to the name column.
pub(crate) fn visible_months(months: &[Month], width: u16) -> &[Month] {
    let fit = usize::from(width.saturating_sub(NAME_COLUMN) / MONTH_COLUMN).max(1);
    &months[months.len().saturating_sub(fit)..]
}

fn project_name(app: &App, id: &str) -> String {
    app.catalog
        .project(id)
        .and_then(|p| p.title_lines().next())
        .unwrap_or(id)
        .to_string()
}

fn series_color(app: &App, id: &str, fallback: Color) -> Color {
    app.catalog
        .project(id)
        .map_or(fallback, |p| colors().project_accent(p.color))
}

fn render_chart(frame: &mut Frame, area: Rect, app: &App, table: &ProgressTable) {
    let scheme = colors();
    let palette = scheme.chart_palette();

    let series: Vec<(String, Color, Vec<Vec<(f64, f64)>>)> = table
        .series()
        .enumerate()
        .map(|(i, (id, values))| {
            (
                project_name(app, id),
                series_color(app, id, palette[i % palette.len()]),
                segments(values),
            )
        })
        .collect();

    let mut datasets = Vec::new();
    for (name, color, runs) in &series {
        for (k, run) in runs.iter().enumerate() {
            let graph_type = if run.len() > 1 {
                GraphType::Line
            } else {
                GraphType::Scatter
            };
            let mut dataset = Dataset::default()
                .marker(Marker::Braille)
                .graph_type(graph_type)
                .style(Style::default().fg(*color))
                .data(run);
            if k == 0 {
                dataset = dataset.name(name.clone());
            }
            datasets.push(dataset);
        }
    }

    let months = table.months();
    let last = months.len().saturating_sub(1);
    let x_labels: Vec<Span<'static>> = match months {
        [] => Vec::new(),
        [only] => vec![Span::raw(only.short_label())],
        _ => [0, last / 2, last]
            .iter()
            .map(|&i| Span::raw(months[i].short_label()))
            .collect(),
    };

    let chart = Chart::new(datasets)
        .block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(Styles::border())
                .title(" Прогрес у часі ")
                .title_style(Styles::section_title()),
        )
        .x_axis(
            Axis::default()
                .style(Styles::text_muted())
                .bounds([0.0, last.max(1) as f64])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .style(Styles::text_muted())
                .bounds([0.0, 100.0])
                .labels(["0%", "50%", "100%"]),
        )
        .legend_position(Some(LegendPosition::TopLeft))
        .hidden_legend_constraints((Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)));
    frame.render_widget(chart, area);
}

fn render_table(frame: &mut Frame, area: Rect, app: &App, table: &ProgressTable) {
    let months = table.months();
    let shown = visible_months(months, area.width.saturating_sub(2));
    let skip = months.len() - shown.len();

    let header = Row::new(
        std::iter::once(Cell::from("Проєкт"))
            .chain(shown.iter().map(|m| Cell::from(m.short_label()))),
    )
    .style(Styles::section_title());

    let rows: Vec<Row<'static>> = table
        .series()
        .map(|(id, values)| {
            let name = truncate_str(&project_name(app, id), usize::from(NAME_COLUMN) - 1);
            let color = series_color(app, id, colors().text);
            let cells = values[skip..].iter().map(|v| match v {
                Some(p) => Cell::from(format!("{p}%")),
                None => Cell::from("—").style(Styles::text_muted()),
            });
            Row::new(
                std::iter::once(Cell::from(name).style(Style::default().fg(color).bold()))
                    .chain(cells),
            )
        })
        .collect();

    let widths = std::iter::once(Constraint::Length(NAME_COLUMN))
        .chain(shown.iter().map(|_| Constraint::Length(MONTH_COLUMN)));
    let widget = Table::new(rows, widths).header(header).block(
        Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Styles::border())
            .title(" Прогрес за місяцями ")
            .title_style(Styles::section_title()),
    );
    frame.render_widget(widget, area);
}

fn render_featured(
    frame: &mut Frame,
    area: Rect,
    project: &Project,
    stats: &FeaturedStats,
    elapsed: Duration,
) {
    let scheme = colors();
    let accent = scheme.project_accent(project.color);
    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(accent))
        .title(format!(" {} ", project.name.replace('\n', " ")))
        .title_style(Style::default().fg(accent).bold());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [counters, progress] =
        Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)]).areas(inner);

    let counter_lines = vec![
        Line::styled("Українські рядки", Styles::text_muted()),
        Line::styled(
            group_thousands(count_up(stats.translated_lines, elapsed)),
            Style::default().fg(accent).bold(),
        ),
        Line::from(""),
        Line::styled("Загальна кількість рядків", Styles::text_muted()),
        Line::styled(
            group_thousands(count_up(stats.total_lines, elapsed)),
            Styles::section_title(),
        ),
    ];
    frame.render_widget(
        Paragraph::new(counter_lines).block(Block::default().padding(Padding::horizontal(1))),
        counters,
    );

    let percent = count_up(u64::from(stats.percent()), elapsed).min(100);
    let [label, gauge, remaining] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(1),
        Constraint::Length(2),
    ])
    .areas(progress.inner(Margin::new(1, 1)));
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("Прогрес ", Styles::text_muted()),
            Span::styled(format!("{percent}%"), Style::default().fg(accent).bold()),
        ])),
        label,
    );
    frame.render_widget(
        Gauge::default()
            .percent(u16::try_from(percent).unwrap_or(100))
            .label("")
            .gauge_style(Style::default().fg(accent).bg(scheme.background_alt)),
        gauge,
    );
    frame.render_widget(
        Paragraph::new(Line::styled(
            format!(
                "Залишилось: {} рядків",
                group_thousands(stats.remaining_lines())
            ),
            Styles::text_muted(),
        )),
        remaining,
    );
}

pub fn render(frame: &mut Frame, area: Rect, app: &mut App, now: Instant) {
    let elapsed = app.stats_elapsed(now);
    let featured_height = if app.catalog.featured.is_some() {
        FEATURED_HEIGHT
    } else {
        0
    };
    let [header, body, featured] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(6),
        Constraint::Length(featured_height),
    ])
    .areas(area);

    let toggle = match app.stats_view {
        StatsView::Chart => "таблиця",
        StatsView::Table => "графік",
    };
    let header_lines = vec![
        Line::styled(STATS_TITLE, Styles::section_title()).centered(),
        Line::styled(STATS_SUBTITLE, Styles::text_muted()).centered(),
        Line::from(render_footer_hints(&[("v", toggle)])).centered(),
    ];
    frame.render_widget(Paragraph::new(header_lines), header);

    let table = &app.progress;
    if table.is_empty() {
        render_empty_state(
            frame,
            body,
            "Дані про прогрес відсутні",
            Some("Додайте розділ progress до каталогу"),
        );
    } else {
        match app.stats_view {
            StatsView::Chart => render_chart(frame, body, app, table),
            StatsView::Table => render_table(frame, body, app, table),
        }
    }

    if let Some((project, stats)) = app.catalog.featured() {
        render_featured(frame, featured, project, stats, elapsed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segments_split_on_gaps() {
        let runs = segments(&[None, Some(10), Some(20), None, Some(40)]);
        assert_eq!(
            runs,
            vec![vec![(1.0, 10.0), (2.0, 20.0)], vec![(4.0, 40.0)]]
        );
        assert!(segments(&[None, None]).is_empty());
    }

    #[test]
    fn test_visible_months_keeps_latest() {
        let months: Vec<Month> = (1..=9).map(|m| Month::new(2024, m).unwrap()).collect();
        let shown = visible_months(&months, NAME_COLUMN + 3 * MONTH_COLUMN);
        assert_eq!(shown.len(), 3);
        assert_eq!(shown[0], Month::new(2024, 7).unwrap());
        assert_eq!(visible_months(&months, 0).len(), 1);
        assert_eq!(visible_months(&months, 500).len(), 9);
    }
}
