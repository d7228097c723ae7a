//! Month-indexed translation progress.

use crate::error::CatalogErrorKind;
use chrono::{Datelike, NaiveDate};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Ukrainian month abbreviations used on chart axes.
const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Січ", "Лют", "Бер", "Кві", "Тра", "Чер", "Лип", "Сер", "Вер", "Жов", "Лис", "Гру",
];

/// A calendar month written as `YYYY-MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Month {
    year: i32,
    month: u32,
}

impl Month {
    /// Build a month, `month` being 1-based.
    pub fn new(year: i32, month: u32) -> Result<Self, CatalogErrorKind> {
        NaiveDate::from_ymd_opt(year, month, 1)
            .map(Self::from_date)
            .ok_or_else(|| CatalogErrorKind::InvalidMonth(format!("{year:04}-{month:02}")))
    }

    fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    #[must_use]
    pub const fn month(&self) -> u32 {
        self.month
    }

    /// Axis label such as `Чер '24`.
    #[must_use]
    pub fn short_label(&self) -> String {
        let abbreviation = MONTH_ABBREVIATIONS[(self.month as usize - 1) % 12];
        format!("{abbreviation} '{:02}", self.year.rem_euclid(100))
    }
}

impl FromStr for Month {
    type Err = CatalogErrorKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        // exactly YYYY-MM; chrono alone would also accept "2024-6"
        let well_formed = trimmed.len() == 7 && trimmed.as_bytes()[4] == b'-';
        if !well_formed {
            return Err(CatalogErrorKind::InvalidMonth(s.to_string()));
        }
        NaiveDate::parse_from_str(&format!("{trimmed}-01"), "%Y-%m-%d")
            .map(Self::from_date)
            .map_err(|_| CatalogErrorKind::InvalidMonth(s.to_string()))
    }
}

impl TryFrom<String> for Month {
    type Error = CatalogErrorKind;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Month> for String {
    fn from(month: Month) -> Self {
        month.to_string()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Completion of one project at one month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressPoint {
    #[serde(rename = "date")]
    pub month: Month,
    #[serde(alias = "project")]
    pub project_id: String,
    pub percent: u16,
}

/// Line counts of the featured project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeaturedStats {
    pub project_id: String,
    pub translated_lines: u64,
    pub total_lines: u64,
}

impl FeaturedStats {
    /// Overall completion, rounded to the nearest percent.
    #[must_use]
    pub fn percent(&self) -> u8 {
        if self.total_lines == 0 {
            return 0;
        }
        let ratio = self.translated_lines.min(self.total_lines) as f64 / self.total_lines as f64;
        (ratio * 100.0).round() as u8
    }

    /// Lines still in English.
    #[must_use]
    pub const fn remaining_lines(&self) -> u64 {
        self.total_lines.saturating_sub(self.translated_lines)
    }
}

/// Progress series aligned on a shared month axis.
///
/// Series keep the order in which projects appear in the catalog; months
/// with no recorded point are gaps.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProgressTable {
    months: Vec<Month>,
    series: IndexMap<String, Vec<Option<u16>>>,
}

impl ProgressTable {
    /// Align `points` on `months`, one series per id in `project_order`
    /// that has at least one point on the axis.
    pub fn build<'a>(
        months: &[Month],
        points: &[ProgressPoint],
        project_order: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        let mut series = IndexMap::new();
        for id in project_order {
            let values: Vec<Option<u16>> = months
                .iter()
                .map(|m| {
                    points
                        .iter()
                        .find(|p| p.project_id == id && p.month == *m)
                        .map(|p| p.percent)
                })
                .collect();
            if values.iter().any(Option::is_some) {
                series.insert(id.to_string(), values);
            }
        }
        Self {
            months: months.to_vec(),
            series,
        }
    }

    pub fn months(&self) -> &[Month] {
        &self.months
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    pub fn series(&self) -> impl Iterator<Item = (&str, &[Option<u16>])> {
        self.series.iter().map(|(id, v)| (id.as_str(), v.as_slice()))
    }

    pub fn series_for(&self, project_id: &str) -> Option<&[Option<u16>]> {
        self.series.get(project_id).map(Vec::as_slice)
    }

    /// Most recent recorded value for a project.
    pub fn latest(&self, project_id: &str) -> Option<u16> {
        self.series_for(project_id)?
            .iter()
            .rev()
            .find_map(|v| *v)
    }

    /// Keep only the given project's series.
    #[must_use]
    pub fn only(mut self, project_id: &str) -> Self {
        self.series.retain(|id, _| id == project_id);
        self
    }
}

/// Sorted, de-duplicated months present in `points`.
pub fn months_of(points: &[ProgressPoint]) -> Vec<Month> {
    let mut months: Vec<Month> = points.iter().map(|p| p.month).collect();
    months.sort_unstable();
    months.dedup();
    months
}
