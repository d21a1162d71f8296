use super::series::{Figure, Point, RenderMode, Series};
use crate::data::filter::records_for_name;
use crate::data::model::{Dataset, Record};

pub const ASSIGNED_MALE: &str = "Assigned Male";
pub const ASSIGNED_FEMALE: &str = "Assigned Female";

// ---------------------------------------------------------------------------
// Selection – what a dropdown hands us
// ---------------------------------------------------------------------------

/// A dropdown value: one bare name or an ordered list of names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Single(String),
    Many(Vec<String>),
}

impl Selection {
    /// Normalise to an ordered list; a bare name becomes a one-element list.
    pub fn into_names(self) -> Vec<String> {
        match self {
            Selection::Single(name) => vec![name],
            Selection::Many(names) => names,
        }
    }
}

impl From<&str> for Selection {
    fn from(name: &str) -> Self {
        Selection::Single(name.to_string())
    }
}

impl From<String> for Selection {
    fn from(name: String) -> Self {
        Selection::Single(name)
    }
}

impl From<Vec<String>> for Selection {
    fn from(names: Vec<String>) -> Self {
        Selection::Many(names)
    }
}

impl From<&[String]> for Selection {
    fn from(names: &[String]) -> Self {
        Selection::Many(names.to_vec())
    }
}

impl From<Vec<&str>> for Selection {
    fn from(names: Vec<&str>) -> Self {
        Selection::Many(names.into_iter().map(str::to_string).collect())
    }
}

// ---------------------------------------------------------------------------
// Transforms
// ---------------------------------------------------------------------------

fn column_series(
    dataset: &Dataset,
    name: &str,
    label: &str,
    mode: RenderMode,
    column: fn(&Record) -> u32,
) -> Series {
    let points = records_for_name(dataset, name)
        .map(|r| Point {
            year: r.year,
            count: column(r),
        })
        .collect();
    Series::new(label, points, mode)
}

/// Male and female counts for one name, drawn as markers.
///
/// Always two series; an unknown name gives two empty ones.
pub fn single_name(dataset: &Dataset, name: &str) -> [Series; 2] {
    [
        column_series(dataset, name, ASSIGNED_MALE, RenderMode::Markers, |r| {
            r.assigned_male
        }),
        column_series(dataset, name, ASSIGNED_FEMALE, RenderMode::Markers, |r| {
            r.assigned_female
        }),
    ]
}

/// Figure for the single-name chart.
pub fn single_name_figure(dataset: &Dataset, name: &str) -> Figure {
    Figure::Traces(single_name(dataset, name).into())
}

/// Stored totals for each chosen name, one line per name in input order.
///
/// Duplicates are kept. An empty selection is [`Figure::NoChart`].
pub fn compare_names(dataset: &Dataset, selection: impl Into<Selection>) -> Figure {
    let names = selection.into().into_names();
    if names.is_empty() {
        return Figure::NoChart;
    }

    Figure::Traces(
        names
            .iter()
            .map(|name| column_series(dataset, name, name, RenderMode::Lines, |r| r.total))
            .collect(),
    )
}
