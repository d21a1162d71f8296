use serde::{Serialize, Serializer};
use serde_json::{json, Value as JsonValue};

use super::layout::ChartLayout;

// ---------------------------------------------------------------------------
// Series – one plotted trace
// ---------------------------------------------------------------------------

/// How a series is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    /// Discrete yearly observations, no connecting line.
    Markers,
    /// A trend over time.
    Lines,
}

/// One (year, count) observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    pub year: i32,
    pub count: u32,
}

/// A labelled, ordered set of points plus its render mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Series {
    pub label: String,
    pub points: Vec<Point>,
    pub mode: RenderMode,
}

impl Series {
    pub fn new(label: impl Into<String>, points: Vec<Point>, mode: RenderMode) -> Self {
        Series {
            label: label.into(),
            points,
            mode,
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// `[x, y]` pairs for the plotting widget.
    pub fn xy(&self) -> impl Iterator<Item = [f64; 2]> + '_ {
        self.points
            .iter()
            .map(|p| [f64::from(p.year), f64::from(p.count)])
    }
}

/// Serialized as a plotly-style trace: `{"name", "x", "y", "mode"}`.
impl Serialize for Series {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct Trace<'a> {
            name: &'a str,
            x: Vec<i32>,
            y: Vec<u32>,
            mode: RenderMode,
        }

        Trace {
            name: &self.label,
            x: self.points.iter().map(|p| p.year).collect(),
            y: self.points.iter().map(|p| p.count).collect(),
            mode: self.mode,
        }
        .serialize(serializer)
    }
}

// ---------------------------------------------------------------------------
// Figure – what a chart callback hands to the renderer
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Figure {
    /// Nothing selected: no data and no layout.
    NoChart,
    Traces(Vec<Series>),
}

impl Figure {
    pub fn series(&self) -> &[Series] {
        match self {
            Figure::NoChart => &[],
            Figure::Traces(series) => series,
        }
    }

    pub fn is_no_chart(&self) -> bool {
        matches!(self, Figure::NoChart)
    }

    /// Chart description in plotly's `{"data", "layout"}` shape.
    /// `NoChart` becomes an empty object.
    pub fn to_json(&self, layout: &ChartLayout) -> JsonValue {
        match self {
            Figure::NoChart => json!({}),
            Figure::Traces(series) => json!({ "data": series, "layout": layout }),
        }
    }
}
