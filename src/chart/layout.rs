use serde::Serialize;

// ---------------------------------------------------------------------------
// Static chart layout shared by both plots
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct XAxis {
    pub range: [f64; 2],
    #[serde(rename = "fixedrange")]
    pub fixed_range: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YAxis {
    pub title: String,
    /// Serialized as plotly's `rangemode: "nonnegative"`.
    #[serde(rename = "rangemode", serialize_with = "range_mode")]
    pub non_negative: bool,
    #[serde(rename = "fixedrange")]
    pub fixed_range: bool,
}

fn range_mode<S: serde::Serializer>(non_negative: &bool, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(if *non_negative { "nonnegative" } else { "normal" })
}

/// Legend anchored horizontally, centred below the plot area.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    pub orientation: &'static str,
    #[serde(rename = "xanchor")]
    pub x_anchor: &'static str,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartLayout {
    #[serde(rename = "xaxis")]
    pub x_axis: XAxis,
    #[serde(rename = "yaxis")]
    pub y_axis: YAxis,
    pub legend: Legend,
    #[serde(rename = "showlegend")]
    pub show_legend: bool,
    /// Plot height in points; native-only, not part of the description.
    #[serde(skip)]
    pub height: f32,
}

impl ChartLayout {
    /// The layout used by every chart on the dashboard.
    pub fn standard() -> Self {
        ChartLayout {
            x_axis: XAxis {
                range: [1973.0, 2019.0],
                fixed_range: true,
            },
            y_axis: YAxis {
                title: "Number of births".to_string(),
                non_negative: true,
                fixed_range: true,
            },
            legend: Legend {
                orientation: "h",
                x_anchor: "center",
                x: 0.5,
                y: -0.05,
            },
            show_legend: true,
            height: 340.0,
        }
    }

    /// Whether the user may zoom or pan either axis.
    pub fn interactive(&self) -> bool {
        !(self.x_axis.fixed_range && self.y_axis.fixed_range)
    }
}

impl Default for ChartLayout {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn standard_layout_is_fixed() {
        let layout = ChartLayout::standard();
        assert!(!layout.interactive());
        assert_eq!(layout.x_axis.range, [1973.0, 2019.0]);
    }

    #[test]
    fn serializes_in_plotly_shape() {
        let value = serde_json::to_value(ChartLayout::standard()).unwrap();
        assert_eq!(
            value,
            json!({
                "xaxis": { "range": [1973.0, 2019.0], "fixedrange": true },
                "yaxis": {
                    "title": "Number of births",
                    "rangemode": "nonnegative",
                    "fixedrange": true
                },
                "legend": { "orientation": "h", "xanchor": "center", "x": 0.5, "y": -0.05 },
                "showlegend": true
            })
        );
    }
}
