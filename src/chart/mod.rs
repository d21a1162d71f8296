/// Chart layer: turns a name selection into plot series.
///
/// ```text
///   Selection ──► transform ──► Figure (Vec<Series> | NoChart)
///                    ▲                    │
///                 &Dataset                ▼
///                               ui::plot + ChartLayout
/// ```

pub mod layout;
pub mod series;
pub mod transform;
