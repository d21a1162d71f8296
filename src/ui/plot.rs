use eframe::egui::{self, Ui};
use egui_plot::{Corner, Legend, Line, MarkerShape, Plot, PlotPoints, Points};

use crate::chart::layout::ChartLayout;
use crate::chart::series::{Figure, RenderMode, Series};
use crate::color::SeriesColors;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Chart plots (central panel)
// ---------------------------------------------------------------------------

pub fn single_name_plot(ui: &mut Ui, state: &AppState) {
    draw_figure(
        ui,
        "single_name_plot",
        &state.single_figure,
        &state.config.layout,
        &state.colors,
    );
}

pub fn comparison_plot(ui: &mut Ui, state: &AppState) {
    draw_figure(
        ui,
        "comparison_plot",
        &state.comparison_figure,
        &state.config.layout,
        &state.colors,
    );
}

/// Render a figure with the shared layout. `NoChart` leaves a blank area.
fn draw_figure(
    ui: &mut Ui,
    id: &str,
    figure: &Figure,
    layout: &ChartLayout,
    colors: &SeriesColors,
) {
    if figure.is_no_chart() {
        ui.allocate_ui(egui::vec2(ui.available_width(), layout.height), |ui: &mut Ui| {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.weak("Choose one or more names to compare.");
            });
        });
        return;
    }

    let series = figure.series();
    if series.iter().all(Series::is_empty) {
        ui.weak("No records for this selection.");
    }

    let interactive = layout.interactive();

    let mut plot = Plot::new(id)
        .height(layout.height)
        .y_axis_label(layout.y_axis.title.as_str())
        .allow_drag(interactive)
        .allow_zoom(interactive)
        .allow_scroll(interactive)
        .allow_boxed_zoom(interactive)
        .allow_double_click_reset(interactive);

    plot = match fixed_x_bounds(layout) {
        Some([x_min, x_max]) => plot.default_x_bounds(x_min, x_max),
        None => plot
            .include_x(layout.x_axis.range[0])
            .include_x(layout.x_axis.range[1]),
    };
    if layout.y_axis.non_negative {
        plot = plot.include_y(0.0);
    }
    if layout.show_legend {
        // egui_plot only anchors legends to corners; bottom-left is closest.
        plot = plot.legend(Legend::default().position(Corner::LeftBottom));
    }

    plot.show(ui, |plot_ui| {
        for (idx, s) in series.iter().enumerate() {
            let color = colors.color_for(idx);
            let points: PlotPoints = s.xy().collect();

            match s.mode {
                RenderMode::Markers => plot_ui.points(
                    Points::new(points)
                        .name(&s.label)
                        .color(color)
                        .shape(MarkerShape::Circle)
                        .filled(true)
                        .radius(3.5),
                ),
                RenderMode::Lines => {
                    plot_ui.line(Line::new(points).name(&s.label).color(color).width(2.0))
                }
            }
        }
    });
}

/// Exact x bounds for a fixed axis; a free axis only widens to the range.
fn fixed_x_bounds(layout: &ChartLayout) -> Option<[f64; 2]> {
    layout.x_axis.fixed_range.then_some(layout.x_axis.range)
}
