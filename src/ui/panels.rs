use eframe::egui::{self, RichText, Ui};

use crate::state::AppState;

const OVERVIEW: &str = "View information on the number of babies born by name in Scotland \
between 1974 and 2018 (only names appearing more than 10 times in that period are shown)";

const SINGLE_HELP: &str = "Use this graph to view usage of a name by gender.";

const COMPARE_HELP: &str = "Use this graph to compare total instances for multiple names. \
The graph can show up to 10 different names with unique colours.";

const DROPDOWN_WIDTH: f32 = 260.0;

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the brand, outbound links and dataset summary.
pub fn top_bar(ui: &mut Ui, state: &AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.strong(&state.config.title);

        ui.separator();

        ui.hyperlink_to("Data Source", &state.config.data_source_link);
        ui.hyperlink_to("GitHub", &state.config.project_link);

        ui.separator();

        ui.label(format!(
            "{} records, {} names",
            state.dataset.len(),
            state.dataset.names().len()
        ));
    });
}

// ---------------------------------------------------------------------------
// Page sections
// ---------------------------------------------------------------------------

pub fn overview(ui: &mut Ui) {
    ui.heading("Overview");
    ui.label(OVERVIEW);
    ui.add_space(12.0);
}

/// Heading, help text and single-select dropdown for the by-gender chart.
pub fn single_name_section(ui: &mut Ui, state: &mut AppState) {
    ui.heading("One Name by Gender");
    ui.label(SINGLE_HELP);

    let dataset = state.dataset.clone();
    let mut picked: Option<String> = None;

    ui.horizontal(|ui: &mut Ui| {
        search_box(ui, &mut state.single_query);

        egui::ComboBox::from_id_salt("single_name_chooser")
            .selected_text(&state.single_name)
            .width(DROPDOWN_WIDTH)
            .height(320.0)
            .show_ui(ui, |ui: &mut Ui| {
                for name in dataset.names().matching(&state.single_query) {
                    if ui
                        .selectable_label(state.single_name == name, name)
                        .clicked()
                    {
                        picked = Some(name.to_string());
                    }
                }
            });
    });

    if let Some(name) = picked {
        state.select_single(&name);
    }
}

/// Heading, help text and multi-select dropdown for the comparison chart.
pub fn comparison_section(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Compare Name Totals");
    ui.label(COMPARE_HELP);

    let dataset = state.dataset.clone();
    let mut toggled: Option<String> = None;

    ui.horizontal(|ui: &mut Ui| {
        search_box(ui, &mut state.compare_query);

        let summary = match state.chosen_names.len() {
            0 => "Select names…".to_string(),
            1 => state.chosen_names[0].clone(),
            n => format!("{n} names"),
        };

        egui::ComboBox::from_id_salt("multiple_name_chooser")
            .selected_text(summary)
            .width(DROPDOWN_WIDTH)
            .height(320.0)
            .close_behavior(egui::PopupCloseBehavior::CloseOnClickOutside)
            .show_ui(ui, |ui: &mut Ui| {
                for name in dataset.names().matching(&state.compare_query) {
                    let mut checked = state.is_compared(name);
                    if ui.checkbox(&mut checked, name).changed() {
                        toggled = Some(name.to_string());
                    }
                }
            });

        if ui
            .add_enabled(!state.chosen_names.is_empty(), egui::Button::new("Clear"))
            .clicked()
        {
            state.clear_compared();
        }
    });

    if let Some(name) = toggled {
        state.toggle_compared(&name);
    }

    // ---- Chosen names as removable chips, coloured like their lines ----
    let mut removed: Option<String> = None;
    ui.horizontal_wrapped(|ui: &mut Ui| {
        for (idx, name) in state.chosen_names.iter().enumerate() {
            let color = state.colors.color_for(idx);
            ui.label(RichText::new(name).color(color).strong());
            if ui.small_button("✖").on_hover_text("Remove").clicked() {
                removed = Some(name.clone());
            }
        }
    });

    if let Some(name) = removed {
        state.remove_compared(&name);
    }
}

fn search_box(ui: &mut Ui, query: &mut String) {
    ui.add(
        egui::TextEdit::singleline(query)
            .hint_text("Search names…")
            .desired_width(160.0),
    );
}
