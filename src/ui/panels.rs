use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::data::catalog::{self, BUILTIN_SOURCE};
use crate::data::filter::{ApplicationFilter, Dimension, APPLICATION_CHOICES};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            // ---- Application radio group ----
            ui.strong("Application");
            for choice in APPLICATION_CHOICES {
                let filter = ApplicationFilter::parse(choice);
                let checked = state.filters.application == filter;
                if ui.radio(checked, *choice).clicked() {
                    state.set_application(filter);
                }
            }
            ui.add_space(12.0);

            // ---- One min/max slider pair per numeric dimension ----
            for dim in Dimension::ALL {
                range_sliders(ui, state, dim);
                ui.add_space(12.0);
            }

            ui.separator();
            if ui
                .add_sized([ui.available_width(), 24.0], egui::Button::new("Reset Filters"))
                .clicked()
            {
                state.reset_filters();
            }

            ui.add_space(8.0);
            ui.label(format!(
                "{} products match your filters",
                state.match_count()
            ));

            if !state.malformed.is_empty() {
                ui.add_space(8.0);
                let header = format!("{} records skipped", state.malformed.len());
                let header = RichText::new(header).color(Color32::from_rgb(217, 119, 6));
                egui::CollapsingHeader::new(header)
                    .id_salt("malformed_records")
                    .default_open(false)
                    .show(ui, |ui: &mut Ui| {
                        for err in &state.malformed {
                            ui.label(RichText::new(err.to_string()).small());
                        }
                    });
            }
        });
}

/// Two sliders (min, max) for one dimension. The thumbs cannot cross.
fn range_sliders(ui: &mut Ui, state: &mut AppState, dim: Dimension) {
    let bounds = dim.bounds();
    let mut range = state.filters.range(dim);
    let mut low = range.low();
    let mut high = range.high();

    ui.label(dim.label());
    let low_changed = ui
        .add(
            egui::Slider::new(&mut low, bounds.low()..=bounds.high())
                .step_by(dim.step() as f64)
                .suffix(dim.unit())
                .text("min"),
        )
        .changed();
    let high_changed = ui
        .add(
            egui::Slider::new(&mut high, bounds.low()..=bounds.high())
                .step_by(dim.step() as f64)
                .suffix(dim.unit())
                .text("max"),
        )
        .changed();

    ui.horizontal(|ui: &mut Ui| {
        ui.small(format!("{}{}", bounds.low(), dim.unit()));
        let right = egui::Layout::right_to_left(egui::Align::Center);
        ui.with_layout(right, |ui: &mut Ui| {
            ui.small(format!("{}{}", bounds.high(), dim.unit()));
        });
    });

    if low_changed {
        range.set_low(low);
    }
    if high_changed {
        range.set_high(high);
    }
    if low_changed || high_changed {
        state.set_range(dim, range.low(), range.high());
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            if ui.button("Reset catalog").clicked() {
                log::info!("Restoring {BUILTIN_SOURCE}");
                state.set_catalog(catalog::builtin(), BUILTIN_SOURCE);
                ui.close_menu();
            }
        });

        ui.separator();

        ui.label(format!(
            "{} of {} products ({})",
            state.match_count(),
            state.catalog.len(),
            state.source
        ));

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open product catalog")
        .add_filter("Supported files", &["json", "csv"])
        .add_filter("JSON", &["json"])
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        match crate::data::loader::load_file(&path) {
            Ok(products) => {
                log::info!("Loaded {} products from {}", products.len(), path.display());
                state.set_catalog(products, &path.display().to_string());
            }
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}
