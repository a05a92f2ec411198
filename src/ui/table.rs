use eframe::egui::{self, pos2, Color32, Pos2, Rect, RichText, Stroke, Ui};
use egui_extras::{Column, TableBuilder, TableRow};

use crate::data::catalog::COMPONENT_CATEGORIES;
use crate::state::AppState;

const HEADERS: [&str; 8] = [
    "Model",
    "Manufacturer",
    "Applications",
    "Technology",
    "Standards",
    "Axis",
    "G range",
    "Bias inrun",
];

const ACCENT: Color32 = Color32::from_rgb(37, 99, 235);

/// Line drawn under every product row.
const ROW_DIVIDER: Color32 = Color32::from_rgb(249, 115, 22);

/// Shown after each column title. Clicking a header does nothing.
const SORT_MARKER: &str = "↕";

// ---------------------------------------------------------------------------
// Central panel: heading, category strip, product table
// ---------------------------------------------------------------------------

/// Render the product listing in the central panel.
pub fn product_view(ui: &mut Ui, state: &AppState) {
    // Navigation and "Refine results" have no target in a single-page browser.
    ui.add(egui::Button::new(RichText::new("⬅ Back").color(ACCENT)).frame(false));
    ui.heading("Explore products");
    ui.add_space(8.0);

    ui.label("Showing components for");
    ui.horizontal_wrapped(|ui: &mut Ui| {
        for (i, category) in COMPONENT_CATEGORIES.iter().enumerate() {
            let text = RichText::new(*category);
            let text = if i == 0 {
                text.color(Color32::WHITE).background_color(ACCENT)
            } else {
                text.background_color(ui.visuals().faint_bg_color)
            };
            ui.label(text);
        }
    });
    ui.add_space(8.0);
    let refine = RichText::new("Refine results").color(Color32::WHITE);
    ui.add(egui::Button::new(refine).fill(ACCENT));
    ui.separator();

    if state.catalog.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("The catalog is empty  (File → Open…)");
        });
        return;
    }

    product_table(ui, state);
}

fn header_text(title: &str) -> String {
    format!("{title} {SORT_MARKER}")
}

/// Segment along the bottom edge of a cell, widened by half the column gap on
/// each side so neighbouring cells join into one line.
fn divider_segment(cell: Rect, gap: f32) -> [Pos2; 2] {
    let y = cell.bottom() - 0.5;
    [
        pos2(cell.left() - gap / 2.0, y),
        pos2(cell.right() + gap / 2.0, y),
    ]
}

/// Add a body cell with the orange divider underneath.
fn cell(row: &mut TableRow<'_, '_>, add_contents: impl FnOnce(&mut Ui)) {
    row.col(|ui: &mut Ui| {
        let gap = ui.spacing().item_spacing.x;
        let segment = divider_segment(ui.max_rect(), gap);
        ui.painter().line_segment(segment, Stroke::new(1.0, ROW_DIVIDER));
        add_contents(ui);
    });
}

// Headers carry a sort marker but the listing keeps catalog order.
fn product_table(ui: &mut Ui, state: &AppState) {
    TableBuilder::new(ui)
        .resizable(true)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .column(Column::auto().at_least(60.0))
        .column(Column::auto().at_least(140.0))
        .column(Column::initial(300.0).at_least(120.0).clip(true))
        .column(Column::auto().at_least(80.0))
        .column(Column::auto().at_least(80.0))
        .column(Column::auto().at_least(40.0))
        .column(Column::auto().at_least(70.0))
        .column(Column::remainder().at_least(70.0))
        .header(24.0, |mut header| {
            for title in HEADERS {
                header.col(|ui: &mut Ui| {
                    ui.strong(header_text(title));
                });
            }
        })
        .body(|mut body| {
            for product in state.visible_products() {
                body.row(26.0, |mut row| {
                    cell(&mut row, |ui: &mut Ui| {
                        ui.label(&product.model);
                    });
                    cell(&mut row, |ui: &mut Ui| {
                        ui.label(&product.manufacturer);
                    });
                    cell(&mut row, |ui: &mut Ui| {
                        for tag in &product.applications {
                            let color = state.badge_colors.color_for(tag.key());
                            ui.label(
                                RichText::new(tag.label())
                                    .small()
                                    .color(Color32::WHITE)
                                    .background_color(color),
                            );
                        }
                    });
                    cell(&mut row, |ui: &mut Ui| {
                        ui.label(&product.technology);
                    });
                    cell(&mut row, |ui: &mut Ui| {
                        ui.label(&product.standards);
                    });
                    cell(&mut row, |ui: &mut Ui| {
                        ui.label(&product.axis);
                    });
                    cell(&mut row, |ui: &mut Ui| {
                        ui.label(&product.g_range);
                    });
                    cell(&mut row, |ui: &mut Ui| {
                        ui.label(&product.bias_inrun);
                    });
                });
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn divider_spans_cell_bottom_and_gap() {
        let cell = Rect::from_min_max(pos2(10.0, 20.0), pos2(110.0, 46.0));
        assert_eq!(
            divider_segment(cell, 8.0),
            [pos2(6.0, 45.5), pos2(114.0, 45.5)]
        );
    }

    #[test]
    fn divider_is_orange() {
        assert_eq!(ROW_DIVIDER.to_array(), [249, 115, 22, 255]);
        assert_ne!(ROW_DIVIDER, ACCENT);
    }

    #[test]
    fn every_header_carries_sort_marker() {
        let titles: Vec<String> = HEADERS.iter().map(|t| header_text(t)).collect();
        assert_eq!(titles[0], "Model ↕");
        assert!(titles.iter().all(|t| t.ends_with(SORT_MARKER)));
    }
}
