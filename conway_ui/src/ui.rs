// ui.rs - egui renderer and input surface for a simulation session

use conway::{CellObserver, GRID_COLUMNS, GRID_ROWS, Position, Session, Ticker};
use eframe::egui;
use egui::{Color32, Pos2, Rect, Stroke, Vec2};
use std::time::Instant;

use crate::settings::Settings;

const SPACING: f32 = 0.5;

/// Requests a repaint whenever the core reports a cell change.
struct RepaintObserver {
    ctx: egui::Context,
}

impl CellObserver for RepaintObserver {
    fn cell_changed(&mut self, row: usize, column: usize, alive: bool) {
        log::trace!("cell ({row}, {column}) -> {alive}");
        self.ctx.request_repaint();
    }
}

/// Maps a pointer position to the cell under it, if any.
pub fn cell_at(origin: Pos2, pointer: Pos2, cell_size: f32) -> Option<Position> {
    let pitch = cell_size + SPACING;
    let offset = pointer - origin;
    if offset.x < 0.0 || offset.y < 0.0 {
        return None;
    }
    let row = (offset.y / pitch) as usize;
    let column = (offset.x / pitch) as usize;
    (row < GRID_ROWS && column < GRID_COLUMNS).then_some((row, column))
}

pub struct GameOfLife {
    session: Session,
    ticker: Ticker,
    live_color: Color32,
    dead_color: Color32,
    cell_size: f32,
    selected_preset: String,
    last_drag_cell: Option<Position>,
    status: Option<String>,
}

impl GameOfLife {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: &Settings) -> Self {
        let observer = RepaintObserver { ctx: cc.egui_ctx.clone() };
        let session = Session::with_observer(settings.preset_library(), Box::new(observer));
        let selected_preset = session.presets().names().next().unwrap_or_default().to_string();
        let [lr, lg, lb] = settings.live_color;
        let [dr, dg, db] = settings.dead_color;

        Self {
            session,
            ticker: Ticker::new(Instant::now()),
            live_color: Color32::from_rgb(lr, lg, lb),
            dead_color: Color32::from_rgb(dr, dg, db),
            cell_size: settings.cell_size,
            selected_preset,
            last_drag_cell: None,
            status: None,
        }
    }

    fn controls(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let running = self.session.is_running();

            if ui.add_enabled(!running, egui::Button::new("▶ Play")).clicked() {
                self.session.handle_play();
            }
            if ui.add_enabled(running, egui::Button::new("⏸ Stop")).clicked() {
                self.session.handle_stop();
            }
            if ui.add_enabled(!running, egui::Button::new("⏭ Step")).clicked() {
                self.session.handle_step();
            }
            if ui.button("⏹ Reset").clicked() {
                self.session.handle_reset();
                self.status = None;
            }

            ui.separator();

            // Preset dropdown
            ui.label("Preset:");
            let names: Vec<String> = self.session.presets().names().map(str::to_string).collect();
            egui::ComboBox::from_id_source("preset_selector")
                .selected_text(self.selected_preset.as_str())
                .show_ui(ui, |ui| {
                    for name in &names {
                        ui.selectable_value(&mut self.selected_preset, name.clone(), name.as_str());
                    }
                });

            if ui.button("Apply").clicked() {
                self.status = match self.session.handle_select_preset(&self.selected_preset) {
                    Ok(_) => None,
                    Err(e) => Some(e.to_string()),
                };
            }

            ui.separator();

            ui.label(format!("Generation: {}", self.session.grid().generation()));
        });

        ui.horizontal(|ui| {
            ui.label("Live:");
            ui.color_edit_button_srgba(&mut self.live_color);
            ui.label("Dead:");
            ui.color_edit_button_srgba(&mut self.dead_color);
        });
    }

    fn board(&mut self, ui: &mut egui::Ui) {
        let origin = ui.cursor().min;
        let total_size = Vec2::new(
            (self.cell_size + SPACING) * GRID_COLUMNS as f32 - SPACING,
            (self.cell_size + SPACING) * GRID_ROWS as f32 - SPACING,
        );
        let (response, painter) = ui.allocate_painter(total_size, egui::Sense::click_and_drag());

        painter.rect_filled(Rect::from_min_size(origin, total_size), 0.0, Color32::BLACK);

        for cell in self.session.grid().cells() {
            let x = origin.x + cell.column() as f32 * (self.cell_size + SPACING);
            let y = origin.y + cell.row() as f32 * (self.cell_size + SPACING);
            let rect = Rect::from_min_size(egui::pos2(x, y), Vec2::splat(self.cell_size));
            let color = if cell.is_alive() { self.live_color } else { self.dead_color };

            painter.rect_filled(rect, 1.0, color);
            painter.rect_stroke(rect, 1.0, Stroke::new(0.2, Color32::from_gray(60)));
        }

        let pointer_cell = response
            .interact_pointer_pos()
            .and_then(|pos| cell_at(origin, pos, self.cell_size));

        if response.clicked() {
            if let Some((row, column)) = pointer_cell {
                let result = self.session.handle_click(row, column);
                self.apply_edit(result);
            }
        } else if response.dragged() {
            // One activation per cell entered
            if let Some((row, column)) = pointer_cell.filter(|&cell| Some(cell) != self.last_drag_cell) {
                let result = self.session.handle_drag_enter(row, column);
                self.apply_edit(result);
            }
            self.last_drag_cell = pointer_cell;
        }

        if response.drag_released() {
            self.last_drag_cell = None;
        }
    }

    fn apply_edit(&mut self, result: conway::Result<bool>) {
        if let Err(e) = result {
            log::warn!("edit rejected: {e}");
            self.status = Some(e.to_string());
        }
    }
}

impl eframe::App for GameOfLife {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // The timer fires whether or not the session is running
        let now = Instant::now();
        if self.ticker.fire_if_due(now) {
            self.session.on_tick();
        }
        ctx.request_repaint_after(self.ticker.until_next(now));

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Conway's Game of Life");

            self.controls(ui);

            ui.separator();

            ui.label("Click a cell to toggle it, drag to draw. Editing works while stopped.");
            if let Some(status) = &self.status {
                ui.colored_label(Color32::LIGHT_RED, status.as_str());
            }

            ui.separator();

            self.board(ui);

            ui.separator();

            let total = GRID_ROWS * GRID_COLUMNS;
            let live_cells = self.session.grid().population();
            ui.horizontal(|ui| {
                ui.label(format!("Live cells: {}", live_cells));
                ui.label(format!("Dead cells: {}", total - live_cells));
                ui.label(format!("Population: {:.1}%", (live_cells as f32 / total as f32) * 100.0));
            });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_at_maps_pointer() {
        let origin = egui::pos2(10.0, 20.0);
        assert_eq!(cell_at(origin, egui::pos2(10.0, 20.0), 18.0), Some((0, 0)));
        assert_eq!(cell_at(origin, egui::pos2(10.0 + 18.6, 20.0 + 3.0 * 18.5 + 1.0), 18.0), Some((3, 1)));
    }

    #[test]
    fn test_cell_at_outside_board() {
        let origin = egui::pos2(0.0, 0.0);
        assert_eq!(cell_at(origin, egui::pos2(-1.0, 5.0), 18.0), None);
        assert_eq!(cell_at(origin, egui::pos2(5.0, 40.0 * 18.5 + 1.0), 18.0), None);
    }
}
