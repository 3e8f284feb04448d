use super::{App, Config};
use crate::utils::NiceInt;
use eframe::egui::{
    pos2, vec2, Button, Checkbox, DragValue, Rect, RichText, Sense, Stroke, Ui, Vec2,
};

impl App {
    fn new_text(text: &str) -> RichText {
        RichText::new(text)
            .color(Config::TEXT_COLOR)
            .size(Config::TEXT_SIZE)
    }

    fn new_button(text: &str) -> Button<'static> {
        Button::new(Self::new_text(text))
            .fill(Config::BUTTON_FILL_COLOR)
            .stroke(Stroke::new(
                Config::BUTTON_STROKE_WIDTH,
                Config::BUTTON_STROKE_COLOR,
            ))
    }

    fn draw_simulation_controls(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            let text = if self.is_paused { "Start" } else { "Stop" };
            if ui.add(Self::new_button(text)).clicked() {
                self.is_paused = !self.is_paused;
            }

            if ui
                .add_enabled(self.is_paused, Self::new_button("Next"))
                .clicked()
            {
                self.do_one_step = true;
            }

            if ui.add(Self::new_button("Restart")).clicked() {
                self.restart();
            }
        });
    }

    fn draw_generation_controls(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            ui.label(Self::new_text("Size: "));
            ui.add(DragValue::new(&mut self.sim_config.size).range(1..=Config::MAX_SIZE));
        });

        ui.horizontal(|ui| {
            ui.label(Self::new_text("% Live at start: "));
            ui.add(
                DragValue::new(&mut self.sim_config.live_percent)
                    .range(0.0..=100.0)
                    .speed(0.5)
                    .suffix("%"),
            );
        });

        ui.horizontal(|ui| {
            ui.add(Checkbox::new(
                &mut self.use_fixed_seed,
                Self::new_text("Fixed seed: "),
            ));
            ui.add_enabled(self.use_fixed_seed, DragValue::new(&mut self.fixed_seed));
        });

        if ui.add(Self::new_button("Generate")).clicked() {
            self.generate();
        }

        if let Some(err) = &self.last_error {
            ui.label(
                RichText::new(err.to_string())
                    .color(Config::ERROR_COLOR)
                    .size(Config::TEXT_SIZE),
            );
        }
    }

    fn draw_stats(&mut self, ui: &mut Ui) {
        ui.label(Self::new_text(&format!(
            "Generation: {}\nPopulation: {}\nSeed: {}",
            NiceInt::from(self.grid.generation()),
            NiceInt::from(self.grid.population()),
            self.grid.seed(),
        )));

        ui.label(Self::new_text(&format!(
            "\nFPS: {:3}\nLast step: {:.3} ms",
            self.fps_limiter.fps().round() as u32,
            self.last_update_duration * 1e3
        )));
    }

    fn draw_controls(&mut self, ui: &mut Ui) {
        ui.vertical(|ui| {
            ui.set_width(Config::CONTROL_PANEL_WIDTH);

            ui.group(|ui| {
                ui.vertical(|ui| {
                    self.draw_simulation_controls(ui);
                });
            });

            ui.add_space(Config::WIDGET_GAP);

            ui.group(|ui| {
                ui.vertical(|ui| {
                    self.draw_generation_controls(ui);
                });
            });

            ui.add_space(Config::WIDGET_GAP);

            self.draw_stats(ui);
        });
    }

    /// Paints every live cell as a filled square over a dead background.
    fn draw_field(&mut self, ui: &mut Ui, size_px: f32) {
        let (response, painter) = ui.allocate_painter(Vec2::splat(size_px), Sense::hover());
        let rect = response.rect;
        painter.rect_filled(rect, 0., Config::DEAD_COLOR);

        let cells = crate::snapshot(&self.grid);
        let n = cells.size();
        let cell_px = size_px / n as f32;
        for (row, states) in cells.rows().enumerate() {
            for (col, state) in states.iter().enumerate() {
                if state.is_alive() {
                    let min = rect.left_top() + vec2(col as f32, row as f32) * cell_px;
                    painter.rect_filled(
                        Rect::from_min_size(min, Vec2::splat(cell_px)),
                        0.,
                        Config::LIVE_COLOR,
                    );
                }
            }
        }

        if cell_px >= Config::MIN_CELL_PX_FOR_LINES {
            let stroke = Stroke::new(Config::GRID_LINE_WIDTH, Config::GRID_LINE_COLOR);
            for i in 0..=n {
                let offset = i as f32 * cell_px;
                painter.line_segment(
                    [
                        pos2(rect.left() + offset, rect.top()),
                        pos2(rect.left() + offset, rect.bottom()),
                    ],
                    stroke,
                );
                painter.line_segment(
                    [
                        pos2(rect.left(), rect.top() + offset),
                        pos2(rect.right(), rect.top() + offset),
                    ],
                    stroke,
                );
            }
        }
    }

    pub fn draw(&mut self, ui: &mut Ui) {
        let area = ui.available_size();

        let size_px = area
            .y
            .min(area.x - Config::CONTROL_PANEL_WIDTH - Config::FRAME_MARGIN)
            .max(1.);
        ui.horizontal(|ui| {
            self.draw_controls(ui);

            ui.add_space((ui.available_width() - size_px).max(0.));

            ui.vertical_centered(|ui| {
                self.draw_field(ui, size_px);
            });
        });
    }
}
