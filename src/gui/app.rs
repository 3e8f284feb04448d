use super::Config;
use crate::utils::FpsLimiter;
use crate::{Grid, GridError, SimConfig};
use eframe::egui::{CentralPanel, Color32, Context, Frame, Key, Margin};
use log::warn;
use std::time::Instant;

pub struct App {
    pub(super) grid: Grid,                     // Conway's GoL field.
    pub(super) sim_config: SimConfig,          // Parameters of the next `Generate`.
    pub(super) use_fixed_seed: bool,           // Whether `Generate` replays `fixed_seed`.
    pub(super) fixed_seed: u64,                // Seed used when `use_fixed_seed` is set.
    pub(super) is_paused: bool,                // Flag indicating whether the simulation is paused.
    pub(super) do_one_step: bool,              // Do one step and pause.
    pub(super) last_error: Option<GridError>,  // Last rejected configuration.
    pub(super) last_update_duration: f64,      // Duration of the last step in seconds.
    pub(super) fps_limiter: FpsLimiter,        // Limits the frame rate to a certain value.
    pub(super) max_fps: f64,
}

impl App {
    pub fn new(sim_config: SimConfig) -> Result<Self, GridError> {
        let grid = crate::create(&sim_config)?;
        Ok(Self {
            use_fixed_seed: sim_config.seed.is_some(),
            fixed_seed: grid.seed(),
            grid,
            sim_config,
            is_paused: true,
            do_one_step: false,
            last_error: None,
            last_update_duration: 0.,
            fps_limiter: FpsLimiter::new(Config::MAX_FPS),
            max_fps: Config::MAX_FPS,
        })
    }

    /// Replace the field with a fresh random one built from the panel's parameters.
    ///
    /// A rejected configuration keeps the current field.
    pub fn generate(&mut self) {
        let config = SimConfig {
            seed: self.use_fixed_seed.then_some(self.fixed_seed),
            ..self.sim_config.clone()
        };
        match crate::create(&config) {
            Ok(grid) => {
                self.fixed_seed = grid.seed();
                self.grid = grid;
                self.last_error = None;
            }
            Err(err) => {
                warn!("rejected configuration {:?}: {}", config, err);
                self.last_error = Some(err);
            }
        }
    }

    pub fn restart(&mut self) {
        crate::reset(&mut self.grid);
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns whether the field changed.
    fn update_engine(&mut self) -> bool {
        if self.is_paused && !self.do_one_step {
            return false;
        }

        let timer = Instant::now();
        crate::advance(&mut self.grid);
        self.last_update_duration = timer.elapsed().as_secs_f64();

        self.do_one_step = false;
        true
    }

    fn handle_keys(&mut self, ctx: &Context) {
        ctx.input(|input| {
            if input.key_pressed(Key::Space) {
                self.do_one_step = true;
            }
            if input.key_pressed(Key::E) && !input.modifiers.ctrl {
                self.is_paused = !self.is_paused;
            }
        });
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_keys(ctx);

        // full-window panel
        CentralPanel::default()
            .frame(
                Frame::default()
                    .inner_margin(Margin::same(Config::FRAME_MARGIN))
                    .fill(Color32::LIGHT_GRAY),
            )
            .show(ctx, |ui| {
                self.draw(ui);
            });

        if self.update_engine() || !self.is_paused {
            ctx.request_repaint();
        }

        self.fps_limiter.set_max_fps(self.max_fps);
        self.fps_limiter.delay();
    }
}
