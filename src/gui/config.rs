use eframe::egui::Color32;

pub struct Config;

impl Config {
    pub const FRAME_MARGIN: f32 = 20.;
    pub const CONTROL_PANEL_WIDTH: f32 = 320.;
    pub const TEXT_SIZE: f32 = 16.;
    pub const TEXT_COLOR: Color32 = Color32::BLACK;
    pub const ERROR_COLOR: Color32 = Color32::DARK_RED;
    pub const BUTTON_STROKE_WIDTH: f32 = 3.;
    pub const BUTTON_STROKE_COLOR: Color32 = Color32::DARK_GRAY;
    pub const BUTTON_FILL_COLOR: Color32 = Color32::LIGHT_GRAY;

    pub const WIDGET_GAP: f32 = 20.;

    pub const LIVE_COLOR: Color32 = Color32::WHITE;
    pub const DEAD_COLOR: Color32 = Color32::BLACK;
    pub const GRID_LINE_COLOR: Color32 = Color32::from_gray(40);
    pub const GRID_LINE_WIDTH: f32 = 1.;
    /// Grid lines are skipped when cells are smaller than this many pixels.
    pub const MIN_CELL_PX_FOR_LINES: f32 = 6.;

    pub const MAX_SIZE: usize = 400;
    pub const MAX_FPS: f64 = 30.;
}
