mod config;
mod error;
mod format_int;
mod fps_limit;

pub use config::SimConfig;
pub use error::GridError;
pub use format_int::NiceInt;
pub use fps_limit::FpsLimiter;
