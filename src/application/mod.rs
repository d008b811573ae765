mod config;
mod viewport;
mod tools;
mod simulation;
mod shared;

pub use config::{Config, ConfigError, DEFAULT_CONFIG_PATH, MAX_STEP_INTERVAL_MS, MIN_STEP_INTERVAL_MS};
pub use viewport::{Viewport, ZoomDirection};
pub use tools::{DragState, ToolMode};
pub use simulation::{RenderView, Simulation, StepStats};
pub use shared::SharedSimulation;
