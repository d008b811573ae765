// Domain layer - cells, rules, generation stepping
pub mod domain;

// Application layer - simulation context, viewport, config
pub mod application;

// Infrastructure layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Cell, CellSet, Pattern, presets, Strategy};
pub use application::{Config, Simulation, SharedSimulation, Viewport, ZoomDirection, ToolMode};
pub use ui::Button;
