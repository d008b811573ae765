mod button;

pub use button::Button;

// UI constants - functions for responsive layout
use crate::application::{Simulation, ToolMode};
use macroquad::prelude::{screen_height, screen_width};

pub const PANEL_WIDTH: f32 = 180.0;
pub const BUTTON_HEIGHT: f32 = 36.0;
const BUTTON_SPACING: f32 = 44.0;
const BUTTONS_TOP: f32 = 20.0;

/// Get the X position where the panel starts (right side)
pub fn panel_x() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Get the width of the grid area
pub fn grid_area_width() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Get the height of the grid area
pub fn grid_area_height() -> f32 {
    screen_height()
}

/// Y coordinate just below the last button
pub fn buttons_bottom() -> f32 {
    BUTTONS_TOP + BUTTON_SPACING * ButtonAction::ALL.len() as f32
}

/// What a toolbar button does when clicked
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonAction {
    PlayPause,
    Step,
    PanTool,
    EditTool,
    Clear,
    Random,
    Load,
    Fit,
    Strategy,
}

impl ButtonAction {
    pub const ALL: [ButtonAction; 9] = [
        ButtonAction::PlayPause,
        ButtonAction::Step,
        ButtonAction::PanTool,
        ButtonAction::EditTool,
        ButtonAction::Clear,
        ButtonAction::Random,
        ButtonAction::Load,
        ButtonAction::Fit,
        ButtonAction::Strategy,
    ];

    fn label(self, sim: &Simulation) -> String {
        match self {
            ButtonAction::PlayPause => {
                let label = if sim.is_running() { "Pause" } else { "Play" };
                label.to_owned()
            }
            ButtonAction::Step => "Step".to_owned(),
            ButtonAction::PanTool => "Pan".to_owned(),
            ButtonAction::EditTool => "Edit".to_owned(),
            ButtonAction::Clear => "Clear".to_owned(),
            ButtonAction::Random => "Random".to_owned(),
            ButtonAction::Load => "Load".to_owned(),
            ButtonAction::Fit => "Fit".to_owned(),
            ButtonAction::Strategy => format!("Step: {}", sim.strategy().name()),
        }
    }

    fn is_active(self, sim: &Simulation) -> bool {
        match self {
            ButtonAction::PanTool => sim.tool() == ToolMode::Pan,
            ButtonAction::EditTool => sim.tool() == ToolMode::Edit,
            _ => false,
        }
    }
}

/// Create toolbar buttons reflecting the current simulation state
pub fn create_buttons(sim: &Simulation) -> Vec<(ButtonAction, Button)> {
    let px = panel_x();
    ButtonAction::ALL
        .iter()
        .enumerate()
        .map(|(i, &action)| {
            let y = BUTTONS_TOP + BUTTON_SPACING * i as f32;
            let button = Button::new(px, y, PANEL_WIDTH, BUTTON_HEIGHT, action.label(sim))
                .with_active(action.is_active(sim));
            (action, button)
        })
        .collect()
}
