//! Thin adapter from macroquad input events to simulation commands.

use macroquad::prelude::*;
use crate::application::{Simulation, ToolMode, ZoomDirection};
use crate::domain::Pattern;
use crate::ui::{ButtonAction, Button, grid_area_width, grid_area_height};

fn over_grid(mouse_pos: Vec2) -> bool {
    mouse_pos.x < grid_area_width()
}

/// Handle anchored zoom with the mouse wheel
pub fn handle_zoom(sim: &mut Simulation, mouse_pos: Vec2) {
    if !over_grid(mouse_pos) {
        return;
    }
    if let Some(direction) = ZoomDirection::from_wheel(mouse_wheel().1) {
        sim.zoom_at(mouse_pos.as_dvec2(), direction);
    }
}

/// Route the left button to the active tool.
/// A drag that leaves the grid area still ends on release.
pub fn handle_pointer(sim: &mut Simulation, mouse_pos: Vec2) {
    let pixel = mouse_pos.as_dvec2();
    if is_mouse_button_pressed(MouseButton::Left) && over_grid(mouse_pos) {
        sim.pointer_down(pixel);
    } else if is_mouse_button_released(MouseButton::Left) {
        sim.pointer_up(pixel);
    } else if is_mouse_button_down(MouseButton::Left) {
        sim.pointer_move(pixel);
    }
}

/// Load the configured snapshot, logging failures
pub fn reload_snapshot(sim: &mut Simulation) {
    match sim.reload_snapshot() {
        Ok(Some(_)) => {}
        Ok(None) => log::warn!("no snapshot path configured (set snapshot_path or LIFE_SNAPSHOT)"),
        Err(e) => log::error!("snapshot load failed: {e}"),
    }
}

/// Stamp a preset under the cursor with the number keys
pub fn handle_pattern_keys(sim: &mut Simulation, patterns: &[Pattern], mouse_pos: Vec2) {
    const KEYS: [KeyCode; 10] = [
        KeyCode::Key1,
        KeyCode::Key2,
        KeyCode::Key3,
        KeyCode::Key4,
        KeyCode::Key5,
        KeyCode::Key6,
        KeyCode::Key7,
        KeyCode::Key8,
        KeyCode::Key9,
        KeyCode::Key0,
    ];

    if !over_grid(mouse_pos) {
        return;
    }
    for (key, pattern) in KEYS.iter().zip(patterns) {
        if is_key_pressed(*key) {
            let center = sim.cell_at(mouse_pos.as_dvec2());
            let born = sim.stamp(pattern, center);
            log::info!(
                "stamped {} ({}) at ({}, {}), {born} cells born",
                pattern.name,
                pattern.description,
                center.x,
                center.y
            );
        }
    }
}

/// Apply one toolbar or keyboard action
pub fn apply_action(sim: &mut Simulation, action: ButtonAction) {
    match action {
        ButtonAction::PlayPause => sim.toggle_running(),
        ButtonAction::Step => {
            sim.set_running(false);
            sim.step_once();
        }
        ButtonAction::PanTool => {
            sim.set_tool(ToolMode::Pan);
        }
        ButtonAction::EditTool => {
            sim.set_tool(ToolMode::Edit);
        }
        ButtonAction::Clear => sim.clear(),
        ButtonAction::Random => {
            sim.randomize(grid_area_width() as f64, grid_area_height() as f64)
        }
        ButtonAction::Fit => {
            if !sim.fit_view(grid_area_width() as f64, grid_area_height() as f64) {
                log::info!("nothing to fit: no live cells");
            }
        }
        ButtonAction::Load => reload_snapshot(sim),
        ButtonAction::Strategy => {
            let next = sim.strategy().next();
            sim.set_strategy(next);
        }
    }
}

/// Process keyboard shortcuts
pub fn process_keyboard_input(sim: &mut Simulation) {
    let actions = [
        (KeyCode::Space, ButtonAction::PlayPause),
        (KeyCode::S, ButtonAction::Step),
        (KeyCode::P, ButtonAction::PanTool),
        (KeyCode::E, ButtonAction::EditTool),
        (KeyCode::C, ButtonAction::Clear),
        (KeyCode::R, ButtonAction::Random),
        (KeyCode::L, ButtonAction::Load),
        (KeyCode::F, ButtonAction::Fit),
        (KeyCode::T, ButtonAction::Strategy),
    ];

    for (key, action) in actions {
        if is_key_pressed(key) {
            apply_action(sim, action);
        }
    }

    if is_key_pressed(KeyCode::Up) {
        sim.adjust_step_interval(-10);
    }
    if is_key_pressed(KeyCode::Down) {
        sim.adjust_step_interval(10);
    }
    // Reset view with 'H' (home)
    if is_key_pressed(KeyCode::H) {
        sim.reset_view();
    }
}

/// Process toolbar clicks
pub fn process_button_clicks(
    sim: &mut Simulation,
    buttons: &[(ButtonAction, Button)],
    mouse_pos: Vec2,
) {
    for (action, button) in buttons {
        if button.is_clicked((mouse_pos.x, mouse_pos.y)) {
            apply_action(sim, *action);
        }
    }
}
