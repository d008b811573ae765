use macroquad::prelude::*;
use crate::application::{RenderView, Simulation, Viewport};
use crate::ui::{Button, ButtonAction, buttons_bottom, panel_x, grid_area_width, grid_area_height, PANEL_WIDTH};

const ALIVE_COLOR: Color = Color::new(0.0, 1.0, 0.59, 1.0);
const GRID_LINE_COLOR: Color = Color::new(0.16, 0.16, 0.16, 1.0);

/// Format large numbers with K/M/B suffixes
fn format_number(n: usize) -> String {
    if n >= 1_000_000_000 {
        format!("{:.1}B", n as f64 / 1_000_000_000.0)
    } else if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.1}K", n as f64 / 1_000.0)
    } else {
        format!("{}", n)
    }
}

/// First line position at or left of zero for lines every `spacing` px
/// passing through `origin`
fn first_line(origin: f64, spacing: f64) -> f32 {
    (origin.rem_euclid(spacing) - spacing) as f32
}

/// Draw the grid lines of the viewport when cells are large enough to see them
pub fn draw_grid_lines(viewport: &Viewport) {
    let spacing_px = viewport.cell_size_px();
    if spacing_px < 4.0 {
        return;
    }
    let spacing = spacing_px as f32;
    let width = grid_area_width();
    let height = grid_area_height();
    let thickness = viewport.zoom.clamp(0.5, 2.0) as f32;

    let mut x = first_line(viewport.offset.x, spacing_px);
    while x <= width {
        draw_line(x, 0.0, x, height, thickness, GRID_LINE_COLOR);
        x += spacing;
    }
    let mut y = first_line(viewport.offset.y, spacing_px);
    while y <= height {
        draw_line(0.0, y, width, y, thickness, GRID_LINE_COLOR);
        y += spacing;
    }
}

/// Draw the live cells that fall inside the grid area
pub fn draw_cells(view: &RenderView) {
    let viewport = &view.viewport;
    let cell_size = viewport.cell_size_px() as f32;
    let (min, max) =
        viewport.visible_cells(grid_area_width() as f64, grid_area_height() as f64);

    view.cells
        .iter()
        .filter(|c| c.x >= min.x && c.x <= max.x && c.y >= min.y && c.y <= max.y)
        .for_each(|&cell| {
            let pos = viewport.world_to_screen(cell).as_vec2();
            draw_rectangle(pos.x, pos.y, cell_size, cell_size, ALIVE_COLOR);
        });
}

/// Draw the whole grid area for one frame
pub fn draw_world(view: &RenderView) {
    draw_grid_lines(&view.viewport);
    draw_cells(view);
}

/// Draw control panel background
fn draw_panel_background() {
    draw_rectangle(
        panel_x(),
        0.0,
        PANEL_WIDTH,
        screen_height(),
        Color::from_rgba(30, 30, 30, 255)
    );
}

/// Draw the control panel with buttons and status
pub fn draw_controls(sim: &Simulation, buttons: &[(ButtonAction, Button)], mouse_pos: Vec2) {
    draw_panel_background();

    buttons.iter().for_each(|(_, btn)| btn.draw((mouse_pos.x, mouse_pos.y)));

    let px = panel_x();
    let top = buttons_bottom() + 10.0;
    let label = Color::from_rgba(180, 180, 180, 255);

    let hovered = sim.cell_at(mouse_pos.as_dvec2());
    let stats = sim.last_stats();
    let status_color = if sim.is_running() {
        Color::from_rgba(0, 255, 0, 255)
    } else {
        Color::from_rgba(255, 165, 0, 255)
    };

    let lines: [(String, f32, Color); 9] = [
        (if sim.is_running() { "Running" } else { "Paused" }.to_owned(), 16.0, status_color),
        (format!("Generation: {}", sim.generation()), 14.0, WHITE),
        (format!("Population: {}", format_number(sim.population())), 14.0, WHITE),
        (format!("+{} / -{}", stats.births, stats.deaths), 12.0, GRAY),
        (format!("Step: {:.2}ms", sim.last_step_ms()), 12.0, GRAY),
        (format!("Interval: {}ms", sim.config().step_interval_ms), 12.0, label),
        (format!("Zoom: {:.2}x", sim.viewport().zoom), 12.0, label),
        (format!("Tool: {}", sim.tool().name()), 12.0, label),
        (format!("Cell: ({}, {})", hovered.x, hovered.y), 12.0, label),
    ];

    lines.iter().enumerate().for_each(|(i, (text, size, color))| {
        draw_text(text, px + 8.0, top + 18.0 * i as f32, *size, *color);
    });

    let help = [
        "Space play  S step",
        "P pan  E edit  H home",
        "C clear  R random  L load",
        "F fit  Up/Down speed",
        "T strategy",
        "1-0 stamp preset",
    ];
    let help_top = top + 18.0 * lines.len() as f32 + 12.0;
    help.iter().enumerate().for_each(|(i, text)| {
        draw_text(text, px + 8.0, help_top + 14.0 * i as f32, 12.0, GRAY);
    });
    draw_text(&format!("FPS: {}", get_fps()), px + 8.0, screen_height() - 12.0, 12.0, GRAY);
}
