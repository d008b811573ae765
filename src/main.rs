use macroquad::prelude::*;
use infinite_life::{
    Config, Simulation, presets,
    ui, rendering, input,
};

fn window_conf() -> Conf {
    Conf {
        window_title: "Infinite Life".to_owned(),
        window_width: 1200,
        window_height: 800,
        window_resizable: true,
        ..Default::default()
    }
}

fn init_logging() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .try_init();
}

fn load_config() -> Config {
    let mut cfg = match Config::load_default() {
        Ok(cfg) => cfg,
        Err(e) => {
            log::error!("{e}; using defaults");
            Config::default()
        }
    };
    // First CLI argument overrides the snapshot path
    if let Some(path) = std::env::args_os().nth(1) {
        cfg.snapshot_path = Some(path.into());
    }
    log::info!(
        "grid {}px, zoom {}..{}, step every {}ms",
        cfg.grid_size, cfg.min_zoom, cfg.max_zoom, cfg.step_interval_ms
    );
    cfg
}

#[macroquad::main(window_conf)]
async fn main() {
    init_logging();
    let mut sim = Simulation::new(load_config());
    if sim.config().snapshot_path.is_some() {
        input::reload_snapshot(&mut sim);
    }
    let patterns = presets::all_patterns();

    loop {
        let mouse_pos = Vec2::from(mouse_position());
        let buttons = ui::create_buttons(&sim);

        input::process_button_clicks(&mut sim, &buttons, mouse_pos);
        input::handle_pointer(&mut sim, mouse_pos);
        input::handle_zoom(&mut sim, mouse_pos);
        input::handle_pattern_keys(&mut sim, &patterns, mouse_pos);
        input::process_keyboard_input(&mut sim);

        sim.tick(get_frame_time());

        clear_background(BLACK);
        rendering::draw_world(&sim.render_view());
        rendering::draw_controls(&sim, &buttons, mouse_pos);

        next_frame().await;
    }
}
