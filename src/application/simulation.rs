use crate::application::{
    Config, DragState, MAX_STEP_INTERVAL_MS, MIN_STEP_INTERVAL_MS, ToolMode, Viewport,
    ZoomDirection,
};
use crate::domain::{Cell, CellSet, Pattern, SnapshotError, Strategy, snapshot};
use macroquad::math::DVec2;
use std::path::Path;

/// Read-only data the renderer needs for one frame
#[derive(Clone, Debug)]
pub struct RenderView {
    pub cells: Vec<Cell>,
    /// Viewport with any in-progress drag already applied
    pub viewport: Viewport,
}

/// Population changes produced by one step
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepStats {
    pub births: usize,
    pub deaths: usize,
    pub population: usize,
}

/// Simulation owns the live cells and the view onto them.
/// Every command runs to completion before returning; input layers drive it
/// only through these methods.
pub struct Simulation {
    cells: CellSet,
    viewport: Viewport,
    tool: ToolMode,
    drag: Option<DragState>,
    running: bool,
    generation: u64,
    strategy: Strategy,
    config: Config,
    update_timer: f32,
    last_step_ms: f32,
    last_stats: StepStats,
}

impl Simulation {
    pub fn new(config: Config) -> Self {
        Self {
            cells: CellSet::new(),
            viewport: Viewport::new(&config),
            tool: ToolMode::default(),
            drag: None,
            running: false,
            generation: 0,
            strategy: Strategy::default(),
            config,
            update_timer: 0.0,
            last_step_ms: 0.0,
            last_stats: StepStats::default(),
        }
    }

    pub fn cells(&self) -> &CellSet {
        &self.cells
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn tool(&self) -> ToolMode {
        self.tool
    }

    pub fn drag(&self) -> Option<&DragState> {
        self.drag.as_ref()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn population(&self) -> usize {
        self.cells.len()
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn last_step_ms(&self) -> f32 {
        self.last_step_ms
    }

    pub fn last_stats(&self) -> StepStats {
        self.last_stats
    }

    /// Cell under a screen pixel
    pub fn cell_at(&self, pixel: DVec2) -> Cell {
        self.viewport.screen_to_world_cell(pixel)
    }

    /// Flip one cell. Returns its new liveness.
    pub fn toggle_cell(&mut self, cell: Cell) -> bool {
        self.cells.toggle(cell)
    }

    /// Start a pan at `pixel`. Ignored outside Pan mode.
    pub fn begin_drag(&mut self, pixel: DVec2) {
        if self.tool == ToolMode::Pan {
            self.drag = Some(DragState::new(pixel));
        }
    }

    /// Move the active pan and return the preview offset to draw with.
    /// The committed offset does not change until [`Self::end_drag`].
    pub fn update_drag(&mut self, pixel: DVec2) -> Option<DVec2> {
        let drag = self.drag.as_mut()?;
        drag.current = pixel;
        Some(self.viewport.offset + drag.delta())
    }

    /// Commit the pan ending at `pixel`
    pub fn end_drag(&mut self, pixel: DVec2) {
        if let Some(mut drag) = self.drag.take() {
            drag.current = pixel;
            self.viewport.pan(drag.delta());
        }
    }

    pub fn zoom_at(&mut self, pixel: DVec2, direction: ZoomDirection) {
        self.viewport.zoom_at(pixel, direction);
    }

    pub fn reset_view(&mut self) {
        self.drag = None;
        self.viewport.reset();
    }

    /// Frame every live cell in a `width` x `height` screen area.
    /// Returns false when there is nothing to frame.
    pub fn fit_view(&mut self, width: f64, height: f64) -> bool {
        let Some((min, max)) = self.cells.bounds() else {
            return false;
        };
        self.drag = None;
        self.viewport.fit_to(min, max, width, height);
        log::debug!(
            "fit view to ({}, {})..=({}, {}) at zoom {:.3}",
            min.x,
            min.y,
            max.x,
            max.y,
            self.viewport.zoom
        );
        true
    }

    /// Switch tools. Returns false if `mode` was already active.
    /// An uncommitted drag is dropped.
    pub fn set_tool(&mut self, mode: ToolMode) -> bool {
        if self.tool == mode {
            return false;
        }
        self.drag = None;
        self.tool = mode;
        true
    }

    /// Primary button pressed on the grid
    pub fn pointer_down(&mut self, pixel: DVec2) {
        match self.tool {
            ToolMode::Pan => self.begin_drag(pixel),
            ToolMode::Edit => {
                let cell = self.cell_at(pixel);
                self.toggle_cell(cell);
            }
        }
    }

    /// Pointer moved while held. Returns the drag preview offset, if panning.
    pub fn pointer_move(&mut self, pixel: DVec2) -> Option<DVec2> {
        match self.tool {
            ToolMode::Pan => self.update_drag(pixel),
            ToolMode::Edit => None,
        }
    }

    /// Primary button released
    pub fn pointer_up(&mut self, pixel: DVec2) {
        if self.tool == ToolMode::Pan {
            self.end_drag(pixel);
        }
    }

    pub fn set_running(&mut self, running: bool) {
        if self.running != running {
            log::info!(
                "simulation {} at generation {}",
                if running { "started" } else { "paused" },
                self.generation
            );
        }
        self.running = running;
        self.update_timer = 0.0;
    }

    pub fn toggle_running(&mut self) {
        self.set_running(!self.running);
    }

    pub fn set_strategy(&mut self, strategy: Strategy) {
        self.strategy = strategy;
    }

    /// Lengthen or shorten the time between generations
    pub fn adjust_step_interval(&mut self, delta_ms: i64) {
        self.config.step_interval_ms = self
            .config
            .step_interval_ms
            .saturating_add_signed(delta_ms)
            .clamp(MIN_STEP_INTERVAL_MS, MAX_STEP_INTERVAL_MS);
    }

    /// Advance exactly one generation
    pub fn step_once(&mut self) -> StepStats {
        let start = std::time::Instant::now();
        let next = self.strategy.step(&self.cells, self.config.parallel_threshold);
        self.last_step_ms = start.elapsed().as_secs_f32() * 1000.0;

        let was_alive = !self.cells.is_empty();
        let stats = StepStats {
            births: next.births,
            deaths: next.deaths,
            population: next.cells.len(),
        };
        if was_alive && next.is_extinct() {
            log::info!("population extinct at generation {}", self.generation + 1);
        }
        self.cells = next.cells;
        self.generation += 1;
        self.last_stats = stats;

        log::debug!(
            "generation {}: population {} (+{} -{}) in {:.2}ms",
            self.generation,
            stats.population,
            stats.births,
            stats.deaths,
            self.last_step_ms
        );
        stats
    }

    /// Periodic trigger. Steps once per configured interval while running.
    /// Returns whether a step ran.
    pub fn tick(&mut self, delta_time: f32) -> bool {
        if !self.running {
            return false;
        }

        self.update_timer += delta_time;
        if self.update_timer < self.config.step_interval().as_secs_f32() {
            return false;
        }
        self.step_once();
        self.update_timer = 0.0;
        true
    }

    /// Replace every live cell with those in a snapshot document.
    /// On error the current cells are left untouched.
    pub fn load_snapshot(&mut self, document: &str) -> Result<usize, SnapshotError> {
        let cells = snapshot::parse(document)?;
        Ok(self.install(cells))
    }

    pub fn load_snapshot_file(&mut self, path: impl AsRef<Path>) -> Result<usize, SnapshotError> {
        let path = path.as_ref();
        let cells = snapshot::read(path)?;
        log::info!("loaded snapshot {}", path.display());
        Ok(self.install(cells))
    }

    /// Load the configured snapshot file, if one is set
    pub fn reload_snapshot(&mut self) -> Result<Option<usize>, SnapshotError> {
        match self.config.snapshot_path.clone() {
            Some(path) => self.load_snapshot_file(path).map(Some),
            None => Ok(None),
        }
    }

    fn install(&mut self, cells: Vec<Cell>) -> usize {
        self.cells.replace_all(cells);
        self.generation = 0;
        self.last_stats = StepStats {
            population: self.cells.len(),
            ..StepStats::default()
        };
        log::info!("snapshot installed: {} live cells", self.cells.len());
        self.cells.len()
    }

    /// Kill every cell and reset the generation counter
    pub fn clear(&mut self) {
        self.cells.clear();
        self.generation = 0;
        self.set_running(false);
    }

    /// Random soup over the cells visible in a `width` x `height` screen area
    pub fn randomize(&mut self, width: f64, height: f64) {
        let (min, max) = self.viewport.visible_cells(width, height);
        self.cells.randomize_region(min, max, self.config.random_density);
        self.generation = 0;
        self.set_running(false);
    }

    /// Stamp a preset centered on `center`. Returns how many cells were born.
    pub fn stamp(&mut self, pattern: &Pattern, center: Cell) -> usize {
        pattern.stamp(&mut self.cells, center)
    }

    /// Snapshot of the cells plus the viewport to draw them with
    pub fn render_view(&self) -> RenderView {
        let viewport = match self.drag {
            Some(drag) => self.viewport.with_offset(self.viewport.offset + drag.delta()),
            None => self.viewport,
        };
        RenderView {
            cells: self.cells.snapshot(),
            viewport,
        }
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::presets;
    use macroquad::math::dvec2;

    fn cells(sim: &Simulation) -> Vec<(i64, i64)> {
        sim.cells().snapshot().iter().map(|c| (c.x, c.y)).collect()
    }

    #[test]
    fn test_load_then_toggle_empties() {
        let mut sim = Simulation::default();
        assert_eq!(sim.load_snapshot(r#"{"data":[{"x":1,"y":1}]}"#).unwrap(), 1);
        sim.toggle_cell(Cell::new(1, 1));
        assert!(sim.cells().is_empty());
    }

    #[test]
    fn test_failed_load_keeps_cells() {
        let mut sim = Simulation::default();
        sim.toggle_cell(Cell::new(4, 4));
        assert!(sim.load_snapshot(r#"{"data":[{"x":1,"y":1},{"x":2}]}"#).is_err());
        assert!(sim.load_snapshot("not json").is_err());
        assert!(sim.load_snapshot_file("/nonexistent/snapshot.json").is_err());
        assert_eq!(cells(&sim), vec![(4, 4)]);
    }

    #[test]
    fn test_load_replaces_and_dedupes() {
        let mut sim = Simulation::default();
        sim.toggle_cell(Cell::new(9, 9));
        let loaded = sim
            .load_snapshot(r#"{"data":[{"x":0,"y":0},{"x":0,"y":0},{"x":2,"y":3}]}"#)
            .unwrap();
        assert_eq!(loaded, 2);
        assert_eq!(cells(&sim), vec![(0, 0), (2, 3)]);
    }

    #[test]
    fn test_reload_without_path_is_noop() {
        let mut sim = Simulation::default();
        assert_eq!(sim.reload_snapshot().unwrap(), None);
    }

    #[test]
    fn test_step_once_runs_blinker() {
        let mut sim = Simulation::default();
        sim.load_snapshot(r#"{"data":[{"x":0,"y":0},{"x":1,"y":0},{"x":2,"y":0}]}"#)
            .unwrap();
        let stats = sim.step_once();
        assert_eq!(stats, StepStats { births: 2, deaths: 2, population: 3 });
        assert_eq!(cells(&sim), vec![(1, -1), (1, 0), (1, 1)]);
        assert_eq!(sim.generation(), 1);
    }

    #[test]
    fn test_tick_only_steps_when_running() {
        let mut sim = Simulation::default();
        sim.toggle_cell(Cell::new(0, 0));
        assert!(!sim.tick(1.0));
        assert_eq!(sim.population(), 1);

        sim.set_running(true);
        assert!(!sim.tick(0.001));
        assert!(sim.tick(0.05));
        assert_eq!(sim.population(), 0);
        assert_eq!(sim.generation(), 1);
    }

    #[test]
    fn test_drag_preview_then_commit_once() {
        let mut sim = Simulation::default();
        sim.begin_drag(dvec2(100.0, 100.0));
        assert_eq!(sim.update_drag(dvec2(130.0, 90.0)), Some(dvec2(30.0, -10.0)));
        assert_eq!(sim.viewport().offset, DVec2::ZERO);
        assert_eq!(sim.render_view().viewport.offset, dvec2(30.0, -10.0));

        sim.end_drag(dvec2(140.0, 80.0));
        assert_eq!(sim.viewport().offset, dvec2(40.0, -20.0));
        assert!(sim.drag().is_none());

        sim.end_drag(dvec2(500.0, 500.0));
        assert_eq!(sim.viewport().offset, dvec2(40.0, -20.0));
    }

    #[test]
    fn test_edit_mode_toggles_and_ignores_drag() {
        let mut sim = Simulation::default();
        assert!(sim.set_tool(ToolMode::Edit));
        assert!(!sim.set_tool(ToolMode::Edit));

        sim.pointer_down(dvec2(75.0, 10.0));
        assert_eq!(cells(&sim), vec![(1, 0)]);
        assert!(sim.drag().is_none());
        assert_eq!(sim.pointer_move(dvec2(300.0, 300.0)), None);
        sim.pointer_up(dvec2(300.0, 300.0));
        assert_eq!(sim.viewport().offset, DVec2::ZERO);

        sim.pointer_down(dvec2(60.0, 49.0));
        assert!(sim.cells().is_empty());
    }

    #[test]
    fn test_edit_mode_respects_view() {
        let mut sim = Simulation::default();
        sim.pointer_down(dvec2(0.0, 0.0));
        sim.pointer_move(dvec2(100.0, 50.0));
        sim.pointer_up(dvec2(100.0, 50.0));
        sim.set_tool(ToolMode::Edit);

        sim.pointer_down(dvec2(90.0, 40.0));
        assert_eq!(cells(&sim), vec![(-1, -1)]);
    }

    #[test]
    fn test_switching_tool_drops_drag() {
        let mut sim = Simulation::default();
        sim.pointer_down(dvec2(0.0, 0.0));
        sim.pointer_move(dvec2(20.0, 20.0));
        sim.set_tool(ToolMode::Edit);
        sim.set_tool(ToolMode::Pan);
        sim.pointer_up(dvec2(50.0, 50.0));
        assert_eq!(sim.viewport().offset, DVec2::ZERO);
    }

    #[test]
    fn test_zoom_stays_in_bounds() {
        let mut sim = Simulation::default();
        for i in 0..40 {
            let dir = if i % 3 == 0 { ZoomDirection::Out } else { ZoomDirection::In };
            sim.zoom_at(dvec2(i as f64 * 7.0, 33.0), dir);
            let (min, max) = sim.viewport().zoom_bounds();
            assert!(sim.viewport().zoom >= min && sim.viewport().zoom <= max);
        }
    }

    #[test]
    fn test_clear_pauses_and_resets() {
        let mut sim = Simulation::default();
        sim.stamp(&presets::glider(), Cell::new(0, 0));
        sim.set_running(true);
        sim.step_once();
        sim.clear();
        assert!(sim.cells().is_empty());
        assert!(!sim.is_running());
        assert_eq!(sim.generation(), 0);
    }

    #[test]
    fn test_randomize_fills_visible_area_only() {
        let mut sim = Simulation::new(Config {
            random_density: 1.0,
            ..Config::default()
        });
        sim.randomize(100.0, 100.0);
        assert_eq!(sim.population(), 9);
        assert!(sim.cells().contains(Cell::new(2, 2)));
        assert!(!sim.cells().contains(Cell::new(3, 0)));
    }

    #[test]
    fn test_adjust_step_interval_clamps() {
        let mut sim = Simulation::default();
        sim.adjust_step_interval(-100);
        assert_eq!(sim.config().step_interval_ms, 1);
        sim.adjust_step_interval(5000);
        assert_eq!(sim.config().step_interval_ms, 1000);
    }

    #[test]
    fn test_adjust_step_interval_saturates_at_extremes() {
        let mut sim = Simulation::new(Config {
            step_interval_ms: u64::MAX,
            ..Config::default()
        });
        sim.adjust_step_interval(10);
        assert_eq!(sim.config().step_interval_ms, 1000);
        sim.adjust_step_interval(i64::MIN);
        assert_eq!(sim.config().step_interval_ms, 1);
        sim.adjust_step_interval(i64::MAX);
        assert_eq!(sim.config().step_interval_ms, 1000);
    }

    #[test]
    fn test_fit_view_frames_distant_cells() {
        let mut sim = Simulation::default();
        assert!(!sim.fit_view(800.0, 600.0));

        let far = Cell::new(1_000_000_000, -1_000_000_000);
        sim.stamp(&presets::block(), far);
        sim.pointer_down(dvec2(10.0, 10.0));
        assert!(sim.fit_view(800.0, 600.0));
        assert!(sim.drag().is_none());

        let (min, max) = sim.viewport().visible_cells(800.0, 600.0);
        for cell in sim.cells().iter() {
            assert!(cell.x >= min.x && cell.x <= max.x, "{cell:?} off screen");
            assert!(cell.y >= min.y && cell.y <= max.y, "{cell:?} off screen");
        }
        let (lo, hi) = sim.cells().bounds().unwrap();
        for cell in [lo, hi] {
            let pixel = sim.viewport().world_to_screen(cell) + sim.viewport().cell_size_px() / 2.0;
            assert_eq!(sim.cell_at(pixel), cell);
        }
    }

    #[test]
    fn test_serial_and_parallel_strategies_agree() {
        let mut serial = Simulation::default();
        let mut parallel = Simulation::default();
        serial.set_strategy(Strategy::Serial);
        parallel.set_strategy(Strategy::Parallel);
        for sim in [&mut serial, &mut parallel] {
            sim.stamp(&presets::acorn(), Cell::new(0, 0));
        }
        for _ in 0..25 {
            assert_eq!(serial.step_once(), parallel.step_once());
        }
        assert_eq!(serial.cells(), parallel.cells());
    }
}
