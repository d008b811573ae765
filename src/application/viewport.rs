use crate::application::Config;
use crate::domain::Cell;
use macroquad::math::{DVec2, dvec2};

/// Direction of one zoom request
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ZoomDirection {
    In,
    Out,
}

impl ZoomDirection {
    /// Map a scroll wheel delta to a direction (positive scrolls in)
    pub fn from_wheel(delta: f32) -> Option<Self> {
        if delta > 0.0 {
            Some(ZoomDirection::In)
        } else if delta < 0.0 {
            Some(ZoomDirection::Out)
        } else {
            None
        }
    }

    pub const fn sign(self) -> f64 {
        match self {
            ZoomDirection::In => 1.0,
            ZoomDirection::Out => -1.0,
        }
    }
}

/// Viewport maps the unbounded grid onto the screen.
///
/// `offset` is in screen pixels and `zoom` scales the whole world, so a cell
/// is `grid_size * zoom` pixels wide. The transform is
///
/// ```text
/// screen = (cell * grid_size + offset / zoom) * zoom
/// cell   = floor((screen - offset) / zoom / grid_size)
/// ```
///
/// All of it runs in `f64`: cells far from the origin sit billions of pixels
/// away, well past what `f32` resolves.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub offset: DVec2,
    pub zoom: f64,
    grid_size: f64,
    min_zoom: f64,
    max_zoom: f64,
    zoom_step: f64,
}

impl Viewport {
    pub fn new(cfg: &Config) -> Self {
        Self {
            offset: DVec2::ZERO,
            zoom: 1.0_f64.clamp(cfg.min_zoom, cfg.max_zoom),
            grid_size: cfg.grid_size,
            min_zoom: cfg.min_zoom,
            max_zoom: cfg.max_zoom,
            zoom_step: cfg.zoom_step,
        }
    }

    pub const fn zoom_bounds(&self) -> (f64, f64) {
        (self.min_zoom, self.max_zoom)
    }

    /// On-screen width of one cell in pixels
    pub fn cell_size_px(&self) -> f64 {
        self.grid_size * self.zoom
    }

    /// Copy of this viewport with a different offset (drag preview)
    pub fn with_offset(mut self, offset: DVec2) -> Self {
        self.offset = offset;
        self
    }

    /// Top-left pixel of a cell
    pub fn world_to_screen(&self, cell: Cell) -> DVec2 {
        let offset_world = self.offset / self.zoom;
        let world = dvec2(cell.x as f64, cell.y as f64) * self.grid_size;
        (world + offset_world) * self.zoom
    }

    /// Cell containing the given pixel
    pub fn screen_to_world_cell(&self, pixel: DVec2) -> Cell {
        let grid = ((pixel - self.offset) / self.zoom / self.grid_size).floor();
        Cell::new(grid.x as i64, grid.y as i64)
    }

    /// Unscaled world position under the given pixel, used for zoom anchoring
    pub fn screen_to_world_continuous(&self, pixel: DVec2) -> DVec2 {
        (pixel - self.offset) / self.zoom
    }

    /// Shift the view by a screen-space delta
    pub fn pan(&mut self, delta: DVec2) {
        self.offset += delta;
    }

    /// Zoom one step about `pixel`, keeping the world point under it fixed.
    /// Requests past the zoom bounds saturate.
    pub fn zoom_at(&mut self, pixel: DVec2, direction: ZoomDirection) {
        let before = self.screen_to_world_continuous(pixel);

        let new_zoom = (self.zoom * (1.0 + direction.sign() * self.zoom_step))
            .clamp(self.min_zoom, self.max_zoom);
        self.zoom = new_zoom;

        let after = self.screen_to_world_continuous(pixel);
        self.offset += (after - before) * new_zoom;
    }

    /// Zoom and pan so the inclusive cell range `min..=max` fills as much of a
    /// `width` x `height` area as the zoom bounds allow, centered.
    pub fn fit_to(&mut self, min: Cell, max: Cell, width: f64, height: f64) {
        let cells_wide = (max.x as f64 - min.x as f64) + 1.0;
        let cells_high = (max.y as f64 - min.y as f64) + 1.0;
        let span = dvec2(cells_wide, cells_high) * self.grid_size;

        self.zoom = (width / span.x)
            .min(height / span.y)
            .clamp(self.min_zoom, self.max_zoom);

        let center_world = dvec2(min.x as f64, min.y as f64) * self.grid_size + span / 2.0;
        self.offset = dvec2(width, height) / 2.0 - center_world * self.zoom;
    }

    /// Inclusive range of cells intersecting a `width` x `height` screen area
    pub fn visible_cells(&self, width: f64, height: f64) -> (Cell, Cell) {
        let min = self.screen_to_world_cell(DVec2::ZERO);
        let max = self.screen_to_world_cell(dvec2(width, height));
        (min, max)
    }

    /// Reset pan and zoom to default
    pub fn reset(&mut self) {
        self.offset = DVec2::ZERO;
        self.zoom = 1.0_f64.clamp(self.min_zoom, self.max_zoom);
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}
