use macroquad::math::DVec2;

/// What the primary pointer button does on the grid
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ToolMode {
    /// Drag to move the view
    #[default]
    Pan,
    /// Click to toggle cells
    Edit,
}

impl ToolMode {
    pub fn name(&self) -> &'static str {
        match self {
            ToolMode::Pan => "Pan",
            ToolMode::Edit => "Edit",
        }
    }
}

/// An in-progress pan, alive only while the pointer is held
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragState {
    pub anchor: DVec2,
    pub current: DVec2,
}

impl DragState {
    pub fn new(at: DVec2) -> Self {
        Self {
            anchor: at,
            current: at,
        }
    }

    /// Screen distance moved since the drag started
    pub fn delta(&self) -> DVec2 {
        self.current - self.anchor
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use macroquad::math::dvec2;

    #[test]
    fn test_new_drag_has_no_delta() {
        let drag = DragState::new(dvec2(4.0, 9.0));
        assert_eq!(drag.delta(), DVec2::ZERO);
    }

    #[test]
    fn test_delta_tracks_current() {
        let mut drag = DragState::new(dvec2(4.0, 9.0));
        drag.current = dvec2(10.0, 2.0);
        assert_eq!(drag.delta(), dvec2(6.0, -7.0));
    }

    #[test]
    fn test_default_tool_is_pan() {
        assert_eq!(ToolMode::default(), ToolMode::Pan);
    }
}
