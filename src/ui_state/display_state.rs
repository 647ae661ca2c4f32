use ratatui::{layout::Rect, widgets::ListState};

/// Layout bookkeeping written during render and read back by mouse input.
pub struct DisplayState {
    pub track_pos: ListState,
    pub progress_area: Rect,
    pub volume_area: Rect,
    pub scrubbing: bool,
}

impl DisplayState {
    pub fn new() -> Self {
        DisplayState {
            track_pos: ListState::default().with_selected(Some(0)),
            progress_area: Rect::default(),
            volume_area: Rect::default(),
            scrubbing: false,
        }
    }
}

/// Fraction of `area`'s width that `column` sits at, if the point is inside it.
pub fn ratio_within(area: Rect, column: u16, row: u16) -> Option<f64> {
    if area.width == 0 || row < area.y || row >= area.y + area.height {
        return None;
    }

    if column < area.x || column >= area.x + area.width {
        return None;
    }

    let span = area.width.saturating_sub(1).max(1) as f64;
    Some(((column - area.x) as f64 / span).clamp(0.0, 1.0))
}

/// Like `ratio_within`, but clamps columns outside the area instead of
/// rejecting them. Used while a drag is already underway.
pub fn ratio_along(area: Rect, column: u16) -> f64 {
    let span = area.width.saturating_sub(1).max(1) as f64;
    (column.saturating_sub(area.x) as f64 / span).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hit_test_maps_columns_to_ratio() {
        let area = Rect::new(10, 5, 11, 1);

        assert_eq!(ratio_within(area, 10, 5), Some(0.0));
        assert_eq!(ratio_within(area, 15, 5), Some(0.5));
        assert_eq!(ratio_within(area, 20, 5), Some(1.0));
        assert_eq!(ratio_within(area, 21, 5), None);
        assert_eq!(ratio_within(area, 15, 6), None);
    }

    #[test]
    fn drag_clamps_outside_columns() {
        let area = Rect::new(10, 5, 11, 1);

        assert_eq!(ratio_along(area, 2), 0.0);
        assert_eq!(ratio_along(area, 40), 1.0);
    }
}
