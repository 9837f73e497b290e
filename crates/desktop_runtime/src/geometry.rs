//! Viewport bounding for dragged windows.

use crate::model::{ViewportSize, WindowRect};

/// Bounds a candidate window position to the visible desktop.
///
/// The upper bound is applied first and the zero floor last, so a window larger than the
/// viewport is pinned to the top-left corner instead of going negative.
pub fn clamp_position(
    candidate_left: i32,
    candidate_top: i32,
    viewport_width: i32,
    viewport_height: i32,
    window_width: i32,
    window_height: i32,
    reserved_bottom: i32,
) -> (i32, i32) {
    let max_left = viewport_width.saturating_sub(window_width);
    let max_top = viewport_height
        .saturating_sub(window_height)
        .saturating_sub(reserved_bottom);
    (
        candidate_left.min(max_left).max(0),
        candidate_top.min(max_top).max(0),
    )
}

/// Applies [`clamp_position`] to a window rect, keeping its size.
pub fn clamp_rect_to_viewport(
    candidate: WindowRect,
    viewport: ViewportSize,
    reserved_bottom: i32,
) -> WindowRect {
    let (x, y) = clamp_position(
        candidate.x,
        candidate.y,
        viewport.width,
        viewport.height,
        candidate.w,
        candidate.h,
        reserved_bottom,
    );
    candidate.with_position(x, y)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn clamps_past_left_and_bottom_edges() {
        assert_eq!(clamp_position(-50, 900, 1024, 768, 300, 200, 40), (0, 528));
    }

    #[test]
    fn clamps_past_right_edge() {
        assert_eq!(clamp_position(900, 100, 1024, 768, 300, 200, 40), (724, 100));
    }

    #[test]
    fn keeps_in_bounds_candidate_untouched() {
        assert_eq!(clamp_position(200, 150, 1024, 768, 300, 200, 40), (200, 150));
    }

    #[test]
    fn oversized_window_is_pinned_to_origin() {
        assert_eq!(clamp_position(30, 30, 200, 150, 640, 480, 40), (0, 0));
    }

    #[test]
    fn rect_variant_preserves_size() {
        let rect = WindowRect {
            x: 2000,
            y: -10,
            w: 300,
            h: 200,
        };
        let clamped = clamp_rect_to_viewport(
            rect,
            ViewportSize {
                width: 1024,
                height: 768,
            },
            40,
        );

        assert_eq!(
            clamped,
            WindowRect {
                x: 724,
                y: 0,
                w: 300,
                h: 200,
            }
        );
    }
}
