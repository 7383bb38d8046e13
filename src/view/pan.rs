use super::transform::Viewport;

pub const DEFAULT_PAN_MARGIN: f32 = 24.0;

/// Edge-triggered pan: a pointer inside the proximity margin of a surface
/// edge shifts the viewport origin one margin-width towards that edge, each
/// axis handled independently. Returns whether the origin moved.
///
/// The rightward/downward clamp bound is the rendering-surface size, not the
/// virtual canvas size. That mirrors the shipped behavior and is kept as the
/// documented clamp policy.
pub fn pan_towards_edges(
    viewport: &mut Viewport,
    mx: f32,
    my: f32,
    surface_width: f32,
    surface_height: f32,
    margin: f32,
) -> bool {
    let before = (viewport.origin_x, viewport.origin_y);

    if mx < margin {
        viewport.origin_x = (viewport.origin_x - margin).max(0.0);
    } else if mx > surface_width - margin {
        viewport.origin_x = (viewport.origin_x + margin).min(surface_width);
    }

    if my < margin {
        viewport.origin_y = (viewport.origin_y - margin).max(0.0);
    } else if my > surface_height - margin {
        viewport.origin_y = (viewport.origin_y + margin).min(surface_height);
    }

    (viewport.origin_x, viewport.origin_y) != before
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport(origin_x: f32, origin_y: f32) -> Viewport {
        Viewport {
            origin_x,
            origin_y,
            zoom_ratio: 0.5,
        }
    }

    #[test]
    fn pointer_inside_both_margins_does_not_pan() {
        let mut vp = viewport(100.0, 100.0);
        assert!(!pan_towards_edges(&mut vp, 400.0, 300.0, 800.0, 600.0, 24.0));
        assert_eq!((vp.origin_x, vp.origin_y), (100.0, 100.0));
    }

    #[test]
    fn left_edge_shifts_origin_left_by_one_margin() {
        let mut vp = viewport(100.0, 100.0);
        assert!(pan_towards_edges(&mut vp, 10.0, 300.0, 800.0, 600.0, 24.0));
        assert_eq!(vp.origin_x, 76.0);
        assert_eq!(vp.origin_y, 100.0);
    }

    #[test]
    fn repeated_left_pans_never_drive_origin_below_zero() {
        let mut vp = viewport(30.0, 0.0);
        for _ in 0..10 {
            pan_towards_edges(&mut vp, 0.0, 300.0, 800.0, 600.0, 24.0);
        }
        assert_eq!(vp.origin_x, 0.0);
    }

    #[test]
    fn repeated_right_pans_clamp_at_surface_width() {
        let mut vp = viewport(780.0, 0.0);
        for _ in 0..10 {
            pan_towards_edges(&mut vp, 799.0, 300.0, 800.0, 600.0, 24.0);
        }
        assert_eq!(vp.origin_x, 800.0);
    }

    #[test]
    fn vertical_axis_pans_independently() {
        let mut vp = viewport(100.0, 100.0);
        assert!(pan_towards_edges(&mut vp, 5.0, 595.0, 800.0, 600.0, 24.0));
        assert_eq!(vp.origin_x, 76.0);
        assert_eq!(vp.origin_y, 124.0);
    }

    #[test]
    fn bottom_edge_clamps_at_surface_height() {
        let mut vp = viewport(0.0, 590.0);
        pan_towards_edges(&mut vp, 400.0, 599.0, 800.0, 600.0, 24.0);
        assert_eq!(vp.origin_y, 600.0);
        pan_towards_edges(&mut vp, 400.0, 599.0, 800.0, 600.0, 24.0);
        assert_eq!(vp.origin_y, 600.0);
    }
}
