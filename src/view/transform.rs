use crate::error::{GraphError, Result};

/// Graph-space origin of the visible window plus the selected zoom ratio.
/// Ratio 1.0 is fully zoomed out with the origin pinned at (0, 0).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub origin_x: f32,
    pub origin_y: f32,
    pub zoom_ratio: f32,
}

impl Viewport {
    pub fn reset() -> Self {
        Self {
            origin_x: 0.0,
            origin_y: 0.0,
            zoom_ratio: 1.0,
        }
    }
}

/// Two independent affine axis maps from graph space to screen space.
/// Cheap to build, so every origin or zoom change derives a fresh one
/// instead of patching the previous transform.
#[derive(Clone, Copy, Debug)]
pub struct ViewportTransform {
    inv: f32,
    origin_x: f32,
    origin_y: f32,
    pub visible_width: f32,
    pub visible_height: f32,
    clamp: bool,
}

impl ViewportTransform {
    pub fn compute(
        origin_x: f32,
        origin_y: f32,
        virtual_width: f32,
        virtual_height: f32,
        zoom_ratio: f32,
    ) -> Result<Self> {
        if zoom_ratio <= 0.0 || !zoom_ratio.is_finite() {
            return Err(GraphError::InvalidZoomRatio { ratio: zoom_ratio });
        }

        let inv = 1.0 / zoom_ratio;
        Ok(Self {
            inv,
            origin_x,
            origin_y,
            visible_width: virtual_width * inv,
            visible_height: virtual_height * inv,
            // Fully zoomed out there is nothing beyond the canvas to pan
            // towards, so outputs saturate at the viewport edges instead.
            clamp: zoom_ratio >= 1.0,
        })
    }

    pub fn for_viewport(
        viewport: Viewport,
        virtual_width: f32,
        virtual_height: f32,
    ) -> Result<Self> {
        Self::compute(
            viewport.origin_x,
            viewport.origin_y,
            virtual_width,
            virtual_height,
            viewport.zoom_ratio,
        )
    }

    pub fn map_x(&self, gx: f32) -> f32 {
        let screen = (gx - self.origin_x) * self.inv;
        if self.clamp {
            screen.clamp(
                -self.origin_x * self.inv,
                self.visible_width - self.origin_x * self.inv,
            )
        } else {
            screen
        }
    }

    pub fn map_y(&self, gy: f32) -> f32 {
        let screen = (gy - self.origin_y) * self.inv;
        if self.clamp {
            screen.clamp(
                -self.origin_y * self.inv,
                self.visible_height - self.origin_y * self.inv,
            )
        } else {
            screen
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GraphError;

    #[test]
    fn maps_canvas_extent_to_screen_range() {
        let transform = ViewportTransform::compute(120.0, 40.0, 960.0, 500.0, 0.5).unwrap();

        assert_eq!(transform.map_x(0.0), -120.0 / 0.5);
        assert_eq!(
            transform.map_x(960.0),
            transform.visible_width - 120.0 / 0.5
        );
        assert_eq!(transform.map_y(0.0), -40.0 / 0.5);
        assert_eq!(
            transform.map_y(500.0),
            transform.visible_height - 40.0 / 0.5
        );
    }

    #[test]
    fn visible_extent_scales_by_inverse_ratio() {
        let transform = ViewportTransform::compute(0.0, 0.0, 960.0, 500.0, 0.25).unwrap();
        assert_eq!(transform.visible_width, 3840.0);
        assert_eq!(transform.visible_height, 2000.0);
    }

    #[test]
    fn zoomed_out_outputs_saturate_at_viewport_edges() {
        let transform = ViewportTransform::compute(0.0, 0.0, 960.0, 500.0, 1.0).unwrap();

        assert_eq!(transform.map_x(-5000.0), 0.0);
        assert_eq!(transform.map_x(5000.0), 960.0);
        assert_eq!(transform.map_y(-1.0), 0.0);
        assert_eq!(transform.map_y(501.0), 500.0);
    }

    #[test]
    fn clamp_bounds_follow_the_origin() {
        let transform = ViewportTransform::compute(10.0, 0.0, 960.0, 500.0, 1.0).unwrap();
        assert_eq!(transform.map_x(-5000.0), -10.0);
        assert_eq!(transform.map_x(5000.0), 950.0);
    }

    #[test]
    fn zoomed_in_outputs_are_not_clamped() {
        let transform = ViewportTransform::compute(100.0, 0.0, 960.0, 500.0, 0.5).unwrap();

        assert!(transform.map_x(-5000.0) < -100.0 / 0.5);
        assert!(transform.map_x(5000.0) > transform.visible_width);
    }

    #[test]
    fn zero_ratio_fails_instead_of_producing_infinity() {
        let err =
            ViewportTransform::compute(0.0, 0.0, 960.0, 500.0, 0.0).expect_err("must reject 0");
        assert!(matches!(err, GraphError::InvalidZoomRatio { .. }));
    }
}
