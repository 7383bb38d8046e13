pub const DEFAULT_ZOOM_TICKS: usize = 5;
pub const MIN_ZOOM_RATIO: f32 = 0.2;

/// Ordered ladder of selectable zoom ratios, index 0 being the most zoomed
/// in and the top index fully zoomed out. The current index survives render
/// ticks but is reset whenever a new graph snapshot is committed.
#[derive(Clone, Debug)]
pub struct ZoomLadder {
    ratios: Vec<f32>,
    index: usize,
}

impl ZoomLadder {
    pub fn linear(min_ratio: f32, max_ratio: f32, ticks: usize) -> Self {
        let ticks = ticks.max(2);
        let min_ratio = min_ratio.max(f32::EPSILON);
        let max_ratio = max_ratio.max(min_ratio);

        let step = (max_ratio - min_ratio) / (ticks - 1) as f32;
        let ratios = (0..ticks)
            .map(|tick| min_ratio + step * tick as f32)
            .collect::<Vec<_>>();

        Self {
            index: ticks - 1,
            ratios,
        }
    }

    pub fn current(&self) -> f32 {
        self.ratios[self.index]
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn ticks(&self) -> usize {
        self.ratios.len()
    }

    pub fn is_zoomed_out(&self) -> bool {
        self.index == self.ratios.len() - 1
    }

    /// One step down the ladder; saturates silently at the bottom.
    pub fn zoom_in(&mut self) -> bool {
        if self.index == 0 {
            return false;
        }
        self.index -= 1;
        true
    }

    /// One step up the ladder; saturates silently at the top.
    pub fn zoom_out(&mut self) -> bool {
        if self.index + 1 == self.ratios.len() {
            return false;
        }
        self.index += 1;
        true
    }

    pub fn reset(&mut self) {
        self.index = self.ratios.len() - 1;
    }
}

impl Default for ZoomLadder {
    fn default() -> Self {
        Self::linear(MIN_ZOOM_RATIO, 1.0, DEFAULT_ZOOM_TICKS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_fully_zoomed_out() {
        let ladder = ZoomLadder::default();
        assert_eq!(ladder.index(), DEFAULT_ZOOM_TICKS - 1);
        assert_eq!(ladder.current(), 1.0);
        assert!(ladder.is_zoomed_out());
    }

    #[test]
    fn ratios_are_linearly_spaced() {
        let mut ladder = ZoomLadder::linear(0.2, 1.0, 5);
        let mut seen = vec![ladder.current()];
        while ladder.zoom_in() {
            seen.push(ladder.current());
        }

        assert_eq!(seen.len(), 5);
        for (ratio, expected) in seen.iter().zip([1.0, 0.8, 0.6, 0.4, 0.2]) {
            assert!((ratio - expected).abs() < 1e-6, "{ratio} != {expected}");
        }
    }

    #[test]
    fn zoom_in_saturates_at_the_bottom() {
        let mut ladder = ZoomLadder::linear(0.5, 1.0, 2);
        assert!(ladder.zoom_in());
        assert_eq!(ladder.index(), 0);
        assert!(!ladder.zoom_in());
        assert_eq!(ladder.index(), 0);
    }

    #[test]
    fn zoom_out_saturates_at_the_top() {
        let mut ladder = ZoomLadder::linear(0.5, 1.0, 3);
        assert!(!ladder.zoom_out());
        assert_eq!(ladder.index(), 2);
        assert_eq!(ladder.current(), 1.0);
    }

    #[test]
    fn reset_returns_to_the_top_after_navigation() {
        let mut ladder = ZoomLadder::default();
        ladder.zoom_in();
        ladder.zoom_in();
        ladder.reset();
        assert!(ladder.is_zoomed_out());
    }

    #[test]
    fn degenerate_tick_count_is_widened_to_two() {
        let mut ladder = ZoomLadder::linear(0.5, 1.0, 1);
        assert!(ladder.zoom_in());
        assert!(!ladder.zoom_in());
    }
}
