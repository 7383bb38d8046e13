mod pan;
mod transform;
mod zoom;

pub use pan::{DEFAULT_PAN_MARGIN, pan_towards_edges};
pub use transform::{Viewport, ViewportTransform};
pub use zoom::{DEFAULT_ZOOM_TICKS, MIN_ZOOM_RATIO, ZoomLadder};
