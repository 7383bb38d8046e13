mod model;

pub use model::{GraphModel, Link, Node, RawEdge};
