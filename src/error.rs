pub type Result<T> = std::result::Result<T, GraphError>;

#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    #[error("graph response is missing its `{section}` section")]
    MissingSection { section: &'static str },

    #[error("edge {edge} references unknown node id `{id}`")]
    UnresolvedEndpoint { edge: usize, id: String },

    #[error("zoom ratio must be positive, got {ratio}")]
    InvalidZoomRatio { ratio: f32 },

    #[error("graph load was superseded by a newer request")]
    StaleFetch,
}
