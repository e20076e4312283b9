use thiserror::Error;

pub type Result<T> = std::result::Result<T, TrackError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TrackError {
    /// The upstream segmentation stage handed us a contour that cannot form
    /// a blob (empty, or with a zero-extent bounding rectangle).
    #[error("invalid geometry: {0}")]
    InvalidGeometry(&'static str),
}
