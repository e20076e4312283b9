mod blob;
mod counter;
mod error;
mod filter;
mod geometry;
mod predict;
mod tracker;

pub use blob::Blob;
pub use counter::{CrossingCounter, CrossingLine, Direction};
pub use error::{Result, TrackError};
pub use filter::DetectionFilter;
pub use geometry::{Point, Rect, polygon_area};
pub use predict::extrapolate;
pub use tracker::{BlobTracker, TrackerConfig};
