use crate::blob::Blob;
use crate::geometry::polygon_area;

/// Plausibility gate the segmentation stage applies to candidate regions
/// before handing them to the tracker. The tracker trusts its output and
/// never re-checks these bounds. Defaults carry the tuning for highway
/// vehicle footage.
#[derive(Clone, Copy, Debug)]
pub struct DetectionFilter {
    pub min_bounding_area: f64,
    pub min_aspect_ratio: f64,
    pub max_aspect_ratio: f64,
    pub min_width: f64,
    pub min_height: f64,
    pub min_diagonal: f64,
    /// Minimum polygon-area to bounding-rectangle-area ratio; weeds out
    /// sparse, straggly contours.
    pub min_fill_ratio: f64,
}

impl Default for DetectionFilter {
    fn default() -> Self {
        Self {
            min_bounding_area: 400.0,
            min_aspect_ratio: 0.2,
            max_aspect_ratio: 4.0,
            min_width: 30.0,
            min_height: 30.0,
            min_diagonal: 60.0,
            min_fill_ratio: 0.5,
        }
    }
}

impl DetectionFilter {
    pub fn accepts(&self, candidate: &Blob) -> bool {
        let rect = candidate.bounding_rect();
        rect.area() > self.min_bounding_area
            && candidate.aspect_ratio() > self.min_aspect_ratio
            && candidate.aspect_ratio() < self.max_aspect_ratio
            && rect.width > self.min_width
            && rect.height > self.min_height
            && candidate.diagonal_size() > self.min_diagonal
            && polygon_area(candidate.contour()) / rect.area() > self.min_fill_ratio
    }
}
