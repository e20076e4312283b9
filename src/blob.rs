use crate::error::{Result, TrackError};
use crate::geometry::{Point, Rect};
use crate::predict;

/// A tracked region: current-frame geometry plus the centroid history that
/// accumulates while the blob keeps matching detections.
///
/// The history is append-only and retirement is terminal; both invariants
/// are upheld by keeping the fields private and mutating only through the
/// lifecycle methods the tracker calls.
#[derive(Clone, Debug)]
pub struct Blob {
    contour: Vec<Point>,
    bounding_rect: Rect,
    diagonal_size: f64,
    aspect_ratio: f64,
    center_positions: Vec<Point>,
    predicted_next_position: Point,
    still_being_tracked: bool,
    matched_this_frame: bool,
    consecutive_misses: u32,
    frames_since_retired: u32,
}

impl Blob {
    /// Builds a blob from a detection polygon.
    ///
    /// Fails with [`TrackError::InvalidGeometry`] on an empty contour or a
    /// zero-extent bounding rectangle; anything past that is the upstream
    /// segmentation filter's responsibility.
    pub fn from_contour(contour: Vec<Point>) -> Result<Self> {
        if contour.is_empty() {
            return Err(TrackError::InvalidGeometry("empty contour"));
        }
        let bounding_rect = Rect::bounding(&contour);
        if bounding_rect.width <= 0.0 || bounding_rect.height <= 0.0 {
            return Err(TrackError::InvalidGeometry(
                "degenerate bounding rectangle",
            ));
        }

        let center = bounding_rect.center();

        Ok(Blob {
            contour,
            diagonal_size: bounding_rect.diagonal(),
            aspect_ratio: bounding_rect.aspect_ratio(),
            bounding_rect,
            center_positions: vec![center],
            predicted_next_position: center,
            still_being_tracked: true,
            matched_this_frame: false,
            consecutive_misses: 0,
            frames_since_retired: 0,
        })
    }

    pub fn contour(&self) -> &[Point] {
        &self.contour
    }

    pub fn bounding_rect(&self) -> Rect {
        self.bounding_rect
    }

    pub fn diagonal_size(&self) -> f64 {
        self.diagonal_size
    }

    pub fn aspect_ratio(&self) -> f64 {
        self.aspect_ratio
    }

    /// Full centroid history, oldest first. Never shrinks.
    pub fn center_positions(&self) -> &[Point] {
        &self.center_positions
    }

    /// Current-frame centroid (the newest history entry).
    pub fn center(&self) -> Point {
        self.center_positions[self.center_positions.len() - 1]
    }

    /// Estimate of next frame's centroid. Stale between matching passes.
    pub fn predicted_next_position(&self) -> Point {
        self.predicted_next_position
    }

    pub fn is_tracked(&self) -> bool {
        self.still_being_tracked
    }

    pub fn consecutive_misses(&self) -> u32 {
        self.consecutive_misses
    }

    pub(crate) fn frames_since_retired(&self) -> u32 {
        self.frames_since_retired
    }

    pub(crate) fn matched_this_frame(&self) -> bool {
        self.matched_this_frame
    }

    pub(crate) fn begin_frame(&mut self, prediction_window: usize) {
        self.matched_this_frame = false;
        self.predicted_next_position =
            predict::extrapolate(&self.center_positions, prediction_window);
    }

    pub(crate) fn mark_matched(&mut self) {
        self.matched_this_frame = true;
    }

    /// Merges a matched detection: the detection's geometry replaces this
    /// blob's and its centroid extends the history.
    pub(crate) fn absorb(&mut self, detection: Blob) {
        self.center_positions.push(detection.center());
        self.contour = detection.contour;
        self.bounding_rect = detection.bounding_rect;
        self.diagonal_size = detection.diagonal_size;
        self.aspect_ratio = detection.aspect_ratio;
        self.still_being_tracked = true;
        self.matched_this_frame = true;
        self.consecutive_misses = 0;
    }

    /// Advances the miss counter for a frame without a matching detection.
    /// Returns true on the transition into retirement, which is terminal.
    pub(crate) fn register_miss(&mut self, max_consecutive_misses: u32) -> bool {
        if !self.still_being_tracked {
            self.frames_since_retired += 1;
            return false;
        }
        self.consecutive_misses += 1;
        if self.consecutive_misses >= max_consecutive_misses {
            self.still_being_tracked = false;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn rect_contour(x: f64, y: f64, w: f64, h: f64) -> Vec<Point> {
        vec![
            Point::new(x, y),
            Point::new(x + w, y),
            Point::new(x + w, y + h),
            Point::new(x, y + h),
        ]
    }

    #[test]
    fn test_from_contour_seeds_history_with_rect_center() {
        let blob = Blob::from_contour(rect_contour(100.0, 200.0, 30.0, 40.0)).unwrap();

        assert_eq!(blob.center_positions(), &[Point::new(115.0, 220.0)]);
        assert_eq!(blob.center(), Point::new(115.0, 220.0));
        assert_abs_diff_eq!(blob.diagonal_size(), 50.0);
        assert_abs_diff_eq!(blob.aspect_ratio(), 0.75);
        assert!(blob.is_tracked());
        assert!(!blob.matched_this_frame());
        assert_eq!(blob.consecutive_misses(), 0);
    }

    #[test]
    fn test_from_contour_rejects_empty_contour() {
        assert_eq!(
            Blob::from_contour(Vec::new()).unwrap_err(),
            TrackError::InvalidGeometry("empty contour")
        );
    }

    #[test]
    fn test_from_contour_rejects_zero_extent_contour() {
        let flat = vec![
            Point::new(0.0, 5.0),
            Point::new(10.0, 5.0),
            Point::new(20.0, 5.0),
        ];

        assert_eq!(
            Blob::from_contour(flat).unwrap_err(),
            TrackError::InvalidGeometry("degenerate bounding rectangle")
        );
    }

    #[test]
    fn test_absorb_replaces_geometry_and_appends_center() {
        let mut blob = Blob::from_contour(rect_contour(0.0, 0.0, 30.0, 40.0)).unwrap();
        blob.consecutive_misses = 3;

        let detection = Blob::from_contour(rect_contour(10.0, 10.0, 40.0, 30.0)).unwrap();
        blob.absorb(detection);

        assert_eq!(
            blob.center_positions(),
            &[Point::new(15.0, 20.0), Point::new(30.0, 25.0)]
        );
        assert_eq!(blob.bounding_rect(), Rect::new(10.0, 10.0, 40.0, 30.0));
        assert_abs_diff_eq!(blob.aspect_ratio(), 40.0 / 30.0);
        assert!(blob.is_tracked());
        assert!(blob.matched_this_frame());
        assert_eq!(blob.consecutive_misses(), 0);
    }

    #[test]
    fn test_register_miss_retires_at_threshold() {
        let mut blob = Blob::from_contour(rect_contour(0.0, 0.0, 30.0, 40.0)).unwrap();

        for _ in 0..4 {
            assert!(!blob.register_miss(5));
            assert!(blob.is_tracked());
        }
        assert!(blob.register_miss(5));
        assert!(!blob.is_tracked());

        // Retirement is terminal; further misses only age the blob.
        assert!(!blob.register_miss(5));
        assert!(!blob.is_tracked());
        assert_eq!(blob.frames_since_retired(), 1);
    }
}
