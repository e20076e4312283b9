use nalgebra::distance;
use tracing::debug;

use crate::blob::Blob;
use crate::geometry::Point;

#[derive(Clone, Copy, Debug)]
pub struct TrackerConfig {
    /// A detection merges into the nearest tracked blob when the distance to
    /// its predicted position is below this fraction of the detection's own
    /// diagonal size.
    pub match_distance_ratio: f64,
    /// Frames without a match before a blob is retired for good.
    pub max_consecutive_misses: u32,
    /// How many recent centroids the position predictor may look at.
    pub prediction_window: usize,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            match_distance_ratio: 0.5,
            max_consecutive_misses: 5,
            prediction_window: 5,
        }
    }
}

/// Frame-to-frame matcher. Owns the blob collection; retired blobs are kept
/// (at stable indices) so downstream consumers can still read their history,
/// unless the caller opts into [`BlobTracker::prune_retired`].
pub struct BlobTracker {
    blobs: Vec<Blob>,
    config: TrackerConfig,
}

impl BlobTracker {
    pub fn new(config: TrackerConfig) -> Self {
        Self {
            blobs: Vec::new(),
            config,
        }
    }

    pub fn config(&self) -> TrackerConfig {
        self.config
    }

    /// Every blob ever created, tracked or retired, in creation order.
    /// Indices are stable for the lifetime of the frame.
    pub fn blobs(&self) -> &[Blob] {
        &self.blobs
    }

    pub fn tracked(&self) -> impl Iterator<Item = &Blob> {
        self.blobs.iter().filter(|blob| blob.is_tracked())
    }

    /// Projects the tracked blobs into plain polygons for rendering.
    pub fn tracked_contours(&self) -> Vec<&[Point]> {
        self.tracked().map(|blob| blob.contour()).collect()
    }

    /// Runs one frame of matching over the detections, in input order.
    ///
    /// Each detection either merges into the tracked blob whose predicted
    /// position is nearest (when close enough relative to the detection's
    /// diagonal) or starts a new blob; none are dropped. A matched blob stays
    /// a candidate for later detections of the same frame, so two nearby
    /// detections can land on the same blob, last write winning on geometry.
    /// Blobs left unmatched advance their miss counter and retire after
    /// `max_consecutive_misses` frames.
    pub fn update(&mut self, detections: Vec<Blob>) {
        for blob in self.blobs.iter_mut().filter(|blob| blob.is_tracked()) {
            blob.begin_frame(self.config.prediction_window);
        }

        for mut detection in detections {
            let nearest = self.nearest_tracked(detection.center());
            match nearest {
                Some((index, dist))
                    if dist < detection.diagonal_size() * self.config.match_distance_ratio =>
                {
                    self.blobs[index].absorb(detection);
                }
                _ => {
                    debug!(
                        index = self.blobs.len(),
                        x = detection.center().x,
                        y = detection.center().y,
                        "new blob"
                    );
                    detection.mark_matched();
                    self.blobs.push(detection);
                }
            }
        }

        for (index, blob) in self.blobs.iter_mut().enumerate() {
            if !blob.matched_this_frame()
                && blob.register_miss(self.config.max_consecutive_misses)
            {
                debug!(
                    index,
                    misses = blob.consecutive_misses(),
                    "blob retired"
                );
            }
        }
    }

    /// Removes blobs that have been retired for more than `grace_frames`.
    /// Never called implicitly; invalidates blob indices.
    pub fn prune_retired(&mut self, grace_frames: u32) {
        self.blobs
            .retain(|blob| blob.is_tracked() || blob.frames_since_retired() <= grace_frames);
    }

    /// Index of the tracked blob whose predicted position is nearest to
    /// `center`, with its distance. Ties keep the first-encountered index.
    fn nearest_tracked(&self, center: Point) -> Option<(usize, f64)> {
        let mut nearest: Option<(usize, f64)> = None;
        for (index, blob) in self.blobs.iter().enumerate() {
            if !blob.is_tracked() {
                continue;
            }
            let dist = distance(&center, &blob.predicted_next_position());
            match nearest {
                Some((_, best)) if dist >= best => {}
                _ => nearest = Some((index, dist)),
            }
        }
        nearest
    }
}
