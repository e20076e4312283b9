use tracing::debug;

use crate::blob::Blob;

/// Which way a centroid must move across the line to register.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    /// Toward increasing y (downward in image coordinates).
    #[default]
    Down,
    /// Toward decreasing y.
    Up,
}

/// A horizontal reference line at a fixed y-coordinate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CrossingLine {
    pub y: f64,
    pub direction: Direction,
}

impl CrossingLine {
    pub fn new(y: f64, direction: Direction) -> Self {
        Self { y, direction }
    }

    fn crossed_by(&self, blob: &Blob) -> bool {
        if !blob.is_tracked() {
            return false;
        }
        let [.., prev, curr] = blob.center_positions() else {
            return false;
        };
        match self.direction {
            Direction::Down => prev.y <= self.y && curr.y > self.y,
            Direction::Up => prev.y >= self.y && curr.y < self.y,
        }
    }

    /// Number of tracked blobs whose last two centers straddle the line in
    /// the configured direction. Only the two most recent positions are ever
    /// consulted, so earlier crossings are not re-counted; equally, there is
    /// no cooldown, and a centroid oscillating around the line registers on
    /// every qualifying transition.
    pub fn crossings(&self, blobs: &[Blob]) -> usize {
        blobs.iter().filter(|blob| self.crossed_by(blob)).count()
    }
}

/// Running crossing count, owned by the per-frame loop rather than any
/// global state. The total only ever grows.
pub struct CrossingCounter {
    line: CrossingLine,
    total: u64,
}

impl CrossingCounter {
    pub fn new(line: CrossingLine) -> Self {
        Self { line, total: 0 }
    }

    pub fn line(&self) -> CrossingLine {
        self.line
    }

    /// Scans the frame's blob collection after matching. Folds this frame's
    /// crossings into the total and reports whether any occurred.
    pub fn observe(&mut self, blobs: &[Blob]) -> bool {
        let crossings = self.line.crossings(blobs);
        if crossings > 0 {
            self.total += crossings as u64;
            debug!(crossings, total = self.total, "crossing detected");
        }
        crossings > 0
    }

    pub fn total(&self) -> u64 {
        self.total
    }
}
