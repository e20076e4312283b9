use blob_track::{
    Blob, BlobTracker, CrossingCounter, CrossingLine, Direction, Point, TrackerConfig,
};

fn rectangle(cx: f64, cy: f64, width: f64, height: f64) -> Vec<Point> {
    let (x, y) = (cx - width / 2.0, cy - height / 2.0);
    vec![
        Point::new(x, y),
        Point::new(x + width, y),
        Point::new(x + width, y + height),
        Point::new(x, y + height),
    ]
}

fn main() -> blob_track::Result<()> {
    tracing_subscriber::fmt().with_target(false).init();

    let mut tracker = BlobTracker::new(TrackerConfig::default());
    let mut counter = CrossingCounter::new(CrossingLine::new(200.0, Direction::Down));

    // A single region drifting down the frame and over the counting line.
    for frame in 0..8 {
        let cy = 150.0 + 12.0 * frame as f64;
        let detections = vec![Blob::from_contour(rectangle(320.0, cy, 60.0, 44.0))?];

        tracker.update(detections);
        let crossed = counter.observe(tracker.blobs());

        println!(
            "frame {frame}: {} tracked blob(s), crossed: {crossed}, total count: {}",
            tracker.tracked().count(),
            counter.total()
        );
    }

    Ok(())
}
