use itertools::Itertools;
use nalgebra::Point2;

pub type Point = Point2<f64>;

/// Axis-aligned bounding rectangle in pixel coordinates.
#[derive(Clone, Copy, Default, Debug, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        if width < 0.0 || height < 0.0 {
            return Rect {
                x,
                y,
                width: 0.0,
                height: 0.0,
            };
        }
        Rect {
            x,
            y,
            width,
            height,
        }
    }

    /// Tightest axis-aligned rectangle enclosing the given points.
    /// Returns a zero rectangle for an empty slice.
    pub fn bounding(points: &[Point]) -> Self {
        let Some(first) = points.first() else {
            return Rect::default();
        };
        let (mut min_x, mut min_y) = (first.x, first.y);
        let (mut max_x, mut max_y) = (first.x, first.y);
        for point in &points[1..] {
            min_x = min_x.min(point.x);
            min_y = min_y.min(point.y);
            max_x = max_x.max(point.x);
            max_y = max_y.max(point.y);
        }
        Rect::new(min_x, min_y, max_x - min_x, max_y - min_y)
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn diagonal(&self) -> f64 {
        self.width.hypot(self.height)
    }

    pub fn aspect_ratio(&self) -> f64 {
        self.width / self.height
    }
}

/// Area of a simple polygon via the shoelace formula.
pub fn polygon_area(points: &[Point]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }
    let cross_sum: f64 = points
        .iter()
        .circular_tuple_windows()
        .map(|(a, b)| a.x * b.y - b.x * a.y)
        .sum();
    cross_sum.abs() / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_negative_extent_collapses_to_zero_rect() {
        let rect = Rect::new(1.0, 1.0, -2.0, 5.0);

        assert_eq!(rect.width, 0.0);
        assert_eq!(rect.height, 0.0);
        assert_eq!(rect.area(), 0.0);
    }

    #[test]
    fn test_bounding_encloses_all_points() {
        let points = vec![
            Point::new(10.0, 40.0),
            Point::new(30.0, 5.0),
            Point::new(22.0, 18.0),
        ];
        let rect = Rect::bounding(&points);

        assert_eq!(rect.x, 10.0);
        assert_eq!(rect.y, 5.0);
        assert_eq!(rect.width, 20.0);
        assert_eq!(rect.height, 35.0);
    }

    #[test]
    fn test_bounding_of_empty_slice_is_zero_rect() {
        assert_eq!(Rect::bounding(&[]), Rect::default());
    }

    #[test]
    fn test_center_and_diagonal() {
        let rect = Rect::new(100.0, 200.0, 30.0, 40.0);

        assert_eq!(rect.center(), Point::new(115.0, 220.0));
        assert_abs_diff_eq!(rect.diagonal(), 50.0);
        assert_abs_diff_eq!(rect.aspect_ratio(), 0.75);
    }

    #[test]
    fn test_polygon_area_of_square() {
        let square = vec![
            Point::new(0.0, 0.0),
            Point::new(4.0, 0.0),
            Point::new(4.0, 4.0),
            Point::new(0.0, 4.0),
        ];

        assert_abs_diff_eq!(polygon_area(&square), 16.0);
    }

    #[test]
    fn test_polygon_area_of_triangle_is_orientation_independent() {
        let clockwise = vec![
            Point::new(0.0, 0.0),
            Point::new(0.0, 3.0),
            Point::new(4.0, 0.0),
        ];
        let counter_clockwise = vec![
            Point::new(0.0, 0.0),
            Point::new(4.0, 0.0),
            Point::new(0.0, 3.0),
        ];

        assert_abs_diff_eq!(polygon_area(&clockwise), 6.0);
        assert_abs_diff_eq!(polygon_area(&counter_clockwise), 6.0);
    }

    #[test]
    fn test_polygon_area_degenerate_inputs() {
        assert_eq!(polygon_area(&[]), 0.0);
        assert_eq!(
            polygon_area(&[Point::new(1.0, 1.0), Point::new(2.0, 2.0)]),
            0.0
        );
    }
}
