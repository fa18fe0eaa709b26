use std::f64::consts::PI;

/// Distances below this are treated as "on the center", where no angle exists.
pub const DEGENERATE_DISTANCE: f64 = 1e-9;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    pub fn distance(&self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    pub fn project(&self, radius: f64, angle: f64) -> Point {
        let (sin, cos) = angle.sin_cos();
        Point::new(self.x + radius * cos, self.y + radius * sin)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Angle of `pointer` around `center` in degrees.
///
/// Zero points straight up and the angle grows clockwise on screen, so dragging
/// clockwise around the ring increases it. Returns `None` when the pointer sits on
/// the center or either point is not finite.
pub fn polar_angle_deg(center: Point, pointer: Point) -> Option<f64> {
    if !center.is_finite() || !pointer.is_finite() {
        return None;
    }
    if center.distance(pointer) <= DEGENERATE_DISTANCE {
        return None;
    }
    let angle = -(center.x - pointer.x).atan2(center.y - pointer.y) * (180.0 / PI);
    angle.is_finite().then_some(angle)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_polar_angle_quadrants() {
        let center = Point::new(100.0, 100.0);
        let cases = vec![
            (Point::new(100.0, 50.0), 0.0),
            (Point::new(150.0, 100.0), 90.0),
            (Point::new(50.0, 100.0), -90.0),
            (Point::new(150.0, 50.0), 45.0),
            (Point::new(50.0, 50.0), -45.0),
        ];

        for (pointer, expected) in cases {
            let angle = polar_angle_deg(center, pointer).unwrap();
            assert!(
                (angle - expected).abs() < EPS,
                "{pointer:?}: got {angle}, expected {expected}"
            );
        }
    }

    #[test]
    fn test_polar_angle_degenerate() {
        let center = Point::new(10.0, 10.0);
        assert_eq!(polar_angle_deg(center, center), None);
        assert_eq!(polar_angle_deg(center, Point::new(f64::NAN, 3.0)), None);
        assert_eq!(polar_angle_deg(Point::new(f64::INFINITY, 0.0), center), None);
    }

    #[test]
    fn test_project() {
        let p = Point::new(10.0, 20.0).project(5.0, -PI / 2.0);
        assert!((p.x - 10.0).abs() < EPS);
        assert!((p.y - 15.0).abs() < EPS);
    }
}
