//! Per-frame geometry. Nothing here is cached.

use crate::geometry::{Point, Size};
use crate::range::ScaleRange;
use crate::style::{ScaleMetrics, TickKind};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingLayout {
    pub center: Point,
    pub radius: f64,
    pub outer_radius: f64,
    pub inner_radius: f64,
}

impl RingLayout {
    /// Centers the ring horizontally and drops it so its outer edge touches the top of
    /// the surface; only the upper arc is ever visible.
    pub fn new(surface: Size, metrics: &ScaleMetrics) -> Self {
        let half_width = metrics.scale_width / 2.0;
        let outer_radius = metrics.radius + half_width;
        let width = if surface.width.is_finite() {
            surface.width.max(0.0)
        } else {
            0.0
        };
        Self {
            center: Point::new(width / 2.0, outer_radius),
            radius: metrics.radius,
            outer_radius,
            inner_radius: (metrics.radius - half_width).max(0.0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Label {
    pub value: u32,
    pub position: Point,
    /// Degrees, clockwise; keeps the baseline tangent to the ring.
    pub rotation: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tick {
    pub value: i32,
    pub kind: TickKind,
    pub angle: f64,
    pub start: Point,
    pub end: Point,
    pub label: Option<Label>,
}

impl Tick {
    fn new(
        value: i32,
        rotation: f64,
        range: &ScaleRange,
        ring: &RingLayout,
        metrics: &ScaleMetrics,
    ) -> Self {
        let kind = TickKind::classify(value);
        let length = metrics.line_length(kind);
        let angle =
            (f64::from(value) - f64::from(range.initial()) + rotation - 90.0).to_radians();

        let label = kind.is_labeled().then(|| {
            let radius =
                (ring.outer_radius - length - metrics.label_gap - metrics.text_size).max(0.0);
            Label {
                value: value.unsigned_abs(),
                position: ring.center.project(radius, angle),
                rotation: angle.to_degrees() + 90.0,
            }
        });

        Self {
            value,
            kind,
            angle,
            start: ring.center.project((ring.outer_radius - length).max(0.0), angle),
            end: ring.center.project(ring.outer_radius, angle),
            label,
        }
    }
}

pub fn ticks<'a>(
    range: &'a ScaleRange,
    rotation: f64,
    ring: &'a RingLayout,
    metrics: &'a ScaleMetrics,
) -> impl Iterator<Item = Tick> + 'a {
    range
        .values()
        .map(move |value| Tick::new(value, rotation, range, ring, metrics))
}

/// The fixed pointer: apex above the ring's inner edge, base on it.
pub fn indicator(ring: &RingLayout, metrics: &ScaleMetrics) -> [Point; 3] {
    let Point { x, y } = ring.center;
    let base_y = y - ring.inner_radius;
    let half = metrics.indicator_width / 2.0;
    [
        Point::new(x, base_y - metrics.indicator_length),
        Point::new(x - half, base_y),
        Point::new(x + half, base_y),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::ScaleStyle;
    use crate::units::Density;

    const EPS: f64 = 1e-9;

    fn default_metrics() -> ScaleMetrics {
        ScaleMetrics::resolve(&ScaleStyle::default(), Density::default())
    }

    fn assert_close(a: Point, b: Point) {
        assert!(
            (a.x - b.x).abs() < EPS && (a.y - b.y).abs() < EPS,
            "{a:?} != {b:?}"
        );
    }

    #[test]
    fn test_ring_layout() {
        let ring = RingLayout::new(Size::new(400.0, 300.0), &default_metrics());
        assert_eq!(ring.center, Point::new(200.0, 625.0));
        assert_eq!(ring.outer_radius, 625.0);
        assert_eq!(ring.inner_radius, 475.0);
    }

    #[test]
    fn test_initial_value_points_straight_up() {
        let metrics = default_metrics();
        let range = ScaleRange::default();
        let ring = RingLayout::new(Size::new(400.0, 300.0), &metrics);

        let tick = ticks(&range, 0.0, &ring, &metrics)
            .find(|t| t.value == range.initial())
            .unwrap();

        assert_eq!(tick.kind, TickKind::Normal);
        assert_close(tick.end, Point::new(200.0, 0.0));
        assert_close(tick.start, Point::new(200.0, 15.0));
        assert!(tick.label.is_none());
    }

    #[test]
    fn test_rotation_moves_value_under_indicator() {
        let metrics = default_metrics();
        let range = ScaleRange::default();
        let ring = RingLayout::new(Size::new(400.0, 300.0), &metrics);

        // Rotating by -32 degrees brings 100 to the top.
        let tick = ticks(&range, -32.0, &ring, &metrics)
            .find(|t| t.value == 100)
            .unwrap();

        assert_eq!(tick.kind, TickKind::TenStep);
        assert_close(tick.end, Point::new(200.0, 0.0));
        let label = tick.label.unwrap();
        assert_eq!(label.value, 100);
        assert!((label.rotation).abs() < EPS);
        // 625 - 35 - 5 - 18
        assert_close(label.position, Point::new(200.0, 625.0 - 567.0));
    }

    #[test]
    fn test_tick_count_and_kinds() {
        let metrics = default_metrics();
        let range = ScaleRange::new(0, 100, 50).unwrap();
        let ring = RingLayout::new(Size::new(400.0, 300.0), &metrics);

        let all: Vec<Tick> = ticks(&range, 0.0, &ring, &metrics).collect();
        assert_eq!(all.len(), 101);
        assert_eq!(all.iter().filter(|t| t.label.is_some()).count(), 11);
        for tick in &all {
            assert_eq!(tick.kind, TickKind::classify(tick.value));
        }
    }

    #[test]
    fn test_labels_show_magnitude() {
        let metrics = default_metrics();
        let range = ScaleRange::new(-30, 30, 0).unwrap();
        let ring = RingLayout::new(Size::new(400.0, 300.0), &metrics);

        let labels: Vec<u32> = ticks(&range, 0.0, &ring, &metrics)
            .filter_map(|t| t.label.map(|l| l.value))
            .collect();
        assert_eq!(labels, vec![30, 20, 10, 0, 10, 20, 30]);
    }

    #[test]
    fn test_indicator_is_fixed() {
        let metrics = default_metrics();
        let ring = RingLayout::new(Size::new(400.0, 300.0), &metrics);
        let [apex, left, right] = indicator(&ring, &metrics);

        assert_eq!(apex, Point::new(200.0, 625.0 - 475.0 - 60.0));
        assert_eq!(left, Point::new(196.0, 150.0));
        assert_eq!(right, Point::new(204.0, 150.0));
    }

    #[test]
    fn test_degenerate_surface_and_style() {
        let style = ScaleStyle {
            radius: crate::units::Dp::new(0.0),
            scale_width: crate::units::Dp::new(0.0),
            ..ScaleStyle::default()
        };
        let metrics = ScaleMetrics::resolve(&style, Density::default());
        let range = ScaleRange::default();
        let ring = RingLayout::new(Size::default(), &metrics);

        assert_eq!(ring.center, Point::default());
        assert_eq!(ring.inner_radius, 0.0);
        for tick in ticks(&range, 0.0, &ring, &metrics) {
            assert!(tick.start.is_finite() && tick.end.is_finite());
            if let Some(label) = tick.label {
                assert!(label.position.is_finite());
            }
        }
        assert!(indicator(&ring, &metrics).iter().all(Point::is_finite));
    }
}
