use crate::color::Color;
use crate::geometry::{Point, Size};
use crate::layout::{self, RingLayout};
use crate::range::ScaleRange;
use crate::style::{ScaleMetrics, ScaleStyle};
use crate::units::Density;
use std::fmt::Write;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shadow {
    pub color: Color,
    pub blur: f64,
}

/// The drawing primitives a scale needs from a 2D backend. Coordinates are surface
/// pixels with y pointing down.
pub trait Canvas {
    type Error;

    fn stroke_circle(
        &mut self,
        center: Point,
        radius: f64,
        width: f64,
        color: Color,
        shadow: Option<Shadow>,
    ) -> Result<(), Self::Error>;

    fn stroke_line(
        &mut self,
        from: Point,
        to: Point,
        width: f64,
        color: Color,
    ) -> Result<(), Self::Error>;

    fn fill_polygon(&mut self, points: &[Point], color: Color) -> Result<(), Self::Error>;

    /// Draws `text` horizontally centered on `anchor` (which sits on the baseline),
    /// rotated clockwise by `rotation` degrees around `anchor`.
    fn draw_text(
        &mut self,
        text: &str,
        anchor: Point,
        rotation: f64,
        size: f64,
        color: Color,
    ) -> Result<(), Self::Error>;
}

#[derive(Debug, Clone, Copy)]
pub struct Scene<'a> {
    pub range: &'a ScaleRange,
    pub style: &'a ScaleStyle,
    pub rotation: f64,
    pub surface: Size,
    pub density: Density,
}

struct ScaleRenderer<'a> {
    scene: Scene<'a>,
    metrics: ScaleMetrics,
    ring: RingLayout,
}

impl<'a> ScaleRenderer<'a> {
    fn new(scene: Scene<'a>) -> Self {
        let metrics = ScaleMetrics::resolve(scene.style, scene.density);
        let ring = RingLayout::new(scene.surface, &metrics);
        Self {
            scene,
            metrics,
            ring,
        }
    }

    fn draw<C: Canvas>(&self, canvas: &mut C) -> Result<(), C::Error> {
        self.draw_ring(canvas)?;
        self.draw_ticks(canvas)?;
        self.draw_indicator(canvas)
    }

    fn draw_ring<C: Canvas>(&self, canvas: &mut C) -> Result<(), C::Error> {
        let style = self.scene.style;
        canvas.stroke_circle(
            self.ring.center,
            self.ring.radius,
            self.metrics.scale_width,
            style.ring_color,
            Some(Shadow {
                color: style.shadow_color,
                blur: self.metrics.shadow_blur,
            }),
        )
    }

    fn draw_ticks<C: Canvas>(&self, canvas: &mut C) -> Result<(), C::Error> {
        let style = self.scene.style;
        let mut text = String::with_capacity(12);

        for tick in layout::ticks(self.scene.range, self.scene.rotation, &self.ring, &self.metrics)
        {
            if let Some(label) = tick.label {
                text.clear();
                let _ = write!(text, "{}", label.value);
                canvas.draw_text(
                    &text,
                    label.position,
                    label.rotation,
                    self.metrics.text_size,
                    style.label_color,
                )?;
            }
            canvas.stroke_line(
                tick.start,
                tick.end,
                self.metrics.line_width,
                style.line_color(tick.kind),
            )?;
        }
        Ok(())
    }

    fn draw_indicator<C: Canvas>(&self, canvas: &mut C) -> Result<(), C::Error> {
        let points = layout::indicator(&self.ring, &self.metrics);
        canvas.fill_polygon(&points, self.scene.style.indicator_color)
    }
}

pub fn draw<C: Canvas>(canvas: &mut C, scene: Scene<'_>) -> Result<(), C::Error> {
    ScaleRenderer::new(scene).draw(canvas)
}
