use super::{LABEL_FONT, SHADOW_STEPS};
use cairo::Context;
use ringscale::render::{Canvas, Shadow};
use ringscale::{Color, Point};
use std::f64::consts::PI;

pub struct CairoCanvas<'a> {
    cr: &'a Context,
}

impl<'a> CairoCanvas<'a> {
    pub fn new(cr: &'a Context) -> Self {
        Self { cr }
    }

    fn set_color(&self, color: Color) {
        let (r, g, b, a) = color.into_components();
        self.cr.set_source_rgba(r, g, b, a);
    }

    fn ring(&self, center: Point, radius: f64, width: f64) -> Result<(), cairo::Error> {
        self.cr.set_line_width(width);
        self.cr.new_path();
        self.cr.arc(center.x, center.y, radius, 0.0, 2.0 * PI);
        self.cr.stroke()
    }

    /// Widening rings of fading alpha around the stroke, densest at its edge.
    fn draw_shadow(
        &self,
        center: Point,
        radius: f64,
        width: f64,
        shadow: Shadow,
    ) -> Result<(), cairo::Error> {
        if shadow.blur <= 0.0 {
            return Ok(());
        }
        let (r, g, b, a) = shadow.color.into_components();
        let step_alpha = a / SHADOW_STEPS as f64;

        for step in (1..=SHADOW_STEPS).rev() {
            let spread = shadow.blur * step as f64 / SHADOW_STEPS as f64;
            self.cr.set_source_rgba(r, g, b, step_alpha);
            self.ring(center, radius, width + spread)?;
        }
        Ok(())
    }
}

impl Canvas for CairoCanvas<'_> {
    type Error = cairo::Error;

    fn stroke_circle(
        &mut self,
        center: Point,
        radius: f64,
        width: f64,
        color: Color,
        shadow: Option<Shadow>,
    ) -> Result<(), Self::Error> {
        if let Some(shadow) = shadow {
            self.draw_shadow(center, radius, width, shadow)?;
        }
        self.set_color(color);
        self.ring(center, radius, width)
    }

    fn stroke_line(
        &mut self,
        from: Point,
        to: Point,
        width: f64,
        color: Color,
    ) -> Result<(), Self::Error> {
        self.set_color(color);
        self.cr.set_line_width(width);
        self.cr.new_path();
        self.cr.move_to(from.x, from.y);
        self.cr.line_to(to.x, to.y);
        self.cr.stroke()
    }

    fn fill_polygon(&mut self, points: &[Point], color: Color) -> Result<(), Self::Error> {
        let Some((first, rest)) = points.split_first() else {
            return Ok(());
        };
        self.set_color(color);
        self.cr.new_path();
        self.cr.move_to(first.x, first.y);
        for p in rest {
            self.cr.line_to(p.x, p.y);
        }
        self.cr.close_path();
        self.cr.fill()
    }

    fn draw_text(
        &mut self,
        text: &str,
        anchor: Point,
        rotation: f64,
        size: f64,
        color: Color,
    ) -> Result<(), Self::Error> {
        self.cr.save()?;
        self.set_color(color);
        self.cr.select_font_face(LABEL_FONT, cairo::FontSlant::Normal, cairo::FontWeight::Normal);
        self.cr.set_font_size(size);
        let ext = self.cr.text_extents(text)?;

        self.cr.translate(anchor.x, anchor.y);
        self.cr.rotate(rotation.to_radians());
        self.cr.move_to(-(ext.x_bearing() + ext.width() / 2.0), 0.0);
        self.cr.show_text(text)?;
        self.cr.restore()
    }
}
