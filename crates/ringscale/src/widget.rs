use crate::geometry::{Point, Size};
use crate::gesture::GestureState;
use crate::layout::RingLayout;
use crate::range::ScaleRange;
use crate::render::{self, Canvas, Scene};
use crate::style::{ScaleMetrics, ScaleStyle};
use crate::units::Density;
use std::fmt;

pub struct Scale {
    range: ScaleRange,
    style: ScaleStyle,
    density: Density,
    surface: Size,
    gesture: GestureState,
    on_value_change: Box<dyn FnMut(i32)>,
    needs_redraw: bool,
}

impl fmt::Debug for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scale")
            .field("range", &self.range)
            .field("density", &self.density)
            .field("surface", &self.surface)
            .field("gesture", &self.gesture)
            .field("needs_redraw", &self.needs_redraw)
            .finish_non_exhaustive()
    }
}

impl Scale {
    pub fn new(
        range: ScaleRange,
        style: ScaleStyle,
        on_value_change: impl FnMut(i32) + 'static,
    ) -> Self {
        Self {
            range,
            style: style.sanitized(),
            density: Density::default(),
            surface: Size::default(),
            gesture: GestureState::new(),
            on_value_change: Box::new(on_value_change),
            needs_redraw: true,
        }
    }

    pub fn with_density(mut self, density: Density) -> Self {
        self.density = density;
        self
    }

    pub fn range(&self) -> &ScaleRange {
        &self.range
    }

    pub fn style(&self) -> &ScaleStyle {
        &self.style
    }

    pub fn gesture(&self) -> &GestureState {
        &self.gesture
    }

    pub fn value(&self) -> i32 {
        self.range.value_at(self.gesture.current_angle())
    }

    pub fn set_surface_size(&mut self, surface: Size) {
        if self.surface != surface {
            self.surface = surface;
            self.needs_redraw = true;
        }
    }

    pub fn set_density(&mut self, density: Density) {
        if self.density != density {
            self.density = density;
            self.needs_redraw = true;
        }
    }

    pub fn set_style(&mut self, style: ScaleStyle) {
        self.style = style.sanitized();
        self.needs_redraw = true;
    }

    /// A different range moves the scale back to its new initial value.
    pub fn set_range(&mut self, range: ScaleRange) {
        if self.range == range {
            return;
        }
        log::info!(
            "Scale range changed to {}..={} (initial {})",
            range.min(),
            range.max(),
            range.initial()
        );
        self.range = range;
        self.gesture.reset();
        self.needs_redraw = true;
    }

    pub fn ring_center(&self) -> Point {
        RingLayout::new(
            self.surface,
            &ScaleMetrics::resolve(&self.style, self.density),
        )
        .center
    }

    pub fn drag_start(&mut self, pointer: Point) {
        let center = self.ring_center();
        self.gesture.drag_start(pointer, center);
    }

    pub fn drag_move(&mut self, pointer: Point) {
        let center = self.ring_center();
        if let Some(value) = self.gesture.drag_move(pointer, center, &self.range) {
            self.needs_redraw = true;
            (self.on_value_change)(value);
        }
    }

    pub fn drag_end(&mut self) {
        self.gesture.drag_end();
    }

    pub fn drag_cancel(&mut self) {
        self.gesture.drag_cancel();
    }

    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }

    pub fn scene(&self) -> Scene<'_> {
        Scene {
            range: &self.range,
            style: &self.style,
            rotation: self.gesture.current_angle(),
            surface: self.surface,
            density: self.density,
        }
    }

    pub fn draw<C: Canvas>(&self, canvas: &mut C) -> Result<(), C::Error> {
        render::draw(canvas, self.scene())
    }
}
