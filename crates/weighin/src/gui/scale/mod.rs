pub mod view;

pub use view::CairoCanvas;

/// Concentric strokes used to fake a blurred shadow; cairo has no blur of its own.
pub const SHADOW_STEPS: usize = 12;
pub const LABEL_FONT: &str = "Sans";
