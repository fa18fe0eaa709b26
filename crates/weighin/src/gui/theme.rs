use crate::config::WindowConfig;
use gtk::gdk;
use gtk4 as gtk;
use ringscale::Color;

pub struct Theme {
    provider: gtk::CssProvider,
}

impl Theme {
    pub fn install(window: &WindowConfig) -> Self {
        let provider = gtk::CssProvider::new();
        provider.load_from_data(&css(window));

        if let Some(display) = gdk::Display::default() {
            gtk::style_context_add_provider_for_display(
                &display,
                &provider,
                gtk::STYLE_PROVIDER_PRIORITY_APPLICATION,
            );
        }
        Self { provider }
    }

    pub fn update(&self, window: &WindowConfig) {
        self.provider.load_from_data(&css(window));
    }
}

impl std::fmt::Debug for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Theme").finish_non_exhaustive()
    }
}

fn css_color(color: Color) -> String {
    let (r, g, b, a) = color.into_components();
    let c = |v: f64| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    format!("rgba({}, {}, {}, {:.3})", c(r), c(g), c(b), a.clamp(0.0, 1.0))
}

fn css(window: &WindowConfig) -> String {
    format!(
        "
.weighin-window, .weighin-scale {{
    background-color: {background};
}}
.weighin-weight {{
    color: {weight};
    font-size: 25pt;
    font-weight: bold;
}}
",
        background = css_color(window.background),
        weight = css_color(window.weight_color),
    )
}
