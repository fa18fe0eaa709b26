use crate::config::{Config, ConfigSource};
use crate::events::AppEvent;
use crate::gui::scale::CairoCanvas;
use crate::gui::theme::Theme;
use gtk::prelude::*;
use gtk4 as gtk;
use relm4::prelude::*;
use ringscale::{Point, Scale, Size};
use std::cell::RefCell;
use std::rc::Rc;

pub struct AppModel {
    pub scale: Rc<RefCell<Scale>>,
    pub weight: i32,
    pub source: ConfigSource,
    pub theme: Theme,
    pub drawing_area: gtk::DrawingArea,
}

#[derive(Debug)]
pub enum AppMsg {
    DragBegin(Point),
    DragUpdate(Point),
    DragEnd,
    DragCancel,
    PointerLeave,
    Resize(Size),
    WeightChanged(i32),
    ConfigReload,
    Quit,
}

impl From<AppEvent> for AppMsg {
    fn from(event: AppEvent) -> Self {
        match event {
            AppEvent::ConfigReload => AppMsg::ConfigReload,
        }
    }
}

impl AppModel {
    fn queue_redraw(&self) {
        if self.scale.borrow_mut().take_redraw() {
            self.drawing_area.queue_draw();
        }
    }

    fn apply_config(&mut self, config: Config) {
        self.theme.update(&config.window);
        self.drawing_area
            .set_content_height(config.window.scale_height);

        let mut scale = self.scale.borrow_mut();
        scale.set_style(config.style);
        scale.set_density(config.density);
        scale.set_range(config.range);
        self.weight = scale.value();
    }
}

#[relm4::component(pub)]
impl SimpleComponent for AppModel {
    type Init = (Config, ConfigSource, async_channel::Receiver<AppEvent>);
    type Input = AppMsg;
    type Output = ();

    view! {
        #[root]
        #[name = "window"]
        gtk::ApplicationWindow {
            set_title: Some("Weigh-in"),
            add_css_class: "weighin-window",

            add_controller = gtk::EventControllerKey {
                connect_key_pressed[sender] => move |_, key, _, _| {
                    if key == gtk::gdk::Key::Escape {
                        sender.input(AppMsg::Quit);
                        return glib::Propagation::Stop;
                    }
                    glib::Propagation::Proceed
                }
            },

            gtk::Box {
                set_orientation: gtk::Orientation::Vertical,

                gtk::Label {
                    set_vexpand: true,
                    set_valign: gtk::Align::Center,
                    add_css_class: "weighin-weight",
                    #[watch]
                    set_label: &format!("Weight: {} KG", model.weight),
                },

                #[name = "drawing_area"]
                gtk::DrawingArea {
                    set_hexpand: true,
                    add_css_class: "weighin-scale",

                    connect_resize[sender] => move |_, width, height| {
                        sender.input(AppMsg::Resize(Size::new(
                            f64::from(width),
                            f64::from(height),
                        )));
                    },

                    add_controller = gtk::EventControllerMotion {
                        connect_leave[sender] => move |_| {
                            sender.input(AppMsg::PointerLeave);
                        },
                    },

                    add_controller = gtk::GestureDrag {
                        connect_drag_begin[sender] => move |_, x, y| {
                            sender.input(AppMsg::DragBegin(Point::new(x, y)));
                        },
                        connect_drag_update[sender] => move |gesture, dx, dy| {
                            if let Some((x, y)) = gesture.start_point() {
                                sender.input(AppMsg::DragUpdate(Point::new(x + dx, y + dy)));
                            }
                        },
                        connect_drag_end[sender] => move |_, _, _| {
                            sender.input(AppMsg::DragEnd);
                        },
                        connect_cancel[sender] => move |_, _| {
                            sender.input(AppMsg::DragCancel);
                        },
                    }
                }
            }
        }
    }

    fn init(
        init: Self::Init,
        root: Self::Root,
        sender: ComponentSender<Self>,
    ) -> ComponentParts<Self> {
        let (config, source, rx) = init;

        let theme = Theme::install(&config.window);
        root.set_default_size(config.window.width, config.window.height);

        let value_sender = sender.clone();
        let scale = Scale::new(config.range, config.style, move |weight| {
            value_sender.input(AppMsg::WeightChanged(weight));
        })
        .with_density(config.density);

        let model = AppModel {
            weight: scale.value(),
            scale: Rc::new(RefCell::new(scale)),
            source,
            theme,
            drawing_area: gtk::DrawingArea::default(),
        };

        let widgets = view_output!();

        let mut model = model;
        model.drawing_area = widgets.drawing_area.clone();
        model
            .drawing_area
            .set_content_height(config.window.scale_height);

        let scale_draw = model.scale.clone();
        widgets
            .drawing_area
            .set_draw_func(move |_, cr, _, _| {
                if let Err(e) = scale_draw.borrow().draw(&mut CairoCanvas::new(cr)) {
                    log::error!("Drawing error: {}", e);
                }
            });

        let sender_clone = sender.clone();
        relm4::spawn(async move {
            while let Ok(event) = rx.recv().await {
                sender_clone.input(AppMsg::from(event));
            }
        });

        ComponentParts { model, widgets }
    }

    fn update(&mut self, msg: Self::Input, _sender: ComponentSender<Self>) {
        match msg {
            AppMsg::DragBegin(point) => {
                self.scale.borrow_mut().drag_start(point);
            }
            AppMsg::DragUpdate(point) => {
                self.scale.borrow_mut().drag_move(point);
                self.queue_redraw();
            }
            AppMsg::DragEnd => {
                self.scale.borrow_mut().drag_end();
            }
            AppMsg::DragCancel => {
                // Lost the pointer mid-drag: keep what was reached.
                self.scale.borrow_mut().drag_cancel();
            }
            AppMsg::PointerLeave => {
                let mut scale = self.scale.borrow_mut();
                if scale.gesture().is_dragging() {
                    log::debug!("Pointer left the scale mid-drag");
                    scale.drag_cancel();
                }
            }
            AppMsg::Resize(size) => {
                self.scale.borrow_mut().set_surface_size(size);
                self.queue_redraw();
            }
            AppMsg::WeightChanged(weight) => {
                self.weight = weight;
            }
            AppMsg::ConfigReload => match self.source.load() {
                Ok(new_config) => {
                    self.apply_config(new_config);
                    self.queue_redraw();
                    log::info!("Configuration reloaded");
                }
                Err(e) => log::error!("Failed to reload config: {}", e),
            },
            AppMsg::Quit => {
                relm4::main_application().quit();
            }
        }
    }
}
