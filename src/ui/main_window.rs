use fltk::{
    app::{self, Sender},
    enums::{Color, Event, FrameType},
    frame::Frame,
    group::Flex,
    menu::MenuBar,
    prelude::*,
    window::Window,
};

use super::context_menu::ContextMenu;
use super::menu::build_menu;
use crate::app::controllers::menu_registry::{MenuRegistry, MenuSurface};
use crate::app::domain::{FileHandle, Message, ShellSettings};

pub struct MainWidgets {
    pub wind: Window,
    pub menu: MenuBar,
    pub context_menu: ContextMenu,
}

pub fn build_main_window(settings: &ShellSettings, registry: &MenuRegistry, sender: &Sender<Message>) -> MainWidgets {
    let (w, h) = (settings.window_width, settings.window_height);
    let mut wind = Window::new(100, 100, w, h, None);
    wind.set_label(&FileHandle::new().window_title());
    wind.set_xclass("DecksetShell");

    let mut flex = Flex::new(0, 0, w, h, None);
    flex.set_type(fltk::group::FlexType::Column);

    let mut menu = MenuBar::new(0, 0, 0, 30, "");
    flex.fixed(&menu, 30);
    build_menu(&mut menu, registry.table(MenuSurface::Application), sender);

    // Area the application core's view is hosted in
    let mut stage = Frame::default();
    stage.set_frame(FrameType::FlatBox);
    stage.set_color(Color::from_rgb(250, 250, 250));

    flex.end();

    let context_menu = ContextMenu::new(registry.table(MenuSurface::Context), sender);

    wind.end();
    wind.resizable(&flex);

    // Escape also triggers the window callback; only a real close request quits
    wind.set_callback({
        let s = *sender;
        move |_| {
            if app::event() == Event::Close {
                s.send(Message::WindowClose);
            }
        }
    });

    MainWidgets {
        wind,
        menu,
        context_menu,
    }
}
