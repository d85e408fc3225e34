use fltk::{
    button::Button,
    enums::{Align, Color, Font},
    frame::Frame,
    group::Flex,
    prelude::*,
    window::Window,
};

use super::run_dialog;
use crate::app::domain::file_handle::APP_TITLE;
use crate::app::domain::menu::HELP_URL;

/// Show About dialog
pub fn show_about_dialog() {
    let version = env!("CARGO_PKG_VERSION");
    let mut dialog = Window::default()
        .with_size(420, 260)
        .with_label(&format!("About {}", APP_TITLE))
        .center_screen();
    dialog.make_modal(true);

    let mut flex = Flex::new(10, 10, 400, 240, None);
    flex.set_type(fltk::group::FlexType::Column);
    flex.set_spacing(10);

    let mut title = Frame::default();
    title.set_label(APP_TITLE);
    title.set_label_size(22);
    title.set_label_font(Font::HelveticaBold);
    flex.fixed(&title, 40);

    let mut version_frame = Frame::default();
    version_frame.set_label(&format!("Shell version {}", version));
    version_frame.set_label_size(14);
    flex.fixed(&version_frame, 25);

    let mut desc_frame = Frame::default();
    desc_frame.set_label("Write Deckset presentations slide by slide");
    desc_frame.set_label_size(12);
    desc_frame.set_label_color(Color::from_rgb(100, 100, 100));
    flex.fixed(&desc_frame, 25);

    let mut info_frame = Frame::default();
    info_frame.set_label(&format!("Licensed under the MIT License\n\n{}", HELP_URL));
    info_frame.set_label_size(12);
    info_frame.set_align(Align::Center | Align::Inside);

    let mut close_btn = Button::default().with_label("Close");
    flex.fixed(&close_btn, 35);

    flex.end();
    dialog.end();

    let mut dialog_close = dialog.clone();
    close_btn.set_callback(move |_| {
        dialog_close.hide();
    });

    dialog.show();
    run_dialog(&dialog);
}
