/// User interface module
///
/// - `screens.rs` - one view per screen
/// - the navigation bar and notice line shared by every screen

pub mod screens;

use iced::widget::{button, text, Row};
use iced::Element;

use crate::state::screen::Screen;
use crate::Message;

/// Buttons for every screen reachable after login
pub fn nav_bar(active: Screen) -> Element<'static, Message> {
    let buttons = Screen::NAVIGABLE.into_iter().map(|screen| {
        let style = if screen == active {
            button::primary
        } else {
            button::secondary
        };
        button(screen.title())
            .on_press(Message::Navigate(screen))
            .style(style)
            .padding(8)
            .into()
    });

    Row::with_children(buttons).spacing(8).into()
}

/// The single notice line. A new notice replaces the old one.
pub fn notice(message: Option<&str>) -> Element<'_, Message> {
    match message {
        Some(message) => text(message).size(16).style(text::danger).into(),
        None => text("").into(),
    }
}
