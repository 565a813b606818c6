//! Toast notification component.
//!
//! Shows a temporary notification message that auto-dismisses after a
//! timeout (see the subscription in `app.rs`) or on explicit dismissal.

use iced::widget::{Space, button, container, row, text};
use iced::{Alignment, Element, Length};
use iced_fonts::lucide;

use vms_client::{Notification, NotificationKind};

use crate::message::Message;
use crate::theme::{SPACING_MD, SPACING_SM, SPACING_XS, status_color};

/// Toast notification state.
#[derive(Debug, Clone)]
pub struct ToastState {
    /// The message to display.
    pub message: String,
    /// Severity determines the icon and accent color.
    pub kind: NotificationKind,
}

impl From<Notification> for ToastState {
    fn from(note: Notification) -> Self {
        Self {
            message: note.message,
            kind: note.kind,
        }
    }
}

/// Renders a toast notification.
///
/// The toast appears at the bottom-right of the window and can be
/// dismissed with the close button.
pub fn view_toast(state: &ToastState) -> Element<'_, Message> {
    let icon_color = status_color(state.kind);

    let icon = match state.kind {
        NotificationKind::Success => lucide::circle_check().size(18).color(icon_color),
        NotificationKind::Info => lucide::info().size(18).color(icon_color),
        NotificationKind::Error => lucide::circle_x().size(18).color(icon_color),
    };

    let message_text = text(&state.message).size(14);

    let dismiss_btn = button(lucide::x().size(14))
        .on_press(Message::ToastDismissed)
        .padding(SPACING_XS);

    let content = row![
        icon,
        Space::new().width(SPACING_SM),
        message_text,
        Space::new().width(SPACING_SM),
        dismiss_btn,
    ]
    .align_y(Alignment::Center)
    .spacing(SPACING_XS);

    container(content)
        .padding([SPACING_SM, SPACING_MD])
        .width(Length::Shrink)
        .style(move |theme: &iced::Theme| {
            let palette = theme.extended_palette();
            container::Style {
                background: Some(palette.background.weak.color.into()),
                border: iced::Border {
                    color: icon_color,
                    width: 1.0,
                    radius: 8.0.into(),
                },
                shadow: iced::Shadow {
                    color: iced::Color::BLACK,
                    offset: iced::Vector::new(0.0, 2.0),
                    blur_radius: 8.0,
                },
                ..Default::default()
            }
        })
        .into()
}
