//! Spacing and status colors shared across views.

use iced::Color;
use vms_client::NotificationKind;

pub const SPACING_XS: f32 = 4.0;
pub const SPACING_SM: f32 = 8.0;
pub const SPACING_MD: f32 = 16.0;
pub const SPACING_LG: f32 = 24.0;

pub const BORDER_RADIUS_SM: f32 = 6.0;

/// Accent color for a notification severity.
pub fn status_color(kind: NotificationKind) -> Color {
    match kind {
        NotificationKind::Info => Color::from_rgb(0.16, 0.50, 0.85),
        NotificationKind::Success => Color::from_rgb(0.13, 0.65, 0.37),
        NotificationKind::Error => Color::from_rgb(0.90, 0.30, 0.25),
    }
}
