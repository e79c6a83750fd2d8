//! TUI widgets.

mod footer;
mod header;
mod help;
mod name_input;
mod notification;
mod quit_confirm;
mod records;

pub use footer::render_footer;
pub use header::render_header;
pub use help::render_help;
pub use name_input::render_name_input;
pub use notification::render_notification;
pub use quit_confirm::render_quit_confirm;
pub use records::render_records;

use ratatui::layout::Rect;

/// Returns a popup area centered in `area`: `width_pct` percent of the width
/// and the full height, each clamped to the given `(min, max)` bounds.
fn centered(area: Rect, width_pct: u16, width: (u16, u16), height: (u16, u16)) -> Rect {
    let scaled = u32::from(area.width) * u32::from(width_pct) / 100;
    let popup_width = u16::try_from(scaled)
        .unwrap_or(u16::MAX)
        .clamp(width.0, width.1)
        .min(area.width);
    let popup_height = area.height.clamp(height.0, height.1).min(area.height);

    let popup_x = area.x + (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = area.y + (area.height.saturating_sub(popup_height)) / 2;
    Rect::new(popup_x, popup_y, popup_width, popup_height)
}
