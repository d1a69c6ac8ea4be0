// Centralized theme system for consistent UI styling
// All colors and styles are defined here - edit this file to change the look

use ratatui::style::{Color, Modifier, Style};

// =============================================================================
// COLOR PALETTE - Muted indigo/slate look, dark mode
// =============================================================================

/// App background
pub const BG_APP: Color = Color::Rgb(17, 24, 39);

/// Card background - the panel holding the queue
pub const BG_CARD: Color = Color::Rgb(31, 41, 55);

/// Row background
pub const BG_ROW: Color = Color::Rgb(55, 65, 81);

/// Selected row background
pub const BG_SELECTED: Color = Color::Rgb(67, 56, 202);

/// Row that was just added - yellow tint
pub const BG_NEW_ITEM: Color = Color::Rgb(66, 56, 18);

/// Row counting down to deletion - red tint
pub const BG_PENDING: Color = Color::Rgb(69, 26, 26);

/// Status bar background
pub const BG_STATUSBAR: Color = Color::Rgb(12, 12, 12);

/// Input field background
pub const BG_INPUT: Color = Color::Rgb(55, 65, 81);

// -----------------------------------------------------------------------------
// Text Colors
// -----------------------------------------------------------------------------

pub const TEXT_PRIMARY: Color = Color::Rgb(243, 244, 246);

/// Secondary/muted text
pub const TEXT_MUTED: Color = Color::Rgb(156, 163, 175);

/// Dimmed text for hints, placeholders
pub const TEXT_DIM: Color = Color::Rgb(107, 114, 128);

// -----------------------------------------------------------------------------
// Accent Colors
// -----------------------------------------------------------------------------

/// Primary accent - indigo (title, focus)
pub const ACCENT_PRIMARY: Color = Color::Rgb(129, 140, 248);

/// Copy action / info - blue
pub const ACCENT_INFO: Color = Color::Rgb(96, 165, 250);

/// Success/complete action - green
pub const ACCENT_SUCCESS: Color = Color::Rgb(74, 222, 128);

/// Newly added highlight - yellow
pub const ACCENT_WARNING: Color = Color::Rgb(250, 204, 21);

/// Countdown - red
pub const ACCENT_ERROR: Color = Color::Rgb(248, 113, 113);

// -----------------------------------------------------------------------------
// Border Colors
// -----------------------------------------------------------------------------

pub const BORDER_ACTIVE: Color = ACCENT_PRIMARY;

pub const BORDER_INACTIVE: Color = Color::Rgb(75, 85, 99);

// =============================================================================
// STYLE FUNCTIONS - Semantic styles for common UI patterns
// =============================================================================

pub fn text_primary() -> Style {
    Style::default().fg(TEXT_PRIMARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(TEXT_MUTED)
}

pub fn text_dim() -> Style {
    Style::default().fg(TEXT_DIM)
}

pub fn title() -> Style {
    Style::default()
        .fg(TEXT_PRIMARY)
        .add_modifier(Modifier::BOLD)
}

pub fn border_focused() -> Style {
    Style::default().fg(BORDER_ACTIVE)
}

pub fn border_inactive() -> Style {
    Style::default().fg(BORDER_INACTIVE)
}

pub fn input_active() -> Style {
    Style::default().fg(TEXT_PRIMARY).bg(BG_INPUT)
}

pub fn input_placeholder() -> Style {
    Style::default().fg(TEXT_DIM).bg(BG_INPUT)
}

/// Struck-through text of an item pending deletion
pub fn pending_text() -> Style {
    Style::default()
        .fg(TEXT_MUTED)
        .add_modifier(Modifier::CROSSED_OUT)
}

/// "Deleting in N…" label; `on` alternates to make it pulse
pub fn countdown_label(on: bool) -> Style {
    let style = Style::default()
        .fg(ACCENT_ERROR)
        .add_modifier(Modifier::BOLD);
    if on {
        style
    } else {
        style.add_modifier(Modifier::DIM)
    }
}

pub fn copied_label() -> Style {
    Style::default()
        .fg(ACCENT_SUCCESS)
        .add_modifier(Modifier::BOLD)
}

pub fn action_hint() -> Style {
    Style::default().fg(ACCENT_INFO)
}
