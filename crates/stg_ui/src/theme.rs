//! Shared UI constants: spacing, font sizes, and status colors.

/// Spacing scale in logical pixels.
pub mod spacing {
    pub const XS: f32 = 4.0;
    pub const SM: f32 = 8.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
}

/// Font size scale.
pub mod font {
    pub const SM: f32 = 12.0;
    pub const NORMAL: f32 = 14.0;
    pub const LG: f32 = 18.0;
    pub const TIMER: f32 = 52.0;
}

/// Status colors.
pub mod colors {
    use iced::Color;

    /// Timer color while the clock is counting.
    pub fn running() -> Color {
        Color::from_rgb(0.35, 0.85, 0.45)
    }

    /// Timer color while paused.
    pub fn paused() -> Color {
        Color::from_rgb(0.95, 0.65, 0.25)
    }

    /// De-emphasized text (status line, labels).
    pub fn dim() -> Color {
        Color::from_rgb(0.62, 0.62, 0.62)
    }
}
