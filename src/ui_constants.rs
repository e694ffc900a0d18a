// Named layout and color constants shared by views and sections.

/// Default card width in logical pixels (overridable in settings)
pub const CARD_WIDTH: f32 = 280.0;

/// Bounds for the card width setting
pub const CARD_WIDTH_MIN: f32 = 220.0;
pub const CARD_WIDTH_MAX: f32 = 420.0;

/// Gap between cards in the grid
pub const CARD_GAP: f32 = 16.0;

/// Unread counter on the bell. There is no notification source behind it.
pub const NOTIFICATIONS_COUNT: u32 = 5;

/// Max width of the "create" form column
pub const FORM_MAX_WIDTH: f32 = 640.0;

/// Below this width the cart summary moves under the entries list
pub const CART_STACK_BREAKPOINT: f32 = 760.0;

/// UI spacing constants
pub mod spacing {
    pub const SMALL: f32 = 4.0;
    pub const MEDIUM: f32 = 8.0;
    pub const LARGE: f32 = 16.0;
    pub const XLARGE: f32 = 24.0;
    pub const SECTION: f32 = 32.0;
}

/// Card-specific layout constants
pub mod card {
    /// Inner margin of card frame (symmetric)
    pub const INNER_MARGIN: f32 = 8.0;

    /// Border radius of card corners
    pub const ROUNDING: f32 = 10.0;

    /// Cover height relative to its width
    pub const COVER_ASPECT: f32 = 0.75;

    /// Padding of badges from cover edges
    pub const BADGE_PAD: f32 = 10.0;

    /// Heart / rank circle radius
    pub const ROUND_BUTTON_RADIUS: f32 = 14.0;

    /// Square add-to-cart button
    pub const CART_BUTTON_SIZE: f32 = 32.0;
}

/// Dark theme palette
pub mod palette {
    use eframe::egui::Color32;

    pub const BACKGROUND: Color32 = Color32::from_rgb(16, 14, 24);
    pub const PANEL: Color32 = Color32::from_rgb(22, 20, 32);
    pub const CARD_FILL: Color32 = Color32::from_rgb(30, 27, 42);
    pub const MUTED_FILL: Color32 = Color32::from_rgb(40, 36, 56);
    pub const BORDER: Color32 = Color32::from_rgb(58, 52, 78);
    pub const TEXT: Color32 = Color32::from_rgb(235, 232, 245);
    pub const MUTED_TEXT: Color32 = Color32::from_rgb(150, 144, 170);

    /// Primary gradient stops (purple -> pink)
    pub const PRIMARY_FROM: Color32 = Color32::from_rgb(147, 51, 234);
    pub const PRIMARY_TO: Color32 = Color32::from_rgb(219, 39, 119);

    /// Secondary gradient stops (orange -> pink), used for counters and ranks
    pub const SECONDARY_FROM: Color32 = Color32::from_rgb(249, 115, 22);
    pub const SECONDARY_TO: Color32 = Color32::from_rgb(236, 72, 153);

    /// Accent gradient stops (blue -> cyan)
    pub const ACCENT_FROM: Color32 = Color32::from_rgb(37, 99, 235);
    pub const ACCENT_TO: Color32 = Color32::from_rgb(34, 211, 238);

    pub const FAVORITE: Color32 = Color32::from_rgb(239, 68, 68);
    pub const SUCCESS: Color32 = Color32::from_rgb(34, 197, 94);
    pub const INFO: Color32 = Color32::from_rgb(59, 130, 246);
    pub const ERROR: Color32 = Color32::from_rgb(220, 80, 80);
}
