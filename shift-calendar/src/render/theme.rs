use staff_palette::Color;

/// Colors of the dark calendar theme.
///
/// A theme is plain data constructed per render call; the default matches
/// the salon's production look and tests rely on its exact values staying
/// put.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct Theme {
    /// Image background.
    pub background: Color,
    /// Title band background.
    pub header_background: Color,
    /// Title text.
    pub title_text: Color,
    /// Weekday label row background.
    pub weekday_row_background: Color,
    /// Day cell fill.
    pub cell_background: Color,
    /// Day cell border.
    pub cell_border: Color,
    /// Fill of the cell holding today's date.
    pub today_background: Color,
    /// Border of the cell holding today's date.
    pub today_border: Color,
    /// Badge circle behind today's day number.
    pub today_badge: Color,
    /// Default text.
    pub text: Color,
    /// De-emphasized text (overflow markers).
    pub muted_text: Color,
    /// Sunday labels and day numbers.
    pub sunday: Color,
    /// Saturday labels and day numbers.
    pub saturday: Color,
    /// Legend band fill.
    pub legend_background: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Color::new(0x1A, 0x1A, 0x2E),
            header_background: Color::new(0x0F, 0x34, 0x60),
            title_text: Color::new(0xF0, 0xE6, 0xD3),
            weekday_row_background: Color::new(0x0A, 0x16, 0x28),
            cell_background: Color::new(0x16, 0x21, 0x3E),
            cell_border: Color::new(0x0F, 0x34, 0x60),
            today_background: Color::new(0x2A, 0x1A, 0x3E),
            today_border: Color::new(0xFF, 0x6B, 0x6B),
            today_badge: Color::new(0xE9, 0x45, 0x60),
            text: Color::new(0xFF, 0xFF, 0xFF),
            muted_text: Color::new(0xA0, 0xA0, 0xA0),
            sunday: Color::new(0xF8, 0x71, 0x71),
            saturday: Color::new(0x60, 0xA5, 0xFA),
            legend_background: Color::new(0x0A, 0x16, 0x28),
        }
    }
}
