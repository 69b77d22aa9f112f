use crate::render::Theme;

/// Tunables for one calendar render.
#[derive(Clone, Debug)]
pub struct CalendarOptions {
    /// Number of roster entries a day cell shows before truncating the rest
    /// into an overflow marker.
    pub max_names_per_cell: usize,
    /// Colors used by the renderer.
    pub theme: Theme,
}

impl CalendarOptions {
    /// Change the per-cell display cutoff.
    ///
    /// ```
    /// use shift_calendar::CalendarOptions;
    ///
    /// let options = CalendarOptions::default().with_max_names_per_cell(3);
    /// assert_eq!(options.max_names_per_cell, 3);
    /// ```
    pub fn with_max_names_per_cell(self, max_names_per_cell: usize) -> Self {
        Self { max_names_per_cell, ..self }
    }

    /// Attach a different theme.
    pub fn with_theme(self, theme: Theme) -> Self {
        Self { theme, ..self }
    }
}

impl Default for CalendarOptions {
    fn default() -> Self {
        Self { max_names_per_cell: 5, theme: Theme::default() }
    }
}
