//! Application constants.
//!
//! Centralizes magic numbers and configuration values for better maintainability.

/// Schedule grid constants.
pub mod schedule {
    /// First bookable hour of the day.
    pub const DAY_START_HOUR: u32 = 9;

    /// Number of hourly slots shown in the grid (09:00 through 20:00).
    pub const SLOT_COUNT: usize = 12;

    /// Days in the displayed week window.
    pub const WEEK_LENGTH: usize = 7;

    /// Duration assigned when a service is missing from the catalog, in minutes.
    pub const FALLBACK_DURATION_MIN: u32 = 60;
}

/// UI layout constants.
pub mod ui {
    /// Sidebar width in characters.
    pub const SIDEBAR_WIDTH: u16 = 26;

    /// Height of the header band above the section content.
    pub const HEADER_HEIGHT: u16 = 4;

    /// Width of the time column in the week grid.
    pub const TIME_COLUMN_WIDTH: u16 = 7;

    /// Height of a single grid row (client line + service line).
    pub const GRID_ROW_HEIGHT: u16 = 2;

    /// Width of the appointment creation dialog.
    pub const DIALOG_WIDTH: u16 = 52;

    /// Height of the appointment creation dialog.
    pub const DIALOG_HEIGHT: u16 = 19;
}
