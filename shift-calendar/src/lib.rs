#![doc = include_str!("../../README.md")]

pub mod calendar;
pub mod context;
pub mod error;
pub mod layout;
pub mod record;
pub mod render;
pub mod roster;

mod utils;

#[cfg(test)]
mod tests;

// Public re-exports
pub use crate::calendar::month_calendar;
pub use crate::context::CalendarOptions;
pub use crate::error::InvalidMonth;
pub use crate::layout::{plan, CalendarGeometry};
pub use crate::record::{normalize, RawShiftRecord, ShiftInterval};
pub use crate::render::{png_bytes, render, FontSet, Theme};
pub use crate::roster::{expand, DayRoster, RosterEntry};
pub use staff_palette::{Color, StaffColors, PALETTE};
