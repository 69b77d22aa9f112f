//! Painting of a planned month onto an RGB bitmap.
//!
//! Everything here is deterministic: the same geometry, roster, color
//! assignment and `today` produce byte-identical images.

mod font;
mod theme;

use std::borrow::Cow;
use std::io::Cursor;

use ab_glyph::PxScale;
use chrono::{Datelike, NaiveDate};
use image::{ImageFormat, Rgb, RgbImage};
use imageproc::drawing::{
    draw_filled_ellipse_mut, draw_filled_rect_mut, draw_hollow_rect_mut, draw_text_mut, text_size,
};
use imageproc::rect::Rect;

use staff_palette::{Color, StaffColors};

use crate::context::CalendarOptions;
use crate::layout::{
    CalendarGeometry, CELL_HEIGHT, CELL_WIDTH, HEADER_HEIGHT, LEGEND_COLUMNS, PADDING,
    WEEKDAY_ROW_HEIGHT,
};
use crate::roster::{apply_cutoff, DayRoster};

pub use font::FontSet;
pub use theme::Theme;

const WEEKDAY_LABELS: [&str; 7] = ["日", "月", "火", "水", "木", "金", "土"];
const TITLE_LABEL: &str = "シフトカレンダー";
const LEGEND_CAPTION: &str = "■ セラピスト凡例";
const OVERFLOW_SUFFIX: &str = "名";

const TITLE_SCALE: f32 = 36.0;
const WEEKDAY_SCALE: f32 = 20.0;
const DAY_NUMBER_SCALE: f32 = 18.0;
const NAME_SCALE: f32 = 13.0;
const LEGEND_SCALE: f32 = 14.0;

/// Names longer than this are shortened to fit a cell.
const NAME_DISPLAY_CHARS: usize = 5;

/// Paint a month view onto a fresh bitmap.
///
/// The roster may be empty; the result is then a valid blank calendar. The
/// caller decides whether an empty month is worth rendering at all (see
/// [`month_calendar`](crate::month_calendar)).
pub fn render(
    geometry: &CalendarGeometry,
    roster: &DayRoster,
    colors: &StaffColors,
    today: NaiveDate,
    options: &CalendarOptions,
    fonts: &FontSet,
) -> RgbImage {
    let theme = &options.theme;
    let mut canvas = RgbImage::from_pixel(geometry.width, geometry.height, rgb(theme.background));

    draw_header(&mut canvas, geometry, theme, fonts);
    draw_weekday_row(&mut canvas, geometry, theme, fonts);

    for day in 1..=geometry.days_in_month {
        let is_today = today.year() == geometry.year
            && today.month() == geometry.month
            && today.day() == day;

        draw_day_cell(&mut canvas, geometry, roster, colors, options, fonts, day, is_today);
    }

    draw_legend(&mut canvas, geometry, colors, theme, fonts);
    canvas
}

/// Encode a rendered calendar as PNG bytes, ready for a file or a stream.
pub fn png_bytes(image: &RgbImage) -> Result<Vec<u8>, image::ImageError> {
    let mut buffer = Cursor::new(Vec::new());
    image.write_to(&mut buffer, ImageFormat::Png)?;
    Ok(buffer.into_inner())
}

fn draw_header(canvas: &mut RgbImage, geometry: &CalendarGeometry, theme: &Theme, fonts: &FontSet) {
    let header = Rect::at(0, 0).of_size(geometry.width, HEADER_HEIGHT);
    draw_filled_rect_mut(canvas, header, rgb(theme.header_background));

    let title = format!("{}年{}月 {}", geometry.year, geometry.month, TITLE_LABEL);
    let (title_width, _) = text_size(PxScale::from(TITLE_SCALE), &fonts.bold, &title);
    let x = (geometry.width as i32 - title_width as i32) / 2;

    draw_text_mut(
        canvas,
        rgb(theme.title_text),
        x.max(0),
        20,
        PxScale::from(TITLE_SCALE),
        &fonts.bold,
        &title,
    );
}

fn draw_weekday_row(
    canvas: &mut RgbImage,
    geometry: &CalendarGeometry,
    theme: &Theme,
    fonts: &FontSet,
) {
    let y = HEADER_HEIGHT as i32;

    for (column, label) in WEEKDAY_LABELS.iter().enumerate() {
        let x = (PADDING + column as u32 * CELL_WIDTH) as i32;

        let background = Rect::at(x, y).of_size(CELL_WIDTH - 1, WEEKDAY_ROW_HEIGHT);
        draw_filled_rect_mut(canvas, background, rgb(theme.weekday_row_background));

        let color = match column {
            0 => theme.sunday,
            6 => theme.saturday,
            _ => theme.text,
        };

        let (label_width, _) = text_size(PxScale::from(WEEKDAY_SCALE), &fonts.bold, label);

        draw_text_mut(
            canvas,
            rgb(color),
            x + (CELL_WIDTH as i32 - label_width as i32) / 2,
            y + 7,
            PxScale::from(WEEKDAY_SCALE),
            &fonts.bold,
            label,
        );
    }
}

#[allow(clippy::too_many_arguments)]
fn draw_day_cell(
    canvas: &mut RgbImage,
    geometry: &CalendarGeometry,
    roster: &DayRoster,
    colors: &StaffColors,
    options: &CalendarOptions,
    fonts: &FontSet,
    day: u32,
    is_today: bool,
) {
    let theme = &options.theme;
    let (row, column) = geometry.position(day);
    let x = (PADDING + column * CELL_WIDTH) as i32;
    let y = (geometry.grid_top() + row * CELL_HEIGHT) as i32;

    let cell = Rect::at(x + 1, y + 1).of_size(CELL_WIDTH - 2, CELL_HEIGHT - 2);

    if is_today {
        draw_filled_rect_mut(canvas, cell, rgb(theme.today_background));
        draw_hollow_rect_mut(canvas, cell, rgb(theme.today_border));
        // second pass for a 2px accent border
        let inset = Rect::at(x + 2, y + 2).of_size(CELL_WIDTH - 4, CELL_HEIGHT - 4);
        draw_hollow_rect_mut(canvas, inset, rgb(theme.today_border));
    } else {
        draw_filled_rect_mut(canvas, cell, rgb(theme.cell_background));
        draw_hollow_rect_mut(canvas, cell, rgb(theme.cell_border));
    }

    draw_day_number(canvas, theme, fonts, x, y, column, day, is_today);

    let (shown, overflow) = apply_cutoff(roster.entries(day), options.max_names_per_cell);
    let mut name_y = y + 28;

    for entry in shown {
        let color = colors.get(&entry.staff).unwrap_or(theme.text);

        draw_text_mut(
            canvas,
            rgb(color),
            x + 6,
            name_y,
            PxScale::from(NAME_SCALE),
            &fonts.regular,
            &display_name(&entry.staff),
        );

        name_y += 16;

        if name_y > y + CELL_HEIGHT as i32 - 8 {
            break;
        }
    }

    if overflow > 0 {
        draw_text_mut(
            canvas,
            rgb(theme.muted_text),
            x + 6,
            name_y,
            PxScale::from(NAME_SCALE),
            &fonts.regular,
            &overflow_label(overflow),
        );
    }
}

#[allow(clippy::too_many_arguments)]
fn draw_day_number(
    canvas: &mut RgbImage,
    theme: &Theme,
    fonts: &FontSet,
    x: i32,
    y: i32,
    column: u32,
    day: u32,
    is_today: bool,
) {
    let label = day.to_string();

    let color = match column {
        0 => theme.sunday,
        6 => theme.saturday,
        _ => theme.text,
    };

    if is_today {
        // today's number sits on a filled badge circle
        let (label_width, label_height) =
            text_size(PxScale::from(DAY_NUMBER_SCALE), &fonts.bold, &label);
        let radius = (label_width.max(label_height) / 2 + 5) as i32;
        let center = (x + 18, y + 16);

        draw_filled_ellipse_mut(canvas, center, radius, radius, rgb(theme.today_badge));

        draw_text_mut(
            canvas,
            rgb(theme.text),
            center.0 - label_width as i32 / 2,
            center.1 - label_height as i32 / 2 - 2,
            PxScale::from(DAY_NUMBER_SCALE),
            &fonts.bold,
            &label,
        );
    } else {
        draw_text_mut(
            canvas,
            rgb(color),
            x + 6,
            y + 4,
            PxScale::from(DAY_NUMBER_SCALE),
            &fonts.bold,
            &label,
        );
    }
}

fn draw_legend(
    canvas: &mut RgbImage,
    geometry: &CalendarGeometry,
    colors: &StaffColors,
    theme: &Theme,
    fonts: &FontSet,
) {
    let y = (geometry.grid_top() + geometry.rows * CELL_HEIGHT + 10) as i32;

    let band = Rect::at(PADDING as i32, y)
        .of_size(geometry.width - 2 * PADDING, geometry.legend_height - 10);
    draw_filled_rect_mut(canvas, band, rgb(theme.legend_background));
    draw_hollow_rect_mut(canvas, band, rgb(theme.cell_border));

    draw_text_mut(
        canvas,
        rgb(theme.text),
        PADDING as i32 + 10,
        y + 6,
        PxScale::from(LEGEND_SCALE),
        &fonts.regular,
        LEGEND_CAPTION,
    );

    let item_x = PADDING as i32 + 10;
    let item_y = y + 30;
    let column_width = ((geometry.width - 2 * PADDING - 20) / LEGEND_COLUMNS) as i32;

    for (index, (name, color)) in colors.iter().enumerate() {
        let column = (index as u32 % LEGEND_COLUMNS) as i32;
        let row = (index as u32 / LEGEND_COLUMNS) as i32;
        let lx = item_x + column * column_width;
        let ly = item_y + row * 24;

        let swatch = Rect::at(lx, ly + 2).of_size(12, 12);
        draw_filled_rect_mut(canvas, swatch, rgb(color));

        draw_text_mut(
            canvas,
            rgb(color),
            lx + 16,
            ly,
            PxScale::from(LEGEND_SCALE),
            &fonts.regular,
            name,
        );
    }
}

/// The `+N名` marker summarizing entries past the display cutoff.
pub(crate) fn overflow_label(overflow: usize) -> String {
    format!("+{overflow}{OVERFLOW_SUFFIX}")
}

/// Shorten a name to fit a cell, keeping whole characters.
pub(crate) fn display_name(name: &str) -> Cow<'_, str> {
    if name.chars().count() > NAME_DISPLAY_CHARS {
        let prefix: String = name.chars().take(NAME_DISPLAY_CHARS - 1).collect();
        Cow::Owned(format!("{prefix}.."))
    } else {
        Cow::Borrowed(name)
    }
}

fn rgb(color: Color) -> Rgb<u8> {
    Rgb(color.channels())
}
