use std::{env, fs};

use chrono::Local;

use shift_calendar::{month_calendar, png_bytes, CalendarOptions, RawShiftRecord};

fn main() {
    let mut args = env::args().skip(1);
    let records_path = args.next().expect(USAGE);
    let year: i32 = args.next().expect(USAGE).parse().expect("invalid year");
    let month: u32 = args.next().expect(USAGE).parse().expect("invalid month");
    let output_path = args.next().unwrap_or_else(|| "calendar.png".to_string());

    let raw = fs::read_to_string(&records_path).expect("could not read records file");
    let records: Vec<RawShiftRecord> = serde_json::from_str(&raw).expect("invalid records JSON");
    println!(" - records: {} raw entries", records.len());

    let today = Local::now().date_naive();
    let options = CalendarOptions::default();

    match month_calendar(&records, year, month, today, &options) {
        Ok(Some(image)) => {
            println!(" - rendered: {}x{}", image.width(), image.height());
            let bytes = png_bytes(&image).expect("PNG encoding failed");
            fs::write(&output_path, bytes).expect("could not write output file");
            println!(" - written: {output_path}");
        }
        Ok(None) => {
            println!(" - no shift data recorded for {year:04}-{month:02}");
        }
        Err(err) => {
            panic!("{err}");
        }
    }
}

const USAGE: &str = "Usage: ./render_month <RECORDS.json> <YEAR> <MONTH> [OUT.png]";
