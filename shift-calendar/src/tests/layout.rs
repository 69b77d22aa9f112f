use crate::layout::{plan, CELL_HEIGHT, CELL_WIDTH, HEADER_HEIGHT, PADDING, WEEKDAY_ROW_HEIGHT};

#[test]
fn test_row_count_follows_first_weekday_and_length() {
    // February 2015: 28 days starting on a Sunday, the only 4-row shape.
    let geometry = plan(2015, 2, 0).unwrap();
    assert_eq!((geometry.first_weekday, geometry.rows), (0, 4));

    // January 2025: 31 days starting on a Wednesday.
    let geometry = plan(2025, 1, 0).unwrap();
    assert_eq!((geometry.first_weekday, geometry.rows), (3, 5));

    // March 2025: 31 days starting on a Saturday spill into a 6th row.
    let geometry = plan(2025, 3, 0).unwrap();
    assert_eq!((geometry.first_weekday, geometry.rows), (6, 6));
}

#[test]
fn test_day_positions() {
    // February 2024 starts on a Thursday (rebased weekday 4).
    let geometry = plan(2024, 2, 0).unwrap();

    assert_eq!(geometry.position(1), (0, 4));
    assert_eq!(geometry.position(3), (0, 6));
    assert_eq!(geometry.position(4), (1, 0));
    assert_eq!(geometry.position(29), (4, 4));
}

#[test]
fn test_legend_height_steps_at_multiples_of_five() {
    let legend_height = |staff| plan(2024, 2, staff).unwrap().legend_height;

    // Up to five names fit the minimum band.
    assert_eq!(legend_height(0), 60);
    assert_eq!(legend_height(1), 60);
    assert_eq!(legend_height(5), 60);

    // Each crossed multiple of five adds one row-equivalent.
    assert_eq!(legend_height(6), 86);
    assert_eq!(legend_height(10), 86);
    assert_eq!(legend_height(11), 114);
    assert_eq!(legend_height(16), 142);
}

#[test]
fn test_image_dimensions() {
    let geometry = plan(2024, 2, 9).unwrap();

    assert_eq!(geometry.width, 7 * CELL_WIDTH + 2 * PADDING);
    assert_eq!(
        geometry.height,
        HEADER_HEIGHT
            + WEEKDAY_ROW_HEIGHT
            + geometry.rows * CELL_HEIGHT
            + geometry.legend_height
            + 2 * PADDING,
    );
}

#[test]
fn test_rejects_months_that_do_not_exist() {
    assert!(plan(2024, 0, 0).is_err());
    assert!(plan(2024, 13, 0).is_err());

    let err = plan(2024, 13, 0).unwrap_err();
    assert_eq!(err.to_string(), "no such month: 2024-13");
}
