use chrono::{Datelike, Months, NaiveDate};

pub(crate) fn count_days_in_month(date: NaiveDate) -> u32 {
    let Some(date_next_month) = date.checked_add_months(Months::new(1)) else {
        // December of last supported year
        return 31;
    };

    let first_this_month = date
        .with_day(1)
        .expect("first of the month should always exist");

    let first_next_month = date_next_month
        .with_day(1)
        .expect("first of the month should always exist");

    (first_next_month - first_this_month)
        .num_days()
        .try_into()
        .expect("time not monotonic while comparing dates")
}

#[cfg(test)]
mod test {
    use super::count_days_in_month;
    use crate::date;

    #[test]
    fn test_count_days_in_month() {
        assert_eq!(count_days_in_month(date!("2024-02-10")), 29);
        assert_eq!(count_days_in_month(date!("2025-02-01")), 28);
        assert_eq!(count_days_in_month(date!("2025-01-31")), 31);
        assert_eq!(count_days_in_month(date!("2025-04-15")), 30);
        assert_eq!(count_days_in_month(date!("2025-12-01")), 31);
    }
}
