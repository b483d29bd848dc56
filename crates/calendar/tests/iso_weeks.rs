use chrono::{Datelike, NaiveDate};
use stride_calendar::{WeekRef, iso_week_number, max_week_in_year, monday_of_week1};

#[test]
fn matches_chrono_for_every_day_1990_to_2100() {
    let mut date = NaiveDate::from_ymd_opt(1990, 1, 1).unwrap();
    let last = NaiveDate::from_ymd_opt(2100, 12, 31).unwrap();
    while date <= last {
        let expected = date.iso_week();
        assert_eq!(
            iso_week_number(date),
            expected.week(),
            "week mismatch for {date}"
        );
        let week_ref = WeekRef::containing(date);
        assert_eq!(week_ref.year(), expected.year(), "year mismatch for {date}");
        date = date.succ_opt().unwrap();
    }
}

#[test]
fn max_week_is_52_or_53() {
    for year in 1900..=2200 {
        let max = max_week_in_year(year).unwrap();
        assert!(max == 52 || max == 53, "year {year}: max week {max}");
    }
}

#[test]
fn max_week_matches_chrono_dec_28() {
    for year in 1900..=2200 {
        let dec28 = NaiveDate::from_ymd_opt(year, 12, 28).unwrap();
        assert_eq!(
            max_week_in_year(year).unwrap(),
            dec28.iso_week().week(),
            "year {year}"
        );
    }
}

#[test]
fn dec_31_within_bounds() {
    for year in 1900..=2200 {
        let dec31 = NaiveDate::from_ymd_opt(year, 12, 31).unwrap();
        let week = iso_week_number(dec31);
        let max = max_week_in_year(year).unwrap();
        assert!(
            (1..=max).contains(&week),
            "year {year}: Dec 31 in week {week}, max {max}"
        );
    }
}

#[test]
fn monday_of_week1_is_monday_in_week_1() {
    for year in 1900..=2200 {
        let monday = monday_of_week1(year).unwrap();
        assert_eq!(monday.weekday(), chrono::Weekday::Mon, "year {year}");
        assert_eq!(iso_week_number(monday), 1, "year {year}");
        let iso = monday.iso_week();
        assert_eq!(iso.year(), year, "year {year}");
        // Week 1 starts between Dec 29 of the previous year and Jan 4.
        let earliest = NaiveDate::from_ymd_opt(year - 1, 12, 29).unwrap();
        let latest = NaiveDate::from_ymd_opt(year, 1, 4).unwrap();
        assert!(
            (earliest..=latest).contains(&monday),
            "year {year}: monday {monday}"
        );
    }
}
