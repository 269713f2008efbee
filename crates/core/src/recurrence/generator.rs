//! Occurrence generation.
//!
//! Expands a recurring entry into its ordered occurrence list. All
//! arithmetic is pure calendar math; the function never suspends and
//! never fails - invalid input degrades to a capped, possibly empty list.

use chrono::{Datelike, Duration, NaiveDate};

use crate::constants::OCCURRENCE_SAFETY_CAP;
use crate::entries::{Frequency, Occurrence};

/// Generates the occurrence list for a recurring entry.
///
/// The first occurrence is always `start`. Generation stops when `count`
/// occurrences were emitted (`count > 0`), when the next candidate would
/// pass `hard_end` (`count == 0` with an end date), or at the safety cap.
///
/// Monthly and yearly steps use overflowing calendar arithmetic: the day
/// of month is kept by counting forward from the first of the target
/// month, so Jan 31 + 1 month lands on Mar 2 in a leap year (Mar 3
/// otherwise) rather than being clamped to the end of February.
pub fn generate_occurrences(
    start: NaiveDate,
    frequency: Frequency,
    count: u32,
    hard_end: Option<NaiveDate>,
) -> Vec<Occurrence> {
    let bounded = count > 0;
    // The cap only bounds the unbounded case; an explicit count wins so
    // that the occurrence list length always matches it.
    let limit = if bounded {
        count as usize
    } else {
        OCCURRENCE_SAFETY_CAP
    };

    let mut occurrences = Vec::with_capacity(limit.min(32));
    let mut current = start;

    while occurrences.len() < limit {
        if !bounded {
            if let Some(end) = hard_end {
                if current > end {
                    break;
                }
            }
        }

        occurrences.push(Occurrence {
            date: current,
            completed: false,
        });

        current = step(current, frequency);
    }

    occurrences
}

/// Advances a date by one frequency step.
///
/// `Unknown` does not advance; the caller's cap bounds the loop.
fn step(date: NaiveDate, frequency: Frequency) -> NaiveDate {
    match frequency {
        Frequency::Daily => date + Duration::days(1),
        Frequency::Weekly => date + Duration::days(7),
        Frequency::Monthly => add_months_overflowing(date, 1),
        Frequency::Yearly => add_years_overflowing(date, 1),
        Frequency::Unknown => date,
    }
}

/// `first day of the target month + (day - 1)` - the overflow falls into
/// the following month instead of clamping.
fn add_months_overflowing(date: NaiveDate, months: u32) -> NaiveDate {
    let zero_based = date.year() * 12 + date.month0() as i32 + months as i32;
    let year = zero_based.div_euclid(12);
    let month0 = zero_based.rem_euclid(12) as u32;

    match NaiveDate::from_ymd_opt(year, month0 + 1, 1) {
        Some(first) => first + Duration::days(date.day() as i64 - 1),
        // Out of chrono's representable range; stop advancing.
        None => date,
    }
}

fn add_years_overflowing(date: NaiveDate, years: i32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(date.year() + years, date.month(), 1) {
        Some(first) => first + Duration::days(date.day() as i64 - 1),
        None => date,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_first_occurrence_is_start() {
        for frequency in [
            Frequency::Daily,
            Frequency::Weekly,
            Frequency::Monthly,
            Frequency::Yearly,
        ] {
            let list = generate_occurrences(date(2024, 5, 10), frequency, 4, None);
            assert_eq!(list.len(), 4);
            assert_eq!(list[0].date, date(2024, 5, 10));
            assert!(list.iter().all(|o| !o.completed));
            assert!(list.windows(2).all(|w| w[0].date < w[1].date));
        }
    }

    #[test]
    fn test_single_occurrence() {
        let list = generate_occurrences(date(2024, 2, 29), Frequency::Monthly, 1, None);
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].date, date(2024, 2, 29));
    }

    #[test]
    fn test_weekly_step() {
        let list = generate_occurrences(date(2024, 1, 1), Frequency::Weekly, 3, None);
        let dates: Vec<_> = list.iter().map(|o| o.date).collect();
        assert_eq!(
            dates,
            vec![date(2024, 1, 1), date(2024, 1, 8), date(2024, 1, 15)]
        );
    }

    #[test]
    fn test_monthly_rollover_from_jan_31() {
        // 2024 is a leap year: Jan 31 -> "Feb 31" overflows to Mar 2,
        // then Mar 2 -> Apr 2.
        let list = generate_occurrences(date(2024, 1, 31), Frequency::Monthly, 3, None);
        let dates: Vec<_> = list.iter().map(|o| o.date).collect();
        assert_eq!(
            dates,
            vec![date(2024, 1, 31), date(2024, 3, 2), date(2024, 4, 2)]
        );
    }

    #[test]
    fn test_monthly_rollover_non_leap() {
        // Non-leap February: Jan 31 -> Mar 3.
        let list = generate_occurrences(date(2023, 1, 31), Frequency::Monthly, 2, None);
        assert_eq!(list[1].date, date(2023, 3, 3));
    }

    #[test]
    fn test_yearly_from_leap_day() {
        // Feb 29 + 1 year overflows into Mar 1.
        let list = generate_occurrences(date(2024, 2, 29), Frequency::Yearly, 2, None);
        assert_eq!(list[1].date, date(2025, 3, 1));
    }

    #[test]
    fn test_unbounded_with_hard_end() {
        let end = date(2024, 1, 20);
        let list = generate_occurrences(date(2024, 1, 1), Frequency::Weekly, 0, Some(end));
        let last = list.last().unwrap().date;
        assert!(last <= end);
        assert!(step(last, Frequency::Weekly) > end);
        assert_eq!(list.len(), 3); // Jan 1, 8, 15
    }

    #[test]
    fn test_unbounded_without_end_hits_cap() {
        let list = generate_occurrences(date(2024, 1, 1), Frequency::Daily, 0, None);
        assert_eq!(list.len(), OCCURRENCE_SAFETY_CAP);
    }

    #[test]
    fn test_unknown_frequency_terminates() {
        let list = generate_occurrences(date(2024, 1, 1), Frequency::Unknown, 0, Some(date(2030, 1, 1)));
        assert_eq!(list.len(), OCCURRENCE_SAFETY_CAP);
        assert!(list.iter().all(|o| o.date == date(2024, 1, 1)));
    }

    #[test]
    fn test_explicit_count_wins_over_cap() {
        let list = generate_occurrences(date(2024, 1, 1), Frequency::Daily, 400, None);
        assert_eq!(list.len(), 400);
    }
}
