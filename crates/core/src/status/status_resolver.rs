//! Pure status resolution.
//!
//! Stateless and callable per render: the caller supplies "today" so the
//! engine never reads the clock here and tests stay deterministic.

use chrono::NaiveDate;

use crate::entries::{Entry, EntryKind};

use super::{EntryStatus, StatusCategory};

/// Derives the temporal status of an entry.
///
/// Dates are already day-granular (`NaiveDate`), so no midnight
/// normalization is needed beyond passing a calendar day for `today`.
pub fn resolve_status(entry: &Entry, today: NaiveDate) -> EntryStatus {
    // Investments resolve on their period alone; they have no completion
    // flag.
    if entry.kind == EntryKind::Investment {
        return match entry.secondary_date {
            Some(end) if end < today => EntryStatus::of(StatusCategory::Finished),
            _ => EntryStatus::of(StatusCategory::Active),
        };
    }

    if is_complete(entry) {
        return EntryStatus::of(StatusCategory::Complete);
    }

    match entry.primary_date {
        None => EntryStatus::of(StatusCategory::NoDueDate),
        Some(date) if date == today => EntryStatus::of(StatusCategory::DueToday),
        Some(date) if date < today => EntryStatus::of(StatusCategory::Overdue),
        Some(date) => EntryStatus {
            category: StatusCategory::Upcoming,
            days_until: Some((date - today).num_days()),
        },
    }
}

/// Entry-level flag, or every occurrence of a recurring entry completed.
fn is_complete(entry: &Entry) -> bool {
    if entry.completed {
        return true;
    }
    entry.is_recurring()
        && !entry.occurrences.is_empty()
        && entry.occurrences.iter().all(|o| o.completed)
}

/// Presentation-boundary wording for a resolved status.
pub fn status_label(kind: EntryKind, status: &EntryStatus) -> String {
    match (status.category, kind) {
        (StatusCategory::Complete, EntryKind::Expense) => "Paid".to_string(),
        (StatusCategory::Complete, EntryKind::Income) => "Received".to_string(),
        (StatusCategory::Complete, EntryKind::Investment) => "Complete".to_string(),
        (StatusCategory::DueToday, _) => "Today".to_string(),
        (StatusCategory::Overdue, EntryKind::Expense) => "Overdue".to_string(),
        (StatusCategory::Overdue, _) => "Awaiting receipt".to_string(),
        (StatusCategory::Upcoming, _) => match status.days_until {
            Some(days) => format!("In {} days", days),
            None => "Upcoming".to_string(),
        },
        (StatusCategory::NoDueDate, _) => "No due date".to_string(),
        (StatusCategory::Active, _) => "Active".to_string(),
        (StatusCategory::Finished, _) => "Finished".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entries::{Frequency, Occurrence, Recurrence};
    use chrono::Utc;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn entry(kind: EntryKind, primary: Option<NaiveDate>, completed: bool) -> Entry {
        Entry {
            id: "e1".to_string(),
            kind,
            title: "Rent".to_string(),
            value: dec!(100),
            currency_code: "BRL".to_string(),
            primary_date: primary,
            secondary_date: None,
            created_at: Utc::now(),
            history: Vec::new(),
            recurrence: None,
            occurrences: Vec::new(),
            completed,
            interest_rate: None,
        }
    }

    fn today() -> NaiveDate {
        date(2024, 6, 15)
    }

    #[test]
    fn test_completed_wins_regardless_of_date() {
        for primary in [None, Some(date(2020, 1, 1)), Some(date(2030, 1, 1))] {
            let e = entry(EntryKind::Expense, primary, true);
            assert_eq!(
                resolve_status(&e, today()).category,
                StatusCategory::Complete
            );
        }
    }

    #[test]
    fn test_all_occurrences_completed_is_complete() {
        let mut e = entry(EntryKind::Income, Some(date(2024, 1, 1)), false);
        e.recurrence = Some(Recurrence {
            frequency: Frequency::Monthly,
            count: 2,
        });
        e.occurrences = vec![
            Occurrence {
                date: date(2024, 1, 1),
                completed: true,
            },
            Occurrence {
                date: date(2024, 2, 1),
                completed: true,
            },
        ];
        assert_eq!(
            resolve_status(&e, today()).category,
            StatusCategory::Complete
        );

        e.occurrences[1].completed = false;
        assert_ne!(
            resolve_status(&e, today()).category,
            StatusCategory::Complete
        );
    }

    #[test]
    fn test_yesterday_is_overdue() {
        let e = entry(EntryKind::Expense, Some(date(2024, 6, 14)), false);
        assert_eq!(
            resolve_status(&e, today()).category,
            StatusCategory::Overdue
        );
    }

    #[test]
    fn test_today_and_upcoming() {
        let e = entry(EntryKind::Income, Some(today()), false);
        assert_eq!(
            resolve_status(&e, today()).category,
            StatusCategory::DueToday
        );

        let e = entry(EntryKind::Income, Some(date(2024, 6, 20)), false);
        let status = resolve_status(&e, today());
        assert_eq!(status.category, StatusCategory::Upcoming);
        assert_eq!(status.days_until, Some(5));
    }

    #[test]
    fn test_missing_date_falls_back() {
        let e = entry(EntryKind::Expense, None, false);
        assert_eq!(
            resolve_status(&e, today()).category,
            StatusCategory::NoDueDate
        );
    }

    #[test]
    fn test_investment_period() {
        let mut e = entry(EntryKind::Investment, Some(date(2020, 1, 1)), false);
        e.secondary_date = Some(date(2024, 6, 1));
        assert_eq!(
            resolve_status(&e, today()).category,
            StatusCategory::Finished
        );

        e.secondary_date = Some(date(2030, 1, 1));
        assert_eq!(resolve_status(&e, today()).category, StatusCategory::Active);

        // Completion flag is ignored for investments.
        e.completed = true;
        assert_eq!(resolve_status(&e, today()).category, StatusCategory::Active);
    }

    #[test]
    fn test_labels_vary_by_variant() {
        let complete = EntryStatus::of(StatusCategory::Complete);
        assert_eq!(status_label(EntryKind::Expense, &complete), "Paid");
        assert_eq!(status_label(EntryKind::Income, &complete), "Received");

        let overdue = EntryStatus::of(StatusCategory::Overdue);
        assert_eq!(status_label(EntryKind::Expense, &overdue), "Overdue");
        assert_eq!(status_label(EntryKind::Income, &overdue), "Awaiting receipt");
    }
}
