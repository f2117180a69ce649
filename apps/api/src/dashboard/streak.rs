use chrono::NaiveDate;
use serde::Serialize;
use tracing::warn;

use crate::storage::{LocalStore, StorageError, STREAK_COUNT_KEY, STREAK_LAST_DAY_KEY};

/// Consecutive days with at least one visit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Streak {
    pub days: u32,
    pub last_day: Option<NaiveDate>,
}

impl Streak {
    /// The streak after a visit on `today`: unchanged on the same day, one
    /// longer the day after, restarted at 1 after a gap or on the first visit.
    pub fn advance(self, today: NaiveDate) -> Self {
        let days = match self.last_day {
            Some(last) if last == today => return self,
            Some(last) if last.succ_opt() == Some(today) => self.days + 1,
            _ => 1,
        };
        Self {
            days,
            last_day: Some(today),
        }
    }
}

pub fn load(store: &dyn LocalStore) -> Streak {
    let read = || -> Result<Streak, StorageError> {
        let days = store
            .get(STREAK_COUNT_KEY)?
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(0);
        let last_day = store
            .get(STREAK_LAST_DAY_KEY)?
            .and_then(|v| NaiveDate::parse_from_str(v.trim(), "%Y-%m-%d").ok());
        Ok(Streak { days, last_day })
    };
    read().unwrap_or_else(|e| {
        warn!("Could not read visit streak: {e}");
        Streak::default()
    })
}

/// Advances and stores the streak. Returns the new streak even when the
/// write fails, together with the error.
pub fn record_visit(store: &dyn LocalStore, today: NaiveDate) -> (Streak, Option<StorageError>) {
    let previous = load(store);
    let next = previous.advance(today);
    if next == previous {
        return (next, None);
    }
    let write = store
        .set(STREAK_COUNT_KEY, &next.days.to_string())
        .and_then(|()| store.set(STREAK_LAST_DAY_KEY, &today.format("%Y-%m-%d").to_string()));
    match write {
        Ok(()) => (next, None),
        Err(e) => {
            warn!("Visit streak not persisted: {e}");
            (next, Some(e))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 2, d).unwrap()
    }

    #[test]
    fn test_first_visit_starts_at_one() {
        assert_eq!(Streak::default().advance(day(3)).days, 1);
    }

    #[test]
    fn test_consecutive_days_extend() {
        let s = Streak::default().advance(day(3)).advance(day(4)).advance(day(5));
        assert_eq!(s.days, 3);
        assert_eq!(s.last_day, Some(day(5)));
    }

    #[test]
    fn test_same_day_is_unchanged() {
        let s = Streak::default().advance(day(3)).advance(day(4));
        assert_eq!(s.advance(day(4)), s);
    }

    #[test]
    fn test_gap_restarts() {
        let s = Streak::default().advance(day(3)).advance(day(4)).advance(day(9));
        assert_eq!(s.days, 1);
    }

    #[test]
    fn test_record_visit_persists() {
        let store = MemoryStore::new();
        record_visit(&store, day(10));
        let (streak, err) = record_visit(&store, day(11));
        assert!(err.is_none());
        assert_eq!(streak.days, 2);
        assert_eq!(load(&store), streak);
        assert_eq!(
            store.get(STREAK_LAST_DAY_KEY).unwrap().as_deref(),
            Some("2026-02-11")
        );
    }

    #[test]
    fn test_record_visit_reports_write_failure() {
        let store = MemoryStore::unavailable();
        let (streak, err) = record_visit(&store, day(10));
        assert_eq!(streak.days, 1);
        assert!(matches!(err, Some(StorageError::Unavailable)));
    }
}
