//! Orderings for the backlog and for a scheduled day.
//!
//! Absent optional values form their own class and always sort after every
//! present value, including a present zero. Both sorts are stable: items
//! that tie on every key keep their input order.

use super::Task;
use chrono::{DateTime, Utc};
use std::cmp::Ordering;

/// Anything that can be placed on a day's timeline.
pub trait Schedulable {
    /// Scheduled start, if any.
    fn start_time(&self) -> Option<DateTime<Utc>>;
    /// Manual ordering tiebreak, if any.
    fn rank(&self) -> Option<i32>;
    /// Length in minutes, if any.
    fn duration_minutes(&self) -> Option<i32>;
}

impl Schedulable for Task {
    fn start_time(&self) -> Option<DateTime<Utc>> {
        Self::start_time(self)
    }

    fn rank(&self) -> Option<i32> {
        Self::rank(self)
    }

    fn duration_minutes(&self) -> Option<i32> {
        Self::duration_minutes(self)
    }
}

/// Compares two optional keys with absent values last.
#[must_use]
pub fn compare_present_first<T: Ord>(a: Option<T>, b: Option<T>) -> Ordering {
    match (a, b) {
        (Some(left), Some(right)) => left.cmp(&right),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Day ordering: start time, then rank, then duration.
#[must_use]
pub fn compare_scheduled<A, B>(a: &A, b: &B) -> Ordering
where
    A: Schedulable + ?Sized,
    B: Schedulable + ?Sized,
{
    compare_present_first(a.start_time(), b.start_time())
        .then_with(|| compare_present_first(a.rank(), b.rank()))
        .then_with(|| compare_present_first(a.duration_minutes(), b.duration_minutes()))
}

/// Backlog ordering: rank, then last modification.
#[must_use]
pub fn compare_backlog(a: &Task, b: &Task) -> Ordering {
    compare_present_first(a.rank(), b.rank()).then_with(|| a.updated_at().cmp(&b.updated_at()))
}

/// Sorts items into day order, keeping the input order of full ties.
pub fn sort_scheduled<T: Schedulable>(items: &mut [T]) {
    items.sort_by(compare_scheduled);
}

/// Sorts tasks into backlog order, keeping the input order of full ties.
pub fn sort_backlog(tasks: &mut [Task]) {
    tasks.sort_by(compare_backlog);
}
