//! Random task details for seeding demos and local databases.

use crate::task::domain::{TaskDetails, TaskDomainError};
use chrono::{DateTime, TimeDelta, Utc};
use rand::Rng;
use rand::seq::SliceRandom;

/// Fewest tasks a single seeding call produces.
pub const MIN_SEED_TASKS: usize = 1;
/// Most tasks a single seeding call produces.
pub const MAX_SEED_TASKS: usize = 50;

const TITLES: &[&str] = &[
    "Write code",
    "Read documentation",
    "Attend meeting",
    "Fix bug",
    "Test features",
    "Plan project",
    "Refactor code",
    "Deploy application",
    "Learn new technology",
    "Debug issue",
    "Review code",
];

const FILLER: &[&str] = &[
    "lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing", "elit", "sed", "do",
    "eiusmod", "tempor", "incididunt", "ut", "labore", "et", "dolore", "magna", "aliqua",
];

/// Generates `count` random task details.
///
/// Roughly one in five tasks is scheduled at some point in the week before
/// `now`; the rest land in the backlog. Durations are multiples of 15
/// minutes up to an hour.
///
/// # Errors
///
/// Returns [`TaskDomainError::CountOutOfRange`] unless `count` is within
/// [`MIN_SEED_TASKS`]`..=`[`MAX_SEED_TASKS`].
pub fn generate_random_tasks(
    count: usize,
    now: DateTime<Utc>,
    rng: &mut impl Rng,
) -> Result<Vec<TaskDetails>, TaskDomainError> {
    if !(MIN_SEED_TASKS..=MAX_SEED_TASKS).contains(&count) {
        return Err(TaskDomainError::CountOutOfRange {
            count,
            min: MIN_SEED_TASKS,
            max: MAX_SEED_TASKS,
        });
    }
    Ok((0..count)
        .map(|_| generate_random_task(now, rng))
        .collect())
}

/// Generates one random task.
pub fn generate_random_task(now: DateTime<Utc>, rng: &mut impl Rng) -> TaskDetails {
    let title = TITLES.choose(rng).copied().unwrap_or("Untitled");
    let word_count = rng.gen_range(5..25);
    let description = (0..word_count)
        .filter_map(|_| FILLER.choose(rng).copied())
        .collect::<Vec<_>>()
        .join(" ");

    let mut details = TaskDetails::new()
        .with_title(title)
        .with_description(description)
        .with_duration(rng.gen_range(0..=4) * 15)
        .with_completed(rng.gen_ratio(1, 3));

    if rng.gen_ratio(1, 5) {
        let hours_ago = rng.gen_range(0..7 * 24);
        details = details.with_start_time(now - TimeDelta::hours(hours_ago));
    }
    details
}
