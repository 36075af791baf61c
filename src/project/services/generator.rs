//! Random projects for seeding demos and local databases.

use crate::project::domain::{Color, Icon, ProjectDomainError, ProjectDraft};
use rand::Rng;
use rand::seq::SliceRandom;

/// Fewest projects a single seeding call produces.
pub const MIN_SEED_PROJECTS: usize = 1;
/// Most projects a single seeding call produces.
pub const MAX_SEED_PROJECTS: usize = 5;

const NAMES: &[&str] = &[
    "Work", "Home", "Garden", "Reading", "Fitness", "Errands", "Music", "Travel",
];

/// Generates `count` random project drafts.
///
/// # Errors
///
/// Returns [`ProjectDomainError::CountOutOfRange`] unless `count` is within
/// [`MIN_SEED_PROJECTS`]`..=`[`MAX_SEED_PROJECTS`].
pub fn generate_random_projects(
    count: usize,
    rng: &mut impl Rng,
) -> Result<Vec<ProjectDraft>, ProjectDomainError> {
    if !(MIN_SEED_PROJECTS..=MAX_SEED_PROJECTS).contains(&count) {
        return Err(ProjectDomainError::CountOutOfRange {
            count,
            min: MIN_SEED_PROJECTS,
            max: MAX_SEED_PROJECTS,
        });
    }
    (0..count).map(|_| generate_random_project(rng)).collect()
}

/// Generates one random project draft.
///
/// # Errors
///
/// Never fails for the built-in name list; the result type mirrors
/// [`ProjectDraft::new`].
pub fn generate_random_project(rng: &mut impl Rng) -> Result<ProjectDraft, ProjectDomainError> {
    let name = NAMES.choose(rng).copied().unwrap_or("Project");
    let color = Color::ALL.choose(rng).copied().unwrap_or_default();
    let icon = Icon::ALL.choose(rng).copied().unwrap_or_default();
    Ok(ProjectDraft::new(name)?.with_color(color).with_icon(icon))
}

#[cfg(test)]
mod tests {
    use super::{MAX_SEED_PROJECTS, generate_random_projects};
    use crate::project::domain::ProjectDomainError;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rstest::rstest;

    #[rstest]
    #[case(0)]
    #[case(6)]
    fn out_of_range_counts_are_rejected(#[case] count: usize) {
        let mut rng = StdRng::seed_from_u64(11);

        let result = generate_random_projects(count, &mut rng);

        assert!(matches!(
            result,
            Err(ProjectDomainError::CountOutOfRange { count: got, .. }) if got == count
        ));
    }

    #[rstest]
    #[case(1)]
    #[case(MAX_SEED_PROJECTS)]
    fn in_range_counts_produce_named_drafts(#[case] count: usize) {
        let mut rng = StdRng::seed_from_u64(5);

        let drafts = generate_random_projects(count, &mut rng).expect("count is in range");

        assert_eq!(drafts.len(), count);
        assert!(drafts.iter().all(|draft| !draft.name().is_empty()));
    }
}
