//! Domain tests for project drafts, palette parsing, and the index.

use crate::form::FormFields;
use crate::project::domain::{
    Color, Icon, Project, ProjectDomainError, ProjectDraft, ProjectId, ProjectIndex,
};
use mockable::DefaultClock;
use rstest::rstest;
use ulid::Ulid;

fn project_named(name: &str) -> Project {
    let draft = ProjectDraft::new(name).expect("valid name");
    Project::new(ProjectId::from_ulid(Ulid::new()), draft, &DefaultClock)
}

#[rstest]
#[case("")]
#[case("   ")]
fn blank_names_are_rejected(#[case] name: &str) {
    assert_eq!(ProjectDraft::new(name), Err(ProjectDomainError::EmptyName));
}

#[test]
fn draft_defaults_to_zinc_and_unknown() {
    let draft = ProjectDraft::new("  Home  ").expect("valid name");

    assert_eq!(draft.name(), "Home");
    assert_eq!(draft.color(), Color::Zinc);
    assert_eq!(draft.icon(), Icon::Unknown);
}

#[rstest]
#[case("teal", Color::Teal)]
#[case("FUCHSIA", Color::Fuchsia)]
#[case(" Rose ", Color::Rose)]
fn colors_parse_case_insensitively(#[case] raw: &str, #[case] expected: Color) {
    assert_eq!(Color::try_from(raw), Ok(expected));
}

#[test]
fn unknown_icon_names_the_value() {
    assert_eq!(
        Icon::try_from("Dragon"),
        Err(ProjectDomainError::UnknownIcon("Dragon".to_owned()))
    );
}

#[test]
fn palette_serializes_as_canonical_names() {
    let json = serde_json::to_string(&(Color::Sky, Icon::Narwhal)).expect("serializes");

    assert_eq!(json, r#"["Sky","Narwhal"]"#);
}

#[test]
fn form_with_only_a_name_uses_defaults() {
    let form = FormFields::new().with("projectName", "Errands").with("color", "");

    let draft = ProjectDraft::from_form(&form).expect("form decodes");

    assert_eq!(draft.name(), "Errands");
    assert_eq!(draft.color(), Color::Zinc);
    assert_eq!(draft.icon(), Icon::Unknown);
}

#[test]
fn form_decodes_color_and_icon() {
    let form = FormFields::new()
        .with("projectName", "Zoo")
        .with("color", "Lime")
        .with("icon", "owl");

    let draft = ProjectDraft::from_form(&form).expect("form decodes");

    assert_eq!(draft.color(), Color::Lime);
    assert_eq!(draft.icon(), Icon::Owl);
}

#[test]
fn form_without_a_name_is_rejected() {
    let form = FormFields::new().with("color", "Red");

    assert_eq!(
        ProjectDraft::from_form(&form),
        Err(ProjectDomainError::EmptyName)
    );
}

#[test]
fn index_resolves_known_and_dangling_references() {
    let work = project_named("Work");
    let work_id = work.id();
    let index: ProjectIndex = [work, project_named("Home")].into_iter().collect();

    assert_eq!(index.len(), 2);
    assert_eq!(
        index.resolve(Some(work_id)).map(Project::name),
        Some("Work")
    );
    assert!(index.resolve(Some(ProjectId::from_ulid(Ulid::new()))).is_none());
    assert!(index.resolve(None).is_none());
}
