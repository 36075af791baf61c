//! In-memory integration tests for projects and their task references.

use dayplan::form::FormFields;
use dayplan::project::domain::{Color, Icon, ProjectDraft};
use dayplan::task::domain::TaskDetails;
use rstest::rstest;

use crate::in_memory::helpers::{Workspace, workspace};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn project_form_round_trips_through_the_service(workspace: Workspace) -> eyre::Result<()> {
    let form = FormFields::new()
        .with("projectName", "Garden")
        .with("color", "emerald")
        .with("icon", "Snail");

    let created = workspace
        .projects
        .add_project(ProjectDraft::from_form(&form)?)
        .await?;
    let index = workspace.projects.list_projects().await?;

    let stored = index
        .get(created.id())
        .ok_or_else(|| eyre::eyre!("project missing from index"))?;
    eyre::ensure!(stored.color() == Color::Emerald, "color not stored");
    eyre::ensure!(stored.icon() == Icon::Snail, "icon not stored");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleting_a_project_keeps_its_tasks(workspace: Workspace) -> eyre::Result<()> {
    let project = workspace
        .projects
        .add_project(ProjectDraft::new("Short lived")?)
        .await?;
    let task = workspace
        .tasks
        .add_task(
            TaskDetails::new()
                .with_title("Survivor")
                .with_project(project.id()),
        )
        .await?;

    workspace.projects.delete_project(project.id()).await?;
    let fetched = workspace.tasks.get_task(task.id()).await?;
    let index = workspace.projects.list_projects().await?;

    eyre::ensure!(fetched.project_id() == Some(project.id()), "reference kept");
    eyre::ensure!(
        index.resolve(fetched.project_id()).is_none(),
        "dangling reference should resolve to no project"
    );
    Ok(())
}
