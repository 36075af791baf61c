//! In-memory integration tests for task lifecycle operations.

use chrono::TimeDelta;
use dayplan::form::FormFields;
use dayplan::task::{
    domain::{TaskDetails, TaskPatch},
    services::TaskLifecycleError,
};
use rstest::rstest;

use crate::in_memory::helpers::{Workspace, planning_day, utc, workspace};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn form_submissions_create_and_patch_tasks(workspace: Workspace) -> eyre::Result<()> {
    let created_form = FormFields::new()
        .with("title", "Write spec")
        .with("description", "First draft")
        .with("duration", "30");
    let created = workspace
        .tasks
        .add_task(TaskDetails::from_form(&created_form)?)
        .await?;

    let edit_form = FormFields::new()
        .with("title", "Write full spec")
        .with("startTime", "2025-04-07T09:30:00Z");
    let edited = workspace
        .tasks
        .update_task(created.id(), TaskPatch::from_form(&edit_form)?)
        .await?;

    eyre::ensure!(edited.title() == Some("Write full spec"), "title not updated");
    eyre::ensure!(
        edited.details().description.as_deref() == Some("First draft"),
        "description should be untouched"
    );
    eyre::ensure!(edited.duration_minutes() == Some(30), "duration should be untouched");
    eyre::ensure!(
        edited.start_time() == Some(utc(2025, 4, 7, 9, 30)),
        "start time not applied"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn blank_form_field_clears_a_value(workspace: Workspace) -> eyre::Result<()> {
    let created = workspace
        .tasks
        .add_task(
            TaskDetails::new()
                .with_title("Scheduled")
                .with_start_time(utc(2025, 4, 7, 13, 0)),
        )
        .await?;

    let cleared = workspace
        .tasks
        .update_task(
            created.id(),
            TaskPatch::from_form(&FormFields::new().with("startTime", ""))?,
        )
        .await?;

    eyre::ensure!(cleared.is_backlog(), "blank start time should unschedule");
    let backlog = workspace.tasks.get_backlog_tasks().await?;
    eyre::ensure!(backlog.len() == 1, "task should be back in the backlog");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn day_queries_only_see_their_day(workspace: Workspace) -> eyre::Result<()> {
    for (title, day, hour) in [("late yesterday", 6, 23), ("early today", 7, 0)] {
        workspace
            .tasks
            .add_task(
                TaskDetails::new()
                    .with_title(title)
                    .with_start_time(utc(2025, 4, day, hour, 30)),
            )
            .await?;
    }

    let today = workspace
        .tasks
        .get_tasks_scheduled_on_date(planning_day())
        .await?;

    let titles: Vec<_> = today.iter().filter_map(|task| task.title()).collect();
    eyre::ensure!(titles == ["early today"], "unexpected day contents: {titles:?}");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn toggles_stamp_the_update_time(workspace: Workspace) -> eyre::Result<()> {
    let created = workspace
        .tasks
        .add_task(TaskDetails::new().with_title("Check"))
        .await?;
    workspace.clock.advance(TimeDelta::minutes(10));

    let completed = workspace.tasks.complete_toggle(created.id()).await?;
    let hidden = workspace.tasks.hidden_toggle(created.id()).await?;

    eyre::ensure!(completed.is_completed(), "task should be completed");
    eyre::ensure!(hidden.is_completed() && hidden.is_hidden(), "flags are independent");
    eyre::ensure!(
        hidden.updated_at() == created.updated_at() + TimeDelta::minutes(10),
        "toggle should stamp updated_at"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleting_twice_reports_not_found(workspace: Workspace) -> eyre::Result<()> {
    let created = workspace
        .tasks
        .add_task(TaskDetails::new().with_title("Once"))
        .await?;

    workspace.tasks.delete_task(created.id()).await?;
    let second = workspace.tasks.delete_task(created.id()).await;

    eyre::ensure!(
        matches!(second, Err(TaskLifecycleError::NotFound(id)) if id == created.id()),
        "second delete should be NotFound, got {second:?}"
    );
    Ok(())
}
