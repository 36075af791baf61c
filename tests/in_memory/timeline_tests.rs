//! End-to-end timeline assembly over in-memory adapters.

use dayplan::calendar::domain::{Event, EventId};
use dayplan::project::domain::ProjectDraft;
use dayplan::task::domain::TaskDetails;
use dayplan::timeline::domain::{TimelineItem, TimelinePosition};
use rstest::rstest;

use crate::in_memory::helpers::{Workspace, planning_day, utc, workspace};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn planned_day_merges_tasks_and_events(workspace: Workspace) -> eyre::Result<()> {
    let project = workspace
        .projects
        .add_project(ProjectDraft::new("Work")?)
        .await?;
    let spec = workspace
        .tasks
        .add_task(
            TaskDetails::new()
                .with_title("Write spec")
                .with_duration(30)
                .with_project(project.id()),
        )
        .await?;
    workspace
        .tasks
        .schedule_task(spec.id(), Some(utc(2025, 4, 7, 9, 30)))
        .await?;
    workspace
        .tasks
        .add_task(TaskDetails::new().with_title("Unscheduled idea"))
        .await?;
    workspace.calendar.push(Event::new(
        EventId::new("standup")?,
        utc(2025, 4, 7, 9, 0),
        TaskDetails::new().with_title("Standup").with_duration(15),
    ))?;
    workspace.calendar.push(Event::new(
        EventId::new("next-week")?,
        utc(2025, 4, 14, 9, 0),
        TaskDetails::new().with_title("Next week"),
    ))?;

    let timeline = workspace.timelines.todays_timeline().await?;

    eyre::ensure!(timeline.date() == planning_day(), "wrong day");
    let [standup, written] = timeline.entries() else {
        eyre::bail!("expected two entries, got {}", timeline.len());
    };
    eyre::ensure!(
        matches!(standup.item, TimelineItem::Event(_)),
        "standup should come first"
    );
    eyre::ensure!(
        standup.position == TimelinePosition { slot: 13, size: 1 },
        "standup position"
    );
    eyre::ensure!(
        written.position == TimelinePosition { slot: 15, size: 2 },
        "spec position"
    );
    eyre::ensure!(
        written.project.as_ref().map(|found| found.name()) == Some("Work"),
        "spec should carry its project"
    );
    eyre::ensure!(workspace.calendar.fetch_count() == 1, "calendar fetched once");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unscheduled_task_leaves_every_timeline(workspace: Workspace) -> eyre::Result<()> {
    let task = workspace
        .tasks
        .add_task(
            TaskDetails::new()
                .with_title("Maybe later")
                .with_start_time(utc(2025, 4, 7, 15, 0)),
        )
        .await?;
    let before = workspace.timelines.timeline_for(planning_day()).await?;

    workspace.tasks.schedule_task(task.id(), None).await?;
    let after = workspace.timelines.timeline_for(planning_day()).await?;

    eyre::ensure!(before.len() == 1, "task should start on the timeline");
    eyre::ensure!(after.is_empty(), "task should leave the timeline");
    Ok(())
}
