//! Google Tasks v1 adapter.
//!
//! Imports from the first task list of the signed-in account, following
//! page tokens until the list is exhausted. Deleted entries are skipped. The
//! remote `position` becomes the rank, so the result sorts like the remote
//! list does.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, warn};

use crate::calendar::{domain::AccessToken, ports::TokenSource};
use crate::task::{
    domain::{ExternalRef, compare_present_first},
    ports::{RemoteTask, TaskSyncError, TaskSyncProvider, TaskSyncResult},
};

/// Public Google Tasks API root.
pub const DEFAULT_TASKS_BASE_URL: &str = "https://tasks.googleapis.com/tasks/v1";

/// Connection settings for the Google Tasks adapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TasksConfig {
    /// API root, overridable for tests and proxies.
    pub base_url: String,
    /// Upper bound on task lists requested when picking the default list.
    pub max_lists: u32,
    /// Tasks requested per page.
    pub page_size: u32,
}

impl Default for TasksConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_TASKS_BASE_URL.to_owned(),
            max_lists: 10,
            page_size: 100,
        }
    }
}

impl TasksConfig {
    /// Sets the API root.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn root(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    fn lists_url(&self) -> String {
        format!("{}/users/@me/lists", self.root())
    }

    fn tasks_url(&self, list_id: &str) -> String {
        format!("{}/lists/{list_id}/tasks", self.root())
    }
}

/// Task sync provider reading from the Google Tasks v1 REST API.
pub struct GoogleTasksProvider<T: TokenSource> {
    client: reqwest::Client,
    config: TasksConfig,
    tokens: Arc<T>,
}

impl<T: TokenSource> GoogleTasksProvider<T> {
    /// Creates a provider with a fresh HTTP client.
    #[must_use]
    pub fn new(config: TasksConfig, tokens: Arc<T>) -> Self {
        Self::with_client(reqwest::Client::new(), config, tokens)
    }

    /// Creates a provider sharing an existing HTTP client.
    #[must_use]
    pub const fn with_client(client: reqwest::Client, config: TasksConfig, tokens: Arc<T>) -> Self {
        Self {
            client,
            config,
            tokens,
        }
    }

    async fn get_json<R: DeserializeOwned>(
        &self,
        url: String,
        token: &AccessToken,
        query: &[(&str, &str)],
    ) -> TaskSyncResult<R> {
        let response = self
            .client
            .get(url)
            .bearer_auth(token.secret())
            .query(query)
            .send()
            .await
            .map_err(TaskSyncError::request)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_else(|err| {
                warn!(
                    status = status.as_u16(),
                    error = %err,
                    "could not read task sync error body"
                );
                String::new()
            });
            warn!(status = status.as_u16(), "task sync provider rejected request");
            return Err(TaskSyncError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await.map_err(TaskSyncError::request)?;
        serde_json::from_slice(&bytes).map_err(TaskSyncError::decode)
    }
}

#[async_trait]
impl<T: TokenSource> TaskSyncProvider for GoogleTasksProvider<T> {
    async fn fetch_tasks(&self) -> TaskSyncResult<Vec<RemoteTask>> {
        let token = self.tokens.refresh().await?;
        let max_lists = self.config.max_lists.to_string();
        let page_size = self.config.page_size.to_string();

        let lists: ListsPage = self
            .get_json(
                self.config.lists_url(),
                &token,
                &[("maxResults", max_lists.as_str())],
            )
            .await?;
        let list = lists
            .items
            .into_iter()
            .next()
            .ok_or(TaskSyncError::NoTaskLists)?;

        let mut remote = Vec::new();
        let mut page_token: Option<String> = None;
        loop {
            let mut query = vec![("maxResults", page_size.as_str())];
            if let Some(next) = page_token.as_deref() {
                query.push(("pageToken", next));
            }
            let page: TasksPage = self
                .get_json(self.config.tasks_url(&list.id), &token, &query)
                .await?;
            remote.extend(page.items.into_iter().filter_map(to_remote_task));
            match page.next_page_token {
                Some(next) => page_token = Some(next),
                None => break,
            }
        }

        remote.sort_by(|a: &RemoteTask, b: &RemoteTask| compare_present_first(a.rank, b.rank));
        debug!(count = remote.len(), list_id = %list.id, "remote tasks fetched");
        Ok(remote)
    }
}

#[derive(Debug, Deserialize)]
struct ListsPage {
    #[serde(default)]
    items: Vec<RemoteList>,
}

#[derive(Debug, Deserialize)]
struct RemoteList {
    id: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TasksPage {
    #[serde(default)]
    items: Vec<RemoteEntry>,
    next_page_token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RemoteEntry {
    id: String,
    title: Option<String>,
    notes: Option<String>,
    status: Option<String>,
    completed: Option<String>,
    position: Option<String>,
    #[serde(default)]
    deleted: bool,
}

fn to_remote_task(entry: RemoteEntry) -> Option<RemoteTask> {
    if entry.deleted {
        return None;
    }
    let external_ref = match ExternalRef::new(entry.id) {
        Ok(reference) => reference,
        Err(err) => {
            warn!(error = %err, "skipping remote task without an identifier");
            return None;
        }
    };

    let mut task = RemoteTask::new(external_ref);
    task.title = entry.title.filter(|title| !title.trim().is_empty());
    task.notes = entry.notes.filter(|notes| !notes.trim().is_empty());
    task.completed = entry.completed.is_some() || entry.status.as_deref() == Some("completed");
    task.rank = entry.position.as_deref().and_then(parse_position);
    Some(task)
}

/// Remote positions are zero-padded decimal strings; values outside `i32`
/// yield no rank.
fn parse_position(raw: &str) -> Option<i32> {
    raw.trim()
        .parse::<u64>()
        .ok()
        .and_then(|position| i32::try_from(position).ok())
}

#[cfg(test)]
mod tests {
    use super::{TasksConfig, TasksPage, parse_position, to_remote_task};
    use rstest::rstest;
    use serde_json::json;

    fn page(items: &serde_json::Value) -> TasksPage {
        serde_json::from_value(json!({ "items": items })).expect("page decodes")
    }

    #[test]
    fn urls_join_base_and_list() {
        let config = TasksConfig::default().with_base_url("http://localhost:9000/");

        assert_eq!(config.lists_url(), "http://localhost:9000/users/@me/lists");
        assert_eq!(
            config.tasks_url("list-1"),
            "http://localhost:9000/lists/list-1/tasks"
        );
    }

    #[rstest]
    #[case("00000000000000000003", Some(3))]
    #[case("42", Some(42))]
    #[case("09999999999999999999", None)]
    #[case("abc", None)]
    fn positions_parse_to_ranks(#[case] raw: &str, #[case] expected: Option<i32>) {
        assert_eq!(parse_position(raw), expected);
    }

    #[test]
    fn entries_map_notes_completion_and_rank() {
        let decoded = page(&json!([
            {
                "id": "t-1",
                "title": "Buy stamps",
                "notes": "Post office",
                "status": "completed",
                "completed": "2025-04-06T10:00:00.000Z",
                "position": "00000000000000000001"
            },
            { "id": "t-2", "title": "", "status": "needsAction" },
            { "id": "t-3", "title": "Gone", "deleted": true }
        ]));

        let tasks: Vec<_> = decoded.items.into_iter().filter_map(to_remote_task).collect();

        let [stamps, untitled] = tasks.as_slice() else {
            panic!("expected two tasks, got {tasks:?}");
        };
        assert_eq!(stamps.external_ref.as_str(), "t-1");
        assert_eq!(stamps.title.as_deref(), Some("Buy stamps"));
        assert_eq!(stamps.notes.as_deref(), Some("Post office"));
        assert!(stamps.completed);
        assert_eq!(stamps.rank, Some(1));
        assert_eq!(untitled.title, None);
        assert!(!untitled.completed);
        assert_eq!(untitled.rank, None);
    }
}
