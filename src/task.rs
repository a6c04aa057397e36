//! Task identity, sidecar model and the lifecycle operations.
//!
//! A task is a directory copied from the template, carrying two sidecar
//! files next to its payload: `.config` (JSON metadata, at minimum
//! `Task-Name` and `Task-Id`) and `.tags` (newline-delimited free text).
//! The operations here are plain functions over a [`Store`] so they can be
//! exercised against a temporary root without going through the CLI.

use std::fs;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::error::TaskError;
use crate::store::{self, Store};

/// Metadata sidecar file name, inside each task directory.
pub const CONFIG_FILE: &str = ".config";
/// Tags sidecar file name, inside each task directory.
pub const TAGS_FILE: &str = ".tags";

/// The two keys every task's metadata document is guaranteed to carry.
/// Further keys may be added by external tools; this core only writes these.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskMeta {
    #[serde(rename = "Task-Name")]
    pub name: String,
    #[serde(rename = "Task-Id")]
    pub id: String,
}

/// Fresh opaque task id: 32 lowercase hex characters, assigned once.
pub fn new_task_id() -> String {
    Uuid::new_v4().simple().to_string()
}

/// Reject names that can't serve as a single path segment.
fn validate_name(name: &str) -> Result<(), TaskError> {
    if name.is_empty()
        || name == "."
        || name == ".."
        || name.contains('/')
        || name.contains('\\')
    {
        return Err(TaskError::InvalidName(name.to_string()));
    }
    Ok(())
}

/// Materialise a new task from the template and stamp its identity.
///
/// Fails with `Conflict` before touching the filesystem when an ongoing
/// task of the same name exists. A copy failure may leave a partial
/// directory behind; it is left in place for manual inspection since there
/// is no transaction log.
pub fn create(store: &Store, name: &str) -> Result<String, TaskError> {
    validate_name(name)?;

    let dst = store.ongoing_path(name);
    if dst.exists() {
        return Err(TaskError::Conflict(name.to_string()));
    }

    store::copy_tree(&store.template, &dst)?;

    let meta = TaskMeta {
        name: name.to_string(),
        id: new_task_id(),
    };
    let doc = serde_json::to_string_pretty(&meta).map_err(std::io::Error::other)?;
    fs::write(dst.join(CONFIG_FILE), format!("{doc}\n"))?;
    store::append_line(&dst.join(TAGS_FILE), name)?;

    Ok(meta.id)
}

/// Render one ongoing task: each metadata pair as a `key: value` line in
/// the document's stored order, then a trailing `Tags:` line.
pub fn report(store: &Store, name: &str) -> Result<String, TaskError> {
    validate_name(name)?;

    let dir = store.ongoing_path(name);
    let config = dir.join(CONFIG_FILE);
    if !config.exists() {
        return Err(TaskError::NotFound(name.to_string()));
    }

    let raw = fs::read_to_string(&config)?;
    let doc: Map<String, Value> =
        serde_json::from_str(&raw).map_err(|e| TaskError::Corrupt {
            name: name.to_string(),
            detail: format!("unparsable {CONFIG_FILE}: {e}"),
        })?;

    let mut lines: Vec<String> = doc
        .iter()
        .map(|(k, v)| match v {
            Value::String(s) => format!("{k}: {s}"),
            other => format!("{k}: {other}"),
        })
        .collect();

    // A task without a tags file just has no tags yet.
    let tags_path = dir.join(TAGS_FILE);
    let tags: Vec<String> = if tags_path.exists() {
        let bytes = fs::read(&tags_path).map_err(|e| TaskError::Corrupt {
            name: name.to_string(),
            detail: format!("unreadable {TAGS_FILE}: {e}"),
        })?;
        let text = String::from_utf8(bytes).map_err(|_| TaskError::Corrupt {
            name: name.to_string(),
            detail: format!("{TAGS_FILE} is not valid UTF-8"),
        })?;
        text.lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(str::to_string)
            .collect()
    } else {
        Vec::new()
    };
    lines.push(format!("Tags: {}", tags.join(", ")));

    Ok(lines.join("\n"))
}

/// Render every ongoing task, in directory-listing order.
pub fn report_all(store: &Store) -> Result<Vec<String>, TaskError> {
    let mut out = Vec::new();
    for name in store.list_ongoing()? {
        out.push(report(store, &name)?);
    }
    Ok(out)
}

/// Relocate a task from `ongoing/` to `done/`, contents and sidecars
/// unchanged. Refuses to overwrite an existing completed task of the same
/// name rather than merge directories.
pub fn complete(store: &Store, name: &str) -> Result<(), TaskError> {
    validate_name(name)?;

    let src = store.ongoing_path(name);
    if !src.is_dir() {
        return Err(TaskError::NotFound(name.to_string()));
    }
    let dst = store.done_path(name);
    if dst.exists() {
        return Err(TaskError::Conflict(name.to_string()));
    }
    store::move_tree(&src, &dst)?;
    Ok(())
}
