//! Merged comment timeline for a task.
//!
//! Bitrix24 stores task comments in two places: legacy comment items
//! (`task.commentitem.getlist`) and the task's chat dialog
//! (`im.dialog.messages.get`). Assembling the full history takes a
//! dependent lookup, because the chat id only exists on the task record.

use b24_client::BitrixClient;
use serde::Serialize;
use serde_json::{Value, json};

use crate::error::ProxyError;

/// Chat messages fetched per task. Bitrix24 caps the dialog page size.
const CHAT_MESSAGE_LIMIT: &str = "100";

/// The merged comment payload for one task.
///
/// Both lists are upstream values forwarded verbatim; the counts are the
/// list lengths (0 when the upstream field is not a list). `chat_id`
/// echoes whatever the task record carried, or null when it had none.
#[derive(Debug, Serialize)]
pub struct CommentTimeline {
    pub old_comments: Value,
    pub new_comments: Value,
    pub chat_id: Value,
    pub total_old: usize,
    pub total_new: usize,
}

/// Assemble the timeline for a task.
///
/// Partial failure handling is asymmetric on purpose: a failing comment
/// or message lookup degrades to an empty list, but a failing task lookup
/// aborts with [`ProxyError::TaskNotFound`], since without the task there
/// is no chat id and no way to tell the halves apart.
pub async fn comment_timeline(
    client: &BitrixClient,
    task_id: &str,
) -> Result<CommentTimeline, ProxyError> {
    let old = client
        .call("task.commentitem.getlist", &[("taskId", task_id)])
        .await;
    let old_comments = if old.is_error() {
        json!([])
    } else {
        old.result().cloned().unwrap_or_else(|| json!([]))
    };

    let task = client.call("tasks.task.get", &[("id", task_id)]).await;
    if task.is_error() {
        return Err(ProxyError::TaskNotFound {
            message: "Task not found".to_string(),
        });
    }

    let chat_id = task
        .body()
        .pointer("/result/task/chatId")
        .cloned()
        .unwrap_or(Value::Null);

    let new_comments = match dialog_id(&chat_id) {
        Some(dialog) => {
            let messages = client
                .call(
                    "im.dialog.messages.get",
                    &[
                        ("DIALOG_ID", dialog.as_str()),
                        ("ORDER", "ASC"),
                        ("LIMIT", CHAT_MESSAGE_LIMIT),
                    ],
                )
                .await;
            if messages.is_error() {
                json!([])
            } else {
                messages
                    .body()
                    .pointer("/result/messages")
                    .cloned()
                    .unwrap_or_else(|| json!([]))
            }
        }
        None => json!([]),
    };

    Ok(CommentTimeline {
        total_old: list_len(&old_comments),
        total_new: list_len(&new_comments),
        old_comments,
        new_comments,
        chat_id,
    })
}

/// Render the IM dialog id for a chat id.
///
/// Task records carry the id as a number or a string depending on the
/// portal version; zero and empty values mean the task has no chat.
fn dialog_id(chat_id: &Value) -> Option<String> {
    match chat_id {
        Value::Number(n) if n.as_u64() != Some(0) => Some(format!("chat{n}")),
        Value::String(s) if !s.is_empty() && s != "0" => Some(format!("chat{s}")),
        _ => None,
    }
}

fn list_len(value: &Value) -> usize {
    value.as_array().map(Vec::len).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dialog_id_accepts_numbers_and_strings() {
        assert_eq!(dialog_id(&json!(512)), Some("chat512".to_string()));
        assert_eq!(dialog_id(&json!("512")), Some("chat512".to_string()));
    }

    #[test]
    fn test_dialog_id_rejects_absent_and_zero() {
        assert_eq!(dialog_id(&Value::Null), None);
        assert_eq!(dialog_id(&json!(0)), None);
        assert_eq!(dialog_id(&json!("")), None);
        assert_eq!(dialog_id(&json!("0")), None);
    }

    #[test]
    fn test_list_len_counts_only_arrays() {
        assert_eq!(list_len(&json!([1, 2, 3])), 3);
        assert_eq!(list_len(&json!({"a": 1})), 0);
        assert_eq!(list_len(&Value::Null), 0);
    }
}
