use crate::domain::common::AggregateRoot;
use crate::enums::TaskStatus;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

crate::string_id!(TaskId);

/// Задача сотрудника
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    #[serde(default)]
    pub status: TaskStatus,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub assignee: Option<String>,
}

impl AggregateRoot for Task {
    type Id = TaskId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn description(&self) -> &str {
        &self.title
    }

    fn collection_name() -> &'static str {
        "tasks"
    }

    fn element_name() -> &'static str {
        "وظیفه"
    }

    fn list_name() -> &'static str {
        "وظایف"
    }
}
