//! Request and response bodies exchanged with the checklist backend.

use std::collections::BTreeMap;

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::Scope;

/// Timezone the backend schedules in unless configured otherwise.
pub const DEFAULT_TIMEZONE: &str = "Asia/Kolkata";

/// Cron rule as the backend scheduler consumes it.
///
/// `days_of_week` counts from Sunday (`SUN = 0 .. SAT = 6`). Empty `hours`
/// or `minutes` lists are interpreted by the backend as "every".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CronRule {
    pub scope: Scope,
    pub days_of_week: Vec<u8>,
    pub hours: Vec<u8>,
    pub minutes: Vec<u8>,
    pub timezone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub enabled: bool,
}

/// `cron_settings` section of the checklist bundle.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CronSettingsPayload {
    /// `HH:MM:SS`
    pub allowed_time_to_submit: String,
    /// `HH:MM:SS`
    pub extension_time: String,
    pub lock_overdue_task: bool,
    #[serde(default)]
    pub supervisors: Vec<u64>,
    #[serde(default)]
    pub supplier_id: Option<u64>,
    #[serde(default)]
    pub locked_group_ids: Vec<u64>,
}

/// Descriptive part of the checklist bundle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistMeta {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
    pub priority: u8,
}

/// Body of the checklist bundle creation endpoint.
///
/// Group ordering and question definitions are built by the form and passed
/// through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChecklistBundle {
    pub checklist: ChecklistMeta,
    #[serde(default)]
    pub groups: Vec<serde_json::Value>,
    #[serde(default)]
    pub questions: Vec<serde_json::Value>,
    pub cron_rule: CronRule,
    pub cron_settings: CronSettingsPayload,
}

/// Body of the checklist association bulk-create endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssociationBulkCreate {
    pub checklist: u64,
    #[serde(default)]
    pub asset_ids: Vec<u64>,
    #[serde(default)]
    pub user_ids: Vec<u64>,
    #[serde(default)]
    pub asset_map: BTreeMap<String, String>,
    #[serde(default)]
    pub user_map: BTreeMap<String, String>,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
    pub cron_rule: CronRule,
}

/// One answer in a run submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Answer {
    pub question: u64,
    #[serde(default)]
    pub value: serde_json::Value,
    #[serde(default)]
    pub is_na: bool,
}

impl Answer {
    /// An answer with a value; a missing value is sent as `{}`.
    pub fn new(question: u64, value: Option<serde_json::Value>) -> Self {
        Self {
            question,
            value: value.unwrap_or_else(|| serde_json::Value::Object(Default::default())),
            is_na: false,
        }
    }

    /// A question marked not applicable.
    pub fn not_applicable(question: u64) -> Self {
        Self {
            is_na: true,
            ..Self::new(question, None)
        }
    }
}

/// Body of the run submission endpoint. `finalize: false` saves a draft.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSubmission {
    pub answers: Vec<Answer>,
    pub finalize: bool,
}

impl RunSubmission {
    pub fn finalized(answers: Vec<Answer>) -> Self {
        Self {
            answers,
            finalize: true,
        }
    }

    pub fn draft(answers: Vec<Answer>) -> Self {
        Self {
            answers,
            finalize: false,
        }
    }
}

/// Response of the run submission endpoint; unknown fields are kept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSubmissionResponse {
    pub finalized: bool,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}
