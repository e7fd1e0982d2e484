use async_graphql::{Context, Object, Result as GqlResult};
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::modules::time_logs::core::time_log::TimeLog;
use crate::shell::auth::CurrentUser;
use crate::shell::graphql::application_error;
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Deserialize, Clone)]
pub struct GqlTimeLog {
    #[serde(rename = "id")]
    pub time_log_id: String,
    pub project_id: String,
    pub task_name: String,
    pub time: f64,
    pub date: String,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<TimeLog> for GqlTimeLog {
    fn from(v: TimeLog) -> Self {
        Self {
            time_log_id: v.time_log_id,
            project_id: v.project_id,
            task_name: v.task_name,
            time: v.time,
            date: v.date.format("%Y-%m-%d").to_string(),
            created_at: v.created_at,
            updated_at: v.updated_at,
        }
    }
}

impl TryFrom<Map<String, Value>> for GqlTimeLog {
    type Error = serde_json::Error;

    fn try_from(row: Map<String, Value>) -> Result<Self, Self::Error> {
        serde_json::from_value(Value::Object(row))
    }
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn my_time_logs(
        &self,
        context: &Context<'_>,
        offset: Option<i64>,
        limit: Option<i64>,
    ) -> GqlResult<Vec<GqlTimeLog>> {
        let state = context.data_unchecked::<AppState>();
        let user = context.data::<CurrentUser>()?;
        let rows = state
            .list_handler
            .list_by_user_id(
                &user.user_id,
                offset.unwrap_or(0).max(0) as u64,
                limit.unwrap_or(20).max(0) as u64,
            )
            .await
            .map_err(application_error)?;
        Ok(rows
            .into_iter()
            .map(GqlTimeLog::try_from)
            .collect::<Result<_, _>>()?)
    }
}
