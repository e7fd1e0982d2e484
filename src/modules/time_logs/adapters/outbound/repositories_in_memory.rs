use crate::modules::time_logs::adapters::outbound::repositories::{
    EmployeeRepository, Filter, ProjectRepository, TimeLogRepository,
};
use crate::modules::time_logs::core::employee::Employee;
use crate::modules::time_logs::core::project::Project;
use crate::modules::time_logs::core::time_log::{NewTimeLog, TimeLog, TimeLogChanges, TimeLogField};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use tokio::sync::RwLock;

/// Time logs keyed by id. Ids are UUID v7, so key order is creation order.
#[derive(Default)]
pub struct InMemoryTimeLogs {
    rows: RwLock<BTreeMap<String, TimeLog>>,
    is_offline: bool,
}

impl InMemoryTimeLogs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn check_online(&self) -> anyhow::Result<()> {
        if self.is_offline {
            return Err(anyhow::anyhow!("Time log repository offline"));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl TimeLogRepository for InMemoryTimeLogs {
    async fn get_by_id(&self, time_log_id: &str) -> anyhow::Result<Option<TimeLog>> {
        self.check_online()?;
        Ok(self.rows.read().await.get(time_log_id).cloned())
    }

    async fn get_collection(
        &self,
        filters: &[Filter],
        columns: &[TimeLogField],
    ) -> anyhow::Result<Vec<Map<String, Value>>> {
        self.check_online()?;
        let guard = self.rows.read().await;
        Ok(guard
            .values()
            .filter(|time_log| filters.iter().all(|filter| filter.matches(time_log)))
            .map(|time_log| time_log.select(columns))
            .collect())
    }

    async fn create(&self, time_log: NewTimeLog) -> anyhow::Result<TimeLog> {
        self.check_online()?;
        let mut guard = self.rows.write().await;
        if guard.contains_key(&time_log.time_log_id) {
            return Err(anyhow::anyhow!(
                "time log {} already exists",
                time_log.time_log_id
            ));
        }
        let created = TimeLog::from_new(time_log);
        guard.insert(created.time_log_id.clone(), created.clone());
        Ok(created)
    }

    async fn update(&self, time_log_id: &str, changes: TimeLogChanges) -> anyhow::Result<TimeLog> {
        self.check_online()?;
        let mut guard = self.rows.write().await;
        let time_log = guard
            .get_mut(time_log_id)
            .ok_or_else(|| anyhow::anyhow!("time log {time_log_id} not found"))?;
        time_log.apply(changes);
        Ok(time_log.clone())
    }

    async fn delete(&self, time_log_id: &str) -> anyhow::Result<()> {
        self.check_online()?;
        self.rows
            .write()
            .await
            .remove(time_log_id)
            .map(|_| ())
            .ok_or_else(|| anyhow::anyhow!("time log {time_log_id} not found"))
    }
}

#[derive(Default)]
pub struct InMemoryProjects {
    rows: RwLock<Vec<Project>>,
    is_offline: bool,
}

impl InMemoryProjects {
    pub fn new(projects: Vec<Project>) -> Self {
        Self {
            rows: RwLock::new(projects),
            is_offline: false,
        }
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }
}

#[async_trait::async_trait]
impl ProjectRepository for InMemoryProjects {
    async fn get_all(&self) -> anyhow::Result<Vec<Project>> {
        if self.is_offline {
            return Err(anyhow::anyhow!("Project repository offline"));
        }
        Ok(self.rows.read().await.clone())
    }

    async fn get_by_id(&self, project_id: &str) -> anyhow::Result<Option<Project>> {
        if self.is_offline {
            return Err(anyhow::anyhow!("Project repository offline"));
        }
        Ok(self
            .rows
            .read()
            .await
            .iter()
            .find(|project| project.project_id == project_id)
            .cloned())
    }
}

#[derive(Default)]
pub struct InMemoryEmployees {
    rows: RwLock<Vec<Employee>>,
}

impl InMemoryEmployees {
    pub fn new(employees: Vec<Employee>) -> Self {
        Self {
            rows: RwLock::new(employees),
        }
    }
}

#[async_trait::async_trait]
impl EmployeeRepository for InMemoryEmployees {
    async fn get_by_id(&self, user_id: &str) -> anyhow::Result<Option<Employee>> {
        Ok(self
            .rows
            .read()
            .await
            .iter()
            .find(|employee| employee.user_id == user_id)
            .cloned())
    }
}
