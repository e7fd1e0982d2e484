use crate::modules::time_logs::core::rules::DecideError;
use crate::modules::time_logs::core::time_log::TimeLog;
use chrono::NaiveDate;
use serde::Deserialize;
use std::collections::BTreeMap;

/// The submitted time-log form. Fields stay raw text so the page can be
/// re-rendered with exactly what the user typed. Unknown fields are dropped.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct TimeLogForm {
    pub project_id: String,
    pub task_name: String,
    pub time: String,
    pub date: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TimeLogDetails {
    pub project_id: String,
    pub task_name: String,
    pub time: f64,
    pub date: NaiveDate,
}

/// Field name -> message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<&'static str, String>);

impl ValidationErrors {
    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.entry(field).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }
}

impl From<&DecideError> for ValidationErrors {
    fn from(error: &DecideError) -> Self {
        let mut errors = ValidationErrors::default();
        errors.add(error.field(), capitalize(&error.to_string()));
        errors
    }
}

fn capitalize(message: &str) -> String {
    let mut chars = message.chars();
    match chars.next() {
        Some(first) => format!("{}{}.", first.to_uppercase(), chars.as_str()),
        None => String::new(),
    }
}

impl TimeLogForm {
    /// Prefill for the edit page.
    pub fn from_time_log(time_log: &TimeLog) -> Self {
        Self {
            project_id: time_log.project_id.clone(),
            task_name: time_log.task_name.clone(),
            time: time_log.time.to_string(),
            date: time_log.date.format("%Y-%m-%d").to_string(),
        }
    }

    /// Required fields and formats. Business rules are checked when deciding.
    pub fn parse(&self) -> Result<TimeLogDetails, ValidationErrors> {
        let mut errors = ValidationErrors::default();

        let project_id = self.project_id.trim();
        if project_id.is_empty() {
            errors.add("project_id", "The project is required.");
        }

        let task_name = self.task_name.trim();
        if task_name.is_empty() {
            errors.add("task_name", "The task name is required.");
        }

        let time = match self.time.trim() {
            "" => {
                errors.add("time", "The time is required.");
                None
            }
            raw => match raw.parse::<f64>() {
                Ok(time) if time.is_finite() => Some(time),
                _ => {
                    errors.add("time", "The time must be a number.");
                    None
                }
            },
        };

        let date = match self.date.trim() {
            "" => {
                errors.add("date", "The date is required.");
                None
            }
            raw => match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
                Ok(date) => Some(date),
                Err(_) => {
                    errors.add("date", "The date must be a valid date (YYYY-MM-DD).");
                    None
                }
            },
        };

        match (time, date) {
            (Some(time), Some(date)) if errors.is_empty() => Ok(TimeLogDetails {
                project_id: project_id.to_string(),
                task_name: task_name.to_string(),
                time,
                date,
            }),
            _ => Err(errors),
        }
    }
}
