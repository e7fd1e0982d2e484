use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Project {
    pub project_id: String,
    pub name: String,
}

/// `project_id -> name`, the shape drop-downs and the table column need.
pub fn pluck_names(projects: &[Project]) -> HashMap<String, String> {
    projects
        .iter()
        .map(|project| (project.project_id.clone(), project.name.clone()))
        .collect()
}
