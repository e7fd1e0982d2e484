use crate::modules::time_logs::core::project::Project;

pub fn make_projects() -> Vec<Project> {
    vec![
        Project {
            project_id: "project-0001".into(),
            name: "Onboarding".into(),
        },
        Project {
            project_id: "project-0002".into(),
            name: "Payroll".into(),
        },
    ]
}
