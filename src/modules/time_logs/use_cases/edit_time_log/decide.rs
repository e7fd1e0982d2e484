use crate::modules::time_logs::core::ownership::{OwnershipError, ensure_owner};
use crate::modules::time_logs::core::project::Project;
use crate::modules::time_logs::core::rules::{DecideError, check_details};
use crate::modules::time_logs::core::time_log::{TimeLog, TimeLogChanges};
use crate::modules::time_logs::use_cases::edit_time_log::command::EditTimeLog;

pub enum EditDecision {
    Accepted { changes: TimeLogChanges },
    Forbidden { reason: OwnershipError },
    Rejected { reason: DecideError },
}

/// Ownership is checked before any field rule.
pub fn decide_edit(
    current: &TimeLog,
    command: EditTimeLog,
    project: Option<&Project>,
) -> EditDecision {
    if let Err(reason) = ensure_owner(current, &command.user_id) {
        return EditDecision::Forbidden { reason };
    }
    if let Err(reason) = check_details(project, &command.task_name, command.time) {
        return EditDecision::Rejected { reason };
    }
    EditDecision::Accepted {
        changes: TimeLogChanges {
            project_id: command.project_id,
            task_name: command.task_name.trim().to_string(),
            time: command.time,
            date: command.date,
            updated_at: command.updated_at,
        },
    }
}

#[cfg(test)]
mod edit_time_log_decide_tests {
    use super::*;
    use crate::tests::fixtures::commands::edit_time_log::EditTimeLogBuilder;
    use crate::tests::fixtures::projects::make_projects;
    use crate::tests::fixtures::time_logs::make_time_log;
    use rstest::{fixture, rstest};

    #[fixture]
    fn before_each() -> (TimeLog, Project) {
        (make_time_log(), make_projects().remove(1))
    }

    #[rstest]
    fn it_should_decide_to_apply_the_changes(before_each: (TimeLog, Project)) {
        let (current, project) = before_each;
        let command = EditTimeLogBuilder::new().task_name(" Code review ").build();
        match decide_edit(&current, command.clone(), Some(&project)) {
            EditDecision::Accepted { changes } => {
                assert_eq!(changes.task_name, "Code review");
                assert_eq!(changes.project_id, command.project_id);
                assert_eq!(changes.updated_at, command.updated_at);
            }
            _ => panic!("expected Accepted"),
        }
    }

    #[rstest]
    fn it_should_forbid_a_user_who_is_not_the_owner(before_each: (TimeLog, Project)) {
        let (current, project) = before_each;
        // invalid details too: ownership has to win
        let command = EditTimeLogBuilder::new()
            .user_id("user-other-0002")
            .time(0.0)
            .build();
        assert!(matches!(
            decide_edit(&current, command, Some(&project)),
            EditDecision::Forbidden { .. }
        ));
    }

    #[rstest]
    fn it_should_reject_invalid_details_for_the_owner(before_each: (TimeLog, Project)) {
        let (current, _) = before_each;
        let command = EditTimeLogBuilder::new().project_id("project-9999").build();
        assert!(matches!(
            decide_edit(&current, command, None),
            EditDecision::Rejected {
                reason: DecideError::UnknownProject
            }
        ));
    }
}
