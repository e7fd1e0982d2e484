use crate::modules::time_logs::adapters::inbound::form::{TimeLogForm, ValidationErrors};
use crate::modules::time_logs::adapters::inbound::paths;
use crate::modules::time_logs::core::employee::Employee;
use crate::modules::time_logs::core::project::Project;
use crate::shared::infrastructure::flash::FlashMessage;
use crate::shared::infrastructure::html::{Crumb, escape_html, layout, select_options};

const LIST_TITLE: &str = "Time logs";
/// Position of `project_id` in the list table's client columns.
const PROJECT_COLUMN: usize = 1;

fn project_options(projects: &[Project], selected: Option<&str>) -> String {
    select_options(
        projects
            .iter()
            .map(|project| (project.project_id.as_str(), project.name.as_str())),
        selected,
    )
}

/// Edit link and delete form for one table row.
pub fn actions_cell(time_log_id: &str) -> String {
    format!(
        "<a class='btn btn-sm btn-primary' href='{}'>Edit</a> \
         <form class='d-inline' method='post' action='{}' onsubmit=\"return confirm('Delete this time log?')\">\
         <button type='submit' class='btn btn-sm btn-danger'>Delete</button></form>",
        escape_html(&paths::edit(time_log_id)),
        escape_html(&paths::delete(time_log_id))
    )
}

pub fn index_page(
    projects: &[Project],
    employee: Option<&Employee>,
    flash: Option<&FlashMessage>,
) -> String {
    let employee_options = match employee {
        Some(employee) => select_options(
            [(employee.employee_id.as_str(), employee.first_name.as_str())],
            Some(employee.employee_id.as_str()),
        ),
        None => String::new(),
    };

    let content = format!(
        r#"<div class='d-flex justify-content-between'>
    <h1>{title}</h1>
    <a class='btn btn-success' href='{create}'>Log time</a>
</div>
<div class='filters'>
    <select name='employee_id' id='filter-employee' disabled>{employee_options}</select>
    <select name='project_id' id='filter-project'><option value=''>All projects</option>{projects}</select>
</div>
<table id='time-logs' class='table' data-source='{source}'>
    <thead>
        <tr><th>Task</th><th>Project</th><th>Time</th><th>Date</th><th>Actions</th></tr>
    </thead>
</table>
<script src='https://code.jquery.com/jquery-3.7.1.min.js'></script>
<script src='https://cdn.datatables.net/2.0.8/js/dataTables.min.js'></script>
<script>
    const table = new DataTable('#time-logs', {{
        serverSide: true,
        ajax: '{source}',
        columns: [
            {{ data: 'task_name', render: DataTable.render.text() }},
            {{ data: 'project_id', render: DataTable.render.text() }},
            {{ data: 'time', render: DataTable.render.text() }},
            {{ data: 'date', render: DataTable.render.text() }},
            {{ data: 'actions', orderable: false, searchable: false }}
        ]
    }});
    document.getElementById('filter-project').addEventListener('change', (event) => {{
        table.column({project_column}).search(event.target.value).draw();
    }});
</script>"#,
        title = LIST_TITLE,
        create = paths::CREATE,
        source = paths::DATATABLE,
        projects = project_options(projects, None),
        project_column = PROJECT_COLUMN,
    );

    layout(
        LIST_TITLE,
        flash,
        &[Crumb {
            label: LIST_TITLE,
            href: None,
        }],
        &content,
    )
}

fn field_error(errors: &ValidationErrors, field: &str) -> String {
    match errors.get(field) {
        Some(message) => format!(
            "<div class='invalid-feedback d-block'>{}</div>",
            escape_html(message)
        ),
        None => String::new(),
    }
}

fn form_fields(projects: &[Project], form: &TimeLogForm, errors: &ValidationErrors) -> String {
    format!(
        r#"<div class='mb-3'>
    <label for='project_id'>Project</label>
    <select name='project_id' id='project_id' required><option value=''>Select a project</option>{projects}</select>
    {project_error}
</div>
<div class='mb-3'>
    <label for='task_name'>Task name</label>
    <input type='text' name='task_name' id='task_name' maxlength='255' value='{task_name}' required>
    {task_name_error}
</div>
<div class='mb-3'>
    <label for='time'>Time (hours)</label>
    <input type='number' step='0.01' min='0' max='24' name='time' id='time' value='{time}' required>
    {time_error}
</div>
<div class='mb-3'>
    <label for='date'>Date</label>
    <input type='date' name='date' id='date' value='{date}' required>
    {date_error}
</div>"#,
        projects = project_options(projects, Some(form.project_id.as_str())),
        project_error = field_error(errors, "project_id"),
        task_name = escape_html(&form.task_name),
        task_name_error = field_error(errors, "task_name"),
        time = escape_html(&form.time),
        time_error = field_error(errors, "time"),
        date = escape_html(&form.date),
        date_error = field_error(errors, "date"),
    )
}

pub fn create_page(projects: &[Project], form: &TimeLogForm, errors: &ValidationErrors) -> String {
    let content = format!(
        r#"<h1>Log time</h1>
<form method='post' action='{action}'>
    {fields}
    <button type='submit' class='btn btn-primary'>Save</button>
    <a class='btn btn-link' href='{cancel}'>Cancel</a>
</form>"#,
        action = paths::INDEX,
        fields = form_fields(projects, form, errors),
        cancel = paths::INDEX,
    );

    layout(
        "Log time",
        None,
        &[
            Crumb {
                label: LIST_TITLE,
                href: Some(paths::INDEX),
            },
            Crumb {
                label: "Create",
                href: None,
            },
        ],
        &content,
    )
}

pub struct EditPage<'a> {
    pub time_log_id: &'a str,
    /// Breadcrumb title, the stored task name.
    pub title: &'a str,
    pub projects: &'a [Project],
    pub form: &'a TimeLogForm,
    pub errors: &'a ValidationErrors,
    pub flash: Option<&'a FlashMessage>,
}

pub fn edit_page(page: EditPage<'_>) -> String {
    let member = paths::member(page.time_log_id);
    let content = format!(
        r#"<h1>{title}</h1>
<form method='post' action='{action}'>
    <input type='hidden' name='_method' value='PUT'>
    {fields}
    <button type='submit' class='btn btn-primary'>Update</button>
</form>
<form method='post' action='{delete}' onsubmit="return confirm('Delete this time log?')">
    <button type='submit' class='btn btn-danger'>Delete</button>
</form>"#,
        title = escape_html(page.title),
        action = escape_html(&member),
        fields = form_fields(page.projects, page.form, page.errors),
        delete = escape_html(&paths::delete(page.time_log_id)),
    );

    layout(
        page.title,
        page.flash,
        &[
            Crumb {
                label: LIST_TITLE,
                href: Some(paths::INDEX),
            },
            Crumb {
                label: page.title,
                href: Some(member.as_str()),
            },
            Crumb {
                label: "Edit",
                href: None,
            },
        ],
        &content,
    )
}
