// Route patterns and the URLs built from them.

pub const INDEX: &str = "/employee/time";
pub const DATATABLE: &str = "/employee/time/datatable";
pub const CREATE: &str = "/employee/time/create";
pub const MEMBER: &str = "/employee/time/{id}";
pub const EDIT: &str = "/employee/time/{id}/edit";
pub const DELETE: &str = "/employee/time/{id}/delete";

pub fn edit(time_log_id: &str) -> String {
    format!("{INDEX}/{}/edit", urlencoding::encode(time_log_id))
}

pub fn member(time_log_id: &str) -> String {
    format!("{INDEX}/{}", urlencoding::encode(time_log_id))
}

/// Target of the delete form; browsers cannot send `DELETE`.
pub fn delete(time_log_id: &str) -> String {
    format!("{INDEX}/{}/delete", urlencoding::encode(time_log_id))
}
