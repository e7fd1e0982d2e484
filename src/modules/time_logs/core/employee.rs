/// The employee record attached to an application user.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Employee {
    pub employee_id: String,
    pub user_id: String,
    pub first_name: String,
    pub last_name: String,
}
