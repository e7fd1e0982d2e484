use crate::modules::time_logs::core::employee::Employee;

pub fn make_employee() -> Employee {
    Employee {
        employee_id: "employee-0001".into(),
        user_id: "user-fixed-0001".into(),
        first_name: "Ada".into(),
        last_name: "Lovelace".into(),
    }
}
