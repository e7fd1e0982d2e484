pub const STORE_SUCCESS: &str = "Time log was created successfully.";
pub const UPDATE_SUCCESS: &str = "Time log was updated successfully.";
pub const DELETE_SUCCESS: &str = "Time log was deleted successfully.";
