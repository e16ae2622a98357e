pub mod edit_assignment_request;
pub mod shift_request_request;

pub use edit_assignment_request::EditAssignmentRequest;
pub use shift_request_request::CreateShiftRequestRequest;
