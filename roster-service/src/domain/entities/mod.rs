pub mod schedule;
pub mod shift_assignment;
pub mod shift_request;

pub use schedule::Schedule;
pub use shift_assignment::{NewShiftAssignment, ShiftAssignment};
pub use shift_request::ShiftRequest;
