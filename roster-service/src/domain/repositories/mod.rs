pub mod schedule_repository;
pub mod shift_request_repository;

pub use schedule_repository::ScheduleRepository;
pub use shift_request_repository::ShiftRequestRepository;
