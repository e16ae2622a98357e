pub mod postgres_schedule_repository;
pub mod postgres_shift_request_repository;

pub use postgres_schedule_repository::PostgresScheduleRepository;
pub use postgres_shift_request_repository::PostgresShiftRequestRepository;
