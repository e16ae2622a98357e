pub mod postgres_member_repository;
pub mod postgres_ng_pair_repository;
pub mod postgres_pediatric_date_repository;
pub mod postgres_shift_request_repository;

pub use postgres_member_repository::PostgresMemberRepository;
pub use postgres_ng_pair_repository::PostgresNgPairRepository;
pub use postgres_pediatric_date_repository::PostgresPediatricDateRepository;
pub use postgres_shift_request_repository::PostgresShiftRequestRepository;
