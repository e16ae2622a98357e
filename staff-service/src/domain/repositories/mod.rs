pub mod member_repository;
pub mod ng_pair_repository;
pub mod pediatric_date_repository;
pub mod shift_request_repository;

pub use member_repository::MemberRepository;
pub use ng_pair_repository::NgPairRepository;
pub use pediatric_date_repository::PediatricDateRepository;
pub use shift_request_repository::ShiftRequestRepository;
