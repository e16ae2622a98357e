pub mod member;
pub mod ng_pair;
pub mod pediatric_date;
pub mod shift_request;

pub use member::MemberSerializer;
pub use ng_pair::NgPairSerializer;
pub use pediatric_date::PediatricDateSerializer;
pub use shift_request::ShiftRequestSerializer;
