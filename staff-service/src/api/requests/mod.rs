pub mod member_request;
pub mod ng_pair_request;
pub mod pediatric_date_request;
pub mod shift_request_request;

pub use member_request::{CreateMemberRequest, UpdateMemberRequest};
pub use ng_pair_request::CreateNgPairRequest;
pub use pediatric_date_request::CreatePediatricDateRequest;
pub use shift_request_request::{CreateShiftRequestRequest, UpdateShiftRequestRequest};
