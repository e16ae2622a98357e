pub mod schedule_serializer;
pub mod shift_request_serializer;

pub use schedule_serializer::{
    EditResultSerialize, GenerateResultSerialize, ScheduleSerialize, ScheduleViewSerialize,
    ShiftAssignmentSerialize, UnfulfilledRequestSerialize,
};
pub use shift_request_serializer::ShiftRequestSerialize;
