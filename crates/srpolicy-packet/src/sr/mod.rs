pub mod code;
pub use code::{SegmentCode, SrPolicySubCode};

pub mod srv6;
pub use srv6::{Behavior, SidStructure, Srv6EndpointBehavior};

pub mod policy_sub;
pub use policy_sub::{
    BindingSid, BsidFlags, SrBindingSid, SrPolicySubTlv, SrPreference, SrPriority,
};

pub mod segment_list;
pub use segment_list::{SegmentFlags, SegmentListEntry, SegmentTypeB, SrSegmentList, SrWeight};
