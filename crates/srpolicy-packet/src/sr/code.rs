/// Sub-TLV codes inside the SR Policy tunnel TLV (RFC 9830).
#[repr(u8)]
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum SrPolicySubCode {
    Preference = 12,
    BindingSid = 13,
    Enlp = 14,
    Priority = 15,
    SegmentList = 128,
    CandidatePathName = 129,
    PolicyName = 130,
    Unknown(u8),
}

impl From<SrPolicySubCode> for u8 {
    fn from(typ: SrPolicySubCode) -> Self {
        use SrPolicySubCode::*;
        match typ {
            Preference => 12,
            BindingSid => 13,
            Enlp => 14,
            Priority => 15,
            SegmentList => 128,
            CandidatePathName => 129,
            PolicyName => 130,
            Unknown(v) => v,
        }
    }
}

impl From<u8> for SrPolicySubCode {
    fn from(typ: u8) -> Self {
        use SrPolicySubCode::*;
        match typ {
            12 => Preference,
            13 => BindingSid,
            14 => Enlp,
            15 => Priority,
            128 => SegmentList,
            129 => CandidatePathName,
            130 => PolicyName,
            v => Unknown(v),
        }
    }
}

/// Sub-TLV codes inside a Segment List sub-TLV.
#[repr(u8)]
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum SegmentCode {
    Weight = 9,
    TypeB = 13,
    Unknown(u8),
}

impl From<SegmentCode> for u8 {
    fn from(typ: SegmentCode) -> Self {
        use SegmentCode::*;
        match typ {
            Weight => 9,
            TypeB => 13,
            Unknown(v) => v,
        }
    }
}

impl From<u8> for SegmentCode {
    fn from(typ: u8) -> Self {
        use SegmentCode::*;
        match typ {
            9 => Weight,
            13 => TypeB,
            v => Unknown(v),
        }
    }
}
