use std::net::Ipv6Addr;

use bitfield_struct::bitfield;
use bytes::{BufMut, Bytes, BytesMut};
use nom::IResult;
use nom::number::complete::be_u8;
use nom_derive::*;

use crate::{SrParseError, SrPolicySubCode, SrSegmentList, SubTlv, SubTlvEmitter};

/// Typed view of a sub-TLV found in the SR Policy tunnel TLV. Dispatch is on
/// the sub-TLV type code; codes the codec does not model stay raw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SrPolicySubTlv {
    Preference(SrPreference),
    BindingSid(SrBindingSid),
    Priority(SrPriority),
    SegmentList(SrSegmentList),
    Unknown(SubTlv),
}

impl SrPolicySubTlv {
    pub fn parse_sub(sub: &SubTlv) -> Result<Self, SrParseError> {
        let value = &sub.value[..];
        match SrPolicySubCode::from(sub.typ) {
            SrPolicySubCode::Preference => {
                expect_len(sub, SrPreference::LEN)?;
                let (_, pref) = SrPreference::parse_be(value)?;
                Ok(SrPolicySubTlv::Preference(pref))
            }
            SrPolicySubCode::Priority => {
                expect_len(sub, SrPriority::LEN)?;
                let (_, priority) = SrPriority::parse_be(value)?;
                Ok(SrPolicySubTlv::Priority(priority))
            }
            SrPolicySubCode::BindingSid => SrBindingSid::parse_sub(sub).map(Self::BindingSid),
            SrPolicySubCode::SegmentList => SrSegmentList::parse_sub(sub).map(Self::SegmentList),
            _ => Ok(SrPolicySubTlv::Unknown(sub.clone())),
        }
    }
}

pub(crate) fn expect_len(sub: &SubTlv, len: usize) -> Result<(), SrParseError> {
    if sub.value.len() != len {
        return Err(SrParseError::InvalidSubTlvLength {
            typ: sub.typ,
            len: sub.value.len(),
        });
    }
    Ok(())
}

#[derive(Debug, Default, NomBE, Clone, Copy, PartialEq, Eq)]
pub struct SrPreference {
    pub flags: u8,
    pub resvd: u8,
    pub preference: u32,
}

impl SrPreference {
    pub const LEN: usize = 6;

    pub fn new(preference: u32) -> Self {
        Self {
            preference,
            ..Default::default()
        }
    }
}

impl SubTlvEmitter for SrPreference {
    fn typ(&self) -> u8 {
        SrPolicySubCode::Preference.into()
    }

    fn emit(&self, buf: &mut BytesMut) {
        buf.put_u8(self.flags);
        buf.put_u8(0);
        buf.put_u32(self.preference);
    }
}

#[derive(Debug, Default, NomBE, Clone, Copy, PartialEq, Eq)]
pub struct SrPriority {
    pub priority: u8,
    pub resvd: u8,
}

impl SrPriority {
    pub const LEN: usize = 2;

    pub fn new(priority: u8) -> Self {
        Self { priority, resvd: 0 }
    }
}

impl SubTlvEmitter for SrPriority {
    fn typ(&self) -> u8 {
        SrPolicySubCode::Priority.into()
    }

    fn emit(&self, buf: &mut BytesMut) {
        buf.put_u8(self.priority);
        buf.put_u8(0);
    }
}

#[bitfield(u8, debug = true)]
#[derive(PartialEq, Eq)]
pub struct BsidFlags {
    #[bits(6)]
    pub resvd: u8,
    pub i_flag: bool,
    pub s_flag: bool,
}

/// Binding SID value once the sub-TLV body has been interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingSid {
    Empty,
    Srv6(Ipv6Addr),
}

/// Binding SID sub-TLV. The SID octets are kept opaque; `binding_sid`
/// interprets them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SrBindingSid {
    pub flags: BsidFlags,
    pub sid: Bytes,
}

impl SrBindingSid {
    /// Binding SID with the S-flag set and the I-flag clear.
    pub fn new(bsid: BindingSid) -> Self {
        let sid = match bsid {
            BindingSid::Empty => Bytes::new(),
            BindingSid::Srv6(addr) => Bytes::copy_from_slice(&addr.octets()),
        };
        Self {
            flags: BsidFlags::new().with_s_flag(true),
            sid,
        }
    }

    pub fn parse_sub(sub: &SubTlv) -> Result<Self, SrParseError> {
        if SrPolicySubCode::from(sub.typ) != SrPolicySubCode::BindingSid {
            return Err(SrParseError::UnexpectedSubTlv {
                typ: sub.typ,
                expected: "Binding SID",
            });
        }
        if sub.value.len() < 2 {
            return Err(SrParseError::InvalidSubTlvLength {
                typ: sub.typ,
                len: sub.value.len(),
            });
        }
        let (_, bsid) = Self::parse_value(&sub.value[..])?;
        Ok(bsid)
    }

    fn parse_value(input: &[u8]) -> IResult<&[u8], Self> {
        let (input, flags) = be_u8(input)?;
        let (input, _resvd) = be_u8(input)?;
        let bsid = Self {
            flags: flags.into(),
            sid: Bytes::copy_from_slice(input),
        };
        Ok((&input[input.len()..], bsid))
    }

    pub fn binding_sid(&self) -> Result<BindingSid, SrParseError> {
        match self.sid.len() {
            0 => Ok(BindingSid::Empty),
            16 => {
                let mut octets = [0u8; 16];
                octets.copy_from_slice(&self.sid[..]);
                Ok(BindingSid::Srv6(Ipv6Addr::from(octets)))
            }
            len => Err(SrParseError::InvalidBindingSidLength { len }),
        }
    }
}

impl SubTlvEmitter for SrBindingSid {
    fn typ(&self) -> u8 {
        SrPolicySubCode::BindingSid.into()
    }

    fn emit(&self, buf: &mut BytesMut) {
        buf.put_u8(self.flags.into());
        buf.put_u8(0);
        buf.put(&self.sid[..]);
    }
}
