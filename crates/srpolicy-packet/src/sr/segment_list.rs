use std::net::Ipv6Addr;

use bitfield_struct::bitfield;
use bytes::{BufMut, Bytes, BytesMut};
use nom::IResult;
use nom::number::complete::{be_u8, be_u128};
use nom_derive::*;

use super::policy_sub::expect_len;
use crate::{
    Behavior, SegmentCode, SrParseError, SrPolicySubCode, Srv6EndpointBehavior, SubTlv,
    SubTlvEmitter, parse_sub_tlvs,
};

#[derive(Debug, Default, NomBE, Clone, Copy, PartialEq, Eq)]
pub struct SrWeight {
    pub flags: u8,
    pub resvd: u8,
    pub weight: u32,
}

impl SrWeight {
    pub const LEN: usize = 6;

    pub fn new(weight: u32) -> Self {
        Self {
            weight,
            ..Default::default()
        }
    }
}

impl SubTlvEmitter for SrWeight {
    fn typ(&self) -> u8 {
        SegmentCode::Weight.into()
    }

    fn emit(&self, buf: &mut BytesMut) {
        buf.put_u8(self.flags);
        buf.put_u8(0);
        buf.put_u32(self.weight);
    }
}

#[bitfield(u8, debug = true)]
#[derive(PartialEq, Eq)]
pub struct SegmentFlags {
    #[bits(4)]
    pub resvd: u8,
    pub b_flag: bool,
    pub s_flag: bool,
    pub a_flag: bool,
    pub v_flag: bool,
}

/// Segment Type B: an SRv6 SID with optional endpoint behavior and SID
/// structure. The S-flag tells whether the behavior trailer is present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentTypeB {
    pub flags: SegmentFlags,
    pub sid: Ipv6Addr,
    pub endpoint_behavior: Option<Srv6EndpointBehavior>,
}

impl SegmentTypeB {
    pub const LEN: usize = 18;
    pub const LEN_WITH_BEHAVIOR: usize = Self::LEN + Srv6EndpointBehavior::LEN;

    pub fn new(sid: Ipv6Addr, behavior: Behavior) -> Self {
        Self {
            flags: SegmentFlags::new().with_s_flag(true),
            sid,
            endpoint_behavior: Some(Srv6EndpointBehavior::new(behavior)),
        }
    }

    pub fn behavior(&self) -> Option<Behavior> {
        self.endpoint_behavior.map(|epb| epb.behavior)
    }

    pub fn parse_sub(sub: &SubTlv) -> Result<Self, SrParseError> {
        let value = &sub.value[..];
        let Some(&flags) = value.first() else {
            return Err(SrParseError::InvalidSubTlvLength { typ: sub.typ, len: 0 });
        };
        let flags = SegmentFlags::from(flags);
        let len = if flags.s_flag() {
            Self::LEN_WITH_BEHAVIOR
        } else {
            Self::LEN
        };
        expect_len(sub, len)?;

        let (_, seg) = Self::parse_value(value)?;
        Ok(seg)
    }

    fn parse_value(input: &[u8]) -> IResult<&[u8], Self> {
        let (input, flags) = be_u8(input)?;
        let flags = SegmentFlags::from(flags);
        let (input, _resvd) = be_u8(input)?;
        let (input, sid) = be_u128(input)?;
        let (input, endpoint_behavior) = if flags.s_flag() {
            let (input, epb) = Srv6EndpointBehavior::parse_be(input)?;
            (input, Some(epb))
        } else {
            (input, None)
        };
        let seg = Self {
            flags,
            sid: Ipv6Addr::from(sid),
            endpoint_behavior,
        };
        Ok((input, seg))
    }
}

impl SubTlvEmitter for SegmentTypeB {
    fn typ(&self) -> u8 {
        SegmentCode::TypeB.into()
    }

    fn emit(&self, buf: &mut BytesMut) {
        let flags = self.flags.with_s_flag(self.endpoint_behavior.is_some());
        buf.put_u8(flags.into());
        buf.put_u8(0);
        buf.put(&self.sid.octets()[..]);
        if let Some(epb) = &self.endpoint_behavior {
            epb.emit(buf);
        }
    }
}

/// Typed view of a sub-TLV inside a Segment List.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SegmentListEntry {
    Weight(SrWeight),
    TypeB(SegmentTypeB),
    Unknown(SubTlv),
}

impl SegmentListEntry {
    pub fn parse_sub(sub: &SubTlv) -> Result<Self, SrParseError> {
        match SegmentCode::from(sub.typ) {
            SegmentCode::Weight => {
                expect_len(sub, SrWeight::LEN)?;
                let (_, weight) = SrWeight::parse_be(&sub.value[..])?;
                Ok(SegmentListEntry::Weight(weight))
            }
            SegmentCode::TypeB => SegmentTypeB::parse_sub(sub).map(Self::TypeB),
            _ => Ok(SegmentListEntry::Unknown(sub.clone())),
        }
    }
}

/// Segment List sub-TLV (type 128). Entries stay raw so that a malformed
/// segment can be reported without losing its neighbours.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SrSegmentList {
    pub subs: Vec<SubTlv>,
    /// Octets after the last entry whose framing could be read.
    pub malformed: Option<Bytes>,
}

impl SrSegmentList {
    pub fn new(weight: SrWeight, segments: &[SegmentTypeB]) -> Self {
        let mut subs = Vec::with_capacity(segments.len() + 1);
        subs.push(weight.to_sub_tlv());
        subs.extend(segments.iter().map(|seg| seg.to_sub_tlv()));
        Self {
            subs,
            malformed: None,
        }
    }

    pub fn parse_sub(sub: &SubTlv) -> Result<Self, SrParseError> {
        if SrPolicySubCode::from(sub.typ) != SrPolicySubCode::SegmentList {
            return Err(SrParseError::UnexpectedSubTlv {
                typ: sub.typ,
                expected: "Segment List",
            });
        }
        let (_, list) = Self::parse_value(&sub.value[..])?;
        Ok(list)
    }

    fn parse_value(input: &[u8]) -> IResult<&[u8], Self> {
        let (input, _resvd) = be_u8(input)?;
        let (subs, malformed) = parse_sub_tlvs(input);
        Ok((&input[input.len()..], Self { subs, malformed }))
    }

    /// Entries in wire order, each parsed independently. A broken tail is
    /// reported as one final error entry.
    pub fn entries(&self) -> impl Iterator<Item = Result<SegmentListEntry, SrParseError>> + '_ {
        let tail = self.malformed.iter().map(|tail| {
            Err::<SegmentListEntry, _>(SrParseError::MalformedSubTlvs {
                remaining: tail.len(),
            })
        });
        self.subs.iter().map(SegmentListEntry::parse_sub).chain(tail)
    }
}

impl SubTlvEmitter for SrSegmentList {
    fn typ(&self) -> u8 {
        SrPolicySubCode::SegmentList.into()
    }

    fn emit(&self, buf: &mut BytesMut) {
        buf.put_u8(0);
        for sub in self.subs.iter() {
            sub.emit(buf);
        }
        if let Some(tail) = &self.malformed {
            buf.put(&tail[..]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    #[test]
    fn segment_type_b_with_behavior() {
        let seg = SegmentTypeB::new("fc00:2::".parse().unwrap(), Behavior::EndDT4);
        let mut buf = BytesMut::new();
        seg.sub_emit(&mut buf);
        assert_eq!(
            &buf[..],
            &hex!("0d 1a 20 00 fc000002000000000000000000000000 0013 0000 00 00 00 00")
        );

        let parsed = SegmentTypeB::parse_sub(&seg.to_sub_tlv()).unwrap();
        assert_eq!(parsed, seg);
        assert_eq!(parsed.behavior(), Some(Behavior::EndDT4));
    }

    #[test]
    fn segment_type_b_without_behavior() {
        let sub = SubTlv::new(
            13,
            Bytes::copy_from_slice(&hex!("00 00 fc000001000000000000000000000000")),
        );
        let parsed = SegmentTypeB::parse_sub(&sub).unwrap();
        assert_eq!(parsed.sid, "fc00:1::".parse::<Ipv6Addr>().unwrap());
        assert_eq!(parsed.behavior(), None);
    }

    #[test]
    fn segment_type_b_length_must_match_s_flag() {
        // S-flag set but no behavior trailer.
        let sub = SubTlv::new(
            13,
            Bytes::copy_from_slice(&hex!("20 00 fc000001000000000000000000000000")),
        );
        assert!(matches!(
            SegmentTypeB::parse_sub(&sub),
            Err(SrParseError::InvalidSubTlvLength { typ: 13, len: 18 })
        ));

        let short = SubTlv::new(13, Bytes::copy_from_slice(&hex!("00 00 fc00")));
        assert!(SegmentListEntry::parse_sub(&short).is_err());
    }

    #[test]
    fn segment_list_keeps_order() {
        let segs = [
            SegmentTypeB::new("fc00:2::".parse().unwrap(), Behavior::EndDT4),
            SegmentTypeB::new("fc00:1::".parse().unwrap(), Behavior::End),
        ];
        let list = SrSegmentList::new(SrWeight::new(3), &segs);
        let sub = list.to_sub_tlv();
        assert_eq!(sub.typ, 128);
        assert_eq!(sub.value[0], 0);
        assert_eq!(sub.value.len(), 1 + 8 + 28 * 2);

        let parsed = SrSegmentList::parse_sub(&sub).unwrap();
        let entries: Vec<_> = parsed.entries().collect::<Result<_, _>>().unwrap();
        assert_eq!(
            entries,
            vec![
                SegmentListEntry::Weight(SrWeight::new(3)),
                SegmentListEntry::TypeB(segs[0]),
                SegmentListEntry::TypeB(segs[1]),
            ]
        );
    }

    #[test]
    fn segment_list_truncated_last_entry() {
        let value = hex!(
            "00
             09 06 00 00 00000005
             0d 1a 20 00 fc000001000000000000000000000000 0013 0000 00 00 00 00
             0d 1a 20 00 fc000002000000000000000000000000 0013 0000 00 00 00 00
             0d 1a 20 00 fc"
        );
        let sub = SubTlv::new(128, Bytes::copy_from_slice(&value));
        let list = SrSegmentList::parse_sub(&sub).unwrap();
        assert_eq!(list.subs.len(), 3);
        assert_eq!(list.malformed.as_deref(), Some(&hex!("0d 1a 20 00 fc")[..]));

        let entries: Vec<_> = list.entries().collect();
        assert_eq!(entries.len(), 4);
        assert!(matches!(
            entries[0],
            Ok(SegmentListEntry::Weight(SrWeight { weight: 5, .. }))
        ));
        assert!(matches!(entries[1], Ok(SegmentListEntry::TypeB(_))));
        assert!(matches!(entries[2], Ok(SegmentListEntry::TypeB(_))));
        assert!(matches!(
            entries[3],
            Err(SrParseError::MalformedSubTlvs { remaining: 5 })
        ));

        let mut buf = BytesMut::new();
        list.emit(&mut buf);
        assert_eq!(&buf[..], &value[..]);
    }

    #[test]
    fn segment_list_unknown_segment_type() {
        let sub = SubTlv::new(
            128,
            Bytes::copy_from_slice(&hex!("00 09 06 00 00 00 00 00 01 01 06 00 00 00 00 00 10")),
        );
        let parsed = SrSegmentList::parse_sub(&sub).unwrap();
        let entries: Vec<_> = parsed.entries().collect::<Result<_, _>>().unwrap();
        assert_eq!(entries.len(), 2);
        assert!(matches!(entries[1], SegmentListEntry::Unknown(SubTlv { typ: 1, .. })));
    }
}
