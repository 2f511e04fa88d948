use std::fmt;

use bytes::{BufMut, Bytes, BytesMut};
use nom::IResult;
use nom::error::{ErrorKind, make_error};
use nom::number::complete::{be_u8, be_u16};

use crate::{AttrEmitter, AttrFlags, AttrType, ParseBe};

/// Tunnel type carried in a Tunnel Encapsulation TLV (RFC 9012).
#[repr(u16)]
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub enum TunnelType {
    #[default]
    SrPolicy = 15,
    Unknown(u16),
}

impl From<TunnelType> for u16 {
    fn from(typ: TunnelType) -> Self {
        match typ {
            TunnelType::SrPolicy => 15,
            TunnelType::Unknown(v) => v,
        }
    }
}

impl From<u16> for TunnelType {
    fn from(typ: u16) -> Self {
        match typ {
            15 => TunnelType::SrPolicy,
            v => TunnelType::Unknown(v),
        }
    }
}

/// Raw sub-TLV. Types 0..=127 carry a one octet length, 128..=255 two.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubTlv {
    pub typ: u8,
    pub value: Bytes,
}

impl SubTlv {
    pub fn new(typ: u8, value: Bytes) -> Self {
        Self { typ, value }
    }

    pub fn has_long_length(typ: u8) -> bool {
        typ >= 128
    }

    /// Largest value the length field of this type can describe.
    pub fn max_len(typ: u8) -> usize {
        if Self::has_long_length(typ) {
            u16::MAX as usize
        } else {
            u8::MAX as usize
        }
    }

    /// Octets on the wire, header included.
    pub fn wire_len(&self) -> usize {
        let header = if Self::has_long_length(self.typ) { 3 } else { 2 };
        header + self.value.len()
    }

    pub fn emit(&self, buf: &mut BytesMut) {
        buf.put_u8(self.typ);
        if Self::has_long_length(self.typ) {
            buf.put_u16(self.value.len() as u16);
        } else {
            buf.put_u8(self.value.len() as u8);
        }
        buf.put(&self.value[..]);
    }
}

impl ParseBe<SubTlv> for SubTlv {
    fn parse_be(input: &[u8]) -> IResult<&[u8], SubTlv> {
        let (input, typ) = be_u8(input)?;
        let (input, len) = if Self::has_long_length(typ) {
            be_u16(input)?
        } else {
            let (input, len) = be_u8(input)?;
            (input, len as u16)
        };
        if input.len() < len as usize {
            return Err(nom::Err::Error(make_error(input, ErrorKind::Eof)));
        }
        let (value, input) = input.split_at(len as usize);
        Ok((input, SubTlv::new(typ, Bytes::copy_from_slice(value))))
    }
}

/// Parse a run of sub-TLVs. Reading stops at the first sub-TLV whose framing
/// overruns the input; the sub-TLVs before it are kept and the unread tail
/// is returned as is.
pub fn parse_sub_tlvs(input: &[u8]) -> (Vec<SubTlv>, Option<Bytes>) {
    let mut subs = Vec::new();
    let mut remaining = input;
    while !remaining.is_empty() {
        match SubTlv::parse_be(remaining) {
            Ok((rest, sub)) => {
                subs.push(sub);
                remaining = rest;
            }
            Err(_) => return (subs, Some(Bytes::copy_from_slice(remaining))),
        }
    }
    (subs, None)
}

/// Typed sub-TLV that knows how to serialize its value.
pub trait SubTlvEmitter {
    fn typ(&self) -> u8;

    fn emit(&self, buf: &mut BytesMut);

    fn to_sub_tlv(&self) -> SubTlv {
        let mut buf = BytesMut::new();
        self.emit(&mut buf);
        SubTlv::new(self.typ(), buf.freeze())
    }

    fn sub_emit(&self, buf: &mut BytesMut) {
        self.to_sub_tlv().emit(buf);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TunnelEncapTlv {
    pub typ: TunnelType,
    pub subs: Vec<SubTlv>,
    /// Octets after the last sub-TLV whose framing could be read.
    pub malformed: Option<Bytes>,
}

impl TunnelEncapTlv {
    pub fn new(typ: TunnelType) -> Self {
        Self {
            typ,
            subs: Vec::new(),
            malformed: None,
        }
    }

    /// Length of the TLV value.
    pub fn value_len(&self) -> usize {
        let subs: usize = self.subs.iter().map(SubTlv::wire_len).sum();
        subs + self.malformed.as_ref().map_or(0, |tail| tail.len())
    }

    pub fn push<T: SubTlvEmitter>(&mut self, sub: &T) {
        self.subs.push(sub.to_sub_tlv());
    }

    pub fn emit(&self, buf: &mut BytesMut) {
        buf.put_u16(self.typ.into());
        // Length placeholder.
        let pp = buf.len();
        buf.put_u16(0);
        for sub in self.subs.iter() {
            sub.emit(buf);
        }
        if let Some(tail) = &self.malformed {
            buf.put(&tail[..]);
        }
        let len = (buf.len() - pp - 2) as u16;
        buf[pp..pp + 2].copy_from_slice(&len.to_be_bytes());
    }
}

impl ParseBe<TunnelEncapTlv> for TunnelEncapTlv {
    fn parse_be(input: &[u8]) -> IResult<&[u8], TunnelEncapTlv> {
        let (input, typ) = be_u16(input)?;
        let (input, len) = be_u16(input)?;
        if input.len() < len as usize {
            return Err(nom::Err::Error(make_error(input, ErrorKind::Eof)));
        }
        let (value, input) = input.split_at(len as usize);
        let (subs, malformed) = parse_sub_tlvs(value);
        let tlv = TunnelEncapTlv {
            typ: typ.into(),
            subs,
            malformed,
        };
        Ok((input, tlv))
    }
}

/// Tunnel Encapsulation attribute (type 23).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TunnelEncapAttr {
    pub tlvs: Vec<TunnelEncapTlv>,
}

impl ParseBe<TunnelEncapAttr> for TunnelEncapAttr {
    fn parse_be(input: &[u8]) -> IResult<&[u8], TunnelEncapAttr> {
        let mut tlvs = Vec::new();
        let mut remaining = input;
        while !remaining.is_empty() {
            let (rest, tlv) = TunnelEncapTlv::parse_be(remaining)?;
            tlvs.push(tlv);
            remaining = rest;
        }
        Ok((remaining, TunnelEncapAttr { tlvs }))
    }
}

impl AttrEmitter for TunnelEncapAttr {
    fn attr_type(&self) -> AttrType {
        AttrType::TunnelEncap
    }

    fn attr_flags(&self) -> AttrFlags {
        AttrFlags::new().with_optional(true).with_transitive(true)
    }

    fn len(&self) -> Option<usize> {
        None
    }

    fn emit(&self, buf: &mut BytesMut) {
        for tlv in self.tlvs.iter() {
            tlv.emit(buf);
        }
    }
}

impl fmt::Display for TunnelEncapAttr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for tlv in self.tlvs.iter() {
            write!(f, "[Type: {}", u16::from(tlv.typ))?;
            for sub in tlv.subs.iter() {
                write!(f, " ({}:{})", sub.typ, sub.value.len())?;
            }
            if let Some(tail) = &tlv.malformed {
                write!(f, " (malformed:{})", tail.len())?;
            }
            write!(f, "]")?;
        }
        Ok(())
    }
}
