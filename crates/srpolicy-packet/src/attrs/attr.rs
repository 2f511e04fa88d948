use std::fmt;

use bytes::{BufMut, Bytes, BytesMut};
use nom::IResult;
use nom::number::complete::{be_u8, be_u16};

use crate::{
    AttrEmitter, AttrFlags, NexthopAttr, Origin, ParseBe, SrParseError, TunnelEncapAttr,
};

#[repr(u8)]
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum AttrType {
    Origin = 1,
    NextHop = 3,
    TunnelEncap = 23,
    Unknown(u8),
}

impl From<u8> for AttrType {
    fn from(attr_type: u8) -> Self {
        use AttrType::*;
        match attr_type {
            1 => Origin,
            3 => NextHop,
            23 => TunnelEncap,
            v => Unknown(v),
        }
    }
}

impl From<AttrType> for u8 {
    fn from(attr_type: AttrType) -> Self {
        use AttrType::*;
        match attr_type {
            Origin => 1,
            NextHop => 3,
            TunnelEncap => 23,
            Unknown(v) => v,
        }
    }
}

/// Path attribute header: flags, type code and a one or two octet length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttrHeader {
    pub flags: AttrFlags,
    pub attr_type: AttrType,
    pub len: u16,
}

impl AttrHeader {
    pub fn header_len(&self) -> usize {
        if self.flags.extended() { 4 } else { 3 }
    }
}

impl ParseBe<AttrHeader> for AttrHeader {
    fn parse_be(input: &[u8]) -> IResult<&[u8], AttrHeader> {
        let (input, flags) = be_u8(input)?;
        let flags = AttrFlags::from(flags);
        let (input, attr_type) = be_u8(input)?;
        let (input, len) = if flags.extended() {
            be_u16(input)?
        } else {
            let (input, len) = be_u8(input)?;
            (input, len as u16)
        };
        let header = AttrHeader {
            flags,
            attr_type: attr_type.into(),
            len,
        };
        Ok((input, header))
    }
}

/// Attribute the codec does not interpret. Kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAttr {
    pub flags: AttrFlags,
    pub typ: u8,
    pub data: Bytes,
}

impl AttrEmitter for UnknownAttr {
    fn attr_flags(&self) -> AttrFlags {
        self.flags.with_extended(false)
    }

    fn attr_type(&self) -> AttrType {
        AttrType::Unknown(self.typ)
    }

    fn len(&self) -> Option<usize> {
        Some(self.data.len())
    }

    fn emit(&self, buf: &mut BytesMut) {
        buf.put(&self.data[..]);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Attr {
    Origin(Origin),
    NextHop(NexthopAttr),
    TunnelEncap(TunnelEncapAttr),
    Unknown(UnknownAttr),
}

impl Attr {
    pub fn emit(&self, buf: &mut BytesMut) {
        match self {
            Attr::Origin(v) => v.attr_emit(buf),
            Attr::NextHop(v) => v.attr_emit(buf),
            Attr::TunnelEncap(v) => v.attr_emit(buf),
            Attr::Unknown(v) => v.attr_emit(buf),
        }
    }

    /// Parse one path attribute. The type code in the header selects the
    /// body parser; a body that does not parse as its type is an error
    /// carrying the attribute type.
    pub fn parse_attr(input: &[u8]) -> Result<(&[u8], Attr), SrParseError> {
        let (input, header) = AttrHeader::parse_be(input)?;
        let attr_len = header.len as usize;
        if input.len() < attr_len {
            return Err(SrParseError::IncompleteData {
                needed: attr_len - input.len(),
            });
        }
        let (payload, input) = input.split_at(attr_len);

        let attr = match header.attr_type {
            AttrType::Origin => Origin::parse_be(payload).map(|(_, v)| Attr::Origin(v)),
            AttrType::NextHop => NexthopAttr::parse_be(payload).map(|(_, v)| Attr::NextHop(v)),
            AttrType::TunnelEncap => {
                TunnelEncapAttr::parse_be(payload).map(|(_, v)| Attr::TunnelEncap(v))
            }
            AttrType::Unknown(typ) => Ok(Attr::Unknown(UnknownAttr {
                flags: header.flags,
                typ,
                data: Bytes::copy_from_slice(payload),
            })),
        }
        .map_err(|e| SrParseError::AttributeParseError {
            attr_type: header.attr_type,
            source: Box::new(SrParseError::from(e)),
        })?;

        Ok((input, attr))
    }
}

/// Split the first attribute, header included, off a path attribute block.
pub fn split_attr(input: &[u8]) -> Result<(&[u8], &[u8]), SrParseError> {
    let (_, header) = AttrHeader::parse_be(input)?;
    let total = header.header_len() + header.len as usize;
    if input.len() < total {
        return Err(SrParseError::IncompleteData {
            needed: total - input.len(),
        });
    }
    let (attr, rest) = input.split_at(total);
    Ok((rest, attr))
}

impl fmt::Display for Attr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Attr::Origin(v) => write!(f, "Origin: {}", v),
            Attr::NextHop(v) => write!(f, "NextHop: {}", v),
            Attr::TunnelEncap(v) => write!(f, "TunnelEncap: {}", v),
            Attr::Unknown(v) => write!(f, "Unknown({}): {} bytes", v.typ, v.data.len()),
        }
    }
}
