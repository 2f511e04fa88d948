use std::fmt;

use bytes::{BufMut, BytesMut};
use nom::IResult;
use nom::error::{ErrorKind, make_error};
use nom::number::complete::be_u8;

use crate::{AttrEmitter, AttrFlags, AttrType, ParseBe};

/// BGP route origin (RFC 4271).
#[repr(u8)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Origin {
    #[default]
    Igp = 0,
    Egp = 1,
    Incomplete = 2,
}

impl From<Origin> for u8 {
    fn from(value: Origin) -> Self {
        value as u8
    }
}

impl AttrEmitter for Origin {
    fn attr_type(&self) -> AttrType {
        AttrType::Origin
    }

    fn attr_flags(&self) -> AttrFlags {
        AttrFlags::new().with_transitive(true)
    }

    fn len(&self) -> Option<usize> {
        Some(1)
    }

    fn emit(&self, buf: &mut BytesMut) {
        buf.put_u8((*self).into());
    }
}

impl ParseBe<Origin> for Origin {
    fn parse_be(input: &[u8]) -> IResult<&[u8], Origin> {
        let (rest, val) = be_u8(input)?;
        let origin = match val {
            0 => Origin::Igp,
            1 => Origin::Egp,
            2 => Origin::Incomplete,
            _ => return Err(nom::Err::Error(make_error(input, ErrorKind::Verify))),
        };
        Ok((rest, origin))
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Origin::Igp => write!(f, "IGP"),
            Origin::Egp => write!(f, "EGP"),
            Origin::Incomplete => write!(f, "Incomplete"),
        }
    }
}
