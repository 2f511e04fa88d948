use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use bytes::{BufMut, BytesMut};
use nom::IResult;
use nom::error::{ErrorKind, make_error};
use nom::number::complete::{be_u32, be_u128};

use crate::{AttrEmitter, AttrFlags, AttrType, ParseBe};

/// NEXT_HOP attribute. An IPv6 next hop is carried with a 16 octet body,
/// mirroring the abstract next hop a speaker API accepts for SR Policy
/// paths; this is not a literal RFC 4271 encoding, which is IPv4 only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NexthopAttr {
    pub nexthop: IpAddr,
}

impl NexthopAttr {
    pub fn new(nexthop: IpAddr) -> Self {
        Self { nexthop }
    }
}

impl AttrEmitter for NexthopAttr {
    fn attr_flags(&self) -> AttrFlags {
        AttrFlags::new().with_transitive(true)
    }

    fn attr_type(&self) -> AttrType {
        AttrType::NextHop
    }

    fn len(&self) -> Option<usize> {
        match self.nexthop {
            IpAddr::V4(_) => Some(4),
            IpAddr::V6(_) => Some(16),
        }
    }

    fn emit(&self, buf: &mut BytesMut) {
        match self.nexthop {
            IpAddr::V4(addr) => buf.put(&addr.octets()[..]),
            IpAddr::V6(addr) => buf.put(&addr.octets()[..]),
        }
    }
}

impl ParseBe<NexthopAttr> for NexthopAttr {
    fn parse_be(input: &[u8]) -> IResult<&[u8], NexthopAttr> {
        match input.len() {
            4 => {
                let (input, addr) = be_u32(input)?;
                Ok((input, NexthopAttr::new(IpAddr::V4(Ipv4Addr::from(addr)))))
            }
            16 => {
                let (input, addr) = be_u128(input)?;
                Ok((input, NexthopAttr::new(IpAddr::V6(Ipv6Addr::from(addr)))))
            }
            _ => Err(nom::Err::Error(make_error(input, ErrorKind::LengthValue))),
        }
    }
}

impl fmt::Display for NexthopAttr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.nexthop)
    }
}
