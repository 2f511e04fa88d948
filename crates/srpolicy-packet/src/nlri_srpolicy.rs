use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use bytes::{BufMut, BytesMut};
use nom::IResult;
use nom::error::{ErrorKind, make_error};
use nom::number::complete::{be_u8, be_u32, be_u128};
use serde::{Deserialize, Serialize};

use crate::{ParseBe, SrParseError};

/// NLRI length in bits for an IPv4 endpoint: distinguisher + color + 4.
pub const SR_POLICY_NLRI_IPV4_BITS: u8 = 96;
/// NLRI length in bits for an IPv6 endpoint: distinguisher + color + 16.
pub const SR_POLICY_NLRI_IPV6_BITS: u8 = 192;

/// SR Policy NLRI (SAFI 73): the route key of a policy.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SrPolicyNlri {
    pub distinguisher: u32,
    pub color: u32,
    pub endpoint: IpAddr,
}

impl Default for SrPolicyNlri {
    fn default() -> Self {
        Self {
            distinguisher: 0,
            color: 0,
            endpoint: IpAddr::V6(Ipv6Addr::UNSPECIFIED),
        }
    }
}

impl SrPolicyNlri {
    pub fn new(distinguisher: u32, color: u32, endpoint: IpAddr) -> Self {
        Self {
            distinguisher,
            color,
            endpoint,
        }
    }

    pub fn bit_len(&self) -> u8 {
        match self.endpoint {
            IpAddr::V4(_) => SR_POLICY_NLRI_IPV4_BITS,
            IpAddr::V6(_) => SR_POLICY_NLRI_IPV6_BITS,
        }
    }

    pub fn emit(&self, buf: &mut BytesMut) {
        buf.put_u8(self.bit_len());
        buf.put_u32(self.distinguisher);
        buf.put_u32(self.color);
        match self.endpoint {
            IpAddr::V4(addr) => buf.put(&addr.octets()[..]),
            IpAddr::V6(addr) => buf.put(&addr.octets()[..]),
        }
    }

    /// Parse an NLRI fragment that must contain exactly one SR Policy NLRI.
    pub fn parse_exact(input: &[u8]) -> Result<Self, SrParseError> {
        if let Some(&length) = input.first()
            && length != SR_POLICY_NLRI_IPV4_BITS
            && length != SR_POLICY_NLRI_IPV6_BITS
        {
            return Err(SrParseError::InvalidNlriLength { length });
        }
        let (rest, nlri) = Self::parse_be(input)?;
        if !rest.is_empty() {
            return Err(SrParseError::TrailingData {
                remaining: rest.len(),
            });
        }
        Ok(nlri)
    }
}

impl ParseBe<SrPolicyNlri> for SrPolicyNlri {
    fn parse_be(input: &[u8]) -> IResult<&[u8], SrPolicyNlri> {
        let (input, length) = be_u8(input)?;
        let (input, distinguisher) = be_u32(input)?;
        let (input, color) = be_u32(input)?;
        let (input, endpoint) = match length {
            SR_POLICY_NLRI_IPV4_BITS => {
                let (input, addr) = be_u32(input)?;
                (input, IpAddr::V4(Ipv4Addr::from(addr)))
            }
            SR_POLICY_NLRI_IPV6_BITS => {
                let (input, addr) = be_u128(input)?;
                (input, IpAddr::V6(Ipv6Addr::from(addr)))
            }
            _ => return Err(nom::Err::Error(make_error(input, ErrorKind::LengthValue))),
        };
        let nlri = SrPolicyNlri {
            distinguisher,
            color,
            endpoint,
        };
        Ok((input, nlri))
    }
}

impl fmt::Display for SrPolicyNlri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Distinguisher: {}, Color: {}, Endpoint: {}",
            self.distinguisher, self.color, self.endpoint
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    #[test]
    fn ipv6_endpoint_emit() {
        let nlri = SrPolicyNlri::new(2, 99, "fd11::1000".parse().unwrap());
        let mut buf = BytesMut::new();
        nlri.emit(&mut buf);
        assert_eq!(
            &buf[..],
            &hex!("c0 00000002 00000063 fd110000000000000000000000001000")
        );
        assert_eq!(SrPolicyNlri::parse_exact(&buf).unwrap(), nlri);
    }

    #[test]
    fn ipv4_endpoint_uses_96_bits() {
        let nlri = SrPolicyNlri::new(1, 10, "192.0.2.1".parse().unwrap());
        let mut buf = BytesMut::new();
        nlri.emit(&mut buf);
        assert_eq!(&buf[..], &hex!("60 00000001 0000000a c0000201"));
        assert_eq!(SrPolicyNlri::parse_exact(&buf).unwrap(), nlri);
    }

    #[test]
    fn bad_length_rejected() {
        let err = SrPolicyNlri::parse_exact(&hex!("80 00000001 0000000a c0000201")).unwrap_err();
        assert!(matches!(err, SrParseError::InvalidNlriLength { length: 128 }));
    }

    #[test]
    fn short_and_long_input_rejected() {
        assert!(SrPolicyNlri::parse_exact(&hex!("c0 00000002 00000063 fd11")).is_err());
        assert!(SrPolicyNlri::parse_exact(&[]).is_err());
        let err = SrPolicyNlri::parse_exact(&hex!("60 00000001 0000000a c0000201 00")).unwrap_err();
        assert!(matches!(err, SrParseError::TrailingData { remaining: 1 }));
    }
}
