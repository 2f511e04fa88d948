use std::fmt::{Display, Formatter, Result};

use bytes::{BufMut, BytesMut};
use nom::IResult;
use nom::number::complete::be_u16;
use nom_derive::*;
use serde::{Deserialize, Serialize};

/// SRv6 endpoint behavior code point (RFC 8986).
#[repr(u16)]
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
#[serde(from = "u16", into = "u16")]
pub enum Behavior {
    End = 1,
    EndX = 5,
    EndT = 9,
    EndB6Encaps = 14,
    EndBM = 15,
    EndDX6 = 16,
    EndDX4 = 17,
    EndDT6 = 18,
    EndDT4 = 19,
    EndDT46 = 20,
    Unknown(u16),
}

impl From<Behavior> for u16 {
    fn from(typ: Behavior) -> Self {
        use Behavior::*;
        match typ {
            End => 1,
            EndX => 5,
            EndT => 9,
            EndB6Encaps => 14,
            EndBM => 15,
            EndDX6 => 16,
            EndDX4 => 17,
            EndDT6 => 18,
            EndDT4 => 19,
            EndDT46 => 20,
            Unknown(v) => v,
        }
    }
}

impl From<u16> for Behavior {
    fn from(typ: u16) -> Self {
        use Behavior::*;
        match typ {
            1 => End,
            5 => EndX,
            9 => EndT,
            14 => EndB6Encaps,
            15 => EndBM,
            16 => EndDX6,
            17 => EndDX4,
            18 => EndDT6,
            19 => EndDT4,
            20 => EndDT46,
            v => Unknown(v),
        }
    }
}

impl Display for Behavior {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        use Behavior::*;
        match self {
            End => write!(f, "End"),
            EndX => write!(f, "End.X"),
            EndT => write!(f, "End.T"),
            EndB6Encaps => write!(f, "End.B6.Encaps"),
            EndBM => write!(f, "End.BM"),
            EndDX6 => write!(f, "End.DX6"),
            EndDX4 => write!(f, "End.DX4"),
            EndDT6 => write!(f, "End.DT6"),
            EndDT4 => write!(f, "End.DT4"),
            EndDT46 => write!(f, "End.DT46"),
            Unknown(v) => write!(f, "Unknown({})", v),
        }
    }
}

#[derive(Debug, Default, NomBE, Clone, Copy, PartialEq, Eq)]
pub struct SidStructure {
    pub lb_len: u8,
    pub ln_len: u8,
    pub fun_len: u8,
    pub arg_len: u8,
}

/// SRv6 Endpoint Behavior and SID Structure, 8 octets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Srv6EndpointBehavior {
    pub behavior: Behavior,
    pub structure: SidStructure,
}

impl Srv6EndpointBehavior {
    pub const LEN: usize = 8;

    pub fn new(behavior: Behavior) -> Self {
        Self {
            behavior,
            structure: SidStructure::default(),
        }
    }

    pub fn parse_be(input: &[u8]) -> IResult<&[u8], Self> {
        let (input, behavior) = be_u16(input)?;
        let (input, _resvd) = be_u16(input)?;
        let (input, structure) = SidStructure::parse_be(input)?;
        let val = Self {
            behavior: behavior.into(),
            structure,
        };
        Ok((input, val))
    }

    pub fn emit(&self, buf: &mut BytesMut) {
        buf.put_u16(self.behavior.into());
        buf.put_u16(0);
        buf.put_u8(self.structure.lb_len);
        buf.put_u8(self.structure.ln_len);
        buf.put_u8(self.structure.fun_len);
        buf.put_u8(self.structure.arg_len);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn behavior_code_points() {
        assert_eq!(u16::from(Behavior::EndDT4), 19);
        assert_eq!(Behavior::from(16), Behavior::EndDX6);
        assert_eq!(Behavior::from(71), Behavior::Unknown(71));
        assert_eq!(Behavior::EndB6Encaps.to_string(), "End.B6.Encaps");
    }

    #[test]
    fn behavior_serializes_as_number() {
        let json = serde_json::to_string(&Behavior::EndDT4).unwrap();
        assert_eq!(json, "19");
        let behavior: Behavior = serde_json::from_str("300").unwrap();
        assert_eq!(behavior, Behavior::Unknown(300));
    }

    #[test]
    fn endpoint_behavior_emit_parse() {
        let epb = Srv6EndpointBehavior {
            behavior: Behavior::EndDT6,
            structure: SidStructure {
                lb_len: 32,
                ln_len: 16,
                fun_len: 16,
                arg_len: 0,
            },
        };
        let mut buf = BytesMut::new();
        epb.emit(&mut buf);
        assert_eq!(&buf[..], &[0, 18, 0, 0, 32, 16, 16, 0]);
        let (rest, parsed) = Srv6EndpointBehavior::parse_be(&buf).unwrap();
        assert!(rest.is_empty());
        assert_eq!(parsed, epb);
    }
}
