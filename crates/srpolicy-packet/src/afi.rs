use std::fmt;

use serde::{Deserialize, Serialize};
use strum_macros::Display;

#[repr(u16)]
#[derive(
    Debug, Default, PartialEq, Eq, Ord, PartialOrd, Clone, Copy, Hash, Serialize, Deserialize, Display,
)]
pub enum Afi {
    #[default]
    #[strum(serialize = "IPv4")]
    Ip = 1,
    #[strum(serialize = "IPv6")]
    Ip6 = 2,
    #[strum(to_string = "Unknown({0})")]
    Unknown(u16),
}

#[repr(u8)]
#[derive(
    Debug, Default, PartialEq, Eq, Ord, PartialOrd, Clone, Copy, Hash, Serialize, Deserialize, Display,
)]
pub enum Safi {
    #[default]
    Unicast = 1,
    #[strum(serialize = "SR Policy")]
    SrPolicy = 73,
    #[strum(to_string = "Unknown({0})")]
    Unknown(u8),
}

impl From<Afi> for u16 {
    fn from(afi: Afi) -> Self {
        use Afi::*;
        match afi {
            Ip => 1,
            Ip6 => 2,
            Unknown(v) => v,
        }
    }
}

impl From<u16> for Afi {
    fn from(val: u16) -> Self {
        use Afi::*;
        match val {
            1 => Ip,
            2 => Ip6,
            v => Unknown(v),
        }
    }
}

impl From<Safi> for u8 {
    fn from(safi: Safi) -> Self {
        use Safi::*;
        match safi {
            Unicast => 1,
            SrPolicy => 73,
            Unknown(v) => v,
        }
    }
}

impl From<u8> for Safi {
    fn from(val: u8) -> Self {
        use Safi::*;
        match val {
            1 => Unicast,
            73 => SrPolicy,
            v => Unknown(v),
        }
    }
}

/// Address family of a path: AFI plus SAFI.
#[derive(
    Debug, Default, PartialEq, Eq, Ord, PartialOrd, Clone, Copy, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "PascalCase")]
pub struct AfiSafi {
    pub afi: Afi,
    pub safi: Safi,
}

impl AfiSafi {
    /// SR Policy with IPv6 endpoints (AFI 2, SAFI 73).
    pub const SR_POLICY_IPV6: AfiSafi = AfiSafi {
        afi: Afi::Ip6,
        safi: Safi::SrPolicy,
    };

    /// SR Policy with IPv4 endpoints (AFI 1, SAFI 73).
    pub const SR_POLICY_IPV4: AfiSafi = AfiSafi {
        afi: Afi::Ip,
        safi: Safi::SrPolicy,
    };

    pub fn new(afi: Afi, safi: Safi) -> Self {
        Self { afi, safi }
    }

    pub fn is_sr_policy(&self) -> bool {
        self.safi == Safi::SrPolicy
    }
}

impl fmt::Display for AfiSafi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.afi, self.safi)
    }
}
