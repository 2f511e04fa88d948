use std::net::{IpAddr, Ipv6Addr};
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use srpolicy_packet::{AfiSafi, Behavior, SrPolicyNlri};

use crate::SourceError;

/// One SRv6 segment: a SID and the endpoint behavior bound to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Segment {
    pub sid: IpAddr,
    pub behavior: Behavior,
}

impl Segment {
    pub fn new(sid: Ipv6Addr, behavior: Behavior) -> Self {
        Self {
            sid: IpAddr::V6(sid),
            behavior,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SegmentList {
    #[serde(default)]
    pub weight: u32,
    #[serde(default)]
    pub segments: Vec<Segment>,
}

/// An SRv6 Policy path as exchanged with a BGP speaker. Field names follow
/// the YAML source document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Policy {
    pub nlri: SrPolicyNlri,
    #[serde(default)]
    pub is_withdraw: bool,
    #[serde(default)]
    pub age: Option<DateTime<Utc>>,
    #[serde(default)]
    pub source_asn: u32,
    #[serde(default = "default_family")]
    pub family: AfiSafi,
    #[serde(default)]
    pub neighbor_ip: String,
    #[serde(default)]
    pub segment_list: SegmentList,
    #[serde(default)]
    pub bsid: Option<IpAddr>,
    #[serde(default)]
    pub priority: u32,
    /// Encode only. Never recovered from a decoded path.
    #[serde(default)]
    pub next_hop: Option<IpAddr>,
    #[serde(default)]
    pub preference: Option<u32>,
}

fn default_family() -> AfiSafi {
    AfiSafi::SR_POLICY_IPV6
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            nlri: SrPolicyNlri::default(),
            is_withdraw: false,
            age: None,
            source_asn: 0,
            family: default_family(),
            neighbor_ip: String::new(),
            segment_list: SegmentList::default(),
            bsid: None,
            priority: 0,
            next_hop: None,
            preference: None,
        }
    }
}

impl Policy {
    pub fn from_yaml_str(input: &str) -> Result<Self, SourceError> {
        Ok(serde_yaml::from_str(input)?)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SourceError> {
        let path = path.as_ref();
        let input = std::fs::read_to_string(path).map_err(|source| SourceError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&input)
    }
}
