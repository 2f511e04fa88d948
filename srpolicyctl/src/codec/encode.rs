use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use serde::{Deserialize, Serialize};
use bytes::BytesMut;
use srpolicy_packet::{
    Afi, Attr, BindingSid, NexthopAttr, Origin, SegmentTypeB, SrBindingSid, SrPolicySubCode,
    SrPreference, SrPriority, SrSegmentList, SrWeight, SubTlv, TunnelEncapAttr, TunnelEncapTlv,
    TunnelType,
};

use super::encode_nlri;
use crate::{EncodeError, Policy, Segment, WirePath};

/// Optional sub-TLVs to carry in the SR Policy TLV. The default is the
/// minimal form: Binding SID and Segment List only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EncodeOptions {
    pub priority: bool,
    pub preference: bool,
}

pub fn encode_path_default(policy: &Policy) -> Result<WirePath, EncodeError> {
    encode_path(policy, &EncodeOptions::default())
}

/// Encode a Policy into Origin, Next-Hop and Tunnel Encapsulation
/// attributes plus the NLRI fragment.
pub fn encode_path(policy: &Policy, opts: &EncodeOptions) -> Result<WirePath, EncodeError> {
    check_endpoint(policy)?;

    let mut tlv = TunnelEncapTlv::new(TunnelType::SrPolicy);
    tlv.push(&SrBindingSid::new(binding_sid(policy.bsid)?));

    let segments = policy
        .segment_list
        .segments
        .iter()
        .map(segment_type_b)
        .collect::<Result<Vec<_>, _>>()?;
    tlv.push(&SrSegmentList::new(
        SrWeight::new(policy.segment_list.weight),
        &segments,
    ));

    if opts.preference
        && let Some(preference) = policy.preference
    {
        tlv.push(&SrPreference::new(preference));
    }
    if opts.priority {
        let priority = u8::try_from(policy.priority)
            .map_err(|_| EncodeError::PriorityOutOfRange(policy.priority))?;
        tlv.push(&SrPriority::new(priority));
    }

    check_lengths(&tlv)?;

    let nexthop = policy
        .next_hop
        .unwrap_or_else(|| unspecified(policy.family.afi));
    let attrs = [
        Attr::Origin(Origin::Igp),
        Attr::NextHop(NexthopAttr::new(nexthop)),
        Attr::TunnelEncap(TunnelEncapAttr { tlvs: vec![tlv] }),
    ]
    .iter()
    .map(|attr| {
        let mut buf = BytesMut::new();
        attr.emit(&mut buf);
        buf.freeze()
    })
    .collect();

    Ok(WirePath {
        nlri: encode_nlri(&policy.nlri),
        attrs,
        is_withdraw: policy.is_withdraw,
        age: policy.age,
        source_asn: policy.source_asn,
        family: policy.family,
        neighbor_ip: policy.neighbor_ip.clone(),
    })
}

fn check_endpoint(policy: &Policy) -> Result<(), EncodeError> {
    let endpoint = policy.nlri.endpoint;
    let matched = match endpoint {
        IpAddr::V4(_) => policy.family.afi == Afi::Ip,
        IpAddr::V6(_) => policy.family.afi == Afi::Ip6,
    };
    if !matched {
        return Err(EncodeError::BadAddress {
            field: "Endpoint",
            addr: endpoint,
        });
    }
    Ok(())
}

// Every length field must hold its value: sub-TLV lengths are one or two
// octets, the attribute length at most two.
fn check_lengths(tlv: &TunnelEncapTlv) -> Result<(), EncodeError> {
    for sub in tlv.subs.iter() {
        let len = sub.value.len();
        if len > SubTlv::max_len(sub.typ) {
            let field = match SrPolicySubCode::from(sub.typ) {
                SrPolicySubCode::SegmentList => "Segment List",
                _ => "SR Policy sub-TLV",
            };
            return Err(EncodeError::TooLong { field, len });
        }
    }
    // TLV type and length precede the value inside the attribute.
    let len = 4 + tlv.value_len();
    if len > u16::MAX as usize {
        return Err(EncodeError::TooLong {
            field: "Tunnel Encapsulation attribute",
            len,
        });
    }
    Ok(())
}

fn binding_sid(bsid: Option<IpAddr>) -> Result<BindingSid, EncodeError> {
    match bsid {
        None => Ok(BindingSid::Empty),
        Some(IpAddr::V6(addr)) => Ok(BindingSid::Srv6(addr)),
        Some(addr) => Err(EncodeError::BadAddress {
            field: "Bsid",
            addr,
        }),
    }
}

fn segment_type_b(segment: &Segment) -> Result<SegmentTypeB, EncodeError> {
    match segment.sid {
        IpAddr::V6(sid) => Ok(SegmentTypeB::new(sid, segment.behavior)),
        addr => Err(EncodeError::BadAddress { field: "Sid", addr }),
    }
}

fn unspecified(afi: Afi) -> IpAddr {
    match afi {
        Afi::Ip => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
        _ => IpAddr::V6(Ipv6Addr::UNSPECIFIED),
    }
}
