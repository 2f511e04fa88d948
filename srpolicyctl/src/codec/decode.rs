use std::net::IpAddr;

use bytes::Bytes;
use srpolicy_packet::{
    Attr, AttrHeader, AttrType, Behavior, BindingSid, ParseBe, SegmentListEntry, SrPolicySubTlv,
    SrSegmentList, SubTlv, TunnelEncapAttr,
};

use super::decode_nlri;
use crate::{DecodeError, Policy, Segment, SegmentList, WirePath, srpolicy_debug};

/// Decode a wire path into a Policy.
///
/// Only a malformed NLRI fails the decode. Attributes and sub-TLVs that can
/// not be interpreted are skipped and leave the corresponding field at its
/// zero value. When the same sub-TLV appears more than once the last one
/// wins.
pub fn decode_path(path: &WirePath) -> Result<Policy, DecodeError> {
    let nlri = decode_nlri(&path.nlri)?;
    let mut policy = Policy {
        nlri,
        is_withdraw: path.is_withdraw,
        age: path.age,
        source_asn: path.source_asn,
        family: path.family,
        neighbor_ip: path.neighbor_ip.clone(),
        ..Default::default()
    };

    let Some(tunnel) = tunnel_encap(&path.attrs) else {
        srpolicy_debug!("No Tunnel Encapsulation attribute for {}", policy.nlri);
        return Ok(policy);
    };
    for tlv in tunnel.tlvs.iter() {
        for sub in tlv.subs.iter() {
            apply_sub_tlv(&mut policy, sub);
        }
        if let Some(tail) = &tlv.malformed {
            srpolicy_debug!("Skipping {} octets of broken sub-TLVs", tail.len());
        }
    }
    Ok(policy)
}

// First attribute whose type code is Tunnel Encapsulation and whose body
// parses as one.
fn tunnel_encap(attrs: &[Bytes]) -> Option<TunnelEncapAttr> {
    for fragment in attrs.iter() {
        let header = match AttrHeader::parse_be(fragment) {
            Ok((_, header)) => header,
            Err(err) => {
                srpolicy_debug!("Skipping unreadable attribute header: {}", err);
                continue;
            }
        };
        if header.attr_type != AttrType::TunnelEncap {
            continue;
        }
        match Attr::parse_attr(fragment) {
            Ok((_, Attr::TunnelEncap(attr))) => return Some(attr),
            Ok(_) => {}
            Err(err) => srpolicy_debug!("Skipping attribute: {}", err),
        }
    }
    None
}

fn apply_sub_tlv(policy: &mut Policy, sub: &SubTlv) {
    match SrPolicySubTlv::parse_sub(sub) {
        Ok(SrPolicySubTlv::SegmentList(list)) => {
            policy.segment_list = segment_list(&list);
        }
        Ok(SrPolicySubTlv::BindingSid(bsid)) => match bsid.binding_sid() {
            Ok(BindingSid::Empty) => policy.bsid = None,
            Ok(BindingSid::Srv6(addr)) => policy.bsid = Some(IpAddr::V6(addr)),
            Err(err) => srpolicy_debug!("Ignoring Binding SID: {}", err),
        },
        Ok(SrPolicySubTlv::Priority(priority)) => {
            policy.priority = priority.priority as u32;
        }
        Ok(SrPolicySubTlv::Preference(pref)) => {
            policy.preference = Some(pref.preference);
        }
        Ok(SrPolicySubTlv::Unknown(sub)) => {
            srpolicy_debug!("Ignoring sub-TLV type {}", sub.typ);
        }
        Err(err) => {
            srpolicy_debug!("Skipping sub-TLV type {}: {}", sub.typ, err);
        }
    }
}

fn segment_list(list: &SrSegmentList) -> SegmentList {
    let mut segment_list = SegmentList::default();
    for entry in list.entries() {
        match entry {
            Ok(SegmentListEntry::Weight(weight)) => segment_list.weight = weight.weight,
            Ok(SegmentListEntry::TypeB(seg)) => segment_list.segments.push(Segment {
                sid: IpAddr::V6(seg.sid),
                behavior: seg.behavior().unwrap_or(Behavior::Unknown(0)),
            }),
            Ok(SegmentListEntry::Unknown(sub)) => {
                srpolicy_debug!("Ignoring segment type {}", sub.typ);
            }
            Err(err) => {
                srpolicy_debug!("Dropping malformed segment: {}", err);
            }
        }
    }
    segment_list
}
