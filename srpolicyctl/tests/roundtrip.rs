use bytes::Bytes;
use hex_literal::hex;
use srpolicy_packet::{AfiSafi, Behavior, SrPolicyNlri};
use srpolicyctl::*;

const EXAMPLE: &str = r#"
Nlri:
  Distinguisher: 2
  Color: 99
  Endpoint: fd11::1000
SourceAsn: 5600
NeighborIp: 10.0.0.18
SegmentList:
  Weight: 0
  Segments:
    - Sid: fcff:0:0:20AF::F
      Behavior: 19
    - Sid: fcff:0:0:30AF::F
      Behavior: 19
Bsid: cafe::01
Priority: 0
"#;

fn example() -> Policy {
    Policy::from_yaml_str(EXAMPLE).unwrap()
}

fn with_priority() -> EncodeOptions {
    EncodeOptions {
        priority: true,
        preference: false,
    }
}

#[test]
fn example_wire_format() {
    let wire = encode_path_default(&example()).unwrap();
    assert_eq!(
        &wire.nlri[..],
        &hex!("c0 00000002 00000063 fd110000000000000000000000001000")
    );
    let expected = hex!(
        "40 01 01 00
         40 03 10 00000000000000000000000000000000
         c0 17 5c
         00 0f 00 58
         0d 12 80 00 cafe0000000000000000000000000001
         80 00 41 00
         09 06 00 00 00000000
         0d 1a 20 00 fcff0000000020af000000000000000f 0013 0000 00 00 00 00
         0d 1a 20 00 fcff0000000030af000000000000000f 0013 0000 00 00 00 00"
    );
    assert_eq!(&wire.attrs_bytes()[..], &expected[..]);
}

#[test]
fn example_roundtrip() {
    let policy = example();
    let decoded = decode_path(&encode_path(&policy, &with_priority()).unwrap()).unwrap();
    assert_eq!(decoded, policy);
}

#[test]
fn next_hop_not_recovered() {
    let mut policy = example();
    policy.next_hop = Some("2001:db8::1".parse().unwrap());
    let decoded = decode_path(&encode_path_default(&policy).unwrap()).unwrap();
    assert_eq!(decoded.next_hop, None);
    assert_eq!(decoded.segment_list, policy.segment_list);
}

#[test]
fn roundtrip_priority_and_preference() {
    let mut policy = example();
    policy.priority = 200;
    policy.preference = Some(1000);
    let opts = EncodeOptions {
        priority: true,
        preference: true,
    };
    let decoded = decode_path(&encode_path(&policy, &opts).unwrap()).unwrap();
    assert_eq!(decoded.priority, 200);
    assert_eq!(decoded.preference, Some(1000));

    // Minimal form does not carry either.
    let decoded = decode_path(&encode_path_default(&policy).unwrap()).unwrap();
    assert_eq!(decoded.priority, 0);
    assert_eq!(decoded.preference, None);
}

#[test]
fn render_is_idempotent() {
    let once = decode_path(&encode_path(&example(), &with_priority()).unwrap()).unwrap();
    let twice = decode_path(&encode_path(&once, &with_priority()).unwrap()).unwrap();
    assert_eq!(render(&once), render(&twice));
    assert!(render(&once).contains("Bsid: cafe::1"));
}

#[test]
fn segment_order_preserved() {
    let mut policy = example();
    policy.segment_list.weight = 10;
    policy.segment_list.segments = (1..=5u16)
        .map(|i| Segment::new(format!("fc00:{i}::").parse().unwrap(), Behavior::from(i)))
        .collect();
    let decoded = decode_path(&encode_path_default(&policy).unwrap()).unwrap();
    assert_eq!(decoded.segment_list, policy.segment_list);
}

#[test]
fn empty_segment_list() {
    let mut policy = example();
    policy.segment_list.segments.clear();
    policy.bsid = None;
    let decoded = decode_path(&encode_path_default(&policy).unwrap()).unwrap();
    assert!(decoded.segment_list.segments.is_empty());
    assert_eq!(decoded.bsid, None);
}

#[test]
fn malformed_segment_dropped() {
    let mut wire = encode_path_default(&example()).unwrap();
    let mut tunnel = wire.attrs[2].to_vec();
    // Clear the S-flag of the second segment; its length no longer matches.
    assert_eq!(tunnel[69], 0x20);
    tunnel[69] = 0x00;
    wire.attrs[2] = Bytes::from(tunnel);

    let decoded = decode_path(&wire).unwrap();
    assert_eq!(decoded.segment_list.weight, 0);
    assert_eq!(decoded.segment_list.segments.len(), 1);
    assert_eq!(
        decoded.segment_list.segments[0].sid,
        "fcff:0:0:20af::f".parse::<std::net::IpAddr>().unwrap()
    );
}

#[test]
fn partial_input_without_tunnel_encap() {
    let mut wire = encode_path_default(&example()).unwrap();
    wire.attrs.truncate(2);
    let decoded = decode_path(&wire).unwrap();
    assert_eq!(decoded.nlri, example().nlri);
    assert_eq!(decoded.source_asn, 5600);
    assert!(decoded.segment_list.segments.is_empty());
    assert_eq!(decoded.bsid, None);
    assert_eq!(decoded.priority, 0);
}

#[test]
fn attributes_in_any_order() {
    let mut wire = encode_path_default(&example()).unwrap();
    wire.attrs.reverse();
    let decoded = decode_path(&wire).unwrap();
    assert_eq!(decoded.segment_list, example().segment_list);
}

#[test]
fn withdrawal() {
    let mut policy = example();
    policy.is_withdraw = true;
    let wire = encode_path_default(&policy).unwrap();
    assert!(wire.is_withdraw);
    let decoded = decode_path(&wire).unwrap();
    assert!(decoded.is_withdraw);
    assert_eq!(decoded.nlri, SrPolicyNlri::new(2, 99, "fd11::1000".parse().unwrap()));
    assert_eq!(decoded.family, AfiSafi::SR_POLICY_IPV6);
}

#[test]
fn binary_block_roundtrip() {
    let wire = encode_path_default(&example()).unwrap();
    let attrs = WirePath::split_attrs(&wire.attrs_bytes()).unwrap();
    assert_eq!(attrs, wire.attrs);
}
