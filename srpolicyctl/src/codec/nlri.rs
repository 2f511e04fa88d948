use bytes::{Bytes, BytesMut};
use srpolicy_packet::SrPolicyNlri;

use crate::DecodeError;

pub fn encode_nlri(nlri: &SrPolicyNlri) -> Bytes {
    let mut buf = BytesMut::new();
    nlri.emit(&mut buf);
    buf.freeze()
}

/// Decode the NLRI fragment of a path. Any failure makes the whole path
/// undecodable since the NLRI is its key.
pub fn decode_nlri(input: &[u8]) -> Result<SrPolicyNlri, DecodeError> {
    SrPolicyNlri::parse_exact(input).map_err(DecodeError::MalformedNlri)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    #[test]
    fn nlri_ipv6_endpoint() {
        let nlri = SrPolicyNlri::new(2, 99, "fd11::1000".parse().unwrap());
        let wire = encode_nlri(&nlri);
        assert_eq!(
            &wire[..],
            &hex!("c0 00000002 00000063 fd110000000000000000000000001000")
        );
        assert_eq!(decode_nlri(&wire).unwrap(), nlri);
    }

    #[test]
    fn nlri_ipv4_endpoint() {
        let nlri = SrPolicyNlri::new(7, 100, "192.0.2.1".parse().unwrap());
        let wire = encode_nlri(&nlri);
        assert_eq!(&wire[..], &hex!("60 00000007 00000064 c0000201"));
        assert_eq!(decode_nlri(&wire).unwrap(), nlri);
    }

    #[test]
    fn nlri_malformed() {
        for input in [
            &hex!("")[..],
            &hex!("c0 00000002 00000063 fd11")[..],
            &hex!("80 00000002 00000063 fd110000000000000000000000001000")[..],
            &hex!("60 00000007 00000064 c0000201 ff")[..],
        ] {
            assert!(matches!(
                decode_nlri(input),
                Err(DecodeError::MalformedNlri(_))
            ));
        }
    }
}
