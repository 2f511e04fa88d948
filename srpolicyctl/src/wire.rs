use bytes::{Bytes, BytesMut};
use chrono::{DateTime, Utc};
use srpolicy_packet::{AfiSafi, SrParseError, split_attr};

/// A path in the form a BGP speaker exchanges it: the NLRI fragment, the
/// path attributes as individual wire fragments, and the metadata that
/// travels next to them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WirePath {
    pub nlri: Bytes,
    pub attrs: Vec<Bytes>,
    pub is_withdraw: bool,
    pub age: Option<DateTime<Utc>>,
    pub source_asn: u32,
    pub family: AfiSafi,
    pub neighbor_ip: String,
}

impl WirePath {
    /// Attributes flattened into a single path attribute block.
    pub fn attrs_bytes(&self) -> Bytes {
        let mut buf = BytesMut::new();
        for attr in self.attrs.iter() {
            buf.extend_from_slice(attr);
        }
        buf.freeze()
    }

    /// Split a path attribute block into one fragment per attribute.
    pub fn split_attrs(block: &[u8]) -> Result<Vec<Bytes>, SrParseError> {
        let mut attrs = Vec::new();
        let mut remaining = block;
        while !remaining.is_empty() {
            let (rest, attr) = split_attr(remaining)?;
            attrs.push(Bytes::copy_from_slice(attr));
            remaining = rest;
        }
        Ok(attrs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    #[test]
    fn attrs_block_split_back() {
        let block = hex!("40 01 01 00 40 03 04 0a 00 00 12 c0 17 04 00 0f 00 00");
        let attrs = WirePath::split_attrs(&block).unwrap();
        assert_eq!(attrs.len(), 3);
        assert_eq!(&attrs[2][..], &hex!("c0 17 04 00 0f 00 00"));

        let path = WirePath {
            nlri: Bytes::new(),
            attrs,
            is_withdraw: false,
            age: None,
            source_asn: 0,
            family: AfiSafi::SR_POLICY_IPV6,
            neighbor_ip: String::new(),
        };
        assert_eq!(&path.attrs_bytes()[..], &block[..]);
    }

    #[test]
    fn truncated_block_rejected() {
        assert!(WirePath::split_attrs(&hex!("40 01 01 00 40 03 04 0a")).is_err());
    }
}
