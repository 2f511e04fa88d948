use anyhow::{Context, Result};
use bytes::Bytes;
use srpolicy_packet::AfiSafi;
use srpolicyctl::{WirePath, decode_path};

pub fn decode(nlri: &str, attrs: &str, withdraw: bool, family: AfiSafi) -> Result<()> {
    let nlri = hex::decode(nlri.trim()).context("NLRI is not valid hex")?;
    let attrs = hex::decode(attrs.trim()).context("Attributes are not valid hex")?;

    let path = WirePath {
        nlri: Bytes::from(nlri),
        attrs: WirePath::split_attrs(&attrs)?,
        is_withdraw: withdraw,
        age: None,
        source_asn: 0,
        family,
        neighbor_ip: String::new(),
    };
    let policy = decode_path(&path)?;
    println!("{}", policy);
    Ok(())
}
