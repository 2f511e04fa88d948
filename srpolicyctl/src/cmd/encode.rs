use std::path::Path;

use anyhow::Result;
use srpolicy_packet::Attr;
use srpolicyctl::{EncodeOptions, Policy, encode_path};

pub fn encode(filename: &Path, opts: &EncodeOptions) -> Result<()> {
    let policy = Policy::from_file(filename)?;
    let wire = encode_path(&policy, opts)?;

    println!("NLRI: {}", hex::encode(&wire.nlri));
    for fragment in wire.attrs.iter() {
        let (_, attr) = Attr::parse_attr(fragment)?;
        println!("{}", attr);
        println!("  {}", hex::encode(fragment));
    }
    println!("Attrs: {}", hex::encode(wire.attrs_bytes()));
    Ok(())
}
