use std::path::Path;

use anyhow::Result;
use srpolicyctl::Policy;

pub fn show(filename: &Path, json: bool) -> Result<()> {
    let policy = Policy::from_file(filename)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&policy)?);
    } else {
        println!("{}", policy);
    }
    Ok(())
}
