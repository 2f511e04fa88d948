use std::path::PathBuf;

use anyhow::{Context, Result};
use srpolicyctl::{Config, LocalSpeaker, Policy, PolicyClient};

pub async fn create(filenames: &[PathBuf], config: &Config) -> Result<()> {
    let client = PolicyClient::new(LocalSpeaker::new(), config.encode);

    for filename in filenames.iter() {
        let policy = Policy::from_file(filename)?;
        client
            .create(&policy)
            .await
            .with_context(|| format!("Failed to create policy from {}", filename.display()))?;
    }

    let policies = client.list(config.family).await?;
    for (i, policy) in policies.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("{}", policy);
    }
    Ok(())
}
