use srpolicy_packet::AfiSafi;
use thiserror::Error;
use tokio_stream::StreamExt;

use crate::{
    EncodeError, EncodeOptions, PathTransport, Policy, TransportError, decode_path, encode_path,
    srpolicy_warn,
};

#[derive(Error, Debug)]
pub enum ClientError {
    #[error(transparent)]
    Encode(#[from] EncodeError),

    #[error(transparent)]
    Transport(#[from] TransportError),
}

/// Submits and lists policies through a transport.
pub struct PolicyClient<T> {
    transport: T,
    options: EncodeOptions,
}

impl<T: PathTransport> PolicyClient<T> {
    pub fn new(transport: T, options: EncodeOptions) -> Self {
        Self { transport, options }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub async fn create(&self, policy: &Policy) -> Result<(), ClientError> {
        let path = encode_path(policy, &self.options)?;
        self.transport.add_path(path).await?;
        Ok(())
    }

    pub async fn withdraw(&self, policy: &Policy) -> Result<(), ClientError> {
        let mut path = encode_path(policy, &self.options)?;
        path.is_withdraw = true;
        self.transport.add_path(path).await?;
        Ok(())
    }

    /// Policies currently held for `family`. Paths whose NLRI does not
    /// decode are logged and left out.
    pub async fn list(&self, family: AfiSafi) -> Result<Vec<Policy>, ClientError> {
        let mut stream = self.transport.list_path(family).await?;
        let mut policies = Vec::new();
        while let Some(path) = stream.next().await {
            match decode_path(&path) {
                Ok(policy) => policies.push(policy),
                Err(err) => srpolicy_warn!("Skipping path from {}: {}", path.neighbor_ip, err),
            }
        }
        Ok(policies)
    }
}
