use std::collections::BTreeMap;
use std::pin::Pin;

use async_trait::async_trait;
use bytes::Bytes;
use chrono::Utc;
use srpolicy_packet::AfiSafi;
use thiserror::Error;
use tokio::sync::Mutex;
use tokio_stream::Stream;

use crate::{WirePath, srpolicy_debug, srpolicy_info};

/// Finite stream of paths returned by `list_path`.
pub type PathStream = Pin<Box<dyn Stream<Item = WirePath> + Send>>;

#[derive(Error, Debug)]
pub enum TransportError {
    #[error("Unsupported address family: {0}")]
    UnsupportedFamily(AfiSafi),

    #[error("Path rejected: {0}")]
    Rejected(String),

    #[error("Transport closed")]
    Closed,
}

/// Channel to a BGP speaker.
#[async_trait]
pub trait PathTransport: Send + Sync {
    async fn add_path(&self, path: WirePath) -> Result<(), TransportError>;

    async fn list_path(&self, family: AfiSafi) -> Result<PathStream, TransportError>;
}

/// In-process speaker holding one path per (family, NLRI). A withdraw
/// removes the path.
#[derive(Debug, Default)]
pub struct LocalSpeaker {
    table: Mutex<BTreeMap<(AfiSafi, Bytes), WirePath>>,
}

impl LocalSpeaker {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.table.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.table.lock().await.is_empty()
    }
}

#[async_trait]
impl PathTransport for LocalSpeaker {
    async fn add_path(&self, mut path: WirePath) -> Result<(), TransportError> {
        if !path.family.is_sr_policy() {
            return Err(TransportError::UnsupportedFamily(path.family));
        }
        let key = (path.family, path.nlri.clone());
        let mut table = self.table.lock().await;
        if path.is_withdraw {
            if table.remove(&key).is_some() {
                srpolicy_info!("Withdraw {} NLRI {}", path.family, hex::encode(&key.1));
            } else {
                srpolicy_debug!("Withdraw for unknown NLRI {}", hex::encode(&key.1));
            }
            return Ok(());
        }
        if path.age.is_none() {
            path.age = Some(Utc::now());
        }
        srpolicy_info!("Add {} NLRI {}", path.family, hex::encode(&key.1));
        table.insert(key, path);
        Ok(())
    }

    async fn list_path(&self, family: AfiSafi) -> Result<PathStream, TransportError> {
        let table = self.table.lock().await;
        let paths: Vec<WirePath> = table
            .iter()
            .filter(|((afi_safi, _), _)| *afi_safi == family)
            .map(|(_, path)| path.clone())
            .collect();
        Ok(Box::pin(tokio_stream::iter(paths)))
    }
}
