use std::io;
use std::net::IpAddr;
use std::path::PathBuf;

use srpolicy_packet::SrParseError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("Malformed SR Policy NLRI: {0}")]
    MalformedNlri(#[source] SrParseError),
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum EncodeError {
    #[error("Bad address for {field}: {addr}")]
    BadAddress { field: &'static str, addr: IpAddr },

    #[error("Priority {0} does not fit in one octet")]
    PriorityOutOfRange(u32),

    #[error("{field} too long: {len} octets")]
    TooLong { field: &'static str, len: usize },
}

/// Failure to load a YAML document (policy source or configuration).
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid YAML document: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
