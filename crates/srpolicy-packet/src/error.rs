use thiserror::Error;

use crate::AttrType;

#[derive(Error, Debug)]
pub enum SrParseError {
    #[error("Failed to parse BGP attribute {attr_type:?}: {source}")]
    AttributeParseError {
        attr_type: AttrType,
        #[source]
        source: Box<SrParseError>,
    },

    #[error("Invalid SR Policy NLRI length: {length} bits")]
    InvalidNlriLength { length: u8 },

    #[error("Invalid length {len} for sub-TLV type {typ}")]
    InvalidSubTlvLength { typ: u8, len: usize },

    #[error("Invalid Binding SID length: {len}")]
    InvalidBindingSidLength { len: usize },

    #[error("Sub-TLV type {typ} is not a {expected} sub-TLV")]
    UnexpectedSubTlv { typ: u8, expected: &'static str },

    #[error("Broken sub-TLV framing: {remaining} bytes unread")]
    MalformedSubTlvs { remaining: usize },

    #[error("Trailing data: {remaining} bytes left after parse")]
    TrailingData { remaining: usize },

    #[error("Nom parsing error: {0}")]
    NomError(String),

    #[error("Incomplete data: need {needed} more bytes")]
    IncompleteData { needed: usize },
}

impl From<nom::Err<nom::error::Error<&[u8]>>> for SrParseError {
    fn from(err: nom::Err<nom::error::Error<&[u8]>>) -> Self {
        match err {
            nom::Err::Incomplete(needed) => {
                let needed_bytes = match needed {
                    nom::Needed::Unknown => 0,
                    nom::Needed::Size(size) => size.get(),
                };
                SrParseError::IncompleteData {
                    needed: needed_bytes,
                }
            }
            nom::Err::Error(e) | nom::Err::Failure(e) => {
                SrParseError::NomError(format!("{:?}: {:?}", e.code, e.input))
            }
        }
    }
}
