pub mod afi;
pub use afi::*;

pub mod attrs;
pub use attrs::*;

pub mod error;
pub use error::*;

pub mod nlri_srpolicy;
pub use nlri_srpolicy::*;

pub mod parse_be;
pub use parse_be::ParseBe;

pub mod sr;
pub use sr::*;
