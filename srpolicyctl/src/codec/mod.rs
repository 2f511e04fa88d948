pub mod nlri;
pub use nlri::{decode_nlri, encode_nlri};

pub mod decode;
pub use decode::decode_path;

pub mod encode;
pub use encode::{EncodeOptions, encode_path, encode_path_default};
