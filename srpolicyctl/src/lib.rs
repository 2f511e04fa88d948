pub mod logging;

pub mod error;
pub use error::*;

pub mod policy;
pub use policy::*;

pub mod wire;
pub use wire::*;

pub mod codec;
pub use codec::*;

pub mod render;
pub use render::render;

pub mod transport;
pub use transport::*;

pub mod client;
pub use client::*;

pub mod config;
pub use config::*;
