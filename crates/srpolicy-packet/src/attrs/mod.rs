pub mod attr;
pub use attr::*;

pub mod flags;
pub use flags::*;

pub mod emitter;
pub use emitter::*;

pub mod origin;
pub use origin::*;

pub mod nexthop;
pub use nexthop::*;

pub mod tunnel_encap;
pub use tunnel_encap::*;
