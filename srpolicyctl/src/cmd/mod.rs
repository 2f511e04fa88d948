pub mod create;
pub mod decode;
pub mod encode;
pub mod show;
