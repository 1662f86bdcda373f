//! 调用方身份认证

pub mod extractor;
pub mod gate;
pub mod model;
