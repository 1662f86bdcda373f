//! 核心响应处理模块

use serde::{Deserialize, Serialize};

/// Plain `{"message": ...}` body used by acknowledgement endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
