//! 核心模块：各应用共享的框架组件

pub mod clock;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod response;
