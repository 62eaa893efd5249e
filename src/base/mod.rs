//! 基础层：错误、布局、中间件与响应封装

pub mod error;
pub mod layout;
pub mod middleware;
pub mod response;

pub use error::PageError;
pub use layout::{Layout, StoreLayout};
