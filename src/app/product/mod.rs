//! 商品详情页：加载商品数据并渲染

pub mod handler;
pub mod model;
pub mod service;
pub mod view;

pub use handler::{product_page, AppState};
pub use model::Product;
pub use service::ProductService;
