//! # store-page
//!
//! 服务端渲染的商品详情页：
//! - 从路径中取得商品标识，请求商品查询接口并解析 JSON
//! - 将商品渲染为 HTML 片段，再交给布局生成完整页面
//! - 任何失败都返回通用错误页

pub mod app;
pub mod base;
pub mod infrastructure;

use std::time::Duration;

use axum::{middleware, routing::get, Router};
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use app::{health::health_check, product::product_page};
pub use app::product::AppState;
use infrastructure::config::HttpConfig;

/// 构建路由
pub fn build_router(state: AppState, http: &HttpConfig) -> Router {
    Router::new()
        .route("/product/:id", get(product_page))
        .route("/health", get(health_check))
        .layer(middleware::from_fn(base::middleware::request_logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(http.timeout_seconds)))
        .with_state(state)
}
