//! 页面错误处理模块

use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use tracing::error;

/// 页面生成过程中的错误
///
/// 任何一种都会中止本次渲染，统一返回通用错误页。
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    #[error("请求商品接口失败: {0}")]
    Fetch(#[from] reqwest::Error),
    #[error("商品接口返回非成功状态: {0}")]
    Status(reqwest::StatusCode),
    #[error("商品数据解析失败: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("模板渲染失败: {0}")]
    Render(#[from] askama::Error),
    #[error("页面布局失败: {0}")]
    Layout(String),
}

/// 通用错误页
#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub code: u16,
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        error!("页面生成失败: {}", self);

        let status = StatusCode::INTERNAL_SERVER_ERROR;
        let body = ErrorTemplate {
            code: status.as_u16(),
        }
        .render()
        .unwrap_or_else(|_| "Internal Server Error".to_string());

        (status, Html(body)).into_response()
    }
}
