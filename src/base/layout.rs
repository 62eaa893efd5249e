//! 页面布局
//!
//! 布局由调用方提供：接收页面标题和已渲染的正文片段，返回完整页面。
//! 任意 `Fn(&str, &str) -> Result<String, PageError>` 闭包都可以作为布局使用。

use askama::Template;

use super::error::PageError;

pub trait Layout: Send + Sync {
    fn wrap(&self, title: &str, content: &str) -> Result<String, PageError>;
}

impl<F> Layout for F
where
    F: Fn(&str, &str) -> Result<String, PageError> + Send + Sync,
{
    fn wrap(&self, title: &str, content: &str) -> Result<String, PageError> {
        self(title, content)
    }
}

#[derive(Template)]
#[template(path = "layout.html")]
struct LayoutTemplate<'a> {
    site: &'a str,
    title: &'a str,
    content: &'a str,
}

/// 默认商店布局
#[derive(Debug, Clone)]
pub struct StoreLayout {
    site: String,
}

impl StoreLayout {
    pub fn new(site: impl Into<String>) -> Self {
        Self { site: site.into() }
    }
}

impl Layout for StoreLayout {
    fn wrap(&self, title: &str, content: &str) -> Result<String, PageError> {
        let page = LayoutTemplate {
            site: &self.site,
            title,
            content,
        }
        .render()?;
        Ok(page)
    }
}
