//! 商品加载服务

use std::time::Duration;

use reqwest::Client;
use tracing::{debug, info};

use super::model::Product;
use crate::base::error::PageError;
use crate::infrastructure::config::UpstreamConfig;

/// 每次调用都会向商品接口发起一次请求，结果不缓存
#[derive(Clone)]
pub struct ProductService {
    client: Client,
    endpoint: String,
}

impl ProductService {
    pub fn new(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    pub fn from_config(config: &UpstreamConfig) -> Result<Self, PageError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;
        Ok(Self::new(client, config.product_endpoint.clone()))
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// 按标识加载商品
    ///
    /// `id` 作为唯一的查询参数，经过百分号编码后拼入 URL。
    pub async fn load(&self, id: &str) -> Result<Product, PageError> {
        info!("加载商品: {}", id);

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("id", id)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(PageError::Status(status));
        }

        let body = response.bytes().await?;
        let product: Product = serde_json::from_slice(&body)?;
        debug!("商品 {} 加载完成: {:?}", id, product.name);

        Ok(product)
    }
}
