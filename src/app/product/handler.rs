//! 商品详情页处理器

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    response::Html,
};
use tracing::instrument;

use super::{service::ProductService, view::render_product};
use crate::base::{error::PageError, layout::Layout};

#[derive(Clone)]
pub struct AppState {
    pub product_service: ProductService,
    pub layout: Arc<dyn Layout>,
}

impl AppState {
    pub fn new(product_service: ProductService, layout: impl Layout + 'static) -> Self {
        Self {
            product_service,
            layout: Arc::new(layout),
        }
    }
}

#[instrument(skip_all, fields(product_id = %id))]
pub async fn product_page(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Html<String>, PageError> {
    let product = state.product_service.load(&id).await?;
    let content = render_product(&product)?;
    let page = state.layout.wrap(&product.name, &content)?;
    Ok(Html(page))
}
