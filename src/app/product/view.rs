//! 商品详情页渲染

use askama::Template;

use super::model::Product;
use crate::base::error::PageError;

/// 图片路径前缀，固定拼接在 `product.image` 之前
pub const IMAGE_PARENT_FOLDER: &str = "../../";

#[derive(Template)]
#[template(path = "product.html")]
struct ProductTemplate<'a> {
    name: &'a str,
    description: &'a str,
    image_src: String,
    price: &'a str,
}

/// 将商品渲染为 HTML 片段
pub fn render_product(product: &Product) -> Result<String, PageError> {
    let template = ProductTemplate {
        name: &product.name,
        description: &product.description,
        image_src: format!("{}{}", IMAGE_PARENT_FOLDER, product.image),
        price: &product.price,
    };

    Ok(template.render()?)
}
