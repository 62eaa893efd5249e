use std::env;
use std::path::PathBuf;

use store_page::{
    app::product::ProductService,
    base::StoreLayout,
    build_router,
    infrastructure::{init_logging, load_config},
    AppState,
};
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config_path = parse_config_arg(env::args().skip(1))?;
    let config = load_config(config_path.as_deref())?;

    let _guard = init_logging(&config.logging)?;

    info!("启动商品详情页服务");
    info!("商品接口: {}", config.upstream.product_endpoint);

    let product_service = ProductService::from_config(&config.upstream)?;
    let state = AppState::new(product_service, StoreLayout::new(config.site.title.clone()));
    let app = build_router(state, &config.http);

    let addr = config.http.socket_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("服务运行在 http://{}", addr);
    info!("   GET /product/:id - 商品详情页");
    info!("   GET /health      - 健康检查");

    axum::serve(listener, app).await?;
    Ok(())
}

/// 解析 `--config <path>` 参数
fn parse_config_arg(
    mut args: impl Iterator<Item = String>,
) -> Result<Option<PathBuf>, Box<dyn std::error::Error>> {
    match args.next().as_deref() {
        None => Ok(None),
        Some("--config") => match args.next() {
            Some(path) => Ok(Some(PathBuf::from(path))),
            None => Err("--config 需要一个文件路径".into()),
        },
        Some("-h") | Some("--help") => {
            print_usage();
            std::process::exit(0);
        }
        Some(other) => {
            print_usage();
            Err(format!("未知参数: {}", other).into())
        }
    }
}

fn print_usage() {
    println!("用法: store-page [--config <path>]");
    println!();
    println!("未指定配置文件时依次查找 config.toml 和 ./config/config.toml，");
    println!("都不存在时使用默认配置。");
}
