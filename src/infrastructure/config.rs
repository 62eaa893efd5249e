use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// 服务配置
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP 服务配置
    pub http: HttpConfig,
    /// 上游商品接口配置
    pub upstream: UpstreamConfig,
    /// 日志配置
    pub logging: LoggingConfig,
    /// 站点配置
    pub site: SiteConfig,
}

/// HTTP 服务配置
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// 绑定地址
    pub bind_address: String,
    /// HTTP 服务端口
    pub port: u16,
    /// 请求超时时间（秒）
    pub timeout_seconds: u64,
}

/// 上游商品接口配置
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UpstreamConfig {
    /// 商品查询接口地址，请求时追加 `?id=<id>`
    pub product_endpoint: String,
    /// 请求超时时间（秒）
    pub timeout_seconds: u64,
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// 日志文件路径
    pub log_path: PathBuf,
    /// 日志文件名前缀
    pub file_prefix: String,
    /// 是否启用控制台输出
    pub console_output: bool,
    /// 日志级别 (trace, debug, info, warn, error)
    pub level: String,
}

/// 站点配置
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// 站点标题
    pub title: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0".to_string(),
            port: 8080,
            timeout_seconds: 30,
        }
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            product_endpoint: "http://localhost:3000/api/product".to_string(),
            timeout_seconds: 10,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_path: PathBuf::from("./logs"),
            file_prefix: "store-page".to_string(),
            console_output: true,
            level: "info".to_string(),
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Store".to_string(),
        }
    }
}

impl HttpConfig {
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.bind_address, self.port)
    }
}

impl Config {
    /// 从配置文件加载配置
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::FileRead(e.to_string()))?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// 验证配置的有效性
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.http.port == 0 {
            return Err(ConfigError::Validation("HTTP端口必须大于0".to_string()));
        }
        if self.http.bind_address.is_empty() {
            return Err(ConfigError::Validation("绑定地址不能为空".to_string()));
        }
        if self.http.timeout_seconds == 0 {
            return Err(ConfigError::Validation("HTTP超时时间必须大于0".to_string()));
        }

        match reqwest::Url::parse(&self.upstream.product_endpoint) {
            Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {}
            _ => {
                return Err(ConfigError::Validation(format!(
                    "无效的商品接口地址: {}",
                    self.upstream.product_endpoint
                )))
            }
        }
        if self.upstream.timeout_seconds == 0 {
            return Err(ConfigError::Validation("上游超时时间必须大于0".to_string()));
        }

        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.as_str()) {
            return Err(ConfigError::Validation(format!(
                "无效的日志级别: {}，有效值: {:?}",
                self.logging.level, valid_levels
            )));
        }

        Ok(())
    }
}

/// 配置错误类型
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("文件读取错误: {0}")]
    FileRead(String),
    #[error("配置解析错误: {0}")]
    Parse(String),
    #[error("配置验证错误: {0}")]
    Validation(String),
}

/// 加载并验证配置
///
/// 指定路径时只读取该文件；否则依次查找默认路径，都不存在时使用默认配置。
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    let config = match path {
        Some(path) => Config::load_from_file(path)?,
        None => {
            let found = ["config.toml", "./config/config.toml"]
                .iter()
                .map(Path::new)
                .find(|p| p.exists());
            match found {
                Some(p) => {
                    info!("从配置文件加载: {}", p.display());
                    Config::load_from_file(p)?
                }
                None => {
                    info!("未找到配置文件，使用默认配置");
                    Config::default()
                }
            }
        }
    };

    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.http.port, 8080);
        assert_eq!(
            config.upstream.product_endpoint,
            "http://localhost:3000/api/product"
        );
        assert_eq!(config.logging.level, "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();
        config.http.port = 0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.upstream.product_endpoint = "localhost:3000".to_string();
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.upstream.product_endpoint = "ftp://example.com/api".to_string();
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.logging.level = "verbose".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: Config = toml::from_str(
            r#"
            [upstream]
            product_endpoint = "http://catalog.internal/api/product"
            "#,
        )
        .unwrap();

        assert_eq!(
            config.upstream.product_endpoint,
            "http://catalog.internal/api/product"
        );
        assert_eq!(config.upstream.timeout_seconds, 10);
        assert_eq!(config.http.port, 8080);
        assert_eq!(config.site.title, "Store");
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("test_config.toml");
        fs::write(
            &config_path,
            r#"
            [http]
            port = 9090

            [site]
            title = "Corner Shop"
            "#,
        )
        .unwrap();

        let loaded = load_config(Some(config_path.as_path())).unwrap();
        assert_eq!(loaded.http.port, 9090);
        assert_eq!(loaded.site.title, "Corner Shop");
        assert_eq!(
            loaded.upstream.product_endpoint,
            UpstreamConfig::default().product_endpoint
        );
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("bad.toml");
        fs::write(&config_path, "[logging]\nlevel = \"loud\"\n").unwrap();

        let result = load_config(Some(config_path.as_path()));
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let result = load_config(Some(dir.path().join("absent.toml").as_path()));
        assert!(matches!(result, Err(ConfigError::FileRead(_))));
    }
}
