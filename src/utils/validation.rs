use crate::utils::error::{Result, TrademarkError};
use std::net::SocketAddr;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn invalid(field_name: &str, value: impl ToString, reason: impl Into<String>) -> TrademarkError {
    TrademarkError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: value.to_string(),
        reason: reason.into(),
    }
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(invalid(field_name, url_str, "URL cannot be empty"));
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(invalid(
                field_name,
                url_str,
                format!("Unsupported URL scheme: {}", scheme),
            )),
        },
        Err(e) => Err(invalid(
            field_name,
            url_str,
            format!("Invalid URL format: {}", e),
        )),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(invalid(field_name, path, "Path cannot be empty"));
    }

    if path.contains('\0') {
        return Err(invalid(field_name, path, "Path contains null bytes"));
    }

    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(invalid(
            field_name,
            value,
            format!("Value must be at least {}", min_value),
        ));
    }
    Ok(())
}

/// 接受 `ip:port` 或 `host:port`，主機名稱留待綁定時解析
pub fn validate_socket_addr(field_name: &str, addr: &str) -> Result<()> {
    if addr.parse::<SocketAddr>().is_ok() {
        return Ok(());
    }

    let Some((host, port)) = addr.rsplit_once(':') else {
        return Err(invalid(field_name, addr, "Expected `host:port`"));
    };
    if host.trim().is_empty() {
        return Err(invalid(field_name, addr, "Host cannot be empty"));
    }
    port.parse::<u16>()
        .map_err(|e| invalid(field_name, addr, format!("Invalid port: {}", e)))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("data.url", "https://example.com/trademarks.json").is_ok());
        assert!(validate_url("data.url", "http://example.com").is_ok());
        assert!(validate_url("data.url", "").is_err());
        assert!(validate_url("data.url", "invalid-url").is_err());
        assert!(validate_url("data.url", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_path() {
        assert!(validate_path("data.path", "trademark_sample.json").is_ok());
        assert!(validate_path("data.path", "  ").is_err());
        assert!(validate_path("data.path", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("query.default_limit", 10, 1).is_ok());
        assert!(validate_positive_number("query.default_limit", 0, 1).is_err());
    }

    #[test]
    fn test_validate_socket_addr() {
        assert!(validate_socket_addr("server.bind", "127.0.0.1:8000").is_ok());
        assert!(validate_socket_addr("server.bind", "[::1]:8000").is_ok());
        assert!(validate_socket_addr("server.bind", "localhost:8000").is_ok());
        assert!(validate_socket_addr("server.bind", "localhost").is_err());
        assert!(validate_socket_addr("server.bind", ":8000").is_err());
        assert!(validate_socket_addr("server.bind", "localhost:http").is_err());
        assert!(validate_socket_addr("server.bind", "localhost:70000").is_err());
    }
}
