//! Retrieval of the published AWS IP ranges.

use crate::config::LookupConfig;
use crate::models::IpRangesData;
use std::error::Error;

/// Parse a provider document, naming the JSON path on failure.
pub fn parse_ip_ranges(json: &str) -> Result<IpRangesData, Box<dyn Error>> {
    let mut deserializer = serde_json::Deserializer::from_str(json);
    let data: IpRangesData = serde_path_to_error::deserialize(&mut deserializer)
        .map_err(|e| format!("Error parsing ip ranges JSON: path={} error={}", e.path(), e))?;
    Ok(data)
}

/// Fetch the latest AWS IP ranges from `config.source_url`.
///
/// One attempt, bounded by `config.timeout`. Non-2xx responses are errors.
pub async fn fetch_aws_ip_ranges(config: &LookupConfig) -> Result<IpRangesData, Box<dyn Error>> {
    log::info!("Fetching IP ranges from {}", config.source_url);

    let client = reqwest::Client::builder()
        .timeout(config.timeout)
        .build()
        .map_err(|e| format!("Failed to create HTTP client: {e}"))?;

    let response = client
        .get(&config.source_url)
        .send()
        .await
        .map_err(|e| format!("Request to {} failed: {e}", config.source_url))?
        .error_for_status()
        .map_err(|e| format!("{e}"))?;

    let body = response
        .text()
        .await
        .map_err(|e| format!("Error reading response body: {e}"))?;
    log::debug!("Received {} bytes", body.len());

    let data = parse_ip_ranges(&body)?;
    log::info!(
        "Got syncToken={} with {} IPv4 and {} IPv6 prefixes",
        data.sync_token.as_deref().unwrap_or("unknown"),
        data.prefixes.len(),
        data.ipv6_prefixes.len()
    );
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Answer one HTTP request on a local port with a canned response.
    async fn serve_once(status_line: &'static str, body: &'static str) -> LookupConfig {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = [0u8; 4096];
            let _ = socket.read(&mut request).await;
            let response = format!(
                "{status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
        });
        LookupConfig {
            source_url: format!("http://{addr}/ip-ranges.json"),
            timeout: Duration::from_secs(5),
        }
    }

    #[tokio::test]
    async fn test_fetch_parses_body() {
        let config = serve_once(
            "HTTP/1.1 200 OK",
            r#"{"syncToken":"77","createDate":"2024-06-17-21-33-20",
                "prefixes":[{"ip_prefix":"52.95.110.0/24","service":"S3","region":"us-east-1"}],
                "ipv6_prefixes":[]}"#,
        )
        .await;
        let data = fetch_aws_ip_ranges(&config).await.unwrap();
        assert_eq!(data.sync_token.as_deref(), Some("77"));
        assert_eq!(data.prefixes.len(), 1);
        assert_eq!(data.prefixes[0].service.as_deref(), Some("S3"));
        assert!(data.ipv6_prefixes.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_non_success_status_fails() {
        let config = serve_once("HTTP/1.1 503 Service Unavailable", "{}").await;
        let err = fetch_aws_ip_ranges(&config).await.unwrap_err();
        assert!(err.to_string().contains("503"), "got: {err}");
    }

    #[tokio::test]
    async fn test_fetch_bad_body_fails() {
        let config = serve_once("HTTP/1.1 200 OK", "<html>oops</html>").await;
        let err = fetch_aws_ip_ranges(&config).await.unwrap_err();
        assert!(err.to_string().contains("Error parsing ip ranges JSON"), "got: {err}");
    }

    #[test]
    fn test_parse_ip_ranges_error_names_path() {
        let err = parse_ip_ranges(r#"{"prefixes": [{"ip_prefix": 12}]}"#).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("prefixes[0].ip_prefix"), "got: {msg}");
    }

    #[test]
    fn test_parse_ip_ranges_not_json() {
        assert!(parse_ip_ranges("<html>502 Bad Gateway</html>").is_err());
    }

    #[tokio::test]
    async fn test_fetch_unreachable_source_fails() {
        let config = LookupConfig {
            source_url: "http://127.0.0.1:9/ip-ranges.json".to_string(),
            timeout: std::time::Duration::from_secs(2),
        };
        assert!(fetch_aws_ip_ranges(&config).await.is_err());
    }
}
