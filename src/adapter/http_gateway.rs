//! コメント API の HTTP 実装（reqwest blocking）

use crate::adapter::endpoints::Endpoints;
use crate::domain::Comment;
use crate::ports::outbound::{CommentGateway, GatewayError};

/// HTTP によるコメントゲートウェイ
///
/// 作成は POST + `Content-Type: application/json`、一覧は GET。
/// タイムアウトやリトライは掛けない。
pub struct HttpCommentGateway {
    endpoints: Endpoints,
}

impl HttpCommentGateway {
    pub fn new(endpoints: Endpoints) -> Self {
        Self { endpoints }
    }
}

impl CommentGateway for HttpCommentGateway {
    fn submit(&self, comment: &Comment) -> Result<(), GatewayError> {
        let body = serde_json::to_string(comment)
            .map_err(|e| GatewayError::Transport(format!("failed to encode payload: {}", e)))?;

        let client = reqwest::blocking::Client::new();
        let response = client
            .post(&self.endpoints.post_url)
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .map_err(|e| GatewayError::Transport(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        if status.is_success() {
            // 成功時のボディは読まない
            return Ok(());
        }

        // 非 2xx はボディを平文で読み、ログ用に添えて返す
        let body = response
            .text()
            .map_err(|e| GatewayError::Transport(format!("failed to read response: {}", e)))?;
        Err(GatewayError::Rejected {
            status: status.as_u16(),
            body,
        })
    }

    fn fetch_all(&self) -> Result<Vec<Comment>, GatewayError> {
        let client = reqwest::blocking::Client::new();
        let response = client
            .get(&self.endpoints.list_url)
            .send()
            .map_err(|e| GatewayError::Transport(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            // 読み取り側は拒否時のボディを消費しない
            return Err(GatewayError::Rejected {
                status: status.as_u16(),
                body: String::new(),
            });
        }

        let text = response
            .text()
            .map_err(|e| GatewayError::Transport(format!("failed to read response: {}", e)))?;
        serde_json::from_str::<Vec<Comment>>(&text)
            .map_err(|e| GatewayError::Transport(format!("failed to decode comment list: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // HTTP の実呼び出しはテストしない。ペイロードの形はドメイン側の
    // serde テストで担保されるため、ここでは組み立てだけ確認する。

    #[test]
    fn test_gateway_holds_resolved_endpoints() {
        let gateway = HttpCommentGateway::new(Endpoints {
            post_url: "http://localhost:9/comment".to_string(),
            list_url: "http://localhost:9/comments".to_string(),
        });
        assert_eq!(gateway.endpoints.post_url, "http://localhost:9/comment");
        assert_eq!(gateway.endpoints.list_url, "http://localhost:9/comments");
    }

    #[test]
    fn test_gateway_error_display() {
        let err = GatewayError::Rejected {
            status: 500,
            body: "boom".to_string(),
        };
        assert_eq!(err.to_string(), "endpoint rejected request: HTTP 500");

        let err = GatewayError::Transport("connection refused".to_string());
        assert_eq!(err.to_string(), "transport failure: connection refused");
    }
}
