//! reqwestによるドキュメントトランスポート

use crate::error::Result;
use portfolio_common::{DocumentRequest, DocumentResponse, DocumentTransport, Method};
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(timeout_seconds: u64) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_seconds))
            .build()?;
        Ok(Self { client })
    }
}

impl DocumentTransport for ReqwestTransport {
    async fn send(&self, request: DocumentRequest) -> std::result::Result<DocumentResponse, String> {
        let mut builder = match request.method {
            Method::Get => self.client.get(&request.url),
            Method::Put => self.client.put(&request.url),
        };
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        tracing::debug!(method = request.method.as_str(), url = %request.url, "sending request");
        let response = builder.send().await.map_err(|e| e.to_string())?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| e.to_string())?;
        Ok(DocumentResponse { status, body })
    }
}
