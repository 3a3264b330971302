//! Sequences endpoint client

use std::str::FromStr;
use std::time::Duration;

use reqwest::{Client, StatusCode, Url};
use thiserror::Error;
use tracing::{debug, warn};

use selector_core::{parse_content, parse_sequences, ParseError, SequencesResponse};

/// HTTP method used for the sequences request; deployments differ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestMethod {
    #[default]
    Get,
    Post,
}

impl FromStr for RequestMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "get" => Ok(RequestMethod::Get),
            "post" => Ok(RequestMethod::Post),
            other => Err(format!("unknown request method '{}' (expected get or post)", other)),
        }
    }
}

/// Shape of the server response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResponseMode {
    /// `{"content": "<markup>"}`, rendered verbatim
    #[default]
    Content,
    /// JSON array of sequence objects, rendered client-side
    Sequences,
}

impl FromStr for ResponseMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "content" => Ok(ResponseMode::Content),
            "sequences" => Ok(ResponseMode::Sequences),
            other => Err(format!(
                "unknown response mode '{}' (expected content or sequences)",
                other
            )),
        }
    }
}

/// Fetch errors
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Server returned {0}")]
    Status(StatusCode),

    #[error("Malformed response: {0}")]
    Parse(#[from] ParseError),
}

/// The concrete request a fetch will perform, split out so request shape is
/// testable without a server
#[derive(Debug, Clone, PartialEq)]
pub struct RequestPlan {
    pub method: RequestMethod,
    pub url: Url,
    pub body: Option<serde_json::Value>,
}

/// Client for the host `sequences` endpoint
#[derive(Debug, Clone)]
pub struct SequencesClient {
    http: Client,
    endpoint: Url,
    method: RequestMethod,
    mode: ResponseMode,
}

impl SequencesClient {
    pub fn new(
        endpoint: Url,
        method: RequestMethod,
        mode: ResponseMode,
    ) -> Result<Self, FetchError> {
        let http = Client::builder().timeout(Duration::from_secs(10)).build()?;
        Ok(Self {
            http,
            endpoint,
            method,
            mode,
        })
    }

    pub fn mode(&self) -> ResponseMode {
        self.mode
    }

    /// Build the request for a language without sending it
    pub fn plan_request(&self, lang: &str) -> RequestPlan {
        match self.method {
            RequestMethod::Get => {
                let mut url = self.endpoint.clone();
                url.query_pairs_mut().append_pair("lang", lang);
                RequestPlan {
                    method: RequestMethod::Get,
                    url,
                    body: None,
                }
            }
            RequestMethod::Post => RequestPlan {
                method: RequestMethod::Post,
                url: self.endpoint.clone(),
                body: Some(serde_json::json!({ "lang": lang })),
            },
        }
    }

    /// Fetch transcript content for a language. No retry; the caller decides
    /// what a failure means for the display.
    pub async fn fetch(&self, lang: &str) -> Result<SequencesResponse, FetchError> {
        let plan = self.plan_request(lang);
        debug!(url = %plan.url, method = ?plan.method, lang, "fetching sequences");

        let request = match plan.method {
            RequestMethod::Get => self.http.get(plan.url),
            RequestMethod::Post => {
                let body = plan.body.unwrap_or_default();
                self.http.post(plan.url).json(&body)
            }
        };

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!(%status, lang, "sequences request rejected");
            return Err(FetchError::Status(status));
        }

        let body = response.text().await?;
        let parsed = match self.mode {
            ResponseMode::Content => parse_content(&body)?,
            ResponseMode::Sequences => parse_sequences(&body)?,
        };
        Ok(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_client(method: RequestMethod) -> SequencesClient {
        SequencesClient::new(
            Url::parse("http://host/block/42/sequences").unwrap(),
            method,
            ResponseMode::Sequences,
        )
        .unwrap()
    }

    #[test]
    fn test_get_plan_carries_lang_query() {
        let client = make_client(RequestMethod::Get);
        let plan = client.plan_request("en");
        assert_eq!(plan.method, RequestMethod::Get);
        assert_eq!(plan.url.query(), Some("lang=en"));
        assert!(plan.body.is_none());
    }

    #[test]
    fn test_get_plan_encodes_lang() {
        let client = make_client(RequestMethod::Get);
        let plan = client.plan_request("pt br");
        assert_eq!(plan.url.query(), Some("lang=pt+br"));
    }

    #[test]
    fn test_post_plan_carries_json_body() {
        let client = make_client(RequestMethod::Post);
        let plan = client.plan_request("de");
        assert_eq!(plan.method, RequestMethod::Post);
        assert_eq!(plan.url.query(), None);
        assert_eq!(plan.body, Some(serde_json::json!({ "lang": "de" })));
    }

    #[test]
    fn test_method_and_mode_parsing() {
        assert_eq!("GET".parse::<RequestMethod>().unwrap(), RequestMethod::Get);
        assert_eq!("post".parse::<RequestMethod>().unwrap(), RequestMethod::Post);
        assert!("put".parse::<RequestMethod>().is_err());
        assert_eq!(
            "sequences".parse::<ResponseMode>().unwrap(),
            ResponseMode::Sequences
        );
        assert!("html".parse::<ResponseMode>().is_err());
    }
}
