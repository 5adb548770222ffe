use reqwest::blocking::{Client, Response};
use serde::de::DeserializeOwned;
use serde_json::json;
use std::path::PathBuf;
use std::time::Duration;

use crate::classify::config::ApiConfig;
use crate::error::ClassifierError;
use crate::leetcode::credentials::load_headers;
use crate::leetcode::{JudgeApi, QuestionEnvelope, SubmissionsPage};

const SUBMISSIONS_ENDPOINT: &str = "submissions";
const GRAPHQL_ENDPOINT: &str = "graphql";

pub const QUESTION_TITLE_QUERY: &str = r#"
query questionTitle($titleSlug: String!) {
  question(titleSlug: $titleSlug) {
    questionId
    questionFrontendId
    title
    titleSlug
  }
}
"#;

/// Fully-formed GET for one page of recent submissions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionsRequest {
    pub url: String,
    pub query: Vec<(&'static str, String)>,
}

pub fn submissions_request(base_url: &str, limit: u8, offset: u32) -> SubmissionsRequest {
    SubmissionsRequest {
        url: base_url.to_string(),
        query: vec![("offset", offset.to_string()), ("limit", limit.to_string())],
    }
}

pub struct LeetCodeClient {
    http: Client,
    api: ApiConfig,
    credentials_file: PathBuf,
}

fn transport_error(
    endpoint: &'static str,
    timeout_secs: u64,
    err: reqwest::Error,
) -> ClassifierError {
    let reason = if err.is_timeout() {
        format!("request timed out after {timeout_secs}s")
    } else {
        err.to_string()
    };
    ClassifierError::Transport { endpoint, reason }
}

fn decode_json<T: DeserializeOwned>(
    endpoint: &'static str,
    response: Response,
) -> Result<T, ClassifierError> {
    let status = response.status();
    if !status.is_success() {
        return Err(ClassifierError::HttpStatus {
            endpoint,
            status: status.as_u16(),
        });
    }
    response.json::<T>().map_err(|err| {
        ClassifierError::data_missing(format!(
            "{endpoint} response is not the expected JSON: {err}"
        ))
    })
}

impl LeetCodeClient {
    pub fn new(api: ApiConfig, credentials_file: PathBuf) -> Result<Self, ClassifierError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(api.request_timeout_secs))
            .user_agent(api.user_agent.clone())
            .build()
            .map_err(|err| ClassifierError::Transport {
                endpoint: SUBMISSIONS_ENDPOINT,
                reason: format!("failed to build http client: {err}"),
            })?;
        Ok(Self {
            http,
            api,
            credentials_file,
        })
    }
}

impl JudgeApi for LeetCodeClient {
    fn submissions(&self, limit: u8, offset: u32) -> Result<SubmissionsPage, ClassifierError> {
        let headers = load_headers(&self.credentials_file)?;
        let request = submissions_request(&self.api.submissions_url, limit, offset);
        tracing::debug!(url = %request.url, limit, offset, "requesting submissions");

        let response = self
            .http
            .get(&request.url)
            .query(&request.query)
            .headers(headers)
            .send()
            .map_err(|err| {
                transport_error(SUBMISSIONS_ENDPOINT, self.api.request_timeout_secs, err)
            })?;
        decode_json(SUBMISSIONS_ENDPOINT, response)
    }

    fn question(&self, title_slug: &str) -> Result<QuestionEnvelope, ClassifierError> {
        let payload = json!({
            "query": QUESTION_TITLE_QUERY,
            "variables": { "titleSlug": title_slug },
        });
        tracing::debug!(url = %self.api.graphql_url, title_slug, "querying question");

        let response = self
            .http
            .post(&self.api.graphql_url)
            .json(&payload)
            .send()
            .map_err(|err| transport_error(GRAPHQL_ENDPOINT, self.api.request_timeout_secs, err))?;
        decode_json(GRAPHQL_ENDPOINT, response)
    }
}
