// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! GitHub REST access for pull-request labels.
//!
//! [`LabelService`] is the seam the applier works against; [`GitHubClient`]
//! implements it over blocking reqwest.

use std::fmt;
use std::str::FromStr;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use reqwest::StatusCode;
use reqwest::blocking::{Client, Response};
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};
use serde::Deserialize;

use crate::error::{Error, Result};

/// Default GitHub REST API base URL.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

const USER_AGENT: &str = concat!("area-labeler/", env!("CARGO_PKG_VERSION"));

/// Characters escaped in a URL path segment (RFC 3986 unreserved are kept).
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// A repository identifier in `owner/name` form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoSlug {
    pub owner: String,
    pub name: String,
}

impl FromStr for RepoSlug {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.split_once('/') {
            Some((owner, name))
                if !owner.is_empty() && !name.is_empty() && !name.contains('/') =>
            {
                Ok(RepoSlug {
                    owner: owner.to_string(),
                    name: name.to_string(),
                })
            }
            _ => Err(Error::Argument(format!(
                "invalid repository '{}' (expected owner/name)",
                s
            ))),
        }
    }
}

impl fmt::Display for RepoSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// A label defined in a repository.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Label {
    pub name: String,
}

/// A resolved pull request.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PullRequest {
    pub number: u64,
    #[serde(default)]
    pub title: String,
}

/// Remote operations needed to label a pull request.
pub trait LabelService {
    /// Resolve a pull request by number.
    fn pull_request(&self, repo: &RepoSlug, number: u64) -> Result<PullRequest>;

    /// Look up a label by name; `None` if the repository has no such label.
    fn find_label(&self, repo: &RepoSlug, name: &str) -> Result<Option<Label>>;

    /// Attach an existing label to a pull request.
    fn add_label(&self, repo: &RepoSlug, number: u64, label: &Label) -> Result<()>;
}

/// GitHub error payload.
#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

#[derive(serde::Serialize)]
struct AddLabels<'a> {
    labels: [&'a str; 1],
}

/// Blocking GitHub REST client authenticated with a token.
pub struct GitHubClient {
    http: Client,
    api_url: String,
}

impl GitHubClient {
    /// Build a client for `api_url` (no trailing slash needed).
    pub fn new(api_url: &str, token: &str) -> Result<Self> {
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", token))
            .map_err(|_| Error::Argument("GitHub token contains invalid characters".into()))?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            "x-github-api-version",
            HeaderValue::from_static("2022-11-28"),
        );

        let http = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()
            .map_err(|e| Error::Remote(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http,
            api_url: api_url.trim_end_matches('/').to_string(),
        })
    }

    fn repo_url(&self, repo: &RepoSlug) -> String {
        format!(
            "{}/repos/{}/{}",
            self.api_url,
            utf8_percent_encode(&repo.owner, PATH_SEGMENT),
            utf8_percent_encode(&repo.name, PATH_SEGMENT)
        )
    }
}

impl LabelService for GitHubClient {
    fn pull_request(&self, repo: &RepoSlug, number: u64) -> Result<PullRequest> {
        let url = format!("{}/pulls/{}", self.repo_url(repo), number);
        tracing::debug!("GET {}", url);
        let response = self.http.get(&url).send().map_err(request_error)?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(Error::Remote(format!(
                "pull request #{} not found in {}",
                number, repo
            )));
        }
        let response = check_status(response)?;
        response.json().map_err(request_error)
    }

    fn find_label(&self, repo: &RepoSlug, name: &str) -> Result<Option<Label>> {
        let url = format!(
            "{}/labels/{}",
            self.repo_url(repo),
            utf8_percent_encode(name, PATH_SEGMENT)
        );
        tracing::debug!("GET {}", url);
        let response = self.http.get(&url).send().map_err(request_error)?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let response = check_status(response)?;
        response.json().map(Some).map_err(request_error)
    }

    fn add_label(&self, repo: &RepoSlug, number: u64, label: &Label) -> Result<()> {
        let url = format!("{}/issues/{}/labels", self.repo_url(repo), number);
        tracing::debug!("POST {} ({})", url, label.name);
        let response = self
            .http
            .post(&url)
            .json(&AddLabels {
                labels: [label.name.as_str()],
            })
            .send()
            .map_err(request_error)?;

        check_status(response).map(|_| ())
    }
}

fn request_error(err: reqwest::Error) -> Error {
    Error::Remote(err.to_string())
}

/// Turn a non-success response into an error carrying GitHub's message.
fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let url = response.url().to_string();
    let text = response.text().unwrap_or_default();
    let message = serde_json::from_str::<ErrorBody>(&text)
        .map(|body| body.message)
        .unwrap_or(text);

    Err(Error::Remote(format!(
        "{} {}: {}",
        status.as_u16(),
        url,
        message
    )))
}

#[cfg(test)]
#[path = "github_tests.rs"]
mod tests;
