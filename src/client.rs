//! Google Sheets request builder

use crate::{
    error::{Error, Result},
    query::QueryParams,
    request::{HttpRequest, Method},
    utils::{APPLICATION_JSON, AUTHORIZATION, CONTENT_TYPE, non_empty},
};
use std::collections::BTreeMap;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://sheets.googleapis.com";

/// Default endpoint for value operations, `/v4/spreadsheets/{id}/values`
pub const VALUES_ENDPOINT: &str = "values";

const API_PATH: [&str; 2] = ["v4", "spreadsheets"];

const ACCESS_TOKEN_ENV: &str = "GOOGLE_SHEETS_ACCESS_TOKEN";
const API_KEY_ENV: &str = "GOOGLE_SHEETS_API_KEY";
const BASE_URL_ENV: &str = "GOOGLE_SHEETS_BASE_URL";

/// Builder configuration, fixed at construction.
///
/// When both credentials are set the access token wins and the API key is
/// never sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub base_url: String,
    pub api_key: Option<String>,
    pub access_token: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            api_key: None,
            access_token: None,
        }
    }
}

/// An operation that knows how to turn itself into an [`HttpRequest`]
pub trait Operation {
    fn build(&self, builder: &RequestBuilder) -> Result<HttpRequest>;
}

#[derive(Debug, Clone, Default)]
pub struct RequestBuilder {
    config: Config,
}

impl RequestBuilder {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Create a builder that authenticates with the given API key
    pub fn with_api_key(api_key: &str) -> Self {
        Self::new(Config {
            api_key: Some(api_key.to_owned()),
            ..Config::default()
        })
    }

    /// Create a builder that authenticates with the given OAuth access token
    pub fn with_access_token(access_token: &str) -> Self {
        Self::new(Config {
            access_token: Some(access_token.to_owned()),
            ..Config::default()
        })
    }

    /// Create a builder from `GOOGLE_SHEETS_ACCESS_TOKEN` or `GOOGLE_SHEETS_API_KEY`.
    ///
    /// `GOOGLE_SHEETS_BASE_URL` overrides the default endpoint when set.
    pub fn from_env() -> Result<Self> {
        Ok(Self::new(config_from_vars(|name| std::env::var(name))?))
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn request<O: Operation>(&self, operation: &O) -> Result<HttpRequest> {
        operation.build(self)
    }

    /// Build a request under `/v4/spreadsheets[/{spreadsheet_id}]/{endpoint}`.
    ///
    /// Empty endpoint segments are dropped, so `""` addresses the spreadsheet
    /// itself. Segments are percent-encoded by the URL layer. A `Some("")` id
    /// and `.`/`..` segments are rejected since they would address another
    /// resource.
    pub fn build_spreadsheet_request(
        &self,
        method: Method,
        spreadsheet_id: Option<&str>,
        endpoint: &str,
        query: &QueryParams,
        body: Option<Vec<u8>>,
    ) -> Result<HttpRequest> {
        if spreadsheet_id.is_some_and(str::is_empty) {
            return Err(Error::InvalidParameter("spreadsheet_id is empty".to_owned()));
        }
        let segments = spreadsheet_id
            .into_iter()
            .chain(endpoint.split('/').filter(|segment| !segment.is_empty()))
            .collect::<Vec<_>>();
        if let Some(segment) = segments.iter().find(|segment| is_dot_segment(segment)) {
            return Err(Error::InvalidUrl(format!(
                "dot segment `{}` in `{}`",
                segment, endpoint
            )));
        }

        let base_url = &self.config.base_url;
        let mut url = Url::parse(base_url).map_err(|_| Error::InvalidUrl(base_url.clone()))?;
        url.set_query(None);
        url.set_fragment(None);
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|_| Error::InvalidUrl(base_url.clone()))?;
            path.pop_if_empty().extend(API_PATH).extend(&segments);
        }

        let access_token = non_empty(self.config.access_token.as_ref());
        let mut pairs = QueryParams::new();
        if access_token.is_none()
            && let Some(api_key) = non_empty(self.config.api_key.as_ref())
        {
            pairs.push("key", api_key);
        }
        pairs.extend(query.iter());
        if !pairs.is_empty() {
            url.query_pairs_mut().extend_pairs(pairs.iter());
        }

        let mut headers = BTreeMap::new();
        if let Some(token) = access_token {
            headers.insert(AUTHORIZATION.to_owned(), format!("Bearer {}", token));
        }
        if body.is_some() {
            headers.insert(CONTENT_TYPE.to_owned(), APPLICATION_JSON.to_owned());
        }

        tracing::debug!(%method, path = url.path(), "built spreadsheet request");
        Ok(HttpRequest::new(method, url, headers, body))
    }

    /// Build a request under `/v4/spreadsheets/{spreadsheet_id}/{endpoint}[/{range}]`.
    ///
    /// The range is passed through as-is; `Sheet1!A1:B2` keeps its `!` and `:`.
    pub fn build_values_request(
        &self,
        method: Method,
        spreadsheet_id: &str,
        range: Option<&str>,
        endpoint: &str,
        query: &QueryParams,
        body: Option<Vec<u8>>,
    ) -> Result<HttpRequest> {
        let endpoint = match range {
            Some(range) => format!("{}/{}", endpoint, range),
            None => endpoint.to_owned(),
        };
        self.build_spreadsheet_request(method, Some(spreadsheet_id), &endpoint, query, body)
    }

    /// Build a batch request such as `values:batchGet`
    pub fn build_batch_request(
        &self,
        method: Method,
        spreadsheet_id: &str,
        endpoint: &str,
        query: &QueryParams,
        body: Option<Vec<u8>>,
    ) -> Result<HttpRequest> {
        self.build_spreadsheet_request(method, Some(spreadsheet_id), endpoint, query, body)
    }
}

/// `.` and `..` would be normalized away by the URL layer
fn is_dot_segment(segment: &str) -> bool {
    segment == "." || segment == ".."
}

/// Read the configuration through `var`, usually `std::env::var`.
///
/// An empty access token counts as unset, and then a non-empty API key is required.
fn config_from_vars<F>(var: F) -> Result<Config>
where
    F: Fn(&str) -> std::result::Result<String, std::env::VarError>,
{
    let access_token = var(ACCESS_TOKEN_ENV).ok().filter(|token| !token.is_empty());
    let api_key = match access_token {
        Some(_) => var(API_KEY_ENV).ok(),
        None => {
            let api_key = var(API_KEY_ENV)?;
            if api_key.is_empty() {
                return Err(std::env::VarError::NotPresent.into());
            }
            Some(api_key)
        }
    };
    let base_url = var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_owned());
    Ok(Config {
        base_url,
        api_key,
        access_token,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty() -> QueryParams {
        QueryParams::new()
    }

    #[test]
    fn test_spreadsheet_path() {
        let builder = RequestBuilder::default();
        let req = builder
            .build_spreadsheet_request(Method::Get, Some("S1"), "values/A1:B2", &empty(), None)
            .unwrap();
        assert_eq!(
            req.url().as_str(),
            "https://sheets.googleapis.com/v4/spreadsheets/S1/values/A1:B2"
        );
        assert_eq!(req.url().query(), None);
        assert!(req.headers().is_empty());
    }

    #[test]
    fn test_empty_segments_are_elided() {
        let builder = RequestBuilder::default();
        for endpoint in ["", "/", "//values//", "values/"] {
            let req = builder
                .build_spreadsheet_request(Method::Get, Some("S1"), endpoint, &empty(), None)
                .unwrap();
            assert!(!req.url().path().ends_with('/'), "{}", req.url());
            assert!(!req.url().path().contains("//"), "{}", req.url());
        }
        let req = builder
            .build_spreadsheet_request(Method::Post, None, "", &empty(), None)
            .unwrap();
        assert_eq!(req.url().path(), "/v4/spreadsheets");
    }

    #[test]
    fn test_base_url_path_is_kept() {
        let builder = RequestBuilder::new(Config {
            base_url: "http://localhost:8080/proxy/".to_owned(),
            ..Config::default()
        });
        let req = builder
            .build_spreadsheet_request(Method::Get, Some("S1"), "", &empty(), None)
            .unwrap();
        assert_eq!(req.url().as_str(), "http://localhost:8080/proxy/v4/spreadsheets/S1");
    }

    #[test]
    fn test_api_key_in_query() {
        let builder = RequestBuilder::with_api_key("K");
        let mut query = QueryParams::new();
        query.push("majorDimension", "ROWS");
        let req = builder
            .build_values_request(Method::Get, "S1", Some("A1"), VALUES_ENDPOINT, &query, None)
            .unwrap();
        assert_eq!(req.url().query(), Some("key=K&majorDimension=ROWS"));
        assert_eq!(req.header("Authorization"), None);
    }

    #[test]
    fn test_access_token_wins_over_api_key() {
        let builder = RequestBuilder::new(Config {
            api_key: Some("K".to_owned()),
            access_token: Some("T".to_owned()),
            ..Config::default()
        });
        let req = builder
            .build_values_request(Method::Get, "S1", Some("A1"), VALUES_ENDPOINT, &empty(), None)
            .unwrap();
        assert!(req.url().query_pairs().all(|(key, _)| key != "key"));
        assert_eq!(req.url().query(), None);
        assert_eq!(req.header("Authorization"), Some("Bearer T"));
    }

    #[test]
    fn test_empty_credentials_are_ignored() {
        let builder = RequestBuilder::new(Config {
            api_key: Some(String::new()),
            access_token: Some(String::new()),
            ..Config::default()
        });
        let req = builder
            .build_spreadsheet_request(Method::Get, Some("S1"), "", &empty(), None)
            .unwrap();
        assert_eq!(req.url().query(), None);
        assert!(req.headers().is_empty());
    }

    #[test]
    fn test_body_sets_content_type() {
        let builder = RequestBuilder::default();
        let req = builder
            .build_values_request(
                Method::Put,
                "S1",
                Some("A1"),
                VALUES_ENDPOINT,
                &empty(),
                Some(b"{}".to_vec()),
            )
            .unwrap();
        assert_eq!(req.header("Content-Type"), Some("application/json"));
        assert_eq!(req.body(), Some(&b"{}"[..]));
    }

    #[test]
    fn test_range_is_encoded_by_url_layer() {
        let builder = RequestBuilder::default();
        let req = builder
            .build_values_request(
                Method::Get,
                "S1",
                Some("My Sheet!A1:B2"),
                VALUES_ENDPOINT,
                &empty(),
                None,
            )
            .unwrap();
        assert_eq!(req.url().path(), "/v4/spreadsheets/S1/values/My%20Sheet!A1:B2");
    }

    #[test]
    fn test_batch_request() {
        let builder = RequestBuilder::default();
        let req = builder
            .build_batch_request(Method::Get, "S1", "values:batchGet", &empty(), None)
            .unwrap();
        assert_eq!(req.url().path(), "/v4/spreadsheets/S1/values:batchGet");
    }

    #[test]
    fn test_invalid_base_url() {
        for base_url in ["not a url", "mailto:someone@example.com"] {
            let builder = RequestBuilder::new(Config {
                base_url: base_url.to_owned(),
                ..Config::default()
            });
            let err = builder
                .build_spreadsheet_request(Method::Get, Some("S1"), "", &empty(), None)
                .unwrap_err();
            assert_eq!(err, Error::InvalidUrl(base_url.to_owned()));
        }
    }

    #[test]
    fn test_empty_spreadsheet_id_is_rejected() {
        let builder = RequestBuilder::default();
        let err = builder
            .build_values_request(Method::Get, "", Some("A1:B2"), VALUES_ENDPOINT, &empty(), None)
            .unwrap_err();
        assert_eq!(err, Error::InvalidParameter("spreadsheet_id is empty".to_owned()));
        assert!(
            builder
                .build_batch_request(Method::Get, "", "values:batchGet", &empty(), None)
                .is_err()
        );
    }

    #[test]
    fn test_dot_segments_are_rejected() {
        let builder = RequestBuilder::default();
        for range in [".", "..", "../x", "A1/../..", "./A1"] {
            let err = builder
                .build_values_request(Method::Get, "S1", Some(range), VALUES_ENDPOINT, &empty(), None)
                .unwrap_err();
            assert!(matches!(err, Error::InvalidUrl(_)), "{}", range);
        }
        assert!(
            builder
                .build_spreadsheet_request(Method::Get, Some(".."), "", &empty(), None)
                .is_err()
        );
        // dots inside a segment are ordinary characters
        let req = builder
            .build_values_request(Method::Get, "S1", Some("Sheet.1!A1"), VALUES_ENDPOINT, &empty(), None)
            .unwrap();
        assert_eq!(req.url().path(), "/v4/spreadsheets/S1/values/Sheet.1!A1");
    }

    fn vars(
        entries: &[(&str, &str)],
    ) -> impl Fn(&str) -> std::result::Result<String, std::env::VarError> {
        let entries = entries
            .iter()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect::<std::collections::HashMap<_, _>>();
        move |name| {
            entries
                .get(name)
                .cloned()
                .ok_or(std::env::VarError::NotPresent)
        }
    }

    #[test]
    fn test_config_from_vars() {
        let config = config_from_vars(vars(&[(ACCESS_TOKEN_ENV, "T")])).unwrap();
        assert_eq!(config.access_token.as_deref(), Some("T"));
        assert_eq!(config.api_key, None);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);

        let config = config_from_vars(vars(&[
            (API_KEY_ENV, "K"),
            (BASE_URL_ENV, "http://localhost:8080"),
        ]))
        .unwrap();
        assert_eq!(config.api_key.as_deref(), Some("K"));
        assert_eq!(config.base_url, "http://localhost:8080");

        assert_eq!(
            config_from_vars(vars(&[])),
            Err(Error::CredentialNotFound(std::env::VarError::NotPresent))
        );
    }

    #[test]
    fn test_empty_access_token_requires_api_key() {
        assert_eq!(
            config_from_vars(vars(&[(ACCESS_TOKEN_ENV, "")])),
            Err(Error::CredentialNotFound(std::env::VarError::NotPresent))
        );
        assert!(config_from_vars(vars(&[(ACCESS_TOKEN_ENV, ""), (API_KEY_ENV, "")])).is_err());
        let config = config_from_vars(vars(&[(ACCESS_TOKEN_ENV, ""), (API_KEY_ENV, "K")])).unwrap();
        assert_eq!(config.access_token, None);
        assert_eq!(config.api_key.as_deref(), Some("K"));
    }
}
