//! Facade pattern: one `get_json` in front of URL assembly, transport and
//! JSON decoding, so callers only say which resource they want.
//!
//! Requests go through [`JsonTransport`]. The catalog ships only the
//! in-memory [`FixtureTransport`]; nothing here opens a socket.

use crate::error::{PatternError, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::collections::HashMap;
use url::form_urlencoded;
use url::Url;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiUser {
    pub id: u64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: u64,
    #[serde(rename = "userId")]
    pub user_id: u64,
    pub title: String,
}

pub trait JsonTransport {
    /// Performs a GET and returns the raw response body.
    fn get(&self, url: &Url) -> Result<String>;
}

/// Serves canned bodies keyed by full URL and remembers what was requested.
#[derive(Debug, Default)]
pub struct FixtureTransport {
    responses: HashMap<String, String>,
    requests: RefCell<Vec<String>>,
}

impl FixtureTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(mut self, url: &str, body: impl Into<String>) -> Self {
        self.responses.insert(url.to_string(), body.into());
        self
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }

    /// Two users and three posts under `base`.
    pub fn sample(base: &str) -> Result<Self> {
        let users = vec![
            ApiUser { id: 1, name: "Leanne Graham".into() },
            ApiUser { id: 2, name: "Ervin Howell".into() },
        ];
        let posts = vec![
            Post { id: 1, user_id: 1, title: "sunt aut facere".into() },
            Post { id: 2, user_id: 1, title: "qui est esse".into() },
            Post { id: 3, user_id: 2, title: "ea molestias quasi".into() },
        ];

        let mut transport = Self::new().respond(
            build_url(base, "users", &[])?.as_str(),
            serde_json::to_string(&users)?,
        );
        for user in &users {
            let id = user.id.to_string();
            let theirs: Vec<&Post> = posts.iter().filter(|p| p.user_id == user.id).collect();
            transport = transport.respond(
                build_url(base, "posts", &[("userId", id.as_str())])?.as_str(),
                serde_json::to_string(&theirs)?,
            );
        }
        Ok(transport)
    }
}

impl JsonTransport for FixtureTransport {
    fn get(&self, url: &Url) -> Result<String> {
        self.requests.borrow_mut().push(url.to_string());
        self.responses
            .get(url.as_str())
            .cloned()
            .ok_or_else(|| PatternError::transport(url.as_str(), "404 Not Found"))
    }
}

impl<T: JsonTransport + ?Sized> JsonTransport for &T {
    fn get(&self, url: &Url) -> Result<String> {
        (**self).get(url)
    }
}

/// `k1=v1&k2=v2` in the order given, form-encoded.
pub fn query_string(params: &[(&str, &str)]) -> String {
    form_urlencoded::Serializer::new(String::new())
        .extend_pairs(params)
        .finish()
}

/// Joins `path` onto `base`; the query is omitted when `params` is empty.
pub fn build_url(base: &str, path: &str, params: &[(&str, &str)]) -> Result<Url> {
    let mut base = Url::parse(base)?;
    if !base.path().ends_with('/') {
        let with_slash = format!("{}/", base.path());
        base.set_path(&with_slash);
    }

    // A leading slash would make `join` replace the base path.
    let mut url = base.join(path.trim_start_matches('/'))?;
    if !params.is_empty() {
        url.set_query(Some(&query_string(params)));
    }
    Ok(url)
}

// =============================================================================
// Milestone 1: Every call site does everything itself
// =============================================================================

pub fn verbose_get_users(transport: &dyn JsonTransport, base: &str) -> Result<Vec<ApiUser>> {
    let url = Url::parse(&format!("{}/users", base.trim_end_matches('/')))?;
    let body = transport.get(&url)?;
    serde_json::from_str(&body).map_err(|err| PatternError::Decode(err.to_string()))
}

pub fn verbose_get_user_posts(
    transport: &dyn JsonTransport,
    base: &str,
    user_id: u64,
) -> Result<Vec<Post>> {
    let url = Url::parse(&format!(
        "{}/posts?userId={}",
        base.trim_end_matches('/'),
        user_id
    ))?;
    let body = transport.get(&url)?;
    serde_json::from_str(&body).map_err(|err| PatternError::Decode(err.to_string()))
}

// =============================================================================
// Milestone 2: The facade
// =============================================================================

pub struct ApiFacade<T> {
    base: String,
    transport: T,
}

impl<T: JsonTransport> ApiFacade<T> {
    pub fn new(base: impl Into<String>, transport: T) -> Result<Self> {
        let base = base.into();
        Url::parse(&base)?;
        Ok(ApiFacade { base, transport })
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// The single place that knows how a request is made.
    pub fn get_json<D: DeserializeOwned>(&self, path: &str, params: &[(&str, &str)]) -> Result<D> {
        let url = build_url(&self.base, path, params)?;
        tracing::debug!(%url, "GET");
        let body = self.transport.get(&url).inspect_err(|err| {
            tracing::warn!(%url, error = %err, "request failed");
        })?;
        Ok(serde_json::from_str(&body)?)
    }

    pub fn get_users(&self) -> Result<Vec<ApiUser>> {
        self.get_json("users", &[])
    }

    pub fn get_user_posts(&self, user_id: u64) -> Result<Vec<Post>> {
        let id = user_id.to_string();
        self.get_json("posts", &[("userId", id.as_str())])
    }

    /// Each user's name with how many posts they wrote.
    pub fn post_counts(&self) -> Result<Vec<(String, usize)>> {
        self.get_users()?
            .into_iter()
            .map(|user| {
                let posts = self.get_user_posts(user.id)?;
                Ok((user.name, posts.len()))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://jsonplaceholder.typicode.com";

    #[test]
    fn test_query_string_keeps_order() {
        assert_eq!(query_string(&[("userId", "1"), ("page", "2")]), "userId=1&page=2");
        assert_eq!(query_string(&[]), "");
        assert_eq!(query_string(&[("q", "a b")]), "q=a+b");
    }

    #[test]
    fn test_build_url() {
        assert_eq!(build_url(BASE, "users", &[]).unwrap().as_str(), format!("{BASE}/users"));
        assert_eq!(
            build_url(BASE, "posts", &[("userId", "7")]).unwrap().as_str(),
            format!("{BASE}/posts?userId=7")
        );
        assert_eq!(
            build_url("https://example.com/api", "posts", &[]).unwrap().as_str(),
            "https://example.com/api/posts"
        );
        assert!(matches!(build_url("not a url", "users", &[]), Err(PatternError::InvalidUrl(_))));
    }

    #[test]
    fn test_leading_slash_keeps_base_path() {
        assert_eq!(
            build_url("https://example.com/api", "/users", &[]).unwrap().as_str(),
            "https://example.com/api/users"
        );
    }

    #[test]
    fn test_post_counts_through_facade() {
        let facade = ApiFacade::new(BASE, FixtureTransport::sample(BASE).unwrap()).unwrap();
        let counts = facade.post_counts().unwrap();
        assert_eq!(
            counts,
            vec![("Leanne Graham".to_string(), 2), ("Ervin Howell".to_string(), 1)]
        );
        assert_eq!(facade.transport().requests().len(), 3);
    }

    #[test]
    fn test_verbose_and_facade_agree() {
        let transport = FixtureTransport::sample(BASE).unwrap();
        let facade = ApiFacade::new(BASE, &transport).unwrap();

        assert_eq!(verbose_get_users(&transport, BASE).unwrap(), facade.get_users().unwrap());
        assert_eq!(
            verbose_get_user_posts(&transport, BASE, 2).unwrap(),
            facade.get_user_posts(2).unwrap()
        );
    }

    #[test]
    fn test_missing_resource_is_transport_error() {
        let facade = ApiFacade::new(BASE, FixtureTransport::new()).unwrap();
        let err = facade.get_users().unwrap_err();
        assert_eq!(err, PatternError::transport(format!("{BASE}/users"), "404 Not Found"));
    }

    #[test]
    fn test_bad_body_is_decode_error() {
        let transport = FixtureTransport::new().respond(&format!("{BASE}/users"), "{not json");
        let facade = ApiFacade::new(BASE, transport).unwrap();
        assert!(matches!(facade.get_users(), Err(PatternError::Decode(_))));
    }

    #[test]
    fn test_invalid_base_rejected() {
        assert!(ApiFacade::new("::nope::", FixtureTransport::new()).is_err());
    }
}
