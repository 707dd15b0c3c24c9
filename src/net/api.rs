//! REST client for the grocery-list backend.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds and tests: the transport returns an "unavailable" error,
//! so only URL building and reply decoding are exercised there.
//!
//! ERROR HANDLING
//! ==============
//! Every operation yields `Result<_, ApiError>`. A non-2xx status, a
//! transport failure and a malformed body all become the same error kind
//! with a message naming the failed action. The one special case is
//! [`ListApi::list_by_id`], which reports 404 as `Ok(None)`.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::types::{
    AddItemBody, CreateListBody, GroceryItem, GroceryList, RenameListBody, WireItem, WireList, transform_lists,
};
use crate::config::ClientConfig;
use crate::util::encode::encode_component;

const FETCH_LISTS: &str = "Failed to fetch lists";
const CREATE_LIST: &str = "Failed to create list";
const ADD_ITEM: &str = "Failed to add item";
const TOGGLE_ITEM: &str = "Failed to toggle item";
const REMOVE_ITEM: &str = "Failed to remove item";
const CLEAR_COMPLETED: &str = "Failed to clear completed items";
const FETCH_PUBLIC: &str = "Failed to fetch public lists";
const FETCH_LIST: &str = "Failed to fetch list";
const DELETE_LIST: &str = "Failed to delete list";
const RENAME_LIST: &str = "Failed to update list name";

/// One method per backend resource action.
///
/// Futures are `?Send`: the browser runtime is single-threaded and
/// `gloo-net` futures hold JS handles.
#[async_trait(?Send)]
pub trait ListApi {
    /// `GET /lists/?username&isPublic`
    async fn lists_for_user(&self, username: &str, is_public: bool) -> Result<Vec<GroceryList>, ApiError>;

    /// `POST /lists/`
    async fn create_list(&self, username: &str, name: &str, is_public: bool) -> Result<GroceryList, ApiError>;

    /// `POST /lists/{id}/items/`
    async fn add_item(&self, list_id: &str, text: &str) -> Result<GroceryItem, ApiError>;

    /// `PUT /lists/{id}/items/{item}/`; the server flips `completed`.
    async fn toggle_item(&self, list_id: &str, item_id: &str) -> Result<GroceryItem, ApiError>;

    /// `DELETE /lists/{id}/items/{item}/`
    async fn remove_item(&self, list_id: &str, item_id: &str) -> Result<(), ApiError>;

    /// `DELETE /lists/{id}/clear-completed/`
    async fn clear_completed(&self, list_id: &str) -> Result<(), ApiError>;

    /// `GET /lists/public/`
    async fn public_lists(&self) -> Result<Vec<GroceryList>, ApiError>;

    /// `GET /lists/public/?excludeUsername`
    async fn public_lists_excluding(&self, username: &str) -> Result<Vec<GroceryList>, ApiError>;

    /// `GET /lists/{id}/`, with 404 mapped to `None`.
    async fn list_by_id(&self, list_id: &str) -> Result<Option<GroceryList>, ApiError>;

    /// `DELETE /lists/{id}/`
    async fn delete_list(&self, list_id: &str) -> Result<(), ApiError>;

    /// `PUT /lists/{id}/`
    async fn rename_list(&self, list_id: &str, name: &str) -> Result<GroceryList, ApiError>;
}

// =============================================================================
// ENDPOINTS
// =============================================================================

fn lists_endpoint(base: &str) -> String {
    format!("{base}/lists/")
}

fn lists_query_endpoint(base: &str, username: &str, is_public: bool) -> String {
    format!("{base}/lists/?username={}&isPublic={is_public}", encode_component(username))
}

fn public_lists_endpoint(base: &str, exclude_username: Option<&str>) -> String {
    match exclude_username {
        Some(username) => format!("{base}/lists/public/?excludeUsername={}", encode_component(username)),
        None => format!("{base}/lists/public/"),
    }
}

fn list_endpoint(base: &str, list_id: &str) -> String {
    format!("{base}/lists/{}/", encode_component(list_id))
}

fn items_endpoint(base: &str, list_id: &str) -> String {
    format!("{base}/lists/{}/items/", encode_component(list_id))
}

fn item_endpoint(base: &str, list_id: &str, item_id: &str) -> String {
    format!("{base}/lists/{}/items/{}/", encode_component(list_id), encode_component(item_id))
}

fn clear_completed_endpoint(base: &str, list_id: &str) -> String {
    format!("{base}/lists/{}/clear-completed/", encode_component(list_id))
}

// =============================================================================
// TRANSPORT
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Method {
    Get,
    Post,
    Put,
    Delete,
}

/// Raw HTTP outcome before status interpretation.
#[cfg_attr(not(feature = "csr"), allow(dead_code))]
#[derive(Debug)]
struct Reply {
    status: u16,
    body: String,
}

impl Reply {
    fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    fn ensure_success(self, action: &str) -> Result<Self, ApiError> {
        if self.is_success() { Ok(self) } else { Err(ApiError::status(action, self.status)) }
    }

    fn json<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        serde_json::from_str(&self.body).map_err(ApiError::decode)
    }
}

#[cfg(feature = "csr")]
async fn exchange(action: &str, method: Method, url: &str, body: Option<String>) -> Result<Reply, ApiError> {
    use gloo_net::http::Request;

    let builder = match method {
        Method::Get => Request::get(url),
        Method::Post => Request::post(url),
        Method::Put => Request::put(url),
        Method::Delete => Request::delete(url),
    };
    let response = if matches!(method, Method::Post | Method::Put) {
        let builder = builder.header("Content-Type", "application/json");
        match body {
            Some(body) => builder.body(body).map_err(|e| ApiError::transport(action, e))?.send().await,
            None => builder.send().await,
        }
    } else {
        builder.send().await
    }
    .map_err(|e| ApiError::transport(action, e))?;

    let status = response.status();
    let body = response.text().await.map_err(|e| ApiError::transport(action, e))?;
    Ok(Reply { status, body })
}

#[cfg(not(feature = "csr"))]
#[allow(clippy::unused_async)]
async fn exchange(action: &str, method: Method, url: &str, body: Option<String>) -> Result<Reply, ApiError> {
    let _ = (method, url, body);
    Err(ApiError::unavailable(action))
}

fn encode_body<B: Serialize>(body: &B) -> Result<String, ApiError> {
    serde_json::to_string(body).map_err(ApiError::decode)
}

// =============================================================================
// HTTP CLIENT
// =============================================================================

/// [`ListApi`] over HTTP+JSON against a fixed base URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpListApi {
    base_url: String,
}

impl HttpListApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(config.api_base_url.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

/// Exchange plus status check, logging every failure once.
async fn send(action: &str, method: Method, url: &str, body: Option<String>) -> Result<Reply, ApiError> {
    log::debug!("{method:?} {url}");
    let result = exchange(action, method, url, body).await.and_then(|reply| reply.ensure_success(action));
    if let Err(e) = &result {
        log::error!("{e}");
    }
    result
}

async fn fetch_lists(action: &str, url: &str) -> Result<Vec<GroceryList>, ApiError> {
    let reply = send(action, Method::Get, url, None).await?;
    transform_lists(reply.json::<Vec<WireList>>()?)
}

#[async_trait(?Send)]
impl ListApi for HttpListApi {
    async fn lists_for_user(&self, username: &str, is_public: bool) -> Result<Vec<GroceryList>, ApiError> {
        let url = lists_query_endpoint(&self.base_url, username, is_public);
        fetch_lists(FETCH_LISTS, &url).await
    }

    async fn create_list(&self, username: &str, name: &str, is_public: bool) -> Result<GroceryList, ApiError> {
        let body = encode_body(&CreateListBody { username, name, is_public })?;
        let url = lists_endpoint(&self.base_url);
        let reply = send(CREATE_LIST, Method::Post, &url, Some(body)).await?;
        GroceryList::try_from(reply.json::<WireList>()?)
    }

    async fn add_item(&self, list_id: &str, text: &str) -> Result<GroceryItem, ApiError> {
        let body = encode_body(&AddItemBody { text })?;
        let url = items_endpoint(&self.base_url, list_id);
        let reply = send(ADD_ITEM, Method::Post, &url, Some(body)).await?;
        GroceryItem::try_from(reply.json::<WireItem>()?)
    }

    async fn toggle_item(&self, list_id: &str, item_id: &str) -> Result<GroceryItem, ApiError> {
        let url = item_endpoint(&self.base_url, list_id, item_id);
        let reply = send(TOGGLE_ITEM, Method::Put, &url, None).await?;
        GroceryItem::try_from(reply.json::<WireItem>()?)
    }

    async fn remove_item(&self, list_id: &str, item_id: &str) -> Result<(), ApiError> {
        let url = item_endpoint(&self.base_url, list_id, item_id);
        send(REMOVE_ITEM, Method::Delete, &url, None).await.map(drop)
    }

    async fn clear_completed(&self, list_id: &str) -> Result<(), ApiError> {
        let url = clear_completed_endpoint(&self.base_url, list_id);
        send(CLEAR_COMPLETED, Method::Delete, &url, None).await.map(drop)
    }

    async fn public_lists(&self) -> Result<Vec<GroceryList>, ApiError> {
        let url = public_lists_endpoint(&self.base_url, None);
        fetch_lists(FETCH_PUBLIC, &url).await
    }

    async fn public_lists_excluding(&self, username: &str) -> Result<Vec<GroceryList>, ApiError> {
        let url = public_lists_endpoint(&self.base_url, Some(username));
        fetch_lists(FETCH_PUBLIC, &url).await
    }

    async fn list_by_id(&self, list_id: &str) -> Result<Option<GroceryList>, ApiError> {
        let url = list_endpoint(&self.base_url, list_id);
        log::debug!("{:?} {url}", Method::Get);
        let reply = exchange(FETCH_LIST, Method::Get, &url, None).await?;
        if reply.status == 404 {
            return Ok(None);
        }
        let reply = reply.ensure_success(FETCH_LIST)?;
        GroceryList::try_from(reply.json::<WireList>()?).map(Some)
    }

    async fn delete_list(&self, list_id: &str) -> Result<(), ApiError> {
        let url = list_endpoint(&self.base_url, list_id);
        send(DELETE_LIST, Method::Delete, &url, None).await.map(drop)
    }

    async fn rename_list(&self, list_id: &str, name: &str) -> Result<GroceryList, ApiError> {
        let body = encode_body(&RenameListBody { name })?;
        let url = list_endpoint(&self.base_url, list_id);
        let reply = send(RENAME_LIST, Method::Put, &url, Some(body)).await?;
        GroceryList::try_from(reply.json::<WireList>()?)
    }
}
