//! Stateless request builder and response parser for the todo routes.
//!
//! # Design
//! `TodoClient` holds only a `base_url`. Each route is split into a `build_*`
//! method producing an `HttpRequest` and a `parse_*` method consuming an
//! `HttpResponse`, so the client stays free of I/O.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::item::{CreateItems, ItemId, ItemPatch, TodoItem};

#[derive(Debug, Clone)]
pub struct TodoClient {
    base_url: String,
}

impl TodoClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// `GET /`
    pub fn build_list_items(&self) -> HttpRequest {
        self.request(HttpMethod::Get, "/")
    }

    /// `POST /` with `{"items": [...]}`.
    pub fn build_create_items(&self, texts: &[&str]) -> Result<HttpRequest, ApiError> {
        let body = CreateItems {
            items: texts.iter().map(|t| t.to_string()).collect(),
        };
        self.json_request(HttpMethod::Post, "/", &body)
    }

    /// `PATCH /{id}`
    pub fn build_update_item(&self, id: &ItemId, patch: &ItemPatch) -> Result<HttpRequest, ApiError> {
        self.json_request(HttpMethod::Patch, &format!("/{id}"), patch)
    }

    /// `DELETE /{id}`
    pub fn build_delete_item(&self, id: &ItemId) -> HttpRequest {
        self.request(HttpMethod::Delete, &format!("/{id}"))
    }

    pub fn parse_list_items(&self, response: HttpResponse) -> Result<Vec<TodoItem>, ApiError> {
        decode(response)
    }

    pub fn parse_create_items(&self, response: HttpResponse) -> Result<Vec<TodoItem>, ApiError> {
        decode(response)
    }

    pub fn parse_update_item(&self, response: HttpResponse) -> Result<TodoItem, ApiError> {
        decode(response)
    }

    /// Returns the removed ids; the service answers with exactly one.
    pub fn parse_delete_item(&self, response: HttpResponse) -> Result<Vec<ItemId>, ApiError> {
        decode(response)
    }

    fn request(&self, method: HttpMethod, path: &str) -> HttpRequest {
        HttpRequest {
            method,
            url: format!("{}{path}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    fn json_request<T: Serialize>(
        &self,
        method: HttpMethod,
        path: &str,
        body: &T,
    ) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(body).map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
            ..self.request(method, path)
        })
    }
}

fn decode<T: DeserializeOwned>(response: HttpResponse) -> Result<T, ApiError> {
    check_status(&response)?;
    serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
}

/// Every successful route answers 200.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    match response.status {
        200 => Ok(()),
        400 => Err(ApiError::BadRequest),
        404 => Err(ApiError::NotFound),
        status => Err(ApiError::HttpError {
            status,
            body: response.body.clone(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;

    const NIL: &str = "00000000-0000-0000-0000-000000000000";

    fn client() -> TodoClient {
        TodoClient::new("http://localhost:8080")
    }

    fn response(status: u16, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            headers: Vec::new(),
            body: body.to_string(),
        }
    }

    #[test]
    fn build_list_items_targets_root() {
        let req = client().build_list_items();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.url, "http://localhost:8080/");
        assert!(req.body.is_none());
        assert!(req.headers.is_empty());
    }

    #[test]
    fn build_create_items_wraps_texts() {
        let req = client().build_create_items(&["a", "b"]).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.url, "http://localhost:8080/");
        assert_eq!(
            req.headers,
            vec![("content-type".to_string(), "application/json".to_string())]
        );
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body, serde_json::json!({"items": ["a", "b"]}));
    }

    #[test]
    fn build_update_item_omits_absent_fields() {
        let id = ItemId::from(Uuid::nil());
        let patch = ItemPatch {
            text: None,
            done: Some(true),
        };
        let req = client().build_update_item(&id, &patch).unwrap();
        assert_eq!(req.method, HttpMethod::Patch);
        assert_eq!(req.url, format!("http://localhost:8080/{NIL}"));
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body, serde_json::json!({"done": true}));
    }

    #[test]
    fn build_delete_item_targets_id() {
        let req = client().build_delete_item(&ItemId::from(Uuid::nil()));
        assert_eq!(req.method, HttpMethod::Delete);
        assert_eq!(req.url, format!("http://localhost:8080/{NIL}"));
        assert!(req.body.is_none());
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let req = TodoClient::new("http://localhost:8080/").build_list_items();
        assert_eq!(req.url, "http://localhost:8080/");
    }

    #[test]
    fn parse_list_items_success() {
        let body = format!(r#"[{{"id":"{NIL}","text":"Test","done":false}}]"#);
        let items = client().parse_list_items(response(200, &body)).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].text, "Test");
    }

    #[test]
    fn parse_create_items_bad_request() {
        let err = client().parse_create_items(response(400, "{}")).unwrap_err();
        assert!(matches!(err, ApiError::BadRequest));
    }

    #[test]
    fn parse_update_item_not_found() {
        let err = client().parse_update_item(response(404, "{}")).unwrap_err();
        assert!(matches!(err, ApiError::NotFound));
    }

    #[test]
    fn parse_delete_item_returns_removed_id() {
        let ids = client()
            .parse_delete_item(response(200, &format!(r#"["{NIL}"]"#)))
            .unwrap();
        assert_eq!(ids, vec![ItemId::from(Uuid::nil())]);
    }

    #[test]
    fn unexpected_status_keeps_body() {
        let err = client()
            .parse_list_items(response(500, "internal error"))
            .unwrap_err();
        assert!(matches!(err, ApiError::HttpError { status: 500, ref body } if body == "internal error"));
    }

    #[test]
    fn parse_list_items_bad_json() {
        let err = client().parse_list_items(response(200, "not json")).unwrap_err();
        assert!(matches!(err, ApiError::Deserialization(_)));
    }
}
