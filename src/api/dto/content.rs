//! DTOs for the public rendering endpoints.

use serde::{Deserialize, Serialize};

use crate::application::services::ContentContext;

/// Query string for `GET /render`. `ad` wins when both are given.
#[derive(Debug, Deserialize)]
pub struct RenderQuery {
    pub ad: Option<String>,
    pub location: Option<String>,
}

/// Page type the content is displayed on.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentContextParam {
    Single,
    Archive,
}

impl From<ContentContextParam> for ContentContext {
    fn from(c: ContentContextParam) -> Self {
        match c {
            ContentContextParam::Single => ContentContext::Single,
            ContentContextParam::Archive => ContentContext::Archive,
        }
    }
}

/// Request body for `POST /content`.
#[derive(Debug, Deserialize)]
pub struct ContentRequest {
    pub content: String,
    pub context: ContentContextParam,
}

#[derive(Debug, Serialize)]
pub struct ContentResponse {
    pub content: String,
}

/// Form body for `POST /ajax/click`.
///
/// `ad_id` stays a string so malformed values still reach the tracker and
/// get the `error` answer instead of a rejection.
#[derive(Debug, Deserialize)]
pub struct ClickForm {
    pub ad_id: Option<String>,
}
