//! Custom Axum extractors
//!
//! Rejections are turned into [`ApiError`] so clients always get the JSON error shape.

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, FromRequestParts, Path, Query, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;
use std::convert::Infallible;
use trivia_core::{Page, PageParams, QuestionId};

use super::error::ApiError;

/// JSON body whose parse failures become 400 responses
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e: JsonRejection| ApiError::bad_request(e.body_text()))?;
        Ok(Self(value))
    }
}

/// `?page=N`, falling back to page 1 instead of rejecting
pub struct PageQuery(pub Page);

impl<S> FromRequestParts<S> for PageQuery
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let params = Query::<PageParams>::from_request_parts(parts, state)
            .await
            .map(|Query(p)| p)
            .unwrap_or_default();
        Ok(Self(Page::from(params)))
    }
}

/// Integer id from the path; anything else is an unknown route (404)
pub struct IdPath(pub QuestionId);

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let path = parts.uri.path().to_owned();
        let Path(id): Path<QuestionId> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::not_found("route", path))?;
        Ok(Self(id))
    }
}
