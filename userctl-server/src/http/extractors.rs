//! Custom Axum extractors
//!
//! Rejections carry the 400 envelope, so a handler only runs once its input
//! is in hand and storage is never reached for a malformed request.
//!
//! Bodies are decoded as JSON whatever the `Content-Type` header says.

use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use tracing::debug;

use super::error::ApiError;
use crate::models::User;

async fn username_from_parts<S>(
    parts: &mut Parts,
    state: &S,
    message: &'static str,
) -> Result<String, ApiError>
where
    S: Send + Sync,
{
    let Path(name): Path<String> = Path::from_request_parts(parts, state)
        .await
        .map_err(|e| {
            debug!(error = %e, "username path rejected");
            ApiError::bad_request(message)
        })?;
    Ok(name)
}

/// Username path segment for lookups
pub struct LookupName(pub String);

impl<S> FromRequestParts<S> for LookupName
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        username_from_parts(parts, state, "failed to parse the request")
            .await
            .map(Self)
    }
}

/// Username path segment for removals
pub struct RemovalName(pub String);

impl<S> FromRequestParts<S> for RemovalName
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        username_from_parts(parts, state, "invalid request")
            .await
            .map(Self)
    }
}

/// Read the whole body and decode it as a [`User`].
///
/// A literal `null` body decodes to an all-empty user.
async fn user_from_body<S>(req: Request, state: &S) -> Result<User, String>
where
    S: Send + Sync,
{
    let body = Bytes::from_request(req, state)
        .await
        .map_err(|e| e.body_text())?;
    serde_json::from_slice::<Option<User>>(&body)
        .map(Option::unwrap_or_default)
        .map_err(|e| e.to_string())
}

/// JSON body of a create request
pub struct NewUser(pub User);

impl<S> FromRequest<S> for NewUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let user = user_from_body(req, state)
            .await
            .map_err(|e| ApiError::bad_request(format!("failed to parse the request, {e}")))?;
        Ok(Self(user))
    }
}

/// JSON body of an update request
pub struct UserUpdate(pub User);

impl<S> FromRequest<S> for UserUpdate
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let user = user_from_body(req, state).await.map_err(|e| {
            debug!(error = %e, "update handler: body rejected");
            ApiError::bad_request(
                "failed to parse the request, verify the given details and try again",
            )
        })?;
        Ok(Self(user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::StatusCode;

    fn bare_parts() -> Parts {
        let (parts, _) = Request::builder()
            .uri("/")
            .body(Body::empty())
            .unwrap()
            .into_parts();
        parts
    }

    fn json_request(body: &'static str) -> Request {
        Request::builder()
            .method("POST")
            .uri("/")
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn missing_lookup_segment_is_400() {
        let mut parts = bare_parts();
        let Err(err) = LookupName::from_request_parts(&mut parts, &()).await else {
            panic!("expected rejection");
        };
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert!(matches!(err, ApiError::BadRequest { message } if message == "failed to parse the request"));
    }

    #[tokio::test]
    async fn missing_removal_segment_is_400() {
        let mut parts = bare_parts();
        let Err(err) = RemovalName::from_request_parts(&mut parts, &()).await else {
            panic!("expected rejection");
        };
        assert!(matches!(err, ApiError::BadRequest { message } if message == "invalid request"));
    }

    #[tokio::test]
    async fn new_user_decodes() {
        let NewUser(user) = NewUser::from_request(
            json_request(r#"{"name":"alice","email":"a@x.com","location":"nyc"}"#),
            &(),
        )
        .await
        .map_err(|e| e.status())
        .unwrap();
        assert_eq!(user, User::new("alice", "a@x.com", "nyc"));
    }

    #[tokio::test]
    async fn new_user_rejection_includes_decode_error() {
        let Err(err) = NewUser::from_request(json_request(r#"{"name":5}"#), &()).await else {
            panic!("expected rejection");
        };
        match err {
            ApiError::BadRequest { message } => {
                assert!(message.starts_with("failed to parse the request, "));
                assert!(message.len() > "failed to parse the request, ".len());
            }
            other => panic!("expected BadRequest, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn partial_body_fills_empty_fields() {
        let NewUser(user) = NewUser::from_request(json_request(r#"{"name":"alice"}"#), &())
            .await
            .map_err(|e| e.status())
            .unwrap();
        assert_eq!(user, User::new("alice", "", ""));
    }

    #[tokio::test]
    async fn null_body_is_an_empty_user() {
        let NewUser(user) = NewUser::from_request(json_request("null"), &())
            .await
            .map_err(|e| e.status())
            .unwrap();
        assert_eq!(user, User::default());
    }

    #[tokio::test]
    async fn update_decodes_without_content_type() {
        let req = Request::builder()
            .method("PUT")
            .uri("/")
            .body(Body::from(r#"{"name":"alice","email":"a@x.com","location":"nyc"}"#))
            .unwrap();
        let UserUpdate(user) = UserUpdate::from_request(req, &())
            .await
            .map_err(|e| e.status())
            .unwrap();
        assert_eq!(user, User::new("alice", "a@x.com", "nyc"));
    }

    #[tokio::test]
    async fn empty_body_is_rejected() {
        let req = Request::builder()
            .method("PUT")
            .uri("/")
            .body(Body::empty())
            .unwrap();
        let Err(err) = UserUpdate::from_request(req, &()).await else {
            panic!("expected rejection");
        };
        assert!(matches!(
            err,
            ApiError::BadRequest { message }
                if message == "failed to parse the request, verify the given details and try again"
        ));
    }
}
