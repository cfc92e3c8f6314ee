use std::convert::Infallible;

use axum::{RequestPartsExt, extract::FromRequestParts, http::request::Parts};
use axum_extra::{
    TypedHeader,
    headers::{Authorization, authorization::Bearer},
};

/// Provider key sent by the client as `Authorization: Bearer <key>`.
/// Takes precedence over the server's configured key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProviderCredential(pub Option<String>);

pub async fn extract_bearer_credential(parts: &mut Parts) -> Option<String> {
    let TypedHeader(Authorization(bearer)) = parts
        .extract::<TypedHeader<Authorization<Bearer>>>()
        .await
        .ok()?;

    let token = bearer.token().trim();
    (!token.is_empty()).then(|| token.to_string())
}

impl<S> FromRequestParts<S> for ProviderCredential
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _: &S) -> Result<Self, Self::Rejection> {
        Ok(Self(extract_bearer_credential(parts).await))
    }
}
