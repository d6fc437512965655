use axum::{extract::Request, middleware::Next, response::Response};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};

use crate::error::AppError;

/// Caller's bearer token, forwarded verbatim to the external API. It is not
/// verified here; the external API owns authentication.
#[derive(Debug, Clone)]
pub struct AuthToken(pub String);

impl AuthToken {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

pub async fn require_auth(
    bearer: Option<TypedHeader<Authorization<Bearer>>>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let TypedHeader(Authorization(bearer)) = bearer.ok_or(AppError::Unauthorized)?;

    let token = bearer.token().trim();
    if token.is_empty() {
        return Err(AppError::Unauthorized);
    }

    req.extensions_mut().insert(AuthToken(token.to_string()));
    Ok(next.run(req).await)
}
