use base64::Engine;
use edubridge_shared::account::Role;

use crate::store::LocalStore;

/// A decoded client session. Purely informational: it is derived from
/// the stored bearer token's payload without signature verification and
/// only gates which UI actions are offered. The backend re-checks every
/// call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub role: Role,
    pub name: String,
}

/// Derives the current session from the store. Deliberately re-run on
/// every route change instead of cached, so a token swapped elsewhere is
/// picked up passively.
pub fn resolve(store: &LocalStore) -> Option<Session> {
    decode_token(&store.token()?)
}

/// Decodes the payload segment of a bearer token. Any decode failure
/// yields `None`; missing claims fall back to `STUDENT` / `"User"`.
pub fn decode_token(token: &str) -> Option<Session> {
    let segment = token.split('.').nth(1)?;
    let bytes = decode_segment(segment)?;
    let claims: serde_json::Value = serde_json::from_slice(&bytes).ok()?;

    let name = claims
        .get("sub")
        .and_then(|sub| sub.as_str())
        .unwrap_or("User")
        .to_string();

    Some(Session {
        role: role_claim(&claims),
        name,
    })
}

/// Tokens in the wild carry both padded and unpadded payload segments,
/// in either base64 alphabet.
fn decode_segment(segment: &str) -> Option<Vec<u8>> {
    use base64::engine::general_purpose::{STANDARD, URL_SAFE, URL_SAFE_NO_PAD};

    URL_SAFE_NO_PAD
        .decode(segment)
        .or_else(|_| URL_SAFE.decode(segment))
        .or_else(|_| STANDARD.decode(segment))
        .ok()
}

/// Normalizes the role claim variance (`role`/`roles`/`authority`, string
/// or array) here, at the single session-resolution boundary, so it never
/// leaks into the views.
fn role_claim(claims: &serde_json::Value) -> Role {
    let claim = claims
        .get("role")
        .or_else(|| claims.get("roles"))
        .or_else(|| claims.get("authority"));

    let text = match claim {
        Some(serde_json::Value::String(role)) => role.as_str(),
        Some(serde_json::Value::Array(roles)) => {
            roles.first().and_then(|role| role.as_str()).unwrap_or("")
        }
        _ => return Role::Student,
    };

    if text.eq_ignore_ascii_case("ADMIN") || text.eq_ignore_ascii_case("ROLE_ADMIN") {
        Role::Admin
    } else {
        Role::Student
    }
}
