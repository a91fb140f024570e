//! Test support: fixtures shared across the suites.

mod dashboard;
mod support;
mod wire;

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use chrono::Utc;
use edubridge_shared::account::{Role, UserSummary};
use edubridge_shared::forum::{Comment, Post};
use edubridge_shared::material::{Material, MaterialKind};
use edubridge_shared::support::{SupportTicket, TicketStatus};

/// A syntactically valid bearer token whose payload is `claims`. The
/// signature segment is garbage; the client never verifies it.
pub fn token_with_claims(claims: serde_json::Value) -> String {
    let payload = URL_SAFE_NO_PAD.encode(claims.to_string());
    format!("eyJhbGciOiJIUzI1NiJ9.{payload}.c2ln")
}

pub fn post(id: u64) -> Post {
    Post {
        id,
        title: format!("Post {id}"),
        content: "content".to_string(),
        category: None,
        user_name: "alice".to_string(),
        creation_date: Utc::now(),
        vote_count: 0,
        comment_count: 0,
    }
}

pub fn comment(id: u64) -> Comment {
    Comment {
        id,
        user_name: "bob".to_string(),
        content: "a comment".to_string(),
        created_at: Utc::now(),
        accepted: false,
    }
}

pub fn material(id: u64) -> Material {
    Material {
        id,
        title: format!("Material {id}"),
        description: None,
        subject: "Maths".to_string(),
        semester: None,
        year: None,
        kind: MaterialKind::Note,
        uploaded_by: "alice".to_string(),
        upload_date: Utc::now(),
        file_url: format!("/files/{id}.pdf"),
        download_count: Some(0),
    }
}

pub fn ticket(id: u64) -> SupportTicket {
    SupportTicket {
        id,
        subject: format!("Ticket {id}"),
        message: "help".to_string(),
        status: TicketStatus::Open,
        admin_reply: None,
        created_at: Utc::now(),
    }
}

pub fn user(id: u64, blocked: bool) -> UserSummary {
    UserSummary {
        id,
        name: format!("User {id}"),
        email: format!("user{id}@example.com"),
        role: Role::Student,
        blocked,
    }
}
