pub mod handle;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TicketStatus {
    Open,
    Resolved,
}

/// A support ticket raised by a student. The admin reply is appended by
/// the reply endpoint, which also resolves the ticket.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SupportTicket {
    /// The only id of this ticket.
    pub id: u64,
    pub subject: String,
    pub message: String,
    pub status: TicketStatus,
    #[serde(default)]
    pub admin_reply: Option<String>,
    pub created_at: DateTime<Utc>,
}
