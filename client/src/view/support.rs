//! Support ticket view, student side.

use edubridge_shared::support::handle::CreateTicketDescriptor;
use edubridge_shared::support::SupportTicket;
use tracing::warn;

use crate::api::SupportApi;
use crate::session::Session;

use super::Nav;

/// The user's own tickets plus the form raising a new one.
pub struct SupportView<A: SupportApi> {
    api: A,
    tickets: Vec<SupportTicket>,
    loading: bool,
    submitting: bool,
}

impl<A: SupportApi> SupportView<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            tickets: Vec::new(),
            loading: false,
            submitting: false,
        }
    }

    pub async fn mount(&mut self, session: Option<&Session>) -> Option<Nav> {
        if session.is_none() {
            return Some(Nav::Login);
        }
        self.fetch().await;
        None
    }

    async fn fetch(&mut self) {
        self.loading = true;
        match self.api.my_tickets().await {
            Ok(tickets) => self.tickets = tickets,
            Err(err) => warn!("ticket fetch failed: {err}"),
        }
        self.loading = false;
    }

    /// Raises a ticket. Returns `Ok(false)` when a field is blank or a
    /// submit is already in flight.
    pub async fn submit(&mut self, subject: &str, message: &str) -> crate::Result<bool> {
        let subject = subject.trim();
        let message = message.trim();
        if subject.is_empty() || message.is_empty() || self.submitting {
            return Ok(false);
        }
        self.submitting = true;
        let result = self
            .api
            .create_ticket(CreateTicketDescriptor {
                subject: subject.to_string(),
                message: message.to_string(),
            })
            .await;
        self.submitting = false;
        result?;
        self.fetch().await;
        Ok(true)
    }

    pub fn tickets(&self) -> &[SupportTicket] {
        &self.tickets
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }
}
