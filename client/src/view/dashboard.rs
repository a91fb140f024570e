//! Admin dashboard.

use edubridge_shared::account::UserSummary;
use edubridge_shared::admin::handle::CreateAdminDescriptor;
use edubridge_shared::admin::{PortalStats, TopContributor, TrendingMaterial};
use edubridge_shared::material::Material;
use edubridge_shared::support::{SupportTicket, TicketStatus};
use tracing::warn;

use crate::api::{AdminApi, MaterialApi};
use crate::session::Session;

use super::{Confirm, Nav};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminTab {
    Overview,
    Users,
    Approvals,
    Support,
    Materials,
}

/// Portal administration: overview stats, user management, material
/// approvals and the support queue.
pub struct AdminDashboard<A: AdminApi + MaterialApi> {
    api: A,
    tab: AdminTab,
    stats: Option<PortalStats>,
    users: Vec<UserSummary>,
    top_contributors: Vec<TopContributor>,
    trending: Vec<TrendingMaterial>,
    pending: Vec<Material>,
    tickets: Vec<SupportTicket>,
    error: Option<String>,
    loading: bool,
}

impl<A: AdminApi + MaterialApi> AdminDashboard<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            tab: AdminTab::Overview,
            stats: None,
            users: Vec::new(),
            top_contributors: Vec::new(),
            trending: Vec::new(),
            pending: Vec::new(),
            tickets: Vec::new(),
            error: None,
            loading: false,
        }
    }

    /// Loads the dashboard. Without a session, or when the server turns
    /// the reads down, the caller is sent back to login.
    pub async fn mount(&mut self, session: Option<&Session>) -> Option<Nav> {
        if session.is_none() {
            return Some(Nav::Login);
        }
        self.loading = true;
        let result = self.fetch_all().await;
        self.loading = false;
        match result {
            Ok(()) => None,
            Err(err) if err.is_forbidden() => Some(Nav::Login),
            Err(err) => {
                warn!("dashboard load failed: {err}");
                self.error = Some("Failed to load dashboard data.".to_string());
                None
            }
        }
    }

    async fn fetch_all(&mut self) -> crate::Result<()> {
        self.stats = Some(self.api.stats().await?);
        self.users = self.api.users().await?;
        self.top_contributors = self.api.top_contributors().await?;
        self.trending = self.api.trending_materials().await?;
        Ok(())
    }

    /// Switches tab, fetching what the tab shows.
    pub async fn set_tab(&mut self, tab: AdminTab) {
        self.tab = tab;
        match tab {
            AdminTab::Approvals => self.fetch_pending().await,
            AdminTab::Support => self.fetch_tickets().await,
            _ => {}
        }
    }

    async fn fetch_pending(&mut self) {
        match self.api.pending().await {
            Ok(pending) => self.pending = pending,
            Err(err) => warn!("pending material fetch failed: {err}"),
        }
    }

    async fn fetch_tickets(&mut self) {
        match self.api.support_tickets().await {
            Ok(tickets) => self.tickets = tickets,
            Err(err) => warn!("support ticket fetch failed: {err}"),
        }
    }

    /// Blocks or unblocks a user behind the confirmation gate. The local
    /// row is patched instead of refetching the whole list.
    pub async fn toggle_block(&mut self, user: u64, gate: &dyn Confirm) -> crate::Result<bool> {
        let Some(row) = self.users.iter().position(|u| u.id == user) else {
            return Ok(false);
        };
        let message = if self.users[row].blocked {
            "Unblock this user?"
        } else {
            "Block this user?"
        };
        if !gate.confirm(message) {
            return Ok(false);
        }
        self.api.toggle_block(user).await?;
        self.users[row].blocked = !self.users[row].blocked;
        Ok(true)
    }

    pub async fn create_admin(&mut self, descriptor: CreateAdminDescriptor) -> crate::Result<()> {
        self.api.create_admin(descriptor).await?;
        if let Err(err) = self.fetch_all().await {
            warn!("dashboard refresh failed: {err}");
        }
        Ok(())
    }

    pub async fn approve(&mut self, material: u64) -> crate::Result<()> {
        MaterialApi::approve(&self.api, material).await?;
        self.fetch_pending().await;
        Ok(())
    }

    /// Rejection deletes the pending material, behind the gate.
    pub async fn reject(&mut self, material: u64, gate: &dyn Confirm) -> crate::Result<bool> {
        if !gate.confirm("Reject and delete this material?") {
            return Ok(false);
        }
        MaterialApi::delete(&self.api, material).await?;
        self.fetch_pending().await;
        Ok(true)
    }

    /// Sends the admin reply and patches the local ticket as resolved.
    pub async fn reply_ticket(&mut self, ticket: u64, reply: String) -> crate::Result<()> {
        self.api.reply_ticket(ticket, reply.clone()).await?;
        if let Some(t) = self.tickets.iter_mut().find(|t| t.id == ticket) {
            t.admin_reply = Some(reply);
            t.status = TicketStatus::Resolved;
        }
        Ok(())
    }

    pub fn tab(&self) -> AdminTab {
        self.tab
    }

    pub fn stats(&self) -> Option<&PortalStats> {
        self.stats.as_ref()
    }

    pub fn users(&self) -> &[UserSummary] {
        &self.users
    }

    pub fn top_contributors(&self) -> &[TopContributor] {
        &self.top_contributors
    }

    pub fn trending(&self) -> &[TrendingMaterial] {
        &self.trending
    }

    pub fn pending(&self) -> &[Material] {
        &self.pending
    }

    pub fn tickets(&self) -> &[SupportTicket] {
        &self.tickets
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }
}
