use std::sync::Arc;

use async_trait::async_trait;
use edubridge_shared::account::Role;
use edubridge_shared::support::handle::CreateTicketDescriptor;
use edubridge_shared::support::SupportTicket;
use parking_lot::Mutex;

use crate::api::SupportApi;
use crate::session::Session;
use crate::view::support::SupportView;
use crate::view::Nav;

use super::ticket;

#[derive(Default)]
struct FakeSupport {
    calls: Mutex<Vec<String>>,
    tickets: Mutex<Vec<SupportTicket>>,
}

impl FakeSupport {
    fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }
}

#[async_trait]
impl SupportApi for FakeSupport {
    async fn my_tickets(&self) -> crate::Result<Vec<SupportTicket>> {
        self.calls.lock().push("my_tickets".to_string());
        Ok(self.tickets.lock().clone())
    }

    async fn create_ticket(&self, descriptor: CreateTicketDescriptor) -> crate::Result<()> {
        self.calls
            .lock()
            .push(format!("create({},{})", descriptor.subject, descriptor.message));
        Ok(())
    }
}

fn session() -> Session {
    Session {
        role: Role::Student,
        name: "alice".to_string(),
    }
}

#[tokio::test]
async fn guests_are_sent_to_login() {
    let api = Arc::new(FakeSupport::default());
    let mut view = SupportView::new(api.clone());
    assert_eq!(view.mount(None).await, Some(Nav::Login));
    assert!(api.calls().is_empty());
}

#[tokio::test]
async fn mount_lists_own_tickets() {
    let api = Arc::new(FakeSupport::default());
    *api.tickets.lock() = vec![ticket(1), ticket(2)];
    let mut view = SupportView::new(api.clone());
    assert_eq!(view.mount(Some(&session())).await, None);
    assert_eq!(view.tickets().len(), 2);
}

#[tokio::test]
async fn blank_fields_are_rejected_locally() {
    let api = Arc::new(FakeSupport::default());
    let mut view = SupportView::new(api.clone());
    assert!(!view.submit("  ", "body").await.unwrap());
    assert!(!view.submit("subject", "").await.unwrap());
    assert!(api.calls().is_empty());
}

#[tokio::test]
async fn submit_trims_and_refetches() {
    let api = Arc::new(FakeSupport::default());
    let mut view = SupportView::new(api.clone());
    assert!(view.submit(" Login issue ", " cannot sign in ").await.unwrap());
    assert_eq!(
        api.calls(),
        vec!["create(Login issue,cannot sign in)", "my_tickets"]
    );
}
