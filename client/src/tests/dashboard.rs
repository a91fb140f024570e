use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use edubridge_shared::account::handle::{
    ChangePasswordDescriptor, EditProfileDescriptor, ResetPasswordDescriptor,
};
use edubridge_shared::account::{DownloadRecord, Role, UserProfile, UserSummary};
use edubridge_shared::admin::handle::CreateAdminDescriptor;
use edubridge_shared::admin::{PortalStats, TopContributor, TrendingMaterial};
use edubridge_shared::forum::{Comment, Post};
use edubridge_shared::material::handle::{ReviewDescriptor, SearchDescriptor, UploadDescriptor};
use edubridge_shared::material::Material;
use edubridge_shared::support::{SupportTicket, TicketStatus};
use parking_lot::Mutex;
use reqwest::StatusCode;

use crate::api::{AdminApi, MaterialApi, UserApi};
use crate::session::Session;
use crate::view::dashboard::{AdminDashboard, AdminTab};
use crate::view::student::{StudentDashboard, StudentTab};
use crate::view::Nav;
use crate::Error;

use super::{material, post, ticket, user};

fn admin_session() -> Session {
    Session {
        role: Role::Admin,
        name: "root".to_string(),
    }
}

fn forbidden() -> Error {
    Error::Status {
        status: StatusCode::FORBIDDEN,
        message: None,
    }
}

#[derive(Default)]
struct FakeAdmin {
    calls: Mutex<Vec<String>>,
    users: Mutex<Vec<UserSummary>>,
    tickets: Mutex<Vec<SupportTicket>>,
    pending: Mutex<Vec<Material>>,
    forbidden: Mutex<bool>,
}

impl FakeAdmin {
    fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }

    fn gate(&self) -> crate::Result<()> {
        if *self.forbidden.lock() {
            Err(forbidden())
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl AdminApi for FakeAdmin {
    async fn stats(&self) -> crate::Result<PortalStats> {
        self.calls.lock().push("stats".to_string());
        self.gate()?;
        Ok(PortalStats {
            total_users: 12,
            total_materials: 30,
            pending_materials: 2,
            total_posts: 8,
        })
    }

    async fn top_contributors(&self) -> crate::Result<Vec<TopContributor>> {
        self.calls.lock().push("top_contributors".to_string());
        Ok(Vec::new())
    }

    async fn trending_materials(&self) -> crate::Result<Vec<TrendingMaterial>> {
        self.calls.lock().push("trending".to_string());
        Ok(Vec::new())
    }

    async fn users(&self) -> crate::Result<Vec<UserSummary>> {
        self.calls.lock().push("users".to_string());
        Ok(self.users.lock().clone())
    }

    async fn toggle_block(&self, user: u64) -> crate::Result<()> {
        self.calls.lock().push(format!("toggle_block({user})"));
        Ok(())
    }

    async fn create_admin(&self, descriptor: CreateAdminDescriptor) -> crate::Result<()> {
        self.calls.lock().push(format!("create_admin({})", descriptor.email));
        Ok(())
    }

    async fn support_tickets(&self) -> crate::Result<Vec<SupportTicket>> {
        self.calls.lock().push("support_tickets".to_string());
        Ok(self.tickets.lock().clone())
    }

    async fn reply_ticket(&self, ticket: u64, _reply: String) -> crate::Result<()> {
        self.calls.lock().push(format!("reply({ticket})"));
        Ok(())
    }
}

#[async_trait]
impl MaterialApi for FakeAdmin {
    async fn all(&self) -> crate::Result<Vec<Material>> {
        Ok(Vec::new())
    }

    async fn search(&self, _filters: &SearchDescriptor) -> crate::Result<Vec<Material>> {
        Ok(Vec::new())
    }

    async fn subjects(&self) -> crate::Result<Vec<String>> {
        Ok(Vec::new())
    }

    async fn pending(&self) -> crate::Result<Vec<Material>> {
        self.calls.lock().push("pending".to_string());
        Ok(self.pending.lock().clone())
    }

    async fn upload(
        &self,
        _descriptor: UploadDescriptor,
        _file_name: String,
        _data: Bytes,
    ) -> crate::Result<()> {
        Ok(())
    }

    async fn approve(&self, material: u64) -> crate::Result<()> {
        self.calls.lock().push(format!("approve({material})"));
        Ok(())
    }

    async fn delete(&self, material: u64) -> crate::Result<()> {
        self.calls.lock().push(format!("delete({material})"));
        Ok(())
    }

    async fn review(&self, _material: u64, _descriptor: ReviewDescriptor) -> crate::Result<()> {
        Ok(())
    }
}

#[tokio::test]
async fn mount_runs_the_fetch_battery_in_order() {
    let api = Arc::new(FakeAdmin::default());
    let mut view = AdminDashboard::new(api.clone());
    assert_eq!(view.mount(Some(&admin_session())).await, None);
    assert_eq!(
        api.calls(),
        vec!["stats", "users", "top_contributors", "trending"]
    );
    assert_eq!(view.stats().map(|s| s.total_users), Some(12));
}

#[tokio::test]
async fn mount_without_session_redirects_to_login() {
    let api = Arc::new(FakeAdmin::default());
    let mut view = AdminDashboard::new(api.clone());
    assert_eq!(view.mount(None).await, Some(Nav::Login));
    assert!(api.calls().is_empty());
}

#[tokio::test]
async fn forbidden_reads_redirect_to_login() {
    let api = Arc::new(FakeAdmin::default());
    *api.forbidden.lock() = true;
    let mut view = AdminDashboard::new(api.clone());
    assert_eq!(view.mount(Some(&admin_session())).await, Some(Nav::Login));
}

#[tokio::test]
async fn tabs_fetch_what_they_show() {
    let api = Arc::new(FakeAdmin::default());
    *api.pending.lock() = vec![material(3)];
    *api.tickets.lock() = vec![ticket(5)];
    let mut view = AdminDashboard::new(api.clone());

    view.set_tab(AdminTab::Approvals).await;
    assert_eq!(view.pending().len(), 1);
    view.set_tab(AdminTab::Support).await;
    assert_eq!(view.tickets().len(), 1);
    view.set_tab(AdminTab::Users).await;
    assert_eq!(api.calls(), vec!["pending", "support_tickets"]);
}

#[tokio::test]
async fn toggle_block_patches_the_row_locally() {
    let api = Arc::new(FakeAdmin::default());
    *api.users.lock() = vec![user(1, false), user(2, true)];
    let mut view = AdminDashboard::new(api.clone());
    view.mount(Some(&admin_session())).await;
    let before = api.calls().len();

    assert!(view.toggle_block(1, &|_: &str| true).await.unwrap());
    assert!(view.users()[0].blocked);
    // One block call, no user-list refetch.
    assert_eq!(api.calls()[before..], ["toggle_block(1)".to_string()]);
}

#[tokio::test]
async fn declined_block_does_not_touch_the_wire() {
    let api = Arc::new(FakeAdmin::default());
    *api.users.lock() = vec![user(1, false)];
    let mut view = AdminDashboard::new(api.clone());
    view.mount(Some(&admin_session())).await;
    let before = api.calls().len();

    assert!(!view.toggle_block(1, &|_: &str| false).await.unwrap());
    assert!(!view.users()[0].blocked);
    assert_eq!(api.calls().len(), before);
}

#[tokio::test]
async fn approval_refetches_the_pending_queue() {
    let api = Arc::new(FakeAdmin::default());
    let mut view = AdminDashboard::new(api.clone());
    view.approve(3).await.unwrap();
    assert_eq!(api.calls(), vec!["approve(3)", "pending"]);
}

#[tokio::test]
async fn rejection_deletes_behind_the_gate() {
    let api = Arc::new(FakeAdmin::default());
    let mut view = AdminDashboard::new(api.clone());
    assert!(!view.reject(3, &|_: &str| false).await.unwrap());
    assert!(view.reject(3, &|_: &str| true).await.unwrap());
    assert_eq!(api.calls(), vec!["delete(3)", "pending"]);
}

#[tokio::test]
async fn replying_resolves_the_ticket_locally() {
    let api = Arc::new(FakeAdmin::default());
    *api.tickets.lock() = vec![ticket(5)];
    let mut view = AdminDashboard::new(api.clone());
    view.set_tab(AdminTab::Support).await;

    view.reply_ticket(5, "fixed".to_string()).await.unwrap();
    let t = &view.tickets()[0];
    assert_eq!(t.status, TicketStatus::Resolved);
    assert_eq!(t.admin_reply.as_deref(), Some("fixed"));
}

#[derive(Default)]
pub(super) struct FakeUser {
    pub(super) calls: Mutex<Vec<String>>,
    pub(super) forbidden: Mutex<bool>,
}

impl FakeUser {
    pub(super) fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }

    fn gate(&self) -> crate::Result<()> {
        if *self.forbidden.lock() {
            Err(forbidden())
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl UserApi for FakeUser {
    async fn profile(&self) -> crate::Result<UserProfile> {
        self.calls.lock().push("profile".to_string());
        Ok(UserProfile {
            name: "alice".to_string(),
            email: "alice@example.com".to_string(),
            role: Role::Student,
            bio: None,
            profile_pic_url: None,
        })
    }

    async fn edit_profile(&self, descriptor: EditProfileDescriptor) -> crate::Result<()> {
        self.calls.lock().push(format!("edit_profile({})", descriptor.name));
        Ok(())
    }

    async fn upload_profile_pic(&self, _file_name: String, _data: Bytes) -> crate::Result<()> {
        self.calls.lock().push("profile_pic".to_string());
        Ok(())
    }

    async fn uploads(&self) -> crate::Result<Vec<Material>> {
        self.calls.lock().push("uploads".to_string());
        self.gate()?;
        Ok(vec![material(1)])
    }

    async fn saved_materials(&self) -> crate::Result<Vec<Material>> {
        self.calls.lock().push("saved_materials".to_string());
        self.gate()?;
        Ok(vec![material(2), material(3)])
    }

    async fn toggle_save(&self, _material: u64) -> crate::Result<()> {
        Ok(())
    }

    async fn activity_downloads(&self) -> crate::Result<Vec<DownloadRecord>> {
        self.calls.lock().push("downloads".to_string());
        self.gate()?;
        Ok(Vec::new())
    }

    async fn activity_posts(&self) -> crate::Result<Vec<Post>> {
        self.calls.lock().push("activity_posts".to_string());
        Ok(vec![post(1)])
    }

    async fn activity_comments(&self) -> crate::Result<Vec<Comment>> {
        self.calls.lock().push("activity_comments".to_string());
        Ok(Vec::new())
    }

    async fn saved_posts(&self) -> crate::Result<Vec<Post>> {
        self.calls.lock().push("saved_posts".to_string());
        Ok(Vec::new())
    }

    async fn change_password(&self, _descriptor: ChangePasswordDescriptor) -> crate::Result<()> {
        Ok(())
    }

    async fn forgot_password(&self, email: &str) -> crate::Result<()> {
        self.calls.lock().push(format!("forgot_password({email})"));
        Ok(())
    }

    async fn reset_password(&self, descriptor: ResetPasswordDescriptor) -> crate::Result<()> {
        self.calls
            .lock()
            .push(format!("reset_password({},{})", descriptor.email, descriptor.otp));
        Ok(())
    }
}

fn student_session() -> Session {
    Session {
        role: Role::Student,
        name: "alice".to_string(),
    }
}

#[tokio::test]
async fn student_mount_loads_the_personal_lists() {
    let api = Arc::new(FakeUser::default());
    let mut view = StudentDashboard::new(api.clone());
    assert_eq!(view.mount(Some(&student_session())).await, None);
    assert_eq!(view.uploads().len(), 1);
    assert_eq!(view.saved().len(), 2);
    assert_eq!(
        api.calls(),
        vec!["uploads", "saved_materials", "downloads"]
    );
}

#[tokio::test]
async fn student_mount_redirects_when_token_rejected() {
    let api = Arc::new(FakeUser::default());
    *api.forbidden.lock() = true;
    let mut view = StudentDashboard::new(api.clone());
    assert_eq!(view.mount(Some(&student_session())).await, Some(Nav::Login));
}

#[tokio::test]
async fn activity_tab_refetches_on_every_activation() {
    let api = Arc::new(FakeUser::default());
    let mut view = StudentDashboard::new(api.clone());

    view.set_tab(StudentTab::Activity).await;
    view.set_tab(StudentTab::Saved).await;
    view.set_tab(StudentTab::Activity).await;

    let activity_fetches = api
        .calls()
        .iter()
        .filter(|c| c.as_str() == "activity_posts")
        .count();
    assert_eq!(activity_fetches, 2);
    assert_eq!(view.activity().posts.len(), 1);
}

#[tokio::test]
async fn profile_edit_reloads_the_profile() {
    let api = Arc::new(FakeUser::default());
    let mut view = StudentDashboard::new(api.clone());
    view.edit_profile(EditProfileDescriptor {
        name: "alice2".to_string(),
        bio: None,
    })
    .await
    .unwrap();
    assert_eq!(api.calls(), vec!["edit_profile(alice2)", "profile"]);
    assert!(view.profile().is_some());
}
