//! Student dashboard.

use bytes::Bytes;
use edubridge_shared::account::handle::{ChangePasswordDescriptor, EditProfileDescriptor};
use edubridge_shared::account::{DownloadRecord, UserProfile};
use edubridge_shared::forum::{Comment, Post};
use edubridge_shared::material::Material;
use tracing::warn;

use crate::api::UserApi;
use crate::session::Session;

use super::Nav;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StudentTab {
    Uploads,
    Saved,
    Downloads,
    Browse,
    Forum,
    Activity,
}

/// The forum side of the student's activity history.
#[derive(Debug, Default)]
pub struct Activity {
    pub posts: Vec<Post>,
    pub comments: Vec<Comment>,
    pub saved_posts: Vec<Post>,
}

/// Personal dashboard of a logged-in student: own uploads, saved
/// materials, download history and forum activity.
pub struct StudentDashboard<A: UserApi> {
    api: A,
    tab: StudentTab,
    uploads: Vec<Material>,
    saved: Vec<Material>,
    downloads: Vec<DownloadRecord>,
    activity: Activity,
    profile: Option<UserProfile>,
    loading: bool,
}

impl<A: UserApi> StudentDashboard<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            tab: StudentTab::Uploads,
            uploads: Vec::new(),
            saved: Vec::new(),
            downloads: Vec::new(),
            activity: Activity::default(),
            profile: None,
            loading: false,
        }
    }

    /// Loads the personal lists. A missing session, or a server that no
    /// longer honors the token, sends the caller back to login.
    pub async fn mount(&mut self, session: Option<&Session>) -> Option<Nav> {
        if session.is_none() {
            return Some(Nav::Login);
        }
        self.loading = true;
        let mut forbidden = false;
        match self.api.uploads().await {
            Ok(uploads) => self.uploads = uploads,
            Err(err) => {
                forbidden |= err.is_forbidden();
                warn!("upload list fetch failed: {err}");
            }
        }
        match self.api.saved_materials().await {
            Ok(saved) => self.saved = saved,
            Err(err) => {
                forbidden |= err.is_forbidden();
                warn!("saved material fetch failed: {err}");
            }
        }
        match self.api.activity_downloads().await {
            Ok(downloads) => self.downloads = downloads,
            Err(err) => {
                forbidden |= err.is_forbidden();
                warn!("download history fetch failed: {err}");
            }
        }
        self.loading = false;
        forbidden.then_some(Nav::Login)
    }

    /// Switches tab. The activity tab refetches on every activation so
    /// forum actions taken since the last visit show up.
    pub async fn set_tab(&mut self, tab: StudentTab) {
        self.tab = tab;
        if tab == StudentTab::Activity {
            self.fetch_activity().await;
        }
    }

    async fn fetch_activity(&mut self) {
        match self.api.activity_posts().await {
            Ok(posts) => self.activity.posts = posts,
            Err(err) => warn!("activity post fetch failed: {err}"),
        }
        match self.api.activity_comments().await {
            Ok(comments) => self.activity.comments = comments,
            Err(err) => warn!("activity comment fetch failed: {err}"),
        }
        match self.api.saved_posts().await {
            Ok(posts) => self.activity.saved_posts = posts,
            Err(err) => warn!("saved post fetch failed: {err}"),
        }
    }

    pub async fn refresh_saved(&mut self) {
        match self.api.saved_materials().await {
            Ok(saved) => self.saved = saved,
            Err(err) => warn!("saved material fetch failed: {err}"),
        }
    }

    pub async fn load_profile(&mut self) -> crate::Result<()> {
        self.profile = Some(self.api.profile().await?);
        Ok(())
    }

    pub async fn edit_profile(&mut self, descriptor: EditProfileDescriptor) -> crate::Result<()> {
        self.api.edit_profile(descriptor).await?;
        self.load_profile().await
    }

    pub async fn upload_profile_pic(&mut self, file_name: String, data: Bytes) -> crate::Result<()> {
        self.api.upload_profile_pic(file_name, data).await?;
        self.load_profile().await
    }

    pub async fn change_password(&self, descriptor: ChangePasswordDescriptor) -> crate::Result<()> {
        self.api.change_password(descriptor).await
    }

    pub fn tab(&self) -> StudentTab {
        self.tab
    }

    pub fn uploads(&self) -> &[Material] {
        &self.uploads
    }

    pub fn saved(&self) -> &[Material] {
        &self.saved
    }

    pub fn downloads(&self) -> &[DownloadRecord] {
        &self.downloads
    }

    pub fn activity(&self) -> &Activity {
        &self.activity
    }

    pub fn profile(&self) -> Option<&UserProfile> {
        self.profile.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }
}
