//! Discussion forum view.

use edubridge_shared::account::Role;
use edubridge_shared::forum::handle::{CreateCommentDescriptor, CreatePostDescriptor, VoteKind};
use edubridge_shared::forum::{Comment, Post};
use tracing::warn;

use crate::api::ForumApi;
use crate::session::Session;

use super::Confirm;

/// The comment thread of the single expanded post.
#[derive(Debug)]
pub struct Expanded {
    pub post: u64,
    pub comments: Vec<Comment>,
}

/// The forum page: a searchable post list with at most one post expanded
/// into its comment thread at a time.
pub struct ForumView<A: ForumApi> {
    api: A,
    session: Option<Session>,
    posts: Vec<Post>,
    search: String,
    expanded: Option<Expanded>,
    submitting: bool,
    loading: bool,
}

impl<A: ForumApi> ForumView<A> {
    pub fn new(api: A, session: Option<Session>) -> Self {
        Self {
            api,
            session,
            posts: Vec::new(),
            search: String::new(),
            expanded: None,
            submitting: false,
            loading: false,
        }
    }

    /// Guests see the page shell but no posts; nothing is fetched until
    /// a session exists.
    pub async fn mount(&mut self) {
        if self.session.is_some() {
            self.fetch_posts().await;
        }
    }

    async fn fetch_posts(&mut self) {
        self.loading = true;
        let term = (!self.search.is_empty()).then_some(self.search.as_str());
        match self.api.posts(term).await {
            Ok(posts) => self.posts = posts,
            Err(err) => {
                warn!("forum post fetch failed: {err}");
                self.posts = Vec::new();
            }
        }
        self.loading = false;
    }

    pub async fn set_search(&mut self, term: &str) {
        self.search = term.to_string();
        if self.session.is_some() {
            self.fetch_posts().await;
        }
    }

    /// Expands a post into its comment thread, collapsing whichever post
    /// was expanded before. Expanding the already-expanded post collapses
    /// it instead.
    pub async fn toggle_comments(&mut self, post: u64) {
        if self.expanded.as_ref().is_some_and(|e| e.post == post) {
            self.expanded = None;
            return;
        }
        match self.api.comments(post).await {
            Ok(comments) => self.expanded = Some(Expanded { post, comments }),
            Err(err) => {
                warn!("comment fetch failed: {err}");
                self.expanded = None;
            }
        }
    }

    /// Submits a comment on the expanded post. Returns `Ok(false)` when
    /// the input was blank, another submit is in flight, or no post is
    /// expanded.
    pub async fn submit_comment(&mut self, content: &str) -> crate::Result<bool> {
        let content = content.trim();
        if content.is_empty() || self.submitting {
            return Ok(false);
        }
        let Some(post) = self.expanded.as_ref().map(|e| e.post) else {
            return Ok(false);
        };
        self.submitting = true;
        let result = self
            .api
            .create_comment(CreateCommentDescriptor {
                post_id: post,
                content: content.to_string(),
            })
            .await;
        self.submitting = false;
        result?;
        if let Ok(comments) = self.api.comments(post).await {
            self.expanded = Some(Expanded { post, comments });
        }
        Ok(true)
    }

    /// Votes, then refetches so the displayed count is the server's.
    pub async fn vote(&mut self, post: u64, kind: VoteKind) -> crate::Result<()> {
        self.api.vote(post, kind).await?;
        self.fetch_posts().await;
        Ok(())
    }

    /// Marks a comment as the accepted answer. The loaded thread is
    /// patched so exactly the chosen comment shows as accepted.
    pub async fn accept_comment(&mut self, comment: u64) -> crate::Result<()> {
        let Some(post) = self.expanded.as_ref().map(|e| e.post) else {
            return Ok(());
        };
        self.api.accept_comment(post, comment).await?;
        if let Some(expanded) = self.expanded.as_mut() {
            for c in &mut expanded.comments {
                c.accepted = c.id == comment;
            }
        }
        Ok(())
    }

    /// Deletes a post, admin only, behind a confirmation gate. Returns
    /// whether the deletion went through.
    pub async fn delete_post(&mut self, post: u64, gate: &dyn Confirm) -> crate::Result<bool> {
        if !self
            .session
            .as_ref()
            .is_some_and(|s| s.role == Role::Admin)
        {
            return Ok(false);
        }
        if !gate.confirm("Delete this post?") {
            return Ok(false);
        }
        self.api.delete_post(post).await?;
        self.posts.retain(|p| p.id != post);
        if self.expanded.as_ref().is_some_and(|e| e.post == post) {
            self.expanded = None;
        }
        Ok(true)
    }

    pub async fn create_post(&mut self, descriptor: CreatePostDescriptor) -> crate::Result<()> {
        self.api.create_post(descriptor).await?;
        self.fetch_posts().await;
        Ok(())
    }

    pub fn is_guest(&self) -> bool {
        self.session.is_none()
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn expanded(&self) -> Option<&Expanded> {
        self.expanded.as_ref()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }
}
