//! The seam between views and the wire.
//!
//! Views are generic over these per-family traits; [`HttpApi`] is the
//! production implementation, every method one [`raw`] call against the
//! injected [`Context`]. Tests drive views through recording fakes.

use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;

use edubridge_shared::account::handle::{
    ChangePasswordDescriptor, EditProfileDescriptor, RegisterDescriptor, ResetPasswordDescriptor,
};
use edubridge_shared::account::{DownloadRecord, UserProfile, UserSummary};
use edubridge_shared::admin::handle::CreateAdminDescriptor;
use edubridge_shared::admin::{PortalStats, TopContributor, TrendingMaterial};
use edubridge_shared::forum::handle::{CreateCommentDescriptor, CreatePostDescriptor, VoteKind};
use edubridge_shared::forum::{Comment, Post};
use edubridge_shared::material::handle::{ReviewDescriptor, SearchDescriptor, UploadDescriptor};
use edubridge_shared::material::Material;
use edubridge_shared::support::handle::{CreateTicketDescriptor, ReplyTicketDescriptor};
use edubridge_shared::support::SupportTicket;

use crate::{raw, Context};

#[async_trait]
pub trait AuthApi: Send + Sync {
    async fn login(&self, email: &str, password: &str) -> crate::Result<String>;
    async fn register(&self, descriptor: RegisterDescriptor) -> crate::Result<()>;
    async fn send_otp(&self, email: &str) -> crate::Result<()>;
}

#[async_trait]
pub trait MaterialApi: Send + Sync {
    async fn all(&self) -> crate::Result<Vec<Material>>;
    async fn search(&self, filters: &SearchDescriptor) -> crate::Result<Vec<Material>>;
    async fn subjects(&self) -> crate::Result<Vec<String>>;
    async fn pending(&self) -> crate::Result<Vec<Material>>;
    async fn upload(
        &self,
        descriptor: UploadDescriptor,
        file_name: String,
        data: Bytes,
    ) -> crate::Result<()>;
    async fn approve(&self, material: u64) -> crate::Result<()>;
    async fn delete(&self, material: u64) -> crate::Result<()>;
    async fn review(&self, material: u64, descriptor: ReviewDescriptor) -> crate::Result<()>;
}

#[async_trait]
pub trait ForumApi: Send + Sync {
    async fn posts(&self, search: Option<&str>) -> crate::Result<Vec<Post>>;
    async fn create_post(&self, descriptor: CreatePostDescriptor) -> crate::Result<()>;
    async fn delete_post(&self, post: u64) -> crate::Result<()>;
    async fn vote(&self, post: u64, kind: VoteKind) -> crate::Result<()>;
    async fn comments(&self, post: u64) -> crate::Result<Vec<Comment>>;
    async fn create_comment(&self, descriptor: CreateCommentDescriptor) -> crate::Result<()>;
    async fn accept_comment(&self, post: u64, comment: u64) -> crate::Result<()>;
}

#[async_trait]
pub trait UserApi: Send + Sync {
    async fn profile(&self) -> crate::Result<UserProfile>;
    async fn edit_profile(&self, descriptor: EditProfileDescriptor) -> crate::Result<()>;
    async fn upload_profile_pic(&self, file_name: String, data: Bytes) -> crate::Result<()>;
    async fn uploads(&self) -> crate::Result<Vec<Material>>;
    async fn saved_materials(&self) -> crate::Result<Vec<Material>>;
    async fn toggle_save(&self, material: u64) -> crate::Result<()>;
    async fn activity_downloads(&self) -> crate::Result<Vec<DownloadRecord>>;
    async fn activity_posts(&self) -> crate::Result<Vec<Post>>;
    async fn activity_comments(&self) -> crate::Result<Vec<Comment>>;
    async fn saved_posts(&self) -> crate::Result<Vec<Post>>;
    async fn change_password(&self, descriptor: ChangePasswordDescriptor) -> crate::Result<()>;
    async fn forgot_password(&self, email: &str) -> crate::Result<()>;
    async fn reset_password(&self, descriptor: ResetPasswordDescriptor) -> crate::Result<()>;
}

#[async_trait]
pub trait AdminApi: Send + Sync {
    async fn stats(&self) -> crate::Result<PortalStats>;
    async fn top_contributors(&self) -> crate::Result<Vec<TopContributor>>;
    async fn trending_materials(&self) -> crate::Result<Vec<TrendingMaterial>>;
    async fn users(&self) -> crate::Result<Vec<UserSummary>>;
    async fn toggle_block(&self, user: u64) -> crate::Result<()>;
    async fn create_admin(&self, descriptor: CreateAdminDescriptor) -> crate::Result<()>;
    async fn support_tickets(&self) -> crate::Result<Vec<SupportTicket>>;
    async fn reply_ticket(&self, ticket: u64, reply: String) -> crate::Result<()>;
}

#[async_trait]
pub trait SupportApi: Send + Sync {
    async fn my_tickets(&self) -> crate::Result<Vec<SupportTicket>>;
    async fn create_ticket(&self, descriptor: CreateTicketDescriptor) -> crate::Result<()>;
}

/// Production implementation over the REST surface.
pub struct HttpApi {
    cx: Context,
}

impl HttpApi {
    pub fn new(cx: Context) -> Self {
        Self { cx }
    }
}

#[async_trait]
impl AuthApi for HttpApi {
    async fn login(&self, email: &str, password: &str) -> crate::Result<String> {
        raw::call(
            raw::auth::Login {
                email: email.to_string(),
                password: password.to_string(),
            },
            &self.cx,
        )
        .await
    }

    async fn register(&self, descriptor: RegisterDescriptor) -> crate::Result<()> {
        raw::call(raw::auth::Register { descriptor }, &self.cx).await
    }

    async fn send_otp(&self, email: &str) -> crate::Result<()> {
        raw::call(
            raw::auth::SendOtp {
                email: email.to_string(),
            },
            &self.cx,
        )
        .await
    }
}

#[async_trait]
impl MaterialApi for HttpApi {
    async fn all(&self) -> crate::Result<Vec<Material>> {
        raw::call(raw::material::All, &self.cx).await
    }

    async fn search(&self, filters: &SearchDescriptor) -> crate::Result<Vec<Material>> {
        raw::call(
            raw::material::Search {
                filters: filters.clone(),
            },
            &self.cx,
        )
        .await
    }

    async fn subjects(&self) -> crate::Result<Vec<String>> {
        raw::call(raw::material::Subjects, &self.cx).await
    }

    async fn pending(&self) -> crate::Result<Vec<Material>> {
        raw::call(raw::material::Pending, &self.cx).await
    }

    async fn upload(
        &self,
        descriptor: UploadDescriptor,
        file_name: String,
        data: Bytes,
    ) -> crate::Result<()> {
        raw::call(raw::material::Upload::new(descriptor, file_name, data), &self.cx).await
    }

    async fn approve(&self, material: u64) -> crate::Result<()> {
        raw::call(raw::material::Approve { material }, &self.cx).await
    }

    async fn delete(&self, material: u64) -> crate::Result<()> {
        raw::call(raw::material::Delete { material }, &self.cx).await
    }

    async fn review(&self, material: u64, descriptor: ReviewDescriptor) -> crate::Result<()> {
        raw::call(
            raw::material::Review {
                material,
                descriptor,
            },
            &self.cx,
        )
        .await
    }
}

#[async_trait]
impl ForumApi for HttpApi {
    async fn posts(&self, search: Option<&str>) -> crate::Result<Vec<Post>> {
        raw::call(
            raw::forum::Posts {
                search: search.map(str::to_string),
            },
            &self.cx,
        )
        .await
    }

    async fn create_post(&self, descriptor: CreatePostDescriptor) -> crate::Result<()> {
        raw::call(raw::forum::CreatePost { descriptor }, &self.cx).await
    }

    async fn delete_post(&self, post: u64) -> crate::Result<()> {
        raw::call(raw::forum::DeletePost { post }, &self.cx).await
    }

    async fn vote(&self, post: u64, kind: VoteKind) -> crate::Result<()> {
        raw::call(raw::forum::Vote { post, kind }, &self.cx).await
    }

    async fn comments(&self, post: u64) -> crate::Result<Vec<Comment>> {
        raw::call(raw::forum::Comments { post }, &self.cx).await
    }

    async fn create_comment(&self, descriptor: CreateCommentDescriptor) -> crate::Result<()> {
        raw::call(raw::forum::CreateComment { descriptor }, &self.cx).await
    }

    async fn accept_comment(&self, post: u64, comment: u64) -> crate::Result<()> {
        raw::call(raw::forum::AcceptComment { post, comment }, &self.cx).await
    }
}

#[async_trait]
impl UserApi for HttpApi {
    async fn profile(&self) -> crate::Result<UserProfile> {
        raw::call(raw::user::Profile, &self.cx).await
    }

    async fn edit_profile(&self, descriptor: EditProfileDescriptor) -> crate::Result<()> {
        raw::call(raw::user::EditProfile { descriptor }, &self.cx).await
    }

    async fn upload_profile_pic(&self, file_name: String, data: Bytes) -> crate::Result<()> {
        raw::call(raw::user::ProfilePic::new(file_name, data), &self.cx).await
    }

    async fn uploads(&self) -> crate::Result<Vec<Material>> {
        raw::call(raw::user::Uploads, &self.cx).await
    }

    async fn saved_materials(&self) -> crate::Result<Vec<Material>> {
        raw::call(raw::user::SavedMaterials, &self.cx).await
    }

    async fn toggle_save(&self, material: u64) -> crate::Result<()> {
        raw::call(raw::user::SaveMaterial { material }, &self.cx).await
    }

    async fn activity_downloads(&self) -> crate::Result<Vec<DownloadRecord>> {
        raw::call(raw::user::ActivityDownloads, &self.cx).await
    }

    async fn activity_posts(&self) -> crate::Result<Vec<Post>> {
        raw::call(raw::user::ActivityPosts, &self.cx).await
    }

    async fn activity_comments(&self) -> crate::Result<Vec<Comment>> {
        raw::call(raw::user::ActivityComments, &self.cx).await
    }

    async fn saved_posts(&self) -> crate::Result<Vec<Post>> {
        raw::call(raw::user::SavedPosts, &self.cx).await
    }

    async fn change_password(&self, descriptor: ChangePasswordDescriptor) -> crate::Result<()> {
        raw::call(raw::user::ChangePassword { descriptor }, &self.cx).await
    }

    async fn forgot_password(&self, email: &str) -> crate::Result<()> {
        raw::call(
            raw::user::ForgotPassword {
                email: email.to_string(),
            },
            &self.cx,
        )
        .await
    }

    async fn reset_password(&self, descriptor: ResetPasswordDescriptor) -> crate::Result<()> {
        raw::call(raw::user::ResetPassword { descriptor }, &self.cx).await
    }
}

#[async_trait]
impl AdminApi for HttpApi {
    async fn stats(&self) -> crate::Result<PortalStats> {
        raw::call(raw::admin::Stats, &self.cx).await
    }

    async fn top_contributors(&self) -> crate::Result<Vec<TopContributor>> {
        raw::call(raw::admin::TopContributors, &self.cx).await
    }

    async fn trending_materials(&self) -> crate::Result<Vec<TrendingMaterial>> {
        raw::call(raw::admin::TrendingMaterials, &self.cx).await
    }

    async fn users(&self) -> crate::Result<Vec<UserSummary>> {
        raw::call(raw::admin::Users, &self.cx).await
    }

    async fn toggle_block(&self, user: u64) -> crate::Result<()> {
        raw::call(raw::admin::ToggleBlock { user }, &self.cx).await
    }

    async fn create_admin(&self, descriptor: CreateAdminDescriptor) -> crate::Result<()> {
        raw::call(raw::admin::CreateAdmin { descriptor }, &self.cx).await
    }

    async fn support_tickets(&self) -> crate::Result<Vec<SupportTicket>> {
        raw::call(raw::admin::SupportTickets, &self.cx).await
    }

    async fn reply_ticket(&self, ticket: u64, reply: String) -> crate::Result<()> {
        raw::call(
            raw::admin::Reply {
                ticket,
                descriptor: ReplyTicketDescriptor { reply },
            },
            &self.cx,
        )
        .await
    }
}

#[async_trait]
impl SupportApi for HttpApi {
    async fn my_tickets(&self) -> crate::Result<Vec<SupportTicket>> {
        raw::call(raw::support::MyTickets, &self.cx).await
    }

    async fn create_ticket(&self, descriptor: CreateTicketDescriptor) -> crate::Result<()> {
        raw::call(raw::support::Create { descriptor }, &self.cx).await
    }
}

// One `HttpApi` is shared by every mounted view, so each trait forwards
// through `Arc`.

macro_rules! forward_arc {
    ($trait:ident { $(async fn $name:ident(&self $(, $arg:ident: $ty:ty)*) -> $out:ty;)* }) => {
        #[async_trait]
        impl<T: $trait + ?Sized> $trait for Arc<T> {
            $(
                async fn $name(&self $(, $arg: $ty)*) -> $out {
                    (**self).$name($($arg),*).await
                }
            )*
        }
    };
}

forward_arc!(AuthApi {
    async fn login(&self, email: &str, password: &str) -> crate::Result<String>;
    async fn register(&self, descriptor: RegisterDescriptor) -> crate::Result<()>;
    async fn send_otp(&self, email: &str) -> crate::Result<()>;
});

forward_arc!(MaterialApi {
    async fn all(&self) -> crate::Result<Vec<Material>>;
    async fn search(&self, filters: &SearchDescriptor) -> crate::Result<Vec<Material>>;
    async fn subjects(&self) -> crate::Result<Vec<String>>;
    async fn pending(&self) -> crate::Result<Vec<Material>>;
    async fn upload(&self, descriptor: UploadDescriptor, file_name: String, data: Bytes) -> crate::Result<()>;
    async fn approve(&self, material: u64) -> crate::Result<()>;
    async fn delete(&self, material: u64) -> crate::Result<()>;
    async fn review(&self, material: u64, descriptor: ReviewDescriptor) -> crate::Result<()>;
});

forward_arc!(ForumApi {
    async fn posts(&self, search: Option<&str>) -> crate::Result<Vec<Post>>;
    async fn create_post(&self, descriptor: CreatePostDescriptor) -> crate::Result<()>;
    async fn delete_post(&self, post: u64) -> crate::Result<()>;
    async fn vote(&self, post: u64, kind: VoteKind) -> crate::Result<()>;
    async fn comments(&self, post: u64) -> crate::Result<Vec<Comment>>;
    async fn create_comment(&self, descriptor: CreateCommentDescriptor) -> crate::Result<()>;
    async fn accept_comment(&self, post: u64, comment: u64) -> crate::Result<()>;
});

forward_arc!(UserApi {
    async fn profile(&self) -> crate::Result<UserProfile>;
    async fn edit_profile(&self, descriptor: EditProfileDescriptor) -> crate::Result<()>;
    async fn upload_profile_pic(&self, file_name: String, data: Bytes) -> crate::Result<()>;
    async fn uploads(&self) -> crate::Result<Vec<Material>>;
    async fn saved_materials(&self) -> crate::Result<Vec<Material>>;
    async fn toggle_save(&self, material: u64) -> crate::Result<()>;
    async fn activity_downloads(&self) -> crate::Result<Vec<DownloadRecord>>;
    async fn activity_posts(&self) -> crate::Result<Vec<Post>>;
    async fn activity_comments(&self) -> crate::Result<Vec<Comment>>;
    async fn saved_posts(&self) -> crate::Result<Vec<Post>>;
    async fn change_password(&self, descriptor: ChangePasswordDescriptor) -> crate::Result<()>;
    async fn forgot_password(&self, email: &str) -> crate::Result<()>;
    async fn reset_password(&self, descriptor: ResetPasswordDescriptor) -> crate::Result<()>;
});

forward_arc!(AdminApi {
    async fn stats(&self) -> crate::Result<PortalStats>;
    async fn top_contributors(&self) -> crate::Result<Vec<TopContributor>>;
    async fn trending_materials(&self) -> crate::Result<Vec<TrendingMaterial>>;
    async fn users(&self) -> crate::Result<Vec<UserSummary>>;
    async fn toggle_block(&self, user: u64) -> crate::Result<()>;
    async fn create_admin(&self, descriptor: CreateAdminDescriptor) -> crate::Result<()>;
    async fn support_tickets(&self) -> crate::Result<Vec<SupportTicket>>;
    async fn reply_ticket(&self, ticket: u64, reply: String) -> crate::Result<()>;
});

forward_arc!(SupportApi {
    async fn my_tickets(&self) -> crate::Result<Vec<SupportTicket>>;
    async fn create_ticket(&self, descriptor: CreateTicketDescriptor) -> crate::Result<()>;
});
