//! Study-material browser.

use std::collections::HashMap;
use std::time::Duration;

use bytes::Bytes;
use edubridge_shared::material::handle::{ReviewDescriptor, SearchDescriptor, UploadDescriptor};
use edubridge_shared::material::{Material, MaterialKind};
use tracing::warn;

use crate::api::{MaterialApi, UserApi};
use crate::Error;

use super::{Confirm, Generation};

/// Client-side cap on upload size, 50 MB.
pub const MAX_UPLOAD_BYTES: usize = 50 * 1024 * 1024;

/// The capability profile the browser is mounted with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowseMode {
    /// Read-only public catalogue.
    Guest,
    /// Logged-in student browsing the catalogue.
    StudentBrowse,
    /// Logged-in student looking at their own uploads.
    StudentPersonal,
    /// Admin catalogue with delete capability.
    Admin,
}

/// Saved-flag of one material as the user sees it.
///
/// A toggle flips the flag immediately and marks it pending; the flag
/// commits when the request succeeds and reverts to the previous value
/// when it fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveState {
    Committed(bool),
    Pending { target: bool, prev: bool },
}

impl SaveState {
    /// The flag as currently displayed.
    pub fn flag(&self) -> bool {
        match *self {
            SaveState::Committed(flag) => flag,
            SaveState::Pending { target, .. } => target,
        }
    }
}

/// Filterable material list with a debounced search box.
pub struct MaterialBrowser<A: MaterialApi + UserApi> {
    api: A,
    mode: BrowseMode,
    filters: SearchDescriptor,
    subjects: Vec<String>,
    materials: Vec<Material>,
    saved: HashMap<u64, SaveState>,
    debounce: Duration,
    fetch_gen: Generation,
    loading: bool,
}

impl<A: MaterialApi + UserApi> MaterialBrowser<A> {
    pub fn new(api: A, mode: BrowseMode, debounce: Duration) -> Self {
        Self {
            api,
            mode,
            filters: SearchDescriptor::default(),
            subjects: Vec::new(),
            materials: Vec::new(),
            saved: HashMap::new(),
            debounce,
            fetch_gen: Generation::default(),
            loading: false,
        }
    }

    pub fn can_upload(&self) -> bool {
        self.mode != BrowseMode::Guest
    }

    pub fn can_delete(&self) -> bool {
        self.mode == BrowseMode::Admin
    }

    pub fn shows_search(&self) -> bool {
        self.mode != BrowseMode::StudentPersonal
    }

    pub async fn mount(&mut self) {
        if self.shows_search() {
            match MaterialApi::subjects(&self.api).await {
                Ok(subjects) => self.subjects = subjects,
                Err(err) => warn!("subject list fetch failed: {err}"),
            }
        }
        self.refetch().await;
    }

    /// Each filter edit invalidates in-flight fetches and returns the
    /// ticket a debounced refresh must present.
    pub fn set_query(&mut self, query: &str) -> u64 {
        self.filters.query = query.to_string();
        self.fetch_gen.bump()
    }

    pub fn set_subject(&mut self, subject: Option<String>) -> u64 {
        self.filters.subject = subject;
        self.fetch_gen.bump()
    }

    pub fn set_kind(&mut self, kind: Option<MaterialKind>) -> u64 {
        self.filters.kind = kind;
        self.fetch_gen.bump()
    }

    pub fn clear_filters(&mut self) -> u64 {
        self.filters = SearchDescriptor::default();
        self.fetch_gen.bump()
    }

    /// Waits out the debounce window, then fetches if no later edit has
    /// superseded this ticket. Rapid edits collapse into the single
    /// fetch belonging to the last of them.
    pub async fn debounced_refresh(&mut self, ticket: u64) {
        tokio::time::sleep(self.debounce).await;
        if !self.fetch_gen.is_current(ticket) {
            return;
        }
        self.refresh(ticket).await;
    }

    async fn refresh(&mut self, ticket: u64) {
        self.loading = true;
        let fetched = match self.mode {
            BrowseMode::StudentPersonal => UserApi::uploads(&self.api).await,
            _ if !self.filters.is_empty() => self.api.search(&self.filters).await,
            _ => self.api.all().await,
        };
        if !self.fetch_gen.is_current(ticket) {
            return;
        }
        match fetched {
            Ok(materials) => self.materials = materials,
            Err(err) => {
                warn!("material fetch failed: {err}");
                self.materials = Vec::new();
            }
        }
        self.loading = false;
    }

    /// Immediate refetch with the current filters.
    pub async fn refetch(&mut self) {
        let ticket = self.fetch_gen.bump();
        self.refresh(ticket).await;
    }

    pub fn is_saved(&self, material: u64) -> bool {
        self.saved.get(&material).is_some_and(SaveState::flag)
    }

    /// Marks materials already saved server-side, from the saved list.
    pub fn seed_saved(&mut self, ids: impl IntoIterator<Item = u64>) {
        for id in ids {
            self.saved.insert(id, SaveState::Committed(true));
        }
    }

    /// Flips the displayed flag immediately, remembering what to revert
    /// to if the server rejects the toggle.
    pub fn begin_toggle_save(&mut self, material: u64) {
        let prev = self.is_saved(material);
        self.saved.insert(
            material,
            SaveState::Pending {
                target: !prev,
                prev,
            },
        );
    }

    /// Commits or reverts the pending flag once the request settled.
    pub fn finish_toggle_save(&mut self, material: u64, ok: bool) {
        if let Some(SaveState::Pending { target, prev }) = self.saved.get(&material).copied() {
            let flag = if ok { target } else { prev };
            self.saved.insert(material, SaveState::Committed(flag));
        }
    }

    pub async fn toggle_save(&mut self, material: u64) -> crate::Result<()> {
        self.begin_toggle_save(material);
        let result = UserApi::toggle_save(&self.api, material).await;
        self.finish_toggle_save(material, result.is_ok());
        result
    }

    /// Deletes a material behind the confirmation gate. Returns whether
    /// the deletion went through.
    pub async fn delete(&mut self, material: u64, gate: &dyn Confirm) -> crate::Result<bool> {
        if !self.can_delete() || !gate.confirm("Delete this material?") {
            return Ok(false);
        }
        MaterialApi::delete(&self.api, material).await?;
        self.refetch().await;
        Ok(true)
    }

    pub async fn upload(
        &mut self,
        descriptor: UploadDescriptor,
        file_name: String,
        data: Bytes,
    ) -> crate::Result<()> {
        if data.len() > MAX_UPLOAD_BYTES {
            return Err(Error::UploadTooLarge { size: data.len() });
        }
        self.api.upload(descriptor, file_name, data).await?;
        self.refetch().await;
        Ok(())
    }

    pub async fn review(&self, material: u64, descriptor: ReviewDescriptor) -> crate::Result<()> {
        self.api.review(material, descriptor).await
    }

    pub fn filters(&self) -> &SearchDescriptor {
        &self.filters
    }

    pub fn subjects(&self) -> &[String] {
        &self.subjects
    }

    pub fn materials(&self) -> &[Material] {
        &self.materials
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }
}
