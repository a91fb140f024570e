use std::path::PathBuf;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

/// UI theme preference. A preference, not session state: it survives
/// logout.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

#[derive(Serialize, Deserialize, Default)]
struct StoreData {
    token: Option<String>,
    theme: Theme,
}

/// The client's replacement for browser local storage: the bearer token
/// and the theme preference, nothing else. Optionally backed by a TOML
/// file so both survive restarts.
///
/// Handed around as one injected value so every token read and the
/// single [`LocalStore::logout`] go through here instead of ad-hoc
/// storage pokes scattered across handlers.
pub struct LocalStore {
    data: RwLock<StoreData>,
    path: Option<PathBuf>,
}

impl LocalStore {
    /// An in-memory store, for tests and embedders that persist elsewhere.
    pub fn in_memory() -> Self {
        Self {
            data: RwLock::new(StoreData::default()),
            path: None,
        }
    }

    /// Load from `path`, starting empty when the file does not exist yet.
    pub fn load(path: PathBuf) -> crate::Result<Self> {
        let data = match std::fs::read_to_string(&path) {
            Ok(contents) => toml::from_str(&contents)?,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => StoreData::default(),
            Err(err) => return Err(err.into()),
        };
        Ok(Self {
            data: RwLock::new(data),
            path: Some(path),
        })
    }

    pub fn token(&self) -> Option<String> {
        self.data.read().token.clone()
    }

    pub fn set_token(&self, token: String) -> crate::Result<()> {
        self.data.write().token = Some(token);
        self.persist()
    }

    /// Clears all session state. The theme preference stays.
    pub fn logout(&self) -> crate::Result<()> {
        self.data.write().token = None;
        self.persist()
    }

    pub fn theme(&self) -> Theme {
        self.data.read().theme
    }

    pub fn set_theme(&self, theme: Theme) -> crate::Result<()> {
        self.data.write().theme = theme;
        self.persist()
    }

    fn persist(&self) -> crate::Result<()> {
        if let Some(path) = &self.path {
            let encoded = toml::to_string(&*self.data.read())?;
            std::fs::write(path, encoded)?;
        }
        Ok(())
    }
}
