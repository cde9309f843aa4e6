//! Persisted UI preferences and the registered-user profile.
//!
//! Both share the cart's persistence contract (flush on every mutation)
//! but carry no storefront logic. The profile registers are written by
//! the signup collaborator; the core stores them verbatim and only reads
//! them back for the greeting.

use serde::{Deserialize, Serialize};

use crate::store::{JsonStore, keys};

/// Light or dark display mode.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    #[default]
    Light,
    Dark,
}

impl DisplayMode {
    /// The other mode.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// The persisted string value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl core::fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Persisted display preferences.
#[derive(Debug)]
pub struct Preferences {
    mode: DisplayMode,
    store: JsonStore,
}

impl Preferences {
    /// Load preferences persisted in `store`, defaulting to light mode.
    #[must_use]
    pub fn load(store: &JsonStore) -> Self {
        Self {
            mode: store.load(keys::MODE, DisplayMode::default()),
            store: store.clone(),
        }
    }

    /// The current display mode.
    #[must_use]
    pub const fn mode(&self) -> DisplayMode {
        self.mode
    }

    /// Flip the display mode, persist, and return the new mode.
    pub fn toggle_mode(&mut self) -> DisplayMode {
        self.mode = self.mode.toggled();
        self.store.save(keys::MODE, &self.mode);
        self.mode
    }
}

/// A registered user, as stored by the signup collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisteredUser {
    /// Full name as entered at signup.
    pub name: String,
    /// Email as entered at signup.
    pub email: String,
}

impl RegisteredUser {
    /// First whitespace-separated word of the name, used for greetings.
    #[must_use]
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }
}

/// Accessor for the signup collaborator's two persisted strings.
///
/// The storefront core performs no validation here; the signup form owns
/// field validation.
#[derive(Debug)]
pub struct Profile {
    store: JsonStore,
}

impl Profile {
    /// Attach to the profile registers in `store`.
    #[must_use]
    pub fn new(store: &JsonStore) -> Self {
        Self {
            store: store.clone(),
        }
    }

    /// Persist a registration.
    pub fn register(&self, name: &str, email: &str) {
        self.store.save(keys::USER_NAME, &name);
        self.store.save(keys::USER_EMAIL, &email);
    }

    /// The registered user, if both registers are present.
    #[must_use]
    pub fn registered(&self) -> Option<RegisteredUser> {
        let name: String = self.store.load_opt(keys::USER_NAME)?;
        let email: String = self.store.load_opt(keys::USER_EMAIL)?;
        Some(RegisteredUser { name, email })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn mode_defaults_to_light_and_toggles() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::open(dir.path()).unwrap();

        let mut prefs = Preferences::load(&store);
        assert_eq!(prefs.mode(), DisplayMode::Light);
        assert_eq!(prefs.toggle_mode(), DisplayMode::Dark);

        // The toggle is durable.
        let reloaded = Preferences::load(&store);
        assert_eq!(reloaded.mode(), DisplayMode::Dark);
    }

    #[test]
    fn profile_absent_until_registered() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::open(dir.path()).unwrap();

        let profile = Profile::new(&store);
        assert_eq!(profile.registered(), None);

        profile.register("Ada Lovelace", "ada@example.com");
        let user = profile.registered().unwrap();
        assert_eq!(user.first_name(), "Ada");
        assert_eq!(user.email, "ada@example.com");
    }
}
