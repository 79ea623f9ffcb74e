//! Session-scoped farm profile registry.

use super::model::{Profile, ProfileDraft};
use crate::error::{Result, SakhiError};
use crate::id::{IdSource, UuidIdSource};
use std::sync::Arc;

/// Holds the set of farm profiles for the current session and the
/// currently selected profile.
///
/// All state lives in memory and is discarded with the instance; there is
/// no storage backend. Every mutating operation is synchronous and either
/// applies fully or leaves the directory untouched.
///
/// The directory itself is not thread-safe; callers sharing it across
/// tasks wrap it in `Arc<RwLock<ProfileDirectory>>`.
pub struct ProfileDirectory {
    /// Profiles in insertion order
    profiles: Vec<Profile>,
    /// Id of the currently selected profile, if any
    selected_id: Option<String>,
    /// Source of fresh profile ids
    ids: Arc<dyn IdSource>,
}

impl Default for ProfileDirectory {
    fn default() -> Self {
        Self::new()
    }
}

impl ProfileDirectory {
    /// Creates an empty directory with UUID-based id generation.
    pub fn new() -> Self {
        Self::with_id_source(Arc::new(UuidIdSource))
    }

    /// Creates an empty directory with a caller-supplied id source.
    pub fn with_id_source(ids: Arc<dyn IdSource>) -> Self {
        Self {
            profiles: Vec::new(),
            selected_id: None,
            ids,
        }
    }

    /// Creates a new profile from the draft and selects it.
    ///
    /// Assigns a fresh unique id and a creation timestamp, appends the
    /// profile to the collection, and makes it the selected profile.
    /// Two profiles with identical field values are distinct entities.
    ///
    /// # Errors
    ///
    /// Returns `SakhiError::Validation` if a required field is blank or
    /// the age is not positive; the directory is left unchanged.
    pub fn create(&mut self, draft: ProfileDraft) -> Result<Profile> {
        draft.validate()?;

        let profile = Profile {
            id: self.ids.next_id(),
            name: draft.name,
            age: draft.age,
            contact: draft.contact,
            location: draft.location,
            land_size: draft.land_size,
            crop_type: draft.crop_type,
            soil_type: draft.soil_type,
            irrigation_method: draft.irrigation_method,
            created_at: chrono::Utc::now().to_rfc3339(),
        };

        tracing::debug!("profile created: {} ({})", profile.name, profile.id);
        self.profiles.push(profile.clone());
        self.selected_id = Some(profile.id.clone());
        Ok(profile)
    }

    /// Replaces the mutable fields of the profile with `id`.
    ///
    /// `id` and `created_at` are preserved. If the profile is currently
    /// selected it stays selected and the selected view reflects the new
    /// field values.
    ///
    /// # Errors
    ///
    /// Returns `SakhiError::Validation` on a bad draft and
    /// `SakhiError::NotFound` for an unknown id; in both cases the
    /// directory is left unchanged.
    pub fn update(&mut self, id: &str, draft: ProfileDraft) -> Result<Profile> {
        draft.validate()?;

        let profile = self
            .profiles
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| SakhiError::not_found("profile", id))?;

        profile.name = draft.name;
        profile.age = draft.age;
        profile.contact = draft.contact;
        profile.location = draft.location;
        profile.land_size = draft.land_size;
        profile.crop_type = draft.crop_type;
        profile.soil_type = draft.soil_type;
        profile.irrigation_method = draft.irrigation_method;

        tracing::debug!("profile updated: {}", id);
        Ok(profile.clone())
    }

    /// Removes the profile with `id` if present; unknown ids are ignored.
    ///
    /// If the removed profile was selected, the selection is cleared.
    pub fn remove(&mut self, id: &str) {
        let before = self.profiles.len();
        self.profiles.retain(|p| p.id != id);
        if self.profiles.len() < before {
            tracing::debug!("profile removed: {}", id);
            if self.selected_id.as_deref() == Some(id) {
                self.selected_id = None;
            }
        }
    }

    /// Sets or clears the selected profile.
    ///
    /// # Errors
    ///
    /// Returns `SakhiError::NotFound` if `id` is `Some` and no profile
    /// with that id exists; the selection is left unchanged.
    pub fn select(&mut self, id: Option<&str>) -> Result<()> {
        match id {
            Some(id) => {
                if !self.profiles.iter().any(|p| p.id == id) {
                    return Err(SakhiError::not_found("profile", id));
                }
                self.selected_id = Some(id.to_string());
            }
            None => self.selected_id = None,
        }
        Ok(())
    }

    /// Returns all profiles in insertion order.
    pub fn list(&self) -> &[Profile] {
        &self.profiles
    }

    /// Returns the currently selected profile, if any.
    pub fn selected(&self) -> Option<&Profile> {
        let id = self.selected_id.as_deref()?;
        self.profiles.iter().find(|p| p.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::SequentialIdSource;

    fn directory() -> ProfileDirectory {
        ProfileDirectory::with_id_source(Arc::new(SequentialIdSource::new()))
    }

    fn draft(name: &str) -> ProfileDraft {
        ProfileDraft {
            name: name.to_string(),
            age: 40,
            contact: "999".to_string(),
            location: "Kochi".to_string(),
            land_size: "2 acres".to_string(),
            crop_type: "Rice".to_string(),
            soil_type: "Clay".to_string(),
            irrigation_method: "Flood".to_string(),
        }
    }

    #[test]
    fn test_create_assigns_unique_ids_and_selects() {
        let mut dir = directory();

        let first = dir.create(draft("Ravi")).unwrap();
        let second = dir.create(draft("Ravi")).unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(dir.list().len(), 2);
        // the latest create wins the selection
        assert_eq!(dir.selected().unwrap().id, second.id);
    }

    #[test]
    fn test_create_rejects_invalid_draft_without_mutation() {
        let mut dir = directory();
        let mut bad = draft("Ravi");
        bad.age = 0;

        assert!(dir.create(bad).unwrap_err().is_validation());
        assert!(dir.list().is_empty());
        assert!(dir.selected().is_none());
    }

    #[test]
    fn test_update_preserves_id_and_created_at() {
        let mut dir = directory();
        let created = dir.create(draft("Ravi")).unwrap();

        let mut changed = draft("Anita");
        changed.crop_type = "Banana".to_string();
        let updated = dir.update(&created.id, changed).unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.created_at, created.created_at);
        assert_eq!(updated.name, "Anita");
        assert_eq!(updated.crop_type, "Banana");
        // the selected view reflects the new values
        assert_eq!(dir.selected().unwrap().name, "Anita");
    }

    #[test]
    fn test_update_unknown_id_is_not_found() {
        let mut dir = directory();
        dir.create(draft("Ravi")).unwrap();

        let err = dir.update("missing", draft("Anita")).unwrap_err();

        assert!(err.is_not_found());
        assert_eq!(dir.list()[0].name, "Ravi");
    }

    #[test]
    fn test_remove_selected_clears_selection() {
        let mut dir = directory();
        let first = dir.create(draft("Ravi")).unwrap();
        let second = dir.create(draft("Anita")).unwrap();

        dir.remove(&second.id);
        assert!(dir.selected().is_none());
        assert_eq!(dir.list().len(), 1);

        // removing a non-selected profile leaves the selection alone
        dir.select(Some(&first.id)).unwrap();
        dir.remove("missing");
        assert_eq!(dir.selected().unwrap().id, first.id);
    }

    #[test]
    fn test_select_unknown_id_is_not_found() {
        let mut dir = directory();
        let created = dir.create(draft("Ravi")).unwrap();

        let err = dir.select(Some("missing")).unwrap_err();

        assert!(err.is_not_found());
        assert_eq!(dir.selected().unwrap().id, created.id);
    }

    #[test]
    fn test_select_none_clears() {
        let mut dir = directory();
        dir.create(draft("Ravi")).unwrap();

        dir.select(None).unwrap();

        assert!(dir.selected().is_none());
    }

    #[test]
    fn test_list_is_stable_without_mutation() {
        let mut dir = directory();
        dir.create(draft("Ravi")).unwrap();
        dir.create(draft("Anita")).unwrap();

        let first: Vec<String> = dir.list().iter().map(|p| p.id.clone()).collect();
        let second: Vec<String> = dir.list().iter().map(|p| p.id.clone()).collect();

        assert_eq!(first, second);
        assert_eq!(dir.selected().map(|p| p.id.clone()), dir.selected().map(|p| p.id.clone()));
    }
}
