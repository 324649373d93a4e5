//! Level lookup by name

use crate::error::{ModelError, Result};
use crate::host::HostDocument;
use crate::notification::{NotificationCollection, NotificationType};
use crate::tables::Level;

/// Find the first level named exactly `name` (case-sensitive)
pub fn find_level_by_name<D: HostDocument + ?Sized>(doc: &D, name: &str) -> Result<Level> {
    doc.levels()
        .into_iter()
        .find(|level| level.name == name)
        .cloned()
        .ok_or_else(|| ModelError::LevelNotFound(name.to_string()))
}

/// Like [`find_level_by_name`], recording a warning when the name is ambiguous
pub fn resolve_level<D: HostDocument + ?Sized>(
    doc: &D,
    name: &str,
    notifications: &mut NotificationCollection,
) -> Result<Level> {
    let level = find_level_by_name(doc, name)?;
    let matches = doc.levels().iter().filter(|l| l.name == name).count();
    if matches > 1 {
        notifications.notify(
            NotificationType::Warning,
            format!(
                "{matches} levels are named '{name}'; using the first (id {})",
                level.id
            ),
        );
    }
    Ok(level)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::BimDocument;
    use crate::types::Length;

    fn doc() -> BimDocument {
        let mut doc = BimDocument::new();
        doc.add_level(Level::new("Level 1", Length::ZERO)).unwrap();
        doc.add_level(Level::new("Level 2", Length::from_internal(13.12)))
            .unwrap();
        doc
    }

    #[test]
    fn test_find_existing_level() {
        let level = find_level_by_name(&doc(), "Level 2").unwrap();
        assert_eq!(level.name, "Level 2");
        assert_eq!(level.elevation, Length::from_internal(13.12));
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let err = find_level_by_name(&doc(), "level 2").unwrap_err();
        assert!(matches!(err, ModelError::LevelNotFound(ref n) if n == "level 2"));
    }

    #[test]
    fn test_duplicates_resolve_to_first_with_warning() {
        let mut d = doc();
        d.add_level(Level::new("Level 1", Length::from_internal(50.0)))
            .unwrap();
        let mut notes = NotificationCollection::new();
        let level = resolve_level(&d, "Level 1", &mut notes).unwrap();
        assert_eq!(level.elevation, Length::ZERO);
        assert_eq!(notes.of_type(NotificationType::Warning).len(), 1);
    }

    #[test]
    fn test_unique_name_has_no_warning() {
        let mut notes = NotificationCollection::new();
        resolve_level(&doc(), "Level 1", &mut notes).unwrap();
        assert!(notes.is_empty());
    }
}
