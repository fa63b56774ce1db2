use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockdesk_core::{CategoryId, DomainError, DomainResult, Entity};

/// Category record.
///
/// The per-category product count is never stored here; it is derived from
/// the product collection on every read so it cannot go stale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub description: String,
    /// Display color as a hex string, e.g. `#3B82F6`.
    pub color: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Category {
    pub fn create(new: NewCategory) -> DomainResult<Self> {
        new.validate()?;
        let now = Utc::now();
        Ok(Self {
            id: CategoryId::new(),
            name: new.name,
            description: new.description,
            color: new.color,
            created_at: now,
            updated_at: now,
        })
    }

    pub fn apply_patch(&mut self, patch: CategoryPatch) -> DomainResult<()> {
        patch.validate()?;
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(color) = patch.color {
            self.color = color;
        }
        self.updated_at = Utc::now();
        Ok(())
    }
}

impl Entity for Category {
    type Id = CategoryId;

    fn id(&self) -> CategoryId {
        self.id
    }
}

/// Creation payload for a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCategory {
    pub name: String,
    pub description: String,
    pub color: String,
}

impl NewCategory {
    fn validate(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        if self.color.trim().is_empty() {
            return Err(DomainError::validation("color cannot be empty"));
        }
        Ok(())
    }
}

/// Patch payload for a category. Absent fields stay untouched.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub color: Option<String>,
}

impl CategoryPatch {
    fn validate(&self) -> DomainResult<()> {
        if let Some(name) = &self.name {
            if name.trim().is_empty() {
                return Err(DomainError::validation("name cannot be empty"));
            }
        }
        if let Some(color) = &self.color {
            if color.trim().is_empty() {
                return Err(DomainError::validation("color cannot be empty"));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_new_category() -> NewCategory {
        NewCategory {
            name: "Electrónica".to_string(),
            description: "Dispositivos y componentes".to_string(),
            color: "#3B82F6".to_string(),
        }
    }

    #[test]
    fn create_sets_both_timestamps() {
        let category = Category::create(test_new_category()).unwrap();
        assert_eq!(category.created_at, category.updated_at);
        assert_eq!(category.color, "#3B82F6");
    }

    #[test]
    fn create_rejects_blank_name() {
        let mut new = test_new_category();
        new.name = " ".to_string();
        assert!(matches!(
            Category::create(new).unwrap_err(),
            DomainError::Validation(_)
        ));
    }

    #[test]
    fn patch_merges_and_bumps_updated_at() {
        let mut category = Category::create(test_new_category()).unwrap();
        let before = category.updated_at;
        category
            .apply_patch(CategoryPatch {
                color: Some("#000000".to_string()),
                ..CategoryPatch::default()
            })
            .unwrap();
        assert_eq!(category.color, "#000000");
        assert_eq!(category.name, "Electrónica");
        assert!(category.updated_at >= before);
    }
}
