use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockdesk_core::{DomainError, DomainResult, Entity, SupplierId};

/// Supplier directory record. Movements do not reference suppliers; the
/// `reference` field on a movement is free text for that.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Supplier {
    pub id: SupplierId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub contact_person: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Supplier {
    pub fn create(new: NewSupplier) -> DomainResult<Self> {
        new.validate()?;
        let now = Utc::now();
        Ok(Self {
            id: SupplierId::new(),
            name: new.name,
            email: new.email,
            phone: new.phone,
            address: new.address,
            contact_person: new.contact_person,
            is_active: new.is_active,
            created_at: now,
            updated_at: now,
        })
    }

    pub fn apply_patch(&mut self, patch: SupplierPatch) -> DomainResult<()> {
        patch.validate()?;
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(phone) = patch.phone {
            self.phone = phone;
        }
        if let Some(address) = patch.address {
            self.address = address;
        }
        if let Some(contact_person) = patch.contact_person {
            self.contact_person = contact_person;
        }
        if let Some(is_active) = patch.is_active {
            self.is_active = is_active;
        }
        self.updated_at = Utc::now();
        Ok(())
    }
}

impl Entity for Supplier {
    type Id = SupplierId;

    fn id(&self) -> SupplierId {
        self.id
    }
}

/// Creation payload for a supplier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewSupplier {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub contact_person: String,
    pub is_active: bool,
}

impl NewSupplier {
    fn validate(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        Ok(())
    }
}

/// Patch payload for a supplier. Absent fields stay untouched.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplierPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub contact_person: Option<String>,
    pub is_active: Option<bool>,
}

impl SupplierPatch {
    fn validate(&self) -> DomainResult<()> {
        if let Some(name) = &self.name {
            if name.trim().is_empty() {
                return Err(DomainError::validation("name cannot be empty"));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_new_supplier() -> NewSupplier {
        NewSupplier {
            name: "TechDistributor S.A.".to_string(),
            email: "ventas@techdist.com".to_string(),
            phone: "+34 911 234 567".to_string(),
            address: "Calle Industria 45, Madrid".to_string(),
            contact_person: "Roberto Sánchez".to_string(),
            is_active: true,
        }
    }

    #[test]
    fn create_keeps_the_requested_active_flag() {
        let mut new = test_new_supplier();
        new.is_active = false;
        let supplier = Supplier::create(new).unwrap();
        assert!(!supplier.is_active);
    }

    #[test]
    fn create_rejects_blank_name() {
        let mut new = test_new_supplier();
        new.name = String::new();
        assert!(matches!(
            Supplier::create(new).unwrap_err(),
            DomainError::Validation(_)
        ));
    }

    #[test]
    fn patch_merges_contact_details() {
        let mut supplier = Supplier::create(test_new_supplier()).unwrap();
        supplier
            .apply_patch(SupplierPatch {
                contact_person: Some("Laura Jiménez".to_string()),
                ..SupplierPatch::default()
            })
            .unwrap();
        assert_eq!(supplier.contact_person, "Laura Jiménez");
        assert_eq!(supplier.name, "TechDistributor S.A.");
    }
}
