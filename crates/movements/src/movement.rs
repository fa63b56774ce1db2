use chrono::{DateTime, Utc};
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use stockdesk_core::{DomainError, DomainResult, Entity, MovementId, ProductId, UserId};

/// Kind of stock movement.
///
/// `entrada` receives stock, `salida` withdraws it, `ajuste` corrects it by
/// a signed delta.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MovementKind {
    Entrada,
    Salida,
    Ajuste,
}

impl MovementKind {
    /// Settle the stock math for this kind.
    ///
    /// `salida` fails when `quantity` exceeds the current stock and is the
    /// only kind that checks; an `ajuste` may drive stock negative, which is
    /// the point of a correction. Arithmetic that would leave the i64 range
    /// is rejected the same way any invalid request is: as an error, with
    /// nothing applied.
    pub fn apply(self, stock: i64, quantity: i64) -> DomainResult<i64> {
        let settled = match self {
            MovementKind::Entrada => stock.checked_add(quantity),
            MovementKind::Salida => {
                if quantity > stock {
                    return Err(DomainError::insufficient_stock(quantity, stock));
                }
                stock.checked_sub(quantity)
            }
            MovementKind::Ajuste => stock.checked_add(quantity),
        };
        settled.ok_or_else(|| DomainError::validation("movement would overflow stock"))
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MovementKind::Entrada => "entrada",
            MovementKind::Salida => "salida",
            MovementKind::Ajuste => "ajuste",
        }
    }
}

impl core::fmt::Display for MovementKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MovementKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "entrada" => Ok(MovementKind::Entrada),
            "salida" => Ok(MovementKind::Salida),
            "ajuste" => Ok(MovementKind::Ajuste),
            other => Err(DomainError::validation(format!(
                "unknown movement kind: {other}"
            ))),
        }
    }
}

/// An immutable ledger entry. Once recorded it is never edited or deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockMovement {
    pub id: MovementId,
    pub kind: MovementKind,
    /// Positive for entrada/salida; signed delta for ajuste.
    pub quantity: i64,
    pub product_id: ProductId,
    pub user_id: UserId,
    pub reason: String,
    /// External document reference, e.g. a purchase order number.
    pub reference: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl StockMovement {
    /// Mint the ledger record for a request the processor has already
    /// validated and settled.
    pub fn record(new: NewMovement) -> Self {
        Self {
            id: MovementId::new(),
            kind: new.kind,
            quantity: new.quantity,
            product_id: new.product_id,
            user_id: new.user_id,
            reason: new.reason,
            reference: new.reference,
            created_at: Utc::now(),
        }
    }
}

impl Entity for StockMovement {
    type Id = MovementId;

    fn id(&self) -> MovementId {
        self.id
    }
}

/// Request to record a movement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewMovement {
    pub kind: MovementKind,
    pub quantity: i64,
    pub product_id: ProductId,
    pub user_id: UserId,
    pub reason: String,
    pub reference: Option<String>,
}

impl NewMovement {
    /// Boundary validation. Entrada and salida move whole units in one
    /// direction, so their quantity must be at least 1; an ajuste delta is
    /// unrestricted (zero records a no-op correction).
    pub fn validate(&self) -> DomainResult<()> {
        if self.reason.trim().is_empty() {
            return Err(DomainError::validation("reason cannot be empty"));
        }
        if matches!(self.kind, MovementKind::Entrada | MovementKind::Salida)
            && self.quantity < 1
        {
            return Err(DomainError::validation("quantity must be positive"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_new_movement(kind: MovementKind, quantity: i64) -> NewMovement {
        NewMovement {
            kind,
            quantity,
            product_id: ProductId::new(),
            user_id: UserId::new(),
            reason: "Compra a proveedor".to_string(),
            reference: Some("PO-2024-001".to_string()),
        }
    }

    #[test]
    fn entrada_adds_to_stock() {
        assert_eq!(MovementKind::Entrada.apply(45, 50).unwrap(), 95);
    }

    #[test]
    fn salida_subtracts_and_may_drain_to_zero() {
        assert_eq!(MovementKind::Salida.apply(45, 5).unwrap(), 40);
        assert_eq!(MovementKind::Salida.apply(45, 45).unwrap(), 0);
    }

    #[test]
    fn salida_overdraw_reports_both_sides() {
        let err = MovementKind::Salida.apply(3, 10).unwrap_err();
        assert_eq!(
            err,
            DomainError::InsufficientStock {
                requested: 10,
                available: 3
            }
        );
    }

    #[test]
    fn ajuste_applies_a_signed_delta() {
        assert_eq!(MovementKind::Ajuste.apply(10, -3).unwrap(), 7);
        assert_eq!(MovementKind::Ajuste.apply(10, 5).unwrap(), 15);
    }

    #[test]
    fn ajuste_may_drive_stock_negative() {
        assert_eq!(MovementKind::Ajuste.apply(2, -5).unwrap(), -3);
    }

    #[test]
    fn stock_arithmetic_past_i64_is_rejected_not_wrapped() {
        // A max-size quantity passes validate (it only demands >= 1), so the
        // settlement itself must refuse to leave the i64 range.
        let err = MovementKind::Entrada.apply(1, i64::MAX).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));

        let err = MovementKind::Ajuste.apply(i64::MIN, -1).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));

        // A salida quantity of i64::MIN sneaks past the overdraw comparison
        // (it is smaller than any stock) and would wrap the subtraction.
        let err = MovementKind::Salida.apply(-1, i64::MIN).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn validate_rejects_blank_reason() {
        let mut new = test_new_movement(MovementKind::Entrada, 10);
        new.reason = "  ".to_string();
        assert!(matches!(
            new.validate().unwrap_err(),
            DomainError::Validation(_)
        ));
    }

    #[test]
    fn validate_rejects_non_positive_entrada_and_salida() {
        assert!(test_new_movement(MovementKind::Entrada, 0).validate().is_err());
        assert!(test_new_movement(MovementKind::Salida, -4).validate().is_err());
    }

    #[test]
    fn validate_accepts_any_ajuste_delta() {
        assert!(test_new_movement(MovementKind::Ajuste, -3).validate().is_ok());
        assert!(test_new_movement(MovementKind::Ajuste, 0).validate().is_ok());
    }

    #[test]
    fn record_copies_the_request_and_stamps_it() {
        let new = test_new_movement(MovementKind::Salida, 4);
        let product_id = new.product_id;
        let movement = StockMovement::record(new);
        assert_eq!(movement.kind, MovementKind::Salida);
        assert_eq!(movement.quantity, 4);
        assert_eq!(movement.product_id, product_id);
        assert_eq!(movement.reference.as_deref(), Some("PO-2024-001"));
    }

    #[test]
    fn kind_serializes_lowercase() {
        let json = serde_json::to_string(&MovementKind::Entrada).unwrap();
        assert_eq!(json, "\"entrada\"");
        assert_eq!("ajuste".parse::<MovementKind>().unwrap(), MovementKind::Ajuste);
        assert!("transfer".parse::<MovementKind>().is_err());
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig { cases: 1000, ..ProptestConfig::default() })]

            /// A successful salida never leaves negative stock, and a failed
            /// one means the request exceeded what was on hand.
            #[test]
            fn salida_never_overdraws(stock in 0i64..10_000, quantity in 1i64..20_000) {
                match MovementKind::Salida.apply(stock, quantity) {
                    Ok(rest) => {
                        prop_assert!(rest >= 0);
                        prop_assert_eq!(rest, stock - quantity);
                    }
                    Err(DomainError::InsufficientStock { requested, available }) => {
                        prop_assert!(quantity > stock);
                        prop_assert_eq!(requested, quantity);
                        prop_assert_eq!(available, stock);
                    }
                    Err(other) => prop_assert!(false, "unexpected error: {other}"),
                }
            }

            /// Entrada followed by an equal salida restores the old stock.
            #[test]
            fn entrada_then_salida_round_trips(stock in 0i64..10_000, quantity in 1i64..10_000) {
                let received = MovementKind::Entrada.apply(stock, quantity)?;
                let restored = MovementKind::Salida.apply(received, quantity)?;
                prop_assert_eq!(restored, stock);
            }

            /// Ajuste is plain signed addition, whatever the sign.
            #[test]
            fn ajuste_is_signed_addition(stock in -10_000i64..10_000, delta in -10_000i64..10_000) {
                prop_assert_eq!(MovementKind::Ajuste.apply(stock, delta)?, stock + delta);
            }
        }
    }
}
