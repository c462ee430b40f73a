//! Strongly-typed identifiers used across the domain.
//!
//! Every persisted record is keyed by a strictly positive `i32` ("repo id").
//! Zero and negative values mean "not set" at the storage boundary; in the domain
//! that state is expressed as `Option<Id>` instead.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

macro_rules! repo_id_newtype {
    ($(#[$meta:meta])* $t:ident, $name:literal) => {
        $(#[$meta])*
        #[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(try_from = "i32", into = "i32")]
        pub struct $t(i32);

        impl $t {
            /// Create an identifier from a raw repo id; fails unless `repo_id > 0`.
            pub fn new(repo_id: i32) -> DomainResult<Self> {
                if repo_id > 0 {
                    Ok(Self(repo_id))
                } else {
                    Err(DomainError::invalid_id($name, repo_id))
                }
            }

            /// Map a raw repo id to `None` when it is not set (`<= 0`).
            pub fn of_repo_id_or_none(repo_id: i32) -> Option<Self> {
                (repo_id > 0).then_some(Self(repo_id))
            }

            pub fn repo_id(self) -> i32 {
                self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl TryFrom<i32> for $t {
            type Error = DomainError;

            fn try_from(value: i32) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$t> for i32 {
            fn from(value: $t) -> Self {
                value.0
            }
        }

        impl FromStr for $t {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let raw = s
                    .trim()
                    .parse::<i32>()
                    .map_err(|e| DomainError::validation(format!("{}: {}", $name, e)))?;
                Self::new(raw)
            }
        }
    };
}

repo_id_newtype!(
    /// Identifier of a product.
    ProductId,
    "ProductId"
);
repo_id_newtype!(
    /// Identifier of a unit of measure.
    UomId,
    "UomId"
);
repo_id_newtype!(
    /// Identifier of an organization (tenant-like boundary inside a client).
    OrgId,
    "OrgId"
);
repo_id_newtype!(WarehouseId, "WarehouseId");
repo_id_newtype!(
    /// Identifier of a business partner (vendor or customer).
    BPartnerId,
    "BPartnerId"
);
repo_id_newtype!(
    /// Identifier of an order header (sales or purchase).
    OrderId,
    "OrderId"
);
repo_id_newtype!(
    /// Identifier of a single order line.
    OrderLineId,
    "OrderLineId"
);
repo_id_newtype!(PurchaseCandidateId, "PurchaseCandidateId");
repo_id_newtype!(PurchaseItemId, "PurchaseItemId");
