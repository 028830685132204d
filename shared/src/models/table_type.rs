//! Table Type Model

use serde::{Deserialize, Serialize};

/// Table type entity (桌型)
///
/// Immutable reference data per business. `seats` is the maximum party size
/// a single table of this type can host.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableType {
    pub id: i64,
    pub name: String,
    pub seats: i32,
    pub is_active: bool,
}
