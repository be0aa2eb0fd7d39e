//! Dining Table Status Model

use serde::{Deserialize, Serialize};

/// Seating/reservation snapshot of one dining table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct DiningTableStatus {
    pub table_id: i32,
    pub seats: i32,
    pub is_reserved: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_from_snapshot_json() {
        let status: DiningTableStatus =
            serde_json::from_str(r#"{"table_id":5,"seats":4,"is_reserved":true}"#).unwrap();
        assert_eq!(
            status,
            DiningTableStatus {
                table_id: 5,
                seats: 4,
                is_reserved: true,
            }
        );
    }
}
