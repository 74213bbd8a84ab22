use crate::types;

/// Row of `field_t`.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct FieldRecord {
    pub field_id: i32,
    pub field_name: String,
}

impl From<FieldRecord> for types::Field {
    fn from(value: FieldRecord) -> Self {
        Self {
            id: value.field_id,
            name: value.field_name,
        }
    }
}
