use crate::types;

/// Row of `semester_t`, joined with the owning field.
///
/// `field_name` is not a column of `semester_t`; it is projected from the
/// joined `field_t` row, so the include is checked at the type level.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct SemesterRecord {
    pub semester_id: i32,
    pub number: i32,
    pub field_id: i32,
    pub field_name: String,
}

impl From<SemesterRecord> for types::Semester {
    fn from(value: SemesterRecord) -> Self {
        Self {
            id: value.semester_id,
            number: value.number,
            field_id: value.field_id,
            field_name: value.field_name,
        }
    }
}
