use crate::repo::{self, sql_models};

/// Returns every field of study, in engine order.
pub async fn field_find_all(
    repo: &repo::Repository,
) -> Result<Vec<sql_models::FieldRecord>, repo::Error> {
    let records = sqlx::query_as::<_, sql_models::FieldRecord>(
        "SELECT field_id, field_name FROM field_t",
    )
    .fetch_all(repo.pool())
    .await?;
    Ok(records)
}

/// Returns every semester ordered by `number` ascending, each joined with
/// the name of its owning field.
pub async fn semester_find_all(
    repo: &repo::Repository,
) -> Result<Vec<sql_models::SemesterRecord>, repo::Error> {
    let records = sqlx::query_as::<_, sql_models::SemesterRecord>(
        r#"SELECT s.semester_id, s.number, s.field_id, f.field_name
        FROM semester_t s
        JOIN field_t f ON f.field_id = s.field_id
        ORDER BY s.number ASC"#,
    )
    .fetch_all(repo.pool())
    .await?;
    Ok(records)
}

/// Returns every user, in engine order.
pub async fn user_find_all(
    repo: &repo::Repository,
) -> Result<Vec<sql_models::UserRecord>, repo::Error> {
    let records = sqlx::query_as::<_, sql_models::UserRecord>(
        "SELECT user_id, username, email, created_at FROM user_t",
    )
    .fetch_all(repo.pool())
    .await?;
    Ok(records)
}
