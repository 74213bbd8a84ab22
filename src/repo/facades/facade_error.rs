#[derive(thiserror::Error, Debug)]
pub enum FacadeError {
    #[error("failed to fetch {entity} :: {source}")]
    Query {
        entity: &'static str,
        #[source]
        source: crate::repo::Error,
    },
}

impl FacadeError {
    /// Name of the collection the failing accessor serves.
    pub fn entity(&self) -> &'static str {
        match self {
            Self::Query { entity, .. } => entity,
        }
    }
}
