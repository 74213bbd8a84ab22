use std::str::FromStr;
use std::sync::Arc;

use log::error;

use super::FacadeError;
use crate::{repo, types};

/// Failure policy of a collection accessor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchPolicy {
    /// Convert any engine fault into an empty, degraded collection.
    DegradeToEmpty,
    /// Propagate the fault to the caller as a [`FacadeError`].
    SurfaceError,
}

#[derive(thiserror::Error, Debug)]
#[error("unknown fetch policy `{0}`, expected `degrade` or `surface`")]
pub struct UnknownPolicy(String);

impl FromStr for FetchPolicy {
    type Err = UnknownPolicy;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "degrade" | "degrade-to-empty" => Ok(Self::DegradeToEmpty),
            "surface" | "surface-as-error" => Ok(Self::SurfaceError),
            _ => Err(UnknownPolicy(value.to_owned())),
        }
    }
}

/// Per-accessor policies.
///
/// The defaults mirror the behavior the catalog's clients were built
/// against: fields surface faults, the list-rendering collections degrade
/// to empty.
#[derive(Debug, Clone, Copy)]
pub struct FetchPolicies {
    pub fields: FetchPolicy,
    pub semesters: FetchPolicy,
    pub users: FetchPolicy,
}

impl Default for FetchPolicies {
    fn default() -> Self {
        Self {
            fields: FetchPolicy::SurfaceError,
            semesters: FetchPolicy::DegradeToEmpty,
            users: FetchPolicy::DegradeToEmpty,
        }
    }
}

/// A fetched collection plus the marker distinguishing "empty" from
/// "engine unavailable".
#[derive(Debug, Clone, PartialEq)]
pub struct Fetched<T> {
    pub items: Vec<T>,
    pub degraded: bool,
}

impl<T> Fetched<T> {
    fn complete(items: Vec<T>) -> Self {
        Self {
            items,
            degraded: false,
        }
    }

    fn degraded_empty() -> Self {
        Self {
            items: Vec::new(),
            degraded: true,
        }
    }
}

/// Facade used to read catalog collections.
///
/// Each accessor issues exactly one read against the injected engine and
/// resolves the result through the shared template below.
pub struct FacadeCatalog {
    catalog: Arc<dyn repo::Catalog>,
    policies: FetchPolicies,
}

impl FacadeCatalog {
    pub fn new(catalog: Arc<dyn repo::Catalog>, policies: FetchPolicies) -> Self {
        Self { catalog, policies }
    }

    /// All fields of study, in engine order.
    pub async fn fields(&self) -> Result<Fetched<types::Field>, FacadeError> {
        Self::resolve("fields", self.policies.fields, self.catalog.field_all().await)
    }

    /// All semesters ordered by number, each with its field's name.
    pub async fn semesters(&self) -> Result<Fetched<types::Semester>, FacadeError> {
        Self::resolve(
            "semesters",
            self.policies.semesters,
            self.catalog.semester_all().await,
        )
    }

    /// All users, in engine order.
    pub async fn users(&self) -> Result<Fetched<types::User>, FacadeError> {
        Self::resolve("users", self.policies.users, self.catalog.user_all().await)
    }

    /// The accessor template: successful reads pass through verbatim, a
    /// fault emits one diagnostic and is resolved by the accessor's policy.
    fn resolve<T>(
        entity: &'static str,
        policy: FetchPolicy,
        result: Result<Vec<T>, repo::Error>,
    ) -> Result<Fetched<T>, FacadeError> {
        match result {
            Ok(items) => Ok(Fetched::complete(items)),
            Err(source) => {
                error!("failed to fetch {} :: {}", entity, source);
                match policy {
                    FetchPolicy::DegradeToEmpty => Ok(Fetched::degraded_empty()),
                    FetchPolicy::SurfaceError => Err(FacadeError::Query { entity, source }),
                }
            }
        }
    }
}
