//! # Facade Module
//!
//! This module implements the **Facade** pattern, serving as an intermediate logic layer
//! between the application's public interface and the underlying persistence engine.
//!
//! The facade owns exactly one concern: fetching whole collections while keeping
//! failure behavior an explicit, per-accessor policy.
//!
//! * **Engine Abstraction:** Accessors talk to an injected [`Catalog`](crate::repo::Catalog)
//!   handle and never learn whether rows come from Postgres or a substitute engine.
//! * **Failure Policy:** Every accessor is an instantiation of one fetch template with a
//!   named [`FetchPolicy`], either degrading to an empty collection or surfacing the
//!   fault, instead of the policy being an accident of which call site caught the error.
//! * **Encapsulation:** Callers receive [`Fetched`] collections of domain types rather
//!   than raw database models.

mod facade_error;
pub use facade_error::*;

mod facade_catalog;
pub use facade_catalog::*;
