//! In-memory catalog engine.
//!
//! The substitute engine for tests and for running the daemon without a
//! database. Rows are stored pre-joined (a semester carries its field name),
//! so reads mirror the shapes the Postgres engine produces.

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{Catalog, Error};
use crate::types;

#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    fields: RwLock<Vec<types::Field>>,
    semesters: RwLock<Vec<types::Semester>>,
    users: RwLock<Vec<types::User>>,
    unavailable: AtomicBool,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn push_field(&self, field: types::Field) {
        self.fields.write().await.push(field);
    }

    pub async fn push_semester(&self, semester: types::Semester) {
        self.semesters.write().await.push(semester);
    }

    pub async fn push_user(&self, user: types::User) {
        self.users.write().await.push(user);
    }

    /// Switches the engine into a failing state: every query returns
    /// [`Error::Unavailable`] until reset.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    fn guard(&self) -> Result<(), Error> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(Error::Unavailable("injected engine fault".to_owned()));
        }
        Ok(())
    }
}

#[async_trait]
impl Catalog for InMemoryCatalog {
    async fn field_all(&self) -> Result<Vec<types::Field>, Error> {
        self.guard()?;
        Ok(self.fields.read().await.clone())
    }

    async fn semester_all(&self) -> Result<Vec<types::Semester>, Error> {
        self.guard()?;
        let mut semesters = self.semesters.read().await.clone();
        semesters.sort_by_key(|semester| semester.number);
        Ok(semesters)
    }

    async fn user_all(&self) -> Result<Vec<types::User>, Error> {
        self.guard()?;
        Ok(self.users.read().await.clone())
    }
}
