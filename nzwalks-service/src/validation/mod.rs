//! Request validation
//!
//! Validation accumulates: every applicable rule runs, and each violated rule
//! appends one message under its field. The only early exit is an absent
//! request body, recorded under the synthetic `request` field.
//!
//! Field rules are pure and live on each request type ([`Validate`]). Rules
//! that need storage (a walk's region and difficulty must exist) are declared
//! as [`Reference`]s and resolved through a [`ReferenceLookup`] before the
//! result is returned.
//!
//! # Example
//!
//! ```rust
//! use nzwalks_service::dto::AddWalkDifficultyRequest;
//! use nzwalks_service::repository::MemoryStore;
//! use nzwalks_service::validation::validate;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let store = MemoryStore::new();
//! let request = AddWalkDifficultyRequest { code: "  ".into() };
//!
//! let errors = validate(Some(&request), &store).await.unwrap().unwrap_err();
//! assert_eq!(errors.get("Code"), Some(&["Code cannot be Null or Empty.".to_string()][..]));
//! # }
//! ```

mod rules;

use std::collections::BTreeMap;
use std::future::Future;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{Region, WalkDifficulty};
use crate::repository::{Repository, RepositoryResult};

/// Field under which an absent request body is reported
pub const REQUEST_FIELD: &str = "request";

/// Field name to ordered list of messages
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    /// Empty accumulator
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message to `field`
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    /// Whether nothing has been recorded
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Total number of messages across all fields
    pub fn len(&self) -> usize {
        self.0.values().map(Vec::len).sum()
    }

    /// Messages recorded for `field`
    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    /// Fields with at least one message
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// `Ok(())` when empty, otherwise the accumulated errors
    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

/// Entity a reference must resolve to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReferenceTarget {
    /// A stored region
    Region,
    /// A stored walk difficulty
    WalkDifficulty,
}

/// A field that must name an existing entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference {
    /// Field the error is reported under
    pub field: &'static str,
    /// Entity the id must resolve to
    pub target: ReferenceTarget,
    /// Referenced identifier
    pub id: Uuid,
}

impl Reference {
    /// Declare that `field` holds the id of a `target`
    pub fn new(field: &'static str, target: ReferenceTarget, id: Uuid) -> Self {
        Self { field, target, id }
    }

    /// Message recorded when the reference does not resolve
    pub fn invalid_message(&self) -> String {
        format!("{} is Invalid", self.field)
    }
}

/// Rules for one request type
pub trait Validate {
    /// Used in the absent-input message, e.g. `Add Region`
    const SUBJECT: &'static str;

    /// Record every violated field rule
    fn check_fields(&self, errors: &mut FieldErrors);

    /// References that must resolve to stored entities
    fn references(&self) -> Vec<Reference> {
        Vec::new()
    }
}

/// Existence checks used by cross-entity rules
pub trait ReferenceLookup: Send + Sync {
    /// Whether an entity of kind `target` with this id is stored
    fn reference_exists(
        &self,
        target: ReferenceTarget,
        id: Uuid,
    ) -> impl Future<Output = RepositoryResult<bool>> + Send;
}

impl<S> ReferenceLookup for S
where
    S: Repository<Region> + Repository<WalkDifficulty>,
{
    async fn reference_exists(&self, target: ReferenceTarget, id: Uuid) -> RepositoryResult<bool> {
        match target {
            ReferenceTarget::Region => <S as Repository<Region>>::exists(self, id).await,
            ReferenceTarget::WalkDifficulty => {
                <S as Repository<WalkDifficulty>>::exists(self, id).await
            }
        }
    }
}

/// Validate `input`, resolving its references through `lookup`
///
/// The outer `Result` is a storage fault raised by a lookup; the inner one is
/// the validation outcome.
pub async fn validate<V, L>(
    input: Option<&V>,
    lookup: &L,
) -> RepositoryResult<Result<(), FieldErrors>>
where
    V: Validate + Sync,
    L: ReferenceLookup,
{
    let mut errors = FieldErrors::new();

    let Some(input) = input else {
        errors.add(REQUEST_FIELD, format!("{} Data Required.", V::SUBJECT));
        return Ok(Err(errors));
    };

    input.check_fields(&mut errors);

    for reference in input.references() {
        if !lookup.reference_exists(reference.target, reference.id).await? {
            errors.add(reference.field, reference.invalid_message());
        }
    }

    Ok(errors.into_result())
}
