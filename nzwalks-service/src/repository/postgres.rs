//! PostgreSQL store
//!
//! Every model is persisted the same way: an `id UUID` primary key followed by
//! the model's columns. [`PgModel`] describes those columns and how to bind and
//! decode them; [`PgStore`] then implements [`Repository`] once for all models.
//!
//! Update and delete are single `... RETURNING` statements, so each of them is
//! atomic without an explicit transaction.

use std::sync::Arc;

use sqlx::postgres::{PgArguments, PgRow};
use sqlx::query::Query;
use sqlx::{PgPool, Postgres, Row};
use uuid::Uuid;

use super::error::{RepositoryError, RepositoryOperation};
use super::traits::{Repository, RepositoryResult, Store};
use crate::ids::{IdGenerator, UuidV7Generator};
use crate::models::{Identified, Region, Walk, WalkDifficulty};

/// Query with positional Postgres arguments
pub type PgQuery<'q> = Query<'q, Postgres, PgArguments>;

/// Mapping between a model and its table
pub trait PgModel: Sized + Send + Sync + 'static {
    /// Entity name used in error context
    const ENTITY_TYPE: &'static str;
    /// Table name
    const TABLE: &'static str;
    /// Mutable columns, in binding order, excluding `id`
    const COLUMNS: &'static [&'static str];

    /// Bind the model's columns in `COLUMNS` order
    fn bind(self, query: PgQuery<'_>) -> PgQuery<'_>;

    /// Decode the model's columns from a row
    fn decode(row: &PgRow) -> Result<Self, sqlx::Error>;
}

impl PgModel for Region {
    const ENTITY_TYPE: &'static str = "Region";
    const TABLE: &'static str = "regions";
    const COLUMNS: &'static [&'static str] = &["code", "name", "area", "lat", "long", "population"];

    fn bind(self, query: PgQuery<'_>) -> PgQuery<'_> {
        query
            .bind(self.code)
            .bind(self.name)
            .bind(self.area)
            .bind(self.lat)
            .bind(self.long)
            .bind(self.population)
    }

    fn decode(row: &PgRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            code: row.try_get("code")?,
            name: row.try_get("name")?,
            area: row.try_get("area")?,
            lat: row.try_get("lat")?,
            long: row.try_get("long")?,
            population: row.try_get("population")?,
        })
    }
}

impl PgModel for WalkDifficulty {
    const ENTITY_TYPE: &'static str = "WalkDifficulty";
    const TABLE: &'static str = "walk_difficulties";
    const COLUMNS: &'static [&'static str] = &["code"];

    fn bind(self, query: PgQuery<'_>) -> PgQuery<'_> {
        query.bind(self.code)
    }

    fn decode(row: &PgRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            code: row.try_get("code")?,
        })
    }
}

impl PgModel for Walk {
    const ENTITY_TYPE: &'static str = "Walk";
    const TABLE: &'static str = "walks";
    const COLUMNS: &'static [&'static str] = &["name", "length", "region_id", "walk_difficulty_id"];

    fn bind(self, query: PgQuery<'_>) -> PgQuery<'_> {
        query
            .bind(self.name)
            .bind(self.length)
            .bind(self.region_id)
            .bind(self.walk_difficulty_id)
    }

    fn decode(row: &PgRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            name: row.try_get("name")?,
            length: row.try_get("length")?,
            region_id: row.try_get("region_id")?,
            walk_difficulty_id: row.try_get("walk_difficulty_id")?,
        })
    }
}

fn returning<M: PgModel>() -> String {
    format!("id, {}", M::COLUMNS.join(", "))
}

/// Rows come back in id order; UUIDv7 ids make that creation order.
fn select_all_sql<M: PgModel>() -> String {
    format!("SELECT {} FROM {} ORDER BY id", returning::<M>(), M::TABLE)
}

fn select_by_id_sql<M: PgModel>() -> String {
    format!("SELECT {} FROM {} WHERE id = $1", returning::<M>(), M::TABLE)
}

fn exists_sql<M: PgModel>() -> String {
    format!("SELECT EXISTS(SELECT 1 FROM {} WHERE id = $1)", M::TABLE)
}

fn insert_sql<M: PgModel>() -> String {
    let placeholders: Vec<String> = (1..=M::COLUMNS.len() + 1).map(|n| format!("${n}")).collect();
    format!(
        "INSERT INTO {} (id, {}) VALUES ({}) RETURNING {}",
        M::TABLE,
        M::COLUMNS.join(", "),
        placeholders.join(", "),
        returning::<M>()
    )
}

fn update_sql<M: PgModel>() -> String {
    let assignments: Vec<String> = M::COLUMNS
        .iter()
        .enumerate()
        .map(|(i, column)| format!("{column} = ${}", i + 2))
        .collect();
    format!(
        "UPDATE {} SET {} WHERE id = $1 RETURNING {}",
        M::TABLE,
        assignments.join(", "),
        returning::<M>()
    )
}

fn delete_sql<M: PgModel>() -> String {
    format!("DELETE FROM {} WHERE id = $1 RETURNING {}", M::TABLE, returning::<M>())
}

fn decode_identified<M: PgModel>(row: &PgRow) -> Result<Identified<M>, sqlx::Error> {
    Ok(Identified::new(row.try_get("id")?, M::decode(row)?))
}

/// PostgreSQL implementation of every repository
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
    ids: Arc<dyn IdGenerator>,
}

impl PgStore {
    /// Store over an existing pool, assigning UUIDv7 identifiers
    pub fn new(pool: PgPool) -> Self {
        Self::with_id_generator(pool, Arc::new(UuidV7Generator))
    }

    /// Store over an existing pool using a custom identifier generator
    pub fn with_id_generator(pool: PgPool, ids: Arc<dyn IdGenerator>) -> Self {
        Self { pool, ids }
    }

    /// The underlying connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

fn fault<M: PgModel>(operation: RepositoryOperation, err: sqlx::Error) -> RepositoryError {
    RepositoryError::from_sqlx(operation, err).with_entity_type(M::ENTITY_TYPE)
}

impl<M: PgModel> Repository<M> for PgStore {
    async fn find_all(&self) -> RepositoryResult<Vec<Identified<M>>> {
        let op = RepositoryOperation::FindAll;
        let rows = sqlx::query(&select_all_sql::<M>())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| fault::<M>(op, e))?;
        rows.iter()
            .map(|row| decode_identified(row).map_err(|e| fault::<M>(op, e)))
            .collect()
    }

    async fn find_by_id(&self, id: Uuid) -> RepositoryResult<Option<Identified<M>>> {
        let op = RepositoryOperation::FindById;
        let row = sqlx::query(&select_by_id_sql::<M>())
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| fault::<M>(op, e).with_entity_id(id))?;
        row.as_ref()
            .map(decode_identified)
            .transpose()
            .map_err(|e| fault::<M>(op, e).with_entity_id(id))
    }

    async fn exists(&self, id: Uuid) -> RepositoryResult<bool> {
        sqlx::query_scalar::<_, bool>(&exists_sql::<M>())
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| fault::<M>(RepositoryOperation::Exists, e).with_entity_id(id))
    }

    async fn create(&self, model: M) -> RepositoryResult<Identified<M>> {
        let op = RepositoryOperation::Create;
        let id = self.ids.next_id();
        let sql = insert_sql::<M>();
        let row = model
            .bind(sqlx::query(&sql).bind(id))
            .fetch_one(&self.pool)
            .await
            .map_err(|e| fault::<M>(op, e).with_entity_id(id))?;
        let created = decode_identified(&row).map_err(|e| fault::<M>(op, e).with_entity_id(id))?;
        Ok(created)
    }

    async fn update(&self, id: Uuid, model: M) -> RepositoryResult<Option<Identified<M>>> {
        let op = RepositoryOperation::Update;
        let sql = update_sql::<M>();
        let row = model
            .bind(sqlx::query(&sql).bind(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| fault::<M>(op, e).with_entity_id(id))?;
        row.as_ref()
            .map(decode_identified)
            .transpose()
            .map_err(|e| fault::<M>(op, e).with_entity_id(id))
    }

    async fn delete(&self, id: Uuid) -> RepositoryResult<Option<Identified<M>>> {
        let op = RepositoryOperation::Delete;
        let row = sqlx::query(&delete_sql::<M>())
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| fault::<M>(op, e).with_entity_id(id))?;
        row.as_ref()
            .map(decode_identified)
            .transpose()
            .map_err(|e| fault::<M>(op, e).with_entity_id(id))
    }
}

impl Store for PgStore {
    fn backend(&self) -> &'static str {
        "postgres"
    }

    async fn ping(&self) -> RepositoryResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map(|_| ())
            .map_err(|e| RepositoryError::from_sqlx(RepositoryOperation::Ping, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_sql() {
        assert_eq!(
            select_all_sql::<WalkDifficulty>(),
            "SELECT id, code FROM walk_difficulties ORDER BY id"
        );
        assert_eq!(
            select_by_id_sql::<Region>(),
            "SELECT id, code, name, area, lat, long, population FROM regions WHERE id = $1"
        );
        assert_eq!(
            exists_sql::<Walk>(),
            "SELECT EXISTS(SELECT 1 FROM walks WHERE id = $1)"
        );
    }

    #[test]
    fn test_insert_sql_binds_id_first() {
        assert_eq!(
            insert_sql::<Walk>(),
            "INSERT INTO walks (id, name, length, region_id, walk_difficulty_id) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING id, name, length, region_id, walk_difficulty_id"
        );
    }

    #[test]
    fn test_update_sql_is_single_statement() {
        assert_eq!(
            update_sql::<Region>(),
            "UPDATE regions SET code = $2, name = $3, area = $4, lat = $5, long = $6, \
             population = $7 WHERE id = $1 \
             RETURNING id, code, name, area, lat, long, population"
        );
    }

    #[test]
    fn test_delete_sql_returns_removed_row() {
        assert_eq!(
            delete_sql::<WalkDifficulty>(),
            "DELETE FROM walk_difficulties WHERE id = $1 RETURNING id, code"
        );
    }

    #[test]
    fn test_fault_carries_entity_type() {
        let error = fault::<Walk>(RepositoryOperation::Update, sqlx::Error::PoolTimedOut)
            .with_entity_id("abc");
        assert_eq!(error.entity_type.as_deref(), Some("Walk"));
        assert_eq!(error.entity_id.as_deref(), Some("abc"));
        assert!(error.is_retriable());
    }
}
