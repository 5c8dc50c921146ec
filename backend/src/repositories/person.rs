//! PostgreSQL person repository.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::error::AppError;
use crate::models::person::Person;
use crate::repositories::person_repository::PersonRepository;
use crate::types::PersonId;

const TABLE_NAME: &str = "people";
const SELECT_COLUMNS: &str = "id, name";

#[derive(Debug, Clone)]
pub struct PgPersonRepository {
    pool: PgPool,
}

impl PgPersonRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn base_select_query() -> String {
        format!("SELECT {} FROM {}", SELECT_COLUMNS, TABLE_NAME)
    }

    fn sync_id_sequence_query() -> String {
        format!(
            "SELECT setval(pg_get_serial_sequence('{table}', 'id'), \
             GREATEST((SELECT MAX(id) FROM {table}), 1))",
            table = TABLE_NAME
        )
    }
}

#[async_trait]
impl PersonRepository for PgPersonRepository {
    async fn find_all(&self) -> Result<Vec<Person>, AppError> {
        let query = format!("{} ORDER BY id ASC", Self::base_select_query());
        let rows = sqlx::query_as::<_, Person>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn find_by_id(&self, id: PersonId) -> Result<Option<Person>, AppError> {
        let query = format!("{} WHERE id = $1", Self::base_select_query());
        let row = sqlx::query_as::<_, Person>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn find_first_by_name(&self, name: &str) -> Result<Option<Person>, AppError> {
        let query = format!(
            "{} WHERE name = $1 ORDER BY id ASC LIMIT 1",
            Self::base_select_query()
        );
        let row = sqlx::query_as::<_, Person>(&query)
            .bind(name)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn save(&self, person: Person) -> Result<Person, AppError> {
        let row = match person.id {
            None => {
                let query = format!(
                    "INSERT INTO {} (name) VALUES ($1) RETURNING {}",
                    TABLE_NAME, SELECT_COLUMNS
                );
                sqlx::query_as::<_, Person>(&query)
                    .bind(&person.name)
                    .fetch_one(&self.pool)
                    .await?
            }
            Some(id) => {
                let query = format!(
                    "INSERT INTO {} (id, name) VALUES ($1, $2) \
                     ON CONFLICT (id) DO UPDATE SET name = EXCLUDED.name \
                     RETURNING {}",
                    TABLE_NAME, SELECT_COLUMNS
                );
                let mut tx = self.pool.begin().await?;
                let row = sqlx::query_as::<_, Person>(&query)
                    .bind(id)
                    .bind(&person.name)
                    .fetch_one(&mut *tx)
                    .await?;
                // Explicit ids bypass the serial sequence; move it past them.
                sqlx::query(&Self::sync_id_sequence_query())
                    .execute(&mut *tx)
                    .await?;
                tx.commit().await?;
                row
            }
        };
        Ok(row)
    }

    async fn delete(&self, person: &Person) -> Result<(), AppError> {
        let Some(id) = person.id else {
            return Ok(());
        };
        let query = format!("DELETE FROM {} WHERE id = $1", TABLE_NAME);
        sqlx::query(&query).bind(id).execute(&self.pool).await?;
        Ok(())
    }
}
