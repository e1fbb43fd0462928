use sqlx::PgPool;
use uuid::Uuid;

use crate::database::status::model::{Status, StatusRepository};
use crate::server::error::{AppResult, Error};

/// sql variant of the status repository. media ids are not persisted here,
/// the table only carries what the original schema had.
pub struct PostgresStatusRepo {
    pool: PgPool,
}

impl PostgresStatusRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct StatusRow {
    id: Uuid,
    content: String,
    user_id: Uuid,
}

impl From<StatusRow> for Status {
    fn from(row: StatusRow) -> Self {
        Status {
            id: row.id,
            content: row.content,
            user_id: row.user_id,
            media_ids: Vec::new(),
        }
    }
}

#[async_trait::async_trait]
impl StatusRepository for PostgresStatusRepo {
    async fn list(&self) -> AppResult<Vec<Status>> {
        let rows = sqlx::query_as::<_, StatusRow>("SELECT id, content, user_id FROM statuses")
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(Status::from).collect())
    }

    async fn get(&self, status_id: Uuid) -> AppResult<Status> {
        let row = sqlx::query_as::<_, StatusRow>(
            "SELECT id, content, user_id FROM statuses WHERE id = $1",
        )
        .bind(status_id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(Status::from).ok_or(Error::NotFound(status_id))
    }

    async fn create(&self, status: Status) -> AppResult<Status> {
        sqlx::query("INSERT INTO statuses (id, content, user_id) VALUES ($1, $2, $3)")
            .bind(status.id)
            .bind(&status.content)
            .bind(status.user_id)
            .execute(&self.pool)
            .await?;

        Ok(status)
    }

    async fn delete(&self, status_id: Uuid) -> AppResult<Status> {
        let status = self.get(status_id).await?;

        sqlx::query("DELETE FROM statuses WHERE id = $1")
            .bind(status_id)
            .execute(&self.pool)
            .await?;

        Ok(status)
    }
}
