use crate::types::note::{NewNote, Note};
use sqlx::postgres::{PgPoolOptions, PgRow};
use sqlx::{PgPool, Row};
use uuid::Uuid;

#[derive(Clone)]
pub struct Store {
    pub connection: PgPool,
}

impl Store {
    pub async fn new(db_url: &str) -> Self {
        let db_pool = match PgPoolOptions::new()
            .max_connections(5)
            .connect(db_url)
            .await
        {
            Ok(pool) => pool,
            Err(e) => panic!("Could not connect to the database: {e}"),
        };
        Store {
            connection: db_pool,
        }
    }

    pub async fn list_notes(
        &self,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Note>, handle_errors::Error> {
        match sqlx::query(
            "SELECT id, title, content FROM notes
            ORDER BY created_on
            LIMIT $1 OFFSET $2",
        )
        .bind(limit)
        .bind(offset)
        .map(|row: PgRow| Note {
            id: row.get("id"),
            title: row.get("title"),
            content: row.get("content"),
        })
        .fetch_all(&self.connection)
        .await
        {
            Ok(notes) => Ok(notes),
            Err(e) => Err(handle_errors::Error::DatabaseQueryError(e)),
        }
    }

    pub async fn count_notes(&self) -> Result<i64, handle_errors::Error> {
        match sqlx::query("SELECT COUNT(*) AS total FROM notes")
            .map(|row: PgRow| {
                let total: i64 = row.get("total");
                total
            })
            .fetch_one(&self.connection)
            .await
        {
            Ok(total) => Ok(total),
            Err(e) => Err(handle_errors::Error::DatabaseQueryError(e)),
        }
    }

    /// Inserts the whole batch, then reads the rows back by their generated
    /// ids so the response carries what the database actually stored.
    pub async fn add_notes(
        &self,
        new_notes: Vec<NewNote>,
    ) -> Result<Vec<Note>, handle_errors::Error> {
        let mut ids = Vec::with_capacity(new_notes.len());
        for new_note in new_notes {
            let id = Uuid::new_v4().to_string();
            if let Err(e) = sqlx::query(
                "INSERT INTO notes (id, title, content)
                VALUES ($1, $2, $3)",
            )
            .bind(&id)
            .bind(new_note.title)
            .bind(new_note.content)
            .execute(&self.connection)
            .await
            {
                return Err(handle_errors::Error::DatabaseQueryError(e));
            }
            ids.push(id);
        }

        match sqlx::query(
            "SELECT id, title, content FROM notes
            WHERE id = ANY($1)
            ORDER BY created_on",
        )
        .bind(&ids)
        .map(|row: PgRow| Note {
            id: row.get("id"),
            title: row.get("title"),
            content: row.get("content"),
        })
        .fetch_all(&self.connection)
        .await
        {
            Ok(notes) => Ok(notes),
            Err(e) => Err(handle_errors::Error::DatabaseQueryError(e)),
        }
    }

    pub async fn get_note(&self, id: String) -> Result<Note, handle_errors::Error> {
        match sqlx::query(
            "SELECT id, title, content FROM notes
            WHERE id = $1",
        )
        .bind(id)
        .map(|row: PgRow| Note {
            id: row.get("id"),
            title: row.get("title"),
            content: row.get("content"),
        })
        .fetch_one(&self.connection)
        .await
        {
            Ok(note) => Ok(note),
            Err(sqlx::Error::RowNotFound) => Err(handle_errors::Error::NoteNotFound),
            Err(e) => Err(handle_errors::Error::DatabaseQueryError(e)),
        }
    }
}
