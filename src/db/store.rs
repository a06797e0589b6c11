//! SQLite-backed key-value store.

use anyhow::{Context, Result};
use sqlx::SqlitePool;

use crate::persistence::KeyValueStore;

/// Stores keys in the `kv_store` table.
///
/// The trait is synchronous, so each call blocks on the pool from inside the
/// multi-threaded tokio runtime.
#[derive(Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Execute an async database operation from sync context
    fn run_db_operation<F, T>(&self, future: F) -> Result<T>
    where
        F: std::future::Future<Output = Result<T>>,
    {
        tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
    }
}

impl KeyValueStore for SqliteStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.run_db_operation(async {
            let value = sqlx::query_scalar::<_, String>("SELECT value FROM kv_store WHERE key = ?")
                .bind(key)
                .fetch_optional(&self.pool)
                .await
                .with_context(|| format!("Failed to read key {}", key))?;
            Ok(value)
        })
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.run_db_operation(async {
            sqlx::query(
                r#"
                INSERT INTO kv_store (key, value)
                VALUES (?, ?)
                ON CONFLICT(key) DO UPDATE SET value = excluded.value
                "#,
            )
            .bind(key)
            .bind(value)
            .execute(&self.pool)
            .await
            .with_context(|| format!("Failed to write key {}", key))?;
            Ok(())
        })
    }

    fn clear(&mut self) -> Result<()> {
        self.run_db_operation(async {
            sqlx::query("DELETE FROM kv_store")
                .execute(&self.pool)
                .await
                .context("Failed to clear store")?;
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        board::Mark,
        db::create_pool_at,
        game::GameState,
        persistence::{BOARDS_KEY, GameStore, STEP_KEY},
        session::GameSession,
    };

    async fn temp_store() -> (tempfile::TempDir, SqliteStore) {
        let dir = tempfile::tempdir().unwrap();
        let pool = create_pool_at(&dir.path().join("game.db")).await.unwrap();
        (dir, SqliteStore::new(pool))
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_get_set_clear() {
        let (_dir, mut store) = temp_store().await;

        assert_eq!(store.get(STEP_KEY).unwrap(), None);

        store.set(STEP_KEY, "1").unwrap();
        store.set(STEP_KEY, "2").unwrap();
        store.set(BOARDS_KEY, "[]").unwrap();
        assert_eq!(store.get(STEP_KEY).unwrap(), Some("2".to_string()));

        store.clear().unwrap();
        assert_eq!(store.get(STEP_KEY).unwrap(), None);
        assert_eq!(store.get(BOARDS_KEY).unwrap(), None);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_game_round_trip() {
        let (_dir, store) = temp_store().await;
        let mut state = GameState::new();
        for cell in [0, 4, 8] {
            state.apply_move(cell);
        }
        state.jump_to(2);

        let mut game_store = GameStore::new(store.clone());
        game_store.save(&state).unwrap();

        assert_eq!(GameStore::new(store).load(), state);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_session_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("game.db");

        {
            let pool = create_pool_at(&path).await.unwrap();
            let mut session = GameSession::open(SqliteStore::new(pool.clone()));
            for cell in [0, 1, 3, 4, 6] {
                session.apply_move(cell).unwrap();
            }
            pool.close().await;
        }

        let pool = create_pool_at(&path).await.unwrap();
        let session = GameSession::open(SqliteStore::new(pool));
        assert_eq!(session.state().current_step(), 5);
        assert_eq!(session.state().winner(), Some(Mark::X));
    }
}
