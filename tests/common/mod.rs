#![allow(dead_code)]

use axum_test::TestServer;
use sqlx::SqlitePool;
use std::path::PathBuf;
use std::sync::Arc;
use url_shortener::application::services::MappingService;
use url_shortener::config::{DEFAULT_ALLOCATION_ATTEMPTS, PoolSettings};
use url_shortener::infrastructure::database;
use url_shortener::infrastructure::persistence::SqliteUrlRepository;
use url_shortener::routes::api_router;
use url_shortener::state::AppState;
use url_shortener::utils::code_generator::generate_code;

/// Fresh in-memory database with the schema applied.
pub async fn create_test_pool() -> SqlitePool {
    let pool = database::connect("sqlite::memory:", &PoolSettings::default())
        .await
        .unwrap();
    database::migrate(&pool).await.unwrap();
    pool
}

/// Fresh WAL file database in the temp dir, opened with the production pool
/// settings. Pass the path to [`remove_test_database`] when done.
pub async fn create_file_test_pool() -> (SqlitePool, PathBuf) {
    let path = std::env::temp_dir().join(format!("url-shortener-test-{}.db", generate_code()));
    let url = format!("sqlite://{}", path.display());

    let pool = database::connect(&url, &PoolSettings::default())
        .await
        .unwrap();
    database::migrate(&pool).await.unwrap();

    (pool, path)
}

pub async fn remove_test_database(pool: SqlitePool, path: PathBuf) {
    pool.close().await;

    for suffix in ["", "-wal", "-shm"] {
        let mut file = path.clone().into_os_string();
        file.push(suffix);
        let _ = std::fs::remove_file(file);
    }
}

pub fn create_test_state(pool: SqlitePool) -> AppState {
    AppState::new(Arc::new(pool), DEFAULT_ALLOCATION_ATTEMPTS)
}

pub fn create_test_service(pool: SqlitePool) -> MappingService<SqliteUrlRepository> {
    MappingService::new(Arc::new(SqliteUrlRepository::new(Arc::new(pool))))
}

/// Full router (all routes, fallback and tracing) over `pool`.
pub fn create_test_server(pool: SqlitePool) -> TestServer {
    TestServer::new(api_router(create_test_state(pool))).unwrap()
}

pub async fn insert_test_mapping(pool: &SqlitePool, code: &str, url: &str) {
    sqlx::query("INSERT INTO url_mappings (short_code, long_url) VALUES (?1, ?2)")
        .bind(code)
        .bind(url)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn insert_test_mapping_with_hits(pool: &SqlitePool, code: &str, url: &str, hits: i64) {
    sqlx::query("INSERT INTO url_mappings (short_code, long_url, hit_count) VALUES (?1, ?2, ?3)")
        .bind(code)
        .bind(url)
        .bind(hits)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn hit_count(pool: &SqlitePool, code: &str) -> i64 {
    sqlx::query_scalar("SELECT hit_count FROM url_mappings WHERE short_code = ?1")
        .bind(code)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn row_count(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM url_mappings")
        .fetch_one(pool)
        .await
        .unwrap()
}

/// Checks `/urls/` followed by exactly six ASCII alphanumerics.
pub fn is_short_location(location: &str) -> bool {
    location
        .strip_prefix("/urls/")
        .is_some_and(|code| code.len() == 6 && code.chars().all(|c| c.is_ascii_alphanumeric()))
}
