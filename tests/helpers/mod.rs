//! Shared fixtures for the integration test suites: in-memory catalog
//! schema, seed data, token minting, and server construction.

#![allow(dead_code)]

use axum_test::TestServer;
use jsonwebtoken::{encode, EncodingKey, Header};
use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};

use marquee_api::api::{create_router, AppState};
use marquee_api::auth::{self, Claims};
use marquee_api::config::Config;
use marquee_api::db::schema::{self, GENRE_COLUMNS, SUBSCRIPTION_COLUMNS};

pub const JWT_KEY: &str = "test-signing-key-long-enough-for-hmac";
pub const ISSUER: &str = "https://identity.test";
pub const AUDIENCE: &str = "marquee-api-tests";

pub fn test_config() -> Config {
    Config {
        catalog_database_url: "sqlite::memory:".to_string(),
        identity_database_url: "sqlite::memory:".to_string(),
        jwt_issuer: ISSUER.to_string(),
        jwt_audience: AUDIENCE.to_string(),
        jwt_key: JWT_KEY.to_string(),
        poster_base_url: "https://posters.test/posters".to_string(),
        api_key: None,
        host: "127.0.0.1".to_string(),
        port: 0,
    }
}

pub async fn memory_pool() -> SqlitePool {
    // One connection, or each checkout would see a different :memory: db.
    SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap()
}

pub async fn create_catalog_schema(pool: &SqlitePool) {
    let mut title_cols = vec![
        "\"show_id\" TEXT PRIMARY KEY".to_string(),
        "\"type\" TEXT".to_string(),
        "\"title\" TEXT".to_string(),
        "\"director\" TEXT".to_string(),
        "\"cast\" TEXT".to_string(),
        "\"country\" TEXT".to_string(),
        "\"release_year\" INTEGER".to_string(),
        "\"rating\" TEXT".to_string(),
        "\"duration\" TEXT".to_string(),
        "\"description\" TEXT".to_string(),
    ];
    title_cols.extend(
        GENRE_COLUMNS
            .iter()
            .map(|c| format!("{} INTEGER", schema::quote_ident(c.label))),
    );
    sqlx::query(&format!(
        "CREATE TABLE movies_titles ({})",
        title_cols.join(", ")
    ))
    .execute(pool)
    .await
    .unwrap();

    let mut user_cols = vec![
        "\"user_id\" INTEGER".to_string(),
        "\"name\" TEXT".to_string(),
        "\"phone\" TEXT".to_string(),
        "\"email\" TEXT".to_string(),
        "\"age\" INTEGER".to_string(),
        "\"gender\" TEXT".to_string(),
        "\"city\" TEXT".to_string(),
        "\"state\" TEXT".to_string(),
        "\"zip\" TEXT".to_string(),
    ];
    user_cols.extend(
        SUBSCRIPTION_COLUMNS
            .iter()
            .map(|c| format!("{} INTEGER", schema::quote_ident(c.label))),
    );
    sqlx::query(&format!(
        "CREATE TABLE movies_users ({})",
        user_cols.join(", ")
    ))
    .execute(pool)
    .await
    .unwrap();

    sqlx::query(
        "CREATE TABLE movies_ratings (
            user_id INTEGER NOT NULL,
            show_id TEXT NOT NULL,
            rating INTEGER,
            PRIMARY KEY (user_id, show_id)
        )",
    )
    .execute(pool)
    .await
    .unwrap();

    // Keyless snapshot tables, as the external batch job leaves them.
    sqlx::query(
        "CREATE TABLE homepage_recommendations (
            user_id INTEGER, genre TEXT, show_id TEXT, title TEXT, score REAL
        )",
    )
    .execute(pool)
    .await
    .unwrap();

    sqlx::query(
        "CREATE TABLE user_movie_recommendations (
            user_id INTEGER, source_show_id TEXT, show_id TEXT, title TEXT, score REAL
        )",
    )
    .execute(pool)
    .await
    .unwrap();
}

pub async fn seed_fixtures(pool: &SqlitePool) {
    let insert_title = format!(
        "INSERT INTO movies_titles (show_id, type, title, release_year, country, {kids}, {action}) \
         VALUES (?, ?, ?, ?, ?, ?, ?)",
        kids = schema::quote_ident("Kids' TV"),
        action = schema::quote_ident("TV Action"),
    );

    sqlx::query(&insert_title)
        .bind("s1")
        .bind("TV Show")
        .bind("Test Movie")
        .bind(2020_i64)
        .bind("United States")
        .bind(1_i64)
        .bind(0_i64)
        .execute(pool)
        .await
        .unwrap();

    sqlx::query(&insert_title)
        .bind("s2")
        .bind("TV Show")
        .bind("Action Hour")
        .bind(2018_i64)
        .bind("Canada")
        .bind(0_i64)
        .bind(1_i64)
        .execute(pool)
        .await
        .unwrap();

    for (genre, show_id, title, score) in [
        ("Comedies", "s2", "Action Hour", 0.91_f64),
        ("Comedies", "s1", "Test Movie", 0.75),
        ("Dramas", "s1", "Test Movie", 0.88),
    ] {
        sqlx::query(
            "INSERT INTO homepage_recommendations (user_id, genre, show_id, title, score) \
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(11_i64)
        .bind(genre)
        .bind(show_id)
        .bind(title)
        .bind(score)
        .execute(pool)
        .await
        .unwrap();
    }

    for (show_id, title, score) in [("s2", "Action Hour", 0.66_f64), ("s3", "Third One", 0.94)] {
        sqlx::query(
            "INSERT INTO user_movie_recommendations \
             (user_id, source_show_id, show_id, title, score) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(11_i64)
        .bind("s1")
        .bind(show_id)
        .bind(title)
        .bind(score)
        .execute(pool)
        .await
        .unwrap();
    }

    let insert_user = format!(
        "INSERT INTO movies_users (user_id, name, email, {netflix}, {prime}) VALUES (?, ?, ?, ?, ?)",
        netflix = schema::quote_ident("Netflix"),
        prime = schema::quote_ident("Amazon Prime"),
    );
    sqlx::query(&insert_user)
        .bind(11_i64)
        .bind("Test Viewer")
        .bind("viewer@example.com")
        .bind(1_i64)
        .bind(0_i64)
        .execute(pool)
        .await
        .unwrap();
}

pub fn mint_token(user_id: i64, role: &str) -> String {
    mint_token_with(
        user_id,
        role,
        ISSUER,
        AUDIENCE,
        chrono::Utc::now().timestamp() + 3600,
    )
}

pub fn mint_token_with(user_id: i64, role: &str, iss: &str, aud: &str, exp: i64) -> String {
    let claims = Claims {
        sub: user_id,
        role: role.to_string(),
        iss: iss.to_string(),
        aud: aud.to_string(),
        exp,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(JWT_KEY.as_bytes()),
    )
    .unwrap()
}

async fn build_state() -> (AppState, SqlitePool) {
    let catalog = memory_pool().await;
    create_catalog_schema(&catalog).await;
    seed_fixtures(&catalog).await;
    schema::verify_schema(&catalog).await.unwrap();

    let identity = memory_pool().await;
    auth::bootstrap_roles(&identity).await.unwrap();

    let state = AppState::new(catalog.clone(), identity, test_config());
    (state, catalog)
}

/// In-process server for request/response assertions.
pub async fn create_test_server() -> (TestServer, SqlitePool) {
    let (state, catalog) = build_state().await;
    let server = TestServer::new(create_router(state)).unwrap();
    (server, catalog)
}

/// Real listener on an ephemeral port, for exercising the reqwest-based
/// client against the actual router. Returns the base URL.
pub async fn spawn_http_server() -> (String, SqlitePool) {
    let (state, catalog) = build_state().await;
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{}", addr), catalog)
}
