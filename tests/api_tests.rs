use blog_api::{
    AppConfig, AppState, create_router,
    models::{Post, PostDetail, UserRole, UserStatus},
    repository::{PostgresRepository, RepositoryState},
};
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use tokio::net::TcpListener;
use uuid::Uuid;

#[derive(Debug)]
pub struct TestApp {
    pub address: String,
    pub pool: sqlx::PgPool,
}

async fn spawn_app() -> TestApp {
    dotenv::dotenv().ok();

    let db_url =
        std::env::var("DATABASE_URL").expect("DATABASE_URL must be set to run API tests");

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&db_url)
        .await
        .expect("Failed to connect to Postgres in tests");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations in tests");

    let repo = Arc::new(PostgresRepository::new(pool.clone())) as RepositoryState;
    // Default config runs in Env::Local, which enables the x-user-id bypass
    // used to act as seeded principals below.
    let config = AppConfig::default();

    let state = AppState { repo, config };
    let router = create_router(state);

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind port");
    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    TestApp { address, pool }
}

async fn seed_user(pool: &sqlx::PgPool, role: UserRole) -> Uuid {
    let id = Uuid::new_v4();
    sqlx::query("INSERT INTO users (id, email, role, status) VALUES ($1, $2, $3, $4)")
        .bind(id)
        .bind(format!("{id}@test.com"))
        .bind(role)
        .bind(UserStatus::Active)
        .execute(pool)
        .await
        .expect("Failed to seed user");
    id
}

#[tokio::test]
async fn test_health_check() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();
    let response = client
        .get(format!("{}/health", app.address))
        .send()
        .await
        .expect("req fail");
    assert!(response.status().is_success());
}

#[tokio::test]
async fn test_create_post_requires_principal() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();

    // No bearer token, no bypass header: rejected ahead of any store access.
    let response = client
        .post(format!("{}/posts", app.address))
        .json(&serde_json::json!({ "title": "Anon", "content": "nope" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 401);
}

#[tokio::test]
async fn test_post_lifecycle() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();
    let user_id = seed_user(&app.pool, UserRole::User).await;

    // Create.
    let response = client
        .post(format!("{}/posts", app.address))
        .header("x-user-id", user_id.to_string())
        .json(&serde_json::json!({
            "title": "Bot", "content": "AI ramblings", "tags": ["ai"], "status": "PUBLISHED"
        }))
        .send()
        .await
        .expect("post fail");
    assert_eq!(response.status(), 201);
    let post: Post = response.json().await.unwrap();
    assert_eq!(post.author_id, user_id);

    // Viewing increments.
    let detail: PostDetail = client
        .get(format!("{}/posts/{}", app.address, post.id))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(detail.post.views, 1);

    // Listed under the author filter with the pagination envelope.
    let list: serde_json::Value = client
        .get(format!(
            "{}/posts?authorId={}&tags=ai",
            app.address, user_id
        ))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(list["pagination"]["totalData"], 1);
    assert_eq!(list["data"][0]["id"], serde_json::json!(post.id));
}

#[tokio::test]
async fn test_admin_stats_requires_admin_role() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();
    let user_id = seed_user(&app.pool, UserRole::User).await;
    let admin_id = seed_user(&app.pool, UserRole::Admin).await;

    let denied = client
        .get(format!("{}/admin/stats", app.address))
        .header("x-user-id", user_id.to_string())
        .send()
        .await
        .unwrap();
    assert_eq!(denied.status(), 403);

    let allowed = client
        .get(format!("{}/admin/stats", app.address))
        .header("x-user-id", admin_id.to_string())
        .send()
        .await
        .unwrap();
    assert_eq!(allowed.status(), 200);
    let stats: serde_json::Value = allowed.json().await.unwrap();
    assert!(stats["totalUsers"].as_i64().unwrap() >= 2);
}
