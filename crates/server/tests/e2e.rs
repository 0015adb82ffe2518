use std::net::SocketAddr;

use reqwest::StatusCode as HttpStatusCode;
use sea_orm::{ConnectionTrait, DatabaseConnection, Statement};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

use migration::MigratorTrait;
use server::{routes, state::ServerState};

struct TestApp {
    base_url: String,
    db: DatabaseConnection,
}

async fn start_server() -> anyhow::Result<Option<TestApp>> {
    if std::env::var("SKIP_DB_TESTS").is_ok() || std::env::var("DATABASE_URL").is_err() {
        eprintln!("DATABASE_URL missing or SKIP_DB_TESTS set; skip e2e tests.");
        return Ok(None);
    }
    let db = models::db::connect().await?;
    migration::Migrator::up(&db, None).await?;

    let app = routes::build_router(ServerState::with_db(db.clone()), CorsLayer::very_permissive());
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await { eprintln!("server error: {}", e); }
    });

    Ok(Some(TestApp { base_url, db }))
}

async fn department_id(db: &DatabaseConnection, name: &str) -> anyhow::Result<i64> {
    let row = db
        .query_one(Statement::from_sql_and_values(
            db.get_database_backend(),
            "SELECT id FROM department WHERE name = $1",
            [name.into()],
        ))
        .await?
        .ok_or_else(|| anyhow::anyhow!("seed department {name} missing"))?;
    Ok(row.try_get("", "id")?)
}

#[tokio::test]
async fn e2e_health() -> anyhow::Result<()> {
    let Some(app) = start_server().await? else { return Ok(()) };
    let res = reqwest::get(format!("{}/health", app.base_url)).await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body: Value = res.json().await?;
    assert_eq!(body, json!({"status":"ok"}));
    Ok(())
}

#[tokio::test]
async fn e2e_student_lifecycle() -> anyhow::Result<()> {
    let Some(app) = start_server().await? else { return Ok(()) };
    let client = reqwest::Client::new();
    let irc = department_id(&app.db, "IRC").await?;

    let res = client
        .post(format!("{}/students", app.base_url))
        .json(&json!({"firstname":"Ann","lastname":"Lee","departmentId":irc}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);
    let location = res
        .headers()
        .get(reqwest::header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
        .ok_or_else(|| anyhow::anyhow!("missing Location"))?;

    let res = client.get(format!("{}{}", app.base_url, location)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let student: Value = res.json().await?;
    assert_eq!(student["firstname"], "Ann");
    assert_eq!(student["department"]["name"], "IRC");

    let res = client
        .put(format!("{}{}", app.base_url, location))
        .json(&json!({"firstname":"Anna","lastname":"Lee","departmentId":irc}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let updated: Value = res.json().await?;
    assert_eq!(updated["id"], student["id"]);
    assert_eq!(updated["firstname"], "Anna");

    let res = client.delete(format!("{}{}", app.base_url, location)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let res = client.get(format!("{}{}", app.base_url, location)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn e2e_unknown_department_rejected() -> anyhow::Result<()> {
    let Some(app) = start_server().await? else { return Ok(()) };
    let res = reqwest::Client::new()
        .post(format!("{}/students", app.base_url))
        .json(&json!({"firstname":"Ann","lastname":"Lee","departmentId":i64::MAX}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);
    Ok(())
}
