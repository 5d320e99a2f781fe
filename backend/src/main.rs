use backend::{
    build_rocket,
    config::ServerConfig,
    cors::CORS,
    routes::AppState,
    store::PgVoteStore,
};
use rocket::{routes, fs::NamedFile};
use shuttle_runtime::CustomError;
use sqlx::PgPool;
use tracing::info;
use include_dir::{include_dir, Dir};
use uuid::Uuid;

static STATIC_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/static");

#[rocket::get("/<path..>", rank = 20)]
async fn spa_handler(path: std::path::PathBuf, temp_dir: &rocket::State<std::path::PathBuf>) -> Option<NamedFile> {
    let file_path = temp_dir.join(&path);
    if file_path.exists() && file_path.is_file() {
        NamedFile::open(&file_path).await.ok()
    } else {
        NamedFile::open(temp_dir.join("index.html")).await.ok()
    }
}

#[shuttle_runtime::main]
async fn rocket(
    #[shuttle_shared_db::Postgres] pool: PgPool,
    #[shuttle_runtime::Secrets] secret_store: shuttle_runtime::SecretStore,
) -> shuttle_rocket::ShuttleRocket {
    info!("🚀 Starting product vote store");

    let config = ServerConfig::from_secrets(&secret_store);

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .map_err(CustomError::new)?;

    info!("📋 Migrations complete");

    let temp_dir = std::env::temp_dir().join(format!("showcase_static_{}", Uuid::new_v4()));
    std::fs::create_dir_all(&temp_dir).map_err(CustomError::new)?;
    STATIC_DIR.extract(&temp_dir).map_err(CustomError::new)?;

    let rocket = build_rocket(AppState::new(PgVoteStore::new(pool)), CORS::new(config.allowed_origin))
        .manage(temp_dir)
        .mount("/", routes![spa_handler]);

    Ok(rocket.into())
}
