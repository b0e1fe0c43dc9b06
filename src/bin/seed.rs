use argon2::{
    Argon2, PasswordHasher,
    password_hash::{SaltString, rand_core::OsRng},
};
use axum_order_desk::{config::AppConfig, db::create_pool};
use uuid::Uuid;

// Seeds an operator account plus a starter vocabulary so the picklists and
// the confirmation gate have something to match against.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let pool = create_pool(&config.database_url, config.max_db_connections).await?;
    // Ensure migrations are applied.
    sqlx::migrate!("./migrations").run(&pool).await?;

    let operator_id = ensure_operator(&pool, "operator@example.com", "operator123").await?;
    seed_suggestions(&pool).await?;

    println!("Seed completed. Operator ID: {operator_id}");
    Ok(())
}

async fn ensure_operator(
    pool: &sqlx::PgPool,
    email: &str,
    password: &str,
) -> anyhow::Result<Uuid> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let password_hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| anyhow::anyhow!(e.to_string()))?
        .to_string();

    let row: Option<(Uuid,)> = sqlx::query_as(
        r#"
        INSERT INTO operators (id, email, password_hash)
        VALUES ($1, $2, $3)
        ON CONFLICT (email) DO UPDATE SET email = EXCLUDED.email
        RETURNING id
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(email)
    .bind(password_hash)
    .fetch_optional(pool)
    .await?;

    row.map(|(id,)| id)
        .ok_or_else(|| anyhow::anyhow!("operator row missing after upsert"))
}

async fn seed_suggestions(pool: &sqlx::PgPool) -> anyhow::Result<()> {
    let entries: &[(&str, &str)] = &[
        ("customer", "Sharif"),
        ("customer", "Uruma"),
        ("product_model", "9070"),
        ("product_model", "9078"),
        ("product_model", "9080"),
        ("product_model", "9100"),
        ("product_model", "9801"),
        ("product_model", "D-02"),
        ("product_model", "X-21"),
        ("color", "363-6"),
        ("color", "363-11"),
        ("color", "M9011-2"),
        ("color", "HJ001"),
    ];

    for (kind, name) in entries {
        sqlx::query(
            r#"
            INSERT INTO suggestions (id, kind, name)
            VALUES ($1, $2, $3)
            ON CONFLICT (kind, name) DO NOTHING
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(kind)
        .bind(name)
        .execute(pool)
        .await?;
    }

    Ok(())
}
