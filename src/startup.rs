use sea_orm::DatabaseConnection;

use crate::{
    config::Config,
    data::user::UserRepository,
    error::AppError,
    model::user::{CreateUserParam, Role},
    service::password,
};

/// Connects to the database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from configuration,
/// then automatically runs all pending SeaORM migrations so the schema is
/// up-to-date before the application accepts requests.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Seeds the initial admin user from configuration.
///
/// When `ADMIN_EMAIL` and `ADMIN_PASSWORD` are both configured and no admin
/// user exists yet, creates one with the username "admin". Idempotent: a
/// second boot with the same configuration changes nothing.
///
/// # Arguments
/// - `db` - Database connection
/// - `config` - Application configuration with optional admin credentials
///
/// # Returns
/// - `Ok(())` - Admin present, created, or seeding not configured
/// - `Err(AppError)` - Database error or password hashing failure
pub async fn seed_admin(db: &DatabaseConnection, config: &Config) -> Result<(), AppError> {
    let (Some(email), Some(admin_password)) = (&config.admin_email, &config.admin_password) else {
        return Ok(());
    };

    let user_repo = UserRepository::new(db);

    if user_repo.admin_exists().await? {
        return Ok(());
    }

    let password_hash = password::hash_password(admin_password)?;

    user_repo
        .create(CreateUserParam {
            username: "admin".to_string(),
            email: email.clone(),
            password_hash,
            role: Role::Admin,
        })
        .await?;

    tracing::info!("Seeded admin user {}", email);

    Ok(())
}
