use contracts::masterdata::{registry, EntityDescriptor, FieldType};
use once_cell::sync::OnceCell;
use sea_orm::{ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, Statement};

static DB_CONN: OnceCell<DatabaseConnection> = OnceCell::new();

pub async fn initialize_database(db_path: Option<&str>) -> anyhow::Result<()> {
    let db_file = db_path.unwrap_or("target/db/masterdata.db");
    if let Some(parent) = std::path::Path::new(db_file).parent() {
        std::fs::create_dir_all(parent)?;
    }
    let absolute_path = if std::path::Path::new(db_file).is_absolute() {
        std::path::PathBuf::from(db_file)
    } else {
        std::env::current_dir()?.join(db_file)
    };
    // Normalize path separators and ensure proper URL form on Windows
    let normalized = absolute_path.to_string_lossy().replace('\\', "/");
    let needs_leading_slash = !normalized.starts_with('/') && normalized.contains(':');
    let prefix = if needs_leading_slash { "/" } else { "" };
    let db_url = format!("sqlite://{}{}?mode=rwc", prefix, normalized);
    let conn = Database::connect(&db_url).await?;

    bootstrap_schema(&conn).await?;

    DB_CONN
        .set(conn)
        .map_err(|_| anyhow::anyhow!("Failed to set DB_CONN"))?;
    Ok(())
}

pub fn get_connection() -> &'static DatabaseConnection {
    DB_CONN
        .get()
        .expect("Database connection has not been initialized")
}

/// Create every registered entity table plus the system tables. All DDL
/// is `IF NOT EXISTS`, so startup on an existing database is a no-op.
pub async fn bootstrap_schema(conn: &DatabaseConnection) -> anyhow::Result<()> {
    for entity in registry::ENTITIES {
        conn.execute(Statement::from_string(
            DatabaseBackend::Sqlite,
            entity_table_ddl(entity),
        ))
        .await?;
    }

    conn.execute(Statement::from_string(
        DatabaseBackend::Sqlite,
        SYS_USERS_DDL.to_string(),
    ))
    .await?;
    conn.execute(Statement::from_string(
        DatabaseBackend::Sqlite,
        SYS_SETTINGS_DDL.to_string(),
    ))
    .await?;

    tracing::info!("Schema bootstrap complete ({} entity tables)", registry::ENTITIES.len());
    Ok(())
}

/// Generate CREATE TABLE DDL from an entity descriptor. The composite
/// primary key mirrors the descriptor's key fields.
pub fn entity_table_ddl(entity: &EntityDescriptor) -> String {
    let mut lines = Vec::with_capacity(entity.fields.len() + 1);
    for field in entity.fields {
        let sql_type = match field.field_type {
            FieldType::Text | FieldType::Date => "TEXT",
            FieldType::Flag | FieldType::Integer => "INTEGER",
            FieldType::Number => "REAL",
        };
        let mut line = format!("{} {}", field.name, sql_type);
        if field.required {
            line.push_str(" NOT NULL");
        }
        if field.field_type == FieldType::Flag {
            line.push_str(" DEFAULT 0");
        }
        lines.push(line);
    }
    lines.push(format!("PRIMARY KEY ({})", entity.key_fields.join(", ")));

    format!(
        "CREATE TABLE IF NOT EXISTS {} (\n    {}\n);",
        entity.table,
        lines.join(",\n    ")
    )
}

const SYS_USERS_DDL: &str = r#"
CREATE TABLE IF NOT EXISTS sys_users (
    id TEXT PRIMARY KEY NOT NULL,
    username TEXT NOT NULL UNIQUE,
    email TEXT,
    password_hash TEXT NOT NULL,
    full_name TEXT,
    is_active INTEGER NOT NULL DEFAULT 1,
    is_admin INTEGER NOT NULL DEFAULT 0,
    created_at TEXT,
    updated_at TEXT,
    last_login_at TEXT
);
"#;

const SYS_SETTINGS_DDL: &str = r#"
CREATE TABLE IF NOT EXISTS sys_settings (
    key TEXT PRIMARY KEY NOT NULL,
    value TEXT NOT NULL,
    description TEXT,
    created_at TEXT,
    updated_at TEXT
);
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::masterdata::entities::cost::COST_CENTER_TYPES;

    #[test]
    fn test_entity_ddl_has_composite_primary_key() {
        let ddl = entity_table_ddl(&COST_CENTER_TYPES);
        assert!(ddl.contains("CREATE TABLE IF NOT EXISTS bsmgrpleccm001"));
        assert!(ddl.contains("comcode TEXT NOT NULL"));
        assert!(ddl.contains("ispassive INTEGER NOT NULL DEFAULT 0"));
        assert!(ddl.contains("PRIMARY KEY (comcode, doctype)"));
    }

    #[tokio::test]
    async fn test_bootstrap_creates_every_table() {
        let conn = Database::connect("sqlite::memory:").await.unwrap();
        bootstrap_schema(&conn).await.unwrap();

        let rows = conn
            .query_all(Statement::from_string(
                DatabaseBackend::Sqlite,
                "SELECT name FROM sqlite_master WHERE type='table'".to_string(),
            ))
            .await
            .unwrap();
        let names: Vec<String> = rows
            .iter()
            .map(|row| row.try_get("", "name").unwrap())
            .collect();

        for entity in registry::ENTITIES {
            assert!(names.iter().any(|n| n == entity.table), "{}", entity.table);
        }
        assert!(names.iter().any(|n| n == "sys_users"));
        assert!(names.iter().any(|n| n == "sys_settings"));
    }
}
