//! SQL access for master-data tables, driven entirely by the entity
//! descriptor. No per-table code: column lists, key predicates and
//! value binding all come from the field definitions.

use contracts::masterdata::{DeletePolicy, EntityDescriptor, FieldDef, FieldType, FieldValue, Record};
use sea_orm::{
    ConnectionTrait, DatabaseBackend, DatabaseConnection, QueryResult, Statement, Value,
};

use super::error::MasterDataError;
use super::key::CompositeKey;

/// All rows, ordered by the entity's order field. Soft-delete entities
/// exclude rows marked `isdeleted`.
pub async fn list_all(
    conn: &DatabaseConnection,
    entity: &EntityDescriptor,
) -> Result<Vec<Record>, MasterDataError> {
    let mut sql = format!("SELECT {} FROM {}", column_list(entity), entity.table);
    if entity.delete_policy == DeletePolicy::Soft {
        sql.push_str(" WHERE isdeleted = 0");
    }
    sql.push_str(&format!(" ORDER BY {} ASC", entity.order_field));

    let rows = conn
        .query_all(Statement::from_string(DatabaseBackend::Sqlite, sql))
        .await?;
    rows.iter().map(|row| decode_row(entity, row)).collect()
}

/// Fetch one row by key. Soft-deleted rows are still addressable here;
/// that is what keeps their key occupied for the duplicate guard.
pub async fn get_by_key(
    conn: &DatabaseConnection,
    entity: &EntityDescriptor,
    key: &CompositeKey,
) -> Result<Option<Record>, MasterDataError> {
    let sql = format!(
        "SELECT {} FROM {} WHERE {}",
        column_list(entity),
        entity.table,
        key_predicate(entity)
    );
    let row = conn
        .query_one(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            &sql,
            key_values(entity, key),
        ))
        .await?;
    row.map(|r| decode_row(entity, &r)).transpose()
}

pub async fn insert(
    conn: &DatabaseConnection,
    entity: &EntityDescriptor,
    record: &Record,
) -> Result<(), MasterDataError> {
    let placeholders = vec!["?"; entity.fields.len()].join(", ");
    let sql = format!(
        "INSERT INTO {} ({}) VALUES ({})",
        entity.table,
        column_list(entity),
        placeholders
    );
    let values: Vec<Value> = entity
        .fields
        .iter()
        .map(|def| bind_value(def, record.get(def.name)))
        .collect();

    conn.execute(Statement::from_sql_and_values(
        DatabaseBackend::Sqlite,
        &sql,
        values,
    ))
    .await?;
    Ok(())
}

/// Apply a partial payload to the row addressed by `key`: only the
/// non-key fields the payload actually carries are assigned, every
/// other column keeps its stored value. Returns the number of rows
/// touched (0 when the key does not exist).
pub async fn update_by_key(
    conn: &DatabaseConnection,
    entity: &EntityDescriptor,
    key: &CompositeKey,
    record: &Record,
) -> Result<u64, MasterDataError> {
    let value_defs: Vec<&FieldDef> = entity
        .value_fields()
        .filter(|def| record.contains(def.name))
        .collect();
    if value_defs.is_empty() {
        // Nothing to write; report whether the row exists.
        let existing = get_by_key(conn, entity, key).await?;
        return Ok(existing.is_some() as u64);
    }
    let assignments = value_defs
        .iter()
        .map(|def| format!("{} = ?", def.name))
        .collect::<Vec<_>>()
        .join(", ");
    let sql = format!(
        "UPDATE {} SET {} WHERE {}",
        entity.table,
        assignments,
        key_predicate(entity)
    );

    let mut values: Vec<Value> = value_defs
        .iter()
        .map(|def| bind_value(def, record.get(def.name)))
        .collect();
    values.extend(key_values(entity, key));

    let result = conn
        .execute(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            &sql,
            values,
        ))
        .await?;
    Ok(result.rows_affected())
}

/// Physical row removal.
pub async fn delete_by_key(
    conn: &DatabaseConnection,
    entity: &EntityDescriptor,
    key: &CompositeKey,
) -> Result<u64, MasterDataError> {
    let sql = format!("DELETE FROM {} WHERE {}", entity.table, key_predicate(entity));
    let result = conn
        .execute(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            &sql,
            key_values(entity, key),
        ))
        .await?;
    Ok(result.rows_affected())
}

/// Soft delete: the row stays in place with `isdeleted = 1`.
pub async fn mark_deleted(
    conn: &DatabaseConnection,
    entity: &EntityDescriptor,
    key: &CompositeKey,
) -> Result<u64, MasterDataError> {
    let sql = format!(
        "UPDATE {} SET isdeleted = 1 WHERE {}",
        entity.table,
        key_predicate(entity)
    );
    let result = conn
        .execute(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            &sql,
            key_values(entity, key),
        ))
        .await?;
    Ok(result.rows_affected())
}

fn column_list(entity: &EntityDescriptor) -> String {
    entity
        .fields
        .iter()
        .map(|f| f.name)
        .collect::<Vec<_>>()
        .join(", ")
}

fn key_predicate(entity: &EntityDescriptor) -> String {
    entity
        .key_fields
        .iter()
        .map(|f| format!("{f} = ?"))
        .collect::<Vec<_>>()
        .join(" AND ")
}

fn key_values(entity: &EntityDescriptor, key: &CompositeKey) -> Vec<Value> {
    key.parts()
        .iter()
        .map(|(name, value)| {
            let field_type = entity
                .field(name)
                .map(|def| def.field_type)
                .unwrap_or(FieldType::Text);
            bind_scalar(field_type, Some(value))
        })
        .collect()
}

fn bind_value(def: &FieldDef, value: Option<&FieldValue>) -> Value {
    bind_scalar(def.field_type, value)
}

fn bind_scalar(field_type: FieldType, value: Option<&FieldValue>) -> Value {
    match value {
        None | Some(FieldValue::Null) => match field_type {
            FieldType::Text | FieldType::Date => Value::String(None),
            FieldType::Flag | FieldType::Integer => Value::BigInt(None),
            FieldType::Number => Value::Double(None),
        },
        Some(FieldValue::Integer(v)) => {
            if field_type == FieldType::Number {
                Value::Double(Some(*v as f64))
            } else {
                Value::BigInt(Some(*v))
            }
        }
        Some(FieldValue::Number(v)) => Value::Double(Some(*v)),
        Some(FieldValue::Text(v)) => Value::String(Some(Box::new(v.clone()))),
    }
}

fn decode_row(entity: &EntityDescriptor, row: &QueryResult) -> Result<Record, MasterDataError> {
    let mut record = Record::new();
    for def in entity.fields {
        let value = match def.field_type {
            FieldType::Text | FieldType::Date => row
                .try_get::<Option<String>>("", def.name)?
                .map(FieldValue::Text),
            FieldType::Flag | FieldType::Integer => row
                .try_get::<Option<i64>>("", def.name)?
                .map(FieldValue::Integer),
            FieldType::Number => row
                .try_get::<Option<f64>>("", def.name)?
                .map(FieldValue::Number),
        };
        record.set(def.name, value.unwrap_or(FieldValue::Null));
    }
    Ok(record)
}
