use contracts::masterdata::{DeletePolicy, EntityDescriptor, Record};
use sea_orm::DatabaseConnection;

use super::error::MasterDataError;
use super::key::CompositeKey;
use super::{normalize, search, store, validate};

/// Entry point for every master-data operation. Handlers construct one
/// per request over the shared connection; tests run it against an
/// in-memory database.
pub struct RecordManager<'a> {
    conn: &'a DatabaseConnection,
}

impl<'a> RecordManager<'a> {
    pub fn new(conn: &'a DatabaseConnection) -> Self {
        Self { conn }
    }

    /// List rows ordered by the entity's order field, optionally run
    /// through the multi-term search filter.
    pub async fn list(
        &self,
        entity: &EntityDescriptor,
        query: Option<&str>,
    ) -> Result<Vec<Record>, MasterDataError> {
        let rows = store::list_all(self.conn, entity).await?;
        match query {
            Some(q) if !q.trim().is_empty() => Ok(rows
                .into_iter()
                .filter(|record| search::matches(entity, record, q))
                .collect()),
            _ => Ok(rows),
        }
    }

    pub async fn get(
        &self,
        entity: &EntityDescriptor,
        key: &CompositeKey,
    ) -> Result<Record, MasterDataError> {
        store::get_by_key(self.conn, entity, key)
            .await?
            .ok_or(MasterDataError::NotFound)
    }

    /// Normalize, validate, guard against key collisions, insert.
    ///
    /// The duplicate guard also sees soft-deleted rows: a key stays
    /// occupied after a soft delete.
    pub async fn create(
        &self,
        entity: &EntityDescriptor,
        mut record: Record,
    ) -> Result<Record, MasterDataError> {
        normalize::apply(entity, &mut record);
        validate::validate(entity, &record)?;
        let key = CompositeKey::from_record(entity, &record)?;

        if store::get_by_key(self.conn, entity, &key).await?.is_some() {
            return Err(MasterDataError::Duplicate(key.encode()));
        }

        store::insert(self.conn, entity, &record).await?;
        tracing::info!("created {} {}", entity.slug, key.encode());
        self.get(entity, &key).await
    }

    /// Apply a partial payload to an existing record: only the fields
    /// the payload carries are written, everything else is unchanged.
    /// The key is taken from the payload and is immutable; renaming a
    /// record means delete and re-create.
    pub async fn update(
        &self,
        entity: &EntityDescriptor,
        mut record: Record,
    ) -> Result<Record, MasterDataError> {
        normalize::apply_partial(entity, &mut record);
        validate::validate_partial(entity, &record)?;
        let key = CompositeKey::from_record(entity, &record)?;

        let affected = store::update_by_key(self.conn, entity, &key, &record).await?;
        if affected == 0 {
            return Err(MasterDataError::NotFound);
        }
        tracing::info!("updated {} {}", entity.slug, key.encode());
        self.get(entity, &key).await
    }

    /// Delete per the entity's fixed policy: soft-delete entities mark
    /// `isdeleted = 1`, everything else removes the row.
    pub async fn delete(
        &self,
        entity: &EntityDescriptor,
        key: &CompositeKey,
    ) -> Result<(), MasterDataError> {
        let affected = match entity.delete_policy {
            DeletePolicy::Soft => store::mark_deleted(self.conn, entity, key).await?,
            DeletePolicy::Hard => store::delete_by_key(self.conn, entity, key).await?,
        };
        if affected == 0 {
            return Err(MasterDataError::NotFound);
        }
        tracing::info!("deleted {} {}", entity.slug, key.encode());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::db::entity_table_ddl;
    use contracts::masterdata::entities::bom::BOM_HEADS;
    use contracts::masterdata::entities::cost::COST_CENTER_TYPES;
    use contracts::masterdata::entities::general::UNITS;
    use contracts::masterdata::FieldValue;
    use sea_orm::{ConnectionTrait, Database, DatabaseBackend, Statement};

    async fn setup(entities: &[&EntityDescriptor]) -> DatabaseConnection {
        let conn = Database::connect("sqlite::memory:").await.unwrap();
        for entity in entities {
            conn.execute(Statement::from_string(
                DatabaseBackend::Sqlite,
                entity_table_ddl(entity),
            ))
            .await
            .unwrap();
        }
        conn
    }

    fn cost_center_type(comcode: &str, doctype: &str, text: &str) -> Record {
        let mut record = Record::new();
        record.set("comcode", comcode);
        record.set("doctype", doctype);
        record.set("doctypetext", text);
        record
    }

    fn bom_head(docnum: &str) -> Record {
        let mut record = Record::new();
        record.set("comcode", "TR01");
        record.set("bomdoctype", "MAM");
        record.set("bomdocnum", docnum);
        record.set("bomdocfrom", "2024-01-01");
        record.set("bomdocuntil", "9999-12-31");
        record.set("matdoctype", "HAM");
        record.set("matdocnum", "MAT001");
        record.set("quantity", 1.0);
        record
    }

    #[tokio::test]
    async fn test_create_normalizes_and_reads_back() {
        let conn = setup(&[&COST_CENTER_TYPES]).await;
        let manager = RecordManager::new(&conn);

        let created = manager
            .create(&COST_CENTER_TYPES, cost_center_type("tr01", "plt", "Plants"))
            .await
            .unwrap();

        assert_eq!(created.text("comcode"), "TR01");
        assert_eq!(created.text("doctype"), "PLT");
        assert_eq!(created.get("ispassive"), Some(&FieldValue::Integer(0)));
    }

    #[tokio::test]
    async fn test_duplicate_key_is_case_insensitive() {
        let conn = setup(&[&COST_CENTER_TYPES]).await;
        let manager = RecordManager::new(&conn);

        manager
            .create(&COST_CENTER_TYPES, cost_center_type("TR01", "PLT", "Plants"))
            .await
            .unwrap();
        let err = manager
            .create(&COST_CENTER_TYPES, cost_center_type("tr01", "plt", "Again"))
            .await
            .unwrap_err();

        assert!(matches!(err, MasterDataError::Duplicate(key) if key == "TR01|PLT"));
    }

    #[tokio::test]
    async fn test_missing_required_field_rejected() {
        let conn = setup(&[&COST_CENTER_TYPES]).await;
        let manager = RecordManager::new(&conn);

        let mut record = cost_center_type("TR01", "PLT", "Plants");
        record.remove("doctypetext");
        let err = manager.create(&COST_CENTER_TYPES, record).await.unwrap_err();
        assert!(matches!(err, MasterDataError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_hard_delete_frees_the_key() {
        let conn = setup(&[&COST_CENTER_TYPES]).await;
        let manager = RecordManager::new(&conn);

        manager
            .create(&COST_CENTER_TYPES, cost_center_type("TR01", "PLT", "Plants"))
            .await
            .unwrap();
        let key = CompositeKey::decode(&COST_CENTER_TYPES, "TR01|PLT").unwrap();

        manager.delete(&COST_CENTER_TYPES, &key).await.unwrap();
        assert!(manager.list(&COST_CENTER_TYPES, None).await.unwrap().is_empty());

        // The key is free again after a hard delete.
        manager
            .create(&COST_CENTER_TYPES, cost_center_type("TR01", "PLT", "Plants v2"))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_soft_delete_keeps_the_key_occupied() {
        let conn = setup(&[&BOM_HEADS]).await;
        let manager = RecordManager::new(&conn);

        manager.create(&BOM_HEADS, bom_head("BOM001")).await.unwrap();
        let key = CompositeKey::decode(&BOM_HEADS, "TR01|MAM|BOM001").unwrap();

        manager.delete(&BOM_HEADS, &key).await.unwrap();

        // Hidden from list, still addressable by key, key still occupied.
        assert!(manager.list(&BOM_HEADS, None).await.unwrap().is_empty());
        let fetched = manager.get(&BOM_HEADS, &key).await.unwrap();
        assert_eq!(fetched.get("isdeleted"), Some(&FieldValue::Integer(1)));

        let err = manager.create(&BOM_HEADS, bom_head("BOM001")).await.unwrap_err();
        assert!(matches!(err, MasterDataError::Duplicate(_)));
    }

    #[tokio::test]
    async fn test_update_overwrites_values_not_keys() {
        let conn = setup(&[&BOM_HEADS]).await;
        let manager = RecordManager::new(&conn);

        manager.create(&BOM_HEADS, bom_head("BOM001")).await.unwrap();

        let mut changed = bom_head("BOM001");
        changed.set("quantity", 4.5);
        changed.set("drawnum", "DRW-17");
        let updated = manager.update(&BOM_HEADS, changed).await.unwrap();

        assert_eq!(updated.text("bomdocnum"), "BOM001");
        assert_eq!(updated.get("quantity"), Some(&FieldValue::Number(4.5)));
        assert_eq!(updated.text("drawnum"), "DRW-17");
    }

    #[tokio::test]
    async fn test_partial_update_leaves_absent_fields_unchanged() {
        let conn = setup(&[&BOM_HEADS]).await;
        let manager = RecordManager::new(&conn);

        let mut full = bom_head("BOM001");
        full.set("drawnum", "DRW-1");
        manager.create(&BOM_HEADS, full).await.unwrap();

        let mut patch = Record::new();
        patch.set("comcode", "TR01");
        patch.set("bomdoctype", "MAM");
        patch.set("bomdocnum", "BOM001");
        patch.set("quantity", 3.0);
        let updated = manager.update(&BOM_HEADS, patch).await.unwrap();

        assert_eq!(updated.get("quantity"), Some(&FieldValue::Number(3.0)));
        assert_eq!(updated.text("drawnum"), "DRW-1");
        assert_eq!(updated.text("bomdocfrom"), "2024-01-01");
        assert_eq!(updated.get("isdeleted"), Some(&FieldValue::Integer(0)));
    }

    #[tokio::test]
    async fn test_update_does_not_resurrect_soft_deleted_record() {
        let conn = setup(&[&BOM_HEADS]).await;
        let manager = RecordManager::new(&conn);

        manager.create(&BOM_HEADS, bom_head("BOM001")).await.unwrap();
        let key = CompositeKey::decode(&BOM_HEADS, "TR01|MAM|BOM001").unwrap();
        manager.delete(&BOM_HEADS, &key).await.unwrap();

        let mut patch = Record::new();
        patch.set("comcode", "TR01");
        patch.set("bomdoctype", "MAM");
        patch.set("bomdocnum", "BOM001");
        patch.set("quantity", 9.0);
        let updated = manager.update(&BOM_HEADS, patch).await.unwrap();

        // The payload never mentioned isdeleted, so the record stays
        // deleted and hidden from lists.
        assert_eq!(updated.get("isdeleted"), Some(&FieldValue::Integer(1)));
        assert!(manager.list(&BOM_HEADS, None).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_key_only_payload_changes_nothing() {
        let conn = setup(&[&COST_CENTER_TYPES]).await;
        let manager = RecordManager::new(&conn);

        manager
            .create(&COST_CENTER_TYPES, cost_center_type("TR01", "PLT", "Plants"))
            .await
            .unwrap();

        let mut patch = Record::new();
        patch.set("comcode", "TR01");
        patch.set("doctype", "PLT");
        let unchanged = manager.update(&COST_CENTER_TYPES, patch).await.unwrap();
        assert_eq!(unchanged.text("doctypetext"), "Plants");

        let mut missing = Record::new();
        missing.set("comcode", "TR01");
        missing.set("doctype", "NOPE");
        let err = manager.update(&COST_CENTER_TYPES, missing).await.unwrap_err();
        assert!(matches!(err, MasterDataError::NotFound));
    }

    #[tokio::test]
    async fn test_update_unknown_key_is_not_found() {
        let conn = setup(&[&BOM_HEADS]).await;
        let manager = RecordManager::new(&conn);

        let err = manager.update(&BOM_HEADS, bom_head("BOM404")).await.unwrap_err();
        assert!(matches!(err, MasterDataError::NotFound));
    }

    #[tokio::test]
    async fn test_list_orders_and_filters() {
        let conn = setup(&[&UNITS]).await;
        let manager = RecordManager::new(&conn);

        for (code, text) in [
            ("PCS", "Pieces"),
            ("BOX10", "Box of 10 bolts"),
            ("KG", "Kilogram"),
        ] {
            let mut record = Record::new();
            record.set("comcode", "TR01");
            record.set("unitcode", code);
            record.set("unittext", text);
            manager.create(&UNITS, record).await.unwrap();
        }

        let all = manager.list(&UNITS, None).await.unwrap();
        let codes: Vec<String> = all.iter().map(|r| r.text("unitcode")).collect();
        assert_eq!(codes, vec!["BOX10", "KG", "PCS"]);

        let hits = manager.list(&UNITS, Some("bolt 10")).await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].text("unitcode"), "BOX10");

        let misses = manager.list(&UNITS, Some("bolt 20")).await.unwrap();
        assert!(misses.is_empty());
    }
}
