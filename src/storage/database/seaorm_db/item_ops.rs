use crate::core::models::{Item, ItemId, NewItem};
use crate::storage::ItemStore;
use crate::utils::error::{Result, ServiceError};
use async_trait::async_trait;
use sea_orm::*;
use tracing::debug;

use super::super::entities;
use super::types::{DatabaseBackendType, SeaOrmDatabase};

#[async_trait]
impl ItemStore for SeaOrmDatabase {
    async fn list_all_ids(&self) -> Result<Vec<ItemId>> {
        let ids = entities::Item::find()
            .select_only()
            .column(entities::item::Column::Id)
            .order_by_asc(entities::item::Column::Id)
            .into_tuple::<i32>()
            .all(&self.db)
            .await
            .map_err(ServiceError::Database)?;

        debug!("Listed {} item ids", ids.len());
        Ok(ids)
    }

    async fn find_by_id(&self, id: ItemId) -> Result<Option<Item>> {
        let model = entities::Item::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(ServiceError::Database)?;

        Ok(model.map(Item::from))
    }

    async fn save(&self, item: Item) -> Result<Item> {
        debug!("Saving item: {}", item.id);

        let active_model = entities::item::ActiveModel {
            id: Unchanged(item.id),
            name: Set(item.name),
            description: Set(item.description),
            status: Set(item.status),
            email: Set(item.email),
        };

        match active_model.update(&self.db).await {
            Ok(model) => Ok(model.into()),
            Err(DbErr::RecordNotUpdated) | Err(DbErr::RecordNotFound(_)) => {
                Err(ServiceError::not_found(format!("Item {} not found", item.id)))
            }
            Err(e) => Err(ServiceError::Database(e)),
        }
    }

    async fn find_all(&self) -> Result<Vec<Item>> {
        let models = entities::Item::find()
            .order_by_asc(entities::item::Column::Id)
            .all(&self.db)
            .await
            .map_err(ServiceError::Database)?;

        Ok(models.into_iter().map(Item::from).collect())
    }

    async fn create(&self, item: NewItem) -> Result<Item> {
        let active_model = entities::item::ActiveModel {
            id: NotSet,
            name: Set(item.name),
            description: Set(item.description),
            status: Set(item.status),
            email: Set(item.email),
        };

        let model = active_model
            .insert(&self.db)
            .await
            .map_err(ServiceError::Database)?;

        debug!("Created item: {}", model.id);
        Ok(model.into())
    }

    async fn delete_by_id(&self, id: ItemId) -> Result<bool> {
        let result = entities::Item::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(ServiceError::Database)?;

        Ok(result.rows_affected > 0)
    }

    async fn health_check(&self) -> Result<()> {
        SeaOrmDatabase::health_check(self).await
    }

    fn backend_name(&self) -> &'static str {
        match self.backend_type {
            DatabaseBackendType::SQLite => "sqlite",
            DatabaseBackendType::PostgreSQL => "postgresql",
        }
    }
}
