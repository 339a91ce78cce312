//! PostgreSQL implementation of ItemRepository
//!
//! An item owns four child tables. Writes touching an item and its children
//! run in a single transaction; reads load children for a whole page at once.

use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, Transaction};
use tracing::instrument;

use catalog_core::entities::{Item, ItemChildren, ItemDetail, ItemDraft};
use catalog_core::error::DomainError;
use catalog_core::traits::{ItemFilter, ItemRepository, RepoResult};
use catalog_core::value_objects::{Page, PageRequest, TriState};

use crate::listing::{ListingQuery, Predicate};
use crate::mappers::group_children;
use crate::models::{
    ItemEmbedModel, ItemFeatureModel, ItemImageModel, ItemModel, ItemPropertyModel,
};

use super::common::{set_flag, value_taken};
use super::error::{map_db_error, map_unique_violation};

const ITEM_COLUMNS: &str = "id, name, description, category_id, sub_category_id, \
                            sub_sub_category_id, price_lkr, price_usd, per_unit, price_type, \
                            discount_percent, is_featured, is_enabled, is_sold, \
                            hot_deal_end_at, created_at, modified_at";

const CHILD_TABLES: [&str; 4] = ["item_properties", "item_features", "item_images", "item_embeds"];

/// Every ancestor of a storefront item is enabled and live
const STOREFRONT_CHAIN: &str = "EXISTS (SELECT 1 FROM categories c \
        WHERE c.id = items.category_id AND c.is_enabled AND c.deleted_at IS NULL) \
    AND (items.sub_category_id IS NULL OR EXISTS (SELECT 1 FROM sub_categories s \
        WHERE s.id = items.sub_category_id AND s.is_enabled AND s.deleted_at IS NULL)) \
    AND (items.sub_sub_category_id IS NULL OR EXISTS (SELECT 1 FROM sub_sub_categories ss \
        WHERE ss.id = items.sub_sub_category_id AND ss.is_enabled AND ss.deleted_at IS NULL))";

fn discount(state: TriState) -> Option<Predicate> {
    match state {
        TriState::Yes => Some(Predicate::Raw("discount_percent > 0")),
        TriState::No => Some(Predicate::Raw(
            "discount_percent IS NULL OR discount_percent = 0",
        )),
        TriState::Any => None,
    }
}

fn storefront_scope(query: ListingQuery) -> ListingQuery {
    query
        .scope(Predicate::Bool("is_enabled", true))
        .scope(Predicate::Raw(STOREFRONT_CHAIN))
}

fn listing(filter: &ItemFilter) -> ListingQuery {
    let mut query = ListingQuery::new("items", ITEM_COLUMNS);
    if filter.storefront {
        query = storefront_scope(query);
    }

    query
        .search(&["name"], filter.search.as_deref())
        .filter(Predicate::flag("is_enabled", filter.is_enabled))
        .filter(Predicate::flag("is_featured", filter.is_featured))
        .filter(discount(filter.is_discount))
        .filter(Predicate::presence("hot_deal_end_at", filter.is_hotdeal))
        .filter(Predicate::flag("is_sold", filter.is_sold))
        .filter(Predicate::any_of("category_id", &filter.category_ids))
        .filter(Predicate::any_of("sub_category_id", &filter.sub_category_ids))
        .filter(Predicate::any_of(
            "sub_sub_category_id",
            &filter.sub_sub_category_ids,
        ))
}

/// PostgreSQL implementation of ItemRepository
#[derive(Clone)]
pub struct PgItemRepository {
    pool: PgPool,
}

impl PgItemRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn load_children(&self, ids: &[i64]) -> Result<HashMap<i64, ItemChildren>, sqlx::Error> {
        let properties = sqlx::query_as::<_, ItemPropertyModel>(
            r"
            SELECT item_id, key, value FROM item_properties
            WHERE item_id = ANY($1) AND deleted_at IS NULL
            ORDER BY id
            ",
        )
        .bind(ids)
        .fetch_all(&self.pool)
        .await?;

        let features = sqlx::query_as::<_, ItemFeatureModel>(
            r"
            SELECT item_id, name, icon_url, mdi_icon FROM item_features
            WHERE item_id = ANY($1) AND deleted_at IS NULL
            ORDER BY id
            ",
        )
        .bind(ids)
        .fetch_all(&self.pool)
        .await?;

        let images = sqlx::query_as::<_, ItemImageModel>(
            r"
            SELECT item_id, image_url FROM item_images
            WHERE item_id = ANY($1) AND deleted_at IS NULL
            ORDER BY id
            ",
        )
        .bind(ids)
        .fetch_all(&self.pool)
        .await?;

        let embeds = sqlx::query_as::<_, ItemEmbedModel>(
            r"
            SELECT item_id, title, html FROM item_embeds
            WHERE item_id = ANY($1) AND deleted_at IS NULL
            ORDER BY id
            ",
        )
        .bind(ids)
        .fetch_all(&self.pool)
        .await?;

        Ok(group_children(properties, features, images, embeds))
    }

    async fn with_children(&self, rows: Vec<ItemModel>) -> Result<Vec<ItemDetail>, sqlx::Error> {
        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<i64> = rows.iter().map(|row| row.id).collect();
        let mut children = self.load_children(&ids).await?;

        Ok(rows
            .into_iter()
            .map(|row| ItemDetail {
                children: children.remove(&row.id).unwrap_or_default(),
                item: Item::from(row),
            })
            .collect())
    }
}

async fn insert_children(
    tx: &mut Transaction<'_, Postgres>,
    item_id: i64,
    children: &ItemChildren,
) -> Result<(), sqlx::Error> {
    for property in &children.properties {
        sqlx::query(
            r"
            INSERT INTO item_properties (item_id, key, value, created_at, modified_at)
            VALUES ($1, $2, $3, NOW(), NOW())
            ",
        )
        .bind(item_id)
        .bind(&property.key)
        .bind(&property.value)
        .execute(&mut **tx)
        .await?;
    }

    for feature in &children.features {
        sqlx::query(
            r"
            INSERT INTO item_features (item_id, name, icon_url, mdi_icon, created_at, modified_at)
            VALUES ($1, $2, $3, $4, NOW(), NOW())
            ",
        )
        .bind(item_id)
        .bind(&feature.name)
        .bind(&feature.icon_url)
        .bind(&feature.mdi_icon)
        .execute(&mut **tx)
        .await?;
    }

    for image in &children.images {
        sqlx::query(
            r"
            INSERT INTO item_images (item_id, image_url, created_at, modified_at)
            VALUES ($1, $2, NOW(), NOW())
            ",
        )
        .bind(item_id)
        .bind(&image.image_url)
        .execute(&mut **tx)
        .await?;
    }

    for embed in &children.embeds {
        sqlx::query(
            r"
            INSERT INTO item_embeds (item_id, title, html, created_at, modified_at)
            VALUES ($1, $2, $3, NOW(), NOW())
            ",
        )
        .bind(item_id)
        .bind(&embed.title)
        .bind(&embed.html)
        .execute(&mut **tx)
        .await?;
    }

    Ok(())
}

#[async_trait]
impl ItemRepository for PgItemRepository {
    #[instrument(skip(self))]
    async fn find_detail(&self, id: i64) -> RepoResult<Option<ItemDetail>> {
        let row = sqlx::query_as::<_, ItemModel>(
            r"
            SELECT id, name, description, category_id, sub_category_id, sub_sub_category_id,
                   price_lkr, price_usd, per_unit, price_type, discount_percent, is_featured,
                   is_enabled, is_sold, hot_deal_end_at, created_at, modified_at
            FROM items
            WHERE id = $1 AND deleted_at IS NULL
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        let Some(row) = row else {
            return Ok(None);
        };

        let mut details = self.with_children(vec![row]).await.map_err(map_db_error)?;
        Ok(details.pop())
    }

    #[instrument(skip(self))]
    async fn find_storefront_detail(&self, id: i64) -> RepoResult<Option<ItemDetail>> {
        let rows = storefront_scope(ListingQuery::new("items", ITEM_COLUMNS))
            .scope(Predicate::AnyOf("id", vec![id]))
            .fetch::<ItemModel>(&self.pool, PageRequest::unbounded())
            .await
            .map_err(map_db_error)?;

        let mut details = self.with_children(rows).await.map_err(map_db_error)?;
        Ok(details.pop())
    }

    #[instrument(skip(self))]
    async fn name_exists(&self, name: &str, exclude_id: Option<i64>) -> RepoResult<bool> {
        value_taken(&self.pool, "items", "name", name, exclude_id)
            .await
            .map_err(map_db_error)
    }

    #[instrument(skip(self, children), fields(name = %draft.name))]
    async fn create(&self, draft: &ItemDraft, children: &ItemChildren) -> RepoResult<Item> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let model = sqlx::query_as::<_, ItemModel>(
            r"
            INSERT INTO items (
                name, description, category_id, sub_category_id, sub_sub_category_id,
                price_lkr, price_usd, per_unit, price_type, discount_percent,
                is_featured, is_enabled, is_sold, hot_deal_end_at, created_at, modified_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, NOW(), NOW())
            RETURNING id, name, description, category_id, sub_category_id, sub_sub_category_id,
                      price_lkr, price_usd, per_unit, price_type, discount_percent, is_featured,
                      is_enabled, is_sold, hot_deal_end_at, created_at, modified_at
            ",
        )
        .bind(&draft.name)
        .bind(&draft.description)
        .bind(draft.category_id)
        .bind(draft.sub_category_id)
        .bind(draft.sub_sub_category_id)
        .bind(draft.price_lkr)
        .bind(draft.price_usd)
        .bind(&draft.per_unit)
        .bind(&draft.price_type)
        .bind(draft.discount_percent)
        .bind(draft.is_featured)
        .bind(draft.is_enabled)
        .bind(draft.is_sold)
        .bind(draft.hot_deal_end_at)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| map_unique_violation(e, |_| DomainError::DuplicateName(draft.name.clone())))?;

        insert_children(&mut tx, model.id, children)
            .await
            .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(Item::from(model))
    }

    #[instrument(skip(self, item, children), fields(item_id = item.id))]
    async fn update(&self, item: &Item, children: &ItemChildren) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let result = sqlx::query(
            r"
            UPDATE items
            SET name = $2, description = $3, category_id = $4, sub_category_id = $5,
                sub_sub_category_id = $6, price_lkr = $7, price_usd = $8, per_unit = $9,
                price_type = $10, discount_percent = $11, is_featured = $12, is_enabled = $13,
                is_sold = $14, hot_deal_end_at = $15, modified_at = NOW()
            WHERE id = $1 AND deleted_at IS NULL
            ",
        )
        .bind(item.id)
        .bind(&item.name)
        .bind(&item.description)
        .bind(item.category_id)
        .bind(item.sub_category_id)
        .bind(item.sub_sub_category_id)
        .bind(item.price_lkr)
        .bind(item.price_usd)
        .bind(&item.per_unit)
        .bind(&item.price_type)
        .bind(item.discount_percent)
        .bind(item.is_featured)
        .bind(item.is_enabled)
        .bind(item.is_sold)
        .bind(item.hot_deal_end_at)
        .execute(&mut *tx)
        .await
        .map_err(|e| map_unique_violation(e, |_| DomainError::DuplicateName(item.name.clone())))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::ItemNotFound(item.id));
        }

        // children are replaced wholesale
        for table in CHILD_TABLES {
            sqlx::query(&format!("DELETE FROM {table} WHERE item_id = $1"))
                .bind(item.id)
                .execute(&mut *tx)
                .await
                .map_err(map_db_error)?;
        }

        insert_children(&mut tx, item.id, children)
            .await
            .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let result = sqlx::query(
            r"
            UPDATE items SET deleted_at = NOW(), modified_at = NOW()
            WHERE id = $1 AND deleted_at IS NULL
            ",
        )
        .bind(id)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::ItemNotFound(id));
        }

        for table in CHILD_TABLES {
            sqlx::query(&format!(
                "UPDATE {table} SET deleted_at = NOW(), modified_at = NOW() \
                 WHERE item_id = $1 AND deleted_at IS NULL"
            ))
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;
        }

        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn set_enabled(&self, id: i64, enabled: bool) -> RepoResult<()> {
        if set_flag(&self.pool, "items", "is_enabled", id, enabled)
            .await
            .map_err(map_db_error)?
        {
            Ok(())
        } else {
            Err(DomainError::ItemNotFound(id))
        }
    }

    #[instrument(skip(self))]
    async fn list(&self, filter: &ItemFilter, page: PageRequest) -> RepoResult<Page<ItemDetail>> {
        let query = listing(filter);

        let rows = query
            .fetch::<ItemModel>(&self.pool, page)
            .await
            .map_err(map_db_error)?;
        let total = query.total(&self.pool).await.map_err(map_db_error)?;

        let flag_column = (!filter.storefront).then_some("is_enabled");
        let mut counts = query
            .counts(&self.pool, flag_column)
            .await
            .map_err(map_db_error)?;

        if let Some(predicate) = Predicate::any_of("category_id", &filter.category_ids) {
            counts.category = Some(
                query
                    .scope_count(&self.pool, Some(&predicate))
                    .await
                    .map_err(map_db_error)?,
            );
        }
        if let Some(predicate) = Predicate::any_of("sub_category_id", &filter.sub_category_ids) {
            counts.sub_category = Some(
                query
                    .scope_count(&self.pool, Some(&predicate))
                    .await
                    .map_err(map_db_error)?,
            );
        }
        if let Some(predicate) =
            Predicate::any_of("sub_sub_category_id", &filter.sub_sub_category_ids)
        {
            counts.sub_sub_category = Some(
                query
                    .scope_count(&self.pool, Some(&predicate))
                    .await
                    .map_err(map_db_error)?,
            );
        }

        let details = self.with_children(rows).await.map_err(map_db_error)?;

        Ok(Page::new(page, details, total).with_counts(counts))
    }
}
