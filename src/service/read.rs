//! Read-path helpers shared by the entity access types.

use crate::error::AppError;
use crate::model::Row;
use crate::schema::EntitySchema;
use crate::sql::{count, select_by_ids, QueryBuf};
use crate::store::Store;
use serde_json::Value;
use std::collections::BTreeSet;

/// Ids bound per SELECT; keeps every store under its bind-variable limit.
pub(crate) const IDS_PER_QUERY: usize = 500;

pub(crate) async fn count_rows(store: &dyn Store, entity: &EntitySchema) -> Result<u64, AppError> {
    let rows = store.fetch_all(&count(entity)).await?;
    let n = rows
        .first()
        .and_then(|r| r.get("count"))
        .and_then(Value::as_u64)
        .unwrap_or(0);
    Ok(n)
}

/// Run a SELECT and build entities through `factory`. Rows the factory rejects are
/// dropped, not reported.
pub(crate) async fn fetch_entities<T>(
    store: &dyn Store,
    entity: &EntitySchema,
    q: &QueryBuf,
    factory: fn(&Row) -> Option<T>,
) -> Result<Vec<T>, AppError> {
    let rows = store.fetch_all(q).await?;
    let total = rows.len();
    let out: Vec<T> = rows.iter().filter_map(factory).collect();
    if out.len() < total {
        tracing::debug!(
            kind = entity.kind,
            dropped = total - out.len(),
            "rows rejected by entity rules"
        );
    }
    Ok(out)
}

/// Look up entities for a set of ids. Ids are deduplicated and queried in ascending
/// chunks of [`IDS_PER_QUERY`], so the merged result stays ordered by id.
pub(crate) async fn fetch_entities_by_ids<T>(
    store: &dyn Store,
    entity: &EntitySchema,
    ids: &[i64],
    factory: fn(&Row) -> Option<T>,
) -> Result<Vec<T>, AppError> {
    let unique: Vec<i64> = ids.iter().copied().collect::<BTreeSet<_>>().into_iter().collect();
    let mut out = Vec::new();
    for chunk in unique.chunks(IDS_PER_QUERY) {
        out.extend(fetch_entities(store, entity, &select_by_ids(entity, chunk), factory).await?);
    }
    Ok(out)
}
