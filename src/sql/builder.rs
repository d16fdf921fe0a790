//! Builds parameterized COUNT, SELECT, INSERT, UPDATE, DELETE and bootstrap DDL from an entity schema.

use crate::schema::EntitySchema;
use crate::sql::BindValue;

/// Quote identifier (safe: only from schema).
fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

#[derive(Debug)]
pub struct QueryBuf {
    pub sql: String,
    pub params: Vec<BindValue>,
}

impl QueryBuf {
    fn new() -> Self {
        QueryBuf {
            sql: String::new(),
            params: Vec::new(),
        }
    }

    /// Raw statement without parameters (DDL, fixtures).
    pub fn raw(sql: impl Into<String>) -> Self {
        QueryBuf {
            sql: sql.into(),
            params: Vec::new(),
        }
    }

    fn push_param(&mut self, v: BindValue) -> String {
        self.params.push(v);
        format!("${}", self.params.len())
    }
}

fn select_column_list(entity: &EntitySchema) -> String {
    entity.column_names().map(quoted).collect::<Vec<_>>().join(", ")
}

/// SELECT COUNT(pk) AS "count".
pub fn count(entity: &EntitySchema) -> QueryBuf {
    let mut q = QueryBuf::new();
    q.sql = format!(
        "SELECT COUNT({}) AS {} FROM {}",
        quoted(entity.pk_column),
        quoted("count"),
        quoted(entity.table_name)
    );
    q
}

/// SELECT every row ORDER BY pk.
pub fn select_all(entity: &EntitySchema) -> QueryBuf {
    let mut q = QueryBuf::new();
    q.sql = format!(
        "SELECT {} FROM {} ORDER BY {}",
        select_column_list(entity),
        quoted(entity.table_name),
        quoted(entity.pk_column)
    );
    q
}

/// SELECT by primary key; id is the sole param.
pub fn select_by_id(entity: &EntitySchema, id: i64) -> QueryBuf {
    let mut q = QueryBuf::new();
    let ph = q.push_param(BindValue::I64(id));
    q.sql = format!(
        "SELECT {} FROM {} WHERE {} = {}",
        select_column_list(entity),
        quoted(entity.table_name),
        quoted(entity.pk_column),
        ph
    );
    q
}

/// SELECT ... WHERE pk IN ($1, $2, ...) ORDER BY pk. An empty id list selects nothing.
pub fn select_by_ids(entity: &EntitySchema, ids: &[i64]) -> QueryBuf {
    let mut q = QueryBuf::new();
    let cols = select_column_list(entity);
    let table = quoted(entity.table_name);
    if ids.is_empty() {
        q.sql = format!("SELECT {} FROM {} WHERE 1 = 0", cols, table);
        return q;
    }
    let placeholders: Vec<String> = ids.iter().map(|id| q.push_param(BindValue::I64(*id))).collect();
    q.sql = format!(
        "SELECT {} FROM {} WHERE {} IN ({}) ORDER BY {}",
        cols,
        table,
        quoted(entity.pk_column),
        placeholders.join(", "),
        quoted(entity.pk_column)
    );
    q
}

/// INSERT one row. Columns follow schema order; values not in the schema are skipped and
/// schema columns missing from `values` are left out of the statement.
pub fn insert(entity: &EntitySchema, values: &[(&str, BindValue)]) -> QueryBuf {
    let mut q = QueryBuf::new();
    let mut cols = Vec::new();
    let mut placeholders = Vec::new();
    for c in entity.columns {
        let Some((_, v)) = values.iter().find(|(name, _)| *name == c.name) else { continue };
        placeholders.push(q.push_param(v.clone()));
        cols.push(quoted(c.name));
    }
    q.sql = format!(
        "INSERT INTO {} ({}) VALUES ({})",
        quoted(entity.table_name),
        cols.join(", "),
        placeholders.join(", ")
    );
    q
}

/// UPDATE by id: SET only the given columns (pk and unknown columns are skipped).
/// `sets` must name at least one non-pk column.
pub fn update(entity: &EntitySchema, id: i64, sets: &[(&str, BindValue)]) -> QueryBuf {
    let mut q = QueryBuf::new();
    let mut assignments = Vec::new();
    for (name, v) in sets {
        if *name == entity.pk_column {
            continue;
        }
        let Some(c) = entity.column(name) else { continue };
        let ph = q.push_param(v.clone());
        assignments.push(format!("{} = {}", quoted(c.name), ph));
    }
    let id_ph = q.push_param(BindValue::I64(id));
    q.sql = format!(
        "UPDATE {} SET {} WHERE {} = {}",
        quoted(entity.table_name),
        assignments.join(", "),
        quoted(entity.pk_column),
        id_ph
    );
    q
}

/// DELETE by id.
pub fn delete(entity: &EntitySchema, id: i64) -> QueryBuf {
    let mut q = QueryBuf::new();
    let ph = q.push_param(BindValue::I64(id));
    q.sql = format!(
        "DELETE FROM {} WHERE {} = {}",
        quoted(entity.table_name),
        quoted(entity.pk_column),
        ph
    );
    q
}

/// CREATE TABLE IF NOT EXISTS with NOT NULL columns, pk and foreign keys to `id` of the target table.
pub fn create_table(entity: &EntitySchema) -> QueryBuf {
    let defs: Vec<String> = entity
        .columns
        .iter()
        .map(|c| {
            let mut def = format!("{} {} NOT NULL", quoted(c.name), c.kind.sql_type());
            if c.name == entity.pk_column {
                def.push_str(" PRIMARY KEY");
            }
            if let Some(target) = c.references {
                def.push_str(&format!(" REFERENCES {} ({})", quoted(target), quoted("id")));
            }
            def
        })
        .collect();
    QueryBuf::raw(format!(
        "CREATE TABLE IF NOT EXISTS {} ({})",
        quoted(entity.table_name),
        defs.join(", ")
    ))
}
