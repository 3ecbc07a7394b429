//! Pantry inventory CRUD.

use rusqlite::{params, Connection, Row};

use larder_core::errors::{LarderError, LarderResult};
use larder_core::models::InventoryItem;

use crate::to_store_err;

fn parse_item_row(row: &Row<'_>) -> LarderResult<InventoryItem> {
    Ok(InventoryItem {
        id: row.get(0).map_err(|e| to_store_err(e.to_string()))?,
        name: row.get(1).map_err(|e| to_store_err(e.to_string()))?,
        quantity: row.get(2).map_err(|e| to_store_err(e.to_string()))?,
        unit: row.get(3).map_err(|e| to_store_err(e.to_string()))?,
        expiry: row.get(4).map_err(|e| to_store_err(e.to_string()))?,
    })
}

/// List all pantry items in insertion order.
pub fn list_items(conn: &Connection) -> LarderResult<Vec<InventoryItem>> {
    let mut stmt = conn
        .prepare("SELECT id, name, quantity, unit, expiry FROM inventory ORDER BY id ASC")
        .map_err(|e| to_store_err(e.to_string()))?;

    let rows = stmt
        .query_map([], |row| Ok(parse_item_row(row)))
        .map_err(|e| to_store_err(e.to_string()))?;

    let mut items = Vec::new();
    for row in rows {
        let item = row.map_err(|e| to_store_err(e.to_string()))??;
        items.push(item);
    }
    Ok(items)
}

/// Insert an item, returning the assigned surrogate id.
pub fn insert_item(conn: &Connection, item: &InventoryItem) -> LarderResult<i64> {
    conn.execute(
        "INSERT INTO inventory (name, quantity, unit, expiry) VALUES (?1, ?2, ?3, ?4)",
        params![item.name, item.quantity.max(0.0), item.unit, item.expiry],
    )
    .map_err(|e| to_store_err(e.to_string()))?;
    Ok(conn.last_insert_rowid())
}

/// Update an existing item by id.
pub fn update_item(conn: &Connection, item: &InventoryItem) -> LarderResult<()> {
    let changed = conn
        .execute(
            "UPDATE inventory
             SET name = ?1, quantity = ?2, unit = ?3, expiry = ?4,
                 updated_at = strftime('%Y-%m-%dT%H:%M:%fZ', 'now')
             WHERE id = ?5",
            params![item.name, item.quantity.max(0.0), item.unit, item.expiry, item.id],
        )
        .map_err(|e| to_store_err(e.to_string()))?;

    if changed == 0 {
        return Err(LarderError::ItemNotFound { id: item.id });
    }
    Ok(())
}

/// Delete an item by id.
pub fn delete_item(conn: &Connection, id: i64) -> LarderResult<()> {
    let changed = conn
        .execute("DELETE FROM inventory WHERE id = ?1", params![id])
        .map_err(|e| to_store_err(e.to_string()))?;

    if changed == 0 {
        return Err(LarderError::ItemNotFound { id });
    }
    Ok(())
}
