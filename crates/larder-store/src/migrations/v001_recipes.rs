//! v001: Recipe corpus table plus FTS5 index on name + ingredients, with
//! sync triggers.

use rusqlite::Connection;

use larder_core::errors::LarderResult;

use crate::to_store_err;

pub fn migrate(conn: &Connection) -> LarderResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS recipes (
            id           INTEGER PRIMARY KEY,
            name         TEXT NOT NULL,
            ingredients  TEXT NOT NULL DEFAULT '[]',
            steps        TEXT NOT NULL DEFAULT '[]',
            created_at   TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
        );

        CREATE UNIQUE INDEX IF NOT EXISTS idx_recipes_name ON recipes(name);

        CREATE VIRTUAL TABLE IF NOT EXISTS recipe_fts USING fts5(
            name,
            ingredients,
            content='recipes',
            content_rowid='id'
        );

        -- Sync triggers: keep FTS5 in sync with the recipes table.
        CREATE TRIGGER IF NOT EXISTS recipe_fts_insert AFTER INSERT ON recipes BEGIN
            INSERT INTO recipe_fts(rowid, name, ingredients)
            VALUES (new.id, new.name, new.ingredients);
        END;

        CREATE TRIGGER IF NOT EXISTS recipe_fts_delete BEFORE DELETE ON recipes BEGIN
            INSERT INTO recipe_fts(recipe_fts, rowid, name, ingredients)
            VALUES ('delete', old.id, old.name, old.ingredients);
        END;

        CREATE TRIGGER IF NOT EXISTS recipe_fts_update AFTER UPDATE ON recipes BEGIN
            INSERT INTO recipe_fts(recipe_fts, rowid, name, ingredients)
            VALUES ('delete', old.id, old.name, old.ingredients);
            INSERT INTO recipe_fts(rowid, name, ingredients)
            VALUES (new.id, new.name, new.ingredients);
        END;
        ",
    )
    .map_err(|e| to_store_err(e.to_string()))?;
    Ok(())
}
