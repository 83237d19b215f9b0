//! SQLite schema and query constants.

/// `order` is a reserved word, so the column is `todo_order`.
/// AUTOINCREMENT keeps ids from being reused after deletes.
pub const CREATE_TABLES: &str = r#"
CREATE TABLE IF NOT EXISTS todos (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL DEFAULT '',
    completed INTEGER NOT NULL DEFAULT 0,
    todo_order INTEGER NOT NULL DEFAULT -1
);
"#;

pub const SELECT_ALL: &str = r#"
SELECT id, title, completed, todo_order
FROM todos
ORDER BY id ASC
"#;

pub const SELECT_BY_ID: &str = r#"
SELECT id, title, completed, todo_order
FROM todos
WHERE id = ?1
"#;

pub const EXISTS_BY_ID: &str = r#"
SELECT EXISTS(SELECT 1 FROM todos WHERE id = ?1)
"#;

pub const INSERT: &str = r#"
INSERT INTO todos (title, completed, todo_order)
VALUES (?1, ?2, ?3)
"#;

pub const UPDATE: &str = r#"
UPDATE todos
SET title = ?2, completed = ?3, todo_order = ?4
WHERE id = ?1
"#;

pub const DELETE_BY_ID: &str = r#"
DELETE FROM todos
WHERE id = ?1
"#;

pub const DELETE_ALL: &str = "DELETE FROM todos";
