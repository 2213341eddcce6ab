//! Demo dataset generation.
//!
//! Builds the customers/orders fixture pair used by the CLI `seed` command
//! and the test suite. The original dataset is internally consistent; the
//! masked variant deletes customer 3 while order 103 keeps referencing it,
//! seeding exactly one orphan for `orders.customer_id -> customers.id`.

use std::path::Path;

use anyhow::{Context, Result};
use rusqlite::{Connection, params};

/// Create the demo original dataset at `path`.
pub fn seed_original(path: &Path) -> Result<()> {
    let conn = open(path)?;
    populate(&conn).with_context(|| format!("seeding demo dataset at {}", path.display()))?;
    Ok(())
}

/// Create the demo masked dataset at `path`.
///
/// Same contents as the original, then the masking step drops customer 3.
/// Its order stays behind, so the demo relationship fails with one orphan.
pub fn seed_masked(path: &Path) -> Result<()> {
    let conn = open(path)?;
    populate(&conn).with_context(|| format!("seeding demo dataset at {}", path.display()))?;
    conn.execute("DELETE FROM customers WHERE id = 3", [])
        .with_context(|| format!("masking demo dataset at {}", path.display()))?;
    Ok(())
}

fn open(path: &Path) -> Result<Connection> {
    let conn = Connection::open(path)
        .with_context(|| format!("creating demo dataset at {}", path.display()))?;
    // The demo dataset intentionally seeds an orphaned row (an order whose
    // customer has been deleted) to exercise the checker; this build's
    // SQLite defaults to enforcing foreign keys, which would otherwise
    // block that deletion.
    conn.execute_batch("PRAGMA foreign_keys = OFF;")
        .with_context(|| format!("configuring demo dataset at {}", path.display()))?;
    Ok(conn)
}

fn populate(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS customers (
            id INTEGER PRIMARY KEY,
            name TEXT
        );

        CREATE TABLE IF NOT EXISTS orders (
            id INTEGER PRIMARY KEY,
            customer_id INTEGER,
            amount REAL,
            FOREIGN KEY (customer_id) REFERENCES customers(id)
        );
        "#,
    )?;

    let mut insert_customer = conn.prepare("INSERT INTO customers (id, name) VALUES (?1, ?2)")?;
    for (id, name) in [(1, "Alice"), (2, "Bob"), (3, "Charlie")] {
        insert_customer.execute(params![id, name])?;
    }

    let mut insert_order =
        conn.prepare("INSERT INTO orders (id, customer_id, amount) VALUES (?1, ?2, ?3)")?;
    for (id, customer_id, amount) in [(101, 1, 100.00), (102, 2, 200.00), (103, 3, 150.00)] {
        insert_order.execute(params![id, customer_id, amount])?;
    }

    Ok(())
}
