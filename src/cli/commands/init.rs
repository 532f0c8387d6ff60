//! Database initialization and seeding commands.

use console::style;

use crate::config::Settings;
use crate::repository::SqliteStore;

/// Create the database file and schema.
pub fn cmd_init(settings: &Settings) -> anyhow::Result<()> {
    let store = SqliteStore::open(&settings.database_path)?;
    store.init_schema()?;

    println!(
        "{} Database ready at {}",
        style("✓").green(),
        settings.database_path.display()
    );
    Ok(())
}

/// Populate an empty database with the demo dataset.
pub fn cmd_seed(settings: &Settings, count: usize) -> anyhow::Result<()> {
    let store = SqliteStore::open(&settings.database_path)?;
    store.init_schema()?;

    let inserted = store.seed_demo(count)?;
    if inserted == 0 {
        println!(
            "{} Database already has documents, nothing seeded",
            style("→").cyan()
        );
    } else {
        println!(
            "{} Seeded {} documents into {}",
            style("✓").green(),
            inserted,
            settings.database_path.display()
        );
    }
    Ok(())
}
