mod migrations;
mod sqlite;

pub type Store = sqlite::SqliteStore;
