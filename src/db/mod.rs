pub mod schema;
pub mod sqlite;

pub use sqlite::create_pool;
