mod biography;
mod digitize;
mod entries;
mod health;

pub use biography::biography_handler;
pub use digitize::digitize_handler;
pub use entries::{
    create_entry_handler, folders_handler, list_entries_handler, search_entries_handler,
};
pub use health::health_handler;
