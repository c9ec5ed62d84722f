//! Server backends: fixed product collections answering bounded searches.
//!
//! Every backend shares one search algorithm ([`search::get_entries`]); a
//! backend only decides how its products are stored and handed to it.

pub mod list;
pub mod map;
pub mod search;
pub mod server;

pub use list::ListServer;
pub use map::MapServer;
pub use server::Server;
