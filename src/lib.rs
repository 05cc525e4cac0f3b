pub mod config;
pub mod content;
pub mod logger;
pub mod slug;
pub mod util;
mod test_data;
