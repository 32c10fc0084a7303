pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod practicum;
pub mod telegram;
pub mod watcher;

pub use config::Config;
pub use error::WatchError;
pub use practicum::PracticumClient;
pub use telegram::TelegramClient;
pub use watcher::Watcher;
