mod auth;
mod network;

pub use auth::TokenManager;
pub use network::NetworkManager;
pub use network::PersistError;
