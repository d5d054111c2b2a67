pub mod config;
pub mod error;
pub mod input;
pub mod result;

pub use config::AppConfig;
pub use error::SnipError;
pub use input::InputState;
pub use result::SnipResult;
