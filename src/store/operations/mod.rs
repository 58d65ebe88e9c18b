// Store operation traits and implementations
pub mod append;
pub mod create;
pub mod delete;
pub mod list;

pub use append::Appender;
pub use create::Creator;
pub use delete::Deleter;
pub use list::Lister;
