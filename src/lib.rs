pub mod error;
pub mod model;

pub use error::ColumnNotFoundError;
pub use model::lookup_method::LookupMethod;
