pub mod lookup_method;

pub use lookup_method::LookupMethod;
