//! Value Objects - Immutable, identity-less domain primitives

mod http_method;
mod mac_address;

pub use http_method::HttpMethod;
pub use mac_address::MacAddress;
