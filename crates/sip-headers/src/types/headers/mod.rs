// Header model: names, raw values, the untyped `Header`, the typed enum and the
// per-message collection.

pub mod header;
pub mod header_list;
pub mod header_name;
pub mod header_value;
pub mod typed_header;

pub use header::Header;
pub use header_list::{HeaderAccess, HeaderList};
pub use header_name::HeaderName;
pub use header_value::HeaderValue;
pub use typed_header::{TypedHeader, TypedHeaderTrait};
