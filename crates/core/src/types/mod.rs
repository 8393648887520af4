//! Domain types for typed environment access.
//!
//! - **`shape`**: shape tags (`Shape`, `StringFormat`, `IpVersion`)
//! - **`options`**: call-site options and the option normalizer
//! - **`value`**: conversions from resolved values into Rust types

pub mod options;
pub mod shape;
pub mod value;

pub use options::*;
pub use shape::*;
pub use value::*;
