//! C-compatible counterparts of core solver types

mod enums;
pub use enums::*;
