//! Self-validating value objects.
//!
//! Each value object wraps a raw scalar, checks its invariant once at
//! construction and never changes afterwards.

mod description;
mod name;
mod score;
mod title;

pub use description::Description;
pub use name::Name;
pub use score::Score;
pub use title::Title;

use crate::error::DomainResult;

/// Common surface of the value objects, used by aggregate factories to
/// normalize raw input generically.
pub trait ValueObject: Sized {
    /// The scalar the value object wraps
    type Raw;

    /// Validate and wrap a raw scalar.
    fn from_raw(raw: Self::Raw) -> DomainResult<Self>;
}
