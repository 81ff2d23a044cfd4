pub mod finite;
pub mod group;
pub mod monoid;
pub mod ordinal;
pub mod product;
pub mod semigroup;

pub use finite::Finite;
pub use group::Group;
pub use monoid::Monoid;
pub use ordinal::Ordinal;
pub use product::DirectProduct;
pub use semigroup::Semigroup;
