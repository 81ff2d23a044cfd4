mod group_impl;
pub mod types;

pub use group_impl::Group;
pub use types::{Cyclic, Dihedral, Trivial};
