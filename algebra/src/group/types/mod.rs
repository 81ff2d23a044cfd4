mod cyclic;
mod dihedral;
mod trivial;

pub use cyclic::Cyclic;
pub use dihedral::Dihedral;
pub use trivial::Trivial;
