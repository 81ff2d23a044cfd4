/// A set whose cardinality is fixed by its type alone, independent of any
/// particular value — `Cyclic::<6>::SIZE` is 6 no matter which rotation you
/// hold, for instance.
pub trait Finite {
  const SIZE: usize;

  fn size() -> usize {
    Self::SIZE
  }
}
