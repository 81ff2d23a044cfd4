//! `Score` packs its fields into a `const fn`-friendly representation, so
//! its arithmetic has to stick to operations usable in a const context —
//! `std::cmp::max`/`min` aren't, hence these.

#[inline]
pub const fn max_u32(a: u32, b: u32) -> u32 {
  [a, b][(a < b) as usize]
}

#[inline]
pub const fn min_u32(a: u32, b: u32) -> u32 {
  [a, b][(a >= b) as usize]
}
