//! Counting cross pairs while merge-sorting.
//!
//! The crates are grouped the same way they are laid out on disk:
//! [`ops`] holds the relations, [`seq`] the counting algorithms, and
//! [`naive`] / [`random`] the references and generators used to test them.

#[doc(inline)]
pub use naive;
#[doc(inline)]
pub use ops;
#[doc(inline)]
pub use random;
#[doc(inline)]
pub use seq;
