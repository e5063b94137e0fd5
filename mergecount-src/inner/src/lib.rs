/// Re-exports each member crate of a category both as a module and as a
/// glob, with the items documented inline on the category page.
#[macro_export]
macro_rules! doc_inline_reexport {
    ( $($lib:ident),* $(,)? ) => { $(
        #[doc(inline)]
        pub use $lib::{self, *};
    )* };
}
