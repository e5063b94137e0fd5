use inner::doc_inline_reexport;

doc_inline_reexport! {
    merge_count,
    inversion,
    reverse_pairs,
    smaller_after,
}
