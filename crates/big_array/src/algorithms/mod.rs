pub(crate) mod binary_search;
pub(crate) mod common;
pub(crate) mod quick_sort;
pub(crate) mod radix_sort;
