// crates/userlist_core/src/consts.rs

/// Page size used when a request asks for zero or a negative size.
pub const DEFAULT_PAGE_SIZE: usize = 50;

/// Upper bound applied to every page size, at every call site.
pub const MAX_PAGE_SIZE: usize = 1000;

/// Letters reported by the alphabet summary, in order.
pub const ALPHABET: std::ops::RangeInclusive<char> = 'A'..='Z';

const _: () = { assert!(DEFAULT_PAGE_SIZE <= MAX_PAGE_SIZE); };
