// Copyright (c) 2025 Weighted Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Label traits for the weighted trie.

use std::fmt::Debug;

/// Requirements on the labels carried by trie nodes.
///
/// Labels must be totally ordered (siblings are kept sorted) and cloneable
/// (grafting copies them). `Debug` is used when reporting duplicate labels.
/// Implemented automatically for every type that qualifies.
pub trait Label: Ord + Clone + Debug {}

impl<T: Ord + Clone + Debug> Label for T {}

/// Merging of two labels along a single-child chain.
///
/// Path compression replaces a node and its only child by one node whose
/// label is `parent.merge(&child)`.
pub trait MergeLabel {
    /// Returns the label of the node replacing `self` and its only child `next`.
    fn merge(&self, next: &Self) -> Self;
}

macro_rules! impl_merge_label_numeric {
    ($($t:ty),* $(,)?) => {
        $(
            impl MergeLabel for $t {
                /// Numeric labels merge by (saturating) addition.
                fn merge(&self, next: &Self) -> Self {
                    self.saturating_add(*next)
                }
            }
        )*
    };
}

impl_merge_label_numeric!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl MergeLabel for String {
    fn merge(&self, next: &Self) -> Self {
        let mut merged = String::with_capacity(self.len() + next.len());
        merged.push_str(self);
        merged.push_str(next);
        merged
    }
}

impl MergeLabel for Vec<u8> {
    fn merge(&self, next: &Self) -> Self {
        let mut merged = self.clone();
        merged.extend_from_slice(next);
        merged
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_merge_adds() {
        assert_eq!(21i32.merge(&100), 121);
        assert_eq!(250u8.merge(&10), u8::MAX);
        assert_eq!((-5i64).merge(&2), -3);
    }

    #[test]
    fn test_string_merge_concatenates() {
        assert_eq!("ab".to_string().merge(&"cd".to_string()), "abcd");
        assert_eq!(vec![1u8].merge(&vec![2, 3]), vec![1, 2, 3]);
    }
}
