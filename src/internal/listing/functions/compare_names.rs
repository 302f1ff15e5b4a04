use std::cmp::Ordering;

use crate::internal::listing::structs::name_key::NameKey;

/// 目录项名字的排序规则，按 [`NameKey`] 比较
pub fn compare_names(a: &str, b: &str) -> Ordering {
    NameKey::new(a).cmp(&NameKey::new(b))
}
