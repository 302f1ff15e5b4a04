//! 排序规则测试：标点 < 数字 < 字母、重音折叠、小写优先、与输入顺序无关。

use std::cmp::Ordering;

use rand::seq::SliceRandom;
use rand::thread_rng;

use crate::listing::compare_names;

fn sorted(names: &[&str]) -> Vec<String> {
    let mut v: Vec<String> = names.iter().map(|s| s.to_string()).collect();
    v.sort_by(|a, b| compare_names(a, b));
    v
}

#[test]
fn case_insensitive_primary_order() {
    assert_eq!(sorted(&["Banana", "apple", "Cherry"]), ["apple", "Banana", "Cherry"]);
}

#[test]
fn lowercase_before_uppercase_on_tie() {
    assert_eq!(sorted(&["B", "a", "A", "b"]), ["a", "A", "b", "B"]);
    assert_eq!(compare_names("readme", "README"), Ordering::Less);
}

#[test]
fn dot_dot_sorts_by_comparator() {
    assert_eq!(sorted(&["zeta", "..", "Alpha", "_build"]), ["_build", "..", "Alpha", "zeta"]);
    assert_eq!(sorted(&["b", "..", "-dash"]), ["-dash", "..", "b"]);
}

#[test]
fn accents_fold_to_base_letter() {
    assert_eq!(sorted(&["f.txt", "é.txt", "~a.txt"]), ["~a.txt", "é.txt", "f.txt"]);
    assert_eq!(sorted(&["zebra", "Äpfel", "apple", "Ångström"]), ["Ångström", "Äpfel", "apple", "zebra"]);
}

#[test]
fn unaccented_before_accented() {
    assert_eq!(sorted(&["é", "e", "E", "f"]), ["e", "E", "é", "f"]);
    assert_eq!(compare_names("resume", "résumé"), Ordering::Less);
}

#[test]
fn punctuation_then_digits_then_letters() {
    assert_eq!(sorted(&["a", "~", "1", "_", " x", "Z"]), [" x", "_", "~", "1", "a", "Z"]);
    // 不做数值比较，逐字符比较
    assert_eq!(sorted(&["9.log", "10.log"]), ["10.log", "9.log"]);
}

#[test]
fn precomposed_and_decomposed_forms_are_adjacent() {
    // U+00E9 与 e + U+0301 主权重和重音都相同，只靠原始字节区分
    let composed = "caf\u{e9}";
    let decomposed = "cafe\u{301}";
    assert_ne!(compare_names(composed, decomposed), Ordering::Equal);
    assert_eq!(sorted(&["cafg", composed, "cafe", decomposed]).first().map(String::as_str), Some("cafe"));
    assert_eq!(sorted(&["cafg", composed, "cafe", decomposed]).last().map(String::as_str), Some("cafg"));
}

#[test]
fn equal_names_compare_equal() {
    assert_eq!(compare_names("same.txt", "same.txt"), Ordering::Equal);
}

#[test]
fn order_does_not_depend_on_input_order() {
    let names = [
        "b.txt", "B.txt", "a", "A", "10.log", "9.log", "..", "文件", "Zed", "zed", "_x", "x_",
    ];
    let expected = sorted(&names);

    let mut rng = thread_rng();
    for _ in 0..50 {
        let mut shuffled = names.to_vec();
        shuffled.shuffle(&mut rng);
        assert_eq!(sorted(&shuffled), expected);
    }
}
