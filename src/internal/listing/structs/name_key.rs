use std::cmp::Ordering;

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// ASCII 标点与符号的排序位置，顺序同 Unicode 默认排序表（DUCET）
const ASCII_PUNCT_ORDER: &str = "_-,;:!?.'\"()[]{}@*/\\&#%`^+<=>|~$";

/// 主权重的字符类别，类别间的先后固定
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Group {
    Space,
    Punct,
    Digit,
    Letter,
}

/// 一个基本字符的三级权重
#[derive(Debug, Clone, PartialEq, Eq)]
struct Element {
    primary: (Group, u32),
    accents: Vec<char>,
    upper: bool,
}

/// 文件名的排序键
///
/// 逐级比较：
/// 1. 主权重：空白 < 标点符号 < 数字 < 字母，字母按去掉重音、转成小写后的基本字母比较
/// 2. 重音：无重音的排在带重音的前面（`e` < `é`）
/// 3. 大小写：小写在前（`a` < `A`）
/// 4. 原始字节序，保证全序
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameKey<'a> {
    raw: &'a str,
    elements: Vec<Element>,
}

impl<'a> NameKey<'a> {
    pub fn new(name: &'a str) -> Self {
        let mut elements: Vec<Element> = Vec::with_capacity(name.len());

        for c in name.nfd() {
            if is_combining_mark(c) {
                match elements.last_mut() {
                    Some(base) => base.accents.push(c),
                    None => elements.push(Element {
                        primary: (Group::Punct, 0x100 + c as u32),
                        accents: Vec::new(),
                        upper: false,
                    }),
                }
                continue;
            }

            elements.push(Element {
                primary: primary_weight(c),
                accents: Vec::new(),
                upper: c.is_uppercase(),
            });
        }

        Self { raw: name, elements }
    }
}

impl Ord for NameKey<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        let (a, b) = (&self.elements, &other.elements);

        a.iter()
            .map(|e| e.primary)
            .cmp(b.iter().map(|e| e.primary))
            .then_with(|| a.iter().map(|e| &e.accents).cmp(b.iter().map(|e| &e.accents)))
            .then_with(|| a.iter().map(|e| e.upper).cmp(b.iter().map(|e| e.upper)))
            .then_with(|| self.raw.cmp(other.raw))
    }
}

impl PartialOrd for NameKey<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

fn primary_weight(c: char) -> (Group, u32) {
    if c.is_whitespace() {
        return (Group::Space, c as u32);
    }
    if let Some(digit) = c.to_digit(10) {
        return (Group::Digit, digit);
    }
    if c.is_alphanumeric() {
        // 非 ASCII 数字（如 `٣`）与字母同类，按码位比较
        let folded = c.to_lowercase().next().unwrap_or(c);
        return (Group::Letter, folded as u32);
    }
    match ASCII_PUNCT_ORDER.find(c) {
        Some(pos) => (Group::Punct, pos as u32),
        None => (Group::Punct, 0x100 + c as u32),
    }
}
