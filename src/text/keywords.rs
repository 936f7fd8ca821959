//! Keyword highlight rectangles
//!
//! For every occurrence of a keyword in a placed line, a rectangle covering
//! the token that starts at the match. The rectangles are collected into a
//! [`KeywordIndex`] for a later highlight pass.

use std::collections::BTreeMap;
use std::collections::btree_map;

use crate::types::Rect;

use super::metrics::{Font, TextMetrics};
use super::wrap::PlacedLine;

/// Characters that end a highlighted token, besides whitespace
pub const TOKEN_PUNCTUATION: &[char] = &[
    ',', '.', ';', ':', '!', '?', '"', '\'', '(', ')', '[', ']', '{', '}',
];

/// Extra pixels on the left edge of every highlight
pub const HIGHLIGHT_PAD: f64 = 1.0;

/// Where one keyword occurrence sits on the canvas
#[derive(Debug, Clone, PartialEq)]
pub struct BoundingBox {
    pub keyword: String,
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl BoundingBox {
    pub fn rect(&self) -> Rect {
        Rect::new(self.left, self.top, self.right, self.bottom)
    }
}

/// Highlight rectangles grouped by keyword, in keyword order
#[derive(Debug, Clone, PartialEq, Default)]
pub struct KeywordIndex {
    boxes: BTreeMap<String, Vec<BoundingBox>>,
}

impl KeywordIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, bbox: BoundingBox) {
        self.boxes.entry(bbox.keyword.clone()).or_default().push(bbox);
    }

    /// Append everything from `other`, after what is already here
    pub fn merge(&mut self, other: KeywordIndex) {
        for (keyword, boxes) in other.boxes {
            self.boxes.entry(keyword).or_default().extend(boxes);
        }
    }

    pub fn get(&self, keyword: &str) -> &[BoundingBox] {
        self.boxes.get(keyword).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn keywords(&self) -> impl Iterator<Item = &str> {
        self.boxes.keys().map(String::as_str)
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, Vec<BoundingBox>> {
        self.boxes.iter()
    }

    /// Total number of rectangles
    pub fn len(&self) -> usize {
        self.boxes.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    pub fn clear(&mut self) {
        self.boxes.clear();
    }

    pub fn into_map(self) -> BTreeMap<String, Vec<BoundingBox>> {
        self.boxes
    }
}

impl<'a> IntoIterator for &'a KeywordIndex {
    type Item = (&'a String, &'a Vec<BoundingBox>);
    type IntoIter = btree_map::Iter<'a, String, Vec<BoundingBox>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn is_token_boundary(c: char) -> bool {
    c.is_whitespace() || TOKEN_PUNCTUATION.contains(&c)
}

/// Byte offset where the token running through `text[from..]` ends
fn token_end(text: &str, from: usize) -> usize {
    text[from..]
        .find(is_token_boundary)
        .map(|offset| from + offset)
        .unwrap_or(text.len())
}

/// Find every non-overlapping occurrence of each keyword in `lines`.
///
/// Matching is case-sensitive. Empty and repeated keywords are ignored.
pub fn extract_keyword_boxes<M, K>(
    lines: &[PlacedLine],
    keywords: &[K],
    metrics: &M,
    font: &Font,
) -> KeywordIndex
where
    M: TextMetrics + ?Sized,
    K: AsRef<str>,
{
    let mut unique: Vec<&str> = Vec::with_capacity(keywords.len());
    for kw in keywords.iter().map(AsRef::as_ref) {
        if !kw.is_empty() && !unique.contains(&kw) {
            unique.push(kw);
        }
    }

    let mut index = KeywordIndex::new();
    for line in lines {
        let text = line.text.as_str();
        for &keyword in &unique {
            let mut from = 0;
            while let Some(offset) = text[from..].find(keyword) {
                let start = from + offset;
                let match_end = start + keyword.len();
                let end = token_end(text, match_end);

                let skip = metrics.width(&text[..start], font);
                let token = metrics.width(&text[start..end], font);
                let left = line.origin.x + skip;

                index.insert(BoundingBox {
                    keyword: keyword.to_string(),
                    left: left - HIGHLIGHT_PAD,
                    top: line.origin.y,
                    right: left + token,
                    bottom: line.origin.y + line.height,
                });

                from = match_end;
            }
        }
    }

    index
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::metrics::MonospaceMetrics;
    use crate::types::pt;

    fn placed(text: &str, x: f64, y: f64) -> PlacedLine {
        PlacedLine {
            text: text.to_string(),
            origin: pt(x, y),
            width: text.len() as f64 * 5.0,
            height: 12.0,
        }
    }

    const MONO: MonospaceMetrics = MonospaceMetrics { advance_ratio: 0.5 };

    fn font() -> Font {
        Font::new("mono", 10)
    }

    #[test]
    fn one_box_per_occurrence() {
        let lines = [placed("the fox and the dog", 10.0, 20.0), placed("the end", 10.0, 32.0)];
        let index = extract_keyword_boxes(&lines, &["the", "dog"], &MONO, &font());
        assert_eq!(index.get("the").len(), 3);
        assert_eq!(index.get("dog").len(), 1);
        assert_eq!(index.len(), 4);
    }

    #[test]
    fn no_match_is_empty() {
        let lines = [placed("nothing here", 0.0, 0.0)];
        let index = extract_keyword_boxes(&lines, &["fox"], &MONO, &font());
        assert!(index.is_empty());
        assert_eq!(index.keywords().count(), 0);
    }

    #[test]
    fn box_covers_the_whole_token() {
        let lines = [placed("quick foxes, run", 100.0, 40.0)];
        let index = extract_keyword_boxes(&lines, &["fox"], &MONO, &font());
        let bbox = &index.get("fox")[0];
        // "quick " is 30px, "foxes" is 25px
        assert_eq!(bbox.rect(), Rect::new(129.0, 40.0, 155.0, 52.0));
    }

    #[test]
    fn matches_do_not_overlap() {
        let lines = [placed("aaaa", 0.0, 0.0)];
        let index = extract_keyword_boxes(&lines, &["aa"], &MONO, &font());
        assert_eq!(index.get("aa").len(), 2);
    }

    #[test]
    fn empty_and_repeated_keywords_are_ignored() {
        let lines = [placed("fox", 0.0, 0.0)];
        let index = extract_keyword_boxes(&lines, &["", "fox", "fox"], &MONO, &font());
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn merge_appends_in_order() {
        let lines_a = [placed("fox", 0.0, 0.0)];
        let lines_b = [placed("fox", 0.0, 50.0)];
        let m = MonospaceMetrics::default();
        let mut index = extract_keyword_boxes(&lines_a, &["fox"], &m, &font());
        index.merge(extract_keyword_boxes(&lines_b, &["fox"], &m, &font()));
        let tops: Vec<f64> = index.get("fox").iter().map(|b| b.top).collect();
        assert_eq!(tops, vec![0.0, 50.0]);
    }
}
