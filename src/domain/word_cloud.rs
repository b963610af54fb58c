//! Frequency-weighted word cloud layout.
//!
//! The cloud is computed as a list of positioned words on a fixed canvas so
//! it can be painted by any front end (the egui view scales it down to the
//! display width) or serialized for the CLI.
//!
//! Layout follows the classic greedy approach: words are taken in order of
//! decreasing frequency, the font size shrinks with relative frequency, and
//! each word is placed along a spiral from the canvas centre at the first
//! position that does not collide with an already placed word. Collision
//! checks use a summed-area table over a coarse occupancy grid.

use crate::domain::article::Article;
use crate::domain::stopwords::is_stopword;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub const CANVAS_WIDTH: u32 = 400;
pub const CANVAS_HEIGHT: u32 = 400;
pub const DISPLAY_WIDTH: f32 = 250.0;
pub const BACKGROUND_WHITE: [u8; 3] = [255, 255, 255];

/// Occupancy grid resolution in pixels.
const CELL: u32 = 2;
/// Average glyph advance relative to the font size.
const GLYPH_WIDTH_RATIO: f32 = 0.55;
const LINE_HEIGHT_RATIO: f32 = 1.15;

/// Sampled from the viridis colormap.
const PALETTE: &[[u8; 3]] = &[
    [68, 1, 84],
    [72, 40, 120],
    [62, 74, 137],
    [49, 104, 142],
    [38, 130, 142],
    [31, 158, 137],
    [53, 183, 121],
    [110, 206, 88],
    [181, 222, 43],
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedWord {
    pub text: String,
    /// Normalized frequency in (0, 1].
    pub weight: f32,
    pub font_size: f32,
    /// Top-left corner of the bounding box, canvas pixels.
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Rotated 90 degrees counter-clockwise.
    pub vertical: bool,
    pub color: [u8; 3],
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordCloud {
    pub width: u32,
    pub height: u32,
    pub background: [u8; 3],
    pub words: Vec<PlacedWord>,
}

impl WordCloud {
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The `n` heaviest words, heaviest first.
    pub fn top_words(&self, n: usize) -> Vec<&str> {
        self.words.iter().take(n).map(|w| w.text.as_str()).collect()
    }
}

/// Split text into words, drop stop words and numbers, and return
/// normalized frequencies sorted heaviest first (ties in first-seen order).
pub fn word_frequencies(text: &str) -> Vec<(String, f32)> {
    struct Tally {
        count: usize,
        first_seen: usize,
        casings: Vec<(String, usize)>,
    }

    let mut tallies: HashMap<String, Tally> = HashMap::new();

    for (position, token) in tokenize(text).into_iter().enumerate() {
        if is_stopword(&token) || token.chars().all(|c| c.is_ascii_digit()) {
            continue;
        }
        let tally = tallies.entry(token.to_lowercase()).or_insert(Tally {
            count: 0,
            first_seen: position,
            casings: Vec::new(),
        });
        tally.count += 1;
        match tally.casings.iter_mut().find(|(form, _)| *form == token) {
            Some((_, n)) => *n += 1,
            None => tally.casings.push((token, 1)),
        }
    }

    // Fold plurals into their singular when both appear.
    let plurals: Vec<String> = tallies
        .keys()
        .filter(|k| k.ends_with('s') && !k.ends_with("ss") && k.len() > 3)
        .filter(|k| tallies.contains_key(&k[..k.len() - 1]))
        .cloned()
        .collect();
    for plural in plurals {
        if let Some(tally) = tallies.remove(&plural) {
            if let Some(singular) = tallies.get_mut(&plural[..plural.len() - 1]) {
                singular.count += tally.count;
                singular.first_seen = singular.first_seen.min(tally.first_seen);
            }
        }
    }

    let mut ordered: Vec<(String, usize, usize)> = tallies
        .into_values()
        .map(|t| {
            let mut display = t.casings[0].clone();
            for casing in &t.casings[1..] {
                if casing.1 > display.1 {
                    display = casing.clone();
                }
            }
            (display.0, t.count, t.first_seen)
        })
        .collect();
    ordered.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));

    let Some(max) = ordered.first().map(|(_, count, _)| *count as f32) else {
        return Vec::new();
    };

    ordered
        .into_iter()
        .map(|(word, count, _)| (word, count as f32 / max))
        .collect()
}

/// Words of at least two characters made of alphanumerics and apostrophes,
/// with possessive "'s" removed.
fn tokenize(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();

    let mut flush = |current: &mut String| {
        let trimmed = current.trim_matches('\'');
        let word = trimmed
            .strip_suffix("'s")
            .or_else(|| trimmed.strip_suffix("'S"))
            .unwrap_or(trimmed);
        if word.chars().count() >= 2 {
            tokens.push(word.to_string());
        }
        current.clear();
    };

    for c in text.chars() {
        let c = if c == '\u{2019}' { '\'' } else { c };
        if c.is_alphanumeric() || c == '\'' {
            current.push(c);
        } else if !current.is_empty() {
            flush(&mut current);
        }
    }
    if !current.is_empty() {
        flush(&mut current);
    }

    tokens
}

/// Builder for word cloud layouts.
#[derive(Debug, Clone)]
pub struct WordCloudBuilder {
    pub width: u32,
    pub height: u32,
    pub max_words: usize,
    pub min_font_size: f32,
    pub max_font_size: f32,
    pub font_step: f32,
    pub relative_scaling: f32,
    pub prefer_horizontal: f64,
    pub seed: u64,
}

impl Default for WordCloudBuilder {
    fn default() -> Self {
        Self {
            width: CANVAS_WIDTH,
            height: CANVAS_HEIGHT,
            max_words: 200,
            min_font_size: 10.0,
            max_font_size: 120.0,
            font_step: 2.0,
            relative_scaling: 0.5,
            prefer_horizontal: 0.9,
            seed: 42,
        }
    }
}

impl WordCloudBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn max_words(mut self, max_words: usize) -> Self {
        self.max_words = max_words;
        self
    }

    /// Cloud of the article body; a missing body yields an empty cloud.
    pub fn build(&self, article: &Article) -> WordCloud {
        self.generate(article.body().unwrap_or(" "))
    }

    pub fn generate(&self, text: &str) -> WordCloud {
        let frequencies = word_frequencies(text);
        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut grid = OccupancyGrid::new(self.width / CELL, self.height / CELL);
        let mut words = Vec::new();

        let mut font_size = self.max_font_size;
        let mut last_weight = 1.0_f32;

        'words: for (text, weight) in frequencies.into_iter().take(self.max_words) {
            if self.relative_scaling > 0.0 {
                font_size = ((self.relative_scaling * weight / last_weight
                    + (1.0 - self.relative_scaling))
                    * font_size)
                    .round();
            }
            let mut vertical = !rng.random_bool(self.prefer_horizontal);
            let phase = rng.random::<f32>() * std::f32::consts::TAU;

            let placement = loop {
                if font_size < self.min_font_size {
                    break 'words;
                }
                if let Some(spot) = self.find_spot(&grid, &text, font_size, vertical, phase) {
                    break spot;
                }
                // Try the other orientation before shrinking.
                if let Some(spot) = self.find_spot(&grid, &text, font_size, !vertical, phase) {
                    vertical = !vertical;
                    break spot;
                }
                font_size -= self.font_step;
            };

            grid.occupy(&placement);
            words.push(PlacedWord {
                color: PALETTE[rng.random_range(0..PALETTE.len())],
                text,
                weight,
                font_size,
                x: (placement.col * CELL) as f32,
                y: (placement.row * CELL) as f32,
                width: placement.pixel_width,
                height: placement.pixel_height,
                vertical,
            });
            last_weight = weight;
        }

        WordCloud {
            width: self.width,
            height: self.height,
            background: BACKGROUND_WHITE,
            words,
        }
    }

    fn find_spot(
        &self,
        grid: &OccupancyGrid,
        text: &str,
        font_size: f32,
        vertical: bool,
        phase: f32,
    ) -> Option<Placement> {
        let run = text.chars().count() as f32 * font_size * GLYPH_WIDTH_RATIO;
        let line = font_size * LINE_HEIGHT_RATIO;
        let (pixel_width, pixel_height) = if vertical { (line, run) } else { (run, line) };

        let cols = (pixel_width / CELL as f32).ceil() as u32;
        let rows = (pixel_height / CELL as f32).ceil() as u32;
        if cols == 0 || rows == 0 || cols > grid.cols || rows > grid.rows {
            return None;
        }

        let center_x = grid.cols as f32 / 2.0 - cols as f32 / 2.0;
        let center_y = grid.rows as f32 / 2.0 - rows as f32 / 2.0;
        let max_radius = (grid.cols as f32).hypot(grid.rows as f32) / 2.0;

        let mut theta = 0.0_f32;
        loop {
            let radius = 0.5 * theta;
            if radius > max_radius {
                return None;
            }
            let col = (center_x + radius * (theta + phase).cos()).round();
            let row = (center_y + radius * (theta + phase).sin()).round();
            if col >= 0.0 && row >= 0.0 {
                let (col, row) = (col as u32, row as u32);
                if col + cols <= grid.cols && row + rows <= grid.rows && grid.is_free(col, row, cols, rows) {
                    return Some(Placement {
                        col,
                        row,
                        cols,
                        rows,
                        pixel_width,
                        pixel_height,
                    });
                }
            }
            theta += 0.1;
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Placement {
    col: u32,
    row: u32,
    cols: u32,
    rows: u32,
    pixel_width: f32,
    pixel_height: f32,
}

/// Coarse occupancy grid with a summed-area table for O(1) box queries.
struct OccupancyGrid {
    cols: u32,
    rows: u32,
    occupied: Vec<bool>,
    /// (cols + 1) x (rows + 1) prefix sums.
    integral: Vec<u32>,
}

impl OccupancyGrid {
    fn new(cols: u32, rows: u32) -> Self {
        Self {
            cols,
            rows,
            occupied: vec![false; (cols * rows) as usize],
            integral: vec![0; ((cols + 1) * (rows + 1)) as usize],
        }
    }

    fn is_free(&self, col: u32, row: u32, cols: u32, rows: u32) -> bool {
        let stride = self.cols + 1;
        let at = |c: u32, r: u32| self.integral[(r * stride + c) as usize];
        let (c1, r1) = (col + cols, row + rows);
        at(c1, r1) + at(col, row) == at(col, r1) + at(c1, row)
    }

    fn occupy(&mut self, placement: &Placement) {
        for r in placement.row..placement.row + placement.rows {
            for c in placement.col..placement.col + placement.cols {
                self.occupied[(r * self.cols + c) as usize] = true;
            }
        }
        self.rebuild_integral();
    }

    fn rebuild_integral(&mut self) {
        let stride = self.cols + 1;
        for r in 0..self.rows {
            let mut row_sum = 0;
            for c in 0..self.cols {
                row_sum += self.occupied[(r * self.cols + c) as usize] as u32;
                let above = self.integral[(r * stride + c + 1) as usize];
                self.integral[((r + 1) * stride + c + 1) as usize] = above + row_sum;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEXT: &str = "Climate talks resume in Geneva. Climate negotiators say the climate \
        fund needs money. Ocean levels rise; oceans warm. Funding for the fund remains uncertain, \
        negotiators said on Tuesday.";

    fn overlaps(a: &PlacedWord, b: &PlacedWord) -> bool {
        a.x < b.x + b.width && b.x < a.x + a.width && a.y < b.y + b.height && b.y < a.y + a.height
    }

    #[test]
    fn test_frequencies_drop_stopwords_and_merge_plurals() {
        let freqs = word_frequencies(TEXT);
        assert_eq!(freqs[0].0, "Climate");
        assert_eq!(freqs[0].1, 1.0);
        assert!(freqs.iter().all(|(w, _)| !is_stopword(w)));
        assert!(freqs.iter().any(|(w, _)| w == "Ocean"));
        assert!(!freqs.iter().any(|(w, _)| w == "oceans"));
        let ocean = freqs.iter().find(|(w, _)| w == "Ocean").map(|(_, f)| *f);
        assert_eq!(ocean, Some(2.0 / 3.0));
    }

    #[test]
    fn test_tokenizer_strips_possessives_and_numbers() {
        let freqs = word_frequencies("NASA's rover drove 2024 metres. NASA rover");
        let words: Vec<_> = freqs.iter().map(|(w, _)| w.as_str()).collect();
        assert_eq!(words[0], "NASA");
        assert!(!words.contains(&"2024"));
        assert!(!words.contains(&"NASA's"));
    }

    #[test]
    fn test_blank_body_gives_empty_cloud() {
        let cloud = WordCloudBuilder::new().build(&Article::default());
        assert!(cloud.is_empty());
        assert_eq!((cloud.width, cloud.height), (400, 400));
        assert_eq!(cloud.background, BACKGROUND_WHITE);
    }

    #[test]
    fn test_layout_fits_canvas_without_overlap() {
        let cloud = WordCloudBuilder::new().generate(TEXT);
        assert!(!cloud.is_empty());
        for (i, a) in cloud.words.iter().enumerate() {
            assert!(a.x >= 0.0 && a.y >= 0.0);
            assert!(a.x + a.width <= 400.0 && a.y + a.height <= 400.0);
            for b in &cloud.words[i + 1..] {
                assert!(!overlaps(a, b), "{} overlaps {}", a.text, b.text);
            }
        }
    }

    #[test]
    fn test_heaviest_word_is_largest_and_layout_is_deterministic() {
        let builder = WordCloudBuilder::new().seed(7);
        let first = builder.generate(TEXT);
        let second = builder.generate(TEXT);
        assert_eq!(first, second);

        assert_eq!(first.top_words(1), vec!["Climate"]);
        let biggest = first.words.iter().map(|w| w.font_size).fold(0.0, f32::max);
        assert_eq!(first.words[0].font_size, biggest);
    }

    #[test]
    fn test_max_words_is_respected() {
        let cloud = WordCloudBuilder::new().max_words(3).generate(TEXT);
        assert!(cloud.words.len() <= 3);
    }
}
