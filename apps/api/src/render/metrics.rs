//! Static font-metric tables for the two built-in PDF font families.
//!
//! Character widths are in em units (relative to font size), taken from the
//! standard Type 1 AFM files for Helvetica and Times-Roman. Static tables are
//! an approximation good enough for word-wrap and centering; exact kerning is
//! out of scope for resume layout.
//!
//! All tables cover ASCII 0x20..=0x7E (95 printable characters).
//! Index = (char as usize) - 32.

use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Font family enum
// ────────────────────────────────────────────────────────────────────────────

/// The built-in font families available to templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FontFamily {
    /// Clean Professional template — neutral sans-serif.
    Helvetica,
    /// Modern Executive template — classic serif.
    TimesRoman,
}

// ────────────────────────────────────────────────────────────────────────────
// Font metric table
// ────────────────────────────────────────────────────────────────────────────

/// Static character-width table for a font family.
///
/// All widths are in em units at 1em. `widths[i]` = width of ASCII character
/// `(i + 32)`, covering 0x20 (space) through 0x7E (~). Multiply by the font
/// size in points to get a width in points.
pub struct FontMetricTable {
    pub font: FontFamily,
    widths: [f32; 95],
    /// Fallback width for non-ASCII characters (codepoints > 0x7E).
    pub average_char_width: f32,
    pub space_width: f32,
}

impl FontMetricTable {
    /// Measures the rendered width of a string in em units.
    ///
    /// Non-ASCII characters fall back to `average_char_width`.
    pub fn measure_str(&self, s: &str) -> f32 {
        s.chars()
            .map(|c| {
                let code = c as usize;
                if (32..=126).contains(&code) {
                    self.widths[code - 32]
                } else {
                    self.average_char_width
                }
            })
            .sum()
    }

    /// Measures a string in points at the given font size.
    pub fn measure_pt(&self, s: &str, font_size_pt: f32) -> f32 {
        self.measure_str(s) * font_size_pt
    }

    /// Greedy word-wrap: splits `s` into lines no wider than `max_width_pt`
    /// at `font_size_pt`.
    ///
    /// A single word wider than the limit gets a line of its own rather than
    /// being broken mid-word. Empty input yields one empty line so blank
    /// lines keep their vertical space.
    pub fn wrap_line(&self, s: &str, font_size_pt: f32, max_width_pt: f32) -> Vec<String> {
        let words: Vec<&str> = s.split_whitespace().collect();
        if words.is_empty() {
            return vec![String::new()];
        }

        let space_pt = self.space_width * font_size_pt;
        let mut lines: Vec<String> = Vec::new();
        let mut current = String::new();
        let mut current_width = 0.0_f32;

        for word in words {
            let word_pt = self.measure_pt(word, font_size_pt);
            if current.is_empty() {
                current.push_str(word);
                current_width = word_pt;
            } else if current_width + space_pt + word_pt > max_width_pt {
                lines.push(std::mem::take(&mut current));
                current.push_str(word);
                current_width = word_pt;
            } else {
                current.push(' ');
                current.push_str(word);
                current_width += space_pt + word_pt;
            }
        }
        lines.push(current);
        lines
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Static width tables  (95 ASCII printable characters each)
// ────────────────────────────────────────────────────────────────────────────

/// Helvetica — standard AFM widths (thousandths of an em, scaled to em).
static HELVETICA_TABLE: FontMetricTable = FontMetricTable {
    font: FontFamily::Helvetica,
    #[rustfmt::skip]
    widths: [
        // sp     !      "      #      $      %      &      '      (      )      *      +      ,      -      .      /
        0.278, 0.278, 0.355, 0.556, 0.556, 0.889, 0.667, 0.191, 0.333, 0.333, 0.389, 0.584, 0.278, 0.333, 0.278, 0.278,
        // 0      1      2      3      4      5      6      7      8      9
        0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556,
        // :      ;      <      =      >      ?      @
        0.278, 0.278, 0.584, 0.584, 0.584, 0.556, 1.015,
        // A      B      C      D      E      F      G      H      I      J      K      L      M
        0.667, 0.667, 0.722, 0.722, 0.667, 0.611, 0.778, 0.722, 0.278, 0.500, 0.667, 0.556, 0.833,
        // N      O      P      Q      R      S      T      U      V      W      X      Y      Z
        0.722, 0.778, 0.667, 0.778, 0.722, 0.667, 0.611, 0.722, 0.667, 0.944, 0.667, 0.667, 0.611,
        // [      \      ]      ^      _      `
        0.278, 0.278, 0.278, 0.469, 0.556, 0.333,
        // a      b      c      d      e      f      g      h      i      j      k      l      m
        0.556, 0.556, 0.500, 0.556, 0.556, 0.278, 0.556, 0.556, 0.222, 0.222, 0.500, 0.222, 0.833,
        // n      o      p      q      r      s      t      u      v      w      x      y      z
        0.556, 0.556, 0.556, 0.556, 0.333, 0.500, 0.278, 0.556, 0.500, 0.722, 0.500, 0.500, 0.500,
        // {      |      }      ~
        0.334, 0.260, 0.334, 0.584,
    ],
    average_char_width: 0.536,
    space_width: 0.278,
};

/// Times-Roman — standard AFM widths.
static TIMES_ROMAN_TABLE: FontMetricTable = FontMetricTable {
    font: FontFamily::TimesRoman,
    #[rustfmt::skip]
    widths: [
        // sp     !      "      #      $      %      &      '      (      )      *      +      ,      -      .      /
        0.250, 0.333, 0.408, 0.500, 0.500, 0.833, 0.778, 0.180, 0.333, 0.333, 0.500, 0.564, 0.250, 0.333, 0.250, 0.278,
        // 0      1      2      3      4      5      6      7      8      9
        0.500, 0.500, 0.500, 0.500, 0.500, 0.500, 0.500, 0.500, 0.500, 0.500,
        // :      ;      <      =      >      ?      @
        0.278, 0.278, 0.564, 0.564, 0.564, 0.444, 0.921,
        // A      B      C      D      E      F      G      H      I      J      K      L      M
        0.722, 0.667, 0.667, 0.722, 0.611, 0.556, 0.722, 0.722, 0.333, 0.389, 0.722, 0.611, 0.889,
        // N      O      P      Q      R      S      T      U      V      W      X      Y      Z
        0.722, 0.722, 0.556, 0.722, 0.667, 0.556, 0.611, 0.722, 0.722, 0.944, 0.722, 0.722, 0.611,
        // [      \      ]      ^      _      `
        0.333, 0.278, 0.333, 0.469, 0.500, 0.333,
        // a      b      c      d      e      f      g      h      i      j      k      l      m
        0.444, 0.500, 0.444, 0.500, 0.444, 0.333, 0.500, 0.500, 0.278, 0.278, 0.500, 0.278, 0.778,
        // n      o      p      q      r      s      t      u      v      w      x      y      z
        0.500, 0.500, 0.500, 0.500, 0.333, 0.389, 0.278, 0.500, 0.500, 0.722, 0.500, 0.500, 0.444,
        // {      |      }      ~
        0.480, 0.200, 0.480, 0.541,
    ],
    average_char_width: 0.478,
    space_width: 0.250,
};

/// Returns the static metric table for a given font family.
pub fn get_metrics(font: FontFamily) -> &'static FontMetricTable {
    match font {
        FontFamily::Helvetica => &HELVETICA_TABLE,
        FontFamily::TimesRoman => &TIMES_ROMAN_TABLE,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_str_empty_returns_zero() {
        let metrics = get_metrics(FontFamily::Helvetica);
        assert_eq!(metrics.measure_str(""), 0.0);
    }

    #[test]
    fn test_measure_str_single_space() {
        let metrics = get_metrics(FontFamily::Helvetica);
        let width = metrics.measure_str(" ");
        assert!((width - 0.278).abs() < 1e-4, "space should be 0.278, got {width}");
    }

    #[test]
    fn test_measure_str_ascii_characters() {
        let metrics = get_metrics(FontFamily::Helvetica);
        // "Rust" = R(0.722) + u(0.556) + s(0.500) + t(0.278) = 2.056
        let width = metrics.measure_str("Rust");
        assert!((width - 2.056).abs() < 1e-3, "Rust should be ~2.056, got {width}");
    }

    #[test]
    fn test_measure_str_non_ascii_falls_back() {
        let metrics = get_metrics(FontFamily::Helvetica);
        let width = metrics.measure_str("é");
        assert!((width - metrics.average_char_width).abs() < 1e-4);
    }

    #[test]
    fn test_measure_pt_scales_with_font_size() {
        let metrics = get_metrics(FontFamily::TimesRoman);
        let at_10 = metrics.measure_pt("hello", 10.0);
        let at_20 = metrics.measure_pt("hello", 20.0);
        assert!((at_20 - 2.0 * at_10).abs() < 1e-3);
    }

    #[test]
    fn test_times_narrower_than_helvetica_for_lowercase() {
        let text = "a quick brown fox jumps over the lazy dog";
        let helv = get_metrics(FontFamily::Helvetica).measure_str(text);
        let times = get_metrics(FontFamily::TimesRoman).measure_str(text);
        assert!(times < helv, "Times lowercase should measure narrower");
    }

    #[test]
    fn test_wrap_line_short_text_stays_single() {
        let metrics = get_metrics(FontFamily::Helvetica);
        let lines = metrics.wrap_line("Short line", 10.0, 500.0);
        assert_eq!(lines, vec!["Short line"]);
    }

    #[test]
    fn test_wrap_line_empty_keeps_blank_line() {
        let metrics = get_metrics(FontFamily::Helvetica);
        assert_eq!(metrics.wrap_line("", 10.0, 500.0), vec![""]);
        assert_eq!(metrics.wrap_line("   ", 10.0, 500.0), vec![""]);
    }

    #[test]
    fn test_wrap_line_wraps_at_limit() {
        let metrics = get_metrics(FontFamily::Helvetica);
        let text = "word ".repeat(30);
        let lines = metrics.wrap_line(&text, 10.0, 100.0);
        assert!(lines.len() > 1, "30 words at 100pt width must wrap");
        for line in &lines {
            assert!(metrics.measure_pt(line, 10.0) <= 100.0 + 1e-3, "line '{line}' overflows");
        }
    }

    #[test]
    fn test_wrap_line_preserves_all_words() {
        let metrics = get_metrics(FontFamily::TimesRoman);
        let text = "Reduced p99 latency by forty percent under sustained production load across three regions";
        let lines = metrics.wrap_line(text, 10.0, 120.0);
        let rejoined = lines.join(" ");
        assert_eq!(
            rejoined.split_whitespace().collect::<Vec<_>>(),
            text.split_whitespace().collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_wrap_line_overlong_word_gets_own_line() {
        let metrics = get_metrics(FontFamily::Helvetica);
        let text = "a Supercalifragilisticexpialidocious b";
        let lines = metrics.wrap_line(text, 12.0, 60.0);
        assert!(lines.iter().any(|l| l == "Supercalifragilisticexpialidocious"));
    }
}
