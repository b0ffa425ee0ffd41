//! Stat-number count-up.
//!
//! A stat such as `1,200+` or `$3.5k` is split into prefix, numeric target and
//! suffix. After the element activates, the browser glue re-renders it each
//! frame from zero to the target along a cubic ease-out. The final frame
//! restores the author's text verbatim, so leading zeros and digits past
//! `f64` precision survive the animation.
//!
//! Commas are read as thousands separators only when they group the integer
//! part in threes. Anything else (`2,5`, `12,34`) is not a counter and is left
//! alone.

#[cfg(test)]
#[path = "counter_test.rs"]
mod counter_test;

use crate::surface::Surface;

#[derive(Clone, Debug, PartialEq)]
pub struct StatCounter {
    original: String,
    prefix: String,
    target: f64,
    decimals: usize,
    grouped: bool,
    suffix: String,
}

impl StatCounter {
    /// Parse the first number in `text`. `None` when there is no number or
    /// its commas are not thousands separators.
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        let start = text.find(|c: char| c.is_ascii_digit())?;
        let len = text[start..]
            .find(|c: char| !(c.is_ascii_digit() || c == ',' || c == '.'))
            .unwrap_or(text.len() - start);
        let raw = text[start..start + len].trim_end_matches(['.', ',']);
        if !is_grouped_in_threes(raw) {
            return None;
        }
        let digits: String = raw.chars().filter(|c| *c != ',').collect();
        let Ok(target) = digits.parse::<f64>() else {
            return None;
        };
        let decimals = digits.split_once('.').map_or(0, |(_, frac)| frac.len());
        Some(Self {
            original: text.to_owned(),
            prefix: text[..start].to_owned(),
            target,
            decimals,
            grouped: raw.contains(','),
            suffix: text[start + raw.len()..].to_owned(),
        })
    }

    #[must_use]
    pub fn target(&self) -> f64 {
        self.target
    }

    /// Render the counter at `progress` in `[0, 1]`. Full progress returns
    /// the parsed text unchanged.
    #[must_use]
    pub fn format_at(&self, progress: f64) -> String {
        if progress >= 1.0 {
            return self.original.clone();
        }
        let value = self.target * ease_out_cubic(progress.max(0.0));
        let mut number = format!("{value:.prec$}", prec = self.decimals);
        if self.grouped {
            number = match number.split_once('.') {
                Some((whole, frac)) => format!("{}.{frac}", group_thousands(whole)),
                None => group_thousands(&number),
            };
        }
        format!("{}{number}{}", self.prefix, self.suffix)
    }
}

/// The counter for a stat element, if it should count up at all.
///
/// Elements with child markup (`<span>%</span>`) are skipped: rewriting their
/// text would flatten the children.
pub fn counter_for<S: Surface + ?Sized>(surface: &S) -> Option<StatCounter> {
    if surface.has_child_elements() {
        return None;
    }
    surface.text().as_deref().and_then(StatCounter::parse)
}

/// Fraction of the animation elapsed, clamped to `[0, 1]`.
#[must_use]
pub fn progress(elapsed_ms: u32, duration_ms: u32) -> f64 {
    if duration_ms == 0 {
        return 1.0;
    }
    (f64::from(elapsed_ms) / f64::from(duration_ms)).min(1.0)
}

#[must_use]
pub fn ease_out_cubic(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(3)
}

/// `true` when every comma in the integer part separates a group of three
/// digits and the fraction has none.
fn is_grouped_in_threes(raw: &str) -> bool {
    let (whole, frac) = raw.split_once('.').unwrap_or((raw, ""));
    if frac.contains(',') {
        return false;
    }
    let mut groups = whole.split(',');
    let first_ok = groups.next().is_some_and(|g| (1..=3).contains(&g.len()) || !whole.contains(','));
    first_ok && groups.all(|g| g.len() == 3)
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (len - index) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
