//! Run-length encoded style storage.
//!
//! A [`RunArray`] holds one logical element per character but stores
//! consecutive equal elements as a single run. Adjacent runs never hold equal
//! values; every mutating helper re-coalesces at its seams.

use std::ops::Range;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Run<S> {
    value: S,
    count: usize,
}

/// Run-length encoded sequence of `S`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunArray<S> {
    runs: Vec<Run<S>>,
    len: usize,
}

impl<S> Default for RunArray<S> {
    fn default() -> Self {
        Self {
            runs: Vec::new(),
            len: 0,
        }
    }
}

impl<S: Clone + PartialEq> RunArray<S> {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Build an array of `count` copies of `value`.
    #[must_use]
    pub fn filled(value: S, count: usize) -> Self {
        let mut runs = Self::new();
        runs.push_n(value, count);
        runs
    }

    /// Number of logical elements.
    #[must_use]
    pub fn len(&self) -> usize { self.len }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.len == 0 }

    /// Number of stored runs.
    #[must_use]
    pub fn run_count(&self) -> usize { self.runs.len() }

    /// Iterate over `(value, count)` pairs.
    pub fn runs(&self) -> impl Iterator<Item = (&S, usize)> {
        self.runs.iter().map(|r| (&r.value, r.count))
    }

    /// Element at `index`, or `None` when out of bounds.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&S> {
        let (run, _) = self.locate(index)?;
        Some(&self.runs[run].value)
    }

    #[must_use]
    pub fn first(&self) -> Option<&S> { self.runs.first().map(|r| &r.value) }

    #[must_use]
    pub fn last(&self) -> Option<&S> { self.runs.last().map(|r| &r.value) }

    /// Append a single element.
    pub fn push(&mut self, value: S) { self.push_n(value, 1); }

    /// Append `count` copies of `value`.
    pub fn push_n(&mut self, value: S, count: usize) {
        if count == 0 {
            return;
        }
        self.len += count;
        if let Some(last) = self.runs.last_mut()
            && last.value == value
        {
            last.count += count;
            return;
        }
        self.runs.push(Run { value, count });
    }

    /// Append every element of `other`.
    pub fn extend_from(&mut self, other: &Self) {
        for run in &other.runs {
            self.push_n(run.value.clone(), run.count);
        }
    }

    /// Copy of the elements in `range`.
    ///
    /// # Panics
    /// Panics if `range` is out of bounds.
    #[must_use]
    pub fn slice(&self, range: Range<usize>) -> Self {
        assert!(
            range.start <= range.end && range.end <= self.len,
            "run slice {range:?} out of bounds for length {}",
            self.len
        );
        let mut out = Self::new();
        if range.is_empty() {
            return out;
        }
        let mut pos = 0;
        for run in &self.runs {
            let run_end = pos + run.count;
            let start = range.start.max(pos);
            let end = range.end.min(run_end);
            if start < end {
                out.push_n(run.value.clone(), end - start);
            }
            if run_end >= range.end {
                break;
            }
            pos = run_end;
        }
        out
    }

    /// Replace the elements in `range` with `replacement`.
    ///
    /// # Panics
    /// Panics if `range` is out of bounds.
    pub fn splice(&mut self, range: Range<usize>, replacement: &Self) {
        assert!(
            range.start <= range.end && range.end <= self.len,
            "run splice {range:?} out of bounds for length {}",
            self.len
        );
        let tail = self.slice(range.end..self.len);
        let head = self.slice(0..range.start);
        *self = head;
        self.extend_from(replacement);
        self.extend_from(&tail);
    }

    /// Iterate over every logical element.
    pub fn iter(&self) -> impl Iterator<Item = &S> {
        self.runs
            .iter()
            .flat_map(|r| std::iter::repeat_n(&r.value, r.count))
    }

    fn locate(&self, index: usize) -> Option<(usize, usize)> {
        if index >= self.len {
            return None;
        }
        let mut pos = 0;
        for (i, run) in self.runs.iter().enumerate() {
            if index < pos + run.count {
                return Some((i, index - pos));
            }
            pos += run.count;
        }
        None
    }
}

impl<S: Clone + PartialEq> FromIterator<S> for RunArray<S> {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut runs = Self::new();
        for value in iter {
            runs.push(value);
        }
        runs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> RunArray<char> { "aaabbc".chars().collect() }

    #[test]
    fn push_coalesces_equal_neighbours() {
        let runs = sample();
        assert_eq!(runs.len(), 6);
        assert_eq!(runs.run_count(), 3);
        assert_eq!(
            runs.runs().collect::<Vec<_>>(),
            vec![(&'a', 3), (&'b', 2), (&'c', 1)]
        );
    }

    #[test]
    fn push_n_zero_is_noop() {
        let mut runs = sample();
        runs.push_n('z', 0);
        assert_eq!(runs, sample());
    }

    #[test]
    fn get_walks_runs() {
        let runs = sample();
        assert_eq!(runs.get(0), Some(&'a'));
        assert_eq!(runs.get(3), Some(&'b'));
        assert_eq!(runs.get(5), Some(&'c'));
        assert_eq!(runs.get(6), None);
    }

    #[test]
    fn slice_cuts_inside_runs() {
        let runs = sample();
        let cut = runs.slice(2..5);
        assert_eq!(cut.iter().collect::<String>(), "abb");
        assert_eq!(cut.run_count(), 2);
        assert!(runs.slice(4..4).is_empty());
    }

    #[test]
    fn splice_recoalesces_seams() {
        let mut runs = sample();
        runs.splice(3..5, &RunArray::filled('a', 2));
        assert_eq!(runs.iter().collect::<String>(), "aaaaac");
        assert_eq!(runs.run_count(), 2);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn slice_rejects_out_of_bounds() {
        let _ = sample().slice(4..9);
    }
}
