//! Longest-common-subsequence line diff
//!
//! ## Algorithm
//!
//! 1. Split both texts into lines, keeping each line's terminator so the runs can be
//!    concatenated back into the original texts.
//! 2. Strip the common prefix and suffix. Neither can take part in a shorter edit
//!    script, so only the differing middle is aligned.
//! 3. Fill a suffix table `lcs[i][j]` = length of the LCS of `a[i..]` and `b[j..]`.
//! 4. Walk forward from `(0, 0)`: equal lines are kept; otherwise step in whichever
//!    direction keeps the LCS length, preferring a deletion on ties. Preferring one
//!    direction keeps removals of a changed block ahead of its additions instead of
//!    interleaving them.
//!
//! The middle section costs `O(n * m)` time. A full table is only built while it fits
//! in [`MAX_TABLE_CELLS`]; larger inputs are first split in half Hirschberg-style, using
//! two rolling rows to find where the halves of `a` meet in `b`, so memory stays linear
//! in the input size.

use derive_new::new;
use std::fmt::Display;

/// Largest LCS table built in one piece
pub const MAX_TABLE_CELLS: usize = 1 << 20;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit<T> {
    Delete { value: T },
    Insert { value: T },
    Equal { value: T },
}

impl<T> Edit<T> {
    pub fn kind(&self) -> ChangeKind {
        match self {
            Edit::Delete { .. } => ChangeKind::Removed,
            Edit::Insert { .. } => ChangeKind::Added,
            Edit::Equal { .. } => ChangeKind::Unchanged,
        }
    }

    pub fn value(&self) -> &T {
        match self {
            Edit::Delete { value } | Edit::Insert { value } | Edit::Equal { value } => value,
        }
    }
}

impl<T> Display for Edit<T>
where
    T: Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.kind().marker(), self.value())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct LcsDiff<'d, T> {
    a: &'d [T],
    b: &'d [T],
}

impl<T: Eq + Clone> LcsDiff<'_, T> {
    pub fn diff(&self) -> Vec<Edit<T>> {
        self.diff_within(MAX_TABLE_CELLS)
    }

    fn diff_within(&self, max_cells: usize) -> Vec<Edit<T>> {
        let prefix = self
            .a
            .iter()
            .zip(self.b)
            .take_while(|(x, y)| x == y)
            .count();
        let suffix = self.a[prefix..]
            .iter()
            .rev()
            .zip(self.b[prefix..].iter().rev())
            .take_while(|(x, y)| x == y)
            .count();

        let a_mid = &self.a[prefix..self.a.len() - suffix];
        let b_mid = &self.b[prefix..self.b.len() - suffix];

        let mut edits = Vec::with_capacity(self.a.len().max(self.b.len()));
        edits.extend(self.a[..prefix].iter().map(|value| Edit::Equal {
            value: value.clone(),
        }));
        Self::align(a_mid, b_mid, max_cells, &mut edits);
        edits.extend(
            self.a[self.a.len() - suffix..]
                .iter()
                .map(|value| Edit::Equal {
                    value: value.clone(),
                }),
        );

        edits
    }

    fn align(a: &[T], b: &[T], max_cells: usize, edits: &mut Vec<Edit<T>>) {
        if a.len() < 2 || b.is_empty() || (a.len() + 1) * (b.len() + 1) <= max_cells {
            return Self::align_with_table(a, b, edits);
        }

        let mid = a.len() / 2;
        let forward = Self::forward_row(&a[..mid], b);
        let backward = Self::backward_row(&a[mid..], b);

        // first split point with the best total keeps deletions ahead of insertions
        let split = (0..=b.len()).fold(0, |best, j| {
            if forward[j] + backward[j] > forward[best] + backward[best] {
                j
            } else {
                best
            }
        });

        Self::align(&a[..mid], &b[..split], max_cells, edits);
        Self::align(&a[mid..], &b[split..], max_cells, edits);
    }

    /// `row[j]` = length of the LCS of `a` and `b[..j]`
    fn forward_row(a: &[T], b: &[T]) -> Vec<usize> {
        let mut prev = vec![0usize; b.len() + 1];
        let mut cur = vec![0usize; b.len() + 1];

        for x in a {
            for j in 1..=b.len() {
                cur[j] = if *x == b[j - 1] {
                    prev[j - 1] + 1
                } else {
                    prev[j].max(cur[j - 1])
                };
            }
            std::mem::swap(&mut prev, &mut cur);
        }

        prev
    }

    /// `row[j]` = length of the LCS of `a` and `b[j..]`
    fn backward_row(a: &[T], b: &[T]) -> Vec<usize> {
        let m = b.len();
        let mut prev = vec![0usize; m + 1];
        let mut cur = vec![0usize; m + 1];

        for x in a.iter().rev() {
            for j in (0..m).rev() {
                cur[j] = if *x == b[j] {
                    prev[j + 1] + 1
                } else {
                    prev[j].max(cur[j + 1])
                };
            }
            std::mem::swap(&mut prev, &mut cur);
        }

        prev
    }

    fn align_with_table(a: &[T], b: &[T], edits: &mut Vec<Edit<T>>) {
        let (n, m) = (a.len(), b.len());
        let width = m + 1;

        let mut lcs = vec![0usize; (n + 1) * width];
        for i in (0..n).rev() {
            for j in (0..m).rev() {
                lcs[i * width + j] = if a[i] == b[j] {
                    lcs[(i + 1) * width + j + 1] + 1
                } else {
                    lcs[(i + 1) * width + j].max(lcs[i * width + j + 1])
                };
            }
        }

        let (mut i, mut j) = (0, 0);
        while i < n && j < m {
            if a[i] == b[j] {
                edits.push(Edit::Equal {
                    value: a[i].clone(),
                });
                i += 1;
                j += 1;
            } else if lcs[(i + 1) * width + j] >= lcs[i * width + j + 1] {
                edits.push(Edit::Delete {
                    value: a[i].clone(),
                });
                i += 1;
            } else {
                edits.push(Edit::Insert {
                    value: b[j].clone(),
                });
                j += 1;
            }
        }

        edits.extend(a[i..].iter().map(|value| Edit::Delete {
            value: value.clone(),
        }));
        edits.extend(b[j..].iter().map(|value| Edit::Insert {
            value: value.clone(),
        }));
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeKind {
    Unchanged,
    Added,
    Removed,
}

impl ChangeKind {
    pub fn marker(&self) -> char {
        match self {
            ChangeKind::Unchanged => ' ',
            ChangeKind::Added => '+',
            ChangeKind::Removed => '-',
        }
    }
}

/// A maximal run of consecutive lines sharing one change kind
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct DiffRun {
    pub kind: ChangeKind,
    pub text: String,
}

impl DiffRun {
    /// The run's lines, terminators included
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.text.split_inclusive('\n')
    }
}

/// Compute the line edit script turning `old` into `new`, grouped into runs
///
/// Concatenating the `Unchanged` and `Removed` runs yields `old`; concatenating the
/// `Unchanged` and `Added` runs yields `new`. Two empty inputs produce no runs.
pub fn diff_lines(old: &str, new: &str) -> Vec<DiffRun> {
    let a = old.split_inclusive('\n').collect::<Vec<_>>();
    let b = new.split_inclusive('\n').collect::<Vec<_>>();

    LcsDiff::new(&a, &b)
        .diff()
        .into_iter()
        .fold(Vec::<DiffRun>::new(), |mut runs, edit| {
            match runs.last_mut() {
                Some(run) if run.kind == edit.kind() => run.text.push_str(edit.value()),
                _ => runs.push(DiffRun::new(edit.kind(), edit.value().to_string())),
            }
            runs
        })
}
