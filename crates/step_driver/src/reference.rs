//! Straight-line implementations of every algorithm with the same counting
//! rules as the step sources. Used to check the animated drivers.

use std::cmp::Ordering;

use shared::{
    domain::{AlgorithmKind, SearchOutcome, Stats},
    error::VisualizerError,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference {
    pub values: Vec<i64>,
    pub stats: Stats,
    pub search: Option<SearchOutcome>,
}

pub fn run(
    kind: AlgorithmKind,
    values: &[i64],
    target: Option<i64>,
) -> Result<Reference, VisualizerError> {
    let mut values = values.to_vec();
    let mut stats = Stats::default();
    let mut search = None;

    match kind {
        AlgorithmKind::BubbleSort => bubble_sort(&mut values, &mut stats),
        AlgorithmKind::SelectionSort => selection_sort(&mut values, &mut stats),
        AlgorithmKind::InsertionSort => insertion_sort(&mut values, &mut stats),
        AlgorithmKind::MergeSort => {
            if !values.is_empty() {
                let end = values.len() - 1;
                merge_sort(&mut values, 0, end, &mut stats);
            }
        }
        AlgorithmKind::QuickSort => {
            if !values.is_empty() {
                let end = values.len() - 1;
                quick_sort(&mut values, 0, end, &mut stats);
            }
        }
        AlgorithmKind::BinarySearch => {
            let target = target.ok_or(VisualizerError::MissingTarget)?;
            values.sort_unstable();
            search = Some(binary_search(&values, target, &mut stats));
        }
    }

    Ok(Reference {
        values,
        stats,
        search,
    })
}

pub fn bubble_sort(a: &mut [i64], stats: &mut Stats) {
    let n = a.len();
    for i in 0..n {
        for j in 0..n - i - 1 {
            stats.comparisons += 1;
            if a[j] > a[j + 1] {
                a.swap(j, j + 1);
                stats.swaps += 1;
            }
        }
        stats.passes += 1;
    }
}

pub fn selection_sort(a: &mut [i64], stats: &mut Stats) {
    for i in 0..a.len() {
        let mut min = i;
        for j in i + 1..a.len() {
            stats.comparisons += 1;
            if a[j] < a[min] {
                min = j;
            }
        }
        if min != i {
            a.swap(i, min);
            stats.swaps += 1;
        }
        stats.passes += 1;
    }
}

pub fn insertion_sort(a: &mut [i64], stats: &mut Stats) {
    for i in 1..a.len() {
        let key = a[i];
        let mut j = i;
        while j > 0 {
            stats.comparisons += 1;
            if a[j - 1] <= key {
                break;
            }
            a[j] = a[j - 1];
            stats.shifts += 1;
            j -= 1;
        }
        a[j] = key;
        stats.passes += 1;
    }
}

pub fn merge_sort(a: &mut [i64], start: usize, end: usize, stats: &mut Stats) {
    if start >= end {
        return;
    }
    let mid = start + (end - start) / 2;
    merge_sort(a, start, mid, stats);
    merge_sort(a, mid + 1, end, stats);

    let left = a[start..=mid].to_vec();
    let right = a[mid + 1..=end].to_vec();
    let (mut i, mut j) = (0, 0);
    for slot in &mut a[start..=end] {
        let take_left = match (left.get(i), right.get(j)) {
            (Some(l), Some(r)) => {
                stats.comparisons += 1;
                l <= r
            }
            (Some(_), None) => true,
            _ => false,
        };
        if take_left {
            *slot = left[i];
            i += 1;
        } else {
            *slot = right[j];
            j += 1;
        }
        stats.overwrites += 1;
    }
}

pub fn quick_sort(a: &mut [i64], start: usize, end: usize, stats: &mut Stats) {
    if start >= end {
        return;
    }
    let pivot = a[end];
    let mut store = start;
    for scan in start..end {
        stats.comparisons += 1;
        if a[scan] < pivot {
            a.swap(scan, store);
            stats.swaps += 1;
            store += 1;
        }
    }
    a.swap(store, end);
    if store > start {
        quick_sort(a, start, store - 1, stats);
    }
    quick_sort(a, store + 1, end, stats);
}

/// `a` must be ascending.
pub fn binary_search(a: &[i64], target: i64, stats: &mut Stats) -> SearchOutcome {
    let Some(mut hi) = a.len().checked_sub(1) else {
        return SearchOutcome::NotFound { target };
    };
    let mut lo = 0;
    loop {
        let mid = lo + (hi - lo) / 2;
        stats.comparisons += 1;
        match a[mid].cmp(&target) {
            Ordering::Equal => return SearchOutcome::Found { target, index: mid },
            Ordering::Less if mid < hi => lo = mid + 1,
            Ordering::Greater if mid > lo => hi = mid - 1,
            _ => return SearchOutcome::NotFound { target },
        }
    }
}
