//! Source listings shown beside the bars, and which line each unit of work
//! corresponds to. Line numbers are 1-based.

use shared::{domain::AlgorithmKind, protocol::StepKind};

const BUBBLE: &[&str] = &[
    "fn bubble_sort(a: &mut [i64]) {",
    "    let n = a.len();",
    "    for i in 0..n {",
    "        for j in 0..n - i - 1 {",
    "            if a[j] > a[j + 1] {",
    "                a.swap(j, j + 1);",
    "            }",
    "        }",
    "        // a[n - i - 1] is in place",
    "    }",
    "}",
];

const SELECTION: &[&str] = &[
    "fn selection_sort(a: &mut [i64]) {",
    "    for i in 0..a.len() {",
    "        let mut min = i;",
    "        for j in i + 1..a.len() {",
    "            if a[j] < a[min] {",
    "                min = j;",
    "            }",
    "        }",
    "        if min != i {",
    "            a.swap(i, min);",
    "        }",
    "    }",
    "}",
];

const INSERTION: &[&str] = &[
    "fn insertion_sort(a: &mut [i64]) {",
    "    for i in 1..a.len() {",
    "        let key = a[i];",
    "        let mut j = i;",
    "        while j > 0 && a[j - 1] > key {",
    "            a[j] = a[j - 1];",
    "            j -= 1;",
    "        }",
    "        a[j] = key;",
    "    }",
    "}",
];

const MERGE: &[&str] = &[
    "fn merge_sort(a: &mut [i64], start: usize, end: usize) {",
    "    if start >= end {",
    "        return;",
    "    }",
    "    let mid = start + (end - start) / 2;",
    "    merge_sort(a, start, mid);",
    "    merge_sort(a, mid + 1, end);",
    "    let left = a[start..=mid].to_vec();",
    "    let right = a[mid + 1..=end].to_vec();",
    "    let (mut i, mut j) = (0, 0);",
    "    for k in start..=end {",
    "        if j >= right.len() || (i < left.len() && left[i] <= right[j]) {",
    "            a[k] = left[i];",
    "            i += 1;",
    "        } else {",
    "            a[k] = right[j];",
    "            j += 1;",
    "        }",
    "    }",
    "}",
];

const QUICK: &[&str] = &[
    "fn quick_sort(a: &mut [i64], start: usize, end: usize) {",
    "    if start >= end {",
    "        return;",
    "    }",
    "    let pivot = a[end];",
    "    let mut store = start;",
    "    for scan in start..end {",
    "        if a[scan] < pivot {",
    "            a.swap(scan, store);",
    "            store += 1;",
    "        }",
    "    }",
    "    a.swap(store, end);",
    "    if store > start {",
    "        quick_sort(a, start, store - 1);",
    "    }",
    "    quick_sort(a, store + 1, end);",
    "}",
];

const BINARY_SEARCH: &[&str] = &[
    "fn binary_search(a: &[i64], target: i64) -> Option<usize> {",
    "    let (mut lo, mut hi) = (0, a.len().checked_sub(1)?);",
    "    while lo <= hi {",
    "        let mid = lo + (hi - lo) / 2;",
    "        match a[mid].cmp(&target) {",
    "            Ordering::Equal => return Some(mid),",
    "            Ordering::Less => lo = mid + 1,",
    "            Ordering::Greater => hi = mid.checked_sub(1)?,",
    "        }",
    "    }",
    "    None",
    "}",
];

pub fn lines(kind: AlgorithmKind) -> &'static [&'static str] {
    match kind {
        AlgorithmKind::BubbleSort => BUBBLE,
        AlgorithmKind::SelectionSort => SELECTION,
        AlgorithmKind::InsertionSort => INSERTION,
        AlgorithmKind::MergeSort => MERGE,
        AlgorithmKind::QuickSort => QUICK,
        AlgorithmKind::BinarySearch => BINARY_SEARCH,
    }
}

/// Line to highlight after a unit of `step` kind, if the listing has one.
pub fn highlight_line(kind: AlgorithmKind, step: StepKind) -> Option<usize> {
    use AlgorithmKind as A;
    use StepKind as S;

    let line = match (kind, step) {
        (A::BubbleSort, S::Compare) => 5,
        (A::BubbleSort, S::Swap) => 6,
        (A::BubbleSort, S::PassComplete) => 9,
        (A::BubbleSort, S::Finish) => 11,

        (A::SelectionSort, S::Compare) => 5,
        (A::SelectionSort, S::Swap) => 10,
        (A::SelectionSort, S::PassComplete) => 2,
        (A::SelectionSort, S::Finish) => 13,

        (A::InsertionSort, S::Select) => 3,
        (A::InsertionSort, S::Compare) => 5,
        (A::InsertionSort, S::Shift) => 6,
        (A::InsertionSort, S::Insert) => 9,
        (A::InsertionSort, S::Finish) => 11,

        (A::MergeSort, S::Overwrite) => 12,
        (A::MergeSort, S::Finish) => 20,

        (A::QuickSort, S::Compare) => 8,
        (A::QuickSort, S::Swap) => 9,
        (A::QuickSort, S::PivotPlaced) => 13,
        (A::QuickSort, S::Finish) => 18,

        (A::BinarySearch, S::Compare) => 5,
        (A::BinarySearch, S::Found) => 6,
        (A::BinarySearch, S::DiscardLower) => 7,
        (A::BinarySearch, S::DiscardUpper) => 8,
        (A::BinarySearch, S::NotFound) => 11,

        _ => return None,
    };
    Some(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_STEPS: [StepKind; 13] = [
        StepKind::Compare,
        StepKind::Swap,
        StepKind::Shift,
        StepKind::Overwrite,
        StepKind::Select,
        StepKind::Insert,
        StepKind::PassComplete,
        StepKind::PivotPlaced,
        StepKind::DiscardLower,
        StepKind::DiscardUpper,
        StepKind::Found,
        StepKind::NotFound,
        StepKind::Finish,
    ];

    #[test]
    fn highlighted_lines_exist_in_listing() {
        for kind in AlgorithmKind::ALL {
            let len = lines(kind).len();
            for step in ALL_STEPS {
                if let Some(line) = highlight_line(kind, step) {
                    assert!((1..=len).contains(&line), "{kind} {step:?} -> {line}");
                }
            }
        }
    }

    #[test]
    fn compare_lines_point_at_the_comparison() {
        let bubble = lines(AlgorithmKind::BubbleSort);
        let line = highlight_line(AlgorithmKind::BubbleSort, StepKind::Compare).unwrap();
        assert!(bubble[line - 1].contains("a[j] > a[j + 1]"));

        let quick = lines(AlgorithmKind::QuickSort);
        let line = highlight_line(AlgorithmKind::QuickSort, StepKind::PivotPlaced).unwrap();
        assert!(quick[line - 1].contains("a.swap(store, end)"));
    }

    #[test]
    fn search_has_no_sort_steps() {
        assert_eq!(highlight_line(AlgorithmKind::BinarySearch, StepKind::Swap), None);
    }
}
