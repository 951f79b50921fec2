use bst_sort::tree::Tree;

use std::collections::HashMap;

fn build(xs: &[i8]) -> Tree {
    xs.iter().map(|&x| i64::from(x)).collect()
}

#[quickcheck]
fn in_order_is_non_decreasing(xs: Vec<i8>) -> bool {
    let tree = build(&xs);
    let walked: Vec<_> = tree.in_order().collect();

    walked.windows(2).all(|pair| pair[0] <= pair[1])
}

#[quickcheck]
fn size_counts_every_add(xs: Vec<i8>) -> bool {
    build(&xs).size() == xs.len()
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree = build(&xs);
    xs.iter().all(|&x| tree.search(i64::from(x)))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree = build(&xs);
    let mut nots = nots.iter().filter(|x| !xs.contains(x));

    nots.all(|&x| !tree.search(i64::from(x)))
}

#[quickcheck]
fn built_trees_pass_the_local_check(xs: Vec<i8>) -> bool {
    build(&xs).is_bst()
}

#[quickcheck]
fn min_and_max_match_the_input(xs: Vec<i8>) -> bool {
    let tree = build(&xs);
    let min = xs.iter().min().map(|&x| i64::from(x));
    let max = xs.iter().max().map(|&x| i64::from(x));

    tree.min().ok() == min && tree.max().ok() == max
}

#[quickcheck]
fn remove_drops_exactly_one_copy(xs: Vec<i8>, x: i8) -> bool {
    let mut tree = build(&xs);
    let copies = xs.iter().filter(|&&v| v == x).count();

    tree.remove(i64::from(x));

    let remaining = tree.in_order().filter(|&v| v == i64::from(x)).count();
    remaining == copies.saturating_sub(1)
        && tree.search(i64::from(x)) == (copies > 1)
        && tree.size() == xs.len() - usize::from(copies > 0)
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree = build(&xs);
    let mut counts: HashMap<i8, usize> = HashMap::new();
    for x in &xs {
        *counts.entry(*x).or_insert(0) += 1;
    }

    for delete in &deletes {
        tree.remove(i64::from(*delete));
        if let Some(count) = counts.get_mut(delete) {
            *count = count.saturating_sub(1);
        }
    }

    let walked: Vec<_> = tree.in_order().collect();
    tree.is_bst()
        && walked.windows(2).all(|pair| pair[0] <= pair[1])
        && counts
            .iter()
            .all(|(x, count)| walked.iter().filter(|&&v| v == i64::from(*x)).count() == *count)
}
