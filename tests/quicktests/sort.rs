use bst_sort::sort;
use bst_sort::Error;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::TaggedList;

fn sorted(xs: &[i64]) -> Vec<i64> {
    let mut expected = xs.to_vec();
    expected.sort_unstable();
    expected
}

fn widen(xs: &[i16]) -> Vec<i64> {
    xs.iter().map(|&x| i64::from(x)).collect()
}

#[quickcheck]
fn selection_sort_sorts(xs: Vec<i16>) -> bool {
    let mut data = widen(&xs);
    sort::selection_sort(&mut data);
    data == sorted(&widen(&xs))
}

#[quickcheck]
fn bubble_sort_sorts(xs: Vec<i16>) -> bool {
    let mut data = widen(&xs);
    let stats = sort::bubble_sort(&mut data);
    data == sorted(&widen(&xs)) && stats.passes < xs.len().max(1)
}

#[quickcheck]
fn bubble_sort_of_sorted_input_is_one_pass(xs: Vec<i16>) -> bool {
    let mut data = sorted(&widen(&xs));
    let stats = sort::bubble_sort(&mut data);
    let expected_passes = if xs.len() < 2 { 0 } else { 1 };
    stats.passes == expected_passes && stats.swaps == 0
}

#[quickcheck]
fn insertion_sort_sorts(xs: Vec<i16>) -> bool {
    let mut data = widen(&xs);
    sort::insertion_sort(&mut data);
    data == sorted(&widen(&xs))
}

#[quickcheck]
fn merge_sort_sorts(xs: Vec<i16>) -> bool {
    let data = widen(&xs);
    let result = sort::merge_sort(&data);
    result == sorted(&data) && data == widen(&xs)
}

#[quickcheck]
fn quick_sort_sorts(xs: Vec<i16>, seed: u64) -> bool {
    let mut data = widen(&xs);
    sort::quick_sort(&mut data, &mut StdRng::seed_from_u64(seed));
    data == sorted(&widen(&xs))
}

#[quickcheck]
fn counting_sort_sorts(xs: Vec<u8>) -> bool {
    let data: Vec<i64> = xs.iter().map(|&x| i64::from(x)).collect();
    sort::counting_sort(&data) == Ok(sorted(&data))
}

#[quickcheck]
fn counting_sort_rejects_first_negative(xs: Vec<i16>) -> bool {
    let data = widen(&xs);
    let expected = match data.iter().position(|&x| x < 0) {
        Some(index) => Err(Error::InvalidInput {
            index,
            value: data[index],
        }),
        None => Ok(sorted(&data)),
    };
    sort::counting_sort(&data) == expected
}

#[quickcheck]
fn counting_sort_is_stable(list: TaggedList) -> bool {
    let mut expected = list.0.clone();
    // `sort_by_key` is a stable sort.
    expected.sort_by_key(|t| t.key);

    sort::counting_sort_by_key(&list.0, |t| i64::from(t.key)) == Ok(expected)
}

#[test]
fn every_sort_agrees_on_the_sample() {
    let expected = vec![1, 2, 2, 3, 3, 4, 5, 6, 6, 8];

    let mut selection = sort::SAMPLE;
    sort::selection_sort(&mut selection);
    let mut bubble = sort::SAMPLE;
    sort::bubble_sort(&mut bubble);
    let mut insertion = sort::SAMPLE;
    sort::insertion_sort(&mut insertion);
    let mut quick = sort::SAMPLE;
    sort::quick_sort(&mut quick, &mut StdRng::seed_from_u64(2024));

    assert_eq!(selection.to_vec(), expected);
    assert_eq!(bubble.to_vec(), expected);
    assert_eq!(insertion.to_vec(), expected);
    assert_eq!(quick.to_vec(), expected);
    assert_eq!(sort::merge_sort(&sort::SAMPLE), expected);
    assert_eq!(sort::counting_sort(&sort::SAMPLE), Ok(expected));
}
