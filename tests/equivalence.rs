//! Property tests: the tree agrees with the naive per-key reference
//! after any sequence of range assignments and range updates.

use proptest::prelude::*;

use dynamic_segment_tree::presets::{min_tree, sum_tree};

mod test_helpers;
use test_helpers::ReferenceTree;

const KEYS: i64 = 1000;

#[derive(Debug, Clone)]
enum Op {
    Set { begin: i64, end: i64, value: i64 },
    Update { begin: i64, end: i64, delta: i64 },
}

fn ops() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0..KEYS, 0..KEYS, -100i64..100).prop_map(|(a, b, value)| Op::Set {
            begin: a.min(b),
            end: a.max(b),
            value,
        }),
        (0..KEYS, 0..KEYS, -100i64..100).prop_map(|(a, b, delta)| Op::Update {
            begin: a.min(b),
            end: a.max(b),
            delta,
        }),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn pointwise_agreement(script in proptest::collection::vec(ops(), 1..24)) {
        let mut tree = sum_tree(0i64, KEYS, 54);
        let mut reference = ReferenceTree::new(0, KEYS, 54i64);

        for op in &script {
            match *op {
                Op::Set { begin, end, value } => {
                    tree.set(begin, end, value);
                    reference.set(begin, end, value);
                }
                Op::Update { begin, end, delta } => {
                    tree.update(begin, end, delta);
                    reference.update(begin, end, |value| value + delta);
                }
            }
            for key in 0..KEYS {
                prop_assert_eq!(
                    tree.get(key).unwrap(),
                    reference.get(key),
                    "key {} diverged after {:?}",
                    key,
                    op
                );
            }
        }
    }

    #[test]
    fn sum_aggregates_agree(
        script in proptest::collection::vec(ops(), 1..24),
        queries in proptest::collection::vec((0..KEYS, 0..KEYS), 1..8),
    ) {
        let mut tree = sum_tree(0i64, KEYS, 54);
        let mut reference = ReferenceTree::new(0, KEYS, 54i64);

        for op in &script {
            match *op {
                Op::Set { begin, end, value } => {
                    tree.set(begin, end, value);
                    reference.set(begin, end, value);
                }
                Op::Update { begin, end, delta } => {
                    tree.update(begin, end, delta);
                    reference.update(begin, end, |value| value + delta);
                }
            }
        }

        for &(a, b) in &queries {
            let (begin, end) = (a.min(b), a.max(b));
            if begin == end {
                continue;
            }
            prop_assert_eq!(
                tree.range_get(begin, end),
                reference.range_get(begin, end, |value| *value, |left, right| left + right),
                "sum over [{}, {}) diverged",
                begin,
                end
            );
        }
    }

    #[test]
    fn min_aggregates_agree(
        script in proptest::collection::vec(ops(), 1..24),
        queries in proptest::collection::vec((0..KEYS, 0..KEYS), 1..8),
    ) {
        let mut tree = min_tree(0i64, KEYS, 54);
        let mut reference = ReferenceTree::new(0, KEYS, 54i64);

        for op in &script {
            match *op {
                Op::Set { begin, end, value } => {
                    tree.set(begin, end, value);
                    reference.set(begin, end, value);
                }
                Op::Update { begin, end, delta } => {
                    tree.update(begin, end, delta);
                    reference.update(begin, end, |value| value + delta);
                }
            }
        }

        for &(a, b) in &queries {
            let (begin, end) = (a.min(b), a.max(b));
            if begin == end {
                continue;
            }
            prop_assert_eq!(
                tree.range_get(begin, end),
                reference.range_get(begin, end, |value| *value, |left, right| left.min(right)),
                "min over [{}, {}) diverged",
                begin,
                end
            );
        }
    }
}
