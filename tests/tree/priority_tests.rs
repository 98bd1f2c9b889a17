//! Priority resolution tests.
//!
//! The pairwise pass over `Relation`s that orders competing strategies.

use gale_tree::{Relation, resolve_order};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(99)
}

#[test]
fn default_preserves_registration_order() {
    let ordered = resolve_order(vec!["a", "b", "c"], |_, _| Relation::Default, &mut rng());
    assert_eq!(ordered, vec!["a", "b", "c"]);
}

#[test]
fn after_yields_the_slot() {
    let ordered = resolve_order(
        vec!["meek", "bold"],
        |a, _| {
            if *a == "meek" {
                Relation::After
            } else {
                Relation::Default
            }
        },
        &mut rng(),
    );
    assert_eq!(ordered, vec!["bold", "meek"]);
}

#[test]
fn symmetric_before_takes_the_slot() {
    // The earlier element is neutral; the later one claims Before.
    let ordered = resolve_order(
        vec!["first", "pushy"],
        |a, _| {
            if *a == "pushy" {
                Relation::Before
            } else {
                Relation::Default
            }
        },
        &mut rng(),
    );
    assert_eq!(ordered, vec!["pushy", "first"]);
}

#[test]
fn overshadow_excludes_regardless_of_order() {
    // T5: b never survives when a overshadows it, whichever way they
    // were registered.
    for candidates in [vec!["a", "b"], vec!["b", "a"]] {
        let ordered = resolve_order(
            candidates,
            |x, y| {
                if *x == "a" && *y == "b" {
                    Relation::Overshadow
                } else {
                    Relation::Default
                }
            },
            &mut rng(),
        );
        assert_eq!(ordered, vec!["a"]);
    }
}

#[test]
fn random_keeps_both_candidates() {
    let ordered = resolve_order(vec![1, 2], |_, _| Relation::Random, &mut rng());
    assert_eq!(ordered.len(), 2);
    assert!(ordered.contains(&1));
    assert!(ordered.contains(&2));
}

#[test]
fn random_is_reproducible_under_a_seed() {
    let a = resolve_order(vec![1, 2, 3, 4], |_, _| Relation::Random, &mut rng());
    let b = resolve_order(vec![1, 2, 3, 4], |_, _| Relation::Random, &mut rng());
    assert_eq!(a, b);
}

#[test]
fn empty_and_singleton_pass_through() {
    let empty: Vec<u8> = resolve_order(Vec::new(), |_, _| Relation::Default, &mut rng());
    assert!(empty.is_empty());
    let one = resolve_order(vec![9], |_, _| Relation::Overshadow, &mut rng());
    assert_eq!(one, vec![9]);
}
