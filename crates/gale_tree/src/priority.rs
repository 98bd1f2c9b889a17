//! Relations between competing strategies and the generic resolution pass.

use rand::Rng;

/// How one strategy orders itself against a competitor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Relation {
    /// No opinion; registration order stands.
    Default,
    /// This strategy goes before the other.
    Before,
    /// This strategy goes after the other.
    After,
    /// Order decided by a coin flip. Deliberately non-deterministic.
    Random,
    /// The other strategy is removed from consideration entirely.
    Overshadow,
}

/// Orders a candidate list by pairwise relations and drops overshadowed
/// entries, returning the survivors.
///
/// One pass over index pairs `(i, j)` with `i < j`. For each pair the
/// relation is evaluated both ways: `relation(a, b)` first (`After` swaps,
/// `Random` swaps on a coin flip, `Overshadow` removes `b`), then the
/// symmetric `relation(b, a)` (`Before` swaps, `Overshadow` removes `a`
/// and re-runs the slot). The first survivor is the resolved strategy;
/// registration order is the stable tie-break when no relation applies.
///
/// This single pass serves every strategy family — type adapters and
/// behavior modifiers alike — so callers only supply the pairwise
/// relation function.
pub fn resolve_order<T, F, R>(mut candidates: Vec<T>, mut relation: F, rng: &mut R) -> Vec<T>
where
    F: FnMut(&T, &T) -> Relation,
    R: Rng + ?Sized,
{
    let mut i = 0;
    'slot: while i < candidates.len() {
        let mut j = i + 1;
        while j < candidates.len() {
            match relation(&candidates[i], &candidates[j]) {
                Relation::Default | Relation::Before => {}
                Relation::After => candidates.swap(i, j),
                Relation::Random => {
                    if rng.gen_bool(0.5) {
                        candidates.swap(i, j);
                    }
                }
                Relation::Overshadow => {
                    candidates.remove(j);
                    // the next candidate shifted into j; re-check it
                    continue;
                }
            }
            match relation(&candidates[j], &candidates[i]) {
                Relation::Default | Relation::After => {}
                Relation::Before => candidates.swap(i, j),
                Relation::Random => {
                    if rng.gen_bool(0.5) {
                        candidates.swap(i, j);
                    }
                }
                Relation::Overshadow => {
                    candidates.remove(i);
                    // the slot at i changed; re-run it from scratch
                    continue 'slot;
                }
            }
            j += 1;
        }
        i += 1;
    }
    candidates
}
