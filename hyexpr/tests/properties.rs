//! Property checks over seeded random trees.
use hyexpr::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

const SEEDS: u64 = 64;

fn random_expr(budget: usize, with_variables: bool, rng: &mut impl Rng) -> Expr {
    if budget == 0 || rng.random_bool(0.25) {
        return if with_variables && rng.random_bool(0.3) {
            let names = ["x", "y", "var"];
            var(names[rng.random_range(0..names.len())]).unwrap()
        } else {
            num(rng.random_range(-64.0..64.0))
        };
    }

    match rng.random_range(0..=5) {
        0 => random_expr(budget - 1, with_variables, rng) + random_expr(budget - 1, with_variables, rng),
        1 => random_expr(budget - 1, with_variables, rng) - random_expr(budget - 1, with_variables, rng),
        2 => random_expr(budget - 1, with_variables, rng) * random_expr(budget - 1, with_variables, rng),
        3 => random_expr(budget - 1, with_variables, rng) / random_expr(budget - 1, with_variables, rng),
        4 => sqrt(random_expr(budget - 1, with_variables, rng)),
        5 => abs(random_expr(budget - 1, with_variables, rng)),
        _ => unreachable!(),
    }
}

fn same_value(a: f64, b: f64) -> bool {
    a.to_bits() == b.to_bits() || (a.is_nan() && b.is_nan())
}

fn trees(with_variables: bool) -> impl Iterator<Item = Expr> {
    (0..SEEDS).map(move |seed| {
        let mut rng = ChaCha20Rng::seed_from_u64(0x42 ^ seed);
        random_expr(6, with_variables, &mut rng)
    })
}

#[test]
fn copy_and_fold_preserve_numbers() {
    let mut rng = ChaCha20Rng::seed_from_u64(7);
    for _ in 0..SEEDS {
        let n = num(rng.random_range(-1e6..1e6));
        assert!(same_value(n.deep_copy().evaluate(), n.evaluate()));
        assert!(same_value(n.fold_constants().evaluate(), n.evaluate()));
    }
}

#[test]
fn constant_trees_fold_to_a_single_number() {
    for e in trees(false) {
        assert!(e.is_constant());
        let folded = e.fold_constants();
        let n = folded
            .try_as_number_ref()
            .unwrap_or_else(|| panic!("`{e}` folded to `{folded}`"));
        assert!(same_value(n.value(), e.evaluate()), "`{e}`");
    }
}

#[test]
fn folding_preserves_value_with_variables() {
    for e in trees(true) {
        let folded = e.fold_constants();
        assert!(
            same_value(folded.evaluate(), e.evaluate()),
            "`{e}` vs `{folded}`"
        );
        assert_eq!(folded.variables(), e.variables());
    }
}

#[test]
fn folding_is_maximal() {
    for e in trees(true) {
        let folded = e.fold_constants();
        for node in folded.nodes() {
            if node.is_binary_operation() || node.is_function_call() {
                assert!(!node.is_constant(), "`{node}` left unfolded in `{folded}`");
            }
        }
    }
}

#[test]
fn folding_is_idempotent() {
    for e in trees(true).chain(trees(false)) {
        let once = e.fold_constants();
        let twice = once.fold_constants();
        assert_eq!(twice, once, "`{e}`");
    }
}

#[test]
fn copies_are_equal_and_print_identically() {
    for e in trees(true) {
        let copy = e.deep_copy();
        assert_eq!(copy, e);
        assert_eq!(copy.print(), e.print());
        assert_eq!(copy.node_count(), e.node_count());
        drop(copy);
        assert!(e.node_count() >= 1);
    }
}
