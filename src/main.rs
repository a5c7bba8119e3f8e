use avl_tree::config::Config;
use avl_tree::tree::balanced::BalancedTree;
use avl_tree::tree::error::TreeError;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{info, warn};

fn main() {
    tracing_subscriber::fmt().init();

    let config = Config::new();
    run_walkthrough();
    run_shakedown(&config);
}

/// Walks a small tree through single and double rotations and every
/// removal arity.
fn run_walkthrough() {
    let mut tree = BalancedTree::new();

    // 30 trips the first rotation; 7 and 37 need the double form.
    for value in [10, 20, 30, 5, 1, 7, 40, 35, 37, 25, 38] {
        if let Err(err) = tree.insert(value) {
            warn!(value, error = %err, "insert rejected");
        }
    }
    info!(
        len = tree.len(),
        height = tree.height(),
        elements = ?in_order(&tree),
        "after inserts"
    );

    // 40 has a left child only, 20 a right child only, 37 both, 1 none.
    for value in [40, 20, 37, 1] {
        if let Err(err) = tree.remove(&value) {
            warn!(value, error = %err, "remove rejected");
        }
    }
    info!(
        len = tree.len(),
        height = tree.height(),
        elements = ?in_order(&tree),
        "after removals"
    );

    match tree.get(&30) {
        Ok(found) => info!(value = %found, "search hit"),
        Err(err) => warn!(error = %err, "search for 30 failed"),
    }
    match tree.get(&1) {
        Ok(found) => warn!(value = %found, "removed element still reachable"),
        Err(TreeError::NotFound) => info!("search for 1 misses, as expected after removal"),
        Err(err) => warn!(error = %err, "search for 1 failed"),
    }
}

/// Inserts a batch of random elements, removes every other one and checks
/// that the survivors still come out in order.
fn run_shakedown(config: &Config) {
    let mut rng = StdRng::seed_from_u64(config.demo.shakedown_seed);
    let mut tree = BalancedTree::new();
    let mut inserted = Vec::new();

    while inserted.len() < config.demo.shakedown_elements {
        let value: i32 = rng.gen();
        // A duplicate draw is simply retried with the next one.
        if tree.insert(value).is_ok() {
            inserted.push(value);
        }
    }

    let mut removed = 0usize;
    for value in inserted.iter().step_by(2).copied() {
        match tree.remove(&value) {
            Ok(_) => removed += 1,
            Err(err) => warn!(value, error = %err, "shakedown removal failed"),
        }
    }

    let survivors = in_order(&tree);
    let ordered = survivors.windows(2).all(|pair| pair[0] < pair[1]);
    if tree.len() != inserted.len() - removed || !ordered {
        warn!(
            live = tree.len(),
            removed,
            ordered,
            "shakedown found an inconsistency"
        );
        return;
    }
    info!(
        live = tree.len(),
        removed,
        height = tree.height(),
        "shakedown complete"
    );
}

fn in_order(tree: &BalancedTree<i32>) -> Vec<i32> {
    tree.iter().copied().collect()
}
