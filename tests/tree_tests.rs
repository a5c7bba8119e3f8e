use std::cmp::Ordering;

use avl_tree::tree::balanced::BalancedTree;
use avl_tree::tree::error::TreeError;

#[cfg(test)]
mod tests {
    use super::*;

    fn collect<F: Fn(&i32, &i32) -> Ordering>(tree: &BalancedTree<i32, F>) -> Vec<i32> {
        tree.iter().copied().collect()
    }

    #[test]
    fn test_insert_remove_search_walkthrough() {
        let mut tree = BalancedTree::new();
        for value in [10, 20, 30, 5, 1, 7, 40, 35, 37, 25, 38] {
            tree.insert(value).unwrap();
        }
        assert_eq!(tree.len(), 11);
        assert_eq!(
            collect(&tree),
            vec![1, 5, 7, 10, 20, 25, 30, 35, 37, 38, 40]
        );

        for value in [40, 20, 37, 1] {
            assert_eq!(tree.remove(&value), Ok(value));
        }
        assert_eq!(tree.len(), 7);
        assert_eq!(collect(&tree), vec![5, 7, 10, 25, 30, 35, 38]);

        assert_eq!(tree.get(&30), Ok(&30));
        assert_eq!(tree.get(&1), Err(TreeError::NotFound));
    }

    #[test]
    fn test_insert_rejects_duplicates() {
        let mut tree = BalancedTree::new();
        tree.insert(3).unwrap();
        tree.insert(1).unwrap();
        tree.insert(4).unwrap();

        assert_eq!(tree.insert(1), Err(TreeError::DuplicateKey));

        assert_eq!(tree.len(), 3);
        assert_eq!(collect(&tree), vec![1, 3, 4]);
    }

    #[test]
    fn test_remove_hands_the_element_back() {
        let mut tree = BalancedTree::new();
        tree.insert("left".to_string()).unwrap();
        tree.insert("middle".to_string()).unwrap();
        tree.insert("right".to_string()).unwrap();

        let removed = tree.remove(&"middle".to_string()).unwrap();
        assert_eq!(removed, "middle");
        assert_eq!(tree.len(), 2);
        assert_eq!(tree.get(&"middle".to_string()), Err(TreeError::NotFound));
    }

    #[test]
    fn test_insert_then_remove_restores_previous_order() {
        let mut tree = BalancedTree::new();
        for value in [8, 4, 12, 2, 6] {
            tree.insert(value).unwrap();
        }
        let before = collect(&tree);

        tree.insert(5).unwrap();
        assert_eq!(tree.remove(&5), Ok(5));

        assert_eq!(collect(&tree), before);
        assert_eq!(tree.len(), 5);
    }

    #[test]
    fn test_removing_an_absent_element_changes_nothing() {
        let mut tree = BalancedTree::new();
        for value in [10, 20, 30, 5, 1, 7] {
            tree.insert(value).unwrap();
        }
        let before = collect(&tree);

        assert_eq!(tree.remove(&99), Err(TreeError::NotFound));

        assert_eq!(tree.len(), before.len());
        assert_eq!(collect(&tree), before);
    }

    #[test]
    fn test_get_borrows_the_stored_element() {
        let mut tree = BalancedTree::new();
        tree.insert(42).unwrap();

        let found = tree.get(&42).unwrap();
        assert_eq!(*found, 42);
        assert_eq!(tree.get(&7), Err(TreeError::NotFound));
    }

    #[test]
    fn test_case_insensitive_comparator_decides_equality() {
        let mut tree = BalancedTree::with_comparator(|a: &String, b: &String| {
            a.to_lowercase().cmp(&b.to_lowercase())
        });
        tree.insert("Banana".to_string()).unwrap();
        tree.insert("apple".to_string()).unwrap();
        tree.insert("CHERRY".to_string()).unwrap();

        assert_eq!(
            tree.insert("APPLE".to_string()),
            Err(TreeError::DuplicateKey)
        );

        let elements: Vec<String> = tree.iter().cloned().collect();
        assert_eq!(elements, vec!["apple", "Banana", "CHERRY"]);

        let stored = "Banana".to_string();
        assert_eq!(tree.get(&"banana".to_string()), Ok(&stored));
    }

    #[test]
    fn test_len_tracks_every_mutation() {
        let mut tree = BalancedTree::new();
        assert_eq!(tree.len(), 0);

        tree.insert(1).unwrap();
        tree.insert(2).unwrap();
        assert_eq!(tree.len(), 2);

        // Failed operations must not move the count.
        let _ = tree.insert(2);
        assert_eq!(tree.len(), 2);

        tree.remove(&1).unwrap();
        assert_eq!(tree.len(), 1);
        let _ = tree.remove(&1);
        assert_eq!(tree.len(), 1);

        tree.remove(&2).unwrap();
        assert!(tree.is_empty());
    }

    #[test]
    fn test_borrowing_for_loop_visits_in_order() {
        let mut tree = BalancedTree::new();
        for value in [3, 1, 2] {
            tree.insert(value).unwrap();
        }

        let mut collected = Vec::new();
        for value in &tree {
            collected.push(*value);
        }
        assert_eq!(collected, vec![1, 2, 3]);
    }

    #[test]
    fn test_default_is_empty() {
        let tree: BalancedTree<u64> = BalancedTree::default();
        assert!(tree.is_empty());
        assert_eq!(tree.iter().next(), None);
    }
}
