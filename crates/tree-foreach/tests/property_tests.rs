use std::collections::HashMap;

use proptest::prelude::*;
use tree_foreach::{walk, walk_forest, ForeachOptions, Strategy as Order, TreeNode};

/// Test node whose ids are unique within a generated forest
#[derive(Debug, Clone)]
struct Node {
    id: usize,
    children: Vec<Node>,
}

impl TreeNode for Node {
    fn children(&self, key: &str) -> Option<&[Self]> {
        (key == "children").then_some(self.children.as_slice())
    }
}

/// Shape-only tree; ids are assigned afterwards
#[derive(Debug, Clone)]
struct Shape(Vec<Shape>);

fn shape() -> impl Strategy<Value = Shape> {
    let leaf = Just(Shape(Vec::new()));
    leaf.prop_recursive(6, 64, 5, |inner| {
        prop::collection::vec(inner, 0..5).prop_map(Shape)
    })
}

fn build(shape: &Shape, next_id: &mut usize) -> Node {
    let id = *next_id;
    *next_id += 1;
    Node {
        id,
        children: shape.0.iter().map(|s| build(s, next_id)).collect(),
    }
}

fn arb_forest() -> impl Strategy<Value = Vec<Node>> {
    prop::collection::vec(shape(), 0..4).prop_map(|shapes| {
        let mut next_id = 0;
        shapes.iter().map(|s| build(s, &mut next_id)).collect()
    })
}

fn count(node: &Node) -> usize {
    1 + node.children.iter().map(count).sum::<usize>()
}

/// Record every node's parent chain straight from the structure
fn chains(node: &Node, path: &mut Vec<usize>, out: &mut HashMap<usize, Vec<usize>>) {
    out.insert(node.id, path.clone());
    path.push(node.id);
    for child in &node.children {
        chains(child, path, out);
    }
    path.pop();
}

fn options(strategy: Order) -> ForeachOptions {
    ForeachOptions::new().strategy(strategy)
}

proptest! {
    #[test]
    fn every_node_is_visited_once(forest in arb_forest()) {
        let total: usize = forest.iter().map(count).sum();
        for strategy in Order::ALL {
            let mut ids: Vec<_> = walk_forest(&forest, &options(strategy))
                .map(|(node, _)| node.id)
                .collect();
            ids.sort_unstable();
            prop_assert_eq!(ids, (0..total).collect::<Vec<_>>());
        }
    }

    #[test]
    fn parents_are_the_root_to_parent_chain(forest in arb_forest()) {
        let mut expected = HashMap::new();
        for tree in &forest {
            chains(tree, &mut Vec::new(), &mut expected);
        }

        for strategy in Order::ALL {
            for (node, meta) in walk_forest(&forest, &options(strategy)) {
                let parents: Vec<_> = meta.parents().iter().map(|p| p.id).collect();
                prop_assert_eq!(meta.depth(), parents.len());
                prop_assert_eq!(&parents, &expected[&node.id]);
                prop_assert_eq!(meta.parent().map(|p| p.id), parents.last().copied());
            }
        }
    }

    #[test]
    fn preorder_visits_parents_first_and_subtrees_contiguously(forest in arb_forest()) {
        let order: Vec<_> = walk_forest(&forest, &options(Order::Pre))
            .map(|(node, _)| node.id)
            .collect();
        // Ids were assigned in pre-order while building
        prop_assert_eq!(order, (0..forest.iter().map(count).sum()).collect::<Vec<_>>());
    }

    #[test]
    fn postorder_visits_every_descendant_before_its_ancestors(forest in arb_forest()) {
        let position: HashMap<_, _> = walk_forest(&forest, &options(Order::Post))
            .enumerate()
            .map(|(index, (node, _))| (node.id, index))
            .collect();

        for (node, meta) in walk_forest(&forest, &options(Order::Pre)) {
            for ancestor in meta.parents() {
                prop_assert!(position[&node.id] < position[&ancestor.id]);
            }
        }
    }

    #[test]
    fn breadth_first_never_goes_back_up_within_a_tree(
        forest in arb_forest().prop_filter("non-empty", |f| !f.is_empty())
    ) {
        let root = &forest[0];
        let depths: Vec<_> = walk(root, &options(Order::Breadth))
            .map(|(_, meta)| meta.depth())
            .collect();
        prop_assert!(depths.windows(2).all(|pair| pair[0] <= pair[1]));
        prop_assert_eq!(depths.len(), count(root));
    }

    #[test]
    fn forest_equals_trees_walked_one_by_one(forest in arb_forest(), index in 0..3usize) {
        let strategy = Order::ALL[index];
        let together: Vec<_> = walk_forest(&forest, &options(strategy))
            .map(|(node, meta)| (node.id, meta.depth()))
            .collect();
        let separate: Vec<_> = forest
            .iter()
            .flat_map(|tree| walk(tree, &options(strategy)))
            .map(|(node, meta)| (node.id, meta.depth()))
            .collect();
        prop_assert_eq!(together, separate);
    }
}

#[test]
fn strategy_names_are_stable() {
    let names: Vec<_> = Order::ALL.iter().map(ToString::to_string).collect();
    assert_eq!(names, vec!["pre", "post", "breadth"]);
}
