// Flyweight: many trees, few tree types. Intrinsic texture/color lives in a
// shared flyweight; each tree keeps only its extrinsic position and size.

use itertools::Itertools;
use rand::Rng;
use std::collections::HashMap;
use std::rc::Rc;

struct TreeType {
    texture: String,
    color: String,
}

impl TreeType {
    fn key(texture: &str, color: &str) -> String {
        format!("{texture}_{color}")
    }

    fn draw(&self, x: i32, y: i32, size: u32) -> String {
        format!(
            "Draw a tree of type {} and color {} at position ({x}, {y}) with size {size}",
            self.texture, self.color
        )
    }
}

#[derive(Default)]
struct TreeTypeFactory {
    tree_types: HashMap<String, Rc<TreeType>>,
}

impl TreeTypeFactory {
    /// Returns the cached flyweight for this texture/color, creating it on
    /// first request.
    fn get_tree_type(&mut self, texture: &str, color: &str) -> Rc<TreeType> {
        let entry = self
            .tree_types
            .entry(TreeType::key(texture, color))
            .or_insert_with(|| {
                Rc::new(TreeType {
                    texture: texture.to_string(),
                    color: color.to_string(),
                })
            });
        Rc::clone(entry)
    }

    fn distinct_types(&self) -> usize {
        self.tree_types.len()
    }
}

struct Tree {
    tree_type: Rc<TreeType>,
    x: i32,
    y: i32,
    size: u32,
}

impl Tree {
    fn draw(&self) -> String {
        self.tree_type.draw(self.x, self.y, self.size)
    }
}

const FOREST_SPECIES: [(&str, &str); 3] = [("Pine", "Green"), ("Oak", "Green"), ("Birch", "White")];

fn plant_forest(factory: &mut TreeTypeFactory, rng: &mut impl Rng, count: usize) -> Vec<Tree> {
    (0..count)
        .map(|_| {
            let (texture, color) = FOREST_SPECIES[rng.gen_range(0..FOREST_SPECIES.len())];
            Tree {
                tree_type: factory.get_tree_type(texture, color),
                x: rng.gen_range(0..100),
                y: rng.gen_range(0..100),
                size: rng.gen_range(1..10),
            }
        })
        .collect()
}

fn main() {
    let mut factory = TreeTypeFactory::default();

    let trees = vec![
        Tree {
            tree_type: factory.get_tree_type("Pine", "Green"),
            x: 10,
            y: 20,
            size: 5,
        },
        Tree {
            tree_type: factory.get_tree_type("Oak", "Green"),
            x: 30,
            y: 40,
            size: 7,
        },
        Tree {
            tree_type: factory.get_tree_type("Pine", "Green"),
            x: 50,
            y: 60,
            size: 5,
        },
    ];
    for tree in &trees {
        println!("{}", tree.draw());
    }
    println!(
        "{} trees drawn from {} shared tree types",
        trees.len(),
        factory.distinct_types()
    );

    println!("\n== Random forest ==");
    let mut rng = rand::thread_rng();
    let forest = plant_forest(&mut factory, &mut rng, 12);
    let per_species = forest
        .iter()
        .map(|tree| TreeType::key(&tree.tree_type.texture, &tree.tree_type.color))
        .counts();
    for (species, planted) in per_species.iter().sorted() {
        println!("{species}: {planted} trees");
    }
    println!(
        "Planted {} trees backed by {} tree types",
        forest.len(),
        factory.distinct_types()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_equal_requests_share_one_flyweight() {
        let mut factory = TreeTypeFactory::default();
        let first = factory.get_tree_type("Pine", "Green");
        let second = factory.get_tree_type("Pine", "Green");
        assert!(Rc::ptr_eq(&first, &second));
        assert_eq!(factory.distinct_types(), 1);
    }

    #[test]
    fn test_three_trees_two_types() {
        let mut factory = TreeTypeFactory::default();
        let _pine1 = factory.get_tree_type("Pine", "Green");
        let _oak = factory.get_tree_type("Oak", "Green");
        let _pine2 = factory.get_tree_type("Pine", "Green");
        assert_eq!(factory.distinct_types(), 2);
    }

    #[test]
    fn test_extrinsic_state_stays_with_the_tree() {
        let mut factory = TreeTypeFactory::default();
        let tree = Tree {
            tree_type: factory.get_tree_type("Pine", "Green"),
            x: 10,
            y: 20,
            size: 5,
        };
        assert_eq!(
            tree.draw(),
            "Draw a tree of type Pine and color Green at position (10, 20) with size 5"
        );
    }

    #[test]
    fn test_forest_never_outgrows_the_species_list() {
        let mut factory = TreeTypeFactory::default();
        let mut rng = StdRng::seed_from_u64(7);
        let forest = plant_forest(&mut factory, &mut rng, 50);
        assert_eq!(forest.len(), 50);
        assert!(factory.distinct_types() <= FOREST_SPECIES.len());
    }
}
