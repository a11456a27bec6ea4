// Prototype: new objects stamped from an existing instance via Clone.

#[derive(Debug, Clone, PartialEq)]
struct Sheep {
    name: String,
    color: String,
}

impl Sheep {
    fn new(name: &str, color: &str) -> Self {
        Self {
            name: name.to_string(),
            color: color.to_string(),
        }
    }
}

fn main() {
    let original_sheep = Sheep::new("Dolly", "white");

    let mut cloned_sheep = original_sheep.clone();
    println!("{cloned_sheep:?}");
    println!("same fields: {}", cloned_sheep == original_sheep);

    // The clone is its own object.
    cloned_sheep.name = "Holly".to_string();
    println!("Sheep 1: {}, {}", original_sheep.name, original_sheep.color);
    println!("Sheep 2: {}, {}", cloned_sheep.name, cloned_sheep.color);
}
