// Factory: a simple factory mapping animal names to boxed animals.

trait Animal {
    fn speak(&self) -> &'static str;
}

struct Dog;

impl Animal for Dog {
    fn speak(&self) -> &'static str {
        "Woof, woof!"
    }
}

struct Cat;

impl Animal for Cat {
    fn speak(&self) -> &'static str {
        "Meow, meow!"
    }
}

struct Parrot;

impl Animal for Parrot {
    fn speak(&self) -> &'static str {
        "Hello, I'm a parrot!"
    }
}

struct AnimalFactory;

impl AnimalFactory {
    /// Unknown species yield no animal.
    fn create_animal(kind: &str) -> Option<Box<dyn Animal>> {
        match kind.to_lowercase().as_str() {
            "dog" => Some(Box::new(Dog)),
            "cat" => Some(Box::new(Cat)),
            "parrot" => Some(Box::new(Parrot)),
            _ => None,
        }
    }
}

fn main() {
    for kind in ["dog", "cat", "parrot", "unicorn"] {
        match AnimalFactory::create_animal(kind) {
            Some(animal) => println!("{}", animal.speak()),
            None => println!("The shop has no {kind}."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_creates_each_known_animal() {
        assert_eq!(AnimalFactory::create_animal("dog").unwrap().speak(), "Woof, woof!");
        assert_eq!(AnimalFactory::create_animal("cat").unwrap().speak(), "Meow, meow!");
        assert_eq!(
            AnimalFactory::create_animal("parrot").unwrap().speak(),
            "Hello, I'm a parrot!"
        );
    }

    #[test]
    fn test_lookup_ignores_case() {
        assert!(AnimalFactory::create_animal("Dog").is_some());
        assert!(AnimalFactory::create_animal("PARROT").is_some());
    }

    #[test]
    fn test_unknown_species_yield_none() {
        assert!(AnimalFactory::create_animal("unicorn").is_none());
        assert!(AnimalFactory::create_animal("").is_none());
    }
}
