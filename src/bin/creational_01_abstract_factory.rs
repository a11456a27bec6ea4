// Abstract Factory: families of related products created through one
// interface. A pet shop stocking small and large pets, and a door shop pairing
// each door with its fitting expert.

// =============================================================================
// Pet shop
// =============================================================================

trait Pet {
    fn speak(&self) -> &'static str;
}

struct Dog;

impl Pet for Dog {
    fn speak(&self) -> &'static str {
        "Wuff!"
    }
}

struct Cat;

impl Pet for Cat {
    fn speak(&self) -> &'static str {
        "Meow!"
    }
}

struct Dinosaur;

impl Pet for Dinosaur {
    fn speak(&self) -> &'static str {
        "Roar!"
    }
}

struct Mammoth;

impl Pet for Mammoth {
    fn speak(&self) -> &'static str {
        "Grr!"
    }
}

trait PetShopFactory {
    fn create_small_pet(&self) -> Box<dyn Pet>;
    fn create_large_pet(&self) -> Box<dyn Pet>;
}

struct ModernPetShopFactory;

impl PetShopFactory for ModernPetShopFactory {
    fn create_small_pet(&self) -> Box<dyn Pet> {
        Box::new(Cat)
    }

    fn create_large_pet(&self) -> Box<dyn Pet> {
        Box::new(Dog)
    }
}

struct AncientPetShopFactory;

impl PetShopFactory for AncientPetShopFactory {
    fn create_small_pet(&self) -> Box<dyn Pet> {
        Box::new(Dinosaur)
    }

    fn create_large_pet(&self) -> Box<dyn Pet> {
        Box::new(Mammoth)
    }
}

/// Client code depends only on the factory trait.
fn go_pet_shopping(factory: &dyn PetShopFactory) -> String {
    let small = factory.create_small_pet();
    let large = factory.create_large_pet();
    format!(
        "I've bought a small pet that says {} and a large pet that says {}",
        small.speak(),
        large.speak()
    )
}

// =============================================================================
// Door shop: each family bundles a door with the expert who fits it
// =============================================================================

trait Door {
    fn description(&self) -> &'static str;
}

struct WoodenDoor;

impl Door for WoodenDoor {
    fn description(&self) -> &'static str {
        "Wooden Door"
    }
}

struct IronDoor;

impl Door for IronDoor {
    fn description(&self) -> &'static str {
        "Iron Door"
    }
}

trait DoorFittingExpert {
    fn description(&self) -> &'static str;
}

struct Carpenter;

impl DoorFittingExpert for Carpenter {
    fn description(&self) -> &'static str {
        "I fit wooden doors"
    }
}

struct Welder;

impl DoorFittingExpert for Welder {
    fn description(&self) -> &'static str {
        "I fit iron doors"
    }
}

trait DoorFactory {
    fn make_door(&self) -> Box<dyn Door>;
    fn make_fitter(&self) -> Box<dyn DoorFittingExpert>;
}

struct WoodenDoorFactory;

impl DoorFactory for WoodenDoorFactory {
    fn make_door(&self) -> Box<dyn Door> {
        Box::new(WoodenDoor)
    }

    fn make_fitter(&self) -> Box<dyn DoorFittingExpert> {
        Box::new(Carpenter)
    }
}

struct IronDoorFactory;

impl DoorFactory for IronDoorFactory {
    fn make_door(&self) -> Box<dyn Door> {
        Box::new(IronDoor)
    }

    fn make_fitter(&self) -> Box<dyn DoorFittingExpert> {
        Box::new(Welder)
    }
}

fn main() {
    println!("== Pet shop ==");
    println!("{}", go_pet_shopping(&ModernPetShopFactory));
    println!("{}", go_pet_shopping(&AncientPetShopFactory));

    println!("\n== Door shop ==");
    for factory in [&WoodenDoorFactory as &dyn DoorFactory, &IronDoorFactory] {
        println!("{}", factory.make_door().description());
        println!("{}", factory.make_fitter().description());
    }
}
