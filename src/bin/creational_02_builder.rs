// Builder: assembling complex products step by step. A fluent superhero
// builder and a burger builder with optional toppings.

use serde::Serialize;

// =============================================================================
// Superhero builder
// =============================================================================

#[derive(Debug, Serialize)]
struct Superhero {
    name: String,
    powers: Vec<String>,
    team: String,
    secret_identity: String,
}

impl Superhero {
    fn describe(&self) -> String {
        format!(
            "Superhero: {}\nPowers: {}\nTeam: {}\nSecret Identity: {}",
            self.name,
            self.powers.join(", "),
            self.team,
            self.secret_identity
        )
    }
}

#[derive(Default)]
struct SuperheroBuilder {
    name: String,
    powers: Vec<String>,
    team: String,
    secret_identity: String,
}

impl SuperheroBuilder {
    fn new() -> Self {
        Self::default()
    }

    fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    fn powers(mut self, powers: &[&str]) -> Self {
        self.powers = powers.iter().map(|p| p.to_string()).collect();
        self
    }

    fn team(mut self, team: impl Into<String>) -> Self {
        self.team = team.into();
        self
    }

    fn secret_identity(mut self, identity: impl Into<String>) -> Self {
        self.secret_identity = identity.into();
        self
    }

    fn build(self) -> Superhero {
        Superhero {
            name: self.name,
            powers: self.powers,
            team: self.team,
            secret_identity: self.secret_identity,
        }
    }
}

// =============================================================================
// Burger builder: required size, optional toppings defaulting to off
// =============================================================================

#[derive(Debug, Serialize)]
struct Burger {
    size: u32,
    cheese: bool,
    lettuce: bool,
    ketchup: bool,
    pickle: bool,
}

struct BurgerBuilder {
    size: u32,
    cheese: bool,
    lettuce: bool,
    ketchup: bool,
    pickle: bool,
}

impl BurgerBuilder {
    fn new(size: u32) -> Self {
        Self {
            size,
            cheese: false,
            lettuce: false,
            ketchup: false,
            pickle: false,
        }
    }

    fn add_cheese(mut self) -> Self {
        self.cheese = true;
        self
    }

    fn add_lettuce(mut self) -> Self {
        self.lettuce = true;
        self
    }

    fn add_ketchup(mut self) -> Self {
        self.ketchup = true;
        self
    }

    fn add_pickle(mut self) -> Self {
        self.pickle = true;
        self
    }

    fn build(self) -> Burger {
        Burger {
            size: self.size,
            cheese: self.cheese,
            lettuce: self.lettuce,
            ketchup: self.ketchup,
            pickle: self.pickle,
        }
    }
}

fn main() -> serde_json::Result<()> {
    let batman = SuperheroBuilder::new()
        .name("Batman")
        .powers(&["Martial Arts", "Stealth", "Gadgets"])
        .team("Justice League")
        .secret_identity("Bruce Wayne")
        .build();
    println!("{}\n", batman.describe());

    let superman = SuperheroBuilder::new()
        .name("Superman")
        .powers(&["Flight", "Super Strength", "Heat Vision"])
        .team("Justice League")
        .secret_identity("Clark Kent")
        .build();
    println!("{}\n", superman.describe());

    let burger = BurgerBuilder::new(12)
        .add_cheese()
        .add_ketchup()
        .add_pickle()
        .build();
    println!("lettuce: {}", burger.lettuce);
    println!("pickle: {}", burger.pickle);

    println!("\n== Order export ==");
    println!("{}", serde_json::to_string_pretty(&burger)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fluent_builder_sets_every_field() {
        let hero = SuperheroBuilder::new()
            .name("Batman")
            .powers(&["Martial Arts", "Stealth", "Gadgets"])
            .team("Justice League")
            .secret_identity("Bruce Wayne")
            .build();

        assert_eq!(hero.name, "Batman");
        assert_eq!(hero.powers.len(), 3);
        assert_eq!(hero.team, "Justice League");
        assert_eq!(hero.secret_identity, "Bruce Wayne");
    }

    #[test]
    fn test_describe_lists_powers_comma_separated() {
        let hero = SuperheroBuilder::new()
            .name("Superman")
            .powers(&["Flight", "Heat Vision"])
            .build();

        assert!(hero.describe().contains("Powers: Flight, Heat Vision"));
    }

    #[test]
    fn test_burger_toppings_default_to_off() {
        let burger = BurgerBuilder::new(12).build();
        assert_eq!(burger.size, 12);
        assert!(!burger.cheese);
        assert!(!burger.lettuce);
        assert!(!burger.ketchup);
        assert!(!burger.pickle);
    }

    #[test]
    fn test_burger_builder_only_adds_requested_toppings() {
        let burger = BurgerBuilder::new(12)
            .add_cheese()
            .add_ketchup()
            .add_pickle()
            .build();

        assert!(burger.cheese);
        assert!(!burger.lettuce);
        assert!(burger.ketchup);
        assert!(burger.pickle);
    }

    #[test]
    fn test_finished_product_exports_as_json() {
        let burger = BurgerBuilder::new(9).add_cheese().build();
        let json = serde_json::to_string(&burger).unwrap();
        assert!(json.contains("\"size\":9"));
        assert!(json.contains("\"cheese\":true"));
    }
}
