// Template Method: a fixed cooking skeleton with recipe-specific steps.

trait Recipe {
    fn prepare_ingredients(&self) -> &'static str;
    fn cook(&self) -> &'static str;
    fn garnish(&self) -> &'static str;

    /// The template method. Step order is fixed here and not overridable.
    fn cook_dish(&self) -> Vec<&'static str> {
        vec![self.prepare_ingredients(), self.cook(), self.garnish()]
    }
}

struct PastaRecipe;

impl Recipe for PastaRecipe {
    fn prepare_ingredients(&self) -> &'static str {
        "Boil water and add pasta."
    }

    fn cook(&self) -> &'static str {
        "Cook the pasta until it's al dente."
    }

    fn garnish(&self) -> &'static str {
        "Sprinkle with Parmesan cheese and parsley."
    }
}

struct StirFryRecipe;

impl Recipe for StirFryRecipe {
    fn prepare_ingredients(&self) -> &'static str {
        "Chop vegetables and slice meat."
    }

    fn cook(&self) -> &'static str {
        "Stir-fry vegetables and meat in a wok."
    }

    fn garnish(&self) -> &'static str {
        "Sprinkle with sesame seeds and green onions."
    }
}

fn serve(recipe: &dyn Recipe) {
    for step in recipe.cook_dish() {
        println!("{step}");
    }
}

fn main() {
    serve(&PastaRecipe);
    println!();
    serve(&StirFryRecipe);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pasta_follows_the_skeleton_order() {
        assert_eq!(
            PastaRecipe.cook_dish(),
            vec![
                "Boil water and add pasta.",
                "Cook the pasta until it's al dente.",
                "Sprinkle with Parmesan cheese and parsley.",
            ]
        );
    }

    #[test]
    fn test_stir_fry_follows_the_skeleton_order() {
        assert_eq!(
            StirFryRecipe.cook_dish(),
            vec![
                "Chop vegetables and slice meat.",
                "Stir-fry vegetables and meat in a wok.",
                "Sprinkle with sesame seeds and green onions.",
            ]
        );
    }

    #[test]
    fn test_skeleton_always_has_three_steps() {
        assert_eq!(PastaRecipe.cook_dish().len(), 3);
        assert_eq!(StirFryRecipe.cook_dish().len(), 3);
    }
}
