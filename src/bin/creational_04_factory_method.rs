// Factory Method: one creator trait, a concrete factory per product. The
// second half shows the creator driving the product it makes, hiring-manager
// style.

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

trait AnimalFactory {
    fn create_animal(&self) -> Box<dyn Animal>;
}

struct DogFactory;

impl AnimalFactory for DogFactory {
    fn create_animal(&self) -> Box<dyn Animal> {
        Box::new(Dog)
    }
}

struct CatFactory;

impl AnimalFactory for CatFactory {
    fn create_animal(&self) -> Box<dyn Animal> {
        Box::new(Cat)
    }
}

struct ParrotFactory;

impl AnimalFactory for ParrotFactory {
    fn create_animal(&self) -> Box<dyn Animal> {
        Box::new(Parrot)
    }
}

// =============================================================================
// Creator with behavior: the factory method feeds a template step
// =============================================================================

trait Interviewer {
    fn ask_questions(&self) -> &'static str;
}

struct Developer;

impl Interviewer for Developer {
    fn ask_questions(&self) -> &'static str {
        "Asking about design patterns"
    }
}

struct Designer;

impl Interviewer for Designer {
    fn ask_questions(&self) -> &'static str {
        "Asking about color theory"
    }
}

trait HiringManager {
    fn make_interviewer(&self) -> Box<dyn Interviewer>;

    fn take_interview(&self) -> String {
        self.make_interviewer().ask_questions().to_string()
    }
}

struct DevelopmentManager;

impl HiringManager for DevelopmentManager {
    fn make_interviewer(&self) -> Box<dyn Interviewer> {
        Box::new(Developer)
    }
}

struct DesignManager;

impl HiringManager for DesignManager {
    fn make_interviewer(&self) -> Box<dyn Interviewer> {
        Box::new(Designer)
    }
}

fn main() {
    println!("== Animal factories ==");
    let factories: Vec<Box<dyn AnimalFactory>> =
        vec![Box::new(DogFactory), Box::new(CatFactory), Box::new(ParrotFactory)];
    for factory in &factories {
        println!("{}", factory.create_animal().speak());
    }

    println!("\n== Hiring managers ==");
    println!("{}", DevelopmentManager.take_interview());
    println!("{}", DesignManager.take_interview());
}
