// Visitor: adding operations to a zoo of animals without touching the animals.
//
// Double dispatch: the element picks the visitor method, the visitor supplies
// the operation.

struct Monkey;

impl Monkey {
    fn shout(&self) -> &'static str {
        "Ooh oo aa aa!"
    }
}

struct Lion;

impl Lion {
    fn roar(&self) -> &'static str {
        "Roaaar!"
    }
}

struct Dolphin;

impl Dolphin {
    fn speak(&self) -> &'static str {
        "Tuut tuttu tuutt!"
    }
}

trait AnimalVisitor {
    fn visit_monkey(&self, monkey: &Monkey) -> String;
    fn visit_lion(&self, lion: &Lion) -> String;
    fn visit_dolphin(&self, dolphin: &Dolphin) -> String;
}

trait Animal {
    fn accept(&self, visitor: &dyn AnimalVisitor) -> String;
}

impl Animal for Monkey {
    fn accept(&self, visitor: &dyn AnimalVisitor) -> String {
        visitor.visit_monkey(self)
    }
}

impl Animal for Lion {
    fn accept(&self, visitor: &dyn AnimalVisitor) -> String {
        visitor.visit_lion(self)
    }
}

impl Animal for Dolphin {
    fn accept(&self, visitor: &dyn AnimalVisitor) -> String {
        visitor.visit_dolphin(self)
    }
}

// =============================================================================
// Concrete visitors
// =============================================================================

struct SoundVisitor;

impl AnimalVisitor for SoundVisitor {
    fn visit_monkey(&self, monkey: &Monkey) -> String {
        monkey.shout().to_string()
    }

    fn visit_lion(&self, lion: &Lion) -> String {
        lion.roar().to_string()
    }

    fn visit_dolphin(&self, dolphin: &Dolphin) -> String {
        dolphin.speak().to_string()
    }
}

struct JumpVisitor;

impl AnimalVisitor for JumpVisitor {
    fn visit_monkey(&self, _monkey: &Monkey) -> String {
        "Jumped 20 feet high! on to the tree!".to_string()
    }

    fn visit_lion(&self, _lion: &Lion) -> String {
        "Jumped 7 feet! Back on the ground!".to_string()
    }

    fn visit_dolphin(&self, _dolphin: &Dolphin) -> String {
        "Walked on water a little and disappeared".to_string()
    }
}

fn main() {
    let zoo: Vec<Box<dyn Animal>> = vec![Box::new(Monkey), Box::new(Lion), Box::new(Dolphin)];

    println!("== Sounds ==");
    for animal in &zoo {
        println!("{}", animal.accept(&SoundVisitor));
    }

    println!("\n== Jumps ==");
    for animal in &zoo {
        println!("{}", animal.accept(&SoundVisitor));
        println!("{}", animal.accept(&JumpVisitor));
    }
}
