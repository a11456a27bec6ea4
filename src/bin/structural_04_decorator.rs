// Decorator: wrapping objects to add behavior without changing them. A
// logging wrapper around a calculator, and car services stacking costs.

use std::cell::RefCell;

// =============================================================================
// Logging calculator
// =============================================================================

trait Calculator {
    fn add(&self, a: i64, b: i64) -> i64;
}

struct SimpleCalculator;

impl Calculator for SimpleCalculator {
    fn add(&self, a: i64, b: i64) -> i64 {
        a + b
    }
}

struct LoggingCalculator {
    inner: Box<dyn Calculator>,
    log: RefCell<Vec<String>>,
}

impl LoggingCalculator {
    fn new(inner: Box<dyn Calculator>) -> Self {
        Self {
            inner,
            log: RefCell::new(Vec::new()),
        }
    }

    fn log(&self) -> Vec<String> {
        self.log.borrow().clone()
    }
}

impl Calculator for LoggingCalculator {
    fn add(&self, a: i64, b: i64) -> i64 {
        let mut log = self.log.borrow_mut();
        log.push(format!("Adding {a} and {b}"));
        let result = self.inner.add(a, b);
        log.push(format!("Result: {result}"));
        result
    }
}

// =============================================================================
// Car services: decorators stacking description and cost
// =============================================================================

trait CarService {
    fn description(&self) -> String;
    fn cost(&self) -> u64;
}

struct BasicCarService;

impl CarService for BasicCarService {
    fn description(&self) -> String {
        "Basic car service".to_string()
    }

    fn cost(&self) -> u64 {
        10
    }
}

struct OilChange {
    inner: Box<dyn CarService>,
}

impl CarService for OilChange {
    fn description(&self) -> String {
        format!("{}, Oil Change", self.inner.description())
    }

    fn cost(&self) -> u64 {
        self.inner.cost() + 3
    }
}

struct EngineTuning {
    inner: Box<dyn CarService>,
}

impl CarService for EngineTuning {
    fn description(&self) -> String {
        format!("{}, Engine tuning", self.inner.description())
    }

    fn cost(&self) -> u64 {
        self.inner.cost() + 4
    }
}

fn main() {
    println!("== Logging calculator ==");
    let calculator = LoggingCalculator::new(Box::new(SimpleCalculator));
    let result = calculator.add(5, 3);
    for line in calculator.log() {
        println!("{line}");
    }
    assert_eq!(result, 8);

    println!("\n== Car services ==");
    let basic = BasicCarService;
    println!("{} costs {}", basic.description(), basic.cost());

    let full_service = EngineTuning {
        inner: Box::new(OilChange {
            inner: Box::new(BasicCarService),
        }),
    };
    println!("{} costs {}", full_service.description(), full_service.cost());
}
