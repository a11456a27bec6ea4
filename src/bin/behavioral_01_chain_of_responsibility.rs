// Chain of Responsibility: support-ticket routing and a pizza assembly line.
//
// Two flavors of chain: a claim chain where the first handler that recognises
// a request answers it, and a pipeline chain where every station does its part
// and always forwards.

use colored::Colorize;
use regex::Regex;

// =============================================================================
// Claim chain: support desk
// =============================================================================

trait SupportAgent {
    /// Answer the ticket if this agent recognises the topic.
    fn try_answer(&self, ticket: &str) -> Option<String>;

    fn successor(&self) -> Option<&dyn SupportAgent>;

    /// Walk the chain until somebody answers.
    fn handle(&self, ticket: &str) -> Option<String> {
        self.try_answer(ticket)
            .or_else(|| self.successor().and_then(|next| next.handle(ticket)))
    }
}

struct BillingAgent {
    topics: Regex,
    next: Option<Box<dyn SupportAgent>>,
}

impl BillingAgent {
    fn new(next: Option<Box<dyn SupportAgent>>) -> Self {
        Self {
            topics: Regex::new(r"(?i)invoice|refund|billing").expect("valid topic pattern"),
            next,
        }
    }
}

impl SupportAgent for BillingAgent {
    fn try_answer(&self, ticket: &str) -> Option<String> {
        if self.topics.is_match(ticket) {
            Some(format!("BillingAgent: Handling \"{ticket}\""))
        } else {
            None
        }
    }

    fn successor(&self) -> Option<&dyn SupportAgent> {
        self.next.as_deref()
    }
}

struct TechSupportAgent {
    topics: Regex,
    next: Option<Box<dyn SupportAgent>>,
}

impl TechSupportAgent {
    fn new(next: Option<Box<dyn SupportAgent>>) -> Self {
        Self {
            topics: Regex::new(r"(?i)outage|crash|server").expect("valid topic pattern"),
            next,
        }
    }
}

impl SupportAgent for TechSupportAgent {
    fn try_answer(&self, ticket: &str) -> Option<String> {
        if self.topics.is_match(ticket) {
            Some(format!("TechSupportAgent: Handling \"{ticket}\""))
        } else {
            None
        }
    }

    fn successor(&self) -> Option<&dyn SupportAgent> {
        self.next.as_deref()
    }
}

fn route_tickets(front_desk: &dyn SupportAgent, tickets: &[&str]) {
    for ticket in tickets {
        println!("Client: Who wants to handle \"{ticket}\"?");
        match front_desk.handle(ticket) {
            Some(answer) => println!("  {answer}"),
            None => println!("  {}", format!("\"{ticket}\" was not handled.").yellow()),
        }
    }
}

// =============================================================================
// Pipeline chain: pizza stations
// =============================================================================

trait PizzaStation {
    fn work(&self, pizza: &str) -> String;

    fn successor(&self) -> Option<&dyn PizzaStation>;

    /// Every station contributes, then passes the pizza along.
    fn prepare(&self, pizza: &str) -> Vec<String> {
        let mut steps = vec![self.work(pizza)];
        if let Some(next) = self.successor() {
            steps.extend(next.prepare(pizza));
        }
        steps
    }
}

struct DoughStation {
    next: Option<Box<dyn PizzaStation>>,
}

impl PizzaStation for DoughStation {
    fn work(&self, _pizza: &str) -> String {
        "DoughStation: Preparing the dough".to_string()
    }

    fn successor(&self) -> Option<&dyn PizzaStation> {
        self.next.as_deref()
    }
}

struct SauceStation {
    next: Option<Box<dyn PizzaStation>>,
}

impl PizzaStation for SauceStation {
    fn work(&self, _pizza: &str) -> String {
        "SauceStation: Adding the sauce".to_string()
    }

    fn successor(&self) -> Option<&dyn PizzaStation> {
        self.next.as_deref()
    }
}

struct ToppingStation {
    next: Option<Box<dyn PizzaStation>>,
}

impl PizzaStation for ToppingStation {
    fn work(&self, pizza: &str) -> String {
        format!("ToppingStation: Adding toppings for {pizza}")
    }

    fn successor(&self) -> Option<&dyn PizzaStation> {
        self.next.as_deref()
    }
}

fn kitchen_line() -> DoughStation {
    let toppings = ToppingStation { next: None };
    let sauce = SauceStation {
        next: Some(Box::new(toppings)),
    };
    DoughStation {
        next: Some(Box::new(sauce)),
    }
}

fn main() {
    println!("== Support desk ==");
    let front_desk = BillingAgent::new(Some(Box::new(TechSupportAgent::new(None))));
    route_tickets(
        &front_desk,
        &[
            "My invoice lists the wrong amount",
            "The server crashed overnight",
            "Do you sell gift cards?",
        ],
    );

    println!("\n== Pizza line ==");
    let line = kitchen_line();
    for pizza in ["Margherita", "Pepperoni"] {
        println!("Preparing {pizza}:");
        for step in line.prepare(pizza) {
            println!("  {step}");
        }
    }
}
