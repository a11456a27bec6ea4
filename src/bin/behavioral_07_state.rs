// State: a traffic light cycling through its colors, and a document workflow
// with guarded forward/backward transitions.
//
// The traffic light uses one state object per color; the workflow uses a plain
// enum transition table. Same pattern, two renditions.

use thiserror::Error;

// =============================================================================
// Traffic light: state objects
// =============================================================================

trait LightState {
    fn next(&self) -> Box<dyn LightState>;
    fn status(&self) -> &'static str;
}

struct RedLight;

impl LightState for RedLight {
    fn next(&self) -> Box<dyn LightState> {
        Box::new(GreenLight)
    }

    fn status(&self) -> &'static str {
        "Red light. Stop!"
    }
}

struct GreenLight;

impl LightState for GreenLight {
    fn next(&self) -> Box<dyn LightState> {
        Box::new(YellowLight)
    }

    fn status(&self) -> &'static str {
        "Green light. Go!"
    }
}

struct YellowLight;

impl LightState for YellowLight {
    fn next(&self) -> Box<dyn LightState> {
        Box::new(RedLight)
    }

    fn status(&self) -> &'static str {
        "Yellow light. Slow down!"
    }
}

struct TrafficLight {
    state: Box<dyn LightState>,
}

impl TrafficLight {
    fn new() -> Self {
        Self {
            state: Box::new(RedLight),
        }
    }

    fn advance(&mut self) {
        self.state = self.state.next();
    }

    fn status(&self) -> &'static str {
        self.state.status()
    }
}

// =============================================================================
// Document workflow: enum transition table
// =============================================================================

#[derive(Debug, Error, PartialEq)]
enum WorkflowError {
    #[error("This is the first state. No previous state.")]
    AtFirstState,
    #[error("This is the final state. No further transitions.")]
    AtFinalState,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum DocumentState {
    Draft,
    UnderReview,
    Approved,
    Published,
}

impl DocumentState {
    fn next(self) -> Result<Self, WorkflowError> {
        match self {
            DocumentState::Draft => Ok(DocumentState::UnderReview),
            DocumentState::UnderReview => Ok(DocumentState::Approved),
            DocumentState::Approved => Ok(DocumentState::Published),
            DocumentState::Published => Err(WorkflowError::AtFinalState),
        }
    }

    fn previous(self) -> Result<Self, WorkflowError> {
        match self {
            DocumentState::Draft => Err(WorkflowError::AtFirstState),
            DocumentState::UnderReview => Ok(DocumentState::Draft),
            DocumentState::Approved => Ok(DocumentState::UnderReview),
            DocumentState::Published => Ok(DocumentState::Approved),
        }
    }

    fn status(self) -> &'static str {
        match self {
            DocumentState::Draft => "The document is in the Draft state.",
            DocumentState::UnderReview => "The document is under review.",
            DocumentState::Approved => "The document has been approved.",
            DocumentState::Published => "The document is published.",
        }
    }
}

struct Document {
    state: DocumentState,
}

impl Document {
    fn new() -> Self {
        Self {
            state: DocumentState::Draft,
        }
    }

    fn next(&mut self) {
        match self.state.next() {
            Ok(state) => self.state = state,
            Err(err) => println!("{err}"),
        }
    }

    fn previous(&mut self) {
        match self.state.previous() {
            Ok(state) => self.state = state,
            Err(err) => println!("{err}"),
        }
    }

    fn status(&self) -> &'static str {
        self.state.status()
    }
}

fn main() {
    println!("== Traffic light ==");
    let mut light = TrafficLight::new();
    for _ in 0..4 {
        println!("{}", light.status());
        light.advance();
    }

    println!("\n== Document workflow ==");
    let mut document = Document::new();
    println!("{}", document.status());
    for _ in 0..3 {
        document.next();
        println!("{}", document.status());
    }
    document.next(); // already published
    document.previous();
    println!("{}", document.status());
}
