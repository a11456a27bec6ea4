// Memento: snapshotting editor state and restoring it without breaking
// encapsulation. Snapshots serialize to JSON so they can leave the process.

use serde::{Deserialize, Serialize};

/// Opaque snapshot of the editor. The caretaker stores these but never looks
/// inside.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Memento {
    content: String,
}

impl Memento {
    fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

#[derive(Default)]
struct Editor {
    content: String,
}

impl Editor {
    fn write(&mut self, words: &str) {
        self.content.push_str(words);
    }

    fn content(&self) -> &str {
        &self.content
    }

    fn save(&self) -> Memento {
        Memento {
            content: self.content.clone(),
        }
    }

    fn restore(&mut self, memento: &Memento) {
        self.content = memento.content.clone();
    }
}

// =============================================================================
// Caretaker: keeps snapshots so the editor can be rewound repeatedly
// =============================================================================

#[derive(Default)]
struct History {
    snapshots: Vec<Memento>,
}

impl History {
    fn push(&mut self, memento: Memento) {
        self.snapshots.push(memento);
    }

    fn pop(&mut self) -> Option<Memento> {
        self.snapshots.pop()
    }
}

fn main() {
    let mut editor = Editor::default();

    editor.write("This is the first sentence.");
    editor.write(" This is second.");
    let saved = editor.save();

    editor.write(" And this is third.");
    println!("{}", editor.content());

    editor.restore(&saved);
    println!("{}", editor.content());

    println!("\n== Snapshot exchange ==");
    let json = saved.to_json().expect("snapshot serializes");
    println!("Exported: {json}");
    let revived = Memento::from_json(&json).expect("snapshot parses");
    let mut other = Editor::default();
    other.restore(&revived);
    println!("Restored elsewhere: {:?}", other.content());

    println!("\n== Caretaker-driven undo ==");
    let mut history = History::default();
    let mut editor = Editor::default();
    for sentence in ["First draft.", " Second thought.", " Third take."] {
        history.push(editor.save());
        editor.write(sentence);
    }
    while let Some(snapshot) = history.pop() {
        editor.restore(&snapshot);
        println!("After undo: {:?}", editor.content());
    }
}
