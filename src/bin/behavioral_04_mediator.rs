// Mediator: a chat room routing messages so users never talk to each other
// directly.

use std::cell::RefCell;
use std::rc::Rc;

struct ChatRoom {
    transcript: RefCell<Vec<String>>,
}

impl ChatRoom {
    fn new() -> Rc<Self> {
        Rc::new(Self {
            transcript: RefCell::new(Vec::new()),
        })
    }

    /// All communication funnels through here.
    fn show_message(&self, sender: &str, message: &str) -> String {
        let line = format!("[{sender}]: {message}");
        self.transcript.borrow_mut().push(line.clone());
        line
    }

    fn transcript(&self) -> Vec<String> {
        self.transcript.borrow().clone()
    }
}

struct User {
    name: String,
    room: Rc<ChatRoom>,
}

impl User {
    fn new(room: &Rc<ChatRoom>, name: &str) -> Self {
        Self {
            name: name.to_string(),
            room: Rc::clone(room),
        }
    }

    fn send(&self, message: &str) -> String {
        self.room.show_message(&self.name, message)
    }
}

fn main() {
    let room = ChatRoom::new();

    let bob = User::new(&room, "Bob");
    let alice = User::new(&room, "Alice");

    println!("{}", bob.send("Hi, Alice!"));
    println!("{}", alice.send("Hey, Bob!"));

    println!("{} messages routed through the room", room.transcript().len());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_attributed_to_their_sender() {
        let room = ChatRoom::new();
        let bob = User::new(&room, "Bob");

        assert_eq!(bob.send("Hi, Alice!"), "[Bob]: Hi, Alice!");
    }

    #[test]
    fn test_mediator_sees_every_message_in_send_order() {
        let room = ChatRoom::new();
        let bob = User::new(&room, "Bob");
        let alice = User::new(&room, "Alice");

        bob.send("Hi, Alice!");
        alice.send("Hey, Bob!");
        bob.send("How was the weekend?");

        assert_eq!(
            room.transcript(),
            vec![
                "[Bob]: Hi, Alice!",
                "[Alice]: Hey, Bob!",
                "[Bob]: How was the weekend?",
            ]
        );
    }

    #[test]
    fn test_users_share_one_room() {
        let room = ChatRoom::new();
        let bob = User::new(&room, "Bob");
        let alice = User::new(&room, "Alice");

        assert!(Rc::ptr_eq(&bob.room, &alice.room));
    }
}
