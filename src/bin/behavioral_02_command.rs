// Command: a remote control driving lights and doors, with an undo history.

use std::cell::RefCell;
use std::rc::Rc;

// =============================================================================
// Receivers
// =============================================================================

#[derive(Default)]
struct Light {
    is_on: bool,
}

impl Light {
    fn turn_on(&mut self) -> &'static str {
        self.is_on = true;
        "Light is on"
    }

    fn turn_off(&mut self) -> &'static str {
        self.is_on = false;
        "Light is off"
    }
}

#[derive(Default)]
struct Door {
    is_open: bool,
}

impl Door {
    fn open(&mut self) -> &'static str {
        self.is_open = true;
        "Door is open"
    }

    fn close(&mut self) -> &'static str {
        self.is_open = false;
        "Door is closed"
    }
}

// =============================================================================
// Commands
// =============================================================================

trait Command {
    fn execute(&self) -> &'static str;
    fn undo(&self) -> &'static str;
}

struct LightOnCommand {
    light: Rc<RefCell<Light>>,
}

impl Command for LightOnCommand {
    fn execute(&self) -> &'static str {
        self.light.borrow_mut().turn_on()
    }

    fn undo(&self) -> &'static str {
        self.light.borrow_mut().turn_off()
    }
}

struct LightOffCommand {
    light: Rc<RefCell<Light>>,
}

impl Command for LightOffCommand {
    fn execute(&self) -> &'static str {
        self.light.borrow_mut().turn_off()
    }

    fn undo(&self) -> &'static str {
        self.light.borrow_mut().turn_on()
    }
}

struct DoorOpenCommand {
    door: Rc<RefCell<Door>>,
}

impl Command for DoorOpenCommand {
    fn execute(&self) -> &'static str {
        self.door.borrow_mut().open()
    }

    fn undo(&self) -> &'static str {
        self.door.borrow_mut().close()
    }
}

struct DoorCloseCommand {
    door: Rc<RefCell<Door>>,
}

impl Command for DoorCloseCommand {
    fn execute(&self) -> &'static str {
        self.door.borrow_mut().close()
    }

    fn undo(&self) -> &'static str {
        self.door.borrow_mut().open()
    }
}

// =============================================================================
// Invoker
// =============================================================================

#[derive(Default)]
struct RemoteControl {
    command: Option<Box<dyn Command>>,
    history: Vec<Box<dyn Command>>,
}

impl RemoteControl {
    fn set_command(&mut self, command: Box<dyn Command>) {
        self.command = Some(command);
    }

    /// Executes the loaded command and records it for undo.
    fn press_button(&mut self) -> Option<&'static str> {
        let command = self.command.take()?;
        let outcome = command.execute();
        self.history.push(command);
        Some(outcome)
    }

    fn press_undo(&mut self) -> Option<&'static str> {
        self.history.pop().map(|command| command.undo())
    }
}

fn main() {
    let light = Rc::new(RefCell::new(Light::default()));
    let door = Rc::new(RefCell::new(Door::default()));

    let mut remote = RemoteControl::default();

    println!("== Button presses ==");
    let commands: Vec<Box<dyn Command>> = vec![
        Box::new(LightOnCommand {
            light: Rc::clone(&light),
        }),
        Box::new(LightOffCommand {
            light: Rc::clone(&light),
        }),
        Box::new(DoorOpenCommand {
            door: Rc::clone(&door),
        }),
        Box::new(DoorCloseCommand {
            door: Rc::clone(&door),
        }),
    ];
    for command in commands {
        remote.set_command(command);
        if let Some(outcome) = remote.press_button() {
            println!("{outcome}");
        }
    }

    println!("\n== Undo ==");
    while let Some(outcome) = remote.press_undo() {
        println!("{outcome}");
    }
    println!(
        "light on: {}, door open: {}",
        light.borrow().is_on,
        door.borrow().is_open
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commands_drive_their_receivers() {
        let light = Rc::new(RefCell::new(Light::default()));
        let on = LightOnCommand {
            light: Rc::clone(&light),
        };

        assert_eq!(on.execute(), "Light is on");
        assert!(light.borrow().is_on);
    }

    #[test]
    fn test_invoker_is_decoupled_from_receivers() {
        let light = Rc::new(RefCell::new(Light::default()));
        let door = Rc::new(RefCell::new(Door::default()));
        let mut remote = RemoteControl::default();

        remote.set_command(Box::new(LightOnCommand {
            light: Rc::clone(&light),
        }));
        assert_eq!(remote.press_button(), Some("Light is on"));

        remote.set_command(Box::new(DoorOpenCommand {
            door: Rc::clone(&door),
        }));
        assert_eq!(remote.press_button(), Some("Door is open"));

        assert!(light.borrow().is_on);
        assert!(door.borrow().is_open);
    }

    #[test]
    fn test_pressing_without_a_command_does_nothing() {
        let mut remote = RemoteControl::default();
        assert_eq!(remote.press_button(), None);
    }

    #[test]
    fn test_undo_reverses_in_most_recent_first_order() {
        let light = Rc::new(RefCell::new(Light::default()));
        let door = Rc::new(RefCell::new(Door::default()));
        let mut remote = RemoteControl::default();

        remote.set_command(Box::new(LightOnCommand {
            light: Rc::clone(&light),
        }));
        remote.press_button();
        remote.set_command(Box::new(DoorOpenCommand {
            door: Rc::clone(&door),
        }));
        remote.press_button();

        assert_eq!(remote.press_undo(), Some("Door is closed"));
        assert_eq!(remote.press_undo(), Some("Light is off"));
        assert_eq!(remote.press_undo(), None);

        assert!(!light.borrow().is_on);
        assert!(!door.borrow().is_open);
    }
}
