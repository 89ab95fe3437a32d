use std::fmt;

/// A user-visible event produced by executing one statement.
///
/// Events are delivered to the [`Output`] sink in program order, one per
/// executed statement, with no buffering or reordering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A variable was declared or overwritten.
    Declared {
        /// The variable name.
        name:  String,
        /// The stored value.
        value: String,
    },
    /// A print statement emitted its resolved value.
    Printed(String),
    /// A conditional was evaluated.
    Branch {
        /// Whether the condition held and the body ran.
        taken:     bool,
        /// The condition text, e.g. `x > 3`.
        condition: String,
    },
    /// An `otherwise` block is about to run.
    Otherwise,
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Declared { name, value } => write!(f, "Variable Declaration: {name} = {value}"),
            Self::Printed(value) => write!(f, "Print Statement: {value}"),
            Self::Branch { taken, condition } => {
                let outcome = if *taken { "True" } else { "False" };
                write!(f, "If Statement ({outcome}): {condition}")
            },
            Self::Otherwise => write!(f, "Otherwise Statement"),
        }
    }
}

/// Receives the events produced during execution.
pub trait Output {
    /// Handles one event.
    fn emit(&mut self, event: Event);
}

/// Writes every event to standard output on its own line.
#[derive(Debug, Default, Clone, Copy)]
pub struct Stdout;

impl Output for Stdout {
    fn emit(&mut self, event: Event) {
        println!("{event}");
    }
}

/// Collects events in order.
///
/// # Example
/// ```
/// use ksm::interpreter::evaluator::event::{Event, Output};
///
/// let mut events = Vec::new();
/// events.emit(Event::Printed("5".to_string()));
/// assert_eq!(events[0].to_string(), "Print Statement: 5");
/// ```
impl Output for Vec<Event> {
    fn emit(&mut self, event: Event) {
        self.push(event);
    }
}

impl<O: Output + ?Sized> Output for &mut O {
    fn emit(&mut self, event: Event) {
        (**self).emit(event);
    }
}
