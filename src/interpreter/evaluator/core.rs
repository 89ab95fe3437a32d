use std::collections::HashMap;

use crate::{
    ast::{Block, Statement},
    error::RuntimeError,
    interpreter::{
        evaluator::event::{Event, Output, Stdout},
        lexer::is_identifier,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the runtime evaluation context.
///
/// This struct holds the interpreter state: the flat variable store and the
/// sink receiving output events.
///
/// ## Usage
///
/// `Context` is created once and reused for every line of input. The store is
/// only ever written by declarations (last write wins) and survives failed
/// lines. There is no scoping: a declaration inside a block is visible
/// everywhere afterwards.
pub struct Context<O = Stdout> {
    variables: HashMap<String, String>,
    output:    O,
}

impl Context {
    /// Creates a context with an empty store that prints events to standard
    /// output.
    #[must_use]
    pub fn new() -> Self {
        Self::with_output(Stdout)
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

impl<O> Context<O> {
    /// Creates a context with an empty store that sends events to `output`.
    #[must_use]
    pub fn with_output(output: O) -> Self {
        Self { variables: HashMap::new(),
               output }
    }

    /// Returns the stored value of `name`, if declared.
    #[must_use]
    pub fn variable(&self, name: &str) -> Option<&str> {
        self.variables.get(name).map(String::as_str)
    }

    /// Returns the whole variable store.
    #[must_use]
    pub const fn variables(&self) -> &HashMap<String, String> {
        &self.variables
    }

    /// Returns the output sink.
    #[must_use]
    pub const fn output(&self) -> &O {
        &self.output
    }

    /// Returns the output sink mutably, e.g. to drain collected events.
    pub const fn output_mut(&mut self) -> &mut O {
        &mut self.output
    }

    /// Consumes the context, returning its output sink.
    #[must_use]
    pub fn into_output(self) -> O {
        self.output
    }
}

impl<O: Output> Context<O> {
    /// Executes a block of statements.
    ///
    /// Statements run depth-first, left to right, each emitting its event as
    /// it executes. An empty block is a no-op.
    ///
    /// # Errors
    /// Stops at and returns the first `RuntimeError`. Events and declarations
    /// of statements that already ran are kept.
    ///
    /// # Example
    /// ```
    /// use ksm::{interpreter::evaluator::core::Context, parse, tokenize};
    ///
    /// let mut ctx = Context::with_output(Vec::new());
    /// let block = parse(tokenize("declare x = 5 if case x > 3 { displayln(x) }")).unwrap();
    /// ctx.execute(&block).unwrap();
    ///
    /// let lines: Vec<String> = ctx.output().iter().map(ToString::to_string).collect();
    /// assert_eq!(lines,
    ///            ["Variable Declaration: x = 5",
    ///             "If Statement (True): x > 3",
    ///             "Print Statement: 5"]);
    /// ```
    pub fn execute(&mut self, block: &Block) -> EvalResult<()> {
        for statement in &block.statements {
            self.exec_statement(statement)?;
        }
        Ok(())
    }

    /// Executes a single statement.
    ///
    /// # Errors
    /// Returns `RuntimeError::MalformedStatement` for a declaration whose name
    /// is not an identifier, and propagates errors from nested blocks.
    pub fn exec_statement(&mut self, statement: &Statement) -> EvalResult<()> {
        match statement {
            Statement::VarDecl { name, value, line } => self.exec_var_decl(name, &value.text, *line),
            Statement::Print { value, .. } => {
                let resolved = self.evaluate_expression(&value.text).to_string();
                self.output.emit(Event::Printed(resolved));
                Ok(())
            },
            Statement::If { condition,
                            body,
                            line, } => {
                let taken = self.evaluate_condition(condition);
                tracing::debug!(line, %condition, taken, "if case");
                self.output.emit(Event::Branch { taken,
                                                 condition: condition.to_string() });
                if taken { self.execute(body) } else { Ok(()) }
            },
            Statement::Otherwise { body, .. } => {
                self.output.emit(Event::Otherwise);
                self.execute(body)
            },
        }
    }

    /// Stores `value` under `name`, overwriting any previous value.
    ///
    /// Surrounding whitespace is trimmed from both the name and the value.
    fn exec_var_decl(&mut self, name: &str, value: &str, line: usize) -> EvalResult<()> {
        let (name, value) = (name.trim(), value.trim());
        if !is_identifier(name) {
            return Err(RuntimeError::MalformedStatement { details: format!("'{name}' is not a valid variable name"),
                                                          line });
        }

        tracing::debug!(line, name, value, "declare");
        self.variables.insert(name.to_string(), value.to_string());
        self.output.emit(Event::Declared { name:  name.to_string(),
                                           value: value.to_string(), });
        Ok(())
    }
}
