use crate::{
    ast::{Comparison, Condition},
    interpreter::evaluator::core::Context,
};

impl<O> Context<O> {
    /// Resolves operand text against the variable store.
    ///
    /// If `text` is exactly the name of a declared variable, the stored value
    /// is returned; otherwise `text` itself is returned. Literal numbers,
    /// literal strings and undeclared names all resolve to their own text.
    /// Resolution goes one level deep only.
    ///
    /// # Example
    /// ```
    /// use ksm::{interpreter::evaluator::core::Context, run_line};
    ///
    /// let mut ctx = Context::with_output(Vec::new());
    /// run_line(&mut ctx, "declare x = 5").unwrap();
    ///
    /// assert_eq!(ctx.evaluate_expression("x"), "5");
    /// assert_eq!(ctx.evaluate_expression("y"), "y");
    /// ```
    #[must_use]
    pub fn evaluate_expression<'a>(&'a self, text: &'a str) -> &'a str {
        self.variable(text).unwrap_or(text)
    }

    /// Evaluates a condition with integer semantics.
    ///
    /// Both operands are resolved through
    /// [`evaluate_expression`](Self::evaluate_expression) and parsed as
    /// base-10 integers. This never fails: the result is `false` on any
    /// non-numeric or malformed operand (including operand text holding a
    /// space) and for any operator other than `>`, `<` and `==`. Strings are
    /// never compared, so two equal non-numeric operands are not `==`.
    #[must_use]
    pub fn evaluate_condition(&self, condition: &Condition) -> bool {
        let (left, right) = (&condition.left.text, &condition.right.text);
        if left.contains(' ') || right.contains(' ') {
            tracing::debug!(%condition, "operand holds a space; condition is false");
            return false;
        }

        let (Some(left), Some(right)) = (self.integer_operand(left), self.integer_operand(right))
        else {
            return false;
        };

        match condition.op {
            Comparison::Greater => left > right,
            Comparison::Less => left < right,
            Comparison::Equal => left == right,
            Comparison::Unsupported(ref op) => {
                tracing::debug!(operator = %op, "unsupported comparison; condition is false");
                false
            },
        }
    }

    /// Resolves an operand and parses it as an integer.
    fn integer_operand(&self, text: &str) -> Option<i64> {
        let resolved = self.evaluate_expression(text);
        match resolved.parse::<i64>() {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::debug!(operand = text, resolved, error = %e,
                                "operand is not an integer; condition is false");
                None
            },
        }
    }
}
