use std::fmt;

/// Operator that produced an expression node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Leaf marker, the node wraps an input number
    None,
    Plus,
    Minus,
    Multiply,
    Divide,
}

impl Operator {
    /// Additive operators bind weaker than multiplicative ones; leaves bind tightest.
    pub fn precedence(self) -> u8 {
        match self {
            Operator::Plus | Operator::Minus => 1,
            Operator::Multiply | Operator::Divide => 2,
            Operator::None => 3,
        }
    }

    /// Whether a child built with `child` must be wrapped in parentheses when rendered
    /// under a node built with `self`.
    ///
    /// `is_left` is true only for the first child of the parent.
    pub fn need_parentheses(self, child: Operator, is_left: bool) -> bool {
        let parent_rank = self.precedence();
        let child_rank = child.precedence();

        if child_rank > parent_rank {
            return false;
        }
        if child_rank < parent_rank {
            return true;
        }

        match (self, child) {
            (Operator::Plus | Operator::Multiply, _) => false,
            (Operator::Minus, Operator::Plus) | (Operator::Divide, Operator::Multiply) => !is_left,
            _ => true,
        }
    }

    /// ASCII symbol used in rendered solutions, `None` for the leaf marker
    pub fn symbol(self) -> Option<&'static str> {
        match self {
            Operator::Plus => Some("+"),
            Operator::Minus => Some("-"),
            Operator::Multiply => Some("*"),
            Operator::Divide => Some("/"),
            Operator::None => None,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.symbol() {
            Some(symbol) => write!(f, "{}", symbol),
            None => write!(f, "leaf"),
        }
    }
}
