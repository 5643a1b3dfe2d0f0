use crate::expression::operator::Operator;

/// Immutable expression node: an input number, or an operator applied to ordered children
///
/// Plus and multiply chains are stored flat (`a + b + c` has three children), minus and
/// divide nodes always have exactly two.
#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    pub(crate) value: f64,
    pub(crate) operator: Operator,
    pub(crate) children: Vec<Expression>,
}

impl Expression {
    /// Leaf expression wrapping an input number
    pub fn make_leaf(number: f64) -> Self {
        Self {
            value: number,
            operator: Operator::None,
            children: Vec::new(),
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn operator(&self) -> Operator {
        self.operator
    }

    pub fn children(&self) -> &[Expression] {
        &self.children
    }

    pub fn is_leaf(&self) -> bool {
        self.operator == Operator::None
    }

    /// Number of input numbers this expression consumes
    pub fn leaf_count(&self) -> usize {
        if self.is_leaf() {
            1
        } else {
            self.children.iter().map(Expression::leaf_count).sum()
        }
    }

    /// Whether the value hits `target` within `epsilon`
    pub fn is_target(&self, target: f64, epsilon: f64) -> bool {
        (self.value - target).abs() < epsilon
    }
}
