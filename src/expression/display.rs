use std::fmt::{self, Write};

use crate::expression::ast::Expression;

fn write_with_parens<W: Write>(out: &mut W, expr: &Expression, need_parens: bool) -> fmt::Result {
    if need_parens {
        out.write_char('(')?;
        write_expression(out, expr)?;
        out.write_char(')')
    } else {
        write_expression(out, expr)
    }
}

fn write_expression<W: Write>(out: &mut W, expr: &Expression) -> fmt::Result {
    let Some(symbol) = expr.operator.symbol() else {
        // leaves are input integers
        return write!(out, "{}", expr.value.trunc() as i64);
    };

    for (idx, child) in expr.children.iter().enumerate() {
        let is_left = idx == 0;
        if !is_left {
            write!(out, " {} ", symbol)?;
        }
        let need_parens = expr.operator.need_parentheses(child.operator, is_left);
        write_with_parens(out, child, need_parens)?;
    }
    Ok(())
}

impl Expression {
    /// Render with minimal parentheses, wrapping the whole expression when `parenthesize` is set
    pub fn render(&self, parenthesize: bool) -> String {
        let mut out = String::new();
        // writing into a String cannot fail
        let _ = write_with_parens(&mut out, self, parenthesize);
        out
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_expression(f, self)
    }
}
