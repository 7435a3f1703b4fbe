//! AST visitor trait and walk functions.
//!
//! Visits all expression nodes recursively in pre-order, left to right.

use crate::nodes::{Expr, MemberProperty, Program};

pub trait Visitor<'a> {
    fn visit_expr(&mut self, expr: &'a Expr) {
        walk_expr(self, expr);
    }
}

pub fn walk_program<'a, V: Visitor<'a> + ?Sized>(visitor: &mut V, program: &'a Program) {
    for expr in &program.body {
        visitor.visit_expr(expr);
    }
}

pub fn walk_expr<'a, V: Visitor<'a> + ?Sized>(visitor: &mut V, expr: &'a Expr) {
    match expr {
        Expr::Conditional(node) => {
            visitor.visit_expr(&node.test);
            visitor.visit_expr(&node.consequent);
            visitor.visit_expr(&node.alternate);
        }
        Expr::Logical(node) => {
            visitor.visit_expr(&node.left);
            visitor.visit_expr(&node.right);
        }
        Expr::Unary(node) => {
            visitor.visit_expr(&node.operand);
        }
        Expr::Binary(node) => {
            visitor.visit_expr(&node.left);
            visitor.visit_expr(&node.right);
        }
        Expr::Call(node) => {
            visitor.visit_expr(&node.callee);
            for argument in &node.arguments {
                visitor.visit_expr(argument);
            }
        }
        Expr::Member(node) => {
            visitor.visit_expr(&node.object);
            if let MemberProperty::Computed(index) = &node.property {
                visitor.visit_expr(index);
            }
        }
        Expr::Name(_)
        | Expr::NumberLiteral(_)
        | Expr::StringLiteral(_)
        | Expr::BooleanLiteral(_)
        | Expr::NullLiteral(_) => {}
    }
}
