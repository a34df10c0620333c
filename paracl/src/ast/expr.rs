//! AST node variants and operators

use super::NodeId;
use serde::{Deserialize, Serialize};

/// The closed set of node variants.
///
/// Child references are arena indices; every one of them is populated at
/// construction time except `If::else_scope`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeKind {
    // Expressions
    /// Integer literal
    Number(i32),
    /// Read one integer from the input stream
    Input,
    /// Variable reference
    Var(String),
    /// Unary operation
    Unary { op: UnOp, operand: NodeId },
    /// Arithmetic operation
    Binary { op: BinOp, left: NodeId, right: NodeId },
    /// Comparison, produces 0 or 1
    Compare { op: CmpOp, left: NodeId, right: NodeId },
    /// Logical connective, both sides always evaluated
    Logic { op: LogicOp, left: NodeId, right: NodeId },
    /// `target = value`, an expression whose value is the assigned value
    Assign { target: String, value: NodeId },

    // Statements
    /// Declaration marker, no runtime effect
    Decl(String),
    /// Block of statements with its own frame
    Scope(Vec<NodeId>),
    /// Conditional
    If {
        predicate: NodeId,
        then_scope: NodeId,
        else_scope: Option<NodeId>,
    },
    /// Pre-tested loop
    While { predicate: NodeId, body: NodeId },
    /// Print an integer followed by a newline
    Output(NodeId),
}

impl NodeKind {
    /// Child references in evaluation order
    pub fn children(&self) -> Vec<NodeId> {
        match self {
            NodeKind::Number(_) | NodeKind::Input | NodeKind::Var(_) | NodeKind::Decl(_) => {
                Vec::new()
            }
            NodeKind::Unary { operand, .. } => vec![*operand],
            NodeKind::Binary { left, right, .. }
            | NodeKind::Compare { left, right, .. }
            | NodeKind::Logic { left, right, .. } => vec![*left, *right],
            NodeKind::Assign { value, .. } => vec![*value],
            NodeKind::Scope(stmts) => stmts.clone(),
            NodeKind::If {
                predicate,
                then_scope,
                else_scope,
            } => {
                let mut kids = vec![*predicate, *then_scope];
                kids.extend(else_scope);
                kids
            }
            NodeKind::While { predicate, body } => vec![*predicate, *body],
            NodeKind::Output(expr) => vec![*expr],
        }
    }

    /// Whether this variant produces a value
    pub fn is_expr(&self) -> bool {
        matches!(
            self,
            NodeKind::Number(_)
                | NodeKind::Input
                | NodeKind::Var(_)
                | NodeKind::Unary { .. }
                | NodeKind::Binary { .. }
                | NodeKind::Compare { .. }
                | NodeKind::Logic { .. }
                | NodeKind::Assign { .. }
        )
    }
}

/// Arithmetic operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
}

impl BinOp {
    /// Apply the operator with wrapping semantics.
    ///
    /// Returns `None` when `Div` or `Mod` gets a zero right operand. Division
    /// and remainder truncate toward zero.
    pub fn apply(self, lhs: i32, rhs: i32) -> Option<i32> {
        match self {
            BinOp::Add => Some(lhs.wrapping_add(rhs)),
            BinOp::Sub => Some(lhs.wrapping_sub(rhs)),
            BinOp::Mul => Some(lhs.wrapping_mul(rhs)),
            BinOp::Div => (rhs != 0).then(|| lhs.wrapping_div(rhs)),
            BinOp::Mod => (rhs != 0).then(|| lhs.wrapping_rem(rhs)),
        }
    }
}

impl std::fmt::Display for BinOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BinOp::Add => write!(f, "+"),
            BinOp::Sub => write!(f, "-"),
            BinOp::Mul => write!(f, "*"),
            BinOp::Div => write!(f, "/"),
            BinOp::Mod => write!(f, "%"),
        }
    }
}

/// Comparison operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CmpOp {
    Eq,
    Ne,
    Gt,
    Ge,
    Lt,
    Le,
}

impl CmpOp {
    pub fn apply(self, lhs: i32, rhs: i32) -> bool {
        match self {
            CmpOp::Eq => lhs == rhs,
            CmpOp::Ne => lhs != rhs,
            CmpOp::Gt => lhs > rhs,
            CmpOp::Ge => lhs >= rhs,
            CmpOp::Lt => lhs < rhs,
            CmpOp::Le => lhs <= rhs,
        }
    }
}

impl std::fmt::Display for CmpOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CmpOp::Eq => write!(f, "=="),
            CmpOp::Ne => write!(f, "!="),
            CmpOp::Gt => write!(f, ">"),
            CmpOp::Ge => write!(f, ">="),
            CmpOp::Lt => write!(f, "<"),
            CmpOp::Le => write!(f, "<="),
        }
    }
}

/// Logical operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogicOp {
    And,
    Or,
}

impl LogicOp {
    pub fn apply(self, lhs: bool, rhs: bool) -> bool {
        match self {
            LogicOp::And => lhs && rhs,
            LogicOp::Or => lhs || rhs,
        }
    }
}

impl std::fmt::Display for LogicOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogicOp::And => write!(f, "&&"),
            LogicOp::Or => write!(f, "||"),
        }
    }
}

/// Unary operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnOp {
    /// Arithmetic negation (-)
    Minus,
    /// Logical not (!)
    Not,
}

impl UnOp {
    pub fn apply(self, operand: i32) -> i32 {
        match self {
            UnOp::Minus => operand.wrapping_neg(),
            UnOp::Not => i32::from(operand == 0),
        }
    }
}

impl std::fmt::Display for UnOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UnOp::Minus => write!(f, "-"),
            UnOp::Not => write!(f, "!"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binop_arithmetic() {
        assert_eq!(BinOp::Add.apply(2, 3), Some(5));
        assert_eq!(BinOp::Sub.apply(2, 3), Some(-1));
        assert_eq!(BinOp::Mul.apply(-4, 3), Some(-12));
        assert_eq!(BinOp::Div.apply(7, 2), Some(3));
    }

    #[test]
    fn test_binop_truncates_toward_zero() {
        assert_eq!(BinOp::Div.apply(-7, 2), Some(-3));
        assert_eq!(BinOp::Mod.apply(-7, 2), Some(-1));
        assert_eq!(BinOp::Mod.apply(7, -2), Some(1));
    }

    #[test]
    fn test_binop_zero_divisor() {
        assert_eq!(BinOp::Div.apply(1, 0), None);
        assert_eq!(BinOp::Mod.apply(1, 0), None);
        assert_eq!(BinOp::Add.apply(1, 0), Some(1));
    }

    #[test]
    fn test_binop_wraps_on_overflow() {
        assert_eq!(BinOp::Add.apply(i32::MAX, 1), Some(i32::MIN));
        assert_eq!(BinOp::Div.apply(i32::MIN, -1), Some(i32::MIN));
        assert_eq!(BinOp::Mod.apply(i32::MIN, -1), Some(0));
    }

    #[test]
    fn test_cmpop_apply() {
        assert!(CmpOp::Eq.apply(1, 1));
        assert!(CmpOp::Ne.apply(1, 2));
        assert!(CmpOp::Gt.apply(2, 1));
        assert!(CmpOp::Ge.apply(2, 2));
        assert!(CmpOp::Lt.apply(1, 2));
        assert!(!CmpOp::Le.apply(3, 2));
    }

    #[test]
    fn test_unop_apply() {
        assert_eq!(UnOp::Minus.apply(5), -5);
        assert_eq!(UnOp::Not.apply(0), 1);
        assert_eq!(UnOp::Not.apply(-3), 0);
    }

    #[test]
    fn test_logicop_apply() {
        assert!(LogicOp::Or.apply(false, true));
        assert!(!LogicOp::And.apply(true, false));
    }

    #[test]
    fn test_children_order() {
        let kind = NodeKind::If {
            predicate: NodeId(0),
            then_scope: NodeId(1),
            else_scope: Some(NodeId(2)),
        };
        assert_eq!(kind.children(), vec![NodeId(0), NodeId(1), NodeId(2)]);
        assert!(NodeKind::Input.children().is_empty());
        assert!(!kind.is_expr());
        assert!(NodeKind::Number(1).is_expr());
    }

    #[test]
    fn test_operator_display() {
        assert_eq!(BinOp::Mod.to_string(), "%");
        assert_eq!(CmpOp::Ge.to_string(), ">=");
        assert_eq!(LogicOp::And.to_string(), "&&");
        assert_eq!(UnOp::Not.to_string(), "!");
    }
}
