//! Graphviz output for the AST
//!
//! Walks the tree from its root and emits one styled vertex per node and one
//! edge per parent -> child link. Purely cosmetic, evaluation never calls it.

use crate::ast::{Arena, NodeId, NodeKind};
use std::fmt::Write as FmtWrite;

/// Vertex style for a node variant
struct Style {
    shape: &'static str,
    fill: &'static str,
    font: &'static str,
}

const OPERATOR: Style = Style { shape: "box", fill: "red", font: "black" };
const LITERAL: Style = Style { shape: "diamond", fill: "blue", font: "white" };
const NAME: Style = Style { shape: "diamond", fill: "green", font: "black" };
const IO: Style = Style { shape: "triangle", fill: "yellow", font: "black" };
const BLOCK: Style = Style { shape: "ellipse", fill: "white", font: "black" };
const CONTROL: Style = Style { shape: "ellipse", fill: "blue", font: "white" };

fn describe(kind: &NodeKind) -> (String, &'static Style) {
    match kind {
        NodeKind::Number(n) => (n.to_string(), &LITERAL),
        NodeKind::Input => ("Input".to_string(), &IO),
        NodeKind::Var(name) => (name.clone(), &NAME),
        NodeKind::Unary { op, .. } => (op.to_string(), &OPERATOR),
        NodeKind::Binary { op, .. } => (op.to_string(), &OPERATOR),
        NodeKind::Compare { op, .. } => (op.to_string(), &OPERATOR),
        NodeKind::Logic { op, .. } => (op.to_string(), &OPERATOR),
        NodeKind::Assign { target, .. } => (format!("{target} ="), &CONTROL),
        NodeKind::Decl(name) => (name.clone(), &NAME),
        NodeKind::Scope(_) => ("Scope".to_string(), &BLOCK),
        NodeKind::If { .. } => ("If".to_string(), &CONTROL),
        NodeKind::While { .. } => ("While".to_string(), &CONTROL),
        NodeKind::Output(_) => ("Output".to_string(), &IO),
    }
}

fn escape(label: &str) -> String {
    label.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Render the tree under `root` as a `digraph`
pub fn to_dot(arena: &Arena, root: NodeId) -> String {
    let mut output = String::new();
    writeln!(output, "digraph AST {{").unwrap();
    writeln!(output, "    node [style=\"filled,bold\", color=black];").unwrap();

    let mut stack = vec![root];
    let mut edges = Vec::new();
    while let Some(id) = stack.pop() {
        let node = &arena[id];
        let (label, style) = describe(&node.kind);
        writeln!(
            output,
            "    n{} [label=\"{}\", shape={}, fillcolor={}, fontcolor={}];",
            id.0,
            escape(&label),
            style.shape,
            style.fill,
            style.font,
        )
        .unwrap();

        let children = node.kind.children();
        edges.extend(children.iter().map(|child| (id, *child)));
        // Reverse so the leftmost child is visited first
        stack.extend(children.into_iter().rev());
    }

    for (parent, child) in edges {
        writeln!(output, "    n{} -> n{};", parent.0, child.0).unwrap();
    }
    writeln!(output, "}}").unwrap();
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{BinOp, Location};

    fn loc() -> Location {
        Location::on_line(1, 1, 1)
    }

    #[test]
    fn test_dot_single_node() {
        let mut arena = Arena::new();
        let root = arena.scope(vec![], loc());
        let dot = to_dot(&arena, root);
        assert!(dot.starts_with("digraph AST {\n"));
        assert!(dot.contains("n0 [label=\"Scope\", shape=ellipse"));
        assert!(dot.trim_end().ends_with('}'));
        assert!(!dot.contains("->"));
    }

    #[test]
    fn test_dot_edges_follow_tree() {
        let mut arena = Arena::new();
        let x = arena.var("x", loc());
        let two = arena.number(2, loc());
        let sum = arena.binary(BinOp::Add, x, two, loc());
        let out = arena.output(sum, loc());
        let root = arena.scope(vec![out], loc());

        let dot = to_dot(&arena, root);
        assert!(dot.contains("n4 -> n3;"));
        assert!(dot.contains("n3 -> n2;"));
        assert!(dot.contains("n2 -> n0;"));
        assert!(dot.contains("n2 -> n1;"));
        assert!(dot.contains("label=\"+\", shape=box"));
        assert!(dot.contains("label=\"x\", shape=diamond"));
        assert_eq!(dot.matches("->").count(), 4);
    }

    #[test]
    fn test_dot_visits_children_left_to_right() {
        let mut arena = Arena::new();
        let a = arena.number(1, loc());
        let b = arena.number(2, loc());
        let sum = arena.binary(BinOp::Sub, a, b, loc());
        let dot = to_dot(&arena, sum);
        let first = dot.find("n0 [").unwrap();
        let second = dot.find("n1 [").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_escape_quotes() {
        assert_eq!(escape("a\"b"), "a\\\"b");
    }
}
