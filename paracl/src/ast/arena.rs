//! Node arena
//!
//! The arena is the only way to construct nodes. Children must already live
//! in the arena when their parent is built and each node may be adopted by at
//! most one parent, so the stored graph is always a tree whose edges point
//! from higher to lower indices.

use super::{BinOp, CmpOp, Location, LogicOp, Node, NodeId, NodeKind, UnOp};
use serde::Serialize;
use std::ops::Index;

/// Owner of every node built during one parse
#[derive(Debug, Default, Serialize)]
pub struct Arena {
    nodes: Vec<Node>,
    #[serde(skip)]
    adopted: Vec<bool>,
}

impl Arena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Look up a node, `None` for an index this arena never handed out
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// Whether some parent already references `id`
    pub fn has_parent(&self, id: NodeId) -> bool {
        self.adopted.get(id.index()).copied().unwrap_or(false)
    }

    /// All nodes in construction order
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, node)| (NodeId(i as u32), node))
    }

    fn alloc(&mut self, kind: NodeKind, location: Location) -> NodeId {
        for child in kind.children() {
            self.adopt(child);
        }
        let id = NodeId(u32::try_from(self.nodes.len()).expect("node arena overflow"));
        self.nodes.push(Node { kind, location });
        self.adopted.push(false);
        id
    }

    fn adopt(&mut self, child: NodeId) {
        let slot = self
            .adopted
            .get_mut(child.index())
            .unwrap_or_else(|| panic!("dangling child reference {child}"));
        assert!(!*slot, "node {child} already has a parent");
        *slot = true;
    }

    pub fn number(&mut self, value: i32, location: Location) -> NodeId {
        self.alloc(NodeKind::Number(value), location)
    }

    pub fn input(&mut self, location: Location) -> NodeId {
        self.alloc(NodeKind::Input, location)
    }

    pub fn var(&mut self, name: impl Into<String>, location: Location) -> NodeId {
        self.alloc(NodeKind::Var(name.into()), location)
    }

    pub fn unary(&mut self, op: UnOp, operand: NodeId, location: Location) -> NodeId {
        self.alloc(NodeKind::Unary { op, operand }, location)
    }

    pub fn binary(&mut self, op: BinOp, left: NodeId, right: NodeId, location: Location) -> NodeId {
        self.alloc(NodeKind::Binary { op, left, right }, location)
    }

    pub fn compare(&mut self, op: CmpOp, left: NodeId, right: NodeId, location: Location) -> NodeId {
        self.alloc(NodeKind::Compare { op, left, right }, location)
    }

    pub fn logic(&mut self, op: LogicOp, left: NodeId, right: NodeId, location: Location) -> NodeId {
        self.alloc(NodeKind::Logic { op, left, right }, location)
    }

    pub fn assign(&mut self, target: impl Into<String>, value: NodeId, location: Location) -> NodeId {
        self.alloc(
            NodeKind::Assign {
                target: target.into(),
                value,
            },
            location,
        )
    }

    pub fn decl(&mut self, name: impl Into<String>, location: Location) -> NodeId {
        self.alloc(NodeKind::Decl(name.into()), location)
    }

    pub fn scope(&mut self, stmts: Vec<NodeId>, location: Location) -> NodeId {
        self.alloc(NodeKind::Scope(stmts), location)
    }

    pub fn if_else(
        &mut self,
        predicate: NodeId,
        then_scope: NodeId,
        else_scope: Option<NodeId>,
        location: Location,
    ) -> NodeId {
        self.alloc(
            NodeKind::If {
                predicate,
                then_scope,
                else_scope,
            },
            location,
        )
    }

    pub fn while_loop(&mut self, predicate: NodeId, body: NodeId, location: Location) -> NodeId {
        self.alloc(NodeKind::While { predicate, body }, location)
    }

    pub fn output(&mut self, expr: NodeId, location: Location) -> NodeId {
        self.alloc(NodeKind::Output(expr), location)
    }
}

impl Index<NodeId> for Arena {
    type Output = Node;

    fn index(&self, id: NodeId) -> &Node {
        self.get(id)
            .unwrap_or_else(|| panic!("node {id} does not belong to this arena"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loc() -> Location {
        Location::on_line(1, 1, 1)
    }

    #[test]
    fn test_alloc_returns_sequential_ids() {
        let mut arena = Arena::new();
        let a = arena.number(1, loc());
        let b = arena.number(2, loc());
        assert_eq!(a, NodeId(0));
        assert_eq!(b, NodeId(1));
        assert_eq!(arena.len(), 2);
    }

    #[test]
    fn test_children_are_adopted() {
        let mut arena = Arena::new();
        let a = arena.number(1, loc());
        let b = arena.number(2, loc());
        assert!(!arena.has_parent(a));
        let sum = arena.binary(BinOp::Add, a, b, loc());
        assert!(arena.has_parent(a));
        assert!(arena.has_parent(b));
        assert!(!arena.has_parent(sum));
    }

    #[test]
    fn test_index_returns_node() {
        let mut arena = Arena::new();
        let x = arena.var("x", Location::on_line(2, 3, 1));
        assert_eq!(arena[x].kind, NodeKind::Var("x".to_string()));
        assert_eq!(arena[x].location.begin.line, 2);
    }

    #[test]
    fn test_if_without_else() {
        let mut arena = Arena::new();
        let p = arena.number(1, loc());
        let body = arena.scope(vec![], loc());
        let cond = arena.if_else(p, body, None, loc());
        assert_eq!(arena[cond].kind.children(), vec![p, body]);
    }

    #[test]
    #[should_panic(expected = "already has a parent")]
    fn test_shared_child_rejected() {
        let mut arena = Arena::new();
        let a = arena.number(1, loc());
        arena.output(a, loc());
        arena.output(a, loc());
    }

    #[test]
    #[should_panic(expected = "dangling child")]
    fn test_forward_reference_rejected() {
        let mut arena = Arena::new();
        arena.output(NodeId(7), loc());
    }

    #[test]
    fn test_get_out_of_range() {
        let arena = Arena::new();
        assert!(arena.get(NodeId(0)).is_none());
        assert!(arena.is_empty());
    }

    #[test]
    fn test_iter_in_construction_order() {
        let mut arena = Arena::new();
        arena.input(loc());
        arena.decl("y", loc());
        let kinds: Vec<_> = arena.iter().map(|(id, n)| (id, n.kind.clone())).collect();
        assert_eq!(
            kinds,
            vec![
                (NodeId(0), NodeKind::Input),
                (NodeId(1), NodeKind::Decl("y".to_string())),
            ]
        );
    }
}
