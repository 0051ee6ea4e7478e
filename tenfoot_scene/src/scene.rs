// Copyright 2025 the Tenfoot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core scene implementation: structure, updates, queries.

use alloc::vec::Vec;

use kurbo::Rect;
use tenfoot_focus::{ElementFlags, ElementInfo, GeometrySource};

use crate::types::{NodeId, SceneNode};

/// A headless element tree.
///
/// Every mutation advances [`Scene::revision`], which is what a navigator
/// watches to notice that its candidate set may be out of date.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    nodes: Vec<Option<Node>>,
    generations: Vec<u32>,
    free_list: Vec<usize>,
    roots: Vec<NodeId>,
    revision: u64,
}

#[derive(Clone, Debug)]
struct Node {
    generation: u32,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    data: SceneNode,
}

impl Scene {
    /// Create an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a node as the last child of `parent`, or as a new root if `None`.
    ///
    /// A stale `parent` is treated as `None`.
    pub fn insert(&mut self, parent: Option<NodeId>, data: SceneNode) -> NodeId {
        let (idx, generation) = if let Some(idx) = self.free_list.pop() {
            let generation = self.generations[idx].saturating_add(1);
            self.generations[idx] = generation;
            (idx, generation)
        } else {
            self.generations.push(1);
            self.nodes.push(None);
            (self.nodes.len() - 1, 1)
        };
        self.nodes[idx] = Some(Node {
            generation,
            parent: None,
            children: Vec::new(),
            data,
        });
        #[allow(
            clippy::cast_possible_truncation,
            reason = "NodeId uses 32-bit indices by design."
        )]
        let id = NodeId::new(idx as u32, generation);
        self.link(id, parent);
        self.bump();
        id
    }

    /// Remove a node and its whole subtree. Stale ids are ignored.
    pub fn remove(&mut self, id: NodeId) {
        if !self.is_alive(id) {
            return;
        }
        self.unlink(id);
        self.remove_subtree(id);
        self.bump();
    }

    fn remove_subtree(&mut self, id: NodeId) {
        let Some(node) = self.nodes[id.idx()].take() else {
            return;
        };
        self.free_list.push(id.idx());
        for child in node.children {
            self.remove_subtree(child);
        }
    }

    /// Move `id` to the end of `new_parent`'s children (or to the end of the roots).
    ///
    /// Returns `false` and leaves the scene unchanged if either id is stale or
    /// the move would make `id` its own ancestor.
    pub fn reparent(&mut self, id: NodeId, new_parent: Option<NodeId>) -> bool {
        if !self.is_alive(id) {
            return false;
        }
        if let Some(p) = new_parent
            && (!self.is_alive(p) || self.is_ancestor_or_self(id, p))
        {
            return false;
        }
        self.unlink(id);
        self.link(id, new_parent);
        self.bump();
        true
    }

    /// Update the bounds of `id`.
    pub fn set_rect(&mut self, id: NodeId, rect: Rect) {
        self.update(id, |n| n.rect = rect);
    }

    /// Show or hide `id` (and, implicitly, its subtree).
    pub fn set_shown(&mut self, id: NodeId, shown: bool) {
        self.update(id, |n| n.shown = shown);
    }

    /// Replace the element description of `id`.
    pub fn set_info(&mut self, id: NodeId, info: ElementInfo) {
        self.update(id, |n| n.info = info);
    }

    /// Add or remove `flags` on `id`.
    pub fn set_flags(&mut self, id: NodeId, flags: ElementFlags, value: bool) {
        self.update(id, |n| n.info.flags.set(flags, value));
    }

    fn update(&mut self, id: NodeId, f: impl FnOnce(&mut SceneNode)) {
        if let Some(node) = self.node_mut(id) {
            f(&mut node.data);
            self.bump();
        }
    }

    /// Returns true if `id` refers to a live node.
    pub fn is_alive(&self, id: NodeId) -> bool {
        self.node(id).is_some()
    }

    /// The data of a live node.
    pub fn get(&self, id: NodeId) -> Option<&SceneNode> {
        self.node(id).map(|n| &n.data)
    }

    /// Parent of a live node, or `None` for roots and stale ids.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).and_then(|n| n.parent)
    }

    /// Children of a node in order, or an empty slice if the node is stale.
    pub fn children_of(&self, id: NodeId) -> &[NodeId] {
        self.node(id)
            .map(|n| n.children.as_slice())
            .unwrap_or_default()
    }

    /// Root nodes in insertion order.
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// Number of live nodes.
    pub fn len(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_some()).count()
    }

    /// Whether the scene has no live nodes.
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Change counter; advances on every mutation.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// All live nodes in depth-first pre-order (document order).
    pub fn depth_first(&self) -> Vec<NodeId> {
        let mut out = Vec::with_capacity(self.len());
        let mut stack: Vec<NodeId> = self.roots.iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            out.push(id);
            stack.extend(self.children_of(id).iter().rev().copied());
        }
        out
    }

    /// Whether `id` and every ancestor are shown and `id` has a non-empty area.
    pub fn is_rendered(&self, id: NodeId) -> bool {
        let Some(node) = self.node(id) else {
            return false;
        };
        let r = node.data.rect;
        if !(r.width() > 0.0 && r.height() > 0.0) {
            return false;
        }
        let mut cursor = Some(id);
        while let Some(c) = cursor {
            match self.node(c) {
                Some(n) if n.data.shown => cursor = n.parent,
                _ => return false,
            }
        }
        true
    }

    fn is_ancestor_or_self(&self, ancestor: NodeId, id: NodeId) -> bool {
        let mut cursor = Some(id);
        while let Some(c) = cursor {
            if c == ancestor {
                return true;
            }
            cursor = self.parent(c);
        }
        false
    }

    fn node(&self, id: NodeId) -> Option<&Node> {
        let n = self.nodes.get(id.idx())?.as_ref()?;
        (n.generation == id.1).then_some(n)
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        let n = self.nodes.get_mut(id.idx())?.as_mut()?;
        (n.generation == id.1).then_some(n)
    }

    fn link(&mut self, id: NodeId, parent: Option<NodeId>) {
        let parent = parent.filter(|p| self.is_alive(*p));
        match parent.and_then(|p| self.node_mut(p)) {
            Some(p) => p.children.push(id),
            None => self.roots.push(id),
        }
        if let Some(n) = self.node_mut(id) {
            n.parent = parent;
        }
    }

    fn unlink(&mut self, id: NodeId) {
        match self.parent(id) {
            Some(parent) => {
                if let Some(p) = self.node_mut(parent) {
                    p.children.retain(|c| *c != id);
                }
            }
            None => self.roots.retain(|c| *c != id),
        }
        if let Some(n) = self.node_mut(id) {
            n.parent = None;
        }
    }

    fn bump(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

impl GeometrySource<NodeId> for Scene {
    fn elements(&self) -> Vec<NodeId> {
        self.depth_first()
    }

    fn rect_of(&self, id: NodeId) -> Option<Rect> {
        self.get(id).map(|n| n.rect)
    }

    fn is_visible(&self, id: NodeId) -> bool {
        self.is_rendered(id)
    }

    fn info_of(&self, id: NodeId) -> Option<ElementInfo> {
        self.get(id).map(|n| n.info)
    }

    fn parent_of(&self, id: NodeId) -> Option<NodeId> {
        self.parent(id)
    }

    fn revision(&self) -> Option<u64> {
        Some(self.revision)
    }
}
