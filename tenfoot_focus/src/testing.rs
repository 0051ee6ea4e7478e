// Copyright 2025 the Tenfoot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A flat, in-memory geometry source for unit tests.

use alloc::vec::Vec;

use kurbo::Rect;

use crate::element::ElementInfo;
use crate::source::GeometrySource;

#[derive(Clone, Debug)]
struct Entry {
    id: u32,
    parent: Option<u32>,
    rect: Rect,
    info: ElementInfo,
    visible: bool,
}

#[derive(Clone, Debug, Default)]
pub(crate) struct FlatSource {
    entries: Vec<Entry>,
}

impl FlatSource {
    pub(crate) fn push(&mut self, id: u32, parent: Option<u32>, rect: Rect, info: ElementInfo) {
        self.entries.push(Entry {
            id,
            parent,
            rect,
            info,
            visible: true,
        });
    }

    pub(crate) fn set_visible(&mut self, id: u32, visible: bool) {
        if let Some(e) = self.entries.iter_mut().find(|e| e.id == id) {
            e.visible = visible;
        }
    }

    fn get(&self, id: u32) -> Option<&Entry> {
        self.entries.iter().find(|e| e.id == id)
    }
}

impl GeometrySource<u32> for FlatSource {
    fn elements(&self) -> Vec<u32> {
        self.entries.iter().map(|e| e.id).collect()
    }

    fn rect_of(&self, id: u32) -> Option<Rect> {
        self.get(id).map(|e| e.rect)
    }

    fn is_visible(&self, id: u32) -> bool {
        self.get(id).is_some_and(|e| e.visible)
    }

    fn info_of(&self, id: u32) -> Option<ElementInfo> {
        self.get(id).map(|e| e.info)
    }

    fn parent_of(&self, id: u32) -> Option<u32> {
        self.get(id).and_then(|e| e.parent)
    }
}
