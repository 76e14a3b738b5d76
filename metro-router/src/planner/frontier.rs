//! Frontier of paths awaiting expansion.
//!
//! Whatever the discipline, the next path to explore is always the front
//! element.

use std::collections::VecDeque;

use super::Path;

/// How new paths enter the frontier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Discipline {
    /// Children go to the front as a block (depth-first).
    Stack,
    /// Children go to the back as a block (breadth-first).
    Queue,
    /// Kept sorted by ascending `g` (uniform cost).
    ByCost,
    /// Kept sorted by ascending `f = g + h` (A*).
    ByEstimate,
}

impl Discipline {
    fn key(self, path: &Path) -> f64 {
        match self {
            Discipline::ByEstimate => path.f(),
            _ => path.g(),
        }
    }
}

/// Ordered working set of non-terminal paths.
#[derive(Debug)]
pub struct Frontier {
    discipline: Discipline,
    paths: VecDeque<Path>,
}

impl Frontier {
    /// An empty frontier.
    pub fn new(discipline: Discipline) -> Self {
        Self {
            discipline,
            paths: VecDeque::new(),
        }
    }

    /// A frontier holding only `path`.
    pub fn seeded(discipline: Discipline, path: Path) -> Self {
        Self {
            discipline,
            paths: VecDeque::from([path]),
        }
    }

    pub fn discipline(&self) -> Discipline {
        self.discipline
    }

    /// Remove and return the next path to explore.
    pub fn pop_front(&mut self) -> Option<Path> {
        self.paths.pop_front()
    }

    /// The next path to explore.
    pub fn front(&self) -> Option<&Path> {
        self.paths.front()
    }

    /// Insert freshly produced children.
    ///
    /// `Stack` puts the block in front keeping the children's order, so the
    /// first child is explored next. The sorted disciplines place each
    /// child before the first path with a strictly greater key: equal keys
    /// keep arrival order and newcomers land after existing equals.
    pub fn insert(&mut self, children: Vec<Path>) {
        match self.discipline {
            Discipline::Stack => {
                for child in children.into_iter().rev() {
                    self.paths.push_front(child);
                }
            }
            Discipline::Queue => self.paths.extend(children),
            Discipline::ByCost | Discipline::ByEstimate => {
                for child in children {
                    let key = self.discipline.key(&child);
                    let at = self
                        .paths
                        .partition_point(|p| self.discipline.key(p) <= key);
                    self.paths.insert(at, child);
                }
            }
        }
    }

    /// Drop every path for which `keep` returns false, preserving order.
    /// Returns how many were dropped.
    pub fn retain(&mut self, keep: impl FnMut(&Path) -> bool) -> usize {
        let before = self.paths.len();
        self.paths.retain(keep);
        before - self.paths.len()
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.paths.iter()
    }
}
