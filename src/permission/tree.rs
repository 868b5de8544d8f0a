use super::record::Permission;
use crate::locale::Translate;

/// Organization struct.
/// A forest under construction. Records live in an arena and children are
/// stored as arena indices, so every record has exactly one owner slot.
#[derive(Debug, Default)]
pub struct PermissionForest {
    /// Arena of placed records. Slots are emptied only by `into_trees`.
    nodes: Vec<Option<Permission>>,
    /// Arena index -> child indices: carried children first, then attached
    /// ones in attachment order.
    children: Vec<Vec<usize>>,
    /// Top-level arena indices, in placement order.
    roots: Vec<usize>,
}

impl PermissionForest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records placed so far, carried children included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Localizes a record and places it at the top level.
    pub fn attach_root<T: Translate + ?Sized>(&mut self, record: Permission, translator: &T) {
        let index = self.place(record, translator);
        self.roots.push(index);
    }

    /// Searches the placed records depth-first, pre-order, for the candidate's
    /// parent. On a match the candidate is localized and becomes that parent's
    /// last child. Otherwise the candidate is handed back untouched.
    pub fn find_and_attach<T: Translate + ?Sized>(
        &mut self,
        candidate: Permission,
        translator: &T,
    ) -> Result<(), Permission> {
        let parent_id = match candidate.parent_id {
            Some(parent_id) => parent_id,
            None => return Err(candidate),
        };

        match self.find(parent_id) {
            Some(parent) => {
                let index = self.place(candidate, translator);
                self.children[parent].push(index);
                Ok(())
            }
            None => Err(candidate),
        }
    }

    /// Arena index of the first record with `id` in pre-order.
    fn find(&self, id: u32) -> Option<usize> {
        // Explicit stack, pushed in reverse so siblings pop in order.
        let mut stack: Vec<usize> = self.roots.iter().rev().copied().collect();

        while let Some(index) = stack.pop() {
            if let Some(node) = &self.nodes[index] {
                if node.id == id {
                    return Some(index);
                }
            }
            stack.extend(self.children[index].iter().rev().copied());
        }

        None
    }

    fn place<T: Translate + ?Sized>(&mut self, mut record: Permission, translator: &T) -> usize {
        if !record.name.is_empty() {
            record.name = translator.translate(&record.name);
        }
        self.insert(record)
    }

    /// Adds a record to the arena along with the children it already carries,
    /// which stay ahead of anything attached later and are not localized.
    fn insert(&mut self, record: Permission) -> usize {
        let first = self.nodes.len();
        let mut stack: Vec<(Permission, Option<usize>)> = vec![(record, None)];

        while let Some((mut record, parent)) = stack.pop() {
            let carried = std::mem::take(&mut record.children);
            let index = self.nodes.len();
            self.nodes.push(Some(record));
            self.children.push(Vec::new());
            if let Some(parent) = parent {
                self.children[parent].push(index);
            }
            stack.extend(carried.into_iter().rev().map(|child| (child, Some(index))));
        }

        first
    }

    /// Moves every record into its parent's `children`, returning the top level.
    pub fn into_trees(mut self) -> Vec<Permission> {
        // A child is always placed after its parent, so walking the arena
        // backwards completes every subtree before its parent is taken.
        let mut built: Vec<Option<Permission>> = Vec::with_capacity(self.nodes.len());
        built.resize_with(self.nodes.len(), || None);

        for index in (0..self.nodes.len()).rev() {
            if let Some(mut record) = self.nodes[index].take() {
                let attached = std::mem::take(&mut self.children[index]);
                record
                    .children
                    .extend(attached.into_iter().filter_map(|child| built[child].take()));
                built[index] = Some(record);
            }
        }

        self.roots
            .iter()
            .filter_map(|&root| built[root].take())
            .collect()
    }
}

/// Converts a flat listing into a forest for menu rendering.
///
/// Roots (parent 0 or absent) are placed first, in input order. Every other
/// record is then attached, in input order, under the first record in the
/// forest built so far whose id matches its parent id. Records whose parent
/// is not in the forest yet are placed at the top level instead, so a record
/// listed before its non-root parent ends up at the top level too.
///
/// Each non-empty name is passed through `translator` exactly once. Absent
/// (`None`) entries are skipped.
pub fn build_tree<I, T>(records: I, translator: &T) -> Vec<Permission>
where
    I: IntoIterator,
    I::Item: Into<Option<Permission>>,
    T: Translate + ?Sized,
{
    let (roots, pending): (Vec<Permission>, Vec<Permission>) = records
        .into_iter()
        .filter_map(|record| -> Option<Permission> { record.into() })
        .partition(Permission::is_root);

    let mut forest = PermissionForest::new();

    for record in roots {
        forest.attach_root(record, translator);
    }

    for record in pending {
        if let Err(orphan) = forest.find_and_attach(record, translator) {
            log::debug!(
                "Permission {} has no placed parent {:?}, keeping it at the top level.",
                orphan.id,
                orphan.parent_id
            );
            forest.attach_root(orphan, translator);
        }
    }

    forest.into_trees()
}

/// Pre-order walk over a finished forest.
pub fn flatten(forest: &[Permission]) -> Vec<&Permission> {
    let mut out = Vec::new();
    let mut stack: Vec<&Permission> = forest.iter().rev().collect();

    while let Some(node) = stack.pop() {
        out.push(node);
        stack.extend(node.children.iter().rev());
    }

    out
}
