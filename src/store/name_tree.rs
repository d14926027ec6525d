//! First-name search tree.
//!
//! An unbalanced binary search tree keyed by [`NameKey`]. Every node holds all
//! contacts sharing its first name, sorted by last name. Inserting names in
//! sorted order produces a tree that is effectively a linked list; lookups
//! are then linear in the number of distinct first names.

use crate::domain::NameKey;
use crate::models::ContactRef;
use std::cmp::Ordering;

/// One distinct first name and the contacts that carry it.
#[derive(Debug)]
pub struct ContactNode {
    key: NameKey,
    contacts: Vec<ContactRef>,
    left: Option<Box<ContactNode>>,
    right: Option<Box<ContactNode>>,
}

impl ContactNode {
    pub fn new(key: NameKey) -> Self {
        Self {
            key,
            contacts: Vec::new(),
            left: None,
            right: None,
        }
    }

    /// Add a contact to this node, keeping the list sorted by last name.
    ///
    /// A contact equal to one already present is not added again. Returns
    /// whether the contact was added.
    pub fn add_contact(&mut self, contact: ContactRef) -> bool {
        if self.contacts.iter().any(|existing| **existing == *contact) {
            return false;
        }
        // Stable: contacts with the same last name stay in arrival order.
        let at = self
            .contacts
            .partition_point(|existing| existing.last_name() <= contact.last_name());
        self.contacts.insert(at, contact);
        true
    }

    pub fn key(&self) -> &NameKey {
        &self.key
    }

    pub fn contacts(&self) -> &[ContactRef] {
        &self.contacts
    }

    pub fn left(&self) -> Option<&ContactNode> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&ContactNode> {
        self.right.as_deref()
    }
}

/// Binary search tree of contacts by first name.
#[derive(Debug, Default)]
pub struct ContactTree {
    root: Option<Box<ContactNode>>,
    nodes: usize,
}

impl ContactTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a contact under its first name.
    ///
    /// Returns false when an equal contact is already stored under that name.
    pub fn insert(&mut self, contact: ContactRef) -> bool {
        let key = NameKey::new(contact.first_name());

        let mut slot = &mut self.root;
        while let Some(node) = slot {
            match key.cmp(&node.key) {
                Ordering::Equal => return node.add_contact(contact),
                Ordering::Less => slot = &mut node.left,
                Ordering::Greater => slot = &mut node.right,
            }
        }

        let mut node = ContactNode::new(key);
        node.add_contact(contact);
        *slot = Some(Box::new(node));
        self.nodes += 1;
        true
    }

    /// All contacts with this first name, sorted by last name.
    pub fn get(&self, first_name: &str) -> &[ContactRef] {
        let key = NameKey::new(first_name);

        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match key.cmp(&node.key) {
                Ordering::Equal => return &node.contacts,
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
            };
        }
        &[]
    }

    pub fn root(&self) -> Option<&ContactNode> {
        self.root.as_deref()
    }

    /// Number of distinct first names.
    pub fn len(&self) -> usize {
        self.nodes
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Length of the longest root-to-leaf path, in nodes.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut pending: Vec<(&ContactNode, usize)> =
            self.root().map(|root| (root, 1)).into_iter().collect();

        while let Some((node, depth)) = pending.pop() {
            deepest = deepest.max(depth);
            pending.extend(node.left().map(|left| (left, depth + 1)));
            pending.extend(node.right().map(|right| (right, depth + 1)));
        }
        deepest
    }
}

// Dropping a degenerate tree recursively can overflow the stack.
impl Drop for ContactTree {
    fn drop(&mut self) {
        let mut pending: Vec<Box<ContactNode>> = self.root.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ContactId;
    use crate::models::Contact;
    use std::sync::Arc;

    fn contact(id: u32, first: &str, last: &str) -> ContactRef {
        Arc::new(
            Contact::new(ContactId::new(id).unwrap(), first, last)
                .with_company(Some("ACME"))
                .with_title(Some("CEO")),
        )
    }

    fn last_names(contacts: &[ContactRef]) -> Vec<&str> {
        contacts.iter().map(|c| c.last_name()).collect()
    }

    #[test]
    fn test_node_one_contact() {
        let john = contact(1, "John", "Doe");
        let mut node = ContactNode::new(NameKey::new(john.first_name()));

        assert_eq!(node.key().as_str(), "JOHN");
        assert!(node.contacts().is_empty());

        assert!(node.add_contact(john.clone()));
        assert_eq!(node.contacts(), &[john]);
        assert!(node.left().is_none());
        assert!(node.right().is_none());
    }

    #[test]
    fn test_node_keeps_last_name_order() {
        let mut node = ContactNode::new(NameKey::new("John"));
        node.add_contact(contact(1, "John", "Doe"));
        node.add_contact(contact(2, "John", "Deux"));

        assert_eq!(last_names(node.contacts()), vec!["DEUX", "DOE"]);
    }

    #[test]
    fn test_node_dedups_equal_contacts() {
        let mut node = ContactNode::new(NameKey::new("John"));
        assert!(node.add_contact(contact(1, "John", "Doe")));
        // Same person under a different ID is still a duplicate.
        assert!(!node.add_contact(contact(7, "John", "Doe")));
        assert_eq!(node.contacts().len(), 1);
    }

    #[test]
    fn test_insert_root() {
        let mut tree = ContactTree::new();
        assert!(tree.is_empty());
        tree.insert(contact(1, "John", "Doe"));

        let root = tree.root().unwrap();
        assert_eq!(root.contacts().len(), 1);
        assert!(root.left().is_none());
        assert!(root.right().is_none());
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn test_insert_left() {
        let mut tree = ContactTree::new();
        tree.insert(contact(1, "John", "Doe"));
        tree.insert(contact(2, "Jane", "Doe"));

        let root = tree.root().unwrap();
        assert_eq!(root.key().as_str(), "JOHN");
        assert_eq!(root.left().unwrap().key().as_str(), "JANE");
        assert!(root.right().is_none());
    }

    #[test]
    fn test_insert_right() {
        let mut tree = ContactTree::new();
        tree.insert(contact(2, "Jane", "Doe"));
        tree.insert(contact(1, "John", "Doe"));

        let root = tree.root().unwrap();
        assert_eq!(root.key().as_str(), "JANE");
        assert!(root.left().is_none());
        assert_eq!(root.right().unwrap().key().as_str(), "JOHN");
    }

    #[test]
    fn test_insert_left_of_right_child() {
        //   JANE
        //       \
        //       JOHN
        //      /
        //   JILL
        let mut tree = ContactTree::new();
        tree.insert(contact(2, "Jane", "Doe"));
        tree.insert(contact(1, "John", "Doe"));
        tree.insert(contact(3, "Jill", "Doe"));
        tree.insert(contact(4, "Jack", "Doe"));

        let root = tree.root().unwrap();
        let john = root.right().unwrap();
        assert_eq!(john.key().as_str(), "JOHN");
        assert_eq!(john.left().unwrap().key().as_str(), "JILL");
        assert_eq!(root.left().unwrap().key().as_str(), "JACK");
        assert_eq!(tree.depth(), 3);
    }

    #[test]
    fn test_insert_same_first_name_sorted() {
        let mut tree = ContactTree::new();
        tree.insert(contact(1, "John", "Doe"));
        tree.insert(contact(2, "John", "Deux"));
        tree.insert(contact(4, "Jane", "Doe"));
        tree.insert(contact(3, "John", "Drei"));
        tree.insert(contact(5, "Jane", "Deux"));

        let root = tree.root().unwrap();
        assert_eq!(last_names(root.contacts()), vec!["DEUX", "DOE", "DREI"]);
        assert_eq!(
            last_names(root.left().unwrap().contacts()),
            vec!["DEUX", "DOE"]
        );
        assert_eq!(tree.len(), 2);
    }

    #[test]
    fn test_get_is_case_insensitive() {
        let mut tree = ContactTree::new();
        tree.insert(contact(1, "Jeff", "Smith"));
        tree.insert(contact(2, "Karla", "Jones"));
        tree.insert(contact(3, "Jeff", "Adams"));

        assert_eq!(last_names(tree.get(" jeff ")), vec!["ADAMS", "SMITH"]);
        assert_eq!(tree.get("KARLA").len(), 1);
        assert!(tree.get("Kristen").is_empty());
        assert!(ContactTree::new().get("anyone").is_empty());
    }

    #[test]
    fn test_sorted_insertion_degenerates() {
        let mut tree = ContactTree::new();
        for (i, name) in ["Alice", "Bob", "Carol", "Dave", "Eve"].iter().enumerate() {
            tree.insert(contact(i as u32 + 1, name, "Doe"));
        }
        assert_eq!(tree.depth(), 5);
        assert_eq!(tree.get("eve").len(), 1);
    }

    #[test]
    fn test_drop_deep_tree() {
        let mut tree = ContactTree::new();
        for i in 1..=50_000u32 {
            tree.insert(contact(i, &format!("N{i:06}"), "Doe"));
        }
        assert_eq!(tree.len(), 50_000);
        drop(tree);
    }
}
