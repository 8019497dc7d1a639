//! Read-only guidance catalog
//!
//! A nested, ordered key tree of typography and color guidance. Built once
//! on first access and never mutated afterwards; the dispatcher only reads it.

mod palette;
mod typography;

use std::sync::LazyLock;
use thiserror::Error;

static BUILTIN: LazyLock<Catalog> = LazyLock::new(Catalog::builtin);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("No catalog node at {path}")]
    NotFound { path: String },
    #[error("Catalog node at {path} is a group, not an entry")]
    NotAnEntry { path: String },
    #[error("Catalog node at {path} is an entry, not a group")]
    NotAGroup { path: String },
}

/// A leaf payload: a title, ordered named attributes, free-form description
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub title: &'static str,
    pub attrs: Vec<(&'static str, &'static str)>,
    pub description: &'static str,
}

impl Entry {
    pub fn new(title: &'static str, description: &'static str) -> Self {
        Self {
            title,
            attrs: Vec::new(),
            description,
        }
    }

    pub fn attr(mut self, name: &'static str, value: &'static str) -> Self {
        self.attrs.push((name, value));
        self
    }

    /// Look up an attribute value by name
    pub fn get(&self, name: &str) -> Option<&'static str> {
        self.attrs
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| *value)
    }
}

/// A titled group of children, kept in insertion order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub title: &'static str,
    children: Vec<(&'static str, Node)>,
}

impl Group {
    pub fn new(title: &'static str) -> Self {
        Self {
            title,
            children: Vec::new(),
        }
    }

    pub fn child(mut self, key: &'static str, node: impl Into<Node>) -> Self {
        self.children.push((key, node.into()));
        self
    }

    pub fn children(&self) -> impl Iterator<Item = (&'static str, &Node)> {
        self.children.iter().map(|(key, node)| (*key, node))
    }

    fn get(&self, key: &str) -> Option<&Node> {
        self.children
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, node)| node)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Group(Group),
    Entry(Entry),
}

impl From<Group> for Node {
    fn from(group: Group) -> Self {
        Node::Group(group)
    }
}

impl From<Entry> for Node {
    fn from(entry: Entry) -> Self {
        Node::Entry(entry)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    root: Node,
}

impl Catalog {
    /// The process-wide catalog
    pub fn global() -> &'static Catalog {
        &BUILTIN
    }

    fn builtin() -> Self {
        let root = Group::new("catalog")
            .child("fontSize", typography::font_sizes())
            .child("lineHeight", typography::line_heights())
            .child("letterSpacing", typography::letter_spacings())
            .child("fontPairing", typography::font_pairings())
            .child("colorTypography", typography::color_presets())
            .child("palette", palette::keyword_groups());
        Self { root: root.into() }
    }

    /// Resolve a key path. The empty path resolves to the root group.
    pub fn lookup(&self, path: &[&str]) -> Result<&Node, CatalogError> {
        let mut current = &self.root;
        for key in path {
            current = match current {
                Node::Group(group) => group
                    .get(key)
                    .ok_or_else(|| CatalogError::NotFound { path: join(path) })?,
                Node::Entry(_) => return Err(CatalogError::NotAGroup { path: join(path) }),
            };
        }
        Ok(current)
    }

    pub fn entry(&self, path: &[&str]) -> Result<&Entry, CatalogError> {
        match self.lookup(path)? {
            Node::Entry(entry) => Ok(entry),
            Node::Group(_) => Err(CatalogError::NotAnEntry { path: join(path) }),
        }
    }

    pub fn group(&self, path: &[&str]) -> Result<&Group, CatalogError> {
        match self.lookup(path)? {
            Node::Group(group) => Ok(group),
            Node::Entry(_) => Err(CatalogError::NotAGroup { path: join(path) }),
        }
    }

    /// Ordered child keys at `path`, used to build the next set of choices.
    pub fn keys(&self, path: &[&str]) -> Result<Vec<&'static str>, CatalogError> {
        Ok(self.group(path)?.children().map(|(key, _)| key).collect())
    }
}

fn join(path: &[&str]) -> String {
    path.join("/")
}
