//! I define [`IdentifierIssuer`],
//! which mints sequential blank node identifiers.
//!
//! See <https://www.w3.org/TR/rdf-canon/#issue-identifier>.
use std::collections::BTreeMap;

/// The prefix used by [`IdentifierIssuer::default`].
pub const DEFAULT_PREFIX: &str = "_:b";

/// Mints identifiers made of a fixed prefix followed by a counter,
/// remembering which identifier was issued for which key.
///
/// Cloning an issuer yields an independent copy,
/// which is how the N-degree hash algorithm explores alternatives.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IdentifierIssuer {
    prefix: String,
    counter: usize,
    issued: BTreeMap<String, String>,
    // keeps the order in which keys were issued an identifier
    issued_order: Vec<String>,
}

impl Default for IdentifierIssuer {
    fn default() -> Self {
        Self::new(DEFAULT_PREFIX)
    }
}

impl IdentifierIssuer {
    /// Build an issuer whose identifiers all start with `prefix`.
    ///
    /// With an empty prefix, identifiers are plain decimal numbers.
    pub fn new(prefix: impl Into<String>) -> Self {
        IdentifierIssuer {
            prefix: prefix.into(),
            counter: 0,
            issued: BTreeMap::new(),
            issued_order: vec![],
        }
    }

    /// The prefix of the identifiers minted by this issuer.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Return the identifier for `key`, minting it if needed.
    ///
    /// Without a key, a fresh identifier is minted on every call,
    /// and not remembered.
    pub fn get(&mut self, key: Option<&str>) -> String {
        match key {
            Some(key) => self.issue(key).0.to_string(),
            None => self.mint(),
        }
    }

    /// Return the identifier for `key`, minting it if needed,
    /// paired with a flag telling whether it was freshly minted.
    pub fn issue(&mut self, key: &str) -> (&str, bool) {
        let new = !self.issued.contains_key(key);
        if new {
            let id = self.mint();
            self.issued.insert(key.to_string(), id);
            self.issued_order.push(key.to_string());
        }
        let id = self.issued.get(key).map(String::as_str).unwrap_or_default();
        (id, new)
    }

    /// The identifier already issued for `key`, if any.
    pub fn get_issued(&self, key: &str) -> Option<&str> {
        self.issued.get(key).map(String::as_str)
    }

    /// Whether an identifier was already issued for `key`.
    pub fn exists(&self, key: &str) -> bool {
        self.issued.contains_key(key)
    }

    /// The keys that were issued an identifier, in issuance order.
    pub fn keys(&self) -> &[String] {
        &self.issued_order
    }

    /// Number of keys that were issued an identifier.
    pub fn len(&self) -> usize {
        self.issued_order.len()
    }

    /// Whether no key was issued an identifier yet.
    pub fn is_empty(&self) -> bool {
        self.issued_order.is_empty()
    }

    /// Consume this issuer and return its key-to-identifier map.
    pub fn into_issued(self) -> BTreeMap<String, String> {
        self.issued
    }

    fn mint(&mut self) -> String {
        let id = format!("{}{}", self.prefix, self.counter);
        self.counter += 1;
        id
    }
}
