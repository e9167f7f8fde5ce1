//! Well-known IRIs.
//!
//! Only the few IRIs that have a special meaning for
//! the N-Quads rendering of literals are defined here.
#![allow(non_upper_case_globals)]

/// The standard `rdf:` namespace.
pub mod rdf {
    /// The namespace IRI.
    pub const PREFIX: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
    /// `rdf:langString`, the implicit datatype of language-tagged strings.
    pub const langString: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#langString";
}

/// The standard `xsd:` namespace.
pub mod xsd {
    /// The namespace IRI.
    pub const PREFIX: &str = "http://www.w3.org/2001/XMLSchema#";
    /// `xsd:string`, the implicit datatype of simple literals.
    pub const string: &str = "http://www.w3.org/2001/XMLSchema#string";
    /// `xsd:integer`.
    pub const integer: &str = "http://www.w3.org/2001/XMLSchema#integer";
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn iris_are_in_their_namespace() {
        assert!(rdf::langString.starts_with(rdf::PREFIX));
        assert!(xsd::string.starts_with(xsd::PREFIX));
        assert!(xsd::integer.starts_with(xsd::PREFIX));
    }
}
