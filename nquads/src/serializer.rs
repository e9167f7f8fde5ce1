//! Serializer for the canonical form of the [N-Quads] concrete syntax of RDF,
//! as described in [RDFC-1.0](https://www.w3.org/TR/rdf-canon/#canonical-quads).
//!
//! [N-Quads]: https://www.w3.org/TR/n-quads/
use std::fmt::Write as _;
use std::io;

use ldcanon_api::ns::xsd;
use ldcanon_api::{Dataset, Node, QuadRef};

/// Serialize a node in canonical N-Quads, appending it to `buffer`.
pub fn write_term(node: &Node, buffer: &mut String) {
    match node {
        Node::Iri { value } => {
            buffer.push('<');
            buffer.push_str(value);
            buffer.push('>');
        }
        Node::BlankNode { value } => {
            buffer.push_str("_:");
            buffer.push_str(value);
        }
        Node::Literal {
            value,
            language,
            datatype,
        } => {
            buffer.push('"');
            write_escaped(value, buffer);
            buffer.push('"');
            if let Some(tag) = language {
                buffer.push('@');
                buffer.push_str(tag);
            } else if let Some(dt) = datatype.as_deref().filter(|dt| *dt != xsd::string) {
                buffer.push_str("^^<");
                buffer.push_str(dt);
                buffer.push('>');
            }
        }
    }
}

fn write_escaped(txt: &str, buffer: &mut String) {
    for c in txt.chars() {
        match c {
            '"' => buffer.push_str("\\\""),
            '\\' => buffer.push_str("\\\\"),
            '\n' => buffer.push_str("\\n"),
            '\r' => buffer.push_str("\\r"),
            '\t' => buffer.push_str("\\t"),
            '\x08' => buffer.push_str("\\b"),
            '\x0c' => buffer.push_str("\\f"),
            '\x7f' => buffer.push_str("\\u007F"),
            c if c <= '\x1f' => {
                let _ = write!(buffer, "\\u{:04X}", c as u32);
            }
            _ => buffer.push(c),
        }
    }
}

/// Serialize a quad as a canonical N-Quads line, including the final `" .\n"`.
pub fn quad_line<'a>(quad: impl Into<QuadRef<'a>>) -> String {
    let quad = quad.into();
    let mut line = String::new();
    write_quad(quad, &mut line);
    line
}

fn write_quad(quad: QuadRef, buffer: &mut String) {
    let ([s, p, o], g) = quad.spog();
    write_term(s, buffer);
    buffer.push(' ');
    write_term(p, buffer);
    buffer.push(' ');
    write_term(o, buffer);
    buffer.push(' ');
    if let Some(g) = g {
        write_term(g, buffer);
        buffer.push(' ');
    }
    buffer.push_str(".\n");
}

/// Serialize all the quads of `dataset` as N-Quads lines,
/// sorted by code point, without duplicates.
///
/// Sorting the serialized lines (rather than the quads)
/// is what makes the output order canonical.
pub fn to_nquads(dataset: &Dataset) -> String {
    let mut lines: Vec<String> = dataset.quads().map(quad_line).collect();
    // NB: comparing UTF-8 byte-by-byte is equivalent to comparing code points
    lines.sort_unstable();
    // distinct nodes may share a serialization (e.g. "a" and "a"^^xsd:string)
    lines.dedup();
    lines.concat()
}

/// Write [`to_nquads`]`(dataset)` into `w`.
pub fn write_nquads<W: io::Write>(dataset: &Dataset, mut w: W) -> io::Result<()> {
    w.write_all(to_nquads(dataset).as_bytes())
}
