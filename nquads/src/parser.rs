//! Adapter for the [N-Quads] parser from [RIO](https://github.com/Tpt/rio/blob/master/turtle/src/ntriples.rs)
//!
//! Quads are converted into owned [`Quad`]s as they are parsed,
//! and collected into a [`Dataset`],
//! so duplicate lines in the input are collapsed.
//!
//! [N-Quads]: https://www.w3.org/TR/n-quads/
use std::io::{BufRead, Cursor};

use ldcanon_api::{Dataset, Node, Quad};
use rio_api::model::{
    BlankNode, GraphName as RioGraphName, Literal, NamedNode, Quad as RioQuad, Subject,
    Term as RioTerm,
};
use rio_api::parser::QuadsParser;
use rio_turtle::NQuadsParser;

use crate::NQuadsError;

/// Parse an N-Quads document held in memory.
pub fn parse_str(txt: &str) -> Result<Dataset, NQuadsError> {
    parse_bufread(Cursor::new(txt))
}

/// Parse an N-Quads document from a [`BufRead`].
pub fn parse_bufread<B: BufRead>(data: B) -> Result<Dataset, NQuadsError> {
    let mut parser = NQuadsParser::new(data);
    let mut dataset = Dataset::new();
    while !parser.is_end() {
        parser.parse_step(&mut |q| -> Result<(), NQuadsError> {
            dataset.insert_quad(convert_quad(q)?);
            Ok(())
        })?;
    }
    Ok(dataset)
}

fn convert_quad(q: RioQuad) -> Result<Quad, NQuadsError> {
    let subject = match q.subject {
        Subject::NamedNode(n) => iri(n),
        Subject::BlankNode(b) => bnode(b)?,
        Subject::Triple(_) => return Err(quoted_triple()),
    };
    let object = match q.object {
        RioTerm::NamedNode(n) => iri(n),
        RioTerm::BlankNode(b) => bnode(b)?,
        RioTerm::Literal(l) => literal(l),
        RioTerm::Triple(_) => return Err(quoted_triple()),
    };
    let graph = q
        .graph_name
        .map(|g| match g {
            RioGraphName::NamedNode(n) => Ok(iri(n)),
            RioGraphName::BlankNode(b) => bnode(b),
        })
        .transpose()?;
    Ok(Quad::from_terms(subject, iri(q.predicate), object, graph))
}

fn iri(n: NamedNode) -> Node {
    Node::iri(n.iri)
}

fn bnode(b: BlankNode) -> Result<Node, NQuadsError> {
    Ok(Node::checked_blank(b.id)?)
}

fn literal(l: Literal) -> Node {
    match l {
        Literal::Simple { value } => Node::literal(value),
        Literal::LanguageTaggedString { value, language } => Node::lang_literal(value, language),
        Literal::Typed { value, datatype } => Node::typed_literal(value, datatype.iri),
    }
}

fn quoted_triple() -> NQuadsError {
    NQuadsError::Unsupported("quoted triples".into())
}
