//! DOT Parser
//!
//! Parses the DOT subset used for graph descriptions:
//!
//! ```text
//! graph     : [strict] (graph | digraph) [ID] '{' stmt_list '}'
//! stmt_list : (stmt [';'])*
//! stmt      : ID '=' ID
//!           | (graph | node | edge) attr_list
//!           | ID (edgeop ID)* [attr_list]
//! attr_list : ('[' (ID ['=' ID] [',' | ';'])* ']')+
//! ```
//!
//! Every attribute is ignored except the edge weight (`weight`, alias `peso`).

use crate::error::{Error, Result};
use crate::graph::GraphDescription;
use crate::types::{Weight, INFINITY, INFINITY_TOKEN};

/// Attribute names recognised as edge weight
const WEIGHT_KEYS: [&str; 2] = ["weight", "peso"];

/// An identifier together with whether it was written as a quoted string
#[derive(Debug, Clone, PartialEq, Eq)]
struct Id {
    text: String,
    quoted: bool,
}

impl Id {
    fn is_keyword(&self, keyword: &str) -> bool {
        !self.quoted && self.text.eq_ignore_ascii_case(keyword)
    }
}

/// DOT Parser
pub struct DotParser {
    input: String,
    pos: usize,
}

impl DotParser {
    /// Create a new parser
    pub fn new(input: &str) -> Self {
        Self {
            input: input.to_string(),
            pos: 0,
        }
    }

    /// Parse a whole graph
    pub fn parse(&mut self) -> Result<GraphDescription> {
        self.skip_whitespace();
        self.try_keyword("strict");

        let directed = if self.try_keyword("digraph") {
            true
        } else if self.try_keyword("graph") {
            false
        } else {
            return Err(self.error("Expected 'graph' or 'digraph'"));
        };

        self.skip_whitespace();
        let name = if self.peek_char_is('{') {
            String::new()
        } else {
            self.parse_id()?.text
        };

        let mut desc = GraphDescription::new(name, directed);

        self.expect_char('{')?;
        loop {
            self.skip_whitespace();
            match self.peek_char() {
                Some('}') => {
                    self.pos += 1;
                    break;
                }
                Some(';') => {
                    self.pos += 1;
                }
                Some(_) => self.parse_statement(&mut desc)?,
                None => return Err(self.error("Unexpected end of input, expected '}'")),
            }
        }

        self.skip_whitespace();
        if self.pos < self.input.len() {
            return Err(self.error("Unexpected content after closing '}'"));
        }

        Ok(desc)
    }

    // ========================================================================
    // Statement Parsing
    // ========================================================================

    fn parse_statement(&mut self, desc: &mut GraphDescription) -> Result<()> {
        let first = self.parse_id()?;

        if first.is_keyword("subgraph") {
            return Err(self.error("Subgraphs are not supported"));
        }

        if first.is_keyword("graph") || first.is_keyword("node") || first.is_keyword("edge") {
            self.parse_attr_lists()?;
            return Ok(());
        }

        // Graph attribute: ID '=' ID
        if self.try_char('=') {
            self.parse_id()?;
            return Ok(());
        }

        let mut chain = vec![first.text];
        while let Some(op_directed) = self.try_edge_op() {
            if op_directed != desc.directed {
                let op = if op_directed { "->" } else { "--" };
                return Err(self.error(&format!(
                    "Edge operator '{}' not allowed in a {}",
                    op,
                    if desc.directed { "digraph" } else { "graph" }
                )));
            }
            chain.push(self.parse_id()?.text);
        }

        let attributes = self.parse_attr_lists()?;

        for name in &chain {
            desc.declare_vertex(name.clone());
        }

        if chain.len() > 1 {
            let weight = self.edge_weight(&attributes)?;
            for pair in chain.windows(2) {
                desc.push_edge(pair[0].clone(), pair[1].clone(), weight);
            }
        }

        Ok(())
    }

    /// Parse zero or more `[ ... ]` attribute lists
    fn parse_attr_lists(&mut self) -> Result<Vec<(String, String)>> {
        let mut attributes = Vec::new();

        while self.try_char('[') {
            loop {
                if self.try_char(']') {
                    break;
                }

                let key = self.parse_id()?.text;
                let value = if self.try_char('=') {
                    self.parse_id()?.text
                } else {
                    "true".to_string()
                };
                attributes.push((key, value));

                if !self.try_char(',') {
                    self.try_char(';');
                }
            }
        }

        Ok(attributes)
    }

    fn edge_weight(&self, attributes: &[(String, String)]) -> Result<Option<Weight>> {
        let value = attributes
            .iter()
            .rev()
            .find(|(k, _)| WEIGHT_KEYS.iter().any(|w| k.eq_ignore_ascii_case(w)))
            .map(|(_, v)| v.trim());

        match value {
            None => Ok(None),
            Some(v)
                if v.eq_ignore_ascii_case(INFINITY_TOKEN) || v.eq_ignore_ascii_case("infinity") =>
            {
                Ok(Some(INFINITY))
            }
            Some(v) => v
                .parse::<Weight>()
                .map(Some)
                .map_err(|_| self.error(&format!("Invalid edge weight '{}'", v))),
        }
    }

    // ========================================================================
    // Identifiers
    // ========================================================================

    fn parse_id(&mut self) -> Result<Id> {
        self.skip_whitespace();

        match self.peek_char() {
            Some('"') => self.parse_quoted(),
            Some(c) if c.is_alphabetic() || c == '_' => {
                let start = self.pos;
                while let Some(c) = self.peek_char() {
                    if c.is_alphanumeric() || c == '_' {
                        self.pos += c.len_utf8();
                    } else {
                        break;
                    }
                }
                Ok(Id {
                    text: self.input[start..self.pos].to_string(),
                    quoted: false,
                })
            }
            Some(c)
                if c.is_ascii_digit()
                    || c == '.'
                    || (c == '-' && self.peek_next_char_is_numeric()) =>
            {
                let start = self.pos;
                self.pos += c.len_utf8();
                while let Some(c) = self.peek_char() {
                    if c.is_ascii_digit() || c == '.' {
                        self.pos += 1;
                    } else {
                        break;
                    }
                }
                Ok(Id {
                    text: self.input[start..self.pos].to_string(),
                    quoted: false,
                })
            }
            other => Err(self.error(&format!("Expected identifier, got {:?}", other))),
        }
    }

    fn parse_quoted(&mut self) -> Result<Id> {
        // opening quote
        self.pos += 1;
        let mut text = String::new();

        loop {
            let c = self
                .peek_char()
                .ok_or_else(|| self.error("Unterminated string"))?;
            self.pos += c.len_utf8();

            match c {
                '"' => break,
                '\\' => match self.peek_char() {
                    Some('"') => {
                        self.pos += 1;
                        text.push('"');
                    }
                    Some('\\') => {
                        self.pos += 1;
                        text.push('\\');
                    }
                    Some('\n') => {
                        // line continuation
                        self.pos += 1;
                    }
                    _ => text.push('\\'),
                },
                _ => text.push(c),
            }
        }

        Ok(Id { text, quoted: true })
    }

    /// `Some(true)` for `->`, `Some(false)` for `--`
    fn try_edge_op(&mut self) -> Option<bool> {
        if self.try_str("->") {
            Some(true)
        } else if self.try_str("--") {
            Some(false)
        } else {
            None
        }
    }

    // ========================================================================
    // Helper Methods
    // ========================================================================

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek_char() {
            if c.is_whitespace() {
                self.pos += c.len_utf8();
            } else if self.peek_str("//") || c == '#' {
                while let Some(c) = self.peek_char() {
                    if c == '\n' {
                        break;
                    }
                    self.pos += c.len_utf8();
                }
            } else if self.peek_str("/*") {
                self.pos += 2;
                while self.pos < self.input.len() && !self.peek_str("*/") {
                    self.pos += self.peek_char().map(|c| c.len_utf8()).unwrap_or(1);
                }
                if self.peek_str("*/") {
                    self.pos += 2;
                }
            } else {
                break;
            }
        }
    }

    fn peek_char(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn peek_next_char_is_numeric(&self) -> bool {
        self.input[self.pos..]
            .chars()
            .nth(1)
            .map(|c| c.is_ascii_digit() || c == '.')
            .unwrap_or(false)
    }

    fn peek_char_is(&self, c: char) -> bool {
        self.peek_char() == Some(c)
    }

    fn peek_str(&self, s: &str) -> bool {
        self.input[self.pos..].starts_with(s)
    }

    fn try_char(&mut self, c: char) -> bool {
        self.skip_whitespace();
        if self.peek_char() == Some(c) {
            self.pos += c.len_utf8();
            true
        } else {
            false
        }
    }

    fn expect_char(&mut self, c: char) -> Result<()> {
        if self.try_char(c) {
            Ok(())
        } else {
            Err(self.error(&format!("Expected '{}', got {:?}", c, self.peek_char())))
        }
    }

    fn try_str(&mut self, s: &str) -> bool {
        self.skip_whitespace();
        if self.peek_str(s) {
            self.pos += s.len();
            true
        } else {
            false
        }
    }

    fn try_keyword(&mut self, keyword: &str) -> bool {
        self.skip_whitespace();
        let len = keyword.len();

        if self.pos + len <= self.input.len() && self.input.is_char_boundary(self.pos + len) {
            let slice = &self.input[self.pos..self.pos + len];
            if slice.eq_ignore_ascii_case(keyword) {
                let followed_by_ident = self.input[self.pos + len..]
                    .chars()
                    .next()
                    .map(|c| c.is_alphanumeric() || c == '_')
                    .unwrap_or(false);
                if !followed_by_ident {
                    self.pos += len;
                    return true;
                }
            }
        }
        false
    }

    fn error(&self, message: &str) -> Error {
        let line = self.input[..self.pos].matches('\n').count() + 1;
        Error::ParseError {
            line,
            message: message.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Result<GraphDescription> {
        DotParser::new(text).parse()
    }

    #[test]
    fn test_parse_undirected() {
        let desc = parse(
            r#"strict graph "exemplo" {
                a; b
                c -- a [weight=3];
                a -- b -- c
            }"#,
        )
        .unwrap();

        assert_eq!(desc.name, "exemplo");
        assert!(!desc.directed);
        assert_eq!(desc.vertices, vec!["a", "b", "c"]);
        assert_eq!(desc.edges.len(), 3);
        assert_eq!(desc.edges[0].origin, "c");
        assert_eq!(desc.edges[0].weight, Some(3));
        assert_eq!(desc.edges[2].weight, None);
    }

    #[test]
    fn test_parse_directed_with_attributes() {
        let desc = parse(
            r#"
            // comment
            digraph G {
                rankdir = LR
                node [shape=circle]
                "x y" -> z [peso=-2, color="red"]
                /* block
                   comment */
                z -> w [weight=inf]
                # shell style comment
            }
            "#,
        )
        .unwrap();

        assert!(desc.directed);
        assert_eq!(desc.vertices, vec!["x y", "z", "w"]);
        assert_eq!(desc.edges[0].weight, Some(-2));
        assert_eq!(desc.edges[1].weight, Some(INFINITY));
    }

    #[test]
    fn test_parse_quoted_escape() {
        let desc = parse(r#"graph { "say \"hi\"" }"#).unwrap();
        assert_eq!(desc.name, "");
        assert_eq!(desc.vertices, vec![r#"say "hi""#]);
    }

    #[test]
    fn test_parse_escaped_backslash() {
        let desc = parse(r#"graph g { "a\\" -- "b\\\"c" }"#).unwrap();
        assert_eq!(desc.vertices, vec![r"a\", r#"b\"c"#]);
    }

    #[test]
    fn test_parse_numeric_ids() {
        let desc = parse("graph g { 1 -- 2 -- -3 }").unwrap();
        assert_eq!(desc.vertices, vec!["1", "2", "-3"]);
        assert_eq!(desc.edges.len(), 2);
    }

    #[test]
    fn test_parse_wrong_edge_operator() {
        let err = parse("graph g {\n a -> b \n}").unwrap_err();
        assert!(matches!(err, Error::ParseError { line: 2, .. }));
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse("tree g { }").is_err());
        assert!(parse("graph g { a -- b").is_err());
        assert!(parse("graph g { a -- b [weight=x] }").is_err());
        assert!(parse("graph g { subgraph s { a } }").is_err());
        assert!(parse("graph g { } trailing").is_err());
    }
}
