//! Reader for Newick (bracket notation) tree descriptions.
//!
//! `(x,y)z;` describes a root `z` with leaf children `x` and `y`. Labels may
//! carry a `:length` branch length; whitespace and `[...]` comments are
//! skipped; the trailing `;` is optional. The reader accepts any child
//! count per node, bifurcation is enforced by the basis construction.

use generational_arena::Index;
use tracing::instrument;

use crate::domain::arena::{NodeData, TreeArena};
use crate::domain::error::{DomainError, TreeResult};

/// Parses a Newick string into an arena tree.
///
/// # Errors
/// [`DomainError::InvalidNewick`] with the byte position of the offending
/// character.
#[instrument(level = "debug", skip(input))]
pub fn parse(input: &str) -> TreeResult<TreeArena> {
    let mut reader = Reader::new(input);
    let mut tree = TreeArena::new();

    reader.skip_filler();
    reader.subtree(&mut tree, None)?;
    reader.skip_filler();
    reader.eat(b';');
    reader.skip_filler();

    if !reader.at_end() {
        return Err(reader.error("trailing characters after tree"));
    }
    Ok(tree)
}

struct Reader<'a> {
    input: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input: input.as_bytes(),
            pos: 0,
        }
    }

    fn peek(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    fn at_end(&self) -> bool {
        self.pos >= self.input.len()
    }

    fn eat(&mut self, byte: u8) -> bool {
        if self.peek() == Some(byte) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn error(&self, message: &str) -> DomainError {
        DomainError::InvalidNewick {
            position: self.pos,
            message: message.to_string(),
        }
    }

    /// Skips whitespace and `[...]` comments. An unterminated comment runs
    /// to the end of input and surfaces as an unexpected-end error later.
    fn skip_filler(&mut self) {
        loop {
            match self.peek() {
                Some(c) if c.is_ascii_whitespace() => self.pos += 1,
                Some(b'[') => {
                    while let Some(c) = self.peek() {
                        self.pos += 1;
                        if c == b']' {
                            break;
                        }
                    }
                }
                _ => break,
            }
        }
    }

    /// One subtree: `(child,child,...)label:length` or `label:length`.
    /// Parents are inserted before their children so arena insertion order
    /// follows reading order.
    fn subtree(&mut self, tree: &mut TreeArena, parent: Option<Index>) -> TreeResult<Index> {
        if self.eat(b'(') {
            let idx = tree.insert_node(NodeData::named(""), parent);
            loop {
                self.skip_filler();
                self.subtree(tree, Some(idx))?;
                self.skip_filler();
                if self.eat(b',') {
                    continue;
                }
                if self.eat(b')') {
                    break;
                }
                return Err(self.error("expected ',' or ')'"));
            }
            self.skip_filler();
            let name = self.label();
            let branch_length = self.branch_length()?;

            let node = tree.get_node_mut(idx).ok_or(DomainError::MissingNode)?;
            node.data.name = name;
            node.data.branch_length = branch_length;
            Ok(idx)
        } else {
            let name = self.label();
            if name.is_empty() {
                return Err(self.error("expected a subtree or label"));
            }
            let branch_length = self.branch_length()?;
            Ok(tree.insert_node(NodeData { name, branch_length }, parent))
        }
    }

    /// Unquoted label: everything up to a structural character.
    fn label(&mut self) -> String {
        let start = self.pos;
        while let Some(c) = self.peek() {
            if matches!(c, b'(' | b')' | b',' | b':' | b';' | b'[') || c.is_ascii_whitespace() {
                break;
            }
            self.pos += 1;
        }
        String::from_utf8_lossy(&self.input[start..self.pos]).into_owned()
    }

    fn branch_length(&mut self) -> TreeResult<Option<f64>> {
        self.skip_filler();
        if !self.eat(b':') {
            return Ok(None);
        }
        self.skip_filler();

        let start = self.pos;
        while let Some(c) = self.peek() {
            if c.is_ascii_digit() || matches!(c, b'+' | b'-' | b'.' | b'e' | b'E') {
                self.pos += 1;
            } else {
                break;
            }
        }

        let text = String::from_utf8_lossy(&self.input[start..self.pos]);
        match text.parse::<f64>() {
            Ok(length) => Ok(Some(length)),
            Err(_) => Err(DomainError::InvalidNewick {
                position: start,
                message: format!("invalid branch length '{text}'"),
            }),
        }
    }
}
