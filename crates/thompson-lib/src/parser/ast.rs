//! Abstract syntax tree for patterns.
//!
//! Built bottom-up by the parser and consumed read-only by the NFA builder.
//! Every composite node owns its children; nothing is shared.
//!
//! Concatenation and postfix chains nest one level per pattern character, so
//! every walk over the tree (`fold`, `Display`, `PartialEq`, `Drop`) keeps its
//! own work stack instead of recursing.

use std::fmt;
use std::mem;

#[derive(Eq)]
pub enum Expr {
    /// Exactly one occurrence of the character.
    Literal(char),
    /// Exactly one occurrence of an ASCII digit. Compiles like `Literal`.
    Digit(char),
    /// `e*`
    Star(Box<Expr>),
    /// `e+`
    Plus(Box<Expr>),
    /// `e?`
    Optional(Box<Expr>),
    /// `l|r`
    Or(Box<Expr>, Box<Expr>),
    /// `lr`
    Concat(Box<Expr>, Box<Expr>),
}

/// Folded results of a node's children, left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Children<T> {
    Leaf,
    Unary(T),
    Binary(T, T),
}

impl Expr {
    pub fn star(inner: Expr) -> Self {
        Self::Star(Box::new(inner))
    }

    pub fn plus(inner: Expr) -> Self {
        Self::Plus(Box::new(inner))
    }

    pub fn optional(inner: Expr) -> Self {
        Self::Optional(Box::new(inner))
    }

    pub fn or(left: Expr, right: Expr) -> Self {
        Self::Or(Box::new(left), Box::new(right))
    }

    pub fn concat(left: Expr, right: Expr) -> Self {
        Self::Concat(Box::new(left), Box::new(right))
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Expr::Literal(_) | Expr::Digit(_))
    }

    fn name(&self) -> &'static str {
        match self {
            Expr::Literal(_) => "Literal",
            Expr::Digit(_) => "Digit",
            Expr::Star(_) => "Star",
            Expr::Plus(_) => "Plus",
            Expr::Optional(_) => "Optional",
            Expr::Or(..) => "Or",
            Expr::Concat(..) => "Concat",
        }
    }

    /// Number of nodes in the tree.
    pub fn size(&self) -> usize {
        self.fold(|_, children| match children {
            Children::Leaf => 1,
            Children::Unary(inner) => 1 + inner,
            Children::Binary(left, right) => 1 + left + right,
        })
    }

    /// Post-order fold: `combine` sees every node after all of its children,
    /// left subtree before right.
    pub fn fold<T>(&self, mut combine: impl FnMut(&Expr, Children<T>) -> T) -> T {
        enum Step<'a> {
            Enter(&'a Expr),
            Exit(&'a Expr),
        }

        let mut steps = vec![Step::Enter(self)];
        let mut results: Vec<T> = Vec::new();

        while let Some(step) = steps.pop() {
            match step {
                Step::Enter(node) => match node {
                    Expr::Literal(_) | Expr::Digit(_) => {
                        results.push(combine(node, Children::Leaf));
                    }
                    Expr::Star(inner) | Expr::Plus(inner) | Expr::Optional(inner) => {
                        steps.push(Step::Exit(node));
                        steps.push(Step::Enter(inner));
                    }
                    Expr::Or(left, right) | Expr::Concat(left, right) => {
                        steps.push(Step::Exit(node));
                        steps.push(Step::Enter(right));
                        steps.push(Step::Enter(left));
                    }
                },
                Step::Exit(node) => {
                    let children = match node {
                        Expr::Or(..) | Expr::Concat(..) => {
                            let right = results.pop();
                            let left = results.pop();
                            match (left, right) {
                                (Some(left), Some(right)) => Children::Binary(left, right),
                                _ => unreachable!("children are folded before their parent"),
                            }
                        }
                        _ => match results.pop() {
                            Some(inner) => Children::Unary(inner),
                            None => unreachable!("children are folded before their parent"),
                        },
                    };
                    results.push(combine(node, children));
                }
            }
        }

        match results.pop() {
            Some(result) => result,
            None => unreachable!("the root is always folded"),
        }
    }

    /// Move non-leaf children out, leaving leaf placeholders behind.
    fn detach_children(&mut self, out: &mut Vec<Expr>) {
        fn detach(slot: &mut Box<Expr>, out: &mut Vec<Expr>) {
            if !slot.is_leaf() {
                out.push(mem::replace(&mut **slot, Expr::Literal('\0')));
            }
        }

        match self {
            Expr::Literal(_) | Expr::Digit(_) => {}
            Expr::Star(inner) | Expr::Plus(inner) | Expr::Optional(inner) => detach(inner, out),
            Expr::Or(left, right) | Expr::Concat(left, right) => {
                detach(left, out);
                detach(right, out);
            }
        }
    }
}

impl Drop for Expr {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.detach_children(&mut pending);
        while let Some(mut node) = pending.pop() {
            node.detach_children(&mut pending);
        }
    }
}

impl Clone for Expr {
    fn clone(&self) -> Self {
        self.fold(|node, children| match (node, children) {
            (Expr::Literal(c), _) => Expr::Literal(*c),
            (Expr::Digit(c), _) => Expr::Digit(*c),
            (Expr::Star(_), Children::Unary(inner)) => Expr::star(inner),
            (Expr::Plus(_), Children::Unary(inner)) => Expr::plus(inner),
            (Expr::Optional(_), Children::Unary(inner)) => Expr::optional(inner),
            (Expr::Or(..), Children::Binary(left, right)) => Expr::or(left, right),
            (Expr::Concat(..), Children::Binary(left, right)) => Expr::concat(left, right),
            _ => unreachable!("children match the node's arity"),
        })
    }
}

impl PartialEq for Expr {
    fn eq(&self, other: &Self) -> bool {
        let mut pairs: Vec<(&Expr, &Expr)> = vec![(self, other)];

        while let Some(pair) = pairs.pop() {
            match pair {
                (Expr::Literal(a), Expr::Literal(b)) | (Expr::Digit(a), Expr::Digit(b)) => {
                    if a != b {
                        return false;
                    }
                }
                (Expr::Star(a), Expr::Star(b))
                | (Expr::Plus(a), Expr::Plus(b))
                | (Expr::Optional(a), Expr::Optional(b)) => pairs.push((&**a, &**b)),
                (Expr::Or(a_left, a_right), Expr::Or(b_left, b_right))
                | (Expr::Concat(a_left, a_right), Expr::Concat(b_left, b_right)) => {
                    pairs.push((&**a_right, &**b_right));
                    pairs.push((&**a_left, &**b_left));
                }
                _ => return false,
            }
        }

        true
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        enum Piece<'a> {
            Node(&'a Expr),
            Text(&'static str),
        }

        let mut pieces = vec![Piece::Node(self)];

        while let Some(piece) = pieces.pop() {
            let node = match piece {
                Piece::Text(text) => {
                    f.write_str(text)?;
                    continue;
                }
                Piece::Node(node) => node,
            };

            match node {
                Expr::Literal(c) | Expr::Digit(c) => write!(f, "{}({c:?})", node.name())?,
                Expr::Star(inner) | Expr::Plus(inner) | Expr::Optional(inner) => {
                    write!(f, "{}(", node.name())?;
                    pieces.push(Piece::Text(")"));
                    pieces.push(Piece::Node(inner));
                }
                Expr::Or(left, right) | Expr::Concat(left, right) => {
                    write!(f, "{}(", node.name())?;
                    pieces.push(Piece::Text(")"));
                    pieces.push(Piece::Node(right));
                    pieces.push(Piece::Text(", "));
                    pieces.push(Piece::Node(left));
                }
            }
        }

        Ok(())
    }
}

/// Same text as `Display`, which matches what a derived `Debug` would print.
impl fmt::Debug for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
