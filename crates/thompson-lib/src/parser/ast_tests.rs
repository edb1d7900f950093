use super::{Expr, parse};

#[test]
fn size_counts_every_node() {
    assert_eq!(Expr::Literal('a').size(), 1);
    assert_eq!(Expr::star(Expr::Digit('1')).size(), 2);

    let expr = parse("(a|b)*c").unwrap();
    // Concat, Star, Or, 'a', 'b', 'c'
    assert_eq!(expr.size(), 6);
}

#[test]
fn display_leaves() {
    assert_eq!(Expr::Literal('x').to_string(), "Literal('x')");
    assert_eq!(Expr::Digit('0').to_string(), "Digit('0')");
    assert_eq!(Expr::Literal('\'').to_string(), r"Literal('\'')");
}

#[test]
fn display_composites() {
    let expr = Expr::or(
        Expr::optional(Expr::Literal('a')),
        Expr::concat(Expr::plus(Expr::Digit('2')), Expr::Literal('ε')),
    );
    insta::assert_snapshot!(expr, @"Or(Optional(Literal('a')), Concat(Plus(Digit('2')), Literal('ε')))");
}

#[test]
fn digit_and_literal_are_distinct() {
    assert_ne!(Expr::Digit('1'), Expr::Literal('1'));
    assert_eq!(parse("1").unwrap(), Expr::Digit('1'));
}

#[test]
fn clone_is_deep() {
    let expr = parse("a(b|c)+").unwrap();
    let copy = expr.clone();
    assert_eq!(expr, copy);
    assert_eq!(copy.to_string(), expr.to_string());
}

fn deep_star(depth: usize) -> Expr {
    (0..depth).fold(Expr::Literal('a'), |node, _| Expr::star(node))
}

#[test]
fn deep_trees_are_walked_without_recursion() {
    let depth = 200_000;
    let expr = deep_star(depth);

    assert_eq!(expr.size(), depth + 1);

    let text = expr.to_string();
    assert!(text.starts_with("Star(Star("));
    assert!(text.ends_with("Literal('a'))))"));
    assert_eq!(text.len(), "Star()".len() * depth + "Literal('a')".len());

    let copy = expr.clone();
    assert_eq!(copy, expr);
    assert_ne!(copy, deep_star(depth - 1));
    drop(copy);
}

#[test]
fn deep_concat_from_parser() {
    let expr = parse(&"ab".repeat(100_000)).unwrap();
    assert_eq!(expr.size(), 2 * 200_000 - 1);
    assert!(expr.to_string().starts_with("Concat(Concat("));
}

#[test]
fn fold_visits_left_before_right() {
    let expr = parse("ab|c*").unwrap();
    let mut order = String::new();
    expr.fold(|node, _| {
        order.push_str(&node.to_string()[..1]);
    });
    // Literal a, Literal b, Concat, Literal c, Star, Or
    assert_eq!(order, "LLCLSO");
}

#[test]
fn debug_matches_display() {
    let expr = Expr::concat(Expr::optional(Expr::Literal('a')), Expr::Digit('1'));
    assert_eq!(format!("{expr:?}"), expr.to_string());
}
