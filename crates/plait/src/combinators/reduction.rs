use std::ops::RangeBounds;

use super::iteration::{repeated, Bounds};
use super::sequencing::seq;
use crate::parser::Parser;
use crate::GrammarError;

/// Left-associative chain `item (operator item)*` with an item count inside
/// `range`, reduced as `((a op b) op c) ...`.
///
/// `operator` parses to the binary function joining its neighbours, so one
/// chain can mix operators of the same precedence. Fails to build when the
/// range is empty or allows zero items.
pub fn fold_l<T, O>(
    item: Parser<T>,
    operator: Parser<O>,
    range: impl RangeBounds<usize>,
) -> Result<Parser<T>, GrammarError>
where
    T: Clone + 'static,
    O: Fn(T, T) -> T + Clone + 'static,
{
    let bounds = Bounds::from_range_nonzero("fold_l", range)?;
    Ok(chained(item, operator, bounds, reduce_left))
}

/// Right-associative chain, reduced as `a op (b op (c ...))`.
///
/// See [`fold_l`] for the accepted ranges.
pub fn fold_r<T, O>(
    item: Parser<T>,
    operator: Parser<O>,
    range: impl RangeBounds<usize>,
) -> Result<Parser<T>, GrammarError>
where
    T: Clone + 'static,
    O: Fn(T, T) -> T + Clone + 'static,
{
    let bounds = Bounds::from_range_nonzero("fold_r", range)?;
    Ok(chained(item, operator, bounds, reduce_right))
}

/// [`fold_l`] over one or more items.
pub fn fold_l1<T, O>(item: Parser<T>, operator: Parser<O>) -> Parser<T>
where
    T: Clone + 'static,
    O: Fn(T, T) -> T + Clone + 'static,
{
    chained(item, operator, Bounds::at_least(1), reduce_left)
}

/// [`fold_r`] over one or more items.
pub fn fold_r1<T, O>(item: Parser<T>, operator: Parser<O>) -> Parser<T>
where
    T: Clone + 'static,
    O: Fn(T, T) -> T + Clone + 'static,
{
    chained(item, operator, Bounds::at_least(1), reduce_right)
}

fn chained<T, O>(
    item: Parser<T>,
    operator: Parser<O>,
    bounds: Bounds,
    reduce: fn(T, Vec<(O, T)>) -> T,
) -> Parser<T>
where
    T: Clone + 'static,
    O: Fn(T, T) -> T + Clone + 'static,
{
    if bounds == Bounds::exactly(1) {
        return item;
    }

    let pairs = repeated(seq((operator, item.clone())), bounds.after_first());
    item.bind(move |first| {
        pairs
            .clone()
            .map(move |pairs| reduce(first.clone(), pairs))
    })
}

fn reduce_left<T, O: Fn(T, T) -> T>(first: T, pairs: Vec<(O, T)>) -> T {
    pairs
        .into_iter()
        .fold(first, |acc, (operator, value)| operator(acc, value))
}

fn reduce_right<T, O: Fn(T, T) -> T>(first: T, mut pairs: Vec<(O, T)>) -> T {
    let Some((mut operator, mut acc)) = pairs.pop() else {
        return first;
    };
    while let Some((previous_operator, previous)) = pairs.pop() {
        acc = operator(previous, acc);
        operator = previous_operator;
    }
    operator(first, acc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combinators::alt;
    use crate::messages;
    use crate::outcome::ParseOutcome;
    use crate::position::Position;
    use crate::tokens::{digit, literal};
    use pretty_assertions::assert_eq;

    type Op = fn(i64, i64) -> i64;

    fn at(column: usize) -> Position {
        Position::new(1, column)
    }

    fn number() -> Parser<i64> {
        digit().map(i64::from)
    }

    fn plus() -> Parser<Op> {
        literal("+").map(|_| (|a, b| a + b) as Op)
    }

    fn minus() -> Parser<Op> {
        literal("-").map(|_| (|a, b| a - b) as Op)
    }

    fn caret() -> Parser<Op> {
        literal("^").map(|_| (|a: i64, b: i64| a.pow(b as u32)) as Op)
    }

    // =========================================================================
    // fold_l
    // =========================================================================

    #[test]
    fn test_fold_l1_sums_until_chain_breaks() {
        assert_eq!(
            fold_l1(number(), plus()).parse("1+2+3+a+b+c"),
            ParseOutcome::single(6, "+a+b+c", at(5))
        );
    }

    #[test]
    fn test_fold_l_is_left_associative() {
        let p = fold_l(number(), alt([plus(), minus()]), 1..).unwrap();
        // (9 - 3) - 2, not 9 - (3 - 2)
        assert_eq!(p.parse_value("9-3-2"), Ok(4));
        assert_eq!(p.parse_value("9-3+2"), Ok(8));
    }

    #[test]
    fn test_fold_l_respects_max() {
        let p = fold_l(number(), plus(), 1..=2).unwrap();
        assert_eq!(p.parse("1+2+3"), ParseOutcome::single(3, "+3", at(3)));
    }

    #[test]
    fn test_fold_l_respects_min() {
        let p = fold_l(number(), plus(), 3..).unwrap();
        assert_eq!(p.parse("1+2"), ParseOutcome::failure("Expected '+', but got 'EOI'", at(3)));
        assert_eq!(p.parse_value("1+2+3"), Ok(6));
    }

    #[test]
    fn test_fold_l_single_item() {
        let p = fold_l(number(), plus(), 1..=1).unwrap();
        assert_eq!(p.parse("4+5"), ParseOutcome::single(4, "+5", at(1)));
    }

    #[test]
    fn test_fold_l_first_item_must_match() {
        assert_eq!(
            fold_l1(number(), plus()).parse("+1"),
            ParseOutcome::failure(messages::DIGIT, at(0))
        );
    }

    #[test]
    fn test_fold_rejects_bad_ranges() {
        assert_eq!(
            fold_l(number(), plus(), 0..).unwrap_err(),
            GrammarError::ZeroMinimum { combinator: "fold_l" }
        );
        assert_eq!(
            fold_r(number(), plus(), 3..=2).unwrap_err(),
            GrammarError::InvertedRange { combinator: "fold_r" }
        );
    }

    // =========================================================================
    // fold_r
    // =========================================================================

    #[test]
    fn test_fold_r_power_tower() {
        let p = fold_r(number(), caret(), 2..=3).unwrap();
        // 4 ^ (3 ^ 2)
        assert_eq!(p.parse("4^3^2^1^a^b"), ParseOutcome::single(262144, "^1^a^b", at(5)));
    }

    #[test]
    fn test_fold_r_is_right_associative() {
        let p = fold_r1(number(), alt([plus(), minus()]));
        // 9 - (3 - 2)
        assert_eq!(p.parse_value("9-3-2"), Ok(8));
        // 9 - (3 + 2)
        assert_eq!(p.parse_value("9-3+2"), Ok(4));
        // 9 + (3 - 2)
        assert_eq!(p.parse_value("9+3-2"), Ok(10));
    }

    #[test]
    fn test_fold_r1_single_item() {
        assert_eq!(fold_r1(number(), caret()).parse("7"), ParseOutcome::single(7, "", at(1)));
    }

    #[test]
    fn test_reduce_right_pairs_operators_with_their_left_operand() {
        let concat = |a: String, b: String| format!("({a} {b})");
        let pairs = vec![(concat, "b".to_string()), (concat, "c".to_string())];
        assert_eq!(reduce_right("a".to_string(), pairs), "(a (b c))");
    }
}
