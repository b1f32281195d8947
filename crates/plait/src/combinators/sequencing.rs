use crate::outcome::ParseOutcome;
use crate::parser::Parser;

/// A fixed group of parsers that can be run one after another.
///
/// Implemented for tuples of one to eight parsers; the output is the tuple of
/// their values.
pub trait Sequence {
    type Output;

    fn sequence(self) -> Parser<Self::Output>;
}

macro_rules! impl_sequence {
    ($head:ident $head_value:ident) => {
        impl<$head: Clone + 'static> Sequence for (Parser<$head>,) {
            type Output = ($head,);

            fn sequence(self) -> Parser<Self::Output> {
                self.0.map(|value| (value,))
            }
        }
    };
    ($head:ident $head_value:ident, $($tail:ident $tail_value:ident),+) => {
        impl<$head: Clone + 'static, $($tail: Clone + 'static),+> Sequence
            for (Parser<$head>, $(Parser<$tail>,)+)
        {
            type Output = ($head, $($tail,)+);

            fn sequence(self) -> Parser<Self::Output> {
                let ($head_value, $($tail_value,)+) = self;
                let tail = ($($tail_value,)+).sequence();
                $head_value.bind(move |$head_value| {
                    tail.clone()
                        .map(move |($($tail_value,)+)| ($head_value.clone(), $($tail_value,)+))
                })
            }
        }

        impl_sequence!($($tail $tail_value),+);
    };
}

impl_sequence!(A a, B b, C c, D d, E e, F f, G g, H h);

/// Runs the parsers in order, each continuing where the previous stopped,
/// and collects their values into a tuple.
///
/// Fails with the first failure met. Ambiguous parsers multiply the results.
///
/// ```
/// use plait::{digit, letter, seq};
///
/// let p = seq((letter(), digit(), letter()));
/// assert_eq!(p.parse_value("a1b"), Ok(("a".to_string(), 1, "b".to_string())));
/// ```
pub fn seq<S: Sequence>(parsers: S) -> Parser<S::Output> {
    parsers.sequence()
}

/// Like [`seq`], for any number of parsers sharing one value type.
pub fn seq_all<T: Clone + 'static>(parsers: impl IntoIterator<Item = Parser<T>>) -> Parser<Vec<T>> {
    let parsers: Vec<Parser<T>> = parsers.into_iter().collect();
    Parser::new(move |input, position| {
        parsers.iter().fold(
            ParseOutcome::single(Vec::with_capacity(parsers.len()), input, position),
            |outcome, parser| {
                outcome.and_then(|values, remaining, position| {
                    parser.parse_at(remaining, position).map(|value| {
                        let mut values = values.clone();
                        values.push(value);
                        values
                    })
                })
            },
        )
    })
}

/// Parses `open body close` and keeps the value of `body`.
pub fn between<O: 'static, T: Clone + 'static, C: 'static>(
    open: Parser<O>,
    body: Parser<T>,
    close: Parser<C>,
) -> Parser<T> {
    body.skip_leading(open).skip_trailing(close)
}
