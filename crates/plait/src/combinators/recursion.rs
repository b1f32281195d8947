use std::rc::{Rc, Weak};

use once_cell::unsync::OnceCell;

use crate::outcome::ParseOutcome;
use crate::parser::Parser;

type Build<T> = Box<dyn Fn(Parser<T>) -> Parser<T>>;

/// A grammar built on first use, together with its builder.
struct Memo<T> {
    parser: OnceCell<Parser<T>>,
    build: Build<T>,
}

impl<T: 'static> Memo<T> {
    fn force(memo: &Rc<Self>) -> &Parser<T> {
        memo.parser.get_or_init(|| {
            log::trace!("building memoized parser");
            (memo.build)(Memo::handle(Rc::downgrade(memo)))
        })
    }

    /// The parser handed to the builder. It holds a weak reference so the
    /// built grammar does not keep itself alive.
    fn handle(memo: Weak<Self>) -> Parser<T> {
        Parser::new(move |input, position| match memo.upgrade() {
            Some(memo) => Memo::force(&memo).parse_at(input, position),
            None => ParseOutcome::failure("", position),
        })
    }
}

/// Defers building a parser until it runs, so a grammar can refer to itself.
///
/// `thunk` is called again on every parse; wrap expensive grammars in
/// [`memoize`] or [`recursive`] instead.
pub fn lazy<T: 'static, F>(thunk: F) -> Parser<T>
where
    F: Fn() -> Parser<T> + 'static,
{
    Parser::new(move |input, position| thunk().parse_at(input, position))
}

/// Like [`lazy`], but builds the parser once, on first use, and reuses it.
///
/// Every call to `memoize` has its own cache. A grammar that calls its own
/// constructor from inside `thunk` gets a new cache per nesting level; use
/// [`recursive`] to refer back to the same instance.
pub fn memoize<T: 'static, F>(thunk: F) -> Parser<T>
where
    F: Fn() -> Parser<T> + 'static,
{
    recursive(move |_| thunk())
}

/// Builds a self-referential grammar once, on first use.
///
/// `build` receives a handle to the parser being defined. Every use of the
/// handle, at any depth, runs the one grammar `build` returned. The handle
/// stops matching once the returned parser and all its clones are dropped.
///
/// ```
/// use plait::{alt, digit, literal, recursive, seq, Parser};
///
/// // nested = "(" nested ")" | digit
/// let nested: Parser<u32> = recursive(|nested| {
///     alt([
///         seq((literal("("), nested, literal(")"))).map(|(_, n, _)| n),
///         digit(),
///     ])
/// });
///
/// assert_eq!(nested.parse_value("((7))"), Ok(7));
/// ```
pub fn recursive<T: 'static, F>(build: F) -> Parser<T>
where
    F: Fn(Parser<T>) -> Parser<T> + 'static,
{
    let memo = Rc::new(Memo {
        parser: OnceCell::new(),
        build: Box::new(build),
    });
    Parser::new(move |input, position| Memo::force(&memo).parse_at(input, position))
}
