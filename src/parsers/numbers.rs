//! Integer parsers over text input.
//!
//! These recognize a numeral with a regex first and convert it afterwards,
//! so a numeral that is too big for the target type is an ordinary parse
//! failure, not a panic. Conversion goes through [`num_traits::Num`], which
//! makes the same parsers work for every primitive integer type and for
//! `num_bigint::BigInt`/`BigUint`.

use std::marker::PhantomData;

use lazy_static::lazy_static;
use num_traits::Num;
use regex::Regex;

use crate::error::{ErrorItem, Info, ParseError};
use crate::reply::Reply;
use crate::state::{State, Stream};
use crate::traits::Parser;

// Module-level regexes, compiled once on first use.
macro_rules! regexes {
    ( $( $name:ident = $re:expr ; )* ) => {
        $(
            fn $name() -> &'static Regex {
                lazy_static! {
                    static ref RE: Regex = Regex::new($re).unwrap();
                }
                &RE
            }
        )*
    }
}

regexes! {
    uint_regex = r"\A[0-9]+";
    int_regex = r"\A[+-]?[0-9]+";
    uint_bin_regex = r"\A[01]+";
    int_bin_regex = r"\A[+-]?[01]+";
    uint_hex_regex = r"\A[0-9A-Fa-f]+";
    int_hex_regex = r"\A[+-]?[0-9A-Fa-f]+";
}

/// The type of parser returned by [`uint()`], [`int()`], and their binary
/// and hexadecimal variants.
pub struct IntegerParser<T> {
    regex: fn() -> &'static Regex,
    radix: u32,
    noun: &'static str,
    _output: PhantomData<fn() -> T>,
}

impl<T> Clone for IntegerParser<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for IntegerParser<T> {}

impl<'a, U, T> Parser<&'a str, U> for IntegerParser<T>
where
    T: Num,
{
    type Output = T;

    fn run(&self, state: State<&'a str, U>) -> Reply<&'a str, U, T> {
        let m = match (self.regex)().find(state.input) {
            Some(m) => m,
            None => {
                let found = match state.input.uncons() {
                    None => Info::EndOfInput,
                    Some((c, _)) => Info::token(c),
                };
                return Reply::EmptyErr(
                    state.sys_unexpected(found).expecting(Info::desc(self.noun)),
                );
            }
        };
        match T::from_str_radix(m.as_str(), self.radix) {
            Err(_) => Reply::EmptyErr(ParseError::new(
                state.pos,
                ErrorItem::Message(format!("number out of range: {}", m.as_str())),
            )),
            Ok(value) => {
                let mut pos = state.pos;
                for c in m.as_str().chars() {
                    pos = pos.advance(c);
                }
                let rest = &state.input[m.end()..];
                let err = ParseError::empty(pos.clone());
                Reply::ConsumedOk(value, State::new(rest, pos, state.user), err)
            }
        }
    }
}

/// Parse an unsigned decimal integer into any [`Num`] type.
///
/// ```
/// use num_bigint::BigUint;
/// use presage::{parse, parsers::uint};
///
/// assert_eq!(parse(&uint::<u32>(), "117").unwrap().value, 117);
///
/// // Too big for the target type is a parse failure, not a panic.
/// assert!(parse(&uint::<u8>(), "1000").is_err());
///
/// // Arbitrary precision works through the same parser.
/// let p = uint::<BigUint>();
/// assert!(parse(&p, "981274018274012874012840128401283").is_ok());
/// ```
pub fn uint<T: Num>() -> IntegerParser<T> {
    IntegerParser {
        regex: uint_regex,
        radix: 10,
        noun: "integer",
        _output: PhantomData,
    }
}

/// Parse a decimal integer with an optional leading `+` or `-` sign.
pub fn int<T: Num>() -> IntegerParser<T> {
    IntegerParser {
        regex: int_regex,
        radix: 10,
        noun: "integer",
        _output: PhantomData,
    }
}

/// Parse an unsigned base-2 integer.
pub fn uint_bin<T: Num>() -> IntegerParser<T> {
    IntegerParser {
        regex: uint_bin_regex,
        radix: 2,
        noun: "binary integer",
        _output: PhantomData,
    }
}

/// Parse a base-2 integer with an optional sign.
pub fn int_bin<T: Num>() -> IntegerParser<T> {
    IntegerParser {
        regex: int_bin_regex,
        radix: 2,
        noun: "binary integer",
        _output: PhantomData,
    }
}

/// Parse an unsigned base-16 integer, accepting both digit cases.
pub fn uint_hex<T: Num>() -> IntegerParser<T> {
    IntegerParser {
        regex: uint_hex_regex,
        radix: 16,
        noun: "hexadecimal integer",
        _output: PhantomData,
    }
}

/// Parse a base-16 integer with an optional sign.
pub fn int_hex<T: Num>() -> IntegerParser<T> {
    IntegerParser {
        regex: int_hex_regex,
        radix: 16,
        noun: "hexadecimal integer",
        _output: PhantomData,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::*;
    use num_bigint::BigUint;

    #[test]
    fn test_uint() {
        assert_parse_eq(uint::<u32>(), "0", 0);
        assert_parse_eq(uint::<u32>(), "11417", 11417);
        assert_no_parse(uint::<u32>(), "");
        assert_no_parse(uint::<u32>(), "-3");
        assert_parse_error(
            uint::<u32>(),
            "x",
            "at line 1, column 1:\nunexpected \"x\"\nexpecting integer",
        );
    }

    #[test]
    fn test_int() {
        assert_parse_eq(int::<i32>(), "-45", -45);
        assert_parse_eq(int::<i32>(), "+45", 45);
        assert_no_parse(int::<i32>(), "- 45");
    }

    #[test]
    fn test_out_of_range_is_a_parse_error() {
        assert_parse_error(
            uint::<u8>(),
            "1000",
            "at line 1, column 1:\nnumber out of range: 1000",
        );
        let failure = parse_failure(uint::<u8>(), "1000");
        assert!(!failure.consumed);
    }

    #[test]
    fn test_radix_variants() {
        assert_parse_eq(uint_bin::<u8>(), "101", 5);
        assert_parse_eq(uint_hex::<u32>(), "ff", 255);
        assert_parse_eq(uint_hex::<u32>(), "FF", 255);
        assert_parse_eq(int_hex::<i32>(), "-10", -16);
        assert_no_parse(uint_bin::<u8>(), "2");
    }

    #[test]
    fn test_biguint() {
        let big = "982371952794802135871309821709317509287109324809324983409";
        assert_parse_eq(uint::<BigUint>(), big, big.parse::<BigUint>().unwrap());
    }

    #[test]
    fn test_consumes_exactly_the_numeral() {
        let ok = parse_success(uint::<u32>(), "42abc");
        assert_eq!(ok.value, 42);
        assert_eq!(ok.state.input, "abc");
        assert_eq!(ok.state.pos.column(), 3);
    }
}
