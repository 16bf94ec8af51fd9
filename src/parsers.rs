//! All the parser builders.
//!
//! Everything here is re-exported at this level, so `use
//! presage::parsers::*;` brings the whole grammar-building vocabulary into
//! scope.

mod attempt;
mod bind;
mod chain;
mod chars;
mod choice;
mod debug;
mod label;
mod map;
mod numbers;
mod pure;
mod regex;
mod repeat;
mod sep;
mod sequence;
mod token;
mod user;

pub use self::regex::{regex_match, RegexMatchParser};
pub use attempt::{
    attempt, look_ahead, not_followed_by, AttemptParser, LookAheadParser, NotFollowedByParser,
};
pub use bind::{bind, BindParser};
pub use chain::{
    chainl, chainl1, chainr, chainr1, Chainl1Parser, ChainlParser, Chainr1Parser, ChainrParser,
};
pub use chars::{
    alpha, alphanumeric, any_char, char, digit, lower, newline, none_of, one_of, satisfy, space,
    spaces, string, tab, to_str, upper, CharClassParser, CharParser, NewlineParser, NoneOfParser,
    OneOfParser, SatisfyParser, SpacesParser, StringParser, ToStrParser,
};
pub use choice::{choice, or, ChoiceParser, OrParser};
pub use debug::{traced, TracedParser};
pub use label::{label, LabelParser};
pub use map::{map, MapParser};
pub use numbers::{int, int_bin, int_hex, uint, uint_bin, uint_hex, IntegerParser};
pub use pure::{
    fail, parser, position, pure, unexpected, FailParser, FnParser, PositionParser, PureParser,
    UnexpectedParser,
};
pub use repeat::{
    count, many, many1, many_till, skip_many, skip_many1, CountParser, Many1Parser, ManyParser,
    ManyTillParser, SkipMany1Parser, SkipManyParser,
};
pub use sep::{
    end_by, end_by1, sep_by, sep_by1, sep_end_by, sep_end_by1, EndBy1Parser, EndByParser,
    SepBy1Parser, SepByParser, SepEndBy1Parser, SepEndByParser,
};
pub use sequence::{
    and, append, between, optional, sequence, skip, with, AndParser, AppendParser, BetweenParser,
    OptionalParser, SequenceParser, SkipParser, WithParser,
};
pub use token::{
    any_token, eof, token, token_prim, AnyTokenParser, EofParser, NextPos, SamePos, TextPos,
    TokenParser,
};
pub use user::{
    set_user_state, update_user_state, user_state, SetUserStateParser, UpdateUserStateParser,
    UserStateParser,
};
