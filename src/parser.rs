//! Parser for numbers in decimal scientific format.

use crate::common::util::prec_bits;
use crate::common::util::ten_pow;
use crate::ctx;
use crate::defs::RoundingMode;
use crate::defs::Sign;
use crate::num::BigFloat;
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::Zero;
use smallvec::SmallVec;
use std::str::Chars;

// Saturation bound for the parsed decimal exponent.
const EXP10_SATURATION: i64 = 1 << 31;

pub(crate) struct ParserState<'a> {
    chars: Chars<'a>,
    cur_ch: Option<char>,
    sign: Sign,
    digits: SmallVec<[u8; 64]>,
    e: i64,
    frac_len: i64,
    inf: bool,
    nan: bool,
    valid: bool,
}

impl<'a> ParserState<'a> {
    fn new(s: &'a str) -> Self {
        ParserState {
            chars: s.chars(),
            cur_ch: None,
            sign: Sign::Pos,
            digits: SmallVec::new(),
            e: 0,
            frac_len: 0,
            inf: false,
            nan: false,
            valid: false,
        }
    }

    /// Returns the next character of the string in lower case, or None if the
    /// string end is reached.
    fn next_char(&mut self) -> Option<char> {
        self.cur_ch = self.chars.next().map(|c| c.to_ascii_lowercase());
        self.cur_ch
    }

    fn cur_char(&self) -> Option<char> {
        self.cur_ch
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn is_inf(&self) -> bool {
        self.inf
    }

    pub fn is_nan(&self) -> bool {
        self.nan
    }

    pub fn sign(&self) -> Sign {
        self.sign
    }

    /// Returns the significant digits and the decimal exponent of the parsed
    /// number: the value equals `digits * 10^e`, where `digits` is read as an
    /// integer.
    pub fn raw_parts(&self) -> (&[u8], i64) {
        (&self.digits, self.e - self.frac_len)
    }
}

/// Parses a decimal literal `[+-]? digits (. digits)? ([eE] [+-]? digits)?`,
/// or one of the tokens `inf` and `nan`. Anything else leaves the state
/// invalid.
pub(crate) fn parse(s: &str) -> ParserState {
    let mut parser_state = ParserState::new(s);
    let mut ch = parser_state.next_char();

    // sign
    if let Some(c) = ch {
        match c {
            '+' => ch = parser_state.next_char(),
            '-' => {
                parser_state.sign = Sign::Neg;
                ch = parser_state.next_char();
            }
            _ => {}
        };
    }

    match ch {
        Some('i') => parse_inf(&mut parser_state),
        Some('n') => parse_nan(&mut parser_state),
        Some(c) if c.is_ascii_digit() => parse_num(&mut parser_state),
        _ => {}
    };

    // the whole string must match
    if parser_state.cur_char().is_some() {
        parser_state.valid = false;
    }

    parser_state
}

fn parse_inf(parser_state: &mut ParserState) {
    let n = parser_state.next_char();
    let f = parser_state.next_char();
    if Some('n') == n && Some('f') == f {
        parser_state.inf = true;
        parser_state.valid = true;
        parser_state.next_char();
    }
}

fn parse_nan(parser_state: &mut ParserState) {
    let a = parser_state.next_char();
    let n = parser_state.next_char();
    if Some('a') == a && Some('n') == n {
        parser_state.nan = true;
        parser_state.valid = true;
        parser_state.next_char();
    }
}

fn parse_num(parser_state: &mut ParserState) {
    let int_cnt = parse_digits(parser_state, false);
    if int_cnt == 0 {
        return;
    }

    if Some('.') == parser_state.cur_char() {
        parser_state.next_char();
        let frac_cnt = parse_digits(parser_state, true);
        if frac_cnt == 0 {
            // a point must be followed by digits
            return;
        }
    }

    // strip trailing zeros of the fraction
    while parser_state.frac_len > 0 && parser_state.digits.last() == Some(&0) {
        parser_state.digits.pop();
        parser_state.frac_len -= 1;
    }

    parser_state.valid = true;

    if let Some('e') = parser_state.cur_char() {
        parser_state.next_char();
        if !parse_exp(parser_state) {
            parser_state.valid = false;
        }
    }
}

// Consumes a digit sequence and returns the number of consumed characters.
// Leading zeros are skipped while no significant digit was seen yet.
fn parse_digits(parser_state: &mut ParserState, fractional: bool) -> usize {
    let mut ch = parser_state.cur_char();
    let mut cnt = 0;

    while let Some(c) = ch {
        if let Some(d) = c.to_digit(10) {
            cnt += 1;
            if fractional {
                parser_state.frac_len += 1;
            }
            // leading zeros are not stored; skipped zeros of the fraction
            // stay counted in frac_len
            if d != 0 || !parser_state.digits.is_empty() {
                parser_state.digits.push(d as u8);
            }
        } else {
            break;
        }
        ch = parser_state.next_char();
    }

    cnt
}

fn parse_exp(parser_state: &mut ParserState) -> bool {
    let mut neg = false;
    let mut ch = parser_state.cur_char();
    if let Some(c) = ch {
        match c {
            '+' => {
                ch = parser_state.next_char();
            }
            '-' => {
                neg = true;
                ch = parser_state.next_char();
            }
            _ => {}
        };
    }

    let mut any = false;
    while let Some(c) = ch {
        if let Some(d) = c.to_digit(10) {
            any = true;
            if parser_state.e < EXP10_SATURATION {
                parser_state.e = parser_state.e * 10 + d as i64;
            }
        } else {
            break;
        }
        ch = parser_state.next_char();
    }

    if neg {
        parser_state.e = -parser_state.e;
    }

    any
}

impl BigFloat {
    /// Parses a number from the decimal string `s` with precision `p` and
    /// rounding mode `rm`.
    ///
    /// The accepted grammar is `[+-]? digits (. digits)? ([eE] [+-]? digits)?`
    /// along with the tokens `inf` and `nan`; any other input yields NaN.
    pub fn parse(s: &str, p: usize, rm: RoundingMode) -> Self {
        let p = p.max(1);
        let ps = parse(s);

        if !ps.is_valid() || ps.is_nan() {
            let mut ret = Self::nan();
            ret.set_precision(p);
            ret.set_rounding_mode(rm);
            return ret;
        }

        if ps.is_inf() {
            return Self::inf_with(ps.sign(), p, rm);
        }

        let (digits, dec_exp) = ps.raw_parts();
        let sign = ps.sign();

        if digits.is_empty() {
            return Self::zero_signed(sign, p, rm);
        }

        // magnitudes far outside of the exponent range saturate early
        let magnitude = dec_exp + digits.len() as i64;
        if magnitude > EXP10_SATURATION {
            return Self::inf_with(sign, p, rm);
        }
        if magnitude < -EXP10_SATURATION {
            return Self::zero_signed(sign, p, rm);
        }

        let s_int = digits_to_bigint(digits);

        if dec_exp >= 0 {
            // an integer value
            let v = s_int * ten_pow(dec_exp as u64);
            let e = v.bits() as i128 - 1;
            Self::from_raw(sign, v, e, p, rm)
        } else {
            // scale up by a power of two and divide by a power of ten,
            // keeping the remainder for the rounding decision
            let denom = ten_pow((-dec_exp) as u64);
            let pb = prec_bits(p);
            let guard = 20.max(pb / 2);
            let bit_limit = (pb + guard).max(denom.bits() + pb + guard);

            let num: BigInt = s_int << (bit_limit as usize);
            let (mut q, r) = num.div_rem(&denom);

            let round_up = match rm {
                RoundingMode::Nearest => (&r << 1) >= denom,
                RoundingMode::Up => sign == Sign::Pos && !r.is_zero(),
                RoundingMode::Down => sign == Sign::Neg && !r.is_zero(),
                RoundingMode::ToZero => false,
            };
            if round_up {
                q += 1;
            }

            let e = q.bits() as i128 - 1 - bit_limit as i128;
            Self::from_raw(sign, q, e, p, rm)
        }
    }
}

// Digits in the range 0..=9 accumulated into a big integer in chunks.
fn digits_to_bigint(digits: &[u8]) -> BigInt {
    let chunk_scale = ten_pow(19);
    let mut ret = BigInt::zero();
    let mut word = 0u64;
    let mut i = 0;

    for d in digits {
        word = word * 10 + *d as u64;
        i += 1;
        if i == 19 {
            ret = ret * &chunk_scale + BigInt::from(word);
            word = 0;
            i = 0;
        }
    }

    if i > 0 {
        ret = ret * ten_pow(i) + BigInt::from(word);
    }

    ret
}

impl core::str::FromStr for BigFloat {
    type Err = core::convert::Infallible;

    /// Parses with the process-wide default precision and rounding mode;
    /// malformed input becomes NaN.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(
            s,
            ctx::default_precision(),
            ctx::default_rounding_mode(),
        ))
    }
}
