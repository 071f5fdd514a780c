/// Two-operand integer calculator behind `!calc`.
///
/// Grammar: `SPACE* INT SPACE* OP SPACE* INT` where INT is an optional `-`
/// followed by decimal digits and OP is one of `+ - * /`. Parsing is
/// positional; an INT with no digits at the cursor parses as 0. That
/// leniency is historical calculator behavior and is pinned by tests
/// rather than hardened away.
use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalcError {
    DivisionByZero,
    InvalidOperator,
}

impl fmt::Display for CalcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalcError::DivisionByZero => write!(f, "Error: Division by zero"),
            CalcError::InvalidOperator => write!(f, "Invalid operator. Use + - * /"),
        }
    }
}

/// Positional tokenizer over the expression bytes. Independent of the
/// terminal, so the parser is testable without rendering anything.
struct Tokenizer<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Tokenizer<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            buf: input.as_bytes(),
            pos: 0,
        }
    }

    fn skip_spaces(&mut self) {
        while self.buf.get(self.pos) == Some(&b' ') {
            self.pos += 1;
        }
    }

    /// Optionally signed decimal integer, digits consumed greedily.
    /// No digits at the cursor yields 0.
    fn integer(&mut self) -> i32 {
        self.skip_spaces();

        let negative = if self.buf.get(self.pos) == Some(&b'-') {
            self.pos += 1;
            true
        } else {
            false
        };

        let mut value: i32 = 0;
        while let Some(&(digit @ b'0'..=b'9')) = self.buf.get(self.pos) {
            value = value.wrapping_mul(10).wrapping_add((digit - b'0') as i32);
            self.pos += 1;
        }

        if negative {
            value.wrapping_neg()
        } else {
            value
        }
    }

    /// The next non-space byte, consumed as an operator. None at end of
    /// input.
    fn operator(&mut self) -> Option<u8> {
        self.skip_spaces();
        let byte = self.buf.get(self.pos).copied();
        if byte.is_some() {
            self.pos += 1;
        }
        byte
    }
}

/// Evaluate `A op B` with wrapping two's-complement arithmetic.
/// Division truncates toward zero; a zero divisor is a typed error,
/// as is any operator outside `+ - * /`.
pub fn evaluate(expr: &str) -> Result<i32, CalcError> {
    let mut tokens = Tokenizer::new(expr);

    let a = tokens.integer();
    let op = tokens.operator().ok_or(CalcError::InvalidOperator)?;
    let b = tokens.integer();

    match op {
        b'+' => Ok(a.wrapping_add(b)),
        b'-' => Ok(a.wrapping_sub(b)),
        b'*' => Ok(a.wrapping_mul(b)),
        b'/' => {
            if b == 0 {
                Err(CalcError::DivisionByZero)
            } else {
                Ok(a.wrapping_div(b))
            }
        }
        _ => Err(CalcError::InvalidOperator),
    }
}
