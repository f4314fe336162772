//! Text front end: parses expressions such as `mul 1,0,0,0 [0, 1, 0, 0]`
//! and evaluates them through the polymorphic operations.

use std::fmt;
use std::io::BufRead;
use std::path::Path;
use std::str::FromStr;

use log::debug;

use crate::error::{QuatError, QuatResult};
use crate::io::new_input_file;
use crate::operand::{self, Operand};
use crate::quaternion::{self, Quaternion};


#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Op {
    Copy,
    Negative,
    Inverse,
    Add,
    Sub,
    Mul,
    Div,
}
impl Op {
    pub fn arity(&self) -> usize {
        match self {
            Op::Copy | Op::Negative | Op::Inverse => 1,
            Op::Add | Op::Sub | Op::Mul | Op::Div => 2,
        }
    }
}
impl FromStr for Op {
    type Err = QuatError;

    fn from_str(s: &str) -> QuatResult<Op> {
        match s {
            "copy"     => Ok(Op::Copy),
            "negative" => Ok(Op::Negative),
            "inverse"  => Ok(Op::Inverse),
            "add"      => Ok(Op::Add),
            "sub"      => Ok(Op::Sub),
            "mul"      => Ok(Op::Mul),
            "div"      => Ok(Op::Div),
            _ => Err(QuatError::UnknownOperation(s.to_string())),
        }
    }
}
impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Op::Copy     => "copy",
            Op::Negative => "negative",
            Op::Inverse  => "inverse",
            Op::Add      => "add",
            Op::Sub      => "sub",
            Op::Mul      => "mul",
            Op::Div      => "div",
        };
        f.write_str(name)
    }
}

/// Parses a scalar (`2.5`) or a quaternion (`1,0,0,0` or `[1, 0, 0, 0]`).
pub fn parse_operand(token: &str) -> QuatResult<Operand> {
    let token = token.trim();
    let bracketed = token.starts_with('[') && token.ends_with(']') && token.len() >= 2;

    if !bracketed && !token.contains(',') {
        return parse_number(token).map(Operand::Scalar);
    }

    let inner = if bracketed { &token[1..token.len() - 1] } else { token };
    let components = inner
        .split(',')
        .map(parse_number)
        .collect::<QuatResult<Vec<f64>>>()?;

    Quaternion::try_from(components.as_slice()).map(Operand::Quaternion)
}

fn parse_number(s: &str) -> QuatResult<f64> {
    let s = s.trim();
    s.parse::<f64>().map_err(|_| QuatError::ParseNumber(s.to_string()))
}

/// Splits on whitespace that is not inside brackets.
fn tokenize(line: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut depth = 0usize;

    for c in line.chars() {
        match c {
            '[' => depth += 1,
            ']' => depth = depth.saturating_sub(1),
            _ => {}
        }
        if c.is_whitespace() && depth == 0 {
            if !current.is_empty() {
                tokens.push(std::mem::take(&mut current));
            }
        }
        else {
            current.push(c);
        }
    }
    if !current.is_empty() {
        tokens.push(current);
    }
    tokens
}


#[derive(Clone, PartialEq, Debug)]
pub struct Expression {
    pub op: Op,
    pub operands: Vec<Operand>,
}
impl Expression {
    pub fn parse(line: &str) -> QuatResult<Expression> {
        let tokens = tokenize(line);
        let (op, rest) = match tokens.split_first() {
            Some((op, rest)) => (op.parse::<Op>()?, rest),
            None => return Err(QuatError::UnknownOperation(String::new())),
        };
        if rest.len() != op.arity() {
            return Err(QuatError::Arity(op.to_string(), rest.len()));
        }
        let operands = rest
            .iter()
            .map(|t| parse_operand(t))
            .collect::<QuatResult<Vec<Operand>>>()?;

        Ok(Expression { op, operands })
    }

    pub fn evaluate(&self) -> QuatResult<Operand> {
        debug!("evaluating {self}");

        match (self.op, self.operands.as_slice()) {
            (Op::Add, &[a, b]) => Ok(operand::add(a, b)),
            (Op::Sub, &[a, b]) => Ok(operand::sub(a, b)),
            (Op::Mul, &[a, b]) => Ok(operand::mul(a, b)),
            (Op::Div, &[a, b]) => Ok(operand::div(a, b)),
            (op, &[a]) => {
                let q = a
                    .as_quaternion()
                    .ok_or_else(|| QuatError::UnaryOnScalar(op.to_string()))?;
                let res = match op {
                    Op::Copy     => quaternion::copy(q),
                    Op::Negative => quaternion::negative(q),
                    Op::Inverse  => quaternion::inverse(q),
                    _ => return Err(QuatError::Arity(op.to_string(), 1)),
                };
                Ok(Operand::Quaternion(res))
            }
            (op, operands) => Err(QuatError::Arity(op.to_string(), operands.len())),
        }
    }
}
impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.op)?;
        for operand in self.operands.iter() {
            write!(f, " {operand}")?;
        }
        Ok(())
    }
}

/// Evaluates one expression per line. Blank lines and lines starting with
/// `#` are skipped. Fails on the first bad line.
pub fn evaluate_lines<R: BufRead>(reader: R) -> QuatResult<Vec<Operand>> {
    let mut results = Vec::new();

    for (i, line) in reader.lines().enumerate() {
        let line = line.map_err(|err| QuatError::AtLine(i + 1, Box::new(err.into())))?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let res = Expression::parse(line)
            .and_then(|expr| expr.evaluate())
            .map_err(|err| {
                debug!("line {} failed: {err}", i + 1);
                QuatError::AtLine(i + 1, Box::new(err))
            })?;
        results.push(res);
    }
    Ok(results)
}

pub fn evaluate_file(path: &Path) -> QuatResult<Vec<Operand>> {
    debug!("reading expressions from {}", path.display());
    let reader = new_input_file(path)?;

    evaluate_lines(reader).map_err(|err| match err {
        QuatError::AtLine(line, inner) => match *inner {
            QuatError::FileRead(_, io_err) => {
                QuatError::AtLine(line, Box::new(QuatError::FileRead(path.to_path_buf(), io_err)))
            }
            other => QuatError::AtLine(line, Box::new(other)),
        },
        other => other,
    })
}


#[test]
fn parses_operands() {
    assert_eq!(parse_operand("2.5").ok(), Some(Operand::Scalar(2.5)));
    assert_eq!(parse_operand("-1,0,0,0").ok(), Some(Operand::from([-1.0, 0.0, 0.0, 0.0])));
    assert_eq!(parse_operand("[0, 1, 0, 0]").ok(), Some(Operand::from([0.0, 1.0, 0.0, 0.0])));
    assert!(matches!(parse_operand("1,2,3"), Err(QuatError::InvalidOperand(3))));
    assert!(matches!(parse_operand("[7]"), Err(QuatError::InvalidOperand(1))));
    assert!(matches!(parse_operand("1,x,0,0"), Err(QuatError::ParseNumber(_))));
}

#[test]
fn tokenizer_keeps_brackets_together() {
    assert_eq!(tokenize("  mul [1, 0, 0, 0]   2 "), vec!["mul", "[1, 0, 0, 0]", "2"]);
}

#[test]
fn evaluates_i_times_j() {
    let expr = Expression::parse("mul 1,0,0,0 0,1,0,0").unwrap();
    assert_eq!(expr.evaluate().unwrap(), Operand::from([0.0, 0.0, 1.0, 0.0]));
}

#[test]
fn evaluates_unary_ops() {
    let res = Expression::parse("inverse 0,0,0,1").unwrap().evaluate().unwrap();
    assert_eq!(res, Operand::from([0.0, 0.0, 0.0, 1.0]));

    let res = Expression::parse("negative [1, -2, 3, -4]").unwrap().evaluate().unwrap();
    assert_eq!(res, Operand::from([-1.0, 2.0, -3.0, 4.0]));

    let err = Expression::parse("copy 3").unwrap().evaluate();
    assert!(matches!(err, Err(QuatError::UnaryOnScalar(_))));
}

#[test]
fn rejects_bad_expressions() {
    assert!(matches!(Expression::parse("pow 1 2"), Err(QuatError::UnknownOperation(_))));
    assert!(matches!(Expression::parse("add 1"), Err(QuatError::Arity(_, 1))));
    assert!(matches!(Expression::parse("inverse 1,0,0,0 2"), Err(QuatError::Arity(_, 2))));
}

#[test]
fn evaluates_lines_skipping_comments() {
    let input = "# header\n\nadd 1,2,3,4 1\ndiv 1 2\n";
    let res = evaluate_lines(input.as_bytes()).unwrap();
    assert_eq!(res, vec![Operand::from([1.0, 2.0, 3.0, 5.0]), Operand::Scalar(0.5)]);
}

#[test]
fn reports_failing_line() {
    let input = "add 1 2\nmul 1,2 3\n";
    let err = evaluate_lines(input.as_bytes()).unwrap_err();
    assert!(matches!(err, QuatError::AtLine(2, _)));
}

#[test]
fn unreadable_line_keeps_its_number() {
    let input: &[u8] = b"add 1 2\n\xff\xfe\n";
    let err = evaluate_lines(input).unwrap_err();
    match err {
        QuatError::AtLine(2, inner) => assert!(matches!(*inner, QuatError::FileRead(..))),
        other => panic!("unexpected error: {other}"),
    }
}
