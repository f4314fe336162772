use std::io;
use std::fmt;
use std::path::PathBuf;

pub type QuatResult<T> = Result<T, QuatError>;

#[derive(Debug)]
pub enum QuatError {
    InvalidOperand(usize),
    ParseNumber(String),
    UnknownOperation(String),
    Arity(String, usize),
    UnaryOnScalar(String),
    FileOpen(PathBuf, io::Error),
    FileRead(PathBuf, io::Error),
    AccessDenied(PathBuf),
    AtLine(usize, Box<QuatError>),
}
impl From<io::Error> for QuatError {
    fn from(err: io::Error) -> Self {
        Self::FileRead(PathBuf::new(), err)
    }
}
impl fmt::Display for QuatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuatError::InvalidOperand(len) => {
                write!(f, "quaternion needs 4 components, got {len}")
            }
            QuatError::ParseNumber(s) => {
                write!(f, "invalid number '{s}'")
            }
            QuatError::UnknownOperation(op) => {
                write!(f, "unknown operation '{op}'")
            }
            QuatError::Arity(op, n) => {
                write!(f, "'{op}' does not take {n} operand(s)")
            }
            QuatError::UnaryOnScalar(op) => {
                write!(f, "'{op}' expects a quaternion, got a scalar")
            }
            QuatError::FileOpen(path, err) => {
                write!(f, "
                    \r{}
                    \r{err}",
                    path.display(),
                )
            }
            QuatError::FileRead(path, err) => {
                write!(f, "
                    \rError reading {}
                    \r{err}",
                    path.display(),
                )
            }
            QuatError::AccessDenied(path) => {
                write!(f, "access denied: {}", path.display())
            }
            QuatError::AtLine(line, err) => {
                write!(f, "line {line}: {err}")
            }
        }
    }
}
impl std::error::Error for QuatError {}

#[derive(Debug)]
pub enum ConfigError {
    MissingValue(String),
    InvalidPrecision(String),
    MissingExpression,
    ConflictingSource,
}
impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::MissingValue(flag) => {
                write!(f, "missing value for {flag}")
            }
            ConfigError::InvalidPrecision(arg) => {
                write!(f, "invalid precision '{arg}'")
            }
            ConfigError::ConflictingSource => {
                write!(f, "-file cannot be combined with an expression")
            }
            ConfigError::MissingExpression => {
                write!(f, "
                    \rNo expression given.
                    \rUsage: quat <op> <operand> [<operand>]
                    \r       quat -file <path>",
                )
            }
        }
    }
}
impl std::error::Error for ConfigError {}
