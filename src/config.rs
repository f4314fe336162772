use std::{
    fmt,
    path::PathBuf,
};

use crate::error::ConfigError;


/// Parsing states.
enum Parse {
    None,
    Precision,
    File,
}

/// Where expressions come from.
#[derive(Clone, Debug, PartialEq)]
pub enum Source {
    Expression(Vec<String>),
    File(PathBuf),
}

/// User defined configuration settings.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub precision: usize,
    pub source: Source,
}
impl Config {
    /// Create a new Config with the specified command line arguments
    /// (program name excluded).
    pub fn new(args: Vec<String>) -> Result<Config, ConfigError> {
        let mut parser    = Parse::None;
        let mut precision = 6;
        let mut file      = None;
        let mut tokens    = Vec::new();

        for arg in args.into_iter() {
            match arg.as_str() {
                "-precision" => {
                    parser = Parse::Precision;
                    continue;
                }
                "-file" => {
                    parser = Parse::File;
                    continue;
                }
                _ => {},
            }
            match parser {
                Parse::Precision => {
                    if let Ok(p) = arg.parse::<usize>() {
                        precision = p;
                    }
                    else {
                        return Err(
                            ConfigError::InvalidPrecision(arg)
                        );
                    }
                }
                Parse::File => {
                    file = Some(PathBuf::from(arg));
                }
                Parse::None => {
                    tokens.push(arg);
                }
            }
            parser = Parse::None;
        }
        match parser {
            Parse::Precision => return Err(ConfigError::MissingValue("-precision".to_string())),
            Parse::File => return Err(ConfigError::MissingValue("-file".to_string())),
            Parse::None => {},
        }

        let source = match file {
            Some(_) if !tokens.is_empty() => return Err(ConfigError::ConflictingSource),
            Some(path) => Source::File(path),
            None if tokens.is_empty() => return Err(ConfigError::MissingExpression),
            None => Source::Expression(tokens),
        };
        Ok(Config { precision, source })
    }
}
impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "
            \rPrecision: {}
            \rSource:    {}",
            self.precision,
            match &self.source {
                Source::Expression(tokens) => tokens.join(" "),
                Source::File(path) => path.display().to_string(),
            },
        )
    }
}


#[cfg(test)]
fn args(s: &str) -> Vec<String> {
    s.split_whitespace().map(String::from).collect()
}

#[test]
fn expression_with_default_precision() {
    let cfg = Config::new(args("mul 1,0,0,0 0,1,0,0")).unwrap();
    assert_eq!(cfg.precision, 6);
    assert_eq!(cfg.source, Source::Expression(args("mul 1,0,0,0 0,1,0,0")));
}

#[test]
fn flags_anywhere() {
    let cfg = Config::new(args("add -precision 2 -1,0,0,0 3")).unwrap();
    assert_eq!(cfg.precision, 2);
    assert_eq!(cfg.source, Source::Expression(args("add -1,0,0,0 3")));

    let cfg = Config::new(args("-file exprs.txt")).unwrap();
    assert_eq!(cfg.source, Source::File(PathBuf::from("exprs.txt")));
}

#[test]
fn config_errors() {
    assert!(matches!(Config::new(Vec::new()), Err(ConfigError::MissingExpression)));
    assert!(matches!(Config::new(args("add 1 2 -precision")), Err(ConfigError::MissingValue(_))));
    assert!(matches!(Config::new(args("-precision two add 1 2")), Err(ConfigError::InvalidPrecision(_))));
    assert!(matches!(Config::new(args("-file ok.txt mul 1,0,0,0 0,1,0,0")), Err(ConfigError::ConflictingSource)));
    assert!(matches!(Config::new(args("add 1 2 -file ok.txt")), Err(ConfigError::ConflictingSource)));
}
