//! OR-Library instance loader.
//!
//! Reads the uncapacitated warehouse location format used by the
//! OR-Library `cap*` files (whitespace-separated tokens):
//!
//! ```raw
//! m n
//! capacity_0 fixed_cost_0
//! ...
//! capacity_{m-1} fixed_cost_{m-1}
//! demand_0 cost_{0,0} cost_{1,0} ... cost_{m-1,0}
//! ...
//! demand_{n-1} cost_{0,n-1} ... cost_{m-1,n-1}
//! ```
//!
//! Each customer line lists its cost to every warehouse. Line breaks carry no
//! meaning, so records wrapped over several lines parse the same way. A `#`
//! starts a comment running to the end of the line.

use super::{InstanceError, ProblemInstance};
use std::{
    fmt,
    fs::File,
    io::{BufRead, BufReader, Read},
    path::Path,
    str::FromStr,
};

/// The error type for instance loading.
#[derive(Debug)]
pub enum LoadError {
    /// An I/O error occurred while reading the input stream.
    Io(std::io::Error),
    /// The input ended before all expected tokens were read.
    UnexpectedEof,
    /// A token could not be parsed into the expected numeric type.
    Parse(ParseTokenError),
    /// The parsed data does not form a valid instance.
    Instance(InstanceError),
}

/// Details about a token that failed to parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseTokenError {
    /// The offending token.
    pub token: String,
    /// The type it was parsed as.
    pub type_name: &'static str,
}

impl fmt::Display for ParseTokenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "could not parse token '{}' as {}",
            self.token, self.type_name
        )
    }
}

impl std::error::Error for ParseTokenError {}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::UnexpectedEof => write!(f, "unexpected end of input while parsing instance"),
            Self::Parse(e) => write!(f, "parse error: {e}"),
            Self::Instance(e) => write!(f, "invalid instance: {e}"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::Instance(e) => Some(e),
            Self::UnexpectedEof => None,
        }
    }
}

impl From<std::io::Error> for LoadError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<ParseTokenError> for LoadError {
    fn from(e: ParseTokenError) -> Self {
        Self::Parse(e)
    }
}

impl From<InstanceError> for LoadError {
    fn from(e: InstanceError) -> Self {
        Self::Instance(e)
    }
}

/// Loader for OR-Library UFLP instances.
///
/// # Examples
///
/// ```
/// use u_facility::model::OrLibLoader;
///
/// let text = "2 3\n\
///             100 7.5\n\
///             100 12.5\n\
///             10 1.0 2.0\n\
///             20 3.0 4.0\n\
///             30 5.0 6.0\n";
/// let instance = OrLibLoader::new().from_str(text).unwrap();
/// assert_eq!(instance.num_warehouses(), 2);
/// assert_eq!(instance.num_customers(), 3);
/// assert_eq!(instance.allocation_cost(1, 2), 6.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OrLibLoader;

impl OrLibLoader {
    /// Creates a loader.
    pub fn new() -> Self {
        Self
    }

    /// Loads an instance from a type implementing `BufRead`.
    pub fn from_bufread<R: BufRead>(&self, rdr: R) -> Result<ProblemInstance, LoadError> {
        let mut sc = Scanner::new(rdr);

        let m: usize = sc.next()?;
        let n: usize = sc.next()?;

        let mut capacities = Vec::with_capacity(m);
        let mut fixed_costs = Vec::with_capacity(m);
        for _ in 0..m {
            capacities.push(sc.next::<f64>()?);
            fixed_costs.push(sc.next::<f64>()?);
        }

        // File rows are customers; storage rows are warehouses.
        let mut demands = Vec::with_capacity(n);
        let mut allocation_costs = vec![vec![0.0; n]; m];
        for j in 0..n {
            demands.push(sc.next::<u64>()?);
            for row in allocation_costs.iter_mut() {
                row[j] = sc.next::<f64>()?;
            }
        }

        log::debug!("parsed OR-Library instance with {m} warehouses and {n} customers");

        ProblemInstance::new(capacities, fixed_costs, demands, allocation_costs)
            .map_err(LoadError::from)
    }

    /// Loads an instance from a file path.
    pub fn from_path<P: AsRef<Path>>(&self, path: P) -> Result<ProblemInstance, LoadError> {
        let file = File::open(path)?;
        self.from_bufread(BufReader::new(file))
    }

    /// Loads an instance from a generic reader.
    pub fn from_reader<R: Read>(&self, r: R) -> Result<ProblemInstance, LoadError> {
        self.from_bufread(BufReader::new(r))
    }

    /// Loads an instance from a string slice.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(&self, s: &str) -> Result<ProblemInstance, LoadError> {
        self.from_reader(s.as_bytes())
    }
}

/// Whitespace-delimited token reader over a `BufRead`.
struct Scanner<R> {
    rdr: R,
    buf: String,
    pos: usize,
}

impl<R: BufRead> Scanner<R> {
    fn new(rdr: R) -> Self {
        Self {
            rdr,
            buf: String::new(),
            pos: 0,
        }
    }

    /// Reads the next line into the buffer, stripping any comment.
    /// Returns `Ok(false)` on EOF.
    fn fill_line(&mut self) -> Result<bool, LoadError> {
        self.buf.clear();
        self.pos = 0;
        let read = self.rdr.read_line(&mut self.buf)?;
        if let Some(idx) = self.buf.find('#') {
            self.buf.truncate(idx);
        }
        Ok(read > 0)
    }

    /// Parses the next token as `T`.
    fn next<T: FromStr>(&mut self) -> Result<T, LoadError> {
        loop {
            let rest = &self.buf[self.pos..];
            let trimmed = rest.trim_start();
            if trimmed.is_empty() {
                if !self.fill_line()? {
                    return Err(LoadError::UnexpectedEof);
                }
                continue;
            }

            let start = self.pos + (rest.len() - trimmed.len());
            let len = trimmed
                .find(char::is_whitespace)
                .unwrap_or(trimmed.len());
            let token = &self.buf[start..start + len];
            self.pos = start + len;

            return token.parse::<T>().map_err(|_| {
                LoadError::Parse(ParseTokenError {
                    token: token.to_owned(),
                    type_name: std::any::type_name::<T>(),
                })
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL: &str = "\
3 2
5000 7500.0
5000 7500.0
5000 7500.0
146 6739.725 10355.05 7650.6
87 11475.9 8896.875 10025.45
";

    #[test]
    fn test_parse_small_instance() {
        let inst = OrLibLoader::new().from_str(SMALL).unwrap();
        assert_eq!(inst.num_warehouses(), 3);
        assert_eq!(inst.num_customers(), 2);
        assert_eq!(inst.capacities(), &[5000.0, 5000.0, 5000.0]);
        assert_eq!(inst.fixed_costs(), &[7500.0, 7500.0, 7500.0]);
        assert_eq!(inst.demands(), &[146, 87]);
        assert_eq!(inst.allocation_cost(0, 0), 6739.725);
        assert_eq!(inst.allocation_cost(2, 0), 7650.6);
        assert_eq!(inst.allocation_cost(1, 1), 8896.875);
    }

    #[test]
    fn test_wrapped_lines_and_comments() {
        let text = "# two warehouses\n2 1\n1 2\n3 4 # second\n9\n 0.5\n0.25\n";
        let inst = OrLibLoader::new().from_str(text).unwrap();
        assert_eq!(inst.fixed_costs(), &[2.0, 4.0]);
        assert_eq!(inst.demand(0), 9);
        assert_eq!(inst.allocation_cost(0, 0), 0.5);
        assert_eq!(inst.allocation_cost(1, 0), 0.25);
    }

    #[test]
    fn test_truncated_input() {
        let err = OrLibLoader::new().from_str("2 1\n1 2\n3").unwrap_err();
        assert!(matches!(err, LoadError::UnexpectedEof), "got {err}");
    }

    #[test]
    fn test_bad_token() {
        let err = OrLibLoader::new().from_str("1 1\n1 x\n").unwrap_err();
        match err {
            LoadError::Parse(e) => {
                assert_eq!(e.token, "x");
                assert_eq!(e.type_name, "f64");
            }
            other => panic!("expected parse error, got {other}"),
        }
    }

    #[test]
    fn test_zero_warehouses_rejected() {
        let err = OrLibLoader::new().from_str("0 0\n").unwrap_err();
        assert!(matches!(
            err,
            LoadError::Instance(InstanceError::NoWarehouses)
        ));
    }

    #[test]
    fn test_missing_file() {
        let err = OrLibLoader::new()
            .from_path("/nonexistent/cap000.txt")
            .unwrap_err();
        assert!(matches!(err, LoadError::Io(_)));
    }
}
