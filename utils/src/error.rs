use std::fmt::Display;
use std::process::Termination;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ExitCode {
    pub code: i32,
}

impl ExitCode {
    pub const SUCCESS: Self = Self { code: 0 };
    pub const FAILURE: Self = Self { code: 1 };

    #[inline(always)]
    pub const fn success(self) -> bool {
        self.code == 0
    }

    #[inline(always)]
    pub const fn failure(self) -> bool {
        self.code != 0
    }
}

impl Termination for ExitCode {
    fn report(self) -> std::process::ExitCode {
        std::process::ExitCode::from(self.code as u8)
    }
}

/// An error that reaches the top of a command; shown on stderr as `Error: ...`.
pub struct CliError(Box<dyn Display + 'static>);

impl CliError {
    pub fn from_display<D>(display: D) -> Self
    where
        D: Display + 'static,
    {
        Self(Box::new(display))
    }

    /// Maps any displayable error into a `CliError`, for use with `map_err`.
    pub fn wrap<D>(context: &'static str) -> impl FnOnce(D) -> Self
    where
        D: Display + 'static,
    {
        move |why| Self::from_display(format!("{}: {}", context, why))
    }
}

impl Display for CliError {
    fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(fmt)
    }
}

impl std::fmt::Debug for CliError {
    fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(fmt, "CliError({})", self.0)
    }
}

pub type CliResult<T = ()> = Result<T, CliError>;

pub trait ProcessResult {
    /// Process the current value and return an according exit code.
    ///
    /// Prints the error to stderr, if there is one.
    fn process(self) -> ExitCode;
}

impl<T> ProcessResult for CliResult<T> {
    fn process(self) -> ExitCode {
        match self {
            Ok(_) => ExitCode::SUCCESS,
            Err(why) => {
                eprintln!("Error: {}", why);

                ExitCode::FAILURE
            }
        }
    }
}
