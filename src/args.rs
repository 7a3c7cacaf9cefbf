//! These structs provide the CLI interface for the quotegen CLI.

use crate::CourseType;
use clap::{Parser, Subcommand};
use std::convert::Infallible;
use std::fmt::{Display, Formatter};
use std::ops::Deref;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::error;
use tracing_subscriber::filter::LevelFilter;

/// quotegen: A command-line tool for producing PDF price quotations.
///
/// The purpose of this program is to read a tabular catalog of book listings, pull out the
/// semester sections you ask for, apply a uniform discount, and write a styled, paginated
/// quotation PDF addressed to the requesting institution.
///
/// The catalog files live in the data directory (see --data-dir). One file exists per course
/// type and is selected with --course.
#[derive(Debug, Parser, Clone)]
pub struct Args {
    #[clap(flatten)]
    common: Common,

    #[command(subcommand)]
    command: Command,
}

impl Args {
    pub fn new(common: Common, command: Command) -> Self {
        Self { common, command }
    }

    pub fn common(&self) -> &Common {
        &self.common
    }

    pub fn command(&self) -> &Command {
        &self.command
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Generate a quotation PDF for the given institution and semesters.
    ///
    /// Scans the selected catalog file for each semester section, collects its priced rows,
    /// applies the discount, and writes `Quotation_<name>.pdf` to the output directory.
    Generate(GenerateArgs),
}

/// Arguments common to all subcommands.
#[derive(Debug, Parser, Clone)]
pub struct Common {
    /// The logging verbosity. One of, from least to most verbose:
    /// off, error, warn, info, debug, trace
    ///
    /// This can be overridden by RUST_LOG. See the tracing-subscriber crate for instructions.
    #[arg(long, default_value_t = LevelFilter::INFO)]
    log_level: LevelFilter,

    /// The directory where the catalog data files are held. Defaults to ~/quotegen
    #[arg(long, env = "QUOTEGEN_DATA_DIR", default_value_t = default_data_dir())]
    data_dir: DisplayPath,
}

impl Common {
    pub fn new(log_level: LevelFilter, data_dir: PathBuf) -> Self {
        Self {
            log_level,
            data_dir: data_dir.into(),
        }
    }

    pub fn log_level(&self) -> LevelFilter {
        self.log_level
    }

    pub fn data_dir(&self) -> &DisplayPath {
        &self.data_dir
    }
}

/// Args for the `quotegen generate` command.
#[derive(Debug, Parser, Clone)]
pub struct GenerateArgs {
    /// The name of the institution the quotation is addressed to.
    #[arg(long)]
    org: String,

    /// The institution's location, e.g. Hanamkonda.
    #[arg(long, default_value = "")]
    location: String,

    /// The institution's phone number.
    #[arg(long, default_value = "")]
    phone: String,

    /// The course type. Selects which catalog file is read.
    #[arg(long, value_enum)]
    course: CourseType,

    /// Comma-separated semester names, e.g. "1st & 2nd Semester, 3rd & 4th Semester".
    ///
    /// Each name is matched case-insensitively against the catalog's section header rows.
    /// The order given here is the order sections appear in the quotation.
    #[arg(long)]
    semesters: String,

    /// Student quantity. Every line item is priced for this many copies.
    #[arg(long, default_value_t = 40, value_parser = clap::value_parser!(u32).range(1..))]
    quantity: u32,

    /// Discount percent applied uniformly to every line item.
    #[arg(long, default_value_t = 40, value_parser = clap::value_parser!(u8).range(0..=100))]
    discount: u8,

    /// The directory where the generated PDF is written.
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,
}

impl GenerateArgs {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        org: impl Into<String>,
        location: impl Into<String>,
        phone: impl Into<String>,
        course: CourseType,
        semesters: impl Into<String>,
        quantity: u32,
        discount: u8,
        out_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            org: org.into(),
            location: location.into(),
            phone: phone.into(),
            course,
            semesters: semesters.into(),
            quantity,
            discount,
            out_dir: out_dir.into(),
        }
    }

    pub fn org(&self) -> &str {
        &self.org
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn course(&self) -> CourseType {
        self.course
    }

    pub fn semesters(&self) -> &str {
        &self.semesters
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn discount(&self) -> u8 {
        self.discount
    }

    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }
}

fn default_data_dir() -> DisplayPath {
    DisplayPath(match dirs::home_dir() {
        Some(home) => home.join("quotegen"),
        None => {
            error!(
                "There was an error when trying to get your home directory. You can get around \
                this by providing --data-dir or QUOTEGEN_DATA_DIR instead of relying on the \
                default data directory. If you continue using the program right now, you may \
                have problems!",
            );
            PathBuf::from("quotegen")
        }
    })
}

#[derive(Debug, Default, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct DisplayPath(PathBuf);

impl From<PathBuf> for DisplayPath {
    fn from(value: PathBuf) -> Self {
        DisplayPath(value)
    }
}

impl Deref for DisplayPath {
    type Target = Path;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<Path> for DisplayPath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl Display for DisplayPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.to_string_lossy())
    }
}

impl FromStr for DisplayPath {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(PathBuf::from(s)))
    }
}

impl DisplayPath {
    pub fn new(path: PathBuf) -> Self {
        Self(path)
    }

    pub fn path(&self) -> &Path {
        &self.0
    }
}
