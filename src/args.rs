use std::path::PathBuf;

use clap::Parser;

/// Values passed by the install-wiki shell script before the wiki's
/// SQLite database file is generated.
///
/// The installer hands everything over positionally, so the order here
/// is the call convention. The first slot is filled by the installer
/// but not read by this helper.
#[derive(Parser, Debug, PartialEq)]
#[command(author, version, about, long_about = None)]
pub struct InstallArgs {
    /// First value of the installer's call convention; unused here.
    #[arg(allow_hyphen_values = true)]
    pub wiki_name: String,

    /// Login of the wiki's admin account.
    #[arg(allow_hyphen_values = true)]
    pub login: String,

    /// Password of the wiki's admin account.
    #[arg(allow_hyphen_values = true)]
    pub password: String,

    /// Folder where the database file will be placed (absolute path).
    #[arg(allow_hyphen_values = true)]
    pub database_dir: PathBuf,

    /// Port the wiki will be served on. Kept verbatim; the generation
    /// step decides how to interpret it.
    #[arg(allow_hyphen_values = true)]
    pub port: String,

    /// Anything the installer appends after the port; ignored, as the
    /// original helper ignored entries past position 5.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    pub rest: Vec<std::ffi::OsString>,
}

impl InstallArgs {
    /// Parses from an explicit argument vector whose first entry is the
    /// program name. Lets tests feed synthetic vectors instead of
    /// touching the ambient process arguments.
    pub fn from_argv<I, T>(argv: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::try_parse_from(argv)
    }
}
