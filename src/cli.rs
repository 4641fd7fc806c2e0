use std::path::PathBuf;

use clap::Parser;
use kiln::infrastructure::parse_path;
use kiln::{Config, DebugInfo, SourceEncoding};

/// Kiln - incremental compilation driver
#[derive(Parser, Debug)]
#[command(name = "kiln")]
#[command(author, version, about, long_about = None)]
#[command(
    after_help = "Referenced classes are compiled on demand from the source path when their artifacts are missing or out of date."
)]
pub struct Cli {
    /// Source files to compile
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Output root for artifacts (default: next to each source)
    #[arg(short = 'd', long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Where to look for referenced sources (default: the class path)
    #[arg(long, value_name = "PATHS")]
    pub sourcepath: Option<String>,

    /// Where to look for compiled classes
    #[arg(long, value_name = "PATHS")]
    pub classpath: Option<String>,

    /// Directories whose sub-directories hold compiled classes
    #[arg(long, value_name = "DIRS")]
    pub extdirs: Option<String>,

    /// Searched before everything else
    #[arg(long, value_name = "PATHS")]
    pub bootclasspath: Option<String>,

    /// Source file encoding (UTF-8, ISO-8859-1)
    #[arg(long)]
    pub encoding: Option<SourceEncoding>,

    /// Generate all debugging information
    #[arg(short = 'g', conflicts_with = "debug")]
    pub all_debug: bool,

    /// Debugging information: none, all, or a list of lines,vars,source
    #[arg(long, value_name = "LIST")]
    pub debug: Option<DebugInfo>,

    /// Warning handles to report, e.g. '*-UNUSED_*'
    #[arg(long, value_name = "PATTERNS")]
    pub warn: Option<String>,

    /// Recompile sources even when their artifacts are up to date
    #[arg(long)]
    pub rebuild: bool,

    /// Abort after this many errors (0 = never)
    #[arg(long, value_name = "N")]
    pub error_limit: Option<usize>,

    /// Compile without writing artifacts
    #[arg(long)]
    pub no_store: bool,

    /// Configuration file (default: ./kiln.toml, then the user config)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Flags take precedence over everything the config files and
    /// environment set.
    pub fn apply_to(&self, config: &mut Config) {
        if let Some(dir) = &self.output_dir {
            config.output.dir = Some(dir.clone());
        }
        if let Some(paths) = &self.sourcepath {
            config.source.path = Some(parse_path(paths));
        }
        if let Some(paths) = &self.classpath {
            config.classpath.paths = parse_path(paths);
        }
        if let Some(dirs) = &self.extdirs {
            config.classpath.ext_dirs = parse_path(dirs);
        }
        if let Some(paths) = &self.bootclasspath {
            config.classpath.boot = parse_path(paths);
        }
        if let Some(encoding) = self.encoding {
            config.source.encoding = encoding;
        }
        if self.all_debug {
            config.build.debug = DebugInfo::ALL;
        } else if let Some(debug) = self.debug {
            config.build.debug = debug;
        }
        if let Some(patterns) = &self.warn {
            config.build.warnings = Some(patterns.clone());
        }
        if self.rebuild {
            config.build.rebuild = true;
        }
        if let Some(limit) = self.error_limit {
            config.build.error_limit = limit;
        }
        if self.no_store {
            config.output.store = false;
        }
    }
}
