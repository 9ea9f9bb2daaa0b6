use std::path::{Path, PathBuf};

use structopt::StructOpt;

use crate::code_block::CodeBlock;
use crate::config::{Config, Overrides};
use crate::error::SiteError;
use crate::pages;

#[derive(StructOpt, Debug)]
#[structopt(
    name = "rift-site",
    about = "the RIFT language website: docs, examples and a simulated playground",
)]
pub struct Cli {
    #[structopt(subcommand)]
    pub command: Option<Command>,
}

#[derive(StructOpt, Debug)]
pub enum Command {
    /// Serve the site (the default)
    Serve(Overrides),
    /// Print a file as a highlighted HTML code block
    Highlight {
        #[structopt(parse(from_os_str))]
        file: PathBuf,
        /// Language tag shown in the block header
        #[structopt(short, long, default_value = "rift")]
        language: String,
        #[structopt(long)]
        no_line_numbers: bool,
        /// Filename shown in the block header
        #[structopt(short, long)]
        filename: Option<String>,
    },
    /// Print the simulated playground output for a file
    Run {
        #[structopt(parse(from_os_str))]
        file: PathBuf,
    },
}

impl Cli {
    /// Environment config with any `serve` flags applied.
    pub fn config(&self) -> Result<Config, SiteError> {
        let config = Config::from_env()?;
        Ok(match &self.command {
            Some(Command::Serve(overrides)) => config.apply(overrides.clone()),
            _ => config,
        })
    }
}

fn read_source(path: &Path) -> Result<String, SiteError> {
    std::fs::read_to_string(path).map_err(|e| SiteError::io(path, e))
}

pub async fn run_cli(cli: Cli, config: Config) -> Result<(), SiteError> {
    match cli.command {
        None | Some(Command::Serve(_)) => crate::web_server::start_web_server(config).await,
        Some(Command::Highlight {
            file,
            language,
            no_line_numbers,
            filename,
        }) => {
            let source = read_source(&file)?;
            let mut block = CodeBlock::new(source.trim_end_matches('\n'))
                .language(&language)
                .line_numbers(!no_line_numbers);
            if let Some(name) = filename.as_deref() {
                block = block.filename(name);
            }
            println!("{}", block.render());
            Ok(())
        }
        Some(Command::Run { file }) => {
            let source = read_source(&file)?;
            print!("{}", pages::run_banner(&source));
            Ok(())
        }
    }
}
