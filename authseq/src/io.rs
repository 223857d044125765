use authseq_core::{fixture::load_fixture, models::AuthorizationRecord};
use clap::Args;
use std::{
    fs::File,
    io::{BufReader, BufWriter, Read, Write, stdin, stdout},
    path::PathBuf,
    str::FromStr,
};
use tracing::{Level, event};

// Every subcommand reads a record set and writes one JSON document.
#[derive(Args, Debug)]
pub struct IOArgs {
    /// A JSON array of authorization records ("-" implies stdin; omit for the built-in dataset)
    #[arg(short, long, global = true, value_parser = clap::value_parser!(PathOrStd))]
    input: Option<PathOrStd>,

    /// The output file ("-" implies stdout)
    #[arg(short, long, global = true, default_value = "-", value_parser = clap::value_parser!(PathOrStd))]
    output: PathOrStd,
}

impl IOArgs {
    /// Loads the raw records, rejecting the whole file if any record is malformed
    pub fn records(&self) -> anyhow::Result<Vec<AuthorizationRecord>> {
        let Some(input) = &self.input else {
            event!(Level::DEBUG, "using built-in dataset");
            return Ok(load_fixture());
        };
        let reader: Box<dyn Read> = match input {
            PathOrStd::Path(path) => Box::new(BufReader::new(File::open(path)?)),
            PathOrStd::Std => Box::new(stdin().lock()),
        };
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn write(&self) -> anyhow::Result<Box<dyn Write>> {
        match &self.output {
            PathOrStd::Path(path) => Ok(Box::new(BufWriter::new(File::create(path)?))),
            PathOrStd::Std => Ok(Box::new(stdout().lock())),
        }
    }
}

#[derive(Clone, Debug)]
pub enum PathOrStd {
    Path(PathBuf),
    Std,
}

impl FromStr for PathOrStd {
    type Err = <PathBuf as FromStr>::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "-" {
            Ok(Self::Std)
        } else {
            Ok(Self::Path(s.parse()?))
        }
    }
}
