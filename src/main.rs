use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
    process::ExitCode,
};

use clap::{ArgAction, Parser};
use little_search_engine::{
    error::Result,
    search::{SearchResult, DEFAULT_LIMIT},
    source::{discover_documents, read_document_list, read_noise_words, FileSource},
    SearchEngine,
};
use tracing::{error, info, warn, Level};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File listing the documents to index, in order
    #[arg(long, default_value = "docs.txt")]
    docs: PathBuf,

    /// Index every file under this directory instead of reading a document list
    #[arg(long, conflicts_with = "docs")]
    docs_dir: Option<PathBuf>,

    /// Directory that document names from the document list are resolved against
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// File listing the noise words
    #[arg(long, default_value = "noisewords.txt")]
    noise_words: PathBuf,

    /// Maximum number of documents per search
    #[arg(short = 'k', long, default_value_t = DEFAULT_LIMIT)]
    limit: usize,

    /// Run a single search and exit
    #[arg(long, num_args = 1..=2, value_names = ["KW1", "KW2"])]
    query: Option<Vec<String>>,

    /// Print results as JSON
    #[arg(long, default_value = "false")]
    json: bool,

    /// More logging, repeat for more detail
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Only log warnings and errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

impl Args {
    const fn log_level(&self) -> Level {
        if self.quiet {
            return Level::WARN;
        }

        match self.verbose {
            0 => Level::INFO,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.log_level())
        .with_writer(io::stderr)
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let noise_words = read_noise_words(&args.noise_words)?;
    info!(count = noise_words.len(), "loaded noise words");

    let (source, documents) = match &args.docs_dir {
        Some(dir) => (FileSource::new(dir), discover_documents(dir)?),
        None => (FileSource::new(&args.root), read_document_list(&args.docs)?),
    };

    let engine = SearchEngine::build(noise_words, &source, &documents)?;

    if let Some(query) = &args.query {
        return search(&engine, query, args);
    }

    let mut stdout = io::stdout();
    writeln!(stdout, "Enter two keywords ('exit' to quit):")?;
    stdout.flush()?;

    for line in io::stdin().lock().lines() {
        let line = line?;
        let words: Vec<String> = line.split_whitespace().map(String::from).collect();

        match words.first().map(String::as_str) {
            None => continue,
            Some("exit") => break,
            Some(_) => search(&engine, &words, args)?,
        }
    }

    Ok(())
}

fn search(engine: &SearchEngine, words: &[String], args: &Args) -> Result<()> {
    let keywords: Vec<String> = words
        .iter()
        .take(2)
        .map(|word| {
            engine.keyword(word).unwrap_or_else(|| {
                warn!(word = %word, "not a keyword");
                String::new()
            })
        })
        .collect();

    let first = keywords.first().map_or("", String::as_str);
    let second = keywords.get(1).map_or("", String::as_str);

    let results = engine.top_k_search_scored(first, second, args.limit);
    print_results(&results, args.json)
}

fn print_results(results: &[SearchResult], json: bool) -> Result<()> {
    let mut stdout = io::stdout().lock();

    if json {
        serde_json::to_writer_pretty(&mut stdout, results)?;
        writeln!(stdout)?;
        return Ok(());
    }

    if results.is_empty() {
        writeln!(stdout, "No matching documents")?;
    }

    for (rank, result) in results.iter().enumerate() {
        writeln!(stdout, "{}. {} ({})", rank + 1, result.document, result.frequency)?;
    }

    Ok(())
}
