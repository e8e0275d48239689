use std::error::Error;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use char_gen_core::{DEFAULT_LENGTH, LanguageModel, ModelError, SamplingMode};
use char_gen_corpus::{advent, faq};
use clap::builder::RangedU64ValueParser;
use clap::{Args, Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use log::{info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;

#[derive(Parser)]
#[command(name = "char-gen")]
#[command(about = "Character-level n-gram text generator")]
#[command(version)]
struct Cli {
	#[command(subcommand)]
	command: Command,
}

#[derive(Subcommand)]
enum Command {
	/// Train a model on a corpus file and generate text from it
	Generate(GenerateArgs),
	/// Build a training corpus
	#[command(subcommand)]
	Corpus(CorpusCommand),
}

#[derive(Args)]
struct GenerateArgs {
	#[arg(long, default_value_t = 10, value_parser = RangedU64ValueParser::<usize>::new().range(1..), help = "Number of preceding characters used as context")]
	order: usize,
	#[arg(long, default_value = advent::DEFAULT_OUTPUT, help = "Training corpus path")]
	corpus: PathBuf,
	#[arg(long, default_value_t = DEFAULT_LENGTH, help = "Number of characters to generate")]
	length: usize,
	#[arg(long, help = "Pick among every observed character instead of the 3 most common")]
	uniform: bool,
	#[arg(long, help = "Seed of the random generator, for reproducible output")]
	seed: Option<u64>,
	#[arg(long, help = "Write the generated text to this file instead of stdout")]
	output: Option<PathBuf>,
}

impl GenerateArgs {
	fn sampling_mode(&self) -> SamplingMode {
		if self.uniform { SamplingMode::Uniform } else { SamplingMode::TopK }
	}
}

#[derive(Subcommand)]
enum CorpusCommand {
	/// Extract the cleaned answers of a FAQ export
	Faq {
		#[arg(long, default_value = faq::DEFAULT_INPUT)]
		input: PathBuf,
		#[arg(long, default_value = faq::DEFAULT_OUTPUT)]
		output: PathBuf,
	},
	/// Download Advent of Code puzzle descriptions
	Advent {
		#[arg(long, default_value_t = *advent::DEFAULT_YEARS.start())]
		from: u16,
		#[arg(long, default_value_t = *advent::DEFAULT_YEARS.end())]
		to: u16,
		#[arg(long, default_value = advent::DEFAULT_OUTPUT)]
		output: PathBuf,
	},
}

fn main() -> ExitCode {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

	let cli = Cli::parse();
	let result = match cli.command {
		Command::Generate(args) => generate(args),
		Command::Corpus(command) => build_corpus(command),
	};

	match result {
		Ok(()) => ExitCode::SUCCESS,
		Err(e) => {
			eprintln!("{e}");
			ExitCode::FAILURE
		}
	}
}

/// Trains on the corpus, then emits the generated text.
///
/// On a dead end the partial text is still emitted before failing.
fn generate(args: GenerateArgs) -> Result<(), Box<dyn Error>> {
	let progress = progress_bar();
	let model = LanguageModel::new_with_progress(args.order, &args.corpus, &progress)?;

	let mode = args.sampling_mode();
	let mut rng = match args.seed {
		Some(seed) => StdRng::seed_from_u64(seed),
		None => StdRng::from_os_rng(),
	};

	match model.generate_with(args.length, mode, &mut rng) {
		Ok(text) => emit(&text, args.output.as_deref()),
		Err(err) => {
			if let ModelError::DeadEnd { partial, .. } = &err {
				warn!("Emitting the {} characters generated before the dead end", partial.chars().count());
				emit(partial, args.output.as_deref())?;
			}
			Err(err.into())
		}
	}
}

fn build_corpus(command: CorpusCommand) -> Result<(), Box<dyn Error>> {
	match command {
		CorpusCommand::Faq { input, output } => {
			faq::build_faq_corpus(&input, &output)?;
		}
		CorpusCommand::Advent { from, to, output } => {
			if from > to {
				return Err(format!("Expected --from <= --to, got {from} > {to}").into());
			}
			advent::build_advent_corpus(&output, from..=to, &progress_bar())?;
		}
	}
	Ok(())
}

fn emit(text: &str, output: Option<&Path>) -> Result<(), Box<dyn Error>> {
	match output {
		Some(path) => {
			fs::write(path, text)?;
			info!("Generated text written to '{}'", path.display());
		}
		None => {
			let mut stdout = io::stdout().lock();
			writeln!(stdout, "{text}")?;
		}
	}
	Ok(())
}

fn progress_bar() -> ProgressBar {
	let bar = ProgressBar::new(0);
	if let Ok(style) = ProgressStyle::with_template("{msg:>10} [{bar:40}] {pos}/{len} ({eta})") {
		bar.set_style(style.progress_chars("=> "));
	}
	bar
}

#[cfg(test)]
mod tests {
	use super::*;
	use clap::CommandFactory;

	#[test]
	fn cli_definition_is_valid() {
		Cli::command().debug_assert();
	}

	#[test]
	fn generate_defaults() {
		let cli = Cli::try_parse_from(["char-gen", "generate"]).unwrap();
		let Command::Generate(args) = cli.command else { panic!("expected generate") };

		assert_eq!(args.order, 10);
		assert_eq!(args.length, 5_000);
		assert_eq!(args.corpus, PathBuf::from("data/advent_of_code.txt"));
		assert!(!args.uniform);
		assert!(args.seed.is_none());
	}

	#[test]
	fn sampling_mode_follows_uniform_flag() {
		let parse = |args: &[&str]| match Cli::try_parse_from(args.iter().copied()).unwrap().command {
			Command::Generate(args) => args.sampling_mode(),
			Command::Corpus(_) => panic!("expected generate"),
		};

		assert_eq!(parse(&["char-gen", "generate"]), SamplingMode::TopK);
		assert_eq!(parse(&["char-gen", "generate", "--uniform"]), SamplingMode::Uniform);
	}

	#[test]
	fn order_zero_is_rejected() {
		assert!(Cli::try_parse_from(["char-gen", "generate", "--order", "0"]).is_err());
	}

	#[test]
	fn advent_defaults_cover_2015_to_2022() {
		let cli = Cli::try_parse_from(["char-gen", "corpus", "advent"]).unwrap();
		let Command::Corpus(CorpusCommand::Advent { from, to, .. }) = cli.command else {
			panic!("expected corpus advent")
		};

		assert_eq!((from, to), (2015, 2022));
	}

	#[test]
	fn missing_corpus_fails_without_output() {
		let dir = tempfile::tempdir().unwrap();
		let output = dir.path().join("out.txt");
		let args = GenerateArgs {
			order: 3,
			corpus: dir.path().join("missing.txt"),
			length: 10,
			uniform: false,
			seed: Some(1),
			output: Some(output.clone()),
		};

		let err = generate(args).unwrap_err();
		assert!(err.to_string().contains("not found. Model cannot be trained."));
		assert!(!output.exists());
	}

	#[test]
	fn dead_end_still_writes_partial_text() {
		let dir = tempfile::tempdir().unwrap();
		let corpus = dir.path().join("corpus.txt");
		let output = dir.path().join("out.txt");
		fs::write(&corpus, "abc").unwrap();
		let args = GenerateArgs {
			order: 1,
			corpus,
			length: 10,
			uniform: false,
			seed: Some(1),
			output: Some(output.clone()),
		};

		assert!(generate(args).is_err());
		assert_eq!(fs::read_to_string(&output).unwrap(), "abc");
	}
}
