use std::ops::RangeInclusive;
use std::path::Path;
use std::sync::LazyLock;

use indicatif::ProgressBar;
use log::{debug, info};
use regex::Regex;
use reqwest::blocking::Client;

use crate::error::CorpusError;
use crate::io::write_corpus;

/// Default location of the puzzle corpus.
pub const DEFAULT_OUTPUT: &str = "data/advent_of_code.txt";

/// First and last puzzle years scraped by default.
pub const DEFAULT_YEARS: RangeInclusive<u16> = 2015..=2022;

/// Every event has one puzzle per day from the 1st to the 25th.
pub const DAYS: RangeInclusive<u8> = 1..=25;

/// The description starts at the first day title...
const START_MARKER: &str = "--- Day ";
/// ...and stops right before the invitation to log in.
const END_MARKER: &str = "<p>To play";

/// Lazy match so that each tag is removed on its own.
static HTML_TAGS: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"<.*?>").expect("HTML tag pattern is a valid regex"));

/// Returns the public URL of a puzzle.
pub fn puzzle_url(year: u16, day: u8) -> String {
	format!("https://adventofcode.com/{year}/day/{day}")
}

/// Downloads puzzle pages and reduces them to their description text.
#[derive(Debug)]
pub struct PuzzleScraper {
	client: Client,
}

impl PuzzleScraper {
	pub fn new() -> Result<Self, CorpusError> {
		let client = Client::builder()
			.user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
			.build()?;
		Ok(Self::with_client(client))
	}

	/// Uses an already configured HTTP client.
	pub fn with_client(client: Client) -> Self {
		Self { client }
	}

	/// Slices the description out of a puzzle page and strips its markup.
	///
	/// # Behavior
	/// - Keeps the text between the first `--- Day ` and the first `<p>To play`
	/// - Removes every `---` (title decoration)
	/// - Removes every tag, leaving entities untouched
	/// - Trims surrounding whitespace
	///
	/// # Errors
	/// `CorpusError::MarkerNotFound` if either marker is absent, `url` is
	/// only used to report it.
	pub fn extract_description(&self, html: &str, url: &str) -> Result<String, CorpusError> {
		let start = html
			.find(START_MARKER)
			.ok_or_else(|| CorpusError::MarkerNotFound { marker: START_MARKER, url: url.to_owned() })?;
		let end = html
			.find(END_MARKER)
			.ok_or_else(|| CorpusError::MarkerNotFound { marker: END_MARKER, url: url.to_owned() })?;

		let section = html.get(start..end).unwrap_or_default().replace("---", "");
		Ok(HTML_TAGS.replace_all(&section, "").trim().to_owned())
	}

	/// Downloads a page and returns its description.
	pub fn fetch_description(&self, year: u16, day: u8) -> Result<String, CorpusError> {
		let url = puzzle_url(year, day);
		debug!("GET {}", url);
		let html = self.client.get(&url).send()?.error_for_status()?.text()?;
		self.extract_description(&html, &url)
	}

	/// Downloads every puzzle of every year in `years`, in order.
	pub fn fetch_all(&self, years: RangeInclusive<u16>, progress: &ProgressBar) -> Result<Vec<String>, CorpusError> {
		collect_pages(years, progress, |year, day| self.fetch_description(year, day))
	}
}

/// Runs `fetch` on every (year, day) pair, in order.
///
/// The bar is cleared whether every page succeeds or one fails.
fn collect_pages<F>(years: RangeInclusive<u16>, progress: &ProgressBar, mut fetch: F) -> Result<Vec<String>, CorpusError>
where
	F: FnMut(u16, u8) -> Result<String, CorpusError>,
{
	let pages = years.clone().count() * DAYS.count();
	progress.set_length(pages as u64);

	let mut texts = Vec::with_capacity(pages);
	let fetch_every_page = || -> Result<(), CorpusError> {
		for year in years {
			progress.set_message(year.to_string());
			for day in DAYS {
				texts.push(fetch(year, day)?);
				progress.inc(1);
			}
		}
		Ok(())
	};
	let result = fetch_every_page();
	progress.finish_and_clear();

	result.map(|()| texts)
}

/// Builds the puzzle corpus: one description per page, pages separated
/// by a newline.
///
/// Returns the number of characters written.
pub fn build_advent_corpus<P: AsRef<Path>>(
	output: P,
	years: RangeInclusive<u16>,
	progress: &ProgressBar,
) -> Result<usize, CorpusError> {
	info!("Downloading puzzles from {} to {}", years.start(), years.end());
	let scraper = PuzzleScraper::new()?;
	let texts = scraper.fetch_all(years, progress)?;
	write_corpus(output, &texts)
}

#[cfg(test)]
mod tests {
	use super::*;

	const PAGE: &str = "<html><head><title>Day 1 - Advent of Code 2015</title></head>\n\
		<body><main><article class=\"day-desc\"><h2>--- Day 1: Not Quite Lisp ---</h2>\n\
		<p>Santa is trying to deliver presents in a <em>large apartment building</em>.</p>\n\
		<p>An opening parenthesis, <code>(</code>, means he should go up one floor.</p>\n\
		</article>\n<p>To play, please identify yourself via one of these services:</p></main></body></html>";

	fn scraper() -> PuzzleScraper {
		PuzzleScraper::with_client(Client::new())
	}

	#[test]
	fn builds_puzzle_url() {
		assert_eq!(puzzle_url(2015, 1), "https://adventofcode.com/2015/day/1");
		assert_eq!(puzzle_url(2022, 25), "https://adventofcode.com/2022/day/25");
	}

	#[test]
	fn extracts_description_without_markup() {
		let text = scraper().extract_description(PAGE, "test").unwrap();

		assert_eq!(
			text,
			"Day 1: Not Quite Lisp \n\
			Santa is trying to deliver presents in a large apartment building.\n\
			An opening parenthesis, (, means he should go up one floor."
		);
	}

	#[test]
	fn tags_spanning_lines_are_kept() {
		let html = "--- Day 3 ---<a\nhref=\"x\">link</a> <b>bold</b><p>To play";

		let text = scraper().extract_description(html, "test").unwrap();
		assert_eq!(text, "Day 3 <a\nhref=\"x\">link bold");
	}

	#[test]
	fn missing_start_marker() {
		let result = scraper().extract_description("<p>To play</p>", "https://adventofcode.com/2015/day/26");

		match result {
			Err(CorpusError::MarkerNotFound { marker, url }) => {
				assert_eq!(marker, START_MARKER);
				assert_eq!(url, "https://adventofcode.com/2015/day/26");
			}
			other => panic!("unexpected result: {other:?}"),
		}
	}

	#[test]
	fn missing_end_marker() {
		let result = scraper().extract_description("--- Day 1 --- logged in", "test");

		assert!(matches!(result, Err(CorpusError::MarkerNotFound { marker: END_MARKER, .. })));
	}

	#[test]
	fn end_before_start_gives_empty_text() {
		let text = scraper().extract_description("<p>To play</p> --- Day 1 ---", "test").unwrap();
		assert_eq!(text, "");
	}

	#[test]
	fn tag_pattern_is_lazy() {
		assert_eq!(HTML_TAGS.replace_all("<p>a</p><b>b</b>", ""), "ab");
	}

	#[test]
	fn collects_pages_in_order() {
		let progress = ProgressBar::hidden();
		let texts = collect_pages(2015..=2016, &progress, |year, day| Ok(format!("{year}-{day}"))).unwrap();

		assert_eq!(texts.len(), 50);
		assert_eq!(texts[0], "2015-1");
		assert_eq!(texts[49], "2016-25");
		assert!(progress.is_finished());
	}

	#[test]
	fn failed_page_still_clears_progress() {
		let progress = ProgressBar::hidden();
		let result = collect_pages(2015..=2022, &progress, |year, day| {
			if (year, day) == (2016, 3) {
				Err(CorpusError::MarkerNotFound { marker: END_MARKER, url: puzzle_url(year, day) })
			} else {
				Ok(String::new())
			}
		});

		assert!(matches!(result, Err(CorpusError::MarkerNotFound { .. })));
		assert_eq!(progress.position(), 27);
		assert!(progress.is_finished());
	}

	#[test]
	fn default_range_covers_every_puzzle() {
		assert_eq!(DEFAULT_YEARS.count() * DAYS.count(), 200);
	}
}
