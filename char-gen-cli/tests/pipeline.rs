use std::fs;

use char_gen_core::{LanguageModel, SamplingMode};
use char_gen_corpus::faq::build_faq_corpus;
use rand::SeedableRng;
use rand::rngs::StdRng;

#[test]
fn faq_corpus_trains_a_model() {
	let dir = tempfile::tempdir().unwrap();
	let input = dir.path().join("faq.csv");
	let output = dir.path().join("data").join("faq.txt");
	fs::write(
		&input,
		"question,answer_clean\n\
		a,la la la la\n\
		b,la la la la\n",
	)
	.unwrap();

	build_faq_corpus(&input, &output).unwrap();
	let model = LanguageModel::new(2, &output).unwrap();

	// "la la la la\nla la la la": every window recurs before the end except the last "la"
	assert_eq!(model.table().get("la").map(|d| d.total()), Some(7));

	let mut rng = StdRng::seed_from_u64(5);
	let text = model.generate_with(200, SamplingMode::TopK, &mut rng).unwrap();
	assert_eq!(text.chars().count(), 200);
	assert!(text.chars().all(|c| "la \n".contains(c)));
}
