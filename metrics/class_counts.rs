use crate::{ClassSetMode, ConfusionMatrix};

/// The true/false positive/negative counts for one class.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ClassCounts {
	pub true_positives: u64,
	pub false_negatives: u64,
	pub false_positives: u64,
	pub true_negatives: u64,
}

impl ClassCounts {
	/**
	Derive the counts for each of the `n_classes` configured classes from `confusion_matrix`.

	In binary mode a single entry is produced from the fixed positions of the 2x2 matrix, treating index 0 as the positive class. In multiclass mode each class is scored one versus rest.
	*/
	pub fn compute(
		confusion_matrix: &ConfusionMatrix,
		mode: ClassSetMode,
		n_classes: usize,
	) -> Vec<ClassCounts> {
		match mode {
			ClassSetMode::Binary => vec![ClassCounts {
				true_positives: confusion_matrix.get(0, 0),
				false_negatives: confusion_matrix.get(0, 1),
				false_positives: confusion_matrix.get(1, 0),
				true_negatives: confusion_matrix.get(1, 1),
			}],
			ClassSetMode::Multiclass => {
				let n_examples = confusion_matrix.n_examples();
				(0..n_classes)
					.map(|class_index| {
						let true_positives = confusion_matrix.get(class_index, class_index);
						let false_negatives =
							confusion_matrix.n_labeled(class_index) - true_positives;
						let false_positives =
							confusion_matrix.n_predicted(class_index) - true_positives;
						let true_negatives =
							n_examples - false_negatives - false_positives - true_positives;
						ClassCounts {
							true_positives,
							false_negatives,
							false_positives,
							true_negatives,
						}
					})
					.collect()
			}
		}
	}

	pub fn n_examples(&self) -> u64 {
		self.true_positives + self.false_negatives + self.false_positives + self.true_negatives
	}
}

#[test]
fn test_binary() {
	use crate::StreamingMetric;
	let mut confusion_matrix = ConfusionMatrix::new(2);
	for &pair in [(0, 0), (0, 0), (0, 1), (1, 0), (1, 1), (1, 1), (1, 1)].iter() {
		confusion_matrix.update(pair);
	}
	let counts = ClassCounts::compute(&confusion_matrix, ClassSetMode::Binary, 1);
	insta::assert_debug_snapshot!(counts, @r###"
	[
	    ClassCounts {
	        true_positives: 2,
	        false_negatives: 1,
	        false_positives: 1,
	        true_negatives: 3,
	    },
	]
	"###);
}

#[test]
fn test_multiclass() {
	use crate::StreamingMetric;
	// example taken from https://en.wikipedia.org/wiki/Confusion_matrix
	let mut confusion_matrix = ConfusionMatrix::new(3);
	let pairs = [
		((0, 0), 5),
		((0, 1), 3),
		((1, 0), 2),
		((1, 1), 3),
		((1, 2), 1),
		((2, 1), 2),
		((2, 2), 11),
	];
	for &(pair, count) in pairs.iter() {
		for _ in 0..count {
			confusion_matrix.update(pair);
		}
	}
	let counts = ClassCounts::compute(&confusion_matrix, ClassSetMode::Multiclass, 3);
	insta::assert_debug_snapshot!(counts, @r###"
	[
	    ClassCounts {
	        true_positives: 5,
	        false_negatives: 3,
	        false_positives: 2,
	        true_negatives: 17,
	    },
	    ClassCounts {
	        true_positives: 3,
	        false_negatives: 3,
	        false_positives: 5,
	        true_negatives: 16,
	    },
	    ClassCounts {
	        true_positives: 11,
	        false_negatives: 2,
	        false_positives: 1,
	        true_negatives: 13,
	    },
	]
	"###);
	for class_counts in counts.iter() {
		assert_eq!(class_counts.n_examples(), 27);
	}
}
