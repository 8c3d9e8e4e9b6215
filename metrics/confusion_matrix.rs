use super::StreamingMetric;
use ndarray::prelude::*;

/// A square matrix of counts where entry `(label, prediction)` is the number of examples with true class `label` that were predicted as class `prediction`.
#[derive(Clone, Debug, PartialEq)]
pub struct ConfusionMatrix {
	//                          label    prediction
	//                            |          |
	//                            v          v
	/// The shape of the counts is (n_classes x n_classes).
	counts: Array2<u64>,
}

impl ConfusionMatrix {
	pub fn new(n_classes: usize) -> Self {
		Self {
			counts: Array2::zeros((n_classes, n_classes)),
		}
	}

	pub fn n_classes(&self) -> usize {
		self.counts.nrows()
	}

	pub fn view(&self) -> ArrayView2<u64> {
		self.counts.view()
	}

	pub fn get(&self, label: usize, prediction: usize) -> u64 {
		self.counts[(label, prediction)]
	}

	/// The total number of examples counted.
	pub fn n_examples(&self) -> u64 {
		self.counts.sum()
	}

	/// The number of examples whose true class is `label`.
	pub fn n_labeled(&self, label: usize) -> u64 {
		self.counts.row(label).sum()
	}

	/// The number of examples predicted as class `prediction`.
	pub fn n_predicted(&self, prediction: usize) -> u64 {
		self.counts.column(prediction).sum()
	}

	/// The number of examples whose prediction matched the label.
	pub fn n_correct(&self) -> u64 {
		self.counts.diag().sum()
	}

	pub fn clear(&mut self) {
		self.counts.fill(0);
	}
}

impl StreamingMetric<'_> for ConfusionMatrix {
	type Input = (usize, usize);
	type Output = Array2<u64>;

	/// Count one `(label, prediction)` pair. Both must be less than `n_classes()`.
	fn update(&mut self, (label, prediction): Self::Input) {
		self.counts[(label, prediction)] += 1;
	}

	fn merge(&mut self, other: Self) {
		self.counts += &other.counts;
	}

	fn finalize(self) -> Self::Output {
		self.counts
	}
}

#[test]
fn test_update() {
	let mut confusion_matrix = ConfusionMatrix::new(3);
	for &pair in [(0, 0), (1, 1), (2, 1), (0, 0)].iter() {
		confusion_matrix.update(pair);
	}
	assert_eq!(confusion_matrix.n_examples(), 4);
	assert_eq!(confusion_matrix.n_correct(), 3);
	assert_eq!(confusion_matrix.n_labeled(0), 2);
	assert_eq!(confusion_matrix.n_predicted(1), 2);
	let expected: Array2<u64> = arr2(&[[2, 0, 0], [0, 1, 0], [0, 1, 0]]);
	assert_eq!(confusion_matrix.finalize(), expected);
}

#[test]
fn test_merge() {
	let mut a = ConfusionMatrix::new(2);
	a.update((0, 1));
	let mut b = ConfusionMatrix::new(2);
	b.update((0, 1));
	b.update((1, 1));
	a.merge(b);
	assert_eq!(a.get(0, 1), 2);
	assert_eq!(a.get(1, 1), 1);
	assert_eq!(a.n_examples(), 3);
	a.clear();
	assert_eq!(a.n_examples(), 0);
}
