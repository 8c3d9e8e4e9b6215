use crate::{
	table::{ReportTable, Row},
	ClassCounts, ClassSet, ClassSetMode, ClassificationReportError, ClassificationReportOptions,
	ConfusionMatrix, LabelsParameter, LengthMismatchPolicy, StreamingMetric, EPSILON,
};
use itertools::izip;
use ndarray::prelude::*;
use num_traits::ToPrimitive;

/**
A `ClassificationReport` accumulates a confusion matrix from pairs of true and predicted class indexes and reports the precision, recall and f1 score of each class along with the overall accuracy.

Every call to `accumulate()` adds to the counts from previous calls until `reset()` is called. The derived metrics are recomputed from the counts each time a report is requested.

With a single class name the report runs in binary mode: labels are `0` for the named class and `1` for everything else, and only the named class is reported. With two or more class names labels index into the class names and every class is scored one versus rest.
*/
#[derive(Clone, Debug)]
pub struct ClassificationReport {
	class_set: ClassSet,
	options: ClassificationReportOptions,
	confusion_matrix: ConfusionMatrix,
	/// The number of examples with each true label, one entry per row of the confusion matrix.
	sample_per_class: Array1<u64>,
	class_counts: Vec<ClassCounts>,
}

/// The input to [`ClassificationReport::update`](struct.ClassificationReport.html#method.update).
pub struct ClassificationReportInput<'a> {
	/// (n_examples)
	pub labels: ArrayView1<'a, usize>,
	/// (n_examples)
	pub predictions: ArrayView1<'a, usize>,
}

/// The output from [`ClassificationReport::report_dict`](struct.ClassificationReport.html#method.report_dict). It serializes as a map from each class name to its metrics, followed by the `accuracy` and `total_sample` entries.
#[derive(Clone, Debug, PartialEq)]
pub struct ClassificationReportOutput {
	pub class_metrics: Vec<ClassReportMetrics>,
	pub accuracy: f64,
	pub total_sample: u64,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ClassReportMetrics {
	#[serde(skip)]
	pub class_name: String,
	pub precision: f64,
	pub recall: f64,
	pub f1_score: f64,
	pub n_sample: u64,
}

struct DerivedMetrics {
	precision: Vec<f64>,
	recall: Vec<f64>,
	f1_score: Vec<f64>,
	accuracy: f64,
}

impl ClassificationReport {
	pub fn new(
		class_names: Vec<String>,
		options: ClassificationReportOptions,
	) -> Result<Self, ClassificationReportError> {
		let class_set = ClassSet::new(class_names)?;
		let n_classes = class_set.matrix_size();
		let mut report = Self {
			class_set,
			options,
			confusion_matrix: ConfusionMatrix::new(n_classes),
			sample_per_class: Array1::zeros(n_classes),
			class_counts: Vec::new(),
		};
		report.reset();
		Ok(report)
	}

	/// Discard everything accumulated so far.
	pub fn reset(&mut self) {
		let n_classes = self.class_set.matrix_size();
		self.confusion_matrix = ConfusionMatrix::new(n_classes);
		self.sample_per_class = Array1::zeros(n_classes);
		self.class_counts = vec![ClassCounts::default(); self.class_set.len()];
		log::debug!(
			"reset classification report with {} classes ({:?})",
			self.class_set.len(),
			self.class_set.mode(),
		);
	}

	/// Accumulate the pairs `(labels[i], predictions[i])`. See [`update`](#method.update).
	pub fn accumulate(
		&mut self,
		labels: &[usize],
		predictions: &[usize],
	) -> Result<(), ClassificationReportError> {
		self.update(ClassificationReportInput {
			labels: ArrayView1::from(labels),
			predictions: ArrayView1::from(predictions),
		})
	}

	/**
	Accumulate the pairs of true and predicted class indexes in `input`.

	Both sequences are checked before anything is counted, so on error the report is left exactly as it was. A label that is not less than the size of the confusion matrix is rejected with [`LabelOutOfRange`](enum.ClassificationReportError.html#variant.LabelOutOfRange). When the sequences differ in length the configured [`LengthMismatchPolicy`](enum.LengthMismatchPolicy.html) either drops the unpaired tail or rejects the call.
	*/
	pub fn update(
		&mut self,
		input: ClassificationReportInput,
	) -> Result<(), ClassificationReportError> {
		let n_labels = input.labels.len();
		let n_predictions = input.predictions.len();
		if n_labels != n_predictions {
			match self.options.length_mismatch {
				LengthMismatchPolicy::Truncate => {
					log::warn!(
						"received {} true labels but {} predicted labels, ignoring the last {}",
						n_labels,
						n_predictions,
						n_labels.max(n_predictions) - n_labels.min(n_predictions),
					);
				}
				LengthMismatchPolicy::Error => {
					return Err(ClassificationReportError::LengthMismatch {
						n_labels,
						n_predictions,
					});
				}
			}
		}
		let n_classes = self.class_set.matrix_size();
		check_labels(LabelsParameter::TrueLabels, input.labels, n_classes)?;
		check_labels(LabelsParameter::PredictedLabels, input.predictions, n_classes)?;
		for (&label, &prediction) in input.labels.iter().zip(input.predictions.iter()) {
			self.confusion_matrix.update((label, prediction));
			self.sample_per_class[label] += 1;
		}
		self.class_counts = ClassCounts::compute(
			&self.confusion_matrix,
			self.class_set.mode(),
			self.class_set.len(),
		);
		log::debug!(
			"accumulated {} examples, {} in total",
			n_labels.min(n_predictions),
			self.confusion_matrix.n_examples(),
		);
		Ok(())
	}

	/// Add the counts accumulated by `other` to this report. Both reports must have been created with the same class names.
	pub fn merge(&mut self, other: Self) -> Result<(), ClassificationReportError> {
		if self.class_set != other.class_set {
			return Err(ClassificationReportError::ClassSetMismatch);
		}
		self.confusion_matrix.merge(other.confusion_matrix);
		self.sample_per_class += &other.sample_per_class;
		self.class_counts = ClassCounts::compute(
			&self.confusion_matrix,
			self.class_set.mode(),
			self.class_set.len(),
		);
		log::debug!(
			"merged classification reports, {} examples in total",
			self.confusion_matrix.n_examples(),
		);
		Ok(())
	}

	/// Compute the metrics for each reported class along with the accuracy and the total number of examples.
	pub fn report_dict(&self) -> ClassificationReportOutput {
		let metrics = self.derived_metrics();
		let class_metrics = izip!(
			self.class_set.names(),
			metrics.precision,
			metrics.recall,
			metrics.f1_score,
			self.sample_per_class.iter(),
		)
		.map(
			|(class_name, precision, recall, f1_score, &n_sample)| ClassReportMetrics {
				class_name: class_name.clone(),
				precision,
				recall,
				f1_score,
				n_sample,
			},
		)
		.collect();
		ClassificationReportOutput {
			class_metrics,
			accuracy: metrics.accuracy,
			total_sample: self.n_examples(),
		}
	}

	/// Render the report as a fixed width text table with one row per reported class followed by the accuracy.
	pub fn print_report(&self) -> String {
		let output = self.report_dict();
		let rows: Vec<Row> = output
			.class_metrics
			.iter()
			.map(|class_metrics| Row {
				name: &class_metrics.class_name,
				precision: class_metrics.precision,
				recall: class_metrics.recall,
				f1_score: class_metrics.f1_score,
				n_sample: class_metrics.n_sample,
			})
			.collect();
		// The first two columns of the accuracy row only hold placeholders.
		let summary = Row {
			name: "accuracy",
			precision: 0.0,
			recall: 0.0,
			f1_score: output.accuracy,
			n_sample: output.total_sample,
		};
		ReportTable {
			name_width: self.class_set.name_column_width(),
			digits: self.options.digits,
			rows: &rows,
			summary,
		}
		.to_string()
	}

	pub fn class_set(&self) -> &ClassSet {
		&self.class_set
	}

	pub fn options(&self) -> &ClassificationReportOptions {
		&self.options
	}

	/// The confusion matrix, indexed by `(label, prediction)`.
	pub fn confusion_matrix(&self) -> ArrayView2<u64> {
		self.confusion_matrix.view()
	}

	pub fn sample_per_class(&self) -> ArrayView1<u64> {
		self.sample_per_class.view()
	}

	/// The true/false positive/negative counts for each configured class. In binary mode there is exactly one entry.
	pub fn class_counts(&self) -> &[ClassCounts] {
		&self.class_counts
	}

	/// The number of examples accumulated since the last reset.
	pub fn n_examples(&self) -> u64 {
		self.sample_per_class.sum()
	}

	fn derived_metrics(&self) -> DerivedMetrics {
		let precision: Vec<f64> = self
			.class_counts
			.iter()
			.map(|counts| {
				let true_positives = counts.true_positives.to_f64().unwrap();
				let false_positives = counts.false_positives.to_f64().unwrap();
				true_positives / (true_positives + false_positives + EPSILON)
			})
			.collect();
		let recall: Vec<f64> = self
			.class_counts
			.iter()
			.map(|counts| {
				let true_positives = counts.true_positives.to_f64().unwrap();
				let false_negatives = counts.false_negatives.to_f64().unwrap();
				true_positives / (true_positives + false_negatives + EPSILON)
			})
			.collect();
		let f1_score = precision
			.iter()
			.zip(recall.iter())
			.map(|(precision, recall)| 2.0 * precision * recall / (precision + recall + EPSILON))
			.collect();
		let accuracy = match self.class_set.mode() {
			ClassSetMode::Binary => {
				let counts = &self.class_counts[0];
				let n_correct = (counts.true_positives + counts.true_negatives)
					.to_f64()
					.unwrap();
				n_correct / (counts.n_examples().to_f64().unwrap() + EPSILON)
			}
			// Multiclass accuracy is the plain fraction of correct predictions, without smoothing.
			ClassSetMode::Multiclass => {
				let n_examples = self.n_examples();
				if n_examples == 0 {
					0.0
				} else {
					let n_correct: u64 = self
						.class_counts
						.iter()
						.map(|counts| counts.true_positives)
						.sum();
					n_correct.to_f64().unwrap() / n_examples.to_f64().unwrap()
				}
			}
		};
		DerivedMetrics {
			precision,
			recall,
			f1_score,
			accuracy,
		}
	}
}

fn check_labels(
	parameter: LabelsParameter,
	labels: ArrayView1<usize>,
	n_classes: usize,
) -> Result<(), ClassificationReportError> {
	match labels.iter().position(|&label| label >= n_classes) {
		Some(position) => Err(ClassificationReportError::LabelOutOfRange {
			parameter,
			position,
			label: labels[position],
			n_classes,
		}),
		None => Ok(()),
	}
}

impl ClassificationReportOutput {
	/// Look up the metrics for `class_name`.
	pub fn get(&self, class_name: &str) -> Option<&ClassReportMetrics> {
		self.class_metrics
			.iter()
			.find(|class_metrics| class_metrics.class_name == class_name)
	}
}

impl serde::Serialize for ClassificationReportOutput {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: serde::Serializer,
	{
		use serde::ser::SerializeMap;
		let mut map = serializer.serialize_map(Some(self.class_metrics.len() + 2))?;
		for class_metrics in self.class_metrics.iter() {
			map.serialize_entry(&class_metrics.class_name, class_metrics)?;
		}
		map.serialize_entry("accuracy", &self.accuracy)?;
		map.serialize_entry("total_sample", &self.total_sample)?;
		map.end()
	}
}

#[cfg(test)]
fn assert_close(actual: f64, expected: f64) {
	assert!(
		(actual - expected).abs() < 1e-6,
		"expected {} to be close to {}",
		actual,
		expected
	);
}

#[cfg(test)]
fn names(names: &[&str]) -> Vec<String> {
	names.iter().map(|name| name.to_string()).collect()
}

#[test]
fn test_binary() {
	let mut report =
		ClassificationReport::new(names(&["positive"]), ClassificationReportOptions::default())
			.unwrap();
	report.accumulate(&[0, 0, 1, 1], &[0, 1, 0, 1]).unwrap();
	let expected: Array2<u64> = arr2(&[[1, 1], [1, 1]]);
	assert_eq!(report.confusion_matrix(), expected);
	insta::assert_debug_snapshot!(report.class_counts(), @r###"
	[
	    ClassCounts {
	        true_positives: 1,
	        false_negatives: 1,
	        false_positives: 1,
	        true_negatives: 1,
	    },
	]
	"###);
	let output = report.report_dict();
	// Only the named class is reported, the implicit negative class is not.
	assert_eq!(output.class_metrics.len(), 1);
	let positive = output.get("positive").unwrap();
	// The ratios are smoothed by EPSILON so they are slightly below 0.5.
	assert_close(positive.precision, 0.5);
	assert_close(positive.recall, 0.5);
	assert_close(positive.f1_score, 0.5);
	assert!(positive.precision < 0.5);
	assert_eq!(positive.n_sample, 2);
	assert_close(output.accuracy, 0.5);
	assert_eq!(output.total_sample, 4);
	let expected = [
		"         precision    recall  f1_score  n_sample",
		"positive     0.500     0.500     0.500         2",
		"------------------------------------------------",
		"accuracy     0.000     0.000     0.500         4",
	]
	.join("\n");
	assert_eq!(report.print_report(), expected);
}

#[test]
fn test_multiclass() {
	let mut report =
		ClassificationReport::new(names(&["a", "b", "c"]), ClassificationReportOptions::default())
			.unwrap();
	report.accumulate(&[0, 1, 2, 0], &[0, 1, 1, 0]).unwrap();
	let true_positives: Vec<u64> = report
		.class_counts()
		.iter()
		.map(|counts| counts.true_positives)
		.collect();
	assert_eq!(true_positives, vec![2, 1, 0]);
	let output = report.report_dict();
	let b = output.get("b").unwrap();
	// Class b was predicted twice, once for a true b and once for a true c.
	assert_close(b.precision, 0.5);
	assert_close(b.recall, 1.0);
	assert_close(b.f1_score, 2.0 / 3.0);
	let c = output.get("c").unwrap();
	assert_eq!(c.precision, 0.0);
	assert_eq!(c.recall, 0.0);
	assert_eq!(c.f1_score, 0.0);
	assert_eq!(output.total_sample, 4);
	// Multiclass accuracy is not smoothed.
	assert_eq!(output.accuracy, 0.75);
	let expected = [
		"         precision    recall  f1_score  n_sample",
		"       a     1.000     1.000     1.000         2",
		"       b     0.500     1.000     0.667         1",
		"       c     0.000     0.000     0.000         1",
		"------------------------------------------------",
		"accuracy     0.000     0.000     0.750         4",
	]
	.join("\n");
	assert_eq!(report.print_report(), expected);
}

#[test]
fn test_accumulate_is_additive() {
	let options = ClassificationReportOptions::default();
	let mut batched = ClassificationReport::new(names(&["a", "b", "c"]), options.clone()).unwrap();
	batched.accumulate(&[0, 1], &[0, 2]).unwrap();
	batched.accumulate(&[2, 2, 1], &[2, 1, 1]).unwrap();
	let mut whole = ClassificationReport::new(names(&["a", "b", "c"]), options).unwrap();
	whole.accumulate(&[0, 1, 2, 2, 1], &[0, 2, 2, 1, 1]).unwrap();
	assert_eq!(batched.confusion_matrix(), whole.confusion_matrix());
	assert_eq!(batched.class_counts(), whole.class_counts());
	assert_eq!(batched.report_dict(), whole.report_dict());
	assert_eq!(batched.n_examples(), 5);
}

#[test]
fn test_counts_match_label_occurrences() {
	use rand::{Rng, SeedableRng};
	let mut rng = rand::rngs::StdRng::seed_from_u64(0);
	let n_classes = 5;
	let mut report = ClassificationReport::new(
		(0..n_classes).map(|i| format!("class_{}", i)).collect(),
		ClassificationReportOptions::default(),
	)
	.unwrap();
	let mut n_labeled = vec![0u64; n_classes];
	let mut n_predicted = vec![0u64; n_classes];
	let mut n_examples = 0;
	for _ in 0..10 {
		let batch_size: usize = rng.gen_range(0, 50);
		let labels: Vec<usize> = (0..batch_size).map(|_| rng.gen_range(0, n_classes)).collect();
		let predictions: Vec<usize> =
			(0..batch_size).map(|_| rng.gen_range(0, n_classes)).collect();
		for (&label, &prediction) in labels.iter().zip(predictions.iter()) {
			n_labeled[label] += 1;
			n_predicted[prediction] += 1;
		}
		n_examples += batch_size as u64;
		report.accumulate(&labels, &predictions).unwrap();
		assert_eq!(report.confusion_matrix().sum(), n_examples);
		assert_eq!(report.n_examples(), n_examples);
		for (class_index, counts) in report.class_counts().iter().enumerate() {
			assert_eq!(
				counts.true_positives + counts.false_negatives,
				n_labeled[class_index]
			);
			assert_eq!(
				counts.true_positives + counts.false_positives,
				n_predicted[class_index]
			);
			assert_eq!(report.sample_per_class()[class_index], n_labeled[class_index]);
			assert_eq!(counts.n_examples(), n_examples);
		}
	}
}

#[test]
fn test_report_is_idempotent() {
	let mut report =
		ClassificationReport::new(names(&["a", "b"]), ClassificationReportOptions::default())
			.unwrap();
	report.accumulate(&[0, 1, 1, 0, 1], &[1, 1, 0, 0, 1]).unwrap();
	assert_eq!(report.report_dict(), report.report_dict());
	assert_eq!(report.print_report(), report.print_report());
}

#[test]
fn test_reset() {
	for class_names in [names(&["positive"]), names(&["a", "b", "c"])].iter() {
		let mut report =
			ClassificationReport::new(class_names.clone(), ClassificationReportOptions::default())
				.unwrap();
		report.accumulate(&[0, 1, 1, 0], &[0, 1, 0, 0]).unwrap();
		assert_eq!(report.n_examples(), 4);
		report.reset();
		assert_eq!(report.confusion_matrix().sum(), 0);
		assert!(report
			.class_counts()
			.iter()
			.all(|counts| *counts == ClassCounts::default()));
		let output = report.report_dict();
		assert_eq!(output.total_sample, 0);
		assert_eq!(output.accuracy, 0.0);
		for class_metrics in output.class_metrics.iter() {
			assert_eq!(class_metrics.precision, 0.0);
			assert_eq!(class_metrics.recall, 0.0);
			assert_eq!(class_metrics.f1_score, 0.0);
			assert_eq!(class_metrics.n_sample, 0);
		}
	}
}

#[test]
fn test_empty_report() {
	let report =
		ClassificationReport::new(names(&["a", "b"]), ClassificationReportOptions::default())
			.unwrap();
	let expected = [
		"         precision    recall  f1_score  n_sample",
		"       a     0.000     0.000     0.000         0",
		"       b     0.000     0.000     0.000         0",
		"------------------------------------------------",
		"accuracy     0.000     0.000     0.000         0",
	]
	.join("\n");
	assert_eq!(report.print_report(), expected);
}

#[test]
fn test_length_mismatch_truncates() {
	let mut report =
		ClassificationReport::new(names(&["a", "b"]), ClassificationReportOptions::default())
			.unwrap();
	// The trailing unpaired labels are dropped.
	report.accumulate(&[0, 1, 1, 0, 0], &[0, 1, 0]).unwrap();
	let expected: Array2<u64> = arr2(&[[1, 0], [1, 1]]);
	assert_eq!(report.confusion_matrix(), expected);
	assert_eq!(report.n_examples(), 3);
	report.accumulate(&[1], &[1, 1, 1]).unwrap();
	assert_eq!(report.n_examples(), 4);
}

#[test]
fn test_length_mismatch_error() {
	let options = ClassificationReportOptions {
		length_mismatch: LengthMismatchPolicy::Error,
		..Default::default()
	};
	let mut report = ClassificationReport::new(names(&["a", "b"]), options).unwrap();
	assert_eq!(
		report.accumulate(&[0, 1, 1], &[0, 1]),
		Err(ClassificationReportError::LengthMismatch {
			n_labels: 3,
			n_predictions: 2,
		})
	);
	assert_eq!(report.n_examples(), 0);
}

#[test]
fn test_out_of_range_labels() {
	let mut report =
		ClassificationReport::new(names(&["a", "b", "c"]), ClassificationReportOptions::default())
			.unwrap();
	report.accumulate(&[0, 1], &[0, 1]).unwrap();
	let before = report.report_dict();
	assert_eq!(
		report.accumulate(&[0, 1, 2], &[0, 3, 1]),
		Err(ClassificationReportError::LabelOutOfRange {
			parameter: LabelsParameter::PredictedLabels,
			position: 1,
			label: 3,
			n_classes: 3,
		})
	);
	assert_eq!(
		report.accumulate(&[5, 1], &[0, 1]),
		Err(ClassificationReportError::LabelOutOfRange {
			parameter: LabelsParameter::TrueLabels,
			position: 0,
			label: 5,
			n_classes: 3,
		})
	);
	// Nothing from the rejected calls was counted.
	assert_eq!(report.report_dict(), before);
	assert_eq!(report.n_examples(), 2);
	// In binary mode 0 and 1 are the only valid indexes.
	let mut binary =
		ClassificationReport::new(names(&["positive"]), ClassificationReportOptions::default())
			.unwrap();
	assert!(binary.accumulate(&[0, 1], &[1, 0]).is_ok());
	assert!(binary.accumulate(&[2], &[0]).is_err());
}

#[test]
fn test_long_class_names() {
	let mut report = ClassificationReport::new(
		names(&["short", "a_rather_long_class_name"]),
		ClassificationReportOptions::default(),
	)
	.unwrap();
	report.accumulate(&[0, 1, 1], &[0, 1, 0]).unwrap();
	let printed = report.print_report();
	let lines: Vec<&str> = printed.lines().collect();
	assert_eq!(lines.len(), 5);
	for line in lines.iter() {
		assert_eq!(line.len(), 24 + 40);
	}
	assert!(lines[1].ends_with("         1"));
	assert!(lines[1].starts_with("                   short"));
	assert!(lines[2].starts_with("a_rather_long_class_name"));
	assert!(lines[4].starts_with("                accuracy"));
}

#[test]
fn test_digits() {
	let options = ClassificationReportOptions {
		digits: 1,
		..Default::default()
	};
	let mut report = ClassificationReport::new(names(&["a", "b"]), options).unwrap();
	report.accumulate(&[0, 0, 0, 1], &[0, 0, 1, 1]).unwrap();
	let expected = [
		"         precision    recall  f1_score  n_sample",
		"       a       1.0       0.7       0.8         3",
		"       b       0.5       1.0       0.7         1",
		"------------------------------------------------",
		"accuracy       0.0       0.0       0.8         4",
	]
	.join("\n");
	assert_eq!(report.print_report(), expected);
}

#[test]
fn test_merge() {
	let options = ClassificationReportOptions::default();
	let mut a = ClassificationReport::new(names(&["a", "b"]), options.clone()).unwrap();
	a.accumulate(&[0, 1, 1], &[0, 0, 1]).unwrap();
	let mut b = ClassificationReport::new(names(&["a", "b"]), options.clone()).unwrap();
	b.accumulate(&[1, 0], &[1, 1]).unwrap();
	let mut whole = ClassificationReport::new(names(&["a", "b"]), options.clone()).unwrap();
	whole.accumulate(&[0, 1, 1, 1, 0], &[0, 0, 1, 1, 1]).unwrap();
	a.merge(b).unwrap();
	assert_eq!(a.report_dict(), whole.report_dict());
	assert_eq!(a.class_counts(), whole.class_counts());
	let other = ClassificationReport::new(names(&["a", "c"]), options).unwrap();
	assert_eq!(a.merge(other), Err(ClassificationReportError::ClassSetMismatch));
	assert_eq!(a.n_examples(), 5);
}

#[test]
fn test_serialize() {
	let mut report =
		ClassificationReport::new(names(&["a", "b"]), ClassificationReportOptions::default())
			.unwrap();
	report.accumulate(&[0, 1, 1, 1], &[0, 1, 1, 1]).unwrap();
	let value = serde_json::to_value(report.report_dict()).unwrap();
	let map = value.as_object().unwrap();
	let mut keys: Vec<&str> = map.keys().map(|key| key.as_str()).collect();
	keys.sort_unstable();
	assert_eq!(keys, vec!["a", "accuracy", "b", "total_sample"]);
	assert_eq!(map["a"]["n_sample"], 1);
	assert_eq!(map["b"]["n_sample"], 3);
	assert_eq!(map["accuracy"], 1.0);
	assert_eq!(map["total_sample"], 4);
	let entry = map["b"].as_object().unwrap();
	let mut fields: Vec<&str> = entry.keys().map(|key| key.as_str()).collect();
	fields.sort_unstable();
	assert_eq!(fields, vec!["f1_score", "n_sample", "precision", "recall"]);
}
