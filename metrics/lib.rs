/*!
This crate computes per-class precision, recall and f1 score along with the overall accuracy of a classifier from pairs of true and predicted class indexes. The central type is [`ClassificationReport`](struct.ClassificationReport.html), which accumulates a confusion matrix across any number of calls to `accumulate()` and renders the result either as a [`ClassificationReportOutput`](struct.ClassificationReportOutput.html) or as a fixed width text table.

# Examples

```
use clreport_metrics::{ClassificationReport, ClassificationReportOptions};

let mut report = ClassificationReport::new(
	vec!["cat".to_owned(), "dog".to_owned(), "rabbit".to_owned()],
	ClassificationReportOptions::default(),
)
.unwrap();
report.accumulate(&[0, 1, 2, 0], &[0, 1, 1, 0]).unwrap();
let output = report.report_dict();
assert_eq!(output.total_sample, 4);
assert!((output.accuracy - 0.75).abs() < 1e-9);
println!("{}", report.print_report());
```
*/

#![allow(clippy::tabs_in_doc_comments)]

mod class_counts;
mod class_set;
mod classification_report;
mod confusion_matrix;
mod error;
mod options;
mod table;

pub use self::class_counts::ClassCounts;
pub use self::class_set::{ClassSet, ClassSetMode};
pub use self::classification_report::{
	ClassReportMetrics, ClassificationReport, ClassificationReportInput,
	ClassificationReportOutput,
};
pub use self::confusion_matrix::ConfusionMatrix;
pub use self::error::{ClassificationReportError, LabelsParameter};
pub use self::options::{ClassificationReportOptions, LengthMismatchPolicy};

/// `EPSILON` is added to the denominators of the derived ratios so that a class with no true or predicted examples produces zero instead of `NaN`. The metrics are therefore very slightly biased toward zero compared to their exact values.
pub const EPSILON: f64 = 1e-9;

/**
The `StreamingMetric` trait defines a common interface to metrics that can be computed in a streaming manner, where the input is available in chunks.

After being initialized, a value of type `T` implementing the `StreamingMetric` trait can have `update()` called on it with values of the associated type `Input`. Multiple values of `T` can be merged together by calling `merge()`. This is useful when the input is split across shards that are aggregated independently. When finished aggregating, you can call `finalize()` on the metric to produce the associated type `Output`.

# Examples

Here is a basic example implementation of a `Count` metric, which counts the label/prediction pairs where the prediction was correct.

```
use clreport_metrics::StreamingMetric;

struct Count(u64);

impl StreamingMetric<'_> for Count {
	type Input = (usize, usize);
	type Output = u64;
	fn update(&mut self, input: Self::Input) {
		if input.0 == input.1 {
			self.0 += 1
		}
	}
	fn merge(&mut self, other: Self) { self.0 += other.0 }
	fn finalize(self) -> Self::Output { self.0 }
}
```

The seemingly unused generic lifetime `'a` exists here to allow `Input`s and `Output`s to borrow from their enclosing scope.
*/
pub trait StreamingMetric<'a> {
	/// `Input` is the type to aggregate in calls to `update()`.
	type Input;
	/// `Output` is the return type of `finalize()`.
	type Output;
	/// Update this streaming metric with the `Input` `input`.
	fn update(&mut self, input: Self::Input);
	/// Merge multiple independently computed streaming metrics.
	fn merge(&mut self, other: Self);
	/// When you are done aggregating `Input`s, call `finalize()` to produce an `Output`.
	fn finalize(self) -> Self::Output;
}
