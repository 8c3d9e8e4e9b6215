use thiserror::Error;

/// Identifies which of the two label sequences passed to [`ClassificationReport::accumulate`](struct.ClassificationReport.html#method.accumulate) was invalid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LabelsParameter {
	TrueLabels,
	PredictedLabels,
}

impl std::fmt::Display for LabelsParameter {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			LabelsParameter::TrueLabels => write!(f, "true labels"),
			LabelsParameter::PredictedLabels => write!(f, "predicted labels"),
		}
	}
}

#[derive(Debug, Error, PartialEq)]
pub enum ClassificationReportError {
	#[error("at least one class name is required")]
	EmptyClassSet,
	#[error("{parameter}: label {label} at position {position} is not a class index in 0..{n_classes}")]
	LabelOutOfRange {
		parameter: LabelsParameter,
		position: usize,
		label: usize,
		n_classes: usize,
	},
	#[error("received {n_labels} true labels but {n_predictions} predicted labels")]
	LengthMismatch {
		n_labels: usize,
		n_predictions: usize,
	},
	#[error("cannot merge reports computed over different classes")]
	ClassSetMismatch,
}

#[test]
fn test_error_names_parameter() {
	let error = ClassificationReportError::LabelOutOfRange {
		parameter: LabelsParameter::PredictedLabels,
		position: 3,
		label: 7,
		n_classes: 2,
	};
	assert_eq!(
		error.to_string(),
		"predicted labels: label 7 at position 3 is not a class index in 0..2"
	);
}
