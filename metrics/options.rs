/*!
This module defines the options that configure a [`ClassificationReport`](../struct.ClassificationReport.html).
*/

#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
#[serde(default)]
pub struct ClassificationReportOptions {
	/// The number of decimal places used for the float columns of `print_report()`.
	pub digits: usize,
	/// What to do when the true and predicted label sequences differ in length.
	pub length_mismatch: LengthMismatchPolicy,
}

impl Default for ClassificationReportOptions {
	fn default() -> Self {
		Self {
			digits: 3,
			length_mismatch: LengthMismatchPolicy::Truncate,
		}
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Deserialize)]
pub enum LengthMismatchPolicy {
	/// Pair the labels up to the length of the shorter sequence and drop the rest.
	#[serde(rename = "truncate")]
	Truncate,
	/// Reject the call without accumulating anything.
	#[serde(rename = "error")]
	Error,
}

#[test]
fn test_deserialize_defaults() {
	let options: ClassificationReportOptions = serde_json::from_str("{}").unwrap();
	assert_eq!(options, ClassificationReportOptions::default());
	let options: ClassificationReportOptions =
		serde_json::from_str(r#"{ "digits": 2, "length_mismatch": "error" }"#).unwrap();
	assert_eq!(options.digits, 2);
	assert_eq!(options.length_mismatch, LengthMismatchPolicy::Error);
}
