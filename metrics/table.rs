/// The width of each numeric column, including its left padding.
const COLUMN_WIDTH: usize = 10;

const HEADER: [&str; 4] = ["precision", "recall", "f1_score", "n_sample"];

/**
A `ReportTable` renders per-class metrics as fixed width text. The name column is right aligned to `name_width` and every other column is right aligned to ten characters. The summary row follows a line of dashes and the output has no trailing newline.
*/
pub struct ReportTable<'a> {
	pub name_width: usize,
	pub digits: usize,
	pub rows: &'a [Row<'a>],
	pub summary: Row<'a>,
}

pub struct Row<'a> {
	pub name: &'a str,
	pub precision: f64,
	pub recall: f64,
	pub f1_score: f64,
	pub n_sample: u64,
}

impl<'a> std::fmt::Display for ReportTable<'a> {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		write!(f, "{:>width$}", "", width = self.name_width)?;
		for column in HEADER.iter() {
			write!(f, "{:>width$}", column, width = COLUMN_WIDTH)?;
		}
		writeln!(f)?;
		for row in self.rows.iter() {
			let row = FormattedRow {
				row,
				name_width: self.name_width,
				digits: self.digits,
			};
			writeln!(f, "{}", row)?;
		}
		let line = Line {
			width: self.name_width + COLUMN_WIDTH * HEADER.len(),
		};
		writeln!(f, "{}", line)?;
		let summary = FormattedRow {
			row: &self.summary,
			name_width: self.name_width,
			digits: self.digits,
		};
		write!(f, "{}", summary)?;
		Ok(())
	}
}

struct Line {
	width: usize,
}

impl std::fmt::Display for Line {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		for _ in 0..self.width {
			write!(f, "-")?;
		}
		Ok(())
	}
}

struct FormattedRow<'a> {
	row: &'a Row<'a>,
	name_width: usize,
	digits: usize,
}

impl<'a> std::fmt::Display for FormattedRow<'a> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{:>width$}", self.row.name, width = self.name_width)?;
		for value in [self.row.precision, self.row.recall, self.row.f1_score].iter() {
			write!(
				f,
				"{:>width$.digits$}",
				value,
				width = COLUMN_WIDTH,
				digits = self.digits
			)?;
		}
		write!(f, "{:>width$}", self.row.n_sample, width = COLUMN_WIDTH)?;
		Ok(())
	}
}

#[test]
fn test_table() {
	let rows = [
		Row {
			name: "cat",
			precision: 0.25,
			recall: 1.0,
			f1_score: 0.4,
			n_sample: 12,
		},
		Row {
			name: "dog",
			precision: 0.0,
			recall: 0.0,
			f1_score: 0.0,
			n_sample: 0,
		},
	];
	let table = ReportTable {
		name_width: 8,
		digits: 2,
		rows: &rows,
		summary: Row {
			name: "accuracy",
			precision: 0.0,
			recall: 0.0,
			f1_score: 0.5,
			n_sample: 12,
		},
	};
	let expected = [
		"         precision    recall  f1_score  n_sample",
		"     cat      0.25      1.00      0.40        12",
		"     dog      0.00      0.00      0.00         0",
		"------------------------------------------------",
		"accuracy      0.00      0.00      0.50        12",
	]
	.join("\n");
	assert_eq!(table.to_string(), expected);
}
