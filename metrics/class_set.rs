use crate::ClassificationReportError;
use fnv::FnvHashMap;

/**
A `ClassSet` is the ordered list of class names a report is computed over, together with a lookup table from name to index. Both are fixed once the set is constructed.

A set with a single name puts the report in binary mode. The confusion matrix is then 2x2, index 0 is the named positive class and index 1 is the implicit negative class.
*/
#[derive(Clone, Debug)]
pub struct ClassSet {
	names: Vec<String>,
	indexes: FnvHashMap<String, usize>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClassSetMode {
	Binary,
	Multiclass,
}

impl ClassSet {
	pub fn new(names: Vec<String>) -> Result<Self, ClassificationReportError> {
		if names.is_empty() {
			return Err(ClassificationReportError::EmptyClassSet);
		}
		let mut indexes = FnvHashMap::default();
		for (index, name) in names.iter().enumerate() {
			// Names are not required to be unique. The first occurrence wins.
			indexes.entry(name.clone()).or_insert(index);
		}
		Ok(Self { names, indexes })
	}

	pub fn names(&self) -> &[String] {
		&self.names
	}

	/// The number of configured class names.
	pub fn len(&self) -> usize {
		self.names.len()
	}

	pub fn is_empty(&self) -> bool {
		self.names.is_empty()
	}

	pub fn mode(&self) -> ClassSetMode {
		if self.names.len() == 1 {
			ClassSetMode::Binary
		} else {
			ClassSetMode::Multiclass
		}
	}

	pub fn is_binary(&self) -> bool {
		self.mode() == ClassSetMode::Binary
	}

	/// The number of rows and columns in the confusion matrix, which is also the exclusive upper bound on valid label indexes.
	pub fn matrix_size(&self) -> usize {
		match self.mode() {
			ClassSetMode::Binary => 2,
			ClassSetMode::Multiclass => self.names.len(),
		}
	}

	pub fn index_of(&self, name: &str) -> Option<usize> {
		self.indexes.get(name).copied()
	}

	/// The width of the name column in a printed report.
	pub fn name_column_width(&self) -> usize {
		self.names
			.iter()
			.map(|name| name.chars().count())
			.chain(std::iter::once("accuracy".len()))
			.max()
			.unwrap_or(0)
	}
}

impl PartialEq for ClassSet {
	fn eq(&self, other: &Self) -> bool {
		self.names == other.names
	}
}

#[test]
fn test_empty() {
	assert_eq!(
		ClassSet::new(Vec::new()).unwrap_err(),
		ClassificationReportError::EmptyClassSet
	);
}

#[test]
fn test_modes() {
	let binary = ClassSet::new(vec!["positive".to_owned()]).unwrap();
	assert_eq!(binary.mode(), ClassSetMode::Binary);
	assert_eq!(binary.matrix_size(), 2);
	let multiclass =
		ClassSet::new(vec!["a".to_owned(), "b".to_owned(), "c".to_owned()]).unwrap();
	assert_eq!(multiclass.mode(), ClassSetMode::Multiclass);
	assert_eq!(multiclass.matrix_size(), 3);
}

#[test]
fn test_index_of_duplicates() {
	let class_set =
		ClassSet::new(vec!["a".to_owned(), "b".to_owned(), "a".to_owned()]).unwrap();
	assert_eq!(class_set.index_of("a"), Some(0));
	assert_eq!(class_set.index_of("b"), Some(1));
	assert_eq!(class_set.index_of("z"), None);
}

#[test]
fn test_name_column_width() {
	let class_set = ClassSet::new(vec!["a".to_owned(), "b".to_owned()]).unwrap();
	assert_eq!(class_set.name_column_width(), 8);
	let class_set =
		ClassSet::new(vec!["a".to_owned(), "a_very_long_class_name".to_owned()]).unwrap();
	assert_eq!(class_set.name_column_width(), 22);
}
