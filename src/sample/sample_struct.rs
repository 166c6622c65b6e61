use std::path::Path;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};

use polars::prelude::{DataFrame, DataType};

use crate::error::{Error, Result};
use super::instance::{Instance, Example};
use super::domain::Domain;


/// Struct `Sample` holds the labeled training examples
/// together with their global attribute [`Domain`].
///
/// Every example carries a value for every domain attribute,
/// and every value belongs to the domain.
/// The constructors check this, and the tree grower relies on it.
#[derive(Debug, Clone)]
pub struct Sample {
    pub(super) examples: Vec<Example>,
    pub(super) domain: Domain,
}


impl Sample {
    /// Construct a [`Sample`] from `examples`.
    /// The domain is enumerated from `examples` in first-seen order.
    pub fn from_examples(examples: Vec<Example>) -> Result<Self> {
        let domain = Domain::from_examples(&examples);
        Self::with_domain(examples, domain)
    }


    /// Construct a [`Sample`] from `examples` and a caller-built `domain`.
    /// The domain may list values that no example takes.
    pub fn with_domain(examples: Vec<Example>, domain: Domain)
        -> Result<Self>
    {
        for example in examples.iter() {
            check_instance(example.instance(), &domain)?;
        }
        Ok(Self { examples, domain })
    }


    /// Read a CSV format file to [`Sample`] type.
    /// The column named `target` holds the labels.
    pub(crate) fn from_csv<P>(file: P, has_header: bool, target: &str)
        -> Result<Self>
        where P: AsRef<Path>,
    {
        let file = File::open(file)?;
        let reader = BufReader::new(file);
        Self::from_reader(reader, has_header, target)
    }


    /// Read a CSV from [`BufReader`].
    ///
    /// If the CSV has no header row,
    /// each column gets a default name:
    /// `Feat. [1]`, `Feat. [2]`, ..., `Feat. [n]`.
    /// Blank lines are skipped.
    pub fn from_reader<R>(
        reader: BufReader<R>,
        has_header: bool,
        target: &str,
    ) -> Result<Self>
        where R: Read,
    {
        let mut lines = reader.lines().enumerate();

        let mut header: Option<Vec<String>> = None;
        if has_header {
            if let Some((_, line)) = lines.next() {
                let names = line?.split(',')
                    .map(|name| name.trim().to_string())
                    .collect::<Vec<_>>();
                header = Some(names);
            }
        }

        let mut examples = Vec::new();
        let mut target_pos = None;
        for (i, line) in lines {
            let line = line?;
            if line.trim().is_empty() { continue; }

            let fields = line.split(',')
                .map(str::trim)
                .collect::<Vec<_>>();

            // If the header does not exist,
            // construct a dummy header.
            let names = header.get_or_insert_with(|| {
                (1..=fields.len())
                    .map(|k| format!("Feat. [{k}]"))
                    .collect()
            });

            if fields.len() != names.len() {
                return Err(Error::MalformedRow {
                    line: i + 1,
                    expected: names.len(),
                    found: fields.len(),
                });
            }

            let pos = match target_pos {
                Some(pos) => pos,
                None => {
                    let pos = names.iter()
                        .position(|name| name == target)
                        .ok_or_else(|| Error::MissingTarget(target.into()))?;
                    target_pos = Some(pos);
                    pos
                },
            };

            let label = parse_label(fields[pos])
                .ok_or_else(|| Error::InvalidLabel {
                    line: i + 1,
                    value: fields[pos].to_string(),
                })?;
            let instance = names.iter()
                .zip(fields)
                .enumerate()
                .filter(|&(k, _)| k != pos)
                .map(|(_, (name, value))| (name.as_str(), value))
                .collect::<Instance>();
            examples.push(Example::new(instance, label));
        }

        // A header-only file still needs a target column.
        if let Some(names) = header.as_ref() {
            if !names.iter().any(|name| name == target) {
                return Err(Error::MissingTarget(target.into()));
            }
        }

        Self::from_examples(examples)
    }


    /// Convert a `polars::DataFrame` into [`Sample`].
    /// Every column other than `target` is read as a categorical attribute
    /// (cast to strings), and `target` is read as boolean labels.
    pub fn from_dataframe(data: &DataFrame, target: &str) -> Result<Self> {
        let labels = data.column(target)
            .map_err(|_| Error::MissingTarget(target.into()))?
            .cast(&DataType::Utf8)?;
        let labels = labels.utf8()?
            .into_iter()
            .enumerate()
            .map(|(row, label)| {
                let label = label.ok_or_else(|| Error::NullValue {
                    column: target.into(),
                    row,
                })?;
                parse_label(label).ok_or_else(|| Error::InvalidLabel {
                    line: row + 1,
                    value: label.to_string(),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let mut instances = vec![Instance::new(); data.height()];
        for series in data.get_columns() {
            let name = series.name();
            if name == target { continue; }

            let values = series.cast(&DataType::Utf8)?;
            let values = values.utf8()?;
            for (row, value) in values.into_iter().enumerate() {
                let value = value.ok_or_else(|| Error::NullValue {
                    column: name.to_string(),
                    row,
                })?;
                instances[row].insert(name, value);
            }
        }

        let examples = instances.into_iter()
            .zip(labels)
            .map(|(instance, label)| Example::new(instance, label))
            .collect::<Vec<_>>();
        Self::from_examples(examples)
    }


    /// Returns the examples.
    #[inline]
    pub fn examples(&self) -> &[Example] {
        &self.examples[..]
    }


    /// Returns the global attribute domain.
    #[inline]
    pub fn domain(&self) -> &Domain {
        &self.domain
    }


    /// Returns the labels in example order.
    pub fn labels(&self) -> Vec<bool> {
        self.examples.iter()
            .map(Example::label)
            .collect()
    }


    /// Number of examples.
    pub fn len(&self) -> usize {
        self.examples.len()
    }


    /// Returns `true` if the sample has no example.
    pub fn is_empty(&self) -> bool {
        self.examples.is_empty()
    }
}


/// Check that `instance` assigns a legal value to every domain attribute.
fn check_instance(instance: &Instance, domain: &Domain) -> Result<()> {
    for attribute in domain.attributes() {
        let name = attribute.name();
        let value = instance.get(name)
            .ok_or_else(|| Error::MissingAttribute { attribute: name.into() })?;
        if !attribute.values().iter().any(|v| v == value) {
            return Err(Error::UnknownValue {
                attribute: name.into(),
                value: value.into(),
            });
        }
    }
    Ok(())
}


/// Read a boolean label.
/// Accepts `true/false`, `yes/no`, `1/0`, and `+1/-1` (case-insensitive).
pub(crate) fn parse_label(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "1" | "+1" | "1.0" | "+1.0" => Some(true),
        "false" | "no" | "0" | "-1" | "0.0" | "-1.0" => Some(false),
        _ => None,
    }
}
