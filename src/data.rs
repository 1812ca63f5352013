use itertools::Itertools;
use lazy_regex::regex;

/// A fixed-column row of an extracted table.
pub trait Record {
    const COLUMNS: &'static [&'static str];

    fn values(&self) -> Vec<String>;
}

/// Collapses every whitespace run (tabs and line breaks included) to one space.
pub fn tsv_field(value: &str) -> String {
    regex!(r"\s+").replace_all(value.trim(), " ").into_owned()
}

/// Header line plus one tab separated line per record.
pub fn to_tsv<R: Record>(records: &[R]) -> String {
    let mut out = R::COLUMNS.iter().join("\t");
    out.push('\n');
    for record in records {
        out.push_str(&record.values().iter().map(|v| tsv_field(v)).join("\t"));
        out.push('\n');
    }
    out
}
