//! Typed records for dumpsys snapshots
//!
//! A dump pass owns a `DumpBuffer` and passes it to each module's dump
//! routine. A routine interns the strings it needs, appends named fields
//! through a `RecordBuilder`, and finishes the record back into the buffer.
//! Finishing consumes the builder, so a finished record can never grow.

use std::collections::HashMap;
use std::fmt::Write;

/// Handle to a string interned in a `DumpBuffer`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StringOffset(usize);

/// Handle to a record finished into a `DumpBuffer`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RecordOffset(usize);

/// One typed field value
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldValue {
    /// An interned string
    Str(StringOffset),
    /// A boolean
    Bool(bool),
    /// A 32-bit signed integer
    I32(i32),
}

/// A named, typed field of a record
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Field {
    name: &'static str,
    value: FieldValue,
}

impl Field {
    /// The field name, as fixed by the dump schema
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The field value
    pub fn value(&self) -> &FieldValue {
        &self.value
    }
}

/// An ordered, named collection of typed fields, immutable once finished
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Record {
    name: &'static str,
    fields: Vec<Field>,
}

impl Record {
    /// The schema name of this record
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The fields, in append order
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Looks up a field value by name
    pub fn field(&self, name: &str) -> Option<&FieldValue> {
        self.fields.iter().find(|field| field.name == name).map(|field| &field.value)
    }
}

/// Caller-owned buffer that dump records are built into
#[derive(Default)]
pub struct DumpBuffer {
    strings: Vec<String>,
    interned: HashMap<String, usize>,
    records: Vec<Record>,
}

impl DumpBuffer {
    /// Creates an empty buffer
    pub fn new() -> Self {
        Default::default()
    }

    /// Interns a string and returns its handle
    ///
    /// Repeats intern to the same handle, so records built from unchanged
    /// values compare field-for-field equal across dump passes.
    pub fn intern(&mut self, value: &str) -> StringOffset {
        if let Some(&index) = self.interned.get(value) {
            return StringOffset(index);
        }
        let index = self.strings.len();
        self.strings.push(value.to_string());
        self.interned.insert(value.to_string(), index);
        StringOffset(index)
    }

    /// Resolves an interned string
    pub fn string(&self, offset: StringOffset) -> &str {
        &self.strings[offset.0]
    }

    /// Borrows a finished record
    pub fn record(&self, offset: RecordOffset) -> &Record {
        &self.records[offset.0]
    }

    /// Renders a finished record in dumpsys text form
    pub fn render(&self, offset: RecordOffset) -> String {
        let mut out = String::new();
        for field in self.record(offset).fields() {
            match field.value {
                // Title fields render as a bare banner line in the report
                FieldValue::Str(value) if field.name == "title" => {
                    writeln!(out, "{}", self.string(value)).unwrap()
                }
                FieldValue::Str(value) => {
                    writeln!(out, "{}: {}", field.name, self.string(value)).unwrap()
                }
                FieldValue::Bool(value) => writeln!(out, "{}: {}", field.name, value).unwrap(),
                FieldValue::I32(value) => writeln!(out, "{}: {}", field.name, value).unwrap(),
            }
        }
        out
    }

    fn push(&mut self, record: Record) -> RecordOffset {
        let index = self.records.len();
        self.records.push(record);
        RecordOffset(index)
    }
}

/// Accumulates named, typed fields for one record
///
/// Strings must be interned before the builder is created; the builder
/// borrows the buffer exclusively until it is finished.
pub struct RecordBuilder<'a> {
    buffer: &'a mut DumpBuffer,
    record: Record,
}

impl<'a> RecordBuilder<'a> {
    /// Starts a record with the given schema name
    pub fn new(buffer: &'a mut DumpBuffer, name: &'static str) -> Self {
        Self { buffer, record: Record { name, fields: Vec::new() } }
    }

    /// Appends an interned string field
    pub fn add_string(&mut self, name: &'static str, value: StringOffset) {
        self.record.fields.push(Field { name, value: FieldValue::Str(value) });
    }

    /// Appends a boolean field
    pub fn add_bool(&mut self, name: &'static str, value: bool) {
        self.record.fields.push(Field { name, value: FieldValue::Bool(value) });
    }

    /// Appends a 32-bit integer field
    pub fn add_i32(&mut self, name: &'static str, value: i32) {
        self.record.fields.push(Field { name, value: FieldValue::I32(value) });
    }

    /// Finishes the record into the buffer and returns its handle
    pub fn finish(self) -> RecordOffset {
        self.buffer.push(self.record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intern_dedups_strings() {
        let mut buffer = DumpBuffer::new();
        let first = buffer.intern("----- Title -----");
        let other = buffer.intern("other");
        let repeat = buffer.intern("----- Title -----");
        assert_eq!(first, repeat);
        assert_ne!(first, other);
        assert_eq!(buffer.string(first), "----- Title -----");
        assert_eq!(buffer.string(other), "other");
    }

    #[test]
    fn builder_keeps_append_order() {
        let mut buffer = DumpBuffer::new();
        let name = buffer.intern("example");
        let mut builder = RecordBuilder::new(&mut buffer, "TestData");
        builder.add_string("title", name);
        builder.add_bool("enabled", true);
        builder.add_i32("count", -4);
        let offset = builder.finish();

        let record = buffer.record(offset);
        assert_eq!(record.name(), "TestData");
        let names: Vec<&str> = record.fields().iter().map(|field| field.name()).collect();
        assert_eq!(names, ["title", "enabled", "count"]);
        assert_eq!(record.field("enabled"), Some(&FieldValue::Bool(true)));
        assert_eq!(record.field("count"), Some(&FieldValue::I32(-4)));
        assert_eq!(record.field("missing"), None);
    }

    #[test]
    fn records_with_equal_fields_compare_equal() {
        let mut buffer = DumpBuffer::new();
        let greeting = buffer.intern("hello");
        let mut builder = RecordBuilder::new(&mut buffer, "TestData");
        builder.add_string("title", greeting);
        builder.add_bool("enabled", false);
        let first = builder.finish();

        let greeting = buffer.intern("hello");
        let mut builder = RecordBuilder::new(&mut buffer, "TestData");
        builder.add_string("title", greeting);
        builder.add_bool("enabled", false);
        let second = builder.finish();

        assert_ne!(first, second);
        assert_eq!(buffer.record(first), buffer.record(second));
    }

    #[test]
    fn render_lists_fields_line_by_line() {
        let mut buffer = DumpBuffer::new();
        let title = buffer.intern("----- Example -----");
        let mode = buffer.intern("verbose");
        let mut builder = RecordBuilder::new(&mut buffer, "TestData");
        builder.add_string("title", title);
        builder.add_string("mode", mode);
        builder.add_bool("enabled", false);
        builder.add_i32("count", 12);
        let offset = builder.finish();

        assert_eq!(
            buffer.render(offset),
            "----- Example -----\nmode: verbose\nenabled: false\ncount: 12\n"
        );
    }

    #[test]
    fn empty_record_renders_nothing() {
        let mut buffer = DumpBuffer::new();
        let offset = RecordBuilder::new(&mut buffer, "TestData").finish();
        assert!(buffer.record(offset).fields().is_empty());
        assert_eq!(buffer.render(offset), "");
    }
}
