//! Description sink
//!
//! Append-only text buffer shared by `describe_to` and
//! `describe_mismatch`. Lives for one evaluation, then gets reported.

use std::fmt;

use dom::ElementView;

use crate::matcher::SelfDescribing;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Description {
    buffer: String,
}

impl Description {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text of `describe_to` for anything self-describing
    pub fn of<D: SelfDescribing + ?Sized>(value: &D) -> String {
        let mut description = Self::new();
        description.append_description_of(value);
        description.into_string()
    }

    pub fn append_text(&mut self, text: &str) -> &mut Self {
        self.buffer.push_str(text);
        self
    }

    /// Append a literal value; strings come out quoted and escaped
    pub fn append_value<V: fmt::Debug + ?Sized>(&mut self, value: &V) -> &mut Self {
        self.buffer.push_str(&format!("{value:?}"));
        self
    }

    pub fn append_description_of<D: SelfDescribing + ?Sized>(&mut self, value: &D) -> &mut Self {
        value.describe_to(self);
        self
    }

    pub fn append_list<'a, I, D>(
        &mut self,
        start: &str,
        separator: &str,
        end: &str,
        values: I,
    ) -> &mut Self
    where
        I: IntoIterator<Item = &'a D>,
        D: SelfDescribing + ?Sized + 'a,
    {
        self.append_text(start);
        for (index, value) in values.into_iter().enumerate() {
            if index > 0 {
                self.append_text(separator);
            }
            self.append_description_of(value);
        }
        self.append_text(end)
    }

    pub fn append_element<E: ElementView>(&mut self, element: &E) -> &mut Self {
        self.append_text(&element.describe())
    }

    pub fn append_elements<E: ElementView>(
        &mut self,
        start: &str,
        separator: &str,
        end: &str,
        elements: &[E],
    ) -> &mut Self {
        self.append_text(start);
        for (index, element) in elements.iter().enumerate() {
            if index > 0 {
                self.append_text(separator);
            }
            self.append_element(element);
        }
        self.append_text(end)
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn into_string(self) -> String {
        self.buffer
    }
}

impl fmt::Display for Description {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.buffer)
    }
}
