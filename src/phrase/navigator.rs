use crate::content::Phrase;
use crate::error::CoreError;
use chrono::{Datelike, NaiveDate};

/// Index of the displayed phrase. Only valid against a non-empty list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PhraseCursor(usize);

impl PhraseCursor {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0
    }

    pub fn next(self, len: usize) -> Result<Self, CoreError> {
        advance(self.0, len, 1).map(Self)
    }

    pub fn prev(self, len: usize) -> Result<Self, CoreError> {
        advance(self.0, len, -1).map(Self)
    }
}

/// Step `delta` places through a list of `length` items, wrapping at both
/// ends.
pub fn advance(index: usize, length: usize, delta: i64) -> Result<usize, CoreError> {
    if length == 0 {
        return Err(CoreError::EmptyCollection("phrase"));
    }
    let len = length as i64;
    let index = (index % length) as i64;
    Ok((index + delta.rem_euclid(len)).rem_euclid(len) as usize)
}

pub fn current(phrases: &[Phrase], cursor: PhraseCursor) -> Result<&Phrase, CoreError> {
    if phrases.is_empty() {
        return Err(CoreError::EmptyCollection("phrase"));
    }
    Ok(&phrases[cursor.index() % phrases.len()])
}

/// Rotating start index: the zero-based day of the year modulo the list
/// length.
pub fn phrase_of_the_day(date: NaiveDate, length: usize) -> Result<usize, CoreError> {
    advance(0, length, i64::from(date.ordinal0()))
}
