use crate::refs::{ObjectReferences, RefType};
use chrono::{DateTime, Datelike, Local, Offset, TimeZone, Timelike};
use pdf_writer::{Date as PDate, Pdf, TextStr};

/// General document metadata such as title, author, etc
#[derive(Default, Debug, Clone, PartialEq)]
pub struct Info {
    /// The title of the document.
    pub title: Option<String>,
    /// The author(s) of the document. No prescribed format.
    pub author: Option<String>,
    /// The subject of the document.
    pub subject: Option<String>,
}

impl Info {
    /// Create a new info block, with all metadata set to [None]
    pub fn new() -> Info {
        Info::default()
    }

    /// Set the title of the info block, modifying `self`
    pub fn title<S: ToString>(&mut self, title: S) -> &mut Self {
        self.title = Some(title.to_string());
        self
    }

    /// Set the author of the info block, modifying `self`
    pub fn author<S: ToString>(&mut self, author: S) -> &mut Self {
        self.author = Some(author.to_string());
        self
    }

    /// Set the subject of the info block, modifying `self`
    pub fn subject<S: ToString>(&mut self, subject: S) -> &mut Self {
        self.subject = Some(subject.to_string());
        self
    }

    pub(crate) fn write(&self, refs: &mut ObjectReferences, writer: &mut Pdf) {
        let id = refs.gen(RefType::Info);
        let mut info = writer.document_info(id);

        if let Some(title) = &self.title {
            info.title(TextStr(title.as_str()));
        }
        if let Some(author) = &self.author {
            info.author(TextStr(author.as_str()));
        }
        if let Some(subject) = &self.subject {
            info.subject(TextStr(subject.as_str()));
        }
        info.creator(TextStr(concat!(
            env!("CARGO_PKG_NAME"),
            " v",
            env!("CARGO_PKG_VERSION")
        )));
        info.producer(TextStr("pdf-writer"));

        info.creation_date(pdf_date(&Local::now()));
    }
}

/// Convert a timestamp into a PDF date, keeping its UTC offset
fn pdf_date<Tz: TimeZone>(now: &DateTime<Tz>) -> PDate {
    let (offset_hours, offset_minutes) = split_utc_offset(now.offset().fix().local_minus_utc());
    PDate::new(now.year() as u16)
        .month(now.month() as u8)
        .day(now.day() as u8)
        .hour(now.hour() as u8)
        .minute(now.minute() as u8)
        .second(now.second() as u8)
        .utc_offset_hour(offset_hours)
        .utc_offset_minute(offset_minutes)
}

/// Split an offset in seconds into signed hours and unsigned minutes
fn split_utc_offset(seconds: i32) -> (i8, u8) {
    let hours = seconds / (60 * 60);
    let minutes = ((seconds - hours * 60 * 60) / 60).abs();
    (hours as i8, minutes as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_split_into_hours_and_minutes() {
        assert_eq!(split_utc_offset(0), (0, 0));
        assert_eq!(split_utc_offset(5 * 3600 + 45 * 60), (5, 45));
        assert_eq!(split_utc_offset(-(3 * 3600 + 30 * 60)), (-3, 30));
    }

    #[test]
    fn builder_sets_fields() {
        let mut info = Info::new();
        info.title("Notes").author("A. Writer");
        assert_eq!(info.title.as_deref(), Some("Notes"));
        assert_eq!(info.author.as_deref(), Some("A. Writer"));
        assert_eq!(info.subject, None);
    }
}
