//! Document metadata checks
//!
//! Who made the file and when. Useful for catching submissions copied
//! from a classmate: same creator, suspicious timestamps.

use std::str::FromStr;

use chrono::{DateTime, NaiveDateTime};
use chrono_tz::Tz;
use log::trace;
use marksheet_core::Document;

use crate::error::{Error, Result};

/// Get the document's creator and last-modifier, as recorded in its
/// properties. Either may be absent.
pub fn creator_and_last_modifier(doc: &Document) -> (Option<&str>, Option<&str>) {
    let props = doc.properties();
    (
        props.creator.as_deref(),
        props.last_modified_by.as_deref(),
    )
}

/// Get the document's created and modified timestamps, converted to the
/// given IANA timezone.
///
/// Spreadsheet containers store these naive; by file-format convention
/// they are UTC, so each is reinterpreted as UTC and then converted.
/// Absent timestamps stay `None`. An unrecognized timezone id fails with
/// [`Error::UnknownTimezone`].
///
/// ```
/// use chrono::NaiveDate;
/// use marksheet::metadata::created_and_modified;
/// use marksheet_core::Document;
///
/// let mut doc = Document::new();
/// doc.properties_mut().created =
///     NaiveDate::from_ymd_opt(2023, 4, 1).unwrap().and_hms_opt(0, 0, 0);
///
/// let (created, modified) = created_and_modified(&doc, "Asia/Tokyo").unwrap();
/// assert_eq!(created.unwrap().to_rfc3339(), "2023-04-01T09:00:00+09:00");
/// assert!(modified.is_none());
/// ```
#[allow(clippy::type_complexity)]
pub fn created_and_modified(
    doc: &Document,
    tz_id: &str,
) -> Result<(Option<DateTime<Tz>>, Option<DateTime<Tz>>)> {
    let tz = Tz::from_str(tz_id).map_err(|_| Error::UnknownTimezone(tz_id.to_string()))?;
    let props = doc.properties();
    trace!(
        "created_and_modified: created={:?} modified={:?} tz={}",
        props.created,
        props.modified,
        tz
    );
    Ok((
        props.created.map(|t| utc_naive_in(t, tz)),
        props.modified.map(|t| utc_naive_in(t, tz)),
    ))
}

fn utc_naive_in(naive: NaiveDateTime, tz: Tz) -> DateTime<Tz> {
    naive.and_utc().with_timezone(&tz)
}
