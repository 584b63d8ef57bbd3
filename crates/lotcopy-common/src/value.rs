use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Timelike};
use std::fmt::{self, Display};

/* ───────────────────── Excel date-serial utilities ───────────────────
Workbooks store dates as fractional day counts in the 1900 system:
  Serial 1  = 1900-01-01
  Serial 60 = 1900-02-29  (does not exist, kept for Lotus compatibility)
  Serial 61 = 1900-03-01
Fractional part is the time of day. No timezone.
------------------------------------------------------------------- */

const EXCEL_EPOCH: NaiveDate = NaiveDate::from_ymd_opt(1899, 12, 31).unwrap();
const PHANTOM_LEAP_DAY: i64 = 60;
const SECONDS_PER_DAY: f64 = 86_400.0;

pub fn datetime_to_serial(dt: &NaiveDateTime) -> f64 {
    let mut days = (dt.date() - EXCEL_EPOCH).num_days();
    if days >= PHANTOM_LEAP_DAY {
        days += 1;
    }
    days as f64 + dt.time().num_seconds_from_midnight() as f64 / SECONDS_PER_DAY
}

/// `None` when the serial is not finite or lands outside chrono's date range.
pub fn serial_to_datetime(serial: f64) -> Option<NaiveDateTime> {
    if !serial.is_finite() {
        return None;
    }
    let days = serial.trunc() as i64;
    let secs = (serial.fract() * SECONDS_PER_DAY).round() as i64;

    let offset = match days {
        // 1900-02-29 collapses onto the 28th
        PHANTOM_LEAP_DAY => PHANTOM_LEAP_DAY - 1,
        d if d < PHANTOM_LEAP_DAY => d,
        d => d - 1,
    };
    let date = EXCEL_EPOCH.checked_add_signed(TimeDelta::try_days(offset)?)?;
    let time = NaiveTime::from_num_seconds_from_midnight_opt(secs.rem_euclid(86_400) as u32, 0)
        .unwrap_or(NaiveTime::MIN);
    Some(date.and_time(time))
}

/// A scalar read from, or written to, a single worksheet cell.
///
/// Formula cells are always represented by their last computed value.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    #[default]
    Empty,
    Int(i64),
    Number(f64),
    Text(String),
    Boolean(bool),
    Date(NaiveDate),
    DateTime(NaiveDateTime),
    Time(NaiveTime),
    /// Error code such as `#N/A`, kept verbatim.
    Error(String),
}

impl Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Int(i) => write!(f, "{i}"),
            CellValue::Number(n) => write!(f, "{n}"),
            CellValue::Text(s) => f.write_str(s),
            CellValue::Boolean(b) => write!(f, "{b}"),
            CellValue::Date(d) => write!(f, "{d}"),
            CellValue::DateTime(dt) => write!(f, "{dt}"),
            CellValue::Time(t) => write!(f, "{t}"),
            CellValue::Error(code) => f.write_str(code),
        }
    }
}

impl CellValue {
    /// True when the cell is absent or its string form is only whitespace.
    pub fn is_blank(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(s) => s.trim().is_empty(),
            _ => false,
        }
    }

    /// String form with surrounding whitespace removed; what token matching runs against.
    pub fn trimmed_text(&self) -> String {
        match self {
            CellValue::Text(s) => s.trim().to_string(),
            other => other.to_string().trim().to_string(),
        }
    }

    pub fn as_serial_number(&self) -> Option<f64> {
        match self {
            CellValue::Date(d) => Some(datetime_to_serial(&d.and_time(NaiveTime::MIN))),
            CellValue::DateTime(dt) => Some(datetime_to_serial(dt)),
            CellValue::Time(t) => Some(t.num_seconds_from_midnight() as f64 / SECONDS_PER_DAY),
            CellValue::Int(i) => Some(*i as f64),
            CellValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Date when the serial has no time component, date-time otherwise.
    ///
    /// A serial with no calendar date (Excel shows `####`) stays a plain number.
    pub fn from_serial_number(serial: f64) -> Self {
        let Some(dt) = serial_to_datetime(serial) else {
            return CellValue::Number(serial);
        };
        if dt.time() == NaiveTime::MIN {
            CellValue::Date(dt.date())
        } else {
            CellValue::DateTime(dt)
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

impl From<i64> for CellValue {
    fn from(i: i64) -> Self {
        CellValue::Int(i)
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        CellValue::Boolean(b)
    }
}

impl From<NaiveDate> for CellValue {
    fn from(d: NaiveDate) -> Self {
        CellValue::Date(d)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or_default()
    }
}
