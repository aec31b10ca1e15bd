//! Temporal coverage and date parsing.

use chrono::NaiveDate;
use oxrdf::{NamedNode, NamedNodeRef};

use super::error::{DcatError, Result};
use super::rdf::GraphBuilder;
use super::resource::{Identity, Resource};
use super::vocab::{dcat, dct};

/// Date format accepted for every date-valued property.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a `YYYY-MM-DD` date.
///
/// # Errors
///
/// Returns `DcatError::InvalidDate` if `value` is not a valid calendar date in
/// that form.
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|e| DcatError::InvalidDate {
        value: value.to_string(),
        reason: e.to_string(),
    })
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Bounds {
    /// Separately assigned start and end dates.
    Dates {
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    },
    /// An ISO 8601 interval such as `2019-01-01/..`.
    Interval {
        literal: String,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    },
}

/// A `dct:PeriodOfTime`.
///
/// Either explicit start/end dates or one interval string may be used, not
/// both. Open-ended periods are allowed in both forms.
///
/// # Example
///
/// ```ignore
/// let mut period = PeriodOfTime::new();
/// period.set_start_date("2019-12-31")?;
/// period.set_end_date("2020-12-31")?;
/// assert!(period.set_interval("2019-12-31/2020-12-31").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct PeriodOfTime {
    pub identity: Identity,
    bounds: Option<Bounds>,
}

impl PeriodOfTime {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_identifier(identifier: &str) -> Result<Self> {
        Ok(Self {
            identity: Identity::parse(identifier)?,
            ..Default::default()
        })
    }

    pub fn start_date(&self) -> Option<NaiveDate> {
        match &self.bounds {
            Some(Bounds::Dates { start, .. }) | Some(Bounds::Interval { start, .. }) => *start,
            None => None,
        }
    }

    pub fn end_date(&self) -> Option<NaiveDate> {
        match &self.bounds {
            Some(Bounds::Dates { end, .. }) | Some(Bounds::Interval { end, .. }) => *end,
            None => None,
        }
    }

    /// The interval string, if the period was given as one.
    pub fn interval(&self) -> Option<&str> {
        match &self.bounds {
            Some(Bounds::Interval { literal, .. }) => Some(literal),
            _ => None,
        }
    }

    /// Sets the start date.
    ///
    /// # Errors
    ///
    /// `ConflictingTemporalRepresentation` if an interval is set,
    /// `InvalidDate` for a malformed date and `InvalidDateInterval` if the
    /// date lies after the end date.
    pub fn set_start_date(&mut self, value: &str) -> Result<()> {
        let end = self.explicit_end()?;
        let start = parse_date(value)?;
        check_order(Some(start), end)?;
        self.bounds = Some(Bounds::Dates { start: Some(start), end });
        Ok(())
    }

    /// Sets the end date. Fails like [`set_start_date`](Self::set_start_date).
    pub fn set_end_date(&mut self, value: &str) -> Result<()> {
        let start = self.explicit_start()?;
        let end = parse_date(value)?;
        check_order(start, Some(end))?;
        self.bounds = Some(Bounds::Dates { start, end: Some(end) });
        Ok(())
    }

    /// Sets the period from an ISO 8601 `start/end` interval of dates.
    ///
    /// Either side may be `..` for an open end, but not both.
    ///
    /// # Errors
    ///
    /// `ConflictingTemporalRepresentation` if start or end dates are set,
    /// `InvalidDate` for a malformed interval and `InvalidDateInterval` if the
    /// start lies after the end.
    pub fn set_interval(&mut self, value: &str) -> Result<()> {
        if matches!(self.bounds, Some(Bounds::Dates { .. })) {
            return Err(DcatError::ConflictingTemporalRepresentation(
                "start/end dates are already set; clear them before setting an interval"
                    .to_string(),
            ));
        }

        let (start, end) = value.split_once('/').ok_or_else(|| DcatError::InvalidDate {
            value: value.to_string(),
            reason: "interval must have the form start/end".to_string(),
        })?;
        let start = parse_bound(start)?;
        let end = parse_bound(end)?;
        if start.is_none() && end.is_none() {
            return Err(DcatError::InvalidDate {
                value: value.to_string(),
                reason: "interval is open at both ends".to_string(),
            });
        }
        check_order(start, end)?;

        self.bounds = Some(Bounds::Interval {
            literal: value.to_string(),
            start,
            end,
        });
        Ok(())
    }

    /// Removes both representations.
    pub fn clear(&mut self) {
        self.bounds = None;
    }

    fn explicit_start(&self) -> Result<Option<NaiveDate>> {
        match &self.bounds {
            Some(Bounds::Interval { .. }) => Err(conflict_with_interval()),
            Some(Bounds::Dates { start, .. }) => Ok(*start),
            None => Ok(None),
        }
    }

    fn explicit_end(&self) -> Result<Option<NaiveDate>> {
        match &self.bounds {
            Some(Bounds::Interval { .. }) => Err(conflict_with_interval()),
            Some(Bounds::Dates { end, .. }) => Ok(*end),
            None => Ok(None),
        }
    }
}

fn conflict_with_interval() -> DcatError {
    DcatError::ConflictingTemporalRepresentation(
        "an interval is already set; clear it before setting start or end dates".to_string(),
    )
}

fn parse_bound(value: &str) -> Result<Option<NaiveDate>> {
    match value.trim() {
        ".." | "" => Ok(None),
        date => parse_date(date).map(Some),
    }
}

fn check_order(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Result<()> {
    match (start, end) {
        (Some(start), Some(end)) if start > end => {
            Err(DcatError::InvalidDateInterval { start, end })
        }
        _ => Ok(()),
    }
}

impl Resource for PeriodOfTime {
    fn resource_type(&self) -> NamedNodeRef<'static> {
        dct::PERIOD_OF_TIME_CLASS
    }

    fn identity(&self) -> &Identity {
        &self.identity
    }

    fn identity_mut(&mut self) -> &mut Identity {
        &mut self.identity
    }

    fn contribute(&self, subject: &NamedNode, builder: &mut GraphBuilder<'_>) {
        builder.add_date(subject, dcat::START_DATE, self.start_date());
        builder.add_date(subject, dcat::END_DATE, self.end_date());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dcat::rdf::{build_graph, ConversionOptions};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("2020-03-01").unwrap(), date(2020, 3, 1));
        for bad in ["2020-02-30", "01.03.2020", "2020-03-01T00:00:00", ""] {
            assert!(matches!(parse_date(bad), Err(DcatError::InvalidDate { .. })), "{}", bad);
        }
    }

    #[test]
    fn test_start_and_end_dates() {
        let mut period = PeriodOfTime::new();
        period.set_start_date("2019-12-31").unwrap();
        period.set_end_date("2020-12-31").unwrap();
        assert_eq!(period.start_date(), Some(date(2019, 12, 31)));
        assert_eq!(period.end_date(), Some(date(2020, 12, 31)));
        assert!(period.interval().is_none());
    }

    #[test]
    fn test_start_after_end_is_rejected() {
        let mut period = PeriodOfTime::new();
        period.set_end_date("2019-12-31").unwrap();
        let result = period.set_start_date("2020-01-01");
        assert!(matches!(result, Err(DcatError::InvalidDateInterval { .. })));
        assert!(period.start_date().is_none());

        let mut period = PeriodOfTime::new();
        period.set_start_date("2020-01-01").unwrap();
        assert!(matches!(
            period.set_end_date("2019-12-31"),
            Err(DcatError::InvalidDateInterval { .. })
        ));
    }

    #[test]
    fn test_same_day_period_is_allowed() {
        let mut period = PeriodOfTime::new();
        period.set_start_date("2020-01-01").unwrap();
        period.set_end_date("2020-01-01").unwrap();
    }

    #[test]
    fn test_interval() {
        let mut period = PeriodOfTime::new();
        period.set_interval("2019-01-01/..").unwrap();
        assert_eq!(period.start_date(), Some(date(2019, 1, 1)));
        assert!(period.end_date().is_none());
        assert_eq!(period.interval(), Some("2019-01-01/.."));
    }

    #[test]
    fn test_invalid_intervals() {
        let mut period = PeriodOfTime::new();
        assert!(matches!(period.set_interval("2019-01-01"), Err(DcatError::InvalidDate { .. })));
        assert!(matches!(period.set_interval("../.."), Err(DcatError::InvalidDate { .. })));
        assert!(matches!(
            period.set_interval("2020-01-01/2019-01-01"),
            Err(DcatError::InvalidDateInterval { .. })
        ));
        assert!(period.interval().is_none());
    }

    #[test]
    fn test_conflicting_representations() {
        let mut period = PeriodOfTime::new();
        period.set_start_date("2019-01-01").unwrap();
        assert!(matches!(
            period.set_interval("2019-01-01/2020-01-01"),
            Err(DcatError::ConflictingTemporalRepresentation(_))
        ));

        let mut period = PeriodOfTime::new();
        period.set_interval("2019-01-01/2020-01-01").unwrap();
        assert!(matches!(
            period.set_end_date("2020-01-01"),
            Err(DcatError::ConflictingTemporalRepresentation(_))
        ));

        period.clear();
        period.set_end_date("2020-01-01").unwrap();
    }

    #[test]
    fn test_period_triples() {
        let mut period = PeriodOfTime::with_identifier("http://example.com/periods/1").unwrap();
        period.set_interval("2019-01-01/2020-06-30").unwrap();

        let graph = build_graph(&period, &ConversionOptions::default()).unwrap();
        let s = "http://example.com/periods/1";
        assert_eq!(graph.triples_for_subject(s).count(), 3);
        assert_eq!(graph.objects(s, dcat::START_DATE.as_str()).count(), 1);
        assert_eq!(graph.objects(s, dcat::END_DATE.as_str()).count(), 1);
    }
}
