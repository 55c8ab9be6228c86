use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::models::common::MalformedPayload;

/// Key of the full-game period in the upstream `periods` map.
pub const PERIOD_ZERO: &str = "num_0";

/// Row of the `events` table.
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct Event {
    pub id: i64,
    pub sport_id: Option<i32>,
    pub league_id: Option<i64>,
    pub league_name: Option<String>,
    pub starts: Option<DateTime<Utc>>,
    pub home: Option<String>,
    pub away: Option<String>,
    pub event_type: Option<String>,
    pub resulting_unit: Option<String>,
    pub money_line_home: Option<f64>,
    pub money_line_draw: Option<f64>,
    pub money_line_away: Option<f64>,
}

/// Event object as returned by the odds provider's details endpoint.
#[derive(Debug, Deserialize)]
pub struct UpstreamEvent {
    pub event_id: i64,
    pub sport_id: Option<i32>,
    pub league_id: Option<i64>,
    pub league_name: Option<String>,
    pub starts: Option<String>,
    pub home: Option<String>,
    pub away: Option<String>,
    pub event_type: Option<String>,
    pub resulting_unit: Option<String>,
    pub periods: Option<Map<String, Value>>,
}

#[derive(Debug, Deserialize, PartialEq)]
pub struct MoneyLine {
    pub home: Option<f64>,
    pub draw: Option<f64>,
    pub away: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct Period {
    money_line: Option<MoneyLine>,
}

/// Read the upstream identifier without mapping the rest of the object.
pub fn event_id_of(event: &Value) -> Result<i64, MalformedPayload> {
    event
        .get("event_id")
        .and_then(Value::as_i64)
        .ok_or_else(|| MalformedPayload::new("event without an integer event_id"))
}

impl Event {
    pub fn from_upstream(event: &Value) -> Result<Self, MalformedPayload> {
        let upstream: UpstreamEvent = serde_json::from_value(event.clone())
            .map_err(|e| MalformedPayload::new(format!("event object: {}", e)))?;
        let money_line = upstream.period_zero_money_line()?;
        let starts = upstream.starts.as_deref().map(parse_starts).transpose()?;

        Ok(Self {
            id: upstream.event_id,
            sport_id: upstream.sport_id,
            league_id: upstream.league_id,
            league_name: upstream.league_name,
            starts,
            home: upstream.home,
            away: upstream.away,
            event_type: upstream.event_type,
            resulting_unit: upstream.resulting_unit,
            money_line_home: money_line.home,
            money_line_draw: money_line.draw,
            money_line_away: money_line.away,
        })
    }
}

impl UpstreamEvent {
    fn period_zero_money_line(&self) -> Result<MoneyLine, MalformedPayload> {
        let period = self
            .periods
            .as_ref()
            .and_then(|periods| periods.get(PERIOD_ZERO))
            .ok_or_else(|| {
                MalformedPayload::new(format!("event {} has no {} period", self.event_id, PERIOD_ZERO))
            })?;
        let period: Period = serde_json::from_value(period.clone())
            .map_err(|e| MalformedPayload::new(format!("event {} period: {}", self.event_id, e)))?;

        period.money_line.ok_or_else(|| {
            MalformedPayload::new(format!("event {} has no money_line", self.event_id))
        })
    }
}

/// Start times come with or without an offset; naive ones are UTC.
fn parse_starts(raw: &str) -> Result<DateTime<Utc>, MalformedPayload> {
    if let Ok(starts) = DateTime::parse_from_rfc3339(raw) {
        return Ok(starts.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|naive| naive.and_utc())
        .map_err(|e| MalformedPayload::new(format!("invalid start time {:?}: {}", raw, e)))
}
