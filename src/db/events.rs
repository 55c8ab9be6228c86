use sqlx::{PgExecutor, PgPool};

use crate::models::event::Event;

/// Check whether an event snapshot is already stored
pub async fn event_exists<'e>(
    executor: impl PgExecutor<'e>,
    event_id: i64,
) -> Result<bool, sqlx::Error> {
    sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM events WHERE id = $1)")
        .bind(event_id)
        .fetch_one(executor)
        .await
}

/// Insert an event snapshot. Returns `false` when a concurrent request
/// stored the same id first.
pub async fn insert_event<'e>(
    executor: impl PgExecutor<'e>,
    event: &Event,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        r#"
        INSERT INTO events (
            id, sport_id, league_id, league_name, starts, home, away,
            event_type, resulting_unit,
            money_line_home, money_line_draw, money_line_away
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
        ON CONFLICT (id) DO NOTHING
        "#,
    )
    .bind(event.id)
    .bind(event.sport_id)
    .bind(event.league_id)
    .bind(&event.league_name)
    .bind(event.starts)
    .bind(&event.home)
    .bind(&event.away)
    .bind(&event.event_type)
    .bind(&event.resulting_unit)
    .bind(event.money_line_home)
    .bind(event.money_line_draw)
    .bind(event.money_line_away)
    .execute(executor)
    .await?;

    Ok(result.rows_affected() == 1)
}

/// Get a stored event snapshot by id
pub async fn get_event(pool: &PgPool, event_id: i64) -> Result<Option<Event>, sqlx::Error> {
    sqlx::query_as::<_, Event>(
        r#"
        SELECT id, sport_id, league_id, league_name, starts, home, away,
               event_type, resulting_unit,
               money_line_home, money_line_draw, money_line_away
        FROM events
        WHERE id = $1
        "#,
    )
    .bind(event_id)
    .fetch_optional(pool)
    .await
}
