use sqlx::{PgExecutor, PgPool};

use crate::models::video::{NewVideo, Video};

/// Check whether a video snapshot is already stored
pub async fn video_exists<'e>(
    executor: impl PgExecutor<'e>,
    video_id: &str,
) -> Result<bool, sqlx::Error> {
    sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM video_details WHERE video_id = $1)")
        .bind(video_id)
        .fetch_one(executor)
        .await
}

/// Insert a video snapshot, ignoring a row stored concurrently under the
/// same video id.
pub async fn insert_video<'e>(
    executor: impl PgExecutor<'e>,
    video: &NewVideo,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        r#"
        INSERT INTO video_details (
            video_id, title, length_seconds, channel_id, short_description,
            view_count, thumbnail_url, author
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        ON CONFLICT (video_id) DO NOTHING
        "#,
    )
    .bind(&video.video_id)
    .bind(&video.title)
    .bind(video.length_seconds)
    .bind(&video.channel_id)
    .bind(&video.short_description)
    .bind(video.view_count)
    .bind(&video.thumbnail_url)
    .bind(&video.author)
    .execute(executor)
    .await?;

    Ok(result.rows_affected() == 1)
}

/// Get a stored video snapshot by its upstream id
pub async fn get_video(pool: &PgPool, video_id: &str) -> Result<Option<Video>, sqlx::Error> {
    sqlx::query_as::<_, Video>(
        r#"
        SELECT id, video_id, title, length_seconds, channel_id, short_description,
               view_count, thumbnail_url, author, publish_date
        FROM video_details
        WHERE video_id = $1
        "#,
    )
    .bind(video_id)
    .fetch_optional(pool)
    .await
}
